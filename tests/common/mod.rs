#![allow(clippy::uninlined_format_args)]

use renorm::{Exprs, NodeId};

/// Test that \p text fails to parse.
#[track_caller]
pub fn test_parse_fails(text: &str) {
    let mut exprs: Exprs = Exprs::new();
    let res = exprs.parse(text);
    assert!(res.is_err(), "Expression should not have parsed: {}", text);
}

/// \return the rendered normal form of \p text, in a fresh arena.
#[track_caller]
pub fn nf(text: &str) -> String {
    TestExprs::new().normalize(text)
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    #[track_caller]
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

/// An arena that parses its inputs, for tests that share nodes between
/// expressions.
#[derive(Debug, Default)]
pub struct TestExprs {
    pub exprs: Exprs,
}

impl TestExprs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse \p text, panicking on failure.
    #[track_caller]
    pub fn parse(&mut self, text: &str) -> NodeId {
        match self.exprs.parse(text) {
            Ok(id) => id,
            Err(err) => panic!("Failed to parse {:?}: {}", text, err),
        }
    }

    /// \return the rendered normal form of \p text.
    #[track_caller]
    pub fn normalize(&mut self, text: &str) -> String {
        let id = self.parse(text);
        self.exprs.render_normal(id)
    }

    /// Test that \p text is already in normal form.
    #[track_caller]
    pub fn test_normal(&mut self, text: &str) {
        let id = self.parse(text);
        assert!(
            self.exprs.in_normal_form(id),
            "{} should be normal, but normalizes to {}",
            text,
            self.exprs.render_normal(id)
        );
    }

    /// Test that \p lhs and \p rhs have the same normal form.
    #[track_caller]
    pub fn test_equivalent(&mut self, lhs: &str, rhs: &str) {
        let (l, r) = (self.parse(lhs), self.parse(rhs));
        assert!(
            self.exprs.norm_equals(l, r),
            "{} and {} normalize to {} and {}",
            lhs,
            rhs,
            self.exprs.render_normal(l),
            self.exprs.render_normal(r)
        );
    }
}
