//! Parser from infix expression text to nodes

use crate::ir::{Exprs, EMPTY};
use crate::symbols::Payload;
use crate::types::{Exponent, NodeId};
use std::fmt;
use std::iter::Peekable;

/// Represents an error encountered while parsing an expression.
/// The text contains a human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub text: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::error::Error for Error {}

fn error<S, T>(text: S) -> Result<T, Error>
where
    S: ToString,
{
    Err(Error {
        text: text.to_string(),
    })
}

/// \return whether \p c may appear in a symbol name.
fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '|' | '.' | '?' | '+' | '*' | '^' | '_' | '~')
}

/// Fold \p nodes into a right-nested tree through \p make.
fn nest_right<F>(nodes: Vec<NodeId>, mut make: F) -> NodeId
where
    F: FnMut(NodeId, NodeId) -> NodeId,
{
    nodes
        .into_iter()
        .rev()
        .reduce(|right, left| make(left, right))
        .unwrap_or(EMPTY)
}

/// Represents the state used to parse an expression.
struct Parser<'a, 'e, S> {
    /// The remaining input.
    input: Peekable<std::str::Chars<'a>>,

    /// Where parsed nodes are built.
    exprs: &'e mut Exprs<S>,
}

impl<S> Parser<'_, '_, S>
where
    S: Payload + for<'s> From<&'s str>,
{
    /// Consume a character which the caller has peeked.
    fn consume(&mut self, c: char) {
        let nc = self.input.next();
        debug_assert!(nc == Some(c), "char was not next");
    }

    fn skip_whitespace(&mut self) {
        while self.input.next_if(|c| c.is_whitespace()).is_some() {}
    }

    /// If the next token is the char c, consume it and return true.
    /// Otherwise return false.
    fn try_consume(&mut self, c: char) -> bool {
        self.skip_whitespace();
        self.input.next_if_eq(&c).is_some()
    }

    /// Peek at the next character that is not whitespace.
    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input.peek().copied()
    }

    fn try_parse(&mut self) -> Result<NodeId, Error> {
        // Everything must be consumed; a leftover closing paren is unbalanced.
        let body = self.consume_choice()?;
        match self.peek() {
            Some(')') => error("Unbalanced parenthesis"),
            Some(c) => error(format!("Unexpected char: {}", c)),
            None => Ok(body),
        }
    }

    /// choice := concat ('|' concat)*
    fn consume_choice(&mut self) -> Result<NodeId, Error> {
        let mut terms = vec![self.consume_concat()?];
        while self.try_consume('|') {
            terms.push(self.consume_concat()?);
        }
        let exprs = &mut *self.exprs;
        Ok(nest_right(terms, |left, right| exprs.make_choice(left, right)))
    }

    /// concat := postfix ('.' postfix)*
    fn consume_concat(&mut self) -> Result<NodeId, Error> {
        let mut factors = vec![self.consume_postfix()?];
        while self.try_consume('.') {
            factors.push(self.consume_postfix()?);
        }
        let exprs = &mut *self.exprs;
        Ok(nest_right(factors, |left, right| exprs.make_concat(left, right)))
    }

    /// postfix := atom ('?' | '+' | '*' | '^' int | '_' int ('^' int | '~'))*
    fn consume_postfix(&mut self) -> Result<NodeId, Error> {
        let mut node = self.consume_atom()?;
        loop {
            node = match self.peek() {
                Some('?') => {
                    self.consume('?');
                    self.exprs.make_option(node)
                }
                Some('+') => {
                    self.consume('+');
                    self.exprs.make_plus(node)
                }
                Some('*') => {
                    self.consume('*');
                    self.exprs.make_star(node)
                }
                Some('^') => {
                    self.consume('^');
                    let power = self.consume_exponent()?;
                    self.exprs.make_power(node, power)
                }
                Some('_') => {
                    self.consume('_');
                    let lower = self.consume_exponent()?;
                    if self.try_consume('~') {
                        self.exprs.make_range_from(node, lower)
                    } else if self.try_consume('^') {
                        let upper = self.consume_exponent()?;
                        self.exprs.make_range(node, lower, upper)
                    } else {
                        return error("Range lower bound must be followed by '^' or '~'");
                    }
                }
                _ => return Ok(node),
            }
        }
    }

    /// atom := '(' ')' | '(' choice ')' | symbol
    fn consume_atom(&mut self) -> Result<NodeId, Error> {
        match self.peek() {
            Some('(') => {
                self.consume('(');
                if self.try_consume(')') {
                    return Ok(EMPTY);
                }
                let contents = self.consume_choice()?;
                if !self.try_consume(')') {
                    return error("Unbalanced parenthesis");
                }
                Ok(contents)
            }
            Some(c) if is_symbol_char(c) => {
                let mut name = String::new();
                while let Some(c) = self.input.next_if(|&c| is_symbol_char(c)) {
                    name.push(c);
                }
                Ok(self.exprs.symbol(S::from(name.as_str())))
            }
            Some(c) => error(format!("Missing operand before '{}'", c)),
            None => error("Missing operand at end of input"),
        }
    }

    /// int := '-'? digit+
    fn consume_exponent(&mut self) -> Result<Exponent, Error> {
        self.skip_whitespace();
        let negative = self.input.next_if_eq(&'-').is_some();
        let mut result: i64 = 0;
        let mut char_count = 0;
        while let Some(c) = self.input.next_if(char::is_ascii_digit) {
            char_count += 1;
            // Saturate here; the range check below rejects the result.
            result = result
                .saturating_mul(10)
                .saturating_add(i64::from(c as u8 - b'0'));
        }
        if char_count == 0 {
            return error("Invalid exponent: expected an integer");
        }
        if negative {
            result = -result;
        }
        match Exponent::try_from(result) {
            Ok(exponent) => Ok(exponent),
            Err(_) => error(format!("Invalid exponent: {} is out of range", result)),
        }
    }
}

impl<S> Exprs<S>
where
    S: Payload + for<'s> From<&'s str>,
{
    /// Parse \p text in the syntax produced by [`render`](Exprs::render).
    ///
    /// Symbols are runs of characters other than whitespace and `()|.?+*^_~`;
    /// `()` is the empty expression. Choice and concatenation nest to the
    /// right. Whitespace between tokens is ignored.
    pub fn parse(&mut self, text: &str) -> Result<NodeId, Error> {
        let mut parser = Parser {
            input: text.chars().peekable(),
            exprs: self,
        };
        parser.try_parse()
    }
}
