use crate::types::{Exponent, UNBOUNDED};

/// \return x + y, or UNBOUNDED if the sum would exceed it.
/// An UNBOUNDED operand absorbs any non-negative addend.
#[inline]
pub fn sat_add(x: Exponent, y: Exponent) -> Exponent {
    x.saturating_add(y)
}

/// \return x * y, or UNBOUNDED if the product would exceed it.
/// A zero operand yields zero, even against UNBOUNDED.
#[inline]
pub fn sat_mul(x: Exponent, y: Exponent) -> Exponent {
    if x == 0 || y == 0 {
        return 0;
    }
    match x.checked_mul(y) {
        Some(product) => product,
        // Only a positive overflow saturates to the sentinel.
        None if (x > 0) == (y > 0) => UNBOUNDED,
        None => Exponent::MIN,
    }
}
