// ============================================================================
// Scale Factors
// Powers of ten used to move between whole units and scaled integers
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Largest number of decimal places whose scale factor fits an i64.
pub const MAX_DECIMALS: u8 = 18;

/// Compute 10^n at compile time.
///
/// Callers must keep `n <= MAX_DECIMALS`; larger exponents overflow and fail
/// const evaluation.
pub const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Checked 10^n for exponents only known at run time.
#[inline]
pub fn checked_pow10(n: u8) -> NumericResult<i64> {
    10i64
        .checked_pow(u32::from(n))
        .ok_or(NumericError::Overflow)
}

/// 10^n in 128 bits, for intermediates that must not overflow.
#[inline]
pub(crate) fn pow10_wide(n: u8) -> NumericResult<i128> {
    10i128
        .checked_pow(u32::from(n))
        .ok_or(NumericError::Overflow)
}
