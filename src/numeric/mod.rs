// ============================================================================
// Numeric Module
// Scale factors, rounding and errors shared by every amount type
// ============================================================================
//
// This module provides:
// - pow10 / checked_pow10: scale factors for a number of decimal places
// - round / round_real: the rounding engine, usable on its own
// - RoundingMode and its type-level policies
// - NumericError: error types for arithmetic, rounding and parsing
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Integer rounding is exact; wide intermediates where headroom is needed

mod errors;
mod rounding;
mod scale;

pub use errors::{NumericError, NumericResult};
pub use rounding::{policy, round, round_real, RoundingMode, RoundingPolicy};
pub use scale::{checked_pow10, pow10, MAX_DECIMALS};

pub(crate) use rounding::round_wide;
pub(crate) use scale::pow10_wide;
