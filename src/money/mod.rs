// ============================================================================
// Money Module
// Currency-tagged fixed-point amounts
// ============================================================================
//
// This module provides:
// - Amount<C, D, R>: monetary amount with type-level currency, decimal places
//   and rounding policy
// - Currency: trait implemented by zero-sized currency tags
// - FormatSpec / OutputMode: configuration for formatted output
// - Conversions to and from rust_decimal::Decimal

mod amount;
mod conversion;
mod currency;
mod format;

pub use amount::{Amount, Dollars, Euros};
pub use currency::{Chf, Currency, Eur, Gbp, Jpy, Usd};
pub use format::{FormatSpec, OutputMode};
