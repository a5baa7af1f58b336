// ============================================================================
// Money Amount Library
// Currency-tagged fixed-point amounts with checked arithmetic and rounding
// ============================================================================

//! # Money Amount
//!
//! Fixed-point monetary amounts backed by an `i64`, parameterized at the type
//! level by currency, number of decimal places and rounding mode.
//!
//! ## Features
//!
//! - **Checked arithmetic**: overflow is an error, never a wrapped value
//! - **Type-level currency tags**: `Amount<Usd>` and `Amount<Eur>` never mix
//! - **Nine rounding modes**, usable standalone through [`numeric::round`]
//! - **Cross-precision ordering** with [`Amount::compare_to`](money::Amount::compare_to)
//! - **Text input and output** with configurable display precision
//!
//! ## Example
//!
//! ```rust
//! use money_amount::prelude::*;
//!
//! let price: Amount<Usd> = "19.99".parse()?;
//! let mut total = price.checked_mul_int(3)?;
//! total.try_add_assign(Amount::<Usd>::from_f64(0.015)?)?;
//!
//! assert_eq!(total.to_string(), "59.9850USD");
//! assert_eq!(format!("{:.2}", total), "59.99USD");
//! assert_eq!(total.to_whole_units_string()?, "60USD");
//!
//! // Overflow is reported and leaves the value untouched
//! let mut max = Amount::<Usd>::MAX;
//! assert_eq!(max.try_add_assign(Amount::<Usd>::ONE), Err(NumericError::Overflow));
//! assert_eq!(max, Amount::<Usd>::MAX);
//! # Ok::<(), NumericError>(())
//! ```
//!
//! Different currencies cannot be combined:
//!
//! ```compile_fail
//! use money_amount::prelude::*;
//!
//! let usd = Amount::<Usd>::ONE;
//! let eur = Amount::<Eur>::ONE;
//! let _ = usd.checked_add(eur);
//! ```
//!
//! ```compile_fail
//! use money_amount::prelude::*;
//!
//! let _ = Amount::<Usd>::ONE < Amount::<Eur>::ONE;
//! ```
//!
//! Nor can amounts with different decimal places be added or tested for
//! equality; they can only be ordered with `compare_to`:
//!
//! ```compile_fail
//! use money_amount::prelude::*;
//!
//! let _ = Amount::<Usd, 2>::ONE == Amount::<Usd, 4>::ONE;
//! ```
//!
//! ```compile_fail
//! use money_amount::prelude::*;
//!
//! let _ = Amount::<Usd, 2>::ONE.checked_add(Amount::<Usd, 4>::ONE);
//! ```

pub mod money;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{
        Amount, Chf, Currency, Dollars, Eur, Euros, FormatSpec, Gbp, Jpy, OutputMode, Usd,
    };
    pub use crate::numeric::{policy, round, round_real, NumericError, NumericResult, RoundingMode};
}
