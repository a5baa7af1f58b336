// ============================================================================
// Rounding Engine
// Integer and real rounding under a configurable rounding mode
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scale::pow10_wide;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy applied when a value is not exact at the target precision.
///
/// Directed modes (`Up`, `Down`) are sign-agnostic: they move toward positive
/// or negative infinity. `HalfUp`, `HalfDown`, `HalfEven` and `HalfOdd` only
/// differ on ties. `HalfToZero` and `HalfFromZero` break ties by the sign of
/// the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Toward positive infinity whenever a remainder exists
    Up,
    /// Toward negative infinity
    Down,
    /// Nearest; ties go up
    #[default]
    HalfUp,
    /// Nearest; ties go down
    HalfDown,
    /// Nearest; ties go to the even neighbour
    HalfEven,
    /// Nearest; ties go to the odd neighbour
    HalfOdd,
    /// Nearest; ties go toward zero
    HalfToZero,
    /// Nearest; ties go away from zero
    HalfFromZero,
    /// Never round: inexact input is an error
    Unnecessary,
}

impl RoundingMode {
    pub const CEILING: Self = Self::Up;
    pub const FLOOR: Self = Self::Down;
    pub const TRUNC: Self = Self::Down;

    /// Every mode, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Up,
        Self::Down,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::HalfOdd,
        Self::HalfToZero,
        Self::HalfFromZero,
        Self::Unnecessary,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
            Self::HalfOdd => "HALF_ODD",
            Self::HalfToZero => "HALF_TO_ZERO",
            Self::HalfFromZero => "HALF_FROM_ZERO",
            Self::Unnecessary => "UNNECESSARY",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Type-Level Policies
// ============================================================================

/// A rounding mode lifted to the type level, so that it can parameterize
/// [`Amount`](crate::money::Amount).
pub trait RoundingPolicy: 'static {
    const MODE: RoundingMode;
}

/// Marker types, one per [`RoundingMode`].
pub mod policy {
    use super::{RoundingMode, RoundingPolicy};

    macro_rules! rounding_policy {
        ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct $name;

                impl RoundingPolicy for $name {
                    const MODE: RoundingMode = RoundingMode::$name;
                }
            )*
        };
    }

    rounding_policy!(
        /// Type-level [`RoundingMode::Up`]
        Up,
        /// Type-level [`RoundingMode::Down`]
        Down,
        /// Type-level [`RoundingMode::HalfUp`]
        HalfUp,
        /// Type-level [`RoundingMode::HalfDown`]
        HalfDown,
        /// Type-level [`RoundingMode::HalfEven`]
        HalfEven,
        /// Type-level [`RoundingMode::HalfOdd`]
        HalfOdd,
        /// Type-level [`RoundingMode::HalfToZero`]
        HalfToZero,
        /// Type-level [`RoundingMode::HalfFromZero`]
        HalfFromZero,
        /// Type-level [`RoundingMode::Unnecessary`]
        Unnecessary,
    );

    pub type Ceiling = Up;
    pub type Floor = Down;
    pub type Trunc = Down;
}

// ============================================================================
// Rounding Functions
// ============================================================================

/// Decide whether an inexact value moves to its upper neighbour.
///
/// `half` compares the distance from the lower neighbour with half the step.
fn rounds_up(
    mode: RoundingMode,
    half: Ordering,
    lower_is_odd: bool,
    negative: bool,
) -> NumericResult<bool> {
    let nearest = |on_tie: bool| match half {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => on_tie,
    };

    let up = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::HalfUp => nearest(true),
        RoundingMode::HalfDown => nearest(false),
        RoundingMode::HalfEven => nearest(lower_is_odd),
        RoundingMode::HalfOdd => nearest(!lower_is_odd),
        RoundingMode::HalfToZero => nearest(negative),
        RoundingMode::HalfFromZero => nearest(!negative),
        RoundingMode::Unnecessary => {
            tracing::trace!("rounding required under UNNECESSARY mode");
            return Err(NumericError::ForbiddenRounding);
        },
    };
    Ok(up)
}

/// Round `value` to a multiple of `10^decimal_place`.
///
/// `decimal_place` is the number of low-order decimal digits to eliminate.
/// Values that are already exact come back unchanged under every mode.
///
/// # Errors
/// - `ForbiddenRounding` under `Unnecessary` when `value` is inexact
/// - `Overflow` if the rounded value does not fit an i64
///
/// # Example
/// ```
/// use money_amount::numeric::{round, RoundingMode};
///
/// assert_eq!(round(1005, 1, RoundingMode::HalfUp), Ok(1010));
/// assert_eq!(round(-25, 1, RoundingMode::HalfToZero), Ok(-20));
/// ```
pub fn round(value: i64, decimal_place: u8, mode: RoundingMode) -> NumericResult<i64> {
    let rounded = round_wide(i128::from(value), decimal_place, mode)?;
    i64::try_from(rounded).map_err(|_| NumericError::Overflow)
}

/// 128-bit variant of [`round`], used where the caller needs headroom.
pub(crate) fn round_wide(value: i128, decimal_place: u8, mode: RoundingMode) -> NumericResult<i128> {
    if decimal_place == 0 {
        return Ok(value);
    }

    let divisor = pow10_wide(decimal_place)?;
    let remainder = value.rem_euclid(divisor);
    if remainder == 0 {
        return Ok(value);
    }

    let quotient = value.div_euclid(divisor);
    let lower = value - remainder;
    let half = remainder.cmp(&(divisor - remainder));

    if rounds_up(mode, half, quotient.rem_euclid(2) == 1, value < 0)? {
        lower.checked_add(divisor).ok_or(NumericError::Overflow)
    } else {
        Ok(lower)
    }
}

/// Round a real number to an integer.
///
/// Every mode is supported; `Unnecessary` fails when `value` has a
/// fractional part.
///
/// # Errors
/// - `InvalidInput` if `value` is NaN or infinite
/// - `ForbiddenRounding` under `Unnecessary` when `value` is not integral
/// - `Overflow` if the result does not fit an i64
pub fn round_real(value: f64, mode: RoundingMode) -> NumericResult<i64> {
    if !value.is_finite() {
        return Err(NumericError::InvalidInput);
    }

    let lower = value.floor();
    let fraction = value - lower;

    let rounded = if fraction == 0.0 {
        value
    } else {
        let half = fraction.total_cmp(&0.5);
        let lower_is_odd = lower % 2.0 != 0.0;
        if rounds_up(mode, half, lower_is_odd, value < 0.0)? {
            lower + 1.0
        } else {
            lower
        }
    };

    real_to_i64(rounded)
}

/// Convert an integral f64 to i64 without saturating.
fn real_to_i64(value: f64) -> NumericResult<i64> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if value >= LIMIT || value < -LIMIT {
        Err(NumericError::Overflow)
    } else {
        Ok(value as i64)
    }
}

// ============================================================================
// Tests
// ============================================================================
