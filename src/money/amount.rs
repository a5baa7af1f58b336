// ============================================================================
// Money Amount
// Fixed-point monetary amount with type-level currency, precision and rounding
// ============================================================================

use super::currency::{Currency, Eur, Usd};
use crate::numeric::policy::HalfUp;
use crate::numeric::{
    checked_pow10, pow10, round, round_real, round_wide, NumericError, NumericResult,
    RoundingMode, RoundingPolicy, MAX_DECIMALS,
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Fixed-point monetary amount.
///
/// Internally stores `value × 10^D` as an i64.
///
/// # Type Parameters
/// - `C`: currency tag. Amounts of different currencies never mix.
/// - `D`: number of decimal places (0-18). Default is 4.
/// - `R`: rounding policy used whenever a value must be rounded
///   (floating-point input, narrowing, display). Default is `HalfUp`.
///
/// Amounts with the same `C` and `D` compare and add regardless of `R`.
/// Amounts that differ only in `D` can be ordered with
/// [`compare_to`](Self::compare_to) but not added or tested for equality.
///
/// # Value Range
/// With D=4 (default):
/// - Minimum: -922,337,203,685,477.5808
/// - Maximum: +922,337,203,685,477.5807
///
/// # Example
/// ```
/// use money_amount::money::{Amount, Usd};
///
/// let price: Amount<Usd> = "19.99".parse()?;
/// let total = price.checked_mul_int(3)?;
/// assert_eq!(total.to_string(), "59.9700USD");
/// # Ok::<(), money_amount::numeric::NumericError>(())
/// ```
#[repr(transparent)]
pub struct Amount<C, const D: u8 = 4, R = HalfUp> {
    scaled: i64,
    marker: PhantomData<fn() -> (C, R)>,
}

impl<C: Currency, const D: u8, R: RoundingPolicy> Amount<C, D, R> {
    /// The scale factor (10^D)
    pub const SCALE: i64 = {
        assert!(D <= MAX_DECIMALS, "at most 18 decimal places fit an i64");
        pow10(D)
    };

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = D;

    /// Rounding mode applied by this type
    pub const ROUNDING: RoundingMode = R::MODE;

    /// Zero value
    pub const ZERO: Self = Self::from_scaled(0);

    /// One whole unit
    pub const ONE: Self = Self::from_scaled(Self::SCALE);

    /// Maximum representable value
    pub const MAX: Self = Self::from_scaled(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self::from_scaled(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the scaled representation (`value × 10^D`).
    #[inline]
    pub const fn from_scaled(scaled: i64) -> Self {
        Self {
            scaled,
            marker: PhantomData,
        }
    }

    /// Create from a whole number of units.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    /// Create from a floating-point value, rounding with `R`.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinity
    /// - `ForbiddenRounding` if `R` is `Unnecessary` and the value has more
    ///   than `D` decimals
    /// - `Overflow` if the scaled value does not fit an i64
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        round_real(value * Self::SCALE as f64, R::MODE).map(Self::from_scaled)
    }

    #[inline]
    pub(crate) fn from_wide(value: i128) -> NumericResult<Self> {
        i64::try_from(value)
            .map(Self::from_scaled)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the scaled internal value (`value × 10^D`).
    #[inline]
    pub const fn scaled_value(self) -> i64 {
        self.scaled
    }

    /// Currency tag of this amount.
    #[inline]
    pub const fn currency(self) -> &'static str {
        C::CODE
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.scaled / Self::SCALE
    }

    /// Get the fractional part as a positive scaled value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.scaled % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.scaled == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.scaled > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.scaled < 0
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Checked negation. Fails only for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.scaled
            .checked_neg()
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    /// Absolute value. Fails only for `MIN`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.scaled
            .checked_abs()
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic with Amounts
    // ========================================================================

    /// Checked addition of an amount in the same currency and precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add<R2: RoundingPolicy>(self, rhs: Amount<C, D, R2>) -> NumericResult<Self> {
        self.scaled
            .checked_add(rhs.scaled)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction of an amount in the same currency and precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub<R2: RoundingPolicy>(self, rhs: Amount<C, D, R2>) -> NumericResult<Self> {
        self.scaled
            .checked_sub(rhs.scaled)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic with Integer Scalars
    // ========================================================================

    /// Multiply by a unitless integer.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        self.scaled
            .checked_mul(rhs)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    /// Divide by a unitless integer, truncating toward zero.
    ///
    /// Precision lost to truncation is not reported.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` for `MIN / -1`
    #[inline]
    pub fn checked_div_int(self, rhs: i64) -> NumericResult<Self> {
        if rhs == 0 {
            return Err(NumericError::DivisionByZero);
        }
        self.scaled
            .checked_div(rhs)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    /// Remainder of the whole-unit part divided by `rhs`.
    ///
    /// The fractional part is ignored: `10.75 % 4` is `2`, not `2.75`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem_int(self, rhs: i64) -> NumericResult<Self> {
        if rhs == 0 {
            return Err(NumericError::DivisionByZero);
        }
        // MIN % -1 is 0; wrapping_rem avoids the spurious overflow
        let whole = self.integer_part().wrapping_rem(rhs);
        whole
            .checked_mul(Self::SCALE)
            .map(Self::from_scaled)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic with Real Scalars
    // ========================================================================
    //
    // The real operand is first turned into an amount of this type (rounding
    // with R), then combined as a fixed-point value.

    /// Multiply by a real factor.
    ///
    /// # Example
    /// ```
    /// use money_amount::money::{Amount, Usd};
    /// use money_amount::numeric::policy::Up;
    ///
    /// let a: Amount<Usd> = Amount::from_integer(300)?;
    /// let b: Amount<Usd, 4, Up> = Amount::from_integer(300)?;
    /// // 1/3 is stored as 0.3333 under HALF_UP and 0.3334 under UP
    /// assert_eq!(a.checked_mul_f64(1.0 / 3.0)?.to_string(), "99.9900USD");
    /// assert_eq!(b.checked_mul_f64(1.0 / 3.0)?.to_string(), "100.0200USD");
    /// # Ok::<(), money_amount::numeric::NumericError>(())
    /// ```
    pub fn checked_mul_f64(self, rhs: f64) -> NumericResult<Self> {
        let factor = Self::from_f64(rhs)?;
        let product = i128::from(self.scaled) * i128::from(factor.scaled);
        Self::from_wide(product / i128::from(Self::SCALE))
    }

    /// Divide by a real divisor, truncating toward zero.
    pub fn checked_div_f64(self, rhs: f64) -> NumericResult<Self> {
        let divisor = Self::from_f64(rhs)?;
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let numerator = i128::from(self.scaled) * i128::from(Self::SCALE);
        Self::from_wide(numerator / i128::from(divisor.scaled))
    }

    /// Fixed-point remainder of division by a real divisor.
    pub fn checked_rem_f64(self, rhs: f64) -> NumericResult<Self> {
        let divisor = Self::from_f64(rhs)?;
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_scaled(self.scaled.wrapping_rem(divisor.scaled)))
    }

    // ========================================================================
    // Compound Assignment
    // ========================================================================
    //
    // Each form stores the checked result on success and leaves `self`
    // untouched on failure.

    pub fn try_add_assign<R2: RoundingPolicy>(&mut self, rhs: Amount<C, D, R2>) -> NumericResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    pub fn try_sub_assign<R2: RoundingPolicy>(&mut self, rhs: Amount<C, D, R2>) -> NumericResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    pub fn try_mul_int_assign(&mut self, rhs: i64) -> NumericResult<()> {
        *self = self.checked_mul_int(rhs)?;
        Ok(())
    }

    pub fn try_div_int_assign(&mut self, rhs: i64) -> NumericResult<()> {
        *self = self.checked_div_int(rhs)?;
        Ok(())
    }

    pub fn try_rem_int_assign(&mut self, rhs: i64) -> NumericResult<()> {
        *self = self.checked_rem_int(rhs)?;
        Ok(())
    }

    pub fn try_mul_f64_assign(&mut self, rhs: f64) -> NumericResult<()> {
        *self = self.checked_mul_f64(rhs)?;
        Ok(())
    }

    pub fn try_div_f64_assign(&mut self, rhs: f64) -> NumericResult<()> {
        *self = self.checked_div_f64(rhs)?;
        Ok(())
    }

    pub fn try_rem_f64_assign(&mut self, rhs: f64) -> NumericResult<()> {
        *self = self.checked_rem_f64(rhs)?;
        Ok(())
    }

    // ========================================================================
    // Rounding and Precision
    // ========================================================================

    /// Round to `places` decimal places with `R`, keeping the type.
    ///
    /// Requests at or above `D` return the amount unchanged.
    pub fn round_to(self, places: u8) -> NumericResult<Self> {
        if places >= D {
            return Ok(self);
        }
        round(self.scaled, D - places, R::MODE).map(Self::from_scaled)
    }

    /// Convert to another number of decimal places.
    ///
    /// Widening multiplies the scaled value (checked); narrowing rounds
    /// with `R`.
    pub fn rescale<const D2: u8>(self) -> NumericResult<Amount<C, D2, R>> {
        match D2.cmp(&D) {
            Ordering::Equal => Ok(Amount::from_scaled(self.scaled)),
            Ordering::Greater => {
                self.scaled
                    .checked_mul(checked_pow10(D2 - D)?)
                    .map(Amount::from_scaled)
                    .ok_or(NumericError::Overflow)
            },
            Ordering::Less => {
                let divisor = checked_pow10(D - D2)?;
                let rounded = round_wide(i128::from(self.scaled), D - D2, R::MODE)?;
                Amount::from_wide(rounded / i128::from(divisor))
            },
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order against an amount of the same currency at any precision.
    ///
    /// The lower-precision side is rescaled up before comparing.
    ///
    /// # Errors
    /// Returns `Overflow` if the rescaled value does not fit an i64.
    pub fn compare_to<const D2: u8, R2: RoundingPolicy>(
        &self,
        other: &Amount<C, D2, R2>,
    ) -> NumericResult<Ordering> {
        if D >= D2 {
            let lifted = other
                .scaled
                .checked_mul(checked_pow10(D - D2)?)
                .ok_or(NumericError::Overflow)?;
            Ok(self.scaled.cmp(&lifted))
        } else {
            let lifted = self
                .scaled
                .checked_mul(checked_pow10(D2 - D)?)
                .ok_or(NumericError::Overflow)?;
            Ok(lifted.cmp(&other.scaled))
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<C, const D: u8, R> Clone for Amount<C, D, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const D: u8, R> Copy for Amount<C, D, R> {}

impl<C: Currency, const D: u8, R: RoundingPolicy> Default for Amount<C, D, R> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C, const D: u8, R, R2> PartialEq<Amount<C, D, R2>> for Amount<C, D, R>
where
    C: Currency,
    R: RoundingPolicy,
    R2: RoundingPolicy,
{
    #[inline]
    fn eq(&self, other: &Amount<C, D, R2>) -> bool {
        self.scaled == other.scaled
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> Eq for Amount<C, D, R> {}

impl<C, const D: u8, R, R2> PartialOrd<Amount<C, D, R2>> for Amount<C, D, R>
where
    C: Currency,
    R: RoundingPolicy,
    R2: RoundingPolicy,
{
    #[inline]
    fn partial_cmp(&self, other: &Amount<C, D, R2>) -> Option<Ordering> {
        Some(self.scaled.cmp(&other.scaled))
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> Ord for Amount<C, D, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.scaled.cmp(&other.scaled)
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> Hash for Amount<C, D, R> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scaled.hash(state);
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> TryFrom<f64> for Amount<C, D, R> {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> fmt::Debug for Amount<C, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount<{}, {}, {}>({:#}, scaled={})",
            C::CODE,
            D,
            R::MODE,
            self,
            self.scaled
        )
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// US dollars in cents
pub type Dollars = Amount<Usd, 2>;

/// Euros in cents
pub type Euros = Amount<Eur, 2>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::currency::{Gbp, Jpy};
    use crate::numeric::policy::{Down, HalfEven, Unnecessary, Up};
    use quickcheck::quickcheck;

    type Usd4 = Amount<Usd>;

    #[test]
    fn test_constants() {
        assert_eq!(Usd4::SCALE, 10_000);
        assert_eq!(Usd4::DECIMAL_PLACES, 4);
        assert_eq!(Usd4::ROUNDING, RoundingMode::HalfUp);
        assert_eq!(Usd4::ZERO.scaled_value(), 0);
        assert_eq!(Usd4::ONE.scaled_value(), 10_000);
        assert_eq!(Usd4::MAX.scaled_value(), i64::MAX);
        assert_eq!(Usd4::MIN.scaled_value(), i64::MIN);
        assert_eq!(Amount::<Jpy, 0>::SCALE, 1);
        assert_eq!(Amount::<Gbp, 18>::SCALE, 1_000_000_000_000_000_000);
        assert_eq!(Usd4::default(), Usd4::ZERO);
    }

    #[test]
    fn test_from_integer() {
        let x = Usd4::from_integer(100).unwrap();
        assert_eq!(x.scaled_value(), 1_000_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);
        assert_eq!(x.currency(), "USD");

        assert_eq!(
            Usd4::from_integer(i64::MAX / 1000),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_from_f64_rounds_with_policy() {
        assert_eq!(Usd4::from_f64(100.0001), Usd4::from_f64(100.00009));
        assert_eq!(Usd4::from_f64(100.0001).unwrap().scaled_value(), 1_000_001);

        assert_eq!(Amount::<Usd, 2, Down>::from_f64(1.239).unwrap().scaled_value(), 123);
        assert_eq!(Amount::<Usd, 2, Up>::from_f64(1.231).unwrap().scaled_value(), 124);
        assert_eq!(Amount::<Usd, 0, HalfEven>::from_f64(2.5).unwrap().scaled_value(), 2);
        assert_eq!(Amount::<Usd, 1, HalfEven>::from_f64(-0.25).unwrap().scaled_value(), -2);

        assert_eq!(Amount::<Usd, 0, Unnecessary>::from_f64(3.0).unwrap().scaled_value(), 3);
        assert_eq!(
            Amount::<Usd, 0, Unnecessary>::from_f64(3.5),
            Err(NumericError::ForbiddenRounding)
        );

        assert_eq!(Usd4::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(Usd4::from_f64(1e300), Err(NumericError::Overflow));
        assert_eq!(Usd4::try_from(2.5).unwrap().scaled_value(), 25_000);
    }

    #[test]
    fn test_checked_add_sub() {
        let a = Usd4::from_integer(100).unwrap();
        let b = Usd4::from_integer(30).unwrap();
        assert_eq!(a.checked_add(b).unwrap().integer_part(), 130);
        assert_eq!(a.checked_sub(b).unwrap().integer_part(), 70);
        assert_eq!(b.checked_sub(a).unwrap().integer_part(), -70);

        // Rounding policy does not matter for addition
        let c = Amount::<Usd, 4, Down>::from_integer(5).unwrap();
        assert_eq!(a.checked_add(c).unwrap().integer_part(), 105);
    }

    #[test]
    fn test_overflow_leaves_value_untouched() {
        let mut max = Usd4::MAX;
        assert_eq!(max.try_add_assign(Usd4::ONE), Err(NumericError::Overflow));
        assert_eq!(max, Usd4::MAX);

        let mut min = Usd4::MIN;
        assert_eq!(min.try_sub_assign(Usd4::ONE), Err(NumericError::Overflow));
        assert_eq!(min, Usd4::MIN);

        assert_eq!(max.checked_mul_int(2), Err(NumericError::Overflow));
        assert_eq!(max.checked_mul_f64(2.0), Err(NumericError::Overflow));
        assert_eq!(max.try_mul_f64_assign(2.0), Err(NumericError::Overflow));
        assert_eq!(max, Usd4::MAX);
    }

    #[test]
    fn test_integer_scalars() {
        let x: Usd4 = Usd4::from_scaled(105_000); // 10.5

        assert_eq!(x.checked_mul_int(3).unwrap().scaled_value(), 315_000);
        assert_eq!(x.checked_div_int(4).unwrap().scaled_value(), 26_250);
        assert_eq!(Usd4::from_scaled(10).checked_div_int(3).unwrap().scaled_value(), 3);
        assert_eq!(x.checked_div_int(0), Err(NumericError::DivisionByZero));
        assert_eq!(Usd4::MIN.checked_div_int(-1), Err(NumericError::Overflow));

        // Whole-unit modulo ignores the fraction
        assert_eq!(x.checked_rem_int(3).unwrap().scaled_value(), 10_000);
        assert_eq!(Usd4::from_scaled(107_500).checked_rem_int(4).unwrap().scaled_value(), 20_000);
        assert_eq!(Usd4::from_scaled(-105_000).checked_rem_int(3).unwrap().scaled_value(), -10_000);
        assert_eq!(x.checked_rem_int(0), Err(NumericError::DivisionByZero));
        assert_eq!(
            Amount::<Jpy, 0>::MIN.checked_rem_int(-1).unwrap(),
            Amount::<Jpy, 0>::ZERO
        );
    }

    #[test]
    fn test_real_scalars_depend_on_rounding() {
        let third = 1.0 / 3.0;

        let half_up = Usd4::from_integer(300).unwrap();
        assert_eq!(half_up.checked_mul_f64(third).unwrap().scaled_value(), 999_900);

        let up = Amount::<Usd, 4, Up>::from_integer(300).unwrap();
        assert_eq!(up.checked_mul_f64(third).unwrap().scaled_value(), 1_000_200);

        let x = Usd4::from_integer(100).unwrap();
        assert_eq!(x.checked_div_f64(3.0).unwrap().scaled_value(), 333_333);
        assert_eq!(x.checked_div_f64(0.00001), Err(NumericError::DivisionByZero));

        let y = Usd4::from_scaled(105_000);
        assert_eq!(y.checked_rem_f64(3.0).unwrap().scaled_value(), 15_000);
        assert_eq!(y.checked_rem_f64(0.0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_compound_assignment() {
        let mut x = Usd4::from_integer(10).unwrap();
        x.try_add_assign(Usd4::from_integer(5).unwrap()).unwrap();
        x.try_mul_int_assign(2).unwrap();
        x.try_sub_assign(Usd4::ONE).unwrap();
        x.try_div_int_assign(2).unwrap();
        assert_eq!(x.scaled_value(), 145_000);

        x.try_rem_int_assign(4).unwrap();
        assert_eq!(x.integer_part(), 2);

        x.try_mul_f64_assign(1.5).unwrap();
        x.try_div_f64_assign(0.5).unwrap();
        assert_eq!(x.integer_part(), 6);
        x.try_rem_f64_assign(5.0).unwrap();
        assert_eq!(x.integer_part(), 1);

        assert_eq!(x.try_div_int_assign(0), Err(NumericError::DivisionByZero));
        assert_eq!(x.integer_part(), 1);
    }

    #[test]
    fn test_sign_operations() {
        let x = Usd4::from_integer(-100).unwrap();
        assert!(x.is_negative());
        assert_eq!(x.abs().unwrap().integer_part(), 100);
        assert_eq!(x.checked_neg().unwrap().integer_part(), 100);
        assert_eq!(Usd4::MIN.abs(), Err(NumericError::Overflow));
        assert_eq!(Usd4::MIN.checked_neg(), Err(NumericError::Overflow));
        assert!(Usd4::ZERO.is_zero());
        assert!(Usd4::ONE.is_positive());
    }

    #[test]
    fn test_equality_across_rounding_policies() {
        let a = Usd4::from_scaled(12_345);
        let b = Amount::<Usd, 4, Down>::from_scaled(12_345);
        let c = Amount::<Usd, 4, Up>::from_scaled(12_346);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn test_cross_precision_comparison() {
        let cents = Amount::<Usd, 2>::from_scaled(101); // 1.01

        let lower = Usd4::from_scaled(10_001); // 1.0001
        let higher = Usd4::from_scaled(10_101); // 1.0101
        let same = Usd4::from_scaled(10_100); // 1.0100

        assert_eq!(cents.compare_to(&lower), Ok(Ordering::Greater));
        assert_eq!(cents.compare_to(&higher), Ok(Ordering::Less));
        assert_eq!(cents.compare_to(&same), Ok(Ordering::Equal));
        assert_eq!(lower.compare_to(&cents), Ok(Ordering::Less));

        let huge = Amount::<Usd, 2>::MAX;
        assert_eq!(huge.compare_to(&same), Err(NumericError::Overflow));
        assert_eq!(same.compare_to(&huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_round_to() {
        let x = Usd4::from_scaled(12_345); // 1.2345
        assert_eq!(x.round_to(2).unwrap().scaled_value(), 12_300);
        assert_eq!(x.round_to(3).unwrap().scaled_value(), 12_350);
        assert_eq!(x.round_to(4).unwrap(), x);
        assert_eq!(x.round_to(9).unwrap(), x);

        let exact = Amount::<Usd, 4, Unnecessary>::from_scaled(12_300);
        assert_eq!(exact.round_to(2).unwrap(), exact);
        assert_eq!(
            Amount::<Usd, 4, Unnecessary>::from_scaled(12_345).round_to(2),
            Err(NumericError::ForbiddenRounding)
        );
    }

    #[test]
    fn test_rescale() {
        let x = Usd4::from_scaled(12_345); // 1.2345

        let cents: Amount<Usd, 2> = x.rescale().unwrap();
        assert_eq!(cents.scaled_value(), 123);

        let fine: Amount<Usd, 6> = x.rescale().unwrap();
        assert_eq!(fine.scaled_value(), 1_234_500);

        let same: Usd4 = x.rescale().unwrap();
        assert_eq!(same, x);

        let floor: Amount<Usd, 2, Down> = Amount::<Usd, 4, Down>::from_scaled(-12_345)
            .rescale()
            .unwrap();
        assert_eq!(floor.scaled_value(), -124);

        assert_eq!(Usd4::MAX.rescale::<6>(), Err(NumericError::Overflow));
        assert_eq!(
            Usd4::MAX.rescale::<0>().unwrap().scaled_value(),
            922_337_203_685_478
        );
    }

    #[test]
    fn test_debug() {
        let x = Usd4::from_scaled(1_234_500);
        assert_eq!(format!("{:?}", x), "Amount<USD, 4, HALF_UP>(123.4500, scaled=1234500)");
    }

    fn untouched_on_failure(start: i64, step: i64) -> bool {
        let mut value = Usd4::from_scaled(start);
        let rhs = Usd4::from_scaled(step);

        match value.try_add_assign(rhs) {
            Ok(()) => value.scaled_value() == start + step,
            Err(err) => err == NumericError::Overflow && value.scaled_value() == start,
        }
    }

    quickcheck! {
        fn qc_add_assign_is_all_or_nothing(start: i64, step: i64) -> bool {
            untouched_on_failure(start, step)
        }

        fn qc_mul_assign_is_all_or_nothing(start: i64, factor: i64) -> bool {
            let mut value = Usd4::from_scaled(start);
            match value.try_mul_int_assign(factor) {
                Ok(()) => Some(value.scaled_value()) == start.checked_mul(factor),
                Err(_) => start.checked_mul(factor).is_none() && value.scaled_value() == start,
            }
        }
    }
}
