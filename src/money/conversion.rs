// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

use super::amount::Amount;
use super::currency::Currency;
use crate::numeric::{pow10_wide, round_wide, NumericError, NumericResult, RoundingPolicy};
use rust_decimal::Decimal;

impl<C: Currency, const D: u8, R: RoundingPolicy> Amount<C, D, R> {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Digits beyond `D` decimal places are rounded with `R`.
    ///
    /// # Errors
    /// - `ForbiddenRounding` if `R` is `Unnecessary` and digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let mantissa = d.mantissa();
        let source_scale = d.scale();
        let target_scale = u32::from(D);

        let scaled = if source_scale <= target_scale {
            let widen = u8::try_from(target_scale - source_scale).map_err(|_| NumericError::Overflow)?;
            mantissa
                .checked_mul(pow10_wide(widen)?)
                .ok_or(NumericError::Overflow)?
        } else {
            let dropped = u8::try_from(source_scale - target_scale).map_err(|_| NumericError::Overflow)?;
            round_wide(mantissa, dropped, R::MODE)? / pow10_wide(dropped)?
        };

        Self::from_wide(scaled)
    }

    /// Convert to rust_decimal::Decimal, keeping all `D` decimal places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.scaled_value(), u32::from(D))
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> TryFrom<Decimal> for Amount<C, D, R> {
    type Error = NumericError;

    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(d)
    }
}

impl<C: Currency, const D: u8, R: RoundingPolicy> From<Amount<C, D, R>> for Decimal {
    fn from(amount: Amount<C, D, R>) -> Self {
        amount.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::currency::Eur;
    use crate::numeric::policy::{Down, Unnecessary};

    type Eur4 = Amount<Eur>;

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = Eur4::from_decimal(d).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 4_500);

        let negative = Eur4::try_from(Decimal::new(-5, 1)).unwrap();
        assert_eq!(negative.scaled_value(), -5_000);
    }

    #[test]
    fn test_from_decimal_rounds_extra_digits() {
        let d = Decimal::new(123_456_789, 6); // 123.456789
        assert_eq!(Eur4::from_decimal(d).unwrap().scaled_value(), 1_234_568);
        assert_eq!(
            Amount::<Eur, 4, Down>::from_decimal(d).unwrap().scaled_value(),
            1_234_567
        );
        assert_eq!(
            Amount::<Eur, 4, Unnecessary>::from_decimal(d),
            Err(NumericError::ForbiddenRounding)
        );
        assert_eq!(
            Amount::<Eur, 4, Unnecessary>::from_decimal(Decimal::new(1_500, 3))
                .unwrap()
                .scaled_value(),
            15_000
        );
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert_eq!(Eur4::from_decimal(Decimal::MAX), Err(NumericError::Overflow));
        assert_eq!(Eur4::from_decimal(Decimal::MIN), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_decimal() {
        let x = Eur4::from_scaled(1_234_500);
        let d = x.to_decimal();
        assert_eq!(d.to_string(), "123.4500");
        assert_eq!(Decimal::from(x), Decimal::new(12345, 2));
    }
}
