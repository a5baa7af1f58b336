// ============================================================================
// Currency Tags
// Zero-sized types that keep unrelated monetary units apart
// ============================================================================

/// A currency tag.
///
/// Implementors are never instantiated at run time; they only make
/// `Amount<Usd, ..>` and `Amount<Eur, ..>` distinct types.
pub trait Currency: 'static {
    /// Tag printed after formatted amounts, e.g. `"USD"`.
    const CODE: &'static str;
}

/// Declare a currency tag type.
///
/// ```
/// use money_amount::currency;
/// use money_amount::money::{Amount, Currency};
///
/// currency!(
///     /// Bitcoin
///     Btc => "BTC"
/// );
///
/// assert_eq!(Btc::CODE, "BTC");
/// let fee: Amount<Btc, 8> = "0.00001".parse().unwrap();
/// assert_eq!(fee.to_string(), "0.00001000BTC");
/// ```
#[macro_export]
macro_rules! currency {
    ($($(#[$meta:meta])* $name:ident => $code:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl $crate::money::Currency for $name {
                const CODE: &'static str = $code;
            }
        )*
    };
}

currency!(
    /// United States dollar
    Usd => "USD",
    /// Euro
    Eur => "EUR",
    /// Pound sterling
    Gbp => "GBP",
    /// Japanese yen
    Jpy => "JPY",
    /// Swiss franc
    Chf => "CHF",
);
