// ============================================================================
// Text Conversion
// Decimal parsing and formatted output for amounts
// ============================================================================
//
// Input grammar:  digit+ ('.' digit*)?
// Output forms:   "<int>.<frac><CODE>", "<int>.<frac>", "<int><CODE>"

use super::amount::Amount;
use super::currency::Currency;
use crate::numeric::{
    pow10_wide, round_wide, NumericError, NumericResult, RoundingMode, RoundingPolicy,
};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Configuration
// ============================================================================

/// Which parts of an amount are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutputMode {
    /// Decimal value followed by the currency code (`s`)
    #[default]
    WithCurrency,
    /// Decimal value alone (`f`)
    Plain,
    /// Value rounded to whole units, followed by the currency code (`d`)
    WholeUnits,
}

impl OutputMode {
    /// Single-character specifier for this mode.
    pub const fn specifier(self) -> char {
        match self {
            OutputMode::WithCurrency => 's',
            OutputMode::Plain => 'f',
            OutputMode::WholeUnits => 'd',
        }
    }
}

impl TryFrom<char> for OutputMode {
    type Error = NumericError;

    fn try_from(specifier: char) -> Result<Self, Self::Error> {
        match specifier {
            's' => Ok(OutputMode::WithCurrency),
            'f' => Ok(OutputMode::Plain),
            'd' => Ok(OutputMode::WholeUnits),
            _ => Err(NumericError::Format),
        }
    }
}

/// A format request: output mode plus optional display precision.
///
/// Without a precision, amounts print all of their decimal places. A
/// narrower precision rounds with the amount's rounding policy; a wider one
/// pads with zeros. `WholeUnits` ignores the precision.
///
/// The compact text form is `[.N]c` where `c` is the mode specifier, e.g.
/// `"s"`, `".2s"`, `".0f"`, `"d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpec {
    pub mode: OutputMode,
    pub precision: Option<u8>,
}

impl FormatSpec {
    pub const fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            precision: None,
        }
    }

    /// Builder method: Set display precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }
}

impl FromStr for FormatSpec {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, rest) = match s.strip_prefix('.') {
            Some(tail) => {
                let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 {
                    return Err(NumericError::Format);
                }
                let (number, rest) = tail.split_at(digits);
                let precision: u8 = number.parse().map_err(|_| NumericError::Format)?;
                (Some(precision), rest)
            },
            None => (None, s),
        };

        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(specifier), None) => Ok(Self {
                mode: OutputMode::try_from(specifier)?,
                precision,
            }),
            _ => Err(NumericError::Format),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        write!(f, "{}", self.mode.specifier())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render `scaled / 10^decimals` with exactly `precision` fractional digits.
fn render_decimal(
    scaled: i64,
    decimals: u8,
    precision: usize,
    mode: RoundingMode,
) -> NumericResult<String> {
    let value = i128::from(scaled);
    let width = usize::from(decimals);

    if precision < width {
        // precision < decimals, so it fits a u8
        let dropped = decimals - precision as u8;
        let rounded = round_wide(value, dropped, mode)?;
        Ok(write_fixed(rounded / pow10_wide(dropped)?, precision, precision))
    } else {
        Ok(write_fixed(value, width, precision))
    }
}

/// Write `shifted / 10^width`, padding the fraction with zeros up to
/// `precision` digits. Requires `width <= precision`.
fn write_fixed(shifted: i128, width: usize, precision: usize) -> String {
    let digits = format!("{:0>w$}", shifted.unsigned_abs(), w = width + 1);
    let (whole, fraction) = digits.split_at(digits.len() - width);

    let mut out = String::with_capacity(digits.len() + precision + 2);
    if shifted < 0 {
        out.push('-');
    }
    out.push_str(whole);
    if precision > 0 {
        out.push('.');
        out.push_str(fraction);
        out.extend(std::iter::repeat_n('0', precision - width));
    }
    out
}

impl<C: Currency, const D: u8, R: RoundingPolicy> Amount<C, D, R> {
    /// Format according to `spec`.
    ///
    /// # Errors
    /// Returns `ForbiddenRounding` if the requested precision needs rounding
    /// and the policy is `Unnecessary`.
    ///
    /// # Example
    /// ```
    /// use money_amount::money::{Amount, FormatSpec, OutputMode, Usd};
    ///
    /// let x: Amount<Usd> = "1234.5678".parse()?;
    /// let spec = FormatSpec::new(OutputMode::WithCurrency).with_precision(2);
    /// assert_eq!(x.format(&spec)?, "1234.57USD");
    /// assert_eq!(x.format(&FormatSpec::new(OutputMode::WholeUnits))?, "1235USD");
    /// # Ok::<(), money_amount::numeric::NumericError>(())
    /// ```
    pub fn format(&self, spec: &FormatSpec) -> NumericResult<String> {
        let scaled = self.scaled_value();
        let precision = usize::from(spec.precision.unwrap_or(D));

        match spec.mode {
            OutputMode::WithCurrency => {
                let mut out = render_decimal(scaled, D, precision, R::MODE)?;
                out.push_str(C::CODE);
                Ok(out)
            },
            OutputMode::Plain => render_decimal(scaled, D, precision, R::MODE),
            OutputMode::WholeUnits => {
                let mut out = render_decimal(scaled, D, 0, R::MODE)?;
                out.push_str(C::CODE);
                Ok(out)
            },
        }
    }

    /// Format according to a compact specifier such as `".2s"`.
    ///
    /// # Errors
    /// Returns `Format` for an unrecognized specifier.
    pub fn format_with(&self, specifier: &str) -> NumericResult<String> {
        self.format(&specifier.parse()?)
    }

    /// The value at full precision, without the currency code.
    pub fn to_plain_string(&self) -> String {
        format!("{:#}", self)
    }

    /// The value rounded to whole units, followed by the currency code.
    pub fn to_whole_units_string(&self) -> NumericResult<String> {
        self.format(&FormatSpec::new(OutputMode::WholeUnits))
    }
}

/// `{}` prints `"<int>.<frac><CODE>"`, `{:.N}` prints N fractional digits
/// and `{:#}` leaves out the currency code. Width, fill and alignment apply
/// to the whole text, right-aligned by default.
///
/// A precision that would need rounding under the `Unnecessary` policy is
/// ignored and the value prints at full precision; use [`Amount::format`]
/// to get the `ForbiddenRounding` error instead.
impl<C: Currency, const D: u8, R: RoundingPolicy> fmt::Display for Amount<C, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = usize::from(D);
        let scaled = self.scaled_value();
        let mut text = render_decimal(scaled, D, f.precision().unwrap_or(full), R::MODE)
            .unwrap_or_else(|_| write_fixed(i128::from(scaled), full, full));
        if !f.alternate() {
            text.push_str(C::CODE);
        }

        let padding = f.width().unwrap_or(0).saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            write!(f, "{}", fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            write!(f, "{}", fill)?;
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Parse `digit+ ('.' digit*)?` into a value scaled by `scale = 10^decimals`.
///
/// Fractional digits past `decimals` are dropped without rounding.
fn parse_scaled(input: &str, decimals: u8, scale: i64) -> NumericResult<i64> {
    let int_len = input.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return Err(NumericError::Parse);
    }

    let (int_digits, rest) = input.split_at(int_len);
    let frac_digits = if rest.is_empty() {
        ""
    } else {
        rest.strip_prefix('.').ok_or(NumericError::Parse)?
    };
    if !frac_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::Parse);
    }

    let whole: i64 = int_digits.parse()?;
    let fraction = frac_digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(usize::from(decimals))
        .fold(0i64, |acc, digit| acc * 10 + i64::from(digit - b'0'));

    whole
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or(NumericError::Parse)
}

impl<C: Currency, const D: u8, R: RoundingPolicy> FromStr for Amount<C, D, R> {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// With 4 decimal places:
    /// - "123" -> 123.0000
    /// - "123.4" -> 123.4000
    /// - "123.45678" -> 123.4567
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, D, Self::SCALE)
            .map(Self::from_scaled)
            .inspect_err(|err| tracing::trace!(input = s, error = %err, "rejected amount literal"))
    }
}

// ============================================================================
// Tests
// ============================================================================
