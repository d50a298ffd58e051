//! Convert between raw field text and typed scalar values under a picture
//! spec.
//!
//! All conversions are pure functions over caller-owned inputs; the codec
//! struct only carries the dialect decimal mark and the zero-suppression
//! glyph. Implied decimal points are realised by scaling with `precision`;
//! the decimal mark, when configured, separates integer and fraction digits
//! in dialects that write the point out.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValueConversionError;
use crate::picture::{FormatKind, PictureSpec};

/// Glyph that suppresses leading zeros in numeric fields unless the dialect
/// configures another one.
pub const DEFAULT_SUPPRESS_GLYPH: char = 'Z';

/// Largest supported implied-fraction depth. Bounded by the underlying
/// decimal representation; specs declaring more fractional digits fail at
/// conversion time.
const MAX_PRECISION: u8 = 28;

/// Stateless value converter for one dialect.
///
/// `decimal_mark` is the dialect's fractional separator, or `None` for
/// dialects that rely purely on implied decimal points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCodec {
    decimal_mark: Option<char>,
    suppress: char,
}

impl Default for ValueCodec {
    fn default() -> Self {
        ValueCodec {
            decimal_mark: None,
            suppress: DEFAULT_SUPPRESS_GLYPH,
        }
    }
}

impl ValueCodec {
    pub fn new(decimal_mark: Option<char>) -> Self {
        ValueCodec {
            decimal_mark,
            ..ValueCodec::default()
        }
    }

    /// Override the zero-suppression glyph (`Z` by default).
    pub fn with_suppress_glyph(mut self, glyph: char) -> Self {
        self.suppress = glyph;
        self
    }

    pub fn decimal_mark(&self) -> Option<char> {
        self.decimal_mark
    }

    /// Decode numeric field text to a decimal value.
    ///
    /// Leading suppression glyphs are trimmed first; text that is empty after
    /// trimming decodes to `Ok(None)` ("no value", not an error). For a
    /// `Numeric` spec the text is tried as a plain integer and scaled by
    /// `10^-precision` to realise the implied decimal point; otherwise, when
    /// a decimal mark is configured, the text is parsed with that mark as the
    /// fractional separator. Anything else is a [`ValueConversionError`].
    pub fn decode_decimal(
        &self,
        text: &str,
        spec: &PictureSpec,
    ) -> Result<Option<Decimal>, ValueConversionError> {
        let trimmed = text.trim_start_matches(self.suppress);
        if trimmed.is_empty() {
            return Ok(None);
        }
        if spec.kind() == FormatKind::Numeric && spec.precision() <= MAX_PRECISION {
            if let Ok(raw) = trimmed.parse::<i128>() {
                if let Ok(value) =
                    Decimal::try_from_i128_with_scale(raw, spec.precision() as u32)
                {
                    return Ok(Some(value));
                }
            }
        }
        if let Some(mark) = self.decimal_mark {
            // A '.' that is not the dialect's mark must not sneak through as
            // a separator.
            if mark == '.' || !trimmed.contains('.') {
                let candidate = trimmed.replace(mark, ".");
                if candidate.matches('.').count() <= 1 {
                    if let Ok(value) = candidate.parse::<Decimal>() {
                        return Ok(Some(value));
                    }
                }
            }
        }
        Err(ValueConversionError(text.to_string()))
    }

    /// Non-failing twin of [`decode_decimal`](Self::decode_decimal):
    /// conversion failures and absent values both come back as `None`.
    pub fn try_decode_decimal(&self, text: &str, spec: &PictureSpec) -> Option<Decimal> {
        self.decode_decimal(text, spec).ok().flatten()
    }

    /// Encode a decimal value as field text. `None` encodes to no output in
    /// every mode (the field is omitted).
    pub fn encode_decimal(
        &self,
        value: Option<Decimal>,
        spec: &PictureSpec,
    ) -> Result<Option<String>, ValueConversionError> {
        let value = match value {
            Some(v) => v,
            None => return Ok(None),
        };
        if spec.precision() > MAX_PRECISION {
            return Err(ValueConversionError(value.to_string()));
        }
        if let Some(mark) = self.decimal_mark {
            if spec.kind() == FormatKind::Numeric && spec.has_precision() {
                return Ok(Some(self.render_marked(value, spec, mark)?));
            }
            return Ok(Some(value.to_string().replace('.', &mark.to_string())));
        }
        if spec.kind() == FormatKind::Numeric {
            // Implied decimal point: shift, truncate, zero-pad to scale.
            let shifted = value
                .checked_mul(pow10(spec.precision()))
                .ok_or_else(|| ValueConversionError(value.to_string()))?
                .trunc();
            let raw = shifted
                .to_i128()
                .ok_or_else(|| ValueConversionError(value.to_string()))?;
            return Ok(Some(pad_signed(raw, spec.scale() as usize)));
        }
        Ok(Some(value.to_string()))
    }

    /// Render with an explicit mark: exactly `scale - precision` integer
    /// digits and `precision` fraction digits, each zero-padded with at
    /// least one placeholder digit.
    fn render_marked(
        &self,
        value: Decimal,
        spec: &PictureSpec,
        mark: char,
    ) -> Result<String, ValueConversionError> {
        let mut rounded = value.round_dp_with_strategy(
            spec.precision() as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );
        rounded.rescale(spec.precision() as u32);
        let magnitude = rounded.mantissa().unsigned_abs();
        let divisor = 10u128.pow(spec.precision() as u32);
        let integer_width = (spec.scale() - spec.precision() as u16).max(1) as usize;
        let fraction_width = spec.precision().max(1) as usize;

        let mut out = String::new();
        if rounded.is_sign_negative() && magnitude != 0 {
            out.push('-');
        }
        out.push_str(&format!(
            "{:0width$}",
            magnitude / divisor,
            width = integer_width
        ));
        out.push(mark);
        out.push_str(&format!(
            "{:0width$}",
            magnitude % divisor,
            width = fraction_width
        ));
        Ok(out)
    }

    /// Encode an integer as field text. `Alphanumeric` right-aligns the digit
    /// string in `scale`, padding with spaces; if the padded result would
    /// exceed `2 x scale` characters the padding is abandoned and the raw
    /// digit string is returned. `Numeric` zero-pads to `scale` (digit
    /// strings longer than `scale` pass through whole).
    pub fn encode_integer(&self, value: Option<i64>, spec: &PictureSpec) -> Option<String> {
        let value = value?;
        let digits = value.to_string();
        match spec.kind() {
            FormatKind::Alphanumeric => {
                let scale = spec.scale() as usize;
                let padded = format!("{}{}", " ".repeat(scale), digits);
                if padded.len() > scale * 2 {
                    return Some(digits);
                }
                Some(padded[padded.len() - scale..].to_string())
            }
            FormatKind::Numeric => Some(pad_signed(i128::from(value), spec.scale() as usize)),
        }
    }

    /// Encode alphanumeric text: space-padded on the right to `scale` when
    /// shorter, truncated to `scale` when longer. `None` encodes to no
    /// output.
    pub fn encode_text(&self, text: Option<&str>, spec: &PictureSpec) -> Option<String> {
        let text = text?;
        let scale = spec.scale() as usize;
        let mut out: String = text.chars().take(scale).collect();
        let have = out.chars().count();
        out.extend(std::iter::repeat(' ').take(scale - have));
        Some(out)
    }

    /// Decode alphanumeric field text: truncate to `scale`, then strip the
    /// trailing space padding.
    pub fn decode_text(&self, text: &str, spec: &PictureSpec) -> String {
        let clipped: String = text.chars().take(spec.scale() as usize).collect();
        clipped.trim_end_matches(' ').to_string()
    }
}

/// `10^precision` as an exact decimal. Callers guard `precision` against
/// [`MAX_PRECISION`], which keeps the magnitude inside the 96-bit mantissa.
fn pow10(precision: u8) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(u32::from(precision)), 0)
}

/// Zero-pad the magnitude to `width` digits. The sign stays outside the
/// padded digits; numeric field widths exclude the minus sign.
fn pad_signed(value: i128, width: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", value.unsigned_abs(), width = width)
    } else {
        format!("{:0width$}", value, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow10_small_values() {
        assert_eq!(pow10(0), Decimal::from(1));
        assert_eq!(pow10(3), Decimal::from(1000));
    }
}
