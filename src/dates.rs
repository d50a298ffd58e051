//! Date/time conversion driven by a pattern string.
//!
//! Patterns use the legacy interchange tokens (`yyyy`, `yy`, `MM`, `dd`,
//! `HH`, `mm`, `ss`, a run of `f` for fractional seconds); any other
//! non-letter character matches itself literally. Real interchange data is
//! sloppy about trailing time parts, so a handful of forgiving rewrites run
//! before the exact match:
//!
//! - a `24` hour becomes `00` and the result shifts one day forward;
//! - seconds missing entirely from the tail are filled in as `00`;
//! - short fractional-second digits are right-padded with `'0'`.
//!
//! Everything else must match the pattern exactly.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::DateConversionError;

struct PatternInfo {
    /// chrono format string, fraction token excluded (fraction digits are
    /// split off and handled as nanoseconds).
    fmt: String,
    has_date: bool,
    has_time: bool,
    /// Char offset of the `HH` token, if any.
    hour_offset: Option<usize>,
    /// Char offset of the `ss` token, if any.
    seconds_offset: Option<usize>,
    /// Inclusive char offsets of the `f` run, if any.
    fraction: Option<(usize, usize)>,
    /// Expected input length in chars; every token is fixed-width.
    width: usize,
}

fn analyze(pattern: &str) -> Result<PatternInfo, DateConversionError> {
    if pattern.is_empty() {
        return Err(DateConversionError::EmptyPattern);
    }
    let chars: Vec<char> = pattern.chars().collect();
    let mut info = PatternInfo {
        fmt: String::new(),
        has_date: false,
        has_time: false,
        hour_offset: None,
        seconds_offset: None,
        fraction: None,
        width: 0,
    };
    let unsupported = |run: &[char]| DateConversionError::UnsupportedToken {
        pattern: pattern.to_string(),
        token: run.iter().collect(),
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        let taken = match c {
            'y' if run >= 4 => {
                info.fmt.push_str("%Y");
                info.has_date = true;
                4
            }
            'y' if run >= 2 => {
                info.fmt.push_str("%y");
                info.has_date = true;
                2
            }
            'M' if run >= 2 => {
                info.fmt.push_str("%m");
                info.has_date = true;
                2
            }
            'd' if run >= 2 => {
                info.fmt.push_str("%d");
                info.has_date = true;
                2
            }
            'H' if run >= 2 => {
                info.fmt.push_str("%H");
                info.has_time = true;
                info.hour_offset.get_or_insert(info.width);
                2
            }
            'm' if run >= 2 => {
                info.fmt.push_str("%M");
                info.has_time = true;
                2
            }
            's' if run >= 2 => {
                info.fmt.push_str("%S");
                info.has_time = true;
                info.seconds_offset.get_or_insert(info.width);
                2
            }
            'f' => {
                if run > 9 || info.fraction.is_some() {
                    return Err(unsupported(&chars[i..i + run]));
                }
                info.fraction = Some((info.width, info.width + run - 1));
                info.has_time = true;
                run
            }
            _ if c.is_ascii_alphabetic() => return Err(unsupported(&chars[i..i + run])),
            '%' => {
                info.fmt.push_str("%%");
                1
            }
            _ => {
                info.fmt.push(c);
                1
            }
        };
        info.width += taken;
        i += taken;
    }
    Ok(info)
}

/// Parse field text against a pattern, applying the forgiving rewrites.
pub fn parse_date(text: &str, pattern: &str) -> Result<NaiveDateTime, DateConversionError> {
    let info = analyze(pattern)?;
    let mismatch = || DateConversionError::Mismatch {
        text: text.to_string(),
        pattern: pattern.to_string(),
    };

    let mut chars: Vec<char> = text.chars().collect();
    let mut day_shift = false;
    if let Some(h) = info.hour_offset {
        if chars.get(h) == Some(&'2') && chars.get(h + 1) == Some(&'4') {
            chars[h] = '0';
            chars[h + 1] = '0';
            day_shift = true;
        }
    }
    if let Some(s) = info.seconds_offset {
        // Forgive a missing seconds pair at the tail.
        if info.width > chars.len() && s >= chars.len() {
            chars.extend(['0', '0']);
        }
    }
    if let Some((start, end)) = info.fraction {
        // Forgive short fractional digits.
        if info.width > chars.len() && end >= chars.len() {
            for pos in start..=end {
                if chars.len() <= pos {
                    chars.push('0');
                }
            }
        }
    }
    if chars.len() != info.width {
        return Err(mismatch());
    }

    let mut nanos: u32 = 0;
    if let Some((start, end)) = info.fraction {
        let digits: String = chars[start..=end].iter().collect();
        let value: u32 = digits.parse().map_err(|_| mismatch())?;
        let places = (end - start + 1) as u32;
        nanos = value * 10u32.pow(9 - places);
        chars.drain(start..=end);
    }
    let base: String = chars.into_iter().collect();

    let parsed = if info.has_date && (info.has_time || info.fraction.is_some()) {
        NaiveDateTime::parse_from_str(&base, &info.fmt).map_err(|_| mismatch())?
    } else if info.has_date {
        NaiveDate::parse_from_str(&base, &info.fmt)
            .map_err(|_| mismatch())?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(mismatch)?
    } else {
        // Time-only patterns anchor to a fixed epoch date; the conversion
        // must stay deterministic.
        let time = NaiveTime::parse_from_str(&base, &info.fmt).map_err(|_| mismatch())?;
        NaiveDate::default().and_time(time)
    };

    let mut result = parsed
        .checked_add_signed(Duration::nanoseconds(i64::from(nanos)))
        .ok_or_else(mismatch)?;
    if day_shift {
        result = result
            .checked_add_signed(Duration::days(1))
            .ok_or_else(mismatch)?;
    }
    Ok(result)
}

/// Non-failing twin of [`parse_date`].
pub fn try_parse_date(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    parse_date(text, pattern).ok()
}

/// Render a date/time as field text according to a pattern.
pub fn format_date(
    value: NaiveDateTime,
    pattern: &str,
) -> Result<String, DateConversionError> {
    let info = analyze(pattern)?;
    let mut out = value.format(&info.fmt).to_string();
    if let Some((start, end)) = info.fraction {
        let places = (end - start + 1) as u32;
        let digits = format!(
            "{:0width$}",
            value.nanosecond() / 10u32.pow(9 - places),
            width = places as usize
        );
        let byte_idx = out
            .char_indices()
            .nth(start)
            .map(|(idx, _)| idx)
            .unwrap_or(out.len());
        out.insert_str(byte_idx, &digits);
    }
    Ok(out)
}

/// Non-failing twin of [`format_date`].
pub fn try_format_date(value: NaiveDateTime, pattern: &str) -> Option<String> {
    format_date(value, pattern).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_rejects_stray_letter_runs() {
        assert!(matches!(
            analyze("yyyyQQ"),
            Err(DateConversionError::UnsupportedToken { .. })
        ));
        assert!(matches!(
            analyze("y"),
            Err(DateConversionError::UnsupportedToken { .. })
        ));
    }

    #[test]
    fn analyze_maps_widths() {
        let info = analyze("yyyyMMddHHmmss").expect("analyze");
        assert_eq!(info.width, 14);
        assert_eq!(info.hour_offset, Some(8));
        assert_eq!(info.seconds_offset, Some(12));
        assert!(info.fraction.is_none());
    }

    #[test]
    fn analyze_fraction_offsets() {
        let info = analyze("HHmmssfff").expect("analyze");
        assert_eq!(info.fraction, Some((6, 8)));
        assert_eq!(info.width, 9);
        assert!(!info.has_date);
    }
}
