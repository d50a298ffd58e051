//! Parse picture-clause text into a [`PictureSpec`] using PEST.

use pest::Parser;
use pest_derive::Parser as PestParser;

use crate::error::FormatSpecError;
use crate::picture::{FormatKind, PictureSpec};

#[derive(PestParser)]
#[grammar = "picture.pest"]
struct PictureParser;

/// Largest width either clause component may declare. Anything above this is
/// a [`FormatSpecError::WidthOutOfRange`], never a silent truncation.
pub const MAX_WIDTH: u16 = 255;

/// Parse a picture clause, e.g. `X(14)`, `9(10)`, `9(13) V9(2)`.
///
/// The whole input must match the grammar. A `V9(...)` clause attached to an
/// `X` glyph parses but is not applied; alphanumeric fields carry no implied
/// decimal point.
pub fn parse(text: &str) -> Result<PictureSpec, FormatSpecError> {
    let mut pairs = PictureParser::parse(Rule::picture, text)
        .map_err(|_| FormatSpecError::Malformed(text.to_string()))?;
    let picture = pairs
        .next()
        .ok_or_else(|| FormatSpecError::Malformed(text.to_string()))?;

    let mut kind = FormatKind::Alphanumeric;
    let mut length: u16 = 0;
    let mut decimal_length: u16 = 0;
    for inner in picture.into_inner() {
        match inner.as_rule() {
            Rule::glyph => {
                kind = if inner.as_str() == "X" {
                    FormatKind::Alphanumeric
                } else {
                    FormatKind::Numeric
                };
            }
            Rule::width => length = parse_width(inner.as_str(), text)?,
            Rule::decimal_clause => {
                let width = inner
                    .into_inner()
                    .next()
                    .ok_or_else(|| FormatSpecError::Malformed(text.to_string()))?;
                decimal_length = parse_width(width.as_str(), text)?;
            }
            _ => {}
        }
    }

    if kind == FormatKind::Alphanumeric {
        decimal_length = 0;
    }
    Ok(PictureSpec::new(length, decimal_length as u8, kind))
}

fn parse_width(digits: &str, clause: &str) -> Result<u16, FormatSpecError> {
    let width: u64 = digits
        .parse()
        .map_err(|_| FormatSpecError::Malformed(clause.to_string()))?;
    if width > MAX_WIDTH as u64 {
        return Err(FormatSpecError::WidthOutOfRange {
            clause: clause.to_string(),
            width,
            max: MAX_WIDTH,
        });
    }
    Ok(width as u16)
}
