//! Error types, one per failure domain.

/// A picture clause could not be parsed or describes an unusable width.
///
/// Raised at schema-load time only; field specs are static, so a malformed
/// clause is fatal before any record is processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatSpecError {
    #[error("picture clause '{0}' could not be parsed")]
    Malformed(String),
    #[error("picture clause '{clause}': width {width} exceeds the maximum of {max}")]
    WidthOutOfRange { clause: String, width: u64, max: u16 },
}

/// A value could not be converted under the active picture spec /
/// decimal-mark combination. Carries the offending field text when
/// decoding, or the rendered value when encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert '{0}' under the active format spec")]
pub struct ValueConversionError(pub String);

/// A date field failed to parse or render against its pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateConversionError {
    #[error("'{text}' does not match date pattern '{pattern}'")]
    Mismatch { text: String, pattern: String },
    #[error("date pattern '{pattern}': unsupported token '{token}'")]
    UnsupportedToken { pattern: String, token: String },
    #[error("date pattern must not be empty")]
    EmptyPattern,
}

/// A structural address string is not of the form `TAG[/element[/component]]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid structural path")]
pub struct PathError(pub String);
