//! Picture-clause value type: kind, total width, implied decimal places.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::FormatSpecError;
use crate::parser;

/// Character class a picture clause admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Characters and digits (`X` glyph).
    Alphanumeric,
    /// Digits only (`9` glyph).
    Numeric,
}

/// A parsed picture clause such as `X(14)` or `9(13) V9(2)`.
///
/// `scale` is the total width in digits/characters, including any implied
/// fractional digits. `precision` is the count of implied fractional digits
/// (the position of the never-written decimal point). If the field is
/// numeric, the width excludes any minus sign or the decimal point itself.
#[derive(Debug, Clone, Copy)]
pub struct PictureSpec {
    kind: FormatKind,
    scale: u16,
    precision: u8,
}

impl PictureSpec {
    /// An `Alphanumeric` spec of the given total width.
    pub fn alphanumeric(length: u16) -> Self {
        PictureSpec {
            kind: FormatKind::Alphanumeric,
            scale: length,
            precision: 0,
        }
    }

    /// An integer (precision 0) spec of the given width and kind.
    pub fn with_kind(length: u16, kind: FormatKind) -> Self {
        PictureSpec {
            kind,
            scale: length,
            precision: 0,
        }
    }

    /// A `Numeric` spec with `integer_length` whole digits and
    /// `decimal_length` implied fractional digits.
    pub fn numeric(integer_length: u16, decimal_length: u8) -> Self {
        PictureSpec {
            kind: FormatKind::Numeric,
            scale: integer_length + decimal_length as u16,
            precision: decimal_length,
        }
    }

    pub fn new(integer_length: u16, decimal_length: u8, kind: FormatKind) -> Self {
        PictureSpec {
            kind,
            scale: integer_length + decimal_length as u16,
            precision: decimal_length,
        }
    }

    /// Parse a picture clause, e.g. `9(13) V9(2)`.
    pub fn parse(text: &str) -> Result<Self, FormatSpecError> {
        parser::parse(text)
    }

    /// Total width in digits/characters, implied fraction included.
    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Count of implied fractional digits. 0 for integer and alphanumeric
    /// fields.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    /// Whether the value carries an implied decimal point.
    pub fn has_precision(&self) -> bool {
        self.precision > 0
    }

    /// A spec is usable only when it admits at least one character.
    pub fn is_valid(&self) -> bool {
        self.scale > 0
    }
}

/// Equality is defined over `(scale, precision)` only; `kind` does not
/// participate. This mirrors the reference contract: an `X(6)` and a `9(6)`
/// compare equal. Pinned by `tests/picture.rs::equality_ignores_kind`.
impl PartialEq for PictureSpec {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.precision == other.precision
    }
}

impl Eq for PictureSpec {}

impl Hash for PictureSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scale.hash(state);
        self.precision.hash(state);
    }
}

impl fmt::Display for PictureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatKind::Alphanumeric => write!(f, "X({})", self.scale),
            FormatKind::Numeric if self.has_precision() => write!(
                f,
                "9({}) V9({})",
                self.scale - self.precision as u16,
                self.precision
            ),
            FormatKind::Numeric => write!(f, "9({})", self.scale),
        }
    }
}

impl FromStr for PictureSpec {
    type Err = FormatSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PictureSpec::parse(s)
    }
}
