//! # edipict: picture-clause codec and structural role resolver
//!
//! Core conversion logic for mapping structured business records onto
//! fixed-grammar interchange text (segment/element/component hierarchies)
//! and back.
//!
//! ## What this crate does
//!
//! - **Picture specs**: parse and render fixed-width field descriptors
//!   (`X(14)`, `9(10)`, `9(13) V9(2)`) with total width, implied fractional
//!   digits, and character kind.
//! - **Value codec**: convert between raw field text and decimal, integer,
//!   alphanumeric, and date values, covering implied decimal points,
//!   leading-zero suppression, dialect decimal marks, and the forgiving date
//!   quirks found in real interchange data.
//! - **Structural roles**: resolve which single role
//!   (group/message/segment-group/segment/element) a model member plays from
//!   its ordered declaration set, and which child kinds are legal beneath a
//!   container.
//! - **Token classification**: pure predicates the external tokenizer/writer
//!   uses to drive its recursive-descent walk.
//!
//! Tokenizing, dialect configuration, and structural-tree construction are
//! external collaborators; this crate performs no I/O and holds no mutable
//! state beyond the memoized per-model-type schema cache.
//!
//! ## Example
//!
//! ```
//! use edipict::{PictureSpec, ValueCodec};
//! use rust_decimal::Decimal;
//!
//! let spec = PictureSpec::parse("9(4) V9(2)").unwrap();
//! let codec = ValueCodec::default();
//! let value = codec.decode_decimal("000150", &spec).unwrap();
//! assert_eq!(value, Some(Decimal::new(150, 2)));
//! assert_eq!(
//!     codec.encode_decimal(value, &spec).unwrap().as_deref(),
//!     Some("000150")
//! );
//! ```

pub mod codec;
pub mod dates;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod path;
pub mod picture;
pub mod structure;
pub mod token;

pub use codec::{ValueCodec, DEFAULT_SUPPRESS_GLYPH};
pub use dates::{format_date, parse_date, try_format_date, try_parse_date};
pub use descriptor::{schema_of, EdiModel, FieldDescriptor, MemberDescriptor, Schema, SchemaBuilder};
pub use error::{DateConversionError, FormatSpecError, PathError, ValueConversionError};
pub use parser::MAX_WIDTH;
pub use path::EdiPath;
pub use picture::{FormatKind, PictureSpec};
pub use structure::{
    eligible_child_roles, is_eligible_child, resolve_role, Declaration, StructuralRole,
};
pub use token::TokenKind;
