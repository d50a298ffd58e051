//! Token-kind predicates consumed by the external tokenizer and writer.

/// Kind of a token produced by the external interchange reader. Tokens are
/// owned by the reader; this crate only classifies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// No token has been read yet.
    None,
    SegmentStart,
    SegmentName,
    ElementStart,
    ComponentStart,
    Integer,
    Float,
    String,
    Boolean,
    Null,
    Date,
}

impl TokenKind {
    /// Whether this token opens a nested structural scope; the reader must
    /// recurse.
    pub fn is_start_token(self) -> bool {
        matches!(
            self,
            TokenKind::SegmentStart | TokenKind::ElementStart | TokenKind::ComponentStart
        )
    }

    /// Whether this token is a primitive leaf value terminating the current
    /// scope.
    pub fn is_primitive_token(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Boolean
                | TokenKind::Null
                | TokenKind::Date
        )
    }
}
