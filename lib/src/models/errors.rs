use std::fmt;

/// Failure reading a single field of a bookmark node
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Tag {0:?} is not found")]
    KeyNotFound(String),

    #[error("Tag {0:?} is not a string")]
    WrongType(String),

    #[error("Value for tag {field:?} is not an integer: {raw:?}")]
    NotAnInteger { field: String, raw: String },

    #[error("Value for tag {field:?} is out of the representable time range: {raw}")]
    OutOfRange { field: String, raw: i64 },
}

/// Shape violation found while walking the bookmark tree
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Unexpected node type")]
    UnexpectedNodeType,

    #[error("Type tag is not a string")]
    TypeTagNotString,

    #[error("Unknown type {0:?}")]
    UnknownType(String),

    #[error("Unexpected \"children\" type")]
    ChildrenNotArray,

    #[error("Invalid root item type")]
    InvalidRootType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Field(FieldError),
    Structural(StructuralError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Field(e) => e.fmt(f),
            ParseErrorKind::Structural(e) => e.fmt(f),
        }
    }
}

/// A field or structural error qualified with the keys leading to the failing node.
///
/// The path is stored outermost key first. It is grown from the inside out:
/// every level of the builder that sees the error on its way up calls
/// [`ParseError::within`] with its own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    path: Vec<String>,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }

    /// Prefix `key` onto the path
    pub fn within(mut self, key: &str) -> Self {
        self.path.insert(0, key.to_string());
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Slash-separated path, e.g. `roots/bookmark_bar/#2`
    pub fn path(&self) -> String {
        self.path.join("/")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "Node {}: {}", self.path(), self.kind)
        }
    }
}

impl std::error::Error for ParseError {}

impl From<FieldError> for ParseError {
    fn from(err: FieldError) -> Self {
        ParseError::new(ParseErrorKind::Field(err))
    }
}

impl From<StructuralError> for ParseError {
    fn from(err: StructuralError) -> Self {
        ParseError::new(ParseErrorKind::Structural(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldError::KeyNotFound("date_added".into()), "Tag \"date_added\" is not found")]
    #[case(FieldError::WrongType("url".into()), "Tag \"url\" is not a string")]
    #[case(
        FieldError::NotAnInteger { field: "date_added".into(), raw: "soon".into() },
        "Value for tag \"date_added\" is not an integer: \"soon\""
    )]
    fn test_field_error_messages(#[case] err: FieldError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_path_is_built_outermost_first() {
        let err = ParseError::from(StructuralError::UnexpectedNodeType)
            .within("#2")
            .within("bookmark_bar")
            .within("roots");
        assert_eq!(err.path(), "roots/bookmark_bar/#2");
        assert_eq!(err.segments().last().map(String::as_str), Some("#2"));
        assert_eq!(
            err.to_string(),
            "Node roots/bookmark_bar/#2: Unexpected node type"
        );
    }

    #[test]
    fn test_pathless_error_is_bare_message() {
        let err = ParseError::from(StructuralError::InvalidRootType);
        assert_eq!(err.to_string(), "Invalid root item type");
        assert_eq!(err.path(), "");
    }
}
