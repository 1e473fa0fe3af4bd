use thiserror::Error;

/// Validation errors for identifier newtypes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Raised when a distinguished name cannot be parsed or has no parent.
///
/// No partial result accompanies this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedNameError {
    /// The DN was empty or only whitespace.
    #[error("distinguished name is empty")]
    Empty,
    /// The DN has a single component, so there is no parent to derive.
    #[error("no parent to derive from '{0}'")]
    NoParent(String),
    /// Two separators with nothing between them, or a trailing separator.
    #[error("empty component at position {position} in '{dn}'")]
    EmptyComponent {
        /// Zero-based component index.
        position: usize,
        /// Input DN.
        dn: String,
    },
    /// A component lacks the `type=value` delimiter.
    #[error("component '{0}' is missing a '=' delimiter")]
    MissingDelimiter(String),
    /// A component has nothing after its type prefix.
    #[error("component '{0}' has an empty value")]
    EmptyValue(String),
    /// The type tag of a component is not a valid attribute name.
    #[error("invalid attribute type: {0}")]
    InvalidType(#[from] ValidationError),
    /// A non-domain component follows a `DC` component.
    #[error("component '{component}' follows a domain component in '{dn}'")]
    MisplacedDomainComponent {
        /// Offending component.
        component: String,
        /// Input DN.
        dn: String,
    },
}
