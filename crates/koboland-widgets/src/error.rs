//! Widget Errors
//!
//! Failures raised while reading server-rendered state or configuration.

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Widget-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// A required attribute is absent or empty
    MissingAttribute(String),
    /// An attribute is present but cannot be interpreted
    InvalidAttribute { name: String, value: String },
    /// Configuration could not be parsed or holds an unusable value
    InvalidConfig(String),
}

impl WidgetError {
    pub fn invalid(name: &str, value: &str) -> Self {
        WidgetError::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::MissingAttribute(name) => write!(f, "Missing attribute: {}", name),
            WidgetError::InvalidAttribute { name, value } => {
                write!(f, "Invalid attribute {}: {:?}", name, value)
            }
            WidgetError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}
