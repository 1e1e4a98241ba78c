#![forbid(unsafe_code)]

//! Error types shared by the controller and its hosts.

/// Failure reported by a [`crate::page::Page`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A structural node the operation needs (window, body, head) is absent.
    MissingNode(&'static str),
    /// The host threw while performing `op`.
    Host { op: &'static str, message: String },
}

impl PageError {
    /// Convenience constructor for host-side failures.
    pub fn host(op: &'static str, message: impl Into<String>) -> Self {
        Self::Host {
            op,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingNode(node) => write!(f, "document has no {node}"),
            Self::Host { op, message } => write!(f, "{op} failed: {message}"),
        }
    }
}

impl std::error::Error for PageError {}

/// Controller-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    /// The page rejected a side effect.
    Page(PageError),
    /// A toolbar control was dispatched while no toolbar is mounted.
    NotMounted,
}

impl core::fmt::Display for ToolbarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Page(err) => write!(f, "page error: {err}"),
            Self::NotMounted => write!(f, "toolbar is not mounted"),
        }
    }
}

impl std::error::Error for ToolbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Page(err) => Some(err),
            Self::NotMounted => None,
        }
    }
}

impl From<PageError> for ToolbarError {
    fn from(err: PageError) -> Self {
        Self::Page(err)
    }
}

/// Errors from loading a [`crate::config::ToolbarConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// JSON parse error.
    Json(serde_json::Error),
    /// Parsed, but one or more fields are out of range.
    Invalid(Vec<String>),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "JSON parse error: {err}"),
            Self::Invalid(errors) => write!(f, "invalid config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
