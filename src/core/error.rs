use thiserror::Error;

/// Recoverable failures while wiring page behaviors.
///
/// None of these are fatal: the caller logs a warning and the rest of the
/// page keeps working.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("js error: {0}")]
    Js(String),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        PageError::MissingElement(selector.to_string())
    }

    /// Wrap a stringified `JsValue` (formatted with `{:?}` by the caller).
    pub fn js(detail: impl Into<String>) -> Self {
        PageError::Js(detail.into())
    }
}
