//! Error type for host-side setup.
//!
//! Form validation failures are not errors in this sense; they are
//! [`crate::form::FieldError`] values shown to the user.

/// Error returned while wiring the page.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// A node the behavior depends on is not in the markup.
    #[error("missing page element: {0}")]
    MissingElement(&'static str),
    /// A browser API call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The inline configuration block could not be parsed.
    #[error("invalid config block: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
