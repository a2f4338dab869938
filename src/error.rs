//! Error types for widget bindings

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for widget operations
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("No global window/document - not running in a browser context")]
    NoDocument,

    #[error("No element with id '{0}' in document")]
    ElementNotFound(String),

    #[error("Multiple elements share id '{0}'")]
    DuplicateId(String),

    #[error("Element {0} is not an HTML element")]
    NotAnHtmlElement(String),

    #[error("Accordion trigger {trigger} has no following sibling panel")]
    MissingPanel { trigger: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Dom(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_element() {
        let err = WidgetError::ElementNotFound("schedule-select".to_string());
        assert!(err.to_string().contains("schedule-select"));

        let err = WidgetError::MissingPanel {
            trigger: ".accordion[3]".to_string(),
        };
        assert!(err.to_string().contains(".accordion[3]"));
    }
}
