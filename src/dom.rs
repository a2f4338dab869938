//! Shared DOM lookup helpers
//!
//! Lookups validate the markup contract explicitly: a required id must match
//! exactly one element, and that element must be an `HtmlElement`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{WidgetError, WidgetResult};

/// Global document of the hosting page
pub fn document() -> WidgetResult<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(WidgetError::NoDocument)
}

/// Look up the single element with the given id.
///
/// Uses an attribute selector rather than `getElementById` so that duplicate
/// ids are detected and reported instead of silently resolving to the first
/// match.
pub fn require_element_by_id(doc: &Document, id: &str) -> WidgetResult<HtmlElement> {
    let matches = doc.query_selector_all(&format!("[id='{}']", id))?;
    match matches.length() {
        0 => Err(WidgetError::ElementNotFound(id.to_string())),
        1 => {
            let node = matches
                .get(0)
                .ok_or_else(|| WidgetError::ElementNotFound(id.to_string()))?;
            node.dyn_into::<HtmlElement>()
                .map_err(|_| WidgetError::NotAnHtmlElement(format!("'#{}'", id)))
        }
        _ => Err(WidgetError::DuplicateId(id.to_string())),
    }
}
