//! Schedule-dependent visibility of the schedule-selection form region
//!
//! The dashboard's automation form shows its schedule picker only while the
//! run-mode dropdown is set to the designated "scheduled" option. The
//! decision itself is a pure function of the selected value; the controller
//! applies it to the dependent block's inline `display`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::dom;
use crate::error::{WidgetError, WidgetResult};

/// Visibility of the dependent form region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Inline `display` value applied to the dependent block
    pub fn css(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Visibility implied by a selection: shown iff the selected value equals the
/// designated scheduled value. No selection always hides.
pub fn visibility_for(selection: Option<&str>, scheduled_value: &str) -> Visibility {
    match selection {
        Some(value) if value == scheduled_value => Visibility::Shown,
        _ => Visibility::Hidden,
    }
}

/// Configuration for the schedule field controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleFieldConfig {
    /// Option value that means "run on a schedule"
    pub scheduled_value: String,
    /// Id of the dependent form block to show/hide
    #[serde(default = "default_field_id")]
    pub field_id: String,
    /// Emit a debug log line per invocation
    #[serde(default)]
    pub trace: bool,
}

fn default_field_id() -> String {
    "schedule-select".to_string()
}

impl ScheduleFieldConfig {
    pub fn new(scheduled_value: impl Into<String>) -> Self {
        Self {
            scheduled_value: scheduled_value.into(),
            field_id: default_field_id(),
            trace: false,
        }
    }

    pub fn with_field_id(mut self, field_id: impl Into<String>) -> Self {
        self.field_id = field_id.into();
        self
    }

    /// Read the scheduled value from a designated `<option>` element already
    /// in the document, for pages that keep the value in markup rather than
    /// in script.
    pub fn from_reference_option(document: &Document, option_id: &str) -> WidgetResult<Self> {
        let option: HtmlOptionElement = dom::require_element_by_id(document, option_id)?
            .dyn_into()
            .map_err(|_| WidgetError::NotAnHtmlElement(format!("'#{}' (option)", option_id)))?;
        Ok(Self::new(option.value()))
    }
}

/// Shows or hides the schedule picker based on the run-mode selection.
///
/// The dependent block is looked up per invocation; a missing or duplicated
/// id is a markup-contract violation reported as an error, not recovered.
pub struct ScheduleField {
    document: Document,
    config: ScheduleFieldConfig,
}

impl ScheduleField {
    pub fn new(document: &Document, config: ScheduleFieldConfig) -> Self {
        Self {
            document: document.clone(),
            config,
        }
    }

    /// Apply the visibility implied by a raw selection value.
    ///
    /// `None` (no selector on the page, or nothing selected) hides the block
    /// unconditionally. Returns the visibility that was applied.
    pub fn apply_selection(&self, selection: Option<&str>) -> WidgetResult<Visibility> {
        let visibility = visibility_for(selection, &self.config.scheduled_value);
        if self.config.trace {
            log::debug!(
                "schedule field '#{}': selection={:?} -> {:?}",
                self.config.field_id,
                selection,
                visibility
            );
        }

        let block = dom::require_element_by_id(&self.document, &self.config.field_id)?;
        block.style().set_property("display", visibility.css())?;
        Ok(visibility)
    }

    /// Apply the visibility implied by a changed select element, reading its
    /// current value. Pass `None` when the event carries no selector.
    pub fn on_change(&self, select: Option<&HtmlSelectElement>) -> WidgetResult<Visibility> {
        let value = select.map(|s| s.value());
        self.apply_selection(value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_selection_shows() {
        assert_eq!(visibility_for(Some("scheduled"), "scheduled"), Visibility::Shown);
    }

    #[test]
    fn test_other_selection_hides() {
        assert_eq!(visibility_for(Some("immediate"), "scheduled"), Visibility::Hidden);
    }

    #[test]
    fn test_no_selection_hides() {
        assert_eq!(visibility_for(None, "scheduled"), Visibility::Hidden);
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_eq!(visibility_for(Some("Scheduled"), "scheduled"), Visibility::Hidden);
        assert_eq!(visibility_for(Some("scheduled "), "scheduled"), Visibility::Hidden);
    }

    #[test]
    fn test_css_values() {
        assert_eq!(Visibility::Shown.css(), "block");
        assert_eq!(Visibility::Hidden.css(), "none");
    }

    #[test]
    fn test_config_defaults() {
        let config = ScheduleFieldConfig::new("scheduled");
        assert_eq!(config.field_id, "schedule-select");
        assert!(!config.trace);

        let config: ScheduleFieldConfig =
            serde_json::from_str(r#"{"scheduled_value": "scheduled"}"#).unwrap();
        assert_eq!(config.field_id, "schedule-select");
    }
}
