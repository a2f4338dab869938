//! Collapsible server panels (accordion pattern)
//!
//! Each trigger element toggles an "active" class on itself and
//! expands/collapses its immediately-following sibling panel by setting or
//! clearing the panel's inline `max-height`. Expansion pins `max-height` to
//! the panel's `scrollHeight` so a CSS `max-height` transition animates it.
//!
//! Panels operate independently; expanding one never collapses another.

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::error::{WidgetError, WidgetResult};

/// Configuration for the accordion binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccordionConfig {
    /// Class naming the trigger elements
    #[serde(default = "default_trigger_class")]
    pub trigger_class: String,
    /// Class toggled on a trigger while its panel is expanded
    #[serde(default = "default_active_class")]
    pub active_class: String,
    /// Emit a debug log line per click
    #[serde(default)]
    pub trace: bool,
}

fn default_trigger_class() -> String {
    "accordion".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            trigger_class: default_trigger_class(),
            active_class: default_active_class(),
            trace: false,
        }
    }
}

/// Bound accordion triggers.
///
/// Owns the registered click closures; dropping the controller removes every
/// listener, so keep it alive for as long as the panels should respond.
pub struct Accordion {
    bindings: Vec<TriggerBinding>,
}

struct TriggerBinding {
    trigger: HtmlElement,
    handler: Closure<dyn FnMut(MouseEvent)>,
}

impl Accordion {
    /// Bind every element carrying the configured trigger class.
    ///
    /// The markup contract is validated up front: each trigger must be an
    /// HTML element with a following sibling element acting as its panel.
    /// Any violation aborts the bind with an error naming the trigger.
    /// Elements added to the document later are not picked up.
    pub fn bind(document: &Document, config: AccordionConfig) -> WidgetResult<Self> {
        let triggers = document.get_elements_by_class_name(&config.trigger_class);
        let mut bindings = Vec::with_capacity(triggers.length() as usize);

        for index in 0..triggers.length() {
            let Some(element) = triggers.item(index) else {
                break; // collection is live; bail if it shrank under us
            };
            let label = trigger_label(&element, &config.trigger_class, index);

            let trigger: HtmlElement = element
                .dyn_into()
                .map_err(|_| WidgetError::NotAnHtmlElement(label.clone()))?;
            let panel: HtmlElement = trigger
                .next_element_sibling()
                .ok_or_else(|| WidgetError::MissingPanel {
                    trigger: label.clone(),
                })?
                .dyn_into()
                .map_err(|_| WidgetError::NotAnHtmlElement(format!("panel after {}", label)))?;

            let active_class = config.active_class.clone();
            let trace = config.trace;
            let clicked = trigger.clone();
            let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                match toggle(&clicked, &panel, &active_class) {
                    Ok(expanded) if trace => {
                        log::debug!("accordion {}: expanded={}", label, expanded);
                    }
                    Ok(_) => {}
                    // A failed toggle aborts this invocation only; the
                    // listener stays registered for future clicks.
                    Err(err) => log::error!("accordion {}: {}", label, err),
                }
            });
            trigger
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;

            bindings.push(TriggerBinding { trigger, handler });
        }

        if config.trace {
            log::debug!(
                "bound {} accordion trigger(s) for '.{}'",
                bindings.len(),
                config.trigger_class
            );
        }
        Ok(Self { bindings })
    }

    /// Number of bound triggers
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Drop for TriggerBinding {
    fn drop(&mut self) {
        let _ = self
            .trigger
            .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
    }
}

/// Toggle one trigger/panel pair. Returns whether the panel is now expanded.
fn toggle(trigger: &HtmlElement, panel: &HtmlElement, active_class: &str) -> WidgetResult<bool> {
    trigger.class_list().toggle(active_class)?;

    let style = panel.style();
    let current = style.get_property_value("max-height")?;
    match next_max_height(&current, panel.scroll_height()) {
        Some(px) => {
            style.set_property("max-height", &px)?;
            Ok(true)
        }
        None => {
            style.remove_property("max-height")?;
            Ok(false)
        }
    }
}

/// Next inline `max-height` for a panel: expand to the content height when no
/// constraint is set, otherwise clear it. A zero content height still
/// "expands" (to `0px`) so the active state keeps tracking the property.
fn next_max_height(current: &str, scroll_height: i32) -> Option<String> {
    if current.is_empty() {
        Some(format!("{}px", scroll_height))
    } else {
        None
    }
}

fn trigger_label(element: &web_sys::Element, trigger_class: &str, index: u32) -> String {
    let id = element.id();
    if id.is_empty() {
        format!("'.{}'[{}]", trigger_class, index)
    } else {
        format!("'#{}'", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_panel_expands_to_content_height() {
        assert_eq!(next_max_height("", 340), Some("340px".to_string()));
    }

    #[test]
    fn test_expanded_panel_collapses() {
        assert_eq!(next_max_height("340px", 340), None);
        // Height recorded at expand time is irrelevant on collapse
        assert_eq!(next_max_height("120px", 340), None);
    }

    #[test]
    fn test_empty_panel_still_toggles() {
        assert_eq!(next_max_height("", 0), Some("0px".to_string()));
        assert_eq!(next_max_height("0px", 0), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = AccordionConfig::default();
        assert_eq!(config.trigger_class, "accordion");
        assert_eq!(config.active_class, "active");
        assert!(!config.trace);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AccordionConfig =
            serde_json::from_str(r#"{"trigger_class": "server-panel"}"#).unwrap();
        assert_eq!(config.trigger_class, "server-panel");
        assert_eq!(config.active_class, "active");
        assert!(!config.trace);
    }
}
