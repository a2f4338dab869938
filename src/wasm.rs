//! WASM bindings for the dashboard widgets
//!
//! This module is the surface the host page calls: bind the accordion
//! triggers once after the markup is present, and wire the run-mode select's
//! change event to the schedule-field handle.

use wasm_bindgen::prelude::*;
use web_sys::HtmlSelectElement;

use crate::accordion::{Accordion, AccordionConfig};
use crate::dom;
use crate::error::WidgetError;
use crate::schedule::{ScheduleField, ScheduleFieldConfig};

// Use wee_alloc for smaller WASM binary
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn config_error(err: serde_wasm_bindgen::Error) -> JsValue {
    JsValue::from_str(&format!("Invalid config: {}", err))
}

/// Keeps the accordion click listeners alive. `free()` unbinds them.
#[wasm_bindgen]
pub struct AccordionHandle {
    inner: Accordion,
}

#[wasm_bindgen]
impl AccordionHandle {
    /// Number of bound triggers
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.len()
    }
}

/// Bind every accordion trigger on the page.
///
/// `config` is an optional plain object (`trigger_class`, `active_class`,
/// `trace`); absent fields fall back to defaults.
#[wasm_bindgen(js_name = "bindAccordions")]
pub fn bind_accordions(config: JsValue) -> Result<AccordionHandle, JsValue> {
    let config: AccordionConfig = if config.is_undefined() || config.is_null() {
        AccordionConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(config_error)?
    };
    let document = dom::document().map_err(to_js)?;
    let inner = Accordion::bind(&document, config).map_err(to_js)?;
    Ok(AccordionHandle { inner })
}

/// Schedule-field controller for the host page
#[wasm_bindgen]
pub struct ScheduleFieldHandle {
    inner: ScheduleField,
}

/// Create the schedule-field controller.
///
/// `config` is a plain object; `scheduled_value` is required, `field_id`
/// defaults to `"schedule-select"`.
#[wasm_bindgen(js_name = "scheduleField")]
pub fn schedule_field(config: JsValue) -> Result<ScheduleFieldHandle, JsValue> {
    let config: ScheduleFieldConfig =
        serde_wasm_bindgen::from_value(config).map_err(config_error)?;
    let document = dom::document().map_err(to_js)?;
    Ok(ScheduleFieldHandle {
        inner: ScheduleField::new(&document, config),
    })
}

#[wasm_bindgen]
impl ScheduleFieldHandle {
    /// Wire this to the run-mode select's change event, passing the changed
    /// element or nothing (nothing always hides the field).
    #[wasm_bindgen(js_name = "onChange")]
    pub fn on_change(&self, select: Option<HtmlSelectElement>) -> Result<(), JsValue> {
        self.inner
            .on_change(select.as_ref())
            .map(|_| ())
            .map_err(to_js)
    }

    /// Apply a raw selection value instead of reading it off an element.
    #[wasm_bindgen(js_name = "applyValue")]
    pub fn apply_value(&self, value: Option<String>) -> Result<(), JsValue> {
        self.inner
            .apply_selection(value.as_deref())
            .map(|_| ())
            .map_err(to_js)
    }
}
