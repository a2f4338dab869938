//! Dashboard widgets - client-side UI behaviors for the operations dashboard
//!
//! This library provides the two interactive behaviors the dashboard page
//! needs, compiled to WebAssembly and bound directly onto existing markup:
//! - Collapsible server panels (accordion pattern)
//! - Schedule-dependent visibility of the schedule-selection form region
//!
//! ## Example
//! ```rust,no_run
//! use dash_widgets::prelude::*;
//!
//! # fn demo(document: &web_sys::Document) -> WidgetResult<()> {
//! // Bind every ".accordion" trigger on the page. The returned controller
//! // owns the click listeners; keep it alive for the page lifetime.
//! let panels = Accordion::bind(document, AccordionConfig::default())?;
//!
//! // Show the schedule picker only while "scheduled" is selected.
//! let field = ScheduleField::new(
//!     document,
//!     ScheduleFieldConfig::new("scheduled"),
//! );
//! field.apply_selection(Some("scheduled"))?;
//!
//! # let _ = panels;
//! # Ok(())
//! # }
//! ```

pub mod accordion;
pub mod dom;
pub mod error;
pub mod schedule;

// Re-export common types
pub mod prelude {
    pub use crate::accordion::{Accordion, AccordionConfig};
    pub use crate::error::{WidgetError, WidgetResult};
    pub use crate::schedule::{ScheduleField, ScheduleFieldConfig, Visibility};
}

pub mod wasm;
