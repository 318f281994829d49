//! Presentation helpers: the variable-only template renderer and date formatting.
pub mod date;
pub mod template;

pub use date::format_date;
pub use template::{render, Context, Template, ToTemplateValue};
