//! A collection of types, methods and macros
//! which when imported make working with page helpers ergonomic.
//!
//! ```
//! use icm_web::prelude::*;
//! ```
pub use crate::client::hooks::{csrf::Csrf, Hook, Outcome};
pub use crate::client::{Client, HttpTransport, Request, Response, Transport};
pub use crate::config::Config;
pub use crate::dom::autocomplete::{AutocompleteOptions, LocationAutocomplete, LocationSource};
pub use crate::dom::{DomLocator, Element, MemoryDom, SuggestionSource};
pub use crate::http::{CookieJar, CookieStore, Headers, Method};
pub use crate::logging::Logger;
pub use crate::page::Page;
pub use crate::view::{format_date, render, Context, Template, ToTemplateValue};

/// A macro to easily implement async traits methods.
pub use async_trait::async_trait;

pub use serde::{Deserialize, Serialize};
pub use tokio;
