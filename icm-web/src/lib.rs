//! Page conveniences for the ICM web front-end.
//!
//! This crate bundles three small, independent helpers that every page of the
//! front-end needs once it has loaded:
//!
//! * a variable-only template renderer ([`view::template`]),
//! * location autocomplete wiring for the `#id_location` input ([`dom::autocomplete`]),
//! * an anti-forgery (CSRF) header attached to every same-origin request ([`client::hooks::csrf`]).
//!
//! The browser globals these helpers used to reach for (the document, the cookie jar and the
//! global AJAX hook) are passed in explicitly, so everything runs headless as well.
//!
//! # Getting started
//!
//! ```
//! use icm_web::prelude::*;
//!
//! let html = render("<b>{{ name }}</b>", [("name", "Lisbon")]);
//! assert_eq!(html, "<b>Lisbon</b>");
//! ```
//!
//! ### Page lifecycle
//!
//! A [`page::Page`] owns the HTTP client and the cookie store, and runs all page-load steps once:
//!
//! ```rust,ignore
//! use icm_web::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), icm_web::Error> {
//!     Logger::init();
//!
//!     let client = Client::new(HttpTransport::from_config()?);
//!     let page = Page::new(client, CookieJar::parse("csrftoken=abc123"));
//!
//!     page.ready(&MemoryDom::new().with_input("id_location"));
//!
//!     Ok(())
//! }
//! ```
//!
pub mod client;
pub mod colors;
pub mod config;
pub mod dom;
pub mod error;
pub mod http;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod view;

/// Wrapper around async traits to make them easy to use.
pub use async_trait::async_trait;
/// Serde is used for (de)serialization.
pub use serde;
/// Tokio is an asynchronous runtime for Rust.
pub use tokio;

pub use error::Error;
