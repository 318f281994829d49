//! The parts of the page document the helpers touch.
//!
//! Hosts implement [`DomLocator`] and [`Element`] over their real document;
//! [`MemoryDom`] is a headless implementation.
pub mod autocomplete;
pub mod memory;

pub use autocomplete::{AutocompleteOptions, LocationAutocomplete, LocationSource};
pub use memory::{MemoryDom, MemoryInput};

use std::sync::Arc;

/// Callback that fills the autocomplete dropdown.
pub type Suggest = Box<dyn FnOnce(Vec<String>) + Send>;

/// Provides suggestions for the text typed into an input.
///
/// `search` must return right away. `add` is called later, at most once, with the
/// suggestions for `term`; it is never called if they can't be fetched.
pub trait SuggestionSource: Send + Sync {
    fn search(&self, term: &str, add: Suggest);
}

/// An element of the page.
pub trait Element: Send + Sync {
    fn id(&self) -> &str;

    /// Turn this element into an autocomplete input fed by `source`.
    fn autocomplete(&self, source: Arc<dyn SuggestionSource>, options: AutocompleteOptions);
}

/// Finds elements on the page.
pub trait DomLocator {
    fn find_by_id(&self, id: &str) -> Option<Arc<dyn Element>>;
}
