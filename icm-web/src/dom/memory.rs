//! Headless document.
//!
//! Holds input elements by id, remembers autocomplete bindings and lets callers
//! simulate typing. Dropdown contents are whatever the last completed search produced.
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::{AutocompleteOptions, DomLocator, Element, SuggestionSource};

#[derive(Default)]
pub struct MemoryDom {
    elements: Mutex<HashMap<String, Arc<MemoryInput>>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input element.
    pub fn with_input(self, id: &str) -> Self {
        self.add_input(id);
        self
    }

    pub fn add_input(&self, id: &str) -> Arc<MemoryInput> {
        let input = Arc::new(MemoryInput::new(id));
        self.elements.lock().insert(id.to_string(), input.clone());
        input
    }

    pub fn input(&self, id: &str) -> Option<Arc<MemoryInput>> {
        self.elements.lock().get(id).cloned()
    }

    /// Number of autocomplete bindings across all elements.
    pub fn bindings(&self) -> usize {
        self.elements
            .lock()
            .values()
            .filter(|input| input.is_bound())
            .count()
    }
}

impl DomLocator for MemoryDom {
    fn find_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
        self.input(id).map(|input| input as Arc<dyn Element>)
    }
}

struct Binding {
    source: Arc<dyn SuggestionSource>,
    options: AutocompleteOptions,
}

pub struct MemoryInput {
    id: String,
    binding: Mutex<Option<Binding>>,
    menu: Arc<Mutex<Vec<String>>>,
}

impl MemoryInput {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            binding: Mutex::new(None),
            menu: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.lock().is_some()
    }

    pub fn options(&self) -> Option<AutocompleteOptions> {
        self.binding.lock().as_ref().map(|b| b.options.clone())
    }

    /// Simulate the user typing `term`.
    ///
    /// Returns `true` if a search was started. Terms shorter than the minimum length
    /// don't search. The delay option is up to the host and isn't simulated.
    pub fn type_text(&self, term: &str) -> bool {
        let source = match self.binding.lock().as_ref() {
            Some(binding) if term.chars().count() >= binding.options.min_length => {
                binding.source.clone()
            }
            _ => return false,
        };

        let menu = self.menu.clone();
        source.search(
            term,
            Box::new(move |items| {
                *menu.lock() = items;
            }),
        );

        true
    }

    /// Suggestions currently shown in the dropdown.
    pub fn menu(&self) -> Vec<String> {
        self.menu.lock().clone()
    }
}

impl Element for MemoryInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn autocomplete(&self, source: Arc<dyn SuggestionSource>, options: AutocompleteOptions) {
        *self.binding.lock() = Some(Binding { source, options });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dom::Suggest;

    struct Echo;

    impl SuggestionSource for Echo {
        fn search(&self, term: &str, add: Suggest) {
            add(vec![term.to_uppercase()]);
        }
    }

    #[test]
    fn test_find_by_id() {
        let dom = MemoryDom::new().with_input("id_location");
        assert!(dom.find_by_id("id_location").is_some());
        assert!(dom.find_by_id("id_other").is_none());
        assert_eq!(
            dom.find_by_id("id_location").map(|e| e.id().to_string()),
            Some("id_location".into())
        );
    }

    #[test]
    fn test_type_text() {
        let dom = MemoryDom::new();
        let input = dom.add_input("q");

        assert!(!input.type_text("li"));

        input.autocomplete(
            Arc::new(Echo),
            AutocompleteOptions {
                min_length: 2,
                ..Default::default()
            },
        );
        assert_eq!(dom.bindings(), 1);

        assert!(!input.type_text("l"));
        assert!(input.menu().is_empty());

        assert!(input.type_text("li"));
        assert_eq!(input.menu(), vec!["LI"]);
    }
}
