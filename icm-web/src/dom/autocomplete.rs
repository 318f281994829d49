//! Location autocomplete.
//!
//! Pages with a location field (`#id_location` by default) get suggestions from the
//! server as the user types. Each search is a `GET /a/locations/?prefix=<term>` returning
//! a JSON list of location names. Nothing is cached, and responses are shown in
//! the order they arrive.
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::{DomLocator, Suggest, SuggestionSource};
use crate::client::Client;
use crate::colors::MaybeColorize;
use crate::config::{get_config, PageSettings};
use crate::Error;

/// Autocomplete widget settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteOptions {
    /// Characters typed before the first search.
    pub min_length: usize,
    /// Pause after the last keystroke before searching.
    pub delay: Duration,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            delay: Duration::from_millis(300),
        }
    }
}

impl From<&PageSettings> for AutocompleteOptions {
    fn from(page: &PageSettings) -> Self {
        Self {
            min_length: page.min_length,
            delay: page.delay(),
        }
    }
}

/// Fetches location suggestions from the server.
#[derive(Clone, Debug)]
pub struct LocationSource {
    client: Client,
    endpoint: String,
    param: String,
}

impl LocationSource {
    pub fn new(client: Client) -> Self {
        let page = &get_config().page;
        Self::with_endpoint(client, &page.locations_endpoint, &page.prefix_param)
    }

    pub fn with_endpoint(client: Client, endpoint: &str, param: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            param: param.to_string(),
        }
    }

    /// Locations starting with `prefix`, as ranked by the server.
    pub async fn suggestions(&self, prefix: &str) -> Result<Vec<String>, Error> {
        self.client
            .get_json(&self.endpoint, &[(self.param.as_str(), prefix)])
            .await
    }
}

impl SuggestionSource for LocationSource {
    fn search(&self, term: &str, add: Suggest) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("no async runtime, location search for \"{}\" dropped", term);
                return;
            }
        };

        let source = self.clone();
        let term = term.to_string();

        handle.spawn(async move {
            match source.suggestions(&term).await {
                Ok(locations) => add(locations),
                Err(err) => warn!("location search for \"{}\" failed: {}", term, err),
            }
        });
    }
}

/// Binds [`LocationSource`] to the location input, if the page has one.
#[derive(Debug, Clone)]
pub struct LocationAutocomplete {
    input: String,
    options: AutocompleteOptions,
}

impl Default for LocationAutocomplete {
    fn default() -> Self {
        let page = &get_config().page;
        Self::with_input(&page.location_input, page.into())
    }
}

impl LocationAutocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: &str, options: AutocompleteOptions) -> Self {
        Self {
            input: input.to_string(),
            options,
        }
    }

    /// Attach autocomplete to the input. Returns `false` when the page has no such input,
    /// in which case nothing on the page is touched.
    pub fn bind(&self, dom: &dyn DomLocator, client: &Client) -> bool {
        let element = match dom.find_by_id(&self.input) {
            Some(element) => element,
            None => {
                debug!("no #{} on this page, autocomplete not bound", self.input);
                return false;
            }
        };

        element.autocomplete(
            Arc::new(LocationSource::new(client.clone())),
            self.options.clone(),
        );
        debug!("{} bound to #{}", "autocomplete".purple(), element.id().green());

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::dom::MemoryDom;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_suggestions_request() {
        let transport = FakeTransport::json(serde_json::json!(["Lisboa", "Leiria"]));
        let source = LocationSource::with_endpoint(
            Client::new(transport.clone()),
            "/a/locations/",
            "prefix",
        );

        let locations = source.suggestions("L").await.expect("suggestions");
        assert_eq!(locations, vec!["Lisboa", "Leiria"]);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url(), "/a/locations/");
        assert_eq!(
            sent[0].query_pairs(),
            &[("prefix".to_string(), "L".to_string())]
        );
    }

    #[tokio::test]
    async fn test_search_calls_back() {
        let transport = FakeTransport::json(serde_json::json!(["Porto"]));
        let source =
            LocationSource::with_endpoint(Client::new(transport), "/a/locations/", "prefix");

        let (tx, rx) = oneshot::channel();
        source.search(
            "Po",
            Box::new(move |locations| {
                let _ = tx.send(locations);
            }),
        );

        assert_eq!(rx.await.expect("callback"), vec!["Porto"]);
    }

    #[tokio::test]
    async fn test_failed_search_never_calls_back() {
        for transport in [
            FakeTransport::failing(),
            FakeTransport::status(500),
            FakeTransport::json(serde_json::json!({"error": "nope"})),
        ] {
            let source = LocationSource::with_endpoint(
                Client::new(transport.clone()),
                "/a/locations/",
                "prefix",
            );

            let (tx, rx) = oneshot::channel::<Vec<String>>();
            source.search(
                "Po",
                Box::new(move |locations| {
                    let _ = tx.send(locations);
                }),
            );

            // The sender is dropped without sending once the task gives up.
            assert!(rx.await.is_err());
            assert_eq!(transport.requests().len(), 1);
        }
    }

    #[test]
    fn test_search_without_runtime() {
        let transport = FakeTransport::json(serde_json::json!(["Porto"]));
        let source = LocationSource::with_endpoint(
            Client::new(transport.clone()),
            "/a/locations/",
            "prefix",
        );

        source.search("Po", Box::new(|_| panic!("no runtime, no callback")));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_bind_without_input() {
        let dom = MemoryDom::new().with_input("id_name");
        let client = Client::new(FakeTransport::status(200));

        let autocomplete = LocationAutocomplete::with_input("id_location", Default::default());
        assert!(!autocomplete.bind(&dom, &client));
        assert_eq!(dom.bindings(), 0);
        assert!(!dom.input("id_name").expect("input").is_bound());
    }

    #[tokio::test]
    async fn test_bind_and_type() {
        let transport = FakeTransport::json(serde_json::json!(["Braga", "Bragança"]));
        let client = Client::new(transport.clone());
        let dom = MemoryDom::new();
        let input = dom.add_input("id_location");

        let options = AutocompleteOptions {
            min_length: 2,
            delay: Duration::from_millis(0),
        };
        let autocomplete = LocationAutocomplete::with_input("id_location", options.clone());
        assert!(autocomplete.bind(&dom, &client));
        assert_eq!(input.options(), Some(options));

        assert!(!input.type_text("B"));
        assert!(input.type_text("Br"));

        for _ in 0..100 {
            if !input.menu().is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(input.menu(), vec!["Braga", "Bragança"]);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].uri(), "/a/locations/?prefix=Br");
    }
}
