//! Page lifecycle.
//!
//! Everything the front-end does once a page has loaded lives here: the CSRF hook is
//! installed on the client and the location autocomplete is wired up. The steps are
//! independent of each other.
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

use crate::client::{hooks::Csrf, Client};
use crate::dom::{DomLocator, LocationAutocomplete};
use crate::http::CookieStore;

pub struct Page {
    client: Client,
    cookies: Arc<dyn CookieStore>,
    autocomplete: LocationAutocomplete,
    csrf: OnceCell<()>,
}

impl Page {
    pub fn new(client: Client, cookies: impl CookieStore + 'static) -> Self {
        Self {
            client,
            cookies: Arc::new(cookies),
            autocomplete: LocationAutocomplete::new(),
            csrf: OnceCell::new(),
        }
    }

    /// Use a different autocomplete binding than the configured one.
    pub fn with_autocomplete(mut self, autocomplete: LocationAutocomplete) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    /// Run the page-load steps.
    ///
    /// The CSRF hook is installed on the first call only.
    pub fn ready(&self, dom: &dyn DomLocator) {
        self.csrf.get_or_init(|| {
            self.client.install(Csrf::new(self.cookies.clone()));
            debug!("csrf hook installed");
        });

        self.autocomplete.bind(dom, &self.client);
    }

    /// The client with the page hooks installed, for other page code to send requests with.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn cookies(&self) -> &dyn CookieStore {
        self.cookies.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client::{testing::FakeTransport, Request};
    use crate::dom::MemoryDom;
    use crate::http::CookieJar;

    #[tokio::test]
    async fn test_ready() {
        let transport = FakeTransport::json(serde_json::json!(["Évora"]));
        let page = Page::new(
            Client::new(transport.clone()),
            CookieJar::parse("sessionid=x; csrftoken=abc123"),
        );
        let dom = MemoryDom::new().with_input("id_location");

        page.ready(&dom);
        page.ready(&dom);

        assert_eq!(page.client().hooks().len(), 1);
        assert_eq!(dom.bindings(), 1);
        assert_eq!(page.cookies().get("csrftoken"), Some("abc123".to_string()));

        page.client()
            .send(Request::post("/a/reports/"))
            .await
            .expect("send");
        page.client()
            .send(Request::post("https://example.com/x"))
            .await
            .expect("send");

        let sent = transport.requests();
        assert_eq!(
            sent[0].headers().get("X-CSRFToken"),
            Some(&"abc123".to_string())
        );
        assert!(!sent[1].headers().contains("X-CSRFToken"));
    }

    #[tokio::test]
    async fn test_autocomplete_requests_carry_token() {
        let transport = FakeTransport::json(serde_json::json!(["Évora", "Elvas"]));
        let page = Page::new(Client::new(transport.clone()), CookieJar::parse("csrftoken=t1"));
        let dom = MemoryDom::new();
        let input = dom.add_input("id_location");

        page.ready(&dom);
        assert!(input.type_text("E"));

        for _ in 0..100 {
            if !input.menu().is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(input.menu(), vec!["Évora", "Elvas"]);
        assert_eq!(
            transport.requests()[0].headers().get("x-csrftoken"),
            Some(&"t1".to_string())
        );
    }

    #[test]
    fn test_ready_without_location_input() {
        let page = Page::new(
            Client::new(FakeTransport::status(200)),
            CookieJar::new(),
        );
        let dom = MemoryDom::new();

        page.ready(&dom);

        assert_eq!(dom.bindings(), 0);
        assert_eq!(page.client().hooks().len(), 1);
    }
}
