//! HTTP primitives shared by the client and the page helpers.
pub mod cookies;
pub mod headers;
pub mod method;
pub mod url;

pub use cookies::{CookieJar, CookieStore};
pub use headers::Headers;
pub use method::Method;
pub use url::decode_component;
