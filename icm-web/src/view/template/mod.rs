//! Variable-only templates.
//!
//! A template is plain text with `{{ name }}` placeholders. Rendering swaps each
//! context key's placeholder for its value; there are no loops, conditionals or filters.
//!
//! Only the **first** placeholder of each key is replaced. A template that repeats
//! `{{ name }}` needs the value passed for each occurrence by the caller.
//!
//! ```
//! use icm_web::view::{render, Template};
//!
//! assert_eq!(render("Hi {{ who }}!", [("who", "there")]), "Hi there!");
//! assert_eq!(render("{{ x }} {{ x }}", [("x", 1)]), "1 {{ x }}");
//!
//! let template = Template::from_str("{{missing}} stays");
//! assert_eq!(template.render([("other", 1)]), "{{missing}} stays");
//! ```
pub mod context;
pub mod error;
pub mod placeholder;

pub use context::{Context, ToTemplateValue};
pub use error::Error;

use std::path::{Path, PathBuf};
use tokio::fs::read;

#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    source: String,
    path: Option<PathBuf>,
}

impl Template {
    /// Read a template from a file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let bytes = match read(path).await {
            Ok(bytes) => bytes,
            Err(_) => return Err(Error::TemplateDoesNotExist(path.to_owned())),
        };

        let source = String::from_utf8(bytes).map_err(|_| Error::NotUtf8(path.to_owned()))?;

        Ok(Template {
            source,
            path: Some(path.to_owned()),
        })
    }

    pub fn from_str(template: &str) -> Self {
        Template {
            source: template.to_string(),
            path: None,
        }
    }

    /// Substitute context values into the template.
    pub fn render(&self, context: impl Into<Context>) -> String {
        let context: Context = context.into();
        let mut text = self.source.clone();

        for (key, value) in context.iter() {
            if let Some(rendered) = placeholder::replace_first(&text, key, value) {
                text = rendered;
            }
        }

        text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Render a template string with the given context.
pub fn render(template: &str, context: impl Into<Context>) -> String {
    Template::from_str(template).render(context)
}
