//! Pre-request hooks.
//!
//! A hook runs on every request the [`crate::client::Client`] sends, before it reaches the
//! transport. It can change the request, e.g. add a header, or cancel it.
//! Hooks run in the order they were installed and never suspend.
//!
//! ```
//! # use icm_web::prelude::*;
//! struct Json;
//!
//! impl Hook for Json {
//!     fn before_send(&self, request: &mut Request) -> Outcome {
//!         request.headers_mut().insert("accept", "application/json");
//!         Outcome::Forward
//!     }
//! }
//! ```
use crate::{client::Request, colors::MaybeColorize, Error};
use std::sync::Arc;
use tracing::debug;

pub mod csrf;
pub use csrf::Csrf;

/// What to do with the request after a hook has seen it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Pass the request on to the next hook, or to the transport.
    Forward,
    /// Don't send the request.
    Cancel,
}

pub trait Hook: Send + Sync {
    /// Inspect or modify the request before it is sent.
    fn before_send(&self, request: &mut Request) -> Outcome;

    /// Get the hook handler. This method
    /// is used when adding hooks to a [`HookSet`].
    fn hook(self) -> HookHandler
    where
        Self: Sized + 'static,
    {
        HookHandler::new(self)
    }

    /// Name of this hook. It's globally unique
    /// so it should not be overriden.
    fn hook_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> Hook for F
where
    F: Fn(&mut Request) -> Outcome + Send + Sync,
{
    fn before_send(&self, request: &mut Request) -> Outcome {
        self(request)
    }
}

/// Wrapper around a struct implementing the [`Hook`] trait.
#[derive(Clone)]
pub struct HookHandler {
    hook: Arc<dyn Hook>,
}

impl HookHandler {
    pub fn new(hook: impl Hook + 'static) -> Self {
        Self {
            hook: Arc::new(hook),
        }
    }

    pub fn name(&self) -> &'static str {
        self.hook.hook_name()
    }

    fn before_send(&self, request: &mut Request) -> Outcome {
        debug!(
            "{} {} => {}",
            "hook".purple(),
            request.url().purple(),
            self.name().green()
        );
        self.hook.before_send(request)
    }
}

impl std::fmt::Debug for HookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("HookHandler").field(&self.name()).finish()
    }
}

/// Hooks, executed in the order they were added.
#[derive(Default, Clone, Debug)]
pub struct HookSet {
    handlers: Vec<HookHandler>,
}

impl HookSet {
    pub fn new(handlers: Vec<HookHandler>) -> Self {
        Self { handlers }
    }

    pub fn push(&mut self, handler: HookHandler) {
        self.handlers.push(handler);
    }

    /// A hook with this name is installed.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.iter().any(|handler| handler.name() == name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the request through every hook. Stops at the first hook that cancels it.
    pub fn before_send(&self, request: &mut Request) -> Result<(), Error> {
        for handler in &self.handlers {
            if handler.before_send(request) == Outcome::Cancel {
                debug!(
                    "{} {} cancelled by {}",
                    "hook".purple(),
                    request.url().purple(),
                    handler.name().red()
                );
                return Err(Error::Cancelled(request.url().to_string(), handler.name()));
            }
        }

        Ok(())
    }

    pub fn handlers(&self) -> Vec<HookHandler> {
        self.handlers.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tag(value: &'static str) -> impl Fn(&mut Request) -> Outcome {
        move |request: &mut Request| {
            let seen = request.headers().get("x-seen").cloned().unwrap_or_default();
            request.headers_mut().insert("x-seen", format!("{}{}", seen, value));
            Outcome::Forward
        }
    }

    #[test]
    fn test_hooks_run_in_order() {
        let hooks = HookSet::new(vec![tag("a").hook(), tag("b").hook(), tag("c").hook()]);
        let mut request = Request::get("/");

        hooks.before_send(&mut request).expect("forward");
        assert_eq!(request.headers().get("x-seen"), Some(&"abc".to_string()));
        assert_eq!(hooks.len(), 3);
    }

    #[test]
    fn test_cancel_stops_chain() {
        struct Block;

        impl Hook for Block {
            fn before_send(&self, _request: &mut Request) -> Outcome {
                Outcome::Cancel
            }
        }

        let hooks = HookSet::new(vec![tag("a").hook(), Block.hook(), tag("b").hook()]);
        let mut request = Request::get("/a/reports/");

        match hooks.before_send(&mut request) {
            Err(Error::Cancelled(url, name)) => {
                assert_eq!(url, "/a/reports/");
                assert!(name.ends_with("Block"));
            }
            other => panic!("expected cancellation, got {:?}", other),
        }

        assert_eq!(request.headers().get("x-seen"), Some(&"a".to_string()));
        assert!(hooks.contains(Block.hook_name()));
    }
}
