//! Action table and the assembled application.
//!
//! [`Router`] answers "which handler?"; [`Actions`] answers "which code?".
//! [`App`] joins the two and refuses to exist if a route names a handler no
//! controller provides.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::handler::{Handler, HandlerId, SharedAction};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Maps handler identifiers to the async functions that serve them.
#[derive(Default)]
pub struct Actions {
    handlers: HashMap<HandlerId, SharedAction>,
}

impl Actions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the action `controller#action`. A later registration under
    /// the same name replaces the earlier one.
    pub fn action(mut self, controller: &str, action: &str, handler: impl Handler) -> Self {
        self.handlers.insert(HandlerId::new(controller, action), handler.into_action());
        self
    }

    pub fn contains(&self, id: &HandlerId) -> bool {
        self.handlers.contains_key(id)
    }

    fn get(&self, id: &HandlerId) -> Option<SharedAction> {
        self.handlers.get(id).map(Arc::clone)
    }
}

/// A route table whose every handler is backed by an action.
pub struct App {
    router: Router,
    actions: Actions,
}

impl App {
    /// Fails with [`Error::MissingAction`] for the first route whose handler
    /// has no action, so a broken table is caught before serving.
    pub fn new(router: Router, actions: Actions) -> Result<Self, Error> {
        if let Some(b) = router.bindings().find(|b| !actions.contains(b.handler())) {
            return Err(Error::MissingAction(b.handler().clone()));
        }
        Ok(Self { router, actions })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Routes one request and produces one response. Misses and methods the
    /// router does not model both become `404 Not Found`.
    pub async fn dispatch(&self, req: Request) -> Response {
        let handler = Method::try_from(req.method())
            .ok()
            .and_then(|m| self.router.resolve(m, req.path()));

        let Some(id) = handler else {
            debug!(method = %req.method(), path = %req.path(), "no route");
            return Response::not_found();
        };

        // `App::new` guarantees every routed handler has an action.
        match self.actions.get(id) {
            Some(action) => {
                debug!(method = %req.method(), path = %req.path(), handler = %id, "dispatch");
                action.call(req).await
            }
            None => Response::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn hello(_req: Request) -> &'static str {
        "hello"
    }

    fn router() -> Router {
        Router::new().get("/hello", HandlerId::new("greet", "hello")).unwrap()
    }

    #[test]
    fn missing_action_fails_assembly() {
        let err = App::new(router(), Actions::new()).err().unwrap();
        assert!(matches!(err, Error::MissingAction(id) if id == HandlerId::new("greet", "hello")));
    }

    #[tokio::test]
    async fn dispatch_calls_the_bound_action() {
        let app = App::new(router(), Actions::new().action("greet", "hello", hello)).unwrap();
        let res = app.dispatch(Request::new(http::Method::GET, "/hello")).await;
        assert_eq!(res.status_code(), http::StatusCode::OK);
        assert_eq!(res.body(), b"hello");
    }

    #[tokio::test]
    async fn dispatch_misses_are_not_found() {
        let app = App::new(router(), Actions::new().action("greet", "hello", hello)).unwrap();
        for (method, path) in [
            (http::Method::GET, "/nope"),
            (http::Method::POST, "/hello"),
            (http::Method::from_bytes(b"PURGE").unwrap(), "/hello"),
        ] {
            let res = app.dispatch(Request::new(method, path)).await;
            assert_eq!(res.status_code(), http::StatusCode::NOT_FOUND);
        }
    }
}
