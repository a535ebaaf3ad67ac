//! Handler identifiers and the actions they name.
//!
//! A route never points at code directly. It points at a [`HandlerId`], a
//! `controller#action` pair, and the [`Actions`](crate::Actions) table maps
//! that name to an async function at startup. Keeping the two apart lets the
//! routing table stay plain data.
//!
//! # Storing actions
//!
//! Every action is a different closure or `fn` type, yet the table is one
//! `HashMap<HandlerId, SharedAction>`. Registration wraps the function in
//! `ActionFn` and puts it behind `Arc<dyn DynAction>`; dispatch clones the
//! `Arc` and calls through it, getting back a boxed future.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── HandlerId ─────────────────────────────────────────────────────────────────

/// The logical name of a route target: a controller and one of its actions.
///
/// Written and displayed as `controller#action`:
///
/// ```rust
/// use layouts::HandlerId;
///
/// let id: HandlerId = "pages#grid".parse().unwrap();
/// assert_eq!(id.controller(), "pages");
/// assert_eq!(id.action(), "grid");
/// assert_eq!(id.to_string(), "pages#grid");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HandlerId {
    controller: String,
    action: String,
}

impl HandlerId {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self { controller: controller.into(), action: action.into() }
    }

    pub fn controller(&self) -> &str { &self.controller }
    pub fn action(&self) -> &str { &self.action }
}

impl FromStr for HandlerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('#') {
            Some((controller, action))
                if !controller.is_empty() && !action.is_empty() && !action.contains('#') =>
            {
                Ok(Self::new(controller, action))
            }
            _ => Err(Error::InvalidHandlerId(s.to_owned())),
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

// ── Stored actions ───────────────────────────────────────────────────────────

/// What an action call yields once its concrete future type is forgotten.
pub(crate) type ActionFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Object-safe face of an action. Hidden because it shows up in
/// [`Handler::into_action`], not because callers should use it.
#[doc(hidden)]
pub trait DynAction {
    fn call(&self, req: Request) -> ActionFuture;
}

/// An action as the [`Actions`](crate::Actions) table keeps it, cloned into
/// each request that resolves to it.
#[doc(hidden)]
pub type SharedAction = Arc<dyn DynAction + Send + Sync + 'static>;

// ── Handler ──────────────────────────────────────────────────────────────────

/// Anything that can be registered as an action: an `async fn` taking a
/// [`Request`] and returning something [`IntoResponse`].
///
/// ```text
/// async fn flex(req: Request) -> Response
/// async fn ping(req: Request) -> &'static str
/// ```
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_action(self) -> SharedAction;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_action(self) -> SharedAction {
        Arc::new(ActionFn(self))
    }
}

struct ActionFn<F>(F);

impl<F, Fut, R> DynAction for ActionFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> ActionFuture {
        let response = (self.0)(req);
        Box::pin(async move { response.await.into_response() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_controller_and_action() {
        let id: HandlerId = "pages#responsive".parse().unwrap();
        assert_eq!(id, HandlerId::new("pages", "responsive"));
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["pages", "#home", "pages#", "", "a#b#c"] {
            assert!(
                matches!(bad.parse::<HandlerId>(), Err(Error::InvalidHandlerId(ref s)) if s == bad),
                "`{bad}` should not parse",
            );
        }
    }

    #[test]
    fn displays_in_route_notation() {
        assert_eq!(HandlerId::new("pages", "home").to_string(), "pages#home");
    }
}
