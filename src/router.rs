//! Route table: method + path → handler identifier.
//!
//! One radix tree per HTTP method, as plain data. Routes are literal paths;
//! a request matches a binding only when its method is identical and its
//! path is byte-for-byte equal to the bound path. The table is built once at
//! startup and only read afterwards.

use std::collections::HashMap;
use std::fmt;

use matchit::Router as MatchitRouter;

use crate::error::Error;
use crate::handler::HandlerId;
use crate::method::Method;

/// A single (method, path, handler) entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    method: Method,
    path: String,
    handler: HandlerId,
}

impl Binding {
    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn handler(&self) -> &HandlerId { &self.handler }
}

/// One line of a route listing: `GET     /flex        pages#flex`.
impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} {:<12} {}", self.method, self.path, self.handler)
    }
}

/// The application route table.
///
/// Registration consumes and returns `self`, so a table reads as one chain
/// and any configuration mistake surfaces through `?` before the server
/// starts:
///
/// ```rust
/// # use layouts::{HandlerId, Router};
/// # fn main() -> Result<(), layouts::Error> {
/// let router = Router::new()
///     .root(HandlerId::new("pages", "home"))?
///     .get("/flex", "pages#flex".parse()?)?;
///
/// assert_eq!(router.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Router {
    bindings: Vec<Binding>,
    // Values index into `bindings`.
    trees: HashMap<Method, MatchitRouter<usize>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `method path` to `handler`.
    ///
    /// Fails with [`Error::DuplicateRoute`] if the pair is already bound and
    /// with [`Error::InvalidRoute`] if `path` is not an absolute literal path.
    pub fn register(mut self, method: Method, path: &str, handler: HandlerId) -> Result<Self, Error> {
        if !path.starts_with('/') {
            return Err(invalid(path, "must start with `/`"));
        }
        if path.contains(['{', '}']) {
            return Err(invalid(path, "path parameters are not supported"));
        }
        if self.bindings.iter().any(|b| b.method == method && b.path == path) {
            return Err(Error::DuplicateRoute { method, path: path.to_owned() });
        }

        self.trees
            .entry(method)
            .or_default()
            .insert(path, self.bindings.len())
            .map_err(|e| invalid(path, &e.to_string()))?;
        self.bindings.push(Binding { method, path: path.to_owned(), handler });
        Ok(self)
    }

    /// Shorthand for [`register`](Router::register) with `GET`.
    pub fn get(self, path: &str, handler: HandlerId) -> Result<Self, Error> {
        self.register(Method::Get, path, handler)
    }

    /// Binds `GET /`.
    pub fn root(self, handler: HandlerId) -> Result<Self, Error> {
        self.get("/", handler)
    }

    /// Returns the handler bound to `method path`, or `None` when nothing
    /// matches.
    pub fn resolve(&self, method: Method, path: &str) -> Option<&HandlerId> {
        let tree = self.trees.get(&method)?;
        let matched = tree.at(path).ok()?;
        Some(&self.bindings[*matched.value].handler)
    }

    /// All bindings, in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize { self.bindings.len() }
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }
}

fn invalid(path: &str, reason: &str) -> Error {
    Error::InvalidRoute { path: path.to_owned(), reason: reason.to_owned() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> HandlerId {
        s.parse().unwrap()
    }

    fn table() -> Router {
        Router::new()
            .root(id("pages#home")).unwrap()
            .get("/flex", id("pages#flex")).unwrap()
            .register(Method::Post, "/flex", id("pages#submit")).unwrap()
    }

    #[test]
    fn resolves_by_method_and_path() {
        let router = table();
        assert_eq!(router.resolve(Method::Get, "/"), Some(&id("pages#home")));
        assert_eq!(router.resolve(Method::Get, "/flex"), Some(&id("pages#flex")));
        assert_eq!(router.resolve(Method::Post, "/flex"), Some(&id("pages#submit")));
    }

    #[test]
    fn misses_are_none() {
        let router = table();
        assert_eq!(router.resolve(Method::Get, "/grid"), None);
        assert_eq!(router.resolve(Method::Put, "/flex"), None);
        assert_eq!(router.resolve(Method::Delete, "/"), None);
    }

    #[test]
    fn matching_is_exact() {
        let router = table();
        assert_eq!(router.resolve(Method::Get, "/flex/"), None);
        assert_eq!(router.resolve(Method::Get, "/FLEX"), None);
        assert_eq!(router.resolve(Method::Get, "/flexbox"), None);
        assert_eq!(router.resolve(Method::Get, ""), None);
    }

    #[test]
    fn duplicate_route_is_rejected() {
        let err = table().get("/flex", id("other#flex")).err().unwrap();
        match err {
            Error::DuplicateRoute { method, path } => {
                assert_eq!(method, Method::Get);
                assert_eq!(path, "/flex");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn same_path_under_another_method_is_not_a_duplicate() {
        assert!(table().register(Method::Put, "/flex", id("pages#update")).is_ok());
    }

    #[test]
    fn relative_and_parameterised_paths_are_rejected() {
        assert!(matches!(Router::new().get("flex", id("pages#flex")), Err(Error::InvalidRoute { .. })));
        assert!(matches!(Router::new().get("/users/{id}", id("users#show")), Err(Error::InvalidRoute { .. })));
    }

    #[test]
    fn bindings_keep_registration_order() {
        let paths: Vec<_> = table().bindings().map(|b| (b.method(), b.path().to_owned())).collect();
        assert_eq!(
            paths,
            [(Method::Get, "/".to_owned()), (Method::Get, "/flex".to_owned()), (Method::Post, "/flex".to_owned())],
        );
    }

    #[test]
    fn binding_display_lines_up_columns() {
        let lines: Vec<_> = table().bindings().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "GET     /            pages#home",
                "GET     /flex        pages#flex",
                "POST    /flex        pages#submit",
            ],
        );
    }
}
