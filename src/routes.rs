//! The application's route table.

use crate::error::Error;
use crate::router::Router;

/// Builds the route table served by the binary.
///
/// | Method | Path          | Handler            |
/// |--------|---------------|--------------------|
/// | GET    | `/`           | `pages#home`       |
/// | GET    | `/flex`       | `pages#flex`       |
/// | GET    | `/grid`       | `pages#grid`       |
/// | GET    | `/responsive` | `pages#responsive` |
pub fn draw() -> Result<Router, Error> {
    Router::new()
        .root("pages#home".parse()?)?
        .get("/flex", "pages#flex".parse()?)?
        .get("/grid", "pages#grid".parse()?)?
        .get("/responsive", "pages#responsive".parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerId;
    use crate::method::Method;

    #[test]
    fn table_matches_the_published_routes() {
        let router = draw().unwrap();
        for (path, action) in [("/", "home"), ("/flex", "flex"), ("/grid", "grid"), ("/responsive", "responsive")] {
            assert_eq!(router.resolve(Method::Get, path), Some(&HandlerId::new("pages", action)), "GET {path}");
        }
        assert_eq!(router.len(), 4);
    }

    #[test]
    fn only_get_is_routed() {
        let router = draw().unwrap();
        for method in [Method::Post, Method::Put, Method::Patch, Method::Delete, Method::Head, Method::Options] {
            assert_eq!(router.resolve(method, "/flex"), None, "{method} /flex");
        }
    }

    #[test]
    fn unknown_paths_miss_for_every_method() {
        let router = draw().unwrap();
        for method in [Method::Get, Method::Post, Method::Delete] {
            assert_eq!(router.resolve(method, "/nonexistent"), None);
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let router = draw().unwrap();
        let first = router.resolve(Method::Get, "/grid").cloned();
        for _ in 0..3 {
            assert_eq!(router.resolve(Method::Get, "/grid").cloned(), first);
        }
        assert_eq!(router.len(), 4);
    }

    #[test]
    fn route_listing_is_aligned() {
        let lines: Vec<_> = draw().unwrap().bindings().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "GET     /            pages#home",
                "GET     /flex        pages#flex",
                "GET     /grid        pages#grid",
                "GET     /responsive  pages#responsive",
            ],
        );
    }

    #[test]
    fn redrawing_on_top_of_the_table_is_rejected() {
        let err = draw().unwrap().get("/grid", HandlerId::new("pages", "grid")).err().unwrap();
        assert!(matches!(err, Error::DuplicateRoute { method: Method::Get, ref path } if path == "/grid"));
    }
}
