//! # layouts
//!
//! Three static CSS layout demos (flexbox, grid, responsive) and a home page,
//! served over HTTP from an explicit routing table.
//!
//! The moving parts are deliberately few:
//!
//! - [`Router`]: an immutable table of `(method, path) → controller#action`
//!   bindings. Literal paths, exact matches, duplicates rejected at startup.
//! - [`Actions`]: maps each `controller#action` name to an async function.
//! - [`App`]: a router whose every handler is backed by an action.
//! - [`Server`]: hyper over tokio, HTTP/1.1 and HTTP/2, graceful shutdown.
//!
//! Anything the table does not name is answered with `404 Not Found`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use layouts::{App, Server, pages, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), layouts::Error> {
//!     let app = App::new(routes::draw()?, pages::controller())?;
//!     Server::bind("127.0.0.1:3000").await?.serve(app).await
//! }
//! ```

mod app;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;

pub mod pages;
pub mod routes;

pub use app::{Actions, App};
pub use error::Error;
pub use handler::{Handler, HandlerId};
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::{Binding, Router};
pub use server::Server;
