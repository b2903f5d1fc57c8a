//! Regex route tables with first-match dispatch.
//!
//! A [`Router`] keeps routes in registration order. For each request the
//! first pattern matching the whole path is selected; if it has no handler
//! for the request verb, the request is not retried against later patterns
//! and goes down the error path instead. Error handlers are looked up by
//! status code, then by path pattern.
//!
//! ```
//! use nuclear_dispatch::{Body, Params, ResponseSink, Router, SimpleRequest};
//!
//! #[derive(Default)]
//! struct Sink {
//!     status: u16,
//!     body: Option<Body>,
//! }
//!
//! impl ResponseSink for Sink {
//!     fn set_http_code(&mut self, code: u16) -> &mut Self {
//!         self.status = code;
//!         self
//!     }
//!     fn set_headers<I, K, V>(&mut self, _: I) -> &mut Self
//!     where
//!         I: IntoIterator<Item = (K, V)>,
//!         K: Into<String>,
//!         V: Into<String>,
//!     {
//!         self
//!     }
//!     fn set_body(&mut self, body: Body) -> &mut Self {
//!         self.body = Some(body);
//!         self
//!     }
//!     fn send(&mut self, _exit_after: bool) {}
//! }
//!
//! let mut router: Router<SimpleRequest, Sink> = Router::new();
//! router.get("/users/([0-9]+)", |_, res, params| {
//!     let id = params.get(0).unwrap_or_default();
//!     res.set_body(format!("user {}", id).into()).set_http_code(200).send(false);
//! });
//!
//! let mut sink = Sink::default();
//! assert!(router.run(&SimpleRequest::new("GET", "/users/42"), &mut sink));
//! assert_eq!(sink.body, Some(Body::Text("user 42".into())));
//!
//! let mut sink = Sink::default();
//! assert!(!router.run(&SimpleRequest::new("GET", "/anything"), &mut sink));
//! assert_eq!(sink.status, 404);
//! ```

#![forbid(unsafe_code)]

mod error_table;
mod exchange;
mod method;
mod pattern;
mod route_table;
mod router;
mod router_macro;
mod strmap;

pub use crate::error_table::ErrorTable;
pub use crate::exchange::{Body, IncomingRequest, ResponseSink, SimpleRequest};
pub use crate::method::{Method, MethodSet};
pub use crate::pattern::{Params, Pattern};
pub use crate::route_table::{RouteEntry, RouteTable, VerbMap};
pub use crate::router::{BoxHandler, Dispatch, Handler, Lookup, Options, Router, RouterError};

#[cfg(feature = "http-adapter")]
mod http_adapter;

#[cfg(feature = "http-adapter")]
pub use crate::http_adapter::HttpResponseSink;

#[cfg(feature = "hyper-service")]
mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::{HyperRouter, RouterService};
