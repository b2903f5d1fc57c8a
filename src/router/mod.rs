mod dispatch;
mod error;
mod handler;
mod imp;

pub use self::dispatch::{Dispatch, Lookup};
pub use self::error::RouterError;
pub use self::handler::{BoxHandler, Handler};

use crate::error_table::ErrorTable;
use crate::route_table::RouteTable;

/// Routes, error handlers and options, built once and then dispatched against.
pub struct Router<Q, S> {
    routes: RouteTable<BoxHandler<Q, S>>,
    errors: ErrorTable<BoxHandler<Q, S>>,
    options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Status triggered when no pattern matches the path.
    pub not_found_status: u16,

    /// Status triggered when the matching pattern lacks the requested verb.
    /// `None` reports it as `not_found_status`. When set, an `Allow`
    /// header is set before the error path runs.
    pub method_not_allowed: Option<u16>,

    /// Passed to `ResponseSink::send` on the error path.
    pub exit_after_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            not_found_status: 404,
            method_not_allowed: None,
            exit_after_error: true,
        }
    }
}

impl<Q, S> Default for Router<Q, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, S> std::fmt::Debug for Router<Q, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let patterns: Vec<&str> = self.routes.entries().map(|e| e.pattern().as_str()).collect();
        f.debug_struct("Router")
            .field("routes", &patterns)
            .field("options", &self.options)
            .finish()
    }
}
