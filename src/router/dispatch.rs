use super::{BoxHandler, Handler, Router};

use crate::exchange::{IncomingRequest, ResponseSink};
use crate::method::{Method, MethodSet};
use crate::pattern::{Params, Pattern};

use std::fmt;

/// Outcome of looking a method and path up in the route table.
pub enum Lookup<'r, 'p, T> {
    Found {
        pattern: &'r Pattern,
        handler: &'r T,
        params: Params<'r, 'p>,
    },
    /// The first matching pattern has no handler for the verb.
    MethodNotAllowed {
        pattern: &'r Pattern,
        allowed: MethodSet,
    },
    NotFound,
}

impl<T> Lookup<'_, '_, T> {
    pub fn is_found(&self) -> bool {
        match self {
            Lookup::Found { .. } => true,
            _ => false,
        }
    }
}

// Handlers are trait objects without `Debug`, so the handler is left out.
impl<T> fmt::Debug for Lookup<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found { pattern, params, .. } => f
                .debug_struct("Found")
                .field("pattern", pattern)
                .field("params", params)
                .finish(),
            Lookup::MethodNotAllowed { pattern, allowed } => f
                .debug_struct("MethodNotAllowed")
                .field("pattern", pattern)
                .field("allowed", allowed)
                .finish(),
            Lookup::NotFound => f.write_str("NotFound"),
        }
    }
}

/// A router bound to one request and its response sink.
pub struct Dispatch<'r, 'a, Q, S> {
    router: &'r Router<Q, S>,
    request: &'a Q,
    response: &'a mut S,
}

impl<Q, S> Router<Q, S> {
    /// First-match lookup: only the earliest pattern matching `path` is
    /// considered, whether or not it has a handler for `method`.
    pub fn find<'r, 'p>(
        &'r self,
        method: &str,
        path: &'p str,
    ) -> Lookup<'r, 'p, BoxHandler<Q, S>> {
        let (entry, params) = match self.routes.find(path) {
            Some(hit) => hit,
            None => return Lookup::NotFound,
        };
        let verbs = entry.verbs();
        match Method::lookup(method).and_then(|m| verbs.get(m)) {
            Some(handler) => Lookup::Found {
                pattern: entry.pattern(),
                handler,
                params,
            },
            None => Lookup::MethodNotAllowed {
                pattern: entry.pattern(),
                allowed: verbs.allowed(),
            },
        }
    }

    pub fn bind<'r, 'a>(&'r self, request: &'a Q, response: &'a mut S) -> Dispatch<'r, 'a, Q, S> {
        Dispatch {
            router: self,
            request,
            response,
        }
    }
}

impl<Q, S> Router<Q, S>
where
    Q: IncomingRequest,
    S: ResponseSink,
{
    /// Dispatches one request. Returns `true` if a route handler ran.
    pub fn run(&self, request: &Q, response: &mut S) -> bool {
        self.bind(request, response).run()
    }

    pub fn trigger_error(&self, request: &Q, response: &mut S, status: u16) {
        self.bind(request, response).trigger_error(status)
    }
}

impl<Q, S> Dispatch<'_, '_, Q, S>
where
    Q: IncomingRequest,
    S: ResponseSink,
{
    /// Either the matched handler produces the response, or the error path
    /// sends a status response. Never both.
    pub fn run(&mut self) -> bool {
        let router = self.router;
        let request = self.request;
        let method = request.method();
        let path = request.path();
        let options = router.options;

        tracing::trace!(method, path, "dispatching request");

        match router.find(method, path) {
            Lookup::Found {
                pattern,
                handler,
                params,
            } => {
                tracing::debug!(method, path, pattern = pattern.as_str(), "route matched");
                Handler::call(&**handler, request, &mut *self.response, &params);
                true
            }
            Lookup::MethodNotAllowed { pattern, allowed } => {
                tracing::debug!(method, path, pattern = pattern.as_str(), "method not allowed");
                let status = match options.method_not_allowed {
                    Some(status) => {
                        self.response.set_headers(Some(("Allow", allow_header(allowed))));
                        status
                    }
                    None => options.not_found_status,
                };
                self.trigger_error(status);
                false
            }
            Lookup::NotFound => {
                tracing::debug!(method, path, "no route matched");
                self.trigger_error(options.not_found_status);
                false
            }
        }
    }

    /// Runs the first error handler registered for `status` whose pattern
    /// matches the path, then sends the status response.
    pub fn trigger_error(&mut self, status: u16) {
        let router = self.router;
        let request = self.request;
        let path = request.path();

        match router.errors.resolve(status, path) {
            Some((pattern, handler, params)) => {
                tracing::debug!(status, path, pattern = pattern.as_str(), "running error handler");
                Handler::call(&**handler, request, &mut *self.response, &params);
            }
            None => {
                tracing::debug!(status, path, "no error handler, sending bare status");
            }
        }

        self.response
            .set_http_code(status)
            .send(router.options.exit_after_error);
    }
}

fn allow_header(allowed: MethodSet) -> String {
    let names: Vec<&str> = allowed.decode().map(Method::as_str).collect();
    names.join(", ")
}
