#![forbid(unsafe_code)]

use crate::http_adapter::HttpResponseSink;
use crate::router::Router;

use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, StatusCode};

type Request = hyper::Request<Body>;
type Response = hyper::Response<Body>;

pub type HyperRouter = Router<Request, HttpResponseSink>;

/// Serves every request by running it through a shared router.
#[derive(Debug)]
pub struct RouterService {
    router: Arc<HyperRouter>,
}

impl Clone for RouterService {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl RouterService {
    pub fn new(router: HyperRouter) -> Self {
        Self::from_shared(Arc::new(router))
    }

    pub fn from_shared(router: Arc<HyperRouter>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &HyperRouter {
        &self.router
    }

    /// Runs the router and converts what the sink collected.
    pub fn handle(&self, req: &Request) -> Response {
        let mut sink = HttpResponseSink::new();
        self.router.run(req, &mut sink);
        match sink.into_response() {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(error = %e, "handler produced an invalid response");
                let mut res = Response::new(Body::empty());
                *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                res
            }
        }
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        ready(Ok(self.handle(&req)))
    }
}

impl From<HyperRouter> for RouterService {
    fn from(router: HyperRouter) -> Self {
        Self::new(router)
    }
}
