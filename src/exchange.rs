//! The two sides of one request: what the router reads and where the response goes.

use std::borrow::Cow;

/// Source of the method and path a router dispatches on.
pub trait IncomingRequest {
    fn method(&self) -> &str;

    /// The request path. Whether host or query are stripped is up to the implementor.
    fn path(&self) -> &str;
}

/// Destination of the response for one request.
///
/// `send` flushes whatever status, headers and body are currently set.
pub trait ResponseSink {
    fn set_http_code(&mut self, code: u16) -> &mut Self;

    fn set_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>;

    fn set_body(&mut self, body: Body) -> &mut Self;

    fn send(&mut self, exit_after: bool);
}

/// A response body. Text and bytes are sent verbatim, JSON is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl Default for Body {
    fn default() -> Self {
        Body::Empty
    }
}

impl Body {
    pub fn as_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Body::Empty => Cow::Borrowed(&[]),
            Body::Text(s) => Cow::Borrowed(s.as_bytes()),
            Body::Bytes(b) => Cow::Borrowed(b.as_slice()),
            Body::Json(v) => Cow::Owned(v.to_string().into_bytes()),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Empty => Vec::new(),
            Body::Text(s) => s.into_bytes(),
            Body::Bytes(b) => b,
            Body::Json(v) => v.to_string().into_bytes(),
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Body::Empty | Body::Bytes(_) => None,
            Body::Text(_) => Some("text/plain; charset=utf-8"),
            Body::Json(_) => Some("application/json"),
        }
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Text(s.to_owned())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<Vec<u8>> for Body {
    fn from(b: Vec<u8>) -> Self {
        Body::Bytes(b)
    }
}

impl From<serde_json::Value> for Body {
    fn from(v: serde_json::Value) -> Self {
        Body::Json(v)
    }
}

/// An owned method and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRequest {
    pub method: String,
    pub path: String,
}

impl SimpleRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl IncomingRequest for SimpleRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }
}

impl<M, P> IncomingRequest for (M, P)
where
    M: AsRef<str>,
    P: AsRef<str>,
{
    fn method(&self) -> &str {
        self.0.as_ref()
    }

    fn path(&self) -> &str {
        self.1.as_ref()
    }
}
