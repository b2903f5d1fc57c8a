#![forbid(unsafe_code)]

use crate::exchange::{Body, IncomingRequest, ResponseSink};

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{Request, Response, StatusCode};

impl<B> IncomingRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

/// Collects a response in memory until it is turned into an [`http::Response`].
///
/// Once `send` has been called, later changes are ignored.
#[derive(Debug, Clone)]
pub struct HttpResponseSink {
    status: u16,
    headers: Vec<(String, String)>,
    body: Body,
    sent: bool,
}

impl Default for HttpResponseSink {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponseSink {
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Body::Empty,
            sent: false,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn into_response<B: From<Vec<u8>>>(self) -> Result<Response<B>, http::Error> {
        let content_type = self.body.content_type();
        let mut res = Response::new(B::from(self.body.into_bytes()));
        *res.status_mut() = StatusCode::from_u16(self.status)?;

        let headers = res.headers_mut();
        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(&value)?;
            headers.insert(name, value);
        }
        if let Some(ct) = content_type {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
            }
        }
        Ok(res)
    }
}

impl ResponseSink for HttpResponseSink {
    fn set_http_code(&mut self, code: u16) -> &mut Self {
        if !self.sent {
            self.status = code;
        }
        self
    }

    fn set_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if self.sent {
            return self;
        }
        for (name, value) in headers {
            let (name, value) = (name.into(), value.into());
            match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
                Some(slot) => slot.1 = value,
                None => self.headers.push((name, value)),
            }
        }
        self
    }

    fn set_body(&mut self, body: Body) -> &mut Self {
        if !self.sent {
            self.body = body;
        }
        self
    }

    fn send(&mut self, _exit_after: bool) {
        self.sent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_method_and_path() {
        let req = Request::post("http://example.com/users/42?x=1")
            .body(())
            .unwrap();
        assert_eq!(IncomingRequest::method(&req), "POST");
        assert_eq!(IncomingRequest::path(&req), "/users/42");
    }

    #[test]
    fn sink_into_response() {
        let mut sink = HttpResponseSink::new();
        sink.set_headers(vec![("X-A", "1"), ("x-a", "2")])
            .set_body(Body::Json(serde_json::json!({"ok": true})))
            .set_http_code(201)
            .send(true);
        sink.set_http_code(500);

        assert!(sink.is_sent());
        assert_eq!(sink.status(), 201);
        assert_eq!(sink.header("x-a"), Some("2"));

        let res: Response<Vec<u8>> = sink.into_response().unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()["x-a"], "2");
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(res.body().as_slice(), br#"{"ok":true}"#);
    }

    #[test]
    fn invalid_status_is_an_error() {
        let mut sink = HttpResponseSink::new();
        sink.set_http_code(1000);
        assert!(sink.into_response::<Vec<u8>>().is_err());
    }
}
