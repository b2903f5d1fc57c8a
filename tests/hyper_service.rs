#![cfg(feature = "hyper-service")]

use nuclear_dispatch::{Body, HyperRouter, Options, ResponseSink, RouterService};

use hyper::service::Service;
use hyper::{Request, StatusCode};
use serde_json::json;

fn service() -> RouterService {
    let mut router = HyperRouter::with_options(Options {
        method_not_allowed: Some(405),
        ..Options::default()
    });
    router
        .get("/hello/([^/]+)", |_, res, params| {
            let name = params.get(0).unwrap_or("nobody");
            res.set_body(Body::Text(format!("hello, {}!", name)))
                .set_http_code(200)
                .send(false);
        })
        .mount("/api/v1", |api| {
            api.post("/users/(?P<id>[0-9]+)", |req, res, params| {
                let id: u64 = params.name("id").unwrap().parse().unwrap();
                let agent = req
                    .headers()
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                res.set_headers(vec![("X-Agent", agent)])
                    .set_body(Body::Json(json!({ "id": id })))
                    .send(false);
            });
        })
        .on_error(404, |_, res, _| {
            res.set_body("404 Not Found".into());
        });
    RouterService::new(router)
}

async fn body_of(res: hyper::Response<hyper::Body>) -> Vec<u8> {
    hyper::body::to_bytes(res.into_body()).await.unwrap().to_vec()
}

#[tokio::test]
async fn routes_through_hyper() {
    let mut svc = service();

    let req = Request::get("/hello/world").body(hyper::Body::empty()).unwrap();
    let res = svc.call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/plain; charset=utf-8");
    assert_eq!(body_of(res).await, b"hello, world!");

    let req = Request::post("/api/v1/users/7")
        .header("user-agent", "test")
        .body(hyper::Body::empty())
        .unwrap();
    let res = svc.call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-agent"], "test");
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(body_of(res).await, br#"{"id":7}"#);
}

#[tokio::test]
async fn error_path_through_hyper() {
    let mut svc = service();

    let req = Request::get("/missing").body(hyper::Body::empty()).unwrap();
    let res = svc.call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(res).await, b"404 Not Found");

    let req = Request::delete("/hello/world").body(hyper::Body::empty()).unwrap();
    let res = svc.clone().call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()["allow"], "GET");
    assert!(body_of(res).await.is_empty());
}
