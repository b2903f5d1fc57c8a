/// Builds a [`Router`](crate::Router) from a list of routes.
///
/// ```
/// use nuclear_dispatch::{router, Router, SimpleRequest};
/// # use nuclear_dispatch::{Body, ResponseSink, Params};
/// # #[derive(Default)] struct Sink(u16);
/// # impl ResponseSink for Sink {
/// #     fn set_http_code(&mut self, code: u16) -> &mut Self { self.0 = code; self }
/// #     fn set_headers<I, K, V>(&mut self, _: I) -> &mut Self
/// #     where I: IntoIterator<Item = (K, V)>, K: Into<String>, V: Into<String> { self }
/// #     fn set_body(&mut self, _: Body) -> &mut Self { self }
/// #     fn send(&mut self, _: bool) {}
/// # }
/// fn hello(_: &SimpleRequest, res: &mut Sink, _: &Params<'_, '_>) {
///     res.set_http_code(200).send(false);
/// }
///
/// let router: Router<SimpleRequest, Sink> = router! {
///     GET "/hello" => hello,
///     @ "/api" => |api| {
///         api.get("/hello", hello);
///     }
/// };
/// assert!(router.run(&SimpleRequest::new("GET", "/api/hello"), &mut Sink::default()));
/// ```
#[macro_export]
macro_rules! router {
    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};

    {@entry $router:expr, @, $prefix:expr, $f:expr} => {
        $router.mount($prefix, $f)
    };
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.get($pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.post($pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.put($pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.delete($pattern, $data)
    };
    {@entry $router:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $router.options($pattern, $data)
    };
    {@entry $router:expr, PATCH, $pattern:expr, $data:expr} => {
        $router.patch($pattern, $data)
    };
    {@entry $router:expr, HEAD, $pattern:expr, $data:expr} => {
        $router.head($pattern, $data)
    };
    {@entry $router:expr, ALL, $pattern:expr, $data:expr} => {
        $router.all($pattern, $data)
    };
}
