use super::{BoxHandler, Options, Router, RouterError};

use crate::error_table::ErrorTable;
use crate::method::{Method, MethodSet};
use crate::pattern::Params;
use crate::route_table::RouteTable;

use std::sync::Arc;

impl<Q, S> Router<Q, S> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            routes: RouteTable::new(),
            errors: ErrorTable::new(),
            options,
        }
    }

    pub fn config(&self) -> &Options {
        &self.options
    }

    pub fn routes(&self) -> &RouteTable<BoxHandler<Q, S>> {
        &self.routes
    }

    pub fn errors(&self) -> &ErrorTable<BoxHandler<Q, S>> {
        &self.errors
    }

    /// Registers one handler for every verb in `methods`.
    ///
    /// Bits outside the verb universe are ignored.
    pub fn try_route(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        handler: BoxHandler<Q, S>,
    ) -> Result<&mut Self, RouterError> {
        for method in methods.decode() {
            self.routes.register(pattern, method, Arc::clone(&handler))?;
        }
        Ok(self)
    }

    pub fn route(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        handler: BoxHandler<Q, S>,
    ) -> &mut Self {
        if let Err(e) = self.try_route(methods, pattern, handler) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Builds a sub-router with `f` and merges it in with every pattern
    /// prefixed by `base`.
    ///
    /// `base` is concatenated as is; slashes are not normalized.
    pub fn try_mount(
        &mut self,
        base: &str,
        f: impl FnOnce(&mut Router<Q, S>),
    ) -> Result<&mut Self, RouterError> {
        let mut scratch = Self::with_options(self.options);
        f(&mut scratch);

        let Router { routes, errors, .. } = scratch;
        let routes = routes.prefixed(base)?;
        let errors = errors.prefixed(base)?;

        tracing::debug!(base, routes = routes.len(), "mounting sub-router");

        routes.merge_into(&mut self.routes);
        errors.merge_into(&mut self.errors);
        Ok(self)
    }

    pub fn mount(&mut self, base: &str, f: impl FnOnce(&mut Router<Q, S>)) -> &mut Self {
        if let Err(e) = self.try_mount(base, f) {
            panic!("{}: base = {:?}", e, base);
        }
        self
    }

    pub fn try_error_handler(
        &mut self,
        status: u16,
        pattern: Option<&str>,
        handler: BoxHandler<Q, S>,
    ) -> Result<&mut Self, RouterError> {
        self.errors.register(status, pattern, handler)?;
        Ok(self)
    }
}

impl<Q: 'static, S: 'static> Router<Q, S> {
    pub fn try_matches<F>(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        f: F,
    ) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        self.try_route(methods, pattern, Arc::new(f))
    }

    pub fn matches<F>(&mut self, methods: MethodSet, pattern: &str, f: F) -> &mut Self
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        self.route(methods, pattern, Arc::new(f))
    }

    /// Registers by verb name, failing on a name outside the verb universe.
    pub fn try_on<F>(&mut self, method: &str, pattern: &str, f: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        let method: Method = method.parse()?;
        self.try_matches(method.into(), pattern, f)
    }

    pub fn on<F>(&mut self, method: &str, pattern: &str, f: F) -> &mut Self
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        if let Err(e) = self.try_on(method, pattern, f) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Registers an error handler for `status` on every path.
    pub fn on_error<F>(&mut self, status: u16, f: F) -> &mut Self
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        self.on_error_at(status, crate::pattern::Pattern::CATCH_ALL, f)
    }

    pub fn try_on_error_at<F>(
        &mut self,
        status: u16,
        pattern: &str,
        f: F,
    ) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        self.try_error_handler(status, Some(pattern), Arc::new(f))
    }

    pub fn on_error_at<F>(&mut self, status: u16, pattern: &str, f: F) -> &mut Self
    where
        F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
    {
        if let Err(e) = self.try_on_error_at(status, pattern, f) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }
}

macro_rules! define_method {
    ($name:ident, $set:ident) => {
        pub fn $name<F>(&mut self, pattern: &str, f: F) -> &mut Self
        where
            F: Fn(&Q, &mut S, &Params<'_, '_>) + Send + Sync + 'static,
        {
            self.matches(MethodSet::$set, pattern, f)
        }
    };
}

impl<Q: 'static, S: 'static> Router<Q, S> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(options, OPTIONS);
    define_method!(patch, PATCH);
    define_method!(head, HEAD);
    define_method!(all, ALL);
}
