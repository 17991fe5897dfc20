//! Request dispatch.
//!
//! Turns one request into one response in a fixed order: route
//! aliasing, private-prefix check, handler lookup, static file
//! fallback. The order is load-bearing: the privacy check sees the
//! resolved target, while handlers are keyed on the raw one.

use std::collections::HashMap;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::Config;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::server::store::FileStore;

/// A registered handler: called with the full request, its response is
/// sent back verbatim.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

pub struct Router {
    routes: HashMap<String, String>,
    private: Vec<String>,
    handlers: HashMap<String, HashMap<Method, Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            private: vec!["/.git".to_string(), "/.env".to_string()],
            handlers: HashMap::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new()
            .with_routes(cfg.routes.clone())
            .with_private(cfg.private.clone())
    }

    /// Replaces the route-alias table (logical path -> physical path).
    pub fn with_routes(mut self, routes: HashMap<String, String>) -> Self {
        self.routes = routes;
        self
    }

    /// Replaces the private-prefix list. An empty list keeps the
    /// defaults; privacy cannot be disabled by omission.
    pub fn with_private(mut self, prefixes: Vec<String>) -> Self {
        if !prefixes.is_empty() {
            self.private = prefixes;
        }
        self
    }

    /// Registers a handler for an exact raw target and method.
    ///
    /// A target with any handler entry never falls through to file
    /// serving, even for methods it does not handle.
    pub fn handler(
        mut self,
        target: impl Into<String>,
        method: Method,
        f: impl Fn(&Request) -> Response + Send + Sync + 'static,
    ) -> Self {
        self.handlers
            .entry(target.into())
            .or_default()
            .insert(method, Box::new(f));
        self
    }

    /// Dispatches one request.
    ///
    /// Policy outcomes (forbidden, method not allowed, not found) are
    /// responses, not errors; only unexpected I/O failures escape as
    /// `Err`.
    pub async fn dispatch(&self, request: &Request, store: &FileStore) -> anyhow::Result<Response> {
        let target = self
            .routes
            .get(&request.target)
            .cloned()
            .unwrap_or_else(|| request.target.clone());
        debug!(target = %target, "Resolved target");

        for prefix in &self.private {
            if target.starts_with(prefix.as_str()) {
                warn!(target = %target, "Attempt to access private endpoint");
                return Ok(Response::new(StatusCode::Forbidden));
            }
        }

        // Handlers match the raw target, before route aliasing.
        if let Some(methods) = self.handlers.get(&request.target) {
            if let Some(handle) = methods.get(&request.method) {
                debug!(method = ?request.method, "Handling request with custom handler");
                return Ok(handle(request));
            }

            return Ok(Response::new(StatusCode::MethodNotAllowed));
        }

        self.serve_file(request, &target, store).await
    }

    async fn serve_file(
        &self,
        request: &Request,
        target: &str,
        store: &FileStore,
    ) -> anyhow::Result<Response> {
        let file_name = target.strip_prefix('/').unwrap_or(target);

        // Without a handler, only GET reaches the file store; anything
        // else is treated the same as a missing file.
        if request.method != Method::GET {
            warn!(method = ?request.method, file = %file_name, "No handler for method");
            return Ok(Response::new(StatusCode::NotFound));
        }

        // An empty key would name the document root itself
        if file_name.is_empty() {
            warn!("Empty file name after stripping separator");
            return Ok(Response::new(StatusCode::NotFound));
        }

        match store.read(file_name).await {
            Ok(body) => {
                debug!(file = %file_name, "Reading file");
                // Everything after the last dot; the whole name when
                // there is no dot.
                let extension = file_name.rsplit('.').next().unwrap_or(file_name);

                Ok(Response::new(StatusCode::Ok)
                    .with_header("Content-Type", mime::content_type_for(extension))
                    .with_body(body))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(file = %file_name, "File not found");
                Ok(Response::new(StatusCode::NotFound))
            }
            Err(e) => Err(e).with_context(|| format!("reading file {file_name}")),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
