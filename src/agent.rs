// src/agent.rs
// Request pipeline: resolve intent, dispatch, render

use crate::config::ShopkeepConfig;
use crate::db::Database;
use crate::dispatch::{Dispatch, Dispatcher};
use crate::intent::IntentResolver;
use crate::ops::{auxiliary_operations, primary_operations};
use crate::registry::{Registry, RegistryListing};
use crate::render::Renderer;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns one line of text into one line-oriented reply.
///
/// Holds no per-request state, so a shared `Arc<Agent>` can serve concurrent
/// requests.
pub struct Agent<D: Dispatch = Dispatcher> {
    resolver: IntentResolver,
    dispatcher: D,
    renderer: Renderer,
}

impl Agent<Dispatcher> {
    /// Standard catalog: primary product and order operations merged with the
    /// auxiliary search operations
    pub fn with_catalog(db: Arc<Database>, config: &ShopkeepConfig) -> Self {
        let registry = Registry::merge([primary_operations(Arc::clone(&db)), auxiliary_operations(db)]);
        info!(operations = registry.len(), "Catalog registry built");

        Self::new(
            IntentResolver::new(config.catalog.known_categories.clone()),
            Dispatcher::new(Arc::new(registry)),
            Renderer::standard(),
        )
    }

    /// Registry listing for diagnostics
    pub fn tools(&self) -> RegistryListing {
        self.dispatcher.list_tools()
    }
}

impl<D: Dispatch> Agent<D> {
    pub fn new(resolver: IntentResolver, dispatcher: D, renderer: Renderer) -> Self {
        Self {
            resolver,
            dispatcher,
            renderer,
        }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Resolve `text`, run the operation and render its result.
    ///
    /// Unresolved text is answered with the resolver's hint and never reaches
    /// the dispatcher.
    pub fn handle(&self, text: &str) -> String {
        let intent = self.resolver.resolve(text);

        let Some(operation) = intent.operation else {
            let error = intent.error.unwrap_or_else(|| "Could not understand request".to_string());
            return format!("❌ {error}");
        };

        debug!(operation = %operation, provenance = %intent.provenance, "Dispatching");
        let result = self.dispatcher.call(&operation, intent.arguments);
        self.renderer.render(&operation, &result.into_value())
    }
}
