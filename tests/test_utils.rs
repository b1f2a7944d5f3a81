//! Test utilities for shopkeep integration tests

#![allow(dead_code)]

use shopkeep::{
    Agent, Args, Database, Dispatch, DispatchResult, IntentResolver, Renderer, ShopkeepConfig,
};
use std::sync::{Arc, Mutex};

/// Agent over the full catalog backed by an in-memory database
pub struct TestContext {
    db: Arc<Database>,
    agent: Agent,
}

impl TestContext {
    /// Empty catalog
    pub fn new() -> Self {
        let db = Arc::new(Database::open_in_memory().expect("Failed to create in-memory database"));
        let agent = Agent::with_catalog(Arc::clone(&db), &ShopkeepConfig::default());
        Self { db, agent }
    }

    /// Catalog holding the five demo products
    pub fn seeded() -> Self {
        let ctx = Self::new();
        ctx.db.seed_if_empty().expect("Failed to seed catalog");
        ctx
    }

    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn handle(&self, text: &str) -> String {
        self.agent.handle(text)
    }
}

/// Dispatcher stand-in that records calls and returns a fixed result
pub struct SpyDispatcher {
    calls: Mutex<Vec<(String, Args)>>,
    reply: DispatchResult,
}

impl SpyDispatcher {
    pub fn new(reply: DispatchResult) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("spy lock").len()
    }

    pub fn calls(&self) -> Vec<(String, Args)> {
        self.calls.lock().expect("spy lock").clone()
    }
}

impl Dispatch for SpyDispatcher {
    fn call(&self, name: &str, args: Args) -> DispatchResult {
        self.calls.lock().expect("spy lock").push((name.to_string(), args));
        self.reply.clone()
    }
}

/// Agent with the standard resolver and renderer over a spy dispatcher
pub fn spy_agent(reply: DispatchResult) -> Agent<SpyDispatcher> {
    Agent::new(IntentResolver::default(), SpyDispatcher::new(reply), Renderer::standard())
}
