// src/dispatch.rs
// Dispatcher - the single boundary between resolved intents and operations

use crate::error::DispatchError;
use crate::registry::{Args, Registry, RegistryListing};
use serde_json::{Value, json};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one dispatched call
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    /// The operation's own payload, untouched
    Success(Value),
    Failure(DispatchError),
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success(_))
    }

    pub fn error(&self) -> Option<&DispatchError> {
        match self {
            DispatchResult::Success(_) => None,
            DispatchResult::Failure(err) => Some(err),
        }
    }

    /// Payload on success, `{"success": false, "error": ...}` on failure
    pub fn into_value(self) -> Value {
        match self {
            DispatchResult::Success(value) => value,
            DispatchResult::Failure(err) => json!({
                "success": false,
                "error": err.to_string(),
            }),
        }
    }
}

/// Anything that can execute a named operation.
///
/// Implementations must never panic or return an error past this call; every
/// failure is a [`DispatchResult::Failure`].
pub trait Dispatch: Send + Sync {
    fn call(&self, name: &str, args: Args) -> DispatchResult;
}

/// Registry-backed dispatcher
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Same as [`Dispatch::call`], serialized as compact JSON text
    pub fn call_json(&self, name: &str, args: Args) -> String {
        self.call(name, args).into_value().to_string()
    }

    /// Registry introspection for diagnostics
    pub fn list_tools(&self) -> RegistryListing {
        self.registry.list_names()
    }
}

impl Dispatch for Dispatcher {
    fn call(&self, name: &str, args: Args) -> DispatchResult {
        let Some(op) = self.registry.get(name) else {
            warn!(operation = name, "Unknown operation");
            return DispatchResult::Failure(DispatchError::UnknownOperation(name.to_string()));
        };

        let bound = match op.bind(args) {
            Ok(bound) => bound,
            Err(detail) => {
                warn!(operation = name, %detail, "Arguments rejected");
                return DispatchResult::Failure(DispatchError::InvalidArguments {
                    name: name.to_string(),
                    detail,
                });
            }
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| op.invoke(bound)));
        match outcome {
            Ok(Ok(value)) => {
                info!(operation = name, provenance = %op.provenance(), "Operation succeeded");
                DispatchResult::Success(value)
            }
            Ok(Err(err)) => {
                let err = DispatchError::from_op(name, err);
                warn!(operation = name, error = %err, "Operation failed");
                DispatchResult::Failure(err)
            }
            Err(panic) => {
                let detail = panic_message(panic.as_ref());
                warn!(operation = name, %detail, "Operation panicked");
                DispatchResult::Failure(DispatchError::ExecutionFailed(detail))
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "operation panicked".to_string()
    }
}
