// src/registry.rs
// Operation registry - named, parameter-checked operations merged from groups

use crate::error::{OpError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Arguments passed to an operation, keyed by parameter name
pub type Args = serde_json::Map<String, Value>;

type Handler = Arc<dyn Fn(Args) -> Result<Value> + Send + Sync>;

/// Where an operation (or a resolved intent) comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Product and order actions
    Primary,
    /// Read-only derived operations such as search
    Auxiliary,
    /// Nothing was resolved
    Unknown,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::Primary => "primary",
            Provenance::Auxiliary => "auxiliary",
            Provenance::Unknown => "unknown",
        })
    }
}

/// JSON type a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Number,
    String,
    Boolean,
}

impl ParamKind {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::String => value.is_string(),
            ParamKind::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Integer => "an integer",
            ParamKind::Number => "a number",
            ParamKind::String => "a string",
            ParamKind::Boolean => "a boolean",
        })
    }
}

/// One declared parameter of an operation
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl Param {
    pub fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    /// Value used when the caller omits this (optional) parameter
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A named unit of work with a declared parameter contract
#[derive(Clone)]
pub struct Operation {
    name: String,
    provenance: Provenance,
    params: Vec<Param>,
    handler: Handler,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("provenance", &self.provenance)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Operation {
    /// Operation over raw JSON arguments
    pub fn new(
        name: impl Into<String>,
        provenance: Provenance,
        params: Vec<Param>,
        handler: impl Fn(Args) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            provenance,
            params,
            handler: Arc::new(handler),
        }
    }

    /// Operation whose arguments are deserialized into `I` and whose output is serialized from `O`
    pub fn typed<I, O, F>(name: impl Into<String>, provenance: Provenance, params: Vec<Param>, f: F) -> Self
    where
        I: DeserializeOwned,
        O: Serialize,
        F: Fn(I) -> Result<O> + Send + Sync + 'static,
    {
        Self::new(name, provenance, params, move |args| {
            let input: I = serde_json::from_value(Value::Object(args))
                .map_err(|e| OpError::InvalidArguments(e.to_string()))?;
            Ok(serde_json::to_value(f(input)?)?)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Check `args` against the parameter contract and fill in defaults.
    ///
    /// `null` for an optional parameter counts as absent. The error is a
    /// human-readable detail naming the offending parameters.
    pub fn bind(&self, mut args: Args) -> std::result::Result<Args, String> {
        let unexpected: Vec<&str> = args
            .keys()
            .filter(|k| !self.params.iter().any(|p| p.name == k.as_str()))
            .map(String::as_str)
            .collect();
        if !unexpected.is_empty() {
            return Err(describe("unexpected argument", &unexpected));
        }

        let mut bound = Args::new();
        let mut missing = Vec::new();
        for param in &self.params {
            match args.remove(param.name) {
                None | Some(Value::Null) => {
                    if param.required {
                        missing.push(param.name);
                    } else if let Some(default) = &param.default {
                        bound.insert(param.name.to_string(), default.clone());
                    }
                }
                Some(value) => {
                    if !param.kind.accepts(&value) {
                        return Err(format!("argument '{}' must be {}", param.name, param.kind));
                    }
                    bound.insert(param.name.to_string(), value);
                }
            }
        }
        if !missing.is_empty() {
            return Err(describe("missing required argument", &missing));
        }
        Ok(bound)
    }

    /// Run the handler on already-bound arguments
    pub fn invoke(&self, args: Args) -> Result<Value> {
        (self.handler)(args)
    }
}

fn describe(what: &str, names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    let plural = if names.len() == 1 { "" } else { "s" };
    format!("{what}{plural} {}", quoted.join(", "))
}

/// A named group of operations authored together, merged into a [`Registry`]
#[derive(Debug, Clone)]
pub struct SubRegistry {
    group: String,
    operations: Vec<Operation>,
}

impl SubRegistry {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            operations: Vec::new(),
        }
    }

    pub fn with(mut self, operation: Operation) -> Self {
        self.register(operation);
        self
    }

    /// Add an operation; a later operation with the same name replaces the earlier one
    pub fn register(&mut self, operation: Operation) {
        self.operations.retain(|op| op.name != operation.name);
        self.operations.push(operation);
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn names(&self) -> Vec<String> {
        self.operations.iter().map(|op| op.name.clone()).collect()
    }
}

/// A name defined by more than one group; the later group's operation is the one kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub name: String,
    pub shadowed_group: String,
    pub kept_group: String,
}

/// Operation names of one group, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupListing {
    pub group: String,
    pub operations: Vec<String>,
}

/// Registry introspection: grouped names plus the number of callable operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryListing {
    pub groups: Vec<GroupListing>,
    pub total: usize,
}

/// Immutable name → operation table built once at startup
#[derive(Debug, Default)]
pub struct Registry {
    operations: HashMap<String, Arc<Operation>>,
    owners: HashMap<String, String>,
    groups: Vec<GroupListing>,
    collisions: Vec<Collision>,
}

impl Registry {
    /// Merge sub-registries left to right.
    ///
    /// On a name collision the later sub-registry wins. Every collision is
    /// logged and kept in [`Registry::collisions`].
    pub fn merge(subs: impl IntoIterator<Item = SubRegistry>) -> Self {
        let mut registry = Registry::default();

        for sub in subs {
            registry.groups.push(GroupListing {
                group: sub.group.clone(),
                operations: sub.names(),
            });

            for op in sub.operations {
                let name = op.name.clone();
                if let Some(previous) = registry.owners.insert(name.clone(), sub.group.clone()) {
                    warn!(
                        operation = %name,
                        shadowed = %previous,
                        kept = %sub.group,
                        "Operation name collision, later group wins"
                    );
                    registry.collisions.push(Collision {
                        name: name.clone(),
                        shadowed_group: previous,
                        kept_group: sub.group.clone(),
                    });
                }
                registry.operations.insert(name, Arc::new(op));
            }
        }

        debug!(
            total = registry.operations.len(),
            groups = registry.groups.len(),
            "Registry built"
        );
        registry
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name).map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Group that owns `name` after merging
    pub fn owner(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Names per group in merge order, with the total number of callable operations
    pub fn list_names(&self) -> RegistryListing {
        RegistryListing {
            groups: self.groups.clone(),
            total: self.operations.len(),
        }
    }
}
