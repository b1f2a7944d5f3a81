// src/lib.rs
// shopkeep - turns free-form commands into product and order operations

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod agent;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod ops;
pub mod registry;
pub mod render;

pub use agent::Agent;
pub use config::{EnvConfig, ShopkeepConfig};
pub use db::Database;
pub use dispatch::{Dispatch, DispatchResult, Dispatcher};
pub use error::{DispatchError, OpError, Result};
pub use intent::{Intent, IntentResolver};
pub use registry::{Args, Operation, Param, ParamKind, Provenance, Registry, SubRegistry};
pub use render::Renderer;
