//! Storage layer - store abstraction, backends, and repositories
//!
//! # Design Principles
//!
//! - One shared store handle, injected through `AppState` - no globals
//! - Concurrency is delegated to the driver's connection pool - no app-level locks
//! - Every repository call runs under a deadline - no retries
//! - Single-document writes only - no cross-collection transactions

pub mod deadline;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod repos;
pub mod store;

pub use deadline::DEFAULT_OPERATION_TIMEOUT;
pub use error::DbError;
pub use memory::MemoryStore;
pub use mongo::{MongoConfig, MongoStore};
pub use repos::*;
pub use store::MetricsStore;
