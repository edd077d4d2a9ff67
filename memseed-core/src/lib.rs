pub mod config;
pub mod error;
pub mod init;
pub mod models;
pub mod paths;

pub use crate::config::MemseedConfig;
pub use error::MemseedError;
pub use init::{ensure_store, InitOutcome};
pub use models::store::MemoryStore;
