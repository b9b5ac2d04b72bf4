pub mod error;
pub mod memory;
pub mod redb_store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use redb_store::RedbStore;
