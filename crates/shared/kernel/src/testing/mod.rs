//! In-memory [`Page`](crate::page::Page) for slice test suites.
//!
//! Enable with the `testing` feature from `[dev-dependencies]`:
//! ```toml
//! folio-kernel = { workspace = true, features = ["testing"] }
//! ```

mod clock;
mod memory;
mod selector;

pub use memory::{MemoryPage, MemoryWatcher, NodeId, ScrollRequest};
