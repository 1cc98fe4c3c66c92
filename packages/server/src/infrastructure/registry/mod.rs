//! ConnectionRegistry の実装
//!
//! - `inmemory`: プロセス内の Vec を使った実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
