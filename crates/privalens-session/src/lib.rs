//! PrivaLens Session Store
//!
//! Reference in-process implementation of the `SessionStore` trait. A
//! durable deployment swaps in another implementation behind the same
//! trait; callers never notice.

mod memory;

pub use memory::MemorySessionStore;
