//! Persistence Layer
//!
//! Storage slot abstraction, the JSON codec for the task list, and the
//! persisted session that rewrites the slot after every list mutation.

mod codec;
mod storage;
mod session;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode, load_records};
pub use storage::{MemoryStorage, SlotStorage};
pub use session::TodoSession;
