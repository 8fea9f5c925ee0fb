//! Storage trait abstraction
//!
//! Async domain traits implemented by every backend and by the
//! enum-dispatched [`crate::StorageBackend`].

pub mod answer;
pub mod session;

pub use answer::AnswerStore;
pub use session::SessionStore;
