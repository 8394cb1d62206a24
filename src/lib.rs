//! Interactive pet registry.
//!
//! - [`models`]: pet records and their rendering.
//! - [`registry`]: the in-memory, insertion-ordered collection of pets.
//! - [`intake`]: the validated add-pet dialogue.
//! - [`console`]: the prompt/response port and the top-level menu loop.

pub mod console;
pub mod intake;
pub mod models;
pub mod registry;
