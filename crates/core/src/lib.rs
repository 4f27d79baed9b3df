//! Domain layer: request validation, phrase banks, topic selection, and the
//! content synthesizer. No I/O lives here.

pub mod content;
pub mod error;
pub mod generator;
pub mod phrases;
pub mod request;
pub mod topics;
