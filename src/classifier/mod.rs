//! Heuristic classifiers over normalized SMS bodies.
//!
//! Each classifier is a pure function of the message text; the extractor
//! composes them. Compiled patterns live in process-wide `OnceLock` statics.

pub mod amount;
pub mod channel;
pub mod status;
