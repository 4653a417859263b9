//! Artifact persistence: the sink trait, PNG/PDF encoding and an in-memory sink.

pub mod pdf;
pub mod sink;
