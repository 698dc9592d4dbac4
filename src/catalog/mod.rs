//! Catalog-specific store behavior: validation, patching, and the query
//! dispatch that hands snapshots to the pipeline.

pub mod entity;
pub mod error;

pub use error::*;
