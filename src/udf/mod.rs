// Query-engine facing layer: a static table of named row functions and a
// driver that feeds delimited rows through one of them.

pub mod batch;
pub mod registry;

pub use registry::{invoke, lookup, Udf, Value, REGISTRY};
