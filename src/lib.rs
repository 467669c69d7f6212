// textkit: per-row text heuristics for query engines.
//
// This is the library root. `text` holds the pure functions, `udf` exposes
// them by name to a row-processing engine, and `output` renders results.

pub mod config;
pub mod output;
pub mod text;
pub mod udf;
