//! `gs-trace` — derived columns for time-ordered vehicle traces.
//!
//! Given a trace of `(timestamp, lat, lon)` samples, [`TraceEnhancer`] adds:
//!
//! | Column  | Unit | Definition                                           |
//! |---------|------|------------------------------------------------------|
//! | `dt`    | s    | time since the previous sample (0 for the first)     |
//! | `dx`    | m    | great-circle distance from the previous sample       |
//! | `v`     | km/h | `dx / dt * 3.6`, or 0 where `dt` is 0                |
//!
//! Column names and the timestamp unit come from [`TraceConfig`]; the defaults
//! match the Vehicle Energy Dataset CSV layout.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`trace`]   | `Trace` columnar storage                         |
//! | [`enhance`] | `TraceEnhancer`                                  |
//! | [`csv`]     | `load_trace_csv`, `write_trace_csv`, readers     |
//! | [`config`]  | `TraceConfig`                                    |
//! | [`error`]   | `TraceError`, `TraceResult<T>`                   |

pub mod config;
pub mod csv;
pub mod enhance;
pub mod error;
pub mod trace;


pub use crate::csv::{load_trace_csv, load_trace_reader, write_trace_csv, write_trace_writer};
pub use config::TraceConfig;
pub use enhance::TraceEnhancer;
pub use error::{TraceError, TraceResult};
pub use trace::Trace;
