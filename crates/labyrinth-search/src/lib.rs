//! Closed-loop search over a street grid.
//!
//! [`SearchEngine`] grows every walk from a starting corner one block at a
//! time, one generation (path length) at a time. Walks that return to the
//! start within the configured length window are scored; new or tying
//! high scores go to a [`ResultSink`]. With a beam width configured, each
//! generation is cut back to its best-scoring walks before the next is
//! grown, trading completeness for bounded memory.
//!
//! [`SearchEngine::run_parallel`] shards each generation across scoped
//! worker threads that feed candidate loops over a channel to a single
//! aggregator owning the running high score and the sink.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod sink;

pub use config::{LengthBounds, LoopClosure, SearchConfig};
pub use context::SearchContext;
pub use engine::{SearchEngine, SearchReport};
pub use error::{SearchError, SinkError};
pub use metrics::SearchMetrics;
pub use sink::{LoopResult, MemorySink, ResultSink};
