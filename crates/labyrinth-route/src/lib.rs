//! Evaluation of walked paths.
//!
//! Both halves are pure functions of a path: [`score`] turns it into a
//! number for ranking, [`render`] turns it into directions a person can
//! follow. They share one per-corner analysis ([`transition`]) so the
//! crossing count penalized by the score is exactly the one the
//! directions describe.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod instructions;
pub mod score;
pub mod transition;

pub use instructions::{render, Instructions, DONE};
pub use score::{score, unique_segments, Score, PENALTY_REUSE, PENALTY_UTURN, REWARD_UNIQUE};
pub use transition::{transition, Transition};
