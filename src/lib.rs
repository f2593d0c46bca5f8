//! Chronologically ordered concurrent package pipeline.
//!
//! Producers insert opaque packages tagged with a caller-supplied timestamp;
//! the pipeline keeps them in a doubly linked chain sorted from newest to
//! oldest, and consumers detach either edge at any time.
//!
//! ```text
//! newest                                              oldest
//!   v                                                   v
//! [1181.000000500] -> [1181.000000100] -> [1180.000000900]
//! ```
//!
//! All mutation is serialized by one coarse lock; the only unsynchronized
//! access is the live counter behind [`Pipeline::count`].

pub mod clock;
pub mod error;
pub mod pipeline;
#[cfg(feature = "demo")]
pub mod producer;
pub mod shutdown;
pub mod stamp;

pub use clock::{Clock, MonotonicClock, SystemClock};
pub use error::{Error, Result};
pub use pipeline::{Drain, Edge, Orphan, Pipeline};
pub use stamp::{Timestamp, SUBSEC_MAX, SUBSEC_PER_SEC};
