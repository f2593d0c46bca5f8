//! Worker threads that feed the pipeline with jittered timestamps.
//!
//! Each worker loops {stamp, insert, sleep} until stopped. Stamps come from
//! a shared [`Clock`] with a bounded random offset added, so concurrent
//! workers produce out-of-order arrivals and exercise the insertion search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;
use rand::Rng;

use crate::clock::Clock;
use crate::pipeline::Pipeline;
use crate::stamp::{Timestamp, SUBSEC_MAX, SUBSEC_PER_SEC};

#[cfg(not(feature = "microsecond"))]
const JITTER_SPREAD: i64 = 500_000;
#[cfg(feature = "microsecond")]
const JITTER_SPREAD: i64 = 500;

/// Adds a bounded random offset to a clock reading, carrying sub-second
/// overflow into whole seconds. The result is always a valid timestamp;
/// normalization happens here, never inside the pipeline.
pub fn jitter(mut stamp: Timestamp, rng: &mut impl Rng) -> Timestamp {
    stamp.subsec += rng.gen_range(0..JITTER_SPREAD);
    while stamp.subsec > SUBSEC_MAX {
        stamp.sec += 1;
        stamp.subsec -= SUBSEC_PER_SEC;
    }
    stamp
}

/// A pool of producer threads. Dropping the pool without calling
/// [`ProducerPool::stop`] detaches the workers; `stop` joins them.
pub struct ProducerPool {
    stop: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl ProducerPool {
    pub fn spawn<T, C, F>(
        pipeline: Arc<Pipeline<T>>,
        clock: Arc<C>,
        workers: usize,
        delay: Duration,
        payload: F,
    ) -> Self
    where
        T: Send + 'static,
        C: Clock,
        F: Fn() -> T + Send + Clone + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let handles = (0..workers)
            .map(|_| {
                let pipeline = Arc::clone(&pipeline);
                let clock = Arc::clone(&clock);
                let stop = Arc::clone(&stop);
                let payload = payload.clone();
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    while !stop.load(Ordering::Acquire) {
                        let stamp = jitter(clock.now(), &mut rng);
                        if let Err(err) = pipeline.insert(payload(), stamp) {
                            warn!("producer insert rejected: {err}");
                        }
                        thread::sleep(delay);
                    }
                })
            })
            .collect();

        Self { stop, handles }
    }

    /// Signals all workers to stop and joins them.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Release);
        for handle in self.handles {
            let _ = handle.join();
        }
    }
}
