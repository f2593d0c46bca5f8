//! Sliding-window load driver: producer threads fill the pipeline while the
//! main loop bounds it by package count or by chronological span, evicting
//! from the oldest edge. A termination signal stops the producers and drains
//! whatever is left.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};

use chronopipe::producer::ProducerPool;
use chronopipe::{shutdown, Edge, MonotonicClock, Orphan, Pipeline, SUBSEC_PER_SEC};

type Payload = Vec<u8>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of producer threads
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    /// Per-iteration delay for each producer, in microseconds
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    delay_us: u64,

    /// Bound the window by package count or by chronological span
    #[arg(short, long, value_enum, default_value = "count")]
    mode: Mode,

    /// Window limit: packages for count mode, sub-second units for span mode
    #[arg(short, long)]
    limit: i64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Count,
    Span,
}

fn print_popped(pipeline: &Pipeline<Payload>, orphan: &Orphan<Payload>) {
    println!(
        "{} ({}) {{{}}}",
        orphan.timestamp(),
        pipeline.count(),
        pipeline.span()
    );
}

fn evict_by_count(pipeline: &Pipeline<Payload>, limit: i64) {
    let over = pipeline.count() as i64 - limit;
    if over < 1 {
        thread::sleep(Duration::from_micros(25));
        return;
    }
    for _ in 0..over {
        match pipeline.pop(Edge::Oldest) {
            Some(orphan) => print_popped(pipeline, &orphan),
            None => break,
        }
    }
}

fn evict_by_span(pipeline: &Pipeline<Payload>, limit: i64, per_second: i64) {
    let span = pipeline.span();
    if span <= limit {
        thread::sleep(Duration::from_micros(25));
        return;
    }
    let over = span - limit;
    debug!("span over budget: {span} - {limit} = {over}");
    // Estimate how many packages cover the excess width from the aggregate
    // production rate.
    let evictions = (over * per_second) / SUBSEC_PER_SEC;
    if evictions < 1 {
        thread::sleep(Duration::from_micros(25));
        return;
    }
    debug!("evicting ({over} * {per_second}) / {SUBSEC_PER_SEC} = {evictions}");
    for _ in 0..evictions {
        match pipeline.pop(Edge::Oldest) {
            Some(orphan) => print_popped(pipeline, &orphan),
            None => break,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    shutdown::install()?;

    let pipeline = Arc::new(Pipeline::new());
    let clock = Arc::new(MonotonicClock::new());
    let pool = ProducerPool::spawn(
        Arc::clone(&pipeline),
        clock,
        args.workers,
        Duration::from_micros(args.delay_us),
        || b"?".to_vec(),
    );
    info!(
        "{} producers, {}us delay, {:?} window limited to {}",
        args.workers, args.delay_us, args.mode, args.limit
    );

    let per_second = (1_000_000 * args.workers as i64) / args.delay_us as i64;
    while !shutdown::requested() {
        match args.mode {
            Mode::Count => evict_by_count(&pipeline, args.limit),
            Mode::Span => evict_by_span(&pipeline, args.limit, per_second),
        }
    }

    pool.stop();
    println!();
    println!("emptying the pipeline");
    for orphan in pipeline.drain(Edge::Oldest) {
        print_popped(&pipeline, &orphan);
    }
    Ok(())
}
