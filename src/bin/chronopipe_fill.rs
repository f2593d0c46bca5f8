//! Fill-then-drain driver: inserts randomly jittered timestamps from a
//! single thread until the pipeline holds more than the limit (or a signal
//! arrives), then drains oldest-first, printing every package.

use anyhow::Result;
use clap::Parser;

use chronopipe::{producer, shutdown, Clock, Edge, MonotonicClock, Pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Stop filling once the pipeline holds more than this many packages
    #[arg(short, long)]
    limit: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    shutdown::install()?;

    let pipeline: Pipeline<Vec<u8>> = Pipeline::new();
    let clock = MonotonicClock::new();
    let mut rng = rand::thread_rng();

    while !shutdown::requested() {
        let stamp = producer::jitter(clock.now(), &mut rng);
        pipeline.insert(b"?".to_vec(), stamp)?;
        if pipeline.count() > args.limit {
            break;
        }
    }

    println!();
    for orphan in pipeline.drain(Edge::Oldest) {
        println!(
            "{} ({}) {{{}}}",
            orphan.timestamp(),
            pipeline.count(),
            pipeline.span()
        );
    }
    Ok(())
}
