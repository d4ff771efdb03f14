//! Fill a large vector across worker threads, then print a short one.
//!
//! Run with `RUST_LOG=debug` to see the chunk plan.

use vgen::{fill_threaded, Braced, Filler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .init();

    let source: [i64; 9] = [1, 5_566_789_809, 3, 5, 6, 7, 8, 9, 0];

    let big = fill_threaded(&source, 10_000_000, 16)?;
    println!("{}", big.len());

    let filler = Filler::new().with_threads(3).with_seed(7);
    let small = filler.fill(&source, 12)?;
    println!("chunks {:?}", filler.plan(12).sizes());
    println!("{}", Braced(&small));

    Ok(())
}
