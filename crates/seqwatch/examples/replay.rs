//! Feeds a randomly impaired sequence-number stream through a monitor and
//! prints the resulting report.
//!
//! Run with defaults (1000 numbers, 5% loss, 2% duplication, jitter 4):
//! - cargo run -p seqwatch --example replay
//!
//! Or pick your own impairments:
//! - cargo run -p seqwatch --example replay -- 10000 10 5 8
//!   (10000 numbers, 10% loss, 5% duplication, reorder jitter 8)

use std::env;

use rand::Rng;
use seqwatch::SequenceMonitor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Args: [count] [loss_percent] [dup_percent] [jitter]
    let mut args = env::args().skip(1);
    let count: usize = args.next().unwrap_or_else(|| "1000".into()).parse().unwrap_or(1000);
    let loss: u32 = args.next().unwrap_or_else(|| "5".into()).parse().unwrap_or(5);
    let dup: u32 = args.next().unwrap_or_else(|| "2".into()).parse().unwrap_or(2);
    let jitter: usize = args.next().unwrap_or_else(|| "4".into()).parse().unwrap_or(4);

    let mut rng = rand::thread_rng();

    // Model an unreliable transport: drop some numbers, duplicate others,
    // then displace each survivor by a bounded random distance.
    let mut stream: Vec<i64> = Vec::with_capacity(count);
    for n in 0..count as i64 {
        if rng.gen_range(0..100) < loss {
            continue;
        }
        stream.push(n);
        if rng.gen_range(0..100) < dup {
            stream.push(n);
        }
    }
    if jitter > 0 {
        for i in 0..stream.len() {
            let neighbor = (i + rng.gen_range(0..=jitter)).min(stream.len() - 1);
            stream.swap(i, neighbor);
        }
    }

    let mut monitor = SequenceMonitor::with_capacity(64)?;
    for &n in &stream {
        monitor.observe(n);
    }

    let report = monitor.report();
    println!(
        "fed {} of {} numbers ({}% loss, {}% dup, jitter {})",
        stream.len(),
        count,
        loss,
        dup,
        jitter
    );
    println!("  in order:     {}", report.in_order);
    println!("  out of order: {}", report.out_of_order);
    println!("  duplicate:    {}", report.duplicate);
    println!("  late:         {}", report.late);
    println!("  lost:         {}", report.lost);
    println!("  pending:      {}", report.pending);
    println!("  loss rate:    {:.2}%", f64::from(report.loss_rate()) * 100.0);

    Ok(())
}
