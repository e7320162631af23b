//! Storage Device Filling
//!
//! This demo fills a 4700-unit storage device from a small catalog of file
//! sizes, keeping at most ten files. It prints the running-best packing every
//! 100th generation and the final selection at the end.

use pack_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Storage Device Filling ===\n");

    // Seeded RNG for a reproducible run
    let mut rng = StdRng::seed_from_u64(42);

    let items = vec![
        Item::new(0, 100),
        Item::new(1, 200),
        Item::new(2, 400),
        Item::new(3, 400),
        Item::new(4, 500),
        Item::new(5, 3000),
        Item::new(6, 800),
    ];
    let capacity = 4700;
    let max_files = 10;

    let optimizer = Optimizer::new(capacity, items, max_files)?;
    println!("Generation budget: {}\n", optimizer.max_generations());

    let mut observer = FnObserver::new(|report: &GenerationReport| {
        if report.generation % 100 == 0 {
            println!(
                "Gen. {:>4} => filled {:>4} / {} with {} distinct items (score {:.3})",
                report.generation,
                report.fittest.filled_size,
                capacity,
                report.distinct_items.len(),
                report.fittest.score,
            );
        }
    });
    let packed = optimizer.run_with_observer(&mut rng, &mut observer);

    println!("\nOptimization complete!");
    let total: u64 = packed.iter().map(|item| item.size).sum();
    println!("  Filled:   {} / {}", total, capacity);
    println!("  Files:    {}", packed.len());
    for item in &packed {
        println!("    {} ({} units)", item.id, item.size);
    }

    Ok(())
}
