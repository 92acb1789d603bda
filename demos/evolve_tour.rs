//! Evolves a tour over a small set of canvas cities and logs progress.
//!
//! ```text
//! cargo run --example evolve_tour
//! ```

use tracing::Level;
use tsp_ga::ga::{GaConfig, GaRunner, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    #[rustfmt::skip]
    let cities: Vec<Point> = [
        (116, 404), (161, 617), (16, 97), (430, 536), (601, 504),
        (425, 461), (114, 544), (127, 118), (163, 357), (704, 104),
        (864, 125), (847, 523), (742, 170), (204, 601), (421, 377),
        (808, 49), (860, 466), (844, 294), (147, 213), (550, 124),
    ]
    .iter()
    .map(|&(x, y)| Point::new(x as f64, y as f64))
    .collect();

    let config = GaConfig::default()
        .with_population_size(100)
        .with_max_generations(2000)
        .with_stagnation_limit(400)
        .with_seed(7);

    let result = GaRunner::run_with_observer(&cities, &config, None, |stats| {
        if stats.generation % 100 == 0 {
            tracing::info!(
                generation = stats.generation,
                best_length = stats.best_length,
                mean_fitness = stats.mean_fitness,
                "progress"
            );
        }
    })?;

    tracing::info!(
        generations = result.generations,
        length = result.best.length(),
        stagnated = result.stagnated,
        "done"
    );
    for (a, b) in result.best.edges() {
        println!("({}, {}) -> ({}, {})", a.x, a.y, b.x, b.y);
    }
    Ok(())
}
