//! Genetic algorithm for the two-dimensional Traveling Salesman Problem.
//!
//! A population of candidate closed tours over a fixed reference point set
//! is evolved with:
//!
//! - **Fitness**: reciprocal of the closed-loop Euclidean tour length
//! - **Selection**: fitness-proportionate (roulette wheel)
//! - **Crossover**: order-preserving segment crossover that always yields
//!   a permutation of the reference set
//! - **Mutation**: per-position random swaps
//!
//! # Architecture
//!
//! [`ga::Tour`] is the leaf type. [`ga::Population`] holds one generation
//! and advances it in place; [`ga::GaRunner`] wraps the population with a
//! stop policy (generation cap, stagnation, cancellation). Rendering and
//! scheduling are left to callers, which read back [`ga::Population::fittest`]
//! after each generation. With the `wasm` feature the same loop is exposed
//! to a browser front end through `wasm::WasmPopulation`.

pub mod ga;
pub mod random;

#[cfg(feature = "wasm")]
pub mod wasm;
