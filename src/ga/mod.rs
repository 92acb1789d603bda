//! Genetic algorithm for closed tours over a fixed point set.
//!
//! Every candidate [`Tour`] is a permutation of the same reference set of
//! [`Point`]s. The operators are built so that this never breaks: crossover
//! fills around a copied segment instead of cutting and splicing, and
//! mutation only swaps positions.
//!
//! # Key Types
//!
//! - [`Tour`]: A candidate closed tour with fitness `1 / length`
//! - [`Population`]: One generation plus the step to the next
//! - [`GaConfig`]: Population size, rates, stop policy, seed
//! - [`GaRunner`]: Advances a population until a stop condition holds
//! - [`GaError`]: Invalid input, degenerate fitness, selection underflow
//!
//! # Submodules
//!
//! - [`operators`]: Order-preserving crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use population::{generate, Population};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::roulette;
pub use types::{Point, Tour};
