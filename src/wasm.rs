//! Browser bindings.
//!
//! Exposes a [`Population`] to JavaScript so a canvas front end can step the
//! evolution on its own timer and draw the fittest tour. Points cross the
//! boundary as plain `{ x, y }` objects.

use crate::ga::{GaConfig, Point, Population};
use wasm_bindgen::prelude::*;

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// A population driven from JavaScript.
#[wasm_bindgen]
pub struct WasmPopulation {
    inner: Population,
}

#[wasm_bindgen]
impl WasmPopulation {
    /// Shuffles `points` (an array of `{ x, y }`) into `size` tours.
    #[wasm_bindgen(constructor)]
    pub fn new(
        points: JsValue,
        size: usize,
        p_cross: f64,
        p_mutate: f64,
    ) -> Result<WasmPopulation, JsError> {
        let points: Vec<Point> = serde_wasm_bindgen::from_value(points).map_err(js_error)?;
        let config = GaConfig::default()
            .with_population_size(size)
            .with_crossover_rate(p_cross)
            .with_mutation_rate(p_mutate);
        let inner = Population::new(&points, &config).map_err(js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = advanceGeneration)]
    pub fn advance_generation(&mut self) -> Result<(), JsError> {
        self.inner.advance_generation().map_err(js_error)?;
        Ok(())
    }

    /// Fittest tour of the current generation as an array of `{ x, y }`.
    pub fn fittest(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.fittest().points()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = fittestFitness)]
    pub fn fittest_fitness(&self) -> f64 {
        self.inner.fittest_fitness()
    }

    pub fn generation(&self) -> usize {
        self.inner.generation()
    }
}
