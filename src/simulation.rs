//! Frame loop that advances the engine and renders each generation.

use crate::Renderer;
use life_engine::LifeEngine;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Drives a started engine for a fixed number of frames.
#[derive(Debug)]
pub struct Simulation {
    engine: LifeEngine,
    renderer: Renderer,
    frames: usize,
    delay: Duration,
}

impl Simulation {
    /// Creates a simulation over an already started engine.
    ///
    /// `frames` counts printed generations, the initial one included.
    #[instrument(skip(engine, renderer))]
    pub fn new(engine: LifeEngine, renderer: Renderer, frames: usize, delay: Duration) -> Self {
        Self {
            engine,
            renderer,
            frames,
            delay,
        }
    }

    /// The engine in its current state.
    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Renders the initial generation, then steps and renders until all
    /// frames are written.
    #[instrument(skip(self, out), fields(frames = self.frames, delay_ms = self.delay.as_millis() as u64))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        info!("Simulation started");
        for frame in 0..self.frames {
            if frame > 0 {
                self.engine.next_step();
            }
            self.renderer.render_frame(self.engine.grid(), out)?;
            debug!(
                frame,
                population = self.engine.grid().population(),
                "Frame rendered"
            );
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }
        info!(generation = self.engine.generation(), "Simulation finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_engine() -> LifeEngine {
        let mut engine = LifeEngine::new(3, 3);
        engine.start(&[[false, false, false], [true, true, true]]);
        engine
    }

    #[test]
    fn test_frames_include_initial_generation() {
        let mut sim = Simulation::new(blinker_engine(), Renderer::default(), 3, Duration::ZERO);
        let mut out = Vec::new();
        sim.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n---\n***\n---\n\n\n-*-\n-*-\n-*-\n\n\n---\n***\n---\n\n"
        );
        assert_eq!(sim.engine().generation(), 2);
    }

    #[test]
    fn test_zero_frames_prints_nothing() {
        let mut sim = Simulation::new(blinker_engine(), Renderer::default(), 0, Duration::ZERO);
        let mut out = Vec::new();
        sim.run(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(sim.engine().generation(), 0);
    }
}
