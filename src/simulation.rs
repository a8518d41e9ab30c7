//! A collection of balls bouncing within one shared region.
//!
//! The simulation does not run by itself. An external driver calls `advance` or `step` at a fixed
//! rate, see the `simulator` module for the Bevy-based one.

use std::sync::Arc;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::{
    config::Config,
    domain::{Ball, BallError, Canvas, Region, RegionError, Rgb},
};

pub const MIN_BALLS: usize = 5;
pub const MAX_BALLS: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    region: Arc<Region>,
    balls: Vec<Ball>,
}

impl Simulation {
    /// Create a simulation seeded from the configuration, or from a random seed if none is set.
    pub fn new(config: &Config) -> Result<Self, SimulationError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("creating simulation with seed {seed}");
        Self::with_rng(config, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: &Config,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let region = Arc::new(config.region.build()?);
        let count = clamp_ball_count(config.ball_count);

        let balls = (0..count)
            .map(|i| {
                Ball::random(&mut *rng, config.diameter, config.max_speed, region.clone())
                    .map(|ball| ball.with_color(palette_color(&config.palette, i)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { region, balls })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn advance(&mut self) {
        for ball in &mut self.balls {
            ball.advance();
        }
    }

    /// Move every ball on the canvas and redraw the region, which balls may have painted over.
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        for ball in &mut self.balls {
            ball.step(canvas);
        }
        self.region.draw(canvas);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.region.draw(canvas);
        for ball in &self.balls {
            ball.draw(canvas);
        }
    }
}

pub fn clamp_ball_count(count: usize) -> usize {
    count.clamp(MIN_BALLS, MAX_BALLS)
}

fn palette_color(palette: &[Rgb], idx: usize) -> Rgb {
    if palette.is_empty() {
        Rgb::BLACK
    } else {
        palette[idx % palette.len()]
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error(transparent)]
    Ball(#[from] BallError),
}
