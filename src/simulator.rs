//! Bevy plugin driving the simulation.
//!
//! The balls advance on the fixed timestep, configured to the frame delay. Drawing happens every
//! frame with gizmos. The application adding the plugin provides the window and the main loop.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use crate::{
    config::{Config, ConfigError, SurfaceConfig},
    domain::{Bounds, Canvas, Position, Rgb},
    resource::{SimulationRes, SurfaceRes},
    simulation::{Simulation, SimulationError},
};

pub struct Simulator {
    simulation: Simulation,
    frame_delay: Duration,
    surface: SurfaceConfig,
}

impl Simulator {
    /// Create the simulation up front, so an invalid configuration is reported to the caller
    /// before the app is built.
    pub fn new(config: &Config) -> Result<Self, SimulatorError> {
        config.validate()?;
        Ok(Self {
            simulation: Simulation::new(config)?,
            frame_delay: config.frame_delay(),
            surface: config.surface,
        })
    }
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        info!(
            "simulating {} balls every {:?}",
            self.simulation.balls().len(),
            self.frame_delay
        );

        app.insert_resource(Time::<Fixed>::from_duration(self.frame_delay))
            .insert_resource(SimulationRes::from(self.simulation.clone()))
            .insert_resource(SurfaceRes::from(self.surface))
            .add_systems(FixedUpdate, simulate)
            .add_systems(Update, draw);
    }
}

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("invalid simulation config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid simulation config: {0}")]
    Simulation(#[from] SimulationError),
}

fn simulate(mut simulation: ResMut<SimulationRes>) {
    simulation.advance();
}

fn draw(mut gizmos: Gizmos, simulation: Res<SimulationRes>, surface: Res<SurfaceRes>) {
    let mut canvas = GizmoCanvas {
        gizmos: &mut gizmos,
        surface: **surface,
    };
    simulation.draw(&mut canvas);
}

struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    surface: SurfaceConfig,
}

impl Canvas for GizmoCanvas<'_, '_, '_> {
    fn fill_circle(&mut self, position: Position, diameter: i32, color: Rgb) {
        let radius = diameter as f32 / 2.0;
        let (x, y): (f32, f32) = position.into();
        self.gizmos.circle_2d(
            to_bevy_position(self.surface, (x + radius, y + radius)),
            radius,
            to_bevy_color(color),
        );
    }

    // Gizmos only last for one frame.
    fn erase_circle(&mut self, _position: Position, _diameter: i32) {}

    fn draw_rectangle(&mut self, bounds: Bounds, color: Rgb) {
        let size = Vec2::new(bounds.width() as f32, bounds.height() as f32);
        let (x, y): (f32, f32) = bounds.top_left_corner().into();
        self.gizmos.rect_2d(
            to_bevy_position(self.surface, (x + size.x / 2.0, y + size.y / 2.0)),
            0.0,
            size,
            to_bevy_color(color),
        );
    }
}

/// Canvas coordinates have their origin in the top-left corner of the surface and the y-axis
/// pointing down, world coordinates have their origin in the center and the y-axis pointing up.
fn to_bevy_position(surface: SurfaceConfig, (x, y): (f32, f32)) -> Vec2 {
    Vec2::new(
        x - surface.width as f32 / 2.0,
        surface.height as f32 / 2.0 - y,
    )
}

fn to_bevy_color(color: Rgb) -> Color {
    Color::rgb_u8(color.r, color.g, color.b)
}
