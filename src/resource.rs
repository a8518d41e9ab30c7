//! `SimulationRes` holds the balls advanced on the fixed timestep. `SurfaceRes` holds the surface
//! size used to map canvas coordinates to world coordinates when drawing.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::{config::SurfaceConfig, simulation::Simulation};

#[derive(Resource)]
pub struct SimulationRes(Simulation);

impl Deref for SimulationRes {
    type Target = Simulation;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SimulationRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Simulation> for SimulationRes {
    fn from(value: Simulation) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct SurfaceRes(SurfaceConfig);

impl Deref for SurfaceRes {
    type Target = SurfaceConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SurfaceConfig> for SurfaceRes {
    fn from(value: SurfaceConfig) -> Self {
        Self(value)
    }
}
