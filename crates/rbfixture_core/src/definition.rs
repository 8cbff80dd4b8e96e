//! Fixture definitions
//!
//! A [`FixtureDefinition`] carries everything the builder needs: the scene
//! skeleton, the environment bodies, the template to instance, the lattice,
//! the placement strategy, the seed and where the result is written.
//! [`FixtureDefinition::default`] is the Suzanne-in-a-pot fixture.

use std::path::{Path, PathBuf};

use rbfixture_math::{GridMapping, GridShape, Vec3};

use crate::body::{DofFixed, RigidBody, Scale};
use crate::placement::Placement;
use crate::scene::{DistanceBarrierConstraint, SceneSettings, SceneType, SolverKind, TimeStepperKind};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0;

/// Lattice-to-position coefficients of the reference fixture
pub const BLENDER_MAPPING_SCALE: [f64; 3] = [0.75, 0.51, 0.45];
pub const BLENDER_MAPPING_OFFSET: [f64; 3] = [-1.5, 1.0, -0.9];

/// Polar jitter constants of the randomized variant
pub const BLENDER_JITTER_RADIUS: f64 = 1.5;
pub const BLENDER_JITTER_LIFT: f64 = 0.6;

/// Where a fixture is written, relative to the fixture root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSettings {
    /// `/`-separated subdirectory, e.g. `3D/blender`
    pub category: String,
    /// File name prefix; the instance count is appended
    pub stem: String,
}

impl OutputSettings {
    pub fn new(category: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            stem: stem.into(),
        }
    }

    /// `<stem>-<instance_count>.json`
    pub fn file_name(&self, instance_count: usize) -> String {
        format!("{}-{}.json", self.stem, instance_count)
    }

    /// `<root>/<category>/<stem>-<instance_count>.json`
    pub fn path_under(&self, root: &Path, instance_count: usize) -> PathBuf {
        let mut path = root.to_path_buf();
        for part in self.category.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.push(self.file_name(instance_count));
        path
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self::new("3D/blender", "blender")
    }
}

/// Complete input to [`build_scene`](crate::builder::build_scene)
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureDefinition {
    pub settings: SceneSettings,
    /// Emitted first, in order
    pub base_bodies: Vec<RigidBody>,
    /// Copied once per lattice cell
    pub template: RigidBody,
    pub grid: GridShape,
    pub placement: Placement,
    pub seed: u64,
    pub output: OutputSettings,
}

impl Default for FixtureDefinition {
    fn default() -> Self {
        Self {
            settings: blender_settings(),
            base_bodies: vec![spinning_plane(), pot()],
            template: suzanne(),
            grid: GridShape::new(5, 8, 5),
            placement: Placement::Lattice(blender_mapping()),
            seed: DEFAULT_SEED,
            output: OutputSettings::default(),
        }
    }
}

impl FixtureDefinition {
    pub fn with_grid(mut self, grid: GridShape) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// One copy of the template at its own position
    pub fn single_instance(self) -> Self {
        self.with_grid(GridShape::new(1, 1, 1))
            .with_placement(Placement::Template)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        blender_settings()
    }
}

/// Scene skeleton of the reference fixture
pub fn blender_settings() -> SceneSettings {
    SceneSettings {
        scene_type: SceneType::DistanceBarrierRbProblem,
        solver: SolverKind::IpcSolver,
        timestep: 0.005,
        max_time: 5.0,
        barrier: DistanceBarrierConstraint::new(1e-2),
        coefficient_restitution: -1.0,
        coefficient_friction: 0.0,
        gravity: Vec3::new(0.0, -9.8, 0.0),
        time_stepper: TimeStepperKind::Dmv,
    }
}

pub fn blender_mapping() -> GridMapping {
    GridMapping::from_arrays(BLENDER_MAPPING_SCALE, BLENDER_MAPPING_OFFSET)
}

/// The randomized variant: disc scatter with random orientation
pub fn blender_jitter() -> Placement {
    Placement::PolarJitter {
        mapping: blender_mapping(),
        max_radius: BLENDER_JITTER_RADIUS,
        lift: BLENDER_JITTER_LIFT,
        randomize_rotation: true,
    }
}

/// Blender spinning under the pot; free to rotate about y only
pub fn spinning_plane() -> RigidBody {
    RigidBody::new("plane.obj", Vec3::ZERO)
        .with_scale(Scale::PerAxis(Vec3::new(0.075, 1.0, 0.42)))
        .with_rotation(Vec3::new(0.0, 0.0, 90.0))
        .with_density(1.0)
        .with_angular_velocity(Vec3::new(0.0, 200.0, 0.0))
        .with_torque(Vec3::ZERO)
        .with_dof_fixed(DofFixed::PerDof([true, true, true, true, false, true]))
        .with_group_id(0)
}

/// Fixed container
pub fn pot() -> RigidBody {
    RigidBody::new("pot.obj", Vec3::new(0.0, 0.61, 0.0))
        .with_scale(Scale::PerAxis(Vec3::new(2.2, 1.0, 2.2)))
        .with_dof_fixed(DofFixed::All(true))
        .with_density(0.01)
        .with_group_id(0)
}

/// Template body instanced across the lattice
pub fn suzanne() -> RigidBody {
    RigidBody::new("suzanne/suzanne.obj", Vec3::new(1.5, 1.0, 0.0)).with_uniform_scale(0.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_definition() {
        let def = FixtureDefinition::default();
        assert_eq!(def.grid.cell_count(), 200);
        assert_eq!(def.seed, 0);
        assert_eq!(def.base_bodies.len(), 2);
        assert_eq!(def.base_bodies[0].mesh, "plane.obj");
        assert_eq!(def.base_bodies[1].mesh, "pot.obj");
        assert_eq!(def.template.mesh, "suzanne/suzanne.obj");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(OutputSettings::default().file_name(200), "blender-200.json");
    }

    #[test]
    fn test_output_path_splits_category() {
        let path = OutputSettings::default().path_under(Path::new("fixtures"), 200);
        assert_eq!(path, Path::new("fixtures").join("3D").join("blender").join("blender-200.json"));
    }

    #[test]
    fn test_output_path_ignores_empty_segments() {
        let output = OutputSettings::new("/3D//blender/", "b");
        let path = output.path_under(Path::new("root"), 1);
        assert_eq!(path, Path::new("root").join("3D").join("blender").join("b-1.json"));
    }

    #[test]
    fn test_single_instance() {
        let def = FixtureDefinition::default().single_instance();
        assert_eq!(def.grid.cell_count(), 1);
        assert_eq!(def.placement, Placement::Template);
    }

    #[test]
    fn test_pot_flags() {
        let pot = pot();
        assert_eq!(pot.is_dof_fixed, Some(DofFixed::All(true)));
        assert!(pot.rotation.is_none());
        assert!(pot.angular_velocity.is_none());
    }
}
