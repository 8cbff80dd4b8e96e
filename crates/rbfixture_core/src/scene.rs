//! Scene document
//!
//! The [`SceneDocument`] is the full configuration handed to the solver. Field
//! names and nesting are the solver's input format and must not change.

use serde::{Serialize, Deserialize};
use rbfixture_math::Vec3;

use crate::body::RigidBody;

/// Kind of problem the solver sets up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    #[default]
    DistanceBarrierRbProblem,
}

/// Optimization solver used for each step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    #[default]
    IpcSolver,
    BarrierSolver,
}

/// Rigid body time integrator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStepperKind {
    #[default]
    Dmv,
    ExponentialEuler,
}

/// Barrier function shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierType {
    Ipc,
    PolyLog,
    Spline,
}

/// Barrier constraint settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceBarrierConstraint {
    pub initial_barrier_activation_distance: f64,
    /// Left to the solver's default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_separation_distance: Option<f64>,
    /// Left to the solver's default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barrier_type: Option<BarrierType>,
}

impl DistanceBarrierConstraint {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            initial_barrier_activation_distance: activation_distance,
            minimum_separation_distance: None,
            barrier_type: None,
        }
    }
}

/// Global physical parameters plus the ordered body list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyProblem {
    pub coefficient_restitution: f64,
    pub coefficient_friction: f64,
    pub gravity: Vec3,
    pub time_stepper: TimeStepperKind,
    pub rigid_bodies: Vec<RigidBody>,
}

/// Scene parameters that do not depend on the bodies
///
/// This is the static skeleton of a [`SceneDocument`]; it is also what the
/// application configuration exposes under `[scene]`. Missing fields take the
/// reference fixture's values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub scene_type: SceneType,
    pub solver: SolverKind,
    pub timestep: f64,
    pub max_time: f64,
    pub coefficient_restitution: f64,
    pub coefficient_friction: f64,
    pub gravity: Vec3,
    pub time_stepper: TimeStepperKind,
    /// Kept last so TOML writes it as a trailing `[scene.barrier]` table
    pub barrier: DistanceBarrierConstraint,
}

/// The complete solver input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub scene_type: SceneType,
    pub solver: SolverKind,
    pub timestep: f64,
    pub max_time: f64,
    pub distance_barrier_constraint: DistanceBarrierConstraint,
    pub rigid_body_problem: RigidBodyProblem,
}

impl SceneDocument {
    /// Create a document with the given settings and no bodies
    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self {
            scene_type: settings.scene_type,
            solver: settings.solver,
            timestep: settings.timestep,
            max_time: settings.max_time,
            distance_barrier_constraint: settings.barrier,
            rigid_body_problem: RigidBodyProblem {
                coefficient_restitution: settings.coefficient_restitution,
                coefficient_friction: settings.coefficient_friction,
                gravity: settings.gravity,
                time_stepper: settings.time_stepper,
                rigid_bodies: Vec::new(),
            },
        }
    }

    /// Bodies in insertion order
    pub fn rigid_bodies(&self) -> &[RigidBody] {
        &self.rigid_body_problem.rigid_bodies
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_problem.rigid_bodies.len()
    }

    /// Append a body after all existing ones
    pub fn push_body(&mut self, body: RigidBody) {
        self.rigid_body_problem.rigid_bodies.push(body);
    }
}
