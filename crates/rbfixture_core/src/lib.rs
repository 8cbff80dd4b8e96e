//! Core types for building rigid-body solver fixtures
//!
//! This crate provides everything needed to describe and write a fixture:
//!
//! - [`RigidBody`] - One solver body (mesh, pose, inertial and constraint fields)
//! - [`SceneDocument`] - The complete solver input document
//! - [`FixtureDefinition`] - Skeleton, environment bodies, template, lattice and placement
//! - [`Placement`] - Lattice, polar-jitter or template-position instancing
//! - [`SceneBuilder`] / [`build_scene`] - Deterministic scene assembly
//! - [`FixtureValidator`] - Structural checks run before building
//! - [`save_fixture`] / [`load_fixture`] - JSON persistence under the fixture root

mod body;
mod scene;
mod error;
pub mod definition;
pub mod placement;
pub mod builder;
pub mod validator;
pub mod fixture_io;

pub use body::{DofFixed, RigidBody, Scale};
pub use scene::{
    BarrierType, DistanceBarrierConstraint, RigidBodyProblem, SceneDocument, SceneSettings,
    SceneType, SolverKind, TimeStepperKind,
};
pub use error::FixtureError;
pub use definition::{FixtureDefinition, OutputSettings};
pub use placement::Placement;
pub use builder::{build_scene, BuiltScene, SceneBuilder};
pub use validator::{FixtureValidator, ValidationError, MAX_INSTANCES};
pub use fixture_io::{fixture_dir_path, load_fixture, save_fixture, to_json_string};

// Re-export math types used in the public API
pub use rbfixture_math::{AxisMap, GridCoord, GridMapping, GridShape, Vec3};
