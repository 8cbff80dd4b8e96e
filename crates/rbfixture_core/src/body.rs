//! Rigid body entries
//!
//! A [`RigidBody`] is one object in the solver's `rigid_bodies` list. Only
//! `mesh` and `position` are always written; every other field is emitted
//! only when it was explicitly set.

use serde::{Serialize, Deserialize};
use rbfixture_math::Vec3;

/// Body scale: either one factor for all axes or one per axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scale {
    /// Same factor on every axis (serialized as a number)
    Uniform(f64),
    /// Per-axis factors (serialized as `[x, y, z]`)
    PerAxis(Vec3),
}

impl Scale {
    pub fn is_finite(&self) -> bool {
        match self {
            Scale::Uniform(s) => s.is_finite(),
            Scale::PerAxis(v) => v.is_finite(),
        }
    }
}

/// Locked degrees of freedom
///
/// The per-DOF form lists the three translational axes followed by the
/// three rotational axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DofFixed {
    /// Every degree of freedom locked (`true`) or free (`false`)
    All(bool),
    /// `[tx, ty, tz, rx, ry, rz]`
    PerDof([bool; 6]),
}

/// A simulated solid object as the solver reads it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Path of the geometry asset, relative to the solver's mesh directory
    pub mesh: String,
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    /// Euler angles in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_velocity: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_velocity: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torque: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dof_fixed: Option<DofFixed>,
    /// Collision group; the solver skips collisions within a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
}

impl RigidBody {
    /// Create a body with only the required fields set
    pub fn new(mesh: impl Into<String>, position: Vec3) -> Self {
        Self {
            mesh: mesh.into(),
            position,
            scale: None,
            rotation: None,
            density: None,
            linear_velocity: None,
            angular_velocity: None,
            torque: None,
            is_dof_fixed: None,
            group_id: None,
        }
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_uniform_scale(self, scale: f64) -> Self {
        self.with_scale(Scale::Uniform(scale))
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_angular_velocity(mut self, velocity: Vec3) -> Self {
        self.angular_velocity = Some(velocity);
        self
    }

    pub fn with_torque(mut self, torque: Vec3) -> Self {
        self.torque = Some(torque);
        self
    }

    pub fn with_dof_fixed(mut self, fixed: DofFixed) -> Self {
        self.is_dof_fixed = Some(fixed);
        self
    }

    pub fn with_group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Names of numeric fields holding NaN or infinite values
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.position.is_finite() {
            fields.push("position");
        }
        if self.scale.is_some_and(|s| !s.is_finite()) {
            fields.push("scale");
        }
        let vectors = [
            ("rotation", self.rotation),
            ("linear_velocity", self.linear_velocity),
            ("angular_velocity", self.angular_velocity),
            ("torque", self.torque),
        ];
        for (name, value) in vectors {
            if value.is_some_and(|v| !v.is_finite()) {
                fields.push(name);
            }
        }
        if self.density.is_some_and(|d| !d.is_finite()) {
            fields.push("density");
        }
        fields
    }
}
