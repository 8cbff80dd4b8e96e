//! Fixture validation
//!
//! Checks a [`FixtureDefinition`] for structural problems before anything is
//! built: negative lattice dimensions, NaN or infinite numbers, empty mesh
//! references and unusable output names.

use crate::definition::FixtureDefinition;
use crate::error::FixtureError;
use crate::placement::Placement;
use rbfixture_math::GridShape;

/// Largest number of template instances a definition may request
pub const MAX_INSTANCES: usize = 1_000_000;

/// Validation error found in a fixture definition
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A lattice dimension is below zero
    NegativeDimension { axis: &'static str, value: i64 },
    /// The lattice holds more than [`MAX_INSTANCES`] cells
    GridTooLarge { shape: GridShape, limit: usize },
    /// A numeric field is NaN or infinite
    NonFiniteValue { field: String },
    /// Timestep must be greater than zero
    NonPositiveTimestep(f64),
    /// Max time must be greater than zero
    NonPositiveMaxTime(f64),
    /// A body has an empty mesh reference
    EmptyMesh { body: String },
    /// Polar jitter radius is negative or not finite
    InvalidJitterRadius(f64),
    /// Output file stem is empty
    EmptyOutputStem,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NegativeDimension { axis, value } => {
                write!(f, "Grid dimension {} is negative: {}", axis, value)
            }
            ValidationError::GridTooLarge { shape, limit } => write!(
                f,
                "Grid {}x{}x{} exceeds the limit of {} instances",
                shape.num_x, shape.num_y, shape.num_z, limit
            ),
            ValidationError::NonFiniteValue { field } => {
                write!(f, "Non-finite value in '{}'", field)
            }
            ValidationError::NonPositiveTimestep(dt) => {
                write!(f, "Timestep must be positive: {}", dt)
            }
            ValidationError::NonPositiveMaxTime(t) => {
                write!(f, "Max time must be positive: {}", t)
            }
            ValidationError::EmptyMesh { body } => {
                write!(f, "Body '{}' has an empty mesh reference", body)
            }
            ValidationError::InvalidJitterRadius(r) => {
                write!(f, "Jitter radius must be finite and non-negative: {}", r)
            }
            ValidationError::EmptyOutputStem => write!(f, "Output file stem is empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Static checks over a [`FixtureDefinition`]
///
/// # Example
/// ```ignore
/// let errors = FixtureValidator::validate(&definition);
/// for error in &errors {
///     log::error!("Validation error: {}", error);
/// }
/// ```
pub struct FixtureValidator;

impl FixtureValidator {
    /// Validate a definition, returning all errors found
    ///
    /// Returns an empty vector if the definition is usable.
    pub fn validate(definition: &FixtureDefinition) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (axis, value) in definition.grid.axes() {
            if value < 0 {
                errors.push(ValidationError::NegativeDimension { axis, value });
            }
        }
        match definition.grid.checked_cell_count() {
            Some(count) if count <= MAX_INSTANCES => {}
            _ => errors.push(ValidationError::GridTooLarge {
                shape: definition.grid,
                limit: MAX_INSTANCES,
            }),
        }

        let settings = &definition.settings;
        let scalars = [
            ("timestep", settings.timestep),
            ("max_time", settings.max_time),
            (
                "initial_barrier_activation_distance",
                settings.barrier.initial_barrier_activation_distance,
            ),
            ("coefficient_restitution", settings.coefficient_restitution),
            ("coefficient_friction", settings.coefficient_friction),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                errors.push(ValidationError::NonFiniteValue { field: field.to_string() });
            }
        }
        if let Some(d) = settings.barrier.minimum_separation_distance {
            if !d.is_finite() {
                errors.push(ValidationError::NonFiniteValue {
                    field: "minimum_separation_distance".to_string(),
                });
            }
        }
        if !settings.gravity.is_finite() {
            errors.push(ValidationError::NonFiniteValue { field: "gravity".to_string() });
        }
        if settings.timestep.is_finite() && settings.timestep <= 0.0 {
            errors.push(ValidationError::NonPositiveTimestep(settings.timestep));
        }
        if settings.max_time.is_finite() && settings.max_time <= 0.0 {
            errors.push(ValidationError::NonPositiveMaxTime(settings.max_time));
        }

        let bodies = definition
            .base_bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (format!("base_bodies[{}]", i), b))
            .chain(std::iter::once(("template".to_string(), &definition.template)));
        for (label, body) in bodies {
            if body.mesh.trim().is_empty() {
                errors.push(ValidationError::EmptyMesh { body: label.clone() });
            }
            for field in body.non_finite_fields() {
                errors.push(ValidationError::NonFiniteValue {
                    field: format!("{}.{}", label, field),
                });
            }
        }

        match definition.placement {
            Placement::Lattice(mapping) => {
                if !mapping.is_finite() {
                    errors.push(ValidationError::NonFiniteValue { field: "placement.mapping".to_string() });
                }
            }
            Placement::PolarJitter { mapping, max_radius, lift, .. } => {
                if !mapping.is_finite() {
                    errors.push(ValidationError::NonFiniteValue { field: "placement.mapping".to_string() });
                }
                if !max_radius.is_finite() || max_radius < 0.0 {
                    errors.push(ValidationError::InvalidJitterRadius(max_radius));
                }
                if !lift.is_finite() {
                    errors.push(ValidationError::NonFiniteValue { field: "placement.lift".to_string() });
                }
            }
            Placement::Template => {}
        }

        if definition.output.stem.trim().is_empty() {
            errors.push(ValidationError::EmptyOutputStem);
        }

        errors
    }

    /// Validate and return `Err(FixtureError::InvalidConfiguration)` on any error
    pub fn validate_or_error(definition: &FixtureDefinition) -> Result<(), FixtureError> {
        let errors = Self::validate(definition);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FixtureError::InvalidConfiguration(errors))
        }
    }
}
