//! Placement strategies for instanced bodies
//!
//! A [`Placement`] decides where each copy of the template goes given its
//! lattice cell. Randomized strategies draw from the RNG passed in by the
//! builder, in a fixed order per instance, so output depends only on the seed.

use std::f64::consts::TAU;

use rand::Rng;
use rbfixture_math::{GridCoord, GridMapping, Vec3};

use crate::body::RigidBody;

/// How instanced bodies are positioned
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// `position = mapping(cell)`; draws no random numbers
    Lattice(GridMapping),
    /// Random point on a disc in xz, lattice height plus `lift` in y
    ///
    /// Per instance the draws are: radius, angle, then (if
    /// `randomize_rotation`) three rotation angles in degrees.
    PolarJitter {
        mapping: GridMapping,
        max_radius: f64,
        lift: f64,
        randomize_rotation: bool,
    },
    /// Every copy keeps the template's own position
    Template,
}

impl Placement {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Placement::Lattice(_) => "lattice",
            Placement::PolarJitter { .. } => "polar_jitter",
            Placement::Template => "template",
        }
    }

    /// Overwrite the pose fields of `body` for the instance at `cell`
    pub fn place<R: Rng + ?Sized>(&self, body: &mut RigidBody, cell: GridCoord, rng: &mut R) {
        match *self {
            Placement::Lattice(mapping) => {
                body.position = mapping.apply(cell);
            }
            Placement::PolarJitter { mapping, max_radius, lift, randomize_rotation } => {
                let r = rng.random::<f64>() * max_radius;
                let theta = rng.random::<f64>() * TAU;
                body.position = Vec3::new(
                    r * theta.cos(),
                    mapping.y.apply(cell.y) + lift,
                    r * theta.sin(),
                );
                if randomize_rotation {
                    let rx = rng.random::<f64>() * 360.0;
                    let ry = rng.random::<f64>() * 360.0;
                    let rz = rng.random::<f64>() * 360.0;
                    body.rotation = Some(Vec3::new(rx, ry, rz));
                }
            }
            Placement::Template => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mapping() -> GridMapping {
        GridMapping::from_arrays([0.75, 0.51, 0.45], [-1.5, 1.0, -0.9])
    }

    fn jitter() -> Placement {
        Placement::PolarJitter {
            mapping: mapping(),
            max_radius: 1.5,
            lift: 0.6,
            randomize_rotation: true,
        }
    }

    #[test]
    fn test_lattice_sets_position_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut body = RigidBody::new("m.obj", Vec3::new(1.5, 1.0, 0.0)).with_uniform_scale(0.25);
        Placement::Lattice(mapping()).place(&mut body, GridCoord::new(4, 7, 4), &mut rng);
        assert_eq!(body.position, Vec3::new(0.75 * 4.0 - 1.5, 0.51 * 7.0 + 1.0, 0.45 * 4.0 - 0.9));
        assert!(body.rotation.is_none());
        assert_eq!(body.scale, Some(crate::body::Scale::Uniform(0.25)));
    }

    #[test]
    fn test_lattice_does_not_consume_randomness() {
        let mut used = ChaCha8Rng::seed_from_u64(7);
        let mut fresh = ChaCha8Rng::seed_from_u64(7);
        let mut body = RigidBody::new("m.obj", Vec3::ZERO);
        Placement::Lattice(mapping()).place(&mut body, GridCoord::new(1, 1, 1), &mut used);
        assert_eq!(used.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn test_template_keeps_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut body = RigidBody::new("m.obj", Vec3::new(1.5, 1.0, 0.0));
        Placement::Template.place(&mut body, GridCoord::new(3, 3, 3), &mut rng);
        assert_eq!(body.position, Vec3::new(1.5, 1.0, 0.0));
    }

    #[test]
    fn test_jitter_stays_within_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for y in 0..8 {
            let mut body = RigidBody::new("m.obj", Vec3::ZERO);
            jitter().place(&mut body, GridCoord::new(0, y, 0), &mut rng);
            assert!(body.position.length_xz() <= 1.5 + 1e-12);
            assert_eq!(body.position.y, 0.51 * y as f64 + 1.0 + 0.6);
            let rotation = body.rotation.expect("jitter sets rotation");
            for angle in rotation.to_array() {
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_jitter_is_reproducible() {
        let place_all = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..10)
                .map(|i| {
                    let mut body = RigidBody::new("m.obj", Vec3::ZERO);
                    jitter().place(&mut body, GridCoord::new(0, i, 0), &mut rng);
                    body
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(place_all(0), place_all(0));
        assert_ne!(place_all(0), place_all(1));
    }

    #[test]
    fn test_jitter_without_rotation() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let placement = Placement::PolarJitter {
            mapping: mapping(),
            max_radius: 1.5,
            lift: 0.6,
            randomize_rotation: false,
        };
        let mut body = RigidBody::new("m.obj", Vec3::ZERO);
        placement.place(&mut body, GridCoord::new(0, 0, 0), &mut rng);
        assert!(body.rotation.is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(Placement::Lattice(mapping()).name(), "lattice");
        assert_eq!(jitter().name(), "polar_jitter");
        assert_eq!(Placement::Template.name(), "template");
    }
}
