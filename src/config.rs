//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RBF_SECTION__KEY`)
//!
//! Every section defaults to the reference blender fixture, so an empty
//! configuration reproduces `3D/blender/blender-200.json`.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use rbfixture_core::definition::{
    self, BLENDER_JITTER_LIFT, BLENDER_JITTER_RADIUS, BLENDER_MAPPING_OFFSET,
    BLENDER_MAPPING_SCALE, DEFAULT_SEED,
};
use rbfixture_core::{
    fixture_dir_path, FixtureDefinition, GridMapping, GridShape, OutputSettings, Placement,
    RigidBody, Scale, SceneSettings, Vec3,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output location configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Solver-facing scene parameters
    #[serde(default)]
    pub scene: SceneSettings,
    /// Lattice dimensions
    #[serde(default)]
    pub grid: GridConfig,
    /// Instance placement configuration
    #[serde(default)]
    pub placement: PlacementConfig,
    /// Instanced template body
    #[serde(default)]
    pub template: TemplateConfig,
    /// Random number configuration
    #[serde(default)]
    pub random: RandomConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RBF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // RBF_GRID__NUM_X=2 -> grid.num_x = 2
        figment = figment.merge(Env::prefixed("RBF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Directory fixtures are written under
    ///
    /// `output.fixture_root` if configured, otherwise the fixture store's
    /// default root.
    pub fn fixture_root(&self) -> PathBuf {
        self.output
            .fixture_root
            .clone()
            .unwrap_or_else(fixture_dir_path)
    }

    /// Convert to the builder's input
    ///
    /// Environment bodies are always the blender plane and pot.
    pub fn to_fixture_definition(&self) -> FixtureDefinition {
        FixtureDefinition {
            settings: self.scene.clone(),
            base_bodies: vec![definition::spinning_plane(), definition::pot()],
            template: self.template.to_body(),
            grid: GridShape::new(self.grid.num_x, self.grid.num_y, self.grid.num_z),
            placement: self.placement.to_placement(),
            seed: self.random.seed,
            output: OutputSettings::new(&self.output.category, &self.output.stem),
        }
    }
}

/// Output location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fixture root; falls back to `$RBF_FIXTURE_DIR` or `fixtures`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_root: Option<PathBuf>,
    /// `/`-separated subdirectory under the root
    pub category: String,
    /// File name prefix; `-<instance count>.json` is appended
    pub stem: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let output = OutputSettings::default();
        Self {
            fixture_root: None,
            category: output.category,
            stem: output.stem,
        }
    }
}

/// Lattice dimensions
///
/// Signed so that negative values reach validation instead of failing as a
/// type mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub num_x: i64,
    pub num_y: i64,
    pub num_z: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            num_x: 5,
            num_y: 8,
            num_z: 5,
        }
    }
}

/// Placement strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Affine lattice positions
    Lattice,
    /// Random disc scatter in xz
    PolarJitter,
    /// Keep the template's position
    Template,
}

/// Instance placement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub mode: PlacementMode,
    /// Per-axis lattice spacing [x, y, z]
    pub scale: [f64; 3],
    /// Per-axis lattice origin [x, y, z]
    pub offset: [f64; 3],
    /// Disc radius for `polar_jitter`
    pub max_radius: f64,
    /// Extra height for `polar_jitter`
    pub lift: f64,
    /// Random orientation for `polar_jitter`
    pub randomize_rotation: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mode: PlacementMode::Lattice,
            scale: BLENDER_MAPPING_SCALE,
            offset: BLENDER_MAPPING_OFFSET,
            max_radius: BLENDER_JITTER_RADIUS,
            lift: BLENDER_JITTER_LIFT,
            randomize_rotation: true,
        }
    }
}

impl PlacementConfig {
    pub fn to_placement(&self) -> Placement {
        let mapping = GridMapping::from_arrays(self.scale, self.offset);
        match self.mode {
            PlacementMode::Lattice => Placement::Lattice(mapping),
            PlacementMode::PolarJitter => Placement::PolarJitter {
                mapping,
                max_radius: self.max_radius,
                lift: self.lift,
                randomize_rotation: self.randomize_rotation,
            },
            PlacementMode::Template => Placement::Template,
        }
    }
}

/// Instanced template body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Mesh path as the solver resolves it
    pub mesh: String,
    /// Template position [x, y, z]; used by `template` placement
    pub position: [f64; 3],
    /// Uniform scale factor
    pub scale: f64,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let body = definition::suzanne();
        Self {
            mesh: body.mesh,
            position: body.position.to_array(),
            scale: match body.scale {
                Some(Scale::Uniform(s)) => s,
                _ => 1.0,
            },
        }
    }
}

impl TemplateConfig {
    pub fn to_body(&self) -> RigidBody {
        RigidBody::new(self.mesh.clone(), Vec3::from(self.position)).with_uniform_scale(self.scale)
    }
}

/// Random number configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Seed for the placement RNG
    pub seed: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
