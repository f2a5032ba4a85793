//! Main EvalConfig.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::sections::{
    AssociationSection, CapacitySection, GroundTruthSection, IdentitySection, PoseSection,
};

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full evaluation configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EvalConfig {
    /// Association radii
    #[serde(default)]
    pub association: AssociationSection,

    /// Capacity of the reported feature list
    #[serde(default)]
    pub capacity: CapacitySection,

    /// Id reuse rules
    #[serde(default)]
    pub identity: IdentitySection,

    /// Pose lookup
    #[serde(default)]
    pub poses: PoseSection,

    /// Ground-truth projection
    #[serde(default)]
    pub ground_truth: GroundTruthSection,
}

impl EvalConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values the checks can't run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radius("association.radius", self.association.radius)?;
        check_radius(
            "association.ground_truth_radius",
            self.association.ground_truth_radius,
        )?;
        if self.capacity.max_features == 0 {
            return Err(ConfigError::InvalidMaxFeatures);
        }
        if let Some(range) = self.ground_truth.max_range
            && (range.is_nan() || range <= 0.0)
        {
            return Err(ConfigError::InvalidMaxRange(range));
        }
        Ok(())
    }
}

fn check_radius(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        Err(ConfigError::InvalidRadius { field, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvalConfig::default();
        assert_eq!(config.association.radius, 0.5);
        assert_eq!(config.association.ground_truth_radius, 0.5);
        assert_eq!(config.capacity.max_features, 16);
        assert_eq!(config.identity.reuse_cooldown_cycles, 5);
        assert_eq!(config.poses.max_gap_us, 100_000);
        assert!(config.ground_truth.max_range.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EvalConfig::from_yaml("association:\n  radius: 0.8\n").unwrap();
        assert_eq!(config.association.radius, 0.8);
        assert_eq!(config.association.ground_truth_radius, 0.5);
        assert_eq!(config.capacity.max_features, 16);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = EvalConfig::default();
        config.ground_truth.max_range = Some(25.0);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = EvalConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.ground_truth.max_range, Some(25.0));
    }

    #[test]
    fn test_invalid_radius() {
        let mut config = EvalConfig::default();
        config.association.radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRadius {
                field: "association.radius",
                value: 0.0
            })
        );

        config.association.radius = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn test_invalid_max_range() {
        let config = EvalConfig::from_yaml("ground_truth:\n  max_range: -1.0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxRange(-1.0)));

        let mut config = EvalConfig::default();
        config.ground_truth.max_range = Some(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxRange(0.0)));

        config.ground_truth.max_range = Some(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxRange(_))
        ));

        config.ground_truth.max_range = Some(25.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_max_features() {
        let mut config = EvalConfig::default();
        config.capacity.max_features = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxFeatures));
    }

    #[test]
    fn test_parse_error() {
        let err = EvalConfig::from_yaml("capacity: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
