use crate::error::{FarmSightError, Result};
use crate::models::{Crop, NutrientStandard};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    /// Default crop id for analysis and market commands.
    pub crop: String,
    /// Default nutrient standard id.
    pub standard: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmSightError::Config(format!(
                "Config file not found at {:?}. Run `farmsight init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmSightError::Config(format!("Failed to read config: {e}")))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| FarmSightError::Config(format!("Failed to parse config: {e}")))?;

        Ok(config)
    }

    /// Like `load`, but a missing config file falls back to defaults.
    /// Commands that take explicit crop/coordinates work without setup.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Self {
        match Self::load(config_override) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("no config loaded ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("farmsight").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| FarmSightError::Config("Cannot determine config directory".into()))?
            .join("farmsight")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Default path for writing new config files (~/.config/farmsight/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmSightError::Config("Cannot determine config directory".into()))?
            .join("farmsight");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up FarmSight!");
        println!();

        println!("Farm Profile");
        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("My Farm".into())
            .interact_text()
            .map_err(|e| FarmSightError::Config(format!("Input error: {e}")))?;

        let crop_ids = Crop::ALL.map(|c| c.id()).join(", ");
        let crop: String = Input::new()
            .with_prompt(format!("  Default crop ({crop_ids})"))
            .default("tomato".into())
            .interact_text()
            .map_err(|e| FarmSightError::Config(format!("Input error: {e}")))?;

        let standard_ids = match Crop::from_str(&crop) {
            Some(c) => NutrientStandard::ids_for_crop(c).join(", "),
            None => "yamazaki, general".to_string(),
        };
        let standard: String = Input::new()
            .with_prompt(format!("  Default nutrient standard ({standard_ids})"))
            .default("yamazaki".into())
            .interact_text()
            .map_err(|e| FarmSightError::Config(format!("Input error: {e}")))?;

        let latitude: f64 = Input::new()
            .with_prompt("  Farm latitude")
            .default(37.44)
            .interact_text()
            .map_err(|e| FarmSightError::Config(format!("Input error: {e}")))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Farm longitude")
            .default(127.14)
            .interact_text()
            .map_err(|e| FarmSightError::Config(format!("Input error: {e}")))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                crop,
                standard,
                latitude,
                longitude,
            },
            weather: WeatherConfig { enabled: true },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FarmSightError::Config(format!("Failed to serialize config: {e}")))?;

        // Write with a header comment
        let content = format!(
            "# FarmSight Configuration\n# Generated by `farmsight init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{yaml}"
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "My Farm".into(),
                crop: "tomato".into(),
                standard: "yamazaki".into(),
                latitude: 37.44,
                longitude: 127.14,
            },
            weather: WeatherConfig { enabled: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_seoul_gyeonggi() {
        let config = Config::default();
        assert_eq!(config.farm.crop, "tomato");
        assert!(config.weather.enabled);

        let region = crate::models::RegionPriceModifier::from_coordinates(
            config.farm.latitude,
            config.farm.longitude,
        );
        assert_eq!(region.modifier, 1.0);
    }

    #[test]
    fn substitute_env_vars_replaces_known_variables() {
        std::env::set_var("FARMSIGHT_TEST_CROP", "lettuce");
        let out = Config::substitute_env_vars("crop: ${FARMSIGHT_TEST_CROP}");
        assert_eq!(out, "crop: lettuce");
        std::env::remove_var("FARMSIGHT_TEST_CROP");
    }

    #[test]
    fn substitute_env_vars_leaves_unknown_placeholders() {
        let out = Config::substitute_env_vars("name: ${FARMSIGHT_NO_SUCH_VAR_XYZ}");
        assert_eq!(out, "name: ${FARMSIGHT_NO_SUCH_VAR_XYZ}");
    }

    #[test]
    fn parses_minimal_yaml() {
        let yaml = "farm:\n  name: Test\n  crop: melon\n  standard: netherlands\n  latitude: 33.4\n  longitude: 126.5\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.farm.crop, "melon");
        // weather section is optional and defaults to enabled
        assert!(config.weather.enabled);
    }
}
