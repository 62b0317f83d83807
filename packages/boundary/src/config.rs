//! Map defaults configuration.
//!
//! The reference deployment's defaults are embedded at compile time from
//! `config/map_defaults.toml`. A deployment may override them with a TOML
//! file of the same layout, passed explicitly or through the
//! `SECTOR_MAP_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use sector_map_boundary_models::MapDefaults;
use thiserror::Error;

/// Environment variable naming an override defaults file.
pub const CONFIG_ENV_VAR: &str = "SECTOR_MAP_CONFIG";

const EMBEDDED_DEFAULTS: &str = include_str!("../config/map_defaults.toml");

/// Errors that can occur while loading map defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The defaults file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML could not be parsed into [`MapDefaults`].
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Parses and validates map defaults from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Toml`] if the text does not match the layout, or
/// [`ConfigError::Invalid`] if a value is out of range.
pub fn parse_defaults(toml_str: &str) -> Result<MapDefaults, ConfigError> {
    let defaults: MapDefaults = toml::de::from_str(toml_str)?;
    validate(&defaults)?;
    Ok(defaults)
}

/// Returns the defaults embedded in the binary.
///
/// # Errors
///
/// Returns an error only if the embedded file is malformed.
pub fn embedded_defaults() -> Result<MapDefaults, ConfigError> {
    parse_defaults(EMBEDDED_DEFAULTS)
}

/// Loads defaults from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_defaults_file(path: &Path) -> Result<MapDefaults, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_defaults(&contents)
}

/// Loads defaults from `path`, else from [`CONFIG_ENV_VAR`], else the
/// embedded file.
///
/// # Errors
///
/// Returns an error if the selected file cannot be read or does not parse.
pub fn load_defaults(path: Option<&Path>) -> Result<MapDefaults, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

    match path.or(env_path.as_deref()) {
        Some(path) => {
            log::info!("Loading map defaults from {}", path.display());
            load_defaults_file(path)
        }
        None => {
            log::debug!("Using embedded map defaults");
            embedded_defaults()
        }
    }
}

fn validate(defaults: &MapDefaults) -> Result<(), ConfigError> {
    let center = defaults.default_center;
    if !(-90.0..=90.0).contains(&center.lat) {
        return Err(ConfigError::Invalid {
            field: "default_center.lat",
            message: format!("{} is outside -90..=90", center.lat),
        });
    }
    if !(-180.0..=180.0).contains(&center.lng) {
        return Err(ConfigError::Invalid {
            field: "default_center.lng",
            message: format!("{} is outside -180..=180", center.lng),
        });
    }
    if !defaults.default_zoom.is_finite() || defaults.default_zoom < 0.0 {
        return Err(ConfigError::Invalid {
            field: "default_zoom",
            message: format!("{} is not a non-negative zoom", defaults.default_zoom),
        });
    }

    let style = &defaults.shape_style;
    for (field, opacity) in [
        ("shape_style.stroke_opacity", style.stroke_opacity),
        ("shape_style.fill_opacity", style.fill_opacity),
    ] {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::Invalid {
                field,
                message: format!("{opacity} is outside 0..=1"),
            });
        }
    }
    if !style.stroke_weight.is_finite() || style.stroke_weight < 0.0 {
        return Err(ConfigError::Invalid {
            field: "shape_style.stroke_weight",
            message: format!("{} is negative", style.stroke_weight),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r##"
default_zoom = 12.0
fit_padding_px = 16

[default_center]
lat = -12.1
lng = -77.0

[shape_style]
stroke_color = "#111111"
fill_color = "#222222"
stroke_opacity = 1.0
fill_opacity = 0.3
stroke_weight = 3.0
"##;

    #[test]
    fn embedded_defaults_parse() {
        let defaults = embedded_defaults().unwrap();
        assert!(defaults.default_center.lat < 0.0);
        assert!(defaults.default_center.lng < 0.0);
        assert!(defaults.fit_padding_px > 0);
    }

    #[test]
    fn parses_custom_defaults() {
        let defaults = parse_defaults(VALID).unwrap();
        assert!((defaults.default_center.lat - -12.1).abs() < f64::EPSILON);
        assert_eq!(defaults.fit_padding_px, 16);
        assert_eq!(defaults.shape_style.stroke_color, "#111111");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let text = VALID.replace("lat = -12.1", "lat = -120.0");
        let err = parse_defaults(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "default_center.lat",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_opacity() {
        let text = VALID.replace("fill_opacity = 0.3", "fill_opacity = 1.5");
        assert!(matches!(
            parse_defaults(&text),
            Err(ConfigError::Invalid {
                field: "shape_style.fill_opacity",
                ..
            })
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            parse_defaults("default_zoom = 3.0"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_defaults_file(Path::new("/nonexistent/sector_map.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
