//! Animation constants and viewer settings.
//!
//! The particle layer is fixed: its constants live here as plain `const`s. The native viewer
//! reads a handful of settings from the environment (optionally via a `.env` file).

use std::env;
use std::path::PathBuf;

/// Number of particles generated when a background mounts
pub const PARTICLE_COUNT: usize = 50;

/// Pairs closer than this (in pixels) get a connecting line
pub const LINK_DISTANCE: f32 = 150.0;

/// Line alpha at distance zero; fades linearly to 0 at `LINK_DISTANCE`
pub const LINK_MAX_ALPHA: f32 = 0.2;

/// Connecting line width in pixels
pub const LINK_WIDTH: f32 = 1.0;

/// Opacity of the whole background layer when composited over a section
pub const LAYER_OPACITY: f32 = 0.7;

/// Particle and line colour (cyan-400)
pub const PARTICLE_RGB: [u8; 3] = [34, 211, 238];

/// Particle generation ranges
pub mod particle {
    /// Radius is `MIN_SIZE + r * SIZE_SPREAD`
    pub const MIN_SIZE: f32 = 1.0;
    pub const SIZE_SPREAD: f32 = 3.0;

    /// Per-frame velocity is `(r - 0.5) * SPEED_SPREAD` on each axis
    pub const SPEED_SPREAD: f32 = 0.5;

    /// Opacity is `MIN_OPACITY + r * OPACITY_SPREAD`
    pub const MIN_OPACITY: f32 = 0.2;
    pub const OPACITY_SPREAD: f32 = 0.5;
}

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const DEFAULT_EXPORT_PATH: &str = "dist/index.html";
pub const WINDOW_TITLE: &str = "Ayush Kumar - Portfolio";

/// Settings for the native viewer and the export command
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub export_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl ViewerConfig {
    /// Load settings from `PORTFOLIO_WIDTH`, `PORTFOLIO_HEIGHT` and `PORTFOLIO_OUT`.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            width: parse_dimension(&lookup, "PORTFOLIO_WIDTH", defaults.width),
            height: parse_dimension(&lookup, "PORTFOLIO_HEIGHT", defaults.height),
            title: defaults.title,
            export_path: lookup("PORTFOLIO_OUT")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
        }
    }
}

fn parse_dimension<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => {
                log::warn!("{} = {:?} is not a positive integer, using {}", key, raw, default);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ViewerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_WIDTH", "1920"),
            ("PORTFOLIO_HEIGHT", " 1080 "),
            ("PORTFOLIO_OUT", "public/index.html"),
        ]));
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert_eq!(config.export_path, PathBuf::from("public/index.html"));
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_WIDTH", "wide"),
            ("PORTFOLIO_HEIGHT", "0"),
        ]));
        assert_eq!(config.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.height, DEFAULT_WINDOW_HEIGHT);
    }
}
