use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Angle;
use crate::shapes::{
    Arc, Arrow, CheckerBoard, ColorCyclingRings, Flower, ShapeKind, ShapeParams, Spirograph,
    Trapezoid, Triangle,
};

/// Errors that can occur while decoding settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameter presets, one per shape.
///
/// Where the presets are stored is up to the caller; this type only
/// converts to and from JSON text. Fields use `#[serde(default)]` so that
/// adding new shapes won't break presets saved by older versions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    pub selected_shape: ShapeKind,

    pub checkerboard: CheckerBoard,
    pub trapezoid: Trapezoid,
    pub flower: Flower,
    pub arc: Arc,
    pub spirograph: Spirograph,
    pub arrow: Arrow,
    pub rings: ColorCyclingRings,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            selected_shape: ShapeKind::CheckerBoard,

            checkerboard: CheckerBoard::new(4, 4),
            trapezoid: Trapezoid::new(50.0),
            flower: Flower::new(-20.0, 100.0),
            arc: Arc::new(Angle::ZERO, Angle::degrees(180.0), true),
            spirograph: Spirograph::new(125, 75, 25, 1.0),
            arrow: Arrow::new(40.0, 20.0),
            rings: ColorCyclingRings::default(),
        }
    }
}

impl ShapeSettings {
    /// Decode presets from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    /// Returns `SettingsError::Parse` if the text is not valid settings JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Failed to parse settings: {}", e);
            e
        })?;
        log::debug!("Loaded settings, selected {}", settings.selected_shape.name());
        Ok(settings)
    }

    /// Decode presets from JSON, falling back to defaults on any error.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|_| {
            log::info!("Using default settings");
            Self::default()
        })
    }

    /// Encode presets as pretty JSON.
    ///
    /// # Errors
    /// Returns `SettingsError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The preset parameters for `kind`
    pub fn params(&self, kind: ShapeKind) -> ShapeParams {
        match kind {
            ShapeKind::CheckerBoard => ShapeParams::CheckerBoard(self.checkerboard),
            ShapeKind::Trapezoid => ShapeParams::Trapezoid(self.trapezoid),
            ShapeKind::Flower => ShapeParams::Flower(self.flower),
            ShapeKind::Triangle => ShapeParams::Triangle(Triangle),
            ShapeKind::Arc => ShapeParams::Arc(self.arc),
            ShapeKind::Spirograph => ShapeParams::Spirograph(self.spirograph),
            ShapeKind::Arrow => ShapeParams::Arrow(self.arrow),
            ShapeKind::ColorCyclingRings => ShapeParams::ColorCyclingRings(self.rings),
        }
    }

    /// The preset parameters for the selected shape
    pub fn selected_params(&self) -> ShapeParams {
        self.params(self.selected_shape)
    }

    /// Store `params` as the preset for its shape and select it
    pub fn remember(&mut self, params: ShapeParams) {
        self.selected_shape = params.kind();
        match params {
            ShapeParams::CheckerBoard(p) => self.checkerboard = p,
            ShapeParams::Trapezoid(p) => self.trapezoid = p,
            ShapeParams::Flower(p) => self.flower = p,
            ShapeParams::Triangle(_) => {}
            ShapeParams::Arc(p) => self.arc = p,
            ShapeParams::Spirograph(p) => self.spirograph = p,
            ShapeParams::Arrow(p) => self.arrow = p,
            ShapeParams::ColorCyclingRings(p) => self.rings = p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_json_round_trip() {
        init_logging();

        let mut settings = ShapeSettings::default();
        settings.remember(ShapeParams::Spirograph(Spirograph::new(100, 40, 30, 0.5)));
        let json = settings.to_json().unwrap();

        let loaded = ShapeSettings::from_json(&json).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.selected_shape, ShapeKind::Spirograph);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ShapeSettings =
            serde_json::from_str(r#"{ "selected_shape": "Flower" }"#).unwrap();
        assert_eq!(settings.selected_shape, ShapeKind::Flower);
        assert_eq!(settings.flower, Flower::new(-20.0, 100.0));
        assert_eq!(settings.checkerboard, CheckerBoard::new(4, 4));
    }

    #[test]
    fn test_invalid_json() {
        init_logging();
        assert!(matches!(
            ShapeSettings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
        assert_eq!(
            ShapeSettings::from_json_or_default("{ \"checkerboard\": 7 }"),
            ShapeSettings::default()
        );
    }

    #[test]
    fn test_params_for_every_kind() {
        let settings = ShapeSettings::default();
        for &kind in ShapeKind::all() {
            assert_eq!(settings.params(kind).kind(), kind);
        }
        assert_eq!(
            settings.selected_params(),
            ShapeParams::CheckerBoard(CheckerBoard::new(4, 4))
        );
    }
}
