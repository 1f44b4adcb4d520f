//! User-tunable overlay settings, read once from local storage.
//!
//! Stored under [`SETTINGS_KEY`] as JSON. Every field is optional; missing
//! fields take their defaults and unreadable data falls back entirely.

use log::warn;
use serde::Deserialize;

use crate::error::ConfigError;

pub const SETTINGS_KEY: &str = "hs_settings";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Opacity (0-100) applied whenever a new image is imported.
    pub default_opacity: u8,
    pub opacity_step: u8,
    pub rotate_step_degrees: f64,
    /// Absolute scale set by the zoom-in button.
    pub zoom_in_scale: f64,
    /// Absolute scale set by the zoom-out button.
    pub zoom_out_scale: f64,
    pub camera_ideal_width: u32,
    pub camera_ideal_height: u32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            default_opacity: 50,
            opacity_step: 5,
            rotate_step_degrees: 15.0,
            zoom_in_scale: 1.2,
            zoom_out_scale: 0.8,
            camera_ideal_width: 1280,
            camera_ideal_height: 720,
        }
    }
}

impl OverlaySettings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(raw)?;
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.default_opacity = self.default_opacity.min(100);
        self.opacity_step = self.opacity_step.clamp(1, 100);
        if !self.rotate_step_degrees.is_finite() {
            self.rotate_step_degrees = Self::default().rotate_step_degrees;
        }
        self
    }

    /// Raw read from local storage; `Ok(None)` when nothing is stored.
    pub fn read_stored() -> Result<Option<Self>, ConfigError> {
        let store = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        Self::from_stored_item(store.get_item(SETTINGS_KEY))
    }

    /// Interpret the result of a storage lookup. A failed lookup means the
    /// storage is unusable, not that nothing was saved.
    fn from_stored_item<E>(item: Result<Option<String>, E>) -> Result<Option<Self>, ConfigError> {
        match item.map_err(|_| ConfigError::StorageUnavailable)? {
            Some(raw) => Self::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn load() -> Self {
        match Self::read_stored() {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("using default overlay settings: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let s = OverlaySettings::from_json(r#"{"default_opacity": 70, "rotate_step_degrees": 5}"#)
            .unwrap();
        assert_eq!(s.default_opacity, 70);
        assert_eq!(s.rotate_step_degrees, 5.0);
        assert_eq!(s.opacity_step, 5);
        assert_eq!(s.zoom_in_scale, 1.2);
        assert_eq!(s.camera_ideal_height, 720);
    }

    #[test]
    fn out_of_range_values_are_sanitized() {
        let s = OverlaySettings::from_json(r#"{"default_opacity": 180, "opacity_step": 0}"#).unwrap();
        assert_eq!(s.default_opacity, 100);
        assert_eq!(s.opacity_step, 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            OverlaySettings::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(OverlaySettings::from_json(r#"{"default_opacity": -1}"#).is_err());
    }

    #[test]
    fn failed_storage_lookup_is_reported() {
        assert!(matches!(
            OverlaySettings::from_stored_item(Err(())),
            Err(ConfigError::StorageUnavailable)
        ));
        assert_eq!(OverlaySettings::from_stored_item::<()>(Ok(None)).unwrap(), None);
        let stored = OverlaySettings::from_stored_item::<()>(Ok(Some(r#"{"opacity_step": 10}"#.into())))
            .unwrap()
            .unwrap();
        assert_eq!(stored.opacity_step, 10);
    }
}
