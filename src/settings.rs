use crate::overlay::interaction::{ResizePolicy, DEFAULT_HANDLE_SIZE, DEFAULT_MIN_SIZE};
use crate::overlay::model::OverlayDefaults;
use crate::overlay::session::SessionOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving log output instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Initial window size.
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    #[serde(default = "default_panel_width")]
    pub panel_width: f32,
    /// Edge length of the resize handles in pixels.
    #[serde(default = "default_handle_size")]
    pub handle_size: f32,
    #[serde(default)]
    pub resize_policy: ResizePolicy,
    /// Length of the placeholder clip in seconds.
    #[serde(default = "default_video_duration")]
    pub video_duration_secs: f32,
    #[serde(default = "default_video_label")]
    pub video_label: String,
    /// Attribute values a new overlay starts with.
    #[serde(default)]
    pub overlay: OverlayDefaults,
}

fn default_window_size() -> (f32, f32) {
    (1280.0, 800.0)
}

fn default_panel_width() -> f32 {
    320.0
}

fn default_handle_size() -> f32 {
    DEFAULT_HANDLE_SIZE
}

fn default_video_duration() -> f32 {
    30.0
}

fn default_video_label() -> String {
    "video-editor.mp4".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            panel_width: default_panel_width(),
            handle_size: default_handle_size(),
            resize_policy: ResizePolicy::default(),
            video_duration_secs: default_video_duration(),
            video_label: default_video_label(),
            overlay: OverlayDefaults::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).with_context(|| format!("deserialize settings file {path}"))
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, json).with_context(|| format!("write settings file {path}"))?;
        Ok(())
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn session_options(&self) -> SessionOptions {
        let handle_size = if self.handle_size.is_finite() && self.handle_size > 0.0 {
            self.handle_size
        } else {
            tracing::warn!(
                "handle_size {} is invalid; using default {}",
                self.handle_size,
                DEFAULT_HANDLE_SIZE
            );
            DEFAULT_HANDLE_SIZE
        };
        let resize_policy = match self.resize_policy {
            ResizePolicy::Clamp { min_size } if !(min_size.is_finite() && min_size > 0.0) => {
                tracing::warn!(
                    "resize_policy min_size {} is invalid; using default {}",
                    min_size,
                    DEFAULT_MIN_SIZE
                );
                ResizePolicy::Clamp {
                    min_size: DEFAULT_MIN_SIZE,
                }
            }
            policy => policy,
        };
        SessionOptions {
            resize_policy,
            handle_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"debug_logging":true}"#).unwrap();
        assert!(settings.debug_logging);
        assert_eq!(settings.handle_size, 10.0);
        assert_eq!(settings.resize_policy, ResizePolicy::Clamp { min_size: 1.0 });
        assert_eq!(settings.overlay, OverlayDefaults::default());
    }

    #[test]
    fn resize_policy_is_tagged_by_mode() {
        let settings: Settings =
            serde_json::from_str(r#"{"resize_policy":{"mode":"flip"}}"#).unwrap();
        assert_eq!(settings.resize_policy, ResizePolicy::Flip);

        let settings: Settings =
            serde_json::from_str(r#"{"resize_policy":{"mode":"clamp","min_size":12.0}}"#)
                .unwrap();
        assert_eq!(settings.resize_policy, ResizePolicy::Clamp { min_size: 12.0 });
    }

    #[test]
    fn invalid_handle_size_falls_back_to_default() {
        let settings = Settings {
            handle_size: -3.0,
            ..Settings::default()
        };
        assert_eq!(settings.session_options().handle_size, DEFAULT_HANDLE_SIZE);
    }

    #[test]
    fn invalid_clamp_min_size_falls_back_to_default() {
        for min_size in [-50.0, 0.0, f32::NAN, f32::INFINITY] {
            let settings = Settings {
                resize_policy: ResizePolicy::Clamp { min_size },
                ..Settings::default()
            };
            assert_eq!(
                settings.session_options().resize_policy,
                ResizePolicy::Clamp {
                    min_size: DEFAULT_MIN_SIZE
                }
            );
        }

        let settings = Settings {
            resize_policy: ResizePolicy::Clamp { min_size: 12.0 },
            ..Settings::default()
        };
        assert_eq!(
            settings.session_options().resize_policy,
            ResizePolicy::Clamp { min_size: 12.0 }
        );
    }

    #[test]
    fn clamp_from_bad_config_keeps_gesture_extent_positive() {
        use crate::overlay::model::Point;
        use crate::overlay::session::OverlaySession;

        let settings = Settings {
            resize_policy: ResizePolicy::Clamp { min_size: -50.0 },
            ..Settings::default()
        };
        let mut session = OverlaySession::new(&settings.overlay, settings.session_options());
        assert!(session.pointer_down(Point::new(645.0, 345.0)));
        session.pointer_move(Point::new(400.0, 100.0));
        assert!(session.attributes().width > 0.0);
        assert!(session.attributes().height > 0.0);
    }

    #[test]
    fn blank_log_file_means_stderr() {
        let settings = Settings {
            log_file: Some("  ".into()),
            ..Settings::default()
        };
        assert_eq!(settings.log_file_path(), None);
    }
}
