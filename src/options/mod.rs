//! Widget configuration with TOML file support.
//!
//! Options cover only configuration (placement, look, tolerance); the
//! interaction state itself is never persisted. Missing fields fall back
//! to defaults so partial files work.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OverlayError;
use crate::overlay::DEFAULT_OUTLINE_COLOR;
use crate::widget::DEFAULT_TOLERANCE;

/// Orientation-marker widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orientation Marker")]
#[serde(default)]
pub struct WidgetOptions {
    /// Whether the overlay can be moved and resized with the pointer.
    #[schemars(title = "Interactive")]
    pub interactive: bool,
    /// RGB outline color shown while hovering, each channel in `[0, 1]`.
    #[schemars(title = "Outline Color")]
    pub outline_color: [f32; 3],
    /// Normalized `[min_x, min_y, max_x, max_y]` placement on the host.
    #[schemars(title = "Viewport")]
    pub viewport: [f64; 4],
    /// Corner grab distance in pixels.
    #[schemars(title = "Corner Tolerance", range(min = 1, max = 10), extend("step" = 1))]
    pub tolerance: i32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            outline_color: DEFAULT_OUTLINE_COLOR,
            viewport: [0.0, 0.0, 0.2, 0.2],
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl WidgetOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(WidgetOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| OverlayError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails when serialization or writing the file fails.
    pub fn save(&self, path: &Path) -> Result<(), OverlayError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OverlayError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
