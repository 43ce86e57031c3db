//! Stage and drawing options
//!
//! Every option set has defaults and can be built from a partial JSON object,
//! so host pages only need to spell out what they change. Stage options can be
//! persisted in LocalStorage.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClibError, Result};
use crate::validate::validate_object;

/// Option sets that can be parsed leniently from JSON
pub trait OptionSet: Serialize + DeserializeOwned + Default {
    /// Merge a partial JSON object over the defaults
    fn from_value(value: &Value) -> Result<Self> {
        validate_object(value, &Self::default())
    }

    fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|_| ClibError::ArgumentType {
            index: 1,
            expected: "JSON object",
        })?;
        Self::from_value(&value)
    }
}

/// Stage-wide options applied at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageOptions {
    /// CSS background of the drawing surface
    pub background: String,
    /// Whether the surface can take keyboard focus
    pub focusable: bool,
    /// Show the browser focus outline when focused
    pub focused_outline: bool,
    pub image_smoothing: bool,
    /// Snap polyline vertices to pixel centers
    pub auto_round: bool,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            focusable: true,
            focused_outline: false,
            image_smoothing: true,
            auto_round: true,
        }
    }
}

impl OptionSet for StageOptions {}

impl StageOptions {
    /// Load options from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(key: &str) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(key) {
                if let Ok(options) = Self::from_json(&json) {
                    log::info!("Loaded stage options from LocalStorage");
                    return options;
                }
            }
        }

        log::info!("Using default stage options");
        Self::default()
    }

    /// Save options to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, key: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(key, &json);
                log::info!("Stage options saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(_key: &str) -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, _key: &str) {
        // No-op for native
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "miter" => Some(LineJoin::Miter),
            "round" => Some(LineJoin::Round),
            "bevel" => Some(LineJoin::Bevel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "butt" => Some(LineCap::Butt),
            "round" => Some(LineCap::Round),
            "square" => Some(LineCap::Square),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(TextAlign::Start),
            "end" => Some(TextAlign::End),
            "left" => Some(TextAlign::Left),
            "right" => Some(TextAlign::Right),
            "center" | "centre" => Some(TextAlign::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Ideographic => "ideographic",
            TextBaseline::Bottom => "bottom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(TextBaseline::Top),
            "hanging" => Some(TextBaseline::Hanging),
            "middle" => Some(TextBaseline::Middle),
            "alphabetic" => Some(TextBaseline::Alphabetic),
            "ideographic" => Some(TextBaseline::Ideographic),
            "bottom" => Some(TextBaseline::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inherit => "inherit",
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inherit" => Some(Direction::Inherit),
            "ltr" => Some(Direction::Ltr),
            "rtl" => Some(Direction::Rtl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// CSS color, gradient name or pattern
    pub style: String,
    pub width: f32,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            style: "black".to_string(),
            width: 0.5,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
        }
    }
}

impl OptionSet for StrokeOptions {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    pub style: String,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            style: "black".to_string(),
        }
    }
}

impl OptionSet for FillOptions {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    pub colour: String,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            colour: "black".to_string(),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl OptionSet for Shadow {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// CSS font shorthand
    pub font: String,
    pub style: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub direction: Direction,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: "14px sans-serif".to_string(),
            style: "black".to_string(),
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
            direction: Direction::Inherit,
        }
    }
}

impl OptionSet for TextOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_defaults() {
        let opts = StageOptions::default();
        assert_eq!(opts.background, "white");
        assert!(opts.focusable);
        assert!(!opts.focused_outline);
        assert!(opts.image_smoothing);
        assert!(opts.auto_round);
    }

    #[test]
    fn test_stage_options_from_partial_json() {
        let opts = StageOptions::from_json(r#"{"background": "black", "auto_round": false}"#).unwrap();
        assert_eq!(opts.background, "black");
        assert!(!opts.auto_round);
        assert!(opts.focusable);
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let stroke = StrokeOptions::from_value(&json!({ "width": "thick", "join": "round" })).unwrap();
        assert_eq!(stroke.width, 0.5);
        assert_eq!(stroke.join, LineJoin::Round);
        assert_eq!(stroke.cap, LineCap::Butt);
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let err = TextOptions::from_value(&json!({ "align": "diagonal" })).unwrap_err();
        assert!(matches!(err, ClibError::ArgumentType { .. }));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(FillOptions::from_json("{ not json").is_err());
        assert!(Shadow::from_json("[]").is_err());
    }

    #[test]
    fn test_enum_strings_round_trip() {
        for align in [
            TextAlign::Start,
            TextAlign::End,
            TextAlign::Left,
            TextAlign::Right,
            TextAlign::Center,
        ] {
            assert_eq!(TextAlign::from_str(align.as_str()), Some(align));
        }
        assert_eq!(LineCap::from_str("SQUARE"), Some(LineCap::Square));
        assert_eq!(Direction::from_str("sideways"), None);
        assert_eq!(TextBaseline::from_str("middle"), Some(TextBaseline::Middle));
    }
}
