//! Whiteboard scene document.
//!
//! A scene is the file format the renderer loads and saves. Elements already
//! in a scene are kept as raw JSON so that fields this crate never produces
//! survive a merge untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::elements::DrawableElement;

const SCENE_KIND: &str = "excalidraw";
const SCENE_VERSION: u32 = 2;
const SCENE_SOURCE: &str = "codeboard";

fn default_kind() -> String {
    SCENE_KIND.into()
}

fn default_version() -> u32 {
    SCENE_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub elements: Vec<Value>,
    #[serde(default)]
    pub app_state: Map<String, Value>,
    /// Top-level keys not modeled above (`files`, etc.).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene stamped with this tool as its source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: SCENE_KIND.into(),
            version: SCENE_VERSION,
            source: SCENE_SOURCE.into(),
            elements: Vec::new(),
            app_state: Map::new(),
            extra: Map::new(),
        }
    }

    /// Parse a scene document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `text` is not a scene object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Append `elements` after the existing ones, preserving both orders.
    /// Returns the number of elements added.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if an element fails to serialize; the scene is
    /// left unchanged in that case.
    pub fn append(&mut self, elements: &[DrawableElement]) -> Result<usize, serde_json::Error> {
        let values = elements.iter().map(serde_json::to_value).collect::<Result<Vec<_>, _>>()?;
        let added = values.len();
        self.elements.extend(values);
        Ok(added)
    }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;
