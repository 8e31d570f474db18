//! Application state structures.
//!
//! This module contains the main application struct tying the plot store to
//! the egui shell, plus its persistence helpers.

use crate::routes::{resolve_route, AppView};
use crate::store::PlotStore;
use serde::{Deserialize, Serialize};

/// The main application structure wiring the plot store into the egui shell.
///
/// The live map scene is an external collaborator in the full product; here it
/// is represented by its serialized form only (`scene`), which is exactly what
/// the history store traffics in.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct PlotApp {
    /// Tool, selection, and undo/redo state
    pub store: PlotStore,
    /// Serialized form of the current scene, as produced by the serializer
    #[serde(skip)]
    pub scene: String,
    /// Scene content as of the last commit, used to detect pending edits
    #[serde(skip)]
    pub committed_scene: String,
    /// View selected by the active route
    #[serde(skip)]
    pub view: AppView,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl Default for PlotApp {
    fn default() -> Self {
        Self {
            store: PlotStore::new(),
            scene: String::new(),
            committed_scene: String::new(),
            view: resolve_route("/").map(|r| r.view).unwrap_or_default(),
            dark_mode: true,
        }
    }
}

impl PlotApp {
    /// Serializes the persistable application state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns true if the scene buffer has edits not yet committed to history.
    pub fn has_pending_edits(&self) -> bool {
        self.scene != self.committed_scene
    }
}
