//! Core data types for the plot tool.
//!
//! This module defines the drawing-tool enumeration, the static tool-option
//! metadata row, and the style attributes carried by plotted features. None of
//! these types contain behavior; the editing logic lives in [`crate::store`].

use serde::{Deserialize, Serialize};

/// The drawing tools available in the plot workspace.
///
/// Serialized with camelCase names (`"battleArrow"`) so payloads written by
/// other clients of the same scene format round-trip unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PlotTool {
    /// No tool active; clicks select existing features instead of drawing
    #[default]
    None,
    /// Place a single point marker
    Point,
    /// Draw a polyline
    Line,
    /// Draw a closed polygon
    Polygon,
    /// Place an icon marker
    Icon,
    /// Place a text label
    Text,
    /// Draw a plain arrow
    Arrow,
    /// Draw a battle (assault axis) arrow
    BattleArrow,
}

/// A selectable toolbar entry pairing a display label with its tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOption {
    /// Text shown on the toolbar button
    pub label: &'static str,
    /// Tool activated when the entry is chosen
    pub tool: PlotTool,
}

/// Icon glyphs available for icon-type features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Map pin marker
    #[default]
    Pin,
    /// Star marker
    Star,
    /// Flag marker
    Flag,
}

/// Visual style attributes attached to a plotted feature.
///
/// Styles travel inside serialized scene snapshots, which the history store
/// treats as opaque; this type exists for the serializer collaborator and for
/// UI property editors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureStyle {
    /// Stroke/fill color as a CSS-style color string
    pub color: String,
    /// Stroke width or marker size in pixels
    pub size: f32,
    /// Text label attached to the feature
    pub label: String,
    /// Rotation in degrees
    pub rotate: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Glyph used when the feature is an icon marker
    pub icon: IconKind,
}

impl Default for FeatureStyle {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            size: 2.0,
            label: String::new(),
            rotate: 0.0,
            scale: 1.0,
            icon: IconKind::Pin,
        }
    }
}
