//! Shared application-wide constants.
//! Centralizes the history bound and the static tool-option table.

use crate::types::{PlotTool, ToolOption};

// Undo/redo
/// Maximum number of scene snapshots retained on the undo stack.
pub const MAX_HISTORY: usize = 80;

// Toolbar
/// The selectable drawing tools, in toolbar order. `PlotTool::None` is not
/// listed; deselecting the active tool is a separate toolbar action.
pub const TOOL_OPTIONS: &[ToolOption] = &[
    ToolOption { label: "Point", tool: PlotTool::Point },
    ToolOption { label: "Line", tool: PlotTool::Line },
    ToolOption { label: "Polygon", tool: PlotTool::Polygon },
    ToolOption { label: "Icon", tool: PlotTool::Icon },
    ToolOption { label: "Text", tool: PlotTool::Text },
    ToolOption { label: "Arrow", tool: PlotTool::Arrow },
    ToolOption { label: "Battle Arrow", tool: PlotTool::BattleArrow },
];
