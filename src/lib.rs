//! # Plot Tool
//!
//! The state layer of a map annotation ("plotting") editor: a centralized
//! store tracking the active drawing tool, the selected feature, and a
//! bounded undo/redo history of serialized scene snapshots, together with the
//! static tool-option table and the navigation route table.
//!
//! ## Features
//! - Bounded, branch-free undo/redo over opaque scene snapshots
//! - Tool and feature-selection state with derived `can_undo`/`can_redo` flags
//! - Static tool-option metadata for toolbar construction
//! - Single-route navigation table resolving paths to workspace views
//! - An egui shell exercising the store (toolbar, shortcuts, status panel)
//!
//! Scene serialization stays outside this crate: snapshots are opaque strings
//! produced and consumed by the map engine's serializer.

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod routes;
mod store;
mod types;
mod ui;

// Re-export public types and functions
pub use constants::*;
pub use routes::*;
pub use store::*;
pub use types::*;
use ui::PlotApp;

/// Runs the plot tool application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop, restoring persisted UI settings when available.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error`
/// if initialization fails.
///
/// # Example
///
/// ```no_run
/// use plot_tool::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Plot Tool",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| match PlotApp::from_json(&json) {
                    Ok(app) => Some(app),
                    Err(err) => {
                        log::warn!("Discarding unreadable persisted state: {err}");
                        None
                    }
                })
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}
