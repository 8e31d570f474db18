//! User interface shell for the plot tool.
//!
//! This module renders the toolbar, status panel, and scene editor, and wires
//! user actions (tool selection, commit, undo/redo, keyboard shortcuts) into
//! the plot store.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main PlotApp

mod state;

#[cfg(test)]
mod tests;

pub use state::PlotApp;

use crate::constants::TOOL_OPTIONS;
use crate::routes::AppView;
use crate::types::PlotTool;
use eframe::egui;

impl eframe::App for PlotApp {
    /// Persist UI settings and tool state between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_undo_redo_keys(ctx);

        // Top toolbar occupies full width and is independent of the side panel
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::right("status_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_status_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            AppView::PlotWorkspace => self.draw_workspace(ui),
        });
    }
}

impl PlotApp {
    /// Handles undo/redo keyboard shortcuts.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    fn handle_undo_redo_keys(&mut self, ctx: &egui::Context) {
        // Check if any text edit widget wants keyboard focus - if so, don't handle undo/redo
        let is_editing_text = ctx.wants_keyboard_input();

        if !is_editing_text {
            // Ctrl+Z for undo
            if ctx
                .input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift)
            {
                self.perform_undo();
            }
            // Ctrl+Shift+Z or Ctrl+Y for redo
            else if ctx.input(|i| {
                (i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift)
                    || (i.key_pressed(egui::Key::Y) && i.modifiers.command)
            }) {
                self.perform_redo();
            }
        }
    }

    /// Renders the toolbar with tool selection, commit, and undo/redo controls.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Drawing tools
            for option in TOOL_OPTIONS {
                let selected = self.store.active_tool == option.tool;
                if ui.selectable_label(selected, option.label).clicked() {
                    // Clicking the active tool again deselects it
                    let tool = if selected { PlotTool::None } else { option.tool };
                    self.store.set_tool(tool);
                }
            }

            ui.separator();

            // Undo/Redo operations
            ui.add_enabled_ui(self.store.can_undo(), |ui| {
                if ui.button("⟲ Undo").clicked() {
                    self.perform_undo();
                }
            });
            ui.add_enabled_ui(self.store.can_redo(), |ui| {
                if ui.button("⟳ Redo").clicked() {
                    self.perform_redo();
                }
            });

            ui.separator();

            ui.add_enabled_ui(self.has_pending_edits(), |ui| {
                if ui.button("Commit").clicked() {
                    self.commit_scene();
                }
            });
            if ui.button("New Scene").clicked() {
                self.new_scene();
            }

            ui.separator();

            // Theme toggle
            let theme_label = if self.dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(theme_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }

    /// Renders the status panel showing tool, selection, and history depth.
    fn draw_status_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Status");
        ui.separator();

        ui.label(format!("Active tool: {:?}", self.store.active_tool));
        match self.store.selected_feature_id().map(str::to_owned) {
            Some(id) => {
                ui.horizontal(|ui| {
                    ui.label(format!("Selected feature: {id}"));
                    if ui.small_button("Deselect").clicked() {
                        self.store.set_selected_feature_id("");
                    }
                });
            }
            None => {
                ui.label("Selected feature: none");
            }
        }

        ui.separator();
        ui.label(format!("Undo depth: {}", self.store.undo_depth()));
        ui.label(format!("Redo depth: {}", self.store.redo_depth()));
        if self.has_pending_edits() {
            ui.label("Scene has uncommitted edits");
        }
    }

    /// Renders the workspace view: an editor over the serialized scene.
    ///
    /// In the full product this area hosts the map canvas; the state layer
    /// only ever sees the serializer's output, which is what is shown here.
    fn draw_workspace(&mut self, ui: &mut egui::Ui) {
        ui.label("Serialized scene");
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.scene)
                    .id_salt("scene_editor")
                    .desired_width(f32::INFINITY)
                    .desired_rows(24)
                    .code_editor(),
            );
        });
    }

    /// Commits the current scene buffer as a history snapshot.
    pub fn commit_scene(&mut self) {
        self.store.push_snapshot(self.scene.clone());
        self.committed_scene = self.scene.clone();
        log::debug!("committed snapshot, undo depth {}", self.store.undo_depth());
    }

    /// Performs an undo operation, applying the restored snapshot to the scene.
    pub fn perform_undo(&mut self) {
        if let Some(snapshot) = self.store.undo(self.committed_scene.clone()) {
            self.scene = snapshot.clone();
            self.committed_scene = snapshot;
            // A restored scene may no longer contain the selected feature
            self.store.set_selected_feature_id("");
        }
    }

    /// Performs a redo operation, applying the replayed snapshot to the scene.
    pub fn perform_redo(&mut self) {
        if let Some(snapshot) = self.store.redo() {
            self.scene = snapshot.clone();
            self.committed_scene = snapshot;
            self.store.set_selected_feature_id("");
        }
    }

    /// Replaces the scene with an empty one and discards all history.
    pub fn new_scene(&mut self) {
        self.scene.clear();
        self.committed_scene.clear();
        self.store.clear_history();
        self.store.set_selected_feature_id("");
        self.store.set_tool(PlotTool::None);
    }
}
