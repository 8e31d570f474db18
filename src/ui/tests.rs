use super::*;
use crate::types::PlotTool;
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    // Real backends report the current modifier state in `RawInput.modifiers`
    // alongside key events; mirror that so `ctx.input(|i| i.modifiers)` sees it.
    for event in &raw.events {
        if let egui::Event::Key { modifiers, .. } = event {
            raw.modifiers = *modifiers;
        }
    }

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    })
}

/// Seed an app whose scene has been committed twice, so undo is available.
fn app_with_history() -> PlotApp {
    let mut app = PlotApp::default();
    app.scene = "v1".to_string();
    app.commit_scene();
    app.scene = "v2".to_string();
    app.commit_scene();
    app
}

#[test]
fn commit_records_snapshot_and_clears_pending_flag() {
    let mut app = PlotApp::default();
    app.scene = "v1".to_string();
    assert!(app.has_pending_edits());

    app.commit_scene();
    assert!(!app.has_pending_edits());
    assert_eq!(app.store.undo_depth(), 1);
    // First commit is the baseline; nothing to revert to yet.
    assert!(!app.store.can_undo());
}

#[test]
fn undo_restores_previous_scene() {
    let mut app = app_with_history();
    assert!(app.store.can_undo());

    app.perform_undo();
    assert_eq!(app.scene, "v1");
    assert!(app.store.can_redo());

    app.perform_redo();
    assert_eq!(app.scene, "v2");
    assert!(!app.store.can_redo());
}

#[test]
fn undo_clears_feature_selection() {
    let mut app = app_with_history();
    app.store.set_selected_feature_id("f1");
    app.perform_undo();
    assert_eq!(app.store.selected_feature_id(), None);
}

#[test]
fn commit_after_undo_discards_redo_branch() {
    let mut app = app_with_history();
    app.perform_undo();
    assert!(app.store.can_redo());

    app.scene = "v3".to_string();
    app.commit_scene();
    assert!(!app.store.can_redo());
    app.perform_undo();
    assert_eq!(app.scene, "v1");
}

#[test]
fn new_scene_resets_everything() {
    let mut app = app_with_history();
    app.store.set_tool(PlotTool::Polygon);
    app.store.set_selected_feature_id("f1");

    app.new_scene();
    assert_eq!(app.scene, "");
    assert_eq!(app.store.active_tool, PlotTool::None);
    assert_eq!(app.store.selected_feature_id(), None);
    assert!(!app.store.can_undo());
    assert!(!app.store.can_redo());
}

#[test]
fn ctrl_z_triggers_undo() {
    let mut app = app_with_history();

    let events = vec![egui::Event::Key {
        key: egui::Key::Z,
        physical_key: Some(egui::Key::Z),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers {
            command: true,
            ..Default::default()
        },
    }];
    let _ = run_ui_with(events, |ctx| {
        app.handle_undo_redo_keys(ctx);
    });

    assert_eq!(app.scene, "v1");
    assert!(app.store.can_redo());
}

#[test]
fn ctrl_shift_z_triggers_redo() {
    let mut app = app_with_history();
    app.perform_undo();
    assert_eq!(app.scene, "v1");

    let events = vec![egui::Event::Key {
        key: egui::Key::Z,
        physical_key: Some(egui::Key::Z),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers {
            command: true,
            shift: true,
            ..Default::default()
        },
    }];
    let _ = run_ui_with(events, |ctx| {
        app.handle_undo_redo_keys(ctx);
    });

    assert_eq!(app.scene, "v2");
    assert!(!app.store.can_redo());
}

#[test]
fn toolbar_renders_without_panicking() {
    let mut app = app_with_history();
    let _ = run_ui_with(Vec::new(), |ctx| {
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            app.draw_toolbar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_workspace(ui);
        });
    });
}

#[test]
fn app_state_round_trips_ui_settings_only() {
    let mut app = app_with_history();
    app.dark_mode = false;
    app.store.set_tool(PlotTool::Arrow);

    let json = app.to_json().expect("app state should serialize");
    let restored = PlotApp::from_json(&json).expect("app state should deserialize");

    assert!(!restored.dark_mode);
    assert_eq!(restored.store.active_tool, PlotTool::Arrow);
    // Scene and history are session-scoped, not persisted.
    assert_eq!(restored.scene, "");
    assert_eq!(restored.store.undo_depth(), 0);
}
