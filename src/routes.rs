//! Navigation table mapping paths to workspace views.
//!
//! The application currently has a single view; the table exists so UI code
//! resolves views by path rather than hard-coding them.

/// The top-level views the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// The main plotting workspace
    #[default]
    PlotWorkspace,
}

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Path the route matches, e.g. `"/"`
    pub path: &'static str,
    /// Stable route name for logging and diagnostics
    pub name: &'static str,
    /// View displayed when the route is active
    pub view: AppView,
}

/// All registered routes.
pub const ROUTES: &[Route] = &[Route {
    path: "/",
    name: "plot-workspace",
    view: AppView::PlotWorkspace,
}];

/// Looks up the route for an exact path match.
pub fn resolve_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}
