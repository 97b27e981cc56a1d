use crate::types::affordance::{AffordanceView, Selection, Viewport};
use crate::types::errors::RenderError;

/// The web page the watcher is attached to.
///
/// Rendering goes through an isolated root: markup and styles placed there
/// cannot leak into the page, and page styles cannot reach them.
pub trait HostPage {
    /// Current text selection, if any.
    fn selection(&self) -> Option<Selection>;
    /// Removes every range from the active selection.
    fn clear_selection(&mut self);
    fn url(&self) -> String;
    fn title(&self) -> String;
    fn viewport(&self) -> Viewport;

    /// Whether the isolated root is currently attached to the page.
    fn has_isolated_root(&self) -> bool;
    /// Attaches an empty isolated root to the page.
    fn attach_isolated_root(&mut self) -> Result<(), RenderError>;
    /// Creates the affordance inside the isolated root, together with its stylesheet.
    fn mount_affordance(
        &mut self,
        view: &AffordanceView,
        stylesheet: &str,
    ) -> Result<(), RenderError>;
    /// Redraws the existing affordance in place.
    fn update_affordance(&mut self, view: &AffordanceView) -> Result<(), RenderError>;
    /// Removes the affordance and the stylesheet mounted with it.
    fn remove_affordance(&mut self);
    /// Number of nodes still held by the isolated root.
    fn isolated_child_count(&self) -> usize;
    /// Removes the isolated root from the page.
    fn detach_isolated_root(&mut self);
}
