//! File selection for the upload screen.
//!
//! Both input channels, the browser file dialog and drag & drop, feed the
//! same single-owner slot. The upload always reads the file from here, never
//! from the native `<input>` element.

use crate::config::DROP_PLACEHOLDER;

use super::FileHandle;

/// Drag events that reach the drop zone before (or instead of) a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

/// Current-selection slot of the upload form.
#[derive(Clone, Debug)]
pub struct FileIntake<F> {
    selected: Option<F>,
}

impl<F> Default for FileIntake<F> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<F: FileHandle> FileIntake<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion of the file dialog. An empty list means the user cancelled.
    ///
    /// Returns whether the selection changed.
    pub fn select_via_browser(&mut self, chosen: impl IntoIterator<Item = F>) -> bool {
        self.select_first(chosen, "browser")
    }

    /// Files dropped on the zone. A drop without files (text, links) is
    /// ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select_via_drop(&mut self, dropped: impl IntoIterator<Item = F>) -> bool {
        self.select_first(dropped, "drop")
    }

    /// Drag enter/over/leave. Never touches the selection.
    pub fn drag(&self, phase: DragPhase) {
        log::trace!("drag {:?}", phase);
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// Drop zone label.
    pub fn label(&self) -> String {
        match &self.selected {
            Some(file) => file.name(),
            None => DROP_PLACEHOLDER.to_string(),
        }
    }

    fn select_first(&mut self, files: impl IntoIterator<Item = F>, channel: &str) -> bool {
        let Some(file) = files.into_iter().next() else {
            log::debug!("{} selection without files, keeping current file", channel);
            return false;
        };
        log::info!("📄 Selected {} via {}", file.name(), channel);
        self.selected = Some(file);
        true
    }
}
