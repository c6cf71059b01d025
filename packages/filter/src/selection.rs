//! Single-feature selection tracking.
//!
//! The rendering collaborator models selection as per-feature boolean
//! state, not a single pointer, so switching the selection is a two-step
//! transition: the old feature must be explicitly deselected before the
//! new one is selected, or a stale highlight is left behind. Transitions
//! are returned as [`SelectionChange`] values for the map adapter to apply
//! in order.

use serde::{Deserialize, Serialize};

/// The feature-state updates produced by one selection transition,
/// to be applied in field order: deselect first, then select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionChange {
    /// Feature id whose `selected` state must be set to `false`.
    pub deselect: Option<String>,
    /// Feature id whose `selected` state must be set to `true`.
    pub select: Option<String>,
}

impl SelectionChange {
    /// Whether this transition changes any feature state.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.deselect.is_none() && self.select.is_none()
    }
}

/// Tracks which single manhole feature is currently highlighted.
///
/// States are `Unselected` and `Selected(id)`; filtering and reloads force
/// a clear when the id leaves the working set, so the selection never
/// dangles on a filtered-out feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    current: Option<String>,
}

impl SelectionTracker {
    /// Selects a feature, deselecting the previous one if different.
    pub fn select(&mut self, id: impl Into<String>) -> SelectionChange {
        let id = id.into();
        if self.current.as_deref() == Some(id.as_str()) {
            return SelectionChange::default();
        }
        SelectionChange {
            deselect: self.current.replace(id.clone()),
            select: Some(id),
        }
    }

    /// Clears the selection, deselecting the active feature if any.
    pub fn clear(&mut self) -> SelectionChange {
        SelectionChange {
            deselect: self.current.take(),
            select: None,
        }
    }

    /// Forces a clear when the selected id is not in `present_ids`.
    ///
    /// Called after every reload or filter change; a vanished feature is
    /// auto-corrected, not reported as an error.
    pub fn retain_present<'a>(
        &mut self,
        mut present_ids: impl Iterator<Item = &'a str>,
    ) -> SelectionChange {
        match &self.current {
            Some(current) if !present_ids.any(|id| id == current) => self.clear(),
            _ => SelectionChange::default(),
        }
    }

    /// The currently selected feature id.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_from_unselected() {
        let mut tracker = SelectionTracker::default();
        let change = tracker.select("5");
        assert_eq!(change.deselect, None);
        assert_eq!(change.select.as_deref(), Some("5"));
        assert_eq!(tracker.current(), Some("5"));
    }

    #[test]
    fn switching_deselects_previous_first() {
        let mut tracker = SelectionTracker::default();
        tracker.select("5");
        let change = tracker.select("7");
        assert_eq!(change.deselect.as_deref(), Some("5"));
        assert_eq!(change.select.as_deref(), Some("7"));
        assert_eq!(tracker.current(), Some("7"));
    }

    #[test]
    fn reselecting_same_id_is_noop() {
        let mut tracker = SelectionTracker::default();
        tracker.select("5");
        assert!(tracker.select("5").is_noop());
        assert_eq!(tracker.current(), Some("5"));
    }

    #[test]
    fn clear_deselects_active_feature() {
        let mut tracker = SelectionTracker::default();
        tracker.select("5");
        let change = tracker.clear();
        assert_eq!(change.deselect.as_deref(), Some("5"));
        assert_eq!(tracker.current(), None);
        assert!(tracker.clear().is_noop());
    }

    #[test]
    fn retain_present_clears_vanished_id() {
        let mut tracker = SelectionTracker::default();
        tracker.select("5");

        let change = tracker.retain_present(["1", "2"].into_iter());
        assert_eq!(change.deselect.as_deref(), Some("5"));
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn retain_present_keeps_surviving_id() {
        let mut tracker = SelectionTracker::default();
        tracker.select("2");
        assert!(tracker.retain_present(["1", "2"].into_iter()).is_noop());
        assert_eq!(tracker.current(), Some("2"));
    }
}
