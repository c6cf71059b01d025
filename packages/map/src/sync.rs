//! Keeps a [`MapSurface`] in step with the core's state.
//!
//! All renderer traffic funnels through here: wholesale source updates for
//! the visible set, deselect-then-select feature-state transitions, status
//! tab filters, and the ward polygon overlay.

use sewer_map_filter::{ClassifiedManhole, SelectionChange};
use sewer_map_geography_models::{LngLat, WardBoundary};

use crate::{expression::StatusTab, features, MapSurface, MANHOLES_SOURCE, MANHOLE_LAYER, WARD_SOURCE};

/// Pixel padding used when fitting the viewport to a ward polygon.
const WARD_FIT_PADDING_PX: f64 = 40.0;

/// Drives one map surface from core state transitions.
pub struct MapSync<S> {
    surface: S,
    ward_visible: bool,
}

impl<S: MapSurface> MapSync<S> {
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            ward_visible: false,
        }
    }

    /// Replaces the manhole source with the current visible set.
    pub fn sync_visible(&mut self, visible: &[ClassifiedManhole]) {
        log::debug!("Syncing {} visible manholes to the map", visible.len());
        self.surface
            .add_or_update_source(MANHOLES_SOURCE, features::feature_collection(visible));
    }

    /// Applies a selection transition: the deselect always lands before the
    /// select, so the renderer never holds two highlighted features.
    pub fn apply_selection(&mut self, change: &SelectionChange) {
        if let Some(id) = &change.deselect {
            self.surface.set_feature_state(MANHOLES_SOURCE, id, false);
        }
        if let Some(id) = &change.select {
            self.surface.set_feature_state(MANHOLES_SOURCE, id, true);
        }
    }

    /// Applies a status tab's filter expression to the dot layer.
    pub fn set_status_tab(&mut self, tab: StatusTab) {
        self.surface
            .set_filter(MANHOLE_LAYER, tab.filter_expression());
    }

    /// Draws a ward boundary polygon and fits the viewport around it.
    pub fn show_ward(&mut self, boundary: &WardBoundary) {
        self.surface
            .add_or_update_source(WARD_SOURCE, features::ward_polygon(&boundary.ring));
        self.ward_visible = true;
        if let Some(bounds) = boundary.bounds() {
            self.surface.fit_bounds(bounds, WARD_FIT_PADDING_PX);
        }
    }

    /// Removes the ward polygon overlay, if shown.
    pub fn clear_ward(&mut self) {
        if self.ward_visible {
            self.surface.remove_source(WARD_SOURCE);
            self.ward_visible = false;
        }
    }

    /// Moves the viewport.
    pub fn fly_to(&mut self, center: LngLat, zoom: f64) {
        self.surface.fly_to(center, zoom);
    }

    /// The wrapped surface, for assertions in tests.
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use sewer_map_filter::SelectionTracker;
    use sewer_map_geography_models::BoundingBox;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Command {
        UpdateSource(String),
        RemoveSource(String),
        SetFilter(String, Option<serde_json::Value>),
        FeatureState(String, bool),
        FlyTo(LngLat, f64),
        FitBounds(BoundingBox),
    }

    #[derive(Default)]
    struct Recording {
        commands: Vec<Command>,
    }

    impl MapSurface for Recording {
        fn add_or_update_source(&mut self, source_id: &str, _data: serde_json::Value) {
            self.commands.push(Command::UpdateSource(source_id.into()));
        }

        fn remove_source(&mut self, source_id: &str) {
            self.commands.push(Command::RemoveSource(source_id.into()));
        }

        fn set_filter(&mut self, layer_id: &str, filter: Option<serde_json::Value>) {
            self.commands
                .push(Command::SetFilter(layer_id.into(), filter));
        }

        fn set_feature_state(&mut self, _source_id: &str, feature_id: &str, selected: bool) {
            self.commands
                .push(Command::FeatureState(feature_id.into(), selected));
        }

        fn fly_to(&mut self, center: LngLat, zoom: f64) {
            self.commands.push(Command::FlyTo(center, zoom));
        }

        fn fit_bounds(&mut self, bounds: BoundingBox, _padding_px: f64) {
            self.commands.push(Command::FitBounds(bounds));
        }
    }

    #[test]
    fn selection_switch_deselects_before_selecting() {
        let mut tracker = SelectionTracker::default();
        let mut sync = MapSync::new(Recording::default());

        sync.apply_selection(&tracker.select("5"));
        sync.apply_selection(&tracker.select("7"));

        assert_eq!(
            sync.surface().commands,
            vec![
                Command::FeatureState("5".into(), true),
                Command::FeatureState("5".into(), false),
                Command::FeatureState("7".into(), true),
            ]
        );
        assert_eq!(tracker.current(), Some("7"));
    }

    #[test]
    fn status_tab_targets_dot_layer() {
        let mut sync = MapSync::new(Recording::default());
        sync.set_status_tab(StatusTab::Danger);
        sync.set_status_tab(StatusTab::All);

        let Command::SetFilter(layer, Some(_)) = &sync.surface().commands[0] else {
            panic!("expected a filter expression");
        };
        assert_eq!(layer, MANHOLE_LAYER);
        assert_eq!(
            sync.surface().commands[1],
            Command::SetFilter(MANHOLE_LAYER.into(), None)
        );
    }

    #[test]
    fn ward_overlay_draws_fits_and_clears() {
        let boundary = WardBoundary::from_vertices(
            "Hasmathpet",
            vec![[78.0, 17.0], [78.1, 17.0], [78.1, 17.1]],
        )
        .unwrap();

        let mut sync = MapSync::new(Recording::default());
        sync.show_ward(&boundary);
        sync.clear_ward();
        // A second clear with nothing shown is a no-op.
        sync.clear_ward();

        assert_eq!(sync.surface().commands.len(), 3);
        assert_eq!(
            sync.surface().commands[0],
            Command::UpdateSource(WARD_SOURCE.into())
        );
        assert!(matches!(sync.surface().commands[1], Command::FitBounds(_)));
        assert_eq!(
            sync.surface().commands[2],
            Command::RemoveSource(WARD_SOURCE.into())
        );
    }

    #[test]
    fn sync_visible_replaces_manhole_source() {
        let mut sync = MapSync::new(Recording::default());
        sync.sync_visible(&[]);
        assert_eq!(
            sync.surface().commands,
            vec![Command::UpdateSource(MANHOLES_SOURCE.into())]
        );
    }
}
