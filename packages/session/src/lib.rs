#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The dashboard session: the single place where state transitions happen.
//!
//! All mutation flows through [`DashboardSession`] methods, each of which
//! explicitly recomputes the filter options and the visible set, drops a
//! selection whose feature was filtered away, and re-syncs the map surface.
//! There is no implicit, dependency-tracked recomputation; the data flow is
//! a pure function of (current records, current selection) invoked after
//! every transition, which also makes reload-vs-selection races harmless:
//! last write wins and both inputs are idempotent.

pub mod load;
pub mod refresh;

use chrono::{Local, NaiveDate};
use sewer_map_filter::{
    apply, index_options, ClassifiedManhole, FilterOptions, SelectionTracker,
};
use sewer_map_geography::WardBoundaries;
use sewer_map_geography_models::LngLat;
use sewer_map_manhole_models::{FilterSelection, ManholeRecord, WardInfo};
use sewer_map_map::{MapSurface, MapSync, StatusTab};

/// Viewport applied by the reset control.
pub const RESET_CENTER: LngLat = [78.4894, 17.4740];
/// Zoom applied by the reset control.
pub const RESET_ZOOM: f64 = 14.69;
/// Zoom used when focusing a single manhole or a manual lat/lng jump.
pub const FOCUS_ZOOM: f64 = 18.0;

/// One user session over the manhole dashboard.
///
/// Owns the working set, the hierarchical filter selection, the
/// single-feature selection, the status tab, and the map sync driver.
/// None of this state persists across a full page reload.
pub struct DashboardSession<S> {
    records: Vec<ManholeRecord>,
    wards: WardBoundaries,
    ward_info: Vec<WardInfo>,
    selection: FilterSelection,
    tracker: SelectionTracker,
    status_tab: StatusTab,
    options: FilterOptions,
    visible: Vec<ClassifiedManhole>,
    active_ward: Option<String>,
    map: MapSync<S>,
}

impl<S: MapSurface> DashboardSession<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            records: Vec::new(),
            wards: WardBoundaries::default(),
            ward_info: Vec::new(),
            selection: FilterSelection::default(),
            tracker: SelectionTracker::default(),
            status_tab: StatusTab::default(),
            options: FilterOptions::default(),
            visible: Vec::new(),
            active_ward: None,
            map: MapSync::new(surface),
        }
    }

    /// Replaces the manhole working set wholesale.
    ///
    /// Also the daily recomputation entry point: reloading with the same
    /// records re-classifies every status against the new `today`.
    pub fn load_records(&mut self, records: Vec<ManholeRecord>) {
        log::info!("Loaded {} manhole records", records.len());
        self.records = records;
        self.recompute();
    }

    /// Replaces the ward boundary set.
    pub fn load_wards(&mut self, wards: WardBoundaries) {
        self.wards = wards;
    }

    /// Replaces the ward metadata set.
    pub fn load_ward_info(&mut self, ward_info: Vec<WardInfo>) {
        self.ward_info = ward_info;
    }

    /// Selects a division (or `None` for "All"), cascading the reset of
    /// area and zone.
    pub fn select_division(&mut self, division: Option<String>) {
        self.selection.select_division(division);
        self.recompute();
    }

    /// Selects an area within the current division.
    pub fn select_area(&mut self, area_name: Option<String>) {
        self.selection.select_area(area_name);
        self.recompute();
    }

    /// Selects a zone within the current division + area.
    pub fn select_zone(&mut self, zone: Option<String>) {
        self.selection.select_zone(zone);
        self.recompute();
    }

    /// Switches the quick status tab; independent of the hierarchy filter.
    pub fn set_status_tab(&mut self, tab: StatusTab) {
        self.status_tab = tab;
        self.map.set_status_tab(tab);
    }

    /// Handles a click on a rendered manhole feature.
    ///
    /// Selecting a manhole closes an open ward view (the two detail panes
    /// are mutually exclusive) and focuses the viewport on the feature.
    /// A click on an id that is not currently visible is ignored.
    pub fn click_feature(&mut self, id: &str) {
        let Some(coords) = self
            .visible
            .iter()
            .find(|v| v.record.id == id)
            .map(|v| [v.record.longitude, v.record.latitude])
        else {
            log::warn!("Ignoring click on non-visible feature {id}");
            return;
        };

        self.close_ward_view();
        let change = self.tracker.select(id);
        self.map.apply_selection(&change);
        self.map.fly_to(coords, FOCUS_ZOOM);
    }

    /// Clears the single-feature selection, if any.
    pub fn clear_selection(&mut self) {
        let change = self.tracker.clear();
        self.map.apply_selection(&change);
    }

    /// Opens the ward view for an area name.
    ///
    /// Clears any manhole selection first. A missing or degenerate
    /// boundary is non-fatal: the detail pane still opens, only the
    /// polygon overlay is skipped.
    pub fn show_ward(&mut self, area_name: &str) {
        self.clear_selection();
        self.active_ward = Some(area_name.to_string());

        if let Some(boundary) = self.wards.resolve(area_name) {
            let boundary = boundary.clone();
            self.map.show_ward(&boundary);
        } else {
            log::warn!("No boundary polygon for ward {area_name}");
            self.map.clear_ward();
        }
    }

    /// Closes the ward view and removes its overlay.
    pub fn close_ward_view(&mut self) {
        self.active_ward = None;
        self.map.clear_ward();
    }

    /// Ward metadata for an area name, matched like boundary lookups.
    #[must_use]
    pub fn ward_details(&self, area_name: &str) -> Option<&WardInfo> {
        let query = area_name.trim().to_lowercase();
        self.ward_info
            .iter()
            .find(|info| info.name.trim().to_lowercase() == query)
    }

    /// Manual "go to" control: focuses the viewport on a coordinate.
    pub fn jump_to(&mut self, latitude: f64, longitude: f64) {
        self.map.fly_to([longitude, latitude], FOCUS_ZOOM);
    }

    /// Reset control: clears every filter and selection, closes the ward
    /// view, and recenters the viewport to the fixed default.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.clear_selection();
        self.close_ward_view();
        self.set_status_tab(StatusTab::All);
        self.recompute();
        self.map.fly_to(RESET_CENTER, RESET_ZOOM);
    }

    /// Current cascading option lists.
    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The filtered, status-annotated visible set.
    #[must_use]
    pub fn visible(&self) -> &[ClassifiedManhole] {
        &self.visible
    }

    /// Current filter selection.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Currently selected feature id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.tracker.current()
    }

    /// Currently open ward view, if any.
    #[must_use]
    pub fn active_ward(&self) -> Option<&str> {
        self.active_ward.as_deref()
    }

    /// Current status tab.
    #[must_use]
    pub const fn status_tab(&self) -> StatusTab {
        self.status_tab
    }

    /// The full (unfiltered) working set.
    #[must_use]
    pub fn records(&self) -> &[ManholeRecord] {
        &self.records
    }

    fn recompute(&mut self) {
        self.recompute_at(Local::now().date_naive());
    }

    fn recompute_at(&mut self, today: NaiveDate) {
        self.options = index_options(&self.records, &self.selection);
        self.visible = apply(&self.records, &self.selection, today);

        // The selection must never dangle on a filtered-out feature.
        let stale = self
            .tracker
            .retain_present(self.visible.iter().map(|v| v.record.id.as_str()));
        self.map.apply_selection(&stale);

        self.map.sync_visible(&self.visible);
    }

    /// The wrapped map sync driver, for assertions in tests.
    #[must_use]
    pub const fn map(&self) -> &MapSync<S> {
        &self.map
    }
}
