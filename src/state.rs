use std::path::Path;

use anyhow::Result;

use crate::color::RegionColors;
use crate::data::export;
use crate::data::filter::{restaurant_total_bounds, ValueRange};
use crate::data::model::Dataset;
use crate::data::pipeline::{BarFilter, BarView, BubbleFilter, BubbleView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Bubble,
    Bar,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Bubble => "Bubble Chart",
            Tab::Bar => "Bar Chart",
        }
    }
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    pub colors: RegionColors,

    pub tab: Tab,

    /// Slider limits, fixed per dataset.
    pub index_bounds: Option<(i64, i64)>,
    pub restaurant_bounds: Option<(i64, i64)>,

    /// Current slider positions.
    pub index_range: (i64, i64),
    pub restaurant_range: (i64, i64),

    pub bubble_filter: BubbleFilter,
    pub bubble_view: BubbleView,

    pub bar_filter: BarFilter,
    pub bar_view: BarView,

    pub show_bar_chart: bool,
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_dataset(dataset: Dataset) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, reset filters and recompute both views.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.colors = RegionColors::new(dataset.regions());

        self.index_bounds = dataset.tourism_index_bounds();
        self.restaurant_bounds = restaurant_total_bounds(&dataset);
        self.index_range = self.index_bounds.unwrap_or_default();
        self.restaurant_range = self.restaurant_bounds.unwrap_or_default();

        self.bubble_filter = BubbleFilter::default_for(&dataset);
        self.bar_filter = BarFilter::default_for(&dataset);
        self.show_bar_chart = true;

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute both tab views from the current filters.
    pub fn refilter(&mut self) {
        self.refilter_bubble();
        self.refilter_bar();
    }

    pub fn refilter_bubble(&mut self) {
        if let Some(ds) = &self.dataset {
            self.bubble_view = BubbleView::compute(ds, &self.bubble_filter);
        }
    }

    pub fn refilter_bar(&mut self) {
        if let Some(ds) = &self.dataset {
            self.bar_view = BarView::compute(ds, &self.bar_filter);
        }
    }

    /// Single-select region for the bubble chart (`None` = All).
    pub fn set_bubble_region(&mut self, region: Option<String>) {
        if self.bubble_filter.region != region {
            self.bubble_filter.region = region;
            self.refilter_bubble();
        }
    }

    /// Apply the tourism-index slider positions.
    pub fn set_index_range(&mut self, lo: i64, hi: i64) {
        self.index_range = (lo, hi.max(lo));
        self.bubble_filter.tourism_index = ValueRange::from_bounds(self.index_range).ok();
        self.refilter_bubble();
    }

    /// Toggle a single region in the bar chart multi-select.
    pub fn toggle_bar_region(&mut self, region: &str) {
        let selected = &mut self.bar_filter.regions;
        if !selected.remove(region) {
            selected.insert(region.to_string());
        }
        self.refilter_bar();
    }

    /// Select every region.
    pub fn select_all_regions(&mut self) {
        if let Some(ds) = &self.dataset {
            self.bar_filter.regions = ds.regions().iter().cloned().collect();
            self.refilter_bar();
        }
    }

    /// Clear the multi-select.
    pub fn select_no_regions(&mut self) {
        self.bar_filter.regions.clear();
        self.refilter_bar();
    }

    /// Apply the restaurant-total slider positions.
    pub fn set_restaurant_range(&mut self, lo: i64, hi: i64) {
        self.restaurant_range = (lo, hi.max(lo));
        self.bar_filter.restaurant_total = ValueRange::from_bounds(self.restaurant_range).ok();
        self.refilter_bar();
    }

    /// Write the current bar table to `path`.
    pub fn export_bar_table(&self, path: &Path) -> Result<()> {
        export::save_csv(&self.bar_view.rows, path)
    }
}
