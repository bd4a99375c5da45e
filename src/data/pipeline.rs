use std::collections::BTreeSet;

use super::filter::{
    aggregate, restaurant_total_bounds, select, select_totals, RecordPredicate, RegionSelection,
    ValueRange,
};
use super::model::{AggregatedRow, Dataset, Record};
use super::summary::{BarReport, BubbleReport};

// ---------------------------------------------------------------------------
// Bubble chart tab: select → summarize
// ---------------------------------------------------------------------------

/// Widget values of the bubble chart tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleFilter {
    /// Single-select region; `None` is "All".
    pub region: Option<String>,
    pub tourism_index: Option<ValueRange>,
}

impl BubbleFilter {
    /// All regions, full truncated tourism-index range.
    pub fn default_for(dataset: &Dataset) -> Self {
        BubbleFilter {
            region: None,
            tourism_index: dataset
                .tourism_index_bounds()
                .and_then(|b| ValueRange::from_bounds(b).ok()),
        }
    }

    pub fn predicate(&self) -> RecordPredicate {
        RecordPredicate {
            regions: match &self.region {
                Some(r) => RegionSelection::single(r.clone()),
                None => RegionSelection::All,
            },
            tourism_index: self.tourism_index,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleView {
    pub rows: Vec<Record>,
    /// `None` when no town passes the filters.
    pub report: Option<BubbleReport>,
}

impl BubbleView {
    pub fn compute(dataset: &Dataset, filter: &BubbleFilter) -> Self {
        let rows = select(dataset, &filter.predicate());
        let report = BubbleReport::summarize(&rows);
        log::debug!("bubble view: {} of {} towns", rows.len(), dataset.len());
        if report.is_none() {
            log::warn!("No towns match the bubble chart filters");
        }
        BubbleView { rows, report }
    }
}

// ---------------------------------------------------------------------------
// Bar chart tab: select → aggregate → select totals → summarize
// ---------------------------------------------------------------------------

/// Widget values of the bar chart tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarFilter {
    /// Multi-select regions; an empty set applies no constraint.
    pub regions: BTreeSet<String>,
    pub restaurant_total: Option<ValueRange>,
}

impl BarFilter {
    /// Every region selected, full restaurant-total range.
    pub fn default_for(dataset: &Dataset) -> Self {
        BarFilter {
            regions: dataset.regions().iter().cloned().collect(),
            restaurant_total: restaurant_total_bounds(dataset)
                .and_then(|b| ValueRange::from_bounds(b).ok()),
        }
    }

    pub fn predicate(&self) -> RecordPredicate {
        RecordPredicate {
            regions: RegionSelection::many(self.regions.iter().cloned()),
            tourism_index: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarView {
    pub rows: Vec<AggregatedRow>,
    /// `None` when no region passes the filters.
    pub report: Option<BarReport>,
}

impl BarView {
    pub fn compute(dataset: &Dataset, filter: &BarFilter) -> Self {
        let selected = select(dataset, &filter.predicate());
        let rows = select_totals(&aggregate(&selected), filter.restaurant_total);
        let report = BarReport::summarize(&rows);
        log::debug!("bar view: {} region(s) from {} town(s)", rows.len(), selected.len());
        if report.is_none() {
            log::warn!("No regions match the bar chart filters");
        }
        BarView { rows, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(region: &str, town: &str, cafes: u32, hotels: u32, restaurants: u32, index: f64) -> Record {
        Record {
            region: region.into(),
            town: town.into(),
            cafe_count: cafes,
            hotel_count: hotels,
            restaurant_count: restaurants,
            tourism_index: index,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            rec("RegionA", "TownX", 5, 2, 10, 50.0),
            rec("RegionA", "TownY", 3, 1, 20, 70.0),
            rec("RegionB", "TownZ", 8, 4, 5, 30.0),
        ])
    }

    #[test]
    fn default_bubble_view_covers_everything() {
        let ds = sample();
        let filter = BubbleFilter::default_for(&ds);
        assert_eq!(filter.tourism_index, Some(ValueRange::new(30.0, 70.0).unwrap()));

        let view = BubbleView::compute(&ds, &filter);
        assert_eq!(view.rows.len(), 3);
        let report = view.report.unwrap();
        assert_eq!(report.mean_tourism_index, 50.0);
        assert_eq!(report.highest_index.unwrap().0, "TownY");
    }

    #[test]
    fn bubble_region_filter_narrows_rows() {
        let ds = sample();
        let filter = BubbleFilter {
            region: Some("RegionB".into()),
            ..BubbleFilter::default_for(&ds)
        };
        let view = BubbleView::compute(&ds, &filter);
        assert_eq!(view.rows.len(), 1);
        let report = view.report.unwrap();
        assert_eq!(report.highest_index.unwrap().0, "TownZ");
        assert!(report.cafe_index_correlation.is_nan());
    }

    #[test]
    fn bubble_view_without_matches_has_no_report() {
        let ds = sample();
        let filter = BubbleFilter {
            region: Some("RegionB".into()),
            tourism_index: Some(ValueRange::new(60.0, 70.0).unwrap()),
        };
        let view = BubbleView::compute(&ds, &filter);
        assert!(view.rows.is_empty());
        assert!(view.report.is_none());
    }

    #[test]
    fn default_bar_view_aggregates_all_regions() {
        let ds = sample();
        let filter = BarFilter::default_for(&ds);
        assert_eq!(filter.regions.len(), 2);
        assert_eq!(filter.restaurant_total, Some(ValueRange::new(5.0, 30.0).unwrap()));

        let view = BarView::compute(&ds, &filter);
        assert_eq!(
            view.rows,
            [
                AggregatedRow { region: "RegionA".into(), restaurant_total: 30 },
                AggregatedRow { region: "RegionB".into(), restaurant_total: 5 },
            ]
        );
        assert_eq!(view.report.unwrap().most.0, "RegionA");
    }

    #[test]
    fn bar_total_range_applies_after_aggregation() {
        let ds = sample();
        let filter = BarFilter {
            restaurant_total: Some(ValueRange::new(0.0, 10.0).unwrap()),
            ..BarFilter::default_for(&ds)
        };
        let view = BarView::compute(&ds, &filter);
        // RegionA towns have 10 and 20, but the region total of 30 is out of range.
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].region, "RegionB");
    }

    #[test]
    fn bar_view_without_matches_has_no_report() {
        let ds = sample();
        let filter = BarFilter {
            regions: BTreeSet::from(["RegionB".to_string()]),
            restaurant_total: Some(ValueRange::new(6.0, 30.0).unwrap()),
        };
        let view = BarView::compute(&ds, &filter);
        assert!(view.rows.is_empty());
        assert!(view.report.is_none());
    }

    #[test]
    fn empty_dataset_defaults() {
        let ds = Dataset::default();
        let bubble = BubbleView::compute(&ds, &BubbleFilter::default_for(&ds));
        let bar = BarView::compute(&ds, &BarFilter::default_for(&ds));
        assert!(bubble.report.is_none());
        assert!(bar.report.is_none());
    }
}
