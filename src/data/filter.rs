use std::collections::BTreeSet;

use thiserror::Error;

use super::model::{AggregatedRow, Dataset, Record};

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("range lower bound {lo} is above upper bound {hi}")]
    Inverted { lo: f64, hi: f64 },
}

// ---------------------------------------------------------------------------
// Predicate parts
// ---------------------------------------------------------------------------

/// Inclusive numeric range `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    lo: f64,
    hi: f64,
}

impl ValueRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self, RangeError> {
        if lo > hi {
            return Err(RangeError::Inverted { lo, hi });
        }
        Ok(ValueRange { lo, hi })
    }

    /// Slider-style integer bounds.
    pub fn from_bounds((lo, hi): (i64, i64)) -> Result<Self, RangeError> {
        ValueRange::new(lo as f64, hi as f64)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}

/// Which regions pass the categorical clause.
///
/// `All` and an empty `Only` set both mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionSelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl RegionSelection {
    /// Single-select: exactly one region.
    pub fn single(region: impl Into<String>) -> Self {
        RegionSelection::Only(BTreeSet::from([region.into()]))
    }

    pub fn many<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RegionSelection::Only(regions.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionSelection::All => true,
            RegionSelection::Only(set) => set.is_empty() || set.contains(region),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicates per tab
// ---------------------------------------------------------------------------

/// Town-level predicate: region clause AND optional tourism-index range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPredicate {
    pub regions: RegionSelection,
    pub tourism_index: Option<ValueRange>,
}

impl RecordPredicate {
    pub fn matches(&self, rec: &Record) -> bool {
        self.regions.matches(&rec.region)
            && self
                .tourism_index
                .map_or(true, |r| r.contains(rec.tourism_index))
    }
}

/// Return indices of records that pass every active clause, in input order.
pub fn filtered_indices(dataset: &Dataset, predicate: &RecordPredicate) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| predicate.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Copy out the records that pass `predicate`.
pub fn select(dataset: &Dataset, predicate: &RecordPredicate) -> Vec<Record> {
    filtered_indices(dataset, predicate)
        .into_iter()
        .map(|i| dataset.records()[i].clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation (bar chart path)
// ---------------------------------------------------------------------------

/// Sum restaurants per region. Groups keep first-appearance order.
pub fn aggregate(subset: &[Record]) -> Vec<AggregatedRow> {
    let mut rows: Vec<AggregatedRow> = Vec::new();
    for rec in subset {
        match rows.iter_mut().find(|row| row.region == rec.region) {
            Some(row) => row.restaurant_total += u64::from(rec.restaurant_count),
            None => rows.push(AggregatedRow {
                region: rec.region.clone(),
                restaurant_total: u64::from(rec.restaurant_count),
            }),
        }
    }
    rows
}

/// Keep aggregated rows whose total lies in `range` (None = keep all).
pub fn select_totals(rows: &[AggregatedRow], range: Option<ValueRange>) -> Vec<AggregatedRow> {
    rows.iter()
        .filter(|row| range.map_or(true, |r| r.contains(row.restaurant_total as f64)))
        .cloned()
        .collect()
}

/// Restaurant-total slider bounds over the unfiltered dataset.
pub fn restaurant_total_bounds(dataset: &Dataset) -> Option<(i64, i64)> {
    let all = aggregate(dataset.records());
    let min = all.iter().map(|r| r.restaurant_total).min()?;
    let max = all.iter().map(|r| r.restaurant_total).max()?;
    Some((min as i64, max as i64))
}
