use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names of the source CSV
// ---------------------------------------------------------------------------

pub const COL_REGION: &str = "Ref area";
pub const COL_TOWN: &str = "Town";
pub const COL_CAFES: &str = "Total number of cafes";
pub const COL_HOTELS: &str = "Total number of hotels";
pub const COL_RESTAURANTS: &str = "Total number of restaurants";
pub const COL_TOURISM_INDEX: &str = "Tourism Index";

/// Header keys that must be present in every input file.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_REGION,
    COL_TOWN,
    COL_CAFES,
    COL_HOTELS,
    COL_RESTAURANTS,
    COL_TOURISM_INDEX,
];

// ---------------------------------------------------------------------------
// Record – one town
// ---------------------------------------------------------------------------

/// A single town (one row of the source CSV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Ref area")]
    pub region: String,
    #[serde(rename = "Town")]
    pub town: String,
    #[serde(rename = "Total number of cafes")]
    pub cafe_count: u32,
    #[serde(rename = "Total number of hotels")]
    pub hotel_count: u32,
    #[serde(rename = "Total number of restaurants")]
    pub restaurant_count: u32,
    #[serde(rename = "Tourism Index")]
    pub tourism_index: f64,
}

/// Numeric columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    CafeCount,
    HotelCount,
    RestaurantCount,
    TourismIndex,
}

// ---------------------------------------------------------------------------
// AggregatedRow – bar chart row
// ---------------------------------------------------------------------------

/// Restaurants summed over every selected town of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRow {
    #[serde(rename = "Ref area")]
    pub region: String,
    #[serde(rename = "Total number of restaurants")]
    pub restaurant_total: u64,
}

/// Numeric columns of an [`AggregatedRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateField {
    RestaurantTotal,
}

// ---------------------------------------------------------------------------
// NumericRow – column access shared by both row kinds
// ---------------------------------------------------------------------------

/// A row whose numeric columns can be read by a typed field selector.
pub trait NumericRow {
    type Field: Copy;

    fn value(&self, field: Self::Field) -> f64;
}

impl NumericRow for Record {
    type Field = RecordField;

    fn value(&self, field: RecordField) -> f64 {
        match field {
            RecordField::CafeCount => f64::from(self.cafe_count),
            RecordField::HotelCount => f64::from(self.hotel_count),
            RecordField::RestaurantCount => f64::from(self.restaurant_count),
            RecordField::TourismIndex => self.tourism_index,
        }
    }
}

impl NumericRow for AggregatedRow {
    type Field = AggregateField;

    fn value(&self, field: AggregateField) -> f64 {
        match field {
            AggregateField::RestaurantTotal => self.restaurant_total as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    /// Distinct regions in order of first appearance.
    regions: Vec<String>,
}

impl Dataset {
    /// Build the region index from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        for rec in &records {
            if !regions.contains(&rec.region) {
                regions.push(rec.region.clone());
            }
        }
        Dataset { records, regions }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of towns.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tourism-index slider bounds: observed min/max truncated toward zero.
    pub fn tourism_index_bounds(&self) -> Option<(i64, i64)> {
        let min = self
            .records
            .iter()
            .map(|r| r.tourism_index)
            .filter(|v| !v.is_nan())
            .reduce(f64::min)?;
        let max = self
            .records
            .iter()
            .map(|r| r.tourism_index)
            .filter(|v| !v.is_nan())
            .reduce(f64::max)?;
        Some((min.trunc() as i64, max.trunc() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(region: &str, town: &str, index: f64) -> Record {
        Record {
            region: region.into(),
            town: town.into(),
            cafe_count: 1,
            hotel_count: 1,
            restaurant_count: 1,
            tourism_index: index,
        }
    }

    #[test]
    fn regions_keep_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            rec("North", "A", 1.0),
            rec("South", "B", 2.0),
            rec("North", "C", 3.0),
            rec("East", "D", 4.0),
        ]);
        assert_eq!(ds.regions(), ["North", "South", "East"]);
    }

    #[test]
    fn index_bounds_truncate() {
        let ds = Dataset::from_records(vec![rec("R", "A", 12.9), rec("R", "B", 87.4)]);
        assert_eq!(ds.tourism_index_bounds(), Some((12, 87)));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.tourism_index_bounds(), None);
    }

    #[test]
    fn numeric_row_reads_typed_fields() {
        let r = Record {
            region: "R".into(),
            town: "T".into(),
            cafe_count: 4,
            hotel_count: 2,
            restaurant_count: 9,
            tourism_index: 61.5,
        };
        assert_eq!(r.value(RecordField::CafeCount), 4.0);
        assert_eq!(r.value(RecordField::HotelCount), 2.0);
        assert_eq!(r.value(RecordField::RestaurantCount), 9.0);
        assert_eq!(r.value(RecordField::TourismIndex), 61.5);

        let a = AggregatedRow {
            region: "R".into(),
            restaurant_total: 30,
        };
        assert_eq!(a.value(AggregateField::RestaurantTotal), 30.0);
    }
}
