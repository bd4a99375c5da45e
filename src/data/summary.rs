use std::fmt;

use super::model::{AggregateField, AggregatedRow, Record, RecordField};
use super::stats;

// ---------------------------------------------------------------------------
// Presentation helpers
// ---------------------------------------------------------------------------

/// Round to two decimals for display. `NaN` stays `NaN`.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Display form of a statistic: two decimals, or "not applicable" when undefined.
pub fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "not applicable".to_string()
    } else {
        // Adding +0.0 turns -0.0 into 0.0.
        format!("{}", round2(v) + 0.0)
    }
}

// ---------------------------------------------------------------------------
// Correlation strength
// ---------------------------------------------------------------------------

/// Three-way bucket for the cafes / tourism-index correlation.
///
/// Only positive values are graded; negative and undefined correlations
/// fall into `WeakOrNone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    StrongPositive,
    ModeratePositive,
    WeakOrNone,
}

impl CorrelationStrength {
    pub fn classify(corr: f64) -> Self {
        if corr > 0.7 {
            CorrelationStrength::StrongPositive
        } else if corr > 0.3 {
            CorrelationStrength::ModeratePositive
        } else {
            CorrelationStrength::WeakOrNone
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CorrelationStrength::StrongPositive => {
                "Strong positive correlation: more cafes are linked with a higher tourism index."
            }
            CorrelationStrength::ModeratePositive => {
                "Moderate positive correlation: cafes somewhat support the tourism index."
            }
            CorrelationStrength::WeakOrNone => {
                "Weak or no correlation: cafes don't strongly impact the tourism index here."
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Bubble chart report
// ---------------------------------------------------------------------------

/// Metrics, insights and statistics for the town-level view.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleReport {
    pub town_count: usize,
    pub mean_tourism_index: f64,
    pub total_cafes: u64,
    pub total_hotels: u64,
    /// Town with the highest tourism index and that index; `None` when
    /// every selected index is NaN.
    pub highest_index: Option<(String, f64)>,
    /// Town with the most cafes and its cafe count.
    pub most_cafes: (String, u32),
    pub cafe_index_correlation: f64,
}

impl BubbleReport {
    /// `None` when `rows` is empty.
    pub fn summarize(rows: &[Record]) -> Option<Self> {
        let mean_tourism_index = stats::mean(rows, RecordField::TourismIndex)?;
        let top_index = stats::argmax_row(rows, RecordField::TourismIndex);
        let top_cafes = stats::argmax_row(rows, RecordField::CafeCount)?;
        let cafe_index_correlation =
            stats::correlation(rows, RecordField::CafeCount, RecordField::TourismIndex)?;

        Some(BubbleReport {
            town_count: rows.len(),
            mean_tourism_index,
            total_cafes: rows.iter().map(|r| u64::from(r.cafe_count)).sum(),
            total_hotels: rows.iter().map(|r| u64::from(r.hotel_count)).sum(),
            highest_index: top_index.map(|r| (r.town.clone(), r.tourism_index)),
            most_cafes: (top_cafes.town.clone(), top_cafes.cafe_count),
            cafe_index_correlation,
        })
    }

    pub fn correlation_strength(&self) -> CorrelationStrength {
        CorrelationStrength::classify(self.cafe_index_correlation)
    }

    pub fn insights(&self) -> Vec<String> {
        vec![
            match &self.highest_index {
                Some((town, index)) => {
                    format!("Town with highest Tourism Index: {town} ({index}).")
                }
                None => "Town with highest Tourism Index: not applicable.".to_string(),
            },
            format!(
                "Town with most cafes: {} ({} cafes).",
                self.most_cafes.0, self.most_cafes.1
            ),
            format!(
                "Average Tourism Index in selected regions: {}.",
                format_stat(self.mean_tourism_index)
            ),
        ]
    }

    pub fn correlation_line(&self) -> String {
        format!(
            "Correlation between Cafes and Tourism Index: {}",
            format_stat(self.cafe_index_correlation)
        )
    }
}

// ---------------------------------------------------------------------------
// Bar chart report
// ---------------------------------------------------------------------------

/// Metrics, insights and statistics for the per-region view.
#[derive(Debug, Clone, PartialEq)]
pub struct BarReport {
    pub region_count: usize,
    pub total: u64,
    pub max: u64,
    pub min: u64,
    /// Region with the most restaurants and its total.
    pub most: (String, u64),
    /// Region with the fewest restaurants and its total.
    pub least: (String, u64),
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl BarReport {
    /// `None` when `rows` is empty.
    pub fn summarize(rows: &[AggregatedRow]) -> Option<Self> {
        let field = AggregateField::RestaurantTotal;
        let most = stats::argmax_row(rows, field)?;
        let least = stats::argmin_row(rows, field)?;

        Some(BarReport {
            region_count: rows.len(),
            total: rows.iter().map(|r| r.restaurant_total).sum(),
            max: most.restaurant_total,
            min: least.restaurant_total,
            most: (most.region.clone(), most.restaurant_total),
            least: (least.region.clone(), least.restaurant_total),
            mean: stats::mean(rows, field)?,
            median: stats::median(rows, field)?,
            std: stats::std_dev(rows, field)?,
        })
    }

    pub fn insights(&self) -> Vec<String> {
        vec![
            format!(
                "Region with most restaurants: {} ({} restaurants).",
                self.most.0, self.most.1
            ),
            format!(
                "Region with least restaurants: {} ({} restaurants).",
                self.least.0, self.least.1
            ),
            format!("Total restaurants in selected regions: {}.", self.total),
        ]
    }

    pub fn statistics(&self) -> Vec<String> {
        vec![
            format!("Mean restaurants per region: {}", format_stat(self.mean)),
            format!("Median restaurants per region: {}", format_stat(self.median)),
            format!("Standard deviation: {}", format_stat(self.std)),
        ]
    }
}

impl fmt::Display for BubbleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Towns: {}", self.town_count)?;
        writeln!(f, "Average Tourism Index: {}", format_stat(self.mean_tourism_index))?;
        writeln!(f, "Total Cafes: {}", self.total_cafes)?;
        writeln!(f, "Total Hotels: {}", self.total_hotels)?;
        for line in self.insights() {
            writeln!(f, "- {line}")?;
        }
        writeln!(f, "- {}", self.correlation_line())?;
        writeln!(f, "  {}", self.correlation_strength().message())
    }
}

impl fmt::Display for BarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regions: {}", self.region_count)?;
        writeln!(f, "Total Restaurants: {}", self.total)?;
        writeln!(f, "Maximum Restaurants in a Region: {}", self.max)?;
        writeln!(f, "Minimum Restaurants in a Region: {}", self.min)?;
        for line in self.insights().into_iter().chain(self.statistics()) {
            writeln!(f, "- {line}")?;
        }
        Ok(())
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

    fn sample() -> Vec<Record> {
        vec![
            rec("RegionA", "TownX", 5, 2, 10, 50.0),
            rec("RegionA", "TownY", 3, 1, 20, 70.0),
            rec("RegionB", "TownZ", 8, 4, 5, 30.0),
        ]
    }

    #[test]
    fn bubble_report_for_worked_example() {
        let report = BubbleReport::summarize(&sample()).unwrap();
        assert_eq!(report.town_count, 3);
        assert_eq!(report.mean_tourism_index, 50.0);
        assert_eq!(report.total_cafes, 16);
        assert_eq!(report.total_hotels, 7);
        assert_eq!(report.highest_index, Some(("TownY".to_string(), 70.0)));
        assert_eq!(report.most_cafes, ("TownZ".to_string(), 8));
        assert_eq!(
            report.insights()[0],
            "Town with highest Tourism Index: TownY (70)."
        );
    }

    #[test]
    fn bar_report_for_worked_example() {
        let rows = vec![
            AggregatedRow { region: "RegionA".into(), restaurant_total: 30 },
            AggregatedRow { region: "RegionB".into(), restaurant_total: 5 },
        ];
        let report = BarReport::summarize(&rows).unwrap();
        assert_eq!(report.total, 35);
        assert_eq!(report.max, 30);
        assert_eq!(report.min, 5);
        assert_eq!(report.most, ("RegionA".to_string(), 30));
        assert_eq!(report.least, ("RegionB".to_string(), 5));
        assert_eq!(report.mean, 17.5);
        assert_eq!(report.median, 17.5);
        assert_eq!(format_stat(report.std), "17.68");
    }

    #[test]
    fn empty_views_have_no_report() {
        assert!(BubbleReport::summarize(&[]).is_none());
        assert!(BarReport::summarize(&[]).is_none());
    }

    #[test]
    fn single_row_statistics_are_not_applicable() {
        let report = BubbleReport::summarize(&sample()[..1]).unwrap();
        assert!(report.cafe_index_correlation.is_nan());
        assert!(report.correlation_line().ends_with("not applicable"));
        assert_eq!(report.correlation_strength(), CorrelationStrength::WeakOrNone);

        let rows = [AggregatedRow { region: "Solo".into(), restaurant_total: 12 }];
        let bar = BarReport::summarize(&rows).unwrap();
        assert!(bar.std.is_nan());
        assert_eq!(bar.statistics()[2], "Standard deviation: not applicable");
    }

    #[test]
    fn correlation_buckets() {
        use CorrelationStrength::*;
        assert_eq!(CorrelationStrength::classify(0.95), StrongPositive);
        assert_eq!(CorrelationStrength::classify(0.7), ModeratePositive);
        assert_eq!(CorrelationStrength::classify(0.5), ModeratePositive);
        assert_eq!(CorrelationStrength::classify(0.3), WeakOrNone);
        assert_eq!(CorrelationStrength::classify(0.0), WeakOrNone);
        assert_eq!(CorrelationStrength::classify(f64::NAN), WeakOrNone);
    }

    #[test]
    fn strong_negative_correlation_is_graded_weak() {
        assert_eq!(
            CorrelationStrength::classify(-0.9),
            CorrelationStrength::WeakOrNone
        );
    }

    #[test]
    fn rounding_is_presentation_only() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(format_stat(50.0), "50");
        assert_eq!(format_stat(17.677_669), "17.68");
        assert_eq!(format_stat(f64::NAN), "not applicable");
    }

    #[test]
    fn tiny_negative_values_display_as_zero() {
        assert_eq!(format_stat(-0.001), "0");
        assert_eq!(format_stat(-0.0), "0");
        assert_eq!(format_stat(-0.004_9), "0");
    }

    #[test]
    fn all_nan_index_still_produces_a_report() {
        let rows = vec![
            rec("RegionA", "TownX", 5, 2, 10, f64::NAN),
            rec("RegionA", "TownY", 3, 1, 20, f64::NAN),
        ];
        let report = BubbleReport::summarize(&rows).unwrap();
        assert_eq!(report.town_count, 2);
        assert_eq!(report.highest_index, None);
        assert_eq!(report.most_cafes, ("TownX".to_string(), 5));
        assert_eq!(
            report.insights()[0],
            "Town with highest Tourism Index: not applicable."
        );
    }

    #[test]
    fn text_report_lists_every_section() {
        let text = BubbleReport::summarize(&sample()).unwrap().to_string();
        assert!(text.contains("Average Tourism Index: 50"));
        assert!(text.contains("Town with most cafes: TownZ (8 cafes)."));
        assert!(text.contains("Correlation between Cafes and Tourism Index:"));
    }
}
