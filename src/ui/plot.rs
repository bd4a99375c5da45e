use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoint, Points};

use crate::data::model::Record;
use crate::state::AppState;

const PLOT_HEIGHT: f32 = 380.0;
/// Radius of the bubble for the town with the most hotels.
const MAX_BUBBLE_RADIUS: f32 = 30.0;
const MIN_BUBBLE_RADIUS: f32 = 2.0;

// ---------------------------------------------------------------------------
// Bubble chart: cafes vs tourism index, sized by hotels
// ---------------------------------------------------------------------------

/// Bubble area scales with the hotel count.
fn bubble_radius(hotels: u32, max_hotels: u32) -> f32 {
    if max_hotels == 0 {
        return MIN_BUBBLE_RADIUS;
    }
    let r = MAX_BUBBLE_RADIUS * (hotels as f32 / max_hotels as f32).sqrt();
    r.max(MIN_BUBBLE_RADIUS)
}

fn hovered_town<'a>(rows: &'a [Record], region: &str, at: &PlotPoint) -> Option<&'a Record> {
    rows.iter().find(|r| {
        r.region == region && f64::from(r.cafe_count) == at.x && r.tourism_index == at.y
    })
}

pub fn bubble_plot(ui: &mut Ui, state: &AppState) {
    let rows = &state.bubble_view.rows;
    let max_hotels = rows.iter().map(|r| r.hotel_count).max().unwrap_or(0);
    let hover_rows = rows.clone();

    Plot::new("bubble_plot")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .x_axis_label("Total number of cafes")
        .y_axis_label("Tourism Index")
        .label_formatter(move |name, value| match hovered_town(&hover_rows, name, value) {
            Some(rec) => format!(
                "{}\n{}\ncafes: {}\nhotels: {}\nindex: {}",
                rec.town, rec.region, rec.cafe_count, rec.hotel_count, rec.tourism_index
            ),
            None => format!("cafes: {:.0}\nindex: {:.2}", value.x, value.y),
        })
        .show(ui, |plot_ui| {
            for rec in rows {
                let point = Points::new(vec![[f64::from(rec.cafe_count), rec.tourism_index]])
                    .name(&rec.region)
                    .color(state.colors.color_for(&rec.region))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(bubble_radius(rec.hotel_count, max_hotels));
                plot_ui.points(point);
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart: restaurants per region
// ---------------------------------------------------------------------------

pub fn bar_plot(ui: &mut Ui, state: &AppState) {
    let rows = &state.bar_view.rows;
    let labels: Vec<String> = rows.iter().map(|r| r.region.clone()).collect();

    Plot::new("bar_plot")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .x_axis_label("Ref area")
        .y_axis_label("Total number of restaurants")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (i, row) in rows.iter().enumerate() {
                let color = state.colors.color_for(&row.region);
                let bar = Bar::new(i as f64, row.restaurant_total as f64)
                    .name(format!("{}: {}", row.region, row.restaurant_total))
                    .fill(color)
                    .width(0.6);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(&row.region).color(color));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_area_tracks_hotels() {
        assert_eq!(bubble_radius(4, 4), MAX_BUBBLE_RADIUS);
        assert_eq!(bubble_radius(1, 4), MAX_BUBBLE_RADIUS / 2.0);
        assert_eq!(bubble_radius(0, 4), MIN_BUBBLE_RADIUS);
        assert_eq!(bubble_radius(0, 0), MIN_BUBBLE_RADIUS);
    }

    #[test]
    fn hover_finds_town_at_point() {
        let rows = vec![Record {
            region: "North".into(),
            town: "Alpha".into(),
            cafe_count: 3,
            hotel_count: 1,
            restaurant_count: 2,
            tourism_index: 41.5,
        }];
        let hit = hovered_town(&rows, "North", &PlotPoint::new(3.0, 41.5));
        assert_eq!(hit.map(|r| r.town.as_str()), Some("Alpha"));
        assert!(hovered_town(&rows, "South", &PlotPoint::new(3.0, 41.5)).is_none());
    }
}
