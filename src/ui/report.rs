use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{
    AggregatedRow, Record, COL_CAFES, COL_HOTELS, COL_REGION, COL_RESTAURANTS, COL_TOURISM_INDEX,
    COL_TOWN,
};
use crate::data::summary::{format_stat, BarReport, BubbleReport, CorrelationStrength};
use crate::state::AppState;
use crate::ui::plot;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Central panel per tab
// ---------------------------------------------------------------------------

pub fn bubble_tab(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        no_dataset(ui);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Bubble Chart: Cafes vs Tourism Index");
            plot::bubble_plot(ui, state);

            let report = state.bubble_view.report.as_ref();

            ui.heading("Summary Metrics (Filtered Data)");
            match report {
                Some(r) => bubble_metrics(ui, r),
                None => no_data(ui, "No data matches the current filters."),
            }

            ui.heading("Key Insights (Bubble Chart)");
            match report {
                Some(r) => bullets(ui, r.insights()),
                None => no_data(ui, "No data available for selected filters."),
            }

            ui.heading("Statistical Analysis (Bubble Chart)");
            if let Some(r) = report {
                bullets(ui, vec![r.correlation_line()]);
                let strength = r.correlation_strength();
                ui.colored_label(strength_color(strength), strength.message());
            }

            if state.show_table {
                ui.separator();
                record_table(ui, &state.bubble_view.rows);
            }
        });
}

pub fn bar_tab(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        no_dataset(ui);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Bar Chart: Total Restaurants per Region");
            if state.show_bar_chart {
                plot::bar_plot(ui, state);
            }

            let report = state.bar_view.report.as_ref();

            ui.heading("Summary Metrics (Filtered Data)");
            match report {
                Some(r) => bar_metrics(ui, r),
                None => no_data(ui, "No regions match the selected filters."),
            }

            ui.heading("Key Insights (Bar Chart)");
            match report {
                Some(r) => bullets(ui, r.insights()),
                None => no_data(ui, "No regions match the selected filters."),
            }

            ui.heading("Statistical Analysis (Bar Chart)");
            if let Some(r) = report {
                bullets(ui, r.statistics());
            }

            if state.show_table {
                ui.separator();
                aggregate_table(ui, &state.bar_view.rows);
            }
        });
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn no_dataset(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a file to view the dashboard  (File → Open…)");
    });
}

fn no_data(ui: &mut Ui, msg: &str) {
    ui.colored_label(Color32::from_rgb(230, 160, 40), msg);
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(22.0).strong());
    });
    ui.add_space(24.0);
}

fn bullets(ui: &mut Ui, lines: Vec<String>) {
    for line in lines {
        ui.label(format!("• {line}"));
    }
    ui.add_space(8.0);
}

fn strength_color(strength: CorrelationStrength) -> Color32 {
    match strength {
        CorrelationStrength::StrongPositive => Color32::from_rgb(60, 170, 80),
        CorrelationStrength::ModeratePositive => Color32::from_rgb(70, 130, 220),
        CorrelationStrength::WeakOrNone => Color32::from_rgb(230, 160, 40),
    }
}

fn bubble_metrics(ui: &mut Ui, r: &BubbleReport) {
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Average Tourism Index", format_stat(r.mean_tourism_index));
        metric(ui, "Total Cafes", r.total_cafes.to_string());
        metric(ui, "Total Hotels", r.total_hotels.to_string());
    });
}

fn bar_metrics(ui: &mut Ui, r: &BarReport) {
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Total Restaurants", r.total.to_string());
        metric(ui, "Maximum Restaurants in a Region", r.max.to_string());
        metric(ui, "Minimum Restaurants in a Region", r.min.to_string());
    });
}

// ---------------------------------------------------------------------------
// Data tables
// ---------------------------------------------------------------------------

fn record_table(ui: &mut Ui, rows: &[Record]) {
    let titles = [
        COL_REGION,
        COL_TOWN,
        COL_CAFES,
        COL_HOTELS,
        COL_RESTAURANTS,
        COL_TOURISM_INDEX,
    ];
    let mut builder = TableBuilder::new(ui).striped(true).vscroll(false);
    for _ in titles {
        builder = builder.column(Column::auto().at_least(60.0));
    }
    builder
        .header(20.0, |mut header| {
            for title in titles {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rec in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    let cells = [
                        rec.region.clone(),
                        rec.town.clone(),
                        rec.cafe_count.to_string(),
                        rec.hotel_count.to_string(),
                        rec.restaurant_count.to_string(),
                        rec.tourism_index.to_string(),
                    ];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

fn aggregate_table(ui: &mut Ui, rows: &[AggregatedRow]) {
    let titles = [COL_REGION, COL_RESTAURANTS];
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in titles {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for agg in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(agg.region.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(agg.restaurant_total.to_string());
                    });
                });
            }
        });
}
