use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::export::DEFAULT_EXPORT_NAME;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel for the active tab.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let regions = match &state.dataset {
        Some(ds) => ds.regions().to_vec(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match state.tab {
                Tab::Bubble => bubble_filters(ui, state, &regions),
                Tab::Bar => bar_filters(ui, state, &regions),
            }
            ui.separator();
            ui.checkbox(&mut state.show_table, "Show data table");
        });
}

fn bubble_filters(ui: &mut Ui, state: &mut AppState, regions: &[String]) {
    // ---- Region single-select ----
    ui.strong("Select Governorate (Region):");
    let mut choice = state.bubble_filter.region.clone();
    egui::ComboBox::from_id_salt("bubble_region")
        .selected_text(choice.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut choice, None, "All");
            for region in regions {
                let text = RichText::new(region).color(state.colors.color_for(region));
                ui.selectable_value(&mut choice, Some(region.clone()), text);
            }
        });
    state.set_bubble_region(choice);
    ui.add_space(8.0);

    // ---- Tourism index range ----
    ui.strong("Select Tourism Index Range:");
    if let Some(bounds) = state.index_bounds {
        if let Some((lo, hi)) = range_sliders(ui, bounds, state.index_range) {
            state.set_index_range(lo, hi);
        }
    }
}

fn bar_filters(ui: &mut Ui, state: &mut AppState, regions: &[String]) {
    // ---- Region multi-select ----
    let n_selected = state.bar_filter.regions.len();
    let header_text = format!("Select Regions  ({n_selected}/{})", regions.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("bar_regions")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_regions();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_regions();
                }
            });

            for region in regions {
                let mut checked = state.bar_filter.regions.contains(region);
                let text = RichText::new(region).color(state.colors.color_for(region));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_bar_region(region);
                }
            }
        });
    ui.add_space(8.0);

    // ---- Restaurant total range ----
    ui.strong("Filter Regions by Number of Restaurants:");
    if let Some(bounds) = state.restaurant_bounds {
        if let Some((lo, hi)) = range_sliders(ui, bounds, state.restaurant_range) {
            state.set_restaurant_range(lo, hi);
        }
    }
    ui.add_space(8.0);

    ui.checkbox(&mut state.show_bar_chart, "Show Bar Chart");
    if ui.button("Download Filtered Data").clicked() {
        save_file_dialog(state);
    }
}

/// Two sliders over `min..=max`. Returns the new positions when either moved.
fn range_sliders(ui: &mut Ui, (min, max): (i64, i64), (lo, hi): (i64, i64)) -> Option<(i64, i64)> {
    let (mut lo, mut hi) = (lo, hi);
    let mut changed = ui.add(Slider::new(&mut lo, min..=max).text("from")).changed();
    changed |= ui.add(Slider::new(&mut hi, min..=max).text("to")).changed();
    changed.then_some((lo, hi))
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, the tab switcher and the status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for tab in [Tab::Bubble, Tab::Bar] {
            if ui.selectable_label(state.tab == tab, tab.title()).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let shown = match state.tab {
                Tab::Bubble => format!("{} towns shown", state.bubble_view.rows.len()),
                Tab::Bar => format!("{} regions shown", state.bar_view.rows.len()),
            };
            ui.label(format!(
                "{} towns in {} regions, {shown}",
                ds.len(),
                ds.regions().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tourism data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Download filtered data")
        .add_filter("CSV", &["csv"])
        .set_file_name(DEFAULT_EXPORT_NAME)
        .save_file();

    if let Some(path) = file {
        match state.export_bar_table(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
