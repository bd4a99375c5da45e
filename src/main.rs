mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::DashboardApp;
use clap::Parser;
use eframe::egui;
use state::{AppState, Tab};

/// Interactive dashboard for per-town tourism statistics.
#[derive(Debug, Parser)]
#[command(name = "tourism-dashboard", version)]
struct Args {
    /// CSV file to load at startup.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the report for the default filters and exit.
    #[arg(long, requires = "path")]
    report: bool,

    /// Write the default bar table as CSV and exit.
    #[arg(long, value_name = "FILE", requires = "path")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = match &args.path {
        Some(path) => AppState::with_dataset(data::loader::load_file(path)?),
        None => AppState::default(),
    };

    if args.report || args.export.is_some() {
        if args.report {
            print!("{}", text_report(&state));
        }
        if let Some(out) = &args.export {
            state.export_bar_table(out)?;
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interactive Tourism Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}

/// Plain-text rendition of both tabs for `--report`.
fn text_report(state: &AppState) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", Tab::Bubble.title()));
    match &state.bubble_view.report {
        Some(r) => out.push_str(&r.to_string()),
        None => out.push_str("No data matches the current filters.\n"),
    }

    out.push_str(&format!("\n== {} ==\n", Tab::Bar.title()));
    match &state.bar_view.report {
        Some(r) => out.push_str(&r.to_string()),
        None => out.push_str("No regions match the selected filters.\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Ref area,Town,Total number of cafes,Total number of hotels,Total number of restaurants,Tourism Index
RegionA,TownX,5,2,10,50
RegionA,TownY,3,1,20,70
RegionB,TownZ,8,4,5,30
";

    #[test]
    fn args_require_path_for_headless_modes() {
        assert!(Args::try_parse_from(["tourism-dashboard", "--report"]).is_err());
        let args = Args::try_parse_from(["tourism-dashboard", "data.csv", "--export", "out.csv"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("data.csv")));
        assert_eq!(args.export, Some(PathBuf::from("out.csv")));
        assert!(!args.report);
    }

    #[test]
    fn report_covers_both_tabs() {
        let ds = data::loader::load_csv(SAMPLE.as_bytes()).unwrap();
        let text = text_report(&AppState::with_dataset(ds));
        assert!(text.contains("== Bubble Chart =="));
        assert!(text.contains("Town with highest Tourism Index: TownY (70)."));
        assert!(text.contains("== Bar Chart =="));
        assert!(text.contains("Region with most restaurants: RegionA (30 restaurants)."));
        assert!(text.contains("Standard deviation: 17.68"));
    }

    #[test]
    fn report_without_dataset_shows_no_data() {
        let text = text_report(&AppState::default());
        assert!(text.contains("No data matches the current filters."));
        assert!(text.contains("No regions match the selected filters."));
    }
}
