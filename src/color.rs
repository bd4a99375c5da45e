use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// Gives every region one colour shared by both charts and the filter list.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
}

impl RegionColors {
    /// Hues follow the order of `regions`.
    pub fn new(regions: &[String]) -> Self {
        let mapping = regions
            .iter()
            .cloned()
            .zip(generate_palette(regions.len()))
            .collect();
        RegionColors { mapping }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn regions_get_distinct_colors() {
        let regions = vec!["North".to_string(), "South".to_string(), "East".to_string()];
        let colors = RegionColors::new(&regions);
        let north = colors.color_for("North");
        assert_ne!(north, colors.color_for("South"));
        assert_ne!(north, colors.color_for("East"));
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}
