use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::institution::KNOWN_INSTITUTIONS;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Mid lightness keeps them legible on both light and dark panels.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 20.0 + (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Institution → Color32
// ---------------------------------------------------------------------------

/// Tint for each institution's acronym in the table.
#[derive(Debug, Clone)]
pub struct InstitutionColors {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl Default for InstitutionColors {
    fn default() -> Self {
        let mapping = KNOWN_INSTITUTIONS
            .iter()
            .zip(generate_palette(KNOWN_INSTITUTIONS.len()))
            .map(|((name, _), color)| (*name, color))
            .collect();
        InstitutionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl InstitutionColors {
    pub fn color_for(&self, institution: &str) -> Color32 {
        self.mapping
            .get(institution)
            .copied()
            .unwrap_or(self.default_color)
    }
}
