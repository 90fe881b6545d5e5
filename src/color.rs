use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Hue of the first series; later series are spaced evenly around the wheel.
const BASE_HUE: f32 = 210.0;

/// `n` visually distinct colours with evenly spaced hues.
pub fn series_colors(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + i as f32 / n as f32 * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

/// Colours of the training and validation curves.
#[derive(Debug, Clone, Copy)]
pub struct LossPalette {
    pub train: Color32,
    pub val: Color32,
}

impl Default for LossPalette {
    fn default() -> Self {
        let c = series_colors(2);
        LossPalette {
            train: c[0],
            val: c[1],
        }
    }
}
