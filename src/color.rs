use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Dashboard palettes
// ---------------------------------------------------------------------------

/// Sky-blue series cycled across dashboard bars.
pub const BAR_PALETTE: [Color32; 4] = [
    Color32::from_rgb(135, 206, 235), // sky blue
    Color32::from_rgb(173, 216, 230), // light blue
    Color32::from_rgb(0, 191, 255),   // deep sky blue
    Color32::from_rgb(30, 144, 255),  // dodger blue
];

/// Series colours for the two sides of a comparison chart.
pub const COMPARE_A: Color32 = Color32::from_rgb(135, 206, 235);
pub const COMPARE_B: Color32 = Color32::from_rgb(30, 144, 255);

/// Bar colour for the `i`-th entry of a chart.
pub fn bar_color(i: usize) -> Color32 {
    BAR_PALETTE[i % BAR_PALETTE.len()]
}

/// Generates `n` visually distinct pastel colours using evenly spaced hues.
/// Used for pie wedges.
pub fn pastel_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.72);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pastel_palette_sizes() {
        assert!(pastel_palette(0).is_empty());
        assert_eq!(pastel_palette(3).len(), 3);
        assert_eq!(pastel_palette(12).len(), 12);
    }

    #[test]
    fn test_pastel_palette_colours_are_distinct() {
        let colours = pastel_palette(6);
        for (i, a) in colours.iter().enumerate() {
            for b in colours.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_bar_color_cycles() {
        assert_eq!(bar_color(0), bar_color(BAR_PALETTE.len()));
    }
}
