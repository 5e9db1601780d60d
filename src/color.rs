use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour of the single-series charts (points, pps, point cap).
pub const SCALAR_SERIES_COLOR: Color32 = Color32::LIGHT_GRAY;

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
// Component colours: vector index → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per vector component, so a component keeps its hue when
/// others are hidden.
#[derive(Debug, Clone, Default)]
pub struct ComponentColors {
    palette: Vec<Color32>,
}

impl ComponentColors {
    pub fn new(component_count: usize) -> Self {
        ComponentColors {
            palette: generate_palette(component_count),
        }
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Colour of component `index`; grey outside the palette.
    pub fn color_for(&self, index: usize) -> Color32 {
        self.palette.get(index).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_distinct() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_component_colors_fallback() {
        let colors = ComponentColors::new(2);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors.color_for(0), colors.color_for(1));
        assert_eq!(colors.color_for(2), Color32::GRAY);
    }
}
