use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colors
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
fn generate_palette(n: usize) -> Vec<Color32> {
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

/// Stable bar colour for the column at `index` out of `total` columns of a
/// dataset, so repeated analyses of one column always look the same.
pub fn column_color(index: usize, total: usize) -> Color32 {
    generate_palette(total)
        .get(index)
        .copied()
        .unwrap_or(Color32::LIGHT_BLUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_get_distinct_colors() {
        let a = column_color(0, 4);
        let b = column_color(1, 4);
        let c = column_color(2, 4);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn color_is_stable_across_calls() {
        assert_eq!(column_color(2, 4), column_color(2, 4));
    }

    #[test]
    fn out_of_range_index_falls_back() {
        assert_eq!(column_color(9, 4), Color32::LIGHT_BLUE);
        assert_eq!(column_color(0, 0), Color32::LIGHT_BLUE);
    }
}
