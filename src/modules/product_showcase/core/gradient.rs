// Sequential colour maps for background gradients, min value lightest, max darkest.
//
// Nine-stop ColorBrewer palettes, linearly interpolated. The text colour flips to light grey
// on dark backgrounds using the WCAG relative luminance threshold.

use crate::modules::product_showcase::core::table::CellStyle;

pub const HIGHLIGHT_COLOR: &str = "#ffe599";

const DARK_TEXT: &str = "#000000";
const LIGHT_TEXT: &str = "#f1f1f1";
const LUMINANCE_THRESHOLD: f64 = 0.408;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Greens,
    Blues,
}

impl Colormap {
    fn stops(self) -> &'static [[u8; 3]; 9] {
        match self {
            Colormap::Greens => &[
                [0xf7, 0xfc, 0xf5],
                [0xe5, 0xf5, 0xe0],
                [0xc7, 0xe9, 0xc0],
                [0xa1, 0xd9, 0x9b],
                [0x74, 0xc4, 0x76],
                [0x41, 0xab, 0x5d],
                [0x23, 0x8b, 0x45],
                [0x00, 0x6d, 0x2c],
                [0x00, 0x44, 0x1b],
            ],
            Colormap::Blues => &[
                [0xf7, 0xfb, 0xff],
                [0xde, 0xeb, 0xf7],
                [0xc6, 0xdb, 0xef],
                [0x9e, 0xca, 0xe1],
                [0x6b, 0xae, 0xd6],
                [0x42, 0x92, 0xc6],
                [0x21, 0x71, 0xb5],
                [0x08, 0x51, 0x9c],
                [0x08, 0x30, 0x6b],
            ],
        }
    }

    /// Colour at `t` in `[0, 1]`; out-of-range input is clamped.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let position = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let lower = position.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let weight = position - lower as f64;
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let a = f64::from(stops[lower][channel]);
            let b = f64::from(stops[upper][channel]);
            *out = (a + (b - a) * weight).round() as u8;
        }
        rgb
    }
}

pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb[0]) + 0.7152 * linear(rgb[1]) + 0.0722 * linear(rgb[2])
}

/// One style per value, scaled between the column's min and max.
pub fn background_gradient(values: &[f64], colormap: Colormap) -> Vec<CellStyle> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|value| {
            let t = if range > 0.0 { (value - min) / range } else { 0.0 };
            let rgb = colormap.sample(t);
            let color = if relative_luminance(rgb) < LUMINANCE_THRESHOLD {
                LIGHT_TEXT
            } else {
                DARK_TEXT
            };
            CellStyle {
                background_color: hex(rgb),
                color: color.to_string(),
            }
        })
        .collect()
}

/// Marks every position holding the column maximum.
pub fn highlight_max(values: &[f64]) -> Vec<bool> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| *v == max).collect()
}

#[cfg(test)]
mod gradient_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Colormap::Greens, "#f7fcf5", "#00441b")]
    #[case(Colormap::Blues, "#f7fbff", "#08306b")]
    fn it_should_span_the_palette_from_min_to_max(
        #[case] colormap: Colormap,
        #[case] lightest: &str,
        #[case] darkest: &str,
    ) {
        let styles = background_gradient(&[10.0, 55.0, 100.0], colormap);
        assert_eq!(styles[0].background_color, lightest);
        assert_eq!(styles[2].background_color, darkest);
        assert_eq!(styles[0].color, DARK_TEXT);
        assert_eq!(styles[2].color, LIGHT_TEXT);
    }

    #[rstest]
    fn it_should_use_the_lightest_colour_for_a_constant_column() {
        let styles = background_gradient(&[5.0, 5.0], Colormap::Greens);
        assert!(styles.iter().all(|s| s.background_color == "#f7fcf5"));
    }

    #[rstest]
    fn it_should_interpolate_between_stops() {
        assert_eq!(hex(Colormap::Greens.sample(0.5)), "#74c476");
        assert_eq!(Colormap::Blues.sample(-1.0), Colormap::Blues.sample(0.0));
        assert_eq!(Colormap::Blues.sample(7.0), Colormap::Blues.sample(1.0));
    }

    #[rstest]
    fn it_should_highlight_every_maximum() {
        assert_eq!(
            highlight_max(&[3.0, 9.0, 1.0, 9.0]),
            vec![false, true, false, true]
        );
    }
}
