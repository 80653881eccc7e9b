//! Channel-wise color averaging.

use crate::schema::Rgb;

/// Color returned when there is nothing to blend.
pub const FALLBACK_COLOR: Rgb = Rgb::WHITE;

/// Average colors per channel, truncating toward zero.
///
/// Duplicates are counted as given; callers decide whether to dedupe.
/// Empty input yields [`FALLBACK_COLOR`], a single color is returned as is.
pub fn blend(colors: &[Rgb]) -> Rgb {
    match colors {
        [] => FALLBACK_COLOR,
        [only] => *only,
        _ => {
            let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
                (r + c.r as u32, g + c.g as u32, b + c.b as u32)
            });
            let n = colors.len() as u32;
            Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
        }
    }
}
