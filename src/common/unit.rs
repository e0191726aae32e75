//! Unit conversion utilities.
//!
//! DrawingML positions are in EMUs (English Metric Units); font sizes are in
//! hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Font sizes DrawingML accepts for `a:rPr/@sz`, in points.
pub const MIN_FONT_PT: f32 = 1.0;
pub const MAX_FONT_PT: f32 = 4000.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to the centipoint value used by `a:rPr/@sz`.
///
/// Returns `None` outside the range DrawingML allows.
#[inline]
pub fn font_size_centipoints(pt: f32) -> Option<u32> {
    if !(MIN_FONT_PT..=MAX_FONT_PT).contains(&pt) {
        return None;
    }
    Some((pt * 100.0).round() as u32)
}
