/// Clamp scalar value to the `[lo, hi]` range, mapping NaN to `lo`.
#[inline]
pub(crate) fn clamp_or(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() { lo } else { x.clamp(lo, hi) }
}

/// Scale factor of reveal phase `phase` for an overall progress `scale`.
///
/// Each phase owns one half of the `[0, 1]` progress range and maps it onto
/// a full `[0, 1]` scale: phase 0 covers `0..0.5`, phase 1 covers `0.5..1`.
#[inline]
pub fn reveal_phase(scale: f64, phase: u32) -> f64 {
    clamp_or(scale - 0.5 * f64::from(phase), 0.0, 0.5) * 2.0
}
