//! Confidence interpolation between a clinical threshold and a severe reference reading.

/// Floor of the interpolated confidence band.
pub const CONFIDENCE_FLOOR: f64 = 40.0;
/// Width of the interpolated confidence band (floor + span = 90).
pub const CONFIDENCE_SPAN: f64 = 50.0;

/// Map a reading onto [40, 90] by how far it sits from `threshold` toward `extreme`.
///
/// Direction follows the reference: when `extreme < threshold` the normal
/// range lies above the threshold (hemoglobin, platelets), otherwise below
/// it (glucose, creatinine). The deviation ratio is clamped to [0, 1].
pub fn interpolate(value: f64, threshold: f64, extreme: f64) -> u8 {
    let deviation = if extreme < threshold {
        (threshold - value) / (threshold - extreme)
    } else {
        (value - threshold) / (extreme - threshold)
    };
    let deviation = if deviation.is_nan() {
        0.0
    } else {
        deviation.clamp(0.0, 1.0)
    };

    (CONFIDENCE_FLOOR + deviation * CONFIDENCE_SPAN).round() as u8
}
