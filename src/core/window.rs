const HEIGHT_HEADROOM_RATIO: f64 = 0.10;
const RANGE_PADDING_RATIO: f64 = 0.08;
const MIN_SPAN: f64 = 1.0;

/// Ground-anchored height axis: `[0, max]` with headroom so the apex marker
/// never touches the panel edge.
pub fn height_axis_max_f64(raw_max: f64) -> f64 {
    let span = raw_max.max(MIN_SPAN);
    span + (span * HEIGHT_HEADROOM_RATIO)
}

pub fn height_axis_max_f32(raw_max: f32) -> f32 {
    height_axis_max_f64(raw_max as f64) as f32
}

/// Padded axis range for data that can be negative (velocity). Both ends get
/// the same relative padding; a flat series still yields a non-zero span.
pub fn padded_axis_range_f64(raw_min: f64, raw_max: f64) -> (f64, f64) {
    let (lo, hi) = if raw_min <= raw_max {
        (raw_min, raw_max)
    } else {
        (raw_max, raw_min)
    };
    let span = (hi - lo).max(MIN_SPAN);
    let pad = span * RANGE_PADDING_RATIO;
    (lo - pad, hi + pad)
}

pub fn padded_axis_range_f32(raw_min: f32, raw_max: f32) -> (f32, f32) {
    let (lo, hi) = padded_axis_range_f64(raw_min as f64, raw_max as f64);
    (lo as f32, hi as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_axis_adds_headroom_above_the_apex() {
        let max = height_axis_max_f64(151.6);
        assert!(max > 151.6);
        assert!(max < 151.6 * 1.2);
    }

    #[test]
    fn height_axis_has_a_minimum_span() {
        assert!(height_axis_max_f64(0.0) >= MIN_SPAN);
        assert!(height_axis_max_f64(-5.0) >= MIN_SPAN);
    }

    #[test]
    fn padded_range_straddles_the_data() {
        let (lo, hi) = padded_axis_range_f64(-54.5, 43.5);
        assert!(lo < -54.5);
        assert!(hi > 43.5);
    }

    #[test]
    fn padded_range_accepts_swapped_and_flat_inputs() {
        let (lo, hi) = padded_axis_range_f64(10.0, -10.0);
        assert!(lo < -10.0 && hi > 10.0);

        let (lo, hi) = padded_axis_range_f64(5.0, 5.0);
        assert!(hi - lo >= MIN_SPAN);
    }
}
