/// Clamped piecewise-linear interpolation.
///
/// `input` holds the control points in non-decreasing order and `output`
/// the value at each of them. Below the first point the first output is
/// returned, above the last point the last output: nothing is ever
/// extrapolated. A zero-width segment (two equal inputs) resolves to its
/// right-hand output, so a degenerate layout never divides by zero.
/// Mismatched slices are truncated to the shorter one; empty slices give 0.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    let (input, output) = (&input[..n], &output[..n]);

    // NaN compares false everywhere; treat it as "before the first point".
    if x.is_nan() || x <= input[0] {
        return output[0];
    }
    if x >= input[n - 1] {
        return output[n - 1];
    }

    for i in 1..n {
        let (x0, x1) = (input[i - 1], input[i]);
        if x > x1 {
            continue;
        }
        let span = x1 - x0;
        if span <= 0.0 {
            return output[i];
        }
        let t = (x - x0) / span;
        return output[i - 1] + (output[i] - output[i - 1]) * t;
    }

    output[n - 1]
}

/// Map `t ∈ [0, 1]` onto `[from, to]`, clamped at both ends.
#[inline]
pub fn interpolate_range(t: f64, from: f64, to: f64) -> f64 {
    interpolate(t, &[0.0, 1.0], &[from, to])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_point_map() {
        let input = [0.0, 100.0, 200.0];
        let output = [0.9, 1.0, 0.9];
        assert!(approx_eq(interpolate(0.0, &input, &output), 0.9));
        assert!(approx_eq(interpolate(50.0, &input, &output), 0.95));
        assert!(approx_eq(interpolate(100.0, &input, &output), 1.0));
        assert!(approx_eq(interpolate(150.0, &input, &output), 0.95));
        assert!(approx_eq(interpolate(200.0, &input, &output), 0.9));
    }

    #[test]
    fn clamps_outside_the_endpoints() {
        let input = [-10.0, 0.0, 10.0];
        let output = [-10.0, 0.0, 10.0];
        assert!(approx_eq(interpolate(-1_000.0, &input, &output), -10.0));
        assert!(approx_eq(interpolate(1_000.0, &input, &output), 10.0));
        assert!(approx_eq(interpolate(f64::INFINITY, &input, &output), 10.0));
        assert!(approx_eq(interpolate(f64::NEG_INFINITY, &input, &output), -10.0));
    }

    #[test]
    fn zero_width_segments_do_not_divide_by_zero() {
        let input = [0.0, 0.0, 0.0];
        let output = [8.0, 16.0, 8.0];
        let v = interpolate(0.0, &input, &output);
        assert!(v.is_finite());
        let v = interpolate(0.5, &input, &output);
        assert!(approx_eq(v, 8.0));
    }

    #[test]
    fn nan_input_is_finite() {
        let v = interpolate(f64::NAN, &[0.0, 1.0], &[3.0, 5.0]);
        assert!(approx_eq(v, 3.0));
    }

    #[test]
    fn empty_and_single_point() {
        assert_eq!(interpolate(1.0, &[], &[]), 0.0);
        assert!(approx_eq(interpolate(42.0, &[1.0], &[7.0]), 7.0));
    }

    #[test]
    fn two_point_range() {
        assert!(approx_eq(interpolate_range(0.0, 0.8, 1.1), 0.8));
        assert!(approx_eq(interpolate_range(1.0, 0.8, 1.1), 1.1));
        assert!(approx_eq(interpolate_range(0.5, -6.0, 6.0), 0.0));
        assert!(approx_eq(interpolate_range(1.7, -6.0, 6.0), 6.0));
    }
}
