use serde::{Deserialize, Serialize};

/// Time curves applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    InCubic,
    OutCubic,
    InOutQuad,
    InOutCubic,
}

impl Easing {
    /// Apply the curve. `t` is clamped to `[0, 1]`; every curve maps
    /// `0 → 0` and `1 → 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutQuad,
        Easing::InOutCubic,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = easing.apply(f64::from(step) / 100.0);
                assert!(v >= prev - 1e-12, "{easing:?} regressed at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_cubic_leads_in_cubic_trails() {
        assert!(Easing::OutCubic.apply(0.25) > 0.25);
        assert!(Easing::InCubic.apply(0.25) < 0.25);
        assert!((Easing::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::OutCubic.apply(-2.0), 0.0);
        assert_eq!(Easing::InCubic.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }
}
