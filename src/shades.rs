//! Tonal shade scales derived from a single base color.
//!
//! Lighter steps mix the base toward white (tints), darker steps scale it
//! toward black (shades). Step 500 is always the base color itself.

use indexmap::IndexMap;

use crate::hex::Rgb;
use crate::traits::ShadeDeriver;

/// Shade label (e.g. `"500"`) to `#rrggbb`, in scale order.
pub type ShadeMap = IndexMap<String, String>;

/// How a single step is derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mix {
    /// Move each channel toward 255 by the given fraction.
    Tint(f64),
    /// The base color, unchanged.
    Base,
    /// Scale each channel by the given factor.
    Shade(f64),
}

impl Mix {
    pub fn apply(self, base: Rgb) -> Rgb {
        let channel = |c: u8| -> u8 {
            let c = f64::from(c);
            let mixed = match self {
                Mix::Tint(intensity) => c + (255.0 - c) * intensity,
                Mix::Base => c,
                Mix::Shade(intensity) => c * intensity,
            };
            mixed.round().clamp(0.0, 255.0) as u8
        };

        Rgb::new(channel(base.r), channel(base.g), channel(base.b))
    }
}

/// One labelled step of a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeStep {
    pub label: String,
    pub mix: Mix,
}

/// The conventional 50-950 scale.
pub const STANDARD_SCALE: [(&str, Mix); 11] = [
    ("50", Mix::Tint(0.95)),
    ("100", Mix::Tint(0.9)),
    ("200", Mix::Tint(0.75)),
    ("300", Mix::Tint(0.6)),
    ("400", Mix::Tint(0.3)),
    ("500", Mix::Base),
    ("600", Mix::Shade(0.9)),
    ("700", Mix::Shade(0.6)),
    ("800", Mix::Shade(0.45)),
    ("900", Mix::Shade(0.3)),
    ("950", Mix::Shade(0.2)),
];

/// Labels of [`STANDARD_SCALE`], in order.
pub fn standard_labels() -> Vec<String> {
    STANDARD_SCALE
        .iter()
        .map(|(label, _)| (*label).to_string())
        .collect()
}

/// Shade deriver backed by fixed tint/shade intensities.
#[derive(Debug, Clone)]
pub struct TintShadeDeriver {
    steps: Vec<ShadeStep>,
}

impl TintShadeDeriver {
    /// Deriver producing every step of [`STANDARD_SCALE`].
    pub fn new() -> Self {
        Self {
            steps: STANDARD_SCALE
                .iter()
                .map(|(label, mix)| ShadeStep {
                    label: (*label).to_string(),
                    mix: *mix,
                })
                .collect(),
        }
    }

    /// Deriver restricted to the given labels, in the given order.
    ///
    /// Labels missing from [`STANDARD_SCALE`] are skipped.
    pub fn with_labels(labels: &[String]) -> Self {
        let steps = labels
            .iter()
            .filter_map(|label| {
                let found = STANDARD_SCALE.iter().find(|(known, _)| *known == label.as_str());
                if found.is_none() {
                    tracing::warn!("Unknown shade label {:?}, skipping", label);
                }
                found.map(|(_, mix)| ShadeStep {
                    label: label.clone(),
                    mix: *mix,
                })
            })
            .collect();

        Self { steps }
    }

    pub fn steps(&self) -> &[ShadeStep] {
        &self.steps
    }
}

impl Default for TintShadeDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadeDeriver for TintShadeDeriver {
    fn derive(&self, base: Rgb) -> ShadeMap {
        self.steps
            .iter()
            .map(|step| (step.label.clone(), step.mix.apply(base).to_hex()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scale_labels_in_order() {
        let map = TintShadeDeriver::new().derive(Rgb::new(51, 102, 255));
        let labels: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec![
                "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"
            ]
        );
    }

    #[test]
    fn test_500_is_base_color() {
        let map = TintShadeDeriver::new().derive(Rgb::new(51, 102, 255));
        assert_eq!(map["500"], "#3366ff");
    }

    #[test]
    fn test_tint_moves_toward_white() {
        // 0 + 255 * 0.95 = 242.25 -> 242
        assert_eq!(Mix::Tint(0.95).apply(Rgb::new(0, 0, 0)), Rgb::new(242, 242, 242));
        assert_eq!(Mix::Tint(0.5).apply(Rgb::new(255, 0, 100)), Rgb::new(255, 128, 178));
    }

    #[test]
    fn test_shade_moves_toward_black() {
        assert_eq!(Mix::Shade(0.2).apply(Rgb::new(255, 0, 0)), Rgb::new(51, 0, 0));
        assert_eq!(Mix::Shade(0.9).apply(Rgb::new(100, 200, 10)), Rgb::new(90, 180, 9));
    }

    #[test]
    fn test_white_tints_stay_white() {
        let map = TintShadeDeriver::new().derive(Rgb::new(255, 255, 255));
        for label in ["50", "100", "200", "300", "400", "500"] {
            assert_eq!(map[label], "#ffffff", "shade {label}");
        }
    }

    #[test]
    fn test_with_labels_preserves_requested_order() {
        let labels = vec!["900".to_string(), "100".to_string(), "500".to_string()];
        let deriver = TintShadeDeriver::with_labels(&labels);
        let map = deriver.derive(Rgb::new(255, 0, 0));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["900", "100", "500"]);
    }

    #[test]
    fn test_with_labels_skips_unknown() {
        let labels = vec!["500".to_string(), "1000".to_string()];
        let deriver = TintShadeDeriver::with_labels(&labels);
        assert_eq!(deriver.steps().len(), 1);
        assert_eq!(deriver.steps()[0].label, "500");
    }

    #[test]
    fn test_standard_labels_match_scale() {
        assert_eq!(standard_labels().len(), STANDARD_SCALE.len());
        assert_eq!(standard_labels()[0], "50");
    }

    #[cfg(test)]
    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn tints_never_darken(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), i in 0.0f64..=1.0) {
                let tinted = Mix::Tint(i).apply(Rgb::new(r, g, b));
                prop_assert!(tinted.r >= r && tinted.g >= g && tinted.b >= b);
            }

            #[test]
            fn shades_never_lighten(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), i in 0.0f64..=1.0) {
                let shaded = Mix::Shade(i).apply(Rgb::new(r, g, b));
                prop_assert!(shaded.r <= r && shaded.g <= g && shaded.b <= b);
            }
        }
    }
}
