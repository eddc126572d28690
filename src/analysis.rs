//! Ergonomics analysis derived from a cm/360 distance.

use crate::api::ConversionResult;

/// Play-style band for a given cm/360 distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStyle {
    VeryHigh,
    Medium,
    Low,
    UltraLow,
}

impl PlayStyle {
    /// Classify a cm/360 distance. Lower bounds are inclusive:
    /// `< 25`, `[25, 45)`, `[45, 65)`, `>= 65`.
    ///
    /// Total over all inputs; NaN lands in the last band.
    pub fn classify(cm_360: f64) -> Self {
        if cm_360 < 25.0 {
            PlayStyle::VeryHigh
        } else if cm_360 < 45.0 {
            PlayStyle::Medium
        } else if cm_360 < 65.0 {
            PlayStyle::Low
        } else {
            PlayStyle::UltraLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::VeryHigh => "Very High Sensitivity (Wrist Only)",
            PlayStyle::Medium => "Medium Sensitivity (Wrist & Forearm)",
            PlayStyle::Low => "Low Sensitivity (Full Arm)",
            PlayStyle::UltraLow => "Ultra-Low Sensitivity (Maximum Arm Sweep)",
        }
    }

    /// Mousepad recommendation for this band.
    pub fn pad_size(self) -> &'static str {
        match self {
            PlayStyle::VeryHigh => "Small/Medium mousepad is sufficient.",
            PlayStyle::Medium => "Standard large gaming mousepad is recommended.",
            PlayStyle::Low => "Requires an Extended Deskmat or large pad for comfort.",
            PlayStyle::UltraLow => "You absolutely need an Extended Deskmat.",
        }
    }
}

/// Display-ready view of a conversion result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub target_sensitivity: String,
    pub cm_360: String,
    pub cm_180: String,
    pub play_style: PlayStyle,
}

impl ResultSummary {
    pub fn new(result: &ConversionResult) -> Self {
        Self {
            target_sensitivity: result.target_sensitivity.to_string(),
            cm_360: format!("{} cm", result.cm_360),
            cm_180: format!("{} cm", to_fixed_2(cm_180(result.cm_360))),
            play_style: PlayStyle::classify(result.cm_360),
        }
    }

    /// The "Practical Application" sentence shown under the analysis.
    pub fn practical_note(&self) -> String {
        format!(
            "You need {} of continuous mousepad space to perform a crucial 180° turn. {}",
            self.cm_180,
            self.play_style.pad_size()
        )
    }
}

/// Distance for a half turn.
#[inline]
pub fn cm_180(cm_360: f64) -> f64 {
    cm_360 / 2.0
}

/// Two decimal places with ties rounded away from zero, so `15.125` reads
/// `15.13`. `{:.2}` alone rounds ties to even.
pub fn to_fixed_2(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_lower_inclusive() {
        assert_eq!(PlayStyle::classify(0.0), PlayStyle::VeryHigh);
        assert_eq!(PlayStyle::classify(24.999), PlayStyle::VeryHigh);
        assert_eq!(PlayStyle::classify(25.0), PlayStyle::Medium);
        assert_eq!(PlayStyle::classify(44.99), PlayStyle::Medium);
        assert_eq!(PlayStyle::classify(45.0), PlayStyle::Low);
        assert_eq!(PlayStyle::classify(64.9), PlayStyle::Low);
        assert_eq!(PlayStyle::classify(65.0), PlayStyle::UltraLow);
        assert_eq!(PlayStyle::classify(300.0), PlayStyle::UltraLow);
    }

    #[test]
    fn nan_is_ultra_low() {
        assert_eq!(PlayStyle::classify(f64::NAN), PlayStyle::UltraLow);
    }

    #[test]
    fn summary_formats_like_the_result_panel() {
        let summary = ResultSummary::new(&ConversionResult {
            target_sensitivity: 1.23,
            cm_360: 30.0,
        });
        assert_eq!(summary.target_sensitivity, "1.23");
        assert_eq!(summary.cm_360, "30 cm");
        assert_eq!(summary.cm_180, "15.00 cm");
        assert_eq!(summary.play_style, PlayStyle::Medium);
        assert!(summary.play_style.label().starts_with("Medium Sensitivity"));
        assert_eq!(
            summary.practical_note(),
            "You need 15.00 cm of continuous mousepad space to perform a crucial 180° turn. \
             Standard large gaming mousepad is recommended."
        );
    }

    #[test]
    fn cm_180_keeps_two_places() {
        let summary = ResultSummary::new(&ConversionResult {
            target_sensitivity: 0.5,
            cm_360: 41.5,
        });
        assert_eq!(summary.cm_360, "41.5 cm");
        assert_eq!(summary.cm_180, "20.75 cm");
    }

    #[test]
    fn cm_180_rounds_half_up() {
        let summary = ResultSummary::new(&ConversionResult {
            target_sensitivity: 0.5,
            cm_360: 30.25,
        });
        assert_eq!(summary.cm_180, "15.13 cm");
        assert!(summary.practical_note().starts_with("You need 15.13 cm "));

        let summary = ResultSummary::new(&ConversionResult {
            target_sensitivity: 0.5,
            cm_360: 41.75,
        });
        assert_eq!(summary.cm_180, "20.88 cm");
    }

    #[test]
    fn to_fixed_2_pads_and_rounds() {
        assert_eq!(to_fixed_2(15.0), "15.00");
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(2.5), "2.50");
    }
}
