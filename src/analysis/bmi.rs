//! BMI computation and classification
//!
//! Body-mass index math plus the category table with per-category
//! description, health-risk, and advice text.

use serde::{Deserialize, Serialize};

/// BMI category enum
///
/// Categories partition (0, inf): underweight below 18.5, normal in
/// [18.5, 25), overweight in [25, 30), obese at 30 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Boundaries are inclusive on the lower end.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" | "normal_weight" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Short description of the category
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Below normal weight",
            BmiCategory::Normal => "Normal weight range",
            BmiCategory::Overweight => "Above normal weight",
            BmiCategory::Obese => "Significantly above normal weight",
        }
    }

    /// Health risks associated with the category
    pub fn health_risks(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "May indicate malnutrition, eating disorders, or other health issues"
            }
            BmiCategory::Normal => "Lowest risk of weight-related health problems",
            BmiCategory::Overweight => {
                "Increased risk of heart disease, diabetes, and high blood pressure"
            }
            BmiCategory::Obese => {
                "High risk of heart disease, diabetes, stroke, and other health issues"
            }
        }
    }

    /// Recommendation text for the category
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a healthcare provider. Focus on healthy weight gain \
                 through balanced nutrition and strength training."
            }
            BmiCategory::Normal => {
                "Maintain your current weight through regular exercise and balanced nutrition."
            }
            BmiCategory::Overweight => {
                "Consider gradual weight loss through increased physical activity and \
                 calorie reduction."
            }
            BmiCategory::Obese => {
                "Consult a healthcare provider. Focus on sustainable weight loss through \
                 diet and exercise."
            }
        }
    }
}

/// Fallback advice for category strings that don't map to a known category
pub const GENERAL_ADVICE: &str =
    "Consult a healthcare professional for personalized guidance.";

/// Advice lookup by category name. Unknown names get the generic fallback.
pub fn advice_for(category: &str) -> &'static str {
    BmiCategory::from_str(category)
        .map(|c| c.advice())
        .unwrap_or(GENERAL_ADVICE)
}

/// A computed BMI with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReport {
    /// Full-precision BMI; use [`BmiReport::bmi_rounded`] for display
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    /// Compute BMI from height in meters and weight in kilograms.
    ///
    /// Returns None for non-positive inputs. Categorization uses the
    /// full-precision value, rounding is display-only.
    pub fn compute(height_m: f64, weight_kg: f64) -> Option<Self> {
        if height_m <= 0.0 || weight_kg <= 0.0 {
            return None;
        }
        let bmi = weight_kg / (height_m * height_m);
        Some(Self {
            bmi,
            category: BmiCategory::classify(bmi),
        })
    }

    /// BMI rounded to one decimal place for display
    pub fn bmi_rounded(&self) -> f64 {
        (self.bmi * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_normal() {
        let report = BmiReport::compute(1.7, 70.0).unwrap();
        assert!((report.bmi_rounded() - 24.2).abs() < 1e-9);
        assert_eq!(report.category, BmiCategory::Normal);
    }

    #[test]
    fn test_compute_rejects_non_positive() {
        assert!(BmiReport::compute(0.0, 70.0).is_none());
        assert!(BmiReport::compute(1.7, 0.0).is_none());
        assert!(BmiReport::compute(-1.7, 70.0).is_none());
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::classify(18.4999), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9999), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.9999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::classify(45.0), BmiCategory::Obese);
    }

    #[test]
    fn test_categorization_uses_full_precision() {
        // 24.96 displays as 25.0 but is still normal weight
        let report = BmiReport::compute(1.0, 24.96).unwrap();
        assert_eq!(report.bmi_rounded(), 25.0);
        assert_eq!(report.category, BmiCategory::Normal);
    }

    #[test]
    fn test_advice_lookup() {
        assert_eq!(advice_for("normal"), BmiCategory::Normal.advice());
        assert_eq!(advice_for("Normal weight"), BmiCategory::Normal.advice());
        assert_eq!(advice_for("OBESE"), BmiCategory::Obese.advice());
        assert_eq!(advice_for("plaid"), GENERAL_ADVICE);
    }

    #[test]
    fn test_every_category_has_nonempty_text() {
        for category in [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ] {
            assert!(!category.advice().is_empty());
            assert!(!category.description().is_empty());
            assert!(!category.health_risks().is_empty());
        }
    }
}
