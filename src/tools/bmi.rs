//! BMI tools
//!
//! Free-text measurement analysis and the explicit-parameter BMI calculator.

use serde::Serialize;

use crate::analysis::bmi::{advice_for, BmiReport};
use crate::analysis::measurement::{self, UnitSystem, KG_PER_POUND, METERS_PER_INCH};

/// Prompt returned when no measurement could be recognized
pub const MEASUREMENT_PROMPT: &str = "I couldn't find a height and weight in that. \
    Please try a format like:\n\
    \"I am 170 cm tall and weigh 70 kg\" or\n\
    \"5 feet 8 inches, 150 pounds\"";

/// Full BMI analysis for a recognized measurement
#[derive(Debug, Clone, Serialize)]
pub struct BmiAnalysis {
    /// Height normalized to meters
    pub height_m: f64,
    /// Weight normalized to kilograms
    pub weight_kg: f64,
    /// Measurement system the input used
    pub unit_system: &'static str,
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub category: &'static str,
    pub description: &'static str,
    pub health_risks: &'static str,
    pub advice: &'static str,
}

impl BmiAnalysis {
    fn build(height_m: f64, weight_kg: f64, source: UnitSystem) -> Option<Self> {
        let report = BmiReport::compute(height_m, weight_kg)?;
        Some(Self {
            height_m,
            weight_kg,
            unit_system: source.as_str(),
            bmi: report.bmi_rounded(),
            category: report.category.display_name(),
            description: report.category.description(),
            health_risks: report.category.health_risks(),
            advice: report.category.advice(),
        })
    }
}

/// Extract a measurement from free text and compute the BMI analysis.
///
/// None means no measurement was recognized; callers should prompt for
/// clarification rather than report an error.
pub fn analyze_text(text: &str) -> Option<BmiAnalysis> {
    let parsed = measurement::parse(text)?;
    BmiAnalysis::build(parsed.height_m, parsed.weight_kg, parsed.source)
}

/// Compute a BMI analysis from explicit values.
///
/// Metric takes meters and kilograms, imperial takes inches and pounds.
/// Non-positive values yield None.
pub fn calculate(height: f64, weight: f64, unit_system: UnitSystem) -> Option<BmiAnalysis> {
    match unit_system {
        UnitSystem::Metric => BmiAnalysis::build(height, weight, UnitSystem::Metric),
        UnitSystem::Imperial => BmiAnalysis::build(
            height * METERS_PER_INCH,
            weight * KG_PER_POUND,
            UnitSystem::Imperial,
        ),
    }
}

/// Advice lookup result
#[derive(Debug, Serialize)]
pub struct CategoryAdvice {
    pub category: String,
    pub advice: &'static str,
}

/// Look up the recommendation text for a category name.
///
/// Unknown names get the generic consult-a-professional fallback.
pub fn advice_reply(category: &str) -> CategoryAdvice {
    CategoryAdvice {
        category: category.to_string(),
        advice: advice_for(category),
    }
}

/// Chat reply text for an analysis
pub fn format_reply(analysis: &BmiAnalysis) -> String {
    format!(
        "BMI Calculation Results:\n\n\
         - Your BMI: {:.1}\n\
         - Category: {}\n\
         - Description: {}\n\n\
         Health information: {}\n\n\
         Recommendation: {}\n\n\
         Note: BMI is a general indicator and may not account for muscle mass, \
         bone density, and other factors. Consult a healthcare provider for \
         personalized advice.",
        analysis.bmi,
        analysis.category,
        analysis.description,
        analysis.health_risks,
        analysis.advice,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::bmi::BmiCategory;

    #[test]
    fn test_analyze_metric_text() {
        let analysis = analyze_text("I am 170 cm tall and weigh 70 kg").unwrap();
        assert_eq!(analysis.bmi, 24.2);
        assert_eq!(analysis.category, "Normal weight");
        assert_eq!(analysis.unit_system, "metric");
        assert_eq!(analysis.advice, BmiCategory::Normal.advice());
    }

    #[test]
    fn test_analyze_imperial_text() {
        let analysis = analyze_text("5 feet 8 inches, 150 pounds").unwrap();
        assert!((analysis.height_m - 1.7272).abs() < 1e-4);
        assert!((analysis.weight_kg - 68.0388).abs() < 1e-4);
        assert_eq!(analysis.bmi, 22.8);
        assert_eq!(analysis.category, "Normal weight");
        assert_eq!(analysis.unit_system, "imperial");
    }

    #[test]
    fn test_analyze_unrecognized_text() {
        assert!(analyze_text("I love running").is_none());
    }

    #[test]
    fn test_calculate_metric() {
        let analysis = calculate(1.75, 70.0, UnitSystem::Metric).unwrap();
        assert_eq!(analysis.bmi, 22.9);
        assert_eq!(analysis.category, "Normal weight");
    }

    #[test]
    fn test_calculate_imperial() {
        // 69 inches, 154 lbs
        let analysis = calculate(69.0, 154.0, UnitSystem::Imperial).unwrap();
        assert_eq!(analysis.category, "Normal weight");
        assert!((analysis.height_m - 1.7526).abs() < 1e-4);
    }

    #[test]
    fn test_calculate_rejects_non_positive() {
        assert!(calculate(0.0, 70.0, UnitSystem::Metric).is_none());
        assert!(calculate(1.75, -1.0, UnitSystem::Metric).is_none());
    }

    #[test]
    fn test_advice_reply_fallback() {
        assert_eq!(
            advice_reply("overweight").advice,
            BmiCategory::Overweight.advice()
        );
        assert_eq!(
            advice_reply("something else").advice,
            crate::analysis::bmi::GENERAL_ADVICE
        );
    }

    #[test]
    fn test_format_reply_contains_rounded_bmi_and_advice() {
        let analysis = analyze_text("I am 170 cm tall and weigh 70 kg").unwrap();
        let reply = format_reply(&analysis);
        assert!(reply.contains("24.2"));
        assert!(reply.contains("Normal weight"));
        assert!(reply.contains(BmiCategory::Normal.advice()));
    }
}
