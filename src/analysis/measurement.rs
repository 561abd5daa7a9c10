//! Measurement extraction
//!
//! Pulls a height and weight pair out of free-form text. Matchers are tried
//! in a fixed order, metric before imperial, and the first match wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;
/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;

/// Measurement system the source text used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// A height and weight pair extracted from text, normalized to metric.
/// Both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedMeasurement {
    /// Height in meters
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Which measurement system the text used
    pub source: UnitSystem,
}

// ============================================================================
// Matchers
// ============================================================================

// The gap between the height and weight mentions is an unbounded lazy `.*?`,
// so an unrelated number between the two units can be picked up (e.g.
// "it's 170 cm from my 5 kg weight to the wall"). Known ambiguity, kept.
static METRIC_COMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*cm\b.*?(\d+(?:\.\d+)?)\s*kg\b")
        .expect("invalid compact metric pattern")
});

static METRIC_VERBOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:cm|centimeters?|centimetres?)\b.*?(\d+(?:\.\d+)?)\s*(?:kg|kilograms?|kilogrammes?)\b")
        .expect("invalid verbose metric pattern")
});

static IMPERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)\s*(?:feet|foot|ft)\b(?:\s*(?:and\s+)?(\d+(?:\.\d+)?)\s*(?:inches?|in)\b)?.*?(\d+(?:\.\d+)?)\s*(?:pounds?|lbs?)\b"#)
        .expect("invalid imperial pattern")
});

/// A named extraction pattern. Matchers run in declaration order and the
/// first one to produce a valid measurement wins.
struct Matcher {
    name: &'static str,
    extract: fn(&str) -> Option<ParsedMeasurement>,
}

const MATCHERS: &[Matcher] = &[
    Matcher { name: "metric_compact", extract: match_metric_compact },
    Matcher { name: "metric_verbose", extract: match_metric_verbose },
    Matcher { name: "imperial", extract: match_imperial },
];

/// Reject zero or negative values even when the pattern matched
fn validated(height_m: f64, weight_kg: f64, source: UnitSystem) -> Option<ParsedMeasurement> {
    if height_m <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    Some(ParsedMeasurement {
        height_m,
        weight_kg,
        source,
    })
}

fn match_metric_compact(text: &str) -> Option<ParsedMeasurement> {
    let caps = METRIC_COMPACT.captures(text)?;
    let cm: f64 = caps[1].parse().ok()?;
    let kg: f64 = caps[2].parse().ok()?;
    validated(cm / CM_PER_METER, kg, UnitSystem::Metric)
}

fn match_metric_verbose(text: &str) -> Option<ParsedMeasurement> {
    let caps = METRIC_VERBOSE.captures(text)?;
    let cm: f64 = caps[1].parse().ok()?;
    let kg: f64 = caps[2].parse().ok()?;
    validated(cm / CM_PER_METER, kg, UnitSystem::Metric)
}

fn match_imperial(text: &str) -> Option<ParsedMeasurement> {
    let caps = IMPERIAL.captures(text)?;
    let feet: f64 = caps[1].parse().ok()?;
    // Inches are optional ("6 feet, 180 pounds")
    let inches: f64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0.0,
    };
    let pounds: f64 = caps[3].parse().ok()?;

    let height_m = (feet * INCHES_PER_FOOT + inches) * METERS_PER_INCH;
    let weight_kg = pounds * KG_PER_POUND;
    validated(height_m, weight_kg, UnitSystem::Imperial)
}

/// Extract a height and weight pair from free-form text.
///
/// Returns None when no pattern matches or a matched value is non-positive.
/// Absence of a measurement is a normal outcome, not an error.
pub fn parse(text: &str) -> Option<ParsedMeasurement> {
    MATCHERS.iter().find_map(|matcher| {
        let parsed = (matcher.extract)(text)?;
        tracing::debug!(matcher = matcher.name, "measurement extracted");
        Some(parsed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_compact() {
        let m = parse("I am 170 cm tall and weigh 70 kg").unwrap();
        assert!(approx(m.height_m, 1.70));
        assert!(approx(m.weight_kg, 70.0));
        assert_eq!(m.source, UnitSystem::Metric);
    }

    #[test]
    fn test_metric_verbose() {
        let m = parse("height 182 centimeters, weight 95 kilograms").unwrap();
        assert!(approx(m.height_m, 1.82));
        assert!(approx(m.weight_kg, 95.0));
        assert_eq!(m.source, UnitSystem::Metric);
    }

    #[test]
    fn test_metric_decimal_values() {
        let m = parse("172.5 cm and 68.2 kg").unwrap();
        assert!(approx(m.height_m, 1.725));
        assert!(approx(m.weight_kg, 68.2));
    }

    #[test]
    fn test_imperial_feet_and_inches() {
        let m = parse("5 feet 8 inches, 150 pounds").unwrap();
        assert!(approx(m.height_m, (5.0 * 12.0 + 8.0) * 0.0254));
        assert!(approx(m.weight_kg, 150.0 * 0.453592));
        assert_eq!(m.source, UnitSystem::Imperial);
    }

    #[test]
    fn test_imperial_inches_default_to_zero() {
        let m = parse("I'm 6 feet and weigh 180 lbs").unwrap();
        assert!(approx(m.height_m, 72.0 * 0.0254));
        assert!(approx(m.weight_kg, 180.0 * 0.453592));
    }

    #[test]
    fn test_metric_takes_precedence_over_imperial() {
        let m = parse("170 cm (5 feet 7 inches), 70 kg (154 pounds)").unwrap();
        assert_eq!(m.source, UnitSystem::Metric);
        assert!(approx(m.height_m, 1.70));
        assert!(approx(m.weight_kg, 70.0));
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(parse("0 cm and 0 kg").is_none());
        assert!(parse("0 cm and 70 kg").is_none());
        assert!(parse("170 cm and 0 kg").is_none());
        assert!(parse("0 feet 0 inches, 0 pounds").is_none());
    }

    #[test]
    fn test_no_measurement() {
        assert!(parse("I love running").is_none());
        assert!(parse("").is_none());
        assert!(parse("I weigh a lot").is_none());
    }

    #[test]
    fn test_weight_only_is_not_enough() {
        assert!(parse("I weigh 70 kg").is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "I am 170 cm tall and weigh 70 kg";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_unbounded_gap_between_units() {
        // The lazy gap spans intervening words, including unrelated numbers
        let m = parse("I am 170 cm tall, 30 years old, and weigh 70 kg").unwrap();
        assert!(approx(m.height_m, 1.70));
        assert!(approx(m.weight_kg, 70.0));
    }
}
