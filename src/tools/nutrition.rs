//! Nutrition tools
//!
//! Food-term extraction, remote nutrition lookup, and reply formatting with
//! a general-advice fallback when the lookup cannot be served.

use std::fmt::Write as _;

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::analysis::text;
use crate::api::{ApiClient, NutritionFacts};

/// Words stripped before treating the remainder as the food query
const QUERY_STOPWORDS: &[&str] = &[
    "calories",
    "nutrition",
    "nutrients",
    "protein",
    "carbs",
    "fat",
    "for",
    "the",
    "how",
    "much",
    "many",
    "what",
    "about",
    "facts",
    "info",
    "information",
];

/// General nutrition advice used when a specific lookup cannot be served
const GENERAL_ADVICE: &[&str] = &[
    "Focus on whole, unprocessed foods for better nutrition.",
    "Include lean proteins in every meal for muscle maintenance.",
    "Choose complex carbohydrates over simple sugars for sustained energy.",
    "Don't forget healthy fats like avocados, nuts, and olive oil.",
    "Eat the rainbow - colorful foods provide diverse nutrients.",
    "Practice portion control and mindful eating.",
];

/// Prompt when no food term can be extracted
pub const FOOD_PROMPT: &str = "Please specify a food item you'd like to know about.\n\
    Example: \"nutrition facts for chicken breast\" or \"calories in apple\"";

/// Result of a nutrition lookup
#[derive(Debug, Serialize)]
pub struct NutritionReply {
    /// Extracted food query, if one was found
    pub query: Option<String>,
    /// Where the answer came from: "api", "fallback", or "none"
    pub source: &'static str,
    pub facts: Vec<NutritionFacts>,
    pub reply: String,
}

/// Pull the food term out of a nutrition question by dropping query words
/// and short connectives.
pub fn extract_food_query(message: &str) -> Option<String> {
    let words: Vec<String> = text::tokenize(message)
        .into_iter()
        .filter(|w| w.len() > 2 && !QUERY_STOPWORDS.contains(&w.as_str()))
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Look up nutrition facts for the food mentioned in a message
pub async fn lookup(api: &ApiClient, message: &str) -> NutritionReply {
    let Some(query) = extract_food_query(message) else {
        return NutritionReply {
            query: None,
            source: "none",
            facts: Vec::new(),
            reply: FOOD_PROMPT.to_string(),
        };
    };

    match api.nutrition(&query).await {
        Ok(facts) if !facts.is_empty() => {
            let reply = format_facts(&facts);
            NutritionReply {
                query: Some(query),
                source: "api",
                facts,
                reply,
            }
        }
        Ok(_) => NutritionReply {
            reply: fallback_reply(&query),
            query: Some(query),
            source: "fallback",
            facts: Vec::new(),
        },
        Err(e) => {
            tracing::warn!(error = %e, query = %query, "nutrition lookup failed, using general advice");
            NutritionReply {
                reply: fallback_reply(&query),
                query: Some(query),
                source: "fallback",
                facts: Vec::new(),
            }
        }
    }
}

fn fallback_reply(query: &str) -> String {
    let mut rng = rand::thread_rng();
    let advice = GENERAL_ADVICE
        .choose(&mut rng)
        .copied()
        .unwrap_or("Focus on a balanced diet.");
    format!(
        "I couldn't look up nutrition data for \"{}\" right now.\n\n\
         General advice: {}",
        query, advice
    )
}

fn fmt_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => "n/a".to_string(),
    }
}

/// Format nutrition facts into a readable reply
pub fn format_facts(facts: &[NutritionFacts]) -> String {
    let mut reply = String::from("Nutrition Information:\n");
    for fact in facts {
        let _ = write!(reply, "\n{}", title_case(&fact.name));
        if let Some(serving) = fact.serving_size_g {
            let _ = write!(reply, " (per {}g serving)", serving);
        }
        let _ = writeln!(reply, ":");
        let _ = writeln!(reply, "- Calories: {}", fmt_value(fact.calories, " kcal"));
        let _ = writeln!(reply, "- Protein: {}", fmt_value(fact.protein_g, "g"));
        let _ = writeln!(
            reply,
            "- Carbohydrates: {}",
            fmt_value(fact.carbohydrates_total_g, "g")
        );
        if fact.fiber_g.is_some() {
            let _ = writeln!(reply, "  - Fiber: {}", fmt_value(fact.fiber_g, "g"));
        }
        if fact.sugar_g.is_some() {
            let _ = writeln!(reply, "  - Sugar: {}", fmt_value(fact.sugar_g, "g"));
        }
        let _ = writeln!(reply, "- Fat: {}", fmt_value(fact.fat_total_g, "g"));
        if fact.fat_saturated_g.is_some() {
            let _ = writeln!(
                reply,
                "  - Saturated: {}",
                fmt_value(fact.fat_saturated_g, "g")
            );
        }
        let _ = writeln!(reply, "- Sodium: {}", fmt_value(fact.sodium_mg, "mg"));
        let _ = writeln!(reply, "- Potassium: {}", fmt_value(fact.potassium_mg, "mg"));
        let _ = writeln!(
            reply,
            "- Cholesterol: {}",
            fmt_value(fact.cholesterol_mg, "mg")
        );
    }
    reply.push_str(
        "\nTips: choose lean protein sources, include variety in your diet, \
         and stay hydrated.",
    );
    reply
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_food_query() {
        assert_eq!(
            extract_food_query("calories in chicken breast"),
            Some("chicken breast".to_string())
        );
        assert_eq!(
            extract_food_query("nutrition facts for apple"),
            Some("apple".to_string())
        );
        assert_eq!(extract_food_query("how much protein"), None);
    }

    #[test]
    fn test_format_facts() {
        let facts = vec![NutritionFacts {
            name: "chicken breast".to_string(),
            calories: Some(165.0),
            serving_size_g: Some(100.0),
            protein_g: Some(31.0),
            carbohydrates_total_g: Some(0.0),
            fiber_g: None,
            sugar_g: None,
            fat_total_g: Some(3.6),
            fat_saturated_g: Some(1.0),
            sodium_mg: Some(74.0),
            potassium_mg: Some(256.0),
            cholesterol_mg: Some(85.0),
        }];
        let reply = format_facts(&facts);
        assert!(reply.contains("Chicken Breast"));
        assert!(reply.contains("165 kcal"));
        assert!(reply.contains("31g"));
        // Absent optional fields are omitted rather than shown as n/a
        assert!(!reply.contains("Fiber"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
    }
}
