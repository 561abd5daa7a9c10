//! Keyword intent classification
//!
//! Routes a chat message to a handler by scanning for intent keywords.
//! Single-word keywords match whole tokens; multiword phrases match as
//! substrings of the normalized text. Intents are checked in a fixed
//! priority order and the first hit wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::text;

/// Chat intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Bmi,
    Nutrition,
    Workout,
    Motivation,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Bmi => "bmi",
            Intent::Nutrition => "nutrition",
            Intent::Workout => "workout",
            Intent::Motivation => "motivation",
            Intent::Unknown => "unknown",
        }
    }
}

const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good evening",
    "howdy",
    "greetings",
];

const BMI_KEYWORDS: &[&str] = &[
    "bmi",
    "body mass index",
    "weigh",
    "weight",
    "height",
    "tall",
    "kg",
    "lbs",
    "pounds",
    "meters",
    "feet",
    "inches",
];

const NUTRITION_KEYWORDS: &[&str] = &[
    "calories",
    "nutrition",
    "protein",
    "carbs",
    "fat",
    "nutrients",
    "vitamin",
];

const WORKOUT_KEYWORDS: &[&str] = &[
    "exercise",
    "workout",
    "training",
    "fitness",
    "muscle",
    "strength",
    "cardio",
    "gym",
];

const MOTIVATION_KEYWORDS: &[&str] = &[
    "motivation",
    "inspire",
    "encourage",
    "lazy",
    "tired",
    "give up",
    "help me",
];

// "weigh ... 70 ... tall ... 175" phrasing without unit keywords
static MEASUREMENT_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:weigh|weight).*?\d+.*?(?:tall|height).*?\d+")
        .expect("invalid measurement hint pattern")
});

/// True when any keyword from the set appears in the text. Single words are
/// matched against tokens, phrases against the normalized text.
fn contains_any(normalized: &str, tokens: &[String], keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        if keyword.contains(' ') {
            normalized.contains(keyword)
        } else {
            tokens.iter().any(|t| t == keyword)
        }
    })
}

/// Classify a chat message into an intent
pub fn classify(message: &str) -> Intent {
    let normalized = text::preprocess(message);
    if normalized.is_empty() {
        return Intent::Unknown;
    }
    let tokens = text::tokenize(message);

    if contains_any(&normalized, &tokens, GREETING_KEYWORDS) {
        return Intent::Greeting;
    }
    if contains_any(&normalized, &tokens, BMI_KEYWORDS) || MEASUREMENT_HINT.is_match(&normalized) {
        return Intent::Bmi;
    }
    if contains_any(&normalized, &tokens, NUTRITION_KEYWORDS) {
        return Intent::Nutrition;
    }
    if contains_any(&normalized, &tokens, WORKOUT_KEYWORDS) {
        return Intent::Workout;
    }
    if contains_any(&normalized, &tokens, MOTIVATION_KEYWORDS) {
        return Intent::Motivation;
    }

    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(classify("Hello!"), Intent::Greeting);
        assert_eq!(classify("good morning coach"), Intent::Greeting);
    }

    #[test]
    fn test_greeting_requires_whole_word() {
        // "hi" must not match inside "this"
        assert_eq!(classify("this machine"), Intent::Unknown);
    }

    #[test]
    fn test_bmi() {
        assert_eq!(classify("Calculate my BMI"), Intent::Bmi);
        assert_eq!(classify("I am 170 cm tall and weigh 70 kg"), Intent::Bmi);
        assert_eq!(classify("I weigh 154, and I'm 69 tall"), Intent::Bmi);
    }

    #[test]
    fn test_nutrition() {
        assert_eq!(classify("calories in chicken breast"), Intent::Nutrition);
        assert_eq!(classify("how much protein is in an egg"), Intent::Nutrition);
    }

    #[test]
    fn test_workout() {
        assert_eq!(classify("show me chest exercise ideas"), Intent::Workout);
        assert_eq!(classify("I want to build muscle"), Intent::Workout);
    }

    #[test]
    fn test_motivation() {
        assert_eq!(classify("I need motivation"), Intent::Motivation);
        assert_eq!(classify("inspire me"), Intent::Motivation);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify("what's the weather like"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn test_greeting_wins_over_later_intents() {
        assert_eq!(classify("hey, any workout tips?"), Intent::Greeting);
    }
}
