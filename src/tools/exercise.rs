//! Exercise tools
//!
//! Muscle-group and exercise-type extraction, remote exercise lookup, and
//! the built-in catalog fallback.

use std::fmt::Write as _;

use serde::Serialize;

use crate::api::{ApiClient, Exercise};
use crate::catalog::exercises as catalog;

/// Muscle-group phrasing mapped to the lookup muscle names
const MUSCLE_MAP: &[(&str, &str)] = &[
    ("chest", "chest"),
    ("pecs", "chest"),
    ("biceps", "biceps"),
    ("bicep", "biceps"),
    ("arms", "biceps"),
    ("triceps", "triceps"),
    ("tricep", "triceps"),
    ("shoulders", "shoulders"),
    ("shoulder", "shoulders"),
    ("back", "lats"),
    ("lats", "lats"),
    ("legs", "quadriceps"),
    ("quads", "quadriceps"),
    ("thighs", "quadriceps"),
    ("glutes", "glutes"),
    ("butt", "glutes"),
    ("calves", "calves"),
    ("calf", "calves"),
    ("abs", "abdominals"),
    ("core", "abdominals"),
    ("abdominals", "abdominals"),
];

/// Exercise-type phrasing mapped to the lookup type names
const TYPE_MAP: &[(&str, &str)] = &[
    ("cardio", "cardio"),
    ("running", "cardio"),
    ("cycling", "cardio"),
    ("strength", "strength"),
    ("weights", "strength"),
    ("lifting", "strength"),
    ("stretching", "stretching"),
    ("flexibility", "stretching"),
    ("plyometrics", "plyometrics"),
    ("hiit", "plyometrics"),
];

/// Result of an exercise lookup
#[derive(Debug, Serialize)]
pub struct ExerciseReply {
    pub muscle: Option<String>,
    pub exercise_type: Option<String>,
    pub difficulty: Option<String>,
    /// Where the listing came from: "api" or "catalog"
    pub source: &'static str,
    pub exercises: Vec<Exercise>,
    pub reply: String,
}

/// Extract (muscle, exercise type) keywords from a workout question
pub fn extract_filters(message: &str) -> (Option<&'static str>, Option<&'static str>) {
    let lower = message.to_lowercase();

    let muscle = MUSCLE_MAP
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, muscle)| *muscle);

    let exercise_type = TYPE_MAP
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, exercise_type)| *exercise_type);

    (muscle, exercise_type)
}

/// Recommend exercises, preferring the remote API and falling back to the
/// built-in catalog when it is unavailable or returns nothing.
pub async fn recommend(
    api: &ApiClient,
    muscle: Option<&str>,
    exercise_type: Option<&str>,
    difficulty: Option<&str>,
) -> ExerciseReply {
    let (source, exercises) = match api.exercises(muscle, exercise_type, difficulty).await {
        Ok(list) if !list.is_empty() => ("api", list),
        Ok(_) => ("catalog", catalog::lookup(muscle, exercise_type, difficulty)),
        Err(e) => {
            tracing::warn!(error = %e, "exercise lookup failed, using built-in catalog");
            ("catalog", catalog::lookup(muscle, exercise_type, difficulty))
        }
    };

    let reply = if exercises.is_empty() {
        "No exercises found for your criteria. Try a muscle group like \
         \"chest\", \"back\", \"legs\", or \"abs\"."
            .to_string()
    } else {
        format_exercises(&exercises)
    };

    ExerciseReply {
        muscle: muscle.map(String::from),
        exercise_type: exercise_type.map(String::from),
        difficulty: difficulty.map(String::from),
        source,
        exercises,
        reply,
    }
}

/// Chat entry point: extract filters from the message, then recommend
pub async fn handle_message(api: &ApiClient, message: &str) -> String {
    let (muscle, exercise_type) = extract_filters(message);
    recommend(api, muscle, exercise_type, None).await.reply
}

/// Format an exercise listing into a readable reply
pub fn format_exercises(exercises: &[Exercise]) -> String {
    let mut reply = String::from("Recommended Exercises:\n");
    for (i, exercise) in exercises.iter().enumerate() {
        let _ = write!(reply, "\n{}. {}\n", i + 1, exercise.name);
        let _ = writeln!(reply, "   Type: {}", exercise.exercise_type);
        let _ = writeln!(reply, "   Target muscle: {}", exercise.muscle);
        if !exercise.equipment.is_empty() {
            let _ = writeln!(reply, "   Equipment: {}", exercise.equipment);
        }
        if !exercise.difficulty.is_empty() {
            let _ = writeln!(reply, "   Difficulty: {}", exercise.difficulty);
        }
        if !exercise.instructions.is_empty() {
            let _ = writeln!(reply, "   Instructions: {}", exercise.instructions);
        }
    }
    reply.push_str("\nRemember to start slowly and maintain proper form.");
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_muscle() {
        assert_eq!(extract_filters("show me chest exercises").0, Some("chest"));
        assert_eq!(extract_filters("I want bigger arms").0, Some("biceps"));
        assert_eq!(extract_filters("work on my core").0, Some("abdominals"));
        assert_eq!(extract_filters("any exercises?").0, None);
    }

    #[test]
    fn test_extract_type() {
        assert_eq!(extract_filters("some cardio please").1, Some("cardio"));
        assert_eq!(extract_filters("I like lifting").1, Some("strength"));
        assert_eq!(extract_filters("hiit workout").1, Some("plyometrics"));
    }

    #[test]
    fn test_extract_both() {
        let (muscle, exercise_type) = extract_filters("strength training for my legs");
        assert_eq!(muscle, Some("quadriceps"));
        assert_eq!(exercise_type, Some("strength"));
    }

    #[test]
    fn test_format_exercises() {
        let exercises = vec![Exercise {
            name: "Push-ups".to_string(),
            exercise_type: "strength".to_string(),
            muscle: "chest".to_string(),
            equipment: "body_only".to_string(),
            difficulty: "beginner".to_string(),
            instructions: "Lower and push back up.".to_string(),
        }];
        let reply = format_exercises(&exercises);
        assert!(reply.contains("1. Push-ups"));
        assert!(reply.contains("Target muscle: chest"));
        assert!(reply.contains("proper form"));
    }
}
