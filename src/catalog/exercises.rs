//! Fallback exercise database
//!
//! A small body-weight-leaning exercise table used when the remote exercise
//! API is unavailable or returns nothing.

use crate::api::Exercise;

/// One entry in the built-in exercise table
pub struct CatalogExercise {
    pub name: &'static str,
    pub exercise_type: &'static str,
    pub muscle: &'static str,
    pub equipment: &'static str,
    pub difficulty: &'static str,
    pub instructions: &'static str,
}

impl From<&CatalogExercise> for Exercise {
    fn from(entry: &CatalogExercise) -> Self {
        Self {
            name: entry.name.to_string(),
            exercise_type: entry.exercise_type.to_string(),
            muscle: entry.muscle.to_string(),
            equipment: entry.equipment.to_string(),
            difficulty: entry.difficulty.to_string(),
            instructions: entry.instructions.to_string(),
        }
    }
}

/// Maximum number of exercises returned per lookup
pub const MAX_RESULTS: usize = 5;

// ============================================================================
// Exercise Tables
// ============================================================================

const CHEST: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Push-ups",
        exercise_type: "strength",
        muscle: "chest",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Start in a plank position with hands slightly wider than shoulders. Lower your body until chest nearly touches the floor, then push back up. Keep core tight throughout the movement.",
    },
    CatalogExercise {
        name: "Incline Push-ups",
        exercise_type: "strength",
        muscle: "chest",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Place hands on an elevated surface like a bench or step. Perform push-up motion, lowering chest toward the elevated surface. This variation is easier than standard push-ups.",
    },
    CatalogExercise {
        name: "Chest Dips",
        exercise_type: "strength",
        muscle: "chest",
        equipment: "body_only",
        difficulty: "intermediate",
        instructions: "Using parallel bars or sturdy chairs, support your body weight on straight arms. Lower your body by bending arms until shoulders are below elbows, then push back up.",
    },
    CatalogExercise {
        name: "Wide-Grip Push-ups",
        exercise_type: "strength",
        muscle: "chest",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Similar to regular push-ups but with hands placed wider than shoulder-width. This targets the outer chest muscles more effectively.",
    },
    CatalogExercise {
        name: "Diamond Push-ups",
        exercise_type: "strength",
        muscle: "chest",
        equipment: "body_only",
        difficulty: "advanced",
        instructions: "Form a diamond shape with your hands by touching thumbs and index fingers together. Perform push-ups in this position to target triceps and inner chest.",
    },
];

const BICEPS: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Bicep Curls",
        exercise_type: "strength",
        muscle: "biceps",
        equipment: "dumbbells",
        difficulty: "beginner",
        instructions: "Stand with dumbbells at your sides, palms facing forward. Curl weights up toward shoulders, squeezing biceps at the top, then slowly lower back down.",
    },
    CatalogExercise {
        name: "Hammer Curls",
        exercise_type: "strength",
        muscle: "biceps",
        equipment: "dumbbells",
        difficulty: "beginner",
        instructions: "Hold dumbbells with neutral grip (palms facing each other). Curl weights up toward shoulders while maintaining neutral grip throughout the movement.",
    },
    CatalogExercise {
        name: "Chin-ups",
        exercise_type: "strength",
        muscle: "biceps",
        equipment: "pull_up_bar",
        difficulty: "intermediate",
        instructions: "Hang from pull-up bar with underhand grip, hands shoulder-width apart. Pull your body up until chin clears the bar, then lower with control.",
    },
    CatalogExercise {
        name: "Resistance Band Curls",
        exercise_type: "strength",
        muscle: "biceps",
        equipment: "resistance_bands",
        difficulty: "beginner",
        instructions: "Stand on resistance band with feet hip-width apart. Hold handles and curl up toward shoulders, maintaining tension throughout the movement.",
    },
];

const LEGS: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Squats",
        exercise_type: "strength",
        muscle: "quadriceps",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Stand with feet shoulder-width apart. Lower your body by bending knees and hips as if sitting back into a chair. Keep chest up and knees behind toes.",
    },
    CatalogExercise {
        name: "Lunges",
        exercise_type: "strength",
        muscle: "quadriceps",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Step forward with one leg, lowering hips until both knees are bent at 90 degrees. Push back to starting position and repeat with other leg.",
    },
    CatalogExercise {
        name: "Wall Sit",
        exercise_type: "strength",
        muscle: "quadriceps",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Lean back against wall with feet shoulder-width apart and about 2 feet from wall. Slide down until thighs are parallel to floor. Hold position.",
    },
    CatalogExercise {
        name: "Calf Raises",
        exercise_type: "strength",
        muscle: "calves",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Stand with balls of feet on elevated surface, heels hanging off. Rise up on toes as high as possible, then slowly lower heels below the starting position.",
    },
];

const BACK: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Pull-ups",
        exercise_type: "strength",
        muscle: "lats",
        equipment: "pull_up_bar",
        difficulty: "intermediate",
        instructions: "Hang from pull-up bar with overhand grip, hands wider than shoulders. Pull body up until chin clears bar, then lower with control.",
    },
    CatalogExercise {
        name: "Superman",
        exercise_type: "strength",
        muscle: "lats",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Lie face down with arms extended overhead. Simultaneously lift chest, arms, and legs off the ground, holding briefly before lowering back down.",
    },
    CatalogExercise {
        name: "Bird Dog",
        exercise_type: "strength",
        muscle: "lats",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Start on hands and knees. Extend opposite arm and leg simultaneously, hold briefly, then return to start. Repeat with other arm and leg.",
    },
];

const ABS: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Plank",
        exercise_type: "strength",
        muscle: "abdominals",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Hold a push-up position with forearms on the ground. Keep body in straight line from head to heels, engaging core muscles throughout.",
    },
    CatalogExercise {
        name: "Crunches",
        exercise_type: "strength",
        muscle: "abdominals",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Lie on back with knees bent, hands behind head. Lift shoulders off ground by contracting abs, then slowly lower back down.",
    },
    CatalogExercise {
        name: "Mountain Climbers",
        exercise_type: "cardio",
        muscle: "abdominals",
        equipment: "body_only",
        difficulty: "intermediate",
        instructions: "Start in plank position. Quickly alternate bringing knees toward chest in a running motion while maintaining plank position.",
    },
    CatalogExercise {
        name: "Russian Twists",
        exercise_type: "strength",
        muscle: "abdominals",
        equipment: "body_only",
        difficulty: "intermediate",
        instructions: "Sit with knees bent, lean back slightly. Rotate torso left and right, touching ground beside hips with hands. Keep feet off ground for added difficulty.",
    },
];

const SHOULDERS: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Pike Push-ups",
        exercise_type: "strength",
        muscle: "shoulders",
        equipment: "body_only",
        difficulty: "intermediate",
        instructions: "Start in downward dog position. Lower head toward ground by bending arms, then push back up. This targets shoulder muscles effectively.",
    },
    CatalogExercise {
        name: "Arm Circles",
        exercise_type: "strength",
        muscle: "shoulders",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Extend arms out to sides parallel to ground. Make small circles forward for 30 seconds, then backward for 30 seconds. Gradually increase circle size.",
    },
];

const CARDIO: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Jumping Jacks",
        exercise_type: "cardio",
        muscle: "full_body",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Stand with feet together, arms at sides. Jump while spreading legs shoulder-width apart and raising arms overhead. Jump back to starting position.",
    },
    CatalogExercise {
        name: "High Knees",
        exercise_type: "cardio",
        muscle: "full_body",
        equipment: "body_only",
        difficulty: "beginner",
        instructions: "Run in place, bringing knees up toward chest as high as possible. Pump arms naturally and maintain quick tempo.",
    },
    CatalogExercise {
        name: "Burpees",
        exercise_type: "cardio",
        muscle: "full_body",
        equipment: "body_only",
        difficulty: "advanced",
        instructions: "Start standing, drop into squat, kick feet back to plank, do push-up, jump feet back to squat, then jump up with arms overhead.",
    },
];

const GROUPS: &[(&str, &[CatalogExercise])] = &[
    ("chest", CHEST),
    ("biceps", BICEPS),
    ("legs", LEGS),
    ("back", BACK),
    ("abs", ABS),
    ("shoulders", SHOULDERS),
    ("cardio", CARDIO),
];

/// Map common muscle-group phrasing onto a catalog group name
pub fn canonical_group(muscle: &str) -> Option<&'static str> {
    match muscle.to_lowercase().trim() {
        "chest" | "pecs" => Some("chest"),
        "arms" | "bicep" | "biceps" | "tricep" | "triceps" => Some("biceps"),
        "legs" | "quads" | "quadriceps" | "thighs" | "glutes" | "calves" | "calf" => Some("legs"),
        "back" | "lats" => Some("back"),
        "abs" | "core" | "abdominals" => Some("abs"),
        "shoulders" | "shoulder" => Some("shoulders"),
        "cardio" => Some("cardio"),
        _ => None,
    }
}

/// Look up fallback exercises, optionally filtered by muscle group, exercise
/// type, and difficulty. Returns at most [`MAX_RESULTS`] entries.
pub fn lookup(
    muscle: Option<&str>,
    exercise_type: Option<&str>,
    difficulty: Option<&str>,
) -> Vec<Exercise> {
    let entries: Vec<&CatalogExercise> = match muscle.and_then(canonical_group) {
        Some(group) => GROUPS
            .iter()
            .filter(|(name, _)| *name == group)
            .flat_map(|(_, entries)| entries.iter())
            .collect(),
        None => GROUPS.iter().flat_map(|(_, entries)| entries.iter()).collect(),
    };

    entries
        .into_iter()
        .filter(|e| match exercise_type {
            Some(t) => e.exercise_type.eq_ignore_ascii_case(t.trim()),
            None => true,
        })
        .filter(|e| match difficulty {
            Some(d) => e.difficulty.eq_ignore_ascii_case(d.trim()),
            None => true,
        })
        .take(MAX_RESULTS)
        .map(Exercise::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_muscle() {
        let exercises = lookup(Some("chest"), None, None);
        assert_eq!(exercises.len(), 5);
        assert!(exercises.iter().all(|e| e.muscle == "chest"));
    }

    #[test]
    fn test_muscle_aliases() {
        assert_eq!(canonical_group("arms"), Some("biceps"));
        assert_eq!(canonical_group("core"), Some("abs"));
        assert_eq!(canonical_group("quads"), Some("legs"));
        assert_eq!(canonical_group("LATS"), Some("back"));
        assert_eq!(canonical_group("forearms"), None);
    }

    #[test]
    fn test_type_filter() {
        let exercises = lookup(Some("abs"), Some("cardio"), None);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Mountain Climbers");
    }

    #[test]
    fn test_difficulty_filter() {
        let exercises = lookup(Some("chest"), None, Some("advanced"));
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Diamond Push-ups");
    }

    #[test]
    fn test_unfiltered_lookup_is_capped() {
        let exercises = lookup(None, None, None);
        assert_eq!(exercises.len(), MAX_RESULTS);
    }

    #[test]
    fn test_unknown_muscle_searches_all_groups() {
        // Unknown group falls back to the full table, filtered by type
        let exercises = lookup(Some("forearms"), Some("cardio"), None);
        assert!(!exercises.is_empty());
        assert!(exercises.iter().all(|e| e.exercise_type == "cardio"));
    }

    #[test]
    fn test_every_entry_has_instructions() {
        for (_, entries) in GROUPS {
            for entry in *entries {
                assert!(!entry.instructions.is_empty());
            }
        }
    }
}
