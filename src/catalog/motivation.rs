//! Motivation text tables
//!
//! Quotes, encouragement lines, and success tips, with context-sensitive
//! selection for common low-motivation phrasings.

use rand::seq::SliceRandom;

/// Motivational quotes
pub const QUOTES: &[&str] = &[
    "The only bad workout is the one that didn't happen.",
    "Your body can do it. It's your mind you need to convince.",
    "Strength doesn't come from what you can do. It comes from overcoming the things you once thought you couldn't.",
    "Don't stop when you're tired. Stop when you're done.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Push yourself, because no one else is going to do it for you.",
    "Take care of your body. It's the only place you have to live.",
    "Health is not about the weight you lose, but about the life you gain.",
    "You don't have to be perfect, you just have to be better than you were yesterday.",
    "Progress, not perfection.",
    "Small changes can make a big difference.",
    "Consistency is key to achieving your health goals.",
    "Eat clean, train hard, stay healthy.",
    "Good nutrition is the foundation of a healthy lifestyle.",
    "Every meal is a chance to nourish your body.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Discipline is choosing between what you want now and what you want most.",
    "The best time to plant a tree was 20 years ago. The second best time is now.",
    "It's not about being perfect, it's about being consistent.",
    "Love yourself enough to live a healthy lifestyle.",
];

/// Short encouragement lines
pub const ENCOURAGEMENTS: &[&str] = &[
    "You've got this! Every step forward is progress.",
    "Keep going! Your future self will thank you.",
    "Don't give up now! You're closer than you think.",
    "Stay strong! Champions are made in moments of doubt.",
    "Push through! Great things never come from comfort zones.",
    "Keep fighting! Your dedication will pay off.",
    "Stay focused! Diamonds are formed under pressure.",
    "New day, new opportunities! You can do this.",
    "Stay on track! Every healthy choice matters.",
    "Power through! You're stronger than your excuses.",
];

/// Practical success tips
pub const SUCCESS_TIPS: &[&str] = &[
    "Set small, achievable goals and celebrate each victory.",
    "Create a routine and stick to it - consistency is key.",
    "Track your progress - what gets measured gets managed.",
    "Find a workout buddy for accountability and motivation.",
    "Create an energizing playlist to pump you up.",
    "Educate yourself about fitness and nutrition.",
    "Practice mindfulness and listen to your body.",
    "Prioritize sleep - recovery is part of the process.",
    "Meal prep to set yourself up for success.",
    "Reward yourself for reaching milestones (non-food rewards).",
];

/// Pick a random quote
pub fn random_quote() -> &'static str {
    pick(QUOTES)
}

/// Pick a random encouragement line
pub fn random_encouragement() -> &'static str {
    pick(ENCOURAGEMENTS)
}

/// Pick a random success tip
pub fn random_tip() -> &'static str {
    pick(SUCCESS_TIPS)
}

fn pick(table: &[&'static str]) -> &'static str {
    let mut rng = rand::thread_rng();
    // Tables are non-empty constants
    table.choose(&mut rng).copied().unwrap_or("Keep going!")
}

/// Extra line tailored to how the user described their state, if they did
pub fn context_note(context: &str) -> Option<&'static str> {
    let lower = context.to_lowercase();
    if lower.contains("tired") || lower.contains("exhausted") {
        Some("Remember: rest is part of the journey. Listen to your body and take care of yourself.")
    } else if lower.contains("lazy") || lower.contains("unmotivated") {
        Some("Start small today. Even 5 minutes of movement is better than none.")
    } else if lower.contains("give up") || lower.contains("quit") {
        Some("Don't quit. Remember why you started - every champion was once a beginner who refused to give up.")
    } else if lower.contains("discouraged") || lower.contains("sad") {
        Some("Be patient with yourself. Progress isn't always linear, but every step counts.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_nonempty() {
        assert!(!QUOTES.is_empty());
        assert!(!ENCOURAGEMENTS.is_empty());
        assert!(!SUCCESS_TIPS.is_empty());
    }

    #[test]
    fn test_random_selection_comes_from_table() {
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote()));
            assert!(ENCOURAGEMENTS.contains(&random_encouragement()));
            assert!(SUCCESS_TIPS.contains(&random_tip()));
        }
    }

    #[test]
    fn test_context_note() {
        assert!(context_note("I'm so tired today").is_some());
        assert!(context_note("feeling lazy").is_some());
        assert!(context_note("I want to give up").is_some());
        assert!(context_note("ready to train").is_none());
    }
}
