//! Chat flow
//!
//! The end-to-end message pipeline: await-state handling, intent
//! classification, and dispatch to the per-intent handlers.

use std::sync::Mutex;

use serde::Serialize;

use crate::analysis::intent::{self, Intent};
use crate::api::ApiClient;
use crate::tools::{bmi, exercise, motivation, nutrition};

/// Conversation state carried between chat messages
#[derive(Debug, Default)]
pub struct ConversationState {
    /// Set after the assistant asked for height and weight; the next message
    /// is tried as a measurement before intent classification.
    pub awaiting_measurements: bool,
}

/// A chat response
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// Intent the message was routed to
    pub intent: &'static str,
    pub reply: String,
}

pub const EMPTY_PROMPT: &str = "Please enter a message!";

const WELCOME: &str = "Hello! Welcome to FitCoach, your fitness assistant.\n\n\
    I can help you with:\n\
    - Workout advice: exercise recommendations by muscle group\n\
    - Nutrition info: food calories and nutrients\n\
    - BMI calculation: check your body mass index\n\
    - Motivation: quotes and practical tips\n\n\
    What would you like to know about today?";

const HELP: &str = "I'm not sure how to help with that.\n\n\
    I can assist you with:\n\
    - Workouts: \"Show me chest exercises\" or \"I want to build muscle\"\n\
    - Nutrition: \"Calories in chicken breast\"\n\
    - BMI: \"Calculate my BMI\" or \"I am 170 cm tall and weigh 70 kg\"\n\
    - Motivation: \"I need motivation\"\n\n\
    Please try rephrasing your question.";

const BMI_REQUEST_PROMPT: &str = "I'd be happy to calculate your BMI! \
    Please tell me your height and weight.\n\n\
    Example: \"I am 170 cm tall and weigh 70 kg\"\n\
    or \"5 feet 8 inches, 150 pounds\"";

/// Process one chat message and produce a reply.
///
/// Never fails: unparseable or unrecognized input produces a clarification
/// prompt, not an error.
pub async fn process_message(
    api: &ApiClient,
    conversation: &Mutex<ConversationState>,
    message: &str,
) -> ChatReply {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return ChatReply {
            intent: Intent::Unknown.as_str(),
            reply: EMPTY_PROMPT.to_string(),
        };
    }

    // A pending measurement request takes priority over intent detection
    let awaiting = { conversation.lock().unwrap().awaiting_measurements };
    if awaiting {
        return match bmi::analyze_text(trimmed) {
            Some(analysis) => {
                conversation.lock().unwrap().awaiting_measurements = false;
                ChatReply {
                    intent: Intent::Bmi.as_str(),
                    reply: bmi::format_reply(&analysis),
                }
            }
            None => ChatReply {
                intent: Intent::Bmi.as_str(),
                reply: bmi::MEASUREMENT_PROMPT.to_string(),
            },
        };
    }

    let detected = intent::classify(trimmed);
    tracing::debug!(intent = detected.as_str(), "chat message classified");

    let reply = match detected {
        Intent::Greeting => WELCOME.to_string(),
        Intent::Bmi => match bmi::analyze_text(trimmed) {
            Some(analysis) => bmi::format_reply(&analysis),
            None => {
                conversation.lock().unwrap().awaiting_measurements = true;
                BMI_REQUEST_PROMPT.to_string()
            }
        },
        Intent::Nutrition => nutrition::lookup(api, trimmed).await.reply,
        Intent::Workout => exercise::handle_message(api, trimmed).await,
        Intent::Motivation => motivation::boost(Some(trimmed)).reply,
        Intent::Unknown => HELP.to_string(),
    };

    ChatReply {
        intent: detected.as_str(),
        reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_api() -> ApiClient {
        // Keyless client: nutrition/exercise lookups take the fallback path
        ApiClient::new(crate::api::client::DEFAULT_BASE_URL, None)
    }

    #[tokio::test]
    async fn test_empty_message() {
        let conversation = Mutex::new(ConversationState::default());
        let reply = process_message(&test_api(), &conversation, "   ").await;
        assert_eq!(reply.reply, EMPTY_PROMPT);
    }

    #[tokio::test]
    async fn test_greeting() {
        let conversation = Mutex::new(ConversationState::default());
        let reply = process_message(&test_api(), &conversation, "hello").await;
        assert_eq!(reply.intent, "greeting");
        assert!(reply.reply.contains("FitCoach"));
    }

    #[tokio::test]
    async fn test_bmi_with_measurements() {
        let conversation = Mutex::new(ConversationState::default());
        let reply =
            process_message(&test_api(), &conversation, "I am 170 cm tall and weigh 70 kg").await;
        assert_eq!(reply.intent, "bmi");
        assert!(reply.reply.contains("24.2"));
        assert!(reply.reply.contains("Normal weight"));
        assert!(!conversation.lock().unwrap().awaiting_measurements);
    }

    #[tokio::test]
    async fn test_bmi_without_measurements_sets_await_flag() {
        let conversation = Mutex::new(ConversationState::default());
        let reply = process_message(&test_api(), &conversation, "calculate my bmi").await;
        assert_eq!(reply.intent, "bmi");
        assert!(reply.reply.contains("170 cm"));
        assert!(reply.reply.contains("5 feet 8 inches"));
        assert!(conversation.lock().unwrap().awaiting_measurements);
    }

    #[tokio::test]
    async fn test_awaited_measurements_are_parsed_before_intent() {
        let conversation = Mutex::new(ConversationState {
            awaiting_measurements: true,
        });
        let reply =
            process_message(&test_api(), &conversation, "5 feet 8 inches, 150 pounds").await;
        assert_eq!(reply.intent, "bmi");
        assert!(reply.reply.contains("22.8"));
        assert!(!conversation.lock().unwrap().awaiting_measurements);
    }

    #[tokio::test]
    async fn test_awaited_measurements_retry_on_parse_failure() {
        let conversation = Mutex::new(ConversationState {
            awaiting_measurements: true,
        });
        let reply = process_message(&test_api(), &conversation, "no idea").await;
        assert_eq!(reply.intent, "bmi");
        assert!(reply.reply.contains("I am 170 cm tall and weigh 70 kg"));
        // Still waiting for a usable measurement
        assert!(conversation.lock().unwrap().awaiting_measurements);
    }

    #[tokio::test]
    async fn test_motivation() {
        let conversation = Mutex::new(ConversationState::default());
        let reply = process_message(&test_api(), &conversation, "I need motivation").await;
        assert_eq!(reply.intent, "motivation");
        assert!(reply.reply.contains("Motivation Boost"));
    }

    #[tokio::test]
    async fn test_unknown() {
        let conversation = Mutex::new(ConversationState::default());
        let reply = process_message(&test_api(), &conversation, "what time is it").await;
        assert_eq!(reply.intent, "unknown");
        assert!(reply.reply.contains("rephrasing"));
    }
}
