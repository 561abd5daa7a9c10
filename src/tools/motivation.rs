//! Motivation tool
//!
//! Assembles a motivation reply from the catalog tables, tailored to the
//! user's phrasing when it hints at how they're feeling.

use serde::Serialize;

use crate::catalog::motivation as catalog;

/// A motivation response
#[derive(Debug, Serialize)]
pub struct MotivationReply {
    pub quote: &'static str,
    pub encouragement: &'static str,
    pub tip: &'static str,
    pub reply: String,
}

/// Build a motivation reply, optionally tailored to the user's message
pub fn boost(context: Option<&str>) -> MotivationReply {
    let quote = catalog::random_quote();
    let encouragement = catalog::random_encouragement();
    let tip = catalog::random_tip();

    let mut reply = format!("Motivation Boost\n\n{}\n", quote);
    if let Some(note) = context.and_then(catalog::context_note) {
        reply.push('\n');
        reply.push_str(note);
        reply.push('\n');
    }
    reply.push_str(&format!(
        "\nQuick encouragement: {}\n\nSuccess tip: {}",
        encouragement, tip
    ));

    MotivationReply {
        quote,
        encouragement,
        tip,
        reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_includes_all_parts() {
        let reply = boost(None);
        assert!(reply.reply.contains(reply.quote));
        assert!(reply.reply.contains(reply.encouragement));
        assert!(reply.reply.contains(reply.tip));
    }

    #[test]
    fn test_boost_with_context() {
        let reply = boost(Some("I'm too tired to train"));
        assert!(reply.reply.contains("rest is part of the journey"));
    }
}
