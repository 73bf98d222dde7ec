//! Assistant reply selection.
//!
//! The assistant is a local stand-in: it picks a canned reply rather than
//! calling out to a reasoning engine. The [`ReplySelector`] trait is the
//! seam where a real engine could be plugged in without touching the
//! timeline.

use rand::Rng;

/// Replies the canned assistant can choose from.
pub const REPLY_CATALOG: [&str; 5] = [
    "Great question! Let's break this down into simpler pieces so it's easier to follow...",
    "Based on your recent progress, I'd focus on these key points first...",
    "To really understand this lesson, we can work through it one step at a time...",
    "Excellent! That shows you have the fundamentals down. Let's dig a little deeper...",
    "It looks like this topic could use another pass. Here's a more detailed walkthrough...",
];

/// Suggested prompts offered before the first user message.
pub const QUICK_PROMPTS: [&str; 4] = [
    "Explain the last maths lesson",
    "What are the most important English grammar rules?",
    "Help me revise the science lesson",
    "How do I solve this problem?",
];

/// Produces the assistant's reply to a user prompt.
#[cfg_attr(test, mockall::automock)]
pub trait ReplySelector {
    /// Select a reply for `prompt`.
    fn select(&mut self, prompt: &str) -> String;
}

/// Default selector: a uniform-random pick from [`REPLY_CATALOG`].
///
/// The prompt text does not influence the choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedReplies;

impl ReplySelector for CannedReplies {
    fn select(&mut self, _prompt: &str) -> String {
        let index = rand::thread_rng().gen_range(0..REPLY_CATALOG.len());
        REPLY_CATALOG[index].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_returns_catalog_member() {
        let mut selector = CannedReplies;
        for prompt in ["", "hi", "اشرح لي درس الرياضيات", "a much longer prompt"] {
            let reply = selector.select(prompt);
            assert!(REPLY_CATALOG.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_catalogs_are_nonempty_text() {
        assert!(REPLY_CATALOG.iter().all(|r| !r.trim().is_empty()));
        assert!(QUICK_PROMPTS.iter().all(|p| !p.trim().is_empty()));
    }
}
