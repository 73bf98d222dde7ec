//! The chat message timeline.
//!
//! Owns the ordered, append-only list of chat entries and the "composing"
//! flag. Submitting a message schedules a delayed assistant reply through
//! the scheduler; callers pump the timeline with [`MessageTimeline::advance`]
//! so the reply lands as a later, separate event.

use std::time::Duration;

use crate::core::Scheduler;
use crate::features::chat::message::{ChatMessage, Sender};
use crate::features::chat::responder::ReplySelector;

/// Latency between a user message and the assistant's reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Greeting pre-populated as the first timeline entry.
pub const GREETING: &str = "Hi! I'm your study assistant. I can help you understand and revise \
     your lessons. What would you like to work on today?";

/// A reply waiting for its latency to elapse.
#[derive(Debug)]
struct PendingReply {
    prompt: String,
}

/// The chat timeline: message history plus composing state.
pub struct MessageTimeline {
    messages: Vec<ChatMessage>,
    composing: bool,
    next_id: u64,
    reply_delay: Duration,
    scheduler: Scheduler<PendingReply>,
    selector: Box<dyn ReplySelector>,
}

impl MessageTimeline {
    /// Create a timeline seeded with the assistant greeting.
    #[must_use]
    pub fn new(selector: Box<dyn ReplySelector>) -> Self {
        Self::with_reply_delay(selector, DEFAULT_REPLY_DELAY)
    }

    /// Create a timeline with a custom reply latency.
    #[must_use]
    pub fn with_reply_delay(selector: Box<dyn ReplySelector>, reply_delay: Duration) -> Self {
        let mut timeline = Self {
            messages: Vec::new(),
            composing: false,
            next_id: 1,
            reply_delay,
            scheduler: Scheduler::new(),
            selector,
        };
        timeline.append(Sender::Assistant, GREETING.to_string());
        timeline
    }

    /// Submit user input.
    ///
    /// Leading/trailing whitespace is trimmed; if nothing remains this is a
    /// no-op and returns `false`. Otherwise the user message is appended,
    /// the composing flag is raised, and one assistant reply is scheduled.
    ///
    /// Overlapping submissions each get their own independently scheduled
    /// reply; replies append in the order their timers complete, which may
    /// differ from submission order. In-flight replies are never cancelled.
    pub fn submit(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.append(Sender::User, trimmed.to_string());
        self.composing = true;
        self.scheduler.schedule(
            self.reply_delay,
            PendingReply {
                prompt: trimmed.to_string(),
            },
        );
        true
    }

    /// Feed elapsed time to the timeline, appending any replies that have
    /// come due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.scheduler.advance(elapsed);
        while let Some(reply) = self.scheduler.pop_due() {
            let text = self.selector.select(&reply.prompt);
            self.append(Sender::Assistant, text);
            self.composing = false;
        }
    }

    /// The message history, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether an assistant reply is pending.
    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.composing
    }

    fn append(&mut self, sender: Sender, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::chat::responder::{CannedReplies, MockReplySelector, REPLY_CATALOG};

    fn fixed_selector(reply: &'static str) -> Box<MockReplySelector> {
        let mut selector = MockReplySelector::new();
        selector.expect_select().returning(move |_| reply.to_string());
        Box::new(selector)
    }

    #[test]
    fn test_fresh_timeline_has_greeting_only() {
        let timeline = MessageTimeline::new(Box::new(CannedReplies));

        assert_eq!(timeline.messages().len(), 1);
        assert_eq!(timeline.messages()[0].sender, Sender::Assistant);
        assert_eq!(timeline.messages()[0].text, GREETING);
        assert!(!timeline.is_composing());
    }

    #[test]
    fn test_submit_appends_then_replies() {
        let mut timeline = MessageTimeline::new(fixed_selector("reply"));

        assert!(timeline.submit("What is osmosis?"));
        assert_eq!(timeline.messages().len(), 2);
        assert!(timeline.is_composing());

        timeline.advance(Duration::from_millis(1499));
        assert_eq!(timeline.messages().len(), 2);
        assert!(timeline.is_composing());

        timeline.advance(Duration::from_millis(1));
        assert_eq!(timeline.messages().len(), 3);
        assert!(!timeline.is_composing());

        let last = &timeline.messages()[2];
        assert_eq!(last.sender, Sender::Assistant);
        assert_eq!(last.text, "reply");
    }

    #[test]
    fn test_submit_trims_input() {
        let mut timeline = MessageTimeline::new(fixed_selector("reply"));

        assert!(timeline.submit("  help me revise  "));
        assert_eq!(timeline.messages()[1].text, "help me revise");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut timeline = MessageTimeline::new(Box::new(CannedReplies));

        assert!(!timeline.submit(""));
        assert!(!timeline.submit("   "));
        assert!(!timeline.submit("\t\n"));

        assert_eq!(timeline.messages().len(), 1);
        assert!(!timeline.is_composing());
        timeline.advance(Duration::from_secs(10));
        assert_eq!(timeline.messages().len(), 1);
    }

    #[test]
    fn test_message_ids_increase_in_creation_order() {
        let mut timeline = MessageTimeline::new(fixed_selector("reply"));
        timeline.submit("one");
        timeline.advance(Duration::from_secs(2));
        timeline.submit("two");
        timeline.advance(Duration::from_secs(2));

        let ids: Vec<u64> = timeline.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_overlapping_submissions_each_get_a_reply() {
        let mut timeline = MessageTimeline::new(fixed_selector("reply"));

        timeline.submit("first");
        timeline.advance(Duration::from_millis(500));
        timeline.submit("second");
        assert!(timeline.is_composing());

        // Greeting + 2 user messages + 2 replies once both timers complete.
        timeline.advance(Duration::from_secs(3));
        assert_eq!(timeline.messages().len(), 5);
        assert!(!timeline.is_composing());

        let senders: Vec<Sender> = timeline.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                Sender::Assistant,
                Sender::User,
                Sender::User,
                Sender::Assistant,
                Sender::Assistant,
            ]
        );
    }

    #[test]
    fn test_default_selector_replies_from_catalog() {
        let mut timeline = MessageTimeline::new(Box::new(CannedReplies));
        timeline.submit("anything");
        timeline.advance(Duration::from_secs(2));

        let last = &timeline.messages()[2];
        assert!(REPLY_CATALOG.contains(&last.text.as_str()));
    }
}
