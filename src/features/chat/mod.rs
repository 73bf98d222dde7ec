//! The study-assistant chat.
//!
//! Provides a simulated conversational assistant:
//! - Append-only message timeline with a composing indicator
//! - Delayed canned replies standing in for a real reasoning engine
//! - Quick prompts offered before the first user message

pub mod message;
pub mod responder;
pub mod timeline;

pub use message::{ChatMessage, Sender};
pub use responder::{CannedReplies, ReplySelector, QUICK_PROMPTS, REPLY_CATALOG};
pub use timeline::{MessageTimeline, DEFAULT_REPLY_DELAY, GREETING};
