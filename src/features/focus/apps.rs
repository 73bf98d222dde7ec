//! The blockable-app roster.

use serde::{Deserialize, Serialize};

/// An app that can be blocked while studying.
///
/// The block flag is an in-memory toggle only; nothing is enforced at the
/// OS level. `icon` and `time_spent` are opaque display data supplied with
/// the roster seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedApp {
    /// Display name.
    pub name: String,
    /// Decorative icon (emoji or similar).
    pub icon: String,
    /// Whether the app is currently blocked.
    #[serde(default)]
    pub blocked: bool,
    /// Usage-today display string, supplied externally.
    pub time_spent: String,
}

impl BlockedApp {
    /// Create an unblocked roster entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        time_spent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            blocked: false,
            time_spent: time_spent.into(),
        }
    }

    /// Create an entry with an explicit block flag.
    #[must_use]
    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }
}

/// The default social-media roster shown on first run.
#[must_use]
pub fn default_apps() -> Vec<BlockedApp> {
    vec![
        BlockedApp::new("Facebook", "📘", "2h 15m"),
        BlockedApp::new("Instagram", "📷", "1h 45m").with_blocked(true),
        BlockedApp::new("TikTok", "🎵", "3h 20m").with_blocked(true),
        BlockedApp::new("Snapchat", "👻", "45m"),
        BlockedApp::new("Twitter", "🐦", "1h 10m").with_blocked(true),
        BlockedApp::new("YouTube", "📺", "2h 30m"),
        BlockedApp::new("WhatsApp", "💬", "1h 5m"),
        BlockedApp::new("Telegram", "✈️", "30m"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_size() {
        assert_eq!(default_apps().len(), 8);
    }

    #[test]
    fn test_blocked_defaults_to_false_when_missing() {
        let yaml = "name: Facebook\nicon: \"📘\"\ntime_spent: 2h 15m\n";
        let app: BlockedApp = serde_yaml::from_str(yaml).unwrap();
        assert!(!app.blocked);
    }
}
