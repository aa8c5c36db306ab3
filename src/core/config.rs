//! Session configuration.
//!
//! Callers configure a session at startup by providing a `SessionConfig`.
//! Everything has a default, so `SessionConfig::default()` gives the
//! ordinary entropy-seeded game against "CPU".

use serde::{Deserialize, Serialize};

/// Configuration for a [`GameSession`](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the opponent RNG.
    /// `None` draws a fresh seed from the OS on every run.
    pub seed: Option<u64>,

    /// Name shown for the human side.
    pub player_name: String,

    /// Name shown for the computer side.
    pub opponent_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: "Player".to_string(),
            opponent_name: "CPU".to_string(),
        }
    }
}

impl SessionConfig {
    /// Use a fixed seed so opponent draws are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the human side's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the computer side's display name.
    #[must_use]
    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.player_name, "Player");
        assert_eq!(config.opponent_name, "CPU");
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(123)
            .with_player_name("Ana")
            .with_opponent_name("Bot");

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.player_name, "Ana");
        assert_eq!(config.opponent_name, "Bot");
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.opponent_name, "CPU");
    }
}
