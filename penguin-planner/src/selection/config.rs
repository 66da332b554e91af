//! Selection configuration.

use std::time::Duration;

/// Configuration parameters for activity selection and the dice planner.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Upper bound of the default price filter (dollars).
    pub price_ceiling: f64,

    /// Number of faces on the planner's die.
    pub die_faces: u32,

    /// Slots with fewer remaining spots than this are shown as limited.
    pub limited_below: u32,

    /// Largest party size offered when reserving.
    pub max_party_size: u32,

    /// How often the spotlight carousel advances (seconds).
    pub spotlight_interval_secs: u64,

    /// How long the die tumbles before the destination is revealed (milliseconds).
    pub dice_settle_ms: u64,

    /// How long the splash screen stays up (milliseconds).
    pub splash_ms: u64,
}

impl SelectionConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        price_ceiling: f64,
        die_faces: u32,
        limited_below: u32,
        max_party_size: u32,
        spotlight_interval_secs: u64,
        dice_settle_ms: u64,
        splash_ms: u64,
    ) -> Self {
        Self {
            price_ceiling,
            die_faces,
            limited_below,
            max_party_size,
            spotlight_interval_secs,
            dice_settle_ms,
            splash_ms,
        }
    }

    /// Returns the spotlight interval as a Duration.
    pub fn spotlight_interval(&self) -> Duration {
        Duration::from_secs(self.spotlight_interval_secs)
    }

    /// Returns the dice settle delay as a Duration.
    pub fn dice_settle(&self) -> Duration {
        Duration::from_millis(self.dice_settle_ms)
    }

    /// Returns the splash delay as a Duration.
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    /// Returns true if `party` is a party size the reservation flow offers.
    pub fn accepts_party(&self, party: u32) -> bool {
        (1..=self.max_party_size).contains(&party)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            price_ceiling: 200.0,
            die_faces: 6,
            limited_below: 5,
            max_party_size: 6,
            spotlight_interval_secs: 5,
            dice_settle_ms: 2000,
            splash_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SelectionConfig::default();

        assert_eq!(config.price_ceiling, 200.0);
        assert_eq!(config.die_faces, 6);
        assert_eq!(config.limited_below, 5);
        assert_eq!(config.max_party_size, 6);
        assert_eq!(config.spotlight_interval_secs, 5);
        assert_eq!(config.dice_settle_ms, 2000);
        assert_eq!(config.splash_ms, 3000);
    }

    #[test]
    fn duration_methods() {
        let config = SelectionConfig::default();

        assert_eq!(config.spotlight_interval(), Duration::from_secs(5));
        assert_eq!(config.dice_settle(), Duration::from_secs(2));
        assert_eq!(config.splash(), Duration::from_secs(3));
    }

    #[test]
    fn custom_config() {
        let config = SelectionConfig::new(100.0, 8, 3, 4, 10, 500, 0);

        assert_eq!(config.price_ceiling, 100.0);
        assert_eq!(config.die_faces, 8);
        assert_eq!(config.limited_below, 3);
        assert_eq!(config.max_party_size, 4);
        assert_eq!(config.spotlight_interval(), Duration::from_secs(10));
        assert_eq!(config.dice_settle(), Duration::from_millis(500));
        assert_eq!(config.splash(), Duration::ZERO);
    }

    #[test]
    fn party_sizes() {
        let config = SelectionConfig::default();

        assert!(!config.accepts_party(0));
        assert!(config.accepts_party(1));
        assert!(config.accepts_party(6));
        assert!(!config.accepts_party(7));
    }
}
