//! Engine configuration and environment variable handling.

use std::env;

use chrono_tz::Tz;

/// Default display timezone when `QUORUM_TIMEZONE` is not set.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Default primary attendance threshold for the contiguous-block search.
pub const DEFAULT_MIN_BLOCK_PERCENTAGE: f64 = 50.0;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Timezone used when rendering slot date/time display strings.
    /// Display-only: the numeric model works in epoch seconds throughout.
    pub timezone: Tz,
    /// Primary attendance percentage a slot must reach to join a block.
    /// The block search relaxes below this on its own when nothing qualifies.
    pub min_block_percentage: f64,
}

impl EngineConfig {
    /// Create a new engine configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `QUORUM_TIMEZONE` (optional, default: `America/New_York`): IANA
    ///   timezone name used for display formatting
    /// - `QUORUM_MIN_BLOCK_PERCENTAGE` (optional, default: 50): primary
    ///   block-search threshold, 0-100
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let timezone = match env::var("QUORUM_TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|_| format!("QUORUM_TIMEZONE '{}' is not a valid IANA timezone", name))?,
            Err(_) => DEFAULT_TIMEZONE,
        };

        let min_block_percentage = match env::var("QUORUM_MIN_BLOCK_PERCENTAGE") {
            Ok(raw) => {
                let value: f64 = raw.parse().map_err(|_| {
                    "QUORUM_MIN_BLOCK_PERCENTAGE must be a number between 0 and 100".to_string()
                })?;
                if !(0.0..=100.0).contains(&value) {
                    return Err(
                        "QUORUM_MIN_BLOCK_PERCENTAGE must be a number between 0 and 100"
                            .to_string(),
                    );
                }
                value
            }
            Err(_) => DEFAULT_MIN_BLOCK_PERCENTAGE,
        };

        Ok(Self {
            timezone,
            min_block_percentage,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            min_block_percentage: DEFAULT_MIN_BLOCK_PERCENTAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.min_block_percentage, 50.0);
    }
}
