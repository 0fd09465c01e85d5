//! Configuration types.

use crate::error::ConfigError;

/// Default registration endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://infest2k25registration.onrender.com/register";

/// Static payment page used for online payment.
pub const DEFAULT_PAYMENT_URL: &str = "https://rzp.io/rzp/qE5ylHJ";

/// Flow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// URL the registration draft is POSTed to.
    pub endpoint: String,
    /// Where the browser goes when the user picks online payment.
    pub payment_url: String,
    /// Maximum number of events a user may select.
    pub max_events: usize,
    /// Number of form sections (and step indicators).
    pub sections: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            payment_url: DEFAULT_PAYMENT_URL.to_string(),
            max_events: 3,
            sections: 3, // personal, events, payment
        }
    }
}

impl FlowConfig {
    /// Load configuration from `REGISTRATION_*` environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let endpoint = std::env::var("REGISTRATION_ENDPOINT").unwrap_or(defaults.endpoint);
        let payment_url =
            std::env::var("REGISTRATION_PAYMENT_URL").unwrap_or(defaults.payment_url);

        let max_events: usize = std::env::var("REGISTRATION_MAX_EVENTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_events);

        let sections: usize = std::env::var("REGISTRATION_SECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sections);

        Self {
            endpoint,
            payment_url,
            max_events,
            sections,
        }
    }

    /// Reject values the flow cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REGISTRATION_SECTIONS".into(),
                message: "form needs at least one section".into(),
            });
        }
        if self.max_events == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REGISTRATION_MAX_EVENTS".into(),
                message: "at least one event must be selectable".into(),
            });
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "REGISTRATION_ENDPOINT".into(),
                message: "endpoint must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_event_page() {
        let config = FlowConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.payment_url, DEFAULT_PAYMENT_URL);
        assert_eq!(config.max_events, 3);
        assert_eq!(config.sections, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    // One test for both paths so nothing else races on these variables.
    #[test]
    fn from_env_reads_overrides_and_falls_back() {
        // SAFETY: no other test reads these variables.
        unsafe {
            std::env::remove_var("REGISTRATION_ENDPOINT");
            std::env::remove_var("REGISTRATION_PAYMENT_URL");
            std::env::set_var("REGISTRATION_MAX_EVENTS", "not-a-number");
            std::env::remove_var("REGISTRATION_SECTIONS");
        }
        assert_eq!(FlowConfig::from_env(), FlowConfig::default());

        unsafe {
            std::env::set_var("REGISTRATION_ENDPOINT", "http://127.0.0.1:9000/register");
            std::env::set_var("REGISTRATION_PAYMENT_URL", "https://pay.example.com/fest");
            std::env::set_var("REGISTRATION_MAX_EVENTS", "5");
            std::env::set_var("REGISTRATION_SECTIONS", "4");
        }
        let config = FlowConfig::from_env();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/register");
        assert_eq!(config.payment_url, "https://pay.example.com/fest");
        assert_eq!(config.max_events, 5);
        assert_eq!(config.sections, 4);

        unsafe {
            std::env::remove_var("REGISTRATION_ENDPOINT");
            std::env::remove_var("REGISTRATION_PAYMENT_URL");
            std::env::remove_var("REGISTRATION_MAX_EVENTS");
            std::env::remove_var("REGISTRATION_SECTIONS");
        }
    }

    #[test]
    fn zero_sections_rejected() {
        let config = FlowConfig {
            sections: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("REGISTRATION_SECTIONS"));
    }

    #[test]
    fn zero_event_cap_rejected() {
        let config = FlowConfig {
            max_events: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_endpoint_rejected() {
        let config = FlowConfig {
            endpoint: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
