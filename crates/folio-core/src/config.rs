//! Site configuration.
//!
//! Every field has a default matching the deployed site, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Credentials for the hosted EmailJS relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS "public key", sent as `user_id`
    pub public_key: String,
}

impl EmailJsConfig {
    /// Build from optional parts, `None` unless all three are non-empty
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }
        Some(Self {
            service_id: non_empty(service_id)?.to_string(),
            template_id: non_empty(template_id)?.to_string(),
            public_key: non_empty(public_key)?.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed navbar, subtracted from scroll targets
    pub header_offset: f64,
    /// Offset after which the navbar is drawn in its scrolled style
    pub scrolled_threshold: f64,
    /// Offset after which the back-to-top button appears
    pub back_to_top_threshold: f64,
    /// Half-thickness of the midline band used for active-section ranking
    pub midline_half_band: f64,
    pub deferred_scroll_timeout_ms: u32,
    pub deferred_scroll_poll_ms: u32,
    /// Settle delay before restoring the remembered section
    pub restore_delay_ms: u32,
    /// Minimum spacing between two contact submissions
    pub contact_cooldown_ms: i64,
    pub typewriter_tick_ms: u32,
    pub emailjs: Option<EmailJsConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scrolled_threshold: 10.0,
            back_to_top_threshold: 300.0,
            midline_half_band: 0.0,
            deferred_scroll_timeout_ms: 1500,
            deferred_scroll_poll_ms: 50,
            restore_delay_ms: 300,
            contact_cooldown_ms: 60_000,
            typewriter_tick_ms: 50,
            emailjs: None,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "header_offset must be a non-negative number, got {}",
                self.header_offset
            )));
        }
        if self.midline_half_band < 0.0 {
            return Err(FolioError::InvalidConfig(
                "midline_half_band must not be negative".to_string(),
            ));
        }
        if self.deferred_scroll_poll_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "deferred_scroll_poll_ms must be at least 1".to_string(),
            ));
        }
        if self.contact_cooldown_ms < 0 {
            return Err(FolioError::InvalidConfig(
                "contact_cooldown_ms must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_emailjs(mut self, emailjs: Option<EmailJsConfig>) -> Self {
        self.emailjs = emailjs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"header_offset": 64, "restore_delay_ms": 500}"#)
            .unwrap();
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.restore_delay_ms, 500);
        assert_eq!(config.contact_cooldown_ms, 60_000);
    }

    #[test]
    fn test_rejects_negative_offset() {
        let err = SiteConfig::from_json(r#"{"header_offset": -1}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_emailjs_requires_all_parts() {
        assert!(EmailJsConfig::from_parts(Some("svc"), Some("tpl"), None).is_none());
        assert!(EmailJsConfig::from_parts(Some("svc"), Some(" "), Some("key")).is_none());
        let cfg = EmailJsConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap();
        assert_eq!(cfg.public_key, "key");
    }
}
