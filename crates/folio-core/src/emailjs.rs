//! EmailJS REST payload.
//!
//! The transport (an HTTP POST from the browser) lives in the web crate;
//! this module owns the request shape so it can be checked natively.

use serde::Serialize;

use crate::config::EmailJsConfig;
use crate::contact::ContactMessage;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Body of `POST /api/v1.0/email/send`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailJsConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let config = EmailJsConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk_z".to_string(),
        };
        let message = ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        };
        let value = serde_json::to_value(EmailJsRequest::new(&config, &message)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "pk_z",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hi"
                }
            })
        );
    }
}
