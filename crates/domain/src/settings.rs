use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-wide return policy shown to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPolicy {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub content: String,
    pub last_updated: DateTime<Utc>,
}

impl Default for ReturnPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            last_updated: Utc::now(),
        }
    }
}

/// Single settings record; replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    #[serde(default)]
    pub return_policy: ReturnPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_disabled_and_empty() {
        let s = ShopSettings::default();
        assert!(!s.return_policy.enabled);
        assert!(s.return_policy.content.is_empty());
    }

    #[test]
    fn settings_round_trip() {
        let s = ShopSettings {
            return_policy: ReturnPolicy {
                enabled: true,
                content: "30 days with receipt".to_string(),
                last_updated: Utc::now(),
            },
        };

        let json = serde_json::to_string(&s).unwrap();
        let back: ShopSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
