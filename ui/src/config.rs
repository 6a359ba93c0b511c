//! Site-wide configuration embedded from `data/site.json`.
//!
//! The file is deserialized once on first access. A malformed or missing file
//! is logged and replaced by [`SiteConfig::default`] so pages keep rendering.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{embedded_source, CatalogError};

const SITE_FILE: &str = "site.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub resort_name: String,
    pub contact: ContactDetails,
    pub currency: Currency,
    pub check_in_time: String,
    pub check_out_time: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub forms: FormSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub address_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Delay before the local submission stub acknowledges a request.
    pub simulated_latency_ms: u64,
    pub max_stay_nights: u32,
    pub max_adults: u32,
    pub max_children: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resort_name: "Tidewater Bay Resort".into(),
            contact: ContactDetails {
                phone: String::new(),
                email: String::new(),
                address_lines: Vec::new(),
                map_url: None,
            },
            currency: Currency {
                code: "USD".into(),
                symbol: "$".into(),
            },
            check_in_time: "15:00".into(),
            check_out_time: "12:00".into(),
            social: Vec::new(),
            forms: FormSettings::default(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1200,
            max_stay_nights: 30,
            max_adults: 4,
            max_children: 4,
        }
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match load() {
    Ok(config) => config,
    Err(err) => {
        tracing::error!("site configuration unavailable ({err}); using defaults");
        SiteConfig::default()
    }
});

/// Global site configuration.
pub fn site() -> &'static SiteConfig {
    &SITE
}

fn load() -> Result<SiteConfig, CatalogError> {
    let raw = embedded_source(SITE_FILE)?;
    serde_json::from_slice(&raw).map_err(|source| CatalogError::Malformed {
        name: SITE_FILE.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_config_parses() {
        let config = load().expect("site.json should deserialize");
        assert!(!config.resort_name.is_empty());
        assert!(config.contact.email.contains('@'));
        assert!(config.forms.max_stay_nights > 0);
        assert!(config.forms.max_adults >= 1);
    }

    #[test]
    fn global_accessor_matches_embedded_file() {
        assert_eq!(site(), &load().unwrap());
    }
}
