//! Site-wide settings singleton.

use serde::{Deserialize, Serialize};

/// Key of the single settings row.
pub const SETTINGS_KEY: &str = "global";

/// Site-wide settings, stored as a single JSONB document.
///
/// Read-through-create: the first read materializes the row with defaults.
/// Publicly readable (the marketing pages need it); admin-writable only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub tagline: String,
    pub contact_email: String,
    pub instagram_url: Option<String>,
    pub behance_url: Option<String>,
    /// Hero image URL for the home page.
    pub hero_image: Option<String>,
    /// Whether the shop section is visible on the public site.
    pub shop_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Mado Creatives".to_string(),
            tagline: "Visual stories, crafted.".to_string(),
            contact_email: "hello@madocreatives.com".to_string(),
            instagram_url: None,
            behance_url: None,
            hero_image: None,
            shop_enabled: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_json() {
        let settings = SiteSettings::default();
        let value = serde_json::to_value(&settings).unwrap();
        let back: SiteSettings = serde_json::from_value(value).unwrap();
        assert_eq!(back.site_title, "Mado Creatives");
        assert!(back.shop_enabled);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let value = serde_json::to_value(SiteSettings::default()).unwrap();
        assert!(value.get("siteTitle").is_some());
        assert!(value.get("contactEmail").is_some());
        assert!(value.get("site_title").is_none());
    }
}
