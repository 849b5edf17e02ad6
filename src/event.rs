//! Ephemeral click-event record handed to the dispatch hook.
//! No identity, no persistence, no lifecycle beyond the single call.

use serde::{Deserialize, Serialize};

/// Page section the click originated from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Catalog,
    Activities,
    Support,
    Verification,
}

/// How the link is presented. Wire value is lowercase ("cta" | "default").
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Cta,
    #[default]
    Default,
}

/// One user-interaction event, camelCase on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub item_name: String,
    pub section: Section,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_campaign: Option<String>,
    #[serde(default)]
    pub link_type: LinkType,
}

impl ClickEvent {
    pub fn new(item_name: impl Into<String>, section: Section, href: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            section,
            href: href.into(),
            internal_campaign: None,
            link_type: LinkType::default(),
        }
    }

    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.internal_campaign = Some(campaign.into());
        self
    }

    pub fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }
}

/// Caller identity forwarded to the marketing webhook. Never sent to the
/// click-tracking destinations.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl UserData {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            account_id: None,
            company: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_camel_case() {
        let event = ClickEvent::new("Getting Started", Section::Catalog, "/catalog/start")
            .with_campaign("spring-launch")
            .with_link_type(LinkType::Cta);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["itemName"], "Getting Started");
        assert_eq!(json["section"], "Catalog");
        assert_eq!(json["href"], "/catalog/start");
        assert_eq!(json["internalCampaign"], "spring-launch");
        assert_eq!(json["linkType"], "cta");
    }

    #[test]
    fn campaign_omitted_when_absent() {
        let event = ClickEvent::new("Docs", Section::Support, "/docs");
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("internalCampaign").is_none());
        assert_eq!(json["linkType"], "default");
    }

    #[test]
    fn link_type_defaults_on_deserialize() {
        let event: ClickEvent = serde_json::from_str(
            r#"{"itemName":"Labs","section":"Activities","href":"/labs"}"#,
        )
        .unwrap();
        assert_eq!(event.link_type, LinkType::Default);
        assert_eq!(event.section, Section::Activities);
    }
}
