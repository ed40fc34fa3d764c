/// Names cycled under the hero, six at a time.
pub static INTEGRATIONS: &[&str] = &[
    "HubSpot",
    "Salesforce",
    "Microsoft Dynamics",
    "Pipedrive",
    "Zoho CRM",
    "Slack",
    "Jira",
    "Asana",
    "Trello",
    "QuickBooks",
    "Xero",
    "Google Sheets",
    "Outlook",
    "Gmail",
    "WhatsApp",
    "Twilio",
    "Zapier",
    "Make",
    "Aircall",
    "Freshdesk",
    "Zendesk",
    MORE_INTEGRATIONS,
];

/// Trailing entry rendered with emphasis instead of as a product name.
pub const MORE_INTEGRATIONS: &str = "+ des centaines d'autres";

#[derive(Debug, PartialEq)]
pub struct Logo {
    pub id: &'static str,
    pub name: &'static str,
    pub image: Option<&'static str>,
}

pub static LOGOS: &[Logo] = &[
    Logo { id: "hubspot", name: "HubSpot", image: None },
    Logo { id: "salesforce", name: "Salesforce", image: None },
    Logo { id: "microsoft-teams", name: "Microsoft Teams", image: None },
    Logo { id: "slack", name: "Slack", image: None },
    Logo { id: "zapier", name: "Zapier", image: None },
    Logo { id: "google-workspace", name: "Google Workspace", image: None },
    Logo { id: "notion", name: "Notion", image: None },
    Logo { id: "airtable", name: "Airtable", image: None },
    Logo { id: "trello", name: "Trello", image: None },
    Logo { id: "asana", name: "Asana", image: None },
];

/// Up to two uppercase initials, one per word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
