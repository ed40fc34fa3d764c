#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:5678/webhook/consultation"  // Local n8n instance
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://n8n.aixpt.ca/webhook/consultation"
}

pub const PORTAL_URL: &str = "https://portal.aixpt.ca";
pub const SUPPORT_EMAIL: &str = "info@aixpt.ca";
pub const SUPPORT_PHONE: &str = "+1 (514) 555-0142";

/// `tel:` form of [`SUPPORT_PHONE`].
pub fn support_phone_href() -> String {
    let digits: String = SUPPORT_PHONE
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}
