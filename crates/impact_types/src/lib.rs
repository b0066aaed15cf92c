//! Core types for the ImpactEcho donation dashboard.
//!
//! This crate defines the records exchanged with the backend and the small
//! formatting rules shared by every dashboard front end.

use serde::{Deserialize, Serialize};

/// Endpoint serving the list of causes.
pub const CAUSES_PATH: &str = "/causes";

/// Endpoint accepting donation log entries.
pub const LOG_DONATION_PATH: &str = "/api/log-donation";

/// Navigation target after a donator logs out.
pub const LOGOUT_PATH: &str = "/donator-logout";

/// Persisted key holding the connected wallet address.
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

/// Rupees per life impacted.
pub const LIVES_UNIT: f64 = 25.0;

/// Username shown when the input is cleared.
pub const ANONYMOUS: &str = "anonymous";

/// A fundraising target served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    /// Unique cause identifier
    pub id: u64,
    /// Display title (also the key of the supported-causes set)
    pub title: String,
    /// Short description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Funding goal in rupees
    pub goal: f64,
    /// Amount raised so far in rupees
    pub raised: f64,
    /// Organisation that requested the cause, if it came through NGO approval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngo_name: Option<String>,
}

impl Cause {
    /// Create a cause with nothing raised yet.
    pub fn new(id: u64, title: impl Into<String>, goal: f64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            image: String::new(),
            goal,
            raised: 0.0,
            ngo_name: None,
        }
    }

    /// Funding progress in percent, capped at 100.
    ///
    /// A `0 / 0` ratio counts as no progress.
    pub fn progress_percent(&self) -> f64 {
        let percent = self.raised / self.goal * 100.0;
        if percent.is_nan() { 0.0 } else { percent.min(100.0) }
    }

    /// Uncapped `raised / goal` in percent, as used by the overall average.
    pub fn raw_percent(&self) -> f64 {
        self.raised / self.goal * 100.0
    }
}

/// Body of `POST /api/log-donation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationLog {
    pub wallet_address: String,
    pub cause_title: String,
    pub amount: f64,
}

/// Error body returned by the backend on failed requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    /// Message of an error body, or the trimmed raw body when it is not JSON.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ApiError>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

/// The donator using the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// Read once at startup; never changes during a session.
    pub wallet_address: String,
}

impl User {
    pub fn new(username: impl Into<String>, wallet_address: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            wallet_address: wallet_address.into(),
        }
    }

    /// Apply raw username input, falling back to [`ANONYMOUS`] when empty.
    pub fn set_username(&mut self, input: &str) {
        self.username = if input.is_empty() {
            ANONYMOUS.to_string()
        } else {
            input.to_string()
        };
    }
}

/// Lives impacted by a single donation: one per full [`LIVES_UNIT`].
pub fn lives_for_amount(amount: f64, unit: f64) -> u64 {
    if amount <= 0.0 || unit <= 0.0 {
        return 0;
    }
    (amount / unit).floor() as u64
}

/// Largest magnitude whose thousandths still fit an f64 mantissa exactly.
const EXACT_MILLIS_LIMIT: f64 = 9e12;

/// Format a rupee amount with thousands separators and up to three decimals.
///
/// `format_inr(1234.5)` yields `"₹1,234.5"`.
pub fn format_inr(amount: f64) -> String {
    let abs = amount.abs();
    let (whole, millis) = if abs < EXACT_MILLIS_LIMIT {
        let scaled = (abs * 1000.0).round() as u64;
        ((scaled / 1000).to_string(), scaled % 1000)
    } else {
        (format!("{:.0}", abs.trunc()), 0)
    };

    let mut out = String::from("₹");
    if amount < 0.0 && (whole != "0" || millis > 0) {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    if millis > 0 {
        let fraction = format!("{millis:03}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Line shown in the recent-donations log.
pub fn recent_donation_line(cause_title: &str, amount: f64) -> String {
    format!("Funded {} to \"{}\"", format_inr(amount), cause_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_deserialization() {
        let json = r#"{
            "id": 1,
            "title": "Clean Water",
            "description": "Wells for villages",
            "image": "https://example.org/water.jpg",
            "goal": 1000,
            "raised": 200
        }"#;

        let cause: Cause = serde_json::from_str(json).unwrap();
        assert_eq!(cause.id, 1);
        assert_eq!(cause.title, "Clean Water");
        assert!((cause.goal - 1000.0).abs() < f64::EPSILON);
        assert!((cause.raised - 200.0).abs() < f64::EPSILON);
        assert_eq!(cause.ngo_name, None);
    }

    #[test]
    fn test_cause_with_ngo_name() {
        let json = r#"{"id":2,"title":"Books","description":"","image":"","goal":50,"raised":0,"ngo_name":"Read India"}"#;
        let cause: Cause = serde_json::from_str(json).unwrap();
        assert_eq!(cause.ngo_name.as_deref(), Some("Read India"));
    }

    #[test]
    fn test_progress_percent_capped() {
        let mut cause = Cause::new(1, "Clean Water", 1000.0);
        cause.raised = 200.0;
        assert!((cause.progress_percent() - 20.0).abs() < 1e-9);

        cause.raised = 5000.0;
        assert!((cause.progress_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_percent_zero_over_zero() {
        let cause = Cause::new(1, "Empty", 0.0);
        assert_eq!(cause.progress_percent(), 0.0);
    }

    #[test]
    fn test_donation_log_wire_shape() {
        let log = DonationLog {
            wallet_address: "0xabc".to_string(),
            cause_title: "Clean Water".to_string(),
            amount: 300.0,
        };

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["wallet_address"], "0xabc");
        assert_eq!(json["cause_title"], "Clean Water");
        assert_eq!(json["amount"], 300.0);
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            ApiError::message_from_body(r#"{"error": "Missing required fields"}"#),
            "Missing required fields"
        );
        assert_eq!(ApiError::message_from_body("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_set_username_falls_back_to_anonymous() {
        let mut user = User::new("Asha", "0xabc");
        user.set_username("");
        assert_eq!(user.username, ANONYMOUS);

        user.set_username("Ravi");
        assert_eq!(user.username, "Ravi");
        assert_eq!(user.wallet_address, "0xabc");
    }

    #[test]
    fn test_lives_for_amount() {
        assert_eq!(lives_for_amount(300.0, LIVES_UNIT), 12);
        assert_eq!(lives_for_amount(24.99, LIVES_UNIT), 0);
        assert_eq!(lives_for_amount(50.0, LIVES_UNIT), 2);
        assert_eq!(lives_for_amount(-50.0, LIVES_UNIT), 0);
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(300.0), "₹300");
        assert_eq!(format_inr(1234.5), "₹1,234.5");
        assert_eq!(format_inr(1_000_000.0), "₹1,000,000");
        assert_eq!(format_inr(12.3456), "₹12.346");
        assert_eq!(format_inr(-5.0), "₹-5");
        assert_eq!(format_inr(0.9996), "₹1");
    }

    #[test]
    fn test_format_inr_beyond_integer_range() {
        assert_eq!(format_inr(1e20), "₹100,000,000,000,000,000,000");
        assert_eq!(format_inr(-1e20), "₹-100,000,000,000,000,000,000");

        let huge = format_inr(1e300);
        assert!(huge.starts_with("₹1,000,000,000"));
        assert_eq!(huge.matches(',').count(), 100);
    }

    #[test]
    fn test_recent_donation_line() {
        assert_eq!(
            recent_donation_line("Clean Water", 300.0),
            "Funded ₹300 to \"Clean Water\""
        );
    }
}
