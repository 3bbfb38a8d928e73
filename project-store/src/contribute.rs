//! Mocked contribution flow. No funds move and no transaction is built.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the mock "transaction" takes before reporting success.
pub const MOCK_SETTLE_DELAY: Duration = Duration::from_millis(600);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributionRequest {
    /// Amount in ALGO, as typed.
    pub amount: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContributionStatus {
    NeedsAmount,
    InvalidAmount { amount: String },
    Preparing { amount: f64 },
    Succeeded { amount: f64 },
}

impl ContributionStatus {
    pub fn message(&self) -> String {
        match self {
            ContributionStatus::NeedsAmount => "Enter an amount in ALGO.".into(),
            ContributionStatus::InvalidAmount { amount } => {
                format!("'{amount}' is not a valid ALGO amount.")
            }
            ContributionStatus::Preparing { .. } => "Preparing transaction (mock)…".into(),
            ContributionStatus::Succeeded { .. } => {
                "Success! (mock) – integrate Algorand tx + token mint/transfer here.".into()
            }
        }
    }

    /// Whether the flow stops here without reaching the mock settlement.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            ContributionStatus::NeedsAmount | ContributionStatus::InvalidAmount { .. }
        )
    }
}

/// First step of the flow: checks the amount and reports `Preparing`.
pub fn begin_contribution(request: &ContributionRequest) -> ContributionStatus {
    let raw = request.amount.trim();
    if raw.is_empty() {
        return ContributionStatus::NeedsAmount;
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => ContributionStatus::Preparing { amount },
        _ => ContributionStatus::InvalidAmount {
            amount: raw.to_string(),
        },
    }
}

/// Second step, run once [`MOCK_SETTLE_DELAY`] has elapsed.
pub fn settle(status: ContributionStatus) -> ContributionStatus {
    match status {
        ContributionStatus::Preparing { amount } => ContributionStatus::Succeeded { amount },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: &str) -> ContributionRequest {
        ContributionRequest {
            amount: amount.into(),
            note: String::new(),
        }
    }

    #[test]
    fn empty_amount_asks_for_one() {
        let status = begin_contribution(&request("  "));
        assert_eq!(status, ContributionStatus::NeedsAmount);
        assert_eq!(status.message(), "Enter an amount in ALGO.");
        assert!(status.is_rejected());
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(begin_contribution(&request("-1")).is_rejected());
        assert!(begin_contribution(&request("ten")).is_rejected());
        assert!(begin_contribution(&request("NaN")).is_rejected());
    }

    #[test]
    fn valid_amount_prepares_then_settles() {
        let status = begin_contribution(&request("10.5"));
        assert_eq!(status, ContributionStatus::Preparing { amount: 10.5 });
        assert_eq!(status.message(), "Preparing transaction (mock)…");

        let done = settle(status);
        assert_eq!(done, ContributionStatus::Succeeded { amount: 10.5 });
        assert!(done.message().starts_with("Success! (mock)"));
    }

    #[test]
    fn settle_leaves_rejections_alone() {
        assert_eq!(settle(ContributionStatus::NeedsAmount), ContributionStatus::NeedsAmount);
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let v = serde_json::to_value(ContributionStatus::Succeeded { amount: 2.0 }).expect("json");
        assert_eq!(v, serde_json::json!({"state": "succeeded", "amount": 2.0}));
    }
}
