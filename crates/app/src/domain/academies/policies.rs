//! Academy Policy Settings
//!
//! Policies are stored as a free-form JSON document edited by the academy.
//! Anything absent, non-numeric or out of range reads back as "unset" so
//! the documented defaults apply instead of failing the caller.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Days past a payment's `validUpto` before access is revoked, when unset.
pub const DEFAULT_AUTO_SUSPEND_AFTER: u16 = 7;

/// Academy payment policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettings {
    /// Display text describing late fees.
    #[serde(default, deserialize_with = "lenient_text")]
    pub late_fee_policy: Option<String>,

    /// Grace days before a payment is considered late.
    #[serde(default, deserialize_with = "lenient_days")]
    pub days_until_overdue: Option<u16>,

    /// Discount percentage for early payment.
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub early_payment_discount: Option<f64>,

    /// Days past `validUpto` after which access is revoked.
    #[serde(default, deserialize_with = "lenient_days")]
    pub auto_suspend_after: Option<u16>,
}

impl PolicySettings {
    /// Read settings from a stored document, falling back to defaults when
    /// the document is not an object.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Configured suspension grace period, or the default.
    #[must_use]
    pub fn auto_suspend_after(&self) -> u16 {
        self.auto_suspend_after
            .unwrap_or(DEFAULT_AUTO_SUSPEND_AFTER)
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    Ok(parse_days(&Value::deserialize(deserializer)?))
}

fn lenient_percentage<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(parse_number(&Value::deserialize(deserializer)?)
        .filter(|percentage| (0.0..=100.0).contains(percentage)))
}

/// Whole, non-negative day counts given as a number or numeric string.
fn parse_days(value: &Value) -> Option<u16> {
    let days = parse_number(value)?;

    if days.fract() != 0.0 || days < 0.0 || days > f64::from(u16::MAX) {
        return None;
    }

    // Whole and within u16 range, so the cast is exact.
    Some(days as u16)
}

fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}
