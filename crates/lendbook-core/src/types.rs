use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates expressed in percent, as stored on the records (12 = 12% p.a.).
pub type Rate = Decimal;

/// Payment cadence governing how a period's interest is derived from the annual rate.
///
/// Parsing never fails: a string outside the five recognized cadences is kept
/// verbatim in `Other` and behaves like `Monthly` wherever a divisor is
/// needed. Records in the wild carry free-form frequency values, and those
/// must keep producing the monthly numbers they always have.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    Other(String),
}

impl PaymentFrequency {
    /// Map a raw frequency string; anything unrecognized is preserved in `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "daily" => PaymentFrequency::Daily,
            "weekly" => PaymentFrequency::Weekly,
            "monthly" => PaymentFrequency::Monthly,
            "quarterly" => PaymentFrequency::Quarterly,
            "yearly" => PaymentFrequency::Yearly,
            other => PaymentFrequency::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentFrequency::Daily => "daily",
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Yearly => "yearly",
            PaymentFrequency::Other(raw) => raw,
        }
    }

    /// True for the five recognized cadences, false for fallback strings.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PaymentFrequency::Other(_))
    }
}

impl FromStr for PaymentFrequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PaymentFrequency::parse(s))
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// On the wire a frequency is a plain lowercase string both directions.
impl Serialize for PaymentFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PaymentFrequency::parse(&raw))
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
