use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// High/Medium/Low tag used for both business value and risk/impact.
///
/// Generated backlogs occasionally carry values outside the three known
/// levels. Those are kept verbatim in `Unrecognized` so they can still be
/// rendered, and they map to the Medium priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rating {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Rating {
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unrecognized(value) => value,
        }
    }

    /// Numeric tracker priority: High=1, Medium=2, Low=3, anything else=2.
    pub fn priority(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Unrecognized(_) => 2,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(rating) = Rating::from_str(&s);
        Ok(rating)
    }
}
