use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// How much the user wants the answer to explain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Concise,
    #[default]
    Detailed,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Concise => "concise",
            DetailLevel::Detailed => "detailed",
        }
    }

    /// Anything other than `concise` asks for the detailed answer.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("concise") {
            DetailLevel::Concise
        } else {
            DetailLevel::Detailed
        }
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concise" => Ok(DetailLevel::Concise),
            "detailed" => Ok(DetailLevel::Detailed),
            other => Err(format!(
                "Invalid detail level: {}. Expected: concise or detailed",
                other
            )),
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for DetailLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .map(DetailLevel::from_label)
            .unwrap_or_default())
    }
}
