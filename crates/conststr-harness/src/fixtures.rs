//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// ISO C / POSIX reference for the function.
    pub reference: String,
    /// Input parameters (byte strings as JSON number arrays).
    pub inputs: serde_json::Value,
    /// Expected output (rendered as string for comparison).
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }

    /// Write fixture set to a file path as pretty JSON.
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_set_roundtrips_through_json() {
        let set = FixtureSet {
            version: "v1".to_string(),
            family: "string/scan".to_string(),
            captured_at: "2026-08-05T00:00:00Z".to_string(),
            cases: vec![FixtureCase {
                name: "strlen_hello".to_string(),
                function: "strlen".to_string(),
                reference: "C11 7.24.6.3".to_string(),
                inputs: serde_json::json!({"s": [72, 105, 0]}),
                expected_output: "2".to_string(),
            }],
        };

        let json = set.to_json().expect("serialize");
        let restored = FixtureSet::from_json(&json).expect("deserialize");
        assert_eq!(restored.cases.len(), 1);
        assert_eq!(restored.cases[0].function, "strlen");
        assert_eq!(restored.cases[0].expected_output, "2");
    }
}
