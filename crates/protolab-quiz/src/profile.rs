//! Agent profiles keyed by result code.

use std::collections::BTreeMap;

use protolab_types::ResultCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuizError;
use crate::standard::PROFILES;

/// A personality profile shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AgentProfile {
    /// Display name.
    pub name: String,
    /// Explicit icon file name. Derived from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Strengths, in display order.
    pub strengths: Vec<String>,
    /// Weaknesses, in display order.
    pub weaknesses: Vec<String>,
}

impl AgentProfile {
    /// Icon file name: the explicit icon, else `<slug of name>.png`.
    pub fn icon_path(&self) -> String {
        self.icon.clone().unwrap_or_else(|| format!("{}.png", slug(&self.name)))
    }
}

/// Lowercase `name`, turning whitespace runs and slashes into dashes.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Read-only lookup from result code to profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: BTreeMap<ResultCode, AgentProfile>,
}

impl ProfileTable {
    /// Wrap an existing map. Completeness is checked separately.
    pub const fn new(profiles: BTreeMap<ResultCode, AgentProfile>) -> Self {
        Self { profiles }
    }

    /// The 32 profiles of the stock quiz.
    pub fn standard() -> Self {
        let profiles = PROFILES
            .iter()
            .filter_map(|seed| {
                let code = seed.code.parse().ok()?;
                let profile = AgentProfile {
                    name: seed.name.to_owned(),
                    icon: seed.icon.map(String::from),
                    strengths: seed.strengths.iter().map(|s| (*s).to_owned()).collect(),
                    weaknesses: seed.weaknesses.iter().map(|s| (*s).to_owned()).collect(),
                };
                Some((code, profile))
            })
            .collect();
        Self { profiles }
    }

    /// Profile for `code`.
    pub fn get(&self, code: ResultCode) -> Option<&AgentProfile> {
        self.profiles.get(&code)
    }

    /// Find a profile by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<(ResultCode, &AgentProfile)> {
        self.profiles
            .iter()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(name))
            .map(|(code, p)| (*code, p))
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate profiles in code order.
    pub fn iter(&self) -> impl Iterator<Item = (ResultCode, &AgentProfile)> {
        self.profiles.iter().map(|(code, p)| (*code, p))
    }

    /// Check that every possible result code has a profile.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::MissingProfiles`] listing each code without one.
    pub fn validate_complete(&self) -> Result<(), QuizError> {
        let missing: Vec<ResultCode> = ResultCode::all()
            .into_iter()
            .filter(|code| !self.profiles.contains_key(code))
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(QuizError::MissingProfiles(missing)) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use protolab_types::CODE_COUNT;

    use super::*;

    #[test]
    fn standard_table_covers_every_code() {
        let table = ProfileTable::standard();
        assert_eq!(table.len(), CODE_COUNT);
        table.validate_complete().unwrap();
    }

    #[test]
    fn standard_names_are_unique() {
        let table = ProfileTable::standard();
        let mut names: Vec<&str> = table.iter().map(|(_, p)| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CODE_COUNT);
    }

    #[test]
    fn incomplete_table_lists_missing_codes() {
        let mut profiles = BTreeMap::new();
        let code: ResultCode = "WTSAD".parse().unwrap();
        profiles.insert(code, ProfileTable::standard().get(code).unwrap().clone());
        let err = ProfileTable::new(profiles).validate_complete().unwrap_err();
        match err {
            QuizError::MissingProfiles(missing) => {
                assert_eq!(missing.len(), CODE_COUNT - 1);
                assert!(!missing.contains(&code));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn icon_path_prefers_explicit_icon() {
        let table = ProfileTable::standard();
        let (_, greek) = table.find_by_name("spiral notebook/greek god").unwrap();
        assert_eq!(greek.icon_path(), "greek-god.png");
        let single_arrow = table.get("WTSAD".parse().unwrap()).unwrap();
        assert_eq!(single_arrow.icon_path(), "single-arrow.png");
    }

    #[test]
    fn slug_collapses_whitespace_and_slashes() {
        assert_eq!(slug("Infinity  Glasses"), "infinity-glasses");
        assert_eq!(slug("Spiral Notebook/Greek God"), "spiral-notebook-greek-god");
    }
}
