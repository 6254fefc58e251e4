//! Config struct definition and the raw YAML shapes it is decoded from.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Reviewer groups configured for one repository, keyed by group name.
pub type ReviewerGroups = BTreeMap<String, Vec<String>>;

/// Name of the group a bare list of reviewers is stored under.
pub const DEFAULT_GROUP: &str = "default";

/// Configuration for gh-rr.
///
/// This struct represents the contents of `gh-rr.yml` after normalization:
/// repository keys are lower-cased and every repository maps to named groups,
/// whichever of the two accepted shapes it was written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Reviewer groups per repository. Keys are lower-cased `<owner>/<name>`
    /// or the wildcard `*`.
    pub repositories: BTreeMap<String, ReviewerGroups>,

    /// Path the config was loaded from, if it came from a file.
    pub path: Option<PathBuf>,
}

/// The on-disk document. Unknown top-level keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    pub repositories: Option<BTreeMap<String, Value>>,
}

/// A repository's value as written in the YAML file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum GroupEntry {
    /// `acme/app: [alice, bob]` - shorthand for the `default` group.
    List(ReviewerList),
    /// `acme/app: { default: [alice], infra: [carol] }`
    Groups(BTreeMap<String, ReviewerList>),
}

/// A list of reviewer logins.
///
/// Logins are taken as their literal text whatever type YAML would give the
/// scalar, so `12345` and `true` are valid logins. A missing list (`default:`
/// with nothing after it) is an empty group.
#[derive(Debug, Default)]
pub(super) struct ReviewerList(Vec<String>);

impl<'de> Deserialize<'de> for ReviewerList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

        values
            .into_iter()
            .map(|value| match value {
                Value::String(login) => Ok(login),
                Value::Number(login) => Ok(login.to_string()),
                Value::Bool(login) => Ok(login.to_string()),
                Value::Null => Ok("null".to_string()),
                _ => Err(D::Error::custom(
                    "reviewers must be plain names, not lists or mappings",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ReviewerList)
    }
}

impl GroupEntry {
    /// Collapse either shape into named groups.
    pub(super) fn into_groups(self) -> ReviewerGroups {
        match self {
            GroupEntry::List(ReviewerList(reviewers)) => {
                BTreeMap::from([(DEFAULT_GROUP.to_string(), reviewers)])
            }
            GroupEntry::Groups(groups) => groups
                .into_iter()
                .map(|(name, ReviewerList(reviewers))| (name, reviewers))
                .collect(),
        }
    }
}
