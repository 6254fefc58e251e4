//! Config loading and normalization.

use super::model::{Config, GroupEntry, RawConfig, ReviewerGroups};
use crate::error::{RrError, Result};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

/// File name gh-rr looks for inside the config directory.
pub const CONFIG_FILE_NAME: &str = "gh-rr.yml";

impl Config {
    /// Load `gh-rr.yml` from the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory expected to contain the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded config, with `path` set
    /// * `Err(RrError::ConfigNotFound)` - The file does not exist
    /// * `Err(RrError::MalformedConfig)` - The file could not be inspected, read or decoded
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);

        match std::fs::metadata(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RrError::ConfigNotFound { path });
            }
            Err(e) => {
                return Err(RrError::MalformedConfig {
                    path: Some(path),
                    message: e.to_string(),
                });
            }
        }

        tracing::debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(&path).map_err(|e| RrError::MalformedConfig {
            path: Some(path.clone()),
            message: e.to_string(),
        })?;

        let mut config = Self::from_yaml(&content).map_err(|err| match err {
            RrError::MalformedConfig { message, .. } => RrError::MalformedConfig {
                path: Some(path.clone()),
                message,
            },
            other => other,
        })?;

        config.path = Some(path);
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Empty content yields a config with no repositories. Aliases are
    /// expanded by the YAML parser, so repositories sharing an anchored list
    /// each receive their own copy.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let document: Value =
            serde_yaml::from_str(yaml).map_err(|e| RrError::malformed(e.to_string()))?;

        let raw: RawConfig = match document {
            Value::Null => RawConfig::default(),
            Value::Mapping(_) => {
                serde_yaml::from_value(document).map_err(|e| RrError::malformed(e.to_string()))?
            }
            _ => {
                return Err(RrError::malformed(
                    "expected a mapping with a top-level `repositories` key",
                ));
            }
        };

        let repositories = normalize_repositories(raw.repositories.unwrap_or_default())?;

        Ok(Config {
            repositories,
            path: None,
        })
    }

    /// Returns the groups configured for a repository, matching case-insensitively.
    pub fn groups(&self, repository: &str) -> Option<&ReviewerGroups> {
        self.repositories.get(&repository.to_lowercase())
    }
}

/// Decode each repository's value and lower-case the repository keys.
///
/// Repositories without any groups (`acme/app:` or `acme/app: {}`) are
/// dropped, so every stored repository has at least one group.
fn normalize_repositories(
    raw: BTreeMap<String, Value>,
) -> Result<BTreeMap<String, ReviewerGroups>> {
    let mut repositories = BTreeMap::new();

    for (name, value) in raw {
        let entry: Option<GroupEntry> = serde_yaml::from_value(value).map_err(|_| {
            RrError::malformed(format!(
                "repository '{}' must be a list of reviewers or a mapping of groups to lists of reviewers",
                name
            ))
        })?;

        let groups = match entry {
            Some(entry) => entry.into_groups(),
            None => ReviewerGroups::new(),
        };

        if groups.is_empty() {
            tracing::warn!(repository = %name, "ignoring repository with no reviewer groups");
            continue;
        }

        let key = name.to_lowercase();
        if repositories.contains_key(&key) {
            return Err(RrError::malformed(format!(
                "repository '{}' is configured more than once (repository names are case-insensitive)",
                key
            )));
        }

        repositories.insert(key, groups);
    }

    Ok(repositories)
}
