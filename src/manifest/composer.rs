//! PHP composer.json

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawComposer {
    name: String,
    description: String,
    version: String,
    authors: Vec<RawAuthor>,
    license: Option<OneOrMany>,
    require: BTreeMap<String, String>,
    #[serde(rename = "require-dev")]
    require_dev: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    name: String,
    description: String,
    version: String,
    author: String,
    license: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

/// Platform packages such as `php` or `ext-json` are requirements on the
/// runtime, not libraries.
fn is_platform(name: &str) -> bool {
    name == "php" || name.starts_with("ext-") || name.starts_with("lib-")
}

impl Composer {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let raw: RawComposer =
            serde_json::from_str(content).map_err(|e| ManifestError::parse("composer.json", e))?;

        let license = match raw.license {
            Some(OneOrMany::One(s)) => s,
            Some(OneOrMany::Many(v)) => v.join(";"),
            None => String::new(),
        };

        let environments = raw
            .require
            .get("php")
            .map(|v| vec![Environment::new("php", v.clone())])
            .unwrap_or_default();

        let collect = |map: &BTreeMap<String, String>| -> Vec<Dependency> {
            map.iter()
                .filter(|(name, _)| !is_platform(name))
                .map(|(name, version)| Dependency::new(name, version))
                .collect()
        };

        Ok(Self {
            name: raw.name,
            description: raw.description,
            version: raw.version,
            author: raw
                .authors
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            license,
            dependencies: collect(&raw.require),
            dev_dependencies: collect(&raw.require_dev),
            environments,
        })
    }
}

impl Configure for Composer {
    fn project_name(&self) -> &str {
        &self.name
    }

    fn project_description(&self) -> &str {
        &self.description
    }

    fn project_author(&self) -> &str {
        &self.author
    }

    fn project_version(&self) -> &str {
        &self.version
    }

    fn project_license(&self) -> &str {
        &self.license
    }

    fn project_dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn project_dev_dependencies(&self) -> &[Dependency] {
        &self.dev_dependencies
    }

    fn environments(&self) -> &[Environment] {
        &self.environments
    }
}
