//! package.json

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPackageJson {
    name: String,
    version: String,
    description: String,
    author: Option<Person>,
    license: Option<License>,
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
    engines: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Person {
    Plain(String),
    Detailed {
        #[serde(default)]
        name: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum License {
    Spdx(String),
    Legacy {
        #[serde(default, rename = "type")]
        kind: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PackageJson {
    name: String,
    version: String,
    description: String,
    author: String,
    license: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

impl PackageJson {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let raw: RawPackageJson =
            serde_json::from_str(content).map_err(|e| ManifestError::parse("package.json", e))?;

        let author = match raw.author {
            Some(Person::Plain(s)) => s,
            Some(Person::Detailed { name }) => name,
            None => String::new(),
        };
        let license = match raw.license {
            Some(License::Spdx(s)) => s,
            Some(License::Legacy { kind }) => kind,
            None => String::new(),
        };

        let mut environments = Vec::new();
        for (engine, env_name) in [("npm", "npm"), ("node", "node")] {
            if let Some(version) = raw.engines.get(engine).and_then(|v| v.as_str()) {
                if !version.is_empty() {
                    environments.push(Environment::new(env_name, version));
                }
            }
        }

        Ok(Self {
            name: raw.name,
            version: raw.version,
            description: raw.description,
            author,
            license,
            dependencies: collect(&raw.dependencies),
            dev_dependencies: collect(&raw.dev_dependencies),
            environments,
        })
    }
}

/// Non-string specs (e.g. `{"version": ...}` in some lockfile-like
/// manifests) keep the name with an empty version.
fn collect(map: &BTreeMap<String, serde_json::Value>) -> Vec<Dependency> {
    map.iter()
        .map(|(name, spec)| Dependency::new(name, spec.as_str().unwrap_or_default()))
        .collect()
}

impl Configure for PackageJson {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_manifest() {
        let pkg = PackageJson::parse(
            r#"{
                "name": "web",
                "version": "1.2.3",
                "description": "Storefront",
                "author": {"name": "Ada", "email": "ada@example.com"},
                "license": "MIT",
                "dependencies": {"react": "^18.2.0", "@trpc/server": "10.0.0"},
                "devDependencies": {"vite": "^5.0.0"},
                "engines": {"node": ">=18", "npm": ">=9"}
            }"#,
        )
        .unwrap();

        assert_eq!(pkg.project_name(), "web");
        assert_eq!(pkg.project_author(), "Ada");
        assert_eq!(pkg.project_license(), "MIT");
        assert_eq!(pkg.project_dependencies().len(), 2);
        assert_eq!(pkg.project_dev_dependencies()[0].name(), "vite");
        assert_eq!(pkg.environment("node").unwrap().version(), ">=18");
        assert_eq!(pkg.environment("npm").unwrap().version(), ">=9");
    }

    #[test]
    fn test_sparse_manifest() {
        let pkg = PackageJson::parse(r#"{"author": "Bob <bob@example.com>"}"#).unwrap();
        assert_eq!(pkg.project_name(), "");
        assert_eq!(pkg.project_author(), "Bob <bob@example.com>");
        assert!(pkg.project_dependencies().is_empty());
        assert!(pkg.environments().is_empty());
    }

    #[test]
    fn test_legacy_license_object() {
        let pkg = PackageJson::parse(r#"{"license": {"type": "ISC"}}"#).unwrap();
        assert_eq!(pkg.project_license(), "ISC");
    }

    #[test]
    fn test_malformed_json() {
        let err = PackageJson::parse("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { format: "package.json", .. }));
    }
}
