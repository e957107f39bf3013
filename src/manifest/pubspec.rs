//! Dart/Flutter pubspec.yaml

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPubSpec {
    name: String,
    description: String,
    version: String,
    environment: BTreeMap<String, Value>,
    dependencies: BTreeMap<String, Value>,
    dev_dependencies: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct PubSpec {
    name: String,
    description: String,
    version: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

/// A dependency is `^1.0.0`, a map such as `{sdk: flutter}` or
/// `{hosted: ..., version: ^1.0.0}`, or empty for "any version".
fn spec_version(spec: &Value) -> String {
    match spec {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Mapping(m) => m
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

fn collect(map: &BTreeMap<String, Value>) -> Vec<Dependency> {
    map.iter()
        .map(|(name, spec)| Dependency::new(name, spec_version(spec)))
        .collect()
}

impl PubSpec {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let raw: RawPubSpec = if content.trim().is_empty() {
            RawPubSpec::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ManifestError::parse("pubspec.yaml", e))?
        };

        let environments = raw
            .environment
            .iter()
            .map(|(name, spec)| Environment::new(name, spec_version(spec)))
            .collect();

        Ok(Self {
            name: raw.name,
            description: raw.description,
            version: raw.version,
            dependencies: collect(&raw.dependencies),
            dev_dependencies: collect(&raw.dev_dependencies),
            environments,
        })
    }
}

impl Configure for PubSpec {
    fn project_name(&self) -> &str {
        &self.name
    }

    fn project_description(&self) -> &str {
        &self.description
    }

    fn project_author(&self) -> &str {
        ""
    }

    fn project_version(&self) -> &str {
        &self.version
    }

    fn project_license(&self) -> &str {
        ""
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
    fn test_flutter_app() {
        let spec = PubSpec::parse(
            r#"
name: todo
description: A todo app.
version: 1.0.0+1
environment:
  sdk: ">=3.2.0 <4.0.0"
  flutter: ">=3.16.0"
dependencies:
  flutter:
    sdk: flutter
  http: ^1.2.0
  path:
dev_dependencies:
  flutter_test:
    sdk: flutter
  lints: ^3.0.0
"#,
        )
        .unwrap();

        assert_eq!(spec.project_name(), "todo");
        assert_eq!(spec.environment("sdk").unwrap().version(), ">=3.2.0 <4.0.0");
        assert_eq!(spec.environment("flutter").unwrap().version(), ">=3.16.0");
        assert_eq!(
            spec.project_dependencies(),
            &[
                Dependency::new("flutter", ""),
                Dependency::new("http", "^1.2.0"),
                Dependency::new("path", ""),
            ]
        );
        assert_eq!(spec.project_dev_dependencies().len(), 2);
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(PubSpec::parse("").unwrap().project_name(), "");
        assert!(PubSpec::parse("name: [unclosed").is_err());
    }
}
