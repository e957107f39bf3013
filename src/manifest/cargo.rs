//! Cargo.toml
//!
//! Package fields may be written directly or inherited with
//! `field.workspace = true`. Inherited fields resolve against the
//! manifest's own `[workspace.package]` table at load time; with no such
//! table they resolve to empty.

use super::{read_manifest, Configure, Dependency, Environment, Inheritable, ManifestError};
use serde::Deserialize;
use std::path::Path;
use toml::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCargoToml {
    package: RawPackage,
    workspace: RawWorkspace,
    dependencies: toml::Table,
    #[serde(rename = "dev-dependencies")]
    dev_dependencies: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawWorkspace {
    package: RawWorkspacePackage,
    dependencies: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawPackage {
    name: String,
    description: Inheritable<String>,
    version: Inheritable<String>,
    authors: Inheritable<Vec<String>>,
    license: Inheritable<String>,
    edition: Inheritable<String>,
    rust_version: Inheritable<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawWorkspacePackage {
    description: Option<String>,
    version: Option<String>,
    authors: Option<Vec<String>>,
    license: Option<String>,
    edition: Option<String>,
    rust_version: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CargoToml {
    name: String,
    description: String,
    version: String,
    author: String,
    license: String,
    edition: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

impl CargoToml {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let raw: RawCargoToml =
            toml::from_str(content).map_err(|e| ManifestError::parse("Cargo.toml", e))?;
        let pkg = &raw.package;
        let ws = &raw.workspace.package;

        let authors = pkg
            .authors
            .resolve(ws.authors.as_ref())
            .unwrap_or_default()
            .join(";");

        let rust_version = pkg
            .rust_version
            .resolve(ws.rust_version.as_ref())
            .unwrap_or_default();
        let environments = if rust_version.is_empty() {
            Vec::new()
        } else {
            vec![Environment::new("rust", rust_version)]
        };

        Ok(Self {
            name: pkg.name.clone(),
            description: pkg
                .description
                .resolve(ws.description.as_ref())
                .unwrap_or_default(),
            version: pkg.version.resolve(ws.version.as_ref()).unwrap_or_default(),
            author: authors,
            license: pkg.license.resolve(ws.license.as_ref()).unwrap_or_default(),
            edition: pkg.edition.resolve(ws.edition.as_ref()).unwrap_or_default(),
            dependencies: collect(&raw.dependencies, &raw.workspace.dependencies),
            dev_dependencies: collect(&raw.dev_dependencies, &raw.workspace.dependencies),
            environments,
        })
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }
}

/// `name = "1"`, `name = { version = "1" }` and `name = { workspace = true }`
/// are all accepted; anything else keeps the name with no version.
fn collect(table: &toml::Table, workspace_deps: &toml::Table) -> Vec<Dependency> {
    table
        .iter()
        .map(|(name, spec)| {
            let version = match spec {
                Value::String(v) => v.clone(),
                Value::Table(t) if t.get("workspace").and_then(Value::as_bool) == Some(true) => {
                    workspace_deps
                        .get(name)
                        .and_then(dependency_version)
                        .unwrap_or_default()
                }
                other => dependency_version(other).unwrap_or_default(),
            };
            Dependency::new(name, version)
        })
        .collect()
}

fn dependency_version(spec: &Value) -> Option<String> {
    match spec {
        Value::String(v) => Some(v.clone()),
        Value::Table(t) => t.get("version").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

impl Configure for CargoToml {
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
