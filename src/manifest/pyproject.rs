//! pyproject.toml
//!
//! Reads `[tool.poetry]` first and falls back to the PEP 621 `[project]`
//! table for each field. Poetry lists the interpreter as a `python`
//! dependency; PEP 621 projects get the same entry synthesized from
//! `requires-python` so both layouts resolve identically.

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use serde::Deserialize;
use std::path::Path;
use toml::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPyProject {
    tool: RawTool,
    project: RawProject,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTool {
    poetry: Option<RawPoetry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawPoetry {
    name: String,
    version: String,
    description: String,
    authors: Vec<String>,
    license: String,
    dependencies: toml::Table,
    dev_dependencies: toml::Table,
    group: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawProject {
    name: String,
    version: String,
    description: String,
    authors: Vec<RawAuthor>,
    license: Option<Value>,
    requires_python: String,
    dependencies: Vec<String>,
    optional_dependencies: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAuthor {
    name: String,
}

#[derive(Debug, Clone, Default)]
pub struct PyProject {
    name: String,
    version: String,
    description: String,
    author: String,
    license: String,
    poetry: bool,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

impl PyProject {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let raw: RawPyProject =
            toml::from_str(content).map_err(|e| ManifestError::parse("pyproject.toml", e))?;
        let project = raw.project;
        let poetry_used = raw.tool.poetry.is_some();
        let poetry = raw.tool.poetry.unwrap_or_default();

        let pick = |a: String, b: String| if a.is_empty() { b } else { a };

        let mut dependencies = poetry_table(&poetry.dependencies);
        dependencies.extend(project.dependencies.iter().filter_map(|s| parse_requirement(s)));

        let mut dev_dependencies = poetry_table(&poetry.dev_dependencies);
        for group in poetry.group.values() {
            if let Some(deps) = group.get("dependencies").and_then(Value::as_table) {
                dev_dependencies.extend(poetry_table(deps));
            }
        }
        for extra in project.optional_dependencies.values() {
            if let Some(list) = extra.as_array() {
                dev_dependencies.extend(
                    list.iter()
                        .filter_map(Value::as_str)
                        .filter_map(parse_requirement),
                );
            }
        }

        let python = dependencies
            .iter()
            .find(|d| d.matches("python"))
            .map(|d| d.version().to_string())
            .unwrap_or_else(|| project.requires_python.clone());
        if !python.is_empty() && !dependencies.iter().any(|d| d.matches("python")) {
            dependencies.insert(0, Dependency::new("python", python.clone()));
        }
        let environments = if python.is_empty() {
            Vec::new()
        } else {
            vec![Environment::new("python", python)]
        };

        let author = if poetry.authors.is_empty() {
            project
                .authors
                .iter()
                .map(|a| a.name.as_str())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(";")
        } else {
            poetry.authors.join(";")
        };

        let project_license = match project.license {
            Some(Value::String(s)) => s,
            Some(Value::Table(t)) => t
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };

        Ok(Self {
            name: pick(poetry.name, project.name),
            version: pick(poetry.version, project.version),
            description: pick(poetry.description, project.description),
            author,
            license: pick(poetry.license, project_license),
            poetry: poetry_used,
            dependencies,
            dev_dependencies,
            environments,
        })
    }

    /// Whether the manifest carries a `[tool.poetry]` table.
    pub fn uses_poetry(&self) -> bool {
        self.poetry
    }
}

fn poetry_table(table: &toml::Table) -> Vec<Dependency> {
    table
        .iter()
        .map(|(name, spec)| {
            let version = match spec {
                Value::String(v) => v.clone(),
                Value::Table(t) => t
                    .get("version")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                _ => String::new(),
            };
            Dependency::new(name, version)
        })
        .collect()
}

/// Splits a PEP 508 requirement such as `flask[async]>=2.0 ; python_version>"3"`
/// into name and version specifier.
pub(crate) fn parse_requirement(spec: &str) -> Option<Dependency> {
    let spec = spec.split(';').next().unwrap_or_default().trim();
    if spec.is_empty() {
        return None;
    }

    let name_end = spec
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'))
        .unwrap_or(spec.len());
    let name = &spec[..name_end];
    if name.is_empty() {
        return None;
    }

    let mut rest = spec[name_end..].trim_start();
    if rest.starts_with('[') {
        rest = rest.find(']').map(|i| &rest[i + 1..]).unwrap_or_default();
    }

    Some(Dependency::new(name, rest.trim()))
}

impl Configure for PyProject {
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
    fn test_poetry_project() {
        let py = PyProject::parse(
            r#"
[tool.poetry]
name = "api"
version = "0.1.0"
description = "REST API"
authors = ["Ada <ada@example.com>"]
license = "MIT"

[tool.poetry.dependencies]
python = "^3.11"
fastapi = "^0.110.0"
uvicorn = { version = "^0.29", extras = ["standard"] }

[tool.poetry.group.dev.dependencies]
pytest = "^8.0"
"#,
        )
        .unwrap();

        assert!(py.uses_poetry());
        assert_eq!(py.project_name(), "api");
        assert_eq!(py.project_author(), "Ada <ada@example.com>");
        assert_eq!(py.environment("python").unwrap().version(), "^3.11");
        assert!(py
            .project_dependencies()
            .contains(&Dependency::new("fastapi", "^0.110.0")));
        assert!(py
            .project_dependencies()
            .contains(&Dependency::new("uvicorn", "^0.29")));
        assert_eq!(
            py.project_dev_dependencies(),
            &[Dependency::new("pytest", "^8.0")]
        );
    }

    #[test]
    fn test_pep621_project() {
        let py = PyProject::parse(
            r#"
[project]
name = "scraper"
version = "2.0.0"
requires-python = ">=3.9"
authors = [{ name = "Linus", email = "l@example.com" }]
license = { text = "BSD-3-Clause" }
dependencies = ["scrapy>=2.11", "Jinja2[i18n]==3.1.3 ; python_version >= '3.9'"]

[project.optional-dependencies]
test = ["pytest"]
"#,
        )
        .unwrap();

        assert!(!py.uses_poetry());
        assert_eq!(py.project_author(), "Linus");
        assert_eq!(py.project_license(), "BSD-3-Clause");
        assert_eq!(
            py.project_dependencies(),
            &[
                Dependency::new("python", ">=3.9"),
                Dependency::new("scrapy", ">=2.11"),
                Dependency::new("Jinja2", "==3.1.3"),
            ]
        );
        assert_eq!(py.project_dev_dependencies()[0].name(), "pytest");
    }

    #[test]
    fn test_parse_requirement() {
        assert_eq!(
            parse_requirement("flask[async]==2.0.0"),
            Some(Dependency::new("flask", "==2.0.0"))
        );
        assert_eq!(
            parse_requirement("requests"),
            Some(Dependency::new("requests", ""))
        );
        assert_eq!(parse_requirement("  "), None);
        assert_eq!(parse_requirement("; os_name == 'nt'"), None);
    }

    #[test]
    fn test_empty_pyproject() {
        let py = PyProject::parse("[build-system]\nrequires = [\"setuptools\"]\n").unwrap();
        assert_eq!(py.project_name(), "");
        assert!(py.environments().is_empty());
        assert!(py.project_dependencies().is_empty());
    }
}
