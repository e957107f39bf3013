//! go.mod
//!
//! Only the directives that matter for stack detection are read: `module`,
//! `go`, `toolchain` and `require` (single-line and block form). Everything
//! else (`replace`, `exclude`, `retract`, comments) is skipped.

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use std::path::Path;

const FORMAT: &str = "go.mod";

#[derive(Debug, Clone, Default)]
pub struct GoMod {
    module: String,
    dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

impl GoMod {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let mut module = None;
        let mut go_version = None;
        let mut toolchain = None;
        let mut dependencies = Vec::new();
        let mut block: Option<&str> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(directive) = block {
                if line == ")" {
                    block = None;
                } else if directive == "require" {
                    dependencies.push(parse_requirement(line, idx + 1)?);
                }
                continue;
            }

            let (directive, rest) = match line.split_once(char::is_whitespace) {
                Some((directive, rest)) => (directive, rest.trim()),
                None => (line, ""),
            };

            if rest == "(" {
                block = Some(directive);
                continue;
            }

            match directive {
                "module" => module = Some(unquote(rest).to_string()),
                "go" => go_version = Some(rest.to_string()),
                "toolchain" => toolchain = Some(rest.to_string()),
                "require" => dependencies.push(parse_requirement(rest, idx + 1)?),
                _ => {}
            }
        }

        if block.is_some() {
            return Err(ManifestError::parse(FORMAT, "unterminated block"));
        }

        let module = module.unwrap_or_default();

        let mut environments = Vec::new();
        if let Some(version) = go_version {
            environments.push(Environment::new("go", version));
        }
        if let Some(version) = toolchain {
            environments.push(Environment::new("toolchain", version));
        }

        Ok(Self {
            module,
            dependencies,
            environments,
        })
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn unquote(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '`')
}

fn parse_requirement(spec: &str, line_no: usize) -> Result<Dependency, ManifestError> {
    let mut parts = spec.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(path), Some(version)) => Ok(Dependency::new(unquote(path), version)),
        _ => Err(ManifestError::parse(
            FORMAT,
            format!("line {}: malformed require '{}'", line_no, spec),
        )),
    }
}

impl Configure for GoMod {
    fn project_name(&self) -> &str {
        &self.module
    }

    fn project_description(&self) -> &str {
        ""
    }

    fn project_author(&self) -> &str {
        ""
    }

    fn project_version(&self) -> &str {
        ""
    }

    fn project_license(&self) -> &str {
        ""
    }

    fn project_dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn project_dev_dependencies(&self) -> &[Dependency] {
        &[]
    }

    fn environments(&self) -> &[Environment] {
        &self.environments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_require() {
        let m = GoMod::parse(
            "module example\n\ngo 1.21\n\nrequire github.com/gin-gonic/gin v1.9.0\n",
        )
        .unwrap();

        assert_eq!(m.project_name(), "example");
        assert_eq!(m.environment("go").unwrap().version(), "1.21");
        assert_eq!(
            m.project_dependencies(),
            &[Dependency::new("github.com/gin-gonic/gin", "v1.9.0")]
        );
    }

    #[test]
    fn test_require_blocks_and_comments() {
        let content = r#"
// top comment
module github.com/acme/service

go 1.22.1

toolchain go1.22.3

require (
	github.com/labstack/echo/v4 v4.11.4
	github.com/lib/pq v1.10.9 // indirect
)

require (
	go.mongodb.org/mongo-driver v1.14.0
)

replace github.com/lib/pq => ../pq
"#;
        let m = GoMod::parse(content).unwrap();
        let names: Vec<&str> = m.project_dependencies().iter().map(|d| d.name()).collect();

        assert_eq!(m.project_name(), "github.com/acme/service");
        assert_eq!(
            names,
            vec![
                "github.com/labstack/echo/v4",
                "github.com/lib/pq",
                "go.mongodb.org/mongo-driver"
            ]
        );
        assert_eq!(m.project_dependencies()[1].version(), "v1.10.9");
        assert_eq!(m.environment("toolchain").unwrap().version(), "go1.22.3");
    }

    #[test]
    fn test_missing_module_gives_empty_name() {
        let m = GoMod::parse("go 1.21\nrequire github.com/gin-gonic/gin v1.9.0\n").unwrap();
        assert_eq!(m.project_name(), "");
        assert_eq!(m.environment("go").unwrap().version(), "1.21");
        assert_eq!(m.project_dependencies().len(), 1);
    }

    #[test]
    fn test_malformed_require() {
        assert!(GoMod::parse("module x\nrequire github.com/only/path\n").is_err());
        assert!(GoMod::parse("module x\nrequire (\n  a v1\n").is_err());
    }

    #[test]
    fn test_no_go_directive() {
        let m = GoMod::parse("module x\n").unwrap();
        assert!(m.environments().is_empty());
        assert!(m.project_dev_dependencies().is_empty());
    }
}
