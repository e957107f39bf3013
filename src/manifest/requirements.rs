//! pip requirements.txt
//!
//! One requirement per line. Comments, blank lines, pip options (`-r`,
//! `-e`, `--index-url`) and direct URL references are skipped. Exact pins
//! lose their `==`; other specifiers are kept as written.

use super::pyproject::parse_requirement;
use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Requirements {
    dependencies: Vec<Dependency>,
}

impl Requirements {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Ok(Self::parse(&read_manifest(path)?))
    }

    /// Never fails: a line that is not a requirement is ignored.
    pub fn parse(content: &str) -> Self {
        let dependencies = content
            .lines()
            .map(|line| line.split(" #").next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
            .filter(|line| !line.contains("://"))
            .filter_map(parse_requirement)
            .map(|dep| {
                let version = dep.version().strip_prefix("==").unwrap_or(dep.version());
                Dependency::new(dep.name(), version.trim())
            })
            .collect();

        Self { dependencies }
    }
}

impl Configure for Requirements {
    fn project_name(&self) -> &str {
        ""
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
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements() {
        let reqs = Requirements::parse(
            "# Main dependencies\n\
             requests==2.25.0           # HTTP library\n\
             flask>=1.1.2,<2.0          # Web framework\n\
             \n\
             -r dev.txt\n\
             --index-url https://pypi.example.com/simple\n\
             git+https://github.com/org/pkg.git#egg=pkg\n\
             django[postgresql]==3.2.5\n\
             streamlit\n",
        );

        assert_eq!(
            reqs.project_dependencies(),
            &[
                Dependency::new("requests", "2.25.0"),
                Dependency::new("flask", ">=1.1.2,<2.0"),
                Dependency::new("django", "3.2.5"),
                Dependency::new("streamlit", ""),
            ]
        );
    }

    #[test]
    fn test_empty_file() {
        assert!(Requirements::parse("").project_dependencies().is_empty());
    }
}
