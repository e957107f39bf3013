//! MSBuild *.csproj (SDK style and legacy)

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use roxmltree::{Document, Node};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CsProj {
    name: String,
    description: String,
    author: String,
    version: String,
    license: String,
    dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

/// First non-empty value of `<name>` across all `<PropertyGroup>`s.
fn property(project: Node, name: &str) -> String {
    project
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "PropertyGroup")
        .flat_map(|group| group.children())
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .filter_map(|n| n.text())
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// `Version` may be an attribute or a child element.
fn reference_version(node: Node) -> String {
    node.attribute("Version")
        .map(String::from)
        .or_else(|| {
            node.children()
                .find(|n| n.is_element() && n.tag_name().name() == "Version")
                .and_then(|n| n.text())
                .map(|t| t.trim().to_string())
        })
        .unwrap_or_default()
}

impl CsProj {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let mut proj = Self::parse(&read_manifest(path)?)?;
        if proj.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                proj.name = stem.to_string();
            }
        }
        Ok(proj)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let doc = Document::parse(content).map_err(|e| ManifestError::parse("csproj", e))?;
        let project = doc.root_element();
        if project.tag_name().name() != "Project" {
            return Err(ManifestError::parse(
                "csproj",
                format!("unexpected root element <{}>", project.tag_name().name()),
            ));
        }

        let dependencies = project
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "PackageReference")
            .filter_map(|n| {
                n.attribute("Include")
                    .map(|name| Dependency::new(name, reference_version(n)))
            })
            .collect();

        let mut frameworks = property(project, "TargetFramework");
        if frameworks.is_empty() {
            frameworks = property(project, "TargetFrameworks");
        }
        if frameworks.is_empty() {
            frameworks = property(project, "TargetFrameworkVersion");
        }
        let environments = frameworks
            .split(';')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(|f| Environment::new("dotnet", f))
            .collect();

        let mut license = property(project, "PackageLicenseExpression");
        if license.is_empty() {
            license = property(project, "License");
        }

        let mut name = property(project, "AssemblyName");
        if name.is_empty() {
            name = property(project, "PackageId");
        }

        Ok(Self {
            name,
            description: property(project, "Description"),
            author: property(project, "Authors"),
            version: property(project, "Version"),
            license,
            dependencies,
            environments,
        })
    }
}

impl Configure for CsProj {
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
        &[]
    }

    fn environments(&self) -> &[Environment] {
        &self.environments
    }
}
