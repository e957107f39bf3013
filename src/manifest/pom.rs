//! Maven pom.xml

use super::{read_manifest, Configure, Dependency, Environment, ManifestError};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::path::Path;

const FORMAT: &str = "pom.xml";
const JAVA_VERSION_PROPERTIES: &[&str] = &[
    "java.version",
    "maven.compiler.release",
    "maven.compiler.source",
];

#[derive(Debug, Clone, Default)]
pub struct Pom {
    name: String,
    description: String,
    author: String,
    version: String,
    license: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    environments: Vec<Environment>,
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn text(node: Node, name: &str) -> String {
    child(node, name)
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

/// Expands `${property}` references from `<properties>`; unknown ones stay
/// verbatim.
fn interpolate(value: &str, properties: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        match rest[start..].find('}') {
            Some(end) => {
                let key = &rest[start + 2..start + end];
                match properties.get(key) {
                    Some(v) => out.push_str(v),
                    None => out.push_str(&rest[start..start + end + 1]),
                }
                rest = &rest[start + end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

impl Pom {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::parse(&read_manifest(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let doc = Document::parse(content).map_err(|e| ManifestError::parse(FORMAT, e))?;
        let project = doc.root_element();
        if project.tag_name().name() != "project" {
            return Err(ManifestError::parse(
                FORMAT,
                format!("unexpected root element <{}>", project.tag_name().name()),
            ));
        }

        let mut properties: HashMap<String, String> = child(project, "properties")
            .map(|props| {
                props
                    .children()
                    .filter(|n| n.is_element())
                    .map(|n| {
                        (
                            n.tag_name().name().to_string(),
                            n.text().unwrap_or_default().trim().to_string(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        let parent = child(project, "parent");
        let mut version = text(project, "version");
        if version.is_empty() {
            if let Some(parent) = parent {
                version = text(parent, "version");
            }
        }
        properties.insert("project.version".to_string(), version.clone());

        let artifact_id = text(project, "artifactId");
        let name = match text(project, "name") {
            n if n.is_empty() => artifact_id,
            n => n,
        };

        let author = child(project, "developers")
            .map(|devs| {
                children(devs, "developer")
                    .map(|d| text(d, "name"))
                    .filter(|n| !n.is_empty())
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        let license = child(project, "licenses")
            .map(|ls| {
                children(ls, "license")
                    .map(|l| text(l, "name"))
                    .filter(|n| !n.is_empty())
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        let mut dependencies = Vec::new();
        let mut dev_dependencies = Vec::new();

        if let Some(parent) = parent {
            let artifact = text(parent, "artifactId");
            if !artifact.is_empty() {
                dependencies.push(Dependency::new(
                    artifact,
                    interpolate(&text(parent, "version"), &properties),
                ));
            }
        }

        if let Some(deps) = child(project, "dependencies") {
            for dep in children(deps, "dependency") {
                let artifact = text(dep, "artifactId");
                if artifact.is_empty() {
                    continue;
                }
                let dependency =
                    Dependency::new(artifact, interpolate(&text(dep, "version"), &properties));
                if text(dep, "scope") == "test" {
                    dev_dependencies.push(dependency);
                } else {
                    dependencies.push(dependency);
                }
            }
        }

        let environments = JAVA_VERSION_PROPERTIES
            .iter()
            .find_map(|key| properties.get(*key).filter(|v| !v.is_empty()))
            .map(|v| vec![Environment::new("java", v.clone())])
            .unwrap_or_default();

        Ok(Self {
            name,
            description: text(project, "description"),
            author,
            version,
            license,
            dependencies,
            dev_dependencies,
            environments,
        })
    }
}

impl Configure for Pom {
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

    const SPRING_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-parent</artifactId>
    <version>3.2.1</version>
  </parent>
  <artifactId>orders</artifactId>
  <description>Order service</description>
  <properties>
    <java.version>17</java.version>
    <jedis.version>5.1.0</jedis.version>
  </properties>
  <licenses><license><name>Apache-2.0</name></license></licenses>
  <developers>
    <developer><name>Ada</name></developer>
    <developer><name>Linus</name></developer>
  </developers>
  <dependencies>
    <dependency>
      <groupId>redis.clients</groupId>
      <artifactId>jedis</artifactId>
      <version>${jedis.version}</version>
    </dependency>
    <dependency>
      <groupId>org.junit.jupiter</groupId>
      <artifactId>junit-jupiter</artifactId>
      <scope>test</scope>
    </dependency>
  </dependencies>
</project>
"#;

    #[test]
    fn test_spring_pom() {
        let pom = Pom::parse(SPRING_POM).unwrap();

        assert_eq!(pom.project_name(), "orders");
        assert_eq!(pom.project_version(), "3.2.1");
        assert_eq!(pom.project_description(), "Order service");
        assert_eq!(pom.project_author(), "Ada;Linus");
        assert_eq!(pom.project_license(), "Apache-2.0");
        assert_eq!(
            pom.project_dependencies(),
            &[
                Dependency::new("spring-boot-starter-parent", "3.2.1"),
                Dependency::new("jedis", "5.1.0"),
            ]
        );
        assert_eq!(pom.project_dev_dependencies()[0].name(), "junit-jupiter");
        assert_eq!(pom.environment("java").unwrap().version(), "17");
    }

    #[test]
    fn test_unknown_property_kept() {
        let props = HashMap::from([("a".to_string(), "1".to_string())]);
        assert_eq!(interpolate("${a}.${b}", &props), "1.${b}");
        assert_eq!(interpolate("plain", &props), "plain");
        assert_eq!(interpolate("${open", &props), "${open");
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            Pom::parse("<project><artifactId>x</project>"),
            Err(ManifestError::Parse { format: "pom.xml", .. })
        ));
        assert!(Pom::parse("<settings/>").is_err());
    }
}
