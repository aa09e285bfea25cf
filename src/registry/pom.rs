//! Maven POM parsing
//!
//! Only the fields needed to locate a project's homepage are read:
//! `<url>`, `<scm><url>` and `<parent>`. Property placeholders such as
//! `${project.url}` are kept verbatim.

use crate::registry::{ParentRef, ProjectDescriptor, Scm};
use serde::Deserialize;

/// Top-level `<project>` element
#[derive(Debug, Deserialize)]
struct PomProject {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    scm: Option<PomScm>,
    #[serde(default)]
    parent: Option<PomParent>,
}

#[derive(Debug, Deserialize)]
struct PomScm {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PomParent {
    #[serde(rename = "groupId", default)]
    group_id: Option<String>,
    #[serde(rename = "artifactId", default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Parse a POM document into a project descriptor
pub fn parse_pom(xml: &str) -> Result<ProjectDescriptor, quick_xml::DeError> {
    let project: PomProject = quick_xml::de::from_str(xml)?;

    let parent = project.parent.and_then(|parent| {
        match (
            non_blank(parent.group_id),
            non_blank(parent.artifact_id),
            non_blank(parent.version),
        ) {
            (Some(group_id), Some(artifact_id), Some(version)) => Some(ParentRef {
                group_id,
                artifact_id,
                version,
            }),
            _ => None,
        }
    });

    Ok(ProjectDescriptor {
        homepage: non_blank(project.url),
        scm: project.scm.map(|scm| Scm {
            url: non_blank(scm.url),
        }),
        parent,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATS_POM: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/maven-v4_0_0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <groupId>org.typelevel</groupId>
    <artifactId>cats-core_2.13</artifactId>
    <packaging>jar</packaging>
    <description>cats-core</description>
    <url>https://typelevel.org/cats/</url>
    <version>2.10.0</version>
    <licenses>
        <license>
            <name>MIT</name>
            <url>https://opensource.org/licenses/MIT</url>
            <distribution>repo</distribution>
        </license>
    </licenses>
    <organization>
        <name>Typelevel</name>
        <url>https://typelevel.org</url>
    </organization>
    <scm>
        <url>https://github.com/typelevel/cats</url>
        <connection>scm:git:https://github.com/typelevel/cats.git</connection>
        <developerConnection>scm:git:git@github.com:typelevel/cats.git</developerConnection>
    </scm>
    <developers>
        <developer>
            <id>ceedubs</id>
            <name>Cody Allen</name>
            <url>https://github.com/ceedubs/</url>
        </developer>
    </developers>
</project>
"#;

    #[test]
    fn test_parse_homepage_and_scm() {
        let descriptor = parse_pom(CATS_POM).unwrap();
        assert_eq!(descriptor.homepage.as_deref(), Some("https://typelevel.org/cats/"));
        assert_eq!(descriptor.scm_url(), Some("https://github.com/typelevel/cats"));
        assert!(descriptor.parent.is_none());
    }

    #[test]
    fn test_parse_parent() {
        let xml = r#"<project>
            <parent>
                <groupId>org.apache.commons</groupId>
                <artifactId>commons-parent</artifactId>
                <version>64</version>
                <relativePath/>
            </parent>
            <artifactId>commons-lang3</artifactId>
        </project>"#;
        let descriptor = parse_pom(xml).unwrap();
        assert_eq!(descriptor.homepage, None);
        assert_eq!(descriptor.scm, None);
        assert_eq!(
            descriptor.parent,
            Some(ParentRef {
                group_id: "org.apache.commons".to_string(),
                artifact_id: "commons-parent".to_string(),
                version: "64".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_incomplete_parent_is_ignored() {
        let xml = r#"<project>
            <parent>
                <groupId>org.example</groupId>
                <artifactId>parent</artifactId>
            </parent>
        </project>"#;
        assert!(parse_pom(xml).unwrap().parent.is_none());
    }

    #[test]
    fn test_parse_blank_values_are_absent() {
        let xml = r#"<project>
            <url>   </url>
            <scm>
                <connection>scm:git:git://example.com/repo.git</connection>
            </scm>
        </project>"#;
        let descriptor = parse_pom(xml).unwrap();
        assert_eq!(descriptor.homepage, None);
        assert_eq!(descriptor.scm, Some(Scm { url: None }));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_pom("<project><url>https://example.com</project>").is_err());
    }
}
