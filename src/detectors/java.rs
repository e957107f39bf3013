//! Java sources, Maven projects and JSP pages.

use crate::badge::{catalog, BadgeKind, BadgeUnion, ShieldBadge};
use crate::manifest::{Configure, Pom};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "Java";

pub const JSP: BadgeUnion = BadgeUnion::shield(ShieldBadge::new(
    "JSP",
    "jsp",
    "#FF0000",
    "",
    "white",
    "https://www.oracle.com/java/technologies/jspt.html",
));

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("spring-boot-starter-parent", ExtendedBadge::dependency(catalog::SPRING)),
        ("mysql-connector-java", ExtendedBadge::system(catalog::MYSQL)),
        ("mysql-connector-j", ExtendedBadge::system(catalog::MYSQL)),
        ("postgresql", ExtendedBadge::system(catalog::POSTGRES)),
        ("neo4j-ogm-http-driver", ExtendedBadge::system(catalog::NEO4J)),
        ("spring-kafka", ExtendedBadge::system(catalog::APACHE_KAFKA)),
        ("kafka-clients", ExtendedBadge::system(catalog::APACHE_KAFKA)),
        ("springfox-swagger-ui", ExtendedBadge::system(catalog::SWAGGER)),
        ("jedis", ExtendedBadge::system(catalog::REDIS)),
        ("elasticsearch-rest-client", ExtendedBadge::system(catalog::ELASTICSEARCH)),
        ("odps-sdk-core", ExtendedBadge::system(catalog::MAXCOMPUTE)),
        ("odps-sdk", ExtendedBadge::system(catalog::MAXCOMPUTE)),
        ("lwjgl-opengl", ExtendedBadge::system(catalog::OPENGL)),
    ],
    partial: &[],
    fuzzy: &[
        ("tomcat", ExtendedBadge::dependency(catalog::APACHE_TOMCAT)),
        ("spark-", ExtendedBadge::dependency(catalog::APACHE_SPARK)),
        ("hadoop-", ExtendedBadge::dependency(catalog::APACHE_HADOOP)),
        ("hive-", ExtendedBadge::dependency(catalog::APACHE_HIVE)),
        ("apollo-", ExtendedBadge::dependency(catalog::APOLLO_GRAPHQL)),
        ("javafx", ExtendedBadge::dependency(catalog::JAVAFX)),
        ("opencv", ExtendedBadge::system(catalog::OPENCV)),
        ("quarkus", ExtendedBadge::system(catalog::QUARKUS)),
    ],
};

pub const WALKER: Walker = Walker {
    name: "java",
    exts: &[".java", ".class", ".jar", ".jmod"],
    files: &["pom.xml"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

pub const JSP_WALKER: Walker = Walker {
    name: "jsp",
    exts: &[".jsp", ".jspx"],
    parse_ext: Some(parse_jsp),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::JAVA);
    Ok(())
}

fn parse_jsp(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &JSP);
    Ok(())
}

fn parse_file(path: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::APACHE_MAVEN);
    let pom = Pom::load(path)?;
    ctx.adopt_metadata(&pom);

    ctx.mark_versioned(
        TAG,
        &catalog::JAVA,
        pom.environment("java").map(|e| e.version()),
    );

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &pom,
        TAG,
    )?;
    Ok(())
}
