//! Walk integration tests
//!
//! These tests run the full set of built-in walkers over fixture projects and
//! scratch directories and check the resulting context.

use docwiz::badge::{BadgeKind, Markup};
use docwiz::detectors::{all_walkers, go};
use docwiz::filter::{IgnoreFilter, DEFAULT_IGNORE_FILE};
use docwiz::walk::{walk, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn scan(root: &Path) -> Context {
    let ignore = IgnoreFilter::load(root, DEFAULT_IGNORE_FILE).expect("Failed to load ignore file");
    let mut ctx = Context::new(all_walkers()).with_ignore(ignore);
    walk(root, &mut ctx).expect("Walk failed");
    ctx
}

fn version<'a>(ctx: &'a Context, id: &str) -> Option<&'a str> {
    ctx.get(id)
        .unwrap_or_else(|| panic!("{id} not detected"))
        .badge
        .version()
}

#[test]
fn test_go_gin_stack() {
    let mut ctx = Context::new(vec![go::WALKER]);
    walk(&fixture("go-gin"), &mut ctx).unwrap();

    let badges = ctx.badges();
    assert_eq!(badges.len(), 2);
    assert!(badges.iter().all(|b| b.tag == "Go"));
    assert_eq!(badges[0].badge.id(), "Gin");
    assert_eq!(badges[0].badge.version(), Some("v1.9.0"));
    assert_eq!(badges[1].badge.id(), "Go");
    assert_eq!(badges[1].badge.version(), Some("1.21"));

    let expected = format!(
        "{} {}",
        badges[0].badge.markdown(),
        badges[1].badge.markdown()
    );
    assert_eq!(ctx.project_stack, expected);
    assert!(ctx.failures().is_empty());
}

#[test]
fn test_go_gin_stack_with_all_walkers() {
    let ctx = scan(&fixture("go-gin"));
    let ids: Vec<&str> = ctx.badges().iter().map(|b| b.badge.id()).collect();
    assert_eq!(ids, vec!["Gin", "Go"]);
}

#[test]
fn test_suppressed_language_badge() {
    let mut ignore = IgnoreFilter::empty();
    ignore.suppress_badge("Go");
    let mut ctx = Context::new(vec![go::WALKER]).with_ignore(ignore);
    walk(&fixture("go-gin"), &mut ctx).unwrap();

    assert!(ctx.project_stack.contains("[![Gin]"));
    assert!(!ctx.project_stack.contains("[![Go]"));
    assert!(!ctx.project_stack.contains("  "));
    assert!(ctx.contains("Go"));
}

#[test]
fn test_polyglot_fixture() {
    let ctx = scan(&fixture("polyglot"));

    assert_eq!(ctx.project_name, "storefront");
    assert_eq!(ctx.project_description, "Storefront web client");

    assert_eq!(version(&ctx, "Node.js"), Some(">=20"));
    assert_eq!(version(&ctx, "React"), Some("^18.2.0"));
    assert_eq!(version(&ctx, "Express.js"), Some("^4.18.2"));
    assert_eq!(version(&ctx, "TypeScript"), Some("^5.3.3"));
    assert_eq!(version(&ctx, "Python"), Some(">=3.11"));
    assert_eq!(version(&ctx, "FastAPI"), Some(">=0.110"));
    assert_eq!(version(&ctx, "Redis"), None);
    assert!(ctx.contains("Docker"));
    assert!(ctx.contains("JavaScript"));

    // vendor/ is ignored
    assert!(!ctx.contains("Vue.js"));

    // detected but suppressed
    assert!(ctx.contains("Visual Studio Code"));
    assert!(!ctx.project_stack.contains("Visual Studio Code"));
    assert!(ctx.failures().is_empty(), "{:?}", ctx.failures());
}

#[test]
fn test_badgen_family() {
    let root = fixture("polyglot");
    let ignore = IgnoreFilter::load(&root, DEFAULT_IGNORE_FILE).unwrap();
    let mut ctx = Context::new(all_walkers())
        .with_ignore(ignore)
        .with_badge_kind(BadgeKind::Badgen);
    walk(&root, &mut ctx).unwrap();

    let ids: Vec<&str> = ctx.badges().iter().map(|b| b.badge.id()).collect();
    assert!(ids.contains(&"Docker"));
    assert!(ids.contains(&"TypeScript"));
    assert!(!ids.contains(&"React"));
    assert!(ctx.failures().is_empty(), "{:?}", ctx.failures());
}

#[test]
fn test_markup_selection() {
    let mut ctx = Context::new(vec![go::WALKER]).with_markup(Markup::Html);
    walk(&fixture("go-gin"), &mut ctx).unwrap();
    assert!(ctx.project_stack.starts_with("<a href="));
}

#[test]
fn test_git_origin_names_project() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(
        root.join(".git/config"),
        "[remote \"origin\"]\n\turl = git@github.com:acme/shop.git\n",
    )
    .unwrap();
    fs::write(
        root.join("package.json"),
        r#"{"name": "shop-web", "description": "Shop"}"#,
    )
    .unwrap();

    let ctx = scan(root);
    assert_eq!(ctx.project_owner, "acme");
    assert_eq!(ctx.project_name, "shop");
    assert_eq!(ctx.project_description, "Shop");
}

#[test]
fn test_cargo_workspace_keeps_rust_version() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("crates/a/src")).unwrap();
    fs::write(
        root.join("Cargo.toml"),
        "[workspace]\nmembers = [\"crates/a\"]\n\n[workspace.package]\nrust-version = \"1.75\"\n",
    )
    .unwrap();
    fs::write(
        root.join("crates/a/Cargo.toml"),
        "[package]\nname = \"a\"\nrust-version.workspace = true\n",
    )
    .unwrap();
    fs::write(root.join("crates/a/src/lib.rs"), "").unwrap();

    let ctx = scan(root);
    assert_eq!(version(&ctx, "Rust"), Some("1.75"));
    assert_eq!(ctx.project_name, "a");
    assert!(ctx.failures().is_empty(), "{:?}", ctx.failures());
}

#[test]
fn test_child_pom_keeps_java_version() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("svc")).unwrap();
    fs::write(
        root.join("pom.xml"),
        r#"<project>
  <groupId>com.example</groupId>
  <artifactId>parent</artifactId>
  <packaging>pom</packaging>
  <modules><module>svc</module></modules>
  <properties><java.version>17</java.version></properties>
</project>"#,
    )
    .unwrap();
    fs::write(
        root.join("svc/pom.xml"),
        r#"<project>
  <parent>
    <groupId>com.example</groupId>
    <artifactId>parent</artifactId>
    <version>1.0.0</version>
  </parent>
  <artifactId>svc</artifactId>
</project>"#,
    )
    .unwrap();

    let ctx = scan(root);
    assert_eq!(version(&ctx, "Java"), Some("17"));
    assert!(ctx.contains("Apache Maven"));
    assert!(ctx.failures().is_empty(), "{:?}", ctx.failures());
}

#[test]
fn test_latin1_python_source() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("legacy.py"),
        b"# -*- coding: latin-1 -*-\nprint('caf\xe9')\n",
    )
    .unwrap();

    let ctx = scan(dir.path());
    assert!(ctx.contains("Python"));
    assert!(ctx.failures().is_empty(), "{:?}", ctx.failures());
}

#[test]
fn test_broken_manifest_is_recorded() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("Cargo.toml"), "[package\nname = ").unwrap();
    fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();

    let ctx = scan(root);
    assert!(ctx.contains("Rust"));
    assert_eq!(ctx.failures().len(), 1);
    assert_eq!(ctx.failures()[0].walker, "rust");
    assert!(ctx.failures()[0].path.ends_with("Cargo.toml"));
}

#[test]
fn test_empty_project() {
    let dir = TempDir::new().unwrap();
    let ctx = scan(dir.path());

    assert!(ctx.badges().is_empty());
    assert!(ctx.project_stack.is_empty());
    assert_eq!(ctx.sections.len(), 3);
}
