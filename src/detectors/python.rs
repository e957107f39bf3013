//! Python sources and packaging manifests.

use crate::badge::{catalog, BadgeKind, BadgeUnion, ShieldBadge};
use crate::manifest::{PyProject, Requirements};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use regex::bytes::Regex;
use std::path::Path;
use std::sync::OnceLock;

const TAG: &str = "Python";

pub const DJANGO: BadgeUnion = BadgeUnion::shield(ShieldBadge::new(
    "Django",
    "django",
    "#092E20",
    "django",
    "white",
    "https://www.djangoproject.com/",
));
pub const FLASK: BadgeUnion = BadgeUnion::shield(ShieldBadge::new(
    "Flask",
    "flask",
    "#000000",
    "flask",
    "white",
    "https://flask.palletsprojects.com/",
));
pub const FASTAPI: BadgeUnion = BadgeUnion::shield(ShieldBadge::new(
    "FastAPI",
    "FastAPI",
    "#005571",
    "fastapi",
    "white",
    "https://fastapi.tiangolo.com/",
));

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("python", ExtendedBadge::dependency(catalog::PYTHON)),
        ("fastapi", ExtendedBadge::dependency(FASTAPI)),
        ("Jinja2", ExtendedBadge::dependency(catalog::JINJA)),
        ("jinja2", ExtendedBadge::dependency(catalog::JINJA)),
        ("odps", ExtendedBadge::dependency(catalog::MAXCOMPUTE)),
        ("pyodps", ExtendedBadge::dependency(catalog::MAXCOMPUTE)),
        ("django", ExtendedBadge::dependency(DJANGO)),
        ("Django", ExtendedBadge::dependency(DJANGO)),
        ("flask", ExtendedBadge::dependency(FLASK)),
        ("Flask", ExtendedBadge::dependency(FLASK)),
        ("aiohttp", ExtendedBadge::dependency(catalog::AIOHTTP)),
        ("prefect", ExtendedBadge::dependency(catalog::PREFECT)),
        ("pug", ExtendedBadge::dependency(catalog::PUG)),
        ("pytest", ExtendedBadge::dependency(catalog::PYTEST)),
        ("scrapy", ExtendedBadge::dependency(catalog::SCRAPY)),
        ("Scrapy", ExtendedBadge::dependency(catalog::SCRAPY)),
        ("streamlit", ExtendedBadge::dependency(catalog::STREAMLIT)),
        ("opencv-python", ExtendedBadge::system(catalog::OPENCV)),
        ("PyOpenGL", ExtendedBadge::system(catalog::OPENGL)),
        ("psycopg2", ExtendedBadge::system(catalog::POSTGRES)),
        ("psycopg2-binary", ExtendedBadge::system(catalog::POSTGRES)),
        ("pymongo", ExtendedBadge::system(catalog::MONGODB)),
        ("redis", ExtendedBadge::system(catalog::REDIS)),
        ("PyJWT", ExtendedBadge::system(catalog::JWT)),
    ],
    partial: &[],
    fuzzy: &[("elasticsearch", ExtendedBadge::system(catalog::ELASTICSEARCH))],
};

pub const WALKER: Walker = Walker {
    name: "python",
    exts: &[".py", ".pyi", ".pyc", ".pyo"],
    files: &["pyproject.toml", "requirements.txt"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

/// Framework imports, first match wins. Matched on raw bytes so sources in
/// legacy encodings are still scanned.
fn import_patterns() -> &'static [(Regex, BadgeUnion)] {
    static PATTERNS: OnceLock<Vec<(Regex, BadgeUnion)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            ("django", DJANGO),
            ("flask", FLASK),
            ("fastapi", FASTAPI),
            ("aiohttp", catalog::AIOHTTP),
            ("jinja2", catalog::JINJA),
            ("odps", catalog::MAXCOMPUTE),
        ]
        .into_iter()
        .filter_map(|(module, badge)| {
            Regex::new(&format!(r"(?i)\b(?:import|from)\s+{module}\b"))
                .ok()
                .map(|re| (re, badge))
        })
        .collect()
    })
}

fn parse_ext(path: &Path, ext: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::PYTHON);
    if ext != ".py" {
        return Ok(());
    }

    let script = std::fs::read(path).map_err(|e| WalkError::io(path, e))?;
    if let Some((_, badge)) = import_patterns().iter().find(|(re, _)| re.is_match(&script)) {
        ctx.mark(TAG, badge);
    }
    Ok(())
}

fn parse_file(path: &Path, file: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::PYTHON);
    let resolvers = [
        (BadgeKind::Shield, &SHIELD_RESOLVER),
        (BadgeKind::Badgen, &DependencyResolver::EMPTY),
    ];

    match file {
        "pyproject.toml" => {
            let project = PyProject::load(path)?;
            if project.uses_poetry() {
                ctx.mark(TAG, &catalog::POETRY);
            }
            ctx.adopt_metadata(&project);
            resolve_dependency(ctx, &resolvers, &project, TAG)?;
        }
        "requirements.txt" => {
            let requirements = Requirements::load(path)?;
            resolve_dependency(ctx, &resolvers, &requirements, TAG)?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use yare::parameterized;

    #[parameterized(
        django = { "from django.http import HttpResponse\n", "Django" },
        flask_upper = { "IMPORT Flask\n", "Flask" },
        fastapi = { "from fastapi import FastAPI\n", "FastAPI" },
        aiohttp = { "import aiohttp\n", "Aiohttp" },
        jinja = { "from jinja2 import Template\n", "Jinja" },
        maxcompute = { "from odps import ODPS\n", "MaxCompute" },
    )]
    fn test_import_detection(script: &str, id: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, script).unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_ext(&path, ".py", &mut ctx).unwrap();

        assert!(ctx.contains(id));
        assert!(ctx.contains("Python"));
        assert_eq!(ctx.badges().len(), 2);
    }

    #[test]
    fn test_first_import_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, "import flask\nimport django\n").unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_ext(&path, ".py", &mut ctx).unwrap();
        assert!(ctx.contains("Django"));
        assert!(!ctx.contains("Flask"));
    }

    #[test]
    fn test_latin1_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.py");
        fs::write(
            &path,
            b"# -*- coding: latin-1 -*-\n# caf\xe9\nfrom flask import Flask\n",
        )
        .unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_ext(&path, ".py", &mut ctx).unwrap();
        assert!(ctx.contains("Python"));
        assert!(ctx.contains("Flask"));
    }

    #[test]
    fn test_unreadable_source_still_marks_python() {
        let dir = TempDir::new().unwrap();
        let mut ctx = Context::new(Vec::new());
        let result = parse_ext(&dir.path().join("gone.py"), ".py", &mut ctx);
        assert!(result.is_err());
        assert!(ctx.contains("Python"));
    }

    #[test]
    fn test_module_prefix_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, "import flasky\n").unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_ext(&path, ".py", &mut ctx).unwrap();
        assert!(!ctx.contains("Flask"));
    }

    #[test]
    fn test_compiled_module_is_not_read() {
        let mut ctx = Context::new(Vec::new());
        parse_ext(Path::new("/nonexistent/app.pyc"), ".pyc", &mut ctx).unwrap();
        assert!(ctx.contains("Python"));
    }

    #[test]
    fn test_poetry_project() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pyproject.toml");
        fs::write(
            &path,
            r#"[tool.poetry]
name = "crawler"
description = "Scrapes things"

[tool.poetry.dependencies]
python = "^3.11"
scrapy = "^2.11"
"#,
        )
        .unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_file(&path, "pyproject.toml", &mut ctx).unwrap();

        assert_eq!(ctx.project_name, "crawler");
        assert!(ctx.contains("Poetry"));
        assert_eq!(ctx.get("Python").unwrap().badge.version(), Some("^3.11"));
        assert_eq!(ctx.get("Scrapy").unwrap().badge.version(), Some("^2.11"));
    }

    #[test]
    fn test_requirements() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "flask==3.0.0\npytest>=8\n").unwrap();

        let mut ctx = Context::new(Vec::new());
        parse_file(&path, "requirements.txt", &mut ctx).unwrap();

        assert_eq!(ctx.get("Flask").unwrap().badge.version(), Some("3.0.0"));
        assert!(ctx.contains("Pytest"));
        assert!(!ctx.contains("Poetry"));
    }
}
