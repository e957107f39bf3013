//! JavaScript and TypeScript projects.

use crate::badge::{catalog, BadgeKind};
use crate::manifest::{Configure, PackageJson};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "JavaScript";
const TS_TAG: &str = "TypeScript";

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("bun", ExtendedBadge::dependency(catalog::BUN)),
        ("chart.js", ExtendedBadge::dependency(catalog::CHART_JS)),
        ("ejs", ExtendedBadge::dependency(catalog::EJS)),
        ("vue", ExtendedBadge::dependency(catalog::VUE)),
        ("vite", ExtendedBadge::dependency(catalog::VITE)),
        ("sass", ExtendedBadge::dependency(catalog::SASS)),
        ("antd", ExtendedBadge::dependency(catalog::ANT_DESIGN)),
        ("@adonisjs/core", ExtendedBadge::dependency(catalog::ADONIS_JS)),
        ("alpinejs", ExtendedBadge::dependency(catalog::ALPINE_JS)),
        ("@apollo/client", ExtendedBadge::dependency(catalog::APOLLO_GRAPHQL)),
        ("apollo-server", ExtendedBadge::dependency(catalog::APOLLO_GRAPHQL)),
        ("astro", ExtendedBadge::dependency(catalog::ASTRO)),
        ("bootstrap", ExtendedBadge::dependency(catalog::BOOTSTRAP)),
        ("buefy", ExtendedBadge::dependency(catalog::BUEFY)),
        ("bulma", ExtendedBadge::dependency(catalog::BULMA)),
        ("@chakra-ui/react", ExtendedBadge::dependency(catalog::CHAKRA_UI)),
        ("daisyui", ExtendedBadge::dependency(catalog::DAISYUI)),
        ("directus", ExtendedBadge::dependency(catalog::DIRECTUS)),
        ("electron", ExtendedBadge::dependency(catalog::ELECTRON)),
        ("ember-source", ExtendedBadge::dependency(catalog::EMBER)),
        ("esbuild", ExtendedBadge::dependency(catalog::ESBUILD)),
        ("expo", ExtendedBadge::dependency(catalog::EXPO)),
        ("express", ExtendedBadge::dependency(catalog::EXPRESS)),
        ("fastify", ExtendedBadge::dependency(catalog::FASTIFY)),
        ("gatsby", ExtendedBadge::dependency(catalog::GATSBY)),
        ("gsap", ExtendedBadge::dependency(catalog::GREENSOCK)),
        ("gulp", ExtendedBadge::dependency(catalog::GULP)),
        ("@wordpress/block-editor", ExtendedBadge::dependency(catalog::GUTENBERG)),
        ("handlebars", ExtendedBadge::dependency(catalog::HANDLEBARS)),
        ("jasmine", ExtendedBadge::dependency(catalog::JASMINE)),
        ("jquery", ExtendedBadge::dependency(catalog::JQUERY)),
        ("zod", ExtendedBadge::dependency(catalog::ZOD)),
        ("less", ExtendedBadge::dependency(catalog::LESS)),
        ("nuxt", ExtendedBadge::dependency(catalog::NUXT)),
        ("nx", ExtendedBadge::dependency(catalog::NX)),
        ("opencv4nodejs", ExtendedBadge::system(catalog::OPENCV)),
        ("gl", ExtendedBadge::system(catalog::OPENGL)),
        ("p5", ExtendedBadge::dependency(catalog::P5JS)),
        ("pnpm", ExtendedBadge::dependency(catalog::PNPM)),
        ("quasar", ExtendedBadge::dependency(catalog::QUASAR)),
        ("react", ExtendedBadge::dependency(catalog::REACT)),
        ("amqplib", ExtendedBadge::system(catalog::RABBIT_MQ)),
        ("react-native", ExtendedBadge::dependency(catalog::REACT_NATIVE)),
        ("react-query", ExtendedBadge::dependency(catalog::REACT_QUERY)),
        ("@tanstack/react-query", ExtendedBadge::dependency(catalog::REACT_QUERY)),
        ("react-router-dom", ExtendedBadge::dependency(catalog::REACT_ROUTER)),
        ("react-hook-form", ExtendedBadge::dependency(catalog::REACT_HOOK_FORM)),
        ("redux", ExtendedBadge::dependency(catalog::REDUX)),
        ("@reduxjs/toolkit", ExtendedBadge::dependency(catalog::REDUX)),
        ("remix", ExtendedBadge::dependency(catalog::REMIX)),
        ("rollup", ExtendedBadge::dependency(catalog::ROLLUP)),
        ("rxdb", ExtendedBadge::dependency(catalog::RXDB)),
        ("rxjs", ExtendedBadge::dependency(catalog::RXJS)),
        ("semantic-ui-react", ExtendedBadge::dependency(catalog::SEMANTIC_UI_REACT)),
        ("snowflake-sdk", ExtendedBadge::dependency(catalog::SNOWFLAKE)),
        ("socket.io", ExtendedBadge::dependency(catalog::SOCKET_IO)),
        ("styled-components", ExtendedBadge::dependency(catalog::STYLED_COMPONENTS)),
        ("stylus", ExtendedBadge::dependency(catalog::STYLUS)),
        ("svelte", ExtendedBadge::dependency(catalog::SVELTE)),
        ("@sveltejs/kit", ExtendedBadge::dependency(catalog::SVELTEKIT)),
        ("tailwindcss", ExtendedBadge::dependency(catalog::TAILWINDCSS)),
        ("@tauri-apps/api", ExtendedBadge::dependency(catalog::TAURI)),
        ("three", ExtendedBadge::dependency(catalog::THREE_JS)),
        ("type-graphql", ExtendedBadge::dependency(catalog::TYPE_GRAPHQL)),
        ("typescript", ExtendedBadge::dependency(catalog::TYPESCRIPT)),
        ("unocss", ExtendedBadge::dependency(catalog::UNOCSS)),
        ("vuetify", ExtendedBadge::dependency(catalog::VUETIFY)),
        ("webpack", ExtendedBadge::dependency(catalog::WEBPACK)),
        ("web3", ExtendedBadge::dependency(catalog::WEB3_JS)),
        ("windicss", ExtendedBadge::dependency(catalog::WINDICSS)),
        ("graphql", ExtendedBadge::system(catalog::GRAPHQL)),
        ("mongodb", ExtendedBadge::system(catalog::MONGODB)),
        ("mongoose", ExtendedBadge::system(catalog::MONGODB)),
        ("mysql", ExtendedBadge::system(catalog::MYSQL)),
        ("mysql2", ExtendedBadge::system(catalog::MYSQL)),
        ("pg", ExtendedBadge::system(catalog::POSTGRES)),
        ("redis", ExtendedBadge::system(catalog::REDIS)),
        ("ioredis", ExtendedBadge::system(catalog::REDIS)),
        ("sqlite3", ExtendedBadge::system(catalog::SQLITE)),
        ("firebase", ExtendedBadge::system(catalog::FIREBASE)),
        ("@supabase/supabase-js", ExtendedBadge::system(catalog::SUPABASE)),
        ("jsonwebtoken", ExtendedBadge::system(catalog::JWT)),
    ],
    partial: &[("@trpc/", ExtendedBadge::dependency(catalog::TRPC))],
    fuzzy: &[
        ("@angular", ExtendedBadge::dependency(catalog::ANGULAR)),
        ("aurelia", ExtendedBadge::dependency(catalog::AURELIA)),
        ("elasticsearch", ExtendedBadge::system(catalog::ELASTICSEARCH)),
        ("framework7", ExtendedBadge::dependency(catalog::FRAMEWORK7)),
        ("@ionic", ExtendedBadge::dependency(catalog::IONIC)),
        ("@mui", ExtendedBadge::dependency(catalog::MUI)),
        ("meteor", ExtendedBadge::dependency(catalog::METEOR)),
        ("@mantine", ExtendedBadge::dependency(catalog::MANTINE)),
        ("@radix-ui", ExtendedBadge::system(catalog::RADIX_UI)),
    ],
};

/// TypeScript is the only dependency here with a badgen template.
pub const BADGEN_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[("typescript", ExtendedBadge::dependency(catalog::TYPESCRIPT))],
    ..DependencyResolver::EMPTY
};

pub const WALKER: Walker = Walker {
    name: "javascript",
    exts: &[".js", ".mjs", ".cjs", ".jsx"],
    files: &[
        "package.json",
        "package-lock.json",
        "bun.lockb",
        "bun.lock",
        "pnpm-lock.yaml",
        "deno.json",
        "deno.jsonc",
    ],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

pub const TYPESCRIPT_WALKER: Walker = Walker {
    name: "typescript",
    exts: &[".ts", ".tsx", ".mts", ".cts"],
    files: &["tsconfig.json"],
    parse_ext: Some(parse_typescript),
    parse_file: Some(parse_typescript),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::JAVASCRIPT);
    Ok(())
}

fn parse_typescript(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TS_TAG, &catalog::TYPESCRIPT);
    Ok(())
}

fn parse_file(path: &Path, file: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::JAVASCRIPT);
    match file {
        "deno.json" | "deno.jsonc" => {
            ctx.mark(TAG, &catalog::DENO);
        }
        "bun.lockb" | "bun.lock" => {
            ctx.mark(TAG, &catalog::BUN);
        }
        "pnpm-lock.yaml" => {
            ctx.mark(TAG, &catalog::PNPM);
        }
        "package-lock.json" => {
            ctx.mark(TAG, &catalog::NPM);
        }
        "package.json" => parse_package_json(path, ctx)?,
        _ => {}
    }
    Ok(())
}

fn parse_package_json(path: &Path, ctx: &mut Context) -> Result<(), WalkError> {
    let package = PackageJson::load(path)?;
    ctx.adopt_metadata(&package);

    for env in package.environments() {
        let entry = match env.name() {
            "npm" => &catalog::NPM,
            "node" => &catalog::NODEJS,
            _ => continue,
        };
        ctx.mark_versioned(TAG, entry, Some(env.version()));
    }

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &BADGEN_RESOLVER),
        ],
        &package,
        TAG,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn package(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_package_json() {
        let (_dir, path) = package(
            r#"{
                "name": "storefront",
                "description": "Web shop",
                "engines": {"node": ">=18", "npm": ">=9"},
                "dependencies": {"react": "^18.2.0", "@trpc/server": "^10.0.0", "@mui/material": "^5.0.0"},
                "devDependencies": {"vite": "^5.0.0"}
            }"#,
        );

        let mut ctx = Context::new(Vec::new());
        parse_file(&path, "package.json", &mut ctx).unwrap();

        assert_eq!(ctx.project_name, "storefront");
        assert_eq!(ctx.project_description, "Web shop");
        assert_eq!(ctx.get("Node.js").unwrap().badge.version(), Some(">=18"));
        assert_eq!(ctx.get("NPM").unwrap().badge.version(), Some(">=9"));
        assert_eq!(ctx.get("React").unwrap().badge.version(), Some("^18.2.0"));
        assert_eq!(ctx.get("Vite").unwrap().badge.version(), Some("^5.0.0"));
        assert!(ctx.contains("tRPC"));
        assert!(ctx.contains("MUI"));
        assert!(ctx.contains("JavaScript"));
    }

    #[test]
    fn test_lockfiles() {
        let mut ctx = Context::new(Vec::new());
        let dir = Path::new("/p");
        parse_file(&dir.join("bun.lockb"), "bun.lockb", &mut ctx).unwrap();
        parse_file(&dir.join("deno.json"), "deno.json", &mut ctx).unwrap();

        assert!(ctx.contains("Bun"));
        assert!(ctx.contains("Deno JS"));
    }

    #[test]
    fn test_malformed_package_json() {
        let (_dir, path) = package("{ not json");
        let mut ctx = Context::new(Vec::new());
        let err = parse_file(&path, "package.json", &mut ctx).unwrap_err();
        assert!(matches!(err, WalkError::Manifest(_)));
        assert!(ctx.contains("JavaScript"));
    }

    #[test]
    fn test_badgen_resolves_typescript_only() {
        let (_dir, path) = package(
            r#"{"devDependencies": {"typescript": "^5.3.0", "react": "^18.0.0"}}"#,
        );
        let mut ctx = Context::new(Vec::new()).with_badge_kind(BadgeKind::Badgen);
        parse_file(&path, "package.json", &mut ctx).unwrap();

        let ids: Vec<&str> = ctx.badges().iter().map(|b| b.badge.id()).collect();
        assert_eq!(ids, vec!["TypeScript"]);
        assert_eq!(ctx.get("TypeScript").unwrap().badge.version(), Some("^5.3.0"));
    }

    #[test]
    fn test_typescript_sources() {
        let mut ctx = Context::new(Vec::new());
        parse_typescript(Path::new("/p/app.tsx"), ".tsx", &mut ctx).unwrap();
        assert_eq!(ctx.get("TypeScript").unwrap().tag, "TypeScript");
    }
}
