//! Cargo packages.

use crate::badge::{catalog, BadgeKind, BadgeUnion, ShieldBadge};
use crate::manifest::{CargoToml, Configure};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "Rust";

pub const HYPERLANE: BadgeUnion = BadgeUnion::shield(ShieldBadge::new(
    "hyperlane",
    "hyperlane",
    "#dea584",
    "rust",
    "white",
    "https://github.com/ltpp-universe/hyperlane",
));

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("hyperlane", ExtendedBadge::dependency(HYPERLANE)),
        ("opencv", ExtendedBadge::system(catalog::OPENCV)),
        ("redis", ExtendedBadge::system(catalog::REDIS)),
        ("mongodb", ExtendedBadge::system(catalog::MONGODB)),
        ("rusqlite", ExtendedBadge::system(catalog::SQLITE)),
        ("tokio-postgres", ExtendedBadge::system(catalog::POSTGRES)),
        ("jsonwebtoken", ExtendedBadge::system(catalog::JWT)),
        ("tauri", ExtendedBadge::dependency(catalog::TAURI)),
    ],
    partial: &[],
    fuzzy: &[],
};

pub const WALKER: Walker = Walker {
    name: "rust",
    exts: &[".rs", ".rlib"],
    files: &["Cargo.toml"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::RUST);
    Ok(())
}

fn parse_file(path: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    let manifest = CargoToml::load(path)?;
    ctx.mark_versioned(
        TAG,
        &catalog::RUST,
        manifest.environment("rust").map(|e| e.version()),
    );
    ctx.adopt_metadata(&manifest);

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &manifest,
        TAG,
    )?;
    Ok(())
}
