//! Dart and Flutter packages.

use crate::badge::{catalog, BadgeKind};
use crate::manifest::{Configure, PubSpec};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "Dart";

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("flutter", ExtendedBadge::dependency(catalog::FLUTTER)),
        ("firebase_core", ExtendedBadge::system(catalog::FIREBASE)),
        ("supabase_flutter", ExtendedBadge::system(catalog::SUPABASE)),
        ("sqflite", ExtendedBadge::system(catalog::SQLITE)),
        ("graphql_flutter", ExtendedBadge::system(catalog::GRAPHQL)),
    ],
    partial: &[],
    fuzzy: &[],
};

pub const WALKER: Walker = Walker {
    name: "dart",
    exts: &[".dart"],
    files: &["pubspec.yaml"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::DART);
    Ok(())
}

fn parse_file(path: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    let spec = PubSpec::load(path)?;
    ctx.mark_versioned(
        TAG,
        &catalog::DART,
        spec.environment("sdk").map(|e| e.version()),
    );
    ctx.adopt_metadata(&spec);

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &spec,
        TAG,
    )?;

    // `flutter: ">=3.10.0"` under `environment` is more precise than the
    // versionless `flutter: {sdk: flutter}` dependency.
    if let Some(env) = spec.environment("flutter").filter(|e| !e.version().is_empty()) {
        let id = catalog::FLUTTER
            .select(ctx.badge_kind())
            .map(|b| b.id().to_string());
        if let Some(badge) = id.and_then(|id| ctx.get_mut(&id)) {
            badge.set_version(env.version());
        }
    }
    Ok(())
}
