//! PHP sources and Composer packages.

use crate::badge::{catalog, BadgeKind};
use crate::manifest::{Composer, Configure};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "PHP";

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("codeigniter4/framework", ExtendedBadge::dependency(catalog::CODEIGNITER)),
        ("getgrav/grav", ExtendedBadge::dependency(catalog::GRAV)),
        ("laravel/framework", ExtendedBadge::dependency(catalog::LARAVEL)),
        ("livewire/livewire", ExtendedBadge::dependency(catalog::LIVEWIRE)),
        ("php-opencv/php-opencv", ExtendedBadge::system(catalog::OPENCV)),
        ("predis/predis", ExtendedBadge::system(catalog::REDIS)),
        ("firebase/php-jwt", ExtendedBadge::system(catalog::JWT)),
    ],
    partial: &[],
    fuzzy: &[
        ("joomla", ExtendedBadge::dependency(catalog::JOOMLA)),
        ("symfony", ExtendedBadge::system(catalog::SYMFONY)),
        ("opencv", ExtendedBadge::system(catalog::OPENCV)),
    ],
};

pub const WALKER: Walker = Walker {
    name: "php",
    exts: &[".php", ".phtml", ".php3", ".php4", ".php5"],
    files: &["composer.json"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::PHP);
    Ok(())
}

fn parse_file(path: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    let composer = Composer::load(path)?;
    ctx.mark_versioned(
        TAG,
        &catalog::PHP,
        composer.environment("php").map(|e| e.version()),
    );
    ctx.adopt_metadata(&composer);

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &composer,
        TAG,
    )?;
    Ok(())
}
