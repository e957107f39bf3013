//! C# sources and .NET projects.

use crate::badge::{catalog, BadgeKind};
use crate::manifest::{Configure, CsProj};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;

const TAG: &str = "C#";

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("Microsoft.AspNetCore.Blazor", ExtendedBadge::dependency(catalog::BLAZOR)),
        ("Microsoft.AspNetCore.Components.WebAssembly", ExtendedBadge::dependency(catalog::BLAZOR)),
        ("OpenTK", ExtendedBadge::system(catalog::OPENGL)),
        ("SharpGL", ExtendedBadge::system(catalog::OPENGL)),
        ("StackExchange.Redis", ExtendedBadge::system(catalog::REDIS)),
        ("MongoDB.Driver", ExtendedBadge::system(catalog::MONGODB)),
        ("Npgsql", ExtendedBadge::system(catalog::POSTGRES)),
        ("Swashbuckle.AspNetCore", ExtendedBadge::system(catalog::SWAGGER)),
    ],
    partial: &[
        ("OpenCvSharp4", ExtendedBadge::system(catalog::OPENCV)),
        ("Xamarin", ExtendedBadge::dependency(catalog::XAMARIN)),
    ],
    fuzzy: &[],
};

pub const WALKER: Walker = Walker {
    name: "csharp",
    exts: &[".cs", ".csproj", ".sln"],
    files: &["nuget.config", "NuGet.Config", "packages.config"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

fn parse_ext(path: &Path, ext: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::CSHARP);
    ctx.mark(TAG, &catalog::DOTNET);
    if ext != ".csproj" {
        return Ok(());
    }

    let project = CsProj::load(path)?;
    ctx.adopt_metadata(&project);
    ctx.mark_versioned(
        TAG,
        &catalog::DOTNET,
        project.environment("dotnet").map(|e| e.version()),
    );

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &project,
        TAG,
    )?;
    Ok(())
}

fn parse_file(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::DOTNET);
    Ok(())
}
