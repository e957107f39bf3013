//! Detectors for which the presence of a file proves the technology.

use crate::badge::catalog;
use crate::walk::{Context, WalkError, Walker};
use std::path::Path;

/// Declares a walker that marks one badge for every subscribed entry.
macro_rules! presence_walker {
    (
        $(#[$meta:meta])*
        $walker:ident = $name:literal => $tag:literal, $badge:expr;
        $(exts: [$($ext:literal),* $(,)?];)?
        $(files: [$($file:literal),* $(,)?];)?
        $(dirs: [$($dir:literal),* $(,)?];)?
    ) => {
        $(#[$meta])*
        pub const $walker: Walker = {
            fn detect(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
                ctx.mark($tag, &$badge);
                Ok(())
            }
            Walker {
                name: $name,
                exts: &[$($($ext),*)?],
                files: &[$($($file),*)?],
                dirs: &[$($($dir),*)?],
                parse_ext: Some(detect),
                parse_file: Some(detect),
                parse_dir: Some(detect),
            }
        };
    };
}

presence_walker! {
    ANDROID = "android" => "Android", catalog::ANDROID;
    files: ["AndroidManifest.xml"];
}

presence_walker! {
    BASH = "bash" => "Bash", catalog::BASH;
    exts: [".sh", ".bash", ".zsh", ".bashrc", ".profile"];
}

presence_walker! {
    C = "c" => "C", catalog::C;
    exts: [".c", ".h"];
}

presence_walker! {
    CLOJURE = "clojure" => "Clojure", catalog::CLOJURE;
    exts: [".clj", ".cljs", ".cljc", ".cljsc", ".edn"];
}

presence_walker! {
    CMAKE = "cmake" => "CMake", catalog::CMAKE;
    exts: [".cmake"];
    files: ["CMakeLists.txt"];
}

presence_walker! {
    CPP = "cpp" => "C++", catalog::CPP;
    exts: [".cpp", ".hpp", ".cc", ".cxx", ".hh", ".hxx"];
}

presence_walker! {
    CRYSTAL = "crystal" => "Crystal", catalog::CRYSTAL;
    exts: [".cr"];
    files: ["shard.yml"];
}

presence_walker! {
    CSS = "css" => "CSS3", catalog::CSS3;
    exts: [".css", ".scss", ".sass", ".less", ".styl"];
}

presence_walker! {
    CUDA = "cuda" => "Cuda", catalog::CUDA;
    exts: [".cu", ".cuh"];
}

presence_walker! {
    DOCKER = "docker" => "Docker", catalog::DOCKER;
    files: [
        "dockerfile",
        "Dockerfile",
        "docker-compose.yml",
        "docker-compose.yaml",
        "compose.yml",
        "compose.yaml",
    ];
}

presence_walker! {
    ELIXIR = "elixir" => "Elixir", catalog::ELIXIR;
    exts: [".ex", ".exs", ".eex", ".leex", ".heex"];
    files: ["mix.exs"];
}

presence_walker! {
    ELM = "elm" => "Elm", catalog::ELM;
    exts: [".elm"];
    files: ["elm.json"];
}

presence_walker! {
    ERLANG = "erlang" => "Erlang", catalog::ERLANG;
    exts: [".erl", ".hrl"];
    files: ["rebar.config"];
}

presence_walker! {
    FORTRAN = "fortran" => "Fortran", catalog::FORTRAN;
    exts: [".f", ".for", ".f90", ".f95", ".f03", ".f08"];
}

presence_walker! {
    GDSCRIPT = "gdscript" => "GDScript", catalog::GDSCRIPT;
    exts: [".gd"];
}

presence_walker! {
    GRADLE = "gradle" => "Gradle", catalog::GRADLE;
    exts: [".gradle"];
    files: [
        "gradlew",
        "gradlew.bat",
        "gradle-wrapper.properties",
        "build.gradle.kts",
        "settings.gradle.kts",
    ];
}

presence_walker! {
    GRAPHQL = "graphql" => "GraphQL", catalog::GRAPHQL;
    exts: [".graphql", ".gql", ".graphqls"];
}

presence_walker! {
    GROOVY = "groovy" => "Groovy", catalog::GROOVY;
    exts: [".groovy", ".gvy", ".gsh"];
}

presence_walker! {
    HASKELL = "haskell" => "Haskell", catalog::HASKELL;
    exts: [".hs", ".lhs", ".hsc"];
    files: ["stack.yaml"];
}

presence_walker! {
    HTML = "html" => "HTML", catalog::HTML5;
    exts: [".html", ".htm", ".xhtml"];
}

presence_walker! {
    JULIA = "julia" => "Julia", catalog::JULIA;
    exts: [".jl"];
}

presence_walker! {
    JUPYTER = "jupyter" => "Jupyter", catalog::JUPYTER_NOTEBOOK;
    exts: [".ipynb"];
}

presence_walker! {
    KOTLIN = "kotlin" => "Kotlin", catalog::KOTLIN;
    exts: [".kt", ".kts"];
}

presence_walker! {
    LATEX = "latex" => "LaTeX", catalog::LATEX;
    exts: [".tex", ".ltx", ".cls", ".sty", ".bib"];
}

presence_walker! {
    LUA = "lua" => "Lua", catalog::LUA;
    exts: [".lua", ".luac"];
}

presence_walker! {
    MARKDOWN = "markdown" => "Markdown", catalog::MARKDOWN;
    exts: [".md", ".markdown", ".mdown"];
}

presence_walker! {
    NIM = "nim" => "Nim", catalog::NIM;
    exts: [".nim", ".nims", ".nimble"];
}

presence_walker! {
    NIX = "nix" => "Nix", catalog::NIX;
    exts: [".nix"];
}

presence_walker! {
    OBJECTIVE_C = "objective-c" => "Objective-C", catalog::OBJECTIVE_C;
    exts: [".m", ".mm"];
}

presence_walker! {
    OCAML = "ocaml" => "OCaml", catalog::OCAML;
    exts: [".ml", ".mli"];
    files: ["dune-project"];
}

presence_walker! {
    ORG = "org" => "Org Mode", catalog::ORG_MODE;
    exts: [".org"];
}

presence_walker! {
    PERL = "perl" => "Perl", catalog::PERL;
    exts: [".pl", ".pm"];
    files: ["cpanfile"];
}

presence_walker! {
    POWERSHELL = "powershell" => "PowerShell", catalog::POWERSHELL;
    exts: [".ps1", ".psm1", ".psd1"];
}

presence_walker! {
    QT = "qt" => "Qt", catalog::QT;
    exts: [".qrc", ".qml"];
}

presence_walker! {
    R = "r" => "R", catalog::R;
    exts: [".R", ".r", ".Rmd", ".Rprofile"];
    files: ["DESCRIPTION"];
}

presence_walker! {
    RESCRIPT = "rescript" => "ReScript", catalog::RESCRIPT;
    exts: [".res", ".resi"];
    files: ["rescript.json", "bsconfig.json"];
}

presence_walker! {
    RUBY = "ruby" => "Ruby", catalog::RUBY;
    exts: [".rb", ".ru", ".rake", ".gemspec"];
    files: ["Gemfile", "Rakefile"];
}

presence_walker! {
    SCALA = "scala" => "Scala", catalog::SCALA;
    exts: [".scala", ".sc"];
    files: ["build.sbt"];
}

presence_walker! {
    SOLIDITY = "solidity" => "Solidity", catalog::SOLIDITY;
    exts: [".sol"];
}

presence_walker! {
    SWIFT = "swift" => "Swift", catalog::SWIFT;
    exts: [".swift"];
}

presence_walker! {
    VSCODE = "vscode" => "Visual Studio Code", catalog::VSCODE;
    dirs: [".vscode"];
}

presence_walker! {
    YAML = "yaml" => "YAML", catalog::YAML;
    exts: [".yaml", ".yml"];
}

presence_walker! {
    YARN = "yarn" => "Yarn", catalog::YARN;
    files: ["yarn.lock", ".yarnrc", ".yarnrc.yml"];
}

presence_walker! {
    ZIG = "zig" => "Zig", catalog::ZIG;
    exts: [".zig"];
    files: ["build.zig.zon"];
}
