//! Built-in walkers.
//!
//! [`all_walkers`] returns them in registration order, which is also the order
//! in which several walkers subscribed to the same entry are invoked.

pub mod csharp;
pub mod dart;
pub mod go;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod rust;
pub mod simple;
pub mod vcs;

use crate::walk::Walker;

pub fn all_walkers() -> Vec<Walker> {
    vec![
        simple::ANDROID,
        simple::BASH,
        simple::C,
        simple::CLOJURE,
        simple::CMAKE,
        simple::CPP,
        simple::CRYSTAL,
        csharp::WALKER,
        simple::CSS,
        simple::CUDA,
        dart::WALKER,
        simple::DOCKER,
        simple::ELIXIR,
        simple::ELM,
        simple::ERLANG,
        simple::FORTRAN,
        simple::GDSCRIPT,
        vcs::WALKER,
        go::WALKER,
        simple::GRADLE,
        simple::GRAPHQL,
        simple::GROOVY,
        simple::HASKELL,
        simple::HTML,
        java::WALKER,
        javascript::WALKER,
        java::JSP_WALKER,
        simple::JULIA,
        simple::JUPYTER,
        simple::KOTLIN,
        simple::LATEX,
        simple::LUA,
        simple::MARKDOWN,
        simple::NIM,
        simple::NIX,
        simple::OBJECTIVE_C,
        simple::OCAML,
        simple::ORG,
        simple::PERL,
        php::WALKER,
        simple::POWERSHELL,
        python::WALKER,
        simple::QT,
        simple::R,
        simple::RESCRIPT,
        simple::RUBY,
        rust::WALKER,
        simple::SCALA,
        simple::SOLIDITY,
        simple::SWIFT,
        javascript::TYPESCRIPT_WALKER,
        simple::VSCODE,
        simple::YAML,
        simple::YARN,
        simple::ZIG,
    ]
}

/// Looks a built-in walker up by name.
pub fn find(name: &str) -> Option<Walker> {
    all_walkers().into_iter().find(|w| w.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let walkers = all_walkers();
        let names: HashSet<&str> = walkers.iter().map(|w| w.name).collect();
        assert_eq!(names.len(), walkers.len());
    }

    #[test]
    fn test_every_subscription_has_a_callback() {
        for w in all_walkers() {
            assert!(w.exts.is_empty() || w.parse_ext.is_some(), "{}", w.name);
            assert!(w.files.is_empty() || w.parse_file.is_some(), "{}", w.name);
            assert!(w.dirs.is_empty() || w.parse_dir.is_some(), "{}", w.name);
            assert!(
                !(w.exts.is_empty() && w.files.is_empty() && w.dirs.is_empty()),
                "{} subscribes to nothing",
                w.name
            );
        }
    }

    #[test]
    fn test_extensions_are_dotted() {
        for w in all_walkers() {
            for ext in w.exts {
                assert!(ext.starts_with('.'), "{}: {}", w.name, ext);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("git").unwrap().dirs, &[".git"]);
        assert!(find("cobol").is_none());
    }
}
