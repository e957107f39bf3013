//! Project identity from the enclosing git checkout.

use crate::git::{self, GitError};
use crate::walk::{Context, WalkError, Walker};
use std::path::Path;
use tracing::debug;

pub const WALKER: Walker = Walker {
    name: "git",
    dirs: &[".git"],
    parse_dir: Some(parse_dir),
    ..Walker::EMPTY
};

/// Only the first `.git` directory counts. Nested checkouts such as vendored
/// submodules do not rename the project.
fn parse_dir(path: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    if !ctx.project_owner.is_empty() {
        return Ok(());
    }

    let remote = match git::read_origin(path) {
        Ok(remote) => remote,
        Err(GitError::MissingRemote(config)) => {
            debug!(config = %config.display(), "repository has no origin remote");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    debug!(
        host = %remote.host,
        owner = %remote.owner,
        name = %remote.name,
        "resolved origin remote"
    );
    ctx.project_name = remote.name;
    ctx.project_owner = remote.owner;
    Ok(())
}
