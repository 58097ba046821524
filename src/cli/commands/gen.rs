//! Project file generation.
//!
//! Only `gen travis-yml` lives here; `gen gomfile` needs the manifest
//! collaborator.

use crate::error::{GomError, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::dispatcher::{Command, CommandResult};

/// Name of the generated CI config.
pub const TRAVIS_YML: &str = ".travis.yml";

const TRAVIS_TEMPLATE: &str = "\
language: go
go:
  - tip
before_install:
  - go get github.com/mattn/gom
script:
  - $HOME/gopath/bin/gom install
  - $HOME/gopath/bin/gom test
";

/// Writes a `.travis.yml` that installs and tests through gom.
pub struct TravisYmlCommand {
    path: PathBuf,
}

impl TravisYmlCommand {
    /// Target `.travis.yml` in `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(TRAVIS_YML),
        }
    }
}

impl Command for TravisYmlCommand {
    fn execute(&self) -> Result<CommandResult> {
        if self.path.exists() {
            return Err(GomError::AlreadyExists {
                path: self.path.clone(),
            });
        }

        fs::write(&self.path, TRAVIS_TEMPLATE)?;
        tracing::info!("wrote {}", self.path.display());
        Ok(CommandResult::success())
    }
}
