use crate::env::{EnvSource, ProcessEnv};
use anyhow::Context;
use std::path::PathBuf;

/// Overrides the entire base directory.
pub const PERSONAL_DIR_VAR: &str = "PERSONAL_SUPERPOWERS_DIR";

/// Desktop-convention parent of the `superpowers` directory, consulted when
/// the full override is absent.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Overrides only the archive directory; test isolation escape hatch.
pub const TEST_ARCHIVE_DIR_VAR: &str = "TEST_ARCHIVE_DIR";

/// Every variable the resolver reads.
pub const RECOGNIZED_VARS: &[&str] =
    &[PERSONAL_DIR_VAR, XDG_CONFIG_HOME_VAR, TEST_ARCHIVE_DIR_VAR];

const BASE_DIR_NAME: &str = "superpowers";
const ARCHIVE_DIR_NAME: &str = "conversation-archive";
const INDEX_DIR_NAME: &str = "conversation-index";
const DB_FILE_NAME: &str = "db.sqlite";
const EXCLUDE_FILE_NAME: &str = "exclude.txt";

/// Resolves the superpowers directory layout from an environment source.
///
/// Every operation recomputes its result from the source on each call;
/// nothing is cached and nothing touches the filesystem.
#[derive(Debug, Clone)]
pub struct PathResolver<E = ProcessEnv> {
    env: E,
}

impl PathResolver<ProcessEnv> {
    /// Resolver over the live process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> PathResolver<E> {
    #[must_use]
    pub fn new(env: E) -> Self {
        Self { env }
    }

    // An empty value counts as unset; whitespace-only values count as set.
    fn var(&self, name: &str) -> Option<String> {
        self.env.var(name).filter(|value| !value.is_empty())
    }

    fn home_dir(&self) -> anyhow::Result<PathBuf> {
        self.env
            .home_dir()
            .context("could not determine home directory")
    }

    /// Base configuration directory.
    ///
    /// Precedence:
    /// 1. `PERSONAL_SUPERPOWERS_DIR` (used verbatim, no normalization)
    /// 2. `XDG_CONFIG_HOME`/superpowers
    /// 3. ~/.config/superpowers
    ///
    /// Fails only when step 3 is reached and the home directory cannot be
    /// determined.
    pub fn base_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(value) = self.var(PERSONAL_DIR_VAR) {
            return Ok(PathBuf::from(value));
        }

        if let Some(value) = self.var(XDG_CONFIG_HOME_VAR) {
            return Ok(PathBuf::from(value).join(BASE_DIR_NAME));
        }

        Ok(self.home_dir()?.join(".config").join(BASE_DIR_NAME))
    }

    /// Conversation archive directory.
    ///
    /// `TEST_ARCHIVE_DIR` takes over verbatim and bypasses base-directory
    /// resolution entirely.
    pub fn archive_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(value) = self.var(TEST_ARCHIVE_DIR_VAR) {
            return Ok(PathBuf::from(value));
        }

        Ok(self.base_dir()?.join(ARCHIVE_DIR_NAME))
    }

    /// Conversation index directory. No override variable.
    pub fn index_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(self.base_dir()?.join(INDEX_DIR_NAME))
    }

    /// SQLite database file inside the index directory.
    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        Ok(self.index_dir()?.join(DB_FILE_NAME))
    }

    /// Exclude-list file inside the index directory.
    pub fn exclude_config_path(&self) -> anyhow::Result<PathBuf> {
        Ok(self.index_dir()?.join(EXCLUDE_FILE_NAME))
    }
}

pub fn resolve_superpowers_dir() -> anyhow::Result<PathBuf> {
    PathResolver::from_process_env().base_dir()
}

pub fn get_archive_dir() -> anyhow::Result<PathBuf> {
    PathResolver::from_process_env().archive_dir()
}

pub fn get_index_dir() -> anyhow::Result<PathBuf> {
    PathResolver::from_process_env().index_dir()
}

pub fn get_database_path() -> anyhow::Result<PathBuf> {
    PathResolver::from_process_env().db_path()
}

pub fn get_exclude_config_path() -> anyhow::Result<PathBuf> {
    PathResolver::from_process_env().exclude_config_path()
}
