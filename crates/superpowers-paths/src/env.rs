use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only view of the inputs path resolution depends on: environment
/// variables and the invoking user's home directory.
///
/// Resolution never reads ambient globals directly; callers hand a
/// [`ProcessEnv`] to track the live environment or an [`EnvSnapshot`] for a
/// pinned one.
pub trait EnvSource {
    /// Value of the variable `name`, or `None` when it is not present.
    fn var(&self, name: &str) -> Option<String>;

    /// The user's home directory, if the host can determine one.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The live process environment, backed by `std::env` and the platform home
/// lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// An immutable mapping of environment variables plus an optional home
/// directory.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl EnvSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the recognized variables and the home directory from the live
    /// process environment.
    #[must_use]
    pub fn capture() -> Self {
        let process = ProcessEnv;
        let mut vars = HashMap::new();
        for name in crate::paths::RECOGNIZED_VARS {
            if let Some(value) = process.var(name) {
                vars.insert((*name).to_string(), value);
            }
        }
        Self {
            vars,
            home: process.home_dir(),
        }
    }

    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl EnvSource for EnvSnapshot {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}
