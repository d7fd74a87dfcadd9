pub mod env;
pub mod paths;

pub use env::{EnvSnapshot, EnvSource, ProcessEnv};
pub use paths::{
    PathResolver, get_archive_dir, get_database_path, get_exclude_config_path, get_index_dir,
    resolve_superpowers_dir,
};
