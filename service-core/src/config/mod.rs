use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Environment prefix shared by every service (`APP_SERVER__PORT=9010`).
pub const ENV_PREFIX: &str = "APP";

/// Locate `<service_dir>/config` whether the process runs from the workspace
/// root or from inside the service crate.
pub fn configuration_directory(base_path: &Path, service_dir: &str) -> PathBuf {
    if base_path.ends_with(service_dir) {
        base_path.join("config")
    } else {
        base_path.join(service_dir).join("config")
    }
}

/// Load `config/base.yaml` for a service and overlay `APP_*` environment
/// variables on top of it.
pub fn load_settings<T: DeserializeOwned>(service_dir: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir()?;
    let configuration_directory = configuration_directory(&base_path, service_dir);

    let settings = Cfg::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
