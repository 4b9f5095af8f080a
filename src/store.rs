use crate::types::AppResult;
use anyhow::anyhow;
use directories;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

pub static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/");
pub static CATALOG_ASSET_FILENAME: &str = "exhibitions.json";
pub static LOG_FILENAME: &str = "artcup.log";

fn project_dirs() -> AppResult<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "artcup", "artcup")
        .ok_or(anyhow!("Failed to get directories"))
}

pub fn store_path(filename: &str) -> AppResult<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir)?;
    }
    Ok(data_dir.join(filename))
}

pub fn log_path(store_prefix: &str) -> AppResult<PathBuf> {
    store_path(&format!("{store_prefix}_{LOG_FILENAME}"))
}

pub fn load_asset<T: for<'a> Deserialize<'a>>(filename: &str) -> AppResult<T> {
    let file = ASSETS_DIR
        .get_file(filename)
        .ok_or(anyhow!("Missing asset {filename}"))?;
    let data: T = serde_json::from_slice(file.contents())?;
    Ok(data)
}

pub fn load_from_json<T: for<'a> Deserialize<'a>>(path: &Path) -> AppResult<T> {
    let file = File::open(path)
        .map_err(|e| anyhow!("Cannot open {}: {e}", path.display()))?;
    let buffer = std::io::BufReader::new(file);
    let data: T = serde_json::from_reader(buffer)
        .map_err(|e| anyhow!("Cannot parse {}: {e}", path.display()))?;
    Ok(data)
}
