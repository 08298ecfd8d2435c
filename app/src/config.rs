use directories::ProjectDirs;
use log::{error, info, warn};
use node_board::BoardConfig;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "board.toml";

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("me", "liesegang", "node_board") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        Some(config_dir.join(CONFIG_FILE))
    } else {
        None
    }
}

pub fn load_config(path: Option<&Path>) -> BoardConfig {
    match path {
        Some(path) => {
            info!("Loading board config from {:?}", path);
            BoardConfig::load_or_default(path)
        }
        None => {
            warn!("Could not determine config directory. Using default settings.");
            BoardConfig::default()
        }
    }
}
