use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".into(),
        }
    }
}

/// Loads settings with file-then-env precedence: `roster.toml` in the
/// working directory, overridden by `ROSTER_SERVER_URL` / `APP__SERVER_URL`.
/// A `--server-url` flag on top of this wins over both.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("roster.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("ROSTER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

/// Final resolution step: an explicit `--server-url` flag beats whatever
/// the file and environment layers settled on.
pub fn resolve_server_url(flag: Option<String>, settings: Settings) -> String {
    flag.unwrap_or(settings.server_url)
}
