use std::fs;
use std::path::Path;

use serde::Deserialize;

use cosyan_client::auth::credentials::LoginMethod;

/// Connection details of the live server the smoke tests run against.
#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub base_url: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub method: LoginMethod,
    /// Table that exists on the server and may be read.
    pub sample_table: String,
}

/// `secrets.json` from the working directory, or `None` when there is none.
pub fn load_secrets() -> Result<Option<Secrets>, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("secrets.json");
    if !path.is_file() {
        return Ok(None);
    }
    read_secrets(&path).map(Some)
}

fn read_secrets(path: &Path) -> Result<Secrets, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read secrets.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
}
