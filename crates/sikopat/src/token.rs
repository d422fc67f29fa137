//! The token file: carries the session token from one run to the next.

use std::io;
use std::path::{Path, PathBuf};

pub const TOKEN_FILE: &str = "sikopat.token";

#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, trimmed. Empty when the file is absent or blank.
    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path)
            .map(|raw| raw.trim().to_owned())
            .unwrap_or_default()
    }

    pub fn write(&self, token: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Delete the file. An absent file is fine.
    pub fn remove(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
