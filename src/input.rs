use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

/// Input JSON from Claude Code hook system
#[derive(Debug, Default, Deserialize)]
pub struct HookRequest {
    pub cwd: Option<String>,
    pub session_id: Option<String>,
}

impl HookRequest {
    /// Read a request from `reader`. Empty input, malformed JSON, and read
    /// failures all fall back to an empty request; a hook must never fail
    /// because the host sent something unexpected.
    pub fn read_from(reader: &mut impl Read) -> Self {
        let mut buffer = String::new();
        if reader.read_to_string(&mut buffer).is_err() {
            return Self::default();
        }
        serde_json::from_str(&buffer).unwrap_or_default()
    }

    /// Workspace directory for the session, defaulting to the process
    /// working directory.
    pub fn cwd(&self) -> PathBuf {
        match &self.cwd {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("unknown")
    }
}
