//! Dotenv-style environment file loading.
//!
//! Secrets such as `MNEMONIC` and `PRIVATEKEY` are conventionally kept in a
//! `.env` file at the project root rather than exported in the shell.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load environment variables from a dotenv-style file.
///
/// # Format
///
/// ```text
/// # Comment
/// MNEMONIC="word word word ..."
/// PRIVATEKEY=0xabc123
/// ```
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `EnvFileParse` for invalid
/// lines.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_dotenv(&content, path)
}

/// Load the env file if it exists, return an empty map otherwise.
///
/// A missing file is the common case (variables exported directly); a file
/// that exists but fails to parse is still an error.
pub fn load_env_file_optional(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    load_env_file(path)
}

/// Parse dotenv-style content.
fn parse_dotenv(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    let mut env = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse KEY=value
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim().to_string();
            let mut value = line[eq_pos + 1..].trim().to_string();

            // Remove surrounding quotes if present
            if ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
                && value.len() >= 2
            {
                value = value[1..value.len() - 1].to_string();
            }

            env.insert(key, value);
        } else {
            return Err(Error::EnvFileParse {
                path: source_path.to_path_buf(),
                message: format!("Invalid line {}: {}", line_num + 1, line),
            });
        }
    }

    Ok(env)
}
