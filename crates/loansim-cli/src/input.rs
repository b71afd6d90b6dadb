use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};

/// Read and deserialize a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("failed to read '{path}': {e}"))?;
    let value =
        serde_json::from_str(&contents).map_err(|e| format!("failed to parse '{path}': {e}"))?;
    Ok(value)
}

/// Deserialize JSON piped on stdin. Returns None when stdin is a TTY or the
/// pipe is empty.
pub fn read_stdin_json<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
