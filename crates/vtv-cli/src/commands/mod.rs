pub mod generate;
pub mod oracle;
pub mod prg;
pub mod verify;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::Path;

/// Writes `body` to `out`, or to stdout when no path is given.
pub fn emit(body: &str, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, body)?;
            tracing::info!(path = %path.display(), bytes = body.len(), "wrote output");
        }
        None => print!("{body}"),
    }
    Ok(())
}
