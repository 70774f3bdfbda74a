//! Seed files that are consumed and replaced on every use.

use std::fs;
use std::path::Path;

use tracing::debug;
use vtv_core::{ErrorInfo, Prg, VtvError};

fn io_error(code: &str, err: std::io::Error, path: &Path) -> VtvError {
    VtvError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Seeds `prg` from the hex seed stored at `seed_path` and replaces the file
/// with a fresh seed drawn from the generator.
///
/// The replacement is written to `tmp_path` and renamed over `seed_path`, so
/// the seed file is never left half written. A seed is therefore never used
/// twice across runs.
pub fn reseed_from_file<P: Prg>(
    prg: &mut P,
    seed_path: &Path,
    tmp_path: &Path,
) -> Result<(), VtvError> {
    let text =
        fs::read_to_string(seed_path).map_err(|err| io_error("seed-read", err, seed_path))?;
    let seed = vtv_hex::from_hex(&text).map_err(|err| match err {
        VtvError::Encoding(info) => {
            VtvError::Encoding(info.with_context("path", seed_path.display().to_string()))
        }
        other => other,
    })?;
    prg.set_seed(&seed)?;

    let len = prg.min_seed_bytes();
    let next = prg.get_bytes(len)?;
    replace_file(seed_path, tmp_path, &vtv_hex::to_hex(&next))?;
    debug!(path = %seed_path.display(), seed_bytes = seed.len(), "rotated seed file");
    Ok(())
}

/// Writes `contents` to `tmp_path` and renames it over `path`. The temporary
/// file is removed again if the rename fails.
fn replace_file(path: &Path, tmp_path: &Path, contents: &str) -> Result<(), VtvError> {
    fs::write(tmp_path, contents).map_err(|err| io_error("seed-write", err, tmp_path))?;
    if let Err(err) = fs::rename(tmp_path, path) {
        let _ = fs::remove_file(tmp_path);
        return Err(io_error("seed-rename", err, path));
    }
    Ok(())
}
