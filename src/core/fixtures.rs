//! Recording helper for refreshing HTTP fixtures from live providers.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("SA_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    tracing::debug!(path = %path.display(), "SA_RECORD: wrote fixture");
    Ok(())
}
