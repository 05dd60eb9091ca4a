use std::path::Path;

use thiserror::Error;
use tokio::fs;

/// Directory discovery errors. Listing failures abort the run: there is no
/// partial scan result to act on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot list directory {dir}: {source}")]
    List {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

/// Return the base names (extension stripped) of all direct entries of `dir`
/// whose final extension equals `ext` exactly. `ext` is given without the
/// leading dot, so `"r0"` matches `ca.r0` but not `ca.r0.tmp`. No recursion,
/// no ordering guarantee.
pub async fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<String>, ScanError> {
    fn list_err(dir: &Path, source: std::io::Error) -> ScanError {
        ScanError::List {
            dir: dir.display().to_string(),
            source,
        }
    }

    let mut entries = fs::read_dir(dir).await.map_err(|e| list_err(dir, e))?;
    let mut found = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| list_err(dir, e))?
    {
        let file_name = entry.file_name();
        let name = Path::new(&file_name);
        if name.extension().and_then(|e| e.to_str()) == Some(ext)
            && let Some(stem) = name.file_stem().and_then(|s| s.to_str())
        {
            found.push(stem.to_string());
        }
    }
    Ok(found)
}
