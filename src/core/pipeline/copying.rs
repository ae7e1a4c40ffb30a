use std::path::Path;

use tokio::fs;

use crate::core::{
    errors::{Error, Result},
    traits::clipboard::Clipboard,
};

/// Puts the contents of `path` on the clipboard as is. The clipboard is
/// opened only after the file has been read.
#[tracing::instrument(skip(open_clipboard))]
pub async fn copy_file<C, F>(path: &Path, open_clipboard: F) -> Result<()>
where
    C: Clipboard,
    F: FnOnce() -> Result<C>,
{
    let context = || format!("failed to read {}", path.display());

    let bytes = fs::read(path).await.map_err(|e| Error::io(context(), e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        Error::io(
            context(),
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    tracing::debug!("Copying {} bytes", text.len());

    let mut clipboard = open_clipboard()?;
    clipboard.write_text(text)
}
