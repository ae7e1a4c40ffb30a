use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    constants::{INPUT_EXTENSION, OUTPUT_EXTENSION},
    core::{
        domain::Problem,
        errors::{Error, Result},
    },
};

/// Writes the samples of `problem` to `<base>/<number>/<n>.in` and
/// `<base>/<number>/<n>.out`, numbered from 1.
///
/// The problem directory must not exist yet. Files written before a failure
/// stay on disk.
#[tracing::instrument(skip(problem), fields(problem = %problem.number))]
pub async fn materialize(problem: &Problem, base: &Path) -> Result<PathBuf> {
    let dir = base.join(&problem.number);

    fs::create_dir(&dir).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => Error::DirectoryExists(dir.clone()),
        _ => Error::io(format!("failed to create {}", dir.display()), e),
    })?;

    for (idx, sample) in problem.samples.iter().enumerate() {
        let number = idx + 1;
        write(&dir.join(format!("{}.{}", number, INPUT_EXTENSION)), &sample.input).await?;
        write(&dir.join(format!("{}.{}", number, OUTPUT_EXTENSION)), &sample.output).await?;
    }

    tracing::debug!("Wrote {} samples to {}", problem.samples.len(), dir.display());
    Ok(dir)
}

async fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
}
