use std::path::Path;
use std::time::Duration;

use crate::core::errors::{CompileError, RunError};

#[mockall::automock]
#[async_trait::async_trait]
pub trait Executor: std::fmt::Debug + Send + Sync {
    /// Compiles `source` into the executable at `artifact`.
    async fn compile(
        &self,
        compiler: &str,
        standard: &str,
        source: &Path,
        artifact: &Path,
    ) -> Result<(), CompileError>;

    /// Runs `artifact` with `stdin` as its standard input and standard
    /// output redirected into `stdout`. Returns the wall-clock duration.
    async fn run(&self, artifact: &Path, stdin: &Path, stdout: &Path)
    -> Result<Duration, RunError>;
}
