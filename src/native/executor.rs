use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::{fs, process::Command};

use crate::core::{
    errors::{CompileError, RunError},
    traits::executor::Executor,
};

/// Spawns the compiler and the compiled solution directly, without a shell.
#[derive(Clone, Debug, Default)]
pub struct NativeExecutor;

impl NativeExecutor {
    pub fn new() -> Self {
        NativeExecutor
    }
}

#[async_trait::async_trait]
impl Executor for NativeExecutor {
    async fn compile(
        &self,
        compiler: &str,
        standard: &str,
        source: &Path,
        artifact: &Path,
    ) -> Result<(), CompileError> {
        tracing::debug!("Compiling {} with {}", source.display(), compiler);

        let out = Command::new(compiler)
            .arg(format!("-std={}", standard))
            .arg(source)
            .arg("-o")
            .arg(artifact)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| CompileError::Internal {
                msg: format!("{}: {}", compiler, e),
            })?;

        if !out.status.success() {
            return Err(CompileError::CompilationFailed {
                msg: String::from_utf8_lossy(&out.stderr).to_string(),
            });
        }

        Ok(())
    }

    async fn run(
        &self,
        artifact: &Path,
        stdin: &Path,
        stdout: &Path,
    ) -> Result<Duration, RunError> {
        let internal = |e: std::io::Error| RunError::Internal { msg: e.to_string() };

        let input = fs::File::open(stdin).await.map_err(internal)?.into_std().await;
        let output = fs::File::create(stdout).await.map_err(internal)?.into_std().await;

        let start_time = Instant::now();
        let out = Command::new(artifact)
            .stdin(Stdio::from(input))
            .stdout(Stdio::from(output))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(internal)?
            .wait_with_output()
            .await
            .map_err(internal)?;
        let elapsed = start_time.elapsed();

        if !out.status.success() {
            return Err(RunError::Crash {
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            });
        }

        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn gnucpp_path() -> String {
        std::env::var("GNUCPP_PATH").unwrap_or_else(|_| "g++".to_string())
    }

    fn gnucpp_available() -> bool {
        std::process::Command::new(gnucpp_path())
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }

    fn executor_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("acf_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const ECHO_CODE: &str = "
        #include <iostream>
        int main() {
            long long n;
            std::cin >> n;
            std::cout << n * 2 << std::endl;
            return 0;
        }";

    const INCORRECT_CODE: &str = "
        #include <iostream>
        int main() {
            std::cout << \"Hello, World!\" << std::endl
            return 0;
        }";

    const CRASHING_CODE: &str = "
        int main() {
            return 3;
        }";

    async fn compile(dir: &Path, code: &str) -> Result<PathBuf, CompileError> {
        let source = dir.join("main.cpp");
        let artifact = dir.join("a.out");
        std::fs::write(&source, code).unwrap();

        NativeExecutor::new()
            .compile(&gnucpp_path(), "c++17", &source, &artifact)
            .await
            .map(|_| artifact)
    }

    #[tokio::test]
    async fn test_compile_and_run() {
        if !gnucpp_available() {
            return;
        }
        let dir = executor_dir();
        let artifact = compile(&dir, ECHO_CODE).await.unwrap();
        std::fs::write(dir.join("1.in"), "21\n").unwrap();

        let elapsed = NativeExecutor::new()
            .run(&artifact, &dir.join("1.in"), &dir.join("result.out"))
            .await
            .unwrap();

        assert!(elapsed > Duration::ZERO);
        assert_eq!(std::fs::read_to_string(dir.join("result.out")).unwrap(), "42\n");
    }

    #[tokio::test]
    async fn test_compile_code_error() {
        if !gnucpp_available() {
            return;
        }
        let dir = executor_dir();

        let result = compile(&dir, INCORRECT_CODE).await;

        assert!(matches!(result, Err(CompileError::CompilationFailed { .. })));
    }

    #[tokio::test]
    async fn test_compile_compiler_not_found() {
        let dir = executor_dir();
        std::fs::write(dir.join("main.cpp"), ECHO_CODE).unwrap();

        let result = NativeExecutor::new()
            .compile("/aboba", "c++17", &dir.join("main.cpp"), &dir.join("a.out"))
            .await;

        assert!(matches!(result, Err(CompileError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_run_non_zero_exit() {
        if !gnucpp_available() {
            return;
        }
        let dir = executor_dir();
        let artifact = compile(&dir, CRASHING_CODE).await.unwrap();
        std::fs::write(dir.join("1.in"), "").unwrap();

        let result = NativeExecutor::new()
            .run(&artifact, &dir.join("1.in"), &dir.join("result.out"))
            .await;

        assert!(matches!(result, Err(RunError::Crash { .. })));
    }

    #[tokio::test]
    async fn test_run_missing_input() {
        let dir = executor_dir();

        let result = NativeExecutor::new()
            .run(&dir.join("a.out"), &dir.join("404.in"), &dir.join("result.out"))
            .await;

        assert!(matches!(result, Err(RunError::Internal { .. })));
    }
}
