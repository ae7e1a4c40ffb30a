use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::fs;

use crate::{
    config::Config,
    constants::{ARTIFACT_FILE_NAME, INPUT_EXTENSION, OUTPUT_EXTENSION, SCRATCH_FILE_NAME},
    core::{
        domain::{TestCase, TestTiming, Verdict},
        errors::{Error, Result},
        traits::executor::Executor,
    },
};

const TRIMMED: &[char] = &[' ', '\n', '\t'];

#[derive(Debug)]
pub struct TestRunner {
    dir: PathBuf,
    config: Config,
    executor: Arc<dyn Executor>,
}

impl TestRunner {
    pub fn new<T: AsRef<Path>>(dir: T, config: Config, executor: Arc<dyn Executor>) -> Self {
        TestRunner {
            dir: dir.as_ref().into(),
            config,
            executor,
        }
    }

    /// Compiles `source` and checks it against every `<n>.in` / `<n>.out`
    /// pair of the working directory.
    ///
    /// With `bench` set, every test runs that many times and the verdict
    /// carries the average duration of each test.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, source: &Path, bench: Option<u32>) -> Result<Verdict> {
        let scratch = ScratchFile::create(self.dir.join(SCRATCH_FILE_NAME)).await?;
        let tests = self.discover_tests().await?;
        tracing::debug!("Discovered tests: {:?}", tests);

        let artifact = self.dir.join(ARTIFACT_FILE_NAME);
        self.executor
            .compile(&self.config.compiler, &self.config.standard, source, &artifact)
            .await?;

        let repeats = bench.unwrap_or(1).max(1);
        let mut totals = vec![Duration::ZERO; tests.len()];

        for _ in 0..repeats {
            for (idx, test) in tests.iter().enumerate() {
                let input_path = self.dir.join(&test.input_file);
                let elapsed = self
                    .executor
                    .run(&artifact, &input_path, scratch.path())
                    .await
                    .map_err(|source| Error::Runtime {
                        test: test.number,
                        source,
                    })?;
                tracing::debug!("Test #{} took {:?}", test.number, elapsed);
                totals[idx] += elapsed;

                if let Some(verdict) = self.check(test, scratch.path()).await? {
                    return Ok(verdict);
                }
            }
        }

        if let Err(e) = fs::remove_file(&artifact).await {
            tracing::warn!("Error while removing {}: {}", artifact.display(), e);
        }

        let timings = bench.map(|_| {
            tests
                .iter()
                .zip(totals)
                .map(|(test, total)| TestTiming {
                    test_number: test.number,
                    average: total / repeats,
                })
                .collect()
        });
        Ok(Verdict::Accepted { timings })
    }

    /// Lists `*.in` files of the working directory ordered by test number.
    async fn discover_tests(&self) -> Result<Vec<TestCase>> {
        let io_err = |e| Error::io(format!("failed to read {}", self.dir.display()), e);

        let mut entries = fs::read_dir(&self.dir).await.map_err(io_err)?;
        let mut tests = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let is_dir = entry.file_type().await.map_err(io_err)?.is_dir();
            let path = entry.path();
            if is_dir || path.extension().is_none_or(|ext| ext != INPUT_EXTENSION) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            let number = stem
                .parse::<u32>()
                .map_err(|_| Error::Parse { name: name.clone() })?;

            tests.push(TestCase {
                number,
                input_file: name,
                output_file: format!("{}.{}", stem, OUTPUT_EXTENSION),
            });
        }

        tests.sort_by_key(|test| test.number);
        Ok(tests)
    }

    async fn check(&self, test: &TestCase, output_path: &Path) -> Result<Option<Verdict>> {
        let output = read(output_path).await?;
        let answer = read(&self.dir.join(&test.output_file)).await?;
        let input = read(&self.dir.join(&test.input_file)).await?;

        let output = output.trim_matches(TRIMMED);
        let answer = answer.trim_matches(TRIMMED);
        if output == answer {
            return Ok(None);
        }

        tracing::debug!("Wrong answer at test #{}", test.number);
        Ok(Some(Verdict::WrongAnswer {
            test_number: test.number,
            input: input.trim_matches(TRIMMED).to_string(),
            output: output.to_string(),
            answer: answer.to_string(),
            lines_mask: lines_matching_mask(output, answer),
        }))
    }
}

/// Marks which lines of `output` equal the line of `answer` with the same
/// index. The mask covers the longer of the two; lines without a counterpart
/// are mismatches.
pub fn lines_matching_mask(output: &str, answer: &str) -> Vec<bool> {
    let output_lines: Vec<_> = output.split('\n').collect();
    let answer_lines: Vec<_> = answer.split('\n').collect();
    let len = output_lines.len().max(answer_lines.len());

    (0..len)
        .map(|idx| match (output_lines.get(idx), answer_lines.get(idx)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
        .collect()
}

async fn read(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Receives the solution's output; removed on every exit path.
struct ScratchFile(PathBuf);

impl ScratchFile {
    async fn create(path: PathBuf) -> Result<Self> {
        fs::File::create(&path)
            .await
            .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
        Ok(ScratchFile(path))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}
