use std::path::Path;

use crate::{
    constants::problem_prefix,
    core::{
        errors::Result,
        pipeline::{materializing::materialize, scraping},
        traits::judge::JudgeClient,
    },
};

/// Downloads the samples of every problem of a contest into `base`.
/// Stops at the first failure.
#[tracing::instrument(skip(client))]
pub async fn load_contest(
    client: &dyn JudgeClient,
    contest_id: &str,
    base: &Path,
) -> Result<Vec<String>> {
    let paths = scraping::fetch_problem_paths(client, contest_id).await?;
    let prefix = problem_prefix(contest_id);

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let number = path.strip_prefix(&prefix).unwrap_or(path.as_str());
        let problem = scraping::fetch_problem(client, contest_id, number).await?;
        materialize(&problem, base).await?;

        tracing::info!("Loaded problem {} with {} samples", number, problem.samples.len());
        loaded.push(problem.number);
    }

    Ok(loaded)
}
