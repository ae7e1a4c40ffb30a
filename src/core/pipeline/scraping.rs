use std::collections::HashSet;

use itertools::{EitherOrBoth, Itertools};
use scraper::{ElementRef, Html, Selector};

use crate::{
    constants::{JUDGE_URL, problem_prefix},
    core::{
        domain::{Problem, Sample},
        errors::{Error, Result},
        traits::judge::JudgeClient,
    },
};

const SELECTOR_ERR: &str = "Static selector must be valid";

/// Fetches the contest page and returns the distinct problem paths in
/// document order.
#[tracing::instrument(skip(client))]
pub async fn fetch_problem_paths(
    client: &dyn JudgeClient,
    contest_id: &str,
) -> Result<Vec<String>> {
    let url = format!("{}/contest/{}", JUDGE_URL, contest_id);
    let body = fetch_page(client, &url).await?;

    let paths = parse_problem_paths(&body, contest_id);
    tracing::debug!("Found problem paths: {:?}", paths);
    Ok(paths)
}

#[tracing::instrument(skip(client))]
pub async fn fetch_problem(
    client: &dyn JudgeClient,
    contest_id: &str,
    problem_number: &str,
) -> Result<Problem> {
    let url = format!("{}/contest/{}/problem/{}", JUDGE_URL, contest_id, problem_number);
    let body = fetch_page(client, &url).await?;

    let samples = parse_samples(&body);
    tracing::debug!("Found {} samples", samples.len());
    Ok(Problem {
        number: problem_number.to_string(),
        samples,
    })
}

async fn fetch_page(client: &dyn JudgeClient, url: &str) -> Result<String> {
    let page = client.get(url).await?;
    if !page.is_success() {
        return Err(Error::InvalidContest {
            url: url.to_string(),
            status: page.status,
        });
    }
    Ok(page.body)
}

pub fn parse_problem_paths(html: &str, contest_id: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let links = Selector::parse("a[href]").expect(SELECTOR_ERR);
    let prefix = problem_prefix(contest_id);

    let mut seen = HashSet::new();
    document
        .select(&links)
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| href.starts_with(&prefix))
        .filter(|href| seen.insert(href.to_string()))
        .map(str::to_string)
        .collect()
}

/// Extracts every sample of a problem page. Inputs and outputs inside one
/// `.sample-test` block are paired by position.
pub fn parse_samples(html: &str) -> Vec<Sample> {
    let document = Html::parse_document(html);
    let sample_test = Selector::parse(".sample-test").expect(SELECTOR_ERR);
    let input = Selector::parse(".input pre").expect(SELECTOR_ERR);
    let output = Selector::parse(".output pre").expect(SELECTOR_ERR);
    let line = Selector::parse("div").expect(SELECTOR_ERR);

    let mut samples = Vec::new();
    for block in document.select(&sample_test) {
        let inputs = block.select(&input).map(|pre| block_text(pre, &line));
        let outputs = block.select(&output).map(|pre| block_text(pre, &line));

        for pair in inputs.zip_longest(outputs) {
            let (input, output) = match pair {
                EitherOrBoth::Both(input, output) => (input, output),
                EitherOrBoth::Left(input) => (input, String::new()),
                EitherOrBoth::Right(output) => (String::new(), output),
            };
            samples.push(Sample { input, output });
        }
    }
    samples
}

// Multi-test samples are rendered as one <div> per line.
fn block_text(pre: ElementRef<'_>, line: &Selector) -> String {
    let lines: Vec<_> = pre.select(line).collect();
    if lines.is_empty() {
        return pre.text().collect();
    }

    lines
        .iter()
        .map(|line| format!("{}\n", line.text().collect::<String>()))
        .collect()
}
