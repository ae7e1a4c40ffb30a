pub const JUDGE_URL: &str = "https://codeforces.com";
pub const CONFIG_FILE_NAME: &str = "acf-config.json";

pub const ARTIFACT_FILE_NAME: &str = "a.out";
pub const SCRATCH_FILE_NAME: &str = "tmp-output.out";

pub const INPUT_EXTENSION: &str = "in";
pub const OUTPUT_EXTENSION: &str = "out";

pub const DEFAULT_COMPILER: &str = "g++";
pub const DEFAULT_STANDARD: &str = "c++17";

/// Path prefix shared by every problem link of a contest.
pub fn problem_prefix(contest_id: &str) -> String {
    format!("/contest/{}/problem/", contest_id)
}
