use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub number: String,
    pub samples: Vec<Sample>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub input: String,
    pub output: String,
}

/// Raw response of the judge site.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A `<n>.in` / `<n>.out` pair found in the working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub number: u32,
    pub input_file: String,
    pub output_file: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestTiming {
    pub test_number: u32,
    pub average: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted {
        timings: Option<Vec<TestTiming>>,
    },
    WrongAnswer {
        test_number: u32,
        input: String,
        output: String,
        answer: String,
        lines_mask: Vec<bool>,
    },
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}
