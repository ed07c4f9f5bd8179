extern crate serde;

use serde::Deserialize;
use std::fmt;

pub const ACCEPTED_VERDICT: &str = "OK";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub contest_id: u64,
    pub creation_time_seconds: u64,
    #[serde(default)]
    pub verdict: Option<String>,
    pub programming_language: String,
    pub problem: Problem,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub index: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }
    pub fn problem_id(&self) -> ProblemId {
        ProblemId::new(self.contest_id, &self.problem.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemId(String);

impl ProblemId {
    pub fn new(contest_id: u64, index: &str) -> Self {
        Self(format!("{}_{}", contest_id, index))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Vec<Submission>,
}
