use serde::{Deserialize, Serialize};

/// Identifier of a student record, assigned by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    pub fn new(raw: i64) -> Self {
        StudentId(raw)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an opportunity record, assigned by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(i64);

impl OpportunityId {
    pub fn new(raw: i64) -> Self {
        OpportunityId(raw)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
