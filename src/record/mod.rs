pub mod application;
pub mod opportunity;
pub mod student;

pub use crate::types::identifiers::{OpportunityId, StudentId};
pub use application::{
    applied_ids, has_applied, ApplicationRecord, ApplicationStatus, ParseApplicationStatusError,
};
pub use opportunity::{OpportunityDraft, OpportunityRecord};
pub use student::{ActivityCounters, StudentRecord};
