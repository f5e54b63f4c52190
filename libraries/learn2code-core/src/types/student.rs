/// Student profile domain types
use crate::types::StudentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A child profile managed by a parent account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: StudentId,

    pub name: String,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Student profile with the number of courses it is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: StudentId,

    pub name: String,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Enrollments scoped to this student
    #[serde(default)]
    pub courses_enrolled: u64,
}
