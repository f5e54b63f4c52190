//! Student profile endpoints of a parent account.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{CreateStudentRequest, RequestOptions};
use learn2code_core::{AuthIdentity, StudentProfile, StudentSummary};
use tracing::info;

/// Students client.
pub struct StudentsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> StudentsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Students of the signed-in parent, newest first.
    pub async fn my_students(&self, identity: &AuthIdentity) -> Result<Vec<StudentProfile>> {
        self.client
            .request_json(
                "/api/parents/me/students",
                RequestOptions::get().identity(identity),
            )
            .await
    }

    /// Students with their enrollment counts.
    pub async fn my_students_with_stats(
        &self,
        identity: &AuthIdentity,
    ) -> Result<Vec<StudentSummary>> {
        self.client
            .request_json(
                "/api/parents/me/students/with-stats",
                RequestOptions::get().identity(identity),
            )
            .await
    }

    /// Add a student profile under the signed-in parent.
    pub async fn create_student(
        &self,
        identity: &AuthIdentity,
        request: &CreateStudentRequest,
    ) -> Result<StudentProfile> {
        let options = RequestOptions::post()
            .identity(identity)
            .json(serde_json::to_value(request)?);
        let student: StudentProfile = self
            .client
            .request_json("/api/parents/me/students", options)
            .await?;

        info!(student_id = %student.id, "Student profile created");
        Ok(student)
    }
}
