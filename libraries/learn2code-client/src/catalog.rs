//! Course catalog and enrollment endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::RequestOptions;
use learn2code_core::{AuthIdentity, Course, StudentId};
use tracing::debug;

/// Catalog client.
pub struct CatalogClient<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Public storefront listing.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let courses: Vec<Course> = self
            .client
            .request_json("/api/courses", RequestOptions::get())
            .await?;

        debug!(courses = courses.len(), "Fetched catalog");
        Ok(courses)
    }

    /// Courses the signed-in user has purchased, optionally narrowed to one student.
    pub async fn my_courses(
        &self,
        identity: &AuthIdentity,
        student_id: Option<StudentId>,
    ) -> Result<Vec<Course>> {
        let path = match student_id {
            Some(student_id) => format!("/api/me/courses?studentId={}", student_id),
            None => "/api/me/courses".to_string(),
        };

        let courses: Vec<Course> = self
            .client
            .request_json(&path, RequestOptions::get().identity(identity))
            .await?;

        debug!(
            user_id = %identity.id,
            student_id = ?student_id.map(|id| id.get()),
            courses = courses.len(),
            "Fetched enrollments"
        );
        Ok(courses)
    }
}
