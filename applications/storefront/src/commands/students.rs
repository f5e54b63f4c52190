/// Student profile commands for parent accounts
use super::Storefront;
use crate::error::{AppError, Result};
use learn2code_client::CreateStudentRequest;

pub async fn list(app: &Storefront, with_stats: bool) -> Result<String> {
    let identity = app.require_session().await?;
    let students = app.client.students();

    let lines: Vec<String> = if with_stats {
        students
            .my_students_with_stats(&identity)
            .await?
            .iter()
            .map(|s| {
                format!(
                    "#{:<4} {:<24} {:<8} {} course(s)",
                    s.id.get(),
                    s.name,
                    age_label(s.age),
                    s.courses_enrolled
                )
            })
            .collect()
    } else {
        students
            .my_students(&identity)
            .await?
            .iter()
            .map(|s| format!("#{:<4} {:<24} {}", s.id.get(), s.name, age_label(s.age)))
            .collect()
    };

    if lines.is_empty() {
        return Ok("No students yet.".to_string());
    }
    Ok(lines.join("\n"))
}

pub async fn add(
    app: &Storefront,
    name: &str,
    age: Option<u32>,
    avatar_url: Option<String>,
) -> Result<String> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("Student name is required.".to_string()));
    }

    let identity = app.require_session().await?;
    let request = CreateStudentRequest {
        name: name.trim().to_string(),
        age,
        avatar_url,
    };
    let student = app
        .client
        .students()
        .create_student(&identity, &request)
        .await?;

    Ok(format!("Added student {} (#{}).", student.name, student.id))
}

fn age_label(age: Option<u32>) -> String {
    age.map(|age| format!("age {}", age))
        .unwrap_or_else(|| "-".to_string())
}
