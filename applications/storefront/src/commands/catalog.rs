/// Catalog commands
use super::Storefront;
use crate::error::Result;
use learn2code_core::{Course, StudentId};

/// Active courses, optionally filtered by a case-insensitive search term
/// matched against title and description.
pub async fn courses(app: &Storefront, search: Option<&str>) -> Result<String> {
    let courses = app.client.catalog().list_courses().await?;
    let needle = search.map(str::to_lowercase);

    let listed: Vec<&Course> = courses
        .iter()
        .filter(|course| course.is_active)
        .filter(|course| match &needle {
            Some(needle) => matches_search(course, needle),
            None => true,
        })
        .collect();

    if listed.is_empty() {
        return Ok("No courses found.".to_string());
    }

    let mut lines: Vec<String> = listed
        .iter()
        .map(|course| course_line(app, course))
        .collect();
    lines.push(format!("Showing {} of {} courses", listed.len(), courses.len()));
    Ok(lines.join("\n"))
}

/// Courses the signed-in user (or one of their students) is enrolled in.
pub async fn my_courses(app: &Storefront, student_id: Option<StudentId>) -> Result<String> {
    let identity = app.require_session().await?;
    let courses = app.client.catalog().my_courses(&identity, student_id).await?;

    if courses.is_empty() {
        return Ok("No enrolled courses yet.".to_string());
    }

    Ok(courses
        .iter()
        .map(|course| course_line(app, course))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn matches_search(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

fn course_line(app: &Storefront, course: &Course) -> String {
    format!(
        "#{:<4} {:<40} {}",
        course.id.get(),
        course.title,
        app.money(course.price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn2code_core::CourseId;

    #[test]
    fn search_matches_title_or_description() {
        let mut course = Course::new(CourseId::new(1), "Scratch Basics", "39.99".parse().unwrap());
        course.description = Some("Drag-and-drop GAMES".to_string());

        assert!(matches_search(&course, "scratch"));
        assert!(matches_search(&course, "games"));
        assert!(!matches_search(&course, "python"));
    }
}
