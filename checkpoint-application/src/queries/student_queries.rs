use checkpoint_domain::{Student, StudentId, StudentStatus};

use crate::commands::student_commands::find_student;
use crate::{AppError, AppState};

pub async fn get_student(state: &AppState, id: &StudentId) -> Result<Student, AppError> {
    find_student(state, id).await
}

pub async fn list_students(state: &AppState) -> Result<Vec<Student>, AppError> {
    Ok(state.student_repo.list().await?)
}

pub async fn students_by_status(
    state: &AppState,
    status: StudentStatus,
) -> Result<Vec<Student>, AppError> {
    Ok(state.student_repo.find_by_status(status).await?)
}

pub async fn students_by_course(state: &AppState, course: &str) -> Result<Vec<Student>, AppError> {
    Ok(state.student_repo.find_by_course(course.trim()).await?)
}

/// Students with at least one linked item, most violations first.
pub async fn students_with_violations(state: &AppState) -> Result<Vec<Student>, AppError> {
    let mut students = state.student_repo.find_with_violations().await?;
    students.sort_by(|a, b| {
        b.violation_count()
            .cmp(&a.violation_count())
            .then_with(|| a.id().as_str().cmp(b.id().as_str()))
    });
    Ok(students)
}
