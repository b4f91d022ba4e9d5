use checkpoint_domain::{IntakeStudent, ItemId, Student, StudentId, StudentStatus};
use tracing::info;

use crate::{AppError, AppState};

pub async fn register_student(
    state: &AppState,
    payload: IntakeStudent,
) -> Result<Student, AppError> {
    let student = payload.into_student()?;
    if state.student_repo.find(student.id()).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "student '{}' already exists",
            student.id()
        )));
    }
    state.student_repo.add(student.clone()).await?;
    info!(student = %student.id(), status = %student.status(), "student registered");
    Ok(student)
}

pub async fn update_student_status(
    state: &AppState,
    id: &StudentId,
    status: StudentStatus,
) -> Result<Student, AppError> {
    let updated = find_student(state, id).await?.with_status(status)?;
    state.student_repo.update(updated.clone()).await?;
    info!(student = %id, status = %status, "student status updated");
    Ok(updated)
}

pub async fn link_item_to_student(
    state: &AppState,
    id: &StudentId,
    item_id: ItemId,
) -> Result<Student, AppError> {
    if state.item_repo.find_by_id(item_id).await?.is_none() {
        return Err(AppError::NotFound(format!("item {}", item_id)));
    }
    state
        .student_repo
        .link_item(id, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
}

pub async fn unlink_item_from_student(
    state: &AppState,
    id: &StudentId,
    item_id: ItemId,
) -> Result<Student, AppError> {
    state
        .student_repo
        .unlink_item(id, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
}

pub async fn remove_student(state: &AppState, id: &StudentId) -> Result<Student, AppError> {
    let removed = state
        .student_repo
        .remove(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    info!(student = %id, "student removed");
    Ok(removed)
}

pub(crate) async fn find_student(state: &AppState, id: &StudentId) -> Result<Student, AppError> {
    state
        .student_repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
}
