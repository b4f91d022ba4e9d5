use std::collections::BTreeMap;

use anyhow::bail;
use async_trait::async_trait;
use tokio::sync::RwLock;

use checkpoint_domain::{ItemId, Student, StudentId, StudentRepository, StudentStatus};

#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<BTreeMap<StudentId, Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<P>(&self, predicate: P) -> Vec<Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students
            .read()
            .await
            .values()
            .filter(|student| predicate(student))
            .cloned()
            .collect()
    }

    async fn replace_with<F>(&self, id: &StudentId, update: F) -> Option<Student>
    where
        F: FnOnce(&Student) -> Student,
    {
        let mut students = self.students.write().await;
        let updated = update(students.get(id)?);
        students.insert(id.clone(), updated.clone());
        Some(updated)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn add(&self, student: Student) -> anyhow::Result<()> {
        let mut students = self.students.write().await;
        if students.contains_key(student.id()) {
            bail!("student '{}' already exists", student.id());
        }
        students.insert(student.id().clone(), student);
        Ok(())
    }

    async fn update(&self, student: Student) -> anyhow::Result<bool> {
        let mut students = self.students.write().await;
        match students.get_mut(student.id()) {
            Some(slot) => {
                *slot = student;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find(&self, id: &StudentId) -> anyhow::Result<Option<Student>> {
        Ok(self.students.read().await.get(id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Student>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_status(&self, status: StudentStatus) -> anyhow::Result<Vec<Student>> {
        Ok(self.filtered(|student| student.status() == status).await)
    }

    async fn find_by_course(&self, course: &str) -> anyhow::Result<Vec<Student>> {
        let wanted = course.trim().to_lowercase();
        Ok(self
            .filtered(|student| student.course().to_lowercase() == wanted)
            .await)
    }

    async fn find_with_violations(&self) -> anyhow::Result<Vec<Student>> {
        Ok(self.filtered(Student::has_violations).await)
    }

    async fn link_item(&self, id: &StudentId, item_id: ItemId) -> anyhow::Result<Option<Student>> {
        Ok(self
            .replace_with(id, |student| student.with_added_item(item_id))
            .await)
    }

    async fn unlink_item(
        &self,
        id: &StudentId,
        item_id: ItemId,
    ) -> anyhow::Result<Option<Student>> {
        Ok(self
            .replace_with(id, |student| student.with_removed_item(item_id))
            .await)
    }

    async fn remove(&self, id: &StudentId) -> anyhow::Result<Option<Student>> {
        Ok(self.students.write().await.remove(id))
    }
}
