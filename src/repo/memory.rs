//! In-process backend: a map behind a lock, ids from a counter starting at 1.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::Student;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Student>,
}

impl Inner {
    fn insert_new(&mut self, mut student: Student) -> Student {
        self.last_id += 1;
        student.id = Some(self.last_id);
        self.rows.insert(self.last_id, student.clone());
        student
    }
}

#[derive(Default)]
pub struct MemoryStudentRepository {
    inner: RwLock<Inner>,
}

impl MemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn save(&self, student: Student) -> Result<Student, AppError> {
        let mut inner = self.inner.write().await;
        match student.id {
            Some(id) if inner.rows.contains_key(&id) => {
                inner.rows.insert(id, student.clone());
                Ok(student)
            }
            _ => Ok(inner.insert_new(student)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
