//! PostgreSQL backend over a pooled connection set.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::Student;
use crate::store::qualified_table;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const COLUMNS: &str = "id, name, email, rollno";

#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
    /// Schema-qualified, quoted table name.
    table: String,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStudentRepository {
            pool,
            table: qualified_table(schema),
        }
    }

    async fn insert<'e, E>(&self, executor: E, student: &Student) -> Result<Student, AppError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let sql = format!(
            "INSERT INTO {} (name, email, rollno) VALUES ($1, $2, $3) RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(&sql)
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.rollno)
            .fetch_one(executor)
            .await?;
        Ok(row_to_student(&row)?)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn save(&self, student: Student) -> Result<Student, AppError> {
        let Some(id) = student.id else {
            return self.insert(&self.pool, &student).await;
        };
        let sql = format!(
            "UPDATE {} SET name = $2, email = $3, rollno = $4 WHERE id = $1 RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query(&sql)
            .bind(id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.rollno)
            .fetch_optional(&mut *tx)
            .await?;
        let saved = match updated {
            Some(row) => row_to_student(&row)?,
            None => self.insert(&mut *tx, &student).await?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let students = rows.iter().map(row_to_student).collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(row_to_student).transpose()?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no row");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn row_to_student(row: &PgRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: Some(row.try_get::<i32, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        rollno: row.try_get("rollno")?,
    })
}
