//! Student repository over MySQL
//!
//! One parameterized statement per call; the connection goes back to the
//! pool as soon as the statement finishes, on success or error.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{DbError, StudentStore};
use crate::models::{NewStudent, Student};

// Casts keep decoding stable whether the columns are INT, INT UNSIGNED or BIGINT.
const SELECT_ALL: &str = r#"
    SELECT CAST(`id` AS SIGNED) AS id, `name`, `email`, CAST(`age` AS SIGNED) AS age, `gender`
    FROM student_details
"#;

const SELECT_BY_ID: &str = r#"
    SELECT CAST(`id` AS SIGNED) AS id, `name`, `email`, CAST(`age` AS SIGNED) AS age, `gender`
    FROM student_details
    WHERE `id` = ?
"#;

const INSERT: &str =
    "INSERT INTO student_details (`name`, `email`, `age`, `gender`) VALUES (?, ?, ?, ?)";

const UPDATE: &str =
    "UPDATE student_details SET `name` = ?, `email` = ?, `age` = ?, `gender` = ? WHERE `id` = ?";

const DELETE: &str = "DELETE FROM student_details WHERE `id` = ?";

/// Student repository
#[derive(Clone)]
pub struct StudentRepo {
    pool: MySqlPool,
}

impl StudentRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl StudentStore for StudentRepo {
    async fn insert(&self, student: &NewStudent) -> Result<u64, DbError> {
        let result = sqlx::query(INSERT)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(&student.gender)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn all(&self) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query_as::<_, Student>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find(&self, id: &str) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn update(&self, id: &str, student: &NewStudent) -> Result<u64, DbError> {
        let result = sqlx::query(UPDATE)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(&student.gender)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
