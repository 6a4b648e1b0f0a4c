//! In-process student store for testing
//!
//! Mirrors the MySQL repository contract:
//! - ids auto-increment from 1 and are never reused
//! - an id that does not parse as an integer matches nothing
//! - an update that changes nothing still counts as one affected row

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{DbError, StudentStore};
use crate::models::{NewStudent, Student};

#[derive(Default)]
struct Inner {
    rows: Vec<Student>,
    last_id: i64,
    failure: Option<String>,
}

/// Mock student store for testing
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing rows.
    pub fn with_rows(rows: Vec<Student>) -> Self {
        let last_id = rows.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                rows,
                last_id,
                failure: None,
            }),
        }
    }

    /// Make every following call fail as if the database were unreachable.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Undo [`MemoryStore::fail_with`].
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Copy of the current rows.
    pub fn snapshot(&self) -> Vec<Student> {
        self.lock().rows.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock and check the failure switch in one step.
    fn open(&self) -> Result<MutexGuard<'_, Inner>, DbError> {
        let guard = self.lock();
        match &guard.failure {
            Some(message) => Err(DbError::Unavailable(message.clone())),
            None => Ok(guard),
        }
    }
}

fn parse_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn insert(&self, student: &NewStudent) -> Result<u64, DbError> {
        let mut inner = self.open()?;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.push(Student {
            id,
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age,
            gender: student.gender.clone(),
        });
        Ok(1)
    }

    async fn all(&self) -> Result<Vec<Student>, DbError> {
        Ok(self.open()?.rows.clone())
    }

    async fn find(&self, id: &str) -> Result<Vec<Student>, DbError> {
        let inner = self.open()?;
        let Some(id) = parse_id(id) else {
            return Ok(Vec::new());
        };
        Ok(inner.rows.iter().filter(|r| r.id == id).cloned().collect())
    }

    async fn update(&self, id: &str, student: &NewStudent) -> Result<u64, DbError> {
        let mut inner = self.open()?;
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };

        let mut affected = 0;
        for row in inner.rows.iter_mut().filter(|r| r.id == id) {
            row.name = student.name.clone();
            row.email = student.email.clone();
            row.age = student.age;
            row.gender = student.gender.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let mut inner = self.open()?;
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };

        let before = inner.rows.len();
        inner.rows.retain(|r| r.id != id);
        Ok((before - inner.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.open().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> NewStudent {
        NewStudent {
            name: "Bob".into(),
            email: "bob@x.com".into(),
            age: 30,
            gender: "M".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = MemoryStore::new();
        store.insert(&bob()).await.unwrap();
        store.insert(&bob()).await.unwrap();
        assert_eq!(store.delete("2").await.unwrap(), 1);
        store.insert(&bob()).await.unwrap();

        let ids: Vec<i64> = store.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn non_numeric_id_matches_nothing() {
        let store = MemoryStore::new();
        store.insert(&bob()).await.unwrap();

        assert!(store.find("abc").await.unwrap().is_empty());
        assert_eq!(store.update("abc", &bob()).await.unwrap(), 0);
        assert_eq!(store.delete("abc").await.unwrap(), 0);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn identical_update_still_counts() {
        let store = MemoryStore::new();
        store.insert(&bob()).await.unwrap();
        assert_eq!(store.update("1", &bob()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn failure_switch() {
        let store = MemoryStore::new();
        store.fail_with("connect ECONNREFUSED");

        let err = store.all().await.unwrap_err();
        assert_eq!(err.to_string(), "connect ECONNREFUSED");
        assert!(store.ping().await.is_err());

        store.recover();
        assert!(store.ping().await.is_ok());
    }

    #[test]
    fn seeded_rows_continue_numbering() {
        let store = MemoryStore::with_rows(vec![Student {
            id: 41,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            age: 20,
            gender: "F".into(),
        }]);
        assert_eq!(store.lock().last_id, 41);
    }
}
