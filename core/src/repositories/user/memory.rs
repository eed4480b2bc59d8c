//! In-memory implementation of the user directory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DirectoryError;

use super::directory::UserDirectory;

/// RwLock-guarded in-memory user directory.
///
/// Suitable for development servers and tests; the MySQL adapter in the
/// infra crate is the persistent counterpart.
#[derive(Default)]
pub struct MemoryDirectory {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    fn matching_sorted(users: &HashMap<String, User>, search: &str) -> Vec<User> {
        let mut result: Vec<User> = users
            .values()
            .filter(|u| search.is_empty() || u.phone.contains(search))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.phone.cmp(&b.phone));
        result
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.get(phone).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.phone) {
            return Err(DirectoryError::AlreadyExists);
        }

        users.insert(user.phone.clone(), user.clone());
        Ok(user)
    }

    async fn update_phone(&self, phone: &str, new_phone: &str) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;

        if phone != new_phone && users.contains_key(new_phone) {
            return Err(DirectoryError::AlreadyExists);
        }

        let mut user = users.remove(phone).ok_or(DirectoryError::NotFound)?;
        user.phone = new_phone.to_string();
        users.insert(new_phone.to_string(), user.clone());
        Ok(user)
    }

    async fn delete(&self, phone: &str) -> Result<bool, DirectoryError> {
        let mut users = self.users.write().await;
        Ok(users.remove(phone).is_some())
    }

    async fn list(
        &self,
        offset: u32,
        limit: u32,
        search: &str,
    ) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        let matching = Self::matching_sorted(&users, search);

        let start = (offset as usize).min(matching.len());
        let end = (start + limit as usize).min(matching.len());
        Ok(matching[start..end].to_vec())
    }

    async fn count(&self, search: &str) -> Result<u64, DirectoryError> {
        let users = self.users.read().await;
        let count = users
            .values()
            .filter(|u| search.is_empty() || u.phone.contains(search))
            .count();
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(phones: &[&str]) -> MemoryDirectory {
        let directory = MemoryDirectory::new();
        for phone in phones {
            directory.create(User::new(*phone)).await.unwrap();
        }
        directory
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let directory = MemoryDirectory::new();
        let created = directory.create(User::new("+14155552671")).await.unwrap();

        let found = directory.find_by_phone("+14155552671").await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(directory.find_by_phone("+10000000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let directory = seeded(&["+14155552671"]).await;
        let result = directory.create(User::new("+14155552671")).await;
        assert_eq!(result, Err(DirectoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_update_phone() {
        let directory = seeded(&["+111", "+222"]).await;

        // Old phone absent
        assert_eq!(
            directory.update_phone("+999", "+333").await,
            Err(DirectoryError::NotFound)
        );

        // New phone taken
        assert_eq!(
            directory.update_phone("+111", "+222").await,
            Err(DirectoryError::AlreadyExists)
        );

        let updated = directory.update_phone("+111", "+333").await.unwrap();
        assert_eq!(updated.phone, "+333");
        assert_eq!(directory.find_by_phone("+111").await.unwrap(), None);
        assert!(directory.find_by_phone("+333").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete() {
        let directory = seeded(&["+111"]).await;
        assert!(directory.delete("+111").await.unwrap());
        assert!(!directory.delete("+111").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_is_sorted_and_paginated() {
        // Insertion order deliberately scrambled; listing sorts by phone
        let directory = seeded(&["+333", "+111", "+222"]).await;

        let page = directory.list(1, 2, "").await.unwrap();
        let phones: Vec<&str> = page.iter().map(|u| u.phone.as_str()).collect();
        assert_eq!(phones, vec!["+222", "+333"]);
    }

    #[tokio::test]
    async fn test_list_clamps_out_of_range() {
        let directory = seeded(&["+111", "+222"]).await;
        assert!(directory.list(10, 5, "").await.unwrap().is_empty());
        assert_eq!(directory.list(1, 100, "").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_search_substring() {
        let directory = seeded(&["+14155550001", "+14155550002", "+861381234567"]).await;

        let hits = directory.list(0, 10, "+1415").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(directory.count("+1415").await.unwrap(), 2);
        assert_eq!(directory.count("").await.unwrap(), 3);
    }
}
