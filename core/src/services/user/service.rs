//! User directory service implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::DirectoryError;
use crate::repositories::UserDirectory;
use dp_shared::types::{ListQuery, PaginatedResponse};
use dp_shared::utils::phone::mask_phone;

/// Read and maintenance operations over the user directory.
///
/// Registration is not offered here: users come into existence only through
/// the first successful OTP validation (see the OTP service).
pub struct UserService<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> UserService<D> {
    /// Create a new user service
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Look up a user by phone number
    pub async fn get_by_phone(&self, phone: &str) -> Result<Option<User>, DirectoryError> {
        self.directory.find_by_phone(phone).await
    }

    /// List users matching the query, with totals for pagination
    pub async fn list(&self, query: ListQuery) -> Result<PaginatedResponse<User>, DirectoryError> {
        let query = query.sanitized();
        let data = self
            .directory
            .list(query.offset, query.limit, &query.search)
            .await?;
        let total = self.directory.count(&query.search).await?;
        Ok(PaginatedResponse::new(data, &query, total))
    }

    /// Move a user to a new phone number
    pub async fn change_phone(&self, phone: &str, new_phone: &str) -> Result<User, DirectoryError> {
        let user = self.directory.update_phone(phone, new_phone).await?;
        tracing::info!(
            from = %mask_phone(phone),
            to = %mask_phone(new_phone),
            event = "user_phone_changed",
            "User moved to a new phone number"
        );
        Ok(user)
    }

    /// Delete a user; returns whether the phone was registered
    pub async fn delete(&self, phone: &str) -> Result<bool, DirectoryError> {
        let deleted = self.directory.delete(phone).await?;
        if deleted {
            tracing::info!(
                phone = %mask_phone(phone),
                event = "user_deleted",
                "User removed from directory"
            );
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryDirectory;

    async fn service_with(phones: &[&str]) -> UserService<MemoryDirectory> {
        let directory = Arc::new(MemoryDirectory::new());
        for phone in phones {
            directory.create(User::new(*phone)).await.unwrap();
        }
        UserService::new(directory)
    }

    #[tokio::test]
    async fn test_get_by_phone() {
        let service = service_with(&["+111"]).await;
        assert!(service.get_by_phone("+111").await.unwrap().is_some());
        assert!(service.get_by_phone("+999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages_with_totals() {
        let service = service_with(&["+111", "+222", "+333"]).await;

        let page = service.list(ListQuery::new(1, 2, "")).await.unwrap();
        let phones: Vec<&str> = page.data.iter().map(|u| u.phone.as_str()).collect();
        assert_eq!(phones, vec!["+222", "+333"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.offset, 1);
    }

    #[tokio::test]
    async fn test_change_phone_conflicts() {
        let service = service_with(&["+111", "+222"]).await;

        assert_eq!(
            service.change_phone("+111", "+222").await,
            Err(DirectoryError::AlreadyExists)
        );
        assert_eq!(
            service.change_phone("+999", "+333").await,
            Err(DirectoryError::NotFound)
        );

        let moved = service.change_phone("+111", "+333").await.unwrap();
        assert_eq!(moved.phone, "+333");
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let service = service_with(&["+111"]).await;
        assert!(service.delete("+111").await.unwrap());
        assert!(!service.delete("+111").await.unwrap());
    }
}
