use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ids::UserId;
use crate::domain::ports::UserRepository;
use crate::domain::user::User;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repo.list()?;
        log::debug!("Loaded {} users", users.len());
        Ok(users)
    }

    pub fn delete(&self, user_id: &str) -> Result<(), DomainError> {
        let user_id: UserId = user_id.parse()?;

        if self.repo.delete(user_id)? == 0 {
            log::warn!("Delete of user {user_id} matched no rows");
            return Err(DomainError::NotFound("User"));
        }
        log::info!("User {user_id} deleted");
        Ok(())
    }
}
