use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ids::UserId;
use crate::domain::ports::UserRepository;
use crate::domain::user::User;
use crate::schema::users;

use super::models::UserRow;

#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for DieselUserRepository {
    fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    fn delete(&self, id: UserId) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(diesel::delete(users::table.find(id.get())).execute(&mut conn)?)
    }
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;

    use super::DieselUserRepository;
    use crate::domain::ids::UserId;
    use crate::domain::ports::UserRepository;
    use crate::infrastructure::models::NewUserRow;
    use crate::infrastructure::test_support::setup_db;
    use crate::schema::users;

    #[tokio::test]
    #[ignore = "requires a container runtime for testcontainers"]
    async fn list_and_delete_users() {
        let (_container, pool) = setup_db().await;
        {
            let mut conn = pool.get().expect("Failed to get connection");
            diesel::insert_into(users::table)
                .values(&vec![
                    NewUserRow {
                        username: "ada".to_string(),
                    },
                    NewUserRow {
                        username: "grace".to_string(),
                    },
                ])
                .execute(&mut conn)
                .expect("seed users failed");
        }
        let repo = DieselUserRepository::new(pool);

        let users = repo.list().expect("list failed");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "ada");

        assert_eq!(repo.delete(users[0].id).expect("delete failed"), 1);
        assert_eq!(repo.delete(users[0].id).expect("delete failed"), 0);
        assert_eq!(repo.delete(UserId(-1)).expect("delete failed"), 0);
        assert_eq!(repo.list().expect("list failed").len(), 1);
    }
}
