use anyhow::{Context, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use tokio::task;

use crate::entities::users;

/// User data handed to the rest of the application (no password hash).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        let full_name = model.full_name();
        Self {
            id: model.id,
            username: model.username,
            full_name,
            role: model.role,
            avatar: model.avatar,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(User::from))
    }

    /// Verify password for a user.
    /// Argon2 verification is CPU-heavy, so it runs on a blocking task.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user for password verification")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            let argon2 = Argon2::default();
            Ok::<bool, anyhow::Error>(
                argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| User::from(user)))
    }

    pub async fn list_by_role(&self, role: &str) -> Result<Vec<User>> {
        let rows = users::Entity::find()
            .filter(users::Column::Role.eq(role))
            .order_by_asc(users::Column::LastName)
            .all(&self.conn)
            .await
            .context("Failed to list users by role")?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Id -> full name map used to resolve inspector/reviewer/assignee names.
    pub async fn name_map(&self) -> Result<HashMap<i32, String>> {
        let rows = users::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(rows.into_iter().map(|u| (u.id, u.full_name())).collect())
    }
}
