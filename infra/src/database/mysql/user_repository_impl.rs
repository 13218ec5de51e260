//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lst_core::domain::entities::user_profile::{AccountType, ProfileUpdate, UserProfile};
use lst_core::errors::DomainError;
use lst_core::repositories::UserRepository;

/// MySQL-backed user profile persistence
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

const PROFILE_COLUMNS: &str = r#"
    id, email, display_name, bio, website, location,
    avatar_url, account_type, created_at, updated_at
"#;

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::dependency("database", format!("Failed to get id: {}", e)))?;
        let account_type_str: String = row
            .try_get("account_type")
            .map_err(|e| DomainError::dependency("database", format!("Failed to get account_type: {}", e)))?;
        let account_type = account_type_str
            .parse::<AccountType>()
            .map_err(|e| DomainError::dependency("database", e))?;

        Ok(UserProfile {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::dependency("database", format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get email: {}", e)))?,
            display_name: row
                .try_get("display_name")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get display_name: {}", e)))?,
            bio: row
                .try_get("bio")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get bio: {}", e)))?,
            website: row
                .try_get("website")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get website: {}", e)))?,
            location: row
                .try_get("location")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get location: {}", e)))?,
            avatar_url: row
                .try_get("avatar_url")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get avatar_url: {}", e)))?,
            account_type,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let query = format!(
            "SELECT {} FROM user_profiles WHERE id = ? LIMIT 1",
            PROFILE_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DomainError> {
        let query = format!(
            "SELECT {} FROM user_profiles WHERE email = ? LIMIT 1",
            PROFILE_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        if self.find_by_email(&profile.email).await?.is_some() {
            return Err(DomainError::validation("Email already registered"));
        }

        let query = r#"
            INSERT INTO user_profiles (
                id, email, display_name, bio, website, location,
                avatar_url, account_type, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(&profile.email)
            .bind(&profile.display_name)
            .bind(&profile.bio)
            .bind(&profile.website)
            .bind(&profile.location)
            .bind(&profile.avatar_url)
            .bind(profile.account_type.as_str())
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Insert failed: {}", e)))?;

        Ok(profile)
    }

    async fn update(&self, id: Uuid, update: ProfileUpdate) -> Result<UserProfile, DomainError> {
        let mut profile = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::validation("User not found"))?;
        update.apply(&mut profile);

        let query = r#"
            UPDATE user_profiles
            SET display_name = ?, bio = ?, website = ?, location = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&profile.display_name)
            .bind(&profile.bio)
            .bind(&profile.website)
            .bind(&profile.location)
            .bind(profile.updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Update failed: {}", e)))?;

        Ok(profile)
    }

    async fn update_email(&self, id: Uuid, email: &str) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE user_profiles SET email = ?, updated_at = ? WHERE id = ?",
        )
        .bind(email)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::dependency("database", format!("Update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::validation("User not found"));
        }
        Ok(())
    }

    async fn update_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE user_profiles SET avatar_url = ?, updated_at = ? WHERE id = ?",
        )
        .bind(url)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::dependency("database", format!("Update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::validation("User not found"));
        }
        Ok(())
    }

    async fn update_account_type(
        &self,
        id: Uuid,
        account_type: AccountType,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE user_profiles SET account_type = ?, updated_at = ? WHERE id = ?",
        )
        .bind(account_type.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::dependency("database", format!("Update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::validation("User not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_profiles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Delete failed: {}", e)))?;
        Ok(())
    }
}
