//! MySQL implementation of the SocialLinkRepository trait.
//!
//! `social_links` carries a unique key on (user_id, network), so the
//! upsert path replaces the URL in place.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lst_core::domain::entities::social_link::SocialLink;
use lst_core::errors::DomainError;
use lst_core::repositories::SocialLinkRepository;

/// MySQL-backed social link persistence
pub struct MySqlSocialLinkRepository {
    pool: MySqlPool,
}

impl MySqlSocialLinkRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_link(row: &sqlx::mysql::MySqlRow) -> Result<SocialLink, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::dependency("database", format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::dependency("database", format!("Failed to get user_id: {}", e)))?;

        Ok(SocialLink {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::dependency("database", format!("Invalid UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::dependency("database", format!("Invalid UUID: {}", e)))?,
            network: row
                .try_get("network")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get network: {}", e)))?,
            url: row
                .try_get("url")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get url: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SocialLinkRepository for MySqlSocialLinkRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SocialLink>, DomainError> {
        let query = r#"
            SELECT id, user_id, network, url, created_at
            FROM social_links
            WHERE user_id = ?
            ORDER BY network
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Query failed: {}", e)))?;

        rows.iter().map(Self::row_to_link).collect()
    }

    async fn upsert(&self, link: SocialLink) -> Result<SocialLink, DomainError> {
        let query = r#"
            INSERT INTO social_links (id, user_id, network, url, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE url = VALUES(url)
        "#;

        sqlx::query(query)
            .bind(link.id.to_string())
            .bind(link.user_id.to_string())
            .bind(&link.network)
            .bind(&link.url)
            .bind(link.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Upsert failed: {}", e)))?;

        // Re-read so the caller sees the surviving row id on replacement.
        let row = sqlx::query(
            "SELECT id, user_id, network, url, created_at \
             FROM social_links WHERE user_id = ? AND network = ?",
        )
        .bind(link.user_id.to_string())
        .bind(&link.network)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::dependency("database", format!("Query failed: {}", e)))?;

        Self::row_to_link(&row)
    }

    async fn delete(&self, user_id: Uuid, network: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM social_links WHERE user_id = ? AND network = ?")
            .bind(user_id.to_string())
            .bind(network)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Delete failed: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM social_links WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Delete failed: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
