//! Campaign repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    constants::campaign_status,
    db::store::CampaignStore,
    error::StorageResult,
    models::Campaign,
};

/// Repository for campaign database operations
#[derive(Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find all active campaigns, in the order Postgres returns them
    pub async fn find_active(pool: &PgPool) -> StorageResult<Vec<Campaign>> {
        let campaigns = sqlx::query_as::<_, Campaign>(
            r#"
            SELECT
                id::text AS id,
                COALESCE(name, '') AS name,
                COALESCE(image, '') AS image,
                COALESCE(cta, '') AS cta,
                status
            FROM campaigns
            WHERE status = $1
            "#,
        )
        .bind(campaign_status::ACTIVE)
        .fetch_all(pool)
        .await?;

        Ok(campaigns)
    }
}

#[async_trait]
impl CampaignStore for CampaignRepository {
    async fn fetch_active(&self) -> StorageResult<Vec<Campaign>> {
        Self::find_active(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::containers;

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_find_active_skips_inactive() {
        let pool = containers::migrated_pool().await;
        containers::insert_campaign(&pool, "repo-active", "ACTIVE").await;
        containers::insert_campaign(&pool, "repo-inactive", "INACTIVE").await;

        let store = CampaignRepository::new(pool);
        let campaigns = store.fetch_active().await.unwrap();

        assert!(campaigns.iter().any(|c| c.id == "repo-active"));
        assert!(campaigns.iter().all(|c| c.id != "repo-inactive"));
        assert!(campaigns.iter().all(Campaign::is_active));
    }
}
