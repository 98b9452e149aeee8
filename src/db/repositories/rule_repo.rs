//! Targeting rule repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{db::store::RuleStore, error::StorageResult, models::TargetingRule};

/// Repository for targeting rule database operations
#[derive(Clone)]
pub struct RuleRepository {
    pool: PgPool,
}

impl RuleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get all rules owned by a campaign
    ///
    /// `values` is selected with its native column type; decoding of the
    /// different stored shapes happens in `TargetingRule::from_row`.
    pub async fn find_by_campaign(
        pool: &PgPool,
        campaign_id: &str,
    ) -> StorageResult<Vec<TargetingRule>> {
        let rules = sqlx::query_as::<_, TargetingRule>(
            r#"
            SELECT
                id::text AS id,
                campaign_id::text AS campaign_id,
                dimension,
                rule_type,
                "values"
            FROM targeting_rules
            WHERE campaign_id::text = $1
            "#,
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;

        Ok(rules)
    }
}

#[async_trait]
impl RuleStore for RuleRepository {
    async fn fetch_rules(&self, campaign_id: &str) -> StorageResult<Vec<TargetingRule>> {
        Self::find_by_campaign(&self.pool, campaign_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::RuleType, test_utils::containers};

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_find_by_campaign_decodes_both_value_shapes() {
        let pool = containers::migrated_pool().await;
        containers::insert_campaign(&pool, "repo-rules", "ACTIVE").await;
        containers::insert_rule(
            &pool,
            "repo-rules-1",
            "repo-rules",
            "country",
            "INCLUDE",
            r#"["US","CA"]"#,
        )
        .await;
        containers::insert_rule(
            &pool,
            "repo-rules-2",
            "repo-rules",
            "os",
            "EXCLUDE",
            r#""IOS, WEB""#,
        )
        .await;

        let store = RuleRepository::new(pool);
        let mut rules = store.fetch_rules("repo-rules").await.unwrap();
        rules.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].rule_type, RuleType::Include);
        assert_eq!(rules[0].values.as_slice(), ["US", "CA"]);
        assert_eq!(rules[1].rule_type, RuleType::Exclude);
        assert_eq!(rules[1].values.as_slice(), ["IOS", "WEB"]);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_find_by_campaign_without_rules() {
        let pool = containers::migrated_pool().await;
        containers::insert_campaign(&pool, "repo-no-rules", "ACTIVE").await;

        let rules = RuleRepository::find_by_campaign(&pool, "repo-no-rules")
            .await
            .unwrap();
        assert!(rules.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_text_and_array_columns_decode_like_jsonb() {
        let pool = containers::migrated_pool().await;
        containers::insert_campaign(&pool, "repo-shapes", "ACTIVE").await;
        containers::insert_rule(
            &pool,
            "repo-shapes-1",
            "repo-shapes",
            "country",
            "INCLUDE",
            r#"["US","CA"]"#,
        )
        .await;
        let expected = RuleRepository::find_by_campaign(&pool, "repo-shapes")
            .await
            .unwrap()
            .remove(0)
            .values;
        assert_eq!(expected.as_slice(), ["US", "CA"]);

        for (schema, column_type, stored) in [
            ("values_as_text", "TEXT", "US, CA"),
            ("values_as_array", "TEXT[]", "{US,CA}"),
        ] {
            let variant = containers::pool_with_values_column(schema, column_type).await;
            containers::insert_country_rule_as(
                &variant,
                column_type,
                "repo-shapes-1",
                "repo-shapes",
                stored,
            )
            .await;

            let rules = RuleRepository::find_by_campaign(&variant, "repo-shapes")
                .await
                .unwrap();
            assert_eq!(rules.len(), 1, "{column_type}");
            assert_eq!(rules[0].values, expected, "{column_type}");
        }
    }
}
