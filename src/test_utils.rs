//! Test utilities with lazy testcontainers support
//!
//! The Postgres container is started on first use and shared across tests.
//! Each test gets its own pool since every `#[tokio::test]` has its own runtime.

#[cfg(test)]
pub mod containers {
    use std::str::FromStr;

    use sqlx::{postgres::PgConnectOptions, PgPool};
    use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    static POSTGRES: OnceCell<ContainerAsync<Postgres>> = OnceCell::const_new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        POSTGRES
            .get_or_init(|| async {
                Postgres::default()
                    .with_user("targeting")
                    .with_password("targeting_test")
                    .with_db_name("targeting_test")
                    .with_tag("16-alpine")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container")
            })
            .await
    }

    /// Get PostgreSQL connection URL from the container
    pub async fn postgres_url() -> String {
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        format!("postgres://targeting:targeting_test@{}:{}/targeting_test", host, port)
    }

    /// Connect to the shared container and apply the schema
    pub async fn migrated_pool() -> PgPool {
        let pool = PgPool::connect(&postgres_url().await)
            .await
            .expect("Failed to connect to test database");

        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    pub async fn insert_campaign(pool: &PgPool, id: &str, status: &str) {
        sqlx::query(
            r#"
            INSERT INTO campaigns (id, name, image, cta, status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET status = EXCLUDED.status
            "#,
        )
        .bind(id)
        .bind(format!("{id} name"))
        .bind(format!("https://cdn.example.com/{id}.png"))
        .bind("Install")
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to insert campaign");
    }

    /// `values_json` is any JSON document accepted by the `values` column
    pub async fn insert_rule(
        pool: &PgPool,
        id: &str,
        campaign_id: &str,
        dimension: &str,
        rule_type: &str,
        values_json: &str,
    ) {
        sqlx::query(
            r#"
            INSERT INTO targeting_rules (id, campaign_id, dimension, rule_type, "values")
            VALUES ($1, $2, $3, $4, $5::jsonb)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(campaign_id)
        .bind(dimension)
        .bind(rule_type)
        .bind(values_json)
        .execute(pool)
        .await
        .expect("Failed to insert targeting rule");
    }

    /// Pool whose `targeting_rules` resolves to a copy in `schema` with a
    /// `"values"` column of `column_type`
    pub async fn pool_with_values_column(schema: &str, column_type: &str) -> PgPool {
        let admin = migrated_pool().await;

        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {schema}"))
            .execute(&admin)
            .await
            .expect("Failed to create schema");
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {schema}.targeting_rules (
                id          TEXT PRIMARY KEY,
                campaign_id TEXT NOT NULL,
                dimension   TEXT NOT NULL,
                rule_type   TEXT NOT NULL,
                "values"    {column_type}
            )
            "#
        ))
        .execute(&admin)
        .await
        .expect("Failed to create targeting_rules variant");

        let options = PgConnectOptions::from_str(&postgres_url().await)
            .expect("Invalid test database url")
            .options([("search_path", schema)]);
        PgPool::connect_with(options)
            .await
            .expect("Failed to connect to test database")
    }

    /// Insert an INCLUDE country rule whose `values` literal is cast to `column_type`
    pub async fn insert_country_rule_as(
        pool: &PgPool,
        column_type: &str,
        id: &str,
        campaign_id: &str,
        values_literal: &str,
    ) {
        sqlx::query(&format!(
            r#"
            INSERT INTO targeting_rules (id, campaign_id, dimension, rule_type, "values")
            VALUES ($1, $2, 'country', 'INCLUDE', $3::{column_type})
            ON CONFLICT (id) DO NOTHING
            "#
        ))
        .bind(id)
        .bind(campaign_id)
        .bind(values_literal)
        .execute(pool)
        .await
        .expect("Failed to insert targeting rule");
    }
}
