use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::subscription::SubscriptionRepo,
    domain::entities::{
        plan_type::PlanType, subscription::Subscription, subscription_status::SubscriptionStatus,
    },
};

// status and plan_type are plain TEXT columns so new provider values never
// break decoding.
const SELECT_COLS: &str = r#"
    id, user_id, stripe_customer_id, stripe_subscription_id, status, plan_type,
    current_period_end, created_at, updated_at
"#;

fn row_to_subscription(row: &sqlx::postgres::PgRow) -> Result<Subscription, sqlx::Error> {
    let status: Option<String> = row.try_get("status")?;
    let plan_type: Option<String> = row.try_get("plan_type")?;

    Ok(Subscription {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        stripe_customer_id: row.try_get("stripe_customer_id")?,
        stripe_subscription_id: row.try_get("stripe_subscription_id")?,
        status: status
            .as_deref()
            .map(SubscriptionStatus::parse_lossy)
            .unwrap_or_default(),
        plan_type: plan_type.as_deref().and_then(PlanType::parse),
        current_period_end: row.try_get("current_period_end")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl SubscriptionRepo for PostgresPersistence {
    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Subscription>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM subscriptions WHERE user_id = $1 ORDER BY updated_at DESC NULLS LAST LIMIT 1",
            SELECT_COLS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        row.as_ref()
            .map(row_to_subscription)
            .transpose()
            .map_err(AppError::from)
    }
}
