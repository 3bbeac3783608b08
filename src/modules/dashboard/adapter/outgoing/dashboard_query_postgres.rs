use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::dashboard::application::domain::activity::{RecentInquiry, RecentProperty};
use crate::modules::dashboard::application::domain::stats::DashboardCounts;
use crate::modules::dashboard::application::ports::outgoing::{
    DashboardQuery, DashboardQueryError,
};
use crate::modules::inquiry::adapter::outgoing::sea_orm_entity::inquiries;
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;

#[derive(Clone)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountsRow {
    total_properties: i64,
    properties_this_month: i64,
    active_properties: i64,
    total_inquiries: i64,
    inquiries_this_month: i64,
    pending_inquiries: i64,
    total_revenue: Decimal,
    revenue_this_month: Decimal,
}

const COUNTS_SQL: &str = r#"
SELECT
    (SELECT COUNT(*) FROM properties)::bigint AS total_properties,
    (SELECT COUNT(*) FROM properties WHERE created_at >= $1)::bigint AS properties_this_month,
    (SELECT COUNT(*) FROM properties WHERE status = 'ACTIVE')::bigint AS active_properties,
    (SELECT COUNT(*) FROM inquiries)::bigint AS total_inquiries,
    (SELECT COUNT(*) FROM inquiries WHERE created_at >= $1)::bigint AS inquiries_this_month,
    (SELECT COUNT(*) FROM inquiries WHERE status = 'NEW')::bigint AS pending_inquiries,
    (SELECT COALESCE(SUM(price), 0) FROM properties
        WHERE status IN ('SOLD', 'RENTED')) AS total_revenue,
    (SELECT COALESCE(SUM(price), 0) FROM properties
        WHERE status IN ('SOLD', 'RENTED') AND updated_at >= $1) AS revenue_this_month
"#;

fn non_negative(n: i64) -> u64 {
    n.max(0) as u64
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn counts(
        &self,
        month_start: DateTime<Utc>,
    ) -> Result<DashboardCounts, DashboardQueryError> {
        let row = CountsRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            COUNTS_SQL,
            [month_start.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DashboardQueryError::DatabaseError("counts query returned no row".into()))?;

        Ok(DashboardCounts {
            total_properties: non_negative(row.total_properties),
            properties_this_month: non_negative(row.properties_this_month),
            active_properties: non_negative(row.active_properties),
            total_inquiries: non_negative(row.total_inquiries),
            inquiries_this_month: non_negative(row.inquiries_this_month),
            pending_inquiries: non_negative(row.pending_inquiries),
            total_revenue: row.total_revenue,
            revenue_this_month: row.revenue_this_month,
        })
    }

    async fn recent_inquiries(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentInquiry>, DashboardQueryError> {
        let rows = inquiries::Entity::find()
            .order_by_desc(inquiries::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids: Vec<Uuid> = rows.iter().map(|r| r.property_id).collect();
        let titles: HashMap<Uuid, String> = properties::Entity::find()
            .filter(properties::Column::Id.is_in(property_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.id, p.title))
            .collect();

        Ok(rows
            .into_iter()
            .map(|r| RecentInquiry {
                id: r.id,
                name: r.name,
                property_title: titles.get(&r.property_id).cloned(),
                created_at: r.created_at.into(),
            })
            .collect())
    }

    async fn recent_properties(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentProperty>, DashboardQueryError> {
        let rows = properties::Entity::find()
            .order_by_desc(properties::Column::UpdatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|p| RecentProperty {
                id: p.id,
                title: p.title,
                status: p.status.into(),
                updated_at: p.updated_at.into(),
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> DashboardQueryError {
    DashboardQueryError::DatabaseError(e.to_string())
}
