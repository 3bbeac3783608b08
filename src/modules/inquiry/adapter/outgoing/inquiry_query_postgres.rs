use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::analytics::{
    AnalyticsSnapshot, MonthlyCount, TopProperty,
};
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryImageView, InquiryPropertyView, InquiryQuery, InquiryQueryError, InquiryView,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::{properties, property_images};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::inquiries::{self, Column, DbInquiryStatus, Entity};

#[derive(Clone)]
pub struct InquiryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct StatusCountRow {
    status: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct MonthCountRow {
    year: i32,
    month: i32,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct TopPropertyRow {
    property_id: Uuid,
    title: String,
    inquiry_count: i64,
}

#[async_trait]
impl InquiryQuery for InquiryQueryPostgres {
    async fn get_by_id(&self, inquiry_id: Uuid) -> Result<InquiryView, InquiryQueryError> {
        let inquiry = Entity::find_by_id(inquiry_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(InquiryQueryError::NotFound)?;

        attach_properties(&*self.db, vec![inquiry])
            .await?
            .pop()
            .ok_or(InquiryQueryError::NotFound)
    }

    async fn list(
        &self,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, InquiryQueryError> {
        let mut query = Entity::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(DbInquiryStatus::from(status)));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: attach_properties(&*self.db, models).await?,
            page: page.page,
            limit: page.limit,
            total,
        })
    }

    async fn property_exists(&self, property_id: Uuid) -> Result<bool, InquiryQueryError> {
        let count = properties::Entity::find()
            .filter(properties::Column::Id.eq(property_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn analytics_snapshot(
        &self,
        since: DateTime<Utc>,
        top: u64,
    ) -> Result<AnalyticsSnapshot, InquiryQueryError> {
        let status_rows = StatusCountRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            r#"SELECT status::text AS status, COUNT(*)::bigint AS count
               FROM inquiries
               GROUP BY status"#,
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let month_rows = MonthCountRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')::int AS year,
                      EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')::int AS month,
                      COUNT(*)::bigint AS count
               FROM inquiries
               WHERE created_at >= $1
               GROUP BY 1, 2"#,
            [since.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let top_rows = TopPropertyRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT i.property_id, p.title, COUNT(*)::bigint AS inquiry_count
               FROM inquiries i
               JOIN properties p ON p.id = i.property_id
               GROUP BY i.property_id, p.title
               ORDER BY inquiry_count DESC, p.title ASC
               LIMIT $1"#,
            [(top as i64).into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let status_counts = status_rows
            .into_iter()
            .filter_map(|row| match row.status.parse::<InquiryStatus>() {
                Ok(status) => Some((status, row.count.max(0) as u64)),
                Err(e) => {
                    warn!("Skipping inquiry status bucket: {}", e);
                    None
                }
            })
            .collect();

        Ok(AnalyticsSnapshot {
            status_counts,
            monthly_counts: month_rows
                .into_iter()
                .map(|row| MonthlyCount {
                    year: row.year,
                    month: row.month.max(1) as u32,
                    count: row.count.max(0) as u64,
                })
                .collect(),
            top_properties: top_rows
                .into_iter()
                .map(|row| TopProperty {
                    property_id: row.property_id,
                    title: row.title,
                    inquiry_count: row.inquiry_count.max(0) as u64,
                })
                .collect(),
        })
    }
}

/// Loads the referenced properties and their images, keeping the input order.
async fn attach_properties<C>(
    db: &C,
    inquiries: Vec<inquiries::Model>,
) -> Result<Vec<InquiryView>, InquiryQueryError>
where
    C: ConnectionTrait,
{
    if inquiries.is_empty() {
        return Ok(Vec::new());
    }

    let mut property_ids: Vec<Uuid> = inquiries.iter().map(|i| i.property_id).collect();
    property_ids.sort_unstable();
    property_ids.dedup();

    let property_rows = properties::Entity::find()
        .filter(properties::Column::Id.is_in(property_ids.clone()))
        .all(db)
        .await
        .map_err(map_db_err)?;

    let images = property_images::Entity::find()
        .filter(property_images::Column::PropertyId.is_in(property_ids))
        .order_by_asc(property_images::Column::Position)
        .all(db)
        .await
        .map_err(map_db_err)?;

    let mut images_by_property: HashMap<Uuid, Vec<InquiryImageView>> = HashMap::new();
    for image in images {
        images_by_property
            .entry(image.property_id)
            .or_default()
            .push(InquiryImageView {
                url: image.url,
                is_primary: image.is_primary,
            });
    }

    let by_id: HashMap<Uuid, InquiryPropertyView> = property_rows
        .into_iter()
        .map(|p| {
            let images = images_by_property.remove(&p.id).unwrap_or_default();
            (
                p.id,
                InquiryPropertyView {
                    id: p.id,
                    title: p.title,
                    price: p.price,
                    property_type: p.property_type.into(),
                    status: p.status.into(),
                    address: p.address,
                    city: p.city,
                    state: p.state,
                    images,
                },
            )
        })
        .collect();

    Ok(inquiries
        .into_iter()
        .filter_map(|inquiry| {
            let Some(property) = by_id.get(&inquiry.property_id).cloned() else {
                warn!(inquiry_id = %inquiry.id, "Inquiry references a missing property");
                return None;
            };
            Some(model_to_view(inquiry, property))
        })
        .collect())
}

fn model_to_view(model: inquiries::Model, property: InquiryPropertyView) -> InquiryView {
    InquiryView {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        message: model.message,
        status: model.status.into(),
        property,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> InquiryQueryError {
    InquiryQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::property::adapter::outgoing::sea_orm_entity::properties::{
        DbPropertyStatus, DbPropertyType,
    };
    use rust_decimal::Decimal;
    use sea_orm::sea_query::Value;
    use sea_orm::MockDatabase;
    use std::collections::BTreeMap;

    pub(crate) fn inquiry_model(property_id: Uuid, status: DbInquiryStatus) -> inquiries::Model {
        let now = Utc::now().fixed_offset();
        inquiries::Model {
            id: Uuid::new_v4(),
            name: "Jane Buyer".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            message: "Can I visit on Saturday?".to_string(),
            status,
            property_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn property_row(id: Uuid, title: &str) -> properties::Model {
        let now = Utc::now().fixed_offset();
        properties::Model {
            id,
            title: title.to_string(),
            description: "Quiet street".to_string(),
            price: Decimal::new(320_000, 0),
            property_type: DbPropertyType::Sale,
            status: DbPropertyStatus::Active,
            bedrooms: Some(2),
            bathrooms: Some(1),
            area: None,
            address: "9 Pine Road".to_string(),
            city: "Boise".to_string(),
            state: "ID".to_string(),
            zip_code: "83702".to_string(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
            featured: false,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn image_row(property_id: Uuid, position: i32) -> property_images::Model {
        property_images::Model {
            id: Uuid::new_v4(),
            property_id,
            url: format!("https://cdn/{position}.jpg"),
            alt: None,
            is_primary: position == 0,
            position,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn test_get_by_id_includes_property_and_images() {
        let property_id = Uuid::new_v4();
        let inquiry = inquiry_model(property_id, DbInquiryStatus::Contacted);
        let inquiry_id = inquiry.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inquiry]])
            .append_query_results(vec![vec![property_row(property_id, "Pine Cottage")]])
            .append_query_results(vec![vec![image_row(property_id, 0), image_row(property_id, 1)]])
            .into_connection();

        let view = InquiryQueryPostgres::new(Arc::new(db))
            .get_by_id(inquiry_id)
            .await
            .unwrap();

        assert_eq!(view.id, inquiry_id);
        assert_eq!(view.status, InquiryStatus::Contacted);
        assert_eq!(view.property.title, "Pine Cottage");
        assert_eq!(view.property.images.len(), 2);
        assert!(view.property.images[0].is_primary);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<inquiries::Model>::new()])
            .into_connection();

        let result = InquiryQueryPostgres::new(Arc::new(db))
            .get_by_id(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(InquiryQueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_shares_property_lookups() {
        let property_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(2)]])
            .append_query_results(vec![vec![
                inquiry_model(property_id, DbInquiryStatus::New),
                inquiry_model(property_id, DbInquiryStatus::New),
            ]])
            .append_query_results(vec![vec![property_row(property_id, "Pine Cottage")]])
            .append_query_results(vec![Vec::<property_images::Model>::new()])
            .into_connection();

        let db = Arc::new(db);
        let result = InquiryQueryPostgres::new(Arc::clone(&db))
            .list(Some(InquiryStatus::New), PageRequest::new(None, None, 20))
            .await
            .unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.items.len(), 2);
        assert!(result.items.iter().all(|i| i.property.id == property_id));

        let sql: Vec<String> = Arc::try_unwrap(db)
            .unwrap()
            .into_transaction_log()
            .into_iter()
            .flat_map(|t| t.statements().to_vec())
            .map(|s| s.sql)
            .collect();
        assert!(sql[1].contains(r#""inquiries"."status" = "#), "{sql:?}");
        assert!(sql[1].contains("inquiry_status"), "{sql:?}");
        assert!(sql[1].contains(r#"ORDER BY "inquiries"."created_at" DESC"#), "{sql:?}");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();

        let result = InquiryQueryPostgres::new(Arc::new(db))
            .list(None, PageRequest::new(Some(2), None, 20))
            .await
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.page, 2);
        assert_eq!(result.limit, 20);
    }

    #[tokio::test]
    async fn test_property_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();
        let query = InquiryQueryPostgres::new(Arc::new(db));

        assert!(query.property_exists(Uuid::new_v4()).await.unwrap());
        assert!(!query.property_exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_analytics_snapshot_maps_rows() {
        let property_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                BTreeMap::from([("status", Value::from("NEW")), ("count", Value::from(4i64))]),
                BTreeMap::from([("status", Value::from("CLOSED")), ("count", Value::from(1i64))]),
            ]])
            .append_query_results(vec![vec![BTreeMap::from([
                ("year", Value::from(2025i32)),
                ("month", Value::from(3i32)),
                ("count", Value::from(5i64)),
            ])]])
            .append_query_results(vec![vec![BTreeMap::from([
                ("property_id", Value::from(property_id)),
                ("title", Value::from("Pine Cottage")),
                ("inquiry_count", Value::from(5i64)),
            ])]])
            .into_connection();

        let snapshot = InquiryQueryPostgres::new(Arc::new(db))
            .analytics_snapshot(Utc::now(), 5)
            .await
            .unwrap();

        assert_eq!(
            snapshot.status_counts,
            vec![(InquiryStatus::New, 4), (InquiryStatus::Closed, 1)]
        );
        assert_eq!(
            snapshot.monthly_counts,
            vec![MonthlyCount { year: 2025, month: 3, count: 5 }]
        );
        assert_eq!(snapshot.top_properties[0].property_id, property_id);
        assert_eq!(snapshot.top_properties[0].inquiry_count, 5);
    }

    #[tokio::test]
    async fn test_analytics_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".to_string())])
            .into_connection();

        let result = InquiryQueryPostgres::new(Arc::new(db))
            .analytics_snapshot(Utc::now(), 5)
            .await;

        assert!(matches!(result, Err(InquiryQueryError::DatabaseError(_))));
    }
}
