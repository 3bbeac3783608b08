use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::amenity::adapter::outgoing::sea_orm_entity::amenities;
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties::{
    ActiveModel, DbPropertyStatus, DbPropertyType, Entity,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::{
    property_amenities, property_images,
};
use crate::modules::property::application::ports::outgoing::property_repository::{
    CreatePropertyData, PropertyRepository, PropertyRepositoryError, UpdatePropertyData,
};

#[derive(Clone)]
pub struct PropertyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryPostgres {
    async fn create(&self, data: CreatePropertyData) -> Result<Uuid, PropertyRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match insert_property(&txn, data).await {
            Ok(id) => {
                txn.commit().await.map_err(map_db_err)?;
                tracing::debug!(property_id = %id, "Property inserted");
                Ok(id)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update(
        &self,
        property_id: Uuid,
        data: UpdatePropertyData,
    ) -> Result<(), PropertyRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match replace_property(&txn, property_id, data).await {
            Ok(()) => txn.commit().await.map_err(map_db_err),
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete(&self, property_id: Uuid) -> Result<(), PropertyRepositoryError> {
        // images, amenity links and inquiries go with it (ON DELETE CASCADE)
        let result = Entity::delete_by_id(property_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PropertyRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Transaction bodies
// ============================================================================

async fn insert_property<C>(db: &C, data: CreatePropertyData) -> Result<Uuid, PropertyRepositoryError>
where
    C: ConnectionTrait,
{
    let amenity_ids = dedup(data.amenity_ids);
    ensure_amenities_exist(db, &amenity_ids).await?;

    let now = Utc::now().fixed_offset();
    let id = Uuid::new_v4();

    let model = ActiveModel {
        id: Set(id),
        title: Set(data.title),
        description: Set(data.description),
        price: Set(data.price),
        property_type: Set(DbPropertyType::from(data.property_type)),
        status: Set(DbPropertyStatus::Active),
        bedrooms: Set(data.bedrooms),
        bathrooms: Set(data.bathrooms),
        area: Set(data.area),
        address: Set(data.address),
        city: Set(data.city),
        state: Set(data.state),
        zip_code: Set(data.zip_code),
        country: Set(data.country),
        latitude: Set(data.latitude),
        longitude: Set(data.longitude),
        featured: Set(data.featured),
        owner_id: Set(Some(data.owner_id)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    model.insert(db).await.map_err(map_db_err)?;

    insert_images(db, id, &data.image_urls).await?;
    insert_amenity_links(db, id, &amenity_ids).await?;

    Ok(id)
}

async fn replace_property<C>(
    db: &C,
    property_id: Uuid,
    data: UpdatePropertyData,
) -> Result<(), PropertyRepositoryError>
where
    C: ConnectionTrait,
{
    let existing = Entity::find_by_id(property_id)
        .one(db)
        .await
        .map_err(map_db_err)?
        .ok_or(PropertyRepositoryError::NotFound)?;

    let amenity_ids = dedup(data.amenity_ids);
    ensure_amenities_exist(db, &amenity_ids).await?;

    let mut model = existing.into_active_model();

    if let Some(title) = data.title {
        model.title = Set(title);
    }
    if let Some(description) = data.description {
        model.description = Set(description);
    }
    if let Some(price) = data.price {
        model.price = Set(price);
    }
    if let Some(property_type) = data.property_type {
        model.property_type = Set(property_type.into());
    }
    if let Some(status) = data.status {
        model.status = Set(status.into());
    }
    if let Some(bedrooms) = data.bedrooms {
        model.bedrooms = Set(Some(bedrooms));
    }
    if let Some(bathrooms) = data.bathrooms {
        model.bathrooms = Set(Some(bathrooms));
    }
    if let Some(area) = data.area {
        model.area = Set(Some(area));
    }
    if let Some(address) = data.address {
        model.address = Set(address);
    }
    if let Some(city) = data.city {
        model.city = Set(city);
    }
    if let Some(state) = data.state {
        model.state = Set(state);
    }
    if let Some(zip_code) = data.zip_code {
        model.zip_code = Set(zip_code);
    }
    if let Some(country) = data.country {
        model.country = Set(country);
    }
    if let Some(latitude) = data.latitude {
        model.latitude = Set(Some(latitude));
    }
    if let Some(longitude) = data.longitude {
        model.longitude = Set(Some(longitude));
    }
    if let Some(featured) = data.featured {
        model.featured = Set(featured);
    }

    // Replacing images alone still counts as an update.
    model.updated_at = Set(Utc::now().fixed_offset());
    model.update(db).await.map_err(map_db_err)?;

    property_images::Entity::delete_many()
        .filter(property_images::Column::PropertyId.eq(property_id))
        .exec(db)
        .await
        .map_err(map_db_err)?;

    property_amenities::Entity::delete_many()
        .filter(property_amenities::Column::PropertyId.eq(property_id))
        .exec(db)
        .await
        .map_err(map_db_err)?;

    insert_images(db, property_id, &data.image_urls).await?;
    insert_amenity_links(db, property_id, &amenity_ids).await?;

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn ensure_amenities_exist<C>(db: &C, ids: &[Uuid]) -> Result<(), PropertyRepositoryError>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(());
    }

    let found: Vec<Uuid> = amenities::Entity::find()
        .filter(amenities::Column::Id.is_in(ids.to_vec()))
        .all(db)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|a| a.id)
        .collect();

    match ids.iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(PropertyRepositoryError::AmenityNotFound(missing.to_string())),
        None => Ok(()),
    }
}

async fn insert_images<C>(
    db: &C,
    property_id: Uuid,
    urls: &[String],
) -> Result<(), PropertyRepositoryError>
where
    C: ConnectionTrait,
{
    if urls.is_empty() {
        return Ok(());
    }

    let now = Utc::now().fixed_offset();
    let rows = image_rows(urls)
        .into_iter()
        .map(|(url, is_primary, position)| property_images::ActiveModel {
            id: Set(Uuid::new_v4()),
            property_id: Set(property_id),
            url: Set(url),
            alt: Set(None),
            is_primary: Set(is_primary),
            position: Set(position),
            created_at: Set(now),
        });

    property_images::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

async fn insert_amenity_links<C>(
    db: &C,
    property_id: Uuid,
    amenity_ids: &[Uuid],
) -> Result<(), PropertyRepositoryError>
where
    C: ConnectionTrait,
{
    if amenity_ids.is_empty() {
        return Ok(());
    }

    let now = Utc::now().fixed_offset();
    let rows = amenity_ids
        .iter()
        .map(|amenity_id| property_amenities::ActiveModel {
            id: Set(Uuid::new_v4()),
            property_id: Set(property_id),
            amenity_id: Set(*amenity_id),
            created_at: Set(now),
        });

    property_amenities::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

/// `(url, is_primary, position)` in the order supplied.
fn image_rows(urls: &[String]) -> Vec<(String, bool, i32)> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| (url.clone(), i == 0, i as i32))
        .collect()
}

fn dedup(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

fn map_db_err(e: DbErr) -> PropertyRepositoryError {
    PropertyRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::property::adapter::outgoing::property_query_postgres::tests::property_model;
    use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;
    use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn amenity(id: Uuid) -> amenities::Model {
        amenities::Model {
            id,
            name: format!("Amenity {id}"),
            category: "Interior".to_string(),
            icon: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn create_data(image_urls: Vec<&str>, amenity_ids: Vec<Uuid>) -> CreatePropertyData {
        CreatePropertyData {
            owner_id: Uuid::new_v4(),
            title: "Harbour View".to_string(),
            description: "Two floors, sea view".to_string(),
            price: Decimal::new(325_000, 0),
            property_type: PropertyType::Sale,
            bedrooms: Some(2),
            bathrooms: Some(1),
            area: None,
            address: "1 Pier Road".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            zip_code: "02110".to_string(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
            featured: false,
            image_urls: image_urls.into_iter().map(String::from).collect(),
            amenity_ids,
        }
    }

    fn statements(log: Vec<Transaction>) -> Vec<String> {
        log.into_iter()
            .flat_map(|t| t.statements().to_vec())
            .map(|s| s.sql)
            .collect()
    }

    #[test]
    fn test_image_rows_first_is_primary_and_positions_start_at_zero() {
        let urls = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];

        let rows = image_rows(&urls);

        assert_eq!(
            rows,
            vec![
                ("a.jpg".to_string(), true, 0),
                ("b.jpg".to_string(), false, 1),
                ("c.jpg".to_string(), false, 2),
            ]
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(dedup(vec![a, b, a, b]), vec![a, b]);
    }

    #[tokio::test]
    async fn test_create_inserts_property_images_and_links() {
        let amenity_id = Uuid::new_v4();
        let inserted = property_model(Uuid::new_v4(), "Harbour View");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![amenity(amenity_id)]])
            .append_query_results(vec![vec![inserted]])
            .append_exec_results([ok_exec(2), ok_exec(1)])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(create_data(vec!["a.jpg", "b.jpg"], vec![amenity_id]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_without_children_only_inserts_property() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![property_model(Uuid::new_v4(), "Bare Lot")]])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        assert!(repo.create(create_data(vec![], vec![])).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_amenity() {
        let known = Uuid::new_v4();
        let unknown = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![amenity(known)]])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(create_data(vec![], vec![known, unknown])).await;

        assert_eq!(
            result,
            Err(PropertyRepositoryError::AmenityNotFound(unknown.to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("insert failed".to_string())])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(create_data(vec![], vec![])).await;

        assert!(matches!(result, Err(PropertyRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_children_wholesale() {
        let property_id = Uuid::new_v4();
        let existing = property_model(property_id, "Old Title");
        let mut updated = existing.clone();
        updated.title = "New Title".to_string();
        updated.status = DbPropertyStatus::Sold;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing]])
            .append_query_results(vec![vec![updated]])
            .append_exec_results([ok_exec(3), ok_exec(2), ok_exec(1)])
            .into_connection();

        let db = Arc::new(db);
        let repo = PropertyRepositoryPostgres::new(Arc::clone(&db));
        let result = repo
            .update(
                property_id,
                UpdatePropertyData {
                    title: Some("New Title".to_string()),
                    status: Some(PropertyStatus::Sold),
                    image_urls: vec!["new.jpg".to_string()],
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
        drop(repo);

        let sql = statements(Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(sql.iter().any(|s| s.starts_with("DELETE FROM \"property_images\"")));
        assert!(sql.iter().any(|s| s.starts_with("DELETE FROM \"property_amenities\"")));
        assert!(sql.iter().any(|s| s.starts_with("INSERT INTO \"property_images\"")));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<properties::Model>::new()])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update(Uuid::new_v4(), UpdatePropertyData::default())
            .await;

        assert_eq!(result, Err(PropertyRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1)])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = PropertyRepositoryPostgres::new(Arc::new(db));
        assert_eq!(
            repo.delete(Uuid::new_v4()).await,
            Err(PropertyRepositoryError::NotFound)
        );
    }
}
