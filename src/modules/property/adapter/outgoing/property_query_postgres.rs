use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::amenity::adapter::outgoing::sea_orm_entity::amenities;
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties::{
    self, Column, DbPropertyStatus, DbPropertyType, Entity,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::{
    property_amenities, property_images,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyAmenityView, PropertyImageView, PropertyListFilter, PropertyQuery, PropertyQueryError,
    PropertyView,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct PropertyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyQuery for PropertyQueryPostgres {
    async fn get_by_id(&self, property_id: Uuid) -> Result<PropertyView, PropertyQueryError> {
        let property = Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PropertyQueryError::NotFound)?;

        let mut views = attach_children(&*self.db, vec![property]).await?;
        views.pop().ok_or(PropertyQueryError::NotFound)
    }

    async fn list(
        &self,
        filter: PropertyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PropertyView>, PropertyQueryError> {
        let query = apply_filter(Entity::find(), &filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let models = query
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = attach_children(&*self.db, models).await?;

        Ok(PageResult {
            items,
            page: page.page,
            limit: page.limit,
            total,
        })
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Adds the listing predicates to `query`. Every set field narrows the result.
pub(crate) fn apply_filter(
    query: Select<Entity>,
    filter: &PropertyListFilter,
) -> Select<Entity> {
    let mut cond = Condition::all();

    if let Some(property_type) = filter.property_type {
        cond = cond.add(Column::PropertyType.eq(DbPropertyType::from(property_type)));
    }

    if let Some(status) = filter.status {
        cond = cond.add(Column::Status.eq(DbPropertyStatus::from(status)));
    }

    if filter.featured_only {
        cond = cond.add(Column::Featured.eq(true));
    }

    if let Some(city) = &filter.city {
        cond = cond.add(Expr::col(Column::City).ilike(contains_pattern(city)));
    }

    if let Some(bedrooms) = filter.min_bedrooms {
        cond = cond.add(Column::Bedrooms.gte(bedrooms));
    }

    if let Some(bathrooms) = filter.min_bathrooms {
        cond = cond.add(Column::Bathrooms.gte(bathrooms));
    }

    if let Some(min_price) = filter.min_price {
        cond = cond.add(Column::Price.gte(min_price));
    }

    if let Some(max_price) = filter.max_price {
        cond = cond.add(Column::Price.lte(max_price));
    }

    if let Some(search) = &filter.search {
        let pattern = contains_pattern(search);
        cond = cond.add(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(pattern.clone()))
                .add(Expr::col(Column::Description).ilike(pattern.clone()))
                .add(Expr::col(Column::Address).ilike(pattern.clone()))
                .add(Expr::col(Column::City).ilike(pattern)),
        );
    }

    query.filter(cond)
}

/// `%term%` with LIKE wildcards in `term` escaped. Backslash is the
/// Postgres default LIKE escape character.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.trim().chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

// ============================================================================
// Child rows
// ============================================================================

/// Loads images and amenities for `models` in two round trips and keeps the
/// input order.
async fn attach_children<C>(
    db: &C,
    models: Vec<properties::Model>,
) -> Result<Vec<PropertyView>, PropertyQueryError>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

    let images = property_images::Entity::find()
        .filter(property_images::Column::PropertyId.is_in(ids.clone()))
        .order_by_asc(property_images::Column::Position)
        .all(db)
        .await
        .map_err(map_db_err)?;

    let links = property_amenities::Entity::find()
        .filter(property_amenities::Column::PropertyId.is_in(ids))
        .all(db)
        .await
        .map_err(map_db_err)?;

    let catalogue: HashMap<Uuid, amenities::Model> = if links.is_empty() {
        HashMap::new()
    } else {
        let amenity_ids: Vec<Uuid> = links.iter().map(|l| l.amenity_id).collect();
        amenities::Entity::find()
            .filter(amenities::Column::Id.is_in(amenity_ids))
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|a| (a.id, a))
            .collect()
    };

    let mut images_by_property: HashMap<Uuid, Vec<PropertyImageView>> = HashMap::new();
    for image in images {
        images_by_property
            .entry(image.property_id)
            .or_default()
            .push(image_to_view(image));
    }

    let mut amenities_by_property: HashMap<Uuid, Vec<PropertyAmenityView>> = HashMap::new();
    for link in links {
        if let Some(amenity) = catalogue.get(&link.amenity_id) {
            amenities_by_property
                .entry(link.property_id)
                .or_default()
                .push(amenity_to_view(amenity));
        }
    }

    Ok(models
        .into_iter()
        .map(|model| {
            let images = images_by_property.remove(&model.id).unwrap_or_default();
            let mut amenities = amenities_by_property.remove(&model.id).unwrap_or_default();
            amenities.sort_by(|a, b| a.name.cmp(&b.name));
            model_to_view(model, images, amenities)
        })
        .collect())
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_view(
    model: properties::Model,
    images: Vec<PropertyImageView>,
    amenities: Vec<PropertyAmenityView>,
) -> PropertyView {
    PropertyView {
        id: model.id,
        title: model.title,
        description: model.description,
        price: model.price,
        property_type: model.property_type.into(),
        status: model.status.into(),
        bedrooms: model.bedrooms,
        bathrooms: model.bathrooms,
        area: model.area,
        address: model.address,
        city: model.city,
        state: model.state,
        zip_code: model.zip_code,
        country: model.country,
        latitude: model.latitude,
        longitude: model.longitude,
        featured: model.featured,
        owner_id: model.owner_id,
        images,
        amenities,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn image_to_view(model: property_images::Model) -> PropertyImageView {
    PropertyImageView {
        id: model.id,
        url: model.url,
        alt: model.alt,
        is_primary: model.is_primary,
        position: model.position,
    }
}

fn amenity_to_view(model: &amenities::Model) -> PropertyAmenityView {
    PropertyAmenityView {
        id: model.id,
        name: model.name.clone(),
        category: model.category.clone(),
        icon: model.icon.clone(),
    }
}

fn map_db_err(e: DbErr) -> PropertyQueryError {
    PropertyQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
