use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::amenity::application::ports::outgoing::{
    AmenityQuery, AmenityQueryError, AmenityView,
};

use super::sea_orm_entity::amenities::{Column, Entity, Model};

#[derive(Clone)]
pub struct AmenityQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AmenityQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AmenityQuery for AmenityQueryPostgres {
    async fn list(&self, category: Option<String>) -> Result<Vec<AmenityView>, AmenityQueryError> {
        let mut query = Entity::find();
        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        let rows = query
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_view).collect())
    }

    async fn name_exists(&self, name: &str) -> Result<bool, AmenityQueryError> {
        let count = Entity::find()
            .filter(Column::Name.eq(name))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

pub(crate) fn model_to_view(model: Model) -> AmenityView {
    AmenityView {
        id: model.id,
        name: model.name,
        category: model.category,
        icon: model.icon,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> AmenityQueryError {
    AmenityQueryError::DatabaseError(e.to_string())
}
