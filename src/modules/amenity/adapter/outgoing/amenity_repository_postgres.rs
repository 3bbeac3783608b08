use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::amenity::application::ports::outgoing::{
    AmenityRepository, AmenityRepositoryError, AmenityView, NewAmenity,
};

use super::amenity_query_postgres::model_to_view;
use super::sea_orm_entity::amenities::ActiveModel;

#[derive(Clone)]
pub struct AmenityRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AmenityRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505") || err_str.contains("duplicate key") || err_str.contains("unique")
}

#[async_trait]
impl AmenityRepository for AmenityRepositoryPostgres {
    async fn create(&self, amenity: NewAmenity) -> Result<AmenityView, AmenityRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(amenity.name),
            category: Set(amenity.category),
            icon: Set(amenity.icon),
            created_at: Set(Utc::now().into()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AmenityRepositoryError::NameAlreadyExists
            } else {
                AmenityRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(model_to_view(inserted))
    }
}
