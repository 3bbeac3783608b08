use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError, NewInquiry,
};

use super::sea_orm_entity::inquiries::{ActiveModel, Column, DbInquiryStatus, Entity};

#[derive(Clone)]
pub struct InquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_foreign_key_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23503") || err_str.contains("foreign key")
}

fn map_db_err(e: DbErr) -> InquiryRepositoryError {
    InquiryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryPostgres {
    async fn create(&self, inquiry: NewInquiry) -> Result<Uuid, InquiryRepositoryError> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(inquiry.name),
            email: Set(inquiry.email),
            phone: Set(inquiry.phone),
            message: Set(inquiry.message),
            status: Set(DbInquiryStatus::New),
            property_id: Set(inquiry.property_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                InquiryRepositoryError::PropertyNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.id)
    }

    async fn update_status(
        &self,
        inquiry_id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), InquiryRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                status: Set(status.into()),
                updated_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .filter(Column::Id.eq(inquiry_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(InquiryRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, inquiry_id: Uuid) -> Result<(), InquiryRepositoryError> {
        let result = Entity::delete_by_id(inquiry_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(InquiryRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::inquiry::adapter::outgoing::sea_orm_entity::inquiries::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_inquiry() -> NewInquiry {
        NewInquiry {
            name: "Jane Buyer".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            message: "Still available?".to_string(),
            property_id: Uuid::new_v4(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_returns_new_id() {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let data = new_inquiry();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![Model {
                id,
                name: data.name.clone(),
                email: data.email.clone(),
                phone: None,
                message: data.message.clone(),
                status: DbInquiryStatus::New,
                property_id: data.property_id,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let repo = InquiryRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.create(data).await, Ok(id));
    }

    #[tokio::test]
    async fn test_create_foreign_key_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"inquiries\" violates foreign key constraint".to_string(),
            )])
            .into_connection();

        let repo = InquiryRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.create(new_inquiry()).await,
            Err(InquiryRepositoryError::PropertyNotFound)
        );
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();

        let db = Arc::new(db);
        let repo = InquiryRepositoryPostgres::new(Arc::clone(&db));

        assert!(repo
            .update_status(Uuid::new_v4(), InquiryStatus::OfferMade)
            .await
            .is_ok());
        assert_eq!(
            repo.update_status(Uuid::new_v4(), InquiryStatus::Spam).await,
            Err(InquiryRepositoryError::NotFound)
        );
        drop(repo);

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = &log[0].statements()[0];
        assert!(sql.sql.starts_with(r#"UPDATE "inquiries" SET "status""#), "{}", sql.sql);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();

        let repo = InquiryRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
        assert_eq!(
            repo.delete(Uuid::new_v4()).await,
            Err(InquiryRepositoryError::NotFound)
        );
    }
}
