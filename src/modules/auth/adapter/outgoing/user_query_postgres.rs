use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Helper to map SeaORM model to UserQueryResult
pub(crate) fn map_to_query_result(model: UserModel) -> UserQueryResult {
    UserQueryResult {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        role: model.role.into(),
        email_verified_at: model.email_verified_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(map_to_query_result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(map_to_query_result))
    }

    async fn find_by_verification_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::VerificationTokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(map_to_query_result))
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::ResetTokenHash.eq(token_hash))
            .filter(UserColumn::ResetTokenExpiresAt.gt(now))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(map_to_query_result))
    }
}
