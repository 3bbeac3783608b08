use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::user_query_postgres::map_to_query_result;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn is_unique_violation(e: &DbErr) -> bool {
        let err_str = e.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }

    fn expect_one_row(rows_affected: u64) -> Result<(), UserRepositoryError> {
        if rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(
        &self,
        data: CreateUserData,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            role: Set(data.role.into()),
            email_verified_at: Set(data.email_verified.then(|| now.into())),
            verification_token_hash: Set(data.verification_token_hash),
            reset_token_hash: Set(None),
            reset_token_expires_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            Self::map_db_err(e)
        })?;

        Ok(map_to_query_result(inserted))
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::EmailVerifiedAt, Expr::value(now))
            .col_expr(
                UserColumn::VerificationTokenHash,
                Expr::value(Option::<String>::None),
            )
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::expect_one_row(result.rows_affected)
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let expires_at: sea_orm::prelude::DateTimeWithTimeZone = expires_at.into();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::ResetTokenHash, Expr::value(token_hash))
            .col_expr(UserColumn::ResetTokenExpiresAt, Expr::value(expires_at))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::expect_one_row(result.rows_affected)
    }

    async fn reset_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(password_hash))
            .col_expr(UserColumn::ResetTokenHash, Expr::value(Option::<String>::None))
            .col_expr(
                UserColumn::ResetTokenExpiresAt,
                Expr::value(Option::<sea_orm::prelude::DateTimeWithTimeZone>::None),
            )
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::expect_one_row(result.rows_affected)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(password_hash))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::expect_one_row(result.rows_affected)
    }

    async fn update_name(
        &self,
        user_id: Uuid,
        name: String,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let updated = UserEntity::update_many()
            .col_expr(UserColumn::Name, Expr::value(name))
            .filter(UserColumn::Id.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(map_to_query_result)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}
