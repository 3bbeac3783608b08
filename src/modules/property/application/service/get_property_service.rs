use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::property::application::ports::incoming::use_cases::{
    GetPropertyError, GetPropertyUseCase,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyQuery, PropertyQueryError, PropertyView,
};

pub struct GetPropertyService<Q>
where
    Q: PropertyQuery,
{
    query: Q,
}

impl<Q> GetPropertyService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPropertyUseCase for GetPropertyService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self, property_id: Uuid) -> Result<PropertyView, GetPropertyError> {
        self.query
            .get_by_id(property_id)
            .await
            .map_err(|e| match e {
                PropertyQueryError::NotFound => GetPropertyError::NotFound,
                PropertyQueryError::DatabaseError(msg) => GetPropertyError::QueryFailed(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::property::application::ports::outgoing::property_query::MockPropertyQuery;

    #[tokio::test]
    async fn test_not_found_is_mapped() {
        let mut query = MockPropertyQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(PropertyQueryError::NotFound));

        let service = GetPropertyService::new(query);

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(GetPropertyError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let mut query = MockPropertyQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(PropertyQueryError::DatabaseError("boom".to_string())));

        let service = GetPropertyService::new(query);

        match service.execute(Uuid::new_v4()).await {
            Err(GetPropertyError::QueryFailed(msg)) => assert_eq!(msg, "boom"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
