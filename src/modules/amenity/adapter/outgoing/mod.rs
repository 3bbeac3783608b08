mod amenity_query_postgres;
mod amenity_repository_postgres;
pub mod sea_orm_entity;

pub use amenity_query_postgres::AmenityQueryPostgres;
pub use amenity_repository_postgres::AmenityRepositoryPostgres;
