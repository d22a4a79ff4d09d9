pub mod category_query_postgres;
pub mod category_repository_postgres;
pub mod sea_orm_entity;
