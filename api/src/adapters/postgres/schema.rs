//! Schema bootstrap
//!
//! Creates the tables, constraints and indexes described by the SeaORM
//! entities when they do not exist yet.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{departments, employees};

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parent table first so the employees foreign key resolves
    create_table(db, &schema, departments::Entity).await?;
    create_table(db, &schema, employees::Entity).await?;

    tracing::debug!("Database schema is up to date");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Copy,
{
    let backend = db.get_database_backend();

    db.execute(backend.build(schema.create_table_from_entity(entity).if_not_exists()))
        .await?;

    for mut index in schema.create_index_from_entity(entity) {
        db.execute(backend.build(index.if_not_exists())).await?;
    }

    Ok(())
}
