pub use sea_orm_migration::prelude::*;

mod m20260301_093020_create_url_table;
mod m20260301_101144_url_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_093020_create_url_table::Migration),
            Box::new(m20260301_101144_url_index::Migration),
        ]
    }
}
