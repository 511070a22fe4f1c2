pub use sea_orm_migration::prelude::*;


mod m0_create_users;
mod m1_legacy_flags;

pub struct Migrator;

macro_rules! col {
	($name:expr) => {
		sea_orm_migration::prelude::ColumnDef::new($name).not_null()
	}
}

use {col};

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
	fn migrations() -> Vec<Box<dyn MigrationTrait>> {
		vec![
			Box::new(m0_create_users::Migration),
			Box::new(m1_legacy_flags::Migration),
		]
	}
}
