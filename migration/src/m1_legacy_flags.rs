use sea_orm_migration::prelude::*;

use super::col;

#[derive(Iden)]
enum User {
	#[iden = "users"]
	Table,
	#[iden = "legacy_enabled"]
	LegacyEnabled,
	Legacy,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		// accounts created before this migration all predate the account system
		let add_legacy = Table::alter()
			.table(User::Table)
			.add_column(col!(User::Legacy).boolean().default(true))
			.add_column(col!(User::LegacyEnabled).boolean().default(false))
			.to_owned();

		manager.alter_table(add_legacy).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		let drop_legacy = Table::alter()
			.table(User::Table)
			.drop_column(User::Legacy)
			.drop_column(User::LegacyEnabled)
			.to_owned();

		manager.alter_table(drop_legacy).await?;

		Ok(())
	}
}
