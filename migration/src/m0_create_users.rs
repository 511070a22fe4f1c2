use sea_orm_migration::prelude::*;

use super::col;

#[derive(Iden)]
enum User {
	#[iden = "users"]
	Table,
	#[iden = "user_id"]
	UserId,
	Email,
	#[iden = "password_hash"]
	PasswordHash,
	#[iden = "created_at"]
	CreatedAt,
	#[iden = "mc_uuid"]
	McUuid,
	#[iden = "discord_id"]
	DiscordId,
	#[iden = "cape_enabled"]
	CapeEnabled,
	Premium,
	Pepsi,
	Staff,
	Developer,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		let create_users = Table::create()
			.table(User::Table)
			.if_not_exists()
			.col(
				col!(User::UserId)
					.uuid()
					.primary_key()
					.default(Expr::cust("gen_random_uuid()"))
			)
			.col(ColumnDef::new(User::Email).text().unique_key())
			.col(ColumnDef::new(User::PasswordHash).text())
			.col(
				col!(User::CreatedAt)
					.big_integer()
					.default(Expr::cust("EXTRACT(EPOCH FROM NOW())::BIGINT"))
			)
			.col(ColumnDef::new(User::McUuid).uuid().unique_key())
			.col(ColumnDef::new(User::DiscordId).text().unique_key())
			// stored inverted: the application only deals in "incognito"
			.col(col!(User::CapeEnabled).boolean().default(true))
			.col(col!(User::Premium).boolean().default(false))
			.col(col!(User::Pepsi).boolean().default(false))
			.col(col!(User::Staff).boolean().default(false))
			.col(col!(User::Developer).boolean().default(false))
			.to_owned();

		manager.create_table(create_users).await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		let drop_users = Table::drop()
			.table(User::Table)
			.to_owned();

		manager.drop_table(drop_users).await?;

		Ok(())
	}
}
