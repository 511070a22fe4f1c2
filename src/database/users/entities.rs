pub mod user {
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "users")]
	pub struct Model {
		#[sea_orm(primary_key, auto_increment = false)]
		pub user_id: Uuid,
		#[sea_orm(unique)]
		pub email: Option<String>,
		pub password_hash: Option<String>,
		pub created_at: i64,
		#[sea_orm(unique)]
		pub mc_uuid: Option<Uuid>,
		#[sea_orm(unique)]
		pub discord_id: Option<String>,
		pub cape_enabled: bool,
		pub premium: bool,
		pub pepsi: bool,
		pub staff: bool,
		pub developer: bool,
		pub legacy: bool,
		pub legacy_enabled: bool,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {}

	impl ActiveModelBehavior for ActiveModel {}
}
