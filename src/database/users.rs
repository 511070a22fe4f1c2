use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
	ActiveModelTrait,
	ColumnTrait,
	ConnectOptions,
	Database,
	DatabaseConnection,
	EntityTrait,
	IntoActiveModel,
	QueryFilter,
	Set,
	sea_query::SimpleExpr,
};
use uuid::Uuid;

mod entities;

use entities::*;
use migration::{Migrator, MigratorTrait};

use crate::roles::{RoleFlags, RoleRegistry};
use crate::users::User;

use super::{Preferences, StoreError, StoreResult, UserStore};

/// Users backed by the `users` table.
pub struct UsersDatabase {
	connection: DatabaseConnection,
	registry: Arc<RoleRegistry>,
}

impl UsersDatabase {
	/// Connects and brings the schema up to date.
	pub async fn connect(url: &str, registry: Arc<RoleRegistry>) -> StoreResult<Self> {
		let mut connect_options = ConnectOptions::new(url);
		connect_options
			.connect_timeout(Duration::from_secs(2))
			.acquire_timeout(Duration::from_secs(2));

		let connection = Database::connect(connect_options).await?;
		Migrator::up(&connection, None).await?;
		Ok(Self { connection, registry })
	}

	async fn find_one(&self, filter: SimpleExpr) -> StoreResult<Option<User>> {
		let model = user::Entity::find()
			.filter(filter)
			.one(&self.connection).await?;

		Ok(model.map(|model| user_from_model(model, &self.registry)))
	}
}

/// The only place `cape_enabled` is turned into `incognito`.
fn user_from_model(model: user::Model, registry: &RoleRegistry) -> User {
	let flags = RoleFlags {
		premium: model.premium,
		pepsi: model.pepsi,
		staff: model.staff,
		developer: model.developer,
	};

	User {
		id: model.user_id,
		email: model.email,
		minecraft_id: model.mc_uuid,
		discord_id: model.discord_id,
		password_hash: model.password_hash,
		roles: registry.roles_for(&flags),
		legacy: model.legacy,
		legacy_enabled: model.legacy_enabled,
		incognito: !model.cape_enabled,
	}
}

#[async_trait::async_trait]
impl UserStore for UsersDatabase {
	async fn by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
		self.find_one(user::Column::UserId.eq(id)).await
	}

	async fn by_minecraft_id(&self, minecraft_id: Uuid) -> StoreResult<Option<User>> {
		self.find_one(user::Column::McUuid.eq(minecraft_id)).await
	}

	async fn by_discord_id(&self, discord_id: &str) -> StoreResult<Option<User>> {
		self.find_one(user::Column::DiscordId.eq(discord_id)).await
	}

	async fn by_email(&self, email: &str) -> StoreResult<Option<User>> {
		self.find_one(user::Column::Email.eq(email)).await
	}

	async fn all(&self) -> StoreResult<Vec<User>> {
		let users = user::Entity::find()
			.all(&self.connection).await?
			.into_iter()
			.map(|model| user_from_model(model, &self.registry))
			.collect();

		Ok(users)
	}

	async fn update_preferences(
		&self,
		id: Uuid,
		preferences: Preferences,
	) -> StoreResult<User> {
		let model = user::Entity::find_by_id(id)
			.one(&self.connection).await?
			.ok_or(StoreError::MissingUser)?;

		if preferences.is_empty() {
			return Ok(user_from_model(model, &self.registry));
		}

		let mut active = model.into_active_model();
		if let Some(incognito) = preferences.incognito {
			active.cape_enabled = Set(!incognito);
		}
		if let Some(legacy_enabled) = preferences.legacy_enabled {
			active.legacy_enabled = Set(legacy_enabled);
		}

		let updated = active.update(&self.connection).await?;
		Ok(user_from_model(updated, &self.registry))
	}
}
