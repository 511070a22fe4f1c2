use thiserror::Error;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::Reply;

use crate::users::User;

mod memory;
mod users;

pub use memory::MemoryUsers;
pub use users::UsersDatabase;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("database error: {0}")]
	DbErr(#[from] sea_orm::DbErr),
	#[error("no such user")]
	MissingUser,
}

impl From<&StoreError> for StatusCode {
	fn from(error: &StoreError) -> Self {
		match error {
			StoreError::DbErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
			StoreError::MissingUser => StatusCode::NOT_FOUND,
		}
	}
}

impl Reply for StoreError {
	fn into_response(self) -> warp::reply::Response {
		if let Self::DbErr(ref err) = self {
			tracing::error!(%err, "User store failed");
		}
		StatusCode::from(&self).into_response()
	}
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Settings a user may change about their own account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
	pub incognito: Option<bool>,
	pub legacy_enabled: Option<bool>,
}

impl Preferences {
	pub fn is_empty(&self) -> bool {
		self.incognito.is_none() && self.legacy_enabled.is_none()
	}

	pub fn apply(&self, user: &mut User) {
		if let Some(incognito) = self.incognito {
			user.incognito = incognito;
		}
		if let Some(legacy_enabled) = self.legacy_enabled {
			user.legacy_enabled = legacy_enabled;
		}
	}
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
	async fn by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
	async fn by_minecraft_id(&self, minecraft_id: Uuid) -> StoreResult<Option<User>>;
	async fn by_discord_id(&self, discord_id: &str) -> StoreResult<Option<User>>;
	async fn by_email(&self, email: &str) -> StoreResult<Option<User>>;
	async fn all(&self) -> StoreResult<Vec<User>>;

	/// Applies `preferences` and returns the updated user.
	async fn update_preferences(
		&self,
		id: Uuid,
		preferences: Preferences,
	) -> StoreResult<User>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preferences_only_touch_what_is_set() {
		let mut user = User { incognito: true, ..User::default() };

		Preferences { legacy_enabled: Some(true), ..Preferences::default() }.apply(&mut user);
		assert!(user.incognito);
		assert!(user.legacy_enabled);

		Preferences { incognito: Some(false), ..Preferences::default() }.apply(&mut user);
		assert!(!user.incognito);
		assert!(user.legacy_enabled);

		assert!(Preferences::default().is_empty());
	}

	#[test]
	fn store_errors_map_to_status_codes() {
		assert_eq!(StatusCode::from(&StoreError::MissingUser), StatusCode::NOT_FOUND);
		let db = StoreError::from(sea_orm::DbErr::Custom(String::from("boom")));
		assert_eq!(StatusCode::from(&db), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
