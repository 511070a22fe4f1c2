use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::User;

use super::{Preferences, StoreError, StoreResult, UserStore};

/// Users held in memory, e.g. imported from the legacy role lists.
///
/// Changes are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryUsers {
	users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUsers {
	pub fn new<I>(users: I) -> Self
	where I: IntoIterator<Item = User> {
		let users = users.into_iter()
			.map(|user| (user.id, user))
			.collect();

		Self { users: RwLock::new(users) }
	}

	async fn find<F>(&self, predicate: F) -> StoreResult<Option<User>>
	where F: Fn(&User) -> bool + Send {
		let users = self.users.read().await;
		Ok(users.values().find(|user| predicate(user)).cloned())
	}
}

#[async_trait::async_trait]
impl UserStore for MemoryUsers {
	async fn by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
		Ok(self.users.read().await.get(&id).cloned())
	}

	async fn by_minecraft_id(&self, minecraft_id: Uuid) -> StoreResult<Option<User>> {
		self.find(|user| user.minecraft_id == Some(minecraft_id)).await
	}

	async fn by_discord_id(&self, discord_id: &str) -> StoreResult<Option<User>> {
		self.find(|user| user.discord_id.as_deref() == Some(discord_id)).await
	}

	async fn by_email(&self, email: &str) -> StoreResult<Option<User>> {
		self.find(|user| user.email.as_deref() == Some(email)).await
	}

	async fn all(&self) -> StoreResult<Vec<User>> {
		Ok(self.users.read().await.values().cloned().collect())
	}

	async fn update_preferences(
		&self,
		id: Uuid,
		preferences: Preferences,
	) -> StoreResult<User> {
		let mut users = self.users.write().await;
		let user = users.get_mut(&id).ok_or(StoreError::MissingUser)?;
		preferences.apply(user);
		Ok(user.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store() -> MemoryUsers {
		MemoryUsers::new([
			User {
				id: Uuid::from_u128(1),
				email: Some(String::from("a@example.com")),
				minecraft_id: Some(Uuid::from_u128(10)),
				..User::default()
			},
			User {
				id: Uuid::from_u128(2),
				discord_id: Some(String::from("1234")),
				..User::default()
			},
		])
	}

	#[tokio::test]
	async fn finds_users_by_any_identity() {
		let store = store();
		let id = |user: Option<User>| user.map(|user| user.id);

		assert_eq!(id(store.by_id(Uuid::from_u128(2)).await.unwrap()), Some(Uuid::from_u128(2)));
		assert_eq!(id(store.by_minecraft_id(Uuid::from_u128(10)).await.unwrap()), Some(Uuid::from_u128(1)));
		assert_eq!(id(store.by_discord_id("1234").await.unwrap()), Some(Uuid::from_u128(2)));
		assert_eq!(id(store.by_email("a@example.com").await.unwrap()), Some(Uuid::from_u128(1)));

		assert_eq!(store.by_email("b@example.com").await.unwrap(), None);
		assert_eq!(store.by_minecraft_id(Uuid::from_u128(2)).await.unwrap(), None);
		assert_eq!(store.all().await.unwrap().len(), 2);
	}

	#[tokio::test]
	async fn preferences_are_persisted() {
		let store = store();
		let preferences = Preferences { incognito: Some(true), ..Preferences::default() };

		let updated = store.update_preferences(Uuid::from_u128(1), preferences).await.unwrap();
		assert!(updated.incognito);
		assert!(store.by_id(Uuid::from_u128(1)).await.unwrap().unwrap().incognito);

		let missing = store.update_preferences(Uuid::from_u128(3), preferences).await;
		assert!(matches!(missing, Err(StoreError::MissingUser)));
	}
}
