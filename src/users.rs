use serde::Serialize;
use uuid::Uuid;

use crate::roles::Role;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
	pub id: Uuid,
	pub email: Option<String>,
	pub minecraft_id: Option<Uuid>,
	pub discord_id: Option<String>,
	#[serde(skip_serializing)]
	pub password_hash: Option<String>,
	pub roles: Vec<Role>,
	/// The account predates the account system.
	pub legacy: bool,
	/// Listed for clients that only understand the old premium list.
	pub legacy_enabled: bool,
	/// Hides the cape from other players; other cosmetics stay.
	pub incognito: bool,
}

impl User {
	pub fn role_ids(&self) -> Vec<String> {
		self.roles.iter().map(|role| role.id.clone()).collect()
	}

	/// Only users holding at least one role may log in.
	pub fn is_entitled(&self) -> bool {
		!self.roles.is_empty()
	}

	pub fn check_password(&self, password: &str) -> bool {
		match self.password_hash.as_deref() {
			Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn password_check_uses_bcrypt() {
		let user = User {
			password_hash: Some(bcrypt::hash("hunter2", 4).unwrap()),
			..User::default()
		};
		assert!(user.check_password("hunter2"));
		assert!(!user.check_password("hunter3"));

		assert!(!User::default().check_password(""));
	}

	#[test]
	fn garbage_hash_never_matches() {
		let user = User {
			password_hash: Some(String::from("hunter2")),
			..User::default()
		};
		assert!(!user.check_password("hunter2"));
	}

	#[test]
	fn roles_make_a_user_entitled() {
		let mut user = User::default();
		assert!(!user.is_entitled());

		user.roles.push(Role::new("premium", 3));
		assert!(user.is_entitled());
		assert!(user.role_ids().contains(&String::from("premium")));
		assert!(!user.role_ids().contains(&String::from("staff")));
		assert_eq!(user.role_ids(), vec!["premium"]);
	}
}
