use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::info::{Edition, UserInfo};

const PEPSI_ICON: &str = "https://raw.githubusercontent.com/ImpactDevelopment/Resources/master/textures/Pepsi_32.png";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
	/// Role id, e.g. "developer"
	pub id: String,
	/// Lower is better
	#[serde(skip)]
	pub rank: u32,
}

impl Role {
	pub fn new(id: impl Into<String>, rank: u32) -> Self {
		Self { id: id.into(), rank }
	}
}

/// Defaults applied to everyone holding a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTemplate {
	pub info: UserInfo,
	pub edition: Option<Edition>,
}

/// Boolean role columns as they come out of a user source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleFlags {
	pub premium: bool,
	pub pepsi: bool,
	pub staff: bool,
	pub developer: bool,
}

impl RoleFlags {
	pub fn role_ids(&self) -> impl Iterator<Item = &'static str> {
		[
			(self.premium, "premium"),
			(self.staff, "staff"),
			(self.pepsi, "pepsi"),
			(self.developer, "developer"),
		]
		.into_iter()
		.filter(|(set, _)| *set)
		.map(|(_, id)| id)
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	#[error("role id {0:?} is defined more than once")]
	DuplicateId(String),
	#[error("rank {rank} is shared by {first:?} and {second:?}")]
	DuplicateRank {
		rank: u32,
		first: String,
		second: String,
	},
	#[error("role id must not be empty")]
	EmptyId,
}

/// The fixed table of known roles.
///
/// Built once at startup and shared read-only; it has no interior mutability
/// so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
	entries: HashMap<String, (Role, RoleTemplate)>,
}

impl RoleRegistry {
	pub fn new<I>(entries: I) -> Result<Self, RegistryError>
	where I: IntoIterator<Item = (Role, RoleTemplate)> {
		let mut ranks: HashMap<u32, String> = HashMap::new();
		let mut table = HashMap::new();

		for (role, template) in entries {
			if role.id.is_empty() {
				return Err(RegistryError::EmptyId);
			}
			if let Some(first) = ranks.get(&role.rank) {
				if *first != role.id {
					return Err(RegistryError::DuplicateRank {
						rank: role.rank,
						first: first.clone(),
						second: role.id.clone(),
					});
				}
			}
			if table.contains_key(&role.id) {
				return Err(RegistryError::DuplicateId(role.id.clone()));
			}

			ranks.insert(role.rank, role.id.clone());
			table.insert(role.id.clone(), (role, template));
		}

		Ok(Self { entries: table })
	}

	/// The roles and cosmetics the service has always shipped with.
	pub fn standard() -> Self {
		let cape = |url: &str| UserInfo {
			cape: Some(String::from(url)),
			..UserInfo::default()
		};
		let edition = |text: &str, icon: Option<&str>| Some(Edition {
			text: Some(String::from(text)),
			icon: icon.map(String::from),
			text_color: None,
		});

		Self::new([
			(Role::new("developer", 0), RoleTemplate {
				info: cape("http://i.imgur.com/X9NYKct.png"),
				edition: edition("Developer", None),
			}),
			(Role::new("pepsi", 1), RoleTemplate {
				info: UserInfo {
					icon: Some(String::from(PEPSI_ICON)),
					cape: Some(String::from("http://i.imgur.com/SKjRGbH.png")),
					text_color: Some(String::from("BLUE")),
					background_color: Some(String::from("1358954495")),
					border_color: Some(String::from("-1761673216")),
				},
				edition: edition("Pepsi", Some(PEPSI_ICON)),
			}),
			(Role::new("staff", 2), RoleTemplate {
				info: cape("http://i.imgur.com/uh6QcuF.png"),
				edition: edition("Staff", None),
			}),
			(Role::new("premium", 3), RoleTemplate {
				info: cape("http://i.imgur.com/fc8gsyN.png"),
				edition: edition("Premium", None),
			}),
		])
		.expect("standard role table is consistent")
	}

	pub fn lookup(&self, id: &str) -> Option<(&Role, &RoleTemplate)> {
		self.entries.get(id).map(|(role, template)| (role, template))
	}

	pub fn role(&self, id: &str) -> Option<Role> {
		self.lookup(id).map(|(role, _)| role.clone())
	}

	pub fn template(&self, id: &str) -> Option<&RoleTemplate> {
		self.lookup(id).map(|(_, template)| template)
	}

	/// Maps role flags to roles. Flags without a registered role are dropped.
	pub fn roles_for(&self, flags: &RoleFlags) -> Vec<Role> {
		self.roles_from_ids(flags.role_ids())
	}

	/// Maps role ids to roles, dropping duplicates and unknown ids.
	pub fn roles_from_ids<'i, I>(&self, ids: I) -> Vec<Role>
	where I: IntoIterator<Item = &'i str> {
		let mut seen = HashSet::new();
		ids.into_iter()
			.filter(|id| seen.insert(*id))
			.filter_map(|id| {
				let role = self.role(id);
				if role.is_none() {
					tracing::warn!(role = id, "Ignoring unregistered role");
				}
				role
			})
			.collect()
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}
