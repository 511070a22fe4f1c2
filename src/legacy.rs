use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

use crate::roles::RoleRegistry;
use crate::users::User;

#[derive(Debug, Error)]
pub enum LegacyListError {
	#[error("unable to read {role} list: {source}")]
	Io {
		role: String,
		source: io::Error,
	},
}

/// The old flat role lists: one file per role, one Minecraft UUID per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyLists {
	lists: BTreeMap<String, Vec<Uuid>>,
}

impl LegacyLists {
	/// Adds the list for `role`. Blank lines are ignored, unparsable ones
	/// are skipped with a warning.
	pub fn add(&mut self, role: &str, contents: &str) {
		let ids = contents.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.filter_map(|line| match Uuid::parse_str(line) {
				Ok(id) => Some(id),
				Err(err) => {
					tracing::warn!(role, line, %err, "Skipping invalid uuid in legacy list");
					None
				},
			});

		self.lists.entry(String::from(role))
			.or_default()
			.extend(ids);
	}

	/// Reads `<role>.txt` from `dir` for every registered role. Roles
	/// without a file simply have nobody in them.
	pub fn load(dir: &Path, registry: &RoleRegistry) -> Result<Self, LegacyListError> {
		let mut lists = Self::default();

		for role in registry.ids() {
			let path = dir.join(format!("{}.txt", role));
			match std::fs::read_to_string(&path) {
				Ok(contents) => lists.add(role, &contents),
				Err(err) if err.kind() == io::ErrorKind::NotFound => {
					tracing::debug!(role, path = %path.display(), "No legacy list");
				},
				Err(source) => {
					return Err(LegacyListError::Io { role: String::from(role), source });
				},
			}
		}

		Ok(lists)
	}

	/// One user per UUID, holding every role whose list mentions it.
	///
	/// Legacy users have no separate account id, so the Minecraft UUID is
	/// used for both.
	pub fn users(&self, registry: &RoleRegistry) -> Vec<User> {
		let mut roles: BTreeMap<Uuid, Vec<&str>> = BTreeMap::new();
		for (role, ids) in &self.lists {
			for id in ids {
				roles.entry(*id).or_default().push(role.as_str());
			}
		}

		roles.into_iter()
			.map(|(id, role_ids)| User {
				id,
				minecraft_id: Some(id),
				roles: registry.roles_from_ids(role_ids),
				legacy: true,
				legacy_enabled: true,
				..User::default()
			})
			.collect()
	}
}
