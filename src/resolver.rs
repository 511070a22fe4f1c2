use std::sync::Arc;

use itertools::Itertools;

use crate::info::{Edition, Features, UserInfo};
use crate::roles::{Role, RoleRegistry, RoleTemplate};
use crate::special::SpecialCases;
use crate::users::User;

/// Turns a user's roles into the cosmetics they are entitled to.
///
/// Pure: the registry and special cases are read-only and nothing else is
/// consulted, so the same user always resolves to the same result.
#[derive(Debug, Clone)]
pub struct Resolver {
	registry: Arc<RoleRegistry>,
	special_cases: Arc<SpecialCases>,
}

impl Resolver {
	pub fn new(registry: Arc<RoleRegistry>, special_cases: Arc<SpecialCases>) -> Self {
		Self { registry, special_cases }
	}

	/// Templates of the given roles, most privileged first.
	///
	/// Roles without a template are skipped so that a role can be granted
	/// before its cosmetics are deployed.
	fn templates<'r>(&'r self, roles: &'r [Role]) -> impl Iterator<Item = &'r RoleTemplate> + 'r {
		roles.iter()
			.sorted_by_key(|role| role.rank)
			.filter_map(move |role| {
				let template = self.registry.template(&role.id);
				if template.is_none() {
					tracing::warn!(role = %role.id, "No template for role, skipping");
				}
				template
			})
	}

	/// The merged cosmetics for `user`, including incognito handling.
	pub fn resolve(&self, user: &User) -> UserInfo {
		// merged into a blank record so empty override fields are dropped too
		let seed = user.minecraft_id.as_ref()
			.and_then(|id| self.special_cases.get(id))
			.map(|special| UserInfo::default().merge(&special.info))
			.unwrap_or_default();

		let mut info = self.templates(&user.roles)
			.fold(seed, |info, template| info.merge(&template.info));

		if user.incognito {
			info.cape = None;
		}

		info
	}

	/// Like [`resolve`](Self::resolve), but absent when there is nothing to
	/// publish. Bulk listings use this so that incognito users without any
	/// other cosmetics don't show up at all.
	pub fn public_info(&self, user: &User) -> Option<UserInfo> {
		Some(self.resolve(user)).filter(|info| !info.is_empty())
	}

	pub fn edition(&self, user: &User) -> Option<Edition> {
		let special = user.minecraft_id.as_ref()
			.and_then(|id| self.special_cases.get(id))
			.and_then(|special| special.edition.as_ref());

		let fragments = special.into_iter()
			.chain(self.templates(&user.roles).filter_map(|t| t.edition.as_ref()))
			.collect::<Vec<_>>();

		Edition::reduce(fragments)
	}

	pub fn features(&self, user: &User) -> Option<Features> {
		Features::new(&self.resolve(user), self.edition(user).as_ref())
	}
}
