use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::database::{StoreResult, UserStore};
use crate::info::UserInfo;
use crate::resolver::Resolver;
use crate::users::User;

/// Hex sha256 of the hyphenated lowercase uuid.
///
/// Published instead of the uuid itself to make bulk-banning premium users
/// a little harder.
pub fn hash_uuid(id: &Uuid) -> String {
	let hyphenated = id.hyphenated().to_string();
	hex::encode(Sha256::digest(hyphenated.as_bytes()))
}

/// Public cosmetics of every user, as served to clients in bulk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInfoSnapshot {
	pub info: HashMap<String, UserInfo>,
	/// Players that clients predating the account system should still treat
	/// as premium.
	pub legacy: Vec<Uuid>,
}

impl UserInfoSnapshot {
	pub fn build(users: &[User], resolver: &Resolver) -> Self {
		let mut info = HashMap::new();
		let mut legacy = Vec::new();

		for user in users {
			let Some(minecraft_id) = user.minecraft_id else {
				continue;
			};

			if let Some(public) = resolver.public_info(user) {
				info.insert(hash_uuid(&minecraft_id), public);
			}
			if user.legacy_enabled && user.is_entitled() {
				legacy.push(minecraft_id);
			}
		}

		legacy.sort();
		Self { info, legacy }
	}

	/// One uuid per line.
	pub fn legacy_list(&self) -> String {
		self.legacy.iter()
			.map(|id| format!("{}\n", id.hyphenated()))
			.collect()
	}
}

/// The latest snapshot. Readers never wait for a refresh.
#[derive(Default)]
pub struct SnapshotCache {
	current: ArcSwap<UserInfoSnapshot>,
	refresh: Notify,
}

impl SnapshotCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn load(&self) -> Arc<UserInfoSnapshot> {
		self.current.load_full()
	}

	pub fn store(&self, snapshot: UserInfoSnapshot) {
		self.current.store(Arc::new(snapshot));
	}

	/// Wakes the refresher early, e.g. after somebody changed their
	/// preferences.
	pub fn request_refresh(&self) {
		self.refresh.notify_one();
	}

	/// Rebuilds the snapshot. On failure the previous one stays in place.
	pub async fn refresh(
		&self,
		users: &dyn UserStore,
		resolver: &Resolver,
	) -> StoreResult<()> {
		let all = users.all().await?;
		let snapshot = UserInfoSnapshot::build(&all, resolver);
		tracing::debug!(
			users = all.len(),
			published = snapshot.info.len(),
			legacy = snapshot.legacy.len(),
			"Refreshed user info",
		);
		self.store(snapshot);
		Ok(())
	}

	/// Refreshes right away, then every `period` and whenever
	/// [`request_refresh`](Self::request_refresh) is called.
	pub fn spawn_refresher(
		self: Arc<Self>,
		users: Arc<dyn UserStore>,
		resolver: Arc<Resolver>,
		period: Duration,
	) -> JoinHandle<()> {
		tokio::spawn(async move {
			let mut interval = tokio::time::interval(period);
			loop {
				tokio::select! {
					_ = interval.tick() => {},
					_ = self.refresh.notified() => {},
				}

				if let Err(err) = self.refresh(users.as_ref(), &resolver).await {
					tracing::warn!(%err, "Failed to refresh user info, keeping the previous snapshot");
				}
			}
		})
	}
}
