use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warp::{Filter, Reply, Rejection};

use crate::database::{Preferences, StoreError, UserStore};
use crate::filter::header::authorization::{self, Bearer};
use crate::info::{Edition, Features, UserInfo};
use crate::resolver::Resolver;
use crate::roles::Role;
use crate::snapshot::SnapshotCache;
use crate::token::TokenIssuer;
use crate::users::User;

/// What a user sees about their own account.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct AccountView {
	pub id: Uuid,
	pub email: Option<String>,
	pub minecraft_id: Option<Uuid>,
	pub discord_id: Option<String>,
	pub roles: Vec<Role>,
	pub info: Option<UserInfo>,
	pub edition: Option<Edition>,
	pub features: Option<Features>,
	pub incognito: bool,
	pub legacy_enabled: bool,
}

impl AccountView {
	fn new(user: User, resolver: &Resolver) -> Self {
		let info = Some(resolver.resolve(&user)).filter(|info| !info.is_empty());
		let edition = resolver.edition(&user);
		let features = resolver.features(&user);

		Self {
			id: user.id,
			email: user.email,
			minecraft_id: user.minecraft_id,
			discord_id: user.discord_id,
			roles: user.roles,
			info,
			edition,
			features,
			incognito: user.incognito,
			legacy_enabled: user.legacy_enabled,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct PreferencesUpdate {
	incognito: Option<bool>,
	legacy_enabled: Option<bool>,
}

impl From<PreferencesUpdate> for Preferences {
	fn from(update: PreferencesUpdate) -> Self {
		Self {
			incognito: update.incognito,
			legacy_enabled: update.legacy_enabled,
		}
	}
}

pub fn get(
	issuer: Arc<TokenIssuer>,
	users: Arc<dyn UserStore>,
	resolver: Arc<Resolver>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("user")
		.and(warp::path::end())
		.and(warp::get())
		.and(authorization::authenticated(issuer))
		.then(move |bearer: Bearer| {
			let users = Arc::clone(&users);
			let resolver = Arc::clone(&resolver);
			async move {
				let user = users.by_id(bearer.user_id()).await?
					.ok_or(StoreError::MissingUser)?;

				Ok::<_, StoreError>(warp::reply::json(&AccountView::new(user, &resolver)))
			}
		})
}

pub fn patch(
	issuer: Arc<TokenIssuer>,
	users: Arc<dyn UserStore>,
	resolver: Arc<Resolver>,
	snapshot: Arc<SnapshotCache>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("user")
		.and(warp::path::end())
		.and(warp::patch())
		.and(authorization::authenticated(issuer))
		.and(warp::body::content_length_limit(1024))
		.and(warp::body::json())
		.then(move |bearer: Bearer, update: PreferencesUpdate| {
			let users = Arc::clone(&users);
			let resolver = Arc::clone(&resolver);
			let snapshot = Arc::clone(&snapshot);
			async move {
				let preferences = Preferences::from(update);
				let user = users.update_preferences(bearer.user_id(), preferences).await?;

				if !preferences.is_empty() {
					snapshot.request_refresh();
				}

				Ok::<_, StoreError>(warp::reply::json(&AccountView::new(user, &resolver)))
			}
		})
}
