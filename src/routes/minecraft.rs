use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply, Rejection};

use crate::database::{StoreError, UserStore};
use crate::snapshot::SnapshotCache;

/// Every published user's cosmetics, keyed by hashed uuid.
pub fn info(
	snapshot: Arc<SnapshotCache>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("minecraft")
		.and(warp::path("user"))
		.and(warp::path("info"))
		.and(warp::path::end())
		.and(warp::get())
		.map(move || warp::reply::json(&snapshot.load().info))
}

pub fn legacy(
	snapshot: Arc<SnapshotCache>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("minecraft")
		.and(warp::path("user"))
		.and(warp::path("legacy"))
		.and(warp::path::end())
		.and(warp::get())
		.map(move || snapshot.load().legacy_list())
}

#[derive(Debug, Deserialize)]
struct PremiumQuery {
	#[serde(default)]
	uuid: String,
}

/// Role ids of the player, or 403 if they have none.
pub fn premium_check(
	users: Arc<dyn UserStore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("premiumcheck")
		.and(warp::path::end())
		.and(warp::get())
		.and(warp::query())
		.then(move |query: PremiumQuery| {
			let users = Arc::clone(&users);
			async move {
				let Ok(minecraft_id) = Uuid::parse_str(query.uuid.trim()) else {
					let reply = warp::reply::json(&"uuid is bad?");
					return Ok::<_, StoreError>(warp::reply::with_status(reply, StatusCode::FORBIDDEN));
				};

				let roles = users.by_minecraft_id(minecraft_id).await?
					.filter(|user| user.is_entitled())
					.map(|user| user.role_ids());

				let reply = match roles {
					Some(roles) => warp::reply::with_status(
						warp::reply::json(&roles),
						StatusCode::OK,
					),
					None => warp::reply::with_status(
						warp::reply::json(&format!("no premium user found for uuid {}", minecraft_id)),
						StatusCode::FORBIDDEN,
					),
				};

				Ok(reply)
			}
		})
}
