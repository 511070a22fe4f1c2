pub mod account;
pub mod info;
pub mod login;
pub mod minecraft;

use std::sync::Arc;

use futures_util::future;
use warp::{Filter, Rejection, Reply};

use crate::filter::header::authorization::BearerError;
use crate::identity::Authenticator;
use crate::resolver::Resolver;
use crate::snapshot::SnapshotCache;
use crate::themes::Themes;
use crate::token::TokenIssuer;

/// Everything the routes need, built once in `main`.
#[derive(Clone)]
pub struct Services {
	pub authenticator: Arc<Authenticator>,
	pub issuer: Arc<TokenIssuer>,
	pub resolver: Arc<Resolver>,
	pub snapshot: Arc<SnapshotCache>,
	pub themes: Arc<Themes>,
	pub motd: Arc<str>,
}

pub fn v1(
	services: Services,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	let Services { authenticator, issuer, resolver, snapshot, themes, motd } = services;
	let users = Arc::clone(authenticator.users());

	let routes = login::minecraft(Arc::clone(&authenticator), Arc::clone(&issuer))
		.or(login::discord(Arc::clone(&authenticator), Arc::clone(&issuer)))
		.or(login::password(Arc::clone(&authenticator), Arc::clone(&issuer)))
		.or(minecraft::info(Arc::clone(&snapshot)))
		.or(minecraft::legacy(Arc::clone(&snapshot)))
		.or(minecraft::premium_check(Arc::clone(&users)))
		.or(account::get(
			Arc::clone(&issuer),
			Arc::clone(&users),
			Arc::clone(&resolver),
		))
		.or(account::patch(
			Arc::clone(&issuer),
			Arc::clone(&users),
			Arc::clone(&resolver),
			Arc::clone(&snapshot),
		))
		.or(info::themes(themes))
		.or(info::motd(motd))
		.or(info::jwt_key(issuer));

	warp::path("v1")
		.and(routes)
		.recover(|rejection: Rejection| {
			if let Some(err) = rejection.find::<BearerError>() {
				let status = warp::http::StatusCode::from(err);
				future::ok(warp::reply::with_status(status.to_string(), status))
			} else {
				future::err(rejection)
			}
		})
}
