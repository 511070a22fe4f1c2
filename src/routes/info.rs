use std::sync::Arc;

use warp::{Filter, Reply, Rejection};

use crate::themes::Themes;
use crate::token::TokenIssuer;

pub fn themes(
	themes: Arc<Themes>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("themes")
		.and(warp::path::end())
		.and(warp::get())
		.map(move || warp::reply::json(themes.as_ref()))
}

pub fn motd(
	motd: Arc<str>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("motd")
		.and(warp::path::end())
		.and(warp::get())
		.map(move || String::from(motd.as_ref()))
}

/// The key tokens can be verified with, as PKCS#1 PEM.
pub fn jwt_key(
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("jwt")
		.and(warp::path("key"))
		.and(warp::path::end())
		.and(warp::get())
		.map(move || String::from(issuer.public_key_pem()))
}
