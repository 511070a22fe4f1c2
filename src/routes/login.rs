use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use warp::{Filter, Reply, Rejection};

use crate::filter::body::credentials::credentials;
use crate::identity::{Authenticator, Login, LoginError};
use crate::token::{TokenError, TokenIssuer};

#[derive(Debug, Error)]
pub enum LoginFailure {
	#[error(transparent)]
	Login(#[from] LoginError),
	#[error(transparent)]
	Token(#[from] TokenError),
}

impl Reply for LoginFailure {
	fn into_response(self) -> warp::reply::Response {
		match self {
			Self::Login(err) => err.into_response(),
			Self::Token(err) => err.into_response(),
		}
	}
}

/// The token is the whole response body.
fn respond_with_token(issuer: &TokenIssuer, login: Login) -> Result<String, LoginFailure> {
	let token = issuer.issue(&login.user, &login.binding)?;
	tracing::debug!(user = %login.user.id, binding = %login.binding, "Issued token");
	Ok(token)
}

#[derive(Debug, Deserialize)]
struct MinecraftCredentials {
	#[serde(default)]
	username: String,
	#[serde(default)]
	hash: String,
	binding: Option<String>,
}

pub fn minecraft(
	authenticator: Arc<Authenticator>,
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("login")
		.and(warp::path("minecraft"))
		.and(warp::path::end())
		.and(warp::post())
		.and(credentials())
		.then(move |body: MinecraftCredentials| {
			let authenticator = Arc::clone(&authenticator);
			let issuer = Arc::clone(&issuer);
			async move {
				let login = authenticator.minecraft(&body.username, &body.hash).await?
					.bound_to(body.binding);
				respond_with_token(&issuer, login)
			}
		})
}

#[derive(Debug, Deserialize)]
struct DiscordCredentials {
	#[serde(default)]
	access_token: String,
	binding: Option<String>,
}

pub fn discord(
	authenticator: Arc<Authenticator>,
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("login")
		.and(warp::path("discord"))
		.and(warp::path::end())
		.and(warp::post())
		.and(credentials())
		.then(move |body: DiscordCredentials| {
			let authenticator = Arc::clone(&authenticator);
			let issuer = Arc::clone(&issuer);
			async move {
				let login = authenticator.discord(&body.access_token).await?
					.bound_to(body.binding);
				respond_with_token(&issuer, login)
			}
		})
}

#[derive(Debug, Deserialize)]
struct PasswordCredentials {
	#[serde(default)]
	email: String,
	#[serde(default)]
	password: String,
	binding: Option<String>,
}

pub fn password(
	authenticator: Arc<Authenticator>,
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
	warp::path("login")
		.and(warp::path("password"))
		.and(warp::path::end())
		.and(warp::post())
		.and(credentials())
		.then(move |body: PasswordCredentials| {
			let authenticator = Arc::clone(&authenticator);
			let issuer = Arc::clone(&issuer);
			async move {
				let login = authenticator.password(&body.email, &body.password).await?
					.bound_to(body.binding);
				respond_with_token(&issuer, login)
			}
		})
}
