use std::sync::Arc;

use futures_util::future;
use uuid::Uuid;
use warp::http::{header, StatusCode};
use warp::{reject::Reject, Filter, Rejection, Reply};

use crate::token::{TokenError, TokenIssuer, UserClaims};

#[derive(Debug)]
pub enum BearerError {
	Invalid,
	MissingScheme,
	MissingToken,
	Unauthenticated,
	ValidationError(TokenError),
}

impl From<&BearerError> for StatusCode {
	fn from(error: &BearerError) -> Self {
		match error {
			BearerError::Invalid => StatusCode::BAD_REQUEST,
			BearerError::MissingScheme => StatusCode::BAD_REQUEST,
			BearerError::MissingToken => StatusCode::BAD_REQUEST,
			BearerError::Unauthenticated => StatusCode::UNAUTHORIZED,
			BearerError::ValidationError(_) => StatusCode::UNAUTHORIZED,
		}
	}
}

impl Reply for BearerError {
	fn into_response(self) -> warp::reply::Response {
		StatusCode::from(&self).into_response()
	}
}
impl Reject for BearerError {}

/// A verified token from the request.
#[derive(Debug, Clone)]
pub struct Bearer {
	pub claims: UserClaims,
}

impl Bearer {
	pub fn user_id(&self) -> Uuid {
		self.claims.user
	}
}

fn parse(header_value: &str) -> Result<String, BearerError> {
	let mut parts = header_value.splitn(2, ' ');
	match parts.next() {
		Some("Bearer") => {
			parts.next()
				.filter(|token| !token.is_empty())
				.ok_or(BearerError::MissingToken)
				.map(String::from)
		},
		Some("") | None => Err(BearerError::MissingScheme),
		Some(_) => Err(BearerError::Invalid),
	}
}

/// The request's bearer token, if it has one.
///
/// A token that is present but malformed or fails verification rejects
/// the request rather than being treated as absent.
pub fn bearer(
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (Option<Bearer>,), Error = Rejection> + Clone {
	warp::header::optional::<String>(header::AUTHORIZATION.as_str())
		.and_then(move |header_value: Option<String>| {
			let result = header_value.map(|header_value| {
				parse(&header_value).and_then(|token| {
					issuer.verify(&token)
						.map(|claims| Bearer { claims })
						.map_err(BearerError::ValidationError)
				})
			})
			.transpose()
			.map_err(warp::reject::custom);

			future::ready(result)
		})
}

pub fn authenticated(
	issuer: Arc<TokenIssuer>,
) -> impl Filter<Extract = (Bearer,), Error = Rejection> + Clone {
	bearer(issuer).and_then(|bearer: Option<Bearer>| {
		future::ready(bearer.ok_or_else(|| warp::reject::custom(BearerError::Unauthenticated)))
	})
}
