use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::Reply;

use crate::database::{StoreError, UserStore};
use crate::users::User;

const SESSION_SERVER_URL: &str = "https://sessionserver.mojang.com/session/minecraft/hasJoined";
const DISCORD_API_URL: &str = "https://discord.com/api/v10";

#[derive(Debug, Error)]
pub enum IdentityError {
	#[error("player has not joined")]
	NotJoined,
	#[error("profile name does not match")]
	NameMismatch,
	#[error("{0}")]
	Rejected(String),
	#[error("unexpected response status {0}")]
	Status(StatusCode),
	#[error("unable to contact identity provider: {0}")]
	Upstream(#[from] reqwest::Error),
}

impl From<&IdentityError> for StatusCode {
	fn from(error: &IdentityError) -> Self {
		match error {
			IdentityError::NotJoined => StatusCode::UNAUTHORIZED,
			IdentityError::NameMismatch => StatusCode::UNAUTHORIZED,
			IdentityError::Rejected(_) => StatusCode::UNAUTHORIZED,
			IdentityError::Status(_) => StatusCode::BAD_GATEWAY,
			IdentityError::Upstream(_) => StatusCode::BAD_GATEWAY,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MinecraftProfile {
	pub id: Uuid,
	pub name: String,
}

#[async_trait::async_trait]
pub trait MinecraftSessions: Send + Sync {
	/// The profile of `username` if they just joined a server with `hash`.
	async fn has_joined(
		&self,
		username: &str,
		hash: &str,
	) -> Result<MinecraftProfile, IdentityError>;
}

#[async_trait::async_trait]
pub trait DiscordIdentity: Send + Sync {
	/// The id of the Discord user an OAuth access token belongs to.
	async fn current_user(&self, access_token: &str) -> Result<String, IdentityError>;
}

pub struct MojangSessionServer {
	client: Client,
}

impl MojangSessionServer {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait::async_trait]
impl MinecraftSessions for MojangSessionServer {
	async fn has_joined(
		&self,
		username: &str,
		hash: &str,
	) -> Result<MinecraftProfile, IdentityError> {
		let server_id = format!("0{}", hash);
		let response = self.client
			.get(SESSION_SERVER_URL)
			.query(&[("username", username), ("serverId", server_id.as_str())])
			.send().await?;

		let profile = match response.status() {
			StatusCode::OK => response.json::<MinecraftProfile>().await?,
			StatusCode::NO_CONTENT => return Err(IdentityError::NotJoined),
			code => return Err(IdentityError::Status(code)),
		};

		if profile.name.eq_ignore_ascii_case(username) {
			Ok(profile)
		} else {
			Err(IdentityError::NameMismatch)
		}
	}
}

pub struct DiscordApi {
	client: Client,
}

impl DiscordApi {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait::async_trait]
impl DiscordIdentity for DiscordApi {
	async fn current_user(&self, access_token: &str) -> Result<String, IdentityError> {
		#[derive(Deserialize)]
		struct DiscordUser {
			id: String,
		}

		#[derive(Deserialize)]
		struct DiscordError {
			message: String,
		}

		let response = self.client
			.get(format!("{}/users/@me", DISCORD_API_URL))
			.bearer_auth(access_token)
			.send().await?;

		match response.status() {
			StatusCode::OK => {
				let user = response.json::<DiscordUser>().await?;
				if user.id.is_empty() {
					Err(IdentityError::Rejected(String::from("no discord user found")))
				} else {
					Ok(user.id)
				}
			},
			code if code.is_client_error() => {
				let message = response.json::<DiscordError>().await
					.map(|error| error.message)
					.unwrap_or_else(|_| code.to_string());
				Err(IdentityError::Rejected(format!("error authenticating with discord \"{}\"", message)))
			},
			code => Err(IdentityError::Status(code)),
		}
	}
}

#[derive(Debug, Error)]
pub enum LoginError {
	#[error("{0} must be provided")]
	MissingField(&'static str),
	#[error("invalid access_token")]
	InvalidAccessToken,
	#[error("failed authentication: {0}")]
	Identity(#[from] IdentityError),
	#[error("no user found")]
	NoUser,
	#[error("incorrect password")]
	IncorrectPassword,
	#[error("no premium user found")]
	NotEntitled,
	#[error(transparent)]
	Store(#[from] StoreError),
}

impl From<&LoginError> for StatusCode {
	fn from(error: &LoginError) -> Self {
		match error {
			LoginError::MissingField(_) => StatusCode::BAD_REQUEST,
			LoginError::InvalidAccessToken => StatusCode::BAD_REQUEST,
			LoginError::Identity(err) => err.into(),
			LoginError::NoUser => StatusCode::UNAUTHORIZED,
			LoginError::IncorrectPassword => StatusCode::UNAUTHORIZED,
			LoginError::NotEntitled => StatusCode::FORBIDDEN,
			LoginError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl Reply for LoginError {
	fn into_response(self) -> warp::reply::Response {
		let status = StatusCode::from(&self);
		match self {
			LoginError::Store(err) => err.into_response(),
			err if status.is_server_error() => {
				tracing::warn!(%err, "Identity provider failed");
				warp::reply::with_status(err.to_string(), status).into_response()
			},
			err => warp::reply::with_status(err.to_string(), status).into_response(),
		}
	}
}

/// A successful login: who it is, and what the token should be bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
	pub user: User,
	pub binding: String,
}

impl Login {
	/// Replaces the default binding with one the caller asked for.
	pub fn bound_to(mut self, binding: Option<String>) -> Self {
		if let Some(binding) = binding.filter(|binding| !binding.is_empty()) {
			self.binding = binding;
		}
		self
	}
}

/// Turns credentials into users.
pub struct Authenticator {
	users: Arc<dyn UserStore>,
	minecraft: Arc<dyn MinecraftSessions>,
	discord: Arc<dyn DiscordIdentity>,
}

fn required<'s>(name: &'static str, value: &'s str) -> Result<&'s str, LoginError> {
	if value.is_empty() {
		Err(LoginError::MissingField(name))
	} else {
		Ok(value)
	}
}

fn entitled(user: Option<User>) -> Result<User, LoginError> {
	user.filter(User::is_entitled).ok_or(LoginError::NotEntitled)
}

impl Authenticator {
	pub fn new(
		users: Arc<dyn UserStore>,
		minecraft: Arc<dyn MinecraftSessions>,
		discord: Arc<dyn DiscordIdentity>,
	) -> Self {
		Self { users, minecraft, discord }
	}

	pub fn users(&self) -> &Arc<dyn UserStore> {
		&self.users
	}

	/// Bound to the player's UUID by default.
	pub async fn minecraft(&self, username: &str, hash: &str) -> Result<Login, LoginError> {
		let username = required("username", username)?;
		let hash = required("hash", hash)?;

		let profile = self.minecraft.has_joined(username, hash).await?;
		let user = entitled(self.users.by_minecraft_id(profile.id).await?)?;

		Ok(Login { user, binding: profile.id.hyphenated().to_string() })
	}

	pub async fn discord(&self, access_token: &str) -> Result<Login, LoginError> {
		let access_token = required("access_token", access_token)?;
		if !access_token.chars().all(|c| c.is_ascii_alphanumeric()) {
			return Err(LoginError::InvalidAccessToken);
		}

		let discord_id = self.discord.current_user(access_token).await?;
		let user = entitled(self.users.by_discord_id(&discord_id).await?)?;

		Ok(Login { user, binding: String::new() })
	}

	pub async fn password(&self, email: &str, password: &str) -> Result<Login, LoginError> {
		let email = required("email", email.trim())?;
		let password = required("password", password)?;

		let user = self.users.by_email(email).await?
			.ok_or(LoginError::NoUser)?;

		if !user.check_password(password) {
			return Err(LoginError::IncorrectPassword);
		}

		// no role needed: this is how accounts reach their own settings
		Ok(Login { user, binding: String::new() })
	}
}
