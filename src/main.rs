#[macro_use]
extern crate lazy_static;

mod config;
mod database;
mod filter;
mod identity;
mod info;
mod legacy;
mod resolver;
mod roles;
mod routes;
mod snapshot;
mod special;
mod themes;
mod token;
mod users;

#[cfg(test)]
mod testing;

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use warp::Filter;

use crate::config::CONFIG;
use crate::database::{MemoryUsers, UserStore, UsersDatabase};
use crate::filter::header::accept_encoding;
use crate::identity::{Authenticator, DiscordApi, MojangSessionServer};
use crate::legacy::LegacyLists;
use crate::resolver::Resolver;
use crate::roles::RoleRegistry;
use crate::routes::Services;
use crate::snapshot::SnapshotCache;
use crate::special::SpecialCases;
use crate::token::{SigningKey, TokenIssuer, EPHEMERAL_KEY_BITS};

fn load_special_cases() -> SpecialCases {
	match CONFIG.special_cases {
		Some(ref path) => SpecialCases::load(path).unwrap_or_else(|err| {
			tracing::warn!(%err, path = %path.display(), "Using only the builtin special cases");
			SpecialCases::builtin()
		}),
		None => SpecialCases::builtin(),
	}
}

fn load_signing_key() -> SigningKey {
	let loaded = CONFIG.jwt_key.as_deref().and_then(|material| {
		SigningKey::load(material)
			.map_err(|err| tracing::warn!(%err, "Unable to load JWT_KEY"))
			.ok()
	});

	if let Some(key) = loaded {
		return key;
	}

	tracing::warn!("JWT_KEY not specified, generating a temporary one");
	let key = SigningKey::ephemeral(EPHEMERAL_KEY_BITS)
		.expect("Failed to generate a signing key");

	// printed so that a developer can put it in JWT_KEY and keep their tokens
	match key.private_key_base64() {
		Ok(private_key) => tracing::warn!(%private_key, "Temporary private key"),
		Err(err) => tracing::warn!(%err, "Unable to print temporary private key"),
	}

	key
}

async fn connect_users(registry: &Arc<RoleRegistry>) -> Arc<dyn UserStore> {
	if let Some(ref url) = CONFIG.database_url {
		let database = UsersDatabase::connect(url.as_str(), Arc::clone(registry)).await
			.expect("Failed to connect to users database");
		return Arc::new(database);
	}

	let users = match CONFIG.legacy_lists {
		Some(ref dir) => LegacyLists::load(dir, registry)
			.map(|lists| lists.users(registry))
			.unwrap_or_else(|err| {
				tracing::warn!(%err, "Unable to import legacy lists");
				Vec::new()
			}),
		None => Vec::new(),
	};

	tracing::info!(users = users.len(), "Using in-memory users");
	Arc::new(MemoryUsers::new(users))
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	config::check();

	let registry = Arc::new(RoleRegistry::standard());
	let special_cases = Arc::new(load_special_cases());
	tracing::info!(special_cases = special_cases.len(), "Loaded roles");
	let resolver = Arc::new(Resolver::new(Arc::clone(&registry), special_cases));

	let signing_key = load_signing_key();
	let issuer = Arc::new(
		TokenIssuer::new(CONFIG.issuer_url(), &signing_key)
			.expect("Signing key is unusable"),
	);
	tracing::info!(issuer = issuer.issuer(), ephemeral = signing_key.is_ephemeral(), "JWT issuer ready");
	tracing::info!(public_key = issuer.public_key_pem(), "Public key");

	let users = connect_users(&registry).await;

	let client = reqwest::Client::new();
	let authenticator = Arc::new(Authenticator::new(
		Arc::clone(&users),
		Arc::new(MojangSessionServer::new(client.clone())),
		Arc::new(DiscordApi::new(client)),
	));

	let snapshot = Arc::new(SnapshotCache::new());
	Arc::clone(&snapshot).spawn_refresher(
		users,
		Arc::clone(&resolver),
		Duration::from_secs(CONFIG.refresh_interval_seconds),
	);

	let api = routes::v1(Services {
		authenticator,
		issuer,
		resolver,
		snapshot,
		themes: Arc::new(themes::builtin()),
		motd: Arc::from(CONFIG.motd.clone().unwrap_or_default()),
	});

	let gzip_api = accept_encoding::gzip()
		.and(api.clone())
		.with(warp::compression::gzip());

	let host: IpAddr = CONFIG.host.parse()
		.expect("HOST must be an ip address");

	tracing::info!(%host, port = CONFIG.port, "Listening");
	warp::serve(gzip_api.or(api).with(warp::trace::request()))
		.run((host, CONFIG.port))
		.await;
}
