use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

fn default_host() -> String {
	String::from("127.0.0.1")
}

fn default_port() -> u16 {
	3000
}

fn default_server_url() -> Url {
	Url::parse("https://impactclient.net").expect("default server url is valid")
}

fn default_refresh_interval() -> u64 {
	30 * 60
}

#[derive(Deserialize)]
pub struct Config {
	#[serde(default = "default_host")]
	pub host: String,
	#[serde(default = "default_port")]
	pub port: u16,
	#[serde(default = "default_server_url")]
	pub server_url: Url,
	pub database_url: Option<Url>,
	/// Directory of `<role>.txt` files, used when there is no database.
	pub legacy_lists: Option<PathBuf>,
	/// Base64 PKCS#1 DER, or PEM.
	pub jwt_key: Option<String>,
	pub special_cases: Option<PathBuf>,
	#[serde(default = "default_refresh_interval")]
	pub refresh_interval_seconds: u64,
	pub motd: Option<String>,
}

impl Config {
	/// Tokens are issued by the api subdomain of the server.
	pub fn issuer_url(&self) -> String {
		issuer_for(&self.server_url)
	}
}

pub fn issuer_for(server_url: &Url) -> String {
	let host = server_url.host_str().unwrap_or("localhost");
	match server_url.port() {
		Some(port) => format!("{}://api.{}:{}/v1", server_url.scheme(), host, port),
		None => format!("{}://api.{}/v1", server_url.scheme(), host),
	}
}

lazy_static! {
	pub static ref CONFIG: Config = envy::from_env::<Config>()
		.expect("Incomplete config setup");
}

pub fn check() {
	if CONFIG.host.is_empty() {
		panic!("Missing HOST value");
	}

	if CONFIG.refresh_interval_seconds == 0 {
		panic!("REFRESH_INTERVAL_SECONDS must be positive");
	}

	if CONFIG.database_url.is_none() && CONFIG.legacy_lists.is_none() {
		tracing::warn!("Neither DATABASE_URL nor LEGACY_LISTS is set, no users will be known");
	}
}
