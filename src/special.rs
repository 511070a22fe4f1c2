use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use uuid::{uuid, Uuid};

use crate::info::{Edition, UserInfo};

/// Hand-picked cosmetics for a single player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpecialCase {
	#[serde(default)]
	pub info: UserInfo,
	pub edition: Option<Edition>,
}

#[derive(Debug, Error)]
pub enum SpecialCasesError {
	#[error("unable to read special cases: {0}")]
	Io(#[from] std::io::Error),
	#[error("invalid special cases file: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Per-player overrides keyed by Minecraft UUID. They take precedence over
/// everything the player's roles would provide.
#[derive(Debug, Clone, Default)]
pub struct SpecialCases {
	cases: HashMap<Uuid, SpecialCase>,
}

fn text(value: &str) -> Option<String> {
	Some(String::from(value))
}

impl SpecialCases {
	pub fn new(cases: HashMap<Uuid, SpecialCase>) -> Self {
		Self { cases }
	}

	pub fn builtin() -> Self {
		let speckles = "https://files.impactclient.net/img/texture/speckles128.png";
		let popstonia = "https://files.impactclient.net/img/texture/popstonia.png";

		let cases = [
			// catgorl
			(uuid!("2c3174fc-0c6b-4cfb-bb2b-0069bf7294d1"), SpecialCase {
				info: UserInfo { text_color: text("LIGHT_PURPLE"), ..UserInfo::default() },
				edition: None,
			}),
			// leijurv
			(uuid!("51dcd870-d33b-40e9-9fc1-aecdcff96081"), SpecialCase {
				info: UserInfo {
					text_color: text("RED"),
					icon: text(speckles),
					..UserInfo::default()
				},
				edition: Some(Edition { icon: text(speckles), ..Edition::default() }),
			}),
			// triibu popstonia
			(uuid!("8e563236-c7f5-4c82-aa27-c95bf3f4c322"), SpecialCase {
				info: UserInfo { icon: text(popstonia), ..UserInfo::default() },
				edition: None,
			}),
			// popstonia (rebane)
			(uuid!("342fc44b-1fd1-4272-a4c3-a98a2df98abc"), SpecialCase {
				info: UserInfo { icon: text(popstonia), ..UserInfo::default() },
				edition: None,
			}),
		];

		Self::new(cases.into_iter().collect())
	}

	/// Reads a JSON object of `uuid -> { info, edition }` on top of the
	/// builtin cases. Entries in the file replace builtin ones.
	pub fn load(path: &Path) -> Result<Self, SpecialCasesError> {
		let contents = std::fs::read_to_string(path)?;
		let overrides: HashMap<Uuid, SpecialCase> = serde_json::from_str(&contents)?;

		let mut cases = Self::builtin();
		cases.cases.extend(overrides);
		Ok(cases)
	}

	pub fn get(&self, minecraft_id: &Uuid) -> Option<&SpecialCase> {
		self.cases.get(minecraft_id)
	}

	pub fn len(&self) -> usize {
		self.cases.len()
	}
}
