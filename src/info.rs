use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The cosmetic profile other players see: cape, icon and nametag colors.
///
/// Every field is optional; an unset field means "use the client default".
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
	pub icon: Option<String>,
	pub cape: Option<String>,
	/// Minecraft color code name, e.g. `LIGHT_PURPLE`.
	pub text_color: Option<String>,
	/// Numeric ARGB, e.g. `1358954495`.
	pub background_color: Option<String>,
	/// Numeric ARGB, e.g. `-1761673216`.
	pub border_color: Option<String>,
}

// Empty strings count as unset so hand-written override files can't
// accidentally block a role default with "".
fn is_set(field: &Option<String>) -> bool {
	field.as_deref().map_or(false, |value| !value.is_empty())
}

fn first(current: Option<String>, next: &Option<String>) -> Option<String> {
	current
		.filter(|value| !value.is_empty())
		.or_else(|| next.clone().filter(|value| !value.is_empty()))
}

impl UserInfo {
	/// Keeps every field already set, fills the rest from `next`.
	pub fn merge(self, next: &UserInfo) -> UserInfo {
		UserInfo {
			icon: first(self.icon, &next.icon),
			cape: first(self.cape, &next.cape),
			text_color: first(self.text_color, &next.text_color),
			background_color: first(self.background_color, &next.background_color),
			border_color: first(self.border_color, &next.border_color),
		}
	}

	pub fn is_empty(&self) -> bool {
		[
			&self.icon,
			&self.cape,
			&self.text_color,
			&self.background_color,
			&self.border_color,
		]
		.into_iter()
		.all(|field| !is_set(field))
	}

	pub fn has_nametag(&self) -> bool {
		is_set(&self.text_color)
			|| is_set(&self.background_color)
			|| is_set(&self.border_color)
	}
}

/// A fragment of the "... Edition" label shown to the user themselves.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
	pub icon: Option<String>,
	pub text: Option<String>,
	pub text_color: Option<String>,
}

impl Edition {
	/// Reduces fragments (highest priority first) into a single edition.
	///
	/// The first icon and text color win; texts are concatenated, so a pepsi
	/// premium user ends up with "Pepsi Premium Edition".
	pub fn reduce<'e, I>(fragments: I) -> Option<Edition>
	where I: IntoIterator<Item = &'e Edition> {
		let fragments = fragments.into_iter().collect::<Vec<_>>();
		if fragments.is_empty() {
			return None;
		}

		let icon = fragments.iter()
			.find_map(|e| e.icon.clone().filter(|i| !i.is_empty()));
		let text_color = fragments.iter()
			.find_map(|e| e.text_color.clone().filter(|c| !c.is_empty()));

		let words = fragments.iter()
			.filter_map(|e| e.text.as_deref())
			.filter(|text| !text.is_empty())
			.collect::<Vec<_>>();
		let text = if words.is_empty() {
			None
		} else {
			Some(format!("{} Edition", words.join(" ")))
		};

		Some(Edition { icon, text, text_color })
	}
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Features {
	/// Listed publicly unless the user is incognito.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub public: Vec<&'static str>,
	/// Only ever shown to the user.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub private: Vec<&'static str>,
}

impl Features {
	pub fn new(info: &UserInfo, edition: Option<&Edition>) -> Option<Features> {
		let mut public = vec![];
		if info.has_nametag() {
			public.push("nametag");
		}
		if is_set(&info.cape) {
			public.push("cape");
		}
		if is_set(&info.icon) {
			public.push("icon");
		}

		let mut private = vec![];
		if edition.is_some() {
			private.push("edition");
		}

		if public.is_empty() && private.is_empty() {
			None
		} else {
			Some(Features { public, private })
		}
	}
}
