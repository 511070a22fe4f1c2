use std::collections::BTreeMap;

use serde::Serialize;
use serde_with::skip_serializing_none;

const BACKGROUNDS_URL: &str = "https://impactdevelopment.github.io/Resources/textures/backgrounds";

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Theme {
	pub background: Option<Background>,
	pub default_font: Option<Font>,
	pub title_font: Option<Font>,
	pub motd_font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Background {
	pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
	pub color: u32,
}

pub type Themes = BTreeMap<String, Theme>;

/// The main menu themes offered to clients, keyed by name.
pub fn builtin() -> Themes {
	let backgrounds = [
		("Impact", "Pink_sunset_at_Visevnik"),
		("alexandre-godreau", "alexandre-godreau-203580-unsplash"),
		("andrew-ruiz", "andrew-ruiz-406374-unsplash"),
		("aniket-deole", "aniket-deole-294646-unsplash"),
		("bailey-zindel", "bailey-zindel-396398-unsplash"),
		("benjamin-voros", "benjamin-voros-575800-unsplash"),
		("casey-horner", "casey-horner-1265505-unsplash"),
		("daniel-leone", "daniel-leone-185834-unsplash"),
		("eberhard-grossgasteiger", "eberhard-grossgasteiger-299348-unsplash"),
		("gabriele-garanzelli", "gabriele-garanzelli-529492-unsplash"),
		("james-donovan", "james-donovan-180375-unsplash"),
		("john-westrock", "john-westrock-638048-unsplash"),
		("julian-zett", "julian-zett-643140-unsplash"),
		("juskteez-vu", "juskteez-vu-3824-unsplash"),
		("martin-jernberg", "martin-jernberg-197949-unsplash"),
		("nasa", "nasa-53884-unsplash"),
		("olivier-miche", "olivier-miche-508901-unsplash"),
		("pascal-debrunner", "pascal-debrunner-634122-unsplash"),
		("patrick-fore", "patrick-fore-562304-unsplash"),
		("stephan-seeber", "stephan-seeber-507791-unsplash"),
		("stephen-wheeler", "stephen-wheeler-732168-unsplash"),
		("tanya-nevidoma", "tanya-nevidoma-1085291-unsplash"),
		("vashishtha-jogi", "vashishtha-jogi-101218-unsplash"),
		("wolfgang-hasselmann", "wolfgang-hasselmann-1403514-unsplash"),
		("yuriy-garnaev", "yuriy-garnaev-395879-unsplash"),
	];

	backgrounds.into_iter()
		.map(|(name, file)| {
			let theme = Theme {
				background: Some(Background {
					url: format!("{}/{}.jpg", BACKGROUNDS_URL, file),
				}),
				..Theme::default()
			};
			(String::from(name), theme)
		})
		.collect()
}
