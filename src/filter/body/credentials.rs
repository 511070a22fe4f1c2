use futures_util::future;
use serde::de::DeserializeOwned;
use warp::{Filter, Rejection};

const MAX_CREDENTIALS_LENGTH: u64 = 16 * 1024;

fn is_form(content_type: &str) -> bool {
	content_type
		.split(';')
		.next()
		.map(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
		.unwrap_or(false)
}

/// Passes only urlencoded form bodies, without reading them.
fn form_content() -> impl Filter<Extract = (), Error = Rejection> + Copy {
	warp::header::optional::<String>("content-type")
		.and_then(|content_type: Option<String>| {
			let form = content_type.as_deref().map(is_form).unwrap_or(false);
			future::ready(if form { Ok(()) } else { Err(warp::reject::not_found()) })
		})
		.untuple_one()
}

/// Login bodies as either JSON or a urlencoded form.
///
/// The form is what the in-game client sends; the website sends JSON.
/// Anything not labelled as a form, including a missing content type, is
/// read as JSON.
pub fn credentials<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where T: DeserializeOwned + Send + 'static {
	let form = form_content().and(warp::body::form());

	warp::body::content_length_limit(MAX_CREDENTIALS_LENGTH)
		.and(form.or(warp::body::json()).unify())
}
