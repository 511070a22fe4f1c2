use futures_util::future;
use warp::{Filter, Rejection};

/// Whether an `accept-encoding` value allows gzip, honouring `q=0`.
fn accepts_gzip(header: &str) -> bool {
	header.split(',').any(|coding| {
		let mut parts = coding.split(';');
		let name = parts.next().unwrap_or("").trim();
		let quality = parts
			.filter_map(|param| param.trim().strip_prefix("q="))
			.find_map(|q| q.trim().parse::<f32>().ok())
			.unwrap_or(1.0);

		(name.eq_ignore_ascii_case("gzip") || name == "*") && quality > 0.0
	})
}

/// Passes only requests that accept gzip.
///
/// Anything else is rejected as not found so that it falls through to an
/// uncompressed copy of the routes instead of surfacing as an error.
pub fn gzip() -> impl Filter<Extract = (), Error = Rejection> + Copy {
	warp::header::optional::<String>("accept-encoding")
		.and_then(|header: Option<String>| {
			let accepted = header.as_deref().map(accepts_gzip).unwrap_or(false);
			future::ready(if accepted { Ok(()) } else { Err(warp::reject::not_found()) })
		})
		.untuple_one()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_codings() {
		assert!(accepts_gzip("gzip"));
		assert!(accepts_gzip("deflate, gzip;q=0.5"));
		assert!(accepts_gzip("br, *"));
		assert!(accepts_gzip("GZIP"));
		assert!(!accepts_gzip("gzip;q=0"));
		assert!(!accepts_gzip("deflate, br"));
		assert!(!accepts_gzip(""));
	}

	#[tokio::test]
	async fn filters_requests() {
		let accepted = warp::test::request()
			.header("accept-encoding", "gzip, deflate")
			.matches(&gzip())
			.await;
		assert!(accepted);

		assert!(!warp::test::request().matches(&gzip()).await);
	}
}
