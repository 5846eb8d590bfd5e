pub mod dump;
pub mod update;

use anyhow::Result;
use lottodraws_lib::Client;

/// Builds the upstream client, honoring `--base-url` and the
/// `PILIO_BASE_URL` environment variable (used by tests and dry runs).
pub(crate) fn build_client(base_url: Option<&str>) -> Result<Client> {
    let client = match base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PILIO_BASE_URL").ok())
    {
        Some(url) => Client::with_base_url(&url)?,
        None => Client::new()?,
    };
    Ok(client)
}
