use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::USER_AGENT,
    Client,
    Url,
};
use tracing::debug;

use super::{
    models::ApiPokemon,
    FetchError,
    PokedetailError,
    PokemonRecord,
};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

const CLIENT_USER_AGENT: &str = concat!("pokedetail/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

/// Anything that can resolve an identifier into a record.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch_pokemon(&self, identifier: &str) -> Result<PokemonRecord, FetchError>;
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PokedetailError> {
        let base_url = Url::parse(base_url).map_err(|e| PokedetailError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(PokedetailError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/pokemon/{identifier}`, the identifier sent as one path segment
    /// with its case untouched.
    pub fn pokemon_url(&self, identifier: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(identifier);
        }
        url
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch_pokemon(&self, identifier: &str) -> Result<PokemonRecord, FetchError> {
        let url = self.pokemon_url(identifier);
        debug!(%url, "GET");

        let response = self.client.get(url).header(USER_AGENT, CLIENT_USER_AGENT).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        let api: ApiPokemon = serde_json::from_slice(&body)?;

        Ok(api.into())
    }
}
