use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::FetchError;

use super::model::{Device, PositionRecord};
use super::query::PositionQuery;
use super::source::PositionSource;

const POSITIONS_PATH: &str = "api/positions";
const DEVICES_PATH: &str = "api/devices";
const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Basic { user: String, password: String },
    Bearer(String),
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub server: String,
    pub timeout: Duration,
    pub headers: Vec<(String, String)>,
    pub auth: Option<Auth>,
}

#[derive(Debug, Clone)]
pub struct HttpPositionSource {
    client: Client,
    positions_url: Url,
    devices_url: Url,
    basic_auth: Option<(String, String)>,
}

impl HttpPositionSource {
    /// Builds a client for the given server.
    ///
    /// # Errors
    ///
    /// Returns an error when the server URL or a header is invalid, or the
    /// HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let base = base_url(&config.server)?;
        let positions_url = join_url(&base, POSITIONS_PATH)?;
        let devices_url = join_url(&base, DEVICES_PATH)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                FetchError::InvalidHeaderName {
                    name: name.clone(),
                    source: err,
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| FetchError::InvalidHeaderValue {
                    name: name.clone(),
                    source: err,
                })?;
            headers.insert(header_name, header_value);
        }

        let mut basic_auth = None;
        match config.auth.as_ref() {
            Some(Auth::Bearer(token)) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(
                    |err| FetchError::InvalidHeaderValue {
                        name: AUTHORIZATION.as_str().to_owned(),
                        source: err,
                    },
                )?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Some(Auth::Basic { user, password }) => {
                basic_auth = Some((user.clone(), password.clone()));
            }
            None => {}
        }

        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::BuildClientFailed { source: err })?;

        Ok(Self {
            client,
            positions_url,
            devices_url,
            basic_auth,
        })
    }

    #[must_use]
    pub const fn positions_url(&self) -> &Url {
        &self.positions_url
    }

    fn get(&self, url: &Url) -> RequestBuilder {
        let request = self.client.get(url.clone());
        match self.basic_auth.as_ref() {
            Some((user, password)) => request.basic_auth(user, Some(password)),
            None => request,
        }
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    async fn fetch_positions(
        &self,
        query: &PositionQuery,
    ) -> Result<Vec<PositionRecord>, FetchError> {
        tracing::debug!(
            "Fetching positions for device {} from {} to {}",
            query.device_id,
            query.from,
            query.to
        );
        let response = self
            .get(&self.positions_url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: self.positions_url.to_string(),
                source: err,
            })?;
        decode_json(response, &self.positions_url).await
    }

    async fn fetch_devices(&self) -> Result<Vec<Device>, FetchError> {
        let response = self
            .get(&self.devices_url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: self.devices_url.to_string(),
                source: err,
            })?;
        decode_json(response, &self.devices_url).await
    }
}

fn base_url(server: &str) -> Result<Url, FetchError> {
    let mut base = Url::parse(server.trim()).map_err(|err| FetchError::InvalidServerUrl {
        url: server.to_owned(),
        source: err,
    })?;
    if base.cannot_be_a_base() {
        return Err(FetchError::ServerUrlNotBase {
            url: server.to_owned(),
        });
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn join_url(base: &Url, path: &str) -> Result<Url, FetchError> {
    base.join(path).map_err(|err| FetchError::JoinUrlFailed {
        url: base.to_string(),
        source: err,
    })
}

async fn decode_json<T>(response: Response, url: &Url) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(|err| FetchError::Decode {
        url: url.to_string(),
        source: err,
    })
}
