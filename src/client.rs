use crate::client_error::ClientError;
use crate::http;
use crate::sensor::{SensorReading, ThermostatListResponse};
use crate::token_record::{unix_now, TokenRecord, TokenResponse};
use crate::token_store::TokenStore;
use log::{debug, warn};

/// Production API base URL.
const API_BASE_URL: &str = "https://api.ecobee.com";

/// Client for the Ecobee API: refreshes the OAuth token through the configured
/// [`TokenStore`] and fetches the current reading for one named remote sensor.
pub struct Client {
    api_key: String,
    refresh_token: String,
    sensor_id: String,
    store: TokenStore,
    base_url: String,
    timeout: u64,
}

impl Client {
    /// Create a new client with API credentials and a token cache.
    pub fn with_creds(
        api_key: String,
        refresh_token: String,
        sensor_id: String,
        store: TokenStore,
    ) -> Client {
        Client {
            api_key,
            refresh_token,
            sensor_id,
            store,
            base_url: String::from(API_BASE_URL),
            timeout: http::DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Client {
        self.base_url = base_url.into();
        self
    }

    /// Get the timeout for API requests, in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Set the timeout for API requests, in seconds.
    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }
}

impl Client {
    /// Produce a currently-valid bearer token, refreshing transparently.
    ///
    /// A cached record that has not expired is returned without any network
    /// call. Otherwise the refresh endpoint is consulted and its result
    /// persisted; if no usable token comes back (including on timeout or
    /// network failure), this fails with [`ClientError::Auth`].
    pub fn access_token(&self) -> Result<String, ClientError> {
        let record = self.store.load();
        let now = unix_now();

        if record.is_valid(now) {
            debug!("using cached access token");
            return Ok(record.access_token);
        }

        match self.fetch_access_token(now)? {
            Some(record) => {
                self.store.save(&record)?;
                debug!("refreshed access token, expires at {}", record.expiration);

                Ok(record.access_token)
            }
            None => Err(ClientError::Auth(String::from(
                "Could not find access token",
            ))),
        }
    }

    /// Call the refresh endpoint. Timeouts and transport failures come back as
    /// `Ok(None)`, as does a reply without both a token and a lifetime.
    fn fetch_access_token(&self, now: u64) -> Result<Option<TokenRecord>, ClientError> {
        let query = serde_urlencoded::to_string([
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
            ("client_id", self.api_key.as_str()),
        ])?;
        let url = format!("{}/token?{}", self.base_url, query);
        let client = http::client(self.timeout)?;

        let response = match http::recover_timeout(client.post(&url).send()) {
            Some(response) => response,
            None => return Ok(None),
        };
        let body: TokenResponse = match http::recover_timeout(response.json()) {
            Some(body) => body,
            None => return Ok(None),
        };

        Ok(body.into_record(now))
    }

    /// Fetch the current reading for the configured remote sensor.
    ///
    /// Returns `Ok(None)` when the request times out or fails at the network
    /// level, when the listing carries no thermostats, or when no sensor in
    /// the first thermostat matches the configured id. Only an auth failure
    /// is surfaced as an error.
    pub fn fetch_sensor(&self) -> Result<Option<SensorReading>, ClientError> {
        let token = self.access_token()?;
        let selection = serde_json::json!({
            "selection": {
                "selectionType": "registered",
                "selectionMatch": "",
                "includeSensors": true,
            }
        });
        let query = serde_urlencoded::to_string([
            ("format", "json"),
            ("body", selection.to_string().as_str()),
        ])?;
        let url = format!("{}/1/thermostat?{}", self.base_url, query);
        let client = http::client(self.timeout)?;

        let response = match http::recover_timeout(
            client
                .get(&url)
                .header("Content-Type", "application/json;charset=UTF-8")
                .header("Authorization", format!("Bearer {}", token))
                .send(),
        ) {
            Some(response) => response,
            None => return Ok(None),
        };
        let body: ThermostatListResponse = match http::recover_timeout(response.json()) {
            Some(body) => body,
            None => return Ok(None),
        };

        let sensors = body
            .thermostat_list
            .into_iter()
            .next()
            .map(|thermostat| thermostat.remote_sensors)
            .unwrap_or_default();

        match sensors
            .into_iter()
            .find(|sensor| sensor.id == self.sensor_id)
        {
            Some(sensor) => Ok(Some(SensorReading::from(sensor))),
            None => {
                warn!("no remote sensor with id {:?} in the listing", self.sensor_id);
                Ok(None)
            }
        }
    }
}
