//! Client for the local receiver device.

use crate::http;
use log::debug;

/// Delivers a temperature setpoint to the local receiver over HTTP.
///
/// Delivery is best-effort: timeouts and network failures are logged and
/// swallowed, so a run never fails because the receiver was unreachable.
pub struct Receiver {
    host: String,
    timeout: u64,
}

impl Receiver {
    /// Create a receiver client for a host such as `http://192.168.1.20`.
    pub fn new(host: String) -> Receiver {
        Receiver {
            host,
            timeout: http::DEFAULT_TIMEOUT,
        }
    }

    /// POST the setpoint to `<host>/temp.json`, truncated to a whole degree.
    pub fn set_temperature(&self, temperature: f64) {
        let client = match http::client(self.timeout) {
            Ok(client) => client,
            Err(err) => {
                debug!("could not build receiver client: {}", err);
                return;
            }
        };

        let url = format!("{}/temp.json", self.host);
        let body = serde_json::json!({ "temp": temperature as i64 });

        match http::recover_timeout(client.post(&url).json(&body).send()) {
            Some(response) => debug!("receiver replied {}", response.status()),
            None => debug!("receiver unreachable, dropping setpoint"),
        }
    }
}
