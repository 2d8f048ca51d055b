//! # ecobee-bridge
//!
//! Polls the Ecobee API for one remote sensor's current temperature and
//! forwards it to a local receiver device. Designed to be invoked on a
//! schedule (cron or a systemd timer), one reading per run; the only state
//! kept between runs is the OAuth token cache on disk.
//!
//! You can read more about the Ecobee API here:
//! [https://www.ecobee.com/home/developer/api/introduction/index.shtml](https://www.ecobee.com/home/developer/api/introduction/index.shtml)
//!
//! ### Example
//!
//! ```no_run
//! use ecobee_bridge::{run, Client, Receiver, TokenStore};
//!
//! let client = Client::with_creds(
//!     String::from("YOUR_API_KEY"),
//!     String::from("YOUR_REFRESH_TOKEN"),
//!     String::from("YOUR_SENSOR_ID"),
//!     TokenStore::new("token_cache.json"),
//! );
//! let receiver = Receiver::new(String::from("http://192.168.1.20"));
//!
//! match run(&client, &receiver) {
//!     Ok(Some(temperature)) => println!("forwarded {}", temperature),
//!     Ok(None) => println!("no reading to forward"),
//!     Err(error) => eprintln!("{}", error),
//! }
//! ```

mod client;
mod client_error;
mod config;
mod http;
mod receiver;
mod sensor;
mod token_record;
mod token_store;

pub use client::Client;
pub use client_error::ClientError;
pub use config::Config;
pub use receiver::Receiver;
pub use sensor::{CapabilityValue, SensorReading};
pub use token_record::TokenRecord;
pub use token_store::TokenStore;

use log::{info, warn};

/// Fetch the configured sensor's reading and forward its temperature.
///
/// Returns the forwarded temperature, or `None` when no reading was found or
/// the reading carried no temperature; in either case the receiver is left
/// untouched. Only an auth failure is an error.
pub fn run(client: &Client, receiver: &Receiver) -> Result<Option<f64>, ClientError> {
    let reading = match client.fetch_sensor()? {
        Some(reading) => reading,
        None => {
            warn!("no sensor reading this run");
            return Ok(None);
        }
    };

    match reading.temperature() {
        Some(temperature) => {
            info!("forwarding {} to the receiver", temperature);
            receiver.set_temperature(temperature);

            Ok(Some(temperature))
        }
        None => {
            warn!("sensor reading has no temperature capability");
            Ok(None)
        }
    }
}
