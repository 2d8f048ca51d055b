use ecobee_bridge::{run, Client, Config, Receiver, TokenStore};
use log::{error, info};
use std::process;

fn main() {
    env_logger::init();

    // A .env file is optional; real environment variables take precedence.
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            process::exit(2);
        }
    };

    let client = Client::with_creds(
        config.api_key,
        config.refresh_token,
        config.sensor_id,
        TokenStore::new(config.token_cache_path),
    );
    let receiver = Receiver::new(config.receiver_host);

    match run(&client, &receiver) {
        Ok(Some(temperature)) => info!("run complete, forwarded {}", temperature),
        Ok(None) => info!("run complete, nothing forwarded"),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
