use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub price_refresh_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

        let price_refresh_secs = env::var("PRICE_REFRESH_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| "PRICE_REFRESH_SECS must be a valid number")?;

        Ok(Self {
            bind_address,
            price_refresh_secs,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.price_refresh_secs == 0 || self.price_refresh_secs > 300 {
            return Err("PRICE_REFRESH_SECS must be between 1 and 300".to_string());
        }
        Ok(())
    }
}
