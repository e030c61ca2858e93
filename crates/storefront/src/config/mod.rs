use anyhow::{Context, Result, bail};

#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub enabled: bool,
    pub stripe_secret: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub static_dir: String,
    pub checkout: CheckoutConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data.db".to_string());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let enabled = match std::env::var("CHECKOUT_ENABLED").ok().as_deref() {
            Some("true") | Some("1") => true,
            Some("false") | Some("0") | None => false,
            Some(other) => bail!("CHECKOUT_ENABLED must be 'true' or 'false', got '{other}'"),
        };

        // the payment secret is only consulted when the adapter is switched on
        let stripe_secret = if enabled {
            std::env::var("STRIPE_SECRET").context(
                "Missing environment variable: STRIPE_SECRET (required when CHECKOUT_ENABLED=true)",
            )?
        } else {
            String::new()
        };

        let success_url = std::env::var("CHECKOUT_SUCCESS_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/success".to_string());
        let cancel_url = std::env::var("CHECKOUT_CANCEL_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/cancelled".to_string());

        Ok(Self {
            port,
            database_path,
            static_dir,
            checkout: CheckoutConfig {
                enabled,
                stripe_secret,
                success_url,
                cancel_url,
            },
        })
    }
}
