//! # spin-client
//!
//! A typed Rust client for the Spin gaming platform API: player accounts, game
//! lists, game launch sessions, free round promotions and webhook signature checks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use spin_client::{Config, Language, PlayForFun, SpinApiClient};
//!
//! # async fn example() -> spin_client::Result<()> {
//! // Load configuration from config.toml
//! let config = Config::new()?;
//! let client = SpinApiClient::new(config);
//!
//! let player = client.create_player("example", "password", "USD").await?;
//! let session = client
//!     .get_game("example", "password", "USD", "softswiss/DiceBonanza", Language::En, PlayForFun::Real)
//!     .await?;
//! println!("{} -> {}", player.username, session.url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your operator credentials:
//!
//! ```toml
//! [spin]
//! api_login = "your_api_login"
//! api_password = "your_api_password"
//! base_url = "https://url.to.api.com"
//! home_url = "https://url.to.your.page.com"
//! cashier_url = "https://url.to.cashier.page.com"
//! ```
//!
//! or set `SPIN_API_LOGIN`, `SPIN_API_PASSWORD`, `SPIN_BASE_URL`, `SPIN_HOME_URL` and
//! `SPIN_CASHIER_URL` and use [`Config::from_env`].
//!
//! ## Raw payloads
//!
//! Payloads that arrive as untyped JSON go through [`RequestValidator`] before being
//! sent, see [`SpinApiClient::send_value`].
//!
//! ## Webhooks
//!
//! ```
//! assert!(spin_client::validate_webhook("6512bd43d9caa6e02c990b0a82652dca", "1", "1"));
//! ```

pub mod api_client;
pub mod config;
pub mod dto;
pub mod error;
pub mod transport;
pub mod validation;
pub mod webhook;

// Re-export commonly used types at the crate root
pub use api_client::SpinApiClient;
pub use config::Config;
pub use dto::*;
pub use error::{Result, SpinError, ValidationReason};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use validation::RequestValidator;
pub use webhook::validate_webhook;
