use crate::config::Config;
use crate::dto::*;
use crate::error::{Result, SpinError, ValidationReason};
use crate::transport::{ReqwestTransport, Transport};
use crate::validation::RequestValidator;
use crate::webhook;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// API client for all Spin platform operations.
///
/// Holds read-only connection settings, so one instance can serve concurrent calls.
/// Every operation is a single POST with no retry.
#[derive(Clone)]
pub struct SpinApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<Config>,
}

impl SpinApiClient {
    /// Create a client posting through a default `reqwest` transport
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Create a client posting through a caller supplied transport
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serialize, post and unwrap the envelope of one request
    async fn dispatch(&self, request: &Request) -> Result<ApiResponse> {
        let method = request.method();
        let body = serde_json::to_string(&ApiRequest {
            api_login: &self.config.spin.api_login,
            api_password: &self.config.spin.api_password,
            request,
        })
        .map_err(|e| encode_error(method, e))?;

        debug!("API request: {}", method);

        let response = self
            .transport
            .post_json(&self.config.spin.base_url, body)
            .await?;
        debug!(
            "API response for {}: status {}, {} bytes",
            method,
            response.status,
            response.body.len()
        );

        let envelope: ApiResponse = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(SpinError::Transport(format!(
                    "{method} failed with HTTP status {}",
                    response.status
                )))
            }
            Err(e) => {
                return Err(SpinError::Decode(format!(
                    "invalid {method} response: {e}"
                )))
            }
        };

        if !envelope.is_success() {
            warn!(
                "{} rejected with error {}: {}",
                method,
                envelope.error,
                envelope.message.as_deref().unwrap_or("<no message>")
            );
            return Err(SpinError::api(envelope.error, envelope.message));
        }

        Ok(envelope)
    }

    async fn call<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let envelope = self.dispatch(&request).await?;
        let payload = required_payload(request.method(), envelope.response)?;
        decode_payload(request.method(), payload)
    }

    // ========================================================================
    // Dynamic Dispatch
    // ========================================================================

    /// Send an already typed request and return its raw payload
    pub async fn send(&self, request: Request) -> Result<RawResponse> {
        let envelope = self.dispatch(&request).await?;
        let response = if request.requires_response() {
            required_payload(request.method(), envelope.response)?
        } else {
            envelope.response.unwrap_or(Value::Null)
        };
        Ok(RawResponse {
            response,
            session_id: envelope.session_id,
        })
    }

    /// Validate a loosely typed payload, then send it.
    /// Nothing is posted when validation fails.
    pub async fn send_value(&self, payload: &Value) -> Result<RawResponse> {
        let request = RequestValidator::validate(payload)?;
        self.send(request).await
    }

    // ========================================================================
    // Player Operations
    // ========================================================================

    /// Create a new player. The password is sent as its SHA-256 digest.
    pub async fn create_player(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
    ) -> Result<Player> {
        self.call(Request::CreatePlayer(CreatePlayerRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
        }))
        .await
    }

    /// Look up an existing player
    pub async fn player_exists(
        &self,
        username: &str,
        currency: impl Into<Currency>,
    ) -> Result<Player> {
        self.call(Request::PlayerExists(PlayerExistsRequest {
            username: username.to_string(),
            currency: currency.into(),
        }))
        .await
    }

    /// Fetch an existing player
    #[deprecated(note = "use `player_exists` instead")]
    pub async fn get_player(
        &self,
        username: &str,
        currency: impl Into<Currency>,
    ) -> Result<Player> {
        self.player_exists(username, currency).await
    }

    // ========================================================================
    // Game Operations
    // ========================================================================

    /// List available games.
    ///
    /// The layout of each entry depends on `show_systems` and `list_type`; see
    /// [`GameListShape::from_flags`]. Choose [`ListType::Compact`] when payload size matters.
    pub async fn get_game_list(
        &self,
        show_systems: ShowSystems,
        currency: impl Into<Currency>,
        list_type: Option<ListType>,
        show_additional: Option<bool>,
    ) -> Result<GameList> {
        let request = GetGameListRequest {
            show_systems,
            currency: currency.into(),
            list_type,
            show_additional,
        };
        let shape = request.shape();
        let request = Request::GetGameList(request);

        let envelope = self.dispatch(&request).await?;
        let payload = required_payload(request.method(), envelope.response)?;
        GameList::decode(shape, payload)
            .map_err(|e| SpinError::Decode(format!("invalid getGameList payload: {e}")))
    }

    /// Start a game session for a player. Home and cashier URLs come from the config.
    pub async fn get_game(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
        gameid: &str,
        lang: Language,
        play_for_fun: PlayForFun,
    ) -> Result<GameSession> {
        self.launch(Request::GetGame(GetGameRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
            gameid: gameid.to_string(),
            lang,
            play_for_fun,
            homeurl: self.config.spin.home_url.clone(),
            cashierurl: self.config.spin.cashier_url.clone(),
        }))
        .await
    }

    /// Start an anonymous demo session
    pub async fn get_game_demo(
        &self,
        gameid: &str,
        currency: impl Into<Currency>,
        lang: Language,
    ) -> Result<GameSession> {
        self.launch(Request::GetGameDemo(GetGameDemoRequest {
            gameid: gameid.to_string(),
            currency: currency.into(),
            lang,
            homeurl: self.config.spin.home_url.clone(),
            cashierurl: self.config.spin.cashier_url.clone(),
        }))
        .await
    }

    async fn launch(&self, request: Request) -> Result<GameSession> {
        let envelope = self.dispatch(&request).await?;
        let url = decode_payload(
            request.method(),
            required_payload(request.method(), envelope.response)?,
        )?;
        Ok(GameSession {
            url,
            session_id: envelope.session_id,
        })
    }

    // ========================================================================
    // Free Round Operations
    // ========================================================================

    /// List a player's free round allotments
    pub async fn get_free_rounds(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
    ) -> Result<Vec<FreeRound>> {
        self.call(Request::GetFreeRounds(GetFreeRoundsRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
        }))
        .await
    }

    /// Grant free rounds on one game. `bet_level` must be within 0..=6.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_free_rounds(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
        gameid: &str,
        freespins: u32,
        bet_level: u8,
        valid_days: u32,
    ) -> Result<AddedFreeRounds> {
        let bet_level = BetLevel::new(bet_level)?;
        self.call(Request::AddFreeRounds(AddFreeRoundsRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
            gameid: gameid.to_string(),
            freespins,
            bet_level,
            valid_days,
        }))
        .await
    }

    /// Remove a player's remaining free rounds on one game
    pub async fn delete_free_rounds(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
        gameid: &str,
    ) -> Result<Value> {
        self.send(Request::DeleteFreeRounds(DeleteFreeRoundsRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
            gameid: gameid.to_string(),
        }))
        .await
        .map(|raw| raw.response)
    }

    /// Remove all of a player's remaining free rounds
    pub async fn delete_all_free_rounds(
        &self,
        username: &str,
        password: &str,
        currency: impl Into<Currency>,
    ) -> Result<Value> {
        self.send(Request::DeleteAllFreeRounds(DeleteAllFreeRoundsRequest {
            username: username.to_string(),
            password: PasswordHash::from_plain(password),
            currency: currency.into(),
        }))
        .await
        .map(|raw| raw.response)
    }

    // ========================================================================
    // Webhooks
    // ========================================================================

    /// Check an inbound webhook signature against the operator's secret (`salt`)
    pub fn validate_webhook(&self, key: &str, timestamp: &str, salt: &str) -> bool {
        webhook::validate_webhook(key, timestamp, salt)
    }
}

fn required_payload(method: &str, response: Option<Value>) -> Result<Value> {
    response.ok_or_else(|| SpinError::Decode(format!("{method} response has no payload")))
}

fn decode_payload<T: DeserializeOwned>(method: &str, payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| SpinError::Decode(format!("invalid {method} payload: {e}")))
}

/// A request that cannot be serialized never leaves the client
fn encode_error(method: &str, err: serde_json::Error) -> SpinError {
    SpinError::validation(
        "request",
        ValidationReason::NotAllowed(format!("{method} request cannot be encoded: {err}")),
    )
}
