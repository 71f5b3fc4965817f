//! Runtime validation of loosely typed request payloads.
//!
//! Typed callers build [`Request`] values directly; payloads arriving as raw JSON
//! (deserialized input, generic callers) pass through [`RequestValidator`] first so a
//! malformed payload never reaches the network. Fields are checked in declaration
//! order and the first offending one is reported. Unknown extra fields are ignored.

use crate::dto::*;
use crate::error::{Result, SpinError, ValidationReason};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a payload carrying its own `method` tag
    pub fn validate(value: &Value) -> Result<Request> {
        let object = as_object(value)?;
        let method = match object.get("method") {
            None | Some(Value::Null) => {
                return Err(SpinError::validation("method", ValidationReason::Missing))
            }
            Some(Value::String(method)) => method.as_str(),
            Some(_) => {
                return Err(SpinError::validation(
                    "method",
                    ValidationReason::WrongKind("a string"),
                ))
            }
        };
        Self::validate_method(method, value)
    }

    /// Validate a payload against the shape required by `method`.
    /// A `method` field inside the payload, if any, is ignored.
    pub fn validate_method(method: &str, value: &Value) -> Result<Request> {
        let fields = Fields(as_object(value)?);

        let request = match method {
            "createPlayer" => Request::CreatePlayer(CreatePlayerRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
            }),
            "playerExists" => Request::PlayerExists(PlayerExistsRequest {
                username: fields.string("user_username")?,
                currency: fields.currency("currency")?,
            }),
            "getGameList" => Request::GetGameList(GetGameListRequest {
                show_systems: fields.flag("show_systems")?,
                currency: fields.currency("currency")?,
                list_type: fields.optional_flag("list_type")?,
                show_additional: fields.optional_bool("show_additional")?,
            }),
            "getGame" => Request::GetGame(GetGameRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
                gameid: fields.string("gameid")?,
                lang: fields.language("lang")?,
                play_for_fun: fields.flag("play_for_fun")?,
                homeurl: fields.string("homeurl")?,
                cashierurl: fields.string("cashierurl")?,
            }),
            "getGameDemo" => Request::GetGameDemo(GetGameDemoRequest {
                gameid: fields.string("gameid")?,
                currency: fields.currency("currency")?,
                lang: fields.language("lang")?,
                homeurl: fields.string("homeurl")?,
                cashierurl: fields.string("cashierurl")?,
            }),
            "getFreeRounds" => Request::GetFreeRounds(GetFreeRoundsRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
            }),
            "addFreeRounds" => Request::AddFreeRounds(AddFreeRoundsRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
                gameid: fields.string("gameid")?,
                freespins: fields.count("freespins")?,
                bet_level: fields.bet_level("bet_level")?,
                valid_days: fields.count("valid_days")?,
            }),
            "deleteFreeRounds" => Request::DeleteFreeRounds(DeleteFreeRoundsRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
                gameid: fields.string("gameid")?,
            }),
            "deleteAllFreeRounds" => Request::DeleteAllFreeRounds(DeleteAllFreeRoundsRequest {
                username: fields.string("user_username")?,
                password: fields.password("user_password")?,
                currency: fields.currency("currency")?,
            }),
            other => {
                return Err(SpinError::validation(
                    "method",
                    ValidationReason::NotAllowed(format!("`{other}` is not a known method")),
                ))
            }
        };

        Ok(request)
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        SpinError::validation("request", ValidationReason::WrongKind("a JSON object"))
    })
}

struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    fn required(&self, name: &str) -> Result<&'a Value> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(SpinError::validation(name, ValidationReason::Missing)),
            Some(value) => Ok(value),
        }
    }

    fn string(&self, name: &str) -> Result<String> {
        self.required(name)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| SpinError::validation(name, ValidationReason::WrongKind("a string")))
    }

    fn currency(&self, name: &str) -> Result<Currency> {
        self.string(name).map(Currency::from)
    }

    fn password(&self, name: &str) -> Result<PasswordHash> {
        PasswordHash::from_digest(self.string(name)?).map_err(|_| {
            SpinError::validation(
                name,
                ValidationReason::NotAllowed("must be a SHA-256 hex digest".to_string()),
            )
        })
    }

    fn language(&self, name: &str) -> Result<Language> {
        let code = self.string(name)?;
        code.parse::<Language>().map_err(|_| {
            SpinError::validation(
                name,
                ValidationReason::NotAllowed(format!("`{code}` is not a supported language")),
            )
        })
    }

    fn integer(&self, name: &str) -> Result<u64> {
        let value = self.required(name)?;
        if !(value.is_u64() || value.is_i64()) {
            return Err(SpinError::validation(
                name,
                ValidationReason::WrongKind("an integer"),
            ));
        }
        value.as_u64().ok_or_else(|| {
            SpinError::validation(
                name,
                ValidationReason::NotAllowed(format!("must not be negative, got {value}")),
            )
        })
    }

    fn count(&self, name: &str) -> Result<u32> {
        let value = self.integer(name)?;
        u32::try_from(value).map_err(|_| {
            SpinError::validation(
                name,
                ValidationReason::NotAllowed(format!("{value} is too large")),
            )
        })
    }

    fn bet_level(&self, name: &str) -> Result<BetLevel> {
        let value = self.integer(name)?;
        u8::try_from(value)
            .ok()
            .and_then(|level| BetLevel::new(level).ok())
            .ok_or_else(|| {
                SpinError::validation(
                    name,
                    ValidationReason::NotAllowed(format!(
                        "must be between {} and {}, got {value}",
                        BetLevel::MIN,
                        BetLevel::MAX
                    )),
                )
            })
    }

    /// Small closed integer sets (`show_systems`, `list_type`, `play_for_fun`)
    fn flag<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<u8, Error = SpinError>,
    {
        let value = self.integer(name)?;
        let narrowed = u8::try_from(value).map_err(|_| {
            SpinError::validation(
                name,
                ValidationReason::NotAllowed(format!("{value} is not an allowed value")),
            )
        })?;
        T::try_from(narrowed)
    }

    fn optional_flag<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: TryFrom<u8, Error = SpinError>,
    {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Null) => Err(SpinError::validation(
                name,
                ValidationReason::WrongKind("an integer"),
            )),
            Some(_) => self.flag(name).map(Some),
        }
    }

    fn optional_bool(&self, name: &str) -> Result<Option<bool>> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(_) => Err(SpinError::validation(
                name,
                ValidationReason::WrongKind("a boolean"),
            )),
        }
    }
}
