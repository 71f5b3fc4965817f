use super::common::{BetLevel, Currency, Language, ListType, PasswordHash, PlayForFun, ShowSystems};
use super::response::GameListShape;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerExistsRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGameListRequest {
    pub show_systems: ShowSystems,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub show_additional: Option<bool>,
}

impl GetGameListRequest {
    /// Shape of the game list this request will produce
    pub fn shape(&self) -> GameListShape {
        GameListShape::from_flags(self.show_systems, self.list_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGameRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
    pub gameid: String,
    pub lang: Language,
    pub play_for_fun: PlayForFun,
    pub homeurl: String,
    pub cashierurl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGameDemoRequest {
    pub gameid: String,
    pub currency: Currency,
    pub lang: Language,
    pub homeurl: String,
    pub cashierurl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFreeRoundsRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFreeRoundsRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
    pub gameid: String,
    pub freespins: u32,
    pub bet_level: BetLevel,
    pub valid_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFreeRoundsRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
    pub gameid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAllFreeRoundsRequest {
    #[serde(rename = "user_username")]
    pub username: String,
    #[serde(rename = "user_password")]
    pub password: PasswordHash,
    pub currency: Currency,
}

/// One remote call, tagged on the wire by its `method` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum Request {
    CreatePlayer(CreatePlayerRequest),
    PlayerExists(PlayerExistsRequest),
    GetGameList(GetGameListRequest),
    GetGame(GetGameRequest),
    GetGameDemo(GetGameDemoRequest),
    GetFreeRounds(GetFreeRoundsRequest),
    AddFreeRounds(AddFreeRoundsRequest),
    DeleteFreeRounds(DeleteFreeRoundsRequest),
    DeleteAllFreeRounds(DeleteAllFreeRoundsRequest),
}

impl Request {
    pub const METHODS: [&'static str; 9] = [
        "createPlayer",
        "playerExists",
        "getGameList",
        "getGame",
        "getGameDemo",
        "getFreeRounds",
        "addFreeRounds",
        "deleteFreeRounds",
        "deleteAllFreeRounds",
    ];

    /// Wire method tag
    pub fn method(&self) -> &'static str {
        match self {
            Request::CreatePlayer(_) => "createPlayer",
            Request::PlayerExists(_) => "playerExists",
            Request::GetGameList(_) => "getGameList",
            Request::GetGame(_) => "getGame",
            Request::GetGameDemo(_) => "getGameDemo",
            Request::GetFreeRounds(_) => "getFreeRounds",
            Request::AddFreeRounds(_) => "addFreeRounds",
            Request::DeleteFreeRounds(_) => "deleteFreeRounds",
            Request::DeleteAllFreeRounds(_) => "deleteAllFreeRounds",
        }
    }

    /// Deletions may succeed without a `response` payload
    pub fn requires_response(&self) -> bool {
        !matches!(
            self,
            Request::DeleteFreeRounds(_) | Request::DeleteAllFreeRounds(_)
        )
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Request {
                fn from(request: $ty) -> Self {
                    Request::$variant(request)
                }
            }
        )*
    };
}

impl_from_variant!(
    CreatePlayer(CreatePlayerRequest),
    PlayerExists(PlayerExistsRequest),
    GetGameList(GetGameListRequest),
    GetGame(GetGameRequest),
    GetGameDemo(GetGameDemoRequest),
    GetFreeRounds(GetFreeRoundsRequest),
    AddFreeRounds(AddFreeRoundsRequest),
    DeleteFreeRounds(DeleteFreeRoundsRequest),
    DeleteAllFreeRounds(DeleteAllFreeRoundsRequest),
);
