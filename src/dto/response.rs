use super::common::{ListType, ShowSystems};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/*
{"error":0,"response":{"id":1042,"username":"example","balance":"0.00","currencycode":"USD","created":"2024-03-01 10:12:44","agent_balance":null}}
*/
/// Player record returned by `createPlayer` and `playerExists`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub balance: String,
    #[serde(rename = "currencycode")]
    pub currency_code: String,
    pub created: String,
    pub agent_balance: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Free round allotment created by `addFreeRounds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedFreeRounds {
    pub id: i64,
    pub player_id: i64,
    pub game_id: String,
    pub freespins: i64,
    pub freespins_wallet: i64,
    pub freespins_performed: i64,
    pub bet_level: i64,
    pub currency: String,
    pub operator_id: i64,
    pub valid_until: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Active free round allotment listed by `getFreeRounds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeRound {
    pub id: i64,
    pub game_id: String,
    pub currency: String,
    pub player_id: i64,
    pub freespins: i64,
    pub freespins_bet: f64,
    pub freespins_wallet: i64,
    pub freespins_performed: i64,
    pub bet_level: i64,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub extra_data: Value,
    pub active: bool,
    pub operator_id: i64,
    pub valid_until: String,
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Game `type` column. The wire spelling is kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameKind {
    VideoSlot,
    /// Older listings spell it in the plural
    VideoSlots,
    Live,
    Other(String),
}

impl GameKind {
    pub fn as_str(&self) -> &str {
        match self {
            GameKind::VideoSlot => "video-slot",
            GameKind::VideoSlots => "video-slots",
            GameKind::Live => "live",
            GameKind::Other(kind) => kind,
        }
    }

    pub fn is_video_slot(&self) -> bool {
        matches!(self, GameKind::VideoSlot | GameKind::VideoSlots)
    }
}

impl From<String> for GameKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "video-slot" => GameKind::VideoSlot,
            "video-slots" => GameKind::VideoSlots,
            "live" => GameKind::Live,
            _ => GameKind::Other(kind),
        }
    }
}

impl From<GameKind> for String {
    fn from(kind: GameKind) -> Self {
        match kind {
            GameKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

/// Full game entry (list type 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType1 {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GameKind,
    pub category: String,
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Value>>,
    pub new: bool,
    pub mobile: bool,
    pub id_hash: String,
    pub ts: i64,
    pub id_hash_parent: String,
    pub freerounds_supported: bool,
    pub featurebuy_supported: bool,
    pub has_jackpot: bool,
    pub play_for_fun_supported: bool,
    pub image: String,
    pub image_square: String,
    pub image_portrait: String,
    pub currency: String,
    pub source: String,
    pub use_at_own_risk: bool,
    /// Unlisted columns, such as the data requested with `show_additional`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full game entry with provider system details (list type 1, systems shown)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType1WithSystem {
    #[serde(flatten)]
    pub game: GameType1,
    pub system: String,
    pub created_at: String,
    pub provider: String,
    pub provider_name: String,
}

/// Compact game entry (list type 2). Field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType2 {
    pub id: i64,
    pub n: String,
    pub p: String,
    pub s: String,
    pub new: bool,
    pub cdn: i64,
    /// Free rounds supported
    pub fs: bool,
    /// Feature buy supported
    pub fb: bool,
    pub d: bool,
    pub src: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Compact game entry with its system column (list type 2, systems shown)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType2WithSystem {
    #[serde(flatten)]
    pub game: GameType2,
    pub c: String,
}

/// Which of the four game list layouts a `getGameList` call returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameListShape {
    Type1,
    Type2,
    Type1WithSystem,
    Type2WithSystem,
}

impl GameListShape {
    /// An absent list type selects the full layout
    pub fn from_flags(show_systems: ShowSystems, list_type: Option<ListType>) -> Self {
        match (show_systems, list_type.unwrap_or_default()) {
            (ShowSystems::Hidden, ListType::Full) => GameListShape::Type1,
            (ShowSystems::Hidden, ListType::Compact) => GameListShape::Type2,
            (ShowSystems::Shown, ListType::Full) => GameListShape::Type1WithSystem,
            (ShowSystems::Shown, ListType::Compact) => GameListShape::Type2WithSystem,
        }
    }
}

/// Game list keyed by game identifier, in the layout selected by the request flags
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameList {
    Type1(HashMap<String, GameType1>),
    Type2(HashMap<String, GameType2>),
    Type1WithSystem(HashMap<String, GameType1WithSystem>),
    Type2WithSystem(HashMap<String, GameType2WithSystem>),
}

impl GameList {
    pub fn decode(shape: GameListShape, value: Value) -> serde_json::Result<Self> {
        Ok(match shape {
            GameListShape::Type1 => GameList::Type1(serde_json::from_value(value)?),
            GameListShape::Type2 => GameList::Type2(serde_json::from_value(value)?),
            GameListShape::Type1WithSystem => {
                GameList::Type1WithSystem(serde_json::from_value(value)?)
            }
            GameListShape::Type2WithSystem => {
                GameList::Type2WithSystem(serde_json::from_value(value)?)
            }
        })
    }

    pub fn shape(&self) -> GameListShape {
        match self {
            GameList::Type1(_) => GameListShape::Type1,
            GameList::Type2(_) => GameListShape::Type2,
            GameList::Type1WithSystem(_) => GameListShape::Type1WithSystem,
            GameList::Type2WithSystem(_) => GameListShape::Type2WithSystem,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GameList::Type1(games) => games.len(),
            GameList::Type2(games) => games.len(),
            GameList::Type1WithSystem(games) => games.len(),
            GameList::Type2WithSystem(games) => games.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Launch URL for a game plus the platform session it opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub url: String,
    pub session_id: Option<String>,
}

/// Successful payload of a dynamically dispatched request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    pub response: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_selection_covers_all_flags() {
        use GameListShape::*;
        let cases = [
            (ShowSystems::Hidden, None, Type1),
            (ShowSystems::Hidden, Some(ListType::Full), Type1),
            (ShowSystems::Hidden, Some(ListType::Compact), Type2),
            (ShowSystems::Shown, None, Type1WithSystem),
            (ShowSystems::Shown, Some(ListType::Full), Type1WithSystem),
            (ShowSystems::Shown, Some(ListType::Compact), Type2WithSystem),
        ];
        for (show_systems, list_type, expected) in cases {
            assert_eq!(GameListShape::from_flags(show_systems, list_type), expected);
        }
    }

    #[test]
    fn test_game_kind_accepts_both_spellings() {
        let wire = json!(["video-slot", "video-slots", "live", "crash"]);
        let kinds: Vec<GameKind> = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            kinds,
            vec![
                GameKind::VideoSlot,
                GameKind::VideoSlots,
                GameKind::Live,
                GameKind::Other("crash".to_string())
            ]
        );
        assert!(kinds[0].is_video_slot() && kinds[1].is_video_slot());
        assert_eq!(serde_json::to_value(&kinds).unwrap(), wire);
    }

    #[test]
    fn test_compact_list_with_system() {
        let value = json!({
            "2001": {
                "id": 2001, "n": "Dice Bonanza", "p": "softswiss", "s": "softswiss",
                "new": true, "cdn": 1, "fs": true, "fb": false, "d": true,
                "src": "softswiss/DiceBonanza", "c": "slots"
            }
        });
        let list = GameList::decode(GameListShape::Type2WithSystem, value).unwrap();
        assert_eq!(list.len(), 1);
        match list {
            GameList::Type2WithSystem(games) => {
                let game = &games["2001"];
                assert_eq!(game.c, "slots");
                assert_eq!(game.game.src, "softswiss/DiceBonanza");
                assert!(game.game.extra.is_empty());
            }
            other => panic!("unexpected shape {:?}", other.shape()),
        }
    }
}
