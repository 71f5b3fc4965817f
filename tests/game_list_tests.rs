mod common;

use common::{create_test_config, MockTransport};
use serde_json::{json, Value};
use spin_client::dto::*;
use spin_client::SpinApiClient;

fn type1_entry() -> Value {
    json!({
        "id": 1001,
        "name": "Dice Bonanza",
        "type": "video-slots",
        "category": "slots",
        "subcategory": "dice",
        "details": [],
        "new": false,
        "mobile": true,
        "id_hash": "softswiss/DiceBonanza",
        "ts": 1709287964,
        "id_hash_parent": "softswiss/DiceBonanza",
        "freerounds_supported": true,
        "featurebuy_supported": false,
        "has_jackpot": false,
        "play_for_fun_supported": true,
        "image": "https://cdn.spin.test/1001.png",
        "image_square": "https://cdn.spin.test/1001_sq.png",
        "image_portrait": "https://cdn.spin.test/1001_pt.png",
        "currency": "USD",
        "source": "softswiss",
        "use_at_own_risk": false
    })
}

fn type2_entry() -> Value {
    json!({
        "id": 1001,
        "n": "Dice Bonanza",
        "p": "softswiss",
        "s": "softswiss",
        "new": false,
        "cdn": 2,
        "fs": true,
        "fb": false,
        "d": true,
        "src": "softswiss/DiceBonanza"
    })
}

fn with_fields(mut entry: Value, extra: Value) -> Value {
    let target = entry.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        target.insert(key.clone(), value.clone());
    }
    entry
}

async fn fetch(
    response: Value,
    show_systems: ShowSystems,
    list_type: Option<ListType>,
) -> (GameList, Value) {
    let transport = MockTransport::replying(json!({"error": 0, "response": {"1001": response}}));
    let client = SpinApiClient::with_transport(create_test_config(), transport.clone());
    let list = client
        .get_game_list(show_systems, "USD", list_type, None)
        .await
        .unwrap();
    (list, transport.last_body())
}

#[tokio::test]
async fn test_plain_full_list() {
    let (list, body) = fetch(type1_entry(), ShowSystems::Hidden, Some(ListType::Full)).await;

    match list {
        GameList::Type1(games) => {
            let game = &games["1001"];
            assert_eq!(game.name, "Dice Bonanza");
            assert_eq!(game.kind, GameKind::VideoSlots);
            assert!(game.kind.is_video_slot());
        }
        other => panic!("unexpected shape {:?}", other.shape()),
    }
    assert_eq!(body["show_systems"], 0);
    assert_eq!(body["list_type"], 1);
}

#[tokio::test]
async fn test_full_list_with_systems() {
    let entry = with_fields(
        type1_entry(),
        json!({
            "system": "softswiss",
            "created_at": "2024-03-01 10:12:44",
            "provider": "bgaming",
            "provider_name": "BGaming"
        }),
    );
    let (list, body) = fetch(entry, ShowSystems::Shown, Some(ListType::Full)).await;

    match list {
        GameList::Type1WithSystem(games) => {
            let game = &games["1001"];
            assert_eq!(game.provider_name, "BGaming");
            assert_eq!(game.game.id, 1001);
        }
        other => panic!("unexpected shape {:?}", other.shape()),
    }
    assert_eq!(body["show_systems"], 1);
}

#[tokio::test]
async fn test_plain_compact_list() {
    let (list, body) = fetch(type2_entry(), ShowSystems::Hidden, Some(ListType::Compact)).await;

    match list {
        GameList::Type2(games) => assert_eq!(games["1001"].src, "softswiss/DiceBonanza"),
        other => panic!("unexpected shape {:?}", other.shape()),
    }
    assert_eq!(body["list_type"], 2);
}

#[tokio::test]
async fn test_compact_list_with_systems() {
    let entry = with_fields(type2_entry(), json!({"c": "slots"}));
    let (list, _) = fetch(entry, ShowSystems::Shown, Some(ListType::Compact)).await;

    match list {
        GameList::Type2WithSystem(games) => assert_eq!(games["1001"].c, "slots"),
        other => panic!("unexpected shape {:?}", other.shape()),
    }
}

#[tokio::test]
async fn test_absent_list_type_is_omitted_and_means_full() {
    let (list, body) = fetch(type1_entry(), ShowSystems::Hidden, None).await;

    assert_eq!(list.shape(), GameListShape::Type1);
    assert!(body.get("list_type").is_none());
    assert!(body.get("show_additional").is_none());
}

#[tokio::test]
async fn test_mismatched_entries_fail_to_decode() {
    let transport =
        MockTransport::replying(json!({"error": 0, "response": {"1001": type2_entry()}}));
    let client = SpinApiClient::with_transport(create_test_config(), transport);

    let err = client
        .get_game_list(ShowSystems::Hidden, "USD", Some(ListType::Full), Some(true))
        .await
        .unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_show_additional_is_forwarded() {
    let transport = MockTransport::replying(json!({"error": 0, "response": {}}));
    let client = SpinApiClient::with_transport(create_test_config(), transport.clone());

    let list = client
        .get_game_list(ShowSystems::Shown, "EUR", Some(ListType::Compact), Some(true))
        .await
        .unwrap();

    assert!(list.is_empty());
    assert_eq!(list.shape(), GameListShape::Type2WithSystem);
    let body = transport.last_body();
    assert_eq!(body["show_additional"], true);
    assert_eq!(body["currency"], "EUR");
}

#[tokio::test]
async fn test_entries_come_back_exactly_as_sent() {
    let entry = with_fields(
        type1_entry(),
        json!({"type": "crash", "additional": {"rtp": 96.5, "volatility": "high"}}),
    );
    let response = json!({"1001": entry});
    let transport = MockTransport::replying(json!({"error": 0, "response": response}));
    let client = SpinApiClient::with_transport(create_test_config(), transport.clone());

    let list = client
        .get_game_list(ShowSystems::Hidden, "USD", Some(ListType::Full), Some(true))
        .await
        .unwrap();

    match &list {
        GameList::Type1(games) => {
            let game = &games["1001"];
            assert_eq!(game.kind, GameKind::Other("crash".to_string()));
            assert_eq!(game.extra["additional"]["rtp"], 96.5);
        }
        other => panic!("unexpected shape {:?}", other.shape()),
    }
    assert_eq!(serde_json::to_value(&list).unwrap(), response);
    assert_eq!(transport.last_body()["show_additional"], true);
}

#[tokio::test]
async fn test_compact_entries_with_systems_come_back_exactly_as_sent() {
    let entry = with_fields(type2_entry(), json!({"c": "slots", "tags": ["hot"]}));
    let response = json!({"1001": entry});
    let transport = MockTransport::replying(json!({"error": 0, "response": response}));
    let client = SpinApiClient::with_transport(create_test_config(), transport);

    let list = client
        .get_game_list(ShowSystems::Shown, "USD", Some(ListType::Compact), Some(true))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&list).unwrap(), response);
}
