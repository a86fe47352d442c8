//! Pointercrate API payload fixtures.
//!
//! Shapes follow the public `api/v1` and `api/v2` responses closely enough for the
//! bot's deserializers; optional fields are filled with realistic defaults.

use serde_json::{json, Value};

/// Default base URL used when building `Links` headers.
pub const BASE_URL: &str = "https://pointercrate.com/";

/// A player reference as embedded in demons and records.
pub fn player_ref(id: u64, name: &str, banned: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "banned": banned,
    })
}

/// A listed demon at `position`.
///
/// Publisher and verifier are distinct players; the video points to YouTube so
/// thumbnail derivation can be exercised.
pub fn demon(position: u32, name: &str) -> Value {
    json!({
        "id": 1000 + position,
        "position": position,
        "name": name,
        "requirement": 50,
        "video": format!("https://www.youtube.com/watch?v=vid{position}"),
        "thumbnail": format!("https://i.ytimg.com/vi/vid{position}/mqdefault.jpg"),
        "level_id": 80000000 + position,
        "publisher": player_ref(10, "Publisher", false),
        "verifier": player_ref(11, "Verifier", false),
    })
}

/// A ranked player at `rank` with an optional nationality.
pub fn ranked_player(rank: u32, name: &str, score: f64, country: Option<(&str, &str)>) -> Value {
    let nationality = country.map(|(code, nation)| {
        json!({
            "country_code": code,
            "nation": nation,
            "subdivision": null,
        })
    });

    json!({
        "id": 5000 + rank,
        "name": name,
        "rank": rank,
        "score": score,
        "banned": false,
        "nationality": nationality,
    })
}

/// An approved record by `player_name` on the demon at `position`.
pub fn record(id: u64, player_name: &str, position: u32, demon_name: &str, progress: u8) -> Value {
    json!({
        "id": id,
        "progress": progress,
        "status": "approved",
        "video": format!("https://youtu.be/rec{id}"),
        "player": player_ref(77, player_name, false),
        "demon": {
            "id": 1000 + position,
            "name": demon_name,
            "position": position,
        },
    })
}

/// A nationality ranking row.
pub fn nation_score(rank: u32, code: &str, nation: &str, score: f64) -> Value {
    json!({
        "rank": rank,
        "country_code": code,
        "nation": nation,
        "score": score,
    })
}

/// A page of `count` ranked players starting after `after`.
pub fn ranking_page(after: u32, count: u32) -> Value {
    Value::Array(
        (1..=count)
            .map(|i| {
                let rank = after + i;
                ranked_player(rank, &format!("Player {rank}"), 1000.0 - rank as f64, None)
            })
            .collect(),
    )
}

/// A Pointercrate error body.
pub fn error_body(code: u32, message: &str) -> Value {
    json!({
        "code": code,
        "message": message,
        "data": {},
    })
}

/// Renders a `Links` header the way Pointercrate does.
///
/// # Arguments
/// - `next` - Relative URL of the next page, if any
/// - `prev` - Relative URL of the previous page, if any
pub fn links_header(next: Option<&str>, prev: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(next) = next {
        parts.push(format!("<{next}>; rel=next"));
    }
    if let Some(prev) = prev {
        parts.push(format!("<{prev}>; rel=prev"));
    }
    parts.join(",")
}
