//! Game catalog helpers: image lookup and search filtering.

use crate::config::DEFAULT_GAME_IMAGE;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Keys are lower-cased game names as served by the backend.
static GAME_IMAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("valorant", "/assets/games/valorant.png"),
        ("csgo", "/assets/games/cs2.png"),
        ("apex legends", "/assets/games/apex-legends.png"),
        ("overwatch", "/assets/games/overwatch.png"),
        ("rainbow six siege", "/assets/games/rainbow-6-siege.png"),
        ("destiny 2", "/assets/games/destiny2.png"),
        ("call of duty", "/assets/games/call-of-duty-warzone.png"),
        ("pubg", "/assets/games/pubg.png"),
        ("battlefield", "/assets/games/battlefield-6.png"),
        ("fortnite", "/assets/games/fortnite.png"),
    ])
});

/// Resolve the image asset for a game name, case-insensitively.
///
/// Unknown names fall back to the placeholder image.
///
/// # Examples
/// ```
/// use fps_sens_calc::catalog::game_image;
/// assert_eq!(game_image("VALORANT"), "/assets/games/valorant.png");
/// assert_eq!(game_image("Tetris"), "/assets/games/default.png");
/// ```
pub fn game_image(name: &str) -> &'static str {
    GAME_IMAGES
        .get(name.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_GAME_IMAGE)
}

/// Return the games whose name contains `search`, ignoring case.
/// Catalog order is preserved; an empty search matches everything.
pub fn filter_games<'a>(games: &'a [String], search: &str) -> Vec<&'a str> {
    let needle = search.to_lowercase();
    games
        .iter()
        .filter(|game| game.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// First two catalog entries, used to seed the source and target selections.
/// Returns empty selections when the catalog holds fewer than two games.
pub fn default_pair(games: &[String]) -> (String, String) {
    match games {
        [first, second, ..] => (first.clone(), second.clone()),
        _ => (String::new(), String::new()),
    }
}
