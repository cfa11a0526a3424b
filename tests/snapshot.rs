//! Serialized snapshots (requires the `serde` feature).

#![cfg(feature = "serde")]

use fieldjack::{Game, GameOptions, GameState, Phase};

#[test]
fn state_snapshot_survives_json() {
    let mut game = Game::new(GameOptions::default(), 17);
    game.player_hit(0).unwrap();

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.state());
    assert_eq!(restored.phase(), Phase::ComputerTurn);
}

#[test]
fn snapshot_names_phase_and_cards() {
    let game = Game::new(GameOptions::default(), 17);
    let value = serde_json::to_value(game.state()).unwrap();

    assert_eq!(value["phase"], "PlayerTurn");
    assert_eq!(value["player"]["reserve"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["scores"]["player"], 0);
}
