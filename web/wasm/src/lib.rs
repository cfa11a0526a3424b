use fieldjack::{
    Card, Game, GameObserver, GameOptions, GameState, Hand, Outcome, Phase, RoundResult, Side,
    Suit,
};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn start_new_game(&mut self) {
        self.game.start_new_game();
    }

    pub fn player_hit(&mut self, reserve_index: u32) -> Result<(), JsValue> {
        self.game
            .player_hit(reserve_index as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn player_stand(&mut self) -> Result<(), JsValue> {
        self.game.player_stand().map_err(js_err)
    }

    /// Runs the computer's move; the page schedules the call after its own delay.
    pub fn computer_play(&mut self) -> Result<(), JsValue> {
        self.game.computer_play().map(|_| ()).map_err(js_err)
    }

    pub fn on_state_changed(&mut self, callback: Function) {
        self.game.subscribe(JsCallback::StateChanged(callback));
    }

    pub fn on_outcome(&mut self, callback: Function) {
        self.game.subscribe(JsCallback::Outcome(callback));
    }

    pub fn cards_remaining(&self) -> u32 {
        self.game.cards_remaining() as u32
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.state()))
    }
}

enum JsCallback {
    StateChanged(Function),
    Outcome(Function),
}

impl GameObserver for JsCallback {
    fn state_changed(&mut self, state: &GameState) {
        if let Self::StateChanged(callback) = self {
            if let Ok(value) = to_js_value(&Snapshot::from(state)) {
                let _ = callback.call1(&JsValue::NULL, &value);
            }
        }
    }

    fn outcome(&mut self, result: &RoundResult) {
        if let Self::Outcome(callback) = self {
            if let Ok(value) = to_js_value(&JsResult::from(*result)) {
                let _ = callback.call1(&JsValue::NULL, &value);
            }
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    active: bool,
    turn: Option<&'static str>,
    player: JsHand,
    computer: JsHand,
    player_score: u32,
    computer_score: u32,
    result: Option<JsResult>,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let scores = state.scores();
        Self {
            phase: phase_to_str(state.phase()),
            active: state.is_active(),
            turn: state.turn().map(side_to_str),
            player: JsHand::from(state.player()),
            computer: JsHand::from(state.computer()),
            player_score: scores.player,
            computer_score: scores.computer,
            result: state.result().copied().map(JsResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
    red: bool,
}

#[derive(Serialize)]
struct JsHand {
    reserve: Vec<JsCard>,
    field: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    is_blackjack: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            reserve: hand.reserve().iter().copied().map(card_to_js).collect(),
            field: hand.field().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_blackjack: hand.is_blackjack(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsResult {
    outcome: &'static str,
    player_value: u8,
    computer_value: u8,
    player_points: u32,
    computer_points: u32,
}

impl From<RoundResult> for JsResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            player_value: result.player_value,
            computer_value: result.computer_value,
            player_points: result.player_points,
            computer_points: result.computer_points,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.to_string(),
        red: card.suit.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::ComputerTurn => "ComputerTurn",
        Phase::Resolved => "Resolved",
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Computer => "Computer",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "win",
        Outcome::Lose => "lose",
        Outcome::Draw => "draw",
        Outcome::Blackjack => "blackjack",
        Outcome::Burst => "burst",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
