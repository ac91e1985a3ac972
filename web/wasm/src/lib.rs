use serde::Serialize;
use wasm_bindgen::prelude::*;
use warrs::{
    CARD_BACK_IMAGE_KEY, Card, Game, GameOptions, GameState, Leaderboard, LeaderboardEntry,
    RoundOutcome, RoundReport, Side, Suit, Winner,
};

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    leaderboard: Leaderboard,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            leaderboard: Leaderboard::new(),
        }
    }

    /// Starts a new session. The leaderboard is kept.
    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start_new_game(&self) -> Result<JsValue, JsValue> {
        let (player, computer) = self.game.start_new_game().map_err(js_err)?;
        let piles = JsPiles {
            player: player.into_iter().map(card_to_js).collect(),
            computer: computer.into_iter().map(card_to_js).collect(),
        };
        to_js_value(&piles)
    }

    pub fn deal_next_round(&self) -> Result<JsValue, JsValue> {
        let report = self.game.deal_next_round().map_err(js_err)?;
        to_js_value(&JsRoundReport::from(report))
    }

    pub fn end_game(&self) -> Result<JsValue, JsValue> {
        let entry = self.game.end_game(&self.leaderboard);
        to_js_value(&JsLeaderboardEntry::from(entry))
    }

    pub fn leaderboard(&self) -> Result<JsValue, JsValue> {
        let entries: Vec<JsLeaderboardEntry> = self
            .leaderboard
            .entries()
            .into_iter()
            .map(JsLeaderboardEntry::from)
            .collect();
        to_js_value(&entries)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let (player_front, computer_front) = self.game.front_cards();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            game_number: self.leaderboard.next_game_number(),
            rounds_played: self.game.rounds_played(),
            max_rounds: self.game.options.max_rounds,
            player_count: self.game.player_count() as u32,
            computer_count: self.game.computer_count() as u32,
            player_front: player_front.map(card_to_js),
            computer_front: computer_front.map(card_to_js),
            card_back: CARD_BACK_IMAGE_KEY,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    game_number: u32,
    rounds_played: u32,
    max_rounds: u32,
    player_count: u32,
    computer_count: u32,
    player_front: Option<JsCard>,
    computer_front: Option<JsCard>,
    card_back: &'static str,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    image_key: String,
}

#[derive(Serialize)]
struct JsPiles {
    player: Vec<JsCard>,
    computer: Vec<JsCard>,
}

#[derive(Serialize)]
struct JsRoundReport {
    round: u32,
    player_card: JsCard,
    computer_card: JsCard,
    outcome: &'static str,
    player_count: u32,
    computer_count: u32,
}

impl From<RoundReport> for JsRoundReport {
    fn from(report: RoundReport) -> Self {
        Self {
            round: report.round,
            player_card: card_to_js(report.player_card),
            computer_card: card_to_js(report.computer_card),
            outcome: outcome_to_str(report.outcome),
            player_count: report.player_count as u32,
            computer_count: report.computer_count as u32,
        }
    }
}

#[derive(Serialize)]
struct JsLeaderboardEntry {
    game_number: u32,
    rounds_played: u32,
    player_cards_remaining: u32,
    computer_cards_remaining: u32,
    winner: &'static str,
}

impl From<LeaderboardEntry> for JsLeaderboardEntry {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            game_number: entry.game_number(),
            rounds_played: entry.rounds_played(),
            player_cards_remaining: entry.player_cards_remaining() as u32,
            computer_cards_remaining: entry.computer_cards_remaining() as u32,
            winner: winner_to_str(entry.winner()),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank().value(),
        image_key: card.image_key(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotDealt => "NotDealt",
        GameState::InProgress => "InProgress",
        GameState::Finished => "Finished",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Capture {
            winner: Side::Player,
        } => "PlayerCaptures",
        RoundOutcome::Capture {
            winner: Side::Computer,
        } => "ComputerCaptures",
        RoundOutcome::Standoff => "Standoff",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Draw => "Draw",
        Winner::PlayerWins => "PlayerWins",
        Winner::ComputerWins => "ComputerWins",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
