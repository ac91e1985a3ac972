//! Game integration tests.

use std::collections::HashSet;

use warrs::{
    Card, DECK_SIZE, DeckError, Game, GameError, GameOptions, GameState, Leaderboard, Pile, Rank,
    RoundError, RoundOutcome, Side, Suit, Winner, ordered_deck, split_into_two_piles,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set_piles(game: &Game, player: &[Card], computer: &[Card]) {
    *game.player_pile.lock() = player.iter().copied().collect::<Pile>();
    *game.computer_pile.lock() = computer.iter().copied().collect::<Pile>();
    *game.state.lock() = GameState::InProgress;
}

#[test]
fn ordered_deck_split_alternates_between_sides() {
    let deck = ordered_deck();
    let (player, computer) = split_into_two_piles(&deck).unwrap();

    assert_eq!(player.len(), 26);
    assert_eq!(computer.len(), 26);
    assert_eq!(player.front(), Some(&deck[0]));
    assert_eq!(computer.front(), Some(&deck[1]));
    assert_eq!(player.to_vec()[1], deck[2]);
    assert_eq!(computer.back(), Some(&deck[51]));
}

#[test]
fn start_new_game_deals_whole_deck() {
    let game = Game::new(GameOptions::default(), 9);
    let (player, computer) = game.start_new_game().unwrap();

    assert_eq!(player.len(), 26);
    assert_eq!(computer.len(), 26);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.player_cards(), player);
    assert_eq!(game.computer_cards(), computer);

    let dealt: HashSet<Card> = player.iter().chain(computer.iter()).copied().collect();
    let canonical: HashSet<Card> = ordered_deck().into_iter().collect();
    assert_eq!(dealt.len(), DECK_SIZE);
    assert_eq!(dealt, canonical);
}

#[test]
fn same_seed_deals_same_piles() {
    let first = Game::new(GameOptions::default(), 1234);
    let second = Game::new(GameOptions::default(), 1234);

    assert_eq!(
        first.start_new_game().unwrap(),
        second.start_new_game().unwrap()
    );
}

#[test]
fn first_deal_starts_the_game() {
    let game = Game::new(GameOptions::default(), 5);
    assert_eq!(game.state(), GameState::NotDealt);

    let report = game.deal_next_round().unwrap();
    assert_eq!(report.round, 1);
    assert_eq!(report.player_count + report.computer_count, DECK_SIZE);
    assert_eq!(report.player_image_key, report.player_card.image_key());
    assert_eq!(report.computer_image_key, report.computer_card.image_key());

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn standoff_keeps_pile_sizes() {
    let game = Game::new(GameOptions::default(), 1);
    set_piles(
        &game,
        &[card(Rank::Five, Suit::Clubs)],
        &[card(Rank::Five, Suit::Hearts)],
    );

    let outcome = game.play_round().unwrap();

    assert_eq!(outcome, RoundOutcome::Standoff);
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.computer_count(), 1);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn higher_card_captures() {
    let game = Game::new(GameOptions::default(), 1);
    let king = card(Rank::King, Suit::Clubs);
    let two = card(Rank::Two, Suit::Hearts);
    set_piles(
        &game,
        &[king, card(Rank::Three, Suit::Diamonds)],
        &[two, card(Rank::Four, Suit::Spades)],
    );

    let report = game.deal_next_round().unwrap();

    assert_eq!(report.outcome.winner(), Some(Side::Player));
    assert_eq!(report.player_card, king);
    assert_eq!(report.computer_card, two);
    assert_eq!(report.player_image_key, "13C");
    assert_eq!(report.computer_image_key, "2H");
    assert_eq!(report.player_count, 3);
    assert_eq!(report.computer_count, 1);
    assert_eq!(&game.player_cards()[1..], &[two, king]);
}

#[test]
fn exhausted_pile_finishes_game() {
    let game = Game::new(GameOptions::default(), 1);
    set_piles(
        &game,
        &[card(Rank::Ace, Suit::Spades)],
        &[card(Rank::Queen, Suit::Diamonds)],
    );

    let outcome = game.play_round().unwrap();
    assert_eq!(outcome, RoundOutcome::Capture { winner: Side::Computer });
    assert_eq!(game.state(), GameState::Finished);

    assert_eq!(
        game.deal_next_round().unwrap_err(),
        GameError::Round(RoundError::EmptyPile(Side::Player))
    );
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.computer_count(), 2);
}

#[test]
fn round_limit_stops_dealing() {
    let game = Game::new(GameOptions::default(), 77);

    for round in 1..=10 {
        let report = game.deal_next_round().unwrap();
        assert_eq!(report.round, round);
        assert_eq!(report.player_count + report.computer_count, DECK_SIZE);
    }

    assert_eq!(game.state(), GameState::Finished);
    let counts = (game.player_count(), game.computer_count());

    assert_eq!(
        game.deal_next_round().unwrap_err(),
        GameError::Round(RoundError::RoundLimitReached)
    );
    assert_eq!(game.rounds_played(), 10);
    assert_eq!((game.player_count(), game.computer_count()), counts);
}

#[test]
fn unlimited_rounds_run_past_default_limit() {
    let game = Game::new(GameOptions::default().with_max_rounds(0), 3);
    let deck = ordered_deck();
    // Every round between equal ranks is a standoff.
    set_piles(&game, &deck[..13], &deck[13..26]);

    for _ in 0..25 {
        assert_eq!(game.play_round().unwrap(), RoundOutcome::Standoff);
    }
    assert_eq!(game.rounds_played(), 25);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn play_round_requires_dealt_game() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn end_game_records_and_resets() {
    let leaderboard = Leaderboard::new();
    let game = Game::new(GameOptions::default(), 21);

    for _ in 0..4 {
        game.deal_next_round().unwrap();
    }
    let player_count = game.player_count();
    let computer_count = game.computer_count();

    let entry = game.end_game(&leaderboard);
    assert_eq!(entry.game_number(), 1);
    assert_eq!(entry.rounds_played(), 4);
    assert_eq!(entry.player_cards_remaining(), player_count);
    assert_eq!(entry.computer_cards_remaining(), computer_count);
    assert_eq!(
        entry.winner(),
        Winner::from_counts(player_count, computer_count)
    );

    assert_eq!(game.state(), GameState::NotDealt);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.player_count(), 0);
    assert_eq!(game.computer_count(), 0);
    assert_eq!(game.front_cards(), (None, None));
    assert_eq!(leaderboard.next_game_number(), 2);

    game.deal_next_round().unwrap();
    let second = game.end_game(&leaderboard);
    assert_eq!(second.game_number(), 2);
    assert_eq!(second.rounds_played(), 1);

    let entries = leaderboard.entries();
    assert_eq!(entries, vec![entry, second]);
}

#[test]
fn ending_undealt_game_records_draw() {
    let leaderboard = Leaderboard::new();
    let game = Game::new(GameOptions::default(), 1);

    let entry = game.end_game(&leaderboard);

    assert_eq!(entry.rounds_played(), 0);
    assert_eq!(entry.player_cards_remaining(), 0);
    assert_eq!(entry.computer_cards_remaining(), 0);
    assert_eq!(entry.winner(), Winner::Draw);
}

#[test]
fn sessions_share_a_leaderboard() {
    let leaderboard = Leaderboard::new();
    let first = Game::new(GameOptions::default(), 1);
    let second = Game::new(GameOptions::default(), 2);

    first.deal_next_round().unwrap();
    second.deal_next_round().unwrap();
    first.end_game(&leaderboard);
    second.end_game(&leaderboard);
    first.end_game(&leaderboard);

    let numbers: Vec<u32> = leaderboard
        .entries()
        .iter()
        .map(|entry| entry.game_number())
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(leaderboard.next_game_number(), 4);
}

#[test]
fn start_new_game_redeals_without_recording() {
    let leaderboard = Leaderboard::new();
    let game = Game::new(GameOptions::default(), 13);

    for _ in 0..3 {
        game.deal_next_round().unwrap();
    }
    assert_eq!(game.rounds_played(), 3);

    let (player, computer) = game.start_new_game().unwrap();

    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(player.len(), 26);
    assert_eq!(computer.len(), 26);
    assert_eq!(game.player_count(), 26);
    assert_eq!(game.computer_count(), 26);
    assert!(leaderboard.is_empty());
    assert_eq!(leaderboard.next_game_number(), 1);
}

#[test]
fn start_new_game_recovers_finished_game() {
    let game = Game::new(GameOptions::default(), 8);
    set_piles(
        &game,
        &[card(Rank::Two, Suit::Clubs)],
        &[card(Rank::Jack, Suit::Spades)],
    );
    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::Finished);

    game.start_new_game().unwrap();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.player_count() + game.computer_count(), DECK_SIZE);
    assert_eq!(game.deal_next_round().unwrap().round, 1);
}

#[test]
fn errors_display_messages() {
    assert_eq!(
        RoundError::EmptyPile(Side::Player).to_string(),
        "the player pile is empty"
    );
    assert_eq!(
        GameError::from(DeckError::InvalidDeckSize { len: 51 }).to_string(),
        "cannot split a deck of 51 cards into two equal piles"
    );
}
