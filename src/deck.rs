//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::pile::Pile;

/// Returns the 52 cards in canonical order.
///
/// Suits run Clubs, Diamonds, Hearts, Spades; within each suit ranks run
/// Ace through King.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns a random permutation of `deck`, leaving the input untouched.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}

/// Returns a freshly shuffled 52-card deck.
#[must_use]
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(&ordered_deck(), rng)
}

/// Deals `deck` alternately into a player pile and a computer pile.
///
/// The first card goes to the player, the second to the computer, and so on.
///
/// # Errors
///
/// Returns [`DeckError::InvalidDeckSize`] if the deck has an odd number of
/// cards.
pub fn split_into_two_piles(deck: &[Card]) -> Result<(Pile, Pile), DeckError> {
    if deck.len() % 2 != 0 {
        return Err(DeckError::InvalidDeckSize { len: deck.len() });
    }

    let half = deck.len() / 2;
    let mut player = Pile::with_capacity(half);
    let mut computer = Pile::with_capacity(half);

    for pair in deck.chunks_exact(2) {
        player.push_back(pair[0]);
        computer.push_back(pair[1]);
    }

    Ok((player, computer))
}
