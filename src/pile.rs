//! Card piles.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;

/// A side's pile of cards, played from the front and refilled at the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: VecDeque<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an empty pile with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the next card to be played without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the card most recently returned to the pile.
    #[must_use]
    pub fn back(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Removes and returns the front card.
    pub fn take_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Appends a card to the back of the pile.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Moves the front card to the back of the pile.
    ///
    /// Does nothing if the pile is empty.
    pub fn rotate(&mut self) {
        if let Some(card) = self.cards.pop_front() {
            self.cards.push_back(card);
        }
    }

    /// Returns the cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the cards from front to back as a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
