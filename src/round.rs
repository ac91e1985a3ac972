//! Round resolution between two piles.

use core::cmp::Ordering;

use crate::error::RoundError;
use crate::game::Side;
use crate::pile::Pile;
use crate::result::RoundOutcome;

/// Plays the front cards of both piles against each other.
///
/// The higher rank captures: the loser's card goes to the back of the
/// winner's pile, followed by the winner's own card. Equal ranks are a
/// standoff and each card goes to the back of its own pile. The total number
/// of cards never changes.
///
/// # Errors
///
/// Returns [`RoundError::EmptyPile`] if either pile is empty. Neither pile is
/// modified in that case.
pub fn play_one_round(player: &mut Pile, computer: &mut Pile) -> Result<RoundOutcome, RoundError> {
    let player_rank = player.front().ok_or(RoundError::EmptyPile(Side::Player))?.rank();
    let computer_rank = computer
        .front()
        .ok_or(RoundError::EmptyPile(Side::Computer))?
        .rank();

    let outcome = match player_rank.cmp(&computer_rank) {
        Ordering::Greater => {
            capture(player, computer);
            RoundOutcome::Capture {
                winner: Side::Player,
            }
        }
        Ordering::Less => {
            capture(computer, player);
            RoundOutcome::Capture {
                winner: Side::Computer,
            }
        }
        Ordering::Equal => {
            player.rotate();
            computer.rotate();
            RoundOutcome::Standoff
        }
    };

    Ok(outcome)
}

/// Moves the loser's front card, then the winner's, to the back of the
/// winner's pile. Both piles are known to be non-empty.
fn capture(winner: &mut Pile, loser: &mut Pile) {
    if let Some(card) = loser.take_front() {
        winner.push_back(card);
    }
    winner.rotate();
}
