//! CLI War example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{
    CARD_BACK_IMAGE_KEY, Card, Game, GameError, GameOptions, Leaderboard, RoundError,
    RoundOutcome, RoundReport, Side, Suit,
};

fn main() {
    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = Game::new(options, seed);
    let leaderboard = Leaderboard::new();

    print_status(&game, &leaderboard, None);

    loop {
        match prompt_line("[d]eal, [e]nd game, [l]eaderboard, [q]uit: ").as_str() {
            "d" | "deal" => match game.deal_next_round() {
                Ok(report) => print_status(&game, &leaderboard, Some(&report)),
                Err(GameError::Round(RoundError::RoundLimitReached)) => {
                    println!("All {} rounds played. End the game to record it.", options.max_rounds);
                }
                Err(GameError::Round(RoundError::EmptyPile(side))) => {
                    println!("The {side} has run out of cards. End the game to record it.");
                }
                Err(err) => println!("Deal error: {err}"),
            },
            "e" | "end" => {
                let entry = game.end_game(&leaderboard);
                println!("\n{entry}\n");
                print_status(&game, &leaderboard, None);
            }
            "l" | "leaderboard" => print_leaderboard(&leaderboard),
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_status(game: &Game, leaderboard: &Leaderboard, report: Option<&RoundReport>) {
    println!(
        "\nGame: {} Round: {} / {}",
        leaderboard.next_game_number(),
        game.rounds_played(),
        game.options.max_rounds
    );

    let (computer_card, player_card) = report.map_or_else(
        || (CARD_BACK_IMAGE_KEY.to_string(), CARD_BACK_IMAGE_KEY.to_string()),
        |report| {
            (
                format_card(&report.computer_card),
                format_card(&report.player_card),
            )
        },
    );

    println!(
        "Computer Cards: {:>2}  {computer_card}",
        game.computer_count()
    );
    println!("Player Cards:   {:>2}  {player_card}", game.player_count());

    if let Some(report) = report {
        match report.outcome {
            RoundOutcome::Capture {
                winner: Side::Player,
            } => println!("You take both cards."),
            RoundOutcome::Capture {
                winner: Side::Computer,
            } => println!("The computer takes both cards."),
            RoundOutcome::Standoff => println!("Standoff. Both cards go back."),
        }
    }
}

fn print_leaderboard(leaderboard: &Leaderboard) {
    let entries = leaderboard.entries();
    if entries.is_empty() {
        println!("No games recorded yet.");
        return;
    }

    for entry in entries {
        println!("--------------------------------------");
        println!("{entry}");
    }
    println!("--------------------------------------");
}

fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    format!("{} ({})", colorize(&card.image_key(), color_code), card)
}
