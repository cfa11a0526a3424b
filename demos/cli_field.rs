//! CLI field blackjack demo.
//!
//! Set `FIELDJACK_DELAY_MS` to change how long the computer "thinks"
//! (default 1000) and `RUST_LOG=debug` to watch every move.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fieldjack::{Card, Game, GameObserver, GameOptions, Hand, Outcome, RoundResult, Side};

struct OutcomePrinter;

impl GameObserver for OutcomePrinter {
    fn outcome(&mut self, result: &RoundResult) {
        let text = match result.outcome {
            Outcome::Blackjack => colorize("Blackjack!", "32"),
            Outcome::Win => colorize("You win!", "32"),
            Outcome::Lose => colorize("You lose...", "31"),
            Outcome::Draw => colorize("Draw.", "33"),
            Outcome::Burst => colorize("Burst!", "31"),
        };
        println!(
            "\n{text} ({} vs {})",
            result.player_value, result.computer_value
        );
    }
}

fn main() {
    env_logger::init();
    println!("Field blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let delay = std::env::var("FIELDJACK_DELAY_MS")
        .ok()
        .and_then(|value| value.parse().ok())
        .map_or(Duration::from_secs(1), Duration::from_millis);

    let mut game = Game::new(GameOptions::default(), seed);
    game.subscribe(OutcomePrinter);

    loop {
        while game.turn() == Some(Side::Player) {
            print_table(&game);
            println!("Actions: [0-4] play that reserve card  [s]tand  [n]ew game  [q]uit");

            let action = prompt_line("Action: ");
            let result = match action.as_str() {
                "s" | "stand" => game.player_stand(),
                "n" | "new" => {
                    game.start_new_game();
                    Ok(())
                }
                "q" | "quit" => return,
                input => match input.parse::<usize>() {
                    Ok(index) => game.player_hit(index).map(|_| ()),
                    Err(_) => {
                        println!("Unknown action.");
                        continue;
                    }
                },
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while game.turn() == Some(Side::Computer) {
            println!("Computer's turn...");
            thread::sleep(delay);
            match game.computer_play() {
                Ok(Some(card)) => println!("Computer plays {}", format_card(&card)),
                Ok(None) => {}
                Err(err) => println!("Computer error: {err}"),
            }
        }

        if !game.is_active() {
            print_table(&game);
            let scores = game.scores();
            println!("Score: you {} - {} computer", scores.player, scores.computer);

            match prompt_line("Play again? (y/n): ").as_str() {
                "n" | "no" | "q" | "quit" => {
                    println!("Goodbye.");
                    return;
                }
                _ => game.start_new_game(),
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // Closed stdin quits.
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let computer = game.computer();
    println!(
        "\nComputer field: {} (value {})",
        format_cards(computer.field()),
        computer.value()
    );

    let player = game.player();
    println!(
        "Your field:     {} (value {})",
        format_cards(player.field()),
        player.value()
    );
    println!("Your reserve:   {}", format_reserve(player));
    println!();
}

fn format_reserve(hand: &Hand) -> String {
    hand.reserve()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{}", format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
