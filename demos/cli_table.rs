//! CLI card-table example.
//!
//! Left-click and right-click of a pointer front end map to the `d` (draw)
//! and `f` (flip) commands here.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{DealtCard, Suit, Table, TableOptions};

fn main() {
    println!("Card table CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let table = Table::new(options, seed);

    loop {
        print_table(&table);

        println!("Commands: [d]raw [f <id>]lip [x <id>]discard [r]eset [q]uit");
        let input = prompt_line("Command: ");
        let mut parts = input.split_whitespace();

        match parts.next() {
            Some("d" | "draw") => match table.draw() {
                Ok(id) => println!("Drew card {id}."),
                Err(err) => println!("Draw error: {err}"),
            },
            Some("f" | "flip") => match parse_id(parts.next()) {
                Some(id) => match table.flip(id) {
                    Some(true) => println!("Card {id} is now face up."),
                    Some(false) => println!("Card {id} is now face down."),
                    None => println!("No card with id {id} on the table."),
                },
                None => println!("Usage: f <id>"),
            },
            Some("x" | "discard") => match parse_id(parts.next()) {
                Some(id) => match table.discard(id) {
                    Some(card) => println!("Discarded {}.", card.identity()),
                    None => println!("No card with id {id} on the table."),
                },
                None => println!("Usage: x <id>"),
            },
            Some("r" | "reset") => {
                table.reset();
                println!("Deck gathered and reshuffled.");
            }
            Some("q" | "quit") => {
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

fn parse_id(token: Option<&str>) -> Option<u8> {
    token?.parse().ok()
}

fn print_table(table: &Table) {
    let remaining = table.remaining();
    println!(
        "\nDeck: {} ({remaining} cards remaining)",
        deck_tier(remaining)
    );

    let dealt = table.dealt_cards();
    if dealt.is_empty() {
        println!("Table is empty.");
        return;
    }

    for (id, card) in dealt {
        println!("Card {id}: {}", format_dealt(&card));
    }
    println!();
}

/// Stack glyph tiered by how many cards remain.
fn deck_tier(remaining: usize) -> &'static str {
    match remaining {
        0 => "___",
        1..=13 => "[=]",
        14..=31 => "[==]",
        _ => "[===]",
    }
}

fn format_dealt(card: &DealtCard) -> String {
    if !card.is_face_up() {
        return colorize("??", "90");
    }
    format_card(card)
}

fn format_card(card: &DealtCard) -> String {
    let identity = card.identity();
    let color_code = match identity.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let rank = identity.rank.label();
    let colored_rank = if identity.rank.is_face() {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    let colored_suit = colorize(identity.suit.label(), color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
