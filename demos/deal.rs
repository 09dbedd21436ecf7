//! Deals a five-card hand and prints its best ranking.

use std::time::{SystemTime, UNIX_EPOCH};

use handrank::{Deck, EvalOptions, Hand, MAX_HAND_SIZE};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);
    let mut hand = Hand::new();

    for _ in 0..MAX_HAND_SIZE {
        let card = match deck.draw() {
            Ok(card) => card,
            Err(err) => {
                println!("Draw error: {err}");
                return;
            }
        };
        if let Err(err) = hand.add_card(card) {
            println!("Deal error: {err}");
            return;
        }
    }

    for card in hand.cards() {
        println!("{card}");
    }

    let options = EvalOptions::default().with_wheel(true);
    let best = hand.best_hand_with(&options);
    if best.is_empty() {
        println!("Nothing");
    } else {
        for category in best {
            println!("{category}");
        }
    }
}
