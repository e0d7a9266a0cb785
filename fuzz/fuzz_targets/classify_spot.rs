#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use holdem_outs::core::Card;
use holdem_outs::holdem::{OutsConfig, Spot};

fuzz_target!(|input: (Vec<Card>, Vec<Card>, Option<Vec<Card>>)| {
    let (hero, board, villain) = input;
    // Bad input has to come back as an error, never a panic.
    if let Ok(spot) = Spot::new(&hero, &board, villain.as_deref()) {
        let outs = spot.classify(&OutsConfig::default()).unwrap();
        let all = spot.effective_outs(&OutsConfig::default()).unwrap();
        for card in outs.all() {
            assert!(all.contains(card));
            assert!(!spot.dead_cards().contains(*card));
        }
    }
});
