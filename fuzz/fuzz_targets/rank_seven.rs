#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use std::str;

use holdem_outs::core::{Card, CardIter, Rankable};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(cards) = Card::parse_many(s) {
            if cards.len() == 7 {
                let seven = cards.evaluate().unwrap();
                let five_max = CardIter::new(&cards, 5)
                    .map(|five| five.evaluate().unwrap())
                    .max()
                    .unwrap();
                assert_eq!(five_max, seven);
            }
        }
    }
});
