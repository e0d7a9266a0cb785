//! Hold'em Outs is a library for ranking Texas hold'em hands and for
//! working out which cards improve a hand and whether those improvements
//! can be trusted.
//!
//! It is not the fastest hand ranking. However it is clean well tested
//! code that reports the full structure of a hand: category, the values
//! that define it, kickers, and the five cards that make it.
//!
//! # Ranking
//!
//! ```
//! use holdem_outs::core::{Card, Category, Rankable};
//!
//! let cards = Card::parse_many("K♠K♦7♥7♣K♥2♠3♦").unwrap();
//! let hand = cards.evaluate().unwrap();
//! assert_eq!(Category::FullHouse, hand.category());
//! assert_eq!("Full House, Ks full of 7s", hand.label());
//! ```
//!
//! # Outs
//!
//! ```
//! use holdem_outs::holdem::{DrawKind, OutsConfig, Spot};
//!
//! let spot = Spot::parse("A♥K♥", "2♥7♥9♣", None).unwrap();
//! let outs = spot.classify(&OutsConfig::default()).unwrap();
//! assert_eq!(Some(DrawKind::OesdFlush), outs.draw_kind());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
