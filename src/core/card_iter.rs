use super::Card;

/// Iterate every `num_cards` sized combination of a set of cards.
///
/// Useful for trying to find the best 5 card hand from 7 cards by
/// brute force, which is how the evaluator gets cross checked.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Set once every combination has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most offset that can still move forward.
        let n = self.possible_cards.len();
        let k = self.idx.len();
        match (0..k).rev().find(|&level| self.idx[level] < n - k + level) {
            Some(level) => {
                self.idx[level] += 1;
                for after in level + 1..k {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deck;

    #[test]
    fn test_iter_one() {
        let cards = Card::parse_many("2♠").unwrap();
        assert_eq!(1, CardIter::new(&cards, 1).count());
        for set in CardIter::new(&cards, 1) {
            assert_eq!(1, set.len());
        }
    }

    #[test]
    fn test_iter_two() {
        let cards = Card::parse_many("2♠3♠4♠").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for set in CardIter::new(&cards, 2) {
            assert_eq!(2, set.len());
            assert!(set[0] != set[1]);
        }
    }

    #[test]
    fn test_iter_five_of_seven() {
        let cards = Card::parse_many("A♠K♠Q♠J♠T♠9♠8♠").unwrap();
        assert_eq!(21, CardIter::new(&cards, 5).count());
    }

    #[test]
    fn test_iter_too_many() {
        let cards = Card::parse_many("2♠3♠").unwrap();
        assert_eq!(0, CardIter::new(&cards, 3).count());
    }

    #[test]
    fn test_iter_deck_pairs() {
        let deck: Vec<Card> = Deck::new().into_iter().collect();
        assert_eq!(1326, CardIter::new(&deck, 2).count());
    }
}
