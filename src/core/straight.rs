use super::Value;

/// Five values in a row. The wheel is stored ace first
/// (`A 2 3 4 5`) and plays as a five high straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Straight {
    values: [Value; 5],
}

impl Straight {
    /// The values of the run, lowest slot first.
    pub fn values(&self) -> [Value; 5] {
        self.values
    }

    /// The card the straight is named by. For the wheel that's the five,
    /// not the ace.
    pub fn high(&self) -> Value {
        self.values[4]
    }

    pub fn is_wheel(&self) -> bool {
        self.high() == Value::Five
    }

    /// `T J Q K A`
    pub fn is_broadway(&self) -> bool {
        self.high() == Value::Ace
    }
}

/// Find the strongest run of five consecutive values.
///
/// Duplicates are ignored. An ace also counts as the low card below the
/// deuce so the wheel can be made, but a wheel is always the weakest
/// straight. The same detector is used for straights and for straight
/// flushes; the only difference is whether the values passed in were
/// first restricted to one suit.
///
/// # Examples
///
/// ```
/// use holdem_outs::core::{Value, find_straight};
///
/// let wheel = find_straight(&[
///     Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five, Value::Nine,
/// ]).unwrap();
/// assert_eq!(Value::Five, wheel.high());
/// assert_eq!(Value::Ace, wheel.values()[0]);
///
/// assert!(find_straight(&[Value::Two, Value::Three, Value::Four, Value::Five]).is_none());
/// ```
pub fn find_straight(values: &[Value]) -> Option<Straight> {
    // Bit 0 is the ace playing low, bit v + 1 is value v.
    let mut run_set: u16 = 0;
    for v in values {
        run_set |= 1 << (v.index() + 1);
        if *v == Value::Ace {
            run_set |= 1;
        }
    }

    // Highest straight first, so the first hit wins.
    (4..=13u8).rev().find_map(|top| {
        let window = 0b1_1111 << (top - 4);
        if run_set & window == window {
            let mut run = [Value::Ace; 5];
            for (slot, bit) in run.iter_mut().zip(top - 4..=top) {
                *slot = if bit == 0 {
                    Value::Ace
                } else {
                    Value::from_u8(bit - 1)
                };
            }
            Some(Straight { values: run })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(s: &str) -> Vec<Value> {
        s.chars().filter_map(Value::from_char).collect()
    }

    #[test]
    fn test_wheel() {
        let straight = find_straight(&values("A23459")).unwrap();
        assert_eq!(values("A2345"), straight.values().to_vec());
        assert_eq!(Value::Five, straight.high());
        assert!(straight.is_wheel());
        assert!(!straight.is_broadway());
    }

    #[test]
    fn test_wheel_weaker_than_six_high() {
        let wheel = find_straight(&values("A2345")).unwrap();
        let six_high = find_straight(&values("23456")).unwrap();
        assert!(wheel.high() < six_high.high());
        assert_eq!(Value::Six, six_high.high());
    }

    #[test]
    fn test_six_high_beats_wheel_in_same_set() {
        // A 2 3 4 5 6 has both the wheel and a six high run.
        let straight = find_straight(&values("A23456")).unwrap();
        assert_eq!(values("23456"), straight.values().to_vec());
    }

    #[test]
    fn test_picks_highest_run() {
        let straight = find_straight(&values("3456789")).unwrap();
        assert_eq!(values("56789"), straight.values().to_vec());
    }

    #[test]
    fn test_broadway() {
        let straight = find_straight(&values("TJQKA2")).unwrap();
        assert_eq!(values("TJQKA"), straight.values().to_vec());
        assert!(straight.is_broadway());
    }

    #[test]
    fn test_duplicates_ignored() {
        let straight = find_straight(&values("8899TTJJQ")).unwrap();
        assert_eq!(Value::Queen, straight.high());
    }

    #[test]
    fn test_no_wrap_around() {
        assert!(find_straight(&values("QKA23")).is_none());
    }

    #[test]
    fn test_gap() {
        assert!(find_straight(&values("2345789")).is_none());
        assert!(find_straight(&[]).is_none());
    }
}
