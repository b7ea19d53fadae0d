//! Dice hands and holds
//!
//! A `Hand` is a validated collection of die faces. A `Hold` is the canonical
//! (sorted) form of a sub-multiset of a hand.

use std::fmt;

/// Error type for invalid hands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    NoSides,
    InvalidFace(String),
    FaceOutOfRange { face: u8, sides: u8 },
    TooManyDice { len: usize, max: usize },
    TooManySides { sides: u8, max: u8 },
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSides => write!(f, "Dice must have at least one side"),
            Self::InvalidFace(token) => write!(f, "Invalid die face '{token}'"),
            Self::FaceOutOfRange { face, sides } => {
                write!(f, "Die face {face} is outside 1..={sides}")
            }
            Self::TooManyDice { len, max } => {
                write!(f, "Hand has {len} dice, limit is {max}")
            }
            Self::TooManySides { sides, max } => {
                write!(f, "Dice have {sides} sides, limit is {max}")
            }
        }
    }
}

impl std::error::Error for HandError {}

/// A hand of dice, each face within `1..=num_die_sides`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    dice: Vec<u8>,
    num_die_sides: u8,
}

impl Hand {
    /// Create a hand, validating every face against the die-side count
    ///
    /// # Errors
    /// Returns `HandError` if:
    /// - `num_die_sides` is 0
    /// - Any face is 0 or greater than `num_die_sides`
    ///
    /// # Examples
    /// ```
    /// use yahtzee_planner::core::Hand;
    ///
    /// let hand = Hand::new(vec![1, 1, 1, 6, 6], 6).unwrap();
    /// assert_eq!(hand.dice(), &[1, 1, 1, 6, 6]);
    ///
    /// assert!(Hand::new(vec![7], 6).is_err());
    /// ```
    pub fn new(dice: Vec<u8>, num_die_sides: u8) -> Result<Self, HandError> {
        if num_die_sides == 0 {
            return Err(HandError::NoSides);
        }

        if let Some(&face) = dice.iter().find(|&&d| d == 0 || d > num_die_sides) {
            return Err(HandError::FaceOutOfRange {
                face,
                sides: num_die_sides,
            });
        }

        Ok(Self {
            dice,
            num_die_sides,
        })
    }

    /// Parse a hand from text like "1,1,1,6,6", "1 1 1 6 6" or "11166"
    ///
    /// With at most 9 sides, a single token made only of digits and longer
    /// than one character is read as one face per digit. With more sides
    /// every face may need two digits, so such a token is one face.
    ///
    /// # Errors
    /// Returns `HandError::InvalidFace` for non-numeric tokens, plus any error
    /// from [`Hand::new`].
    pub fn parse(text: &str, num_die_sides: u8) -> Result<Self, HandError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let dice = match tokens.as_slice() {
            [packed]
                if num_die_sides <= 9
                    && packed.len() > 1
                    && packed.chars().all(|c| c.is_ascii_digit()) =>
            {
                packed
                    .bytes()
                    .map(|b| b - b'0')
                    .collect()
            }
            _ => tokens
                .iter()
                .map(|t| {
                    t.parse::<u8>()
                        .map_err(|_| HandError::InvalidFace((*t).to_string()))
                })
                .collect::<Result<Vec<u8>, _>>()?,
        };

        Self::new(dice, num_die_sides)
    }

    /// Get the dice as a slice
    #[inline]
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    #[inline]
    #[must_use]
    pub const fn num_die_sides(&self) -> u8 {
        self.num_die_sides
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.dice)
    }
}

/// Dice kept back from a reroll, in ascending order
///
/// Two holds built from the same multiset of faces compare equal no matter
/// which physical dice were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hold(Vec<u8>);

impl Hold {
    /// The hold that keeps nothing
    pub const EMPTY: Self = Self(Vec::new());

    /// Build a hold from any collection of faces, sorting into canonical form
    ///
    /// # Examples
    /// ```
    /// use yahtzee_planner::core::Hold;
    ///
    /// assert_eq!(Hold::from_dice([6, 1, 6]), Hold::from_dice([1, 6, 6]));
    /// assert_eq!(Hold::from_dice([6, 1, 6]).dice(), &[1, 6, 6]);
    /// ```
    #[must_use]
    pub fn from_dice(dice: impl IntoIterator<Item = u8>) -> Self {
        let mut dice: Vec<u8> = dice.into_iter().collect();
        dice.sort_unstable();
        Self(dice)
    }

    #[inline]
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that every die of this hold can be taken from `hand`
    #[must_use]
    pub fn is_within(&self, hand: &[u8]) -> bool {
        let mut remaining = hand.to_vec();
        self.0.iter().all(|face| {
            remaining
                .iter()
                .position(|d| d == face)
                .map(|i| remaining.swap_remove(i))
                .is_some()
        })
    }
}

impl fmt::Display for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, dice: &[u8]) -> fmt::Result {
    write!(f, "(")?;
    for (i, die) in dice.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{die}")?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_creation_valid() {
        let hand = Hand::new(vec![1, 1, 1, 6, 6], 6).unwrap();
        assert_eq!(hand.dice(), &[1, 1, 1, 6, 6]);
        assert_eq!(hand.num_die_sides(), 6);
        assert_eq!(hand.len(), 5);
        assert!(!hand.is_empty());
    }

    #[test]
    fn hand_creation_empty_is_allowed() {
        let hand = Hand::new(vec![], 6).unwrap();
        assert!(hand.is_empty());
    }

    #[test]
    fn hand_creation_rejects_zero_sides() {
        assert_eq!(Hand::new(vec![1], 0), Err(HandError::NoSides));
    }

    #[test]
    fn hand_creation_rejects_out_of_range_faces() {
        assert_eq!(
            Hand::new(vec![1, 7], 6),
            Err(HandError::FaceOutOfRange { face: 7, sides: 6 })
        );
        assert_eq!(
            Hand::new(vec![0, 2], 6),
            Err(HandError::FaceOutOfRange { face: 0, sides: 6 })
        );
    }

    #[test]
    fn parse_comma_and_space_separated() {
        let a = Hand::parse("1,1,1,6,6", 6).unwrap();
        let b = Hand::parse("1 1 1 6 6", 6).unwrap();
        let c = Hand::parse(" 1, 1 ,1,  6,6 ", 6).unwrap();

        assert_eq!(a.dice(), &[1, 1, 1, 6, 6]);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_packed_digits() {
        let hand = Hand::parse("11166", 6).unwrap();
        assert_eq!(hand.dice(), &[1, 1, 1, 6, 6]);
    }

    #[test]
    fn parse_multi_digit_faces_with_separators() {
        let hand = Hand::parse("12,3,20", 20).unwrap();
        assert_eq!(hand.dice(), &[12, 3, 20]);
    }

    #[test]
    fn parse_single_token_is_one_face_above_nine_sides() {
        assert_eq!(Hand::parse("12", 20).unwrap().dice(), &[12]);
        assert_eq!(Hand::parse("10", 10).unwrap().dice(), &[10]);
        // Nine sides still unpack digits
        assert_eq!(Hand::parse("19", 9).unwrap().dice(), &[1, 9]);
    }

    #[test]
    fn parse_single_token_out_of_range_above_nine_sides() {
        assert_eq!(
            Hand::parse("11166", 20),
            Err(HandError::InvalidFace("11166".to_string()))
        );
        assert_eq!(
            Hand::parse("25", 20),
            Err(HandError::FaceOutOfRange { face: 25, sides: 20 })
        );
    }

    #[test]
    fn parse_invalid_token() {
        assert_eq!(
            Hand::parse("1,x,3", 6),
            Err(HandError::InvalidFace("x".to_string()))
        );
        assert!(Hand::parse("1,-2", 6).is_err());
    }

    #[test]
    fn parse_empty_text_is_empty_hand() {
        assert!(Hand::parse("", 6).unwrap().is_empty());
    }

    #[test]
    fn hold_is_canonical() {
        let a = Hold::from_dice([6, 1, 6, 1]);
        let b = Hold::from_dice([1, 1, 6, 6]);
        assert_eq!(a, b);
        assert_eq!(a.dice(), &[1, 1, 6, 6]);
    }

    #[test]
    fn hold_ordering_is_lexicographic() {
        assert!(Hold::EMPTY < Hold::from_dice([1]));
        assert!(Hold::from_dice([1, 1]) < Hold::from_dice([1, 6]));
        assert!(Hold::from_dice([1, 6]) < Hold::from_dice([6]));
    }

    #[test]
    fn hold_is_within_respects_multiplicity() {
        let hand = [1, 1, 6];
        assert!(Hold::from_dice([1, 1]).is_within(&hand));
        assert!(Hold::from_dice([1, 6]).is_within(&hand));
        assert!(Hold::EMPTY.is_within(&hand));
        assert!(!Hold::from_dice([6, 6]).is_within(&hand));
        assert!(!Hold::from_dice([2]).is_within(&hand));
    }

    #[test]
    fn display_as_tuple() {
        assert_eq!(Hold::EMPTY.to_string(), "()");
        assert_eq!(Hold::from_dice([6]).to_string(), "(6)");
        let hand = Hand::new(vec![1, 1, 1, 6, 6], 6).unwrap();
        assert_eq!(hand.to_string(), "(1, 1, 1, 6, 6)");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HandError::TooManyDice { len: 9, max: 8 }.to_string(),
            "Hand has 9 dice, limit is 8"
        );
        assert_eq!(
            HandError::FaceOutOfRange { face: 7, sides: 6 }.to_string(),
            "Die face 7 is outside 1..=6"
        );
        assert_eq!(
            HandError::TooManySides { sides: 200, max: 20 }.to_string(),
            "Dice have 200 sides, limit is 20"
        );
    }
}
