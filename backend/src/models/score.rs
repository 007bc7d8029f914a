//! Alliance colors and the immutable Score pair
//!
//! All point values are i64 so running totals can never overflow in a
//! 150-second match, and so score arithmetic matches the rest of the
//! integer-only simulation (no floating point anywhere).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// One of the two competing alliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    Red,
    Blue,
}

impl Alliance {
    /// The opposing alliance.
    pub fn opposite(self) -> Alliance {
        match self {
            Alliance::Red => Alliance::Blue,
            Alliance::Blue => Alliance::Red,
        }
    }

    /// Both alliances, in red-then-blue order.
    pub const BOTH: [Alliance; 2] = [Alliance::Red, Alliance::Blue];

    /// Stable index for per-alliance arrays (red = 0, blue = 1).
    pub fn index(self) -> usize {
        match self {
            Alliance::Red => 0,
            Alliance::Blue => 1,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::Red => write!(f, "RED"),
            Alliance::Blue => write!(f, "BLUE"),
        }
    }
}

/// An immutable (red, blue) points pair.
///
/// Scores combine by pairwise addition and have a zero identity, so
/// per-tick scores can be folded into a running total with plain `+`.
///
/// # Example
/// ```
/// use match_simulator_core_rs::{Alliance, Score};
///
/// let total = Score::new(10, 20) + Score::pick(Alliance::Red, 5);
/// assert_eq!(total, Score::new(15, 20));
/// assert_eq!(Score::ZERO + total, total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    red: i64,
    blue: i64,
}

impl Score {
    /// The zero identity value.
    pub const ZERO: Score = Score { red: 0, blue: 0 };

    pub fn new(red: i64, blue: i64) -> Self {
        Self { red, blue }
    }

    /// Points for one alliance, zero for the other.
    pub fn pick(alliance: Alliance, points: i64) -> Self {
        match alliance {
            Alliance::Red => Score::new(points, 0),
            Alliance::Blue => Score::new(0, points),
        }
    }

    pub fn red(&self) -> i64 {
        self.red
    }

    pub fn blue(&self) -> i64 {
        self.blue
    }

    /// Points for the given alliance.
    pub fn of(&self, alliance: Alliance) -> i64 {
        match alliance {
            Alliance::Red => self.red,
            Alliance::Blue => self.blue,
        }
    }

    /// Win/loss/tie ranking points derived from a final score:
    /// 2 RP to the winner, 0 to the loser, 1 each for a tie.
    pub fn wlt_rp(&self) -> Score {
        match self.red.cmp(&self.blue) {
            std::cmp::Ordering::Greater => Score::new(2, 0),
            std::cmp::Ordering::Less => Score::new(0, 2),
            std::cmp::Ordering::Equal => Score::new(1, 1),
        }
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score::new(self.red + rhs.red, self.blue + rhs.blue)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RED {} : BLUE {}", self.red, self.blue)
    }
}
