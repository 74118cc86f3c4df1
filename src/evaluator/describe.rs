use super::{Category, Evaluation};
use crate::cards::Rank;
use std::fmt;

fn capitalized(rank: Rank) -> String {
    let name = rank.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Human-readable description, e.g. `Two pairs: jacks and sevens (A high)`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.tie_break_ranks();
        let kickers = match self.category {
            Category::StraightFlush if r[0] == Rank::Ace => {
                f.write_str("Royal flush")?;
                0
            }
            Category::StraightFlush => {
                write!(f, "{} high straight flush", capitalized(r[0]))?;
                0
            }
            Category::FourOfAKind => {
                write!(f, "Quad {}", r[0].plural())?;
                1
            }
            Category::FullHouse => {
                write!(f, "Full house: {} full of {}", r[0].plural(), r[4].plural())?;
                0
            }
            Category::Flush => {
                write!(f, "{} high flush", capitalized(r[0]))?;
                0
            }
            Category::Straight => {
                write!(f, "{} high straight", capitalized(r[0]))?;
                0
            }
            Category::ThreeOfAKind => {
                write!(f, "Trip {}", r[0].plural())?;
                2
            }
            Category::TwoPair => {
                write!(f, "Two pairs: {} and {}", r[0].plural(), r[2].plural())?;
                1
            }
            Category::Pair => {
                write!(f, "Pair of {}", r[0].plural())?;
                3
            }
            Category::HighCard => {
                f.write_str("High card")?;
                5
            }
        };

        if kickers > 0 {
            f.write_str(" (")?;
            for (i, rank) in r[5 - kickers..].iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{rank}")?;
            }
            f.write_str(" high)")?;
        }
        Ok(())
    }
}
