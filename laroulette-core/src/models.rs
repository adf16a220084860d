use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, RouletteError};

pub const ZERO: u8 = 0;
/// Le double zéro (00) est encodé 37.
pub const DOUBLE_ZERO: u8 = 37;

pub const REDS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

pub const POSSIBILITY_1: [u8; 24] = [
    1, 2, 4, 5, 8, 9, 11, 12, 13, 14, 16, 17, 20, 21, 23, 24, 25, 26, 28, 29, 32, 33, 35, 36,
];
pub const POSSIBILITY_2: [u8; 23] = [
    3, 5, 6, 7, 8, 10, 11, 14, 15, 17, 18, 19, 20, 22, 23, 26, 27, 29, 30, 31, 32, 34, 35,
];

/// Un numéro sorti, validé dans [0, 37].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome(u8);

impl Outcome {
    pub fn new(value: i64) -> Result<Self> {
        if !(ZERO as i64..=DOUBLE_ZERO as i64).contains(&value) {
            return Err(RouletteError::InvalidOutcome(value));
        }
        Ok(Outcome(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// 0 et 00 n'appartiennent à aucune catégorie.
    pub fn is_special(&self) -> bool {
        self.0 == ZERO || self.0 == DOUBLE_ZERO
    }

    pub fn color(&self) -> Color {
        if self.is_special() {
            Color::Green
        } else if REDS.contains(&self.0) {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn parity(&self) -> Option<Parity> {
        if self.is_special() {
            return None;
        }
        Some(if self.0 % 2 == 0 { Parity::Even } else { Parity::Odd })
    }

    pub fn half(&self) -> Option<Half> {
        if self.is_special() {
            return None;
        }
        Some(if self.0 <= 18 { Half::Low } else { Half::High })
    }

    pub fn dozen(&self) -> Option<Dozen> {
        if self.is_special() {
            return None;
        }
        match (self.0 - 1) / 12 {
            0 => Some(Dozen::First),
            1 => Some(Dozen::Second),
            _ => Some(Dozen::Third),
        }
    }

    /// Possibilité 1 est testée avant Possibilité 2 : un numéro présent dans les deux
    /// listes relève de la première.
    pub fn possibility(&self) -> Option<PossibilitySet> {
        if self.is_special() {
            None
        } else if POSSIBILITY_1.contains(&self.0) {
            Some(PossibilitySet::Set1)
        } else if POSSIBILITY_2.contains(&self.0) {
            Some(PossibilitySet::Set2)
        } else {
            None
        }
    }

    pub fn attributes(&self) -> Attributes {
        Attributes {
            color: self.color(),
            parity: self.parity(),
            half: self.half(),
            dozen: self.dozen(),
            possibility: self.possibility(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == DOUBLE_ZERO {
            write!(f, "00")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Outcome {
    type Err = RouletteError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "00" {
            return Ok(Outcome(DOUBLE_ZERO));
        }
        let value = s
            .parse::<i64>()
            .map_err(|_| RouletteError::Parse(s.to_string()))?;
        Outcome::new(value)
    }
}

/// Classe un numéro brut. Échoue si le numéro est hors de [0, 37].
pub fn classify(value: i64) -> Result<Attributes> {
    Ok(Outcome::new(value)?.attributes())
}

pub fn parse_history(values: &[i64]) -> Result<Vec<Outcome>> {
    values.iter().map(|&v| Outcome::new(v)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub color: Color,
    pub parity: Option<Parity>,
    pub half: Option<Half>,
    pub dozen: Option<Dozen>,
    pub possibility: Option<PossibilitySet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    /// Vert n'a pas de contraire.
    pub fn complement(&self) -> Option<Color> {
        match self {
            Color::Red => Some(Color::Black),
            Color::Black => Some(Color::Red),
            Color::Green => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Rouge"),
            Color::Black => write!(f, "Noir"),
            Color::Green => write!(f, "Vert"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn complement(&self) -> Parity {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Pair"),
            Parity::Odd => write!(f, "Impair"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Low,
    High,
}

impl Half {
    pub fn complement(&self) -> Half {
        match self {
            Half::Low => Half::High,
            Half::High => Half::Low,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Low => write!(f, "1-18"),
            Half::High => write!(f, "19-36"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dozen {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Dozen {
    pub fn number(&self) -> u8 {
        match self {
            Dozen::First => 1,
            Dozen::Second => 2,
            Dozen::Third => 3,
        }
    }
}

impl fmt::Display for Dozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Douzaine {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PossibilitySet {
    #[serde(rename = "set1")]
    Set1,
    #[serde(rename = "set2")]
    Set2,
}

impl PossibilitySet {
    pub fn complement(&self) -> PossibilitySet {
        match self {
            PossibilitySet::Set1 => PossibilitySet::Set2,
            PossibilitySet::Set2 => PossibilitySet::Set1,
        }
    }
}

impl fmt::Display for PossibilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PossibilitySet::Set1 => write!(f, "Possibilité 1"),
            PossibilitySet::Set2 => write!(f, "Possibilité 2"),
        }
    }
}
