//! Body parts and their prices.
//!
use crate::error::ConfigurationError;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Maximum number of parts a single creep may have
pub const MAX_CREEP_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Move,
    Work,
    Carry,
    Attack,
    Heal,
    RangedAttack,
    Tough,
    Claim,
}

impl BodyPart {
    pub const COUNT: usize = 8;

    pub const ALL: [BodyPart; BodyPart::COUNT] = [
        BodyPart::Move,
        BodyPart::Work,
        BodyPart::Carry,
        BodyPart::Attack,
        BodyPart::Heal,
        BodyPart::RangedAttack,
        BodyPart::Tough,
        BodyPart::Claim,
    ];

    /// Name of the game constant
    pub fn as_str(self) -> &'static str {
        match self {
            BodyPart::Move => "move",
            BodyPart::Work => "work",
            BodyPart::Carry => "carry",
            BodyPart::Attack => "attack",
            BodyPart::Heal => "heal",
            BodyPart::RangedAttack => "ranged_attack",
            BodyPart::Tough => "tough",
            BodyPart::Claim => "claim",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::ALL
            .iter()
            .copied()
            .find(|part| part.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownPart(s.to_owned()))
    }
}

/// Price of every body part.
///
/// The table always holds a positive price for each variant of [BodyPart]. The default table is
/// built from an exhaustive match, configured tables are validated in `TryFrom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, u32>", into = "HashMap<String, u32>")]
pub struct PriceTable {
    prices: [u32; BodyPart::COUNT],
}

const fn default_price(part: BodyPart) -> u32 {
    match part {
        BodyPart::Move => 50,
        BodyPart::Work => 100,
        BodyPart::Attack => 80,
        BodyPart::Carry => 50,
        BodyPart::Heal => 250,
        BodyPart::RangedAttack => 150,
        BodyPart::Tough => 10,
        BodyPart::Claim => 600,
    }
}

impl PriceTable {
    pub const DEFAULT: PriceTable = PriceTable {
        prices: [
            default_price(BodyPart::Move),
            default_price(BodyPart::Work),
            default_price(BodyPart::Carry),
            default_price(BodyPart::Attack),
            default_price(BodyPart::Heal),
            default_price(BodyPart::RangedAttack),
            default_price(BodyPart::Tough),
            default_price(BodyPart::Claim),
        ],
    };

    pub fn price(&self, part: BodyPart) -> u32 {
        self.prices[part.index()]
    }

    /// Total cost of a body. Order does not matter, an empty body costs nothing.
    ///
    /// Saturates at `u32::MAX`, use [PriceTable::checked_cost_of] to detect overflow.
    pub fn cost_of(&self, parts: &[BodyPart]) -> u32 {
        parts
            .iter()
            .fold(0u32, |total, part| total.saturating_add(self.price(*part)))
    }

    /// Total cost of a body, `None` if it does not fit in a `u32`
    pub fn checked_cost_of(&self, parts: &[BodyPart]) -> Option<u32> {
        parts
            .iter()
            .try_fold(0u32, |total, part| total.checked_add(self.price(*part)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, u32)> + '_ {
        BodyPart::ALL.iter().map(move |part| (*part, self.price(*part)))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<HashMap<String, u32>> for PriceTable {
    type Error = ConfigurationError;

    fn try_from(map: HashMap<String, u32>) -> Result<Self, Self::Error> {
        let mut prices = [None; BodyPart::COUNT];
        for (key, price) in map.iter() {
            let part: BodyPart = key.parse()?;
            if *price == 0 {
                return Err(ConfigurationError::NonPositivePrice(part));
            }
            prices[part.index()] = Some(*price);
        }
        let mut table = [0; BodyPart::COUNT];
        for part in BodyPart::ALL.iter() {
            table[part.index()] =
                prices[part.index()].ok_or(ConfigurationError::MissingPrice(*part))?;
        }
        Ok(Self { prices: table })
    }
}

impl From<PriceTable> for HashMap<String, u32> {
    fn from(table: PriceTable) -> Self {
        table
            .iter()
            .map(|(part, price)| (part.as_str().to_owned(), price))
            .collect()
    }
}

/// Cost of a body using the default prices
pub fn compute_cost(parts: &[BodyPart]) -> u32 {
    PriceTable::DEFAULT.cost_of(parts)
}
