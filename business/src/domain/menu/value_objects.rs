use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::MenuError;

/// Fixed currency prefix used when rendering prices (South African Rand).
pub const CURRENCY_PREFIX: char = 'R';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Starter,
    Main,
    Dessert,
    Beverage,
}

impl Course {
    /// Every course, in menu order.
    pub const ALL: [Course; 4] = [
        Course::Starter,
        Course::Main,
        Course::Dessert,
        Course::Beverage,
    ];

    /// Capitalized name for display next to dishes.
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Course::Starter => write!(f, "starter"),
            Course::Main => write!(f, "main"),
            Course::Dessert => write!(f, "dessert"),
            Course::Beverage => write!(f, "beverage"),
        }
    }
}

impl std::str::FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Course::Starter),
            "main" => Ok(Course::Main),
            "dessert" => Ok(Course::Dessert),
            "beverage" => Ok(Course::Beverage),
            _ => Err(format!("Invalid course: {}", s)),
        }
    }
}

/// A non-negative amount of money held as whole cents.
///
/// Always rendered with the fixed currency prefix and two decimals
/// (`R120.00`), and that rendering parses back through [`Price::parse_display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    /// Upper bound accepted from user input (R1 000 000 000.00).
    pub const MAX_CENTS: u64 = 100_000_000_000;

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Parses a price typed by a user, with or without the currency prefix.
    ///
    /// The amount is read as an exact decimal, rounded to the nearest cent
    /// (half away from zero) and must be strictly positive after rounding.
    pub fn parse_input(raw: &str) -> Result<Self, MenuError> {
        let invalid = || MenuError::InvalidPrice(raw.trim().to_string());

        let amount = parse_amount(strip_currency(raw)).ok_or_else(invalid)?;
        let cents = to_cents(&amount)
            .filter(|cents| (1..=Self::MAX_CENTS).contains(cents))
            .ok_or_else(invalid)?;

        Ok(Self { cents })
    }

    /// Lenient parse of the display form. Anything unreadable, negative or
    /// out of range is zero.
    pub fn parse_display(s: &str) -> Self {
        parse_amount(strip_currency(s))
            .and_then(|amount| to_cents(&amount))
            .filter(|cents| *cents <= Self::MAX_CENTS)
            .map_or(Self::ZERO, |cents| Self { cents })
    }

    /// Arithmetic mean rounded half-up to the cent; zero when there is nothing to average.
    pub fn average<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = Price>,
    {
        let (sum, count) = prices
            .into_iter()
            .fold((0u128, 0u128), |(sum, count), price| {
                (sum + price.cents as u128, count + 1)
            });

        if count == 0 {
            return Self::ZERO;
        }

        Self {
            cents: ((2 * sum + count) / (2 * count)) as u64,
        }
    }
}

/// Plain decimal notation only (`12`, `12.5`, `-3.25`); no exponents or words.
fn parse_amount(s: &str) -> Option<BigDecimal> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if !digits.chars().any(|c| c.is_ascii_digit())
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }
    BigDecimal::from_str(s).ok()
}

/// Whole cents after half-away-from-zero rounding; `None` when negative or too large.
fn to_cents(amount: &BigDecimal) -> Option<u64> {
    let (cents, _) = amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .as_bigint_and_exponent();
    cents.to_u64()
}

fn strip_currency(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix(CURRENCY_PREFIX)
        .or_else(|| s.strip_prefix(CURRENCY_PREFIX.to_ascii_lowercase()))
        .unwrap_or(s)
        .trim()
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}.{:02}",
            CURRENCY_PREFIX,
            self.cents / 100,
            self.cents % 100
        )
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Price::parse_display(&raw))
    }
}
