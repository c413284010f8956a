//! Amount-in-words conversion
//!
//! Spells rupee amounts in English using the Indian numbering system
//! (crore, lakh, thousand, hundred). Supports the full `u64` rupee range;
//! the paise part is always a two-digit value below one hundred.
//!
//! The phrasing is fixed: `[Integer] Rupees [and] [Paise] Paise Only`, with
//! the `and` token present only when both parts are non-zero. The unit words
//! are always plural ("One Rupees Only") — this matches the shop's legacy
//! receipts and is kept deliberately.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::{Money, MoneyError};

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

/// Errors reported by the converter.
///
/// The `Display` strings double as the sentinel values shown inline by
/// interactive callers, so their exact wording is part of the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordsError {
    /// The value is not interpretable as a non-negative decimal amount.
    #[error("Invalid input")]
    InvalidInput,

    /// The value cannot be rendered to two decimal places for spelling.
    #[error("Invalid number format")]
    InvalidFormat,
}

/// Appends the spelled form of `n` to `out` as word tokens.
///
/// Groups are consumed in strict order: crore, lakh, thousand, hundred, then
/// the sub-hundred remainder from the teens/tens/units tables. Each group
/// multiplier is spelled by recursing into the same routine ("12 Crore"
/// spells the 12 here too).
fn spell_group(mut n: u64, out: &mut Vec<&'static str>) {
    if n == 0 {
        return;
    }

    if n >= CRORE {
        spell_group(n / CRORE, out);
        out.push("Crore");
        n %= CRORE;
    }
    if n >= LAKH {
        spell_group(n / LAKH, out);
        out.push("Lakh");
        n %= LAKH;
    }
    if n >= THOUSAND {
        spell_group(n / THOUSAND, out);
        out.push("Thousand");
        n %= THOUSAND;
    }
    if n >= HUNDRED {
        out.push(UNITS[(n / HUNDRED) as usize]);
        out.push("Hundred");
        n %= HUNDRED;
    }
    if n >= 20 {
        out.push(TENS[(n / 10) as usize]);
        n %= 10;
    } else if n >= 10 {
        out.push(TEENS[(n - 10) as usize]);
        n = 0;
    }
    if n > 0 {
        out.push(UNITS[n as usize]);
    }
}

/// Spells a rupee amount in words.
///
/// The amount is rounded to two decimal places and split into rupees and
/// paise; see the module docs for the phrase structure.
///
/// # Errors
///
/// [`WordsError::InvalidInput`] for negative amounts,
/// [`WordsError::InvalidFormat`] when the rupee part cannot be represented
/// for spelling.
pub fn rupees_in_words(amount: Money) -> Result<String, WordsError> {
    let (rupees, paise) = amount.split().map_err(|err| match err {
        MoneyError::Negative(_) => WordsError::InvalidInput,
        MoneyError::Overflow(_) => WordsError::InvalidFormat,
    })?;

    if rupees == 0 && paise == 0 {
        return Ok("Zero Rupees Only".to_string());
    }

    let mut words: Vec<&'static str> = Vec::new();
    if rupees > 0 {
        spell_group(rupees, &mut words);
        words.push("Rupees");
    }
    if paise > 0 {
        if rupees > 0 {
            words.push("and");
        }
        spell_group(u64::from(paise), &mut words);
        words.push("Paise");
    }
    words.push("Only");

    Ok(words.join(" "))
}

/// Sentinel-string surface of the converter for interactive callers.
///
/// Parses `raw` as a decimal amount and spells it; failures are returned as
/// the error's display string ("Invalid input" / "Invalid number format")
/// rather than an error type, so the caller can show them inline without
/// interrupting its flow. Never panics.
pub fn convert_amount_to_words(raw: &str) -> String {
    let Ok(amount) = raw.trim().parse::<Decimal>() else {
        return WordsError::InvalidInput.to_string();
    };

    match rupees_in_words(Money::new(amount)) {
        Ok(phrase) => phrase,
        Err(err) => err.to_string(),
    }
}


#[cfg(test)]
mod proptests {
    use super::tests_support::value_of_rupees;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whole_amounts_never_contain_and(rupees in 0u64..100_000_000_000u64) {
            let phrase = rupees_in_words(Money::new(Decimal::from(rupees))).unwrap();
            prop_assert!(!phrase.contains(" and "));
            prop_assert!(phrase.ends_with("Only"));
        }

        #[test]
        fn phrases_are_single_spaced(paise in 0i64..10_000_000_000i64) {
            let phrase = rupees_in_words(Money::from_paise(paise)).unwrap();
            prop_assert!(!phrase.contains("  "));
            prop_assert!(!phrase.starts_with(' '));
            prop_assert!(!phrase.trim().is_empty());
        }

        #[test]
        fn grouping_preserves_the_value(rupees in 1u64..10_000_000_000u64) {
            let phrase = rupees_in_words(Money::new(Decimal::from(rupees))).unwrap();
            prop_assert_eq!(value_of_rupees(&phrase), rupees);
        }

        #[test]
        fn paise_segment_present_iff_paise_nonzero(paise in 1i64..100_000_000i64) {
            let phrase = rupees_in_words(Money::from_paise(paise)).unwrap();
            prop_assert_eq!(phrase.contains("Paise"), paise % 100 != 0);
        }
    }
}

#[cfg(test)]
mod tests_support {
    use super::{CRORE, HUNDRED, LAKH, TEENS, TENS, THOUSAND, UNITS};

    /// Evaluates the rupee segment of a spelled phrase back into a number.
    pub fn value_of_rupees(phrase: &str) -> u64 {
        let rupee_segment = phrase.split(" Rupees").next().unwrap();

        let mut total: u64 = 0;
        let mut group: u64 = 0;
        for token in rupee_segment.split(' ') {
            match token {
                "Crore" => {
                    total += group * CRORE;
                    group = 0;
                }
                "Lakh" => {
                    total += group * LAKH;
                    group = 0;
                }
                "Thousand" => {
                    total += group * THOUSAND;
                    group = 0;
                }
                "Hundred" => group *= HUNDRED,
                "Zero" => {}
                word => {
                    if let Some(i) = UNITS.iter().position(|&u| u == word) {
                        group += i as u64;
                    } else if let Some(i) = TEENS.iter().position(|&t| t == word) {
                        group += 10 + i as u64;
                    } else if let Some(i) = TENS.iter().position(|&t| t == word) {
                        group += 10 * i as u64;
                    } else {
                        panic!("unknown token {word:?} in {phrase:?}");
                    }
                }
            }
        }
        total + group
    }
}
