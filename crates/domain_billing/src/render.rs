//! Fixed-width text rendering of bills
//!
//! Produces the printable invoice block: shop header, customer block, the
//! product table, and the footer with the total and its words phrase. The
//! layout is fixed and deterministic — identical inputs render byte-identical
//! text, which is what the save/reprint flow relies on.

use core_kernel::Money;

use crate::bill::{Bill, CustomerInfo, LineItem, ShopInfo};
use crate::error::BillingError;

/// Section rule, 71 columns.
const RULE: &str =
    "_______________________________________________________________________";
const BILL_TO_RULE: &str =
    "_______________________________BILL TO_________________________________";
const PRODUCT_RULE: &str =
    "___________________________PRODUCT DETAILS_____________________________";

/// Display width for the amount-in-words line.
const WORDS_WRAP_WIDTH: usize = 80;

/// Builds the bill from the caller's line list and renders it.
///
/// Returns the text block together with the computed total (the sum of the
/// per-line totals — per-line rounding is the caller's and is preserved).
pub fn generate_bill_content(
    shop: &ShopInfo,
    customer: &CustomerInfo,
    lines: &[LineItem],
) -> Result<(String, Money), BillingError> {
    let bill = Bill::from_lines(lines.to_vec())?;
    let text = render_bill(shop, customer, &bill);

    tracing::debug!(
        lines = bill.lines().len(),
        total = %bill.total(),
        "rendered bill"
    );

    Ok((text, bill.total()))
}

/// Renders the fixed-layout bill text for an already-derived [`Bill`].
pub fn render_bill(shop: &ShopInfo, customer: &CustomerInfo, bill: &Bill) -> String {
    let wrapped_words = fill(bill.amount_in_words(), WORDS_WRAP_WIDTH);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{:<80}\n", shop.name));
    out.push_str(&format!("{:<50}\n", shop.address));
    out.push_str(&format!("PHONE: {:<43}\n", shop.phone));
    out.push('\n');
    out.push_str(&format!("DATE : {:<43}\n", customer.bill_date));
    out.push('\n');
    out.push_str(BILL_TO_RULE);
    out.push('\n');
    out.push_str(&format!("NAME   : {}\n", customer.name));
    out.push_str(&format!("PHONE  : {}\n", customer.phone));
    out.push_str(&format!("ADDRESS: {}\n", customer.address));
    out.push('\n');
    out.push_str(PRODUCT_RULE);
    out.push('\n');
    out.push_str(&format!(
        "{:<25} {:^5} {:>12} {:>15}\n",
        "PRODUCT NAME", "QTY", "PER UNIT AMT(₹)", "TOTAL AMT(₹)"
    ));
    out.push_str(RULE);
    out.push('\n');

    for line in bill.lines() {
        out.push('\n');
        out.push_str(&format!(
            "{:<25} {:^5} {:>12} {:>15}",
            line.name(),
            line.quantity(),
            paise_fixed(line.unit_amount()),
            paise_fixed(line.total()),
        ));
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{:<41} ₹{:>17}\n",
        "TOTAL:",
        paise_fixed(bill.total())
    ));
    out.push_str(&format!("IN WORDS: {wrapped_words}\n"));
    out.push_str(RULE);
    out.push('\n');

    out
}

/// Formats an amount to exactly two decimal places, no symbol.
fn paise_fixed(amount: Money) -> String {
    format!("{:.2}", amount.round_paise().amount())
}

/// Greedy word wrap at `width` columns.
///
/// Breaks only at word boundaries, never hyphenates; continuation lines are
/// joined with `\n`.
pub(crate) fn fill(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_keeps_short_text_on_one_line() {
        assert_eq!(fill("Zero Rupees Only", 80), "Zero Rupees Only");
    }

    #[test]
    fn test_fill_breaks_at_word_boundaries() {
        let text = "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred \
                    Seventy Eight Rupees and Ninety Nine Paise Only";
        let wrapped = fill(text, 40);

        for line in wrapped.lines() {
            assert!(line.chars().count() <= 40, "line too long: {line:?}");
            assert!(!line.starts_with(' '));
            assert!(!line.ends_with(' '));
        }
        // Re-joining restores the original word sequence.
        assert_eq!(wrapped.replace('\n', " "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_fill_empty_text() {
        assert_eq!(fill("", 80), "");
    }

    #[test]
    fn test_paise_fixed_pads_and_rounds() {
        use rust_decimal_macros::dec;

        assert_eq!(paise_fixed(Money::new(dec!(20))), "20.00");
        assert_eq!(paise_fixed(Money::new(dec!(10.5))), "10.50");
        assert_eq!(paise_fixed(Money::new(dec!(2.675))), "2.68");
    }
}
