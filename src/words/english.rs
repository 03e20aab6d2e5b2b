// SPDX-License-Identifier: MPL-2.0
//! English (India) ruleset: Thousand, Lakh and Crore grouping.

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
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

pub(super) const ZERO: &str = "Zero";
pub(super) const MINUS: &str = "Minus";

fn below_hundred(n: u64, out: &mut Vec<String>) {
    match n {
        0 => {}
        1..=19 => out.push(ONES[n as usize].to_string()),
        _ => {
            out.push(TENS[(n / 10) as usize].to_string());
            if n % 10 > 0 {
                out.push(ONES[(n % 10) as usize].to_string());
            }
        }
    }
}

fn below_thousand(n: u64, out: &mut Vec<String>) {
    let hundreds = n / 100;
    if hundreds > 0 {
        out.push(ONES[hundreds as usize].to_string());
        out.push("Hundred".to_string());
    }
    below_hundred(n % 100, out);
}

/// Pushes the words for a strictly positive `n` onto `out`.
pub(super) fn spell(n: u64, out: &mut Vec<String>) {
    let crores = n / CRORE;
    if crores > 0 {
        spell(crores, out);
        out.push("Crore".to_string());
    }

    let rest = n % CRORE;
    let lakhs = rest / LAKH;
    if lakhs > 0 {
        below_hundred(lakhs, out);
        out.push("Lakh".to_string());
    }

    let thousands = (rest / 1_000) % 100;
    if thousands > 0 {
        below_hundred(thousands, out);
        out.push("Thousand".to_string());
    }

    below_thousand(rest % 1_000, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u64) -> String {
        let mut out = Vec::new();
        spell(n, &mut out);
        out.join(" ")
    }

    #[test]
    fn spells_small_numbers() {
        assert_eq!(words(1), "One");
        assert_eq!(words(13), "Thirteen");
        assert_eq!(words(26), "Twenty Six");
        assert_eq!(words(40), "Forty");
    }

    #[test]
    fn spells_hundreds_without_and() {
        assert_eq!(words(100), "One Hundred");
        assert_eq!(words(305), "Three Hundred Five");
    }

    #[test]
    fn uses_indian_grouping() {
        assert_eq!(
            words(123_456),
            "One Lakh Twenty Three Thousand Four Hundred Fifty Six"
        );
        assert_eq!(words(10_000_000), "One Crore");
        assert_eq!(words(1_000_000_000), "One Hundred Crore");
        assert_eq!(words(1_000_000_000_000), "One Lakh Crore");
    }
}
