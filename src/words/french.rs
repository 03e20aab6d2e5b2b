// SPDX-License-Identifier: MPL-2.0
//! French (France) ruleset, traditional spelling.
//!
//! Words are produced in lower case; the caller applies title casing.

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

pub(super) const ZERO: &str = "zéro";
pub(super) const MINUS: &str = "moins";

/// Scales above one thousand, largest first. The count in front of each is
/// a noun complement, so plurals are kept ("quatre-vingts millions").
const SCALES: [(u64, &str, &str); 3] = [
    (1_000_000_000_000, "billion", "billions"),
    (1_000_000_000, "milliard", "milliards"),
    (1_000_000, "million", "millions"),
];

fn below_hundred(n: u64, plural: bool) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let (tens, units) = (n / 10, n % 10);
            match units {
                0 => TENS[tens as usize].to_string(),
                1 => format!("{} et un", TENS[tens as usize]),
                u => format!("{}-{}", TENS[tens as usize], UNITS[u as usize]),
            }
        }
        70 => "soixante-dix".to_string(),
        71 => "soixante et onze".to_string(),
        72..=79 => format!("soixante-{}", below_hundred(n - 60, plural)),
        80 if plural => "quatre-vingts".to_string(),
        80 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", below_hundred(n - 80, plural)),
    }
}

/// `plural` is false when the group is followed by the invariable "mille".
fn below_thousand(n: u64, plural: bool) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    let tail = (rest > 0).then(|| below_hundred(rest, plural));
    let head = match hundreds {
        0 => None,
        1 => Some("cent".to_string()),
        h if rest == 0 && plural => Some(format!("{} cents", UNITS[h as usize])),
        h => Some(format!("{} cent", UNITS[h as usize])),
    };
    match (head, tail) {
        (Some(head), Some(tail)) => format!("{head} {tail}"),
        (Some(head), None) => head,
        (None, Some(tail)) => tail,
        (None, None) => String::new(),
    }
}

/// Pushes the words for a strictly positive `n` onto `out`.
pub(super) fn spell(n: u64, out: &mut Vec<String>) {
    let mut rest = n;
    for (scale, singular, plural) in SCALES {
        let count = rest / scale;
        rest %= scale;
        match count {
            0 => {}
            1 => out.push(format!("un {singular}")),
            c => out.push(format!("{} {plural}", below_thousand(c, true))),
        }
    }

    let thousands = rest / 1_000;
    match thousands {
        0 => {}
        1 => out.push("mille".to_string()),
        t => out.push(format!("{} mille", below_thousand(t, false))),
    }

    let units = rest % 1_000;
    if units > 0 {
        out.push(below_thousand(units, true));
    }
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
    fn spells_irregular_tens() {
        assert_eq!(words(17), "dix-sept");
        assert_eq!(words(21), "vingt et un");
        assert_eq!(words(26), "vingt-six");
        assert_eq!(words(70), "soixante-dix");
        assert_eq!(words(71), "soixante et onze");
        assert_eq!(words(77), "soixante-dix-sept");
        assert_eq!(words(80), "quatre-vingts");
        assert_eq!(words(81), "quatre-vingt-un");
        assert_eq!(words(91), "quatre-vingt-onze");
        assert_eq!(words(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn pluralizes_cent_only_when_final() {
        assert_eq!(words(100), "cent");
        assert_eq!(words(200), "deux cents");
        assert_eq!(words(201), "deux cent un");
        assert_eq!(words(200_000), "deux cent mille");
    }

    #[test]
    fn mille_is_invariable() {
        assert_eq!(words(1_000), "mille");
        assert_eq!(words(2_000), "deux mille");
        assert_eq!(words(80_000), "quatre-vingt mille");
    }

    #[test]
    fn large_scales_take_plural() {
        assert_eq!(words(1_000_000), "un million");
        assert_eq!(words(2_000_000), "deux millions");
        assert_eq!(words(80_000_000), "quatre-vingts millions");
        assert_eq!(words(1_000_000_000), "un milliard");
        assert_eq!(words(3_000_000_000_000), "trois billions");
        assert_eq!(words(1_001_001), "un million mille un");
    }
}
