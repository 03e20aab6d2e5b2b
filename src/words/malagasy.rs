// SPDX-License-Identifier: MPL-2.0
//! Malagasy number spelling.
//!
//! Malagasy reads numbers from the smallest magnitude upwards: units come
//! first, then tens, hundreds and each larger scale, so `1996` reads
//! "enina amby sivifolo sy sivinjato sy arivo". A lone unit attaches to the
//! next magnitude with `amby` (`ambin'ny` before `folo`) and uses the
//! connector form `iraika` for one; every other join uses `sy`.

use super::NumberToWords;
use crate::error::ConversionError;

/// Largest number the Malagasy speller handles (just under one thousand
/// `lavitrisa`).
pub const MAX: i64 = 999_999_999_999;

const UNITS: [&str; 10] = [
    "aotra", "iray", "roa", "telo", "efatra", "dimy", "enina", "fito", "valo", "sivy",
];

const TENS: [&str; 10] = [
    "",
    "folo",
    "roapolo",
    "telopolo",
    "efapolo",
    "dimampolo",
    "enimpolo",
    "fitopolo",
    "valopolo",
    "sivifolo",
];

const HUNDREDS: [&str; 10] = [
    "",
    "zato",
    "roanjato",
    "telonjato",
    "efajato",
    "dimanjato",
    "eninjato",
    "fitonjato",
    "valonjato",
    "sivinjato",
];

const ARIVO: &str = "arivo";
const ALINA: &str = "alina";
const HETSY: &str = "hetsy";
const TAPITRISA: &str = "tapitrisa";
const LAVITRISA: &str = "lavitrisa";

/// Converter for Malagasy (`mg-MG`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanisa;

impl Tanisa {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NumberToWords for Tanisa {
    fn to_words(&self, number: i64) -> Result<String, ConversionError> {
        if !(0..=MAX).contains(&number) {
            return Err(ConversionError::OutOfRange {
                value: number,
                min: 0,
                max: MAX,
            });
        }
        // Range check above guarantees a non-negative value.
        let n = number.unsigned_abs();
        if n == 0 {
            return Ok(UNITS[0].to_string());
        }
        Ok(join_segments(&segments(n)))
    }
}

/// Unit word used in front of `amby`/`ambin'ny`.
fn connector_unit(digit: u64) -> &'static str {
    if digit == 1 {
        "iraika"
    } else {
        UNITS[digit as usize]
    }
}

fn below_hundred(n: u64) -> String {
    debug_assert!((1..100).contains(&n));
    let (tens, units) = (n / 10, n % 10);
    match (tens, units) {
        (0, u) => UNITS[u as usize].to_string(),
        (t, 0) => TENS[t as usize].to_string(),
        (1, u) => format!("{} ambin'ny folo", connector_unit(u)),
        (t, u) => format!("{} amby {}", connector_unit(u), TENS[t as usize]),
    }
}

fn below_thousand(n: u64) -> String {
    debug_assert!((1..1000).contains(&n));
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => HUNDREDS[h as usize].to_string(),
        (h, r) if r < 10 => format!("{} amby {}", connector_unit(r), HUNDREDS[h as usize]),
        (h, r) => format!("{} sy {}", below_hundred(r), HUNDREDS[h as usize]),
    }
}

/// Splits `n` into spelled segments, smallest magnitude first. Each entry
/// carries the numeric value the segment stands for.
fn segments(n: u64) -> Vec<(u64, String)> {
    let mut out = Vec::new();

    let low = n % 1000;
    if low > 0 {
        out.push((low, below_thousand(low)));
    }

    let thousands = (n / 1_000) % 10;
    if thousands == 1 {
        out.push((1_000, ARIVO.to_string()));
    } else if thousands > 1 {
        out.push((thousands * 1_000, format!("{} {ARIVO}", UNITS[thousands as usize])));
    }

    for (scale, word) in [(10_000, ALINA), (100_000, HETSY)] {
        let digit = (n / scale) % 10;
        if digit > 0 {
            out.push((digit * scale, format!("{} {word}", UNITS[digit as usize])));
        }
    }

    for (scale, word) in [(1_000_000, TAPITRISA), (1_000_000_000, LAVITRISA)] {
        let count = (n / scale) % 1000;
        if count > 0 {
            out.push((count * scale, format!("{} {word}", below_thousand(count))));
        }
    }

    out
}

fn join_segments(segments: &[(u64, String)]) -> String {
    let mut words = String::new();
    let mut lower = 0;
    for (value, segment) in segments {
        words = if words.is_empty() {
            segment.clone()
        } else if lower < 10 {
            format!("{} amby {segment}", connector_unit(lower))
        } else {
            format!("{words} sy {segment}")
        };
        lower += value;
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: i64) -> String {
        Tanisa::new().to_words(n).expect("in range")
    }

    #[test]
    fn spells_units_and_zero() {
        assert_eq!(words(0), "aotra");
        assert_eq!(words(1), "iray");
        assert_eq!(words(9), "sivy");
    }

    #[test]
    fn spells_teens_with_ambin_ny() {
        assert_eq!(words(10), "folo");
        assert_eq!(words(11), "iraika ambin'ny folo");
        assert_eq!(words(12), "roa ambin'ny folo");
        assert_eq!(words(19), "sivy ambin'ny folo");
    }

    #[test]
    fn spells_tens_with_amby() {
        assert_eq!(words(20), "roapolo");
        assert_eq!(words(21), "iraika amby roapolo");
        assert_eq!(words(26), "enina amby roapolo");
        assert_eq!(words(99), "sivy amby sivifolo");
    }

    #[test]
    fn spells_hundreds() {
        assert_eq!(words(100), "zato");
        assert_eq!(words(101), "iraika amby zato");
        assert_eq!(words(110), "folo sy zato");
        assert_eq!(words(125), "dimy amby roapolo sy zato");
        assert_eq!(words(300), "telonjato");
    }

    #[test]
    fn spells_thousands_smallest_first() {
        assert_eq!(words(1_000), "arivo");
        assert_eq!(words(1_001), "iraika amby arivo");
        assert_eq!(words(1_996), "enina amby sivifolo sy sivinjato sy arivo");
        assert_eq!(words(2_019), "sivy ambin'ny folo sy roa arivo");
    }

    #[test]
    fn spells_alina_hetsy_and_beyond() {
        assert_eq!(words(10_000), "iray alina");
        assert_eq!(words(100_000), "iray hetsy");
        assert_eq!(
            words(123_456),
            "enina amby dimampolo sy efajato sy telo arivo sy roa alina sy iray hetsy"
        );
        assert_eq!(words(1_000_000), "iray tapitrisa");
        assert_eq!(words(21_000_000), "iraika amby roapolo tapitrisa");
        assert_eq!(words(3_000_000_000), "telo lavitrisa");
    }

    #[test]
    fn rejects_negative_and_oversized_numbers() {
        let speller = Tanisa::new();
        assert!(matches!(
            speller.to_words(-1),
            Err(ConversionError::OutOfRange { min: 0, .. })
        ));
        assert!(matches!(
            speller.to_words(MAX + 1),
            Err(ConversionError::OutOfRange { max: MAX, .. })
        ));
        assert!(speller.to_words(MAX).is_ok());
    }
}
