//! Small integers as English words

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Index 0 is never read: values below 20 use ONES.
const TENS: [&str; 10] = [
    "zero", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell `n` in words when it lies in `-99..=99`
///
/// Larger magnitudes are written as numerals, with a `-` sign rather than
/// the word "minus".
///
/// ```
/// use pluralizer_core::spell;
///
/// assert_eq!(spell(42), "forty-two");
/// assert_eq!(spell(-5), "minus five");
/// assert_eq!(spell(-150), "-150");
/// ```
pub fn spell(n: i64) -> String {
    let magnitude = n.unsigned_abs();
    if magnitude > 99 {
        return n.to_string();
    }

    let sign = if n < 0 { "minus " } else { "" };
    let m = magnitude as usize;

    if m < 20 {
        return format!("{sign}{}", ONES[m]);
    }

    let (tens, ones) = (m / 10, m % 10);
    if ones == 0 {
        format!("{sign}{}", TENS[tens])
    } else {
        format!("{sign}{}-{}", TENS[tens], ONES[ones])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_twenty() {
        assert_eq!(spell(0), "zero");
        assert_eq!(spell(1), "one");
        assert_eq!(spell(12), "twelve");
        assert_eq!(spell(15), "fifteen");
        assert_eq!(spell(19), "nineteen");
    }

    #[test]
    fn test_tens_and_hyphenation() {
        assert_eq!(spell(20), "twenty");
        assert_eq!(spell(42), "forty-two");
        assert_eq!(spell(90), "ninety");
        assert_eq!(spell(99), "ninety-nine");
    }

    #[test]
    fn test_negative_words() {
        assert_eq!(spell(-1), "minus one");
        assert_eq!(spell(-29), "minus twenty-nine");
        assert_eq!(spell(-99), "minus ninety-nine");
    }

    #[test]
    fn test_out_of_range_numerals() {
        assert_eq!(spell(100), "100");
        assert_eq!(spell(1234), "1234");
        assert_eq!(spell(-150), "-150");
        assert_eq!(spell(i64::MIN), i64::MIN.to_string());
    }
}
