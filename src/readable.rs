const SCALE_WORDS: [&str; 21] = [
    "",
    "million",
    "billion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "centillion",
];

const STEP: f64 = 1_000_000.0;

/// Renders `n` as a value rounded to two decimals followed by a scale word,
/// stepping by a factor of a million per word: `2500000` becomes `"2.5 million"`.
pub(crate) fn human_readable_number(n: u128) -> String {
    let mut value = n as f64;
    let mut index = 0;
    // compare the rounded value so 999,999.999 million moves up to the next word
    while round_cents(value) >= STEP && index < SCALE_WORDS.len() - 1 {
        value /= STEP;
        index += 1;
    }

    let cents = (value * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;

    let number = if fraction == 0 {
        whole
    } else if fraction % 10 == 0 {
        format!("{}.{}", whole, fraction / 10)
    } else {
        format!("{}.{:02}", whole, fraction)
    };

    match SCALE_WORDS[index] {
        "" => number,
        word => format!("{} {}", number, word),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
