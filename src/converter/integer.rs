use super::lexicon::{AND, HUNDRED, MAGNITUDE_GROUPS, ONES, TEENS, TENS_MULTIPLES};

/// Spell out a whole number
///
/// Numbers below 1000 are handled piecewise (ones, teens, tens, hundreds);
/// larger numbers are split into 3-digit groups, each rendered on its own and
/// followed by its magnitude word.
///
/// Examples:
/// - 7 → "SEVEN"
/// - 23 → "TWENTY-THREE"
/// - 112 → "ONE HUNDRED AND TWELVE"
/// - 1012 → "ONE THOUSAND AND TWELVE"
pub fn render_integer(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => render_tens(n),
        100..=999 => render_hundreds(n),
        _ => render_groups(n),
    }
}

/// 20 to 99: tens word, hyphenated to the ones word when needed
fn render_tens(n: u64) -> String {
    let mut text = TENS_MULTIPLES[(n / 10) as usize].to_string();

    if n % 10 > 0 {
        text.push('-');
        text.push_str(ONES[(n % 10) as usize]);
    }

    text
}

/// 100 to 999: "<digit> HUNDRED", then "AND <rest>" when the rest is non-zero
fn render_hundreds(n: u64) -> String {
    let mut text = format!("{} {}", ONES[(n / 100) as usize], HUNDRED);

    let rest = n % 100;
    if rest > 0 {
        text.push(' ');
        text.push_str(AND);
        text.push(' ');
        text.push_str(&render_integer(rest));
    }

    text
}

/// 1000 and above: walk the 3-digit groups from least significant upwards
fn render_groups(mut n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut magnitude = 0;

    while n > 0 {
        let group = n % 1000;

        if group != 0 {
            let mut part = String::new();

            // Joins a bare 1..99 units group to the groups above it
            if magnitude == 0 && group < 100 {
                part.push_str(AND);
                part.push(' ');
            }

            part.push_str(&render_integer(group));

            let name = MAGNITUDE_GROUPS[magnitude];
            if !name.is_empty() {
                part.push(' ');
                part.push_str(name);
            }

            parts.push(part);
        }

        n /= 1000;
        magnitude += 1;
    }

    parts.reverse();
    parts.join(" ")
}
