use super::integer::render_integer;

/// Spell out the cents part of an amount (0 to 99 hundredths)
///
/// Cents follow exactly the same rules as whole numbers; the domain simply
/// never reaches "HUNDRED" or a magnitude word.
pub fn render_fraction(hundredths: u8) -> String {
    debug_assert!(hundredths < 100, "hundredths out of range: {}", hundredths);
    render_integer(u64::from(hundredths))
}
