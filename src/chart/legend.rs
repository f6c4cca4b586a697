//! Frontier legend text

use crate::frontier::Strategy;

/// Text box listing the frontier members and their ICERs
///
/// ```text
/// Optimal Strategy - B
///
///
/// Strategies on Frontier
///
/// A | ICER : N/A
/// B | ICER : 5.0
/// ```
///
/// The optimal line is present only when `optimal` is given.
pub fn legend_text(frontier: &[Strategy], optimal: Option<&Strategy>, icer_digits: usize) -> String {
    let mut text = String::new();
    if let Some(optimal) = optimal {
        text.push_str("Optimal Strategy - ");
        text.push_str(&optimal.label);
        text.push_str("\n\n\n");
    }
    text.push_str("Strategies on Frontier\n");
    for strategy in frontier {
        text.push('\n');
        text.push_str(&strategy.label);
        text.push_str(" | ICER : ");
        text.push_str(&strategy.icer_rounded(icer_digits));
    }
    text
}
