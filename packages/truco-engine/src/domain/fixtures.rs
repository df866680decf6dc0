use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g. `["1E", "7O", "12B"]`) into cards.
    ///
    /// Only for tokens known to be valid at compile time.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Parse a recorded two-player deal.
    pub fn deal(p0: &[&str], p1: &[&str]) -> [Vec<Card>; 2] {
        [Self::parse_hardcoded(p0), Self::parse_hardcoded(p1)]
    }
}
