//! # Sections
//!
//! The fixed set of pages in the portfolio. Sections are known at compile
//! time: the landing page plus one profile per turtle.
//!
//! ```text
//! index  id             title
//! 0      landing        TMNT Portfolio - Teenage Mutant Ninja Turtles
//! 1      leonardo       TMNT Portfolio - Leonardo
//! 2      donatello      TMNT Portfolio - Donatello
//! 3      raphael        TMNT Portfolio - Raphael
//! 4      michelangelo   TMNT Portfolio - Michelangelo
//! ```

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Landing,
    Leonardo,
    Donatello,
    Raphael,
    Michelangelo,
}

/// Keyboard order. Previous/next walk this list.
pub const ORDER: [Section; 5] = [
    Section::Landing,
    Section::Leonardo,
    Section::Donatello,
    Section::Raphael,
    Section::Michelangelo,
];

const LANDING_TITLE: &str = "TMNT Portfolio - Teenage Mutant Ninja Turtles";
const DEFAULT_QUOTE: &str = "Turtle Power! Heroes in a half shell!";

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Landing => "landing",
            Section::Leonardo => "leonardo",
            Section::Donatello => "donatello",
            Section::Raphael => "raphael",
            Section::Michelangelo => "michelangelo",
        }
    }

    /// Short label used on the navigation buttons.
    pub fn label(self) -> &'static str {
        match self {
            Section::Landing => "HOME",
            Section::Leonardo => "LEO",
            Section::Donatello => "DONNIE",
            Section::Raphael => "RAPH",
            Section::Michelangelo => "MIKEY",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Landing => LANDING_TITLE,
            Section::Leonardo => "TMNT Portfolio - Leonardo",
            Section::Donatello => "TMNT Portfolio - Donatello",
            Section::Raphael => "TMNT Portfolio - Raphael",
            Section::Michelangelo => "TMNT Portfolio - Michelangelo",
        }
    }

    /// The line shown when the user presses Enter on this section.
    pub fn quote(self) -> &'static str {
        match self {
            Section::Leonardo => {
                "Leadership is not about being in charge. It's about taking care of those in your charge."
            }
            Section::Donatello => "The best way to predict the future is to invent it!",
            Section::Raphael => {
                "I never back down from a fight, especially when my family is involved!"
            }
            Section::Michelangelo => "Cowabunga! Life's too short not to have fun!",
            Section::Landing => DEFAULT_QUOTE,
        }
    }

    /// Position in [`ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A section identifier that doesn't name any known section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTarget(pub String);

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {:?}", self.0)
    }
}

impl std::error::Error for InvalidTarget {}

impl FromStr for Section {
    type Err = InvalidTarget;

    /// Identifiers are matched exactly (lowercase), like the `data-*`
    /// attributes the buttons carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDER
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| InvalidTarget(s.to_string()))
    }
}

/// Title for an arbitrary identifier, falling back to the landing title.
pub fn page_title(id: &str) -> &'static str {
    id.parse::<Section>()
        .map(Section::title)
        .unwrap_or(LANDING_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, section) in ORDER.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_page_title_for_every_known_id() {
        assert_eq!(
            page_title("landing"),
            "TMNT Portfolio - Teenage Mutant Ninja Turtles"
        );
        assert_eq!(page_title("leonardo"), "TMNT Portfolio - Leonardo");
        assert_eq!(page_title("donatello"), "TMNT Portfolio - Donatello");
        assert_eq!(page_title("raphael"), "TMNT Portfolio - Raphael");
        assert_eq!(page_title("michelangelo"), "TMNT Portfolio - Michelangelo");
    }

    #[test]
    fn test_page_title_unknown_falls_back_to_landing() {
        assert_eq!(page_title("splinter"), LANDING_TITLE);
        assert_eq!(page_title(""), LANDING_TITLE);
        assert_eq!(page_title("Raphael"), LANDING_TITLE);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "shredder".parse::<Section>().unwrap_err();
        assert_eq!(err, InvalidTarget("shredder".to_string()));
        assert!(err.to_string().contains("shredder"));
    }

    #[test]
    fn test_from_str_round_trips_ids() {
        for section in ORDER {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_landing_uses_default_quote() {
        assert_eq!(Section::Landing.quote(), DEFAULT_QUOTE);
        assert_eq!(
            Section::Raphael.quote(),
            "I never back down from a fight, especially when my family is involved!"
        );
    }
}
