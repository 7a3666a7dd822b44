//! Static page content for each section.

use crate::core::section::Section;

/// An RGB colour, kept free of any UI crate so the core stays UI-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0x00, 0xff, 0x00);
    pub const YELLOW: Rgb = Rgb(0xff, 0xff, 0x00);
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
}

pub struct Stat {
    pub name: &'static str,
    /// 0..=100
    pub value: u8,
}

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub weapon: &'static str,
    pub color: Rgb,
    pub bio: &'static str,
    pub stats: &'static [Stat],
}

static LEONARDO: Profile = Profile {
    name: "LEONARDO",
    tagline: "Leads",
    weapon: "Twin katanas",
    color: Rgb(0x1e, 0x90, 0xff),
    bio: "Team strategist. Plans every mission twice and still keeps a backup.",
    stats: &[
        Stat { name: "LEADERSHIP", value: 95 },
        Stat { name: "SWORDSMANSHIP", value: 90 },
        Stat { name: "DISCIPLINE", value: 88 },
        Stat { name: "HUMOR", value: 40 },
    ],
};

static DONATELLO: Profile = Profile {
    name: "DONATELLO",
    tagline: "Does machines",
    weapon: "Bo staff",
    color: Rgb(0x99, 0x32, 0xcc),
    bio: "Engineer and inventor. Builds the gadgets, fixes the van, writes the code.",
    stats: &[
        Stat { name: "INTELLIGENCE", value: 99 },
        Stat { name: "ENGINEERING", value: 97 },
        Stat { name: "STRENGTH", value: 60 },
        Stat { name: "PATIENCE", value: 80 },
    ],
};

static RAPHAEL: Profile = Profile {
    name: "RAPHAEL",
    tagline: "Cool but rude",
    weapon: "Twin sai",
    color: Rgb(0xdc, 0x14, 0x3c),
    bio: "The muscle. Hot-headed, fiercely loyal, first through the door.",
    stats: &[
        Stat { name: "STRENGTH", value: 96 },
        Stat { name: "TOUGHNESS", value: 92 },
        Stat { name: "TEMPER", value: 99 },
        Stat { name: "PATIENCE", value: 15 },
    ],
};

static MICHELANGELO: Profile = Profile {
    name: "MICHELANGELO",
    tagline: "Party dude",
    weapon: "Nunchucks",
    color: Rgb(0xff, 0x8c, 0x00),
    bio: "Free spirit and skateboarder. Keeps the team laughing and the pizza coming.",
    stats: &[
        Stat { name: "AGILITY", value: 94 },
        Stat { name: "CREATIVITY", value: 90 },
        Stat { name: "HUMOR", value: 100 },
        Stat { name: "FOCUS", value: 35 },
    ],
};

/// Profile for a turtle section. The landing page has none.
pub fn profile(section: Section) -> Option<&'static Profile> {
    match section {
        Section::Landing => None,
        Section::Leonardo => Some(&LEONARDO),
        Section::Donatello => Some(&DONATELLO),
        Section::Raphael => Some(&RAPHAEL),
        Section::Michelangelo => Some(&MICHELANGELO),
    }
}

pub const LANDING_HEADLINE: &str = "TEENAGE MUTANT NINJA TURTLES";
pub const LANDING_SUBTITLE: &str = "Heroes in a half shell";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::section::ORDER;

    #[test]
    fn test_every_turtle_has_a_profile() {
        for section in ORDER {
            assert_eq!(profile(section).is_some(), section != Section::Landing);
        }
    }

    #[test]
    fn test_stats_are_percentages() {
        for section in ORDER {
            if let Some(p) = profile(section) {
                assert!(!p.stats.is_empty());
                assert!(p.stats.iter().all(|s| s.value <= 100), "{}", p.name);
            }
        }
    }
}
