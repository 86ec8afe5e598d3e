//! The fixed list of selectable heroes.
//!
//! A `HeroCatalog` is built once and handed to whatever renders the
//! picklist. It is immutable after construction and cheap to clone.

use std::sync::Arc;

/// Stock hero entries, in display order.
pub const BUILTIN_HEROES: &[&str] = &[
    "IronMan", "CaptainAmerica", "Thor", "BlackWidow", "Hulk", "Hawkeye", "SpiderMan",
    "DoctorStrange", "BlackPanther", "ScarletWitch", "Vision", "AntMan", "Wasp", "Falcon",
    "WinterSoldier", "StarLord", "Gamora", "Drax", "Rocket", "Groot", "Loki",
    "CaptainMarvel", "NickFury", "Okoye", "Shuri", "TChalla", "WonderWoman", "Batman",
    "Superman", "Aquaman", "Flash", "Cyborg", "GreenLantern", "HarleyQuinn", "Joker",
    "Deadpool", "WadeWilson", "Venom", "SpiderGwen", "IronFist", "LukeCage",
    "JessicaJones", "Daredevil", "Elektra", "ScarletJohansson", "ChrisEvans",
    "ChrisHemsworth", "Scar", "McMende", "ChrisPratt", "ZoeSaldana", "BenedictCumberbatch",
    "TomHolland", "ChadwickBoseman", "PaulRudd", "TheUndertaker", "SamuelLJackson",
    "BrieLarson", "KarenGillan", "DaveBautista", "AnthonyMackie", "SebastianStan",
    "TomHiddleston", "Elsa", "PaulBettany", "JeremyRenner", "HayleyAtwell",
    "NataliePortman", "GalGadot", "HenryCavill", "BenAffleck", "JasonMomoa", "EzraMiller",
    "RayFisher", "MargotRobbie", "JaredLeto", "RyanReynolds", "TomHardy",
    "ShaileneWoodley", "DylanOBrien", "EmmaWatson", "DanielRadcliffe", "RobertPattinson",
    "LuciferMorningStar", "ChrisHemsworth2", "MarkRuffalo", "JakieChan",
];

/// An immutable, ordered list of hero names.
///
/// Duplicates are kept as distinct entries; order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCatalog {
    heroes: Arc<[String]>,
}

impl HeroCatalog {
    /// Build a catalog from any list of names.
    pub fn new<I, S>(heroes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heroes: heroes.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// The stock catalog shipped with the form.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_HEROES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.heroes.iter().map(String::as_str)
    }

    /// Whether `hero` matches a catalog entry exactly.
    pub fn contains(&self, hero: &str) -> bool {
        self.heroes.iter().any(|h| h == hero)
    }
}

impl Default for HeroCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
