use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Race {
    Human,
    Tajaran,
    Unathi,
    Skrell,
    Synthetic,
    Diona,
}

impl Race {
    pub fn all() -> [Race; 6] {
        [
            Race::Human,
            Race::Tajaran,
            Race::Unathi,
            Race::Skrell,
            Race::Synthetic,
            Race::Diona,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Tajaran => "Tajaran",
            Race::Unathi => "Unathi",
            Race::Skrell => "Skrell",
            Race::Synthetic => "Synthetic",
            Race::Diona => "Diona",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Race> {
        Self::all()
            .into_iter()
            .find(|race| race.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Title {
    Xenoarchaeologist,
    Miner,
    SecurityOfficer,
    Engineer,
    Scientist,
    MedicalDoctor,
    Roboticist,
}

impl Title {
    pub fn all() -> [Title; 7] {
        [
            Title::Xenoarchaeologist,
            Title::Miner,
            Title::SecurityOfficer,
            Title::Engineer,
            Title::Scientist,
            Title::MedicalDoctor,
            Title::Roboticist,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Title::Xenoarchaeologist => "Xenoarchaeologist",
            Title::Miner => "Miner",
            Title::SecurityOfficer => "Security Officer",
            Title::Engineer => "Engineer",
            Title::Scientist => "Scientist",
            Title::MedicalDoctor => "Medical Doctor",
            Title::Roboticist => "Roboticist",
        }
    }

    /// Case-insensitive lookup; `-` and `_` stand in for spaces.
    pub fn from_name(name: &str) -> Option<Title> {
        let wanted = name.trim().replace(|c: char| c == '-' || c == '_', " ");
        Self::all()
            .into_iter()
            .find(|title| title.name().eq_ignore_ascii_case(&wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_from_name() {
        assert_eq!(Race::from_name("skrell"), Some(Race::Skrell));
        assert_eq!(Race::from_name(" Diona "), Some(Race::Diona));
        assert_eq!(Race::from_name("vox"), None);
    }

    #[test]
    fn test_title_from_name() {
        assert_eq!(Title::from_name("security-officer"), Some(Title::SecurityOfficer));
        assert_eq!(Title::from_name("Medical Doctor"), Some(Title::MedicalDoctor));
        assert_eq!(Title::from_name("chef"), None);
        for title in Title::all() {
            assert_eq!(Title::from_name(title.name()), Some(title));
        }
    }
}
