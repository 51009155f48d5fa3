//! Grammatical gender and pronoun tables

use serde::{Deserialize, Serialize};

/// Grammatical gender of a referent
///
/// The discriminants are the integer codes callers pass around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// "it"
    #[default]
    Neutral = 0,
    /// "he"
    Masculine = 1,
    /// "she"
    Feminine = 2,
    /// "they"; takes plural verb agreement
    Plural = 3,
}

const NAMES: [&str; 4] = ["neutral", "masculine", "feminine", "plural"];
const POSSESSIVE_PRONOUNS: [&str; 4] = ["its", "his", "hers", "theirs"];
const POSSESSIVE_DETERMINERS: [&str; 4] = ["its", "his", "her", "their"];
const PERSONAL_PRONOUNS: [&str; 4] = ["it", "he", "she", "they"];
const OBJECTIVE_PRONOUNS: [&str; 4] = ["it", "him", "her", "them"];
const REFLEXIVE_PRONOUNS: [&str; 4] = ["itself", "himself", "herself", "themselves"];

impl Gender {
    /// All genders in code order
    pub const ALL: [Gender; 4] = [
        Gender::Neutral,
        Gender::Masculine,
        Gender::Feminine,
        Gender::Plural,
    ];

    /// Gender for an integer code, clamped into range
    pub fn from_code(code: i64) -> Self {
        match code {
            i64::MIN..=0 => Gender::Neutral,
            1 => Gender::Masculine,
            2 => Gender::Feminine,
            _ => Gender::Plural,
        }
    }

    /// Integer code
    pub fn code(self) -> u8 {
        self as u8
    }

    fn index(self) -> usize {
        self as usize
    }

    /// "neutral", "masculine", "feminine" or "plural"
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Stand-alone possessive: its, his, hers, theirs
    pub fn possessive_pronoun(self) -> &'static str {
        POSSESSIVE_PRONOUNS[self.index()]
    }

    /// Possessive before a noun: its, his, her, their
    pub fn possessive_determiner(self) -> &'static str {
        POSSESSIVE_DETERMINERS[self.index()]
    }

    /// Subject pronoun: it, he, she, they
    pub fn personal_pronoun(self) -> &'static str {
        PERSONAL_PRONOUNS[self.index()]
    }

    /// Object pronoun: it, him, her, them
    pub fn objective_pronoun(self) -> &'static str {
        OBJECTIVE_PRONOUNS[self.index()]
    }

    /// Reflexive pronoun: itself, himself, herself, themselves
    pub fn reflexive_pronoun(self) -> &'static str {
        REFLEXIVE_PRONOUNS[self.index()]
    }

    /// Whether a verb agreeing with this referent takes the plural form
    pub fn requires_plural_verb(self) -> bool {
        self == Gender::Plural
    }

    /// Choice index for [`resolve_verb_option`](crate::resolve_verb_option)
    pub fn plurality_index(self) -> usize {
        usize::from(self.requires_plural_verb())
    }
}

impl std::str::FromStr for Gender {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "neutral" | "n" | "it" => Ok(Gender::Neutral),
            "masculine" | "male" | "m" | "he" => Ok(Gender::Masculine),
            "feminine" | "female" | "f" | "she" => Ok(Gender::Feminine),
            "plural" | "p" | "they" => Ok(Gender::Plural),
            other => other
                .parse::<i64>()
                .map(Gender::from_code)
                .map_err(|_| crate::Error::Configuration(format!("Unknown gender: {s}"))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Plural of a pronoun: "it" becomes "them", everything else is unchanged
pub fn pluralize_pronoun(word: &str, count: i64) -> String {
    if count != 1 && word.eq_ignore_ascii_case("it") {
        "them".to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_clamps() {
        assert_eq!(Gender::from_code(-4), Gender::Neutral);
        assert_eq!(Gender::from_code(0), Gender::Neutral);
        assert_eq!(Gender::from_code(2), Gender::Feminine);
        assert_eq!(Gender::from_code(3), Gender::Plural);
        assert_eq!(Gender::from_code(42), Gender::Plural);
    }

    #[test]
    fn test_pronoun_tables() {
        assert_eq!(Gender::Masculine.possessive_determiner(), "his");
        assert_eq!(Gender::Feminine.possessive_pronoun(), "hers");
        assert_eq!(Gender::Feminine.possessive_determiner(), "her");
        assert_eq!(Gender::Plural.personal_pronoun(), "they");
        assert_eq!(Gender::Masculine.objective_pronoun(), "him");
        assert_eq!(Gender::Neutral.reflexive_pronoun(), "itself");
        assert_eq!(Gender::Plural.reflexive_pronoun(), "themselves");
    }

    #[test]
    fn test_plurality() {
        for gender in Gender::ALL {
            assert_eq!(gender.requires_plural_verb(), gender == Gender::Plural);
        }
        assert_eq!(Gender::Plural.plurality_index(), 1);
        assert_eq!(Gender::Feminine.plurality_index(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Plural".parse::<Gender>().unwrap(), Gender::Plural);
        assert_eq!("she".parse::<Gender>().unwrap(), Gender::Feminine);
        assert_eq!("1".parse::<Gender>().unwrap(), Gender::Masculine);
        assert_eq!("9".parse::<Gender>().unwrap(), Gender::Plural);
        assert!("robot".parse::<Gender>().is_err());
    }

    #[test]
    fn test_pluralize_pronoun() {
        assert_eq!(pluralize_pronoun("it", 2), "them");
        assert_eq!(pluralize_pronoun("It", 0), "them");
        assert_eq!(pluralize_pronoun("it", 1), "it");
        assert_eq!(pluralize_pronoun("him", 2), "him");
    }
}
