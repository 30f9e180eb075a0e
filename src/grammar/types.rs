//! Grammatical categories and the validation request
//!
//! `LinguisticMetadata` is produced by the content pipeline and is read-only
//! input to the validator. All types serialize with the camelCase / lowercase
//! spelling the pipeline already uses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical gender of a Macedonian noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "masculine" | "m" => Some(Gender::Masculine),
            "feminine" | "f" => Some(Gender::Feminine),
            "neuter" | "n" => Some(Gender::Neuter),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "singular" | "sg" => Some(Number::Singular),
            "plural" | "pl" => Some(Number::Plural),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Definiteness {
    Definite,
    Indefinite,
}

impl Definiteness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Definiteness::Definite => "definite",
            Definiteness::Indefinite => "indefinite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "definite" | "def" => Some(Definiteness::Definite),
            "indefinite" | "indef" => Some(Definiteness::Indefinite),
            _ => None,
        }
    }
}

impl fmt::Display for Definiteness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The noun half of a validation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounDescriptor {
    pub lemma: String,
    pub gender: Gender,
    pub number: Number,
    /// Operative definiteness for the adjective lookup. For a predicate
    /// adjective ("Куќата е голема") this is `Indefinite` even though the
    /// noun itself carries the article.
    pub definiteness: Definiteness,
}

/// The adjective half of a validation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveDescriptor {
    pub lemma: String,
    /// Surface form the author actually wrote
    pub form: String,
    /// Free-form tag describing the agreement the author intended
    #[serde(default)]
    pub agreement: String,
}

/// A noun + adjective pair submitted for validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinguisticMetadata {
    pub noun: NounDescriptor,
    pub adjective: AdjectiveDescriptor,
}
