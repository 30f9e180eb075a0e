//! Macedonian adjective–noun agreement checking
//!
//! Content tooling feeds noun + adjective pairs through a `GrammarValidator`
//! before publication to catch authoring mistakes.
//!
//! ## Layers
//! 1. `lexicon`: adjective inflection tables, noun genders and definite forms
//! 2. `forms`: expected-form lookup and the definite-article suffix check
//! 3. `rules`: agreement rules and the validator that aggregates them
//!
//! ## Predicate adjectives
//! An adjective in predicate position ("Куќата е голема") takes the
//! indefinite form even though the noun is definite. The validator does not
//! parse sentences; it uses `noun.definiteness` from the metadata as the
//! operative value, so callers must pass `Indefinite` for predicates.

pub mod forms;
pub mod lexicon;
pub mod rules;
pub mod types;

pub use forms::is_definite_noun;
pub use lexicon::{AdjectiveEntry, Lexicon, NounEntry};
pub use rules::{
    AgreementRule, GrammarValidator, ValidationError, ValidationResult,
    RULE_ADJECTIVE_GENDER_AGREEMENT, RULE_LEXICON_COVERAGE,
};
pub use types::{
    AdjectiveDescriptor, Definiteness, Gender, LinguisticMetadata, NounDescriptor, Number,
};
