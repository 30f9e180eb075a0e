//! Form resolution over a lexicon
//!
//! Every lookup returns `Option`: a lemma missing from the lexicon is an
//! ordinary outcome, not an error.

use crate::grammar::lexicon::Lexicon;
use crate::grammar::types::{Definiteness, Gender, Number};

/// Definite-article suffixes: masculine "-от" (which also covers "-иот" and
/// "-јот"), feminine "-та", neuter "-то"
const DEFINITE_SUFFIXES: [&str; 3] = ["от", "та", "то"];

impl Lexicon {
    /// Expected surface form of an adjective for the given agreement features.
    ///
    /// Plural forms do not inflect for gender, so `gender` is ignored when
    /// `number` is plural.
    pub fn expected_adjective_form(
        &self,
        lemma: &str,
        gender: Gender,
        number: Number,
        definiteness: Definiteness,
    ) -> Option<&str> {
        let entry = self.adjective(lemma)?;
        let definite = definiteness == Definiteness::Definite;

        let form = match (number, gender, definite) {
            (Number::Plural, _, false) => &entry.plural_indef,
            (Number::Plural, _, true) => &entry.plural_def,
            (Number::Singular, Gender::Masculine, false) => &entry.masculine,
            (Number::Singular, Gender::Feminine, false) => &entry.feminine,
            (Number::Singular, Gender::Neuter, false) => &entry.neuter,
            (Number::Singular, Gender::Masculine, true) => &entry.masculine_def,
            (Number::Singular, Gender::Feminine, true) => &entry.feminine_def,
            (Number::Singular, Gender::Neuter, true) => &entry.neuter_def,
        };
        Some(form.as_str())
    }

    /// Gender of a noun lemma, if the noun is known
    pub fn detect_noun_gender(&self, lemma: &str) -> Option<Gender> {
        self.noun(lemma).map(|n| n.gender)
    }

    /// Resolve the noun's gender, then look up the matching adjective form.
    /// `None` if either lemma is unknown.
    pub fn correct_adjective_form(
        &self,
        adjective_lemma: &str,
        noun_lemma: &str,
        is_definite: bool,
        is_plural: bool,
    ) -> Option<&str> {
        let gender = self.detect_noun_gender(noun_lemma)?;
        let number = if is_plural { Number::Plural } else { Number::Singular };
        let definiteness = if is_definite {
            Definiteness::Definite
        } else {
            Definiteness::Indefinite
        };
        self.expected_adjective_form(adjective_lemma, gender, number, definiteness)
    }
}

/// Whether a noun surface form carries the definite article.
///
/// Purely a suffix check, so it works for nouns the lexicon has never seen.
pub fn is_definite_noun(surface_form: &str) -> bool {
    let word = surface_form.trim().to_lowercase();
    DEFINITE_SUFFIXES
        .iter()
        .any(|suffix| word.len() > suffix.len() && word.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_form_singular() {
        let lexicon = Lexicon::builtin();
        let form = |g, d| lexicon.expected_adjective_form("голем", g, Number::Singular, d);

        assert_eq!(form(Gender::Masculine, Definiteness::Indefinite), Some("голем"));
        assert_eq!(form(Gender::Feminine, Definiteness::Indefinite), Some("голема"));
        assert_eq!(form(Gender::Neuter, Definiteness::Indefinite), Some("големо"));
        assert_eq!(form(Gender::Masculine, Definiteness::Definite), Some("големиот"));
        assert_eq!(form(Gender::Feminine, Definiteness::Definite), Some("големата"));
        assert_eq!(form(Gender::Neuter, Definiteness::Definite), Some("големото"));
    }

    #[test]
    fn test_plural_ignores_gender() {
        let lexicon = Lexicon::builtin();
        for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
            assert_eq!(
                lexicon.expected_adjective_form("добар", gender, Number::Plural, Definiteness::Indefinite),
                Some("добри")
            );
            assert_eq!(
                lexicon.expected_adjective_form("добар", gender, Number::Plural, Definiteness::Definite),
                Some("добрите")
            );
        }
    }

    #[test]
    fn test_unknown_lemma_is_none() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.expected_adjective_form("зелен", Gender::Masculine, Number::Singular, Definiteness::Indefinite),
            None
        );
        assert_eq!(lexicon.detect_noun_gender("планина"), None);
    }

    #[test]
    fn test_detect_noun_gender() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.detect_noun_gender("куќа"), Some(Gender::Feminine));
        assert_eq!(lexicon.detect_noun_gender("град"), Some(Gender::Masculine));
        assert_eq!(lexicon.detect_noun_gender("дете"), Some(Gender::Neuter));
    }

    #[test]
    fn test_correct_adjective_form() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.correct_adjective_form("голем", "куќа", false, false), Some("голема"));
        assert_eq!(lexicon.correct_adjective_form("нов", "град", true, false), Some("новиот"));
        assert_eq!(lexicon.correct_adjective_form("мал", "село", true, true), Some("малите"));
        assert_eq!(lexicon.correct_adjective_form("мал", "планина", false, false), None);
        assert_eq!(lexicon.correct_adjective_form("зелен", "куќа", false, false), None);
    }

    #[test]
    fn test_is_definite_noun() {
        assert!(is_definite_noun("куќата"));
        assert!(is_definite_noun("градот"));
        assert!(is_definite_noun("селото"));
        assert!(is_definite_noun("Градот"));
        assert!(!is_definite_noun("куќа"));
        assert!(!is_definite_noun("град"));
        assert!(!is_definite_noun("село"));
    }

    #[test]
    fn test_is_definite_noun_unknown_word() {
        // not in the lexicon
        assert!(is_definite_noun("планината"));
        assert!(is_definite_noun("прозорецот"));
        assert!(!is_definite_noun("планина"));
    }

    #[test]
    fn test_bare_suffix_is_not_definite() {
        assert!(!is_definite_noun("то"));
        assert!(!is_definite_noun(""));
    }
}
