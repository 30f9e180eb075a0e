//! Agreement rules and the validator that runs them
//!
//! Each rule inspects one `LinguisticMetadata` and returns a
//! `ValidationResult`. The validator runs its rules in order and
//! concatenates their errors; the content is valid only if every rule passes.

use crate::grammar::lexicon::Lexicon;
use crate::grammar::types::LinguisticMetadata;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const RULE_ADJECTIVE_GENDER_AGREEMENT: &str = "adjective_agrees_with_noun_gender";
pub const RULE_LEXICON_COVERAGE: &str = "lemma_present_in_lexicon";

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Identifier of the rule that failed
    pub rule: String,
    /// Correct surface form, when the rule can determine one
    pub expected: Option<String>,
    /// Surface form the author supplied
    pub actual: String,
    /// Human-readable correction
    pub suggestion: String,
}

/// Outcome of running one rule or a whole rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn fail(error: ValidationError) -> Self {
        Self {
            valid: false,
            errors: vec![error],
        }
    }

    /// Append another result's errors, keeping order
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
        self
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

/// The closed set of agreement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementRule {
    /// The adjective lemma must be in the lexicon (strict mode only)
    LexiconCoverage,
    /// The adjective surface form must match the noun's gender, number and
    /// definiteness
    AdjectiveGenderAgreement,
}

impl AgreementRule {
    pub fn id(&self) -> &'static str {
        match self {
            AgreementRule::LexiconCoverage => RULE_LEXICON_COVERAGE,
            AgreementRule::AdjectiveGenderAgreement => RULE_ADJECTIVE_GENDER_AGREEMENT,
        }
    }

    pub fn validate(&self, lexicon: &Lexicon, metadata: &LinguisticMetadata) -> ValidationResult {
        match self {
            AgreementRule::LexiconCoverage => check_lexicon_coverage(lexicon, metadata),
            AgreementRule::AdjectiveGenderAgreement => check_gender_agreement(lexicon, metadata),
        }
    }
}

fn check_lexicon_coverage(lexicon: &Lexicon, metadata: &LinguisticMetadata) -> ValidationResult {
    let adjective = &metadata.adjective;
    if lexicon.adjective(&adjective.lemma).is_some() {
        return ValidationResult::pass();
    }

    ValidationResult::fail(ValidationError {
        rule: RULE_LEXICON_COVERAGE.to_string(),
        expected: None,
        actual: adjective.form.clone(),
        suggestion: format!(
            "Adjective \"{}\" is not in the lexicon; add it or check the lemma spelling.",
            adjective.lemma
        ),
    })
}

fn check_gender_agreement(lexicon: &Lexicon, metadata: &LinguisticMetadata) -> ValidationResult {
    let noun = &metadata.noun;
    let adjective = &metadata.adjective;

    let Some(expected) = lexicon.expected_adjective_form(
        &adjective.lemma,
        noun.gender,
        noun.number,
        noun.definiteness,
    ) else {
        debug!(
            "Skipping agreement check: adjective '{}' not in lexicon",
            adjective.lemma
        );
        return ValidationResult::pass();
    };

    if expected == adjective.form {
        return ValidationResult::pass();
    }

    debug!(
        "Agreement mismatch for '{}' + '{}': expected '{}', got '{}'",
        adjective.lemma, noun.lemma, expected, adjective.form
    );

    ValidationResult::fail(ValidationError {
        rule: RULE_ADJECTIVE_GENDER_AGREEMENT.to_string(),
        expected: Some(expected.to_string()),
        actual: adjective.form.clone(),
        suggestion: format!(
            "Use \"{}\" ({} {} {}) to agree with \"{}\" instead of \"{}\".",
            expected,
            noun.gender,
            noun.number,
            noun.definiteness,
            noun.lemma,
            adjective.form
        ),
    })
}

/// Runs an ordered list of agreement rules against a lexicon
#[derive(Debug, Clone)]
pub struct GrammarValidator {
    lexicon: Lexicon,
    rules: Vec<AgreementRule>,
}

impl GrammarValidator {
    /// Validator with the default rule set (gender agreement only)
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_rules(lexicon, vec![AgreementRule::AdjectiveGenderAgreement])
    }

    /// Validator that also reports adjectives missing from the lexicon
    pub fn strict(lexicon: Lexicon) -> Self {
        Self::with_rules(
            lexicon,
            vec![
                AgreementRule::LexiconCoverage,
                AgreementRule::AdjectiveGenderAgreement,
            ],
        )
    }

    pub fn with_rules(lexicon: Lexicon, rules: Vec<AgreementRule>) -> Self {
        Self { lexicon, rules }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rules(&self) -> &[AgreementRule] {
        &self.rules
    }

    /// Gender agreement check on its own, regardless of the configured rules
    pub fn validate_adjective_noun_pair(&self, metadata: &LinguisticMetadata) -> ValidationResult {
        AgreementRule::AdjectiveGenderAgreement.validate(&self.lexicon, metadata)
    }

    /// Run every configured rule and combine the results
    pub fn validate_content(&self, metadata: &LinguisticMetadata) -> ValidationResult {
        self.rules
            .iter()
            .map(|rule| rule.validate(&self.lexicon, metadata))
            .fold(ValidationResult::pass(), ValidationResult::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::types::{
        AdjectiveDescriptor, Definiteness, Gender, NounDescriptor, Number,
    };

    fn metadata(
        noun: &str,
        gender: Gender,
        number: Number,
        definiteness: Definiteness,
        adjective: &str,
        form: &str,
    ) -> LinguisticMetadata {
        LinguisticMetadata {
            noun: NounDescriptor {
                lemma: noun.into(),
                gender,
                number,
                definiteness,
            },
            adjective: AdjectiveDescriptor {
                lemma: adjective.into(),
                form: form.into(),
                agreement: String::new(),
            },
        }
    }

    #[test]
    fn test_predicate_adjective_valid() {
        // "Куќата е голема"
        let validator = GrammarValidator::new(Lexicon::builtin());
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "голем", "голема");

        let result = validator.validate_content(&m);
        assert_eq!(result, ValidationResult::pass());
    }

    #[test]
    fn test_masculine_form_on_feminine_noun() {
        let validator = GrammarValidator::new(Lexicon::builtin());
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "голем", "голем");

        let result = validator.validate_content(&m);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);

        let error = &result.errors[0];
        assert_eq!(error.rule, RULE_ADJECTIVE_GENDER_AGREEMENT);
        assert_eq!(error.expected.as_deref(), Some("голема"));
        assert_eq!(error.actual, "голем");
        assert!(error.suggestion.contains("голема"));
    }

    #[test]
    fn test_attributive_definite() {
        // "Големиот град"
        let validator = GrammarValidator::new(Lexicon::builtin());
        let ok = metadata("град", Gender::Masculine, Number::Singular, Definiteness::Definite, "голем", "големиот");
        assert!(validator.validate_content(&ok).valid);

        let wrong = metadata("град", Gender::Masculine, Number::Singular, Definiteness::Definite, "голем", "голем");
        let result = validator.validate_content(&wrong);
        assert_eq!(result.errors[0].expected.as_deref(), Some("големиот"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let validator = GrammarValidator::new(Lexicon::builtin());
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "голем", "Голема");
        assert!(!validator.validate_content(&m).valid);
    }

    #[test]
    fn test_unknown_adjective_skipped_by_default() {
        let validator = GrammarValidator::new(Lexicon::builtin());
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "зелен", "зелен");
        assert_eq!(validator.validate_content(&m), ValidationResult::pass());
    }

    #[test]
    fn test_unknown_adjective_reported_in_strict_mode() {
        let validator = GrammarValidator::strict(Lexicon::builtin());
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "зелен", "зелен");

        let result = validator.validate_content(&m);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule, RULE_LEXICON_COVERAGE);
        assert_eq!(result.errors[0].expected, None);
    }

    #[test]
    fn test_strict_mode_known_pair_behaves_like_default() {
        let validator = GrammarValidator::strict(Lexicon::builtin());
        let m = metadata("село", Gender::Neuter, Number::Plural, Definiteness::Definite, "мал", "малите");
        assert!(validator.validate_content(&m).valid);
    }

    #[test]
    fn test_pair_check_ignores_configured_rules() {
        let validator = GrammarValidator::with_rules(Lexicon::builtin(), vec![]);
        let m = metadata("куќа", Gender::Feminine, Number::Singular, Definiteness::Indefinite, "голем", "голем");

        assert!(validator.validate_content(&m).valid);
        assert!(!validator.validate_adjective_noun_pair(&m).valid);
    }

    #[test]
    fn test_merge_keeps_order() {
        let a = ValidationError {
            rule: "a".into(),
            expected: None,
            actual: "x".into(),
            suggestion: String::new(),
        };
        let b = ValidationError {
            rule: "b".into(),
            ..a.clone()
        };
        let merged = ValidationResult::fail(a).merge(ValidationResult::pass()).merge(ValidationResult::fail(b));
        assert!(!merged.valid);
        let rules: Vec<_> = merged.errors.iter().map(|e| e.rule.as_str()).collect();
        assert_eq!(rules, ["a", "b"]);
    }

    #[test]
    fn test_result_serializes_expected_as_null() {
        let result = ValidationResult::fail(ValidationError {
            rule: RULE_LEXICON_COVERAGE.into(),
            expected: None,
            actual: "зелен".into(),
            suggestion: "add it".into(),
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json["errors"][0]["expected"].is_null());
    }
}
