//! Adjective inflection tables and noun gender data
//!
//! A `Lexicon` is built once and never mutated. The validator receives one
//! at construction time, so tests can hand in fixtures and several lexicon
//! versions can live side by side.

use crate::error::{JazikError, Result};
use crate::grammar::types::Gender;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Every lemma and surface form is a single Cyrillic word
static CYRILLIC_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Cyrillic}+$").unwrap()
});

/// Full inflection table for one adjective lemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjectiveEntry {
    pub lemma: String,
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub plural_indef: String,
    pub masculine_def: String,
    pub feminine_def: String,
    pub neuter_def: String,
    pub plural_def: String,
}

impl AdjectiveEntry {
    /// Build an entry from the eight forms in table order:
    /// m, f, n, pl, m.def, f.def, n.def, pl.def
    pub fn new(lemma: &str, forms: [&str; 8]) -> Self {
        let [m, f, n, pl, m_def, f_def, n_def, pl_def] = forms;
        Self {
            lemma: lemma.to_string(),
            masculine: m.to_string(),
            feminine: f.to_string(),
            neuter: n.to_string(),
            plural_indef: pl.to_string(),
            masculine_def: m_def.to_string(),
            feminine_def: f_def.to_string(),
            neuter_def: n_def.to_string(),
            plural_def: pl_def.to_string(),
        }
    }

    /// All eight forms with their slot names, for validation and display
    pub fn forms(&self) -> [(&'static str, &str); 8] {
        [
            ("masculine", &self.masculine),
            ("feminine", &self.feminine),
            ("neuter", &self.neuter),
            ("pluralIndef", &self.plural_indef),
            ("masculineDef", &self.masculine_def),
            ("feminineDef", &self.feminine_def),
            ("neuterDef", &self.neuter_def),
            ("pluralDef", &self.plural_def),
        ]
    }
}

/// Gender and definite form of one noun lemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NounEntry {
    pub lemma: String,
    pub gender: Gender,
    pub definite_form: String,
}

impl NounEntry {
    pub fn new(lemma: &str, gender: Gender, definite_form: &str) -> Self {
        Self {
            lemma: lemma.to_string(),
            gender,
            definite_form: definite_form.to_string(),
        }
    }
}

/// On-disk shape of a lexicon file
#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    adjectives: Vec<AdjectiveEntry>,
    #[serde(default)]
    nouns: Vec<NounEntry>,
}

/// Immutable dictionary of adjectives and nouns, keyed by exact lemma
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    adjectives: BTreeMap<String, AdjectiveEntry>,
    nouns: BTreeMap<String, NounEntry>,
}

impl Lexicon {
    /// Build a lexicon from entries, rejecting empty or non-Cyrillic forms
    /// and duplicate lemmas.
    pub fn new(adjectives: Vec<AdjectiveEntry>, nouns: Vec<NounEntry>) -> Result<Self> {
        let mut lexicon = Self::default();

        for entry in adjectives {
            check_form(&entry.lemma, "lemma", &entry.lemma)?;
            for (slot, form) in entry.forms() {
                check_form(&entry.lemma, slot, form)?;
            }
            if lexicon.adjectives.contains_key(&entry.lemma) {
                return Err(JazikError::InvalidLexicon(format!(
                    "duplicate adjective lemma '{}'",
                    entry.lemma
                )));
            }
            lexicon.adjectives.insert(entry.lemma.clone(), entry);
        }

        for entry in nouns {
            check_form(&entry.lemma, "lemma", &entry.lemma)?;
            check_form(&entry.lemma, "definiteForm", &entry.definite_form)?;
            if lexicon.nouns.contains_key(&entry.lemma) {
                return Err(JazikError::InvalidLexicon(format!(
                    "duplicate noun lemma '{}'",
                    entry.lemma
                )));
            }
            lexicon.nouns.insert(entry.lemma.clone(), entry);
        }

        Ok(lexicon)
    }

    /// The lexicon that ships with jazik
    pub fn builtin() -> Self {
        let adjectives = BUILTIN_ADJECTIVES
            .iter()
            .map(|(lemma, forms)| AdjectiveEntry::new(lemma, *forms))
            .map(|e| (e.lemma.clone(), e))
            .collect();
        let nouns = BUILTIN_NOUNS
            .iter()
            .map(|(lemma, gender, def)| NounEntry::new(lemma, *gender, def))
            .map(|e| (e.lemma.clone(), e))
            .collect();
        Self { adjectives, nouns }
    }

    /// Parse a lexicon from JSON: `{"adjectives": [...], "nouns": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(file.adjectives, file.nouns)
    }

    /// Load a lexicon file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| JazikError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&content)?;
        debug!(
            "Loaded lexicon from {:?}: {} adjectives, {} nouns",
            path,
            lexicon.adjectives.len(),
            lexicon.nouns.len()
        );
        Ok(lexicon)
    }

    /// Overlay `other` on top of this lexicon; entries in `other` win
    pub fn merged(mut self, other: Lexicon) -> Self {
        self.adjectives.extend(other.adjectives);
        self.nouns.extend(other.nouns);
        self
    }

    pub fn adjective(&self, lemma: &str) -> Option<&AdjectiveEntry> {
        self.adjectives.get(lemma)
    }

    pub fn noun(&self, lemma: &str) -> Option<&NounEntry> {
        self.nouns.get(lemma)
    }

    pub fn adjectives(&self) -> impl Iterator<Item = &AdjectiveEntry> {
        self.adjectives.values()
    }

    pub fn nouns(&self) -> impl Iterator<Item = &NounEntry> {
        self.nouns.values()
    }

    /// Serialize the whole lexicon back to the file format
    pub fn to_json_pretty(&self) -> Result<String> {
        let file = LexiconFile {
            adjectives: self.adjectives.values().cloned().collect(),
            nouns: self.nouns.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

fn check_form(lemma: &str, slot: &str, form: &str) -> Result<()> {
    if form.is_empty() {
        return Err(JazikError::InvalidLexicon(format!(
            "'{}' has an empty {} form",
            lemma, slot
        )));
    }
    if !CYRILLIC_WORD.is_match(form) {
        return Err(JazikError::InvalidLexicon(format!(
            "'{}' has a non-Cyrillic {} form '{}'",
            lemma, slot, form
        )));
    }
    Ok(())
}

// m, f, n, pl, m.def, f.def, n.def, pl.def
const BUILTIN_ADJECTIVES: &[(&str, [&str; 8])] = &[
    ("голем", ["голем", "голема", "големо", "големи", "големиот", "големата", "големото", "големите"]),
    ("мал", ["мал", "мала", "мало", "мали", "малиот", "малата", "малото", "малите"]),
    ("нов", ["нов", "нова", "ново", "нови", "новиот", "новата", "новото", "новите"]),
    ("стар", ["стар", "стара", "старо", "стари", "стариот", "старата", "старото", "старите"]),
    ("убав", ["убав", "убава", "убаво", "убави", "убавиот", "убавата", "убавото", "убавите"]),
    ("добар", ["добар", "добра", "добро", "добри", "добриот", "добрата", "доброто", "добрите"]),
    ("млад", ["млад", "млада", "младо", "млади", "младиот", "младата", "младото", "младите"]),
    ("црвен", ["црвен", "црвена", "црвено", "црвени", "црвениот", "црвената", "црвеното", "црвените"]),
    ("бел", ["бел", "бела", "бело", "бели", "белиот", "белата", "белото", "белите"]),
    ("тежок", ["тежок", "тешка", "тешко", "тешки", "тешкиот", "тешката", "тешкото", "тешките"]),
];

const BUILTIN_NOUNS: &[(&str, Gender, &str)] = &[
    ("куќа", Gender::Feminine, "куќата"),
    ("книга", Gender::Feminine, "книгата"),
    ("жена", Gender::Feminine, "жената"),
    ("вода", Gender::Feminine, "водата"),
    ("маса", Gender::Feminine, "масата"),
    ("град", Gender::Masculine, "градот"),
    ("ден", Gender::Masculine, "денот"),
    ("човек", Gender::Masculine, "човекот"),
    ("маж", Gender::Masculine, "мажот"),
    ("пат", Gender::Masculine, "патот"),
    ("крај", Gender::Masculine, "крајот"),
    ("село", Gender::Neuter, "селото"),
    ("дете", Gender::Neuter, "детето"),
    ("море", Gender::Neuter, "морето"),
    ("сонце", Gender::Neuter, "сонцето"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Lexicon::builtin();
        let rebuilt = Lexicon::new(
            builtin.adjectives().cloned().collect(),
            builtin.nouns().cloned().collect(),
        )
        .unwrap();
        assert_eq!(builtin, rebuilt);
    }

    #[test]
    fn test_lookup_is_exact() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.adjective("голем").is_some());
        assert!(lexicon.adjective("Голем").is_none());
        assert!(lexicon.adjective("голема").is_none());
        assert_eq!(lexicon.noun("куќа").map(|n| n.gender), Some(Gender::Feminine));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "adjectives": [{
                "lemma": "жолт", "masculine": "жолт", "feminine": "жолта", "neuter": "жолто",
                "pluralIndef": "жолти", "masculineDef": "жолтиот", "feminineDef": "жолтата",
                "neuterDef": "жолтото", "pluralDef": "жолтите"
            }],
            "nouns": [{"lemma": "ружа", "gender": "feminine", "definiteForm": "ружата"}]
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.adjective("жолт").unwrap().feminine_def, "жолтата");
        assert_eq!(lexicon.noun("ружа").unwrap().definite_form, "ружата");
    }

    #[test]
    fn test_rejects_empty_form() {
        let mut entry = AdjectiveEntry::new("голем", ["голем", "голема", "големо", "големи", "големиот", "големата", "големото", "големите"]);
        entry.neuter_def = String::new();
        let err = Lexicon::new(vec![entry], vec![]).unwrap_err();
        assert!(err.to_string().contains("neuterDef"));
    }

    #[test]
    fn test_rejects_latin_form() {
        let noun = NounEntry::new("kuka", Gender::Feminine, "kukata");
        assert!(matches!(
            Lexicon::new(vec![], vec![noun]),
            Err(JazikError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_lemma() {
        let a = NounEntry::new("куќа", Gender::Feminine, "куќата");
        let b = NounEntry::new("куќа", Gender::Masculine, "куќот");
        assert!(Lexicon::new(vec![], vec![a, b]).is_err());
    }

    #[test]
    fn test_merged_overrides_builtin() {
        let custom = Lexicon::new(
            vec![],
            vec![
                NounEntry::new("куќа", Gender::Neuter, "куќато"),
                NounEntry::new("ружа", Gender::Feminine, "ружата"),
            ],
        )
        .unwrap();
        let lexicon = Lexicon::builtin().merged(custom);
        assert_eq!(lexicon.noun("куќа").unwrap().gender, Gender::Neuter);
        assert!(lexicon.noun("ружа").is_some());
        assert!(lexicon.noun("град").is_some());
    }

    #[test]
    fn test_json_pretty_roundtrip() {
        let lexicon = Lexicon::builtin();
        let json = lexicon.to_json_pretty().unwrap();
        assert_eq!(Lexicon::from_json(&json).unwrap(), lexicon);
    }
}
