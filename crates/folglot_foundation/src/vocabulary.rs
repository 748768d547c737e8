//! The controlled vocabulary mapping English words to logical symbols.
//!
//! The vocabulary is built once at startup and read-only afterwards: the
//! `register_*` methods exist for construction (and for tests), and every
//! lookup takes `&self`. Extending the stock vocabulary is a static edit to
//! [`Vocabulary::standard`], not a runtime operation.
//!
//! Lookups are case-insensitive on the English side and symbol-exact on the
//! logic side. Surface forms may span several words ("can fly", "parent of",
//! "if and only if"); parsers match them longest-first.

use std::collections::{HashMap, HashSet};

/// The logical role of a quantifier word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantifierWord {
    /// "every", "all", "for every", ...: `∀`.
    Universal,
    /// "some", "a", "there exists", ...: `∃`.
    Existential,
    /// "no": `¬∃`.
    Negated,
}

/// The logical role of a connective word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectiveWord {
    /// "and": `∧`.
    And,
    /// "or": `∨`.
    Or,
    /// "not": `¬`.
    Not,
    /// "if": introduces a conditional.
    If,
    /// "then": separates antecedent from consequent.
    Then,
    /// "implies": infix `→`.
    Implies,
    /// "if and only if", "iff": `↔`.
    Iff,
}

/// A predicate definition: logical symbol, arity, and surface forms.
#[derive(Clone, Debug)]
pub struct PredicateEntry {
    /// The logical symbol, uppercase-initial ("Student").
    pub symbol: String,
    /// Number of arguments the predicate takes.
    pub arity: usize,
    /// Canonical surface phrase, lowercase ("student", "loves", "parent of").
    pub phrase: String,
    /// How the renderer writes it after a subject ("is a student", "loves").
    pub rendering: String,
    /// Additional surface phrases that map to the same symbol.
    pub synonyms: Vec<String>,
}

impl PredicateEntry {
    /// A one-place noun predicate: "student" renders as "is a student".
    #[must_use]
    pub fn noun(word: &str, symbol: &str) -> Self {
        let article = if starts_with_vowel(word) { "an" } else { "a" };
        Self {
            symbol: symbol.to_string(),
            arity: 1,
            phrase: word.to_lowercase(),
            rendering: format!("is {article} {}", word.to_lowercase()),
            synonyms: Vec::new(),
        }
    }

    /// A one-place adjective predicate: "mortal" renders as "is mortal".
    #[must_use]
    pub fn adjective(word: &str, symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            arity: 1,
            phrase: word.to_lowercase(),
            rendering: format!("is {}", word.to_lowercase()),
            synonyms: Vec::new(),
        }
    }

    /// A one-place intransitive verb phrase: "can fly" renders as itself.
    #[must_use]
    pub fn verb(phrase: &str, symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            arity: 1,
            phrase: phrase.to_lowercase(),
            rendering: phrase.to_lowercase(),
            synonyms: Vec::new(),
        }
    }

    /// A two-place transitive verb: "loves" renders as "loves".
    #[must_use]
    pub fn transitive(word: &str, symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            arity: 2,
            phrase: word.to_lowercase(),
            rendering: word.to_lowercase(),
            synonyms: Vec::new(),
        }
    }

    /// A two-place copular relation: phrase "parent of" with an explicit
    /// rendering like "is the parent of".
    #[must_use]
    pub fn relation(phrase: &str, symbol: &str, rendering: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            arity: 2,
            phrase: phrase.to_lowercase(),
            rendering: rendering.to_lowercase(),
            synonyms: Vec::new(),
        }
    }

    /// Adds a synonym surface phrase.
    #[must_use]
    pub fn with_synonym(mut self, phrase: &str) -> Self {
        self.synonyms.push(phrase.to_lowercase());
        self
    }
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// The word and symbol tables used by all parsers and renderers.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// All predicate definitions, in registration order.
    predicates: Vec<PredicateEntry>,
    /// Surface phrase (lowercase, including synonyms) -> predicate index.
    by_phrase: HashMap<String, usize>,
    /// Logical symbol -> predicate index.
    by_symbol: HashMap<String, usize>,
    /// Constant words; the word doubles as the logical symbol.
    constants: HashSet<String>,
    /// Quantifier words and phrases.
    quantifiers: HashMap<String, QuantifierWord>,
    /// Connective words and phrases.
    connectives: HashMap<String, ConnectiveWord>,
    /// Copulas ("is", "are").
    copulas: HashSet<String>,
    /// Articles ("a", "an", "the").
    articles: HashSet<String>,
    /// Longest registered phrase, in words.
    max_phrase_words: usize,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock vocabulary. Extending the engine's word list is an edit
    /// here, consumed identically by both translation directions.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocabulary = Self::new();

        for (word, role) in [
            ("every", QuantifierWord::Universal),
            ("all", QuantifierWord::Universal),
            ("each", QuantifierWord::Universal),
            ("for every", QuantifierWord::Universal),
            ("for all", QuantifierWord::Universal),
            ("some", QuantifierWord::Existential),
            ("a", QuantifierWord::Existential),
            ("an", QuantifierWord::Existential),
            ("there exists", QuantifierWord::Existential),
            ("no", QuantifierWord::Negated),
        ] {
            vocabulary.register_quantifier(word, role);
        }

        for (word, role) in [
            ("and", ConnectiveWord::And),
            ("or", ConnectiveWord::Or),
            ("not", ConnectiveWord::Not),
            ("if", ConnectiveWord::If),
            ("then", ConnectiveWord::Then),
            ("implies", ConnectiveWord::Implies),
            ("iff", ConnectiveWord::Iff),
            ("if and only if", ConnectiveWord::Iff),
        ] {
            vocabulary.register_connective(word, role);
        }

        vocabulary.register_copula("is");
        vocabulary.register_copula("are");
        vocabulary.register_article("a");
        vocabulary.register_article("an");
        vocabulary.register_article("the");

        vocabulary.register_predicate(PredicateEntry::adjective("human", "Human"));
        vocabulary.register_predicate(PredicateEntry::adjective("mortal", "Mortal"));
        vocabulary.register_predicate(PredicateEntry::adjective("wise", "Wise"));
        vocabulary.register_predicate(PredicateEntry::adjective("happy", "Happy"));
        vocabulary.register_predicate(PredicateEntry::noun("student", "Student"));
        vocabulary.register_predicate(PredicateEntry::noun("teacher", "Teacher"));
        vocabulary.register_predicate(PredicateEntry::noun("philosopher", "Philosopher"));
        vocabulary.register_predicate(PredicateEntry::noun("bird", "Bird"));
        vocabulary.register_predicate(PredicateEntry::verb("can fly", "CanFly").with_synonym("flies"));
        vocabulary.register_predicate(PredicateEntry::transitive("loves", "Loves"));
        vocabulary.register_predicate(PredicateEntry::transitive("teaches", "Teaches"));
        vocabulary.register_predicate(PredicateEntry::transitive("knows", "Knows"));
        vocabulary.register_predicate(PredicateEntry::transitive("likes", "Likes"));
        vocabulary.register_predicate(PredicateEntry::relation(
            "parent of",
            "ParentOf",
            "is the parent of",
        ));
        vocabulary.register_predicate(PredicateEntry::relation(
            "friend of",
            "FriendOf",
            "is a friend of",
        ));
        vocabulary.register_predicate(PredicateEntry::relation(
            "greater than",
            "GreaterThan",
            "is greater than",
        ));
        vocabulary.register_predicate(
            PredicateEntry::relation("equals", "Equals", "is equal to").with_synonym("equal to"),
        );

        for name in [
            "socrates",
            "plato",
            "aristotle",
            "alice",
            "bob",
            "john",
            "mary",
        ] {
            vocabulary.register_constant(name);
        }

        vocabulary
    }

    /// Registers a predicate with all its surface phrases.
    pub fn register_predicate(&mut self, entry: PredicateEntry) {
        let index = self.predicates.len();
        self.note_phrase(&entry.phrase);
        self.by_phrase.insert(entry.phrase.clone(), index);
        for synonym in &entry.synonyms {
            self.note_phrase(synonym);
            self.by_phrase.insert(synonym.clone(), index);
        }
        self.by_symbol.insert(entry.symbol.clone(), index);
        self.predicates.push(entry);
    }

    /// Registers a constant; the lowercase word is also the logical symbol.
    pub fn register_constant(&mut self, name: &str) {
        self.constants.insert(name.to_lowercase());
    }

    /// Registers a quantifier word or phrase.
    pub fn register_quantifier(&mut self, phrase: &str, role: QuantifierWord) {
        self.note_phrase(phrase);
        self.quantifiers.insert(phrase.to_lowercase(), role);
    }

    /// Registers a connective word or phrase.
    pub fn register_connective(&mut self, phrase: &str, role: ConnectiveWord) {
        self.note_phrase(phrase);
        self.connectives.insert(phrase.to_lowercase(), role);
    }

    /// Registers a copula form.
    pub fn register_copula(&mut self, word: &str) {
        self.copulas.insert(word.to_lowercase());
    }

    /// Registers an article.
    pub fn register_article(&mut self, word: &str) {
        self.articles.insert(word.to_lowercase());
    }

    /// Looks up a quantifier word or phrase, case-insensitively.
    #[must_use]
    pub fn lookup_quantifier(&self, phrase: &str) -> Option<QuantifierWord> {
        self.quantifiers.get(&phrase.to_lowercase()).copied()
    }

    /// Looks up a connective word or phrase, case-insensitively.
    #[must_use]
    pub fn lookup_connective(&self, phrase: &str) -> Option<ConnectiveWord> {
        self.connectives.get(&phrase.to_lowercase()).copied()
    }

    /// Looks up a predicate by surface phrase, case-insensitively.
    #[must_use]
    pub fn lookup_phrase(&self, phrase: &str) -> Option<&PredicateEntry> {
        self.by_phrase
            .get(&phrase.to_lowercase())
            .map(|&index| &self.predicates[index])
    }

    /// Looks up a predicate by logical symbol (exact match).
    #[must_use]
    pub fn lookup_symbol(&self, symbol: &str) -> Option<&PredicateEntry> {
        self.by_symbol
            .get(symbol)
            .map(|&index| &self.predicates[index])
    }

    /// Looks up a constant word, case-insensitively; returns its symbol.
    #[must_use]
    pub fn lookup_constant(&self, word: &str) -> Option<&str> {
        self.constants
            .get(&word.to_lowercase())
            .map(String::as_str)
    }

    /// Returns true if the symbol names a registered constant (exact match).
    #[must_use]
    pub fn has_constant_symbol(&self, symbol: &str) -> bool {
        self.constants.contains(symbol)
    }

    /// Returns true if the word is a copula ("is", "are").
    #[must_use]
    pub fn is_copula(&self, word: &str) -> bool {
        self.copulas.contains(&word.to_lowercase())
    }

    /// Returns true if the word is an article ("a", "an", "the").
    #[must_use]
    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(&word.to_lowercase())
    }

    /// Length in words of the longest registered phrase.
    #[must_use]
    pub const fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Iterates over all predicate definitions.
    pub fn predicates(&self) -> impl Iterator<Item = &PredicateEntry> {
        self.predicates.iter()
    }

    fn note_phrase(&mut self, phrase: &str) {
        let words = phrase.split_whitespace().count();
        if words > self.max_phrase_words {
            self.max_phrase_words = words;
        }
    }
}
