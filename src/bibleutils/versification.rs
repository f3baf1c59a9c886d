//! External versification book tables
//!
//!     A [Versification] is a bidirectional mapping between the book names one external
//!     system uses and the canonical [BookId]s. The mapping must be one to one: a table
//!     in which two names reach the same book is rejected at construction.

use crate::bibleutils::books::BookId;
use crate::bibleutils::error::ConfigurationError;
use crate::bibleutils::forms::VersificationId;
use std::collections::HashMap;

/// ETCBC Hebrew Bible (BHSA) book names.
pub const ETCBCH_BOOKS: &[(&str, BookId)] = &[
    ("Genesis", BookId::Genesis),
    ("Exodus", BookId::Exodus),
    ("Leviticus", BookId::Leviticus),
    ("Numeri", BookId::Numbers),
    ("Deuteronomium", BookId::Deuteronomy),
    ("Josua", BookId::Joshua),
    ("Judices", BookId::Judges),
    ("Samuel_I", BookId::FirstSamuel),
    ("Samuel_II", BookId::SecondSamuel),
    ("Reges_I", BookId::FirstKings),
    ("Reges_II", BookId::SecondKings),
    ("Jesaia", BookId::Isaiah),
    ("Jeremia", BookId::Jeremiah),
    ("Ezechiel", BookId::Ezekiel),
    ("Hosea", BookId::Hosea),
    ("Joel", BookId::Joel),
    ("Amos", BookId::Amos),
    ("Obadia", BookId::Obadiah),
    ("Jona", BookId::Jonah),
    ("Micha", BookId::Micah),
    ("Nahum", BookId::Nahum),
    ("Habakuk", BookId::Habakkuk),
    ("Zephania", BookId::Zephaniah),
    ("Haggai", BookId::Haggai),
    ("Sacharia", BookId::Zechariah),
    ("Maleachi", BookId::Malachi),
    ("Psalmi", BookId::Psalms),
    ("Iob", BookId::Job),
    ("Proverbia", BookId::Proverbs),
    ("Ruth", BookId::Ruth),
    ("Canticum", BookId::SongOfSongs),
    ("Ecclesiastes", BookId::Ecclesiastes),
    ("Threni", BookId::Lamentations),
    ("Esther", BookId::Esther),
    ("Daniel", BookId::Daniel),
    ("Esra", BookId::Ezra),
    ("Nehemia", BookId::Nehemiah),
    ("Chronica_I", BookId::FirstChronicles),
    ("Chronica_II", BookId::SecondChronicles),
];

/// ETCBC Greek New Testament book names.
pub const ETCBCG_BOOKS: &[(&str, BookId)] = &[
    ("Genesis", BookId::Genesis),
    ("Exodus", BookId::Exodus),
    ("Matthew", BookId::Matthew),
    ("Mark", BookId::Mark),
    ("Luke", BookId::Luke),
    ("John", BookId::John),
    ("Acts", BookId::Acts),
    ("Romans", BookId::Romans),
    ("1Corinthians", BookId::FirstCorinthians),
    ("2Corinthians", BookId::SecondCorinthians),
    ("Galatians", BookId::Galatians),
    ("Ephesians", BookId::Ephesians),
    ("Philippians", BookId::Philippians),
    ("Colossians", BookId::Colossians),
    ("1Thessalonians", BookId::FirstThessalonians),
    ("2Thessalonians", BookId::SecondThessalonians),
    ("1Timothy", BookId::FirstTimothy),
    ("2Timothy", BookId::SecondTimothy),
    ("Titus", BookId::Titus),
    ("Philemon", BookId::Philemon),
    ("Hebrews", BookId::Hebrews),
    ("James", BookId::James),
    ("1Peter", BookId::FirstPeter),
    ("2Peter", BookId::SecondPeter),
    ("1John", BookId::FirstJohn),
    ("2John", BookId::SecondJohn),
    ("3John", BookId::ThirdJohn),
    ("Jude", BookId::Jude),
    ("Revelation", BookId::Revelation),
];

/// A named book table for one external versification system.
#[derive(Debug, Clone)]
pub struct Versification {
    vid: VersificationId,
    names: Vec<(String, BookId)>,
    forward: HashMap<String, BookId>,
    reverse: HashMap<BookId, usize>,
}

impl Versification {
    pub fn new(vid: VersificationId, table: &[(&str, BookId)]) -> Result<Self, ConfigurationError> {
        let mut names = Vec::with_capacity(table.len());
        let mut forward = HashMap::with_capacity(table.len());
        let mut reverse = HashMap::with_capacity(table.len());

        for &(name, book) in table {
            if forward.insert(name.to_string(), book).is_some() {
                return Err(ConfigurationError::DuplicateName {
                    name: name.to_string(),
                });
            }
            reverse.insert(book, names.len());
            names.push((name.to_string(), book));
        }

        if forward.len() != reverse.len() {
            return Err(ConfigurationError::AmbiguousBookTable {
                system: vid.symbol().to_string(),
                forward: forward.len(),
                reverse: reverse.len(),
            });
        }

        Ok(Self {
            vid,
            names,
            forward,
            reverse,
        })
    }

    pub fn vid(&self) -> VersificationId {
        self.vid
    }

    /// Internal book for a name in this system. Names are matched exactly.
    pub fn book_id(&self, name: &str) -> Option<BookId> {
        self.forward.get(name).copied()
    }

    /// This system's name for an internal book.
    pub fn book_name(&self, book: BookId) -> Option<&str> {
        self.reverse
            .get(&book)
            .map(|&index| self.names[index].0.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, book)` pairs in table order.
    pub fn books(&self) -> impl Iterator<Item = (&str, BookId)> + '_ {
        self.names.iter().map(|(name, book)| (name.as_str(), *book))
    }
}
