//! Canonical book identifiers
//!
//!     [BookId] is the internal currency every conversion passes through. Values are fixed
//!     and contiguous: Old Testament 1-39, Apocrypha 40-56, New Testament 57-83.
//!
//!     [BookCatalog] wraps the registry built from that table and resolves free-form book
//!     names ("Exodus", "ex", "1Kings") to identifiers.

use crate::bibleutils::error::ConfigurationError;
use crate::bibleutils::identifier::{identifiers, Identifier};

identifiers! {
    /// Internal book identifier.
    pub enum BookId ("book") {
        // Old Testament
        Genesis = 1 => "GENESIS",
        Exodus = 2 => "EXODUS",
        Leviticus = 3 => "LEVITICUS",
        Numbers = 4 => "NUMBERS",
        Deuteronomy = 5 => "DEUTERONOMY",
        Joshua = 6 => "JOSHUA",
        Judges = 7 => "JUDGES",
        FirstSamuel = 8 => "1SAMUEL",
        SecondSamuel = 9 => "2SAMUEL",
        FirstKings = 10 => "1KINGS",
        SecondKings = 11 => "2KINGS",
        Isaiah = 12 => "ISAIAH",
        Jeremiah = 13 => "JEREMIAH",
        Ezekiel = 14 => "EZEKIEL",
        Hosea = 15 => "HOSEA",
        Joel = 16 => "JOEL",
        Amos = 17 => "AMOS",
        Obadiah = 18 => "OBADIAH",
        Jonah = 19 => "JONAH",
        Micah = 20 => "MICAH",
        Nahum = 21 => "NAHUM",
        Habakkuk = 22 => "HABAKKUK",
        Zephaniah = 23 => "ZEPHANIAH",
        Haggai = 24 => "HAGGAI",
        Zechariah = 25 => "ZECHARIAH",
        Malachi = 26 => "MALACHI",
        Psalms = 27 => "PSALMS",
        Job = 28 => "JOB",
        Proverbs = 29 => "PROVERBS",
        Ruth = 30 => "RUTH",
        SongOfSongs = 31 => "SONG_OF_SONGS",
        Ecclesiastes = 32 => "ECCLESIASTES",
        Lamentations = 33 => "LAMENTATIONS",
        Esther = 34 => "ESTHER",
        Daniel = 35 => "DANIEL",
        Ezra = 36 => "EZRA",
        Nehemiah = 37 => "NEHEMIAH",
        FirstChronicles = 38 => "1CHRONICLES",
        SecondChronicles = 39 => "2CHRONICLES",
        // Apocrypha
        FirstEsdras = 40 => "1ESDRAS",
        SecondEsdras = 41 => "2ESDRAS",
        Tobit = 42 => "TOBIT",
        Judith = 43 => "JUDITH",
        EstherApocrypha = 44 => "ESTHER_APOC",
        Wisdom = 45 => "WISDOM",
        Sirach = 46 => "SIRACH",
        Baruch = 47 => "BARUCH",
        /// The three chapter apocryphal additions to Daniel.
        DanielApocrypha = 48 => "DANIEL_APOC",
        Manasseh = 49 => "MANASSEH",
        FirstMaccabees = 50 => "1MACCABEES",
        SecondMaccabees = 51 => "2MACCABEES",
        ThirdMaccabees = 52 => "3MACCABEES",
        FourthMaccabees = 53 => "4MACCABEES",
        Susanna = 54 => "SUSANNA",
        Bel = 55 => "BEL",
        LetterOfJeremiah = 56 => "LETTER_OF_JEREMIAH",
        // New Testament
        Matthew = 57 => "MATTHEW",
        Mark = 58 => "MARK",
        Luke = 59 => "LUKE",
        John = 60 => "JOHN",
        Acts = 61 => "ACTS",
        Romans = 62 => "ROMANS",
        FirstCorinthians = 63 => "1CORINTHIANS",
        SecondCorinthians = 64 => "2CORINTHIANS",
        Galatians = 65 => "GALATIANS",
        Ephesians = 66 => "EPHESIANS",
        Philippians = 67 => "PHILIPPIANS",
        Colossians = 68 => "COLOSSIANS",
        FirstThessalonians = 69 => "1THESSALONIANS",
        SecondThessalonians = 70 => "2THESSALONIANS",
        FirstTimothy = 71 => "1TIMOTHY",
        SecondTimothy = 72 => "2TIMOTHY",
        Titus = 73 => "TITUS",
        Philemon = 74 => "PHILEMON",
        Hebrews = 75 => "HEBREWS",
        James = 76 => "JAMES",
        FirstPeter = 77 => "1PETER",
        SecondPeter = 78 => "2PETER",
        FirstJohn = 79 => "1JOHN",
        SecondJohn = 80 => "2JOHN",
        ThirdJohn = 81 => "3JOHN",
        Jude = 82 => "JUDE",
        Revelation = 83 => "REVELATION",
    }
}

/// Canon section a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Section {
    OldTestament,
    Apocrypha,
    NewTestament,
}

impl BookId {
    pub fn section(self) -> Section {
        match self.value() {
            1..=39 => Section::OldTestament,
            40..=56 => Section::Apocrypha,
            _ => Section::NewTestament,
        }
    }
}

/// Name resolution over the canonical book registry.
#[derive(Debug, Clone)]
pub struct BookCatalog {
    registry: Identifier,
}

impl BookCatalog {
    pub fn new() -> Result<Self, ConfigurationError> {
        Ok(Self {
            registry: BookId::registry()?,
        })
    }

    /// Resolve a book name case-insensitively.
    ///
    /// An exact symbol match wins. Otherwise the first symbol, in registry order, that
    /// starts with the name is used, which is what makes abbreviations like "Ex" or
    /// "Deut" work. Returns `None` when nothing matches.
    pub fn from_name(&self, name: &str) -> Option<BookId> {
        let wanted = name.trim().to_ascii_uppercase();
        if wanted.is_empty() {
            return None;
        }

        let value = self.registry.value(&wanted).or_else(|| {
            self.registry
                .iter()
                .find(|(symbol, _)| symbol.starts_with(&wanted))
                .map(|(_, value)| value)
        })?;
        BookId::from_value(value)
    }

    pub fn registry(&self) -> &Identifier {
        &self.registry
    }

    /// Books in canonical order.
    pub fn books(&self) -> impl Iterator<Item = BookId> + '_ {
        self.registry.iter().filter_map(|(_, value)| BookId::from_value(value))
    }
}
