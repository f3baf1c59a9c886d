//! Versification systems and reference forms
//!
//!     A [VersificationId] names an external book/chapter/verse scheme. A [ReferenceForm]
//!     names the shape a [Reference](crate::bibleutils::reference::Reference) is expressed
//!     in, which decides what its book fields hold: canonical [BookId](crate::bibleutils::books::BookId)s
//!     for the internal `BIBLEUTILS` form, external book names for every other form.

use crate::bibleutils::identifier::identifiers;

identifiers! {
    /// Supported external versification systems.
    pub enum VersificationId ("versification system") {
        /// ETCBC Hebrew Bible.
        Etcbch = 1 => "ETCBCH",
        /// ETCBC Greek New Testament.
        Etcbcg = 2 => "ETCBCG",
        IgntpSinaiticus = 3 => "IGNTPSinaiticus",
        Accordance = 4 => "Accordance",
    }
}

identifiers! {
    /// Output forms a reference may be expressed in.
    pub enum ReferenceForm ("reference form") {
        /// The canonical internal form.
        Bibleutils = 0 => "BIBLEUTILS",
        Etcbcg = 1 => "ETCBCG",
        Etcbch = 2 => "ETCBCH",
        IgntpSinaiticus = 3 => "IGNTPSinaiticus",
    }
}

impl ReferenceForm {
    pub fn is_internal(self) -> bool {
        self == ReferenceForm::Bibleutils
    }

    /// The versification system whose book names this form uses.
    pub fn versification(self) -> Option<VersificationId> {
        match self {
            ReferenceForm::Bibleutils => None,
            ReferenceForm::Etcbcg => Some(VersificationId::Etcbcg),
            ReferenceForm::Etcbch => Some(VersificationId::Etcbch),
            ReferenceForm::IgntpSinaiticus => Some(VersificationId::IgntpSinaiticus),
        }
    }
}

impl Default for ReferenceForm {
    fn default() -> Self {
        ReferenceForm::Bibleutils
    }
}
