//! Bilingual message catalog.
//!
//! Every string shown to the user exists once here as an English (primary)
//! and Arabic (secondary) pair. Validation failures are identified by a
//! [`MessageCode`]; static interface text by a [`Label`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primary/secondary text pair, rendered side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    /// English text.
    pub primary: &'static str,
    /// Arabic text.
    pub secondary: &'static str,
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.primary, self.secondary)
    }
}

/// Reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCode {
    /// The word field is empty or only whitespace.
    WordRequired,
    /// The word field holds more than one token.
    SingleWord,
    /// The word contains characters outside the Arabic block.
    ArabicOnly,
    /// The count is a number below 1.
    CountTooSmall,
    /// The count is not an integer.
    CountNotInteger,
}

impl MessageCode {
    /// All codes in catalog order.
    pub const ALL: [MessageCode; 5] = [
        Self::WordRequired,
        Self::SingleWord,
        Self::ArabicOnly,
        Self::CountTooSmall,
        Self::CountNotInteger,
    ];

    #[must_use]
    pub const fn text(self) -> LocalizedText {
        match self {
            Self::WordRequired => LocalizedText {
                primary: "Please enter an Arabic word",
                secondary: "يرجى إدخال كلمة عربية",
            },
            Self::SingleWord => LocalizedText {
                primary: "Please enter only one word",
                secondary: "يرجى إدخال كلمة واحدة فقط",
            },
            Self::ArabicOnly => LocalizedText {
                primary: "Please enter a word in Arabic",
                secondary: "يرجى إدخال كلمة باللغة العربية",
            },
            Self::CountTooSmall => LocalizedText {
                primary: "Please enter a number greater than or equal to 1",
                secondary: "يرجى إدخال رقم أكبر من أو يساوي 1",
            },
            Self::CountNotInteger => LocalizedText {
                primary: "Please enter an integer",
                secondary: "يرجى إدخال عدد صحيح",
            },
        }
    }

    #[must_use]
    pub const fn primary(self) -> &'static str {
        self.text().primary
    }

    #[must_use]
    pub const fn secondary(self) -> &'static str {
        self.text().secondary
    }

    /// Stable identifier used in logs and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WordRequired => "word_required",
            Self::SingleWord => "single_word",
            Self::ArabicOnly => "arabic_only",
            Self::CountTooSmall => "count_too_small",
            Self::CountNotInteger => "count_not_integer",
        }
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static interface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    WordField,
    CountField,
    Submit,
    Generating,
}

impl Label {
    #[must_use]
    pub const fn text(self) -> LocalizedText {
        match self {
            Self::Title => LocalizedText {
                primary: "Generate your own poem in the style of Al Mutanabi",
                secondary: "اصنع قصيدتك الخاصة على طراز المتنبي",
            },
            Self::WordField => LocalizedText {
                primary: "Arabic Word",
                secondary: "كلمة عربية",
            },
            Self::CountField => LocalizedText {
                primary: "Number",
                secondary: "رقم",
            },
            Self::Submit => LocalizedText {
                primary: "Generate",
                secondary: "توليد",
            },
            Self::Generating => LocalizedText {
                primary: "Generating poem...",
                secondary: "...جار إنشاء قصيدة",
            },
        }
    }
}
