//! The closed set of item-type tags.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! item_types {
    ($($variant:ident => $tag:literal,)+) => {
        /// Item-type tag selecting the field and creator-role set of a record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ItemType {
            $(
                #[doc = concat!("`", $tag, "`")]
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl ItemType {
            /// Every item type, in tag order.
            pub const ALL: &'static [ItemType] = &[$(ItemType::$variant,)+];

            /// Wire tag for this item type.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ItemType::$variant => $tag,)+
                }
            }
        }

        impl FromStr for ItemType {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(ItemType::$variant),)+
                    _ => Err(RegistryError::UnknownItemType(s.to_string())),
                }
            }
        }
    };
}

item_types! {
    Annotation => "annotation",
    Artwork => "artwork",
    Attachment => "attachment",
    AudioRecording => "audioRecording",
    Bill => "bill",
    BlogPost => "blogPost",
    Book => "book",
    BookSection => "bookSection",
    Case => "case",
    ComputerProgram => "computerProgram",
    ConferencePaper => "conferencePaper",
    Dataset => "dataset",
    DictionaryEntry => "dictionaryEntry",
    Document => "document",
    Email => "email",
    EncyclopediaArticle => "encyclopediaArticle",
    Film => "film",
    ForumPost => "forumPost",
    Hearing => "hearing",
    InstantMessage => "instantMessage",
    Interview => "interview",
    JournalArticle => "journalArticle",
    Letter => "letter",
    MagazineArticle => "magazineArticle",
    Manuscript => "manuscript",
    Map => "map",
    NewspaperArticle => "newspaperArticle",
    Note => "note",
    Patent => "patent",
    Podcast => "podcast",
    Preprint => "preprint",
    Presentation => "presentation",
    RadioBroadcast => "radioBroadcast",
    Report => "report",
    Standard => "standard",
    Statute => "statute",
    Thesis => "thesis",
    TvBroadcast => "tvBroadcast",
    VideoRecording => "videoRecording",
    Webpage => "webpage",
}

impl ItemType {
    /// Note, attachment and annotation records carry content rather than
    /// bibliographic metadata and accept no creators.
    pub fn is_auxiliary(self) -> bool {
        matches!(
            self,
            ItemType::Note | ItemType::Attachment | ItemType::Annotation
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
