//! Static per-item-type table.
//!
//! Field order follows the upstream editing form. Shorthand constructors:
//! `t` text, `n` number, `d` date, `ts` timestamp, `a` alias, `ad` date alias;
//! `p` primary creator role, `c` other creator role.

use crate::definition::{CreatorTypeDefinition, FieldDefinition, ItemTypeDefinition};
use crate::item_type::ItemType;

const fn t(field: &'static str) -> FieldDefinition {
    FieldDefinition::text(field)
}

const fn n(field: &'static str) -> FieldDefinition {
    FieldDefinition::number(field)
}

const fn d(field: &'static str) -> FieldDefinition {
    FieldDefinition::date(field)
}

const fn ts(field: &'static str) -> FieldDefinition {
    FieldDefinition::timestamp(field)
}

const fn a(field: &'static str, base: &'static str) -> FieldDefinition {
    FieldDefinition::alias(field, base)
}

const fn ad(field: &'static str, base: &'static str) -> FieldDefinition {
    FieldDefinition::date_alias(field, base)
}

const fn p(role: &'static str) -> CreatorTypeDefinition {
    CreatorTypeDefinition::primary(role)
}

const fn c(role: &'static str) -> CreatorTypeDefinition {
    CreatorTypeDefinition::secondary(role)
}

pub(crate) static ITEM_TYPES: &[ItemTypeDefinition] = &[
    ItemTypeDefinition {
        item_type: ItemType::Annotation,
        fields: &[
            t("annotationType"), t("annotationText"), t("annotationComment"),
            t("annotationColor"), t("annotationPageLabel"), t("annotationSortIndex"),
            t("annotationPosition"),
        ],
        creator_types: &[],
    },
    ItemTypeDefinition {
        item_type: ItemType::Artwork,
        fields: &[
            t("title"), t("abstractNote"), a("artworkMedium", "medium"), t("artworkSize"),
            d("date"), t("language"), t("shortTitle"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("url"), ts("accessDate"), t("rights"),
            t("extra"),
        ],
        creator_types: &[p("artist"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Attachment,
        fields: &[
            t("title"), t("url"), ts("accessDate"), t("linkMode"), t("contentType"),
            t("charset"), t("filename"), t("path"), t("md5"), n("mtime"), t("note"),
        ],
        creator_types: &[],
    },
    ItemTypeDefinition {
        item_type: ItemType::AudioRecording,
        fields: &[
            t("title"), t("abstractNote"), a("audioRecordingFormat", "medium"),
            t("seriesTitle"), t("volume"), n("numberOfVolumes"), t("place"),
            a("label", "publisher"), d("date"), t("runningTime"), t("language"), t("ISBN"),
            t("shortTitle"), t("archive"), t("archiveLocation"), t("libraryCatalog"),
            t("callNumber"), t("url"), ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("performer"), c("composer"), c("contributor"), c("wordsBy")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Bill,
        fields: &[
            t("title"), t("abstractNote"), a("billNumber", "number"), t("code"),
            a("codeVolume", "volume"), t("section"), a("codePages", "pages"),
            t("legislativeBody"), t("session"), t("history"), d("date"), t("language"),
            t("url"), ts("accessDate"), t("shortTitle"), t("rights"), t("extra"),
        ],
        creator_types: &[p("sponsor"), c("contributor"), c("cosponsor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::BlogPost,
        fields: &[
            t("title"), t("abstractNote"), a("blogTitle", "publicationTitle"),
            a("websiteType", "type"), d("date"), t("url"), ts("accessDate"), t("language"),
            t("shortTitle"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("commenter"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Book,
        fields: &[
            t("title"), t("abstractNote"), t("series"), t("seriesNumber"), t("volume"),
            n("numberOfVolumes"), t("edition"), t("place"), t("publisher"), d("date"),
            n("numPages"), t("language"), t("ISBN"), t("shortTitle"), t("url"),
            ts("accessDate"), t("archive"), t("archiveLocation"), t("libraryCatalog"),
            t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("seriesEditor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::BookSection,
        fields: &[
            t("title"), t("abstractNote"), a("bookTitle", "publicationTitle"), t("series"),
            t("seriesNumber"), t("volume"), n("numberOfVolumes"), t("edition"), t("place"),
            t("publisher"), d("date"), t("pages"), t("language"), t("ISBN"), t("shortTitle"),
            t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("bookAuthor"), c("contributor"), c("editor"), c("seriesEditor"),
            c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Case,
        fields: &[
            a("caseName", "title"), t("abstractNote"), a("court", "authority"),
            ad("dateDecided", "date"), a("docketNumber", "number"), t("reporter"),
            a("reporterVolume", "volume"), a("firstPage", "pages"), t("history"),
            t("language"), t("shortTitle"), t("url"), ts("accessDate"), t("archive"),
            t("archiveLocation"), t("libraryCatalog"), t("callNumber"), t("rights"),
            t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("counsel")],
    },
    ItemTypeDefinition {
        item_type: ItemType::ComputerProgram,
        fields: &[
            t("title"), t("abstractNote"), t("seriesTitle"), t("versionNumber"), d("date"),
            t("system"), t("place"), a("company", "publisher"), t("programmingLanguage"),
            t("ISBN"), t("shortTitle"), t("url"), t("rights"), t("archive"),
            t("archiveLocation"), t("libraryCatalog"), t("callNumber"), ts("accessDate"),
            t("extra"),
        ],
        creator_types: &[p("programmer"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::ConferencePaper,
        fields: &[
            t("title"), t("abstractNote"), d("date"), a("proceedingsTitle", "publicationTitle"),
            t("conferenceName"), t("place"), t("publisher"), t("volume"), t("pages"),
            t("series"), t("language"), t("DOI"), t("ISBN"), t("shortTitle"), t("url"),
            ts("accessDate"), t("archive"), t("archiveLocation"), t("libraryCatalog"),
            t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("seriesEditor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Dataset,
        fields: &[
            t("title"), t("abstractNote"), a("identifier", "number"), t("type"),
            t("versionNumber"), d("date"), a("repository", "publisher"), t("place"),
            a("format", "medium"), t("DOI"), t("citationKey"), t("url"), ts("accessDate"),
            t("archive"), t("archiveLocation"), t("shortTitle"), t("language"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::DictionaryEntry,
        fields: &[
            t("title"), t("abstractNote"), a("dictionaryTitle", "publicationTitle"),
            t("series"), t("seriesNumber"), t("volume"), n("numberOfVolumes"), t("edition"),
            t("place"), t("publisher"), d("date"), t("pages"), t("language"), t("ISBN"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("seriesEditor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Document,
        fields: &[
            t("title"), t("abstractNote"), t("publisher"), d("date"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("reviewedAuthor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Email,
        fields: &[
            a("subject", "title"), t("abstractNote"), d("date"), t("shortTitle"), t("url"),
            ts("accessDate"), t("language"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("recipient")],
    },
    ItemTypeDefinition {
        item_type: ItemType::EncyclopediaArticle,
        fields: &[
            t("title"), t("abstractNote"), a("encyclopediaTitle", "publicationTitle"),
            t("series"), t("seriesNumber"), t("volume"), n("numberOfVolumes"), t("edition"),
            t("place"), t("publisher"), d("date"), t("pages"), t("ISBN"), t("shortTitle"),
            t("url"), ts("accessDate"), t("language"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("seriesEditor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Film,
        fields: &[
            t("title"), t("abstractNote"), a("distributor", "publisher"), d("date"),
            a("genre", "type"), a("videoRecordingFormat", "medium"), t("runningTime"),
            t("language"), t("shortTitle"), t("url"), ts("accessDate"), t("archive"),
            t("archiveLocation"), t("libraryCatalog"), t("callNumber"), t("rights"),
            t("extra"),
        ],
        creator_types: &[
            p("director"), c("contributor"), c("producer"), c("scriptwriter"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::ForumPost,
        fields: &[
            t("title"), t("abstractNote"), a("forumTitle", "publicationTitle"),
            a("postType", "type"), d("date"), t("language"), t("shortTitle"), t("url"),
            ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("commenter"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Hearing,
        fields: &[
            t("title"), t("abstractNote"), t("committee"), t("place"), t("publisher"),
            n("numberOfVolumes"), a("documentNumber", "number"), t("pages"),
            t("legislativeBody"), t("session"), t("history"), d("date"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::InstantMessage,
        fields: &[
            t("title"), t("abstractNote"), d("date"), t("language"), t("shortTitle"),
            t("url"), ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("recipient")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Interview,
        fields: &[
            t("title"), t("abstractNote"), d("date"), a("interviewMedium", "medium"),
            t("language"), t("shortTitle"), t("url"), ts("accessDate"), t("archive"),
            t("archiveLocation"), t("libraryCatalog"), t("callNumber"), t("rights"),
            t("extra"),
        ],
        creator_types: &[
            p("interviewee"), c("contributor"), c("interviewer"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::JournalArticle,
        fields: &[
            t("title"), t("abstractNote"), t("publicationTitle"), t("volume"), t("issue"),
            t("pages"), d("date"), t("series"), t("seriesTitle"), t("seriesText"),
            t("journalAbbreviation"), t("language"), t("DOI"), t("ISSN"), t("shortTitle"),
            t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("reviewedAuthor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Letter,
        fields: &[
            t("title"), t("abstractNote"), a("letterType", "type"), d("date"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("recipient")],
    },
    ItemTypeDefinition {
        item_type: ItemType::MagazineArticle,
        fields: &[
            t("title"), t("abstractNote"), t("publicationTitle"), t("volume"), t("issue"),
            d("date"), t("pages"), t("language"), t("ISSN"), t("shortTitle"), t("url"),
            ts("accessDate"), t("archive"), t("archiveLocation"), t("libraryCatalog"),
            t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("reviewedAuthor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Manuscript,
        fields: &[
            t("title"), t("abstractNote"), a("manuscriptType", "type"), t("place"),
            d("date"), n("numPages"), t("language"), t("shortTitle"), t("url"),
            ts("accessDate"), t("archive"), t("archiveLocation"), t("libraryCatalog"),
            t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("translator")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Map,
        fields: &[
            t("title"), t("abstractNote"), a("mapType", "type"), t("scale"),
            t("seriesTitle"), t("edition"), t("place"), t("publisher"), d("date"),
            t("language"), t("ISBN"), t("shortTitle"), t("url"), ts("accessDate"),
            t("archive"), t("archiveLocation"), t("libraryCatalog"), t("callNumber"),
            t("rights"), t("extra"),
        ],
        creator_types: &[p("cartographer"), c("contributor"), c("seriesEditor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::NewspaperArticle,
        fields: &[
            t("title"), t("abstractNote"), t("publicationTitle"), t("place"), t("edition"),
            d("date"), t("section"), t("pages"), t("language"), t("shortTitle"), t("ISSN"),
            t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("reviewedAuthor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Note,
        fields: &[t("note")],
        creator_types: &[],
    },
    ItemTypeDefinition {
        item_type: ItemType::Patent,
        fields: &[
            t("title"), t("abstractNote"), t("place"), t("country"), t("assignee"),
            a("issuingAuthority", "authority"), a("patentNumber", "number"), d("filingDate"),
            t("pages"), t("applicationNumber"), t("priorityNumbers"),
            ad("issueDate", "date"), t("references"), t("legalStatus"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("inventor"), c("attorneyAgent"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Podcast,
        fields: &[
            t("title"), t("abstractNote"), t("seriesTitle"), a("episodeNumber", "number"),
            a("audioFileType", "medium"), t("runningTime"), t("url"), ts("accessDate"),
            t("language"), t("shortTitle"), t("rights"), t("extra"),
        ],
        creator_types: &[p("podcaster"), c("contributor"), c("guest")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Preprint,
        fields: &[
            t("title"), t("abstractNote"), a("genre", "type"), a("repository", "publisher"),
            a("archiveID", "number"), t("place"), d("date"), t("series"), t("seriesNumber"),
            t("DOI"), t("citationKey"), t("url"), ts("accessDate"), t("archive"),
            t("archiveLocation"), t("shortTitle"), t("language"), t("libraryCatalog"),
            t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("editor"), c("reviewedAuthor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Presentation,
        fields: &[
            t("title"), t("abstractNote"), a("presentationType", "type"), d("date"),
            t("place"), t("meetingName"), t("url"), ts("accessDate"), t("language"),
            t("shortTitle"), t("rights"), t("extra"),
        ],
        creator_types: &[p("presenter"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::RadioBroadcast,
        fields: &[
            t("title"), t("abstractNote"), a("programTitle", "publicationTitle"),
            a("episodeNumber", "number"), a("audioRecordingFormat", "medium"), t("place"),
            a("network", "publisher"), d("date"), t("runningTime"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("director"), c("castMember"), c("contributor"), c("guest"), c("producer"),
            c("scriptwriter"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Report,
        fields: &[
            t("title"), t("abstractNote"), a("reportNumber", "number"),
            a("reportType", "type"), t("seriesTitle"), t("place"),
            a("institution", "publisher"), d("date"), t("pages"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("author"), c("contributor"), c("seriesEditor"), c("translator"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Standard,
        fields: &[
            t("title"), t("abstractNote"), a("organization", "authority"), t("committee"),
            t("type"), t("number"), t("versionNumber"), t("status"), d("date"),
            t("publisher"), t("place"), t("DOI"), t("citationKey"), t("url"),
            ts("accessDate"), t("archive"), t("archiveLocation"), t("shortTitle"),
            n("numPages"), t("language"), t("libraryCatalog"), t("callNumber"), t("rights"),
            t("extra"),
        ],
        creator_types: &[p("author"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Statute,
        fields: &[
            a("nameOfAct", "title"), t("abstractNote"), t("code"), t("codeNumber"),
            a("publicLawNumber", "number"), ad("dateEnacted", "date"), t("pages"),
            t("section"), t("session"), t("history"), t("language"), t("shortTitle"),
            t("url"), ts("accessDate"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::Thesis,
        fields: &[
            t("title"), t("abstractNote"), a("thesisType", "type"),
            a("university", "publisher"), t("place"), d("date"), n("numPages"),
            t("language"), t("shortTitle"), t("url"), ts("accessDate"), t("archive"),
            t("archiveLocation"), t("libraryCatalog"), t("callNumber"), t("rights"),
            t("extra"),
        ],
        creator_types: &[p("author"), c("contributor")],
    },
    ItemTypeDefinition {
        item_type: ItemType::TvBroadcast,
        fields: &[
            t("title"), t("abstractNote"), a("programTitle", "publicationTitle"),
            a("episodeNumber", "number"), a("videoRecordingFormat", "medium"), t("place"),
            a("network", "publisher"), d("date"), t("runningTime"), t("language"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("director"), c("castMember"), c("contributor"), c("guest"), c("producer"),
            c("scriptwriter"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::VideoRecording,
        fields: &[
            t("title"), t("abstractNote"), a("videoRecordingFormat", "medium"),
            t("seriesTitle"), t("volume"), n("numberOfVolumes"), t("place"),
            a("studio", "publisher"), d("date"), t("runningTime"), t("language"), t("ISBN"),
            t("shortTitle"), t("url"), ts("accessDate"), t("archive"), t("archiveLocation"),
            t("libraryCatalog"), t("callNumber"), t("rights"), t("extra"),
        ],
        creator_types: &[
            p("director"), c("castMember"), c("contributor"), c("producer"),
            c("scriptwriter"),
        ],
    },
    ItemTypeDefinition {
        item_type: ItemType::Webpage,
        fields: &[
            t("title"), t("abstractNote"), a("websiteTitle", "publicationTitle"),
            a("websiteType", "type"), d("date"), t("shortTitle"), t("url"),
            ts("accessDate"), t("language"), t("rights"), t("extra"),
        ],
        creator_types: &[p("author"), c("contributor"), c("translator")],
    },
];
