use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::*;

/// Coarse bucket a MIME type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MimeTypeCategory {
    #[default]
    Unknown,
    Video,
    Audio,
    Image,
    Document,
    Spreadsheet,
    Presentation,
    Pdf,
    Archive,
    Text,
    Json,
    Xml,
    Font,
    Model,
    Executable,
    Certificate,
    Calendar,
    Email,
}

impl MimeTypeCategory {
    pub const ALL: [MimeTypeCategory; 18] = [
        MimeTypeCategory::Unknown,
        MimeTypeCategory::Video,
        MimeTypeCategory::Audio,
        MimeTypeCategory::Image,
        MimeTypeCategory::Document,
        MimeTypeCategory::Spreadsheet,
        MimeTypeCategory::Presentation,
        MimeTypeCategory::Pdf,
        MimeTypeCategory::Archive,
        MimeTypeCategory::Text,
        MimeTypeCategory::Json,
        MimeTypeCategory::Xml,
        MimeTypeCategory::Font,
        MimeTypeCategory::Model,
        MimeTypeCategory::Executable,
        MimeTypeCategory::Certificate,
        MimeTypeCategory::Calendar,
        MimeTypeCategory::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MimeTypeCategory::Unknown => "unknown",
            MimeTypeCategory::Video => "video",
            MimeTypeCategory::Audio => "audio",
            MimeTypeCategory::Image => "image",
            MimeTypeCategory::Document => "document",
            MimeTypeCategory::Spreadsheet => "spreadsheet",
            MimeTypeCategory::Presentation => "presentation",
            MimeTypeCategory::Pdf => "pdf",
            MimeTypeCategory::Archive => "archive",
            MimeTypeCategory::Text => "text",
            MimeTypeCategory::Json => "json",
            MimeTypeCategory::Xml => "xml",
            MimeTypeCategory::Font => "font",
            MimeTypeCategory::Model => "model",
            MimeTypeCategory::Executable => "executable",
            MimeTypeCategory::Certificate => "certificate",
            MimeTypeCategory::Calendar => "calendar",
            MimeTypeCategory::Email => "email",
        }
    }
}

impl fmt::Display for MimeTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeTypeCategory {
    type Err = MimeError;

    fn from_str(s: &str) -> Result<Self> {
        MimeTypeCategory::ALL
            .iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| MimeError::UnknownCategory(s.to_string()))
    }
}

// Evaluated top to bottom, first match wins. XML and JSON come before the
// bare application/ and text/ prefixes, and calendar/email before text/.
// application/octet-stream belongs to Archive only.
const CATEGORY_RULES: &[(&str, MimeTypeCategory)] = &[
    (r"^(?:application|text)/(?:[\w.+-]*\+)?xml$", MimeTypeCategory::Xml),
    (r"^application/(?:[\w.+-]*\+)?json5?$", MimeTypeCategory::Json),
    (r"^(?:text/calendar|application/ics)$", MimeTypeCategory::Calendar),
    (
        r"^(?:message/(?:rfc822|global)|application/(?:mbox|x-msmessage))$",
        MimeTypeCategory::Email,
    ),
    (r"^video/", MimeTypeCategory::Video),
    (r"^audio/", MimeTypeCategory::Audio),
    (r"^image/", MimeTypeCategory::Image),
    (r"^font/", MimeTypeCategory::Font),
    (r"^model/", MimeTypeCategory::Model),
    (r"^text/", MimeTypeCategory::Text),
    (r"^application/pdf$", MimeTypeCategory::Pdf),
    (
        r"^application/(?:vnd\.ms-excel|vnd\.openxmlformats-officedocument\.spreadsheetml|vnd\.oasis\.opendocument\.spreadsheet)",
        MimeTypeCategory::Spreadsheet,
    ),
    (
        r"^application/(?:vnd\.ms-powerpoint|vnd\.openxmlformats-officedocument\.presentationml|vnd\.oasis\.opendocument\.presentation)",
        MimeTypeCategory::Presentation,
    ),
    (
        r"^application/(?:msword|vnd\.openxmlformats-officedocument\.wordprocessingml|vnd\.ms-word|vnd\.oasis\.opendocument\.text)",
        MimeTypeCategory::Document,
    ),
    (
        r"^application/(?:zip|x-7z-compressed|x-rar-compressed|gzip|vnd\.rar|octet-stream)$",
        MimeTypeCategory::Archive,
    ),
    (
        r"^application/(?:x-msdownload|x-executable|x-msi|x-apple-diskimage)$",
        MimeTypeCategory::Executable,
    ),
    (
        r"^application/(?:x-x509-ca-cert|pkix-cert|x-pkcs12)$",
        MimeTypeCategory::Certificate,
    ),
    (r"^application/", MimeTypeCategory::Document),
];

lazy_static! {
    static ref COMPILED_RULES: Vec<(Regex, MimeTypeCategory)> = CATEGORY_RULES
        .iter()
        .map(|(pattern, category)| {
            (
                Regex::new(pattern).expect("category patterns are valid regexes"),
                *category,
            )
        })
        .collect();
}

/// Classifies a MIME type string.
///
/// Matching is case-insensitive and ignores parameters such as
/// `; charset=utf-8`. Blank input, `None` and anything no rule claims are
/// [`MimeTypeCategory::Unknown`].
pub fn get_mime_category<'a>(mime: impl Into<Option<&'a str>>) -> MimeTypeCategory {
    let mime = match mime.into() {
        Some(s) => s.split(';').next().unwrap_or_default().trim(),
        None => return MimeTypeCategory::Unknown,
    };
    if mime.is_empty() {
        return MimeTypeCategory::Unknown;
    }

    let mime = mime.to_lowercase();
    COMPILED_RULES
        .iter()
        .find(|(rule, _)| rule.is_match(&mime))
        .map(|(_, category)| *category)
        .unwrap_or(MimeTypeCategory::Unknown)
}

macro_rules! category_predicates {
    ($($name:ident => $category:ident),* $(,)?) => {
        $(
            #[doc = concat!("Whether `mime` classifies as [`MimeTypeCategory::", stringify!($category), "`].")]
            pub fn $name<'a>(mime: impl Into<Option<&'a str>>) -> bool {
                get_mime_category(mime) == MimeTypeCategory::$category
            }
        )*
    };
}

category_predicates! {
    is_video => Video,
    is_audio => Audio,
    is_image => Image,
    is_document => Document,
    is_spreadsheet => Spreadsheet,
    is_presentation => Presentation,
    is_pdf => Pdf,
    is_archive => Archive,
    is_text => Text,
    is_json => Json,
    is_xml => Xml,
    is_font => Font,
    is_model => Model,
    is_executable => Executable,
    is_certificate => Certificate,
    is_calendar => Calendar,
    is_email => Email,
}
