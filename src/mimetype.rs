use std::ffi::OsStr;

use crate::*;

/// Resolves a file name, path or bare extension to a MIME type.
///
/// `"word.docx"`, `"C:\\users\\file.txt"`, `".gz"` and `"PDF"` are all
/// accepted. Anything that cannot be resolved, including `None` and blank
/// input, yields [`DEFAULT_MIME_TYPE`].
pub fn get_mime_type<'a>(input: impl Into<Option<&'a str>>) -> &'static str {
    MimeTable::global().resolve(input)
}

/// Resolves a path through the extension of its file name. A dot-file name
/// is all extension, so `.gz` resolves like `"gz"`; a name without a dot
/// (`Makefile`, `pdf`) has none and gets the default.
pub fn get_mime_type_for_path(path: &Path) -> &'static str {
    let file_name = path.file_name().and_then(OsStr::to_str).unwrap_or_default();
    match file_name.rfind('.') {
        Some(i) => get_mime_type(&file_name[i..]),
        None => DEFAULT_MIME_TYPE,
    }
}

/// Resolves the path component of a URL or request target.
///
/// The query string and fragment are dropped and the remainder is
/// percent-decoded before the extension is taken, so
/// `/files/annual%20report.PDF?download=1` resolves to `application/pdf`.
pub fn get_mime_type_for_url(url: &str) -> &'static str {
    let bare_url = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    match urlencoding::decode(bare_url) {
        Ok(decoded) => get_mime_type(decoded.as_ref()),
        _ => get_mime_type(bare_url),
    }
}

impl MimeTable {
    pub fn resolve<'a>(&self, input: impl Into<Option<&'a str>>) -> &str {
        let input = match input.into() {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return DEFAULT_MIME_TYPE,
        };

        let extension = extension_of(input);
        match self.lookup(extension) {
            Some(mime) => mime,
            None => {
                tracing::trace!(input, extension, "no mime type for extension");
                DEFAULT_MIME_TYPE
            }
        }
    }
}

// Text after the last '.' of the final path segment, or the whole input when
// there is no such extension
fn extension_of(input: &str) -> &str {
    let file_name = input
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(input);
    match file_name.rfind('.') {
        Some(i) if i + 1 < file_name.len() => &file_name[i + 1..],
        _ => input,
    }
}
