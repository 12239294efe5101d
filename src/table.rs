use crate::*;

lazy_static! {
    // Built from the entries generated by build.rs, never mutated afterwards
    static ref MIME_TABLE: MimeTable = {
        let table = MimeTable::from_static(types::entries::MIME_TYPE_ENTRIES);
        tracing::debug!(entries = table.len(), "mime table initialized");
        table
    };
}

/// Materializes the process-wide extension table.
///
/// Every lookup goes through the same one-time initialization, so calling
/// this is optional; it exists so a caller can pay the construction cost at
/// a point of its choosing. Initialization completes before any lookup
/// observes the table, on every thread.
pub fn init() -> &'static MimeTable {
    lazy_static::initialize(&MIME_TABLE);
    &*MIME_TABLE
}

/// Immutable map from a normalized extension (lowercase, no leading dot) to
/// a MIME type string.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    entries: HashMap<String, String>,
}

impl MimeTable {
    pub fn global() -> &'static MimeTable {
        init()
    }

    fn from_static(entries: &[(&str, &str)]) -> MimeTable {
        let mut table = MimeTable {
            entries: HashMap::with_capacity(entries.len()),
        };
        for (ext, mime) in entries {
            // Empty values are rejected by build.rs
            table.entries.insert(normalize_key(ext), mime.to_string());
        }
        table
    }

    /// Builds a table from extension/MIME pairs. Later pairs overwrite
    /// earlier ones whose extension normalizes to the same key.
    pub fn from_entries<I, K, V>(entries: I) -> Result<MimeTable>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = MimeTable::default();
        for (ext, mime) in entries {
            let ext = normalize_key(ext.as_ref());
            let mime = mime.into();
            if ext.is_empty() {
                return Err(MimeError::InvalidTable(format!(
                    "empty extension for {mime:?}"
                )));
            }
            if mime.trim().is_empty() {
                return Err(MimeError::InvalidTable(format!(
                    "extension {ext:?} maps to an empty mime type"
                )));
            }
            table.entries.insert(ext, mime);
        }
        Ok(table)
    }

    /// Parses a JSON object of `"ext": "mime/type"` pairs, the same format
    /// `mime_types.json` uses.
    pub fn from_json(json: &str) -> Result<MimeTable> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| {
            MimeError::InvalidTable(String::from("expected a JSON object"))
        })?;

        let mut pairs = Vec::with_capacity(object.len());
        for (ext, mime) in object {
            match mime.as_str() {
                Some(mime) => pairs.push((ext.as_str(), mime)),
                None => {
                    return Err(MimeError::InvalidTable(format!(
                        "extension {ext:?} does not map to a string"
                    )))
                }
            }
        }
        MimeTable::from_entries(pairs)
    }

    // Bare extension, dot optional, any case
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.entries
            .get(&normalize_key(extension))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.lookup(extension).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(ext, mime)| (ext.as_str(), mime.as_str()))
    }
}

fn normalize_key(extension: &str) -> String {
    let extension = extension.trim();
    extension
        .strip_prefix('.')
        .unwrap_or(extension)
        .to_lowercase()
}
