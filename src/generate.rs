// Shared by build.rs (through include!) and the crate's unit tests, so it
// only names std items by full path.

// Emits one constant per key plus an `entries` module holding the raw pairs
// the runtime table is built from. `source` names the input in errors.
fn generate(source: &str, text: &str) -> Result<String, Box<dyn std::error::Error>> {
    use std::fmt::Write as _;

    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| format!("{source} is not valid JSON: {e}"))?;
    let object = value
        .as_object()
        .ok_or_else(|| format!("{source} must contain a single JSON object"))?;

    let mut entries: Vec<(String, String)> = Vec::with_capacity(object.len());
    let mut constants: Vec<(String, String)> = Vec::with_capacity(object.len());
    let mut positions: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for (key, mime) in object {
        let mime = match mime.as_str() {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(format!("extension {key:?} must map to a non-empty string").into()),
        };
        if key.is_empty() {
            return Err(format!("empty extension key for {mime:?}").into());
        }
        entries.push((key.clone(), mime.to_string()));

        // Duplicate identifiers overwrite in place
        let name = constant_name(key);
        match positions.get(&name) {
            Some(&i) => constants[i].1 = mime.to_string(),
            None => {
                positions.insert(name.clone(), constants.len());
                constants.push((name, mime.to_string()));
            }
        }
    }

    let mut out = String::new();
    writeln!(out, "// Generated by build.rs from {source}. Do not edit.")?;
    writeln!(out)?;
    for (name, mime) in &constants {
        writeln!(out, "pub const {name}: &str = {mime:?};")?;
    }
    writeln!(out)?;
    // Lowercase module name, so no generated constant can shadow it
    writeln!(out, "pub(crate) mod entries {{")?;
    writeln!(out, "    pub(crate) static MIME_TYPE_ENTRIES: &[(&str, &str)] = &[")?;
    for (key, mime) in &entries {
        writeln!(out, "        ({key:?}, {mime:?}),")?;
    }
    writeln!(out, "    ];")?;
    writeln!(out, "}}")?;

    Ok(out)
}

fn constant_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| match c {
            '-' => '_',
            c if c.is_ascii_alphanumeric() || c == '_' => c.to_ascii_uppercase(),
            _ => '_',
        })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consts(out: &str) -> Vec<&str> {
        out.lines().filter(|l| l.starts_with("pub const ")).collect()
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("pdf"), "PDF");
        assert_eq!(constant_name("x-foo"), "X_FOO");
        assert_eq!(constant_name("3gp"), "_3GP");
        assert_eq!(constant_name("7z"), "_7Z");
        assert_eq!(constant_name("tar.gz"), "TAR_GZ");
        assert_eq!(constant_name("c++"), "C__");
    }

    #[test]
    fn duplicate_names_last_one_wins() {
        let out = generate(
            "test.json",
            r#"{"x-foo": "application/x-first", "pdf": "application/pdf", "X_FOO": "application/x-second"}"#,
        )
        .unwrap();
        assert_eq!(
            consts(&out),
            vec![
                r#"pub const X_FOO: &str = "application/x-second";"#,
                r#"pub const PDF: &str = "application/pdf";"#,
            ]
        );
        // Every raw key still reaches the runtime table
        assert!(out.contains(r#"("x-foo", "application/x-first"),"#));
        assert!(out.contains(r#"("X_FOO", "application/x-second"),"#));
    }

    #[test]
    fn entry_list_cannot_collide_with_constants() {
        let out = generate("test.json", r#"{"mime_type_entries": "text/x-entries"}"#).unwrap();
        assert_eq!(
            consts(&out),
            vec![r#"pub const MIME_TYPE_ENTRIES: &str = "text/x-entries";"#]
        );
        assert!(out.contains("pub(crate) mod entries {"));
    }

    #[test]
    fn rejects_bad_sources() {
        assert!(generate("test.json", "{not json").is_err());
        assert!(generate("test.json", r#"["pdf"]"#).is_err());
        assert!(generate("test.json", r#"{"pdf": ""}"#).is_err());
        assert!(generate("test.json", r#"{"pdf": 3}"#).is_err());
        assert!(generate("test.json", r#"{"": "text/plain"}"#).is_err());
    }
}
