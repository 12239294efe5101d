use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const MIME_TYPES_JSON: &str = "mime_types.json";

pub fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={MIME_TYPES_JSON}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/generate.rs");

    // git show -s --format="%ad %h %an <%ae> (%s)"
    let git_hash = Command::new("git")
        .args(["show", "-s", "--format=%ad %h %an <%ae> (%s)"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=GIT_COMMITID={git_hash}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let json_path = manifest_dir.join(MIME_TYPES_JSON);
    let text = fs::read_to_string(&json_path)
        .map_err(|e| format!("could not read {}: {e}", json_path.display()))?;

    let generated = generate(MIME_TYPES_JSON, &text)?;

    let out_path = PathBuf::from(env::var("OUT_DIR")?).join("mime_types.rs");
    fs::write(&out_path, generated)?;

    Ok(())
}

include!("src/generate.rs");
