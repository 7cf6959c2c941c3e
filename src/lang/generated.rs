// src/lang/generated.rs
//! Generated-code detection by file name, header comment and attribute.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static GENERATED_FILE_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^TemporaryGeneratedFile_.*|\.(g|g\.i|designer|generated)\.cs$|\.Assembly(Info|Attributes)\.cs$)",
    )
    .ok()
});

static GENERATED_ATTRIBUTE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bGeneratedCode(Attribute)?\s*(\(|\]|,)").ok());

/// True when the file name follows a code-generator naming convention.
#[must_use]
pub fn is_generated_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    GENERATED_FILE_NAME
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// True when the leading comment block carries an `<auto-generated>` marker.
/// Only comments before the first line of code are considered.
#[must_use]
pub fn has_generated_header(source: &str) -> bool {
    let mut in_block = false;
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let is_comment = in_block || trimmed.starts_with("//") || trimmed.starts_with("/*");
        if !is_comment {
            return false;
        }
        if mentions_auto_generated(trimmed) {
            return true;
        }
        if trimmed.starts_with("/*") {
            in_block = true;
        }
        if in_block && trimmed.contains("*/") {
            in_block = false;
        }
    }
    false
}

fn mentions_auto_generated(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("<auto-generated") || lower.contains("<autogenerated")
}

/// True when an attribute list such as `[GeneratedCode("tool", "1.0")]`
/// names the generated-code attribute.
#[must_use]
pub fn is_generated_attribute_list(text: &str) -> bool {
    GENERATED_ATTRIBUTE
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}
