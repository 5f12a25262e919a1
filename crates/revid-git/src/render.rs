//! Rust source generation for a resolved descriptor

use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::RevisionSettings;
use crate::{Error, Result};

/// Render a module exposing `descriptor` as an associated constant.
///
/// `generated_namespace` may name nested modules with `::` or `.`
/// separators; an empty namespace puts the type at the top level.
pub fn render_source(settings: &RevisionSettings, descriptor: &str) -> String {
    let modules = namespace_segments(&settings.generated_namespace);

    let mut out = String::from("// @generated by revid. Do not edit.\n\n");
    for (depth, module) in modules.iter().enumerate() {
        out.push_str(&format!("{}pub mod {} {{\n", indent(depth), module));
    }

    let depth = modules.len();
    let pad = indent(depth);
    out.push_str(&format!("{pad}pub struct {};\n\n", settings.generated_type_name));
    out.push_str(&format!("{pad}impl {} {{\n", settings.generated_type_name));
    out.push_str(&format!(
        "{}pub const {}: &str = {:?};\n",
        indent(depth + 1),
        settings.generated_field_name,
        descriptor
    ));
    out.push_str(&format!("{pad}}}\n"));

    for depth in (0..modules.len()).rev() {
        out.push_str(&format!("{}}}\n", indent(depth)));
    }
    out
}

/// Check that the namespace segments, type name and field name are Rust
/// identifiers.
pub fn validate_names(settings: &RevisionSettings) -> Result<()> {
    let names = namespace_segments(&settings.generated_namespace)
        .into_iter()
        .map(|segment| ("GeneratedNamespace", segment))
        .chain([
            ("GeneratedTypeName", settings.generated_type_name.as_str()),
            ("GeneratedFieldName", settings.generated_field_name.as_str()),
        ]);

    for (setting, value) in names {
        if !is_identifier(value) {
            return Err(Error::InvalidIdentifier {
                setting,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Render and write the module to `out_dir/generated_file_name`.
///
/// Names are validated first; nothing is written when one is invalid.
/// Returns the path that was written.
pub fn write_source(
    settings: &RevisionSettings,
    descriptor: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    validate_names(settings)?;
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;
    let path = out_dir.join(&settings.generated_file_name);
    fs::write(&path, render_source(settings, descriptor)).map_err(|e| Error::io(&path, e))?;
    tracing::debug!(path = %path.display(), "Wrote generated source");
    Ok(path)
}

fn namespace_segments(namespace: &str) -> Vec<&str> {
    namespace
        .split("::")
        .flat_map(|segment| segment.split('.'))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && name != "_"
        && !KEYWORDS.contains(&name)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}
