//! Language display names for code block headers.

/// Fence language codes and the label shown for them.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("ts", "TypeScript"),
    ("typescript", "TypeScript"),
    ("jsx", "JSX"),
    ("tsx", "TSX"),
    ("py", "Python"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("c", "C"),
    ("cs", "C#"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("rb", "Ruby"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("dart", "Dart"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("sass", "Sass"),
    ("less", "Less"),
    ("json", "JSON"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("toml", "TOML"),
    ("ini", "INI"),
    ("sql", "SQL"),
    ("bash", "Bash"),
    ("sh", "Shell"),
    ("powershell", "PowerShell"),
    ("ps1", "PowerShell"),
    ("dockerfile", "Dockerfile"),
    ("makefile", "Makefile"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
    ("text", "Text"),
    ("txt", "Text"),
    ("plaintext", "Text"),
];

/// Label for a fence language code.
///
/// Known codes map through a fixed table (case-insensitive). Unknown codes
/// are upper-cased; a missing or blank code is `"Text"`.
///
/// ```
/// use folio_render::display_name;
///
/// assert_eq!(display_name(Some("rs")), "RS");
/// assert_eq!(display_name(Some("rust")), "Rust");
/// assert_eq!(display_name(None), "Text");
/// ```
pub fn display_name(language: Option<&str>) -> String {
    let Some(code) = language.map(str::trim).filter(|c| !c.is_empty()) else {
        return "Text".to_string();
    };
    let lowered = code.to_lowercase();
    DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_uppercase())
}
