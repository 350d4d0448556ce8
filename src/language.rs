use std::path::Path;

use syntect::parsing::{SyntaxReference, SyntaxSet};

pub const PLAIN_TEXT: &str = "text";

/// Finds a syntax for `filename`, trying the extension first.
pub fn syntax_for_file<'a>(
    syntax_set: &'a SyntaxSet,
    filename: &str,
) -> Option<&'a SyntaxReference> {
    if let Some(extension) = Path::new(filename).extension()
        && let Some(ext_str) = extension.to_str()
    {
        match ext_str {
            "ts" | "tsx" => {
                // TypeScript isn't in default syntect, use JavaScript syntax
                return syntax_set
                    .find_syntax_by_extension("js")
                    .or_else(|| syntax_set.find_syntax_by_name("JavaScript"));
            }
            "js" | "jsx" | "mjs" => return syntax_set.find_syntax_by_extension("js"),
            "rs" => return syntax_set.find_syntax_by_extension("rs"),
            "py" => return syntax_set.find_syntax_by_extension("py"),
            "go" => return syntax_set.find_syntax_by_extension("go"),
            "java" => return syntax_set.find_syntax_by_extension("java"),
            "cpp" | "cc" | "cxx" => return syntax_set.find_syntax_by_extension("cpp"),
            "c" => return syntax_set.find_syntax_by_extension("c"),
            "h" | "hpp" => return syntax_set.find_syntax_by_extension("h"),
            "htm" | "html" => return syntax_set.find_syntax_by_extension("html"),
            "css" => return syntax_set.find_syntax_by_extension("css"),
            _ => {}
        }
    }

    syntax_set.find_syntax_for_file(filename).ok().flatten()
}

/// Finds a syntax from a user-supplied language name or extension, e.g.
/// `javascript`, `css` or `rs`.
pub fn syntax_for_language<'a>(
    syntax_set: &'a SyntaxSet,
    language: &str,
) -> Option<&'a SyntaxReference> {
    syntax_set.find_syntax_by_token(language)
}

/// Lower-case language label used in exported file names and headers.
pub fn language_label(syntax: Option<&SyntaxReference>) -> String {
    match syntax {
        Some(syntax) if syntax.name != "Plain Text" => {
            syntax.name.to_lowercase().replace(' ', "-")
        }
        _ => PLAIN_TEXT.to_string(),
    }
}
