use crate::indexing::extractor::LanguageExtractor;
use regex::Regex;
use std::sync::LazyLock;

static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*namespace\s+([\w.]+)\s*\{").unwrap());

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|[{;])\s*(?:public|private|protected|internal|abstract|sealed|static)?\s*class\s+(\w+)",
    )
    .unwrap()
});

static STRUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|[{;])\s*(?:public|private|protected|internal)?\s*struct\s+(\w+)")
        .unwrap()
});

static INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|[{;])\s*(?:public|private|protected|internal)?\s*interface\s+(\w+)")
        .unwrap()
});

/// Lexical matcher for C# declarations.
///
/// Namespaces must open a line. Type declarations must open a line or follow a
/// `{` or `;`, which covers one-line files such as
/// `namespace A { public class B { } }`. Only ever reports the first hit, so nested types, partial classes and files
/// with several declarations resolve to whatever matches first.
pub struct CSharpExtractor;

impl CSharpExtractor {
    pub fn new() -> Self {
        CSharpExtractor
    }

    fn first_capture(re: &Regex, content: &str) -> Option<String> {
        re.captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl LanguageExtractor for CSharpExtractor {
    fn extract_namespace(&self, content: &str) -> Option<String> {
        Self::first_capture(&NAMESPACE_RE, content)
    }

    fn extract_type_name(&self, content: &str) -> Option<String> {
        // Kind priority beats textual position: any class wins over any struct.
        [&*CLASS_RE, &*STRUCT_RE, &*INTERFACE_RE]
            .into_iter()
            .find_map(|re| Self::first_capture(re, content))
    }
}
