use crate::catalog::{ExtractedMetadata, SourceFile, UNKNOWN_TYPE};
use crate::indexing::extractor::LanguageExtractor;
use crate::language::SourceLanguage;

/// Title line used for a per-category document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Folder,
    Namespace,
}

pub fn category_title(category: &str, style: HeaderStyle, no_namespace_category: &str) -> String {
    match style {
        HeaderStyle::Folder => format!("# {} Folder", category),
        HeaderStyle::Namespace if category == no_namespace_category => {
            "# Scripts Without Namespace".to_string()
        }
        HeaderStyle::Namespace => format!("# {} Namespace", category),
    }
}

/// Body of one per-category document.
pub fn render_category(
    title: &str,
    files: &[&SourceFile],
    language: SourceLanguage,
    extractor: &dyn LanguageExtractor,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", title));
    out.push_str(&format!(
        "Contains {} {} scripts\n\n",
        files.len(),
        language.display_name()
    ));

    for file in files {
        push_file_entry(&mut out, "##", file, language, extractor);
        out.push_str("---\n\n");
    }

    out
}

/// Single document covering every category.
pub fn render_consolidated<'a>(
    groups: impl Iterator<Item = (&'a str, Vec<&'a SourceFile>)>,
    total_files: usize,
    language: SourceLanguage,
    extractor: &dyn LanguageExtractor,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} Script Documentation\n\n",
        language.display_name()
    ));
    out.push_str(&format!(
        "Total {} {} scripts, organized by category\n\n",
        total_files,
        language.display_name()
    ));

    for (category, files) in groups {
        out.push_str(&format!("## {} ({} scripts)\n\n", category, files.len()));
        for file in files {
            push_file_entry(&mut out, "###", file, language, extractor);
        }
    }

    out
}

fn push_file_entry(
    out: &mut String,
    heading: &str,
    file: &SourceFile,
    language: SourceLanguage,
    extractor: &dyn LanguageExtractor,
) {
    let ExtractedMetadata {
        namespace,
        type_name,
    } = file.metadata(extractor);

    out.push_str(&format!("{} {}\n", heading, file.relative_path));
    if let Some(type_name) = type_name.filter(|name| name.as_str() != UNKNOWN_TYPE) {
        out.push_str(&format!("**Type:** `{}`  \n", type_name));
    }
    if let Some(namespace) = namespace {
        out.push_str(&format!("**Namespace:** `{}`  \n", namespace));
    }

    out.push_str(&format!("\n```{}\n", language.fence_label()));
    out.push_str(&file.content);
    out.push_str("\n```\n\n");
}
