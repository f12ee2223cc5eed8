use crate::indexing::extractor::{LanguageExtractor, csharp::CSharpExtractor};
use std::path::Path;

/// Source languages the organizer knows how to scan and document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    CSharp,
}

impl SourceLanguage {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceLanguage::CSharp => "cs",
        }
    }

    /// Info string used on fenced code blocks.
    pub fn fence_label(&self) -> &'static str {
        match self {
            SourceLanguage::CSharp => "csharp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceLanguage::CSharp => "C#",
        }
    }

    pub fn extractor(&self) -> Box<dyn LanguageExtractor> {
        match self {
            SourceLanguage::CSharp => Box::new(CSharpExtractor::new()),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == self.extension())
    }
}
