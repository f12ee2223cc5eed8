use crate::indexing::extractor::LanguageExtractor;

pub const UNKNOWN_TYPE: &str = "Unknown";

/// A discovered script, read once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display path relative to the scan root, `/`-separated.
    pub relative_path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(relative_path: String, content: String) -> Self {
        SourceFile {
            relative_path,
            content,
        }
    }

    pub fn metadata(&self, extractor: &dyn LanguageExtractor) -> ExtractedMetadata {
        ExtractedMetadata::extract(&self.content, extractor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub namespace: Option<String>,
    pub type_name: Option<String>,
}

impl ExtractedMetadata {
    pub fn extract(content: &str, extractor: &dyn LanguageExtractor) -> Self {
        ExtractedMetadata {
            namespace: extractor.extract_namespace(content),
            type_name: extractor.extract_type_name(content),
        }
    }

    pub fn type_name_or_unknown(&self) -> &str {
        self.type_name.as_deref().unwrap_or(UNKNOWN_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SourceLanguage;

    #[test]
    fn missing_type_reads_as_unknown() {
        let extractor = SourceLanguage::CSharp.extractor();
        let file = SourceFile::new(
            "Consts.cs".to_string(),
            "// constants only\n".to_string(),
        );

        let metadata = file.metadata(extractor.as_ref());
        assert_eq!(metadata, ExtractedMetadata::default());
        assert_eq!(metadata.type_name_or_unknown(), UNKNOWN_TYPE);
    }

    #[test]
    fn extracts_both_fields() {
        let extractor = SourceLanguage::CSharp.extractor();
        let metadata = ExtractedMetadata::extract(
            "namespace Game.Net\n{\n    public class NetworkManager {}\n}\n",
            extractor.as_ref(),
        );

        assert_eq!(metadata.namespace.as_deref(), Some("Game.Net"));
        assert_eq!(metadata.type_name_or_unknown(), "NetworkManager");
    }
}
