//! Deduplication of papers across sources.

use std::collections::HashSet;

use crate::models::Paper;

/// Remove duplicate papers by case-insensitive exact title match.
///
/// The first occurrence of each title wins and the relative order of kept
/// papers is preserved, so source priority is whatever order the caller
/// concatenated the inputs in. Comparison is plain lower-cased equality;
/// titles differing in punctuation or whitespace stay separate entries.
pub fn dedupe_by_title(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen: HashSet<String> = HashSet::new();
    papers
        .into_iter()
        .filter(|paper| seen.insert(paper.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaperBuilder, SourceType};

    fn paper(title: &str, source: SourceType) -> Paper {
        PaperBuilder::new(source).title(title).build()
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first() {
        let papers = vec![
            paper("Digital Transformation in Public Sector", SourceType::OpenAlex),
            paper("digital transformation in public sector", SourceType::Doaj),
            paper("Open Data Sustainability", SourceType::Doaj),
        ];

        let unique = dedupe_by_title(papers);

        assert_eq!(unique.len(), 2);
        assert_eq!(
            unique[0].title.as_deref(),
            Some("Digital Transformation in Public Sector")
        );
        assert_eq!(unique[0].source, SourceType::OpenAlex);
        assert_eq!(unique[1].title.as_deref(), Some("Open Data Sustainability"));
    }

    #[test]
    fn test_order_preserved() {
        let papers = vec![
            paper("B", SourceType::OpenAlex),
            paper("A", SourceType::OpenAlex),
            paper("C", SourceType::Doaj),
            paper("a", SourceType::Doaj),
        ];

        let titles: Vec<_> = dedupe_by_title(papers)
            .into_iter()
            .filter_map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_punctuation_differences_are_kept() {
        let papers = vec![
            paper("Open Data: Sustainability", SourceType::OpenAlex),
            paper("Open Data Sustainability", SourceType::Doaj),
        ];

        assert_eq!(dedupe_by_title(papers).len(), 2);
    }

    #[test]
    fn test_missing_titles_collapse_to_placeholder() {
        let papers = vec![
            Paper::new(SourceType::OpenAlex),
            Paper::new(SourceType::Doaj),
        ];

        // Both fall back to the same display placeholder, so they dedupe.
        assert_eq!(dedupe_by_title(papers).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_by_title(Vec::new()).is_empty());
    }
}
