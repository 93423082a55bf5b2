//! Markdown rendering of the references document.
//!
//! Pure string building, no I/O. The output is the exact document the wiki
//! page is overwritten with.

use chrono::{DateTime, Local};

use crate::models::Paper;

/// Display placeholder for a missing title
pub const NO_TITLE: &str = "Sin título";
/// Display placeholder for an empty author list
pub const NO_AUTHORS: &str = "Anónimo";
/// Display placeholder for a missing journal
pub const NO_JOURNAL: &str = "Sin revista";
/// Display placeholder for a missing abstract
pub const NO_ABSTRACT: &str = "No disponible";
/// Display placeholder for a missing year or citation count
pub const NOT_AVAILABLE: &str = "N/A";
/// Display placeholder for a missing URL
pub const NO_URL: &str = "#";

/// Notice shown when no papers were found
pub const EMPTY_NOTICE: &str = "❌ No se encontraron artículos científicos recientes.";

/// Maximum abstract length in characters before truncation
const ABSTRACT_MAX_CHARS: usize = 350;
/// Maximum number of authors shown per paper
const AUTHORS_SHOWN: usize = 4;

/// Timestamp format used in the document header and the wiki comment
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Render the full references document.
///
/// Papers are numbered from 1 in the order given. An empty slice produces
/// the header followed by a single "no results" notice.
pub fn render_report(papers: &[Paper], now: DateTime<Local>) -> String {
    let mut md = format!(
        "# Referencias Académicas - Transformación Digital del SIA\n\n\
         > Actualizado el {} (automático)\n\n\
         Artículos científicos relevantes para el Sistema de Información Ambiental de Cuba.\n\n\
         ---\n\n",
        now.format(TIMESTAMP_FORMAT)
    );

    if papers.is_empty() {
        md.push_str(EMPTY_NOTICE);
        md.push('\n');
        return md;
    }

    for (i, paper) in papers.iter().enumerate() {
        md.push_str(&render_paper(paper, i + 1));
    }

    md
}

/// Render one numbered paper subsection.
fn render_paper(paper: &Paper, index: usize) -> String {
    let year = paper
        .year
        .map_or_else(|| NOT_AVAILABLE.to_string(), |y| y.to_string());
    let citations = paper
        .citations
        .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string());

    format!(
        "\n### {index}. {title}\n\n\
         - **Autores:** {authors}\n\
         - **Año:** {year} | **Revista:** {journal}\n\
         - **Citas:** {citations}\n\
         - **Resumen:** {summary}\n\
         - [🔗 Ver artículo]({url})\n\n\
         ---\n\n",
        index = index,
        title = paper.title_or_default(),
        authors = format_authors(&paper.authors),
        year = year,
        journal = paper.journal.as_deref().unwrap_or(NO_JOURNAL),
        citations = citations,
        summary = truncate_abstract(paper.r#abstract.as_deref()),
        url = paper.url.as_deref().unwrap_or(NO_URL),
    )
}

/// Join the first 4 authors with commas; " et al." when the full list is
/// longer than that.
fn format_authors(authors: &[String]) -> String {
    if authors.is_empty() {
        return NO_AUTHORS.to_string();
    }

    let mut joined = authors
        .iter()
        .take(AUTHORS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if authors.len() > AUTHORS_SHOWN {
        joined.push_str(" et al.");
    }
    joined
}

/// Placeholder-substitute, cap at 350 characters, always append "...".
///
/// Character-based so multi-byte text never splits mid-codepoint.
fn truncate_abstract(abstract_text: Option<&str>) -> String {
    let text = abstract_text.unwrap_or(NO_ABSTRACT);
    let mut truncated: String = text.chars().take(ABSTRACT_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}
