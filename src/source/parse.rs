// src/source/parse.rs
// =============================================================================
// Turns a Wikipedia article into paragraphs.
//
// The article body lives in the element with id "mw-content-text". Every <p>
// below it becomes one Paragraph, and every <a href> inside that <p> becomes
// one Link, in document order. Navigation boxes, infoboxes and footers sit
// outside the <p> elements and are ignored.
// =============================================================================

use crate::error::SourceError;
use crate::page::{Link, PageId, Paragraph};
use scraper::{ElementRef, Html, Selector};

// Parses article HTML into paragraphs
//
// Parameters:
//   page: the page the HTML belongs to (only used for error reporting)
//   html: the raw HTML document
//
// Returns: the paragraphs, or MissingContent if the document has no
// #mw-content-text element
pub fn parse_paragraphs(page: &PageId, html: &str) -> Result<Vec<Paragraph>, SourceError> {
    let document = Html::parse_document(html);

    // These selectors are constants and known to be valid
    let content_selector = Selector::parse("#mw-content-text").expect("valid selector");
    let paragraph_selector = Selector::parse("p").expect("valid selector");
    let link_selector = Selector::parse("a[href]").expect("valid selector");

    let content = document
        .select(&content_selector)
        .next()
        .ok_or_else(|| SourceError::MissingContent { page: page.clone() })?;

    let paragraphs = content
        .select(&paragraph_selector)
        .map(|element| to_paragraph(element, &link_selector))
        .collect();

    Ok(paragraphs)
}

fn to_paragraph(element: ElementRef<'_>, link_selector: &Selector) -> Paragraph {
    let links = element
        .select(link_selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(Link::new(href, anchor.text().collect::<String>()))
        })
        .collect();

    Paragraph::new(element.text().collect::<String>(), links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageId {
        PageId::from("https://en.wikipedia.org/wiki/Test")
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let html = r#"
            <html><body>
            <div id="mw-content-text">
                <p>First <a href="/wiki/A">A</a> and <a href="/wiki/B">B</a>.</p>
                <table><tr><td><a href="/wiki/Infobox">skip</a></td></tr></table>
                <p>Second <a href="https://example.com">out</a>.</p>
            </div>
            </body></html>
        "#;
        let paragraphs = parse_paragraphs(&page(), html).unwrap();

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text, "First A and B.");
        assert_eq!(
            paragraphs[0].links,
            vec![Link::new("/wiki/A", "A"), Link::new("/wiki/B", "B")]
        );
        assert_eq!(paragraphs[1].links, vec![Link::new("https://example.com", "out")]);
    }

    #[test]
    fn test_ignores_paragraphs_outside_content() {
        let html = r#"
            <p>Header <a href="/wiki/Header">h</a></p>
            <div id="mw-content-text"><p>Body</p></div>
            <p>Footer</p>
        "#;
        let paragraphs = parse_paragraphs(&page(), html).unwrap();
        assert_eq!(paragraphs, vec![Paragraph::new("Body", vec![])]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<div id="mw-content-text"><p><a name="x">x</a></p></div>"#;
        let paragraphs = parse_paragraphs(&page(), html).unwrap();
        assert!(paragraphs[0].links.is_empty());
    }

    #[test]
    fn test_missing_content_is_an_error() {
        let result = parse_paragraphs(&page(), "<html><body><p>hi</p></body></html>");
        assert!(matches!(result, Err(SourceError::MissingContent { .. })));
    }
}
