use crate::results::Link;
use scraper::{Html, Node, Selector};

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Returns the visible text nodes of an HTML document concatenated in
/// document order. Whitespace and line breaks are left untouched.
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    doc.root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
                });
                (!hidden).then_some(&**text)
            }
            _ => None,
        })
        .collect::<String>()
}

/// Collects every anchor carrying an href, in document order
pub fn extract_links(html: &str) -> Vec<Link> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a[href]").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|e| {
            let href = e.value().attr("href")?;
            let label = e
                .text()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Some(Link::new(href, label))
        })
        .collect::<Vec<_>>();

    ::log::debug!("HTML parser found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).map(|l| &l.href).collect::<Vec<_>>()
        );
    }

    links
}
