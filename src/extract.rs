use scraper::{ElementRef, Html, Selector};

use crate::error::{EtlError, Result};

/// CSS selectors locating one card and its four text fields.
#[derive(Debug, Clone, Copy)]
pub struct CardLayout {
    pub card: &'static str,
    pub name: &'static str,
    pub fields: [&'static str; 3],
}

/// One card as found on the page, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    pub name: Option<String>,
    pub fields: [Option<String>; 3],
}

struct Probes {
    card: Selector,
    name: Selector,
    fields: [Selector; 3],
}

impl CardLayout {
    fn compile(&self) -> Result<Probes> {
        let [a, b, c] = self.fields;
        Ok(Probes {
            card: parse_selector(self.card)?,
            name: parse_selector(self.name)?,
            fields: [
                parse_selector(a)?,
                parse_selector(b)?,
                parse_selector(c)?,
            ],
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EtlError::Extract(format!("bad selector {css:?}: {e}")))
}

/// Pull every card out of `html`. Cards without a name are skipped; a
/// layout that matches nothing yields an empty list, not an error.
pub fn extract_cards(html: &str, layout: &CardLayout) -> Result<Vec<RawCard>> {
    let probes = layout.compile()?;
    let document = Html::parse_document(html);

    let cards = document
        .select(&probes.card)
        .filter_map(|card| {
            let name = probe(card, &probes.name)?;
            let [a, b, c] = &probes.fields;
            Some(RawCard {
                name: Some(name),
                fields: [probe(card, a), probe(card, b), probe(card, c)],
            })
        })
        .collect();

    Ok(cards)
}

/// Text of the first descendant matching `selector`, with every text node
/// trimmed and the pieces concatenated. Empty text counts as missing.
fn probe(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let el = card.select(selector).next()?;
    let text: String = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

// ── Tests ──
