//! Glossary recovery from structured-content markup.
//!
//! Meanings are the plain-string `li` children of a top-level `ul` whose
//! `data.content` is `"glossary"` and whose own content is a list. Everything
//! else (forms lists, wrappers, nested markup inside an `li`, shapes we have
//! never seen) is skipped without error.

use kotoba_core::content::{ContentTree, GlossaryBlock, TagNode};

const GLOSSARY: &str = "glossary";

/// Meanings of all blocks, in block order then child order
pub fn extract_meanings(blocks: &[GlossaryBlock]) -> Vec<String> {
    let mut meanings = Vec::new();

    for block in blocks {
        let GlossaryBlock::Structured(block) = block else {
            continue;
        };
        if !block.is_structured() {
            continue;
        }
        for root in block.content.items() {
            if let Some(items) = root.as_node().and_then(glossary_items) {
                meanings.extend(items.iter().filter_map(list_item_text).map(str::to_string));
            }
        }
    }

    meanings
}

/// Children of a glossary `ul`; a scalar content does not count as a list
fn glossary_items(node: &TagNode) -> Option<&[ContentTree]> {
    if node.tag != "ul" || node.data_content() != Some(GLOSSARY) {
        return None;
    }
    match &node.content {
        Some(ContentTree::List(items)) => Some(items),
        _ => None,
    }
}

/// Text of an `li` holding a plain string
fn list_item_text(item: &ContentTree) -> Option<&str> {
    let node = item.as_node()?;
    if node.tag != "li" {
        return None;
    }
    node.content.as_ref().and_then(ContentTree::as_text)
}
