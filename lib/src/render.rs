//! # python-mtga set map module text
//!
use crate::card::GeneratedCard;
use crate::collection::SetCollection;
use std::path::{Path, PathBuf};

const HEADER: &str = "
import sys
from mtga.models.card import Card
from mtga.models.card_set import Set
import inspect
";

/// Extension of the generated module
pub const EXTENSION: &str = "py";

/// Escapes `s` for a python string literal delimited by `quote`
fn py_escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Double quoted python string literal
fn py_str(s: &str) -> String {
    format!("\"{}\"", py_escape(s, '"'))
}

/// Python list of strings, the way python's repr prints one: ['2', '(U/B)']
fn py_str_list<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|s| {
            let s = s.as_ref();
            if s.contains('\'') && !s.contains('"') {
                format!("\"{}\"", py_escape(s, '"'))
            } else {
                format!("'{}'", py_escape(s, '\''))
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// One `Card(...)` declaration.
/// params: name, pretty_name, cost, color_identity, card_type, sub_types, set_id, rarity, set_number, mtga_id
pub fn render_card(card: &GeneratedCard) -> String {
    format!(
        "{} = Card({}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
        card.identifier_name,
        py_str(&card.snake_name),
        py_str(&card.pretty_name),
        py_str_list(&card.cost),
        py_str_list(&card.color_letters()),
        py_str(&card.card_type),
        py_str(&card.sub_types),
        py_str(&card.set_code),
        py_str(card.rarity_name()),
        card.set_number,
        card.grp_id
    )
}

fn render_footer(collection: &SetCollection) -> String {
    format!(
        "
clsmembers = [card for name, card in inspect.getmembers(sys.modules[__name__]) if isinstance(card, Card)]
{} = Set({}, cards=clsmembers)
",
        collection.class_name(),
        py_str(&collection.snake_name())
    )
}

/// Renders the whole set map module
pub fn render(collection: &SetCollection) -> String {
    let body: Vec<String> = collection.iter().map(render_card).collect();
    format!(
        "{}\n\n{}\n\n{}",
        HEADER,
        body.join("\n"),
        render_footer(collection)
    )
}

/// "GRN" -> "grn.py"
pub fn output_file_name(set_name: &str) -> String {
    format!("{}.{}", set_name.to_lowercase(), EXTENSION)
}

/// Renders `collection` into `dir`, replacing any existing module of the same name
pub fn write_set_map(collection: &SetCollection, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(output_file_name(&collection.set_name));
    std::fs::write(&path, render(collection))?;
    info!("Wrote {} cards to {}", collection.len(), path.display());
    Ok(path)
}
