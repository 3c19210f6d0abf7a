// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.

use std::fmt::Write as _;

use overstory_select::{AttrValue, Node};
use understory_recipe::StyleValue;

/// Renders a node tree as indented text, one element per line.
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Empty => {}
        Node::Text(text) => {
            let _ = writeln!(out, "{indent}{text:?}");
        }
        Node::Element(el) => {
            let _ = write!(out, "{indent}<{:?}", el.primitive);
            if !el.class_names.is_empty() {
                let _ = write!(out, " class=\"{}\"", el.class_names);
            }
            let mut attrs: Vec<_> = el.attrs.iter().collect();
            attrs.sort_by_key(|(name, _)| *name);
            for (name, value) in attrs {
                match value {
                    AttrValue::Str(s) => {
                        let _ = write!(out, " {name}={s:?}");
                    }
                    AttrValue::Bool(b) => {
                        let _ = write!(out, " {name}={b}");
                    }
                    AttrValue::Number(n) => {
                        let _ = write!(out, " {name}={n}");
                    }
                    AttrValue::Color(color) => {
                        let _ = write!(out, " {name}={color:?}");
                    }
                    AttrValue::Callback(_) => {
                        let _ = write!(out, " {name}=<fn>");
                    }
                }
            }
            let _ = writeln!(out, ">");
            for (key, value) in el.css.iter() {
                let _ = writeln!(out, "{indent}  - {key}: {}", style_value(value));
            }
            for child in &el.children {
                write_node(out, child, depth + 1);
            }
        }
    }
}

fn style_value(value: &StyleValue) -> String {
    if let Some(s) = value.as_str() {
        return s.to_owned();
    }
    if let Some(n) = value.as_number() {
        return n.to_string();
    }
    if let Some(nested) = value.as_nested() {
        let parts: Vec<_> = nested
            .iter()
            .map(|(k, v)| format!("{k}: {}", style_value(v)))
            .collect();
        return format!("{{ {} }}", parts.join(", "));
    }
    format!("{value:?}")
}
