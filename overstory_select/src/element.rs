// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render tree produced by slot renderers.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;
use understory_recipe::{Color, ColorValue, StyleObject};

/// Design-system primitive an [`Element`] renders as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Generic block container.
    Box,
    /// Inline container.
    Span,
    /// Native text input.
    Input,
    /// Icon wrapper sized by font size.
    Icon,
    /// Raw SVG root.
    Svg,
    /// SVG path.
    Path,
    /// SVG polygon.
    Polygon,
    /// Divider line.
    Separator,
    /// Activity spinner.
    Spinner,
    /// Menu context root.
    MenuRoot,
}

/// An event handler passed through to the host.
///
/// Handlers compare equal only when they share the same allocation.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wraps a handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    pub fn call(&self) {
        (self.0)();
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Value of a DOM/ARIA attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// String attribute.
    Str(Cow<'static, str>),
    /// Boolean attribute.
    Bool(bool),
    /// Numeric attribute.
    Number(f64),
    /// Concrete color, for primitives that take a color prop.
    Color(Color),
    /// Event handler.
    Callback(Callback),
}

impl AttrValue {
    /// Returns the string form, if this is a string attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<ColorValue> for AttrValue {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Token(token) => Self::Str(token),
            ColorValue::Color(color) => Self::Color(color),
        }
    }
}

impl From<Callback> for AttrValue {
    fn from(value: Callback) -> Self {
        Self::Callback(value)
    }
}

/// DOM/ARIA attributes and handlers for one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(HashMap<Cow<'static, str>, AttrValue>);

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Returns `true` if the attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets an attribute and returns the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a boolean attribute to `true` when `on`, removes it otherwise.
    pub fn set_flag(&mut self, name: impl Into<Cow<'static, str>>, on: bool) {
        let name = name.into();
        if on {
            self.0.insert(name, AttrValue::Bool(true));
        } else {
            self.0.remove(&name);
        }
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.remove(name)
    }

    /// Applies every attribute of `other` on top of this set.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Iterates over attributes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

/// Ordered list of CSS class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(SmallVec<[String; 4]>);

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends each whitespace-separated class in `classes`.
    pub fn push(&mut self, classes: &str) {
        self.0.extend(classes.split_whitespace().map(String::from));
    }

    /// Returns `true` if the list contains `class`.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over class names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Builds a class list the way the select behavior library does.
///
/// Caller class names come first. State classes follow, and only when a
/// `prefix` is configured: names starting with `-` are appended to the prefix
/// directly (`prefix--is-disabled`), others after `__` (`prefix__control`).
/// States whose flag is `false` are skipped.
///
/// ```rust
/// use overstory_select::cx;
///
/// let classes = cx(Some("select"), &[("option", true), ("option--is-focused", false)], Some("mine"));
/// assert_eq!(classes.to_string(), "mine select__option");
///
/// let unprefixed = cx(None, &[("option", true)], None);
/// assert!(unprefixed.is_empty());
/// ```
#[must_use]
pub fn cx(prefix: Option<&str>, states: &[(&str, bool)], class_name: Option<&str>) -> ClassList {
    let mut classes = ClassList::new();
    if let Some(class_name) = class_name {
        classes.push(class_name);
    }
    if let Some(prefix) = prefix {
        for (name, on) in states {
            if !on {
                continue;
            }
            let class = if name.is_empty() {
                String::from(prefix)
            } else if name.starts_with('-') {
                alloc::format!("{prefix}{name}")
            } else {
                alloc::format!("{prefix}__{name}")
            };
            classes.0.push(class);
        }
    }
    classes
}

/// A rendered element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Primitive this element renders as.
    pub primitive: Primitive,
    /// CSS classes.
    pub class_names: ClassList,
    /// Resolved style.
    pub css: StyleObject,
    /// DOM/ARIA attributes and handlers.
    pub attrs: Attributes,
    /// Child nodes. Never contains [`Node::Empty`].
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            class_names: ClassList::new(),
            css: StyleObject::new(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Sets the class list.
    #[must_use]
    pub fn class_names(mut self, class_names: ClassList) -> Self {
        self.class_names = class_names;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn css(mut self, css: StyleObject) -> Self {
        self.css = css;
        self
    }

    /// Applies attributes on top of the current ones.
    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Sets one attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Sets a boolean attribute when `on`, removes it otherwise.
    #[must_use]
    pub fn flag(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
        self.attrs.set_flag(name, on);
        self
    }

    /// Appends a child, dropping empty nodes.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !matches!(child, Node::Empty) {
            self.children.push(child);
        }
        self
    }

    /// Appends children, dropping empty nodes.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children
            .extend(children.into_iter().filter(|c| !matches!(c, Node::Empty)));
        self
    }

    /// Finds the first element, in depth-first order, carrying `class`.
    #[must_use]
    pub fn find_class(&self, class: &str) -> Option<&Self> {
        self.find(&|el: &Self| el.class_names.contains(class))
    }

    /// Finds the first element, in depth-first order, matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Self) -> bool) -> Option<&Self> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(el) => el.find(pred),
            _ => None,
        })
    }

    /// Concatenates the text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }
}

/// A node in the render tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// An element.
    Element(Element),
    /// Plain text.
    Text(String),
    /// Nothing is rendered.
    Empty,
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns `true` if nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Concatenates the text of `nodes` and their descendants.
#[must_use]
pub fn text_content(nodes: &[Node]) -> String {
    let mut text = String::new();
    collect_text(nodes, &mut text);
    text
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Empty => {}
        }
    }
}
