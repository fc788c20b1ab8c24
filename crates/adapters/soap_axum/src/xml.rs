//! Minimal XML element tree on top of quick-xml.
//!
//! Requests are small, so the whole document is read into an [`Element`]
//! tree. Lookups mirror DOM `getElementsByTagName` semantics: descendants
//! are searched in document order, first by the qualified name as written,
//! then, if nothing matched, by local name in any namespace.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{NsReader, Writer};

/// Errors raised while reading or writing XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("invalid character or entity reference: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("element <{0}> is not closed")]
    Unclosed(String),
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its qualified name, resolved namespace and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no namespace, attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for `<name>text</name>`.
    #[must_use]
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Qualified name as written, e.g. `tel:Create`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its prefix, e.g. `Create`.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Namespace URI the element was bound to when parsed.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Concatenated text of this element and all its descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// All descendants named `tag`.
    ///
    /// Exact qualified-name matches win; only when there are none does the
    /// search fall back to matching the local name in any namespace.
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let exact: Vec<&Element> = self.descendants().filter(|e| e.name == tag).collect();
        if !exact.is_empty() {
            return exact;
        }
        self.descendants()
            .filter(|e| e.local_name() == tag)
            .collect()
    }

    /// First descendant named `tag`, with the same fallback as [`Self::find_all`].
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.descendants()
            .find(|e| e.name == tag)
            .or_else(|| self.descendants().find(|e| e.local_name() == tag))
    }

    /// Text of the first descendant named `tag`.
    #[must_use]
    pub fn find_text(&self, tag: &str) -> Option<String> {
        self.find(tag).map(Element::text)
    }

    /// Parse a document and return its root element.
    ///
    /// Comments, processing instructions and the XML declaration are
    /// skipped. Character and predefined entity references are resolved.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] for malformed input or a missing root.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = NsReader::from_str(input);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (namespace, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(start) => stack.push(open(&namespace, &start)?),
                Event::Empty(start) => {
                    let element = open(&namespace, &start)?;
                    close(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        close(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(text) => {
                    let raw = std::str::from_utf8(&text)?;
                    push_text(&mut stack, &quick_xml::escape::unescape(raw)?);
                }
                Event::CData(data) => push_text(&mut stack, std::str::from_utf8(&data)?),
                Event::GeneralRef(reference) => {
                    let name = std::str::from_utf8(&reference)?;
                    push_text(&mut stack, &quick_xml::escape::unescape(&format!("&{name};"))?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = stack.pop() {
            return Err(XmlError::Unclosed(unclosed.name));
        }
        root.ok_or(XmlError::NoRoot)
    }

    /// Parse a raw request body. The body must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Utf8`] for invalid UTF-8, otherwise as
    /// [`Self::parse`].
    pub fn parse_bytes(input: &[u8]) -> Result<Self, XmlError> {
        Self::parse(std::str::from_utf8(input)?)
    }

    /// Serialize with an XML declaration.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer fails.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write(&mut writer)?;
        String::from_utf8(writer.into_inner())
            .map_err(|err| XmlError::Utf8(err.utf8_error()))
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for node in &self.children {
            match node {
                Node::Element(element) => element.write(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Depth-first iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

fn open(namespace: &ResolveResult<'_>, start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let namespace = match namespace {
        ResolveResult::Bound(ns) => Some(std::str::from_utf8(ns.as_ref())?.to_string()),
        _ => None,
    };
    Ok(Element {
        name,
        namespace,
        attributes: Vec::new(),
        children: Vec::new(),
    })
}

fn close(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::MultipleRoots);
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) {
    // Text outside the root element (indentation, trailing newline) is dropped.
    if let Some(parent) = stack.last_mut()
        && !text.is_empty()
    {
        match parent.children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => parent.children.push(Node::Text(text.to_string())),
        }
    }
}
