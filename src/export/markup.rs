use std::borrow::Cow;
use std::io::Write;

use anyhow::{bail, Context};

/// A tag together with its attributes, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }
}

/// Line-oriented writer for the scene document. Each tag sits on its own
/// line behind a caller-supplied indent, and every opened element must be
/// closed before [`MarkupWriter::finish`].
pub struct MarkupWriter<W: Write> {
    out: W,
    open: Vec<&'static str>,
}

impl<W: Write> MarkupWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            open: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn begin(&mut self, indent: &str, element: &Element) -> anyhow::Result<()> {
        write!(self.out, "{}<{}", indent, element.name)?;
        for (key, value) in &element.attributes {
            write!(self.out, " {}=\"{}\"", key, escape_attribute(value))?;
        }
        writeln!(self.out, ">")?;

        self.open.push(element.name);
        Ok(())
    }

    pub fn end(&mut self, indent: &str) -> anyhow::Result<()> {
        let name = self.open.pop().context("Closing tag without an open element")?;
        writeln!(self.out, "{}</{}>", indent, name)?;
        Ok(())
    }

    /// Writes an element that has attributes only.
    pub fn write_element(&mut self, indent: &str, element: &Element) -> anyhow::Result<()> {
        self.begin(indent, element)?;
        self.end(indent)
    }

    pub fn finish(mut self) -> anyhow::Result<W> {
        if !self.open.is_empty() {
            bail!("Unclosed elements: {}", self.open.join(", "));
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(markup: MarkupWriter<Vec<u8>>) -> String {
        String::from_utf8(markup.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_element_with_attributes() {
        let mut markup = MarkupWriter::new(Vec::new());
        let element = Element::new("Light")
            .attribute("type", "point")
            .attribute("attenuation", "1.0");

        markup.write_element("    ", &element).unwrap();

        assert_eq!(
            written(markup),
            "    <Light type=\"point\" attenuation=\"1.0\">\n    </Light>\n"
        );
    }

    #[test]
    fn test_nested_elements() {
        let mut markup = MarkupWriter::new(Vec::new());
        markup.begin("", &Element::new("Scene")).unwrap();
        markup.begin("    ", &Element::new("Mesh")).unwrap();
        assert_eq!(markup.depth(), 2);
        markup
            .write_element("        ", &Element::new("Transform"))
            .unwrap();
        markup.end("    ").unwrap();
        markup.end("").unwrap();

        assert_eq!(
            written(markup),
            "<Scene>\n    <Mesh>\n        <Transform>\n        </Transform>\n    </Mesh>\n</Scene>\n"
        );
    }

    #[test]
    fn test_unbalanced_elements_rejected() {
        let mut markup = MarkupWriter::new(Vec::new());
        assert!(markup.end("").is_err());

        markup.begin("", &Element::new("Scene")).unwrap();
        assert!(markup.finish().is_err());
    }

    #[test]
    fn test_escape_attribute() {
        assert!(matches!(escape_attribute("plain/path"), Cow::Borrowed(_)));
        assert_eq!(
            escape_attribute("a&b <c> \"d\""),
            "a&amp;b &lt;c&gt; &quot;d&quot;"
        );
    }
}
