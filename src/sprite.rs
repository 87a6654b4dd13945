//! Sprite document assembly - accumulates pre-rendered SVG fragments into a
//! single `<svg>` document string.
//!
//! Pure string building, no DOM manipulation. Content fragments are trusted
//! to be valid, already-escaped SVG markup; only root attribute values are
//! escaped here.

use serde::{Deserialize, Serialize};

use crate::file::FileHandle;

/// An SVG sprite document under assembly.
///
/// Holds the XML/doctype preamble, the root element attributes (insertion
/// order is emission order) and the ordered list of content fragments.
/// `Default` yields the empty document, which serializes to `<svg></svg>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDocument {
    xml_declaration: String,
    doctype_declaration: String,
    root_attributes: Vec<(String, String)>,
    content: Vec<String>,
}

impl SpriteDocument {
    /// Default SVG namespace
    pub const SVG_NAMESPACE: &'static str = "http://www.w3.org/2000/svg";

    /// XLink namespace
    pub const XLINK_NAMESPACE: &'static str = "http://www.w3.org/1999/xlink";

    /// Create a document from its preamble, initial root attributes and the
    /// namespace-injection flag.
    ///
    /// Empty declaration strings mean "unset". The attribute slice is copied,
    /// never aliased. When `add_svg_namespaces` is true, `xmlns` and
    /// `xmlns:xlink` are set from [`Self::SVG_NAMESPACE`] and
    /// [`Self::XLINK_NAMESPACE`], overwriting any same-named attribute the
    /// caller supplied (the caller's insertion position is kept).
    pub fn new(
        xml_declaration: &str,
        doctype_declaration: &str,
        root_attributes: &[(&str, &str)],
        add_svg_namespaces: bool,
    ) -> Self {
        let mut doc = Self {
            xml_declaration: xml_declaration.to_string(),
            doctype_declaration: doctype_declaration.to_string(),
            root_attributes: Vec::new(),
            content: Vec::new(),
        };
        for (name, value) in root_attributes {
            doc.set_attribute(*name, *value);
        }
        if add_svg_namespaces {
            doc.set_attribute("xmlns", Self::SVG_NAMESPACE);
            doc.set_attribute("xmlns:xlink", Self::XLINK_NAMESPACE);
        }
        doc
    }

    /// Set a root attribute. Overwriting an existing name keeps its original
    /// insertion position; a new name is appended after all existing ones.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.root_attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.root_attributes.push((name, value)),
        }
        self
    }

    /// Get a root attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a single content fragment.
    pub fn add_one(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.content.push(fragment.into());
        self
    }

    /// Append a sequence of content fragments in order.
    ///
    /// Flattens exactly one level: each element of the sequence becomes one
    /// fragment, never split or recursed into.
    pub fn add_many<I>(&mut self, fragments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.content.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Read-only view of the content fragments, in append order.
    pub fn content_snapshot(&self) -> &[String] {
        &self.content
    }

    /// Serialize the sprite document.
    ///
    /// Emits `xml_declaration + doctype_declaration + "<svg"`, each attribute
    /// as ` name="escaped-value"` in insertion order, then `">"`, the content
    /// fragments verbatim in append order, and `"</svg>"`. Only attribute
    /// values are escaped. Pure read; may be called any number of times.
    pub fn serialize(&self) -> String {
        let mut svg = String::new();
        svg.push_str(&self.xml_declaration);
        svg.push_str(&self.doctype_declaration);
        svg.push_str("<svg");
        for (name, value) in &self.root_attributes {
            svg.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
        }
        svg.push('>');
        for fragment in &self.content {
            svg.push_str(fragment);
        }
        svg.push_str("</svg>");
        svg
    }

    /// Wrap the serialized document as an in-memory file.
    ///
    /// The contents are snapshotted at call time; later `add_one`/`add_many`
    /// calls do not affect an already-produced handle.
    pub fn to_file(&self, base: impl Into<String>, path: impl Into<String>) -> FileHandle {
        FileHandle {
            base: base.into(),
            path: path.into(),
            contents: self.serialize().into_bytes(),
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape a string for safe inclusion inside a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_serializes_to_bare_svg() {
        assert_eq!(SpriteDocument::default().serialize(), "<svg></svg>");
        assert_eq!(SpriteDocument::new("", "", &[], false).serialize(), "<svg></svg>");
    }

    #[test]
    fn serialize_is_idempotent() {
        let mut sprite = SpriteDocument::new("", "", &[("id", "icons")], true);
        sprite.add_one("<rect/>");
        assert_eq!(sprite.serialize(), sprite.serialize());
    }

    #[test]
    fn attributes_emit_in_insertion_order() {
        let sprite = SpriteDocument::new("", "", &[("a", "1"), ("b", "2"), ("c", "3")], false);
        assert_eq!(sprite.serialize(), r#"<svg a="1" b="2" c="3"></svg>"#);
    }

    #[test]
    fn overwriting_an_attribute_keeps_its_position() {
        let mut sprite = SpriteDocument::new("", "", &[("a", "1"), ("b", "2")], false);
        sprite.set_attribute("a", "9");
        assert_eq!(sprite.serialize(), r#"<svg a="9" b="2"></svg>"#);
        assert_eq!(sprite.get_attribute("a"), Some("9"));
    }

    #[test]
    fn namespace_flag_injects_both_namespaces() {
        let sprite = SpriteDocument::new("", "", &[], true);
        assert_eq!(
            sprite.serialize(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"></svg>"#
        );
    }

    #[test]
    fn namespace_flag_overrides_caller_supplied_values() {
        let sprite = SpriteDocument::new("", "", &[("xmlns", "urn:bogus"), ("id", "x")], true);
        assert_eq!(sprite.get_attribute("xmlns"), Some(SpriteDocument::SVG_NAMESPACE));
        // the overwritten key stays in its original position, before id
        assert_eq!(
            sprite.serialize(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="x" xmlns:xlink="http://www.w3.org/1999/xlink"></svg>"#
        );
    }

    #[test]
    fn without_the_flag_no_namespaces_appear() {
        let sprite = SpriteDocument::new("", "", &[("id", "x")], false);
        assert_eq!(sprite.get_attribute("xmlns"), None);
        assert_eq!(sprite.get_attribute("xmlns:xlink"), None);
    }

    #[test]
    fn add_many_flattens_one_level_in_order() {
        let mut sprite = SpriteDocument::default();
        sprite.add_one("<rect/>").add_many(["<circle/>", "<path/>"]).add_one("<line/>");
        assert_eq!(
            sprite.content_snapshot(),
            &["<rect/>", "<circle/>", "<path/>", "<line/>"]
        );
    }

    #[test]
    fn attribute_values_are_escaped_but_content_is_not() {
        let mut sprite = SpriteDocument::new("", "", &[("title", "a & \"b\"")], false);
        sprite.add_one("<text>a &amp; b</text>");
        assert_eq!(
            sprite.serialize(),
            r#"<svg title="a &amp; &quot;b&quot;"><text>a &amp; b</text></svg>"#
        );
    }

    #[test]
    fn preamble_is_emitted_verbatim_before_the_root_element() {
        let sprite = SpriteDocument::new(
            "<?xml version=\"1.0\"?>",
            "<!DOCTYPE svg>",
            &[],
            false,
        );
        assert_eq!(sprite.serialize(), "<?xml version=\"1.0\"?><!DOCTYPE svg><svg></svg>");
    }

    #[test]
    fn to_file_snapshots_contents_at_call_time() {
        let mut sprite = SpriteDocument::default();
        sprite.add_one("<rect/>");
        let handle = sprite.to_file("out", "out/sprite.svg");
        sprite.add_one("<circle/>");

        assert_eq!(handle.base, "out");
        assert_eq!(handle.path, "out/sprite.svg");
        assert_eq!(handle.contents, b"<svg><rect/></svg>");
        assert_eq!(sprite.serialize(), "<svg><rect/><circle/></svg>");
    }

    #[test]
    fn escape_attribute_covers_all_five_characters() {
        assert_eq!(escape_attribute(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape_attribute("plain"), "plain");
    }
}
