//! Compile-time XML minification for embedded package templates.
//!
//! The OOXML writer ships its slide master, layouts and theme as XML resource
//! files. These macros read and minify them during compilation so the binary
//! carries compact `&'static str` literals and the sources stay readable.
use proc_macro::{TokenStream, TokenTree};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use quote::quote;
use std::path::PathBuf;

type MinifyResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Embeds a minified XML resource file as a `&'static str`.
///
/// The path is resolved relative to the invoking crate's `CARGO_MANIFEST_DIR`.
/// The expansion also `include_bytes!`s the file so cargo rebuilds when the
/// resource changes.
///
/// ```ignore
/// const MASTER: &str = minified_xml!("src/ooxml/pptx/resources/slideMaster1.xml");
/// ```
#[proc_macro]
pub fn minified_xml(input: TokenStream) -> TokenStream {
    let relative = single_string_literal(input);

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(manifest_dir).join(&relative);
    let path = path
        .canonicalize()
        .unwrap_or_else(|e| panic!("cannot resolve XML resource '{relative}': {e}"));

    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read XML resource '{}': {e}", path.display()));
    let minified =
        minify_xml(&source).unwrap_or_else(|e| panic!("invalid XML in '{relative}': {e}"));

    let tracked = path.to_string_lossy().into_owned();
    TokenStream::from(quote! {
        {
            const _: &[u8] = include_bytes!(#tracked);
            #minified
        }
    })
}

/// Minifies an XML string literal at compile time.
///
/// ```ignore
/// const RELS: &str = minified_xml_str!(r#"
///     <Relationships>
///         <!-- dropped -->
///         <Relationship Id="rId1"/>
///     </Relationships>
/// "#);
/// // <Relationships><Relationship Id="rId1"/></Relationships>
/// ```
#[proc_macro]
pub fn minified_xml_str(input: TokenStream) -> TokenStream {
    let source = single_string_literal(input);
    let minified =
        minify_xml(&source).unwrap_or_else(|e| panic!("invalid XML string literal: {e}"));
    TokenStream::from(quote! { #minified })
}

fn single_string_literal(input: TokenStream) -> String {
    let tokens: Vec<TokenTree> = input.into_iter().collect();
    match tokens.as_slice() {
        [TokenTree::Literal(lit)] => unquote(&lit.to_string())
            .unwrap_or_else(|| panic!("expected a string literal, got {lit}")),
        _ => panic!("expected exactly one string literal"),
    }
}

/// Strip the quotes from a string literal token, handling `r#"..."#` forms.
fn unquote(token: &str) -> Option<String> {
    if let Some(raw) = token.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let body = &raw[hashes..raw.len().checked_sub(hashes)?];
        return Some(body.strip_prefix('"')?.strip_suffix('"')?.to_string());
    }

    let body = token.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '0' => out.push('\0'),
            '\n' => {
                // line continuation: skip leading whitespace of the next line
                while chars.as_str().starts_with(char::is_whitespace) {
                    chars.next();
                }
            },
            other => out.push(other),
        }
    }
    Some(out)
}

/// Re-serialize `xml` without comments, processing instructions,
/// whitespace-only text nodes or redundant whitespace inside tags.
///
/// Entity references and CDATA sections pass through untouched.
fn minify_xml(xml: &str) -> MinifyResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::with_capacity(xml.len() / 2));

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Comment(_) | Event::PI(_) => {},
            Event::Text(text) => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    writer.write_event(Event::Text(text))?;
                }
            },
            Event::Start(tag) => writer.write_event(Event::Start(normalize_tag(&tag)?))?,
            Event::Empty(tag) => writer.write_event(Event::Empty(normalize_tag(&tag)?))?,
            other => writer.write_event(other)?,
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Rebuild a tag with single spaces between attributes.
fn normalize_tag(tag: &BytesStart<'_>) -> MinifyResult<BytesStart<'static>> {
    let mut clean = tag.to_owned();
    clean.clear_attributes();
    for attr in tag.attributes() {
        clean.push_attribute(attr?);
    }
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_comments_and_indentation() {
        let input = r#"
            <root>
                <!-- comment -->
                <child attr="value">Text content</child>
                <empty />
            </root>
        "#;
        let minified = minify_xml(input).unwrap();
        assert_eq!(minified, r#"<root><child attr="value">Text content</child><empty/></root>"#);
    }

    #[test]
    fn test_keeps_declaration() {
        let input = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<root/>"#;
        let minified = minify_xml(input).unwrap();
        assert!(minified.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(minified.ends_with("<root/>"));
    }

    #[test]
    fn test_collapses_whitespace_between_attributes() {
        let input = "<a:off\n    x=\"0\"\n    y=\"0\"/>";
        assert_eq!(minify_xml(input).unwrap(), r#"<a:off x="0" y="0"/>"#);
    }

    #[test]
    fn test_entities_and_cdata_survive() {
        let input = "<r><t>a &amp; b</t><![CDATA[<raw>]]></r>";
        assert_eq!(minify_xml(input).unwrap(), input);
    }

    #[test]
    fn test_unquote_forms() {
        assert_eq!(unquote(r#""a\"b\n""#).as_deref(), Some("a\"b\n"));
        assert_eq!(unquote(r###"r#"<x y="1"/>"#"###).as_deref(), Some(r#"<x y="1"/>"#));
        assert_eq!(unquote(r#"r"plain""#).as_deref(), Some("plain"));
        assert_eq!(unquote("42"), None);
    }
}
