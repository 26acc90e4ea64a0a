//! PDF metadata rewriting behind a capability interface.
//!
//! Two implementations: a structured rebuild on top of `lopdf` (preferred,
//! compiled in under the default `pdf-structured` feature) and a raw-byte
//! heuristic that blanks metadata without parsing PDF structure. Selection
//! happens once at startup via [`default_rewriter`].

use std::sync::OnceLock;

use anyhow::Result;
use regex::bytes::Regex;

#[cfg(feature = "pdf-structured")]
use lopdf::{Dictionary, Document, Object};
#[cfg(feature = "pdf-structured")]
use std::io::Cursor;

/// Metadata dictionary keys blanked by the heuristic rewriter.
const PDF_META_KEYS: [&str; 6] = [
    "Author",
    "Creator",
    "Producer",
    "Title",
    "ModDate",
    "CreationDate",
];

pub trait PdfMetadataRewriter: Send + Sync {
    fn name(&self) -> &'static str;
    fn strip(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Preferred implementation order: structured rebuild, then heuristic.
pub fn default_rewriter() -> Box<dyn PdfMetadataRewriter> {
    #[cfg(feature = "pdf-structured")]
    {
        Box::new(StructuredRewriter)
    }
    #[cfg(not(feature = "pdf-structured"))]
    {
        Box::new(HeuristicRewriter)
    }
}

/// Parses the document, replaces `/Info` with an empty dictionary and drops
/// the catalog's XMP `/Metadata` stream.
#[cfg(feature = "pdf-structured")]
pub struct StructuredRewriter;

#[cfg(feature = "pdf-structured")]
impl PdfMetadataRewriter for StructuredRewriter {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn strip(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_from(Cursor::new(data))?;
        if let Some(Object::Reference(id)) = doc.trailer.remove(b"Info") {
            doc.objects.remove(&id);
        }
        let root_id = doc.trailer.get(b"Root").and_then(Object::as_reference).ok();
        let mut xmp_id = None;
        if let Some(root_id) = root_id {
            if let Ok(catalog) = doc.get_object_mut(root_id).and_then(Object::as_dict_mut) {
                if let Some(Object::Reference(id)) = catalog.remove(b"Metadata") {
                    xmp_id = Some(id);
                }
            }
        }
        if let Some(id) = xmp_id {
            doc.objects.remove(&id);
        }
        let info_id = doc.add_object(Dictionary::new());
        doc.trailer.set("Info", info_id);
        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        Ok(out)
    }
}

/// Operates on raw bytes: removes any embedded XMP packet and blanks the
/// literal-string values of the fixed metadata keys.
pub struct HeuristicRewriter;

impl PdfMetadataRewriter for HeuristicRewriter {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn strip(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(strip_raw(data))
    }
}

fn xmp_packet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s-u)<\?xpacket begin=.*?<\?xpacket end=[^>]*>").expect("static XMP pattern")
    })
}

fn meta_key_patterns() -> &'static [(Regex, Vec<u8>)] {
    static PATTERNS: OnceLock<Vec<(Regex, Vec<u8>)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PDF_META_KEYS
            .iter()
            .map(|key| {
                let re = Regex::new(&format!(r"(?-u)/{key}\s*\(.*?\)"))
                    .expect("static meta-key pattern");
                (re, format!("/{key}( )").into_bytes())
            })
            .collect()
    })
}

pub fn strip_raw(data: &[u8]) -> Vec<u8> {
    let mut text = xmp_packet().replace_all(data, &b""[..]).into_owned();
    for (re, replacement) in meta_key_patterns() {
        let replaced = re.replace_all(&text, replacement.as_slice()).into_owned();
        text = replaced;
    }
    text
}
