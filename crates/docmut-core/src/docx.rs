//! DOCX container rewrite.
//!
//! A DOCX file is a ZIP archive; document metadata lives in two fixed
//! entries under `docProps/`. The rewrite replaces those entries with
//! blanked property payloads and copies every other entry's bytes
//! unchanged into a new deflate-compressed archive.

use std::io::{Cursor, Read, Write};

use anyhow::Result;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const CORE_PROPS_ENTRY: &str = "docProps/core.xml";
const APP_PROPS_ENTRY: &str = "docProps/app.xml";

/// Core properties with empty values and epoch timestamps.
const BLANK_CORE_PROPS: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
xmlns:dcterms=\"http://purl.org/dc/terms/\" \
xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
<dc:title></dc:title><dc:subject></dc:subject><dc:creator></dc:creator>\
<cp:keywords></cp:keywords><dc:description></dc:description>\
<cp:lastModifiedBy></cp:lastModifiedBy>\
<dcterms:created xsi:type=\"dcterms:W3CDTF\">1970-01-01T00:00:00Z</dcterms:created>\
<dcterms:modified xsi:type=\"dcterms:W3CDTF\">1970-01-01T00:00:00Z</dcterms:modified>\
</cp:coreProperties>";

const BLANK_APP_PROPS: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
<Application>Docx</Application></Properties>";

/// Rebuilds the archive with `docProps/core.xml` and `docProps/app.xml`
/// blanked. Malformed containers surface as errors.
pub fn strip_docx_metadata(data: &[u8]) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        if entry.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }
        let content: Vec<u8> = match name.as_str() {
            CORE_PROPS_ENTRY => BLANK_CORE_PROPS.to_vec(),
            APP_PROPS_ENTRY => BLANK_APP_PROPS.to_vec(),
            _ => {
                let mut buf = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut buf)?;
                buf
            }
        };
        writer.start_file(name, options)?;
        writer.write_all(&content)?;
    }
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
