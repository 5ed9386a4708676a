//! Serializes placed lines into a PDF byte buffer with `lopdf`.
//!
//! Each page gets its own content stream. Every line is a separate BT/ET text
//! object so text extractors see one line per object.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::info;

use crate::errors::AppError;
use crate::layout::page_config::PageConfig;
use crate::layout::paginator::{layout_lines, PlacedLine};

const FONT_RESOURCE: &[u8] = b"F1";

/// Lays out `text` and returns the finished PDF bytes.
pub fn render_resume_pdf(text: &str, config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let pages = layout_lines(text, config);
    let bytes = write_pdf(&pages, config)?;
    info!(
        pages = pages.len(),
        bytes = bytes.len(),
        "Rendered formatted resume PDF"
    );
    Ok(bytes)
}

/// Runs `render_resume_pdf` on the blocking thread pool.
pub async fn render_resume_pdf_blocking(
    text: String,
    config: PageConfig,
) -> Result<Vec<u8>, AppError> {
    tokio::task::spawn_blocking(move || render_resume_pdf(&text, &config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?
}

/// Writes already-placed pages into a PDF document.
pub fn write_pdf(pages: &[Vec<PlacedLine>], config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(config.font_name.as_bytes().to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            FONT_RESOURCE.to_vec(),
            Object::Reference(font_id),
        )])),
    )]));

    let media_box = Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(config.page_width),
        Object::Real(config.page_height),
    ]);

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for lines in pages {
        let content = page_content(lines, config);
        let encoded = content
            .encode()
            .map_err(|e| AppError::Render(format!("Failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box.clone()),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| AppError::Render(format!("Save failed: {e}")))?;
    Ok(buffer)
}

fn page_content(lines: &[PlacedLine], config: &PageConfig) -> Content {
    let mut operations = Vec::with_capacity(lines.len() * 5);
    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(FONT_RESOURCE.to_vec()),
                Object::Integer(i64::from(config.font_size_pt)),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Real(line.x), Object::Real(line.y)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&line.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Maps text to WinAnsiEncoding bytes for the standard Type1 fonts.
/// Characters with no WinAnsi code point become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
