//! @acp:module "PDF Writer"
//! @acp:summary "Serializes a PdfLayout as a PDF 1.4 document"
//! @acp:domain cli
//! @acp:layer output
//!
//! Uses the three standard Helvetica faces with WinAnsiEncoding, so no font
//! data is embedded. Characters outside Latin-1 are written as `?`.

use std::io::Write;

use super::metrics::MM_PER_PT;
use super::{FontStyle, PdfLayout, PdfOp};
use crate::error::{QudError, Result};

const CATALOG: usize = 1;
const PAGES: usize = 2;
const FIRST_FONT: usize = 3;
const FIRST_PAGE: usize = 6;

const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
];

fn font_key(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Normal => FONTS[0].0,
        FontStyle::Bold => FONTS[1].0,
        FontStyle::Italic => FONTS[2].0,
    }
}

fn pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Object id of the page dictionary for page `index`; its content stream follows it
fn page_object(index: usize) -> usize {
    FIRST_PAGE + 2 * index
}

/// Escape a string for a PDF literal, mapping to WinAnsi bytes
fn escape_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            '\u{a0}'..='\u{ff}' => out.extend_from_slice(format!("\\{:03o}", ch as u32).as_bytes()),
            '\t' => out.push(b' '),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}

/// Split the op stream into one content stream per page
fn content_streams(layout: &PdfLayout) -> Result<Vec<Vec<u8>>> {
    let mut pages = vec![Vec::new()];
    let mut font = (FontStyle::Normal, 10.0_f32);

    for op in &layout.ops {
        let Some(stream) = pages.last_mut() else {
            return Err(QudError::Export("pdf page list is empty".into()));
        };
        match op {
            PdfOp::SetFont { size, style } => font = (*style, *size),
            PdfOp::Text { x, y, text } => {
                write!(
                    stream,
                    "BT /{} {:.1} Tf {:.2} {:.2} Td ",
                    font_key(font.0),
                    font.1,
                    pt(*x),
                    pt(layout.page_height - *y)
                )?;
                stream.extend_from_slice(&escape_text(text));
                stream.extend_from_slice(b" Tj ET\n");
            }
            PdfOp::Line { x1, y1, x2, y2, width, gray } => {
                writeln!(
                    stream,
                    "{:.3} G {:.2} w {:.2} {:.2} m {:.2} {:.2} l S",
                    f32::from(*gray) / 255.0,
                    pt(*width),
                    pt(*x1),
                    pt(layout.page_height - *y1),
                    pt(*x2),
                    pt(layout.page_height - *y2)
                )?;
            }
            PdfOp::NewPage => pages.push(Vec::new()),
        }
    }

    Ok(pages)
}

/// @acp:summary "Serialize a layout into PDF bytes"
pub fn write_pdf(layout: &PdfLayout) -> Result<Vec<u8>> {
    if !(layout.page_width.is_finite() && layout.page_height.is_finite())
        || layout.page_width <= 0.0
        || layout.page_height <= 0.0
    {
        return Err(QudError::Export(format!(
            "invalid page size {}x{}",
            layout.page_width, layout.page_height
        )));
    }

    let streams = content_streams(layout)?;
    let object_count = FIRST_PAGE - 1 + 2 * streams.len();
    let mut offsets = vec![0usize; object_count + 1];
    let mut out: Vec<u8> = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    offsets[CATALOG] = out.len();
    write!(out, "{} 0 obj\n<< /Type /Catalog /Pages {} 0 R >>\nendobj\n", CATALOG, PAGES)?;

    let kids: Vec<String> = (0..streams.len())
        .map(|i| format!("{} 0 R", page_object(i)))
        .collect();
    offsets[PAGES] = out.len();
    write!(
        out,
        "{} 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        PAGES,
        kids.join(" "),
        streams.len()
    )?;

    for (i, (_, base)) in FONTS.iter().enumerate() {
        let id = FIRST_FONT + i;
        offsets[id] = out.len();
        write!(
            out,
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
            id, base
        )?;
    }

    let font_refs: Vec<String> = FONTS
        .iter()
        .enumerate()
        .map(|(i, (key, _))| format!("/{} {} 0 R", key, FIRST_FONT + i))
        .collect();

    for (i, stream) in streams.iter().enumerate() {
        let page_id = page_object(i);
        let content_id = page_id + 1;

        offsets[page_id] = out.len();
        write!(
            out,
            "{} 0 obj\n<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {} >> >> /Contents {} 0 R >>\nendobj\n",
            page_id,
            PAGES,
            pt(layout.page_width),
            pt(layout.page_height),
            font_refs.join(" "),
            content_id
        )?;

        offsets[content_id] = out.len();
        write!(out, "{} 0 obj\n<< /Length {} >>\nstream\n", content_id, stream.len())?;
        out.extend_from_slice(stream);
        out.extend_from_slice(b"\nendstream\nendobj\n");
    }

    let xref_offset = out.len();
    write!(out, "xref\n0 {}\n0000000000 65535 f \n", object_count + 1)?;
    for offset in &offsets[1..] {
        write!(out, "{:010} 00000 n \n", offset)?;
    }
    write!(
        out,
        "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
        object_count + 1,
        CATALOG,
        xref_offset
    )?;

    tracing::debug!("Wrote PDF with {} pages, {} bytes", streams.len(), out.len());
    Ok(out)
}
