//! @acp:module "PDF Layout"
//! @acp:summary "Paginated drawing instructions for the PDF export"
//! @acp:domain cli
//! @acp:layer output
//!
//! Layout produces a flat list of [`PdfOp`] in page millimetres with the
//! origin at the top-left corner; [`writer`] turns that list into PDF bytes.
//! Before every wrapped line the cursor is checked against the bottom margin
//! and a new page is started when the line would not fit.

pub mod metrics;
pub mod writer;

use super::{or_placeholder, ExportStamp, ATTRIBUTION, DOCUMENT_TITLE};
use crate::config::PdfConfig;
use crate::form::FormData;
use crate::registry::{Question, SECTIONS};
use metrics::wrap_text;

pub const PLACEHOLDER: &str = "No response";

/// Vertical room reserved for a line before drawing it
const LINE_ROOM: f32 = 10.0;

/// Vertical room reserved for the attribution block
const FOOTER_ROOM: f32 = 15.0;

/// Line advance per point of font size
const LEADING: f32 = 0.5;

/// Face of the standard Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum PdfOp {
    SetFont { size: f32, style: FontStyle },
    Text { x: f32, y: f32, text: String },
    /// `gray` is the stroke level, 0 black to 255 white
    Line { x1: f32, y1: f32, x2: f32, y2: f32, width: f32, gray: u8 },
    NewPage,
}

/// Complete instruction stream for one document
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub ops: Vec<PdfOp>,
}

impl PdfLayout {
    pub fn page_count(&self) -> usize {
        1 + self.ops.iter().filter(|op| matches!(op, PdfOp::NewPage)).count()
    }
}

/// Cursor state while laying out pages
struct Composer<'a> {
    page: &'a PdfConfig,
    y: f32,
    ops: Vec<PdfOp>,
}

impl<'a> Composer<'a> {
    fn new(page: &'a PdfConfig) -> Self {
        Self { page, y: page.margin, ops: Vec::new() }
    }

    fn max_width(&self) -> f32 {
        self.page.page_width - 2.0 * self.page.margin
    }

    /// Start a new page when `room` more millimetres would cross the bottom margin
    fn ensure_room(&mut self, room: f32) {
        if self.y + room > self.page.page_height - self.page.margin {
            self.ops.push(PdfOp::NewPage);
            self.y = self.page.margin;
        }
    }

    fn set_font(&mut self, size: f32, style: FontStyle) {
        self.ops.push(PdfOp::SetFont { size, style });
    }

    /// Draw one unwrapped line at the cursor without a page check
    fn put_line(&mut self, text: &str) {
        self.ops.push(PdfOp::Text { x: self.page.margin, y: self.y, text: text.to_string() });
    }

    /// Wrap and draw a block, breaking pages as needed
    fn add_text(&mut self, text: &str, size: f32, style: FontStyle) {
        self.set_font(size, style);
        for line in wrap_text(text, self.max_width(), size, style) {
            self.ensure_room(LINE_ROOM);
            self.put_line(&line);
            self.y += size * LEADING;
        }
    }

    fn rule(&mut self, width: f32, gray: u8) {
        self.ops.push(PdfOp::Line {
            x1: self.page.margin,
            y1: self.y,
            x2: self.page.page_width - self.page.margin,
            y2: self.y,
            width,
            gray,
        });
    }

    fn advance(&mut self, by: f32) {
        self.y += by;
    }
}

/// @acp:summary "Lay out the answer set as paginated drawing instructions"
pub fn layout_pdf(data: &FormData, stamp: &ExportStamp, page: &PdfConfig) -> PdfLayout {
    let mut doc = Composer::new(page);

    doc.set_font(18.0, FontStyle::Bold);
    doc.put_line(DOCUMENT_TITLE);
    doc.advance(10.0);

    doc.set_font(10.0, FontStyle::Normal);
    doc.put_line(&format!("Generated: {}", stamp.display()));
    doc.advance(15.0);

    doc.rule(0.5, 0);
    doc.advance(10.0);

    for (index, section) in SECTIONS.iter().enumerate() {
        doc.add_text(&section.title.to_uppercase(), 14.0, FontStyle::Bold);
        doc.advance(5.0);

        for id in [section.what(), section.how()] {
            doc.add_text(id.question.prompt(), 11.0, FontStyle::Bold);
            doc.advance(3.0);
            doc.add_text(or_placeholder(data.get(id), PLACEHOLDER), 10.0, FontStyle::Normal);
            doc.advance(match id.question {
                Question::What => 7.0,
                Question::How => 10.0,
            });
        }

        if index < SECTIONS.len() - 1 {
            doc.ensure_room(LINE_ROOM);
            doc.rule(0.5, 200);
            doc.advance(10.0);
        }
    }

    doc.advance(10.0);
    doc.ensure_room(FOOTER_ROOM);
    doc.set_font(8.0, FontStyle::Italic);
    doc.put_line(ATTRIBUTION[0]);
    doc.advance(5.0);
    doc.put_line(ATTRIBUTION[1]);

    PdfLayout {
        page_width: page.page_width,
        page_height: page.page_height,
        ops: doc.ops,
    }
}
