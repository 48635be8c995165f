use crate::render::Scene;
use crate::render::surface::{Anchor, Color, DrawingSurface, Line, Rect, Text};
use pdf_writer::{Content, Finish, Name, Pdf, Rect as PdfRect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Multi-page PDF, one sheet per page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl PdfManager {
    pub fn new(font: &str, bold_font: &str) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(font.as_bytes()));
        pdf.type1_font(bold_font_id)
            .base_font(Name(bold_font.as_bytes()));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            next_id,
            font_id,
            bold_font_id,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Append a page sized to the scene and draw the scene onto it.
    pub fn add_sheet(&mut self, scene: &Scene) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let (w, h) = (scene.width as f32, scene.height as f32);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(PdfRect::new(0.0, 0.0, w, h))
            .contents(content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, self.font_id)
            .pair(BOLD, self.bold_font_id);
        page.finish();

        let mut surface = PdfPageSurface::new(h);
        scene.replay(&mut surface);
        self.pdf.stream(content_id, &surface.content.finish());
    }

    /// Imposta il nodo `Pages` con count e kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Content stream of one page. Sheet coordinates grow downwards, PDF
/// coordinates upwards, so every y is flipped against the page height.
struct PdfPageSurface {
    content: Content,
    page_h: f32,
}

impl PdfPageSurface {
    fn new(page_h: f32) -> Self {
        Self {
            content: Content::new(),
            page_h,
        }
    }

    fn flip(&self, y: f64) -> f32 {
        self.page_h - y as f32
    }
}

impl DrawingSurface for PdfPageSurface {
    fn clear(&mut self, width: f64, height: f64, background: Color) {
        self.content = Content::new();
        self.page_h = height as f32;

        let (r, g, b) = background.unit();
        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.rect(0.0, 0.0, width as f32, height as f32);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn line(&mut self, l: &Line) {
        let (r, g, b) = l.color.unit();
        let (y1, y2) = (self.flip(l.y1), self.flip(l.y2));
        self.content.save_state();
        self.content.set_stroke_rgb(r, g, b);
        self.content.set_line_width(l.width as f32);
        self.content.move_to(l.x1 as f32, y1);
        self.content.line_to(l.x2 as f32, y2);
        self.content.stroke();
        self.content.restore_state();
    }

    fn rect(&mut self, rc: &Rect) {
        let (fr, fg, fb) = rc.fill.unit();
        let (sr, sg, sb) = rc.stroke.unit();
        let bottom = self.flip(rc.y + rc.height);
        self.content.save_state();
        self.content.set_fill_rgb(fr, fg, fb);
        self.content.set_stroke_rgb(sr, sg, sb);
        self.content.set_line_width(rc.stroke_width as f32);
        self.content
            .rect(rc.x as f32, bottom, rc.width as f32, rc.height as f32);
        self.content.fill_nonzero_and_stroke();
        self.content.restore_state();
    }

    fn text(&mut self, t: &Text) {
        let encoded = to_latin1(&t.content);
        let size = t.size as f32;
        let width = approx_text_width(encoded.len(), size, t.bold);
        let x = match t.anchor {
            Anchor::Start => t.x as f32,
            Anchor::Middle => t.x as f32 - width / 2.0,
            Anchor::End => t.x as f32 - width,
        };
        let y = self.flip(t.y);
        let (r, g, b) = t.color.unit();

        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content
            .set_font(if t.bold { BOLD } else { REGULAR }, size);
        self.content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        self.content.show(Str(&encoded));
        self.content.end_text();
        self.content.restore_state();
    }
}

/// Helvetica has no metrics here, so anchoring uses an average glyph width.
fn approx_text_width(chars: usize, size: f32, bold: bool) -> f32 {
    let em = if bold { 0.56 } else { 0.52 };
    chars as f32 * size * em
}

// Type1 base fonts are single-byte; anything outside Latin-1 becomes '?'
fn to_latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
