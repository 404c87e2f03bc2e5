use super::*;

const END_MARKER: &str = "- The End -";

/// Draws one page slot. Lines past the bottom of the body area are dropped.
pub(super) fn draw_page(
    frame: &mut FrameBuffer,
    x: usize,
    page: PageView<'_>,
    byline: &str,
    on: bool,
) {
    let text_x = x + PAGE_MARGIN;
    let text_w = PAGE_W - 2 * PAGE_MARGIN;

    let header = page_label(page.number);
    draw_text(frame, text_x, HEADER_Y, header.as_str(), on);
    draw_hline(frame, text_x, HEADER_RULE_Y, text_w, on);

    let mut cursor = BodyCursor::new();
    for line in wrap_lines(page.content, CHARS_PER_LINE) {
        if !cursor.draw(frame, text_x, line, on) {
            return;
        }
    }

    if let Some(title) = page.title {
        cursor.skip();
        for line in wrap_lines(title, CHARS_PER_LINE) {
            if !cursor.draw_centered(frame, text_x, text_w, line, on) {
                return;
            }
        }
    }

    if page.is_last_page {
        cursor.skip();
        if !cursor.draw_centered(frame, text_x, text_w, END_MARKER, on) {
            return;
        }
        if !byline.is_empty() {
            let _ = cursor.draw_centered(frame, text_x, text_w, byline, on);
        }
    }
}

struct BodyCursor {
    y: usize,
}

impl BodyCursor {
    const fn new() -> Self {
        Self { y: BODY_Y }
    }

    fn fits(&self) -> bool {
        self.y + GLYPH_HEIGHT <= BODY_BOTTOM
    }

    fn skip(&mut self) {
        self.y += LINE_H;
    }

    fn draw(&mut self, frame: &mut FrameBuffer, x: usize, line: &str, on: bool) -> bool {
        if !self.fits() {
            return false;
        }
        draw_text(frame, x, self.y, line, on);
        self.skip();
        true
    }

    fn draw_centered(
        &mut self,
        frame: &mut FrameBuffer,
        x: usize,
        width: usize,
        line: &str,
        on: bool,
    ) -> bool {
        if !self.fits() {
            return false;
        }
        draw_text_centered_in(frame, x, width, self.y, line, on);
        self.skip();
        true
    }
}
