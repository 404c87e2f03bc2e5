use super::*;

/// Outline drawn on every other pixel.
pub(super) fn draw_dotted_rect(
    frame: &mut FrameBuffer,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    on: bool,
) {
    if w == 0 || h == 0 {
        return;
    }

    frame.dither_rect(x, y, w, 1, on);
    frame.dither_rect(x, y + h - 1, w, 1, on);
    frame.dither_rect(x, y, 1, h, on);
    frame.dither_rect(x + w - 1, y, 1, h, on);
}

pub(super) fn draw_hline(frame: &mut FrameBuffer, x: usize, y: usize, w: usize, on: bool) {
    frame.fill_rect(x, y, w, 1, on);
}

/// Right triangle filling the corner at `(corner_x, 0)`; `toward_right`
/// grows it to the right of the corner.
pub(super) fn draw_corner_fold(
    frame: &mut FrameBuffer,
    corner_x: usize,
    size: usize,
    toward_right: bool,
    on: bool,
) {
    for row in 0..size {
        let len = size - row;
        let x = if toward_right {
            corner_x
        } else {
            (corner_x + 1).saturating_sub(len)
        };
        draw_hline(frame, x, row, len, on);
    }
}
