use super::*;

const CONTROL_W: usize = 17;
const CONTROL_H: usize = 15;
const CONTROL_Y: usize = NAV_Y + 3;
const PREVIOUS_X: usize = 6;
const NEXT_X: usize = WIDTH - 6 - CONTROL_W;
const RUNNING_HEAD_X: usize = PREVIOUS_X + CONTROL_W + 8;

pub(super) fn draw_navigation(
    frame: &mut FrameBuffer,
    navigation: NavigationView,
    title: &str,
    on: bool,
) {
    draw_hline(frame, 0, NAV_Y, WIDTH, on);

    draw_control(frame, PREVIOUS_X, '<', navigation.previous, on);
    draw_control(frame, NEXT_X, '>', navigation.next, on);

    let text_y = CONTROL_Y + (CONTROL_H - GLYPH_HEIGHT) / 2;
    let counter = counter_label(navigation.current, navigation.total);
    let counter_x = NEXT_X - 8 - text_pixel_width(counter.as_str());
    draw_text(frame, counter_x, text_y, counter.as_str(), on);

    // Running head gets whatever room the counter leaves.
    let room = counter_x.saturating_sub(RUNNING_HEAD_X + 8) / GLYPH_ADVANCE;
    let head = match title.char_indices().nth(room) {
        Some((idx, _)) => &title[..idx],
        None => title,
    };
    draw_text(frame, RUNNING_HEAD_X, text_y, head, on);
}

/// Enabled controls are solid with a knocked-out arrow. Disabled ones are
/// a dotted outline around a plain arrow.
fn draw_control(frame: &mut FrameBuffer, x: usize, arrow: char, state: ControlState, on: bool) {
    let glyph = glyph_5x7(arrow);
    let glyph_x = x + (CONTROL_W - 5) / 2;
    let glyph_y = CONTROL_Y + (CONTROL_H - GLYPH_HEIGHT) / 2;

    if state.is_enabled() {
        frame.fill_rect(x, CONTROL_Y, CONTROL_W, CONTROL_H, on);
        draw_glyph_5x7(frame, glyph_x, glyph_y, &glyph, !on);
    } else {
        draw_dotted_rect(frame, x, CONTROL_Y, CONTROL_W, CONTROL_H, on);
        draw_glyph_5x7(frame, glyph_x, glyph_y, &glyph, on);
    }
}

#[cfg(test)]
pub(super) fn control_probe(next: bool) -> (usize, usize) {
    let x = if next { NEXT_X } else { PREVIOUS_X };
    // Inner corner, clear of the arrow and the outline.
    (x + 1, CONTROL_Y + 1)
}
