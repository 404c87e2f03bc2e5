//! Two-page spread renderer for the 400x240 memory LCD.
//!
//! Layout, left to right: left page, spine, right page. The navigation bar
//! runs under both pages.

use storybook_core::{
    render::{
        AnimationFrame, AnimationKind, ControlState, NavigationView, PageView, Screen,
        VisualStyle, ZonesView,
    },
    text_policy::{counter_label, page_label, wrap_lines},
};

use crate::platform::frame::{FrameBuffer, WIDTH};

use super::FrameRenderer;

mod glyph;
mod navigation;
mod page;
mod primitives;

#[allow(unused_imports)]
use self::{glyph::*, navigation::*, page::*, primitives::*};

const GLYPH_ADVANCE: usize = 6;
const GLYPH_HEIGHT: usize = 7;

const PAGE_W: usize = 196;
const SPINE_X: usize = PAGE_W;
const SPINE_W: usize = 8;
const LEFT_X: usize = 0;
const RIGHT_X: usize = SPINE_X + SPINE_W;
const PAGE_MARGIN: usize = 8;
const CHARS_PER_LINE: usize = (PAGE_W - 2 * PAGE_MARGIN + 1) / GLYPH_ADVANCE;

const HEADER_Y: usize = 4;
const HEADER_RULE_Y: usize = HEADER_Y + GLYPH_HEIGHT + 2;
const BODY_Y: usize = HEADER_RULE_Y + 4;
const LINE_H: usize = 8;
const NAV_Y: usize = 218;
const BODY_BOTTOM: usize = NAV_Y - 2;

const DOG_EAR: usize = 10;
const TURN_BAND_W: usize = 28;

/// Stateless renderer for [`Screen::Spread`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadRenderer;

impl SpreadRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl FrameRenderer for SpreadRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer) {
        match screen {
            Screen::Spread {
                title,
                byline,
                left,
                right,
                navigation,
                zones,
                style,
                animation,
            } => {
                let (bg, fg) = palette(style);
                frame.clear(bg);

                draw_spine(frame, fg);
                if let Some(page) = left {
                    draw_page(frame, LEFT_X, page, byline, fg);
                }
                if let Some(page) = right {
                    draw_page(frame, RIGHT_X, page, byline, fg);
                }
                if let Some(animation) = animation {
                    draw_turn_band(frame, animation, fg);
                }
                draw_dog_ears(frame, zones, fg);
                draw_navigation(frame, navigation, title, fg);
            }
        }
    }
}

fn palette(style: VisualStyle) -> (bool, bool) {
    if style.inverted {
        (true, false)
    } else {
        (false, true)
    }
}

fn draw_spine(frame: &mut FrameBuffer, on: bool) {
    frame.dither_rect(SPINE_X, 0, SPINE_W, NAV_Y, on);
    frame.fill_rect(SPINE_X + SPINE_W / 2 - 1, 0, 2, NAV_Y, on);
}

/// Shading band over the right page. Forward turns sweep from the outer
/// edge toward the spine, backward turns the other way.
fn draw_turn_band(frame: &mut FrameBuffer, animation: AnimationFrame, on: bool) {
    let travel = PAGE_W - TURN_BAND_W;
    let progress = animation.progress_pct.min(100) as usize;
    let offset = match animation.kind {
        AnimationKind::TurnForward => travel * (100 - progress) / 100,
        AnimationKind::TurnBackward => travel * progress / 100,
    };

    frame.dither_rect(RIGHT_X + offset, 0, TURN_BAND_W, NAV_Y, on);
}

fn draw_dog_ears(frame: &mut FrameBuffer, zones: ZonesView, on: bool) {
    if zones.left_visible {
        draw_corner_fold(frame, 0, DOG_EAR, true, on);
    }
    if zones.right_visible {
        draw_corner_fold(frame, WIDTH - 1, DOG_EAR, false, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u16, content: &str) -> PageView<'_> {
        PageView {
            number,
            content,
            title: None,
            is_last_page: false,
        }
    }

    fn navigation(previous: bool, next: bool) -> NavigationView {
        NavigationView {
            previous: ControlState::from_enabled(previous),
            next: ControlState::from_enabled(next),
            current: 1,
            total: 15,
        }
    }

    fn render(
        left: Option<PageView<'_>>,
        right: Option<PageView<'_>>,
        zones: ZonesView,
        animation: Option<AnimationFrame>,
        style: VisualStyle,
    ) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        SpreadRenderer::new().render(
            Screen::Spread {
                title: "Story",
                byline: "Author",
                left,
                right,
                navigation: navigation(zones.left_visible, zones.right_visible),
                zones,
                style,
                animation,
            },
            &mut frame,
        );
        frame
    }

    fn lit(frame: &FrameBuffer, x: usize, y: usize, w: usize, h: usize) -> usize {
        let mut count = 0;
        for py in y..y + h {
            for px in x..x + w {
                if frame.pixel(px, py) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    const FIRST_SPREAD: ZonesView = ZonesView {
        left_visible: false,
        right_visible: true,
    };

    #[test]
    fn empty_slot_leaves_page_blank() {
        let frame = render(
            None,
            Some(page(1, "Once upon a time.")),
            FIRST_SPREAD,
            None,
            VisualStyle::default(),
        );

        assert_eq!(lit(&frame, LEFT_X, 0, PAGE_W, NAV_Y), 0);
        assert!(lit(&frame, RIGHT_X, HEADER_Y, PAGE_W, GLYPH_HEIGHT) > 0);
        assert!(lit(&frame, RIGHT_X, BODY_Y, PAGE_W, GLYPH_HEIGHT) > 0);
    }

    #[test]
    fn dog_ears_follow_zone_visibility() {
        let frame = render(None, None, FIRST_SPREAD, None, VisualStyle::default());
        assert_eq!(frame.pixel(0, 0), Some(false));
        assert_eq!(frame.pixel(WIDTH - 1, 0), Some(true));

        let frame = render(
            None,
            None,
            ZonesView {
                left_visible: true,
                right_visible: false,
            },
            None,
            VisualStyle::default(),
        );
        assert_eq!(frame.pixel(0, 0), Some(true));
        assert_eq!(frame.pixel(WIDTH - 1, 0), Some(false));
    }

    #[test]
    fn disabled_control_is_hollow() {
        let frame = render(None, None, FIRST_SPREAD, None, VisualStyle::default());

        let (px, py) = control_probe(false);
        assert_eq!(frame.pixel(px, py), Some(false));
        let (nx, ny) = control_probe(true);
        assert_eq!(frame.pixel(nx, ny), Some(true));
    }

    #[test]
    fn turn_band_sweeps_toward_spine_on_forward() {
        let outer_x = WIDTH - TURN_BAND_W;
        let inner_x = RIGHT_X;
        let y = BODY_Y;
        let h = 40;

        let start = render(
            None,
            None,
            FIRST_SPREAD,
            Some(AnimationFrame {
                kind: AnimationKind::TurnForward,
                progress_pct: 0,
            }),
            VisualStyle::default(),
        );
        assert!(lit(&start, outer_x, y, TURN_BAND_W, h) > 0);
        assert_eq!(lit(&start, inner_x, y, TURN_BAND_W, h), 0);

        let late = render(
            None,
            None,
            FIRST_SPREAD,
            Some(AnimationFrame {
                kind: AnimationKind::TurnForward,
                progress_pct: 100,
            }),
            VisualStyle::default(),
        );
        assert!(lit(&late, inner_x, y, TURN_BAND_W, h) > 0);
        assert_eq!(lit(&late, outer_x, y, TURN_BAND_W, h), 0);

        let backward = render(
            None,
            None,
            FIRST_SPREAD,
            Some(AnimationFrame {
                kind: AnimationKind::TurnBackward,
                progress_pct: 0,
            }),
            VisualStyle::default(),
        );
        assert!(lit(&backward, inner_x, y, TURN_BAND_W, h) > 0);
    }

    #[test]
    fn no_band_when_settled() {
        let frame = render(None, None, FIRST_SPREAD, None, VisualStyle::default());
        assert_eq!(lit(&frame, RIGHT_X, BODY_Y, PAGE_W, 40), 0);
    }

    #[test]
    fn last_page_draws_end_marker_below_body() {
        let marker_y = BODY_Y + 2 * LINE_H;
        let plain = render(
            None,
            Some(page(15, "")),
            FIRST_SPREAD,
            None,
            VisualStyle::default(),
        );
        assert_eq!(lit(&plain, RIGHT_X, marker_y, PAGE_W, 2 * LINE_H), 0);

        let last = render(
            None,
            Some(PageView {
                is_last_page: true,
                ..page(15, "")
            }),
            FIRST_SPREAD,
            None,
            VisualStyle::default(),
        );
        assert!(lit(&last, RIGHT_X, marker_y, PAGE_W, GLYPH_HEIGHT) > 0);
        assert!(lit(&last, RIGHT_X, marker_y + LINE_H, PAGE_W, GLYPH_HEIGHT) > 0);
    }

    #[test]
    fn overflowing_text_stops_above_navigation() {
        let long = "word ".repeat(400);
        let frame = render(
            Some(page(1, &long)),
            Some(page(2, &long)),
            ZonesView {
                left_visible: true,
                right_visible: true,
            },
            None,
            VisualStyle::default(),
        );

        let text_w = PAGE_W - 2 * PAGE_MARGIN;
        assert!(lit(&frame, LEFT_X + PAGE_MARGIN, BODY_BOTTOM - LINE_H, text_w, LINE_H) > 0);
        assert_eq!(
            lit(&frame, RIGHT_X, BODY_BOTTOM, PAGE_W, NAV_Y - BODY_BOTTOM),
            0
        );
    }

    #[test]
    fn inverted_style_lights_background() {
        let frame = render(None, None, FIRST_SPREAD, None, VisualStyle { inverted: true });
        assert_eq!(frame.pixel(LEFT_X + PAGE_W / 2, BODY_Y + 40), Some(true));
    }

    #[test]
    fn story_glyphs_normalize_to_drawable_forms() {
        assert_eq!(normalize_glyph_char('✧'), '*');
        assert_eq!(normalize_glyph_char('’'), '\'');
        assert_eq!(normalize_glyph_char('—'), '-');
        assert_ne!(glyph_5x7('*'), glyph_5x7('\u{1}'));
        assert_eq!(text_pixel_width("ab"), 11);
        assert_eq!(CHARS_PER_LINE, 30);
    }
}
