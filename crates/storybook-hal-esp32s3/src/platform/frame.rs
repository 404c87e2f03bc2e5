//! 1bpp framebuffer and wire encoding for the LS027B7DH01 (2.7" 400x240
//! Sharp Memory LCD).

use core::ops::RangeInclusive;

/// Panel width in pixels.
pub const WIDTH: usize = 400;
/// Panel height in pixels.
pub const HEIGHT: usize = 240;
/// Bytes per panel row.
pub const ROW_BYTES: usize = WIDTH / 8;

const MODE_WRITE: u8 = 0x80;
const MODE_VCOM: u8 = 0x40;
const MODE_CLEAR: u8 = 0x20;

/// Command byte opening a transaction. VCOM is carried in M1 because the
/// board ties EXTMODE low.
pub const fn command_byte(write: bool, vcom_high: bool, clear: bool) -> u8 {
    let mut byte = 0u8;
    if write {
        byte |= MODE_WRITE;
    }
    if vcom_high {
        byte |= MODE_VCOM;
    }
    if clear {
        byte |= MODE_CLEAR;
    }
    byte
}

/// Gate address of a 1-based panel row. The panel samples it LSB first.
pub fn row_address(row: u16) -> Option<u8> {
    if !(1..=HEIGHT as u16).contains(&row) {
        return None;
    }

    Some((row as u8).reverse_bits())
}

/// All-clear command: mode byte followed by 16 dummy bits.
pub const fn clear_packet(vcom_high: bool) -> [u8; 3] {
    [command_byte(false, vcom_high, true), 0x00, 0x00]
}

/// Frame in panel row order. A set bit is a dark pixel; bit 7 of each byte
/// is the leftmost pixel of that byte.
#[derive(Clone)]
pub struct FrameBuffer {
    rows: [[u8; ROW_BYTES]; HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            rows: [[0u8; ROW_BYTES]; HEIGHT],
        }
    }

    /// Fills the whole frame dark (`on = true`) or light.
    pub fn clear(&mut self, on: bool) {
        let fill = if on { 0xFF } else { 0x00 };
        for row in self.rows.iter_mut() {
            row.fill(fill);
        }
    }

    /// Returns `false` when the pixel is off-panel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let mask = 0x80u8 >> (x % 8);
        let byte = &mut self.rows[y][x / 8];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        Some(self.rows[y][x / 8] & (0x80u8 >> (x % 8)) != 0)
    }

    /// Fills a rectangle, clipped to the panel.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, on: bool) {
        let x_end = x.saturating_add(w).min(WIDTH);
        let y_end = y.saturating_add(h).min(HEIGHT);

        for py in y.min(HEIGHT)..y_end {
            for px in x.min(WIDTH)..x_end {
                let _ = self.set_pixel(px, py, on);
            }
        }
    }

    /// 50% checkerboard over a rectangle, clipped to the panel. Pixels off
    /// the pattern are left as they are.
    pub fn dither_rect(&mut self, x: usize, y: usize, w: usize, h: usize, on: bool) {
        let x_end = x.saturating_add(w).min(WIDTH);
        let y_end = y.saturating_add(h).min(HEIGHT);

        for py in y.min(HEIGHT)..y_end {
            for px in x.min(WIDTH)..x_end {
                if (px + py) % 2 == 0 {
                    let _ = self.set_pixel(px, py, on);
                }
            }
        }
    }

    /// Payload of a 1-based panel row.
    pub fn row(&self, row: u16) -> Option<&[u8; ROW_BYTES]> {
        let index = (row as usize).checked_sub(1)?;
        self.rows.get(index)
    }

    /// 1-based span of rows that differ from `other`, if any.
    pub fn changed_rows(&self, other: &FrameBuffer) -> Option<RangeInclusive<u16>> {
        let first = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .position(|(a, b)| a != b)?;
        let last = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .rposition(|(a, b)| a != b)
            .unwrap_or(first);

        Some((first as u16 + 1)..=(last as u16 + 1))
    }
}
