//! Text display of brightness frames.
//!
//! Each value is bucketed into a fixed glyph ramp. Values above the top
//! threshold saturate to the brightest glyph.

use ptty_renderer::FrameBuffer;
use std::io::{self, Write};

/// Lower bounds (exclusive) and glyphs, brightest first.
const GLYPH_RAMP: [(f64, char); 11] = [
    (250.0, '#'),
    (225.0, '@'),
    (200.0, '*'),
    (175.0, 'o'),
    (150.0, '='),
    (125.0, 'x'),
    (100.0, '+'),
    (75.0, 'c'),
    (50.0, '^'),
    (25.0, '~'),
    (10.0, '-'),
];

/// Glyph for a brightness value. NaN and anything up to 10 is blank.
pub fn glyph(value: f64) -> char {
    GLYPH_RAMP
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(' ', |&(_, glyph)| glyph)
}

/// Render a frame as text: one line per row, each newline-terminated.
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    let mut text = String::with_capacity((frame.width() + 1) * frame.height());
    for row in frame.rows() {
        text.extend(row.iter().map(|&value| glyph(value)));
        text.push('\n');
    }
    text
}

/// Writes frames to an output stream.
pub struct TextDisplay<W: Write> {
    out: W,
    redraw_in_place: bool,
}

impl<W: Write> TextDisplay<W> {
    /// With `redraw_in_place`, each frame moves the cursor home first so it
    /// overwrites the previous one instead of scrolling.
    pub fn new(out: W, redraw_in_place: bool) -> Self {
        Self {
            out,
            redraw_in_place,
        }
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        if self.redraw_in_place {
            // \x1b[H = cursor home
            write!(self.out, "\x1b[H")?;
        }
        self.out.write_all(frame_to_text(frame).as_bytes())?;
        self.out.flush()
    }
}
