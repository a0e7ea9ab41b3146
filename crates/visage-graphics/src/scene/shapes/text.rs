use core::ops::Range;

use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};
use crate::text::{Direction, Text};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    /// Snapshot of the text run, font and justification.
    pub text: Text,
    /// Layout box in native pixels.
    pub rect: Rect,
    pub direction: Direction,
    /// Char ranges of each laid out line, in flow order.
    pub lines: Vec<Range<usize>>,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: &Text, rect: Rect, direction: Direction, lines: Vec<Range<usize>>) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.clone(),
            rect,
            direction,
            lines,
        }));
    }
}
