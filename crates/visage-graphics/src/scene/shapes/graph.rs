use crate::coords::Rect;
use crate::line::Line;
use crate::scene::{DrawCmd, DrawList};

/// Polyline graph stroked inside `rect`. The line is a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLineCmd {
    pub rect: Rect,
    pub line: Line,
    pub line_width: f32,
}

/// Area between a polyline graph and the horizontal at `fill_position`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFillCmd {
    pub rect: Rect,
    pub line: Line,
    pub fill_position: f32,
}

impl DrawList {
    pub fn push_graph_line(&mut self, rect: Rect, line: &Line, line_width: f32) {
        self.push(DrawCmd::GraphLine(GraphLineCmd {
            rect,
            line: line.clone(),
            line_width,
        }));
    }

    pub fn push_graph_fill(&mut self, rect: Rect, line: &Line, fill_position: f32) {
        self.push(DrawCmd::GraphFill(GraphFillCmd {
            rect,
            line: line.clone(),
            fill_position,
        }));
    }
}
