//! Fixed natural-language templates and tab-indented rendering

use crate::analysis::connectivity::Direction;
use crate::catalog::TileId;
use crate::io::configuration::BOARD_ORIGIN;
use crate::rules::outline::{MissionRules, RuleBook, TileRules};
use std::fmt::Write;

/// Literal text for every line of the rule script
pub trait Wording {
    /// Heading of the start tile's section
    fn start_heading(&self) -> String;
    /// Heading of any other tile's section
    fn piece_heading(&self, id: TileId) -> String;
    /// Sub-heading for one map; `mission` is 1-based
    fn mission_heading(&self, mission: usize) -> String;
    /// Sub-heading for one placement, given its `[row, col]` grid position
    fn position_heading(&self, position: [usize; 2]) -> String;
    /// Instruction to reveal `tile` when leaving through `direction`
    fn reveal(&self, direction: Direction, tile: TileId) -> String;
}

/// The booklet's English templates
#[derive(Debug, Clone, Copy)]
pub struct BookletWording {
    origin: [i64; 2],
}

impl Default for BookletWording {
    fn default() -> Self {
        Self {
            origin: BOARD_ORIGIN,
        }
    }
}

impl BookletWording {
    /// Templates measuring positions from a custom board origin `(row, col)`
    pub const fn with_origin(origin: [i64; 2]) -> Self {
        Self { origin }
    }

    /// Board coordinates `(x, y)` of a grid position
    pub fn board_coordinates(&self, [row, col]: [usize; 2]) -> (i64, i64) {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        let col = i64::try_from(col).unwrap_or(i64::MAX);
        (col - self.origin[1], row - self.origin[0])
    }
}

impl Wording for BookletWording {
    fn start_heading(&self) -> String {
        "starting point:".to_string()
    }

    fn piece_heading(&self, id: TileId) -> String {
        format!("piece {id}:")
    }

    fn mission_heading(&self, mission: usize) -> String {
        format!("playing mission {mission}:")
    }

    fn position_heading(&self, position: [usize; 2]) -> String {
        let (x, y) = self.board_coordinates(position);
        format!("at position {x}, {y}:")
    }

    fn reveal(&self, direction: Direction, tile: TileId) -> String {
        format!("going {direction}, reveal piece {tile}")
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push('\t');
    }
    // Writing to a String cannot fail
    let _ = writeln!(out, "{text}");
}

fn render_mission(out: &mut String, depth: usize, mission: &MissionRules, wording: &dyn Wording) {
    let nested = mission.placements.len() > 1;
    for placement in &mission.placements {
        let mut reveal_depth = depth;
        if nested {
            push_line(out, depth, &wording.position_heading(placement.position));
            reveal_depth += 1;
        }
        for reveal in &placement.reveals {
            push_line(
                out,
                reveal_depth,
                &wording.reveal(reveal.direction, reveal.tile),
            );
        }
    }
}

fn render_section(out: &mut String, section: &TileRules, wording: &dyn Wording) {
    let heading = if section.is_start {
        wording.start_heading()
    } else {
        wording.piece_heading(section.id)
    };
    push_line(out, 0, &heading);

    let nested = section.missions.len() > 1;
    for mission in &section.missions {
        if nested {
            push_line(out, 1, &wording.mission_heading(mission.map_index + 1));
            render_mission(out, 2, mission, wording);
        } else {
            render_mission(out, 1, mission, wording);
        }
    }
}

/// Render the outline as tab-indented text
///
/// A section nests a mission level only when its tile occurs in several maps,
/// and a position level only when it occurs several times in one map.
pub fn render(book: &RuleBook, wording: &dyn Wording) -> String {
    let mut out = String::new();
    for section in &book.sections {
        render_section(&mut out, section, wording);
    }
    out
}
