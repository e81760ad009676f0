//! Frame composition for the terminal view.
//!
//! Output format:
//! ```text
//! P:3 E:2 P$:1 E$:5
//! #.........
//! .U.@......
//! ......U.U.
//! .........#
//! ```
//!
//! The header counts units and money per faction. Below it every playable
//! cell shows one glyph; castles win over the avatar, the avatar over units.

use crate::game::{GameState, Location};

/// Glyph for an empty map cell.
pub const MAP_GLYPH: char = '.';
/// Glyph for the avatar.
pub const AVATAR_GLYPH: char = '@';
/// Glyph for either castle.
pub const CASTLE_GLYPH: char = '#';
/// Glyph for a unit of either side.
pub const UNIT_GLYPH: char = 'U';

/// A fully composed screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The status header shown above the map.
    pub header: String,
    /// Map rows, top to bottom.
    pub rows: Vec<String>,
}

/// Build the header line: `P:<units> E:<units> P$:<money> E$:<money>`.
#[must_use]
pub fn render_header(state: &GameState) -> String {
    format!(
        "P:{} E:{} P$:{} E$:{}",
        state.player.units.len(),
        state.enemy.units.len(),
        state.player.money,
        state.enemy.money,
    )
}

/// Compose the frame for the current match state.
///
/// Entities outside the playable grid are not drawn.
#[must_use]
pub fn render_frame(state: &GameState) -> Frame {
    let bounds = state.bounds();
    let mut cells = vec![MAP_GLYPH; bounds.cell_count()];

    let mut place = |location: Location, glyph: char| {
        if let Some(idx) = bounds.index_of(location) {
            cells[idx] = glyph;
        }
    };

    // Lowest precedence first; later glyphs overwrite earlier ones.
    for unit in state.enemy.units.iter().chain(&state.player.units) {
        place(unit.entity.location, UNIT_GLYPH);
    }
    place(state.avatar.location, AVATAR_GLYPH);
    place(state.player.castle.location, CASTLE_GLYPH);
    place(state.enemy.castle.location, CASTLE_GLYPH);

    let rows = cells
        .chunks(usize::from(bounds.width()))
        .map(|row| row.iter().collect())
        .collect();

    Frame {
        header: render_header(state),
        rows,
    }
}

impl Frame {
    /// The frame as plain text, header first.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::with_capacity((self.rows.len() + 1) * (self.header.len() + 1));
        output.push_str(&self.header);
        output.push('\n');
        for row in &self.rows {
            output.push_str(row);
            output.push('\n');
        }
        output
    }
}
