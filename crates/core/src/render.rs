//! Text rendering of a grid with the player composited on top.
//!
//! This module is pure (no I/O).

use crate::grid::Grid;
use crate::player::Player;

/// Render `grid` row by row, each row newline-terminated, with the player's
/// sprite replacing the glyph under the player.
///
/// A player standing outside the grid is simply not drawn.
pub fn render(grid: &Grid, player: &Player) -> String {
    let mut out = String::with_capacity(grid.row_count() * (grid.column_count() + 1));
    render_into(grid, player, &mut out);
    out
}

/// Same as [`render`], reusing `out`'s allocation.
pub fn render_into(grid: &Grid, player: &Player, out: &mut String) {
    out.clear();
    let pos = player.position();
    for (y, row) in grid.rows().iter().enumerate() {
        for (x, &glyph) in row.iter().enumerate() {
            if pos.y == y as i32 && pos.x == x as i32 {
                out.push(player.sprite());
            } else {
                out.push(glyph);
            }
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MapCoordinate, Position};

    #[test]
    fn overlays_sprite() {
        let g = Grid::from_lines("t", MapCoordinate::new(0, 0), &["---", "-#-"], None).unwrap();
        let p = Player::new(Position::new(1, 2));
        assert_eq!(render(&g, &p), "---\n-#@\n");
    }

    #[test]
    fn out_of_bounds_player_is_not_drawn() {
        let g = Grid::from_lines("t", MapCoordinate::new(0, 0), &["--"], None).unwrap();
        let p = Player::new(Position::new(0, -1));
        assert_eq!(render(&g, &p), "--\n");
    }

    #[test]
    fn render_into_reuses_buffer() {
        let g = Grid::from_lines("t", MapCoordinate::new(0, 0), &["-"], None).unwrap();
        let p = Player::new(Position::new(0, 0)).with_sprite('P');
        let mut buf = String::from("stale contents");
        render_into(&g, &p, &mut buf);
        assert_eq!(buf, "P\n");
    }
}
