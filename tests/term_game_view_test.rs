use tui_2048::core::Grid;
use tui_2048::term::{AnchorY, FrameBuffer, GameStatus, GameView, Viewport};
use tui_2048::types::Tile;

fn grid<const N: usize>(rows: [[Tile; N]; N]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With cell_w=6 and cell_h=3:
    // board pixels = 4*6 by 4*3 => 24x12
    // plus border => 26x14
    let fb = view.render(&Grid::default(), GameStatus::Playing, Viewport::new(26, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(25, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_values() {
    let g = grid([[2, 0, 0, 0], [0, 0, 2048, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let fb = GameView::default().render(&g, GameStatus::Playing, Viewport::new(26, 14));

    // Tile (0,0): columns 1..6, middle row 2, "2" centred in the 5 wide face.
    assert_eq!(fb.get(3, 2).unwrap().ch, '2');
    // Tile (1,2): columns 13..18, middle row 5.
    let face: String = row_text(&fb, 5).chars().skip(13).take(4).collect();
    assert_eq!(face, "2048");
    // Rows mixing dots and digits still hold one char per column.
    assert_eq!(row_text(&fb, 5).chars().count(), 26);
    // Empty tile (0,1) shows a dot.
    assert_eq!(fb.get(9, 2).unwrap().ch, '·');
}

#[test]
fn term_view_tile_background_differs_from_empty_cells() {
    let g = grid([[4, 0], [0, 0]]);
    let fb = GameView::default().render(&g, GameStatus::Playing, Viewport::new(14, 8));

    let tile = fb.get(1, 1).unwrap().style;
    let empty = fb.get(7, 1).unwrap().style;
    assert_ne!(tile.bg, empty.bg);
    assert!(tile.bold);
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let view = GameView::default();
    let fb = view.render(&Grid::default(), GameStatus::Playing, Viewport::new(26, 30));

    // start_y = (30 - 14) / 2 = 8 => top-left corner at (0,8).
    assert_eq!(fb.get(0, 8).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&Grid::default(), GameStatus::Playing, Viewport::new(26, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let g = grid([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 512, 0], [0, 0, 0, 0]]);
    let fb = GameView::default().render(&g, GameStatus::Playing, Viewport::new(60, 14));

    let all = fb.to_text();
    assert!(all.contains("BEST TILE"));
    assert!(all.contains("EMPTY"));
    assert!(all.contains("13"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&Grid::default(), GameStatus::Playing, Viewport::new(30, 14));
    assert!(!fb.to_text().contains("BEST TILE"));
}

#[test]
fn term_view_shows_game_over_only_when_lost() {
    let g = grid([[2, 4], [8, 16]]);
    let view = GameView::new(4, 2);

    let playing = view.render(&g, GameStatus::Playing, Viewport::new(10, 6));
    assert!(!playing.to_text().contains("GAME OVER"));

    let view = GameView::default();
    let lost = view.render(&Grid::default(), GameStatus::Lost, Viewport::new(26, 14));
    assert!(row_text(&lost, 7).contains("GAME OVER"));
}

#[test]
fn term_view_supports_larger_grids() {
    let view = GameView::default();
    let g = Grid::new(6).unwrap();
    let (w, h) = view.frame_size(6);
    let fb = view.render(&g, GameStatus::Playing, Viewport::new(w, h));
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}
