use neon_tetris::core::{Game, Screen};
use neon_tetris::term::{GameView, TerminalRenderer, Viewport};
use neon_tetris::types::{Cell, Rgb};

fn all_text(fb: &neon_tetris::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let mut game = Game::new(1);
    game.start();
    let snap = game.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut game = Game::new(1);
    game.start();
    let mut snap = game.snapshot();
    snap.board[19][0] = Cell::filled(Rgb::new(255, 0, 0));
    snap.current = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(1, 20).unwrap().style.fg, Rgb::new(255, 0, 0));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = Game::new(1);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 27;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let text = all_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
    assert!(text.contains("27"));
    assert!(text.contains("NEXT"));
}

#[test]
fn title_and_game_over_screens() {
    let mut game = Game::new(1);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    assert!(all_text(&fb).contains("Press ENTER"));

    game.start();
    let mut snap = game.snapshot();
    snap.screen = Screen::GameOver;
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn renderer_only_resends_changed_cells() {
    let mut game = Game::new(1);
    game.start();
    let view = GameView::default();
    let viewport = Viewport::new(60, 22);
    let mut term = TerminalRenderer::with_writer(Vec::new());

    let mut fb = view.render(&game.snapshot(), viewport);
    term.draw_swap(&mut fb).unwrap();
    let full = term.writer().len();
    assert!(full > 0);

    // Same frame again: nothing to write.
    let mut fb = view.render(&game.snapshot(), viewport);
    term.draw_swap(&mut fb).unwrap();
    assert_eq!(term.writer().len(), full);

    let mut snap = game.snapshot();
    snap.score = 40;
    let mut fb = view.render(&snap, viewport);
    term.draw_swap(&mut fb).unwrap();
    let diff = term.writer().len() - full;
    assert!(diff > 0 && diff < full / 4, "diff {diff} vs full {full}");
}
