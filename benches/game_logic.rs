use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neon_tetris::core::{Game, GameSnapshot, InputState, Key, Playfield, Tetromino};
use neon_tetris::term::{FrameBuffer, GameView, Viewport};
use neon_tetris::types::{PieceKind, Rgb};

fn started_game() -> (Game, InputState) {
    let mut game = Game::new(12345);
    let mut input = InputState::new();
    input.update_with(&[Key::Confirm]);
    game.update(&input);
    input.update_with(&[]);
    game.update(&input);
    game.drain_events().for_each(drop);
    (game, input)
}

fn bench_update(c: &mut Criterion) {
    let (mut game, mut input) = started_game();
    input.update_with(&[]);

    c.bench_function("game_update_step", |b| {
        b.iter(|| {
            game.update(black_box(&input));
            game.drain_events().for_each(drop);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let red = Rgb::new(255, 0, 0);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut playfield = Playfield::new();
            for y in 16..20 {
                for x in 0..10 {
                    playfield.fill_cell(x, y, red);
                }
            }
            let lines = playfield.filled_lines();
            playfield.clear_filled_lines_and_collapse(black_box(&lines));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let playfield = Playfield::new();
    let piece = Tetromino::new(PieceKind::T);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let mut p = piece;
            black_box(p.try_move(1, 1, &playfield));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let playfield = Playfield::new();
    let mut piece = Tetromino::new(PieceKind::L);
    piece.try_move(0, 5, &playfield);

    c.bench_function("try_rotate_cw", |b| {
        b.iter(|| {
            black_box(piece.try_rotate_cw(&playfield));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let (game, _) = started_game();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_and_render_80x24", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snapshot);
            view.render_into(black_box(&snapshot), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
