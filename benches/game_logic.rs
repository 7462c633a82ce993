use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::{EngineConfig, Field, GameEngine, Piece, PieceCatalog};
use tui_blocks::types::GameAction;

fn standard_engine() -> GameEngine {
    GameEngine::new(PieceCatalog::standard().unwrap(), EngineConfig::default())
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = standard_engine();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if !engine.is_running() {
                engine = standard_engine();
            }
            engine.tick();
            black_box(engine.take_last_event());
        })
    });
}

fn bench_burn_rows(c: &mut Criterion) {
    c.bench_function("burn_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y);
                }
            }
            black_box(field.update_rows());
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    let mut engine = standard_engine();

    c.bench_function("drop_piece", |b| {
        b.iter(|| {
            if !engine.is_running() {
                engine = standard_engine();
            }
            engine.handle_input(GameAction::Drop);
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let field = Field::default();
    let catalog = PieceCatalog::standard().unwrap();
    let mut piece = Piece::new(catalog.get(2).unwrap().clone());
    piece.set_position((4, 8));

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let dx = if piece.position().0 > 4 { -1 } else { 1 };
            black_box(piece.try_move(&field, dx, 0));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let field = Field::default();
    let catalog = PieceCatalog::standard().unwrap();
    let mut piece = Piece::new(catalog.get(0).unwrap().clone());
    piece.set_position((3, 8));

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(piece.try_rotate(&field));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = standard_engine();
    let mut snap = engine.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_burn_rows,
    bench_drop,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
