use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_arcade::core::{ArcadeConfig, BitGrid, Console};
use pixel_arcade::term::{encode_frame_into, CellBuffer, PixelView, StatusLine, Viewport};
use pixel_arcade::types::VariantKind;

fn playing(kind: VariantKind) -> Console {
    let mut console = Console::new(ArcadeConfig::default(), 12345).with_selection(kind);
    console.tick(true);
    console.tick(false);
    console
}

fn bench_title_tick(c: &mut Criterion) {
    let mut console = Console::new(ArcadeConfig::default(), 12345);

    c.bench_function("title_tick", |b| {
        b.iter(|| {
            console.tick(black_box(false));
        })
    });
}

fn bench_variant_ticks(c: &mut Criterion) {
    for kind in VariantKind::ALL {
        let mut console = playing(kind);
        let mut i = 0u32;
        c.bench_function(&format!("{}_tick", kind.as_str()), |b| {
            b.iter(|| {
                i = i.wrapping_add(1);
                console.tick(black_box(i % 29 == 0));
            })
        });
    }
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_from_row", |b| {
        b.iter(|| {
            let mut grid = BitGrid::new();
            for y in 8..16 {
                grid.set_row(y, u16::MAX >> (y - 8));
            }
            grid.clear_from(black_box(12));
            grid
        })
    });
}

fn bench_pixel_view(c: &mut Criterion) {
    let console = playing(VariantKind::Stacker);
    let view = PixelView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = CellBuffer::new(vp.width, vp.height);

    c.bench_function("pixel_view_render_into", |b| {
        b.iter(|| {
            let status = StatusLine::from_console(&console);
            view.render_into(console.frame(), &status, vp, &mut fb);
        })
    });
}

fn bench_frame_diff(c: &mut Criterion) {
    let mut console = playing(VariantKind::Runner);
    let view = PixelView::default();
    let vp = Viewport::new(80, 24);
    let prev = view.render(console.frame(), &StatusLine::from_console(&console), vp);
    console.tick(false);
    let next = view.render(console.frame(), &StatusLine::from_console(&console), vp);
    let mut out = Vec::with_capacity(16 * 1024);

    c.bench_function("encode_frame_into_diff", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(Some(black_box(&prev)), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_title_tick,
    bench_variant_ticks,
    bench_row_clear,
    bench_pixel_view,
    bench_frame_diff
);
criterion_main!(benches);
