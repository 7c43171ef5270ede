use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ir_cursor_mapping::mapping::map_center;
use ir_cursor_mapping::{
    CursorMapper, MappingConfig, MappingStrategy, Point, PointF, ScreenCorners, Snapshot,
};

fn tilted_snapshot() -> Snapshot {
    Snapshot::new([
        Point::new(380, 410),
        Point::new(590, 395),
        Point::new(405, 620),
        Point::new(615, 600),
    ])
}

fn bench_map_to_cursor(c: &mut Criterion) {
    let destination = ScreenCorners::from_rect(1920.0, 1080.0);
    let snapshot = tilted_snapshot();

    for (name, strategy) in [
        ("map_to_cursor_axis", MappingStrategy::Axis),
        ("map_to_cursor_homography", MappingStrategy::Homography),
    ] {
        let mapper = CursorMapper::new(MappingConfig::default(), strategy);
        c.bench_function(name, |b| {
            b.iter(|| mapper.map_to_cursor(black_box(&snapshot), black_box(&destination)))
        });
    }
}

fn bench_perspective_solve(c: &mut Criterion) {
    let camera = ScreenCorners::new(
        PointF::new(120.0, 130.0),
        PointF::new(880.0, 90.0),
        PointF::new(60.0, 910.0),
        PointF::new(950.0, 960.0),
    );
    let destination = ScreenCorners::from_rect(1920.0, 1080.0);
    let center = MappingConfig::default().optical_center();

    c.bench_function("map_center", |b| {
        b.iter(|| map_center(black_box(&camera), black_box(&destination), center))
    });
}

criterion_group!(benches, bench_map_to_cursor, bench_perspective_solve);
criterion_main!(benches);
