use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lights::parser::parse_scene;
use lights::replay::QuadBatcher;

fn scene_text(quads: usize) -> String {
    let mut text = String::new();
    for i in 0..quads {
        let z = i as f32 * 0.1;
        text.push_str("C 0.5 0.5 0.5 N 0 0 1 ");
        text.push_str(&format!("V 0 0 {z} V 1 0 {z} V 1 1 {z} V 0 1 {z} "));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = scene_text(10_000);
    c.bench_function("parse_scene_10k_quads", |b| {
        b.iter(|| parse_scene(black_box(&text)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let records = parse_scene(&scene_text(10_000));
    c.bench_function("batch_10k_quads", |b| {
        b.iter(|| QuadBatcher::batch(black_box(&records)))
    });
}

criterion_group!(benches, bench_parse, bench_batch);
criterion_main!(benches);
