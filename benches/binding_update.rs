use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bindings::core::{AxisConfig, AxisFilter, BindingRegistry, KeyState};
use tui_bindings::engine::InputSystem;
use tui_bindings::types::{InputCode, NamedKey};

const LEFT: InputCode = InputCode::Named(NamedKey::Left);
const RIGHT: InputCode = InputCode::Named(NamedKey::Right);

fn bench_axis_update(c: &mut Criterion) {
    let mut axis = AxisFilter::new(AxisConfig::new(LEFT, RIGHT).with_ease(0.2).with_snap(true));
    let mut keys = KeyState::new();
    keys.press(RIGHT);

    c.bench_function("axis_update", |b| {
        b.iter(|| {
            axis.update(black_box(&keys));
        })
    });
}

fn bench_update_all_64_axes(c: &mut Criterion) {
    let mut registry = BindingRegistry::new();
    for i in 0..64 {
        registry.define_axis(
            &format!("axis{}", i),
            AxisConfig::new(LEFT, RIGHT).with_ease(0.1 + (i % 9) as f32 * 0.1),
        );
    }
    let mut keys = KeyState::new();
    keys.press(LEFT);

    c.bench_function("update_all_64_axes", |b| {
        b.iter(|| {
            registry.update_all(black_box(&keys));
        })
    });
}

fn bench_query_by_name(c: &mut Criterion) {
    let mut input = InputSystem::new(KeyState::new());
    input.define_key("Jump", InputCode::Named(NamedKey::Space));
    input.define_axis("Horizontal", AxisConfig::new(LEFT, RIGHT));

    c.bench_function("query_by_name", |b| {
        b.iter(|| {
            let _ = black_box(input.is_down(black_box("Jump")));
            let _ = black_box(input.axis(black_box("Horizontal")));
        })
    });
}

criterion_group!(
    benches,
    bench_axis_update,
    bench_update_all_64_axes,
    bench_query_by_name
);
criterion_main!(benches);
