use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rand::SeedableRng;
use rand::rngs::StdRng;

use voxel_bouquet::generation::{ArrangementComposer, FlowerGenerator, FlowerType, VaseGenerator};
use voxel_bouquet::palette::Season;
use voxel_bouquet::scene::{BouquetConfig, SceneManager};
use voxel_bouquet::voxel::Color;

fn bench_compose_20(c: &mut Criterion) {
    let composer = ArrangementComposer::default();
    let colors = Season::Spring.preset().colors;
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("compose_20_flowers", |b| {
        b.iter(|| composer.compose(Season::Spring, black_box(colors), black_box(20), &mut rng));
    });
}

fn bench_generators(c: &mut Criterion) {
    let flowers = FlowerGenerator::default();
    let vase = VaseGenerator::default();

    c.bench_function("flower_rose", |b| {
        b.iter(|| flowers.generate(black_box(FlowerType::Rose), Color::RED));
    });

    c.bench_function("vase", |b| {
        b.iter(|| vase.generate());
    });
}

fn bench_tick_and_flatten(c: &mut Criterion) {
    let config = BouquetConfig {
        seed: Some(7),
        ..Default::default()
    };
    let mut manager = SceneManager::new(config);
    manager.set_flower_count(20);
    let mut t = 0.0f32;

    c.bench_function("tick_flatten_20", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            manager.tick(black_box(t));
            manager.instances()
        });
    });
}

criterion_group!(benches, bench_compose_20, bench_generators, bench_tick_and_flatten);
criterion_main!(benches);
