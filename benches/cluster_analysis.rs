use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palette::Srgb;
use sprite_palette::cluster::cluster_samples;
use sprite_palette::ClusteringConfig;

fn benchmark_cluster_samples(c: &mut Criterion) {
    // two dominant tones plus a repeating accent channel
    let samples: Vec<Srgb<u8>> = (0..4096u32)
        .map(|i| {
            let tone = ((i % 2) * 255) as u8;
            Srgb::new(tone, tone, ((i % 7) * 36) as u8)
        })
        .collect();
    let config = ClusteringConfig {
        cluster_count: 4,
        seed: Some(7),
        ..ClusteringConfig::default()
    };

    c.bench_function("cluster_samples_4096", |b| {
        b.iter(|| cluster_samples(black_box(&samples), &config))
    });
}

criterion_group!(benches, benchmark_cluster_samples);
criterion_main!(benches);
