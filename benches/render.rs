use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_props::{to_string, to_string_with_options, RenderOptions};
use std::collections::BTreeMap;

#[derive(Serialize, Clone)]
struct Endpoint {
    host: String,
    port: u16,
    secure: bool,
}

#[derive(Serialize, Clone)]
struct ServiceConfig {
    name: String,
    region: String,
    replicas: u32,
    endpoint: Endpoint,
}

fn sample_config(i: u32) -> ServiceConfig {
    ServiceConfig {
        name: format!("service-{i}"),
        region: "eu-west-1".to_string(),
        replicas: i,
        endpoint: Endpoint {
            host: format!("svc-{i}.internal"),
            port: 8000 + (i % 1000) as u16,
            secure: i % 2 == 0,
        },
    }
}

fn benchmark_render_simple(c: &mut Criterion) {
    let config = sample_config(1);

    c.bench_function("render_simple_struct", |b| {
        b.iter(|| to_string(black_box(&config)))
    });
}

fn benchmark_render_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sections");

    for size in [10, 50, 100, 500].iter() {
        let document: BTreeMap<String, ServiceConfig> = (0..*size)
            .map(|i| (format!("service{i:04}"), sample_config(i)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&document)))
        });
    }
    group.finish();
}

fn benchmark_render_escaped(c: &mut Criterion) {
    let document: BTreeMap<String, String> = (0..100)
        .map(|i| {
            (
                format!("key with spaces {i}"),
                format!("wert-{i} = münchen:straße #{i}\n"),
            )
        })
        .collect();

    let mut group = c.benchmark_group("render_escaped");

    group.bench_function("pass_through", |b| {
        b.iter(|| to_string(black_box(&document)))
    });

    let restricted = RenderOptions::new().with_restrict_charset(true);
    group.bench_function("restricted_charset", |b| {
        b.iter(|| to_string_with_options(black_box(&document), restricted))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_sections,
    benchmark_render_escaped
);
criterion_main!(benches);
