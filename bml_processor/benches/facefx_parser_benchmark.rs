use std::hint::black_box;
use std::time::Duration;

use bml_processor::{assign_visemes, generate_bml, parse_facefx};
use criterion::{Criterion, criterion_group, criterion_main};
use viseme_scheduler_core::{BmlGenerationOptions, FacefxParsingOptions, VisemeMapping};

const SAMPLE_FACEFX: &str = include_str!("../tests/test_data/sample_animation.xml");

fn benchmark_parse_facefx(c: &mut Criterion) {
    let mut group = c.benchmark_group("FaceFX Parsing");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(200);

    let default_options = FacefxParsingOptions::default();

    group.bench_function("parse_sample_export", |b| {
        b.iter(|| {
            let parsed_data = parse_facefx(black_box(SAMPLE_FACEFX), black_box(&default_options))
                .expect("样本解析失败");

            black_box(parsed_data);
        });
    });

    group.finish();
}

fn benchmark_convert_animation(c: &mut Criterion) {
    let parsed_data =
        parse_facefx(SAMPLE_FACEFX, &FacefxParsingOptions::default()).expect("样本解析失败");
    let generation_options = BmlGenerationOptions::default();

    c.bench_function("map_and_generate_bml", |b| {
        b.iter(|| {
            for animation in &parsed_data.animations {
                let mut animation = animation.clone();
                assign_visemes(&mut animation, VisemeMapping::Sbm2).expect("口型映射失败");
                let bml = generate_bml(black_box(&animation), &generation_options)
                    .expect("BML 生成失败");
                black_box(bml);
            }
        });
    });
}

criterion_group!(benches, benchmark_parse_facefx, benchmark_convert_animation);

criterion_main!(benches);
