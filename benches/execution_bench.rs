use criterion::{Criterion, criterion_group, criterion_main};
use fixture_runner::infra::command::{run_with_input, split_command};
use fixture_runner::patterns::PatternSet;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

fn bench_match_file(c: &mut Criterion) {
    let patterns = PatternSet::default();
    let names: Vec<String> = (0..256)
        .map(|i| match i % 4 {
            0 => format!("case{i}.in"),
            1 => format!("case{i}.out"),
            2 => format!("input{i}"),
            _ => format!("notes{i}.md"),
        })
        .collect();

    c.bench_function("match_file", |b| {
        b.iter(|| {
            for name in &names {
                black_box(patterns.match_file(black_box(name)));
            }
        });
    });
}

fn bench_run_with_input(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let argv = split_command("cat").unwrap();
    let cwd = PathBuf::from(".");
    let input = vec![b'x'; 64 * 1024];

    c.bench_function("run_with_input", |b| {
        b.to_async(&rt).iter(|| async {
            let _ = run_with_input(&argv, &cwd, &input, Duration::from_secs(10)).await;
        });
    });
}

criterion_group!(benches, bench_match_file, bench_run_with_input);
criterion_main!(benches);
