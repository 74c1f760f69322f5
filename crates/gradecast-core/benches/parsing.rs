use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecast_core::model::TrainingRecord;
use gradecast_core::parser::parse_session_str;

fn session_toml(n: usize) -> String {
    let mut toml = String::from("[session]\ntarget = 75.0\n");
    for i in 0..n {
        toml.push_str(&format!(
            "\n[[assessments]]\nname = \"Assessment {i}\"\nweight = {}\n",
            100.0 / n as f64
        ));
        if i % 2 == 0 {
            toml.push_str(&format!("score = {}\n", 60 + i));
        }
    }
    toml
}

fn store_json(records: usize) -> String {
    let data: Vec<TrainingRecord> = (0..records)
        .map(|r| TrainingRecord::identity(vec![50.0 + (r % 50) as f64; 5]))
        .collect();
    serde_json::to_string(&data).unwrap()
}

fn bench_session_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_parsing");
    let path = PathBuf::from("bench.toml");

    for n in [3, 20] {
        let toml = session_toml(n);
        group.bench_function(format!("assessments={n}"), |b| {
            b.iter(|| parse_session_str(black_box(&toml), &path))
        });
    }

    group.finish();
}

fn bench_store_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_decoding");

    for records in [100, 10_000] {
        let json = store_json(records);
        group.bench_function(format!("records={records}"), |b| {
            b.iter(|| serde_json::from_str::<Vec<TrainingRecord>>(black_box(&json)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_session_parsing, bench_store_decoding);
criterion_main!(benches);
