use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vtt_thumbnails::parse_track;

fn build_track(cues: usize) -> String {
    let mut raw = String::from("WEBVTT\n\n");
    for i in 0..cues {
        let start = i as f64 * 5.0;
        raw.push_str(&format!(
            "{} --> {}\nsprite-{}.jpg#xywh={},0,160,90\n\n",
            format_time(start),
            format_time(start + 5.0),
            i / 100,
            (i % 100) * 160
        ));
    }
    raw
}

fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{:02}:{:02}:{:02}.000", total / 3600, total / 60 % 60, total % 60)
}

fn bench_lookup(c: &mut Criterion) {
    let track = parse_track(&build_track(2_000), "https://cdn.example.com/thumbs/");

    c.bench_function("resolve_sorted", |b| {
        b.iter(|| track.resolve(black_box(7_321.5)))
    });
    c.bench_function("resolve_linear", |b| {
        b.iter(|| track.resolve_linear(black_box(7_321.5)))
    });
    c.bench_function("parse_2000_cues", |b| {
        let raw = build_track(2_000);
        b.iter(|| parse_track(black_box(&raw), "https://cdn.example.com/thumbs/"))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
