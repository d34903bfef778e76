use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use fuzzratio::Scorer;

/// random words of 2 to 8 chars separated by single spaces
fn generate_sentence(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut sentence = String::with_capacity(len);
    while sentence.len() < len {
        if !sentence.is_empty() {
            sentence.push(' ');
        }
        let word_len = rng.gen_range(2..=8);
        sentence.extend((&mut rng).sample_iter(&Alphanumeric).take(word_len).map(char::from));
    }
    sentence.truncate(len);
    sentence
}

fn benchmark(c: &mut Criterion) {
    for scorer in Scorer::ALL {
        let mut group = c.benchmark_group(scorer.name());

        for i in (8..128).step_by(8) {
            let s1 = generate_sentence(i);
            let s2 = generate_sentence(i);
            let fragment = generate_sentence(i / 4);

            group.bench_with_input(BenchmarkId::new("same length", i), &(&s1, &s2), |b, val| {
                b.iter(|| {
                    black_box(scorer.score(val.0, val.1));
                })
            });
            group.bench_with_input(
                BenchmarkId::new("fragment", i),
                &(&s1, &fragment),
                |b, val| {
                    b.iter(|| {
                        black_box(scorer.score(val.0, val.1));
                    })
                },
            );
        }

        group.finish();
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
