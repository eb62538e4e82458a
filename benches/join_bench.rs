use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use joinkit::{record, Attribute, Equals, HashIndex, HashJoin, IndexJoin, NestedLoopJoin, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `posts` with unique ids and `comments` pointing at random posts
fn make_relations(posts: usize, comments: usize) -> (Vec<Record>, Vec<Record>) {
    let mut rng = StdRng::seed_from_u64(42);

    let posts: Vec<Record> = (0..posts as i64)
        .map(|id| record! { "id" => id, "title" => format!("post-{}", id) })
        .collect();
    let comments = (0..comments as i64)
        .map(|id| {
            let post_id = rng.gen_range(0..posts.len() as i64);
            record! { "id" => id, "post_id" => post_id }
        })
        .collect();

    (posts, comments)
}

fn bench_joins(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for &size in &[100usize, 1_000] {
        let (posts, comments) = make_relations(size, size * 4);
        let index = HashIndex::build(&comments, "post_id").expect("index build");

        group.bench_with_input(BenchmarkId::new("hash", size), &size, |b, _| {
            b.iter(|| {
                HashJoin::new()
                    .join(black_box(&posts), black_box(&comments), "id", "post_id")
                    .expect("hash join")
            })
        });

        group.bench_with_input(BenchmarkId::new("index", size), &size, |b, _| {
            b.iter(|| {
                IndexJoin::new()
                    .join(black_box(&posts), &index, &Attribute::new("id"))
                    .expect("index join")
            })
        });

        // quadratic; keep it to the small size
        if size <= 100 {
            group.bench_with_input(BenchmarkId::new("nested_loop", size), &size, |b, _| {
                b.iter(|| {
                    NestedLoopJoin::new()
                        .join(black_box(&posts), black_box(&comments), &Equals::new("id", "post_id"))
                        .expect("nested loop join")
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_joins);
criterion_main!(benches);
