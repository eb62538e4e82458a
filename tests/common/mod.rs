#![allow(dead_code)]

use std::sync::Once;

use joinkit::{record, MatchPair, Record, Value};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

/// Route join spans to the test writer; filter with RUST_LOG
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .from_env_lossy();
        let subscriber = FmtSubscriber::builder()
            .with_test_writer()
            .with_env_filter(env_filter)
            .finish();
        // another test binary harness may have installed one already
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub fn posts() -> Vec<Record> {
    vec![
        record! { "id" => 1, "title" => "first" },
        record! { "id" => 2, "title" => "second" },
        record! { "id" => 3, "title" => "third" },
    ]
}

pub fn comments() -> Vec<Record> {
    vec![
        record! { "id" => 100, "post_id" => 2, "body" => "nice" },
        record! { "id" => 101, "post_id" => 1, "body" => "first!" },
        record! { "id" => 102, "post_id" => 2, "body" => "agreed" },
        record! { "id" => 103, "post_id" => 9, "body" => "orphan" },
    ]
}

/// (left.attr, right.attr) for every pair
pub fn project(pairs: &[MatchPair<'_>], left_attr: &str, right_attr: &str) -> Vec<(Value, Value)> {
    pairs
        .iter()
        .map(|(l, r)| {
            (
                l.get(left_attr).cloned().unwrap_or(Value::Null),
                r.get(right_attr).cloned().unwrap_or(Value::Null),
            )
        })
        .collect()
}
