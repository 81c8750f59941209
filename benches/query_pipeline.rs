//! Benchmarks for query normalization and search-iterator construction.
#![forbid(unsafe_code)]
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use faro::index::{IndexReader, TableEntry};
use faro::iterator::DocIterator;
use faro::query::{optimize, QueryNode};
use faro::score::Bm25Scorer;
use faro::types::{ColumnId, DocId, TERMINATED};

const BODY: ColumnId = ColumnId(1);
const DOC_COUNT: u32 = 65_536;
const TERM_COUNT: usize = 64;

fn term(k: usize) -> QueryNode {
    QueryNode::term("body", format!("t{k}"))
}

/// Synthetic index with a density gradient: term `tK` matches roughly one
/// document in `K + 2`.
fn build_index() -> IndexReader {
    let mut rng = ChaCha8Rng::seed_from_u64(0xFA50_5EED);
    let names: Vec<String> = (0..TERM_COUNT).map(|k| format!("t{k}")).collect();
    let mut builder = IndexReader::builder();
    for doc in 0..DOC_COUNT {
        let mut terms: Vec<&str> = Vec::new();
        for (k, name) in names.iter().enumerate() {
            if rng.gen_ratio(1, k as u32 + 2) {
                terms.push(name.as_str());
            }
        }
        builder = builder.with_document(BODY, DocId(doc), terms);
    }
    builder.finish()
}

fn deep_raw_tree() -> QueryNode {
    QueryNode::and(vec![
        QueryNode::and(vec![
            term(0),
            term(2),
            QueryNode::or(vec![term(4), term(6), term(8)]),
        ]),
        QueryNode::not(vec![QueryNode::or(vec![term(1), term(3)])]),
        QueryNode::or(vec![term(10), QueryNode::and(vec![term(12), term(14)])]),
        QueryNode::not(vec![term(5)]),
    ])
}

/// Compiles and fully drives a tree, returning the number of matches.
fn drained(tree: &QueryNode, table: &TableEntry, index: &IndexReader) -> u64 {
    let mut scorer = Bm25Scorer::new(index.doc_count());
    let mut iter = tree
        .create_search(table, index, &mut scorer)
        .expect("compiles")
        .expect("matches");
    let mut count = 0;
    let mut doc = iter.doc();
    while doc != TERMINATED {
        count += 1;
        doc = iter.advance();
    }
    count
}

fn query_pipeline(c: &mut Criterion) {
    let index = build_index();
    let table = TableEntry::new().with_column("body", BODY);

    let mut group = c.benchmark_group("query/pipeline");
    group.sample_size(40);

    let raw = deep_raw_tree();
    group.bench_function("optimize_deep_tree", |b| {
        b.iter_batched(
            || raw.clone(),
            |tree| black_box(optimize(tree).expect("legal tree")),
            BatchSize::SmallInput,
        );
    });

    let conjunction = optimize(QueryNode::and(vec![term(2), term(5), term(9)]))
        .expect("legal tree");
    group.bench_function("compile_conjunction", |b| {
        b.iter(|| {
            let mut scorer = Bm25Scorer::new(index.doc_count());
            black_box(
                conjunction
                    .create_search(&table, &index, &mut scorer)
                    .expect("compiles"),
            )
        });
    });

    group.throughput(Throughput::Elements(drained(&conjunction, &table, &index)));
    group.bench_function("drain_intersection", |b| {
        b.iter(|| black_box(drained(&conjunction, &table, &index)));
    });

    let exclusion = optimize(QueryNode::and(vec![
        term(2),
        QueryNode::not(vec![term(4)]),
        QueryNode::not(vec![term(7)]),
    ]))
    .expect("legal tree");
    group.throughput(Throughput::Elements(drained(&exclusion, &table, &index)));
    group.bench_function("drain_exclusion", |b| {
        b.iter(|| black_box(drained(&exclusion, &table, &index)));
    });

    let union = optimize(QueryNode::or(vec![
        term(40),
        term(44),
        term(48),
        term(52),
    ]))
    .expect("legal tree");
    group.throughput(Throughput::Elements(drained(&union, &table, &index)));
    group.bench_function("drain_union", |b| {
        b.iter(|| black_box(drained(&union, &table, &index)));
    });

    group.finish();
}

criterion_group!(benches, query_pipeline);
criterion_main!(benches);
