//! Benchmarks for outline import

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mindcase_core::{
    CaseImporter, CaseStore, JsonOutlineExtractor, NoStore, OutlineExtractor, OutlineNode,
    StoredCase, split_case_title,
};
use std::collections::HashSet;

// Modules of `cases_per_module` cases, each with a few steps
fn create_outline(modules: usize, cases_per_module: usize) -> OutlineNode {
    let modules = (0..modules)
        .map(|m| {
            let cases = (0..cases_per_module)
                .map(|c| {
                    let title = match c % 3 {
                        0 => format!("P1-功能测试:tc:Case {m}-{c}"),
                        1 => format!("P2-接口测试:tc:Case {m}-{c}"),
                        _ => format!("tc:Case {m}-{c}"),
                    };
                    OutlineNode::new(title).with_children(vec![
                        OutlineNode::new("pc:Logged in"),
                        OutlineNode::new("Open the page")
                            .with_children(vec![OutlineNode::new("Page shows")]),
                        OutlineNode::new("Submit the form"),
                        OutlineNode::new("rc:Smoke"),
                    ])
                })
                .collect();
            let inner = OutlineNode::new(format!("Feature {m}")).with_children(cases);
            OutlineNode::new(format!("Module {}", m % 10)).with_children(vec![inner])
        })
        .collect();
    OutlineNode::new("Product").with_children(modules)
}

fn to_json(node: &OutlineNode) -> String {
    serde_json::json!({ "rootTopic": node }).to_string()
}

fn bench_import_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("import_scaling");

    for &modules in &[1, 10, 50, 200] {
        let outline = create_outline(modules, 20);
        group.throughput(Throughput::Elements((modules * 20) as u64));

        group.bench_with_input(BenchmarkId::new("cases", modules * 20), &outline, |b, outline| {
            b.iter(|| {
                let mut names = HashSet::new();
                let mut importer = CaseImporter::new("bench", "bench", &mut names, &NoStore);
                black_box(importer.import(black_box(outline)));
                importer.records().len()
            });
        });
    }

    group.finish();
}

fn bench_name_collisions(c: &mut Criterion) {
    let outline = create_outline(50, 20);
    let mut store = CaseStore::new("bench");
    for m in 0..50 {
        for c in (0..20).step_by(2) {
            store.insert(StoredCase::new(
                format!("Case {m}-{c}"),
                &format!("/Module {}/Feature {m}", m % 10),
            ));
        }
    }
    let known: HashSet<String> = store.names().map(str::to_string).collect();

    c.bench_function("import_against_store", |b| {
        b.iter(|| {
            let mut names = known.clone();
            let mut importer = CaseImporter::new("bench", "bench", &mut names, &store);
            black_box(importer.import(&outline))
        });
    });
}

fn bench_extract_and_parse(c: &mut Criterion) {
    let json = to_json(&create_outline(50, 20));

    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("json_outline", |b| {
        b.iter(|| JsonOutlineExtractor.extract(black_box(json.as_bytes())).unwrap());
    });
    group.finish();

    let titles = [
        "P1-功能测试:tc:Valid login",
        "tc:Plain case",
        "p0-性能测试-extra：tc：Load test",
        "tc no separator",
    ];
    c.bench_function("split_case_title", |b| {
        b.iter(|| {
            for title in &titles {
                black_box(split_case_title(black_box(title)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_import_scaling,
    bench_name_collisions,
    bench_extract_and_parse
);
criterion_main!(benches);
