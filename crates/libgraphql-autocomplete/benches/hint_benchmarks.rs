mod fixtures;

use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_autocomplete::candidates::CandidateEntry;
use libgraphql_autocomplete::completion::CursorToken;
use libgraphql_autocomplete::completion::HintRequest;
use libgraphql_autocomplete::completion::Hinter;
use libgraphql_autocomplete::completion::TokenClass;
use libgraphql_autocomplete::fuzzy;
use libgraphql_autocomplete::grammar::ParserStateChain;
use libgraphql_autocomplete::schema::Schema;
use libgraphql_autocomplete::type_info;

fn build_schema(sdl: &str) -> Schema {
    Schema::builder()
        .load_str(None, sdl)
        .unwrap()
        .build()
        .unwrap()
}

// ─── Group 1: Fuzzy Ranking ──────────────────────────────

fn ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    group.bench_function("lexical_distance (16 chars)", |b| {
        b.iter(|| {
            black_box(fuzzy::lexical_distance(
                black_box("primaryfunction"),
                black_box("primaryFuncton_x"),
            ))
        })
    });

    for count in [10, 100, 1000] {
        let candidates = (0..count)
            .map(|i| CandidateEntry::new(format!("fieldName{i}")))
            .collect::<Vec<_>>();
        group.bench_function(format!("rank {count} candidates"), |b| {
            b.iter(|| {
                black_box(fuzzy::rank(candidates.clone(), black_box("fildnam")))
            })
        });
    }

    group.finish();
}

// ─── Group 2: Type Context Resolution ────────────────────

fn resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    let schema = build_schema(fixtures::STARWARS_SCHEMA);

    let shallow: ParserStateChain =
        "Document > Query > SelectionSet > Field:hero".parse().unwrap();
    group.bench_function("shallow chain", |b| {
        b.iter(|| black_box(type_info::resolve(&schema, black_box(&shallow))))
    });

    let deep: ParserStateChain = concat!(
        "Document > Query > SelectionSet > Field:hero > SelectionSet ",
        "> Field:friends > SelectionSet > Field:friends > SelectionSet ",
        "> InlineFragment@Human > SelectionSet > Field:homePlanet",
    ).parse().unwrap();
    group.bench_function("deep chain", |b| {
        b.iter(|| black_box(type_info::resolve(&schema, black_box(&deep))))
    });

    group.finish();
}

// ─── Group 3: Full Hint Pipeline ─────────────────────────

fn full_hint(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_hint");
    let hinter = Hinter::default();

    let starwars = build_schema(fixtures::STARWARS_SCHEMA);
    let hero_request = HintRequest::new(
        "Document > ShortQuery > SelectionSet > Field:hero > SelectionSet > Field:na"
            .parse()
            .unwrap(),
        CursorToken::new(Some(TokenClass::Property), "na", 9, 11),
    );
    group.bench_function("starwars { hero { na", |b| {
        b.iter(|| black_box(hinter.hint(Some(&starwars), black_box(&hero_request))))
    });

    let wide = build_schema(&fixtures::wide_schema(500));
    let wide_request = HintRequest::new(
        "Document > Query > SelectionSet > Field:fildNam".parse().unwrap(),
        CursorToken::new(Some(TokenClass::Property), "fildNam", 2, 9),
    );
    group.bench_function("500 fields", |b| {
        b.iter(|| black_box(hinter.hint(Some(&wide), black_box(&wide_request))))
    });

    group.finish();
}

criterion_group!(benches, ranking, resolution, full_hint);
criterion_main!(benches);
