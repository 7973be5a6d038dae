use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

use qordoba::pattern::{resolve_destination_path, PushPattern};
use qordoba::sources::{discover_files, ContentTypeTable, TranslationFile};
use qordoba::{Language, LanguageRegistry};

fn sample_registry() -> LanguageRegistry {
    LanguageRegistry::new([
        Language::new(94, "en-us", "English - United States"),
        Language::new(110, "fr-fr", "French - France"),
        Language::new(46, "zh-cn", "Chinese - China"),
        Language::new(60, "de-de", "German - Germany"),
    ])
}

fn bench_push_pattern(c: &mut Criterion) {
    c.bench_function("compile_push_pattern", |b| {
        b.iter(|| {
            let pattern =
                PushPattern::compile(black_box("config/locales/<language_code>/server.<language_lang_code>.yml"))
                    .unwrap();
            black_box(pattern)
        })
    });

    let pattern = PushPattern::compile("i18n/<language_code>/translations.json").unwrap();
    let registry = sample_registry();
    c.bench_function("match_file", |b| {
        b.iter(|| {
            let file = pattern.match_file(
                Path::new("/project"),
                black_box(Path::new("i18n/fr-fr/translations.json")),
                &registry,
            );
            black_box(file)
        })
    });
}

fn bench_destination_path(c: &mut Criterion) {
    let language = Language::new(110, "fr-fr", "French - France");
    c.bench_function("resolve_destination_path", |b| {
        b.iter(|| {
            let file = resolve_destination_path(
                Path::new("/project"),
                &language,
                black_box(Some("i18n/<language_name_cap>/<language_code><extension>")),
                Some("strings.json"),
                None,
            )
            .unwrap();
            black_box(file)
        })
    });
}

fn bench_content_type(c: &mut Criterion) {
    let table = ContentTypeTable::default();
    let file = TranslationFile::new(
        "i18n/fr-fr/translations.json",
        Language::new(110, "fr-fr", "French - France"),
        "/project",
    );
    c.bench_function("resolve_content_type", |b| {
        b.iter(|| black_box(table.resolve(black_box(&file)).unwrap().len()))
    });
}

fn bench_discovery(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    for code in ["en-us", "fr-fr", "zh-cn", "de-de"] {
        for i in 0..25 {
            let path = dir.path().join(format!("i18n/{code}/file{i}.json"));
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "{}").unwrap();
        }
        let path = dir.path().join(format!("i18n/{code}/translations.json"));
        std::fs::write(path, "{}").unwrap();
    }

    let pattern = PushPattern::compile("i18n/<language_code>/translations.json").unwrap();
    let registry = sample_registry();
    c.bench_function("discover_files", |b| {
        b.iter(|| {
            let count = discover_files(black_box(dir.path()), &pattern, &registry)
                .unwrap()
                .count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_push_pattern,
    bench_destination_path,
    bench_content_type,
    bench_discovery
);
criterion_main!(benches);
