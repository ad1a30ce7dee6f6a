use catalog_browser::MediaItem;
use catalog_browser::browser::domain::catalog_store::CatalogStore;
use catalog_browser::browser::domain::filter::LocalFilter;
use catalog_browser::browser::domain::models::{RawMediaRecord, normalize_records};
use codspeed_criterion_compat::{BenchmarkId, black_box};
use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};

fn create_catalog(size: usize) -> Vec<MediaItem> {
    (0..size)
        .map(|i| {
            MediaItem::new(
                &format!("tt{i:07}"),
                &format!("Movie number {i}"),
                if i % 3 == 0 { "English Title" } else { "" },
                &format!("https://img.example/{i}.jpg"),
            )
        })
        .collect()
}

fn create_listing_json(size: usize) -> String {
    let records: Vec<serde_json::Value> = (0..size)
        .map(|i| {
            if i % 2 == 0 {
                serde_json::json!({ "_id": format!("id{i}"), "title": format!("Title {i}"), "image": "x.jpg" })
            } else {
                serde_json::json!({ "id": format!("id{i}"), "Title": format!("Title {i}"), "TitleEnglish": "Eng", "Image": "x.jpg" })
            }
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

fn benchmark_local_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_filter");

    for size in [1_000, 10_000, 50_000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::new("substring", size), size, |b, _| {
            b.iter(|| black_box(LocalFilter::filter(&catalog, black_box("number 42"))));
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), size, |b, _| {
            b.iter(|| black_box(LocalFilter::filter(&catalog, black_box("zz"))));
        });
    }

    group.finish();
}

fn benchmark_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging");
    let catalog = create_catalog(10_000);

    group.bench_function("walk_all_pages", |b| {
        b.iter(|| {
            let mut store = CatalogStore::new(50);
            store.load(catalog.clone());
            let mut seen = store.page_items().len();
            while store.go_next() {
                seen += store.page_items().len();
            }
            black_box(seen)
        });
    });

    group.finish();
}

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    for size in [1_000, 10_000].iter() {
        let json = create_listing_json(*size);

        group.bench_with_input(BenchmarkId::new("decode_and_normalize", size), size, |b, _| {
            b.iter(|| {
                let records: Vec<RawMediaRecord> = serde_json::from_str(black_box(&json)).unwrap();
                black_box(normalize_records(records))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_local_filter,
    benchmark_paging,
    benchmark_normalization
);
criterion_main!(benches);
