//! Benchmarks for sidebar resolution.

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_config::SiteConfig;
use sitenav_site::Site;

/// Create a configuration with `count` package sidebars next to the default.
fn create_site(count: usize) -> Site {
    let mut toml = String::from(
        "title = \"Bench\"\n\n[[sidebar.\"/\"]]\ntitle = \"Root\"\nitems = [{ label = \"Home\", target = \"/\" }]\n",
    );
    for i in 0..count {
        write!(
            toml,
            "\n[[sidebar.\"/packages/package-{i}/\"]]\ntitle = \"Package {i}\"\nitems = [{{ label = \"API\", target = \"/packages/package-{i}/api/\" }}]\n"
        )
        .unwrap();
    }
    Site::new(SiteConfig::from_toml_str(&toml).unwrap())
}

fn bench_sidebar_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("sidebar_lookup");

    for count in [10, 100, 1000] {
        let site = create_site(count);
        let hit = format!("/packages/package-{}/api/deep/page", count / 2);

        group.bench_with_input(BenchmarkId::new("hit", count), &hit, |b, path| {
            b.iter(|| site.sidebar(path));
        });

        group.bench_with_input(
            BenchmarkId::new("fallback", count),
            &"/getting-started",
            |b, path| {
                b.iter(|| site.sidebar(path));
            },
        );
    }

    group.finish();
}

fn bench_page_navigation(c: &mut Criterion) {
    let site = create_site(100);

    c.bench_function("page_navigation", |b| {
        b.iter(|| site.navigation("/packages/package-50/api/"));
    });
}

criterion_group!(benches, bench_sidebar_lookup, bench_page_navigation);
criterion_main!(benches);
