use std::sync::Arc;

use composive_core::{NoopRenderScheduler, Platform, WindowSizeClass, WindowSizeSource};
use composive_foundation::Dimensions;
use composive_testing::{platforms, TestWindow};
use composive_theme::{
    provide_resolved_theme, resolve_theme, scale_dimensions, AppTheme, ComposiveTheme,
    ResponsiveConfiguration, ThemeHost,
};
use composive_ui_graphics::FontFamily;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const RESIZE_STEPS: &[(f32, f32)] = &[
    (360.0, 780.0),
    (780.0, 360.0),
    (700.0, 1000.0),
    (1000.0, 700.0),
    (1440.0, 960.0),
];

fn configured() -> Arc<ResponsiveConfiguration> {
    Arc::new(
        ResponsiveConfiguration::platform_adaptive()
            .with_universal_font(FontFamily::named("Inter"))
            .with_dimensions(composive_foundation::default_dimensions()),
    )
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_theme");
    let cases: [(&str, Arc<Platform>); 2] =
        [("android", platforms::android()), ("desktop", platforms::desktop())];
    for (name, platform) in cases {
        let configuration = configured();
        group.bench_with_input(BenchmarkId::new("all_windows", name), &platform, |b, platform| {
            b.iter(|| {
                for window in WindowSizeClass::all() {
                    black_box(resolve_theme(&configuration, window, platform, false, None));
                }
            });
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let base = Dimensions::large();
    c.bench_function("scale_dimensions_desktop", |b| {
        b.iter(|| black_box(scale_dimensions(&base, black_box(1.2))));
    });
}

fn bench_host_resize(c: &mut Criterion) {
    let mut window = TestWindow::phone();
    let theme = ComposiveTheme::default().with_platform(platforms::android());
    let host = ThemeHost::new(theme, &window, Arc::new(NoopRenderScheduler));

    c.bench_function("host_resize_cycle", |b| {
        b.iter(|| {
            for &(width, height) in RESIZE_STEPS {
                window.resize_dp(width, height);
                black_box(host.resolved());
            }
        });
    });
}

fn bench_provide(c: &mut Criterion) {
    let configuration = configured();
    let resolved = resolve_theme(
        &configuration,
        TestWindow::tablet().window_size_class(),
        &platforms::ios(),
        true,
        None,
    );

    c.bench_function("provide_and_read", |b| {
        b.iter(|| {
            provide_resolved_theme(&resolved, || {
                black_box(AppTheme::dimensions());
                black_box(AppTheme::cupertino_typography());
            })
        });
    });
}

criterion_group!(resolve, bench_resolve, bench_scale, bench_host_resize, bench_provide);
criterion_main!(resolve);
