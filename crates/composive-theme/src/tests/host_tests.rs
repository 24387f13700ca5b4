use composive_core::{DeviceConfiguration, ThemeType};
use composive_foundation::{Dimensions, MaterialColorScheme, ResponsiveSize};
use composive_testing::{platforms, RecordingScheduler, TestWindow};

use super::*;
use crate::theme::AppTheme;

fn android_host(window: &TestWindow) -> (ThemeHost, Arc<RecordingScheduler>) {
    let scheduler = Arc::new(RecordingScheduler::new());
    let theme = ComposiveTheme::default().with_platform(platforms::android());
    let host = ThemeHost::new(theme, window, scheduler.clone());
    (host, scheduler)
}

#[test]
fn initial_snapshot_matches_the_window() {
    let window = TestWindow::phone();
    let (host, scheduler) = android_host(&window);

    let resolved = host.resolved();
    assert_eq!(resolved.device_configuration, DeviceConfiguration::MobilePortrait);
    assert_eq!(resolved.size, ResponsiveSize::Small);
    assert_eq!(host.resolution_count(), 1);
    assert_eq!(scheduler.request_count(), 0);
}

#[test]
fn resize_across_a_breakpoint_re_resolves_and_schedules() {
    let mut window = TestWindow::phone();
    let (host, scheduler) = android_host(&window);

    assert!(window.resize_dp(800.0, 1280.0));

    let resolved = host.resolved();
    assert_eq!(resolved.device_configuration, DeviceConfiguration::TabletPortrait);
    assert_eq!(resolved.dimensions, Dimensions::compact());
    assert_eq!(scheduler.take_requests(), 1);
    assert_eq!(host.version(ThemeConcern::Dimensions), 1);
    assert_eq!(host.version(ThemeConcern::MaterialColors), 0);
}

#[test]
fn resize_within_a_bucket_does_nothing() {
    let mut window = TestWindow::phone();
    let (host, scheduler) = android_host(&window);

    assert!(!window.resize_dp(420.0, 880.0));
    assert_eq!(host.resolution_count(), 1);
    assert_eq!(scheduler.request_count(), 0);
}

#[test]
fn watchers_hear_only_their_concern() {
    let window = TestWindow::phone();
    let (host, _scheduler) = android_host(&window);

    let dimension_hits = Rc::new(Cell::new(0));
    let color_hits = Rc::new(Cell::new(0));
    let dimensions_counter = Rc::clone(&dimension_hits);
    let colors_counter = Rc::clone(&color_hits);
    let _dimensions = host.watch(ThemeConcern::Dimensions, move |_| {
        dimensions_counter.set(dimensions_counter.get() + 1)
    });
    let _colors = host.watch(ThemeConcern::MaterialColors, move |resolved| {
        assert_eq!(resolved.material_colors, MaterialColorScheme::dark());
        colors_counter.set(colors_counter.get() + 1)
    });

    let changed = host.set_dark_theme(true);
    assert_eq!(
        changed,
        vec![ThemeConcern::MaterialColors, ThemeConcern::CupertinoColors]
    );
    assert_eq!(color_hits.get(), 1);
    assert_eq!(dimension_hits.get(), 0);
}

#[test]
fn watcher_reads_the_new_snapshot_from_the_host() {
    let window = TestWindow::phone();
    let (host, _scheduler) = android_host(&window);
    let host = Rc::new(host);

    let seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&seen);
    let reader = Rc::downgrade(&host);
    let _subscription = host.watch(ThemeConcern::DeviceConfiguration, move |resolved| {
        let host = reader.upgrade().expect("host alive");
        assert_eq!(*host.resolved(), *resolved);
        sink.set(Some(resolved.device_configuration));
    });

    window.set_size_classes(
        composive_core::WindowWidthSizeClass::Expanded,
        composive_core::WindowHeightSizeClass::Expanded,
    );
    assert_eq!(seen.get(), Some(DeviceConfiguration::Desktop));
}

#[test]
fn render_reads_a_consistent_snapshot() {
    let mut window = TestWindow::phone();
    let (host, _scheduler) = android_host(&window);
    window.resize_dp(1280.0, 1000.0);

    host.render(|| {
        assert_eq!(AppTheme::device_configuration(), DeviceConfiguration::Desktop);
        assert_eq!(AppTheme::dimensions(), host.resolved().dimensions);
        assert_eq!(AppTheme::orientation(), host.resolved().orientation);
    });
}

#[test]
fn reconfiguration_substitutes_a_new_configuration() {
    let window = TestWindow::tablet();
    let (host, scheduler) = android_host(&window);
    let before = host.theme().configuration().clone();

    let changed = host.set_configuration(ResponsiveConfiguration::cupertino());

    assert!(changed.contains(&ThemeConcern::ThemeType));
    assert!(changed.contains(&ThemeConcern::Configuration));
    assert_eq!(host.resolved().theme_type, ThemeType::Cupertino);
    assert_eq!(*before, ResponsiveConfiguration::default());
    assert_eq!(scheduler.request_count(), 1);
}

#[test]
fn dropped_host_stops_listening() {
    let mut window = TestWindow::phone();
    let (host, scheduler) = android_host(&window);
    assert_eq!(window.window_size_state().watcher_count(), 1);

    drop(host);
    assert_eq!(window.window_size_state().watcher_count(), 0);
    window.resize_dp(1280.0, 1000.0);
    assert_eq!(scheduler.request_count(), 0);
}

#[test]
fn reconfiguring_from_a_watcher_never_hands_out_a_stale_snapshot() {
    let mut window = TestWindow::phone();
    let (host, scheduler) = android_host(&window);
    let host = Rc::new(host);

    let reconfigure = Rc::downgrade(&host);
    let _orientation = host.watch(ThemeConcern::Orientation, move |_| {
        let host = reconfigure.upgrade().expect("host alive");
        assert!(host.set_dark_theme(true).is_empty());
    });

    let stale_payloads = Rc::new(Cell::new(0));
    let dimension_hits = Rc::new(Cell::new(0));
    let stale = Rc::clone(&stale_payloads);
    let hits = Rc::clone(&dimension_hits);
    let reader = Rc::downgrade(&host);
    let _dimensions = host.watch(ThemeConcern::Dimensions, move |resolved| {
        let host = reader.upgrade().expect("host alive");
        if *host.resolved() != *resolved {
            stale.set(stale.get() + 1);
        }
        hits.set(hits.get() + 1);
    });

    let colors_seen = Rc::new(Cell::new(None));
    let colors_sink = Rc::clone(&colors_seen);
    let _colors = host.watch(ThemeConcern::MaterialColors, move |resolved| {
        colors_sink.set(Some(resolved.material_colors));
    });

    assert!(window.resize_dp(891.0, 700.0));

    assert_eq!(stale_payloads.get(), 0);
    assert_eq!(dimension_hits.get(), 1);
    assert_eq!(colors_seen.get(), Some(MaterialColorScheme::dark()));
    let resolved = host.resolved();
    assert_eq!(resolved.device_configuration, DeviceConfiguration::TabletLandscape);
    assert!(resolved.dark_theme);
    assert_eq!(host.resolution_count(), 3);
    assert_eq!(scheduler.take_requests(), 1);
}
