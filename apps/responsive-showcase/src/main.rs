use std::sync::Arc;

use composive_core::{Platform, ThemeType, WindowMetrics, WindowSizeState};
use composive_runtime_std::StdScheduler;
use composive_theme::{AppTheme, ComposiveTheme, ResponsiveConfiguration, ThemeConcern, ThemeHost};
use composive_ui_graphics::FontFamily;

/// Physical sizes with their density, as a phone or tablet would report them.
const SWEEP: &[(&str, f32, f32, f32)] = &[
    ("phone", 1080.0, 2400.0, 2.625),
    ("phone landscape", 2400.0, 1080.0, 2.625),
    ("foldable", 1768.0, 2208.0, 2.625),
    ("tablet", 1600.0, 2560.0, 2.0),
    ("tablet landscape", 2560.0, 1600.0, 2.0),
    ("desktop", 2880.0, 1800.0, 2.0),
];

fn configuration() -> ResponsiveConfiguration {
    ResponsiveConfiguration::platform_adaptive()
        .with_material_reading_display_fonts(
            FontFamily::named("Inter"),
            FontFamily::named("Fraunces"),
        )
}

fn describe(label: &str) {
    let device = AppTheme::device_configuration();
    let dimensions = AppTheme::dimensions();
    let body = match AppTheme::theme_type() {
        ThemeType::Material3 => AppTheme::material_typography().body_large.font_size,
        ThemeType::Cupertino => AppTheme::cupertino_typography().body.font_size,
    };
    let device_name = format!("{device:?}");
    let orientation = format!("{:?}", AppTheme::orientation());
    println!(
        "{label:>18} | {device_name:<16} | {orientation:<9} | {} cols | {:?} | body {body} | padding {}",
        device.recommended_columns(),
        AppTheme::theme_type(),
        dimensions.screen_padding_horizontal,
    );
}

fn run_sweep(platform: Arc<Platform>) {
    println!("=== {} ===", platform.name());
    let first = SWEEP[0];
    let state = WindowSizeState::new(WindowMetrics::new(first.1, first.2, first.3).size_class());
    let scheduler = Arc::new(StdScheduler::new());
    let theme = ComposiveTheme::new(configuration()).with_platform(platform);
    let host = ThemeHost::new(theme, &state, scheduler.clone());
    let _columns = host.watch(ThemeConcern::DeviceConfiguration, |resolved| {
        log::info!(
            "layout switched to {} columns",
            resolved.device_configuration.recommended_columns()
        );
    });

    for &(label, width, height, density) in SWEEP {
        state.set(WindowMetrics::new(width, height, density).size_class());
        if scheduler.take_render_request() || label == first.0 {
            host.render(|| describe(label));
        } else {
            println!("{label:>18} | unchanged");
        }
    }
    println!();
}

#[cfg(not(feature = "desktop"))]
fn main() {
    env_logger::init();

    println!("=== Composive responsive sweep ===");
    for platform in [
        Platform::android("14"),
        Platform::ios("17"),
        Platform::desktop("Linux", "6.8"),
    ] {
        run_sweep(Arc::new(platform));
    }
}

#[cfg(feature = "desktop")]
fn main() {
    use composive_platform_desktop_winit::DesktopWinitWindowSize;
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::window::WindowBuilder;

    env_logger::init();

    if std::env::args().any(|arg| arg == "--sweep") {
        run_sweep(Platform::current());
        return;
    }

    println!("=== Composive responsive showcase ===");
    println!("Resize the window to cross breakpoints.");
    println!("Press 'T' to toggle dark theme, 'S' to print a sweep.");
    println!();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Composive Showcase")
        .with_inner_size(LogicalSize::new(800.0, 600.0))
        .build(&event_loop)
        .expect("window");

    let mut window_size = DesktopWinitWindowSize::from_window(&window);
    let scheduler = Arc::new(StdScheduler::new());
    let theme = ComposiveTheme::new(configuration());
    let host = ThemeHost::new(theme, &window_size, scheduler.clone());
    let mut dark_theme = false;
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                match &event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput { input, .. }
                        if input.state == ElementState::Pressed =>
                    {
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::T) => {
                                dark_theme = !dark_theme;
                                host.set_dark_theme(dark_theme);
                            }
                            Some(VirtualKeyCode::S) => run_sweep(host.theme().platform().clone()),
                            _ => {}
                        }
                    }
                    _ => {}
                }
                window_size.handle_window_event(&event);
                if scheduler.take_render_request() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let size = window_size.logical_size();
                let label = format!("{}x{}", size.width.0 as u32, size.height.0 as u32);
                host.render(|| describe(&label));
            }
            _ => {}
        }
    });
}
