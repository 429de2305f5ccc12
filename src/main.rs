// src/main.rs
use log::{error, info, warn};
use nannou::event::TouchPhase;
use nannou::prelude::*;

use plusequal::{
    animation::FrameClock,
    config::{Config, LoggingConfig},
    render::Renderer,
};

struct Model {
    renderer: Renderer,
    clock: FrameClock,
    draw: nannou::Draw,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to defaults so the glyph still runs
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config.logging);
    if let Some(err) = load_error {
        warn!("{}, using default config", err);
    }

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("Failed to build window");

    if config.window.fullscreen {
        if let Some(window) = app.window(window_id) {
            window.set_fullscreen(true);
        }
    }

    info!(
        "plusequal started, {}x{} window",
        config.window.width, config.window.height
    );

    Model {
        renderer: Renderer::default(),
        clock: FrameClock::new(),
        draw: nannou::Draw::new(),
    }
}

fn init_logging(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    env_logger::Builder::from_env(env).init();
}

// ******************************* Input *******************************

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    tap(model);
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        tap(model);
    }
}

fn tap(model: &mut Model) {
    if let Err(err) = model.renderer.handle_tap(&mut model.clock) {
        error!("failed to start animation: {}", err);
    }
}

// ******************************* Frame *******************************

fn update(app: &App, model: &mut Model, _update: Update) {
    model.draw.reset();
    let viewport = app.window_rect();
    if let Err(err) = model
        .renderer
        .render(&mut model.draw, &viewport, &mut model.clock)
    {
        error!("animation tick dropped: {}", err);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(err) = model.draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", err);
    }
}
