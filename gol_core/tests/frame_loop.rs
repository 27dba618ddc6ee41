use gol_core::frame_loop::{self, DEFAULT_FRAME_PERIOD};
use gol_core::{BackdropConfig, FrameLoop, Palette, PixelCanvas, Renderer, RendererState, Theme, render};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::time::{self, Instant};

const WIDE: f32 = 1440.0;
const NARROW: f32 = 900.0;

fn renderer(theme: Theme, width: f32) -> Renderer {
    let now = Instant::now().into_std();
    Renderer::new(BackdropConfig::default(), theme, width, now, StdRng::seed_from_u64(5)).unwrap()
}

fn canvas() -> PixelCanvas {
    PixelCanvas::new(250, 150)
}

async fn sleep_ms(ms: u64) {
    time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn advances_every_600ms_and_redraws_every_frame() {
    let (_senders, signals) = frame_loop::signals(Theme::Dark, WIDE);
    let handle = FrameLoop::spawn(renderer(Theme::Dark, WIDE), canvas(), signals, DEFAULT_FRAME_PERIOD);

    sleep_ms(1_250).await;
    let (renderer, canvas) = handle.stop().await.unwrap();

    // Frames land every 16ms; the clock is due at the 608ms and 1216ms frames.
    assert_eq!(renderer.generation(), 2);
    assert!(renderer.redraws() >= 70, "only {} redraws", renderer.redraws());

    let mut expected = PixelCanvas::new(250, 150);
    render(renderer.grid(), renderer.palette(), 10, &mut expected);
    assert_eq!(canvas, expected);
}

#[tokio::test(start_paused = true)]
async fn theme_change_redraws_between_frames() {
    let (senders, signals) = frame_loop::signals(Theme::Light, WIDE);
    let handle = FrameLoop::spawn(renderer(Theme::Light, WIDE), canvas(), signals, DEFAULT_FRAME_PERIOD);

    sleep_ms(100).await;
    senders.theme.send(Theme::Dark).unwrap();
    // Next frame is due at 112ms, so anything dark by 101ms came from the theme change.
    sleep_ms(1).await;
    let (renderer, canvas) = handle.stop().await.unwrap();

    assert_eq!(renderer.theme(), Theme::Dark);
    assert_eq!(renderer.palette(), &Palette::DARK);
    assert_eq!(renderer.generation(), 0);
    assert_eq!(canvas.pixel(0, 0), Some(Palette::DARK.border));
    assert_eq!(canvas.pixel(10, 5), Some(Palette::DARK.grid_line));
}

#[tokio::test(start_paused = true)]
async fn narrow_viewport_suspends_until_widened() {
    let (senders, signals) = frame_loop::signals(Theme::Dark, WIDE);
    let handle = FrameLoop::spawn(renderer(Theme::Dark, WIDE), canvas(), signals, DEFAULT_FRAME_PERIOD);

    sleep_ms(700).await;
    senders.viewport_width.send(NARROW).unwrap();
    sleep_ms(5_000).await;

    // Resuming restarts the 600ms cadence from the moment of the resize.
    senders.viewport_width.send(WIDE).unwrap();
    sleep_ms(700).await;
    let (renderer, _) = handle.stop().await.unwrap();

    assert_eq!(renderer.state(), RendererState::Running);
    assert_eq!(renderer.generation(), 2);
}

#[tokio::test(start_paused = true)]
async fn starting_narrow_never_draws() {
    let (_senders, signals) = frame_loop::signals(Theme::Dark, 1024.0);
    let handle = FrameLoop::spawn(renderer(Theme::Dark, 1024.0), canvas(), signals, DEFAULT_FRAME_PERIOD);

    sleep_ms(3_000).await;
    let (renderer, canvas) = handle.stop().await.unwrap();

    assert_eq!(renderer.state(), RendererState::Suspended);
    assert_eq!(renderer.redraws(), 0);
    assert_eq!(renderer.generation(), 0);
    assert_eq!(canvas, PixelCanvas::new(250, 150));
}

#[tokio::test(start_paused = true)]
async fn keeps_running_after_the_signal_senders_are_gone() {
    let (senders, signals) = frame_loop::signals(Theme::Dark, WIDE);
    let handle = FrameLoop::spawn(renderer(Theme::Dark, WIDE), canvas(), signals, DEFAULT_FRAME_PERIOD);
    drop(senders);

    sleep_ms(700).await;
    assert!(!handle.is_finished());
    let (renderer, _) = handle.stop().await.unwrap();
    assert_eq!(renderer.generation(), 1);
}
