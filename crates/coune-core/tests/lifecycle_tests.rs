// Host-side tests for the reveal timeline, renderer lifecycle and the page
// controller, driven through the manual timer/frame hosts.

use coune_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn drive_timers(o: &mut Orchestrator<u32>, timers: &mut ManualTimers, to_ms: u64) {
    for h in timers.advance_to(to_ms) {
        o.on_timer(h);
    }
}

#[test]
fn cancel_before_delay_keeps_everything_hidden() {
    let mut timers = ManualTimers::new();
    let mut o = Orchestrator::new();
    o.start(&mut timers);
    drive_timers(&mut o, &mut timers, 500);
    o.cancel(&mut timers);
    drive_timers(&mut o, &mut timers, 2000);
    assert_eq!(o.reveal(), RevealState::HIDDEN);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn cancel_at_any_point_before_1300ms_suppresses_reveal() {
    for cancel_at in [0u64, 1, 650, 1299] {
        let mut timers = ManualTimers::new();
        let mut o = Orchestrator::new();
        o.start(&mut timers);
        drive_timers(&mut o, &mut timers, cancel_at);
        o.cancel(&mut timers);
        drive_timers(&mut o, &mut timers, 10_000);
        assert!(!o.reveal().navigation_visible, "cancel at {cancel_at}");
        assert!(!o.reveal().background_visible, "cancel at {cancel_at}");
    }
}

#[test]
fn both_flags_flip_together_at_1300ms() {
    let mut timers = ManualTimers::new();
    let mut o = Orchestrator::new();
    o.start(&mut timers);
    drive_timers(&mut o, &mut timers, 1299);
    assert_eq!(o.reveal(), RevealState::HIDDEN);

    let due = timers.advance_to(1300);
    assert_eq!(due.len(), 1);
    let revealed = o.on_timer(due[0]).expect("reveal fires");
    assert!(revealed.navigation_visible && revealed.background_visible);
    assert_eq!(o.reveal(), RevealState::REVEALED);
}

#[test]
fn cancel_after_reveal_is_harmless() {
    let mut timers = ManualTimers::new();
    let mut o = Orchestrator::new();
    o.start(&mut timers);
    drive_timers(&mut o, &mut timers, 1300);
    o.cancel(&mut timers);
    assert_eq!(o.reveal(), RevealState::REVEALED);
}

#[test]
fn frames_stop_once_hidden() {
    let mut frames = ManualFrames::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut r = BackgroundRenderer::new(FieldConfig::default());
    r.resize(Viewport::new(64.0, 64.0, 1.0).ok(), &mut frames, &mut rng);
    r.set_visible(true, &mut frames, &mut rng);

    let mut out = Vec::new();
    for _ in 0..10 {
        frames.take_pending();
        assert!(r.tick(&mut frames, &mut out));
    }
    let requested = frames.requested();
    let rendered = r.frames_rendered();

    r.set_visible(false, &mut frames, &mut rng);
    assert_eq!(frames.pending_count(), 0);
    for _ in 0..10 {
        assert!(!r.tick(&mut frames, &mut out));
    }
    assert_eq!(frames.requested(), requested);
    assert_eq!(r.frames_rendered(), rendered);
}

#[test]
fn clock_restarts_from_zero_on_start() {
    let mut frames = ManualFrames::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut r = BackgroundRenderer::new(FieldConfig::default());
    r.resize(Viewport::new(8.0, 8.0, 1.0).ok(), &mut frames, &mut rng);
    r.set_visible(true, &mut frames, &mut rng);
    assert_eq!(r.time(), 0.0);

    let mut out = Vec::new();
    frames.take_pending();
    r.tick(&mut frames, &mut out);
    // first frame is drawn at t = 0
    match &out[1] {
        DrawCommand::Circle { color, .. } => {
            let d = &r.field().dots()[0];
            assert!((color.a - d.opacity_at(0.0)).abs() < 1e-7);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn refused_frame_request_leaves_nothing_pending() {
    let mut frames = ManualFrames::refusing();
    let mut rng = StdRng::seed_from_u64(1);
    let mut r = BackgroundRenderer::new(FieldConfig::default());
    r.resize(Viewport::new(8.0, 8.0, 1.0).ok(), &mut frames, &mut rng);
    r.set_visible(true, &mut frames, &mut rng);
    assert_eq!(r.state(), RendererState::Running);
    assert!(!r.has_pending_frame());
    r.teardown(&mut frames);
    assert_eq!(frames.cancelled(), 0);
}

// ---------------- Page controller ----------------

type Page = PageController<u32, u32, StdRng>;

struct Hosts {
    timers: ManualTimers,
    ui: ManualFrames,
    bg: ManualFrames,
}

fn mounted_page() -> (Page, Hosts) {
    let mut hosts = Hosts {
        timers: ManualTimers::new(),
        ui: ManualFrames::new(),
        bg: ManualFrames::new(),
    };
    let mut page = Page::new(FieldConfig::default(), StdRng::seed_from_u64(42));
    page.mount(&mut hosts.timers, &mut hosts.ui);
    page.on_resize(Viewport::new(800.0, 600.0, 2.0).ok(), &mut hosts.bg);
    (page, hosts)
}

/// Advance 60 fps UI frames and timers together up to `to_ms`.
fn run_until(page: &mut Page, hosts: &mut Hosts, to_ms: u64) -> Option<UiFrame> {
    let mut last = None;
    while hosts.timers.now_ms() + 16 <= to_ms {
        for h in hosts.timers.advance_by(16) {
            page.on_timer(h, &mut hosts.bg);
        }
        if hosts.ui.take_pending().is_some() {
            last = page.on_ui_frame(0.016, &mut hosts.ui);
        }
        if hosts.bg.take_pending().is_some() {
            page.on_background_frame(&mut hosts.bg, &mut Vec::new());
        }
    }
    last
}

#[test]
fn page_reveals_nav_and_starts_background_together() {
    let (mut page, mut hosts) = mounted_page();
    let before = run_until(&mut page, &mut hosts, 1280).unwrap();
    assert_eq!(before.navigation.opacity, 0.0);
    assert_eq!(before.navigation.translate_y, -24.0);
    assert_eq!(page.renderer().state(), RendererState::Uninitialized);
    assert_eq!(hosts.bg.requested(), 0);

    run_until(&mut page, &mut hosts, 1320);
    assert_eq!(page.reveal(), RevealState::REVEALED);
    assert_eq!(page.renderer().state(), RendererState::Running);
    assert_eq!(page.renderer().field().len(), 7500);
    assert!(page.timeline().revealed_at().is_some());

    let settled = run_until(&mut page, &mut hosts, 3000).unwrap();
    assert_eq!(settled.navigation, VisualProps::IDENTITY);
    assert_eq!(settled.background, VisualProps::IDENTITY);
    assert_eq!(settled.hero, VisualProps::IDENTITY);
    assert!(page.renderer().frames_rendered() > 50);
}

#[test]
fn unmount_before_reveal_cancels_everything() {
    let (mut page, mut hosts) = mounted_page();
    run_until(&mut page, &mut hosts, 496);
    page.unmount(&mut hosts.timers, &mut hosts.ui, &mut hosts.bg);
    assert_eq!(hosts.timers.pending_count(), 0);
    assert_eq!(hosts.ui.pending_count(), 0);

    run_until(&mut page, &mut hosts, 2000);
    assert_eq!(page.reveal(), RevealState::HIDDEN);
    assert_eq!(hosts.bg.requested(), 0);
    assert!(!page.is_mounted());
}

#[test]
fn unmount_while_running_cancels_background_frame() {
    let (mut page, mut hosts) = mounted_page();
    run_until(&mut page, &mut hosts, 1600);
    assert_eq!(hosts.bg.pending_count(), 1);
    page.unmount(&mut hosts.timers, &mut hosts.ui, &mut hosts.bg);
    assert_eq!(hosts.bg.pending_count(), 0);
    assert_eq!(hosts.ui.pending_count(), 0);
    assert_eq!(page.renderer().state(), RendererState::Stopped);

    let rendered = page.renderer().frames_rendered();
    assert!(!page.on_background_frame(&mut hosts.bg, &mut Vec::new()));
    assert!(page.on_ui_frame(0.016, &mut hosts.ui).is_none());
    assert_eq!(page.renderer().frames_rendered(), rendered);
}

#[test]
fn scroll_stop_timer_is_dispatched_alongside_reveal() {
    let (mut page, mut hosts) = mounted_page();
    page.on_scroll(60.0, &mut hosts.timers);
    let frame = run_until(&mut page, &mut hosts, 64).unwrap();
    assert!(frame.navigation_scrolled);
    assert!((frame.glitch_intensity - 0.6).abs() < 1e-6);

    let frame = run_until(&mut page, &mut hosts, 400).unwrap();
    assert!(!page.scroll().is_scrolling());
    assert_eq!(frame.glitch_intensity, 0.0);
    assert_eq!(page.reveal(), RevealState::HIDDEN);
}

#[test]
fn cursor_follows_pointer_over_ui_frames() {
    let (mut page, mut hosts) = mounted_page();
    page.on_pointer_move(412.0, 312.0);
    let frame = run_until(&mut page, &mut hosts, 2000).unwrap();
    assert!(frame.cursor_position.distance(glam::Vec2::new(400.0, 300.0)) < 1.0);
    assert_eq!(frame.cursor, VisualProps::IDENTITY);
}

#[test]
fn remount_after_early_unmount_reveals_with_live_background() {
    let (mut page, mut hosts) = mounted_page();
    run_until(&mut page, &mut hosts, 496);
    page.unmount(&mut hosts.timers, &mut hosts.ui, &mut hosts.bg);

    page.mount(&mut hosts.timers, &mut hosts.ui);
    page.on_resize(Viewport::new(80.0, 80.0, 1.0).ok(), &mut hosts.bg);
    assert_eq!(page.renderer().state(), RendererState::Uninitialized);

    run_until(&mut page, &mut hosts, 2000);
    assert_eq!(page.reveal(), RevealState::REVEALED);
    assert_eq!(page.renderer().state(), RendererState::Running);
    assert_eq!(page.renderer().field().len(), 100);
    assert!(hosts.bg.requested() > 0);
    assert!(page.renderer().frames_rendered() > 0);
}

#[test]
fn remount_after_reveal_starts_a_fresh_entrance() {
    let (mut page, mut hosts) = mounted_page();
    page.set_touch_device(true);
    run_until(&mut page, &mut hosts, 1600);
    assert_eq!(page.reveal(), RevealState::REVEALED);
    page.unmount(&mut hosts.timers, &mut hosts.ui, &mut hosts.bg);

    page.mount(&mut hosts.timers, &mut hosts.ui);
    assert_eq!(page.reveal(), RevealState::HIDDEN);
    assert_eq!(page.timeline().revealed_at(), None);
    assert_eq!(page.renderer().state(), RendererState::Uninitialized);
    assert_eq!(page.cursor().mode(), CursorMode::System);
    assert_eq!(hosts.timers.pending_count(), 1);

    let frame = run_until(&mut page, &mut hosts, 1700).unwrap();
    assert_eq!(frame.navigation.opacity, 0.0);
    assert_eq!(frame.navigation.translate_y, -24.0);
    assert!(frame.hero.scale < 1.0);
}
