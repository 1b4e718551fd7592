//! End-to-end navigation through the launcher's scenes, without a window.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use kiosk_config::KioskConfig;
use kiosk_core::{FixedAdvance, ImageProvider};
use kiosk_scene::scenes::Menu;
use kiosk_scene::{
    ClickFeedback, Content, CurrentScene, InputEvent, LinkOpener, PointerButton, SceneHost, SceneKind, Services,
    Signal,
};
use kiosk_surface::Canvas;

#[derive(Clone, Default)]
struct Recorder {
    clicks: Rc<Cell<u32>>,
    opened: Rc<RefCell<Vec<String>>>,
}

struct RecordingFeedback(Rc<Cell<u32>>);

impl ClickFeedback for RecordingFeedback {
    fn play(&self) {
        self.0.set(self.0.get() + 1);
    }
}

struct RecordingOpener(Rc<RefCell<Vec<String>>>);

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.0.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn host_with(config: &KioskConfig) -> (SceneHost, Recorder, tempfile::TempDir) {
    let assets = tempfile::tempdir().unwrap();
    let mut images = ImageProvider::new(assets.path());
    let content = Content::from_config(config, &mut images);
    let recorder = Recorder::default();
    let services = Services::new(
        Box::new(RecordingFeedback(recorder.clicks.clone())),
        Box::new(RecordingOpener(recorder.opened.clone())),
    );
    (SceneHost::new(content, services), recorder, assets)
}

fn host() -> (SceneHost, Recorder, tempfile::TempDir) {
    host_with(&KioskConfig::default())
}

fn press(host: &mut SceneHost, pos: [f32; 2]) -> Signal {
    host.handle(&InputEvent::PointerDown { pos, button: PointerButton::Primary }).unwrap()
}

fn hover(host: &mut SceneHost, pos: [f32; 2]) {
    host.handle(&InputEvent::PointerMove { pos }).unwrap();
}

fn to_menu(host: &mut SceneHost) {
    host.update(2.0).unwrap();
    assert_eq!(host.current().kind(), SceneKind::Menu);
}

fn menu(host: &SceneHost) -> &Menu {
    match host.current() {
        CurrentScene::Menu(menu) => menu,
        other => panic!("expected menu, got {:?}", other.kind()),
    }
}

fn detail_name_and_url(host: &SceneHost) -> (String, String) {
    match host.current() {
        CurrentScene::Detail(d) => (d.institution().name.clone(), d.institution().url.clone()),
        other => panic!("expected detail, got {:?}", other.kind()),
    }
}

#[test]
fn starts_on_splash_and_advances_once() {
    let (mut host, _rec, _dir) = host();
    assert_eq!(host.current().kind(), SceneKind::Splash);

    for _ in 0..112 {
        host.update(0.016).unwrap();
    }
    assert_eq!(host.current().kind(), SceneKind::Splash);
    host.update(0.016).unwrap();
    assert_eq!(host.current().kind(), SceneKind::Menu);

    // Further time on the menu changes nothing.
    hover(&mut host, [190.0, 200.0]);
    host.update(5.0).unwrap();
    assert_eq!(host.current().kind(), SceneKind::Menu);
    assert!(menu(&host).cards()[0].region().contains([190.0, 200.0]));
}

#[test]
fn splash_ignores_clicks() {
    let (mut host, rec, _dir) = host();
    press(&mut host, [450.0, 280.0]);
    assert_eq!(host.current().kind(), SceneKind::Splash);
    assert_eq!(rec.clicks.get(), 0);
}

#[test]
fn every_card_reaches_its_detail_and_back_rebuilds_menu() {
    let expected = [
        ("UVM", "https://uvm.mx/"),
        ("UP", "https://www.up.edu.mx/"),
        ("Universidad Simón Bolívar", "https://usb.edu.mx/"),
    ];
    let (mut host, _rec, _dir) = host();
    to_menu(&mut host);

    for (i, (name, url)) in expected.iter().enumerate() {
        let center = menu(&host).cards()[i].region().center();
        let view_more = menu(&host).cards()[i].view_more_region().center();
        // Leave a hover behind so a reused menu would be detectable.
        hover(&mut host, view_more);
        assert!(menu(&host).cards()[i].view_more_hovered());

        assert_eq!(press(&mut host, center), Signal::Continue);
        assert_eq!(detail_name_and_url(&host), (name.to_string(), url.to_string()));

        // Back at (40, 480, 200, 56).
        press(&mut host, [140.0, 508.0]);
        let rebuilt = menu(&host);
        assert!(rebuilt.cards().iter().all(|c| !c.view_more_hovered()));
        let listed: Vec<(&str, &str)> = rebuilt
            .cards()
            .iter()
            .map(|c| (c.institution().name.as_str(), c.institution().url.as_str()))
            .collect();
        assert_eq!(listed, expected);
    }
}

#[test]
fn back_button_edges() {
    let (mut host, _rec, _dir) = host();
    to_menu(&mut host);
    let card = menu(&host).cards()[0].region().center();
    press(&mut host, card);

    press(&mut host, [39.0, 508.0]);
    assert_eq!(host.current().kind(), SceneKind::Detail);
    press(&mut host, [241.0, 508.0]);
    assert_eq!(host.current().kind(), SceneKind::Detail);
    host.handle(&InputEvent::PointerDown { pos: [140.0, 508.0], button: PointerButton::Secondary })
        .unwrap();
    assert_eq!(host.current().kind(), SceneKind::Detail);
    press(&mut host, [140.0, 508.0]);
    assert_eq!(host.current().kind(), SceneKind::Menu);
}

#[test]
fn open_site_stays_on_detail() {
    let (mut host, rec, _dir) = host();
    to_menu(&mut host);
    let card = menu(&host).cards()[1].region().center();
    press(&mut host, card);
    let clicks_before = rec.clicks.get();

    press(&mut host, [760.0, 508.0]);
    assert_eq!(host.current().kind(), SceneKind::Detail);
    assert_eq!(*rec.opened.borrow(), ["https://www.up.edu.mx/"]);
    assert_eq!(rec.clicks.get(), clicks_before + 1);
}

#[test]
fn click_without_prior_motion_fires() {
    let (mut host, rec, _dir) = host();
    to_menu(&mut host);
    // No PointerMove at all before the press.
    press(&mut host, [180.0, 510.0]);
    assert_eq!(host.current().kind(), SceneKind::Info);
    assert_eq!(rec.clicks.get(), 1);
    match host.current() {
        CurrentScene::Info(info) => {
            assert!(info.open().is_none());
            assert!(!info.back().is_hovered());
        }
        other => panic!("expected info, got {:?}", other.kind()),
    }
}

#[test]
fn about_with_url_offers_open_link() {
    let mut config = KioskConfig::default();
    config.about.url = Some("https://example.org/".into());
    let (mut host, rec, _dir) = host_with(&config);
    to_menu(&mut host);
    press(&mut host, [180.0, 510.0]);
    press(&mut host, [750.0, 508.0]);
    assert_eq!(host.current().kind(), SceneKind::Info);
    assert_eq!(*rec.opened.borrow(), ["https://example.org/"]);
}

#[test]
fn exit_and_close_signal_exit() {
    let (mut host, _rec, _dir) = host();
    to_menu(&mut host);
    assert_eq!(press(&mut host, [720.0, 510.0]), Signal::Exit);
    assert_eq!(host.current().kind(), SceneKind::Menu);

    let (mut host, _rec, _dir) = crate::host();
    assert_eq!(host.handle(&InputEvent::Quit).unwrap(), Signal::Exit);
}

#[test]
fn every_scene_draws_a_cleared_frame() {
    let (mut host, _rec, _dir) = host();
    let metrics = FixedAdvance::default();
    let theme = host.content().theme.clone();
    let frame = |host: &SceneHost| {
        let mut canvas = Canvas::new(theme.viewport(), &metrics);
        host.draw(&mut canvas);
        canvas.finish()
    };

    assert_eq!(frame(&host).clear, Some(theme.background));
    to_menu(&mut host);
    assert!(frame(&host).contains_text("Choose an option to explore"));
    let card = menu(&host).cards()[2].region().center();
    press(&mut host, card);
    assert!(frame(&host).contains_text("Universidad Simón Bolívar - "));
    press(&mut host, [140.0, 508.0]);
    press(&mut host, [180.0, 510.0]);
    assert!(frame(&host).contains_text("About the launcher"));
}
