//! End-to-end gallery sessions driven by synthetic frame deltas.

use std::time::Duration;

use tilescape::animation::{FramePump, OverlapPolicy};
use tilescape::gallery::{Gallery, GalleryCommand};
use tilescape::layout::{FormationKind, Position};
use tilescape::options::Options;

const FRAME: Duration = Duration::from_micros(16_667);

fn rows(n: usize) -> String {
    let mut rows = vec![serde_json::json!([
        "Name", "Photo", "Age", "Country", "Interest", "Net Worth"
    ])];
    for i in 0..n {
        rows.push(serde_json::json!([
            format!("Person {i}"),
            format!("https://img.example/{i}.png"),
            30 + i,
            "NZ",
            "Sailing",
            format!("${},{:03}", i + 1, i % 1000)
        ]));
    }
    serde_json::Value::Array(rows).to_string()
}

fn gallery(n: usize) -> Gallery {
    let mut options = Options::default();
    options.scatter.seed = Some(2024);
    let mut gallery = Gallery::new(options);
    let issues = gallery.load_json(&rows(n)).unwrap();
    assert!(issues.is_empty());
    gallery
}

fn play(gallery: &mut Gallery, command: &str) -> u64 {
    gallery.execute(command.parse().unwrap()).unwrap();
    let mut pump = FramePump::default();
    let mut repaints = 0;
    let mut render = || repaints += 1;
    while pump.pump(gallery.animation_mut(), FRAME, &mut render) {}
    repaints
}

fn assert_in_formation(gallery: &Gallery, kind: FormationKind) {
    let targets = gallery.formation(kind).positions();
    let live: Vec<Position> = gallery.animation().positions().collect();
    assert_eq!(live.len(), targets.len());
    for (i, (p, t)) in live.iter().zip(targets).enumerate() {
        assert!((*p - *t).length() < 1e-9, "tile {i}: {p} vs {t}");
    }
}

#[test]
fn tour_of_every_formation() {
    let mut gallery = gallery(60);
    assert_eq!(gallery.tiles()[0].value, 1000.0);

    for kind in FormationKind::ALL {
        let repaints = play(&mut gallery, kind.name());
        assert!(repaints >= 1);
        assert_in_formation(&gallery, kind);
    }
}

#[test]
fn repaints_do_not_scale_with_tile_count() {
    let small = play(&mut gallery(3), "sphere 2000");
    let large = play(&mut gallery(400), "sphere 2000");
    assert_eq!(small, large);
    // 2000 ms at ~60 Hz.
    assert_eq!(small, 120);
}

#[test]
fn interrupted_transition_still_lands_on_the_new_formation() {
    let mut gallery = gallery(25);
    gallery
        .execute(GalleryCommand::select(FormationKind::Helix))
        .unwrap();
    let mut render = || {};
    for _ in 0..30 {
        let _ = gallery.tick(FRAME, &mut render);
    }

    let _ = play(&mut gallery, "grid 750");
    assert_in_formation(&gallery, FormationKind::Grid);
    assert!(!gallery.animation().is_animating());
}

#[test]
fn queued_transitions_finish_on_the_last_formation() {
    let mut options = Options::default();
    options.scatter.seed = Some(5);
    options.animation.overlap = OverlapPolicy::Queue;
    let mut gallery = Gallery::new(options);
    let _ = gallery.load_json(&rows(10)).unwrap();

    gallery.execute("table 500".parse().unwrap()).unwrap();
    gallery.execute("sphere 500".parse().unwrap()).unwrap();

    let mut render = || {};
    let mut elapsed = Duration::ZERO;
    while gallery.tick(FRAME, &mut render) {
        elapsed += FRAME;
    }
    elapsed += FRAME;
    assert!(elapsed >= Duration::from_millis(1000));
    assert!(elapsed < Duration::from_millis(1000) + FRAME * 2);
    assert_in_formation(&gallery, FormationKind::Sphere);
}

#[test]
fn table_round_trip_from_anywhere() {
    let mut gallery = gallery(33);
    let _ = play(&mut gallery, "table 2000");
    assert_in_formation(&gallery, FormationKind::Table);
    let _ = play(&mut gallery, "helix 300");
    let _ = play(&mut gallery, "table 2000");
    assert_in_formation(&gallery, FormationKind::Table);
}
