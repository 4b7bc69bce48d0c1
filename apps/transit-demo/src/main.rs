//! Headless transport demo: a list card flies into a detail panel.
//!
//! Runs the engine against the in-memory host so the whole flight
//! (cloning, visibility flips, the issued end state, teardown) can be
//! observed from a terminal. Set `RUST_LOG=info` to see the engine's trace
//! lines alongside the printed narration.

use std::time::Duration;

use transit_core::{transport, SessionState, TransportConfig, VisualTree};
use transit_graphics::{Bounds, Size};
use transit_testing::{MemoryTree, RecordingDriver};

fn main() {
    env_logger::init();

    println!("=== Transit Demo ===");
    println!("A card in a list flies into the detail view's hero slot.");
    println!();

    let mut tree = MemoryTree::new();
    let mut driver = RecordingDriver::new();

    // The list card, with a title child, sitting in the left column.
    let card = tree.spawn(Bounds::new(24.0, 160.0, 280.0, 96.0));
    tree.set_identity(card, "card#42");
    tree.put_style(card, "background-color", "white");
    tree.put_style(card, "border-radius", "8px");
    tree.put_style(card, "color", "#1a1a1a");
    let title = tree.spawn(Bounds::new(40.0, 176.0, 200.0, 24.0));
    tree.set_identity(title, "card#42 > title");
    tree.put_style(title, "color", "#1a1a1a");
    tree.add_child(card, title);
    tree.insert(card).expect("attach card");

    // The hero slot in the detail view, larger and rendered at 0.5x by an
    // ancestor transform while the panel is still animating in.
    let hero = tree.spawn(Bounds::new(420.0, 80.0, 320.0, 180.0));
    tree.set_identity(hero, "detail > hero");
    tree.put_style(hero, "background-color", "white");
    tree.put_style(hero, "border-radius", "16px");
    tree.put_style(hero, "width", "640px");
    tree.put_style(hero, "height", "360px");
    tree.set_offset_size(hero, Size::new(640.0, 360.0));
    tree.insert(hero).expect("attach hero");

    println!("Before:");
    print!("{}", tree.dump_tree(card));
    print!("{}", tree.dump_tree(hero));
    println!();

    let config = TransportConfig::new()
        .with_morph(true)
        .with_morph_children(true)
        .with_restore_source(false)
        .with_log(true)
        .with_on_complete(|| println!("flight complete; detail view owns the element now"));

    let mut session =
        transport(&mut tree, &mut driver, &[card], &[hero], config).expect("transport starts");

    let proxy = session.proxies()[0].node;
    println!(
        "In flight: {} proxy, total delay {:?}",
        session.proxy_count(),
        session.total_delay()
    );
    if let Some(end) = driver.end_state_for(proxy) {
        if let Some(transform) = end.transform {
            println!(
                "  issued transform: translate({:.1}, {:.1}) scale({:.2}, {:.2})",
                transform.translation_x,
                transform.translation_y,
                transform.scale_x,
                transform.scale_y
            );
        }
        for (property, value) in end.style.iter() {
            println!("  reconciling {property}: {value}");
        }
    }
    print!("{}", tree.dump_tree(proxy));
    println!();

    // Pump the host clock in frame-sized steps until teardown fires.
    let mut now = Duration::ZERO;
    while session.state() != SessionState::TornDown {
        now += Duration::from_millis(16);
        session.poll(now, &mut tree).expect("poll");
    }

    println!();
    println!("After ({} live nodes):", tree.node_count());
    print!("{}", tree.dump_tree(card));
    print!("{}", tree.dump_tree(hero));
}
