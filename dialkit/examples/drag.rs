//! Drives a stepped dial and a scrollbar with synthetic pointer input.
//!
//! Run with `cargo run -p dialkit --example drag`; debug output goes to `drag.log`.

use std::fs::File;

use dialkit::prelude::*;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("drag.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut dial = Dial::new(
        DialConfig::new(0.0, 100.0)
            .step_count(5)
            .suffix("%")
            .default_value(50.0),
    )?
    .with_callbacks(
        Callbacks::new()
            .on_change(|value| println!("dial -> {value}"))
            .on_change_end(|value| println!("dial released at {value}")),
    );

    let (width, height) = dial.geometry().view_box();
    let bounds = Bounds::new(width, height);

    // Sweep the pointer across the top of the dial, left to right.
    let path: Vec<Point> = (0..=20)
        .map(|i| Point::new(width * f64::from(i) / 20.0, height * 0.25))
        .collect();
    let events = dial.drag_along(&path, bounds);
    info!("Dial session produced {} events", events.len());
    if let Some(label) = dial.label() {
        println!("dial label: {label}");
    }

    let mut bar = ScrollBar::new(ScrollBarConfig::new(ScrollDirection::Vertical))
        .on_scroll(|event| println!("scrolled to {:.1}", event.y));
    let mut content = ScrollMetrics::new(0.0, 200.0, 1000.0);
    bar.sync(ScrollMetrics::default(), content);

    bar.begin_drag(Axis::Y);
    for _ in 0..5 {
        if let Some(delta) = bar.drag(Point::new(0.0, 8.0), Bounds::new(0.0, 200.0)) {
            content.offset = (content.offset + delta.dy).clamp(0.0, content.max_offset());
            bar.sync(ScrollMetrics::default(), content);
        }
    }
    bar.release();
    info!("Thumb now at {:?}", bar.thumb(Axis::Y));

    Ok(())
}
