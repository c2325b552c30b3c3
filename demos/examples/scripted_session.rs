// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a touch ball through a scripted sequence of input events.
//!
//! This example shows how a host:
//! - loads a `Config` from JSON (`serde` feature),
//! - implements `Host` for its window,
//! - forwards pointer, resize, and overlay events to the `Controller`,
//! - redraws from `Controller::frame` whenever a snapshot is published.
//!
//! Run:
//! - `cargo run -p touchball_demos --example scripted_session`
//! - `RUST_LOG=touchball_interaction=trace cargo run -p touchball_demos --example scripted_session`

use kurbo::Size;
use serde::Deserialize;
use touchball_geometry::ViewportMetrics;
use touchball_interaction::{Config, Controller, Disposition, Handled, Host, Listeners, PointerInput};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initialPosition": { "top": 100, "left": 100 },
    "menuItems": [
        { "label": "Home", "action": "go-home" },
        { "label": "Screenshot", "action": "capture" },
        { "label": "Lock", "action": "lock-screen" }
    ],
    "behaviour": "snapToSides"
}"#;

/// Menu entries are opaque to the controller; only this example reads them.
#[derive(Debug, Deserialize)]
struct MenuItem {
    label: String,
    action: String,
}

/// A pretend browser window.
struct Window {
    document: Size,
    inner: Option<Size>,
    listeners: Listeners,
}

impl ViewportMetrics for Window {
    fn document_client_size(&self) -> Size {
        self.document
    }

    fn window_inner_size(&self) -> Option<Size> {
        self.inner
    }
}

impl Host for Window {
    fn control_size(&self) -> Size {
        Size::new(50.0, 50.0)
    }

    fn attach_listeners(&mut self, listeners: Listeners) {
        self.listeners.insert(listeners);
        println!("  + listeners {listeners:?}");
    }

    fn detach_listeners(&mut self, listeners: Listeners) {
        self.listeners.remove(listeners);
        println!("  - listeners {listeners:?}");
    }
}

enum Step {
    Down(PointerInput),
    Move(PointerInput),
    Up(PointerInput),
    Cancel(PointerInput),
    Resize(Size),
    OverlayClick,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config: Config<MenuItem> = serde_json::from_str(CONFIG)?;
    config.validate()?;

    let mut window = Window {
        document: Size::new(1000.0, 800.0),
        inner: Some(Size::new(1000.0, 780.0)),
        listeners: Listeners::empty(),
    };
    let mut ball = Controller::new(config);
    let mounted = ball.mount(&mut window);
    render(&ball, "mount", mounted);

    let script = [
        // Tap: opens the menu.
        ("tap down", Step::Down(PointerInput::mouse(120.0, 120.0))),
        ("tap up", Step::Up(PointerInput::mouse(120.0, 120.0))),
        // Overlay click: closes it again.
        ("overlay click", Step::OverlayClick),
        // Drag to the top-right corner; releases snap to the right edge.
        ("drag down", Step::Down(PointerInput::mouse(150.0, 150.0))),
        ("drag move", Step::Move(PointerInput::mouse(600.0, 140.0))),
        ("drag move", Step::Move(PointerInput::mouse(900.0, 120.0))),
        ("drag up", Step::Up(PointerInput::mouse(900.0, 120.0))),
        // A touch drag that leaves the window and is cancelled.
        ("touch down", Step::Down(PointerInput::touch(975.0, 95.0))),
        ("touch move", Step::Move(PointerInput::touch(1200.0, 300.0))),
        ("touch move", Step::Move(PointerInput::touch(980.0, 500.0))),
        ("touch cancel", Step::Cancel(PointerInput::touch(980.0, 500.0))),
        // The window shrinks; the ball re-snaps against the new bounds.
        ("resize", Step::Resize(Size::new(640.0, 480.0))),
    ];

    for (label, step) in script {
        let handled = match step {
            Step::Down(input) => ball.pointer_down(&mut window, input),
            Step::Move(input) => ball.pointer_move(&mut window, input),
            Step::Up(input) => ball.pointer_up(&mut window, input),
            Step::Cancel(input) => ball.pointer_cancel(&mut window, input),
            Step::Resize(size) => {
                window.document = size;
                window.inner = None;
                ball.viewport_resized(&mut window)
            }
            Step::OverlayClick => ball.overlay_clicked(),
        };
        render(&ball, label, handled);
    }

    ball.unmount(&mut window);
    assert!(window.listeners.is_empty(), "unmount leaves no listeners");
    Ok(())
}

fn render(ball: &Controller<MenuItem>, label: &str, handled: Handled) {
    let flags = if handled.disposition.contains(Disposition::CONSUMED) {
        " [consumed]"
    } else if handled.disposition.contains(Disposition::PREVENT_DEFAULT) {
        " [default prevented]"
    } else {
        ""
    };
    if handled.snapshot.is_none() {
        println!("{label}: no change{flags}");
        return;
    }

    let frame = ball.frame();
    println!("{label}:{flags}");
    println!("  ball  {{ {} }}", frame.ball.css());
    match frame.menu {
        None => println!("  menu  (hidden while dragging)"),
        Some(menu) if !menu.open => println!("  menu  closed"),
        Some(menu) => {
            println!(
                "  menu  open at ({}, {})",
                menu.position.left, menu.position.top
            );
            for item in menu.items {
                println!("    - {} ({})", item.label, item.action);
            }
        }
    }
}
