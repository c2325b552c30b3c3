// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.
//!
//! [`Controller`] is `Idle` until a pointer goes down on the control, then
//! `Dragging` until the matching up or cancel. While dragging, the host has
//! the drag listeners ([`Listeners::DRAG`]) installed; at all other times it
//! does not.
//!
//! Every handler returns a [`Handled`] value. When the render-facing
//! [`InteractionState`] may have changed it carries a snapshot, which the
//! host forwards to whatever redraws the control and its menu.

use kurbo::Point;
use touchball_geometry::{Position, snap_to_side};

use crate::config::{Behaviour, Config};
use crate::drag::DragTracker;
use crate::frame::{BallStyle, Frame, MenuProps};
use crate::host::{Host, PointerInput, PointerSource, bounds_of};
use crate::listeners::{Disposition, Listeners};

/// Whether a drag session is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No pointer is down on the control.
    Idle,
    /// A pointer went down on the control and has not been released.
    Dragging,
}

/// Authoritative, render-facing state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionState {
    /// Where the control is drawn.
    pub position: Position,
    /// Whether the menu is open.
    pub is_open: bool,
}

/// Result of handling one event.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Handled {
    /// Published state, when the event may have changed what is drawn.
    pub snapshot: Option<InteractionState>,
    /// What to do with the native event.
    pub disposition: Disposition,
}

impl Handled {
    const IGNORED: Self = Self {
        snapshot: None,
        disposition: Disposition::empty(),
    };
}

/// Drives a floating control and its menu from pointer input.
///
/// `T` is the menu item type, passed through to [`Frame::menu`].
#[derive(Clone, Debug)]
pub struct Controller<T> {
    config: Config<T>,
    state: InteractionState,
    drag: DragTracker,
    attached: Listeners,
    last_release: Option<Point>,
}

impl<T> Controller<T> {
    /// Creates an idle controller at the configured initial position, menu closed.
    pub fn new(config: Config<T>) -> Self {
        let state = InteractionState {
            position: config.initial_position,
            is_open: false,
        };
        Self {
            config,
            state,
            drag: DragTracker::default(),
            attached: Listeners::empty(),
            last_release: None,
        }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Current render-facing state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.drag.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    /// Listeners this controller currently has installed on its host.
    pub fn listeners(&self) -> Listeners {
        self.attached
    }

    /// Pointer position of the most recent release, if any.
    pub fn last_release(&self) -> Option<Point> {
        self.last_release
    }

    /// Returns `true` while a moving drag hides the menu.
    pub fn is_menu_suspended(&self) -> bool {
        self.drag.has_moved()
    }

    /// What to draw for the current state.
    pub fn frame(&self) -> Frame<'_, T> {
        let menu = (!self.is_menu_suspended()).then(|| MenuProps {
            items: &self.config.menu_items,
            open: self.state.is_open,
            position: self.state.position,
        });
        Frame {
            ball: BallStyle::new(self.state.position, self.state.is_open),
            menu,
        }
    }

    /// Resets to the initial state and installs the resize listener.
    ///
    /// The initial position is clamped to the host's current bounds.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) -> Handled {
        self.state = InteractionState {
            position: bounds_of(host).clamp(self.config.initial_position),
            is_open: false,
        };
        self.attach(host, Listeners::RESIZE);
        tracing::debug!(
            top = self.state.position.top,
            left = self.state.position.left,
            behaviour = %self.config.behaviour,
            "mounted"
        );
        self.publish(Disposition::empty())
    }

    /// Removes every listener still installed and drops any session.
    pub fn unmount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.drag.finish(Point::ZERO).is_some() {
            tracing::debug!("unmounted mid-drag; session dropped");
        }
        if !self.attached.is_empty() {
            host.detach_listeners(self.attached);
            self.attached = Listeners::empty();
        }
        tracing::debug!("unmounted");
    }

    /// Pointer went down on the control: start a drag session.
    pub fn pointer_down<H: Host + ?Sized>(&mut self, host: &mut H, input: PointerInput) -> Handled {
        if self.drag.is_dragging() {
            tracing::debug!("pointer down during an active session; restarting");
        }
        self.drag.begin(input.point);
        self.attach(host, Listeners::DRAG);
        tracing::debug!(
            x = input.point.x,
            y = input.point.y,
            source = ?input.source,
            "drag session started"
        );
        Handled {
            snapshot: None,
            disposition: disposition_for(input.source),
        }
    }

    /// Pointer moved while down: follow it, clamped to the viewport.
    pub fn pointer_move<H: Host + ?Sized>(&mut self, host: &mut H, input: PointerInput) -> Handled {
        let bounds = bounds_of(host);
        let Some(position) = self.drag.track(input.point, self.state.position, &bounds) else {
            return Handled::IGNORED;
        };
        self.state.position = position;
        tracing::trace!(top = position.top, left = position.left, "drag moved");
        self.publish(disposition_for(input.source))
    }

    /// Pointer released: a tap toggles the menu, a drag may snap to an edge.
    pub fn pointer_up<H: Host + ?Sized>(&mut self, host: &mut H, input: PointerInput) -> Handled {
        let Some(release) = self.drag.finish(input.point) else {
            return Handled::IGNORED;
        };
        self.last_release = Some(release.point);

        if !release.moved {
            self.state.is_open = !self.state.is_open;
            tracing::debug!(is_open = self.state.is_open, "tap toggled menu");
        } else if self.config.behaviour == Behaviour::SnapToSides {
            let snap = snap_to_side(release.point, self.state.position, &bounds_of(host));
            self.state.position = snap.position;
            tracing::debug!(
                edge = ?snap.edge,
                top = snap.position.top,
                left = snap.position.left,
                "drag released; snapped"
            );
        } else {
            tracing::debug!(
                top = self.state.position.top,
                left = self.state.position.left,
                "drag released"
            );
        }
        // The viewport may have shrunk since the last move.
        self.state.position = bounds_of(host).clamp(self.state.position);

        self.remove_drag_listeners(host);
        self.publish(disposition_for(input.source))
    }

    /// Gesture was cancelled by the platform. Ends the session like a release.
    pub fn pointer_cancel<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        input: PointerInput,
    ) -> Handled {
        self.pointer_up(host, input)
    }

    /// Viewport changed size: re-snap using the last release point.
    ///
    /// This runs for any release (including taps) and regardless of the
    /// configured behaviour. Nothing happens before the first release.
    pub fn viewport_resized<H: Host + ?Sized>(&mut self, host: &mut H) -> Handled {
        let Some(release) = self.last_release else {
            return Handled::IGNORED;
        };
        let bounds = bounds_of(host);
        let snap = snap_to_side(release, self.state.position, &bounds);
        self.state.position = bounds.clamp(snap.position);
        tracing::debug!(
            edge = ?snap.edge,
            width = bounds.viewport.width,
            height = bounds.viewport.height,
            "viewport resized; re-snapped"
        );
        self.publish(Disposition::empty())
    }

    /// The overlay behind the open menu was clicked.
    ///
    /// Closes the menu if it is open. The click is always consumed.
    pub fn overlay_clicked(&mut self) -> Handled {
        if !self.state.is_open {
            return Handled {
                snapshot: None,
                disposition: Disposition::CONSUMED,
            };
        }
        self.state.is_open = false;
        tracing::debug!("overlay clicked; menu closed");
        self.publish(Disposition::CONSUMED)
    }

    /// Removes whichever drag listeners are installed. Safe to repeat.
    pub fn remove_drag_listeners<H: Host + ?Sized>(&mut self, host: &mut H) {
        let installed = self.attached & Listeners::DRAG;
        if installed.is_empty() {
            return;
        }
        host.detach_listeners(installed);
        self.attached.remove(installed);
    }

    fn attach<H: Host + ?Sized>(&mut self, host: &mut H, listeners: Listeners) {
        let missing = listeners.difference(self.attached);
        if missing.is_empty() {
            return;
        }
        host.attach_listeners(missing);
        self.attached.insert(missing);
    }

    fn publish(&self, disposition: Disposition) -> Handled {
        Handled {
            snapshot: Some(self.state),
            disposition,
        }
    }
}

// Touch handlers suppress the default action so the page does not scroll
// under the control.
fn disposition_for(source: PointerSource) -> Disposition {
    match source {
        PointerSource::Mouse => Disposition::empty(),
        PointerSource::Touch => Disposition::PREVENT_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;
    use touchball_geometry::ViewportMetrics;

    #[derive(Debug)]
    struct TestHost {
        viewport: Size,
        control: Size,
        attached: Listeners,
        detach_calls: usize,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                viewport: Size::new(1000.0, 800.0),
                control: Size::new(50.0, 50.0),
                attached: Listeners::empty(),
                detach_calls: 0,
            }
        }
    }

    impl ViewportMetrics for TestHost {
        fn document_client_size(&self) -> Size {
            self.viewport
        }

        fn window_inner_size(&self) -> Option<Size> {
            Some(self.viewport)
        }
    }

    impl Host for TestHost {
        fn control_size(&self) -> Size {
            self.control
        }

        fn attach_listeners(&mut self, listeners: Listeners) {
            self.attached.insert(listeners);
        }

        fn detach_listeners(&mut self, listeners: Listeners) {
            self.attached.remove(listeners);
            self.detach_calls += 1;
        }
    }

    fn controller(behaviour: Behaviour) -> Controller<&'static str> {
        Controller::new(
            Config::new(Position::new(100.0, 100.0), vec!["home", "settings"])
                .with_behaviour(behaviour),
        )
    }

    fn mounted(behaviour: Behaviour) -> (Controller<&'static str>, TestHost) {
        let mut host = TestHost::new();
        let mut ctl = controller(behaviour);
        ctl.mount(&mut host);
        (ctl, host)
    }

    fn drag(
        ctl: &mut Controller<&'static str>,
        host: &mut TestHost,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Handled {
        ctl.pointer_down(host, PointerInput::mouse(from.0, from.1));
        ctl.pointer_move(host, PointerInput::mouse(to.0, to.1));
        ctl.pointer_up(host, PointerInput::mouse(to.0, to.1))
    }

    #[test]
    fn starts_idle_at_initial_position() {
        let ctl = controller(Behaviour::Default);
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(
            ctl.state(),
            InteractionState {
                position: Position::new(100.0, 100.0),
                is_open: false,
            }
        );
        assert!(ctl.listeners().is_empty());
        assert_eq!(ctl.last_release(), None);
    }

    #[test]
    fn mount_clamps_out_of_range_initial_position() {
        let mut host = TestHost::new();
        let mut ctl = Controller::new(Config::new(
            Position::new(-40.0, 5000.0),
            vec!["home", "settings"],
        ));

        let handled = ctl.mount(&mut host);

        assert_eq!(ctl.state().position, Position::new(0.0, 950.0));
        assert_eq!(
            handled.snapshot.map(|s| s.position),
            Some(Position::new(0.0, 950.0))
        );
    }

    #[test]
    fn release_after_viewport_shrinks_stays_in_bounds() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(150.0, 150.0));
        ctl.pointer_move(&mut host, PointerInput::mouse(900.0, 120.0));
        assert_eq!(ctl.state().position, Position::new(70.0, 850.0));

        host.viewport = Size::new(600.0, 400.0);
        // No release yet, so the resize does not re-snap.
        assert_eq!(ctl.viewport_resized(&mut host), Handled::IGNORED);

        ctl.pointer_up(&mut host, PointerInput::mouse(900.0, 120.0));

        assert_eq!(ctl.state().position, Position::new(70.0, 550.0));
        assert!(bounds_of(&host).contains(ctl.state().position));
    }

    #[test]
    fn tap_after_viewport_shrinks_stays_in_bounds() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);
        drag(&mut ctl, &mut host, (150.0, 150.0), (900.0, 120.0));
        assert_eq!(ctl.state().position, Position::new(70.0, 950.0));

        ctl.pointer_down(&mut host, PointerInput::mouse(960.0, 80.0));
        host.viewport = Size::new(600.0, 400.0);
        ctl.pointer_up(&mut host, PointerInput::mouse(960.0, 80.0));

        assert!(ctl.state().is_open);
        assert_eq!(ctl.state().position, Position::new(70.0, 550.0));
    }

    #[test]
    fn mount_installs_only_resize_listener() {
        let (ctl, host) = mounted(Behaviour::Default);
        assert_eq!(ctl.listeners(), Listeners::RESIZE);
        assert_eq!(host.attached, Listeners::RESIZE);
    }

    #[test]
    fn drag_listeners_installed_only_during_session() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);

        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        assert_eq!(ctl.phase(), Phase::Dragging);
        assert_eq!(host.attached, Listeners::all());

        ctl.pointer_move(&mut host, PointerInput::mouse(130.0, 125.0));
        assert_eq!(host.attached, Listeners::all());

        ctl.pointer_up(&mut host, PointerInput::mouse(130.0, 125.0));
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(host.attached, Listeners::RESIZE);
        assert_eq!(ctl.listeners(), Listeners::RESIZE);
    }

    #[test]
    fn tap_toggles_menu_without_moving() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        let handled = ctl.pointer_up(&mut host, PointerInput::mouse(120.0, 120.0));

        let expected = InteractionState {
            position: Position::new(100.0, 100.0),
            is_open: true,
        };
        assert_eq!(handled.snapshot, Some(expected));
        assert_eq!(ctl.state(), expected);

        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(120.0, 120.0));
        assert!(!ctl.state().is_open);
    }

    #[test]
    fn drag_with_default_behaviour_keeps_dropped_position() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);

        let handled = drag(&mut ctl, &mut host, (150.0, 150.0), (900.0, 120.0));

        assert_eq!(
            handled.snapshot,
            Some(InteractionState {
                position: Position::new(70.0, 850.0),
                is_open: false,
            })
        );
    }

    #[test]
    fn drag_with_snap_moves_to_right_edge() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        drag(&mut ctl, &mut host, (150.0, 150.0), (900.0, 120.0));

        assert_eq!(ctl.state().position, Position::new(70.0, 950.0));
        assert!(!ctl.state().is_open);
    }

    #[test]
    fn top_left_release_snaps_top_when_y_not_greater_than_x() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        drag(&mut ctl, &mut host, (150.0, 150.0), (120.0, 100.0));

        assert_eq!(ctl.state().position, Position::new(0.0, 70.0));
    }

    #[test]
    fn top_left_release_snaps_left_when_y_greater_than_x() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        drag(&mut ctl, &mut host, (150.0, 150.0), (100.0, 130.0));

        assert_eq!(ctl.state().position, Position::new(80.0, 0.0));
    }

    #[test]
    fn drag_does_not_toggle_open_menu() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(120.0, 120.0));
        assert!(ctl.state().is_open);

        drag(&mut ctl, &mut host, (150.0, 150.0), (160.0, 160.0));

        assert!(ctl.state().is_open);
        assert_eq!(ctl.state().position, Position::new(110.0, 110.0));
    }

    #[test]
    fn position_stays_in_bounds_for_arbitrary_drags() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        let bounds = bounds_of(&host);

        // Small LCG so the sequence is deterministic.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((seed >> 33) % 1400) as f64 - 200.0
        };

        for _ in 0..50 {
            ctl.pointer_down(&mut host, PointerInput::mouse(next(), next()));
            for _ in 0..20 {
                ctl.pointer_move(&mut host, PointerInput::touch(next(), next()));
                assert!(bounds.contains(ctl.state().position), "{:?}", ctl.state());
            }
            ctl.pointer_up(&mut host, PointerInput::mouse(next(), next()));
            assert!(bounds.contains(ctl.state().position), "{:?}", ctl.state());
        }
    }

    #[test]
    fn removing_drag_listeners_twice_matches_once() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));

        ctl.remove_drag_listeners(&mut host);
        let once = (ctl.listeners(), host.attached, host.detach_calls);
        ctl.remove_drag_listeners(&mut host);
        let twice = (ctl.listeners(), host.attached, host.detach_calls);

        assert_eq!(once, twice);
        assert_eq!(twice.0, Listeners::RESIZE);
    }

    #[test]
    fn touch_cancel_commits_like_release() {
        // Cancellation is not distinguished from a release: the dragged
        // position is committed and snapping still applies.
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        ctl.pointer_down(&mut host, PointerInput::touch(150.0, 150.0));
        ctl.pointer_move(&mut host, PointerInput::touch(900.0, 120.0));
        let handled = ctl.pointer_cancel(&mut host, PointerInput::touch(900.0, 120.0));

        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.state().position, Position::new(70.0, 950.0));
        assert_eq!(handled.disposition, Disposition::PREVENT_DEFAULT);
        assert_eq!(host.attached, Listeners::RESIZE);
    }

    #[test]
    fn touch_cancel_without_movement_toggles_menu() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);

        ctl.pointer_down(&mut host, PointerInput::touch(120.0, 120.0));
        ctl.pointer_cancel(&mut host, PointerInput::touch(120.0, 120.0));

        assert!(ctl.state().is_open);
    }

    #[test]
    fn moves_and_releases_without_session_are_ignored() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);

        assert_eq!(
            ctl.pointer_move(&mut host, PointerInput::mouse(500.0, 500.0)),
            Handled::default()
        );
        assert_eq!(
            ctl.pointer_up(&mut host, PointerInput::mouse(500.0, 500.0)),
            Handled::default()
        );
        assert_eq!(ctl.state().position, Position::new(100.0, 100.0));
        assert_eq!(ctl.last_release(), None);
    }

    #[test]
    fn touch_input_prevents_default_and_mouse_does_not() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);

        let down = ctl.pointer_down(&mut host, PointerInput::touch(120.0, 120.0));
        assert_eq!(down.disposition, Disposition::PREVENT_DEFAULT);
        let moved = ctl.pointer_move(&mut host, PointerInput::mouse(125.0, 120.0));
        assert_eq!(moved.disposition, Disposition::empty());
        assert!(moved.snapshot.is_some());
    }

    #[test]
    fn resize_before_any_release_does_nothing() {
        let (mut ctl, mut host) = mounted(Behaviour::SnapToSides);
        host.viewport = Size::new(300.0, 200.0);

        let handled = ctl.viewport_resized(&mut host);

        assert_eq!(handled, Handled::default());
        assert_eq!(ctl.state().position, Position::new(100.0, 100.0));
    }

    #[test]
    fn resize_resnaps_with_last_tap_point_even_without_snapping() {
        // The last release point is reused even when it came from a tap and
        // the controller does not snap on release.
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(900.0, 120.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(900.0, 120.0));
        assert_eq!(ctl.state().position, Position::new(100.0, 100.0));

        host.viewport = Size::new(600.0, 400.0);
        let handled = ctl.viewport_resized(&mut host);

        assert_eq!(ctl.state().position, Position::new(100.0, 550.0));
        assert_eq!(handled.snapshot.map(|s| s.position), Some(ctl.state().position));
    }

    #[test]
    fn resize_clamps_the_axis_that_did_not_snap() {
        let mut host = TestHost::new();
        let mut ctl: Controller<()> =
            Controller::new(Config::new(Position::new(700.0, 100.0), vec![]));
        ctl.mount(&mut host);
        ctl.pointer_down(&mut host, PointerInput::mouse(10.0, 100.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(10.0, 100.0));

        host.viewport = Size::new(1000.0, 400.0);
        ctl.viewport_resized(&mut host);

        assert_eq!(ctl.state().position, Position::new(350.0, 0.0));
    }

    #[test]
    fn overlay_click_closes_open_menu_and_is_consumed() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(120.0, 120.0));

        let handled = ctl.overlay_clicked();

        assert!(!ctl.state().is_open);
        assert_eq!(handled.disposition, Disposition::CONSUMED);
        assert_eq!(handled.snapshot.map(|s| s.is_open), Some(false));
    }

    #[test]
    fn overlay_click_on_closed_menu_is_consumed_without_publishing() {
        let (mut ctl, _host) = mounted(Behaviour::Default);

        let handled = ctl.overlay_clicked();

        assert_eq!(handled.snapshot, None);
        assert_eq!(handled.disposition, Disposition::CONSUMED);
    }

    #[test]
    fn menu_is_suspended_only_while_drag_moves() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        assert!(ctl.frame().menu.is_some());

        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        assert!(ctl.frame().menu.is_some());

        ctl.pointer_move(&mut host, PointerInput::mouse(140.0, 120.0));
        assert!(ctl.is_menu_suspended());
        assert!(ctl.frame().menu.is_none());

        ctl.pointer_up(&mut host, PointerInput::mouse(140.0, 120.0));
        assert!(!ctl.is_menu_suspended());
        assert!(ctl.frame().menu.is_some());
    }

    #[test]
    fn frame_passes_menu_items_through() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        ctl.pointer_up(&mut host, PointerInput::mouse(120.0, 120.0));

        let frame = ctl.frame();
        let menu = frame.menu.unwrap();
        assert_eq!(menu.items.to_vec(), vec!["home", "settings"]);
        assert!(menu.open);
        assert_eq!(menu.position, Position::new(100.0, 100.0));
        assert_eq!(frame.ball.scale, 0.0);
    }

    #[test]
    fn unmount_removes_every_listener() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));

        ctl.unmount(&mut host);

        assert!(host.attached.is_empty());
        assert!(ctl.listeners().is_empty());
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn mount_resets_state() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        drag(&mut ctl, &mut host, (150.0, 150.0), (300.0, 300.0));
        ctl.unmount(&mut host);

        let handled = ctl.mount(&mut host);

        assert_eq!(
            handled.snapshot,
            Some(InteractionState {
                position: Position::new(100.0, 100.0),
                is_open: false,
            })
        );
        assert_eq!(host.attached, Listeners::RESIZE);
    }

    #[test]
    fn repeated_pointer_down_restarts_session() {
        let (mut ctl, mut host) = mounted(Behaviour::Default);
        ctl.pointer_down(&mut host, PointerInput::mouse(120.0, 120.0));
        ctl.pointer_move(&mut host, PointerInput::mouse(130.0, 120.0));

        ctl.pointer_down(&mut host, PointerInput::mouse(200.0, 200.0));
        let handled = ctl.pointer_up(&mut host, PointerInput::mouse(200.0, 200.0));

        // The restarted session has not moved, so the release is a tap.
        assert_eq!(handled.snapshot.map(|s| s.is_open), Some(true));
        assert_eq!(ctl.state().position, Position::new(100.0, 110.0));
        assert_eq!(host.attached, Listeners::RESIZE);
    }
}
