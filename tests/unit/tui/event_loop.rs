use super::*;
use crossterm::event::KeyCode;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn quit_key_stops_the_loop() {
    let mut el = EventLoop::default();
    el.bind_quit(Key::simple(KeyCode::Char('q')));
    let handle = el.handle();

    handle.send(InputEvent::key(KeyCode::Char('x')));
    handle.send(InputEvent::key(KeyCode::Char('q')));
    handle.send(InputEvent::key(KeyCode::Char('y')));

    assert_eq!(
        el.next_event(),
        Some(LoopEvent::Input(InputEvent::key(KeyCode::Char('x'))))
    );
    assert_eq!(el.next_event(), None);
}

#[test]
fn stop_from_another_thread_ends_the_loop() {
    let mut el = EventLoop::default();
    let handle = el.handle();
    std::thread::spawn(move || {
        handle.send(InputEvent::Resize(100, 40));
        handle.stop();
    })
    .join()
    .unwrap();

    assert_eq!(el.next_event(), Some(LoopEvent::Input(InputEvent::Resize(100, 40))));
    assert_eq!(el.next_event(), None);
}

#[test]
fn bound_handlers_run_and_may_continue() {
    let hits = Rc::new(Cell::new(0));
    let mut el = EventLoop::default();
    let counter = hits.clone();
    el.bind(Key::simple(KeyCode::Char('r')), move || {
        counter.set(counter.get() + 1);
        Flow::Continue
    });
    assert!(el.is_bound(&Key::simple(KeyCode::Char('r'))));

    let handle = el.handle();
    handle.send(InputEvent::key(KeyCode::Char('r')));
    handle.send(InputEvent::key(KeyCode::Char('r')));
    handle.stop();

    let mut seen = 0;
    while el.next_event().is_some() {
        seen += 1;
    }
    assert_eq!(seen, 2);
    assert_eq!(hits.get(), 2);
}

#[test]
fn idle_loop_emits_ticks() {
    let mut el = EventLoop::new(Some(Duration::from_millis(5)));
    assert_eq!(el.next_event(), Some(LoopEvent::Tick));
    assert_eq!(el.next_event(), Some(LoopEvent::Tick));

    el.handle().stop();
    assert_eq!(el.next_event(), None);
}

#[test]
fn slow_tick_handler_does_not_cause_a_tick_burst() {
    let tick = Duration::from_millis(50);
    let mut el = EventLoop::new(Some(tick));
    assert_eq!(el.next_event(), Some(LoopEvent::Tick));

    // Several intervals pass while the tick is being handled.
    std::thread::sleep(tick * 6);
    assert_eq!(el.next_event(), Some(LoopEvent::Tick));

    let started = Instant::now();
    assert_eq!(el.next_event(), Some(LoopEvent::Tick));
    assert!(started.elapsed() >= tick / 2, "{:?}", started.elapsed());
}

#[test]
fn zero_tick_disables_ticking() {
    let mut el = EventLoop::new(Some(Duration::ZERO));
    el.handle().stop();
    assert_eq!(el.next_event(), None);
}

#[test]
fn handle_reports_dropped_loop() {
    let el = EventLoop::default();
    let handle = el.handle();
    drop(el);
    assert!(!handle.stop());
}
