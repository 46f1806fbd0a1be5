mod common;

use std::time::Duration;

use common::{alive_indices, Harness};
use lifeboard_lib::controller::{Edit, FrameCause};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_drag_session_last_write_wins_single_frame() {
    let mut h = Harness::start(100, 30);
    h.board(4, 4, &[]).await;

    h.paint(&[(5, 1), (5, 0), (5, 1)]).await;

    let frame = h.next_frame().await;
    assert_eq!(frame.cause, FrameCause::Edited);
    assert_eq!(frame.generation, 0);
    assert_eq!(alive_indices(&frame.grid), vec![5]);

    h.assert_quiet(Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_last_value_can_clear_a_cell() {
    let mut h = Harness::start(100, 30);
    h.board(4, 4, &[5]).await;

    h.paint(&[(5, 1), (6, 1), (5, 0)]).await;

    let frame = h.next_frame().await;
    assert_eq!(alive_indices(&frame.grid), vec![6]);
}

#[tokio::test(start_paused = true)]
async fn test_hover_without_drag_is_ignored() {
    let mut h = Harness::start(100, 30);
    h.board(4, 4, &[]).await;

    h.handle.hover(Edit::alive(3)).unwrap();
    h.handle.hover(Edit::alive(4)).unwrap();
    h.handle.end_drag().unwrap();

    h.assert_quiet(Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_empty_drag_emits_nothing() {
    let mut h = Harness::start(100, 30);
    h.board(4, 4, &[]).await;

    h.handle.begin_drag().unwrap();
    h.handle.end_drag().unwrap();

    h.assert_quiet(Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_long_drag_flushes_once_per_window() {
    let mut h = Harness::start(100, 30);
    h.board(5, 5, &[]).await;

    h.handle.begin_drag().unwrap();
    h.handle.hover(Edit::alive(1)).unwrap();
    sleep(Duration::from_millis(10)).await;
    h.handle.hover(Edit::alive(2)).unwrap();
    sleep(Duration::from_millis(10)).await;
    h.handle.hover(Edit::alive(3)).unwrap();

    // The window opened by the first edit closes mid-drag.
    let first = h.next_frame().await;
    assert_eq!(first.cause, FrameCause::Edited);
    assert_eq!(alive_indices(&first.grid), vec![1, 2, 3]);

    h.handle.hover(Edit::alive(4)).unwrap();
    sleep(Duration::from_millis(10)).await;
    h.handle.end_drag().unwrap();

    let second = h.next_frame().await;
    assert_eq!(second.cause, FrameCause::Edited);
    assert_eq!(alive_indices(&second.grid), vec![1, 2, 3, 4]);

    h.assert_quiet(Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_edits_do_not_advance_generation_while_playing() {
    let mut h = Harness::start(100, 30);
    // Blinker keeps the timer productive.
    h.board(5, 5, &[11, 12, 13]).await;
    h.handle.toggle_play().unwrap();

    let tick = h.next_tick().await;
    assert_eq!(tick.generation, 1);

    h.paint(&[(0, 1)]).await;
    let edited = h.next_frame().await;
    assert_eq!(edited.cause, FrameCause::Edited);
    assert_eq!(edited.generation, 1);
    assert_eq!(edited.grid.get(0), Ok(1));
}
