use super::*;
use crate::{
    content::{STILL_CHOOSE_YOU, Story},
    input::mock::{MockInput, ScriptedInput},
};

const DELAY: u64 = DEFAULT_TURN_DELAY_MS as u64;

fn make_reader() -> Reader<Story<'static>, MockInput> {
    Reader::new(STILL_CHOOSE_YOU, MockInput::new(), ReaderConfig::default())
}

/// Accepts a turn at `now_ms` and ticks to its commit.
fn turn_and_settle<PS: PageSource, IN: InputProvider>(
    reader: &mut Reader<PS, IN>,
    direction: TurnDirection,
    now_ms: u64,
) -> u64 {
    assert_eq!(reader.request_turn(direction, now_ms), TurnOutcome::Accepted);
    let settled = now_ms + DELAY;
    let _ = reader.tick(settled);
    settled
}

struct FailingInput;

impl InputProvider for FailingInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Err(())
    }
}

/// Claims more pages than it can hand out.
struct ShortSource;

impl PageSource for ShortSource {
    fn page_count(&self) -> u16 {
        3
    }

    fn page_at(&self, index: u16) -> Option<Page<'_>> {
        const PAGES: [Page<'static>; 2] = [Page::new("one"), Page::new("two")];
        PAGES.get(index as usize).copied()
    }
}

#[test]
fn starts_on_first_page_with_only_forward_navigation() {
    let mut reader = make_reader();

    assert_eq!(reader.current_page_index(), 0);
    assert_eq!(reader.page_count(), 15);
    assert!(!reader.is_transitioning());
    assert!(reader.left_page().is_none());
    assert_eq!(
        reader.right_page().and_then(|page| page.title),
        Some("I'd Still Choose You")
    );
    assert_eq!(reader.previous_control(), ControlState::Disabled);
    assert_eq!(reader.next_control(), ControlState::Enabled);
    assert_eq!(
        reader.zones(),
        ZonesView {
            left_visible: false,
            right_visible: true,
        }
    );

    assert_eq!(reader.tick(0), TickResult::RenderRequested);
    assert_eq!(reader.tick(1), TickResult::NoRender);
}

#[test]
fn forward_turn_commits_only_after_delay() {
    let mut reader = make_reader();
    let _ = reader.tick(0);

    assert_eq!(
        reader.request_turn(TurnDirection::Forward, 1_000),
        TurnOutcome::Accepted
    );
    assert!(reader.is_transitioning());
    assert_eq!(reader.direction(), TurnDirection::Forward);
    assert_eq!(reader.current_page_index(), 0);
    assert_eq!(reader.pending_commit_ms(), Some(1_000 + DELAY));

    assert_eq!(reader.tick(1_000 + DELAY - 1), TickResult::RenderRequested);
    assert_eq!(reader.current_page_index(), 0);
    assert!(reader.is_transitioning());

    assert_eq!(reader.tick(1_000 + DELAY), TickResult::RenderRequested);
    assert_eq!(reader.current_page_index(), 1);
    assert!(!reader.is_transitioning());
    assert_eq!(reader.pending_commit_ms(), None);

    assert_eq!(reader.tick(1_000 + DELAY + 1), TickResult::NoRender);
}

#[test]
fn backward_on_first_page_changes_nothing() {
    let mut reader = make_reader();
    let _ = reader.tick(0);

    assert_eq!(
        reader.request_turn(TurnDirection::Backward, 10),
        TurnOutcome::IgnoredAtBound
    );
    assert_eq!(reader.current_page_index(), 0);
    assert!(!reader.is_transitioning());
    assert_eq!(reader.direction(), TurnDirection::Forward);
    assert_eq!(reader.tick(10 + DELAY), TickResult::NoRender);
    assert_eq!(reader.current_page_index(), 0);
}

#[test]
fn request_in_flight_is_dropped_without_second_commit() {
    let mut reader = make_reader();
    let settled = turn_and_settle(&mut reader, TurnDirection::Forward, 0);
    assert_eq!(reader.current_page_index(), 1);

    assert_eq!(
        reader.request_turn(TurnDirection::Forward, settled),
        TurnOutcome::Accepted
    );
    let due = reader.pending_commit_ms();

    assert_eq!(
        reader.request_turn(TurnDirection::Backward, settled + 50),
        TurnOutcome::IgnoredInFlight
    );
    assert_eq!(
        reader.request_turn(TurnDirection::Forward, settled + 100),
        TurnOutcome::IgnoredInFlight
    );
    assert_eq!(reader.direction(), TurnDirection::Forward);
    assert_eq!(reader.pending_commit_ms(), due);

    let _ = reader.tick(settled + DELAY);
    assert_eq!(reader.current_page_index(), 2);

    let _ = reader.tick(settled + 10 * DELAY);
    assert_eq!(reader.current_page_index(), 2);
}

#[test]
fn fourteen_turns_reach_the_end_of_the_story() {
    let mut reader = make_reader();
    let mut now_ms = 0;

    for _ in 0..14 {
        now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, now_ms);
    }

    assert_eq!(reader.current_page_index(), 14);
    assert!(reader.is_last_page());
    assert_eq!(reader.next_control(), ControlState::Disabled);
    assert_eq!(reader.previous_control(), ControlState::Enabled);
    assert!(!reader.zones().right_visible);
    assert!(reader.zones().left_visible);
    assert!(reader.right_page().is_some_and(|page| page.is_last_page));

    assert_eq!(
        reader.request_turn(TurnDirection::Forward, now_ms),
        TurnOutcome::IgnoredAtBound
    );
    let _ = reader.tick(now_ms + DELAY);
    assert_eq!(reader.current_page_index(), 14);
}

#[test]
fn backward_turn_returns_to_previous_page() {
    let mut reader = make_reader();
    let now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, 0);
    let now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, now_ms);

    let _ = turn_and_settle(&mut reader, TurnDirection::Backward, now_ms);

    assert_eq!(reader.current_page_index(), 1);
    assert_eq!(reader.direction(), TurnDirection::Backward);
    assert_eq!(
        reader.left_page().map(|page| page.content),
        STILL_CHOOSE_YOU.page_at(0).map(|page| page.content)
    );
}

#[test]
fn controls_disable_mid_turn_while_zones_stay_shown() {
    let mut reader = make_reader();
    let now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, 0);

    assert_eq!(
        reader.request_turn(TurnDirection::Forward, now_ms),
        TurnOutcome::Accepted
    );

    assert_eq!(reader.previous_control(), ControlState::Disabled);
    assert_eq!(reader.next_control(), ControlState::Disabled);
    assert_eq!(
        reader.zones(),
        ZonesView {
            left_visible: true,
            right_visible: true,
        }
    );
    assert_eq!(
        reader.tap_zone(TurnDirection::Backward, now_ms + 1),
        TurnOutcome::IgnoredInFlight
    );
    assert_eq!(
        reader.activate_control(TurnDirection::Backward, now_ms + 1),
        TurnOutcome::IgnoredInFlight
    );
}

#[test]
fn hidden_left_zone_ignores_taps() {
    let mut reader = make_reader();

    assert_eq!(
        reader.tap_zone(TurnDirection::Backward, 0),
        TurnOutcome::IgnoredAtBound
    );
    assert!(!reader.is_transitioning());
    assert_eq!(
        reader.tap_zone(TurnDirection::Forward, 0),
        TurnOutcome::Accepted
    );
}

#[test]
fn scripted_events_drop_rapid_repeats() {
    let events = [
        InputEvent::RotateCw,
        InputEvent::RotateCw,
        InputEvent::TapRight,
        InputEvent::Press,
    ];
    let mut reader = Reader::new(
        STILL_CHOOSE_YOU,
        ScriptedInput::new(&events),
        ReaderConfig::default(),
    );

    assert_eq!(reader.tick(0), TickResult::RenderRequested);
    assert!(reader.is_transitioning());
    assert_eq!(reader.current_page_index(), 0);

    let _ = reader.tick(DELAY);
    assert_eq!(reader.current_page_index(), 1);
    assert!(!reader.is_transitioning());
}

#[test]
fn scripted_events_turn_back_from_left_zone() {
    let events = [InputEvent::TapRight];
    let mut reader = Reader::new(
        STILL_CHOOSE_YOU,
        ScriptedInput::new(&events),
        ReaderConfig::default(),
    );
    let _ = reader.tick(0);
    let _ = reader.tick(DELAY);
    assert_eq!(reader.current_page_index(), 1);

    assert_eq!(
        reader.tap_zone(TurnDirection::Backward, DELAY + 10),
        TurnOutcome::Accepted
    );
    let _ = reader.tick(2 * DELAY + 10);
    assert_eq!(reader.current_page_index(), 0);
}

#[test]
fn input_errors_leave_state_untouched() {
    let mut reader = Reader::new(STILL_CHOOSE_YOU, FailingInput, ReaderConfig::default());

    assert_eq!(reader.tick(0), TickResult::RenderRequested);
    assert_eq!(reader.tick(1), TickResult::NoRender);
    assert_eq!(reader.current_page_index(), 0);
    assert!(!reader.is_transitioning());
}

#[test]
fn screen_reports_spread_and_turn_progress() {
    let mut reader = make_reader();
    let mut now_ms = 0;
    for _ in 0..3 {
        now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, now_ms);
    }
    let _ = reader.request_turn(TurnDirection::Forward, now_ms);

    let mut seen = None;
    reader.with_screen(now_ms + DELAY / 2, |screen| match screen {
        Screen::Spread {
            title,
            left,
            right,
            navigation,
            animation,
            ..
        } => {
            seen = Some((
                title == "I'd Still Choose You",
                left.map(|page| page.number),
                right.map(|page| page.number),
                navigation,
                animation,
            ));
        }
    });

    let (title_matches, left, right, navigation, animation) = seen.unwrap();
    assert!(title_matches);
    assert_eq!(left, Some(3));
    assert_eq!(right, Some(4));
    assert_eq!(
        navigation,
        NavigationView {
            previous: ControlState::Disabled,
            next: ControlState::Disabled,
            current: 4,
            total: 15,
        }
    );
    assert_eq!(
        animation,
        Some(AnimationFrame {
            kind: AnimationKind::TurnForward,
            progress_pct: 50,
        })
    );
}

#[test]
fn last_page_surfaces_end_marker_and_byline() {
    let mut reader = make_reader();
    let mut now_ms = 0;
    for _ in 0..14 {
        now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, now_ms);
    }

    let mut end = None;
    reader.with_screen(now_ms, |screen| match screen {
        Screen::Spread {
            byline,
            left,
            right,
            animation,
            ..
        } => {
            end = Some((
                byline == "Riez",
                left.is_some_and(|page| !page.is_last_page),
                right.map(|page| (page.number, page.is_last_page)),
                animation.is_none(),
            ));
        }
    });

    assert_eq!(end, Some((true, true, Some((15, true)), true)));
}

#[test]
fn empty_story_never_turns() {
    let story = Story::new("Empty", "Nobody", &[]);
    let mut reader = Reader::new(story, MockInput::new(), ReaderConfig::default());

    assert!(reader.right_page().is_none());
    assert!(reader.left_page().is_none());
    assert_eq!(reader.previous_control(), ControlState::Disabled);
    assert_eq!(reader.next_control(), ControlState::Disabled);
    assert_eq!(
        reader.request_turn(TurnDirection::Forward, 0),
        TurnOutcome::IgnoredAtBound
    );
    assert_eq!(reader.current_page_index(), 0);
}

#[test]
fn missing_page_renders_as_empty_slot() {
    let mut reader = Reader::new(ShortSource, MockInput::new(), ReaderConfig::default());
    let now_ms = turn_and_settle(&mut reader, TurnDirection::Forward, 0);
    let _ = turn_and_settle(&mut reader, TurnDirection::Forward, now_ms);

    assert_eq!(reader.current_page_index(), 2);
    assert!(reader.right_page().is_none());
    assert_eq!(reader.left_page().map(|page| page.content), Some("two"));

    let mut right_missing = false;
    reader.with_screen(0, |screen| match screen {
        Screen::Spread { right, .. } => right_missing = right.is_none(),
    });
    assert!(right_missing);
}

#[test]
fn custom_turn_delay_is_honoured() {
    let mut reader = Reader::new(
        STILL_CHOOSE_YOU,
        MockInput::new(),
        ReaderConfig::default().with_turn_delay_ms(50),
    );

    let _ = reader.request_turn(TurnDirection::Forward, 0);
    let _ = reader.tick(49);
    assert_eq!(reader.current_page_index(), 0);
    let _ = reader.tick(50);
    assert_eq!(reader.current_page_index(), 1);
}

#[test]
fn index_stays_in_bounds_for_arbitrary_request_sequences() {
    let mut reader = make_reader();
    let mut seed = 0x2545_f491_u32;
    let mut now_ms = 0u64;

    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        let direction = if seed & 0b11 == 0 {
            TurnDirection::Backward
        } else {
            TurnDirection::Forward
        };
        let before = reader.current_page_index();
        let was_transitioning = reader.is_transitioning();
        let outcome = reader.request_turn(direction, now_ms);

        if was_transitioning {
            assert_eq!(outcome, TurnOutcome::IgnoredInFlight);
        }
        assert_eq!(reader.current_page_index(), before);

        now_ms += (seed >> 8) as u64 % 300;
        let _ = reader.tick(now_ms);

        let index = reader.current_page_index();
        assert!(index < reader.page_count());
        assert!(index.abs_diff(before) <= 1);
    }
}
