use super::*;

const A: ParticipantId = ParticipantId(0);
const B: ParticipantId = ParticipantId(1);
const C: ParticipantId = ParticipantId(2);

fn flow_with_roster(names: &[&str]) -> GameFlow {
    let mut flow = GameFlow::default();
    flow.start().expect("start");
    let form = flow.roster_mut().expect("roster");
    form.set_count(names.len() as i64);
    form.submit_count().expect("count");
    for (index, name) in names.iter().enumerate() {
        form.set_name(index, *name).expect("name");
    }
    flow.submit_names().expect("names");
    flow
}

#[test]
fn start_opens_roster_with_default_count() {
    let mut flow = GameFlow::default();
    assert_eq!(flow.kind(), ScreenKind::Entry);
    assert_eq!(
        flow.start().expect("start"),
        vec![FlowEvent::ScreenChanged(ScreenKind::Roster)]
    );
    assert_eq!(flow.roster_mut().expect("roster").count(), 10);
}

#[test]
fn submitting_names_builds_participants_for_the_engine() {
    let flow = flow_with_roster(&["A", "", "C"]);
    let engine = flow.engine().expect("game screen");
    let names: Vec<_> = engine.participants().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "Participant 2", "C"]);
}

#[test]
fn select_emits_cues_and_ignores_invalid_clicks() {
    let mut flow = flow_with_roster(&["A", "B", "C"]);
    assert_eq!(flow.select(A).expect("start"), vec![FlowEvent::Cue(Cue::Select)]);
    assert_eq!(
        flow.select(A).expect("self"),
        vec![FlowEvent::Ignored(IgnoreReason::SelfNomination)]
    );
    assert_eq!(flow.select(B).expect("nominate"), vec![FlowEvent::Cue(Cue::Select)]);
}

#[test]
fn completion_hands_off_to_summary_after_the_delay() {
    let mut flow = flow_with_roster(&["A", "B", "C"]);
    let t0 = Instant::now();

    flow.select(A).expect("start");
    flow.select(B).expect("nominate");
    assert_eq!(
        flow.classify(Outcome::Do, t0).expect("classify"),
        vec![FlowEvent::Cue(Cue::Connect)]
    );
    flow.select(C).expect("nominate");
    assert_eq!(
        flow.classify(Outcome::Yut, t0).expect("classify"),
        vec![
            FlowEvent::Cue(Cue::Connect),
            FlowEvent::GameFinished { edges: 2 }
        ]
    );

    let delay = flow.settings().handoff_delay;
    assert_eq!(flow.next_deadline(), Some(t0 + delay));
    assert!(flow.poll(t0 + delay / 2).is_empty());
    assert_eq!(flow.kind(), ScreenKind::Game);

    let events = flow.poll(t0 + delay);
    assert_eq!(
        events,
        vec![
            FlowEvent::ScreenChanged(ScreenKind::Summary),
            FlowEvent::Cue(Cue::Celebrate)
        ]
    );
    let Screen::Summary(stage) = flow.screen() else {
        panic!("expected summary screen");
    };
    assert_eq!(stage.summary.total_edges, 2);
    assert_eq!(stage.summary.count(Outcome::Do), 1);
    assert_eq!(stage.summary.count(Outcome::Yut), 1);
    assert!(flow.is_celebrating());
}

#[test]
fn celebration_ends_after_its_duration() {
    let mut flow = flow_with_roster(&["A", "B"]);
    let t0 = Instant::now();
    flow.select(A).expect("start");
    flow.select(B).expect("nominate");
    flow.classify(Outcome::Mo, t0).expect("classify");

    let handoff = t0 + flow.settings().handoff_delay;
    flow.poll(handoff);
    let celebration = flow.settings().celebration;
    assert!(flow.poll(handoff + celebration - Duration::from_millis(1)).is_empty());
    assert_eq!(
        flow.poll(handoff + celebration),
        vec![FlowEvent::CelebrationEnded]
    );
    assert!(!flow.is_celebrating());
    assert_eq!(flow.next_deadline(), None);
}

#[test]
fn cancel_keeps_edges_untouched() {
    let mut flow = flow_with_roster(&["A", "B", "C"]);
    flow.select(A).expect("start");
    flow.select(B).expect("nominate");
    assert!(flow.cancel_classification().expect("cancel").is_empty());
    let engine = flow.engine().expect("engine");
    assert!(engine.edges().is_empty());
    assert!(engine.participants().iter().all(|p| !p.nominated));
}

#[test]
fn restart_clears_everything_and_resets_the_count_prompt() {
    let settings = FlowSettings {
        default_participant_count: 6,
        handoff_delay: Duration::ZERO,
        celebration: Duration::ZERO,
    };
    let mut flow = GameFlow::new(settings);
    flow.start().expect("start");
    let form = flow.roster_mut().expect("roster");
    form.set_count(2);
    form.submit_count().expect("count");
    flow.submit_names().expect("names");
    flow.select(A).expect("start");
    flow.select(B).expect("nominate");
    let now = Instant::now();
    flow.classify(Outcome::Gae, now).expect("classify");
    flow.poll(now);
    assert_eq!(flow.kind(), ScreenKind::Summary);

    assert_eq!(
        flow.restart().expect("restart"),
        vec![FlowEvent::ScreenChanged(ScreenKind::Entry)]
    );
    assert!(flow.engine().is_none());
    flow.start().expect("start again");
    assert_eq!(flow.roster_mut().expect("roster").count(), 6);
}

#[test]
fn operations_on_the_wrong_screen_are_errors() {
    let mut flow = GameFlow::default();
    assert!(matches!(
        flow.select(A),
        Err(GameError::WrongScreen { expected: "game", actual: "entry", .. })
    ));
    assert!(matches!(
        flow.restart(),
        Err(GameError::WrongScreen { operation: "restart", .. })
    ));
    flow.start().expect("start");
    assert!(matches!(
        flow.start(),
        Err(GameError::WrongScreen { actual: "roster", .. })
    ));
    assert!(matches!(
        flow.submit_names(),
        Err(GameError::InvalidPhase { operation: "submit_names", .. })
    ));
}
