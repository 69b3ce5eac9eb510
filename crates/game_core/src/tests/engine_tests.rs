use super::*;
use crate::domain::participants_from_names;

const A: ParticipantId = ParticipantId(0);
const B: ParticipantId = ParticipantId(1);
const C: ParticipantId = ParticipantId(2);

fn engine(names: &[&str]) -> TurnEngine {
    TurnEngine::new(participants_from_names(names.iter().copied()))
}

#[test]
fn first_selection_sets_cursor_without_edge() {
    let mut engine = engine(&["A", "B", "C"]);
    assert_eq!(engine.cursor(), None);

    assert_eq!(engine.select(B), Ok(SelectOutcome::Started(B)));
    assert_eq!(engine.state(), TurnState::AwaitingNomination { current: B });
    assert_eq!(engine.first_selector(), Some(B));
    assert!(engine.edges().is_empty());
}

#[test]
fn three_player_walkthrough_completes_with_two_edges() {
    let mut engine = engine(&["A", "B", "C"]);
    engine.select(A).expect("start");

    assert_eq!(
        engine.select(B),
        Ok(SelectOutcome::Pending(PendingNomination { from: A, to: B }))
    );
    let step = engine.classify(Outcome::Do).expect("classify");
    assert_eq!(
        step,
        ClassifyOutcome::Continue {
            edge: Edge {
                from: A,
                to: B,
                outcome: Outcome::Do
            },
            next: B
        }
    );
    assert_eq!(engine.cursor(), Some(B));
    assert!(engine.participant(B).expect("B").nominated);

    engine.select(C).expect("nominate C");
    let done = engine.classify(Outcome::Yut).expect("classify");
    let ClassifyOutcome::Complete { edges } = done else {
        panic!("expected completion, got {done:?}");
    };
    assert_eq!(
        edges,
        vec![
            Edge {
                from: A,
                to: B,
                outcome: Outcome::Do
            },
            Edge {
                from: B,
                to: C,
                outcome: Outcome::Yut
            },
        ]
    );
    assert!(engine.is_complete());
    assert_eq!(engine.cursor(), Some(C));
}

#[test]
fn self_nomination_is_ignored() {
    let mut engine = engine(&["A", "B"]);
    engine.select(A).expect("start");
    assert_eq!(
        engine.select(A),
        Ok(SelectOutcome::Ignored(IgnoreReason::SelfNomination))
    );
    assert_eq!(engine.state(), TurnState::AwaitingNomination { current: A });
}

#[test]
fn already_nominated_participant_is_ignored() {
    let mut engine = engine(&["A", "B", "C", "D"]);
    engine.select(A).expect("start");
    engine.select(B).expect("nominate");
    engine.classify(Outcome::Gae).expect("classify");
    engine.select(C).expect("nominate");
    engine.classify(Outcome::Mo).expect("classify");

    assert_eq!(
        engine.select(B),
        Ok(SelectOutcome::Ignored(IgnoreReason::AlreadyNominated))
    );
    assert_eq!(engine.edges().len(), 2);
}

#[test]
fn first_selector_can_never_be_nominated() {
    let mut engine = engine(&["A", "B", "C"]);
    engine.select(A).expect("start");
    engine.select(B).expect("nominate");
    engine.classify(Outcome::Geol).expect("classify");

    assert_eq!(
        engine.select(A),
        Ok(SelectOutcome::Ignored(IgnoreReason::FirstSelector))
    );
    assert!(!engine.is_selectable(A));
    assert!(engine.is_selectable(C));
}

#[test]
fn cancel_restores_nomination_without_mutation() {
    let mut engine = engine(&["A", "B", "C"]);
    engine.select(A).expect("start");
    engine.select(C).expect("nominate");
    let before = engine.participants().to_vec();

    assert_eq!(engine.cancel_classification(), Ok(A));
    assert_eq!(engine.state(), TurnState::AwaitingNomination { current: A });
    assert!(engine.edges().is_empty());
    assert_eq!(engine.participants(), before.as_slice());

    engine.select(B).expect("nominate again");
    assert_eq!(engine.pending(), Some(PendingNomination { from: A, to: B }));
}

#[test]
fn operations_outside_their_phase_are_errors() {
    let mut engine = engine(&["A", "B", "C"]);
    assert!(matches!(
        engine.classify(Outcome::Do),
        Err(GameError::InvalidPhase { operation: "classify", .. })
    ));
    assert!(matches!(
        engine.cancel_classification(),
        Err(GameError::InvalidPhase { .. })
    ));

    engine.select(A).expect("start");
    engine.select(B).expect("nominate");
    assert!(matches!(
        engine.select(C),
        Err(GameError::InvalidPhase { operation: "select", .. })
    ));
}

#[test]
fn unknown_participant_is_an_error() {
    let mut engine = engine(&["A", "B"]);
    assert_eq!(
        engine.select(ParticipantId(7)),
        Err(GameError::UnknownParticipant(ParticipantId(7)))
    );
}

#[test]
fn completed_engine_rejects_further_selection() {
    let mut engine = engine(&["A", "B"]);
    engine.select(B).expect("start");
    engine.select(A).expect("nominate");
    assert!(matches!(
        engine.classify(Outcome::BackDo),
        Ok(ClassifyOutcome::Complete { .. })
    ));
    assert!(matches!(
        engine.select(A),
        Err(GameError::InvalidPhase { operation: "select", .. })
    ));
}

#[test]
fn completion_predicate_excludes_only_the_first_selector() {
    let mut roster = participants_from_names(["A", "B", "C", "D"]);
    assert!(!all_accounted_for(&roster, A));

    roster[1].nominated = true;
    roster[2].nominated = true;
    assert!(!all_accounted_for(&roster, A));

    roster[3].nominated = true;
    assert!(all_accounted_for(&roster, A));
    assert!(!all_accounted_for(&roster, B));
}

#[test]
fn any_valid_click_order_finishes_with_n_minus_one_edges() {
    for n in 2..=12u32 {
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let mut engine = TurnEngine::new(participants_from_names(names));
        let start = ParticipantId(n / 2);
        engine.select(start).expect("start");

        // Walk nominees in reverse key order, clicking invalid targets along the way.
        let mut turn = 0;
        while !engine.is_complete() {
            let current = engine.cursor().expect("cursor");
            assert_eq!(
                engine.select(current),
                Ok(SelectOutcome::Ignored(IgnoreReason::SelfNomination))
            );
            let target = (0..n)
                .rev()
                .map(ParticipantId)
                .find(|id| engine.is_selectable(*id))
                .expect("a selectable nominee exists until completion");
            engine.select(target).expect("nominate");
            engine
                .classify(Outcome::ALL[turn % Outcome::ALL.len()])
                .expect("classify");
            turn += 1;
        }

        let edges = engine.edges();
        assert_eq!(edges.len(), n as usize - 1);
        assert!(edges.iter().all(|e| e.from != e.to));
        assert!(edges.iter().all(|e| e.to != start));
        let mut nominees: Vec<_> = edges.iter().map(|e| e.to).collect();
        nominees.sort();
        nominees.dedup();
        assert_eq!(nominees.len(), edges.len());
    }
}

#[test]
fn instruction_tracks_state() {
    let mut engine = engine(&["민지", "B"]);
    assert_eq!(engine.instruction(), "시작할 플레이어를 선택하세요");
    engine.select(A).expect("start");
    assert_eq!(engine.instruction(), "민지님, 다음 플레이어를 지목하세요");
    engine.select(B).expect("nominate");
    assert_eq!(engine.instruction(), "결과를 선택하세요");
}

#[test]
fn single_participant_roster_completes_on_first_selection() {
    let mut engine = engine(&["solo"]);
    engine.select(A).expect("start");
    assert!(engine.is_complete());
    assert!(engine.edges().is_empty());
}
