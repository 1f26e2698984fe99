mod common;

use mindcheck_core::models::answer::UNANSWERED_VALUE;
use mindcheck_instruments::error::InstrumentError;
use mindcheck_instruments::flow::{FlowState, Progress, QuestionFlow};
use mindcheck_storage::results::ResultStore;
use mindcheck_storage::session::MemorySessionStore;

use common::fixture_catalog;

fn start(test_id: &str) -> (QuestionFlow<MemorySessionStore>, ResultStore<MemorySessionStore>) {
    let session = MemorySessionStore::new();
    let flow = QuestionFlow::start(
        &fixture_catalog(),
        test_id,
        ResultStore::new(session.clone()),
    )
    .unwrap();
    (flow, ResultStore::new(session))
}

#[test]
fn unknown_test_is_not_found() {
    let result = QuestionFlow::start(
        &fixture_catalog(),
        "no-such-test",
        ResultStore::new(MemorySessionStore::new()),
    );
    assert!(matches!(result, Err(InstrumentError::UnknownTest(id)) if id == "no-such-test"));
}

#[test]
fn run_starts_on_first_question_with_everything_unanswered() {
    let (flow, _) = start("depression-phq9");
    assert_eq!(flow.state(), FlowState::Answering { index: 0 });
    assert_eq!(flow.current_question().unwrap().id, "q1");
    assert_eq!(flow.answers().len(), 9);
    assert!(flow.answers().iter().all(|a| a.value == UNANSWERED_VALUE));
    assert_eq!(flow.progress(), Progress { answered: 0, total: 9 });
    assert!(flow.result().is_none());
}

#[test]
fn answering_every_question_completes_and_stores_one_result() {
    let (mut flow, results) = start("depression-phq9");

    for index in 0..8 {
        let state = flow.answer(index, 1).unwrap();
        assert_eq!(state, FlowState::Answering { index: index + 1 });
        assert!(results.read_all().unwrap().is_empty());
    }
    assert_eq!(flow.answer(8, 1).unwrap(), FlowState::Completed);

    let result = flow.result().unwrap();
    assert_eq!(result.score, 9);
    assert_eq!(result.severity.as_deref(), Some("mild"));
    assert_eq!(result.run_id, flow.run_id());
    assert!(result.answers.iter().all(|a| a.answer == "Several days"));

    let stored = results.read_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(&stored[0], result);
    assert!(flow.current_question().is_none());
}

#[test]
fn completed_run_rejects_further_answers() {
    let (mut flow, results) = start("overlap-test");
    flow.answer(0, 0).unwrap();
    flow.answer(1, 0).unwrap();

    assert!(matches!(
        flow.answer(1, 1),
        Err(InstrumentError::RunCompleted(id)) if id == flow.run_id()
    ));
    assert_eq!(results.read_all().unwrap().len(), 1);
}

#[test]
fn answer_must_target_the_current_question() {
    let (mut flow, _) = start("depression-phq9");
    assert!(matches!(
        flow.answer(3, 0),
        Err(InstrumentError::OutOfSequence { index: 3, current: 0 })
    ));
    assert_eq!(flow.state(), FlowState::Answering { index: 0 });
}

#[test]
fn option_must_exist() {
    let (mut flow, _) = start("depression-phq9");
    assert!(matches!(
        flow.answer(0, 4),
        Err(InstrumentError::InvalidOption { option: 4, .. })
    ));
    assert_eq!(flow.answers()[0].value, UNANSWERED_VALUE);
}

#[test]
fn skipped_question_contributes_the_sentinel() {
    let (mut flow, _) = start("depression-phq9");
    for index in 0..5 {
        flow.answer(index, 1).unwrap();
    }
    assert_eq!(flow.skip(5), FlowState::Answering { index: 6 });
    for index in 6..9 {
        flow.answer(index, 1).unwrap();
    }

    let result = flow.result().unwrap();
    // Eight answers of one point plus the sentinel.
    assert_eq!(result.score, 7);
    assert_eq!(result.answers[5].value, UNANSWERED_VALUE);
    assert!(result.answers[5].answer.is_empty());
}

#[test]
fn skipped_item_scores_one_less_than_answering_zero() {
    let (mut skipped, _) = start("depression-phq9");
    let (mut zeroed, _) = start("depression-phq9");

    skipped.skip(0);
    zeroed.answer(0, 0).unwrap();
    for index in 1..9 {
        skipped.answer(index, 2).unwrap();
        zeroed.answer(index, 2).unwrap();
    }

    let skipped_total = skipped.result().unwrap().score;
    let zeroed_total = zeroed.result().unwrap().score;
    assert_eq!(zeroed_total - skipped_total, 1);
}

#[test]
fn skip_is_a_no_op_on_the_last_question() {
    let (mut flow, results) = start("overlap-test");
    flow.answer(0, 1).unwrap();
    assert_eq!(flow.skip(1), FlowState::Answering { index: 1 });
    assert!(results.read_all().unwrap().is_empty());
}

#[test]
fn skip_and_back_ignore_a_stale_index() {
    let (mut flow, _) = start("depression-phq9");
    flow.answer(0, 0).unwrap();
    assert_eq!(flow.skip(0), FlowState::Answering { index: 1 });
    assert_eq!(flow.back(4), FlowState::Answering { index: 1 });
}

#[test]
fn back_is_a_no_op_on_the_first_question() {
    let (mut flow, _) = start("depression-phq9");
    assert_eq!(flow.back(0), FlowState::Answering { index: 0 });
}

#[test]
fn back_keeps_the_recorded_answer() {
    let (mut flow, _) = start("depression-phq9");
    flow.answer(0, 3).unwrap();
    assert_eq!(flow.back(1), FlowState::Answering { index: 0 });
    assert_eq!(flow.answers()[0].value, 3);
    assert_eq!(flow.answers()[0].answer, "Nearly every day");
    assert_eq!(flow.progress(), Progress { answered: 1, total: 9 });

    // Answering again overwrites the earlier choice.
    flow.answer(0, 2).unwrap();
    assert_eq!(flow.answers()[0].value, 2);
}

#[test]
fn back_then_skip_leaves_the_earlier_answer_in_place() {
    let (mut flow, _) = start("depression-phq9");
    flow.answer(0, 2).unwrap();
    flow.back(1);
    flow.skip(0);
    assert_eq!(flow.answers()[0].value, 2);
}

#[test]
fn total_below_every_range_records_no_severity() {
    let (mut flow, results) = start("depression-phq9");
    for index in 0..8 {
        flow.skip(index);
    }
    flow.answer(8, 0).unwrap();

    let stored = results.read_all().unwrap();
    assert_eq!(stored[0].score, -8);
    assert_eq!(stored[0].severity, None);
    assert_eq!(stored[0].description, None);
}

#[test]
fn separate_runs_append_separate_results() {
    let session = MemorySessionStore::new();
    let catalog = fixture_catalog();
    for _ in 0..2 {
        let mut flow =
            QuestionFlow::start(&catalog, "overlap-test", ResultStore::new(session.clone()))
                .unwrap();
        flow.answer(0, 1).unwrap();
        flow.answer(1, 1).unwrap();
    }

    let stored = ResultStore::new(session).read_all().unwrap();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].run_id, stored[1].run_id);
    assert_eq!(stored[0].severity.as_deref(), Some("high"));
}
