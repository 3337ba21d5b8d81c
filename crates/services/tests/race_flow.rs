use std::sync::Arc;

use racer_core::catalog::builtin_bank;
use racer_core::model::{Challenge, Question, QuestionBank, Rank, Tier};
use racer_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{AnswerVerdict, Clock, RaceError, RaceService};

#[test]
fn full_race_over_the_builtin_bank_finishes_with_a_scorecard() {
    let service = RaceService::new(Clock::fixed(fixed_now()), Arc::new(builtin_bank()));
    let mut session = service
        .start_race_with_rng(Tier::Advanced, &mut StdRng::seed_from_u64(42))
        .unwrap();

    while !session.is_complete() {
        let answer = session.current_question().unwrap().answer_line().to_string();
        let outcome = service.answer_current(&mut session, &answer).unwrap();
        assert!(matches!(outcome.verdict, AnswerVerdict::Correct { .. }));
    }

    let card = service.finish(&mut session).unwrap();
    assert_eq!(card.score() as usize, session.total_questions());
    assert_eq!(card.accuracy(), 100);
    assert_eq!(card.elapsed_seconds(), 0);
    assert_eq!(card.final_score(), 100);
    assert_eq!(card.rank(), Rank::S);
}

#[test]
fn a_substituted_bank_drives_the_whole_flow() {
    // The engine takes the bank as data, so tests can pin the content.
    let challenge = Challenge::new(
        "left = 1\nright = 2\nprint(left + right)",
        vec![
            Question::new("Where is left set?", 1).unwrap(),
            Question::new("Which line prints the sum?", 3).unwrap(),
        ],
    )
    .unwrap();
    let bank = QuestionBank::new(vec![challenge], Vec::new(), Vec::new());
    let service = RaceService::new(Clock::fixed(fixed_now()), Arc::new(bank));

    let mut session = service
        .start_race_with_rng(Tier::Beginner, &mut StdRng::seed_from_u64(0))
        .unwrap();

    // Miss the first question once, then recover.
    let outcome = service.answer_current(&mut session, "3").unwrap();
    assert!(matches!(
        outcome.verdict,
        AnswerVerdict::Incorrect { correct_line: 1 }
    ));
    let outcome = service.answer_current(&mut session, "1").unwrap();
    assert!(matches!(
        outcome.verdict,
        AnswerVerdict::Correct { score_delta: 0, .. }
    ));
    let outcome = service.answer_current(&mut session, "3").unwrap();
    assert!(matches!(
        outcome.verdict,
        AnswerVerdict::Correct { score_delta: 1, .. }
    ));
    assert!(outcome.progress.is_complete);

    let card = service.finish(&mut session).unwrap();
    assert_eq!(card.score(), 1);
    assert_eq!(card.accuracy(), 50);

    // Finishing again returns the same card; answering again fails.
    assert_eq!(service.finish(&mut session).unwrap(), card);
    assert!(matches!(
        service.answer_current(&mut session, "1").unwrap_err(),
        RaceError::Completed
    ));
}

#[test]
fn empty_tier_surfaces_at_start() {
    let bank = QuestionBank::new(Vec::new(), Vec::new(), Vec::new());
    let service = RaceService::new(Clock::fixed(fixed_now()), Arc::new(bank));

    let err = service
        .start_race_with_rng(Tier::Intermediate, &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, RaceError::EmptyTier(Tier::Intermediate)));
}

#[test]
fn every_new_race_draws_a_fresh_session() {
    let service = RaceService::new(Clock::fixed(fixed_now()), Arc::new(builtin_bank()));
    let mut rng = StdRng::seed_from_u64(9);

    let mut first = service.start_race_with_rng(Tier::Beginner, &mut rng).unwrap();
    let answer = first.current_question().unwrap().answer_line().to_string();
    service.answer_current(&mut first, &answer).unwrap();

    let second = service.start_race_with_rng(Tier::Beginner, &mut rng).unwrap();
    assert_eq!(second.question_index(), 0);
    assert_eq!(second.score(), 0);
}
