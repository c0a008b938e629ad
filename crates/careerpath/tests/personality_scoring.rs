use careerpath::assessment::{
    calculate_scores, PersonalityScores, PersonalityTrait, Question, QuestionBank, QuestionWeight,
};
use careerpath::error::{AssessmentError, ConfigurationError, ValidationError};

fn single_question_bank(weight: QuestionWeight) -> Vec<Question> {
    PersonalityTrait::ALL
        .into_iter()
        .map(|personality_trait| Question {
            id: format!("{}-only", personality_trait.label()),
            text: "Statement".to_string(),
            category: personality_trait,
            weight,
        })
        .collect()
}

#[test]
fn bundled_bank_scores_every_answer_pattern_within_range() {
    let bank = QuestionBank::standard().expect("bundled questions load");

    for seed in 0..50u64 {
        let answers: Vec<i64> = (0..bank.len() as u64)
            .map(|index| ((index * 7 + seed * 3) % 5 + 1) as i64)
            .collect();
        let scores = bank.score(&answers).expect("valid answers score");

        for (personality_trait, value) in scores.iter() {
            assert!(
                (20..=100).contains(&value),
                "{personality_trait} scored {value} for seed {seed}"
            );
        }
    }
}

#[test]
fn bundled_bank_neutral_answers_score_sixty() {
    let bank = QuestionBank::standard().expect("bundled questions load");
    let answers = vec![3; bank.len()];

    let scores = bank.score(&answers).expect("neutral answers score");

    assert_eq!(scores, PersonalityScores::uniform(60).expect("valid"));
}

#[test]
fn bundled_bank_agreeing_with_everything_balances_reversed_items() {
    let bank = QuestionBank::standard().expect("bundled questions load");
    let answers = vec![5; bank.len()];

    let scores = bank.score(&answers).expect("answers score");

    // Every trait has two direct and two reversed items except conscientiousness (three direct).
    assert_eq!(scores.openness, 60);
    assert_eq!(scores.conscientiousness, 80);
    assert_eq!(scores.extraversion, 60);
    assert_eq!(scores.agreeableness, 60);
    assert_eq!(scores.neuroticism, 60);
}

#[test]
fn reverse_scored_one_equals_direct_five() {
    for answer in 1..=5i64 {
        let reversed = calculate_scores(
            &[answer; 5],
            &single_question_bank(QuestionWeight::Reversed),
        )
        .expect("reversed scores");
        let direct = calculate_scores(
            &[6 - answer; 5],
            &single_question_bank(QuestionWeight::Direct),
        )
        .expect("direct scores");
        assert_eq!(reversed, direct, "answer {answer}");
    }
}

#[test]
fn one_question_per_trait_at_maximum_scores_one_hundred() {
    let scores = calculate_scores(
        &[5, 5, 5, 5, 5],
        &single_question_bank(QuestionWeight::Direct),
    )
    .expect("scores compute");

    assert_eq!(
        serde_json::to_value(scores).expect("serialize"),
        serde_json::json!({
            "openness": 100,
            "conscientiousness": 100,
            "extraversion": 100,
            "agreeableness": 100,
            "neuroticism": 100,
        })
    );
}

#[test]
fn malformed_inputs_surface_typed_errors() {
    let questions = single_question_bank(QuestionWeight::Direct);

    assert!(matches!(
        calculate_scores(&[5, 5, 5, 5, 5, 5], &questions),
        Err(AssessmentError::Validation(
            ValidationError::AnswerCountMismatch { .. }
        ))
    ));
    assert!(matches!(
        calculate_scores(&[5, 5, 5, 5, 7], &questions),
        Err(AssessmentError::Validation(ValidationError::AnswerOutOfRange {
            position: 5,
            value: 7
        }))
    ));
    assert!(matches!(
        calculate_scores(&[], &[]),
        Err(AssessmentError::Configuration(
            ConfigurationError::TraitWithoutQuestions(PersonalityTrait::Openness)
        ))
    ));
}
