//! Whole-document extraction scenarios
//!
//! Documents are assembled through the `testing::QuestionDoc` fixture builder and
//! verified field by field: type, stem, answers, correctness, solution, metadata,
//! decoded taxonomy, and the failure list for malformed blocks.

use exparse::extract::{
    extract_questions, CorrectAnswer, ExtractionError, Extractor, QuestionType,
};
use exparse::testing::{sample_table, QuestionDoc};

#[test]
fn test_multiple_choice_block_end_to_end() {
    let doc = QuestionDoc::new()
        .block(
            "%[Nguồn: Đề A]\n%[0D1N1-5]\nWhich statement is true?\n\
             \\choice{wrong}{*right}{wrong}{wrong}\n\\loigiai{because...}",
        )
        .build();
    let table = sample_table();
    let extraction = Extractor::with_table(&table).extract(&doc);

    assert!(extraction.is_clean());
    assert_eq!(extraction.questions.len(), 1);
    let q = &extraction.questions[0];

    assert_eq!(q.question_type, QuestionType::MultipleChoice);
    assert_eq!(q.content, "Which statement is true?");
    assert_eq!(q.source.as_deref(), Some("Đề A"));
    assert_eq!(q.solution.as_deref(), Some("because..."));

    assert_eq!(q.answers.len(), 4);
    assert!(q.answers[1].is_correct);
    assert_eq!(q.answers[1].content, "right");
    assert_eq!(
        q.correct_answer,
        Some(CorrectAnswer::Single("right".to_string()))
    );

    let id = q.question_id.as_ref().expect("QuestionID should decode");
    assert_eq!(id.grade.description.as_deref(), Some("Lớp 10"));
    assert_eq!(id.subject.description.as_deref(), Some("Đại số"));
    assert_eq!(
        id.chapter.as_ref().and_then(|s| s.description.as_deref()),
        Some("Mệnh đề và tập hợp")
    );
    assert_eq!(id.level.description.as_deref(), Some("Nhận biết"));
    assert_eq!(
        id.lesson.as_ref().and_then(|s| s.description.as_deref()),
        Some("Mệnh đề")
    );
}

#[test]
fn test_round_trip_spans() {
    let doc = QuestionDoc::new()
        .raw("Preamble text.\n\n")
        .block("Stem one. \\choice{a}{*b}")
        .raw("Between blocks.\n")
        .named_block("bt", "Stem two, an essay.")
        .build();
    let extraction = extract_questions(&doc);

    assert_eq!(extraction.questions.len(), 2);
    for q in &extraction.questions {
        assert_eq!(&doc[q.span.clone()], q.raw_content);
        assert!(q.raw_content.starts_with("\\begin{"));
        assert!(q.raw_content.ends_with('}'));
    }
}

#[test]
fn test_essay_fallback_has_no_answers() {
    let doc = QuestionDoc::new()
        .block("%[Nguồn: Đề B]\nDiscuss the mean value theorem.\n\\loigiai{open ended}")
        .build();
    let extraction = extract_questions(&doc);

    assert_eq!(extraction.questions.len(), 1);
    let q = &extraction.questions[0];
    assert_eq!(q.question_type, QuestionType::Essay);
    assert!(q.answers.is_empty());
    assert_eq!(q.correct_answer, None);
    assert_eq!(q.content, "Discuss the mean value theorem.");
}

#[test]
fn test_subcount_bracket_notation_beats_free_text() {
    let doc = QuestionDoc::new()
        .block("Subcnt: XX.1\n%[TL.100022]\nStem.\n\\shortans{42}")
        .build();
    let extraction = extract_questions(&doc);

    let q = &extraction.questions[0];
    let subcount = q.subcount.as_ref().expect("subcount should be found");
    assert_eq!(subcount.full_id, "TL.100022");
}

#[test]
fn test_partial_failure_isolation() {
    let doc = QuestionDoc::new()
        .block("Broken stem.\n\\loigiai{never closes")
        .block("Fine stem.\n\\choiceTF{*yes}{no}")
        .build();
    let extraction = extract_questions(&doc);

    assert_eq!(extraction.failures.len(), 1);
    assert_eq!(extraction.questions.len(), 1);
    assert!(matches!(
        extraction.failures[0].error,
        ExtractionError::Unbalanced(_)
    ));
    assert_eq!(extraction.questions[0].content, "Fine stem.");
    assert_eq!(extraction.total_blocks(), 2);
}

#[test]
fn test_unterminated_environment_skips_to_next_block() {
    let doc = QuestionDoc::new()
        .raw("\\begin{ex}\nNo end token here.\n\n")
        .block("Recovered stem.\n\\shortans{7}")
        .build();
    let extraction = extract_questions(&doc);

    assert_eq!(extraction.failures.len(), 1);
    assert_eq!(extraction.failures[0].offset, 0);
    assert_eq!(extraction.questions.len(), 1);
    assert_eq!(extraction.questions[0].content, "Recovered stem.");
}

#[test]
fn test_rescan_is_deterministic() {
    let doc = QuestionDoc::new()
        .block("Stem A. \\choice{a}{*b}")
        .block("Stem B. \\loigiai{sol}")
        .build();
    let extractor = Extractor::new();

    let first: Vec<_> = extractor.blocks(&doc).collect();
    let second: Vec<_> = extractor.blocks(&doc).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_multiple_marked_answers_are_carried_not_rejected() {
    let doc = QuestionDoc::new()
        .block("Select all that apply.\n\\choice{*a}{b}{*c}")
        .build();
    let extraction = extract_questions(&doc);

    let q = &extraction.questions[0];
    assert_eq!(
        q.correct_answer,
        Some(CorrectAnswer::Multiple(vec![
            "a".to_string(),
            "c".to_string()
        ]))
    );
}

#[test]
fn test_true_false_marks_items_independently() {
    let doc = QuestionDoc::new()
        .block("Decide each statement.\n\\choiceTF{*true one}{false one}{*true two}")
        .build();
    let extraction = extract_questions(&doc);

    let q = &extraction.questions[0];
    assert_eq!(q.question_type, QuestionType::TrueFalse);
    let marked: Vec<_> = q.answers.iter().filter(|a| a.is_correct).collect();
    assert_eq!(marked.len(), 2);
}

#[test]
fn test_compact_question_id_without_table() {
    let doc = QuestionDoc::new()
        .block("%[0DN1-5]\nStem.\n\\shortans{1}")
        .build();
    let extraction = extract_questions(&doc);

    let id = extraction.questions[0]
        .question_id
        .as_ref()
        .expect("compact code should parse");
    assert_eq!(id.chapter, None);
    // No table bound: values present, labels absent
    assert_eq!(id.grade.value, '0');
    assert_eq!(id.grade.description, None);
}

#[test]
fn test_malformed_question_id_leaves_field_empty() {
    // A dash-less code is not a recognized QuestionID shape; the field stays empty
    // and extraction of the rest of the question continues unaffected
    let doc = QuestionDoc::new()
        .block("%[0D1N15]\n%[Nguồn: Đề C]\nStem text.\n\\shortans{9}")
        .build();
    let extraction = extract_questions(&doc);

    assert!(extraction.is_clean());
    let q = &extraction.questions[0];
    assert_eq!(q.question_id, None);
    assert_eq!(q.source.as_deref(), Some("Đề C"));
}

#[test]
fn test_solution_with_nested_braces_survives_verbatim() {
    let doc = QuestionDoc::new()
        .block("Stem.\n\\choice{a}{*b}\n\\loigiai{Use $\\frac{1}{2}$ and \\textbf{bold}.}")
        .build();
    let extraction = extract_questions(&doc);

    assert_eq!(
        extraction.questions[0].solution.as_deref(),
        Some("Use $\\frac{1}{2}$ and \\textbf{bold}.")
    );
}
