use death_literacy::assessment::{
    import_responses, AssessmentEngine, Domain, ScoringTables, TablesError, Tier,
};
use std::io::Cursor;

const EXPORT: &str = "respondent_id,question_id,value
r-100,talk_about_dying,5
r-100,talk_about_grief,5
r-100,advance_care_planning,1
r-200,community_support_groups,4
r-200,social_feel_connected,3
r-100,witnessed_death,
";

#[test]
fn imported_responses_regenerate_reports() {
    let engine = AssessmentEngine::standard();
    let responses = import_responses(Cursor::new(EXPORT)).expect("export parses");

    assert_eq!(responses.len(), 2);

    let first = engine.evaluate(&responses[0].answers, None);
    assert_eq!(responses[0].respondent_id, "r-100");
    assert_eq!(first.scores.categories.skills, 10.0);
    assert_eq!(first.scores.categories.knowledge, 0.0);
    assert_eq!(
        first.comparisons.domain(Domain::Knowledge).map(|entry| entry.tier),
        Some(Tier::Lower)
    );

    let second = engine.evaluate(&responses[1].answers, None);
    assert_eq!(second.scores.categories.community, 7.5);
    assert_eq!(second.social_connection.answered, 1);
}

#[test]
fn alternate_tables_change_benchmarks_without_code_changes() {
    let mut tables = ScoringTables::standard();
    tables.version = "pilot".to_string();
    tables.benchmarks.domains.insert(Domain::Community, 9.0);
    let document = serde_json::to_string(&tables).expect("tables serialize");

    let loaded = ScoringTables::from_reader(Cursor::new(document)).expect("tables load");
    let engine = AssessmentEngine::new(loaded);
    let responses = import_responses(Cursor::new(EXPORT)).expect("export parses");

    let report = engine.evaluate(&responses[1].answers, None);

    assert_eq!(report.tables_version, "pilot");
    assert_eq!(
        report.comparisons.domain(Domain::Community).map(|entry| entry.tier),
        Some(Tier::Lower)
    );
}

#[test]
fn malformed_tables_document_is_rejected() {
    let err = ScoringTables::from_reader(Cursor::new("{\"version\": 3}"))
        .expect_err("document incomplete");

    assert!(matches!(err, TablesError::Parse(_)));
}
