use skillgraph::analysis::{analyze_gap, suggest_bridges};
use skillgraph::{
    AnalysisProfile, AnalysisRequest, Analyzer, EngineConfig, GraphSnapshot, Level, ProfileKind,
    ScoringConfig, SkillGraph,
};
use std::sync::Arc;

const SCANNER_GRAPH: &[u8] = br#"{
    "nodes": [
        {"id": "C++"}, {"id": "C"}, {"id": ".NET"}, {"id": "Python"}, {"id": "Java"}
    ]
}"#;

const CAREER_GRAPH: &[u8] = br#"{
    "nodes": [
        {"id": "Python", "group": "Skill"},
        {"id": "Machine Learning", "group": "Skill", "isSenior": true},
        {"id": "Django", "group": "Skill"},
        {"id": "C#"},
        {"id": "SQL"},
        {"id": "TypeScript"},
        {"id": "React"},
        {"id": "Next.js"},
        {"id": "HTML"},
        {"id": "Azure", "isSenior": true},
        {"id": "System Design", "isSenior": true}
    ],
    "links": [
        {"source": "Python", "target": "Machine Learning", "value": 10},
        {"source": "Python", "target": "Django", "value": 5},
        {"source": "TypeScript", "target": "Next.js", "value": 10},
        {"source": "C#", "target": "Azure", "value": 10}
    ]
}"#;

fn analyzer(bytes: &[u8]) -> Analyzer {
    let graph = Arc::new(SkillGraph::new());
    graph.load(bytes).expect("fixture graph");
    Analyzer::new(graph, EngineConfig::default())
}

fn profile(kind: ProfileKind, level: Level, skills: &[&str]) -> AnalysisProfile {
    AnalysisProfile::with_skills(kind, level, skills.iter().copied())
}

// ============================================================================
// Scanner behaviour
// ============================================================================

#[test]
fn test_empty_text_yields_no_skills() {
    let analyzer = analyzer(SCANNER_GRAPH);
    assert!(analyzer.analyze_subject(&AnalysisRequest::new("")).skills.is_empty());
}

#[test]
fn test_identifies_simple_and_symbol_skills() {
    let analyzer = analyzer(SCANNER_GRAPH);

    let skills = analyzer.analyze_subject(&AnalysisRequest::new("I know Python and Java.")).skills;
    assert!(skills.contains("Python"));
    assert!(skills.contains("Java"));

    let skills = analyzer
        .analyze_subject(&AnalysisRequest::new("I am an expert in C++ and .NET development."))
        .skills;
    assert_eq!(skills.to_vec(), vec!["C++", ".NET"]);
}

#[test]
fn test_c_is_distinguished_from_partial_words() {
    let analyzer = analyzer(SCANNER_GRAPH);

    let skills = analyzer
        .analyze_subject(&AnalysisRequest::new("I like Cloud Computing and C programming."))
        .skills;
    assert_eq!(skills.to_vec(), vec!["C"]);

    let skills = analyzer.analyze_subject(&AnalysisRequest::new("Visual Basic is old.")).skills;
    assert!(!skills.contains("C"));
}

#[test]
fn test_job_skills_and_title_levels() {
    let analyzer = analyzer(SCANNER_GRAPH);

    let job = analyzer.analyze_target(&AnalysisRequest::new("We are looking for a C++ developer."));
    assert!(job.skills.contains("C++"));
    assert_eq!(job.kind, ProfileKind::Target);

    let job = analyzer.analyze_target(&AnalysisRequest::new("We need a Senior Developer."));
    assert_eq!(job.level, Level::Senior);

    let job = analyzer.analyze_target(&AnalysisRequest::new("Hiring a Junior Helper."));
    assert_eq!(job.level, Level::Junior);

    let job = analyzer.analyze_target(&AnalysisRequest::new("Engineering Manager, C++ platform"));
    assert_eq!(job.level, Level::Managerial);
}

#[test]
fn test_architect_boosts_score() {
    let analyzer = analyzer(SCANNER_GRAPH);
    let profile = analyzer.analyze_subject(&AnalysisRequest::new("I architected the entire Python backend."));
    assert!(profile.seniority_score > 0.0);
    assert_eq!(profile.level, Level::Senior);
}

#[test]
fn test_manual_inputs_override_text() {
    let analyzer = analyzer(SCANNER_GRAPH);
    let request = AnalysisRequest::new("I have some basic java skills.")
        .with_manual_skills(["C++", "Python"])
        .with_manual_years(10)
        .with_details("I architected the system.");

    let profile = analyzer.analyze_subject(&request);
    assert!(profile.skills.contains("C++"));
    assert!(profile.skills.contains("Python"));
    assert!(!profile.skills.contains("Java"));
    assert_eq!(profile.years_of_experience, 10);
    assert!(profile.seniority_score > 0.0);
    assert_eq!(profile.level, Level::Senior);
}

#[test]
fn test_years_drive_numeric_level() {
    let analyzer = analyzer(SCANNER_GRAPH);

    let profile = analyzer.analyze_subject(&AnalysisRequest::new("Python developer, 4 yrs experience"));
    assert_eq!(profile.years_of_experience, 4);
    assert_eq!(profile.level, Level::Mid);

    let profile = analyzer.analyze_subject(&AnalysisRequest::new("Java since 2024 years ago, 6+ years total"));
    assert_eq!(profile.years_of_experience, 6);
    assert_eq!(profile.level, Level::Senior);
}

// ============================================================================
// Bridges and gaps
// ============================================================================

#[test]
fn test_senior_bridge_ranks_first_for_junior() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = profile(ProfileKind::Subject, Level::Junior, &["Python"]);
    let bridges = analyzer.suggest_bridges(&subject);
    assert_eq!(bridges, vec!["Machine Learning", "Django"]);
}

#[test]
fn test_bridges_respect_configured_limit() {
    let snapshot = GraphSnapshot::from_slice(CAREER_GRAPH).unwrap();
    let config = ScoringConfig {
        max_bridges: 1,
        ..Default::default()
    };
    let subject = profile(ProfileKind::Subject, Level::Senior, &["python"]);
    assert_eq!(suggest_bridges(&subject, &snapshot, &config), vec!["Machine Learning"]);
}

#[test]
fn test_gap_direct_missing_skills() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = profile(ProfileKind::Subject, Level::Junior, &["C#", "SQL"]);
    let target = profile(ProfileKind::Target, Level::Junior, &["C#", "SQL", "Azure"]);

    let report = analyzer.analyze_gap(&subject, &target);
    assert_eq!(report.missing_skills, vec!["Azure"]);
}

#[test]
fn test_gap_implicit_dependencies() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = profile(ProfileKind::Subject, Level::Junior, &["HTML"]);
    let target = profile(ProfileKind::Target, Level::Junior, &["Next.js"]);

    let report = analyzer.analyze_gap(&subject, &target);
    assert!(report.missing_skills.contains(&"Next.js".to_string()));
    assert!(report.implicit_skills.contains(&"TypeScript".to_string()));
}

#[test]
fn test_gap_seniority_mismatch() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = profile(ProfileKind::Subject, Level::Mid, &["C#"]);
    let target = profile(ProfileKind::Target, Level::Senior, &["C#"]);

    let report = analyzer.analyze_gap(&subject, &target);
    assert!(report.seniority_mismatch);
    assert!(report.message.starts_with("Role requires Senior level"));
}

#[test]
fn test_gap_aligned_when_senior_has_senior_skill() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = profile(ProfileKind::Subject, Level::Senior, &["C#", "System Design"]);
    let target = profile(ProfileKind::Target, Level::Senior, &["C#"]);

    let report = analyzer.analyze_gap(&subject, &target);
    assert!(!report.seniority_mismatch);
    assert!(report.message.contains("aligns with the role"));
}

#[test]
fn test_gap_flags_foundational_senior() {
    let snapshot = GraphSnapshot::from_slice(CAREER_GRAPH).unwrap();
    let subject = profile(ProfileKind::Subject, Level::Senior, &["C#", "SQL"]);
    let target = profile(ProfileKind::Target, Level::Senior, &["C#"]);

    let report = analyze_gap(&subject, &target, &snapshot);
    assert!(report.seniority_mismatch);
    assert!(report.message.contains("primarily foundational"));
}

#[test]
fn test_end_to_end_resume_against_job() {
    let analyzer = analyzer(CAREER_GRAPH);
    let subject = analyzer.analyze_subject(&AnalysisRequest::new("Backend work in C# and SQL, 2 years."));
    let target = analyzer.analyze_target(&AnalysisRequest::new(
        "Senior cloud engineer: C#, SQL, Azure. 5+ years required.",
    ));

    assert_eq!(subject.level, Level::Junior);
    assert_eq!(target.level, Level::Senior);
    assert_eq!(target.years_of_experience, 5);

    let report = analyzer.analyze_gap(&subject, &target);
    assert_eq!(report.missing_skills, vec!["Azure"]);
    assert!(report.implicit_skills.is_empty());
    assert!(report.seniority_mismatch);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["missingSkills"], serde_json::json!(["Azure"]));
    assert_eq!(json["seniorityMismatch"], true);
}
