use super::*;

fn internship(id: &str, title: &str, company: &str, description: Option<&str>) -> Internship {
    Internship {
        id: id.to_owned(),
        title: title.to_owned(),
        company: company.to_owned(),
        description: description.map(ToOwned::to_owned),
        duration: None,
        created_at: None,
    }
}

fn sample() -> Vec<Internship> {
    vec![
        internship("1", "Frontend Intern", "Acme", Some("React and CSS")),
        internship("2", "Data Science Intern", "Globex", None),
        internship("3", "Embedded Rust Intern", "Initech", Some("Firmware for sensors")),
    ]
}

#[test]
fn empty_query_matches_everything() {
    let items = sample();
    assert_eq!(filter_internships(&items, "").len(), 3);
    assert_eq!(filter_internships(&items, "   ").len(), 3);
}

#[test]
fn title_match_is_case_insensitive() {
    let items = sample();
    let ids: Vec<_> = filter_internships(&items, "rUsT").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[test]
fn company_match() {
    let items = sample();
    let ids: Vec<_> = filter_internships(&items, "globex").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn description_match() {
    let items = sample();
    let ids: Vec<_> = filter_internships(&items, "firmware").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[test]
fn query_is_trimmed() {
    let items = sample();
    assert_eq!(filter_internships(&items, "  acme  ").len(), 1);
}

#[test]
fn shared_substring_keeps_backend_order() {
    let items = sample();
    let ids: Vec<_> = filter_internships(&items, "intern").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn no_match_returns_empty() {
    let items = sample();
    assert!(filter_internships(&items, "haskell").is_empty());
}

#[test]
fn missing_description_does_not_match_description_query() {
    let item = internship("2", "Data Science Intern", "Globex", None);
    assert!(!matches(&item, "react"));
}

#[test]
fn non_ascii_case_folding() {
    let item = internship("9", "Stagiaire Développement", "Société Générale", None);
    assert!(matches(&item, "SOCIÉTÉ"));
}
