use super::*;

fn item(id: &str, title: &str, company: &str, duration: Option<&str>) -> Internship {
    Internship {
        id: id.to_owned(),
        title: title.to_owned(),
        company: company.to_owned(),
        description: None,
        duration: duration.map(ToOwned::to_owned),
        created_at: None,
    }
}

#[test]
fn table_aligns_columns() {
    let a = item("1", "Rust Intern", "Acme", Some("3 months"));
    let b = item("22", "QA", "Globex Corporation", None);
    let table = render_table(&[&a, &b]);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "ID  TITLE        COMPANY             DURATION");
    assert_eq!(lines[1], "1   Rust Intern  Acme                3 months");
    assert_eq!(lines[2], "22  QA           Globex Corporation  -");
}

#[test]
fn empty_table_has_header_only() {
    assert_eq!(render_table(&[]), "ID  TITLE  COMPANY  DURATION\n");
}

#[test]
fn detail_includes_description_placeholder() {
    let a = item("1", "Rust Intern", "Acme", Some("3 months"));
    let text = render_detail(&a);
    assert!(text.starts_with("Rust Intern\nAcme\nDuration: 3 months\nID: 1\n\n"));
    assert!(text.ends_with("No description provided.\n"));
}

#[test]
fn detail_prints_description() {
    let mut a = item("1", "Rust Intern", "Acme", None);
    a.description = Some("Write async services.".to_owned());
    let text = render_detail(&a);
    assert!(!text.contains("Duration"));
    assert!(text.ends_with("Write async services.\n"));
}

#[test]
fn count_reports_filtered_subset() {
    assert_eq!(render_count(3, 3), "3 internship(s)");
    assert_eq!(render_count(1, 3), "1 of 3 internship(s) match");
}
