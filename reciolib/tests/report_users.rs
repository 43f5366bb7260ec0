mod common;

use reciolib::{fetch::parse_users, report::render_users};

#[test]
fn users_table_rows() {
    let users = parse_users(common::TWO_USERS).expect("parse users");
    let mut out = Vec::new();
    render_users(&mut out, &users).expect("render");
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "ID\t| Name\t\t\t| Username\t\t\t| Email\t\t\t\t\t\t\t| Address");
    assert_eq!(lines[1], "-".repeat(130));
    assert_eq!(
        lines[2],
        "1\t| Leanne Graham       \t| Bret                \t| Sincere@april.biz   \t| Kulas Light, Apt. 556, Gwenborough, 92998-3874"
    );
    assert_eq!(lines[3], "-".repeat(130));

    // заголовок + линейка, затем по две строки на пользователя
    let data_rows = lines.iter().filter(|l| !l.starts_with('-')).count() - 1;
    assert_eq!(data_rows, users.len());
    assert_eq!(lines.len(), 2 + 2 * users.len());
}

#[test]
fn users_table_empty() {
    let mut out = Vec::new();
    render_users(&mut out, &[]).expect("render");
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn users_keep_payload_order() {
    let users = parse_users(common::TWO_USERS).expect("parse users");
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(users[1].address.city, "Wisokyburgh");
}

#[test]
fn malformed_users_payload() {
    let err = parse_users(r#"[{"id": "x"}]"#).unwrap_err();
    assert!(matches!(err, reciolib::error::RecioError::Deserialization(_)));
}
