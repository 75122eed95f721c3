use super::*;

#[test]
fn export_file_name_keeps_only_the_date() {
    assert_eq!(
        favorites_export_file_name("2026-10-19T08:15:00.000Z"),
        "consumesafe-favoris-2026-10-19.json"
    );
}

#[test]
fn json_data_uri_percent_encodes_payload() {
    assert_eq!(
        json_data_uri("[\n  \"a b\"\n]"),
        "data:application/json;charset=utf-8,%5B%0A%20%20%22a%20b%22%0A%5D"
    );
}
