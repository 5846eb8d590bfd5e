use pilio_api::types::HistoryResponse;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_history_full() {
    let json = load_fixture("history.json");
    let resp: HistoryResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.lotto.len(), 2);

    let first = &resp.lotto[0];
    assert_eq!(first.date, "02/06<br>26(五)");
    assert_eq!(first.num, "04,12,24,25,39,48");
    assert_eq!(first.sp, "09");
    assert_eq!(first.dex, Some(2383));

    // The endpoint sometimes serves the cursor as a numeric string.
    let second = &resp.lotto[1];
    assert_eq!(second.dex, Some(2382));
}

#[test]
fn deserialize_history_numeric_sp() {
    let resp: HistoryResponse = serde_json::from_str(
        r#"{"lotto": [{"date": "01/30<br>26(五)", "num": "01,02,03,04,05,06", "sp": 7, "dex": 2381}]}"#,
    )
    .unwrap();
    assert_eq!(resp.lotto[0].sp, "7");
}

#[test]
fn deserialize_history_missing_fields() {
    let resp: HistoryResponse = serde_json::from_str(r#"{"lotto": [{}]}"#).unwrap();
    let item = &resp.lotto[0];
    assert_eq!(item.date, "");
    assert_eq!(item.num, "");
    assert_eq!(item.sp, "");
    assert_eq!(item.dex, None);
}

#[test]
fn deserialize_history_no_lotto_key() {
    let resp: HistoryResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.lotto.is_empty());
}

#[test]
fn deserialize_history_garbage_cursor() {
    let resp: HistoryResponse = serde_json::from_str(
        r#"{"lotto": [{"date": "", "num": "", "sp": "", "dex": "n/a"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.lotto[0].dex, None);
}
