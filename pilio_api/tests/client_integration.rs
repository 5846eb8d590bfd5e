use pilio_api::{Client, Game, HistoryQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// A minimal listing page, served the way the real site serves it: Big5 bytes.
fn big5_listing_page() -> Vec<u8> {
    let html = concat!(
        "<html><body><h1>大樂透</h1><table>",
        r#"<tr><td class="date-cell">02/06<br>26(五)</td>"#,
        r#"<td class="number-cell">04,&nbsp;12,&nbsp;24,&nbsp;25,&nbsp;39,&nbsp;48</td>"#,
        r#"<td class="bonus-cell">09</td></tr>"#,
        "</table>",
        r#"<input type="hidden" id="lastindex" value="2383">"#,
        "</body></html>",
    );
    let (bytes, _, _) = encoding_rs::BIG5.encode(html);
    bytes.into_owned()
}

#[tokio::test]
async fn list_page_decodes_big5() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ltobig/list.asp"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(big5_listing_page(), "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let html = client.list_page(Game::BigLotto).await.unwrap();

    assert!(html.contains("大樂透"));
    assert!(html.contains(r#"<td class="date-cell">02/06<br>26(五)</td>"#));
    assert!(html.contains(r#"id="lastindex" value="2383""#));
}

#[tokio::test]
async fn list_page_super_lotto_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lto/list.asp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    assert!(client.list_page(Game::SuperLotto).await.is_ok());
}

#[tokio::test]
async fn list_page_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ltobig/list.asp"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.list_page(Game::BigLotto).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn history_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("history.json");

    Mock::given(method("POST"))
        .and(path("/Json_ltonew.asp"))
        .and(query_param("Lkind", "ltobig"))
        .and(query_param("Lindex", "2383"))
        .and(query_param("Ldesc", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp = client
        .history(&HistoryQuery::new(Game::BigLotto, 2383))
        .await
        .unwrap();

    assert_eq!(resp.lotto.len(), 2);
    assert_eq!(resp.lotto[0].num, "04,12,24,25,39,48");
    assert_eq!(resp.lotto[0].dex, Some(2383));
}

#[tokio::test]
async fn history_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Json_ltonew.asp"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.history(&HistoryQuery::new(Game::SuperLotto, 1000)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn history_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Json_ltonew.asp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.history(&HistoryQuery::new(Game::BigLotto, 2383)).await;
    assert!(result.is_err());
}
