use fightstats::config::Config;
use fightstats::PageId;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a listing page with the two header rows and one row per fighter
///
/// Each fighter is `(first, last, wins)`.
pub fn listing_html(fighters: &[(&str, &str, &str)]) -> String {
    let rows: String = fighters
        .iter()
        .map(|(first, last, wins)| {
            format!(
                r#"<tr class="b-statistics__table-row">
                    <td class="b-statistics__table-col"><a href="/fighter/{first}">{first}</a></td>
                    <td class="b-statistics__table-col"><a href="/fighter/{first}">{last}</a></td>
                    <td class="b-statistics__table-col"><a href="/fighter/{first}"></a></td>
                    <td class="b-statistics__table-col">5' 10"</td>
                    <td class="b-statistics__table-col">170 lbs.</td>
                    <td class="b-statistics__table-col">--</td>
                    <td class="b-statistics__table-col">Orthodox</td>
                    <td class="b-statistics__table-col">{wins}</td>
                    <td class="b-statistics__table-col">2</td>
                    <td class="b-statistics__table-col">0</td>
                    <td class="b-statistics__table-col"></td>
                </tr>"#
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Fighters</title></head><body>
        <table class="b-statistics__table">
          <thead><tr class="b-statistics__table-row">
            <th>First</th><th>Last</th><th>Nickname</th><th>Ht.</th><th>Wt.</th>
            <th>Reach</th><th>Stance</th><th>W</th><th>L</th><th>D</th><th>Belt</th>
          </tr></thead>
          <tbody>
            <tr class="b-statistics__table-row"><td class="b-statistics__table-col_type_clear"></td></tr>
            {rows}
          </tbody>
        </table></body></html>"#
    )
}

/// Page bodies for the standard scenario: 'a' lists three fighters, 'b'
/// none, every other letter one
pub fn scenario_pages() -> Vec<(PageId, String)> {
    PageId::all()
        .map(|page| {
            let letter = page.to_string();
            let body = match page.letter() {
                'a' => listing_html(&[("Tom", "Aaron", "5"), ("Ali", "Abdel", "9"), ("Ann", "Aby", "0")]),
                'b' => listing_html(&[]),
                _ => listing_html(&[(letter.as_str(), "Fighter", "1")]),
            };
            (page, body)
        })
        .collect()
}

/// Mounts a listing response for one letter
pub async fn mount_listing(server: &MockServer, page: PageId, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/statistics/fighters"))
        .and(query_param("char", page.to_string().as_str()))
        .and(query_param("page", "all"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts every page of `pages` as an HTML response
pub async fn mount_pages(server: &MockServer, pages: Vec<(PageId, String)>) {
    for (page, body) in pages {
        mount_listing(server, page, html_response(body)).await;
    }
}

pub fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Configuration pointing at the mock server
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.source.base_url = server.uri();
    config.http.timeout_secs = 5;
    config
}
