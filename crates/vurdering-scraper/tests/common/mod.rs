//! Shared helpers for the wiremock-backed integration tests.

#![allow(dead_code)]

use vurdering_scraper::ScraperConfig;
use wiremock::MockServer;

pub const VIS_PATH: &str = "/borger/ejendomsvurdering/Vis.do";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config pointed at `server`: short timeout, no retries.
pub fn test_config(server: &MockServer) -> ScraperConfig {
    ScraperConfig {
        base_url: format!("{}{VIS_PATH}", server.uri()),
        request_timeout_secs: 5,
        user_agent: "vurdering-test/0.1".to_owned(),
        max_retries: 0,
        retry_backoff_base_ms: 0,
        ..ScraperConfig::default()
    }
}

/// Encodes `text` as ISO-8859-1, the registry's declared charset.
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("fixture text must be Latin-1"))
        .collect()
}

pub fn results_page(rows: &[[&str; 6]], marker: &str) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>\n")
        })
        .collect();

    format!(
        r#"<html><head><meta charset="iso-8859-1"></head><body>
<div id="skts-indhold-ejendomsvudering">
  <table><tr><td>
    <table><tr><td>Søgeresultat</td></tr></table>
    <table><tr><td>
      <table>
        <tr><th>Ejendomsnr.</th><th>Husnr.</th><th>Etage</th><th>Type</th><th>Grundværdi</th><th>Ejendomsværdi</th></tr>
        {body}
      </table>
    </td></tr></table>
  </td></tr></table>
  {marker}
</div>
</body></html>"#
    )
}

pub fn more_marker(href: &str) -> String {
    format!(r#"<a href="{href}"><img src="/images/svur/vis10eft.gif" alt="Næste side"></a>"#)
}

pub fn last_marker() -> String {
    r#"<img src="/images/svur/vis10eft.gif" alt="Ikke flere ejendomme på vejen">"#.to_owned()
}

pub fn error_page(message: &str) -> String {
    format!(
        r#"<html><body><div id="skts-indhold-ejendomsvudering">
<span class="skts-fejltekst-info">
  {message}
</span>
</div></body></html>"#
    )
}
