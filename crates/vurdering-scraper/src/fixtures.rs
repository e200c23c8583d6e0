//! HTML fixtures shaped like the registry's result pages.

/// Results page with `rows` in the innermost table of the second table
/// inside the content container, followed by `marker`.
pub(crate) fn results_page(rows: &[[&str; 6]], marker: &str) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td> {c} </td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        r#"<html><body>
        <div id="skts-indhold-ejendomsvudering">
          <table><tr><td>
            <table><tr><td>Lyngby Hovedgade, 2800</td></tr></table>
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

pub(crate) fn more_marker(href: &str) -> String {
    format!(r#"<a href="{href}"><img src="/images/svur/vis10eft.gif" alt="Næste side"></a>"#)
}

pub(crate) fn last_marker() -> String {
    r#"<a href="Vis.do?SIDE=99"><img src="/images/svur/vis10eft.gif" alt="Ikke flere ejendomme på vejen"></a>"#.to_owned()
}

pub(crate) fn error_page(message: &str) -> String {
    format!(
        r#"<html><body><div id="skts-indhold-ejendomsvudering">
        <span class="skts-fejltekst-info">
            {message}
        </span>
        </div></body></html>"#
    )
}
