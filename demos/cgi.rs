//! CGI front end.
//!
//! Reads `expr` (and optionally `mode=tt`) from `QUERY_STRING` and writes an
//! HTML page with either the evaluation result or the truth table.
//!
//! ```bash
//! QUERY_STRING='expr=A%2B%C2%B7B&mode=tt' cargo run --example cgi
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use bool_solver::{Solver, TruthTable};

/// Decodes `application/x-www-form-urlencoded` text: `+` is a space and
/// `%XX` is a byte. The decoded bytes must be UTF-8.
fn url_decode(src: &str) -> Result<String, String> {
    urlencoding::decode(&src.replace('+', " "))
        .map(|text| text.into_owned())
        .map_err(|e| {
            log::debug!("cannot decode {:?}: {}", src, e);
            String::from("Failed to decode expression.")
        })
}

/// Raw (still encoded) value of `param` in a `key=value&...` query string.
fn query_param<'a>(query: &'a str, param: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == param)
        .map(|(_, value)| value)
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn html_table(table: &TruthTable) -> String {
    let mut html = String::from("<table border='1' cellpadding='5' cellspacing='0'><tr>");
    for var in table.variables().iter() {
        let _ = write!(html, "<th>{}</th>", html_escape(&var.to_string()));
    }
    html.push_str("<th>Result</th></tr>");
    for (assignment, result) in table.iter() {
        html.push_str("<tr>");
        for value in assignment.values() {
            let _ = write!(html, "<td>{}</td>", value as u8);
        }
        let _ = write!(html, "<td>{}</td></tr>", result as u8);
    }
    html.push_str("</table>");
    html
}

/// Builds the page body for `query`, or an error message.
fn respond(solver: &Solver, query: Option<&str>) -> Result<String, String> {
    let query = query
        .filter(|q| !q.is_empty())
        .ok_or("No query string provided.")?;
    let raw = query_param(query, "expr").ok_or("No expression provided.")?;
    let expr = url_decode(raw)?;
    log::debug!("expr = {:?}", expr);

    let mut body = String::new();
    if query_param(query, "mode") == Some("tt") {
        let table = solver.truth_table(&expr).map_err(|e| e.to_string())?;
        body.push_str("<h2>Truth Table for Expression:</h2>");
        let _ = write!(body, "<p>{}</p>", html_escape(&expr));
        body.push_str(&html_table(&table));
    } else {
        let result = solver.evaluate(&expr).map_err(|e| e.to_string())?;
        body.push_str("<h2>Evaluation Result for Expression:</h2>");
        let _ = write!(body, "<p>{}</p>", html_escape(&expr));
        let _ = write!(body, "<p>Result: {}</p>", result as u8);
    }
    Ok(body)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr; stdout is the HTTP response.
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        io::stderr(),
    )?;

    let query = std::env::var("QUERY_STRING").ok();
    let solver = Solver::default();
    let outcome = respond(&solver, query.as_deref());

    let mut out = io::stdout().lock();
    write!(out, "Content-Type: text/html\n\n")?;
    write!(
        out,
        "<html><head><title>Boolean Expression Solver Result</title></head><body>"
    )?;
    write!(out, "<h1>Boolean Expression Solver</h1>")?;
    match &outcome {
        Ok(body) => write!(out, "{}", body)?,
        Err(message) => {
            log::warn!("request failed: {}", message);
            write!(out, "<h2>Error: {}</h2>", html_escape(message))?;
        }
    }
    write!(out, "</body></html>")?;
    out.flush()?;

    Ok(())
}
