pub const INVALID_LOG_MESSAGE: &str = "Log tidak valid.";

/// Render the analysis form, optionally followed by a result section.
pub fn render_page(log: &str, report: Option<&str>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<meta charset=\"utf-8\">\n<h1>Deteksi Stres Otak</h1>\n\
         <form method=\"post\">\n    \
         <textarea name=\"log\" rows=\"10\" cols=\"60\" \
         placeholder=\"Masukkan log aktivasi otak di sini...\">",
    );
    html.push_str(&escape_html(log));
    html.push_str(
        "</textarea><br>\n    <button type=\"submit\">Analisis</button>\n</form>\n",
    );
    if let Some(report) = report.filter(|r| !r.is_empty()) {
        html.push_str("<h2>Hasil Analisis</h2>\n<pre>");
        html.push_str(&escape_html(report));
        html.push_str("</pre>\n");
    }
    html
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
