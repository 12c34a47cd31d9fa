//! HTML page rendering. Emits a fixed single-page skeleton with one
//! navigation button and one detail panel per record; a small inline
//! script toggles panel visibility.
//!
//! The page references `style.css` and `logo.svg` relative to the
//! output file; neither is generated here.

use crate::model::{Dialect, DocumentModel, TagRecord};
use std::io::{self, Write};

/// Closes the navigation column and opens the detail pane with the
/// fixed Introduction panel.
const PAGE_INTRO: &str = r#"  </div>

<!-- Introduction -->

<div class="desc-pane">
  <div id="Introduction" class="desc">
    <div class="title">Introduction</div>
    <p class="desc-text">
      This reference was generated from the documentation comments in the
      project's header files.
    </p>
    <p class="desc-text">
      Select an entry from the index to view its description.
    </p>
  </div>
"#;

/// Closes the detail pane and the page, then installs the panel toggle.
const PAGE_FOOT: &str = r#"</div>
</div>
<script>
function displayDesc(e, d) {
    var all = document.getElementsByClassName('desc');
    for (var i = all.length - 1; 0 <= i; i--) {
        all[i].style.display = 'none';
    }
    all = document.getElementsByClassName('item');
    for (var i = all.length - 1; 0 <= i; i--) {
        all[i].className = all[i].className.replace(' selected', '');
    }
    document.getElementById(d).style.display = 'block';
    e.currentTarget.className += ' selected';
}
</script>
</body>
</html>
"#;

/// Render the whole page in model order: head, navigation buttons,
/// Introduction, one panel per record, footer.
pub fn write_page<W: Write>(
    out: &mut W,
    model: &DocumentModel,
    dialect: Dialect,
    title: &str,
) -> io::Result<()> {
    write_head(out, title)?;
    for record in model.records() {
        let label = record.label(dialect);
        writeln!(
            out,
            "    <button class=\"item level2\" onclick=\"displayDesc(event,'{}')\">{}</button>",
            panel_id(label),
            html_escape(label)
        )?;
    }
    out.write_all(PAGE_INTRO.as_bytes())?;
    for record in model.records() {
        write_panel(out, record, dialect)?;
    }
    out.write_all(PAGE_FOOT.as_bytes())?;
    Ok(())
}

fn write_head<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let title = html_escape(title);
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", title)?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(
        out,
        "<link rel=\"stylesheet\" type=\"text/css\" media=\"screen,print\" href=\"style.css\">"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body onload=\"displayDesc(event,'Introduction')\">")?;
    writeln!(out, "<div class=\"header\">")?;
    writeln!(
        out,
        "  <a href=\"#\" class=\"normal\"><img src=\"logo.svg\" width=\"240\"></a><span class=\"api\">{}</span>",
        title
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "<div class=\"page\">")?;
    writeln!(out, "  <div class=\"index\">")?;
    writeln!(
        out,
        "    <button class=\"item level1\" onclick=\"displayDesc(event,'Introduction')\">Introduction</button>"
    )?;
    writeln!(out)?;
    writeln!(out, "    <span class=\"cat\">Reference</span>")?;
    Ok(())
}

/// One detail panel. The brief appears as its own text block only in
/// the Named dialect; in the Brief dialect it is already the title.
/// The Returns row renders only inside a parameter table.
fn write_panel<W: Write>(out: &mut W, record: &TagRecord, dialect: Dialect) -> io::Result<()> {
    let label = record.label(dialect);
    writeln!(out)?;
    writeln!(out, "<div id=\"{}\" class=\"desc\">", panel_id(label))?;
    writeln!(out, "  <div class=\"title\">{}</div>", html_escape(label))?;
    if dialect.has_name_tag() && !record.brief.is_empty() {
        writeln!(
            out,
            "  <p class=\"desc-text\">{}</p>",
            html_escape(&record.brief)
        )?;
    }
    if !record.description.is_empty() {
        writeln!(
            out,
            "  <p class=\"desc-text\">{}</p>",
            html_escape(&record.description)
        )?;
    }
    if !record.parameters.is_empty() {
        writeln!(out, "  <table class=\"params\">")?;
        for param in &record.parameters {
            writeln!(
                out,
                "    <tr><td><span class=\"param\">{}</span></td><td>{}</td></tr>",
                html_escape(&param.name),
                html_escape(&param.description)
            )?;
        }
        if !record.returns.is_empty() {
            writeln!(
                out,
                "    <tr><td class=\"returns\">Returns:</td><td>{}</td></tr>",
                html_escape(&record.returns)
            )?;
        }
        writeln!(out, "  </table>")?;
    }
    writeln!(out, "</div>")?;
    Ok(())
}

/// Panel id targeted by a navigation button: the label lowercased and
/// restricted to alphanumerics and hyphens.
fn panel_id(label: &str) -> String {
    label
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
