//! Rich-document conversion — turns an OOXML word-processing archive into HTML.
//!
//! Only the main document part (`word/document.xml`) is read. Paragraph styles,
//! list membership, run emphasis, breaks and tables are carried over; everything
//! else (images, headers/footers, comments) is dropped.

use std::io::{Cursor, Read};

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::document::extractor::ExtractFailure;

const MAIN_PART: &str = "word/document.xml";

/// Converts raw `.docx` bytes to an HTML fragment. CPU-bound: call from the blocking pool.
pub fn docx_to_html(data: &[u8]) -> Result<String, ExtractFailure> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive.by_name(MAIN_PART)?.read_to_string(&mut xml)?;
    document_xml_to_html(&xml)
}

#[derive(Default)]
struct Paragraph {
    style: Option<String>,
    is_list_item: bool,
    html: String,
}

#[derive(Default)]
struct Run {
    bold: bool,
    italic: bool,
    underline: bool,
    html: String,
}

impl Run {
    fn render(self) -> String {
        if self.html.is_empty() {
            return self.html;
        }
        let mut out = self.html;
        if self.underline {
            out = format!("<u>{out}</u>");
        }
        if self.italic {
            out = format!("<em>{out}</em>");
        }
        if self.bold {
            out = format!("<strong>{out}</strong>");
        }
        out
    }
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
    in_list: bool,
}

impl HtmlWriter {
    fn close_list(&mut self) {
        if self.in_list {
            self.out.push_str("</ul>");
            self.in_list = false;
        }
    }

    fn push_block(&mut self, html: &str) {
        self.close_list();
        self.out.push_str(html);
    }

    fn paragraph(&mut self, paragraph: Paragraph) {
        if paragraph.html.trim().is_empty() {
            return;
        }
        if paragraph.is_list_item {
            if !self.in_list {
                self.out.push_str("<ul>");
                self.in_list = true;
            }
            self.out.push_str(&format!("<li>{}</li>", paragraph.html));
            return;
        }
        let tag = heading_tag(paragraph.style.as_deref()).unwrap_or("p");
        self.push_block(&format!("<{tag}>{}</{tag}>", paragraph.html));
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.out
    }
}

/// Walks `word/document.xml` and emits HTML.
pub fn document_xml_to_html(xml: &str) -> Result<String, ExtractFailure> {
    let mut reader = Reader::from_str(xml);
    let mut writer = HtmlWriter::default();

    let mut paragraph: Option<Paragraph> = None;
    let mut run: Option<Run> = None;
    let mut in_paragraph_props = false;
    let mut in_run_props = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => paragraph = Some(Paragraph::default()),
                b"w:pPr" => in_paragraph_props = true,
                b"w:r" => run = Some(Run::default()),
                b"w:rPr" if !in_paragraph_props => in_run_props = true,
                b"w:t" => in_text = run.is_some(),
                b"w:numPr" if in_paragraph_props => {
                    if let Some(p) = paragraph.as_mut() {
                        p.is_list_item = true;
                    }
                }
                b"w:tbl" => writer.push_block("<table>"),
                b"w:tr" => writer.out.push_str("<tr>"),
                b"w:tc" => writer.out.push_str("<td>"),
                _ => apply_property(&e, &mut paragraph, &mut run, in_paragraph_props, in_run_props),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:br" | b"w:cr" => {
                    if let Some(r) = run.as_mut() {
                        r.html.push_str("<br />");
                    }
                }
                b"w:tab" if !in_paragraph_props => {
                    if let Some(r) = run.as_mut() {
                        r.html.push('\t');
                    }
                }
                _ => apply_property(&e, &mut paragraph, &mut run, in_paragraph_props, in_run_props),
            },
            Event::Text(t) if in_text => {
                if let Some(r) = run.as_mut() {
                    r.html.push_str(&escape(&t.unescape()?));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:rPr" => in_run_props = false,
                b"w:pPr" => in_paragraph_props = false,
                b"w:r" => {
                    if let (Some(r), Some(p)) = (run.take(), paragraph.as_mut()) {
                        p.html.push_str(&r.render());
                    }
                }
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        writer.paragraph(p);
                    }
                }
                b"w:tc" => {
                    writer.close_list();
                    writer.out.push_str("</td>");
                }
                b"w:tr" => writer.out.push_str("</tr>"),
                b"w:tbl" => writer.push_block("</table>"),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(writer.finish())
}

fn apply_property(
    e: &BytesStart<'_>,
    paragraph: &mut Option<Paragraph>,
    run: &mut Option<Run>,
    in_paragraph_props: bool,
    in_run_props: bool,
) {
    match e.name().as_ref() {
        b"w:pStyle" if in_paragraph_props => {
            if let Some(p) = paragraph.as_mut() {
                p.style = attribute_value(e, "w:val");
            }
        }
        b"w:b" if in_run_props => {
            if let Some(r) = run.as_mut() {
                r.bold = toggle_enabled(e);
            }
        }
        b"w:i" if in_run_props => {
            if let Some(r) = run.as_mut() {
                r.italic = toggle_enabled(e);
            }
        }
        b"w:u" if in_run_props => {
            if let Some(r) = run.as_mut() {
                r.underline = attribute_value(e, "w:val").as_deref() != Some("none");
            }
        }
        _ => {}
    }
}

fn attribute_value(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// `<w:b/>` is on; `<w:b w:val="0"/>` and `w:val="false"` switch it off.
fn toggle_enabled(e: &BytesStart<'_>) -> bool {
    !matches!(
        attribute_value(e, "w:val").as_deref(),
        Some("0") | Some("false") | Some("off")
    )
}

fn heading_tag(style: Option<&str>) -> Option<&'static str> {
    let style = style?.to_ascii_lowercase();
    if style == "title" {
        return Some("h1");
    }
    match style.strip_prefix("heading")?.trim() {
        "1" => Some("h1"),
        "2" => Some("h2"),
        "3" => Some("h3"),
        "4" => Some("h4"),
        "5" => Some("h5"),
        "6" => Some("h6"),
        _ => None,
    }
}
