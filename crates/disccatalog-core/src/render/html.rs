/// HTML catalog page, generated with `maud`.
///
/// All interpolated text is escaped by `maud`; only the embedded stylesheet
/// is inserted verbatim.
use crate::config::StyleOptions;
use crate::model::duration::format_duration;
use crate::model::size::format_size;
use crate::model::{CatalogDocument, Entry, MediaKind, Section};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = include_str!("style.css");

/// Render a complete HTML page.
pub fn render_html(document: &CatalogDocument, style: &StyleOptions) -> String {
    page(document, style).into_string()
}

fn page(document: &CatalogDocument, style: &StyleOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Music Disc Catalog · " (document.catalog_id) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="cover" {
                    div class="title" { (style.heading) }
                    div class="subtitle" {
                        "Volume: " (document.volume_id) " · Catalog: " (document.catalog_id)
                    }
                    @for section in &document.sections {
                        (section_block(section, style))
                    }
                    div class="footer" {
                        @if let Some(note) = &style.footer_note {
                            (note) " · "
                        }
                        "Catalogued " (document.generated_date()) " · " (document.catalog_id)
                    }
                }
            }
        }
    }
}

fn section_block(section: &Section, style: &StyleOptions) -> Markup {
    html! {
        div class="section" {
            h2 { (style.section_prefix) " " (section.label) " · " (section.title) }
            ul {
                @for entry in &section.entries {
                    (entry_item(entry))
                }
            }
        }
    }
}

fn entry_item(entry: &Entry) -> Markup {
    match entry.kind {
        MediaKind::Audio => html! {
            li {
                a href=(entry.locator) {
                    (entry.relative_name.as_str())
                    @if let Some(duration) = entry.duration {
                        " ... " (format_duration(duration))
                    }
                }
            }
        },
        MediaKind::Image => html! {
            li class="thumb-item" {
                img class="cover-img"
                    src=(entry.locator)
                    alt=(entry.relative_name.as_str())
                    title={ (entry.relative_name.as_str()) " (" (format_size(entry.size_bytes)) ")" };
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use compact_str::CompactString;
    use std::time::Duration;

    fn doc(sections: Vec<Section>) -> CatalogDocument {
        CatalogDocument {
            volume_id: "D:\\".into(),
            catalog_id: "AR-VD-001".into(),
            generated_at: Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap(),
            sections,
        }
    }

    fn audio(name: &str, secs: Option<u64>) -> Entry {
        Entry {
            kind: MediaKind::Audio,
            relative_name: CompactString::new(name),
            locator: format!("file:///D:/{name}"),
            size_bytes: 0,
            duration: secs.map(Duration::from_secs),
        }
    }

    #[test]
    fn header_and_footer_carry_identifiers() {
        let html = render_html(&doc(Vec::new()), &StyleOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Volume: D:\\ · Catalog: AR-VD-001"));
        assert!(html.contains("Catalogued 2024-05-17 · AR-VD-001"));
        assert!(!html.contains("class=\"section\""));
    }

    #[test]
    fn audio_lines_show_optional_duration() {
        let html = render_html(
            &doc(vec![Section {
                label: "A".into(),
                title: "Files in Root".into(),
                entries: vec![audio("song.mp3", Some(185)), audio("mystery.mp3", None)],
            }]),
            &StyleOptions::default(),
        );
        assert!(html.contains("<h2>Side A · Files in Root</h2>"));
        assert!(html.contains(">song.mp3 ... 03:05</a>"));
        assert!(html.contains(">mystery.mp3</a>"));
    }

    #[test]
    fn images_embed_their_locator() {
        let image = Entry {
            kind: MediaKind::Image,
            relative_name: CompactString::new("cover.jpg"),
            locator: "file:///D:/Rock/cover.jpg".into(),
            size_bytes: 2048,
            duration: None,
        };
        let html = render_html(
            &doc(vec![Section {
                label: "B".into(),
                title: "Rock".into(),
                entries: vec![image],
            }]),
            &StyleOptions::default(),
        );
        assert!(html.contains("src=\"file:///D:/Rock/cover.jpg\""));
        assert!(html.contains("cover.jpg (2.0 KB)"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_html(
            &doc(vec![Section {
                label: "A".into(),
                title: "<Rock & Roll>".into(),
                entries: vec![audio("a<b>.mp3", None)],
            }]),
            &StyleOptions::default(),
        );
        assert!(html.contains("&lt;Rock &amp; Roll&gt;"));
        assert!(html.contains("a&lt;b&gt;.mp3"));
    }

    #[test]
    fn footer_note_is_optional() {
        let style = StyleOptions {
            footer_note: Some("Physical music archive".into()),
            ..StyleOptions::default()
        };
        let html = render_html(&doc(Vec::new()), &style);
        assert!(html.contains("Physical music archive · Catalogued 2024-05-17"));
    }
}
