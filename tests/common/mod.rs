//! Read generated decks back with `zip` and `quick-xml`.
#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Text content of one slide as PowerPoint would show it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideContent {
    pub title: String,
    /// Subtitle or content placeholder text, if the slide has one
    pub body: Option<String>,
    pub xml: String,
}

pub fn open(path: &Path) -> zip::ZipArchive<File> {
    zip::ZipArchive::new(File::open(path).unwrap()).unwrap()
}

pub fn part_names(path: &Path) -> Vec<String> {
    let archive = open(path);
    archive.file_names().map(str::to_string).collect()
}

pub fn read_part(path: &Path, name: &str) -> String {
    let mut archive = open(path);
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Slides in presentation order, following `p:sldIdLst`.
pub fn slides(path: &Path) -> Vec<SlideContent> {
    let presentation = read_part(path, "ppt/presentation.xml");
    let rels = read_part(path, "ppt/_rels/presentation.xml.rels");

    slide_rel_ids(&presentation)
        .into_iter()
        .map(|r_id| {
            let target = rel_target(&rels, &r_id);
            let xml = read_part(path, &format!("ppt/{target}"));
            parse_slide(&xml)
        })
        .collect()
}

fn slide_rel_ids(presentation: &str) -> Vec<String> {
    let mut reader = Reader::from_str(presentation);
    let mut ids = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"p:sldId" => {
                let attr = e.try_get_attribute("r:id").unwrap().unwrap();
                ids.push(String::from_utf8(attr.value.into_owned()).unwrap());
            },
            Event::Eof => break,
            _ => {},
        }
    }
    ids
}

fn rel_target(rels: &str, r_id: &str) -> String {
    let mut reader = Reader::from_str(rels);
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"Relationship" => {
                let id = e.try_get_attribute("Id").unwrap().unwrap();
                if id.value.as_ref() == r_id.as_bytes() {
                    let target = e.try_get_attribute("Target").unwrap().unwrap();
                    return String::from_utf8(target.value.into_owned()).unwrap();
                }
            },
            Event::Eof => panic!("no relationship {r_id}"),
            _ => {},
        }
    }
}

fn parse_slide(xml: &str) -> SlideContent {
    let mut reader = Reader::from_str(xml);
    let mut title = None;
    let mut body = None;

    let mut ph_type: Option<String> = None;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"p:sp" => {
                    ph_type = None;
                    paragraphs.clear();
                },
                b"a:p" => paragraphs.push(String::new()),
                b"a:br" => push_line_break(&mut paragraphs),
                b"a:t" => in_text = true,
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"p:ph" => {
                    ph_type = Some(match e.try_get_attribute("type").unwrap() {
                        Some(attr) => String::from_utf8(attr.value.into_owned()).unwrap(),
                        None => "body".to_string(),
                    });
                },
                b"a:p" => paragraphs.push(String::new()),
                b"a:br" => push_line_break(&mut paragraphs),
                _ => {},
            },
            Event::Text(t) if in_text => {
                if let Some(p) = paragraphs.last_mut() {
                    p.push_str(&t.decode().unwrap());
                }
            },
            Event::GeneralRef(r) if in_text => {
                let resolved = match r.resolve_char_ref().unwrap() {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = r.decode().unwrap();
                        resolve_predefined_entity(&name).unwrap().to_string()
                    },
                };
                if let Some(p) = paragraphs.last_mut() {
                    p.push_str(&resolved);
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"p:sp" => {
                    let text = paragraphs.join("\n");
                    match ph_type.as_deref() {
                        Some("title") | Some("ctrTitle") => title = Some(text),
                        _ => body = Some(text),
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    SlideContent {
        title: title.unwrap_or_default(),
        body,
        xml: xml.to_string(),
    }
}

fn push_line_break(paragraphs: &mut [String]) {
    if let Some(p) = paragraphs.last_mut() {
        p.push('\u{b}');
    }
}
