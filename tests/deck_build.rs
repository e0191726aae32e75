#![cfg(feature = "ooxml")]

mod common;

use chrono::{DateTime, Utc};
use opd_deck::Error;
use opd_deck::presentation::{
    DeckBuilder, DeckMetadata, LayoutKind, SlideSpec, StylePalette, TitleStyle, build, content,
};
use proptest::prelude::*;
use std::fs;

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-15T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn two_slides() -> Vec<SlideSpec> {
    vec![
        SlideSpec::new("Title", LayoutKind::Title, ""),
        SlideSpec::new("Summary", LayoutKind::TitleAndBody, "Point A\nPoint B"),
    ]
}

#[test]
fn test_two_slide_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pptx");

    let report = build(&two_slides(), &StylePalette::default(), &path).unwrap();
    assert_eq!(report.slide_count, 2);
    assert!(path.exists());

    let slides = common::slides(&path);
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title, "Title");
    assert_eq!(slides[0].body, None);
    assert_eq!(slides[1].title, "Summary");
    assert_eq!(slides[1].body.as_deref(), Some("Point A\nPoint B"));
}

#[test]
fn test_package_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pptx");
    build(&two_slides(), &StylePalette::default(), &path).unwrap();

    let names = common::part_names(&path);
    assert_eq!(names[0], "[Content_Types].xml");
    for required in [
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/slideLayout2.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide2.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {required}");
    }

    let content_types = common::read_part(&path, "[Content_Types].xml");
    assert!(content_types.contains(r#"PartName="/ppt/slides/slide2.xml""#));

    let slide_rels = common::read_part(&path, "ppt/slides/_rels/slide2.xml.rels");
    assert!(slide_rels.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));
}

#[test]
fn test_built_in_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(content::DEFAULT_OUTPUT);
    let deck = content::opd_emr_deck().unwrap();

    let report = DeckBuilder::new(deck.palette.clone())
        .with_metadata(deck.metadata.clone())
        .build(&deck.slides, &path)
        .unwrap();
    assert_eq!(report.slide_count, 14);

    let slides = common::slides(&path);
    assert_eq!(slides.len(), 14);
    for (slide, spec) in slides.iter().zip(&deck.slides) {
        assert_eq!(slide.title, spec.title);
        if spec.layout_kind == LayoutKind::TitleAndBody {
            assert_eq!(slide.body.as_deref(), Some(spec.body_text.as_str()));
        }
    }
    assert!(slides[8].body.as_deref().unwrap().contains("(<200ms average)"));

    let core = common::read_part(&path, "docProps/core.xml");
    assert!(core.contains("<dc:title>OPD-EMR System Overview</dc:title>"));
}

#[test]
fn test_title_style_touches_only_the_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styled.pptx");
    let specs = vec![
        SlideSpec::new("OPD-EMR", LayoutKind::Title, "Subtitle line\nSecond line")
            .with_title_style(TitleStyle::emphasis("primary")),
        SlideSpec::new("Plain", LayoutKind::TitleAndBody, "Body"),
    ];
    build(&specs, &StylePalette::healthcare(), &path).unwrap();

    let slides = common::slides(&path);
    let styled = &slides[0].xml;
    assert_eq!(styled.matches(r#"sz="4400""#).count(), 1);
    assert_eq!(styled.matches(r#"b="1""#).count(), 1);
    assert_eq!(styled.matches(r#"<a:srgbClr val="1E40AF"/>"#).count(), 1);
    assert_eq!(slides[0].body.as_deref(), Some("Subtitle line\nSecond line"));

    let plain = &slides[1].xml;
    assert!(!plain.contains("sz="));
    assert!(!plain.contains("srgbClr"));
}

#[test]
fn test_title_style_survives_empty_first_line() {
    let dir = tempfile::tempdir().unwrap();
    for (index, title) in ["", "\nSecond line"].into_iter().enumerate() {
        let path = dir.path().join(format!("empty-title-{index}.pptx"));
        let specs = vec![
            SlideSpec::new(title, LayoutKind::Title, "")
                .with_title_style(TitleStyle::emphasis("primary")),
        ];
        build(&specs, &StylePalette::healthcare(), &path).unwrap();

        let slides = common::slides(&path);
        assert_eq!(slides[0].title, title);
        let xml = &slides[0].xml;
        assert!(xml.contains(r#"<a:endParaRPr lang="en-US" dirty="0" sz="4400" b="1">"#));
        assert_eq!(xml.matches(r#"<a:srgbClr val="1E40AF"/>"#).count(), 1);
    }
}

#[test]
fn test_vertical_tab_becomes_line_break() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soft-break.pptx");
    let specs = vec![SlideSpec::new("Notes", LayoutKind::TitleAndBody, "a\u{b}b\nc")];
    build(&specs, &StylePalette::default(), &path).unwrap();

    let slides = common::slides(&path);
    assert_eq!(slides[0].body.as_deref(), Some("a\u{b}b\nc"));
    assert_eq!(slides[0].xml.matches("<a:br>").count(), 1);
}

#[test]
fn test_rebuild_is_identical_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pptx");
    fs::write(&path, b"not a presentation").unwrap();

    let builder = DeckBuilder::default().with_metadata(DeckMetadata {
        created: Some(fixed_time()),
        ..Default::default()
    });
    builder.build(&two_slides(), &path).unwrap();
    let first = fs::read(&path).unwrap();
    builder.build(&two_slides(), &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(&first[..4], b"PK\x03\x04");
    assert_eq!(common::slides(&path).len(), 2);
}

#[test]
fn test_missing_directory_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pptx");

    let err = build(&two_slides(), &StylePalette::default(), &path).unwrap_err();
    assert!(matches!(err, Error::Build(_)));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_leaves_existing_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    let path = locked.join("out.pptx");
    fs::write(&path, b"previous").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users ignore directory permissions.
    if fs::write(locked.join("probe"), b"").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = build(&two_slides(), &StylePalette::default(), &path).unwrap_err();
    assert!(matches!(err, Error::Build(_)));
    assert_eq!(fs::read(&path).unwrap(), b"previous");
    assert_eq!(fs::read_dir(&locked).unwrap().count(), 1);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_invalid_specs_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pptx");

    let err = build(&[], &StylePalette::default(), &path).unwrap_err();
    assert!(matches!(err, Error::Build(_)));

    let specs = vec![
        SlideSpec::new("Title", LayoutKind::Title, "")
            .with_title_style(TitleStyle::emphasis("magenta")),
    ];
    let err = build(&specs, &StylePalette::default(), &path).unwrap_err();
    assert!(err.to_string().contains("magenta"));
    assert!(!path.exists());
}

fn layout_strategy() -> impl Strategy<Value = LayoutKind> {
    prop_oneof![Just(LayoutKind::Title), Just(LayoutKind::TitleAndBody)]
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9 .&<>•✅]{0,16}", 1..5).prop_map(|lines| lines.join("\n"))
}

fn spec_strategy() -> impl Strategy<Value = SlideSpec> {
    ("[A-Za-z0-9][A-Za-z0-9 &<>]{0,24}", layout_strategy(), body_strategy())
        .prop_map(|(title, kind, body)| SlideSpec::new(title, kind, body))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_slides_keep_count_and_order(specs in prop::collection::vec(spec_strategy(), 1..8)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let report = build(&specs, &StylePalette::default(), &path);
        prop_assert!(report.is_ok(), "build failed: {:?}", report.err());

        let slides = common::slides(&path);
        prop_assert_eq!(slides.len(), specs.len());
        for (slide, spec) in slides.iter().zip(&specs) {
            prop_assert_eq!(&slide.title, &spec.title);
            let expected = match spec.layout_kind {
                LayoutKind::Title if spec.body_text.is_empty() => None,
                _ => Some(spec.body_text.clone()),
            };
            prop_assert_eq!(&slide.body, &expected);
        }
    }
}
