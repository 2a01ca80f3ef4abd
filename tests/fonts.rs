use pdf_calendar::*;
use std::path::PathBuf;
use std::rc::Rc;

/// DejaVu Sans Mono, shipped under `tests/fonts` with its licence
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fonts")
        .join(name)
}

fn mono_config(bold: bool) -> CalendarConfig {
    let mut config = CalendarConfig {
        fonts: vec![FontConfig {
            name: "Mono".to_string(),
            regular: fixture("DejaVuSansMono.ttf"),
            bold: bold.then(|| fixture("DejaVuSansMono-Bold.ttf")),
        }],
        ..CalendarConfig::default()
    };
    config.style.family = "Mono".to_string();
    config
}

fn render(config: &CalendarConfig) -> String {
    let mut out: Vec<u8> = Vec::new();
    Generator::new(config)
        .unwrap()
        .render_month(2024, 1)
        .unwrap()
        .write(&mut out)
        .unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn loaded_families_measure_text() {
    let family = FontFamily::load(
        "Mono",
        &fixture("DejaVuSansMono.ttf"),
        Some(&fixture("DejaVuSansMono-Bold.ttf")),
    )
    .unwrap();
    assert_eq!(family.regular.name(), "DejaVu Sans Mono");
    assert_eq!(family.bold.name(), "DejaVu Sans Mono Bold");

    let width = family.variant(false).width_of_text("31", Pt(10.0));
    assert!(*width > 0.0);
    // monospaced: every digit has the same advance
    assert_eq!(width, family.variant(false).width_of_text("88", Pt(10.0)));
    assert!(*family.variant(true).width_of_text("January 2024", Pt(10.0)) > *width);
}

#[test]
fn regular_face_stands_in_for_bold() {
    let family = FontFamily::load("Mono", &fixture("DejaVuSansMono.ttf"), None).unwrap();
    assert!(Rc::ptr_eq(&family.regular, &family.bold));
}

#[test]
fn months_embed_truetype_fonts() {
    let text = render(&mono_config(true));
    assert!(text.starts_with("%PDF-"));
    for key in ["/Type0", "/CIDFontType2", "/FontFile2", "/ToUnicode", "/Identity-H"] {
        assert!(text.contains(key), "missing {key}");
    }
    assert!(text.contains("/BaseFont /DejaVuSansMono-Bold"));
    assert!(text.contains("/FontName /DejaVuSansMono-Bold"));
    assert!(!text.contains("/Helvetica"));
}

#[test]
fn regular_only_families_embed_one_face() {
    let text = render(&mono_config(false));
    assert!(text.contains("/BaseFont /DejaVuSansMono"));
    assert!(!text.contains("/BaseFont /DejaVuSansMono-Bold"));
    assert_eq!(text.matches("/FontFile2").count(), 1);
}

#[test]
fn missing_font_files_are_reported() {
    let mut config = mono_config(false);
    config.fonts[0].regular = fixture("NoSuchFont.ttf");
    assert!(matches!(Generator::new(&config), Err(CalendarError::Io(_))));
}
