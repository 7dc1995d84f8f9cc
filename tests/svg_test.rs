//! SVG embedding tests.
//!
//! Registration, fragment construction and the serialized
//! `mc:AlternateContent` block, driven through the public API.

use std::collections::HashSet;

use svgdocx::{Document, Error, Image, ImageRef, SvgBlip, to_xml_string};

const SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
  <rect width="200" height="100" fill="blue"/>
  <text x="50" y="50" fill="white">Test</text>
</svg>"#;

/// A PNG signature and IHDR chunk for a 200x100 image. Enough for size
/// detection; the payload is never decoded.
fn png_data() -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&200u32.to_be_bytes());
    data.extend_from_slice(&100u32.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data
}

fn default_count(doc: &Document, tag: &str) -> usize {
    doc.content_types()
        .defaults()
        .filter(|(ext, _)| *ext == tag)
        .count()
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_svg_and_png() {
    let mut doc = Document::new();
    let (png, svg) = doc
        .add_image_svg(SVG, &png_data(), 200, 100)
        .expect("Failed to register images");

    assert_ne!(png.rel_id(), svg.rel_id(), "Tokens must differ");
    assert!(!png.rel_id().unwrap().is_empty());
    assert!(!svg.rel_id().unwrap().is_empty());
    assert_eq!((png.width(), png.height()), (200, 100));

    assert_eq!(doc.content_types().default_for("png"), Some("image/png"));
    assert_eq!(doc.content_types().default_for("svg"), Some("image/svg+xml"));
    assert_eq!(doc.image_data(&svg).unwrap().as_ref(), SVG);
}

#[test]
fn test_repeated_registration_keeps_one_default_per_format() {
    let mut doc = Document::new();
    let png = png_data();

    let mut tokens = HashSet::new();
    for _ in 0..3 {
        let svg_ref = doc
            .add_image(Image::new(SVG.to_vec(), 200, 100, "svg"))
            .unwrap();
        let png_ref = doc
            .add_image(Image::new(png.clone(), 200, 100, "png"))
            .unwrap();
        tokens.insert(svg_ref.rel_id().unwrap().to_string());
        tokens.insert(png_ref.rel_id().unwrap().to_string());
    }

    assert_eq!(doc.image_count(), 6);
    assert_eq!(tokens.len(), 6, "Every image gets its own token");
    assert_eq!(default_count(&doc, "svg"), 1);
    assert_eq!(default_count(&doc, "png"), 1);
}

#[test]
fn test_register_empty_input_changes_nothing() {
    let mut doc = Document::new();
    let defaults_before = doc.content_types().defaults().count();

    let err = doc.add_image_svg(&[], &[], 0, 0).unwrap_err();

    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    assert_eq!(doc.image_count(), 0);
    assert!(doc.relationships().is_empty());
    assert_eq!(doc.content_types().defaults().count(), defaults_before);
}

// ============================================================================
// Conditional content
// ============================================================================

#[test]
fn test_build_fragment_branches() {
    let mut doc = Document::new();
    let (png, svg) = doc.add_image_svg(SVG, &png_data(), 200, 100).unwrap();
    let para = doc.add_paragraph();
    let run = doc.add_run(para).unwrap();

    let fragment = doc.add_drawing_inline_svg(run, &svg, &png).unwrap();

    assert_eq!(fragment.choice.extent, fragment.fallback.extent);
    assert_eq!(
        fragment.choice.svg_blip().map(|b| b.embed.as_str()),
        svg.rel_id()
    );
    assert!(fragment.fallback.svg_blip().is_none());
    assert_eq!(fragment.fallback.picture.embed, png.rel_id().unwrap());

    let xml = to_xml_string(&fragment).unwrap();
    assert!(xml.contains("<mc:AlternateContent "));
    assert!(xml.contains(r#"<mc:Choice Requires="asvg">"#));
    assert!(xml.contains("<mc:Fallback>"));
    assert_eq!(SvgBlip::from_xml(&xml).unwrap().embed, svg.rel_id().unwrap());
}

#[test]
fn test_build_with_unlinked_png_fails() {
    let mut doc = Document::new();
    let svg = doc
        .add_image(Image::new(SVG.to_vec(), 200, 100, "svg"))
        .unwrap();
    let png = ImageRef::unlinked(&Image::new(png_data(), 200, 100, "png"));
    let para = doc.add_paragraph();
    let run = doc.add_run(para).unwrap();

    let err = doc.add_drawing_inline_svg(run, &svg, &png).unwrap_err();

    assert!(matches!(err, Error::Reference(_)), "got {err:?}");
    assert!(doc.run(run).unwrap().extra().is_empty());
}

#[test]
fn test_build_with_handles_from_another_document_fails() {
    let mut other = Document::new();
    let (png, svg) = other.add_image_svg(SVG, &png_data(), 200, 100).unwrap();

    let mut doc = Document::new();
    doc.add_image(Image::new(b"GIF89a".to_vec(), 200, 100, "gif"))
        .unwrap();
    let para = doc.add_paragraph();
    let run = doc.add_run(para).unwrap();

    let err = doc.add_drawing_inline_svg(run, &svg, &png).unwrap_err();

    assert!(matches!(err, Error::Reference(_)), "got {err:?}");
    assert!(doc.run(run).unwrap().extra().is_empty());
    assert!(doc.image_data(&svg).is_err());
}

#[test]
fn test_fragment_ids_distinct_across_calls() {
    let mut doc = Document::new();
    let (png, svg) = doc.add_image_svg(SVG, &png_data(), 200, 100).unwrap();
    let para = doc.add_paragraph();
    let run = doc.add_run(para).unwrap();

    let mut ids = HashSet::new();
    for _ in 0..4 {
        let fragment = doc.add_drawing_inline_svg(run, &svg, &png).unwrap();
        assert!(ids.insert(fragment.choice.doc_pr_id));
        assert!(ids.insert(fragment.fallback.doc_pr_id));
        assert!(fragment.choice.doc_pr_id <= 0x7FFF_FFFF);
    }
    assert_eq!(doc.run(run).unwrap().extra().len(), 4);
}
