//! Benchmarks for image registration and package output.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use svgdocx::{Document, to_xml_string};

const SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
  <rect width="200" height="100" fill="blue"/>
</svg>"#;

fn png_data() -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&200u32.to_be_bytes());
    data.extend_from_slice(&100u32.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.resize(16 * 1024, 0);
    data
}

/// A document with `count` SVG drawings, each in its own paragraph.
fn sample_document(count: usize) -> Document {
    let png = png_data();
    let mut doc = Document::new();
    for _ in 0..count {
        let (png_ref, svg_ref) = doc.add_image_svg(SVG, &png, 200, 100).unwrap();
        let para = doc.add_paragraph();
        let run = doc.add_run(para).unwrap();
        doc.add_drawing_inline_svg(run, &svg_ref, &png_ref).unwrap();
    }
    doc
}

// ============================================================================
// Document Building Benchmarks
// ============================================================================

fn bench_register_images(c: &mut Criterion) {
    let png = png_data();

    c.bench_function("register_svg_with_fallback", |b| {
        b.iter(|| {
            let mut doc = Document::new();
            for _ in 0..16 {
                doc.add_image_svg(SVG, &png, 200, 100).unwrap();
            }
            doc
        });
    });
}

fn bench_serialize_fragment(c: &mut Criterion) {
    let mut doc = sample_document(1);
    let (png_ref, svg_ref) = doc.add_image_svg(SVG, &png_data(), 200, 100).unwrap();
    let para = doc.add_paragraph();
    let run = doc.add_run(para).unwrap();
    let fragment = doc.add_drawing_inline_svg(run, &svg_ref, &png_ref).unwrap();

    c.bench_function("serialize_alternate_content", |b| {
        b.iter(|| to_xml_string(&fragment).unwrap());
    });
}

// ============================================================================
// Package Output Benchmarks
// ============================================================================

fn bench_write_docx(c: &mut Criterion) {
    let doc = sample_document(16);

    c.bench_function("write_docx", |b| {
        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            doc.save(&mut output).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_register_images,
    bench_serialize_fragment,
    bench_write_docx,
);
criterion_main!(benches);
