//! PDF fixtures, shared by the unit tests in `src/parsers/tests` and the
//! integration tests.
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// Font a fixture page is set in
#[derive(Debug, Clone, Copy)]
pub enum PageFont {
    /// Standard 14 font, decodes to plain text
    Courier,
    /// Composite font with Identity-H encoding and no ToUnicode map,
    /// which text extraction cannot decode
    IdentityWithoutUnicode,
}

impl PageFont {
    fn dictionary(self) -> Dictionary {
        match self {
            PageFont::Courier => dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Courier",
            },
            PageFont::IdentityWithoutUnicode => dictionary! {
                "Type" => "Font",
                "Subtype" => "Type0",
                "BaseFont" => "NoUnicode",
                "Encoding" => "Identity-H",
            },
        }
    }
}

/// Builds a PDF with one Courier page per entry
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let pages = pages
        .iter()
        .map(|text| (PageFont::Courier, *text))
        .collect::<Vec<_>>();
    build_pdf_with_fonts(&pages)
}

/// Builds a PDF with one page per entry, each in its own font
pub fn build_pdf_with_fonts(pages: &[(PageFont, &str)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for (font, text) in pages {
        let font_id = doc.add_object(font.dictionary());
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => count,
        "Kids" => kids,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
