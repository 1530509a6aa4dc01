
#[path = "../../../tests/common/pdf.rs"]
mod pdf_fixtures;

pub(crate) use pdf_fixtures::{PageFont, build_pdf, build_pdf_with_fonts};
