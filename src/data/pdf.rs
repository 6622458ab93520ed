//! PDF text extraction for rate sheets

use crate::error::{Result, SbpError};
use crate::parser::parse_exchange_rate_text;
use crate::types::{ParseContext, RateSheet};
use lopdf::Document;

/// Turns raw document bytes into plain text
pub trait TextExtractor {
    fn extract_text(&self, content: &[u8]) -> Result<String>;
}

/// lopdf-backed extractor
///
/// Pages are read in page order and their text concatenated. A page whose
/// text cannot be extracted is skipped rather than failing the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, content: &[u8]) -> Result<String> {
        let document = Document::load_mem(content)
            .map_err(|e| SbpError::Pdf(format!("failed to create PDF reader: {}", e)))?;

        let mut full_text = String::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(text) => full_text.push_str(&text),
                Err(e) => {
                    log::debug!("Skipping page {}: {}", page_number, e);
                }
            }
        }

        Ok(full_text)
    }
}

/// Extract text from a PDF rate sheet and parse it
pub fn parse_pdf_content(content: &[u8], ctx: &ParseContext) -> Result<RateSheet> {
    parse_with(&PdfTextExtractor, content, ctx)
}

/// Extract text with `extractor`, then parse it
pub fn parse_with<E: TextExtractor + ?Sized>(
    extractor: &E,
    content: &[u8],
    ctx: &ParseContext,
) -> Result<RateSheet> {
    let text = extractor.extract_text(content)?;
    parse_exchange_rate_text(&text, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use chrono::NaiveDate;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    struct PlainText;

    impl TextExtractor for PlainText {
        fn extract_text(&self, content: &[u8]) -> Result<String> {
            Ok(String::from_utf8_lossy(content).into_owned())
        }
    }

    /// One page of a generated sheet; `broken` pages carry an invalid `Tf`
    struct Page<'a> {
        lines: &'a [&'a str],
        broken: bool,
    }

    fn page_content(page: &Page) -> Vec<u8> {
        let mut operations = Vec::new();
        for (i, line) in page.lines.iter().enumerate() {
            let font = if page.broken {
                Object::Integer(1)
            } else {
                Object::from("F1")
            };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![font, Object::Integer(12)]));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(72), Object::Integer(760 - 16 * i as i64)],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        Content { operations }.encode().unwrap()
    }

    fn build_pdf(pages: &[Page]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for page in pages {
            let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(page)));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn ctx() -> ParseContext {
        ParseContext::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "file:///tmp/sheet.pdf")
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = PdfTextExtractor::new().extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(SbpError::Pdf(_))));
    }

    #[test]
    fn test_parse_pdf_content_propagates_pdf_error() {
        let result = parse_pdf_content(b"", &ctx());
        assert!(matches!(result, Err(SbpError::Pdf(_))));
    }

    #[test]
    fn test_parse_with_custom_extractor() {
        let text = b"CURRENCY\nUSD\nREADY\n279.10\n";
        let sheet = parse_with(&PlainText, text, &ctx()).unwrap();
        assert_eq!(sheet[&Currency::USD].spot_rate(), Some("279.10"));
        assert_eq!(sheet[&Currency::USD].url, "file:///tmp/sheet.pdf");
    }

    #[test]
    fn test_extracts_lines_from_generated_pdf() {
        let pdf = build_pdf(&[Page {
            lines: &["CURRENCY", "USD", "EUR", "READY", "281.4500", "327.1020"],
            broken: false,
        }]);

        let text = PdfTextExtractor::new().extract_text(&pdf).unwrap();
        assert_eq!(text, "CURRENCY\nUSD\nEUR\nREADY\n281.4500\n327.1020\n");

        let sheet = parse_pdf_content(&pdf, &ctx()).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet[&Currency::USD].spot_rate(), Some("281.4500"));
        assert_eq!(sheet[&Currency::EUR].spot_rate(), Some("327.1020"));
    }

    #[test]
    fn test_pages_concatenated_in_order() {
        let pdf = build_pdf(&[
            Page {
                lines: &["CURRENCY", "USD", "GBP"],
                broken: false,
            },
            Page {
                lines: &["READY", "281.4500", "379.8125"],
                broken: false,
            },
        ]);

        let text = PdfTextExtractor::new().extract_text(&pdf).unwrap();
        assert_eq!(text, "CURRENCY\nUSD\nGBP\nREADY\n281.4500\n379.8125\n");

        let sheet = parse_pdf_content(&pdf, &ctx()).unwrap();
        assert_eq!(sheet[&Currency::GBP].spot_rate(), Some("379.8125"));
    }

    #[test]
    fn test_failing_page_is_skipped() {
        let pdf = build_pdf(&[
            Page {
                lines: &["CURRENCY", "USD", "EUR"],
                broken: false,
            },
            Page {
                lines: &["JPY", "CHF"],
                broken: true,
            },
            Page {
                lines: &["READY", "281.4500", "327.1020"],
                broken: false,
            },
        ]);

        let text = PdfTextExtractor::new().extract_text(&pdf).unwrap();
        assert!(!text.contains("JPY"));

        let sheet = parse_pdf_content(&pdf, &ctx()).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet[&Currency::USD].spot_rate(), Some("281.4500"));
        assert_eq!(sheet[&Currency::EUR].spot_rate(), Some("327.1020"));
        assert!(!sheet.contains_key(&Currency::JPY));
    }
}
