use std::thread;

use excerpt_core::selection::ContentExtractor;
use excerpt_core::types::ExtractionResult;
use excerpt_core::{Document, ExtractorConfig};

fn fixture_pages() -> Vec<Document> {
    vec![
        Document::from_html(
            "https://news.example/a",
            "<html><head><title>Library hours extended for the summer</title></head><body>\
             <nav>Home | Events</nav><div class=\"entry-content\">\
             <p>The city library announced that it will stay open until 9 pm through August.</p>\
             <p>Officials said the change followed a survey of 1,200 patrons last spring.</p>\
             <p>Weekend hours are unchanged, and the cafe will keep its usual schedule.</p>\
             <p>\"We heard people loud and clear,\" the head librarian told reporters.</p>\
             </div></body></html>",
        ),
        Document::from_html(
            "https://news.example/b",
            "<body><p>Nothing here is remarkable at all, honestly speaking. \
             The afternoon passed slowly and without much incident.</p></body>",
        ),
        Document::from_html("https://news.example/c", ""),
        Document::ingest(
            "https://news.example/d",
            vec![0xfe, 0xff, b'<', b'p', b'>', b'x'],
            None,
        ),
    ]
}

fn to_json(result: &ExtractionResult) -> String {
    serde_json::to_string_pretty(result).unwrap()
}

#[test]
fn extraction_is_byte_identical_across_runs() {
    let extractor = ContentExtractor::new(ExtractorConfig::v0()).unwrap();

    for doc in fixture_pages() {
        let first = to_json(&extractor.extract(&doc));
        let second = to_json(&extractor.extract(&doc));
        assert_eq!(first, second, "non-deterministic output for {}", doc.url.as_str());
    }
}

#[test]
fn separate_extractor_instances_agree() {
    let a = ContentExtractor::new(ExtractorConfig::v0()).unwrap();
    let b = ContentExtractor::new(ExtractorConfig::v0()).unwrap();

    for doc in fixture_pages() {
        assert_eq!(a.extract(&doc), b.extract(&doc));
    }
}

#[test]
fn concurrent_extraction_matches_sequential() {
    let extractor = ContentExtractor::new(ExtractorConfig::v0()).unwrap();
    let pages = fixture_pages();
    let expected: Vec<ExtractionResult> = pages.iter().map(|doc| extractor.extract(doc)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| pages.iter().map(|doc| extractor.extract(doc)).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
