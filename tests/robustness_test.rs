use rs_mdchunks::{extract_semantic_chunks, markdown_to_html, Chunk, ChunkKind, MarkdownProcessor};
use std::time::{Duration, Instant};

#[test]
fn unclosed_link_is_recovered_as_text() {
    let chunks = extract_semantic_chunks("see [broken(link");
    assert_eq!(
        chunks,
        vec![Chunk::Paragraph {
            value: "see [broken(link".to_string()
        }]
    );
}

#[test]
fn unclosed_emphasis_is_recovered_as_text() {
    let chunks = extract_semantic_chunks("**not closed");
    assert_eq!(
        chunks,
        vec![Chunk::Paragraph {
            value: "**not closed".to_string()
        }]
    );
}

#[test]
fn heading_without_space_is_a_paragraph() {
    let chunks = extract_semantic_chunks("#NoSpace");
    assert_eq!(
        chunks,
        vec![Chunk::Paragraph {
            value: "#NoSpace".to_string()
        }]
    );
}

#[test]
fn seven_hashes_are_not_a_heading() {
    let chunks = extract_semantic_chunks("####### too deep");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind(), ChunkKind::Paragraph);
}

#[test]
fn arbitrary_bytes_as_text_do_not_panic() {
    let inputs = [
        "\0\u{1}\u{7f}",
        "]]]][[[[(((",
        "![](",
        "- \n- \n-",
        "> > > >",
        "*_*_*_*_",
        "\u{FEFF}# BOM heading",
        "emoji 🎉 and RTL שלום",
    ];
    for input in inputs {
        let _ = extract_semantic_chunks(input);
        assert!(markdown_to_html(input).is_ok(), "render failed for {input:?}");
    }
}

#[test]
fn repeated_calls_are_idempotent() {
    let markdown = "# T\n\nP [l](u)\n\n- a\n- b\n\n![i](x.png)";
    let processor = MarkdownProcessor::new();

    let first = processor.extract_semantic_chunks(markdown);
    let second = processor.extract_semantic_chunks(markdown);
    assert_eq!(first, second);

    let html_first = processor.markdown_to_html(markdown).expect("expected Ok(_)");
    let html_second = processor.markdown_to_html(markdown).expect("expected Ok(_)");
    assert_eq!(html_first, html_second);
}

#[test]
fn processor_can_be_shared_across_threads() {
    let processor = MarkdownProcessor::new();
    let expected = processor.extract_semantic_chunks("# Shared\n\n1. one\n2. two");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| processor.extract_semantic_chunks("# Shared\n\n1. one\n2. two"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    });
}

#[test]
fn deeply_nested_lists_complete_quickly() {
    let mut markdown = String::new();
    for depth in 0..200 {
        markdown.push_str(&"  ".repeat(depth));
        markdown.push_str("- item\n");
    }

    let start = Instant::now();
    let chunks = extract_semantic_chunks(&markdown);
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(chunks.iter().any(|chunk| chunk.kind() == ChunkKind::ListItem));
}

#[test]
fn extraction_with_tracing_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("rs_mdchunks=trace"))
        .with_test_writer()
        .try_init();

    let chunks = extract_semantic_chunks("# Logged\n\ntext");
    assert_eq!(chunks.len(), 2);
}
