use rs_mdchunks::{
    extract_semantic_chunks, extract_semantic_chunks_with_options, Chunk, ChunkKind, Options,
};

const MIXED: &str = "# Title\n\nIntro with *emphasis* only.\n\n![Logo](img/logo.png)\n\n1. Step  one\n2. Step two\n";

fn kinds(chunks: &[Chunk]) -> Vec<ChunkKind> {
    chunks.iter().map(Chunk::kind).collect()
}

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.include_headings);
    assert!(options.include_paragraphs);
    assert!(options.include_images);
    assert!(options.include_list_items);
    assert!(!options.skip_empty_chunks);
    assert!(!options.normalize_whitespace);
    assert!(options.base_url.is_none());
}

#[test]
fn extract_and_extract_with_default_options_match() {
    assert_eq!(
        extract_semantic_chunks(MIXED),
        extract_semantic_chunks_with_options(MIXED, &Options::default())
    );
}

#[test]
fn each_group_can_be_disabled() {
    let toggles: [(Options, ChunkKind); 4] = [
        (
            Options {
                include_headings: false,
                ..Options::default()
            },
            ChunkKind::Heading,
        ),
        (
            Options {
                include_paragraphs: false,
                ..Options::default()
            },
            ChunkKind::Paragraph,
        ),
        (
            Options {
                include_images: false,
                ..Options::default()
            },
            ChunkKind::Image,
        ),
        (
            Options {
                include_list_items: false,
                ..Options::default()
            },
            ChunkKind::ListItem,
        ),
    ];

    let all = extract_semantic_chunks(MIXED);
    for (options, disabled) in toggles {
        let chunks = extract_semantic_chunks_with_options(MIXED, &options);
        assert!(!kinds(&chunks).contains(&disabled), "{disabled} still present");

        let expected: Vec<Chunk> = all
            .iter()
            .filter(|chunk| chunk.kind() != disabled)
            .cloned()
            .collect();
        assert_eq!(chunks, expected);
    }
}

#[test]
fn skip_empty_chunks_drops_empty_text_but_keeps_images() {
    let options = Options {
        skip_empty_chunks: true,
        ..Options::default()
    };
    let chunks = extract_semantic_chunks_with_options("![Logo](logo.png)\n\n*only emphasis*", &options);
    assert_eq!(
        chunks,
        vec![Chunk::Image {
            alt_text: "Logo".to_string(),
            url: "logo.png".to_string()
        }]
    );

    let options = Options {
        skip_empty_chunks: true,
        ..Options::default()
    };
    let chunks = extract_semantic_chunks_with_options("![](blank.png)", &options);
    assert_eq!(
        chunks,
        vec![Chunk::Image {
            alt_text: String::new(),
            url: "blank.png".to_string()
        }]
    );
}

#[test]
fn normalize_whitespace_collapses_runs() {
    let options = Options {
        normalize_whitespace: true,
        ..Options::default()
    };
    let chunks = extract_semantic_chunks_with_options(MIXED, &options);

    assert!(chunks.contains(&Chunk::Paragraph {
        value: "Intro with only.".to_string()
    }));
    assert!(chunks.contains(&Chunk::ListItem {
        value: "Step one".to_string(),
        ordered: true
    }));

    let default_chunks = extract_semantic_chunks(MIXED);
    assert!(default_chunks.contains(&Chunk::ListItem {
        value: "Step  one".to_string(),
        ordered: true
    }));
}

#[test]
fn base_url_resolves_relative_image_urls_only() {
    let options = Options {
        base_url: Some("https://example.com/docs/readme.md".to_string()),
        ..Options::default()
    };
    let chunks = extract_semantic_chunks_with_options(
        "![a](img/a.png)\n\n![b](https://cdn.example.org/b.png)",
        &options,
    );
    let images: Vec<&Chunk> = chunks
        .iter()
        .filter(|chunk| chunk.kind() == ChunkKind::Image)
        .collect();

    assert_eq!(
        images,
        vec![
            &Chunk::Image {
                alt_text: "a".to_string(),
                url: "https://example.com/docs/img/a.png".to_string()
            },
            &Chunk::Image {
                alt_text: "b".to_string(),
                url: "https://cdn.example.org/b.png".to_string()
            },
        ]
    );
}

#[test]
fn unparseable_base_url_leaves_urls_untouched() {
    let options = Options {
        base_url: Some("::not a url::".to_string()),
        ..Options::default()
    };
    let chunks = extract_semantic_chunks_with_options("![a](img/a.png)", &options);
    assert_eq!(
        chunks[1],
        Chunk::Image {
            alt_text: "a".to_string(),
            url: "img/a.png".to_string()
        }
    );
}
