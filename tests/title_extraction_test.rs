use page_clip::{clip_summary, ClipOptions, Page, ScrapeData};

async fn summarize(html: &str, options: &ClipOptions) -> ScrapeData {
    let page = match Page::new(html, "https://example.com/article") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    match clip_summary(&page, options).await {
        Ok(data) => data,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[tokio::test]
async fn title_from_og_title() {
    let html = r#"
        <html>
          <head>
            <title>Document Title | Site</title>
            <meta property="og:title" content="OG Title" />
            <meta name="twitter:title" content="Twitter Title" />
          </head>
          <body><h1>Heading</h1></body>
        </html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "OG Title");
}

#[tokio::test]
async fn title_from_twitter_title_when_og_missing() {
    let html = r#"
        <html>
          <head><meta name="twitter:title" content="Twitter Title" /></head>
          <body><h1>Heading</h1></body>
        </html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "Twitter Title");
}

#[tokio::test]
async fn entry_title_beats_title_element() {
    let html = r#"
        <html>
          <head><title>Document Title</title></head>
          <body><article class="hentry"><h2 class="entry-title">Entry Title</h2></article></body>
        </html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "Entry Title");
}

#[tokio::test]
async fn title_element_is_cleaned() {
    let html = r#"
        <html>
          <head><title>My Great Post | My Blog</title></head>
          <body><h1>Heading</h1></body>
        </html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "My Great Post");
}

#[tokio::test]
async fn short_title_keeps_its_separator() {
    let html = r#"<html><head><title>A | B</title></head><body></body></html>"#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "A | B");
}

#[tokio::test]
async fn title_falls_back_to_heading() {
    let html = r#"
        <html>
          <head></head>
          <body><div><h2>Second Level</h2><h1>First Level</h1></div></body>
        </html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.title, "Second Level");
}

#[tokio::test]
async fn empty_document_uses_every_fallback() {
    let html = r#"<html><head></head><body><div>Nothing to see.</div></body></html>"#;
    let options = ClipOptions {
        title_fallback: "Untitled".to_string(),
        description_fallback: "No description".to_string(),
        name_fallback: "example.com".to_string(),
        ..ClipOptions::default()
    };

    let data = summarize(html, &options).await;
    assert_eq!(data.title, "Untitled");
    assert_eq!(data.description, "No description");
    assert_eq!(data.name, "example.com");
    assert_eq!(data.icon, None);
    assert!(data.hero.is_empty());
}
