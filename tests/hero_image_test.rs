use page_clip::{clip_summary, ClipOptions, Page, ScrapeData};

async fn summarize(html: &str, options: &ClipOptions) -> ScrapeData {
    let page = match Page::new(html, "https://example.com/gallery/") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    match clip_summary(&page, options).await {
        Ok(data) => data,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[tokio::test]
async fn og_image_before_twitter_image() {
    let html = r#"
        <html><head>
          <meta name="twitter:image" content="https://example.com/twitter.jpg">
          <meta property="og:image" content="https://example.com/og.jpg">
        </head><body></body></html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(
        data.hero,
        vec!["https://example.com/og.jpg", "https://example.com/twitter.jpg"]
    );
}

#[tokio::test]
async fn hero_never_exceeds_four() {
    let images: String = (0..10)
        .map(|i| format!(r#"<img src="/photo-{i}.jpg" width="1024" height="768">"#))
        .collect();
    let html = format!(
        r#"<html><head><meta property="og:image" content="/cover.jpg"></head><body>{images}</body></html>"#
    );

    let data = summarize(&html, &ClipOptions::default()).await;
    assert_eq!(data.hero.len(), 4);
    assert_eq!(data.hero[0], "https://example.com/cover.jpg");
    assert_eq!(data.hero[3], "https://example.com/photo-2.jpg");
}

#[tokio::test]
async fn small_images_are_not_heroes() {
    let html = r#"
        <html><body>
          <img src="/icon.png" width="64" height="64">
          <img src="/banner.png" width="1200" height="200">
          <img src="/photo.jpg" width="800" height="600">
        </body></html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.hero, vec!["https://example.com/photo.jpg"]);
}

#[tokio::test]
async fn duplicates_are_kept() {
    let html = r#"
        <html><head>
          <meta property="og:image" content="/same.jpg">
          <meta name="twitter:image" content="/same.jpg">
        </head><body></body></html>
    "#;

    let data = summarize(html, &ClipOptions::default()).await;
    assert_eq!(data.hero.len(), 2);
    assert_eq!(data.hero[0], data.hero[1]);
}

#[tokio::test]
async fn limit_is_configurable() {
    let html = r#"
        <html><head>
          <meta property="og:image" content="/a.jpg">
          <meta property="og:image" content="/b.jpg">
        </head><body></body></html>
    "#;
    let options = ClipOptions {
        hero_limit: 1,
        ..ClipOptions::default()
    };

    let data = summarize(html, &options).await;
    assert_eq!(data.hero, vec!["https://example.com/a.jpg"]);
}

#[tokio::test]
async fn limit_never_exceeds_four() {
    let imgs: String = (0..10)
        .map(|i| format!(r#"<img src="/photo-{i}.jpg" width="900" height="900">"#))
        .collect();
    let html = format!("<html><head></head><body>{imgs}</body></html>");
    let options = ClipOptions {
        hero_limit: 10,
        ..ClipOptions::default()
    };

    let data = summarize(&html, &options).await;
    assert_eq!(data.hero.len(), 4);
    assert_eq!(data.hero[0], "https://example.com/photo-0.jpg");
}
