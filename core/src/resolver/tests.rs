use super::*;
use crate::types::ResolverConfig;
use std::time::{Duration, Instant};

#[test]
fn mock_fills_every_field() {
    let resolver = MockResolver::with_delay(Duration::ZERO);

    let metadata = resolver
        .resolve("https://www.tiktok.com/@someone/video/1234567890123456789")
        .unwrap();

    let title = metadata.title.unwrap();
    let token = title.strip_prefix("TikTok Video ").unwrap();
    assert_eq!(token.len(), 11);
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );

    assert!(metadata.author.unwrap().starts_with("User_"));
    assert_eq!(
        metadata.thumbnail.unwrap(),
        format!("https://picsum.photos/seed/{token}/400/600")
    );

    let duration = metadata.duration.unwrap();
    assert!((10..70).contains(&duration));
}

#[test]
fn mock_waits_for_its_delay() {
    let resolver = MockResolver::with_delay(Duration::from_millis(20));

    let started = Instant::now();
    resolver.resolve("https://www.tiktok.com/t/abc").unwrap();

    assert!(started.elapsed() >= Duration::from_millis(20));
}

#[test]
fn mock_takes_delay_from_config() {
    let config = ResolverConfig { delay_ms: 250 };
    assert_eq!(
        MockResolver::new(&config).delay(),
        Duration::from_millis(250)
    );
    assert_eq!(MockResolver::default().delay(), Duration::from_secs(1));
}

#[test]
fn boxed_resolver_delegates() {
    let resolver: Box<dyn MetadataResolver> = Box::new(MockResolver::with_delay(Duration::ZERO));
    assert!(resolver.resolve("https://vm.tiktok.com/xyz").is_ok());
}
