use super::*;

mod extract_video_id {
    use super::*;

    #[test]
    fn test_full_video_link() {
        let id = extract_video_id("https://www.tiktok.com/@some.user-1/video/7234567890123456789?lang=en");
        assert_eq!(id.as_deref(), Some("7234567890123456789"));
    }

    #[test]
    fn test_short_t_link() {
        let id = extract_video_id("https://www.tiktok.com/t/ZTRabc123/");
        assert_eq!(id.as_deref(), Some("ZTRabc123"));
    }

    #[test]
    fn test_vm_link() {
        let id = extract_video_id("https://vm.tiktok.com/ZMabc_12/");
        assert_eq!(id.as_deref(), Some("ZMabc_12"));
    }

    #[test]
    fn test_link_without_scheme() {
        let id = extract_video_id("tiktok.com/@user/video/123");
        assert_eq!(id.as_deref(), Some("123"));
    }

    #[test]
    fn test_link_inside_text() {
        let id = extract_video_id("watch this https://www.tiktok.com/@u/video/123 lol");
        assert_eq!(id.as_deref(), Some("123"));
    }

    #[test]
    fn test_bare_numeric_id() {
        let id = extract_video_id("see 72345678901234567890 here");
        assert_eq!(id.as_deref(), Some("7234567890123456789"));
    }

    #[test]
    fn test_short_digit_run_is_not_an_id() {
        assert_eq!(extract_video_id("123456789012345678"), None);
    }

    #[test]
    fn test_other_host() {
        assert_eq!(
            extract_video_id("https://example.com/@user/video/123"),
            None
        );
    }

    #[test]
    fn test_profile_link_has_no_id() {
        assert_eq!(extract_video_id("https://www.tiktok.com/@user"), None);
    }
}

mod urls {
    use super::*;

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("https://www.tiktok.com/@u/video/42"),
            "https://www.tiktok.com/embed/v2/42"
        );
        assert_eq!(embed_url("not a link"), "");
    }

    #[test]
    fn test_direct_url() {
        assert_eq!(
            direct_url("https://vm.tiktok.com/abc"),
            "https://www.tiktok.com/video/abc"
        );
        assert_eq!(direct_url("not a link"), "not a link");
    }

    #[test]
    fn test_embed_html_cites_link() {
        let link = "https://www.tiktok.com/@u/video/42";
        let html = embed_html(link);

        assert!(html.contains(r#"cite="https://www.tiktok.com/@u/video/42""#));
        assert!(html.contains(r#"data-video-id="42""#));
        assert!(html.contains("https://www.tiktok.com/embed.js"));
    }
}
