//! Shared formatting helpers composed by the templates.
//!
//! Font-size and border lookups, plus the two flavours of social link group:
//! legacy inline icons ([`legacy_social_links`]) and styled badges
//! ([`modern_social_links`]). Both flavours share presence, order and URL rules;
//! only the wrapper markup differs.

use std::fmt::Write as _;

use crate::markup::Escaping;
use crate::signature::{BorderStyle, FontSize, SignatureData};

/// Pixel sizes for headline, subhead and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTokens {
    pub name: &'static str,
    pub job: &'static str,
    pub text: &'static str,
}

pub fn size_tokens(size: FontSize) -> SizeTokens {
    match size {
        FontSize::Small => SizeTokens {
            name: "16px",
            job: "13px",
            text: "11px",
        },
        FontSize::Medium => SizeTokens {
            name: "18px",
            job: "14px",
            text: "12px",
        },
        FontSize::Large => SizeTokens {
            name: "20px",
            job: "16px",
            text: "14px",
        },
    }
}

/// A 2px right border in the given style and color, or nothing for [`BorderStyle::None`].
///
/// The color is passed through untouched.
pub fn border_declaration(style: BorderStyle, color: &str) -> String {
    match style {
        BorderStyle::None => String::new(),
        other => format!("border-right: 2px {} {color};", other.as_str()),
    }
}

/// Strip the scheme from a website for use as a link label.
pub fn display_url(website: &str) -> &str {
    website
        .strip_prefix("https://")
        .or_else(|| website.strip_prefix("http://"))
        .unwrap_or(website)
}

const INSTAGRAM_GRADIENT: &str =
    "linear-gradient(45deg, #f09433, #e6683c, #dc2743, #cc2366, #bc1888)";

/// Supported social networks, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    LinkedIn,
    Twitter,
}

impl SocialNetwork {
    /// Every network in the fixed rendering order.
    pub const ALL: [Self; 4] = [Self::Instagram, Self::Facebook, Self::LinkedIn, Self::Twitter];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }

    /// Canonical profile URL prefix; the bare handle is appended to it.
    pub fn profile_prefix(&self) -> &'static str {
        match self {
            Self::Instagram => "https://www.instagram.com/",
            Self::Facebook => "https://www.facebook.com/",
            Self::LinkedIn => "https://www.linkedin.com/in/",
            Self::Twitter => "https://twitter.com/",
        }
    }

    /// Hosts recognised when a full URL is pasted into a handle field.
    pub(crate) fn hosts(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["instagram.com"],
            Self::Facebook => &["facebook.com", "fb.com"],
            Self::LinkedIn => &["linkedin.com"],
            Self::Twitter => &["twitter.com", "x.com"],
        }
    }

    /// Path in front of the handle in a profile URL.
    pub(crate) fn profile_path(&self) -> &'static str {
        match self {
            Self::LinkedIn => "in/",
            _ => "",
        }
    }

    /// First path segments that name site pages rather than profiles.
    pub(crate) fn reserved_paths(&self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["p", "reel", "reels", "explore", "stories", "accounts"],
            Self::Facebook => &["profile.php", "pages", "groups", "events", "people", "watch"],
            Self::LinkedIn => &[],
            Self::Twitter => &["i", "home", "search", "intent", "hashtag", "share"],
        }
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            Self::Instagram => "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/Instagram_icon.png/600px-Instagram_icon.png",
            Self::Facebook => "https://upload.wikimedia.org/wikipedia/commons/thumb/0/05/Facebook_Logo_%282019%29.png/600px-Facebook_Logo_%282019%29.png",
            Self::LinkedIn => "https://upload.wikimedia.org/wikipedia/commons/thumb/c/ca/LinkedIn_logo_initials.png/600px-LinkedIn_logo_initials.png",
            Self::Twitter => "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Logo_of_Twitter.svg/512px-Logo_of_Twitter.svg.png",
        }
    }

    pub fn brand_color(&self) -> &'static str {
        match self {
            Self::Instagram => "#e1306c",
            Self::Facebook => "#4267B2",
            Self::LinkedIn => "#0077B5",
            Self::Twitter => "#1DA1F2",
        }
    }

    /// Profile URL for a handle; one leading `@` is dropped.
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.strip_prefix('@').unwrap_or(handle);
        format!("{}{handle}", self.profile_prefix())
    }

    fn badge_fill(&self, style: BadgeStyle) -> &'static str {
        match (self, style) {
            (Self::Instagram, BadgeStyle::Gradient) => INSTAGRAM_GRADIENT,
            _ => self.brand_color(),
        }
    }
}

/// Visual wrapper for a modern social badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Filled,
    Outline,
    Rounded,
    Gradient,
}

impl BadgeStyle {
    fn background(&self, fill: &str) -> String {
        match self {
            Self::Outline => "background-color: transparent;".to_string(),
            Self::Gradient => format!("background: {fill};"),
            Self::Filled | Self::Rounded => format!("background-color: {fill};"),
        }
    }

    fn border(&self, color: &str) -> String {
        match self {
            Self::Outline => format!(" border: 1px solid {color};"),
            _ => String::new(),
        }
    }

    fn radius(&self) -> &'static str {
        match self {
            Self::Filled | Self::Gradient => "4px",
            Self::Outline | Self::Rounded => "50%",
        }
    }
}

/// Inline icon links for every present handle, or nothing.
///
/// Empty when `show_social_icons` is off or no handle is present.
pub fn legacy_social_links(data: &SignatureData, icon_size: &str) -> String {
    legacy_social_links_escaped(data, icon_size, Escaping::Raw)
}

/// Badge-wrapped icon links for every present handle, or nothing.
///
/// Same gating, order and URLs as [`legacy_social_links`].
pub fn modern_social_links(data: &SignatureData, icon_size: &str, style: BadgeStyle) -> String {
    modern_social_links_escaped(data, icon_size, style, Escaping::Raw)
}

pub(crate) fn legacy_social_links_escaped(
    data: &SignatureData,
    icon_size: &str,
    escaping: Escaping,
) -> String {
    let mut links = String::new();
    for (network, handle) in data.visible_socials() {
        let _ = write!(
            links,
            r#"<a href="{url}" target="_blank" style="text-decoration: none; margin-right: 8px;"><img src="{icon}" alt="{label}" style="width: {icon_size}; height: {icon_size};"></a>"#,
            url = escaping.apply(&network.profile_url(handle)),
            icon = network.icon_url(),
            label = network.label(),
        );
    }

    if links.is_empty() {
        return links;
    }
    format!(r#"<div style="margin-top: 10px;">{links}</div>"#)
}

pub(crate) fn modern_social_links_escaped(
    data: &SignatureData,
    icon_size: &str,
    style: BadgeStyle,
    escaping: Escaping,
) -> String {
    let mut links = String::new();
    for (network, handle) in data.visible_socials() {
        let _ = write!(
            links,
            r#"<a href="{url}" target="_blank" style="text-decoration: none;"><div style="{background}{border} width: {icon_size}; height: {icon_size}; border-radius: {radius}; padding: 4px; display: inline-block; margin: 0 4px; text-align: center;"><img src="{icon}" alt="{label}" style="width: calc({icon_size} - 8px); height: calc({icon_size} - 8px);"></div></a>"#,
            url = escaping.apply(&network.profile_url(handle)),
            background = style.background(network.badge_fill(style)),
            border = style.border(network.brand_color()),
            radius = style.radius(),
            icon = network.icon_url(),
            label = network.label(),
        );
    }

    if links.is_empty() {
        return links;
    }
    format!(r#"<div style="margin-top: 10px; display: flex;">{links}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_socials() -> SignatureData {
        let mut data = SignatureData::new("Ana Silva", "ana@example.com");
        data.instagram = Some("@ana.silva".into());
        data.facebook = Some("ana.silva.fb".into());
        data.linkedin = Some("anasilva".into());
        data.twitter = Some("@anasilva".into());
        data
    }

    #[test]
    fn test_size_tokens_per_preset() {
        assert_eq!(size_tokens(FontSize::Small).name, "16px");
        assert_eq!(size_tokens(FontSize::Medium).job, "14px");
        assert_eq!(size_tokens(FontSize::Large).text, "14px");
    }

    #[test]
    fn test_size_tokens_unknown_string_uses_medium() {
        let tokens = size_tokens(FontSize::parse("enormous"));
        assert_eq!(tokens, size_tokens(FontSize::Medium));
    }

    #[test]
    fn test_border_none_is_empty() {
        assert_eq!(border_declaration(BorderStyle::None, "#ff0000"), "");
    }

    #[test]
    fn test_border_passes_color_through() {
        assert_eq!(
            border_declaration(BorderStyle::Dotted, "not-a-color"),
            "border-right: 2px dotted not-a-color;"
        );
    }

    #[test]
    fn test_display_url_strips_scheme() {
        assert_eq!(display_url("https://example.com/a"), "example.com/a");
        assert_eq!(display_url("http://example.com"), "example.com");
        assert_eq!(display_url("ftp://example.com"), "ftp://example.com");
    }

    #[test]
    fn test_profile_url_strips_one_at() {
        assert_eq!(
            SocialNetwork::Instagram.profile_url("@ana.silva"),
            "https://www.instagram.com/ana.silva"
        );
        assert_eq!(
            SocialNetwork::LinkedIn.profile_url("ana"),
            "https://www.linkedin.com/in/ana"
        );
    }

    #[test]
    fn test_legacy_links_strip_at() {
        let html = legacy_social_links(&with_socials(), "24px");
        assert!(html.contains(r#"href="https://www.instagram.com/ana.silva""#));
        assert!(html.contains(r#"href="https://twitter.com/anasilva""#));
        assert!(!html.contains("instagram.com/@"));
    }

    #[test]
    fn test_modern_links_strip_at() {
        for style in [
            BadgeStyle::Filled,
            BadgeStyle::Outline,
            BadgeStyle::Rounded,
            BadgeStyle::Gradient,
        ] {
            let html = modern_social_links(&with_socials(), "24px", style);
            assert!(html.contains(r#"href="https://www.instagram.com/ana.silva""#));
        }
    }

    #[test]
    fn test_links_hidden_when_flag_off() {
        let mut data = with_socials();
        data.show_social_icons = false;
        assert_eq!(legacy_social_links(&data, "24px"), "");
        assert_eq!(modern_social_links(&data, "24px", BadgeStyle::Filled), "");
    }

    #[test]
    fn test_links_empty_without_handles() {
        let data = SignatureData::new("Ana", "ana@example.com");
        assert_eq!(legacy_social_links(&data, "24px"), "");
        assert_eq!(modern_social_links(&data, "24px", BadgeStyle::Rounded), "");
    }

    #[test]
    fn test_links_keep_network_order() {
        let html = legacy_social_links(&with_socials(), "20px");
        let positions: Vec<usize> = ["instagram.com", "facebook.com", "linkedin.com", "twitter.com"]
            .iter()
            .map(|host| html.find(host).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_legacy_and_modern_agree_on_urls() {
        let data = with_socials();
        let legacy = legacy_social_links(&data, "24px");
        let modern = modern_social_links(&data, "24px", BadgeStyle::Outline);
        for network in SocialNetwork::ALL {
            let url = network.profile_url(data.social_handle(network).unwrap());
            assert!(legacy.contains(&url));
            assert!(modern.contains(&url));
        }
    }

    #[test]
    fn test_gradient_only_changes_instagram_fill() {
        let html = modern_social_links(&with_socials(), "28px", BadgeStyle::Gradient);
        assert!(html.contains(INSTAGRAM_GRADIENT));
        assert!(html.contains("background: #4267B2;"));
        let filled = modern_social_links(&with_socials(), "28px", BadgeStyle::Filled);
        assert!(!filled.contains(INSTAGRAM_GRADIENT));
        assert!(filled.contains("background-color: #e1306c;"));
    }

    #[test]
    fn test_outline_uses_brand_border() {
        let html = modern_social_links(&with_socials(), "24px", BadgeStyle::Outline);
        assert!(html.contains("background-color: transparent; border: 1px solid #0077B5;"));
        assert!(html.contains("border-radius: 50%;"));
    }

    #[test]
    fn test_icon_size_applied() {
        let html = modern_social_links(&with_socials(), "26px", BadgeStyle::Filled);
        assert!(html.contains("width: 26px; height: 26px;"));
        assert!(html.contains("width: calc(26px - 8px)"));
    }
}
