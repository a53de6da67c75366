//! The validated signature record and its style enums.
//!
//! [`SignatureData`] is what every template renders. It is produced by
//! [`crate::form::SignatureForm::validate`], or built directly with
//! [`SignatureData::new`] and struct-update syntax when the caller already
//! guarantees a non-empty name and a well-formed email.

use serde::{Deserialize, Serialize};

use crate::format::SocialNetwork;

pub const DEFAULT_PRIMARY_COLOR: &str = "#0f766e";
pub const DEFAULT_SECONDARY_COLOR: &str = "#334155";
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
pub const DEFAULT_TEMPLATE_ID: &str = "classic-horizontal";

/// Font stacks offered by the form, as `(css value, label)`.
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Arial, sans-serif", "Arial"),
    (r#""Helvetica Neue", Helvetica, Arial, sans-serif"#, "Helvetica"),
    ("Georgia, serif", "Georgia"),
    (r#""Times New Roman", Times, serif"#, "Times New Roman"),
    ("Verdana, Geneva, sans-serif", "Verdana"),
    (r#""Courier New", Courier, monospace"#, "Courier New"),
    (r#""Segoe UI", Tahoma, Geneva, sans-serif"#, "Segoe UI"),
    (r#""Trebuchet MS", Helvetica, sans-serif"#, "Trebuchet MS"),
];

/// CSS font stack for a [`FONT_FAMILIES`] label, matched case-insensitively.
pub fn font_family_by_label(label: &str) -> Option<&'static str> {
    let label = label.trim();
    FONT_FAMILIES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(label))
        .map(|(stack, _)| *stack)
}

/// Text size preset. Unknown strings parse as [`FontSize::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Lenient parse; anything that is not `small`, `medium` or `large` is medium.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            other => {
                if !other.is_empty() {
                    tracing::warn!(value = other, "unknown font size, falling back to medium");
                }
                Self::Medium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl From<String> for FontSize {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Separator border style. Unknown strings parse as [`BorderStyle::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Lenient parse; unrecognized styles disable the border.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "solid" => Self::Solid,
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            "none" | "" => Self::None,
            other => {
                tracing::warn!(value = other, "unknown border style, disabling border");
                Self::None
            }
        }
    }

    /// The CSS keyword, also used as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

impl From<String> for BorderStyle {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// A validated signature record.
///
/// Optional text fields holding `Some("")` are treated exactly like `None`
/// by every accessor, so a hand-built record can never produce an empty block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureData {
    pub name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,

    pub email: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub website: Option<String>,

    /// Bare handles; see [`crate::form`] for normalization.
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,

    /// Data URI or external URL, used verbatim as an `src`.
    pub profile_image: Option<String>,
    pub logo_image: Option<String>,

    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub font_size: FontSize,
    pub border_style: BorderStyle,

    pub show_profile_image: bool,
    pub show_logo: bool,
    pub show_social_icons: bool,

    pub template_id: String,
}

impl SignatureData {
    /// A record with only the required fields set and the default style.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_title: None,
            department: None,
            company: None,
            email: email.into(),
            phone: None,
            whatsapp: None,
            website: None,
            instagram: None,
            facebook: None,
            linkedin: None,
            twitter: None,
            profile_image: None,
            logo_image: None,
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            secondary_color: DEFAULT_SECONDARY_COLOR.into(),
            font_family: DEFAULT_FONT_FAMILY.into(),
            font_size: FontSize::default(),
            border_style: BorderStyle::Solid,
            show_profile_image: true,
            show_logo: false,
            show_social_icons: true,
            template_id: DEFAULT_TEMPLATE_ID.into(),
        }
    }

    /// Profile image source, only when the image is both present and shown.
    pub fn visible_profile_image(&self) -> Option<&str> {
        if self.show_profile_image {
            present(&self.profile_image)
        } else {
            None
        }
    }

    /// Logo source, only when the logo is both present and shown.
    pub fn visible_logo(&self) -> Option<&str> {
        if self.show_logo {
            present(&self.logo_image)
        } else {
            None
        }
    }

    /// Handle for one network, ignoring the social visibility flag.
    pub fn social_handle(&self, network: SocialNetwork) -> Option<&str> {
        let field = match network {
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Facebook => &self.facebook,
            SocialNetwork::LinkedIn => &self.linkedin,
            SocialNetwork::Twitter => &self.twitter,
        };
        present(field)
    }

    /// Present handles in fixed network order; empty when social icons are hidden.
    pub fn visible_socials(&self) -> Vec<(SocialNetwork, &str)> {
        if !self.show_social_icons {
            return Vec::new();
        }
        SocialNetwork::ALL
            .iter()
            .filter_map(|&network| self.social_handle(network).map(|handle| (network, handle)))
            .collect()
    }
}

/// `Some` only for a value with non-whitespace content.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_family_by_label() {
        assert_eq!(font_family_by_label("Georgia"), Some("Georgia, serif"));
        assert_eq!(
            font_family_by_label(" segoe ui "),
            Some(r#""Segoe UI", Tahoma, Geneva, sans-serif"#)
        );
        assert_eq!(font_family_by_label("Comic Sans"), None);
        assert_eq!(font_family_by_label("Arial"), Some(DEFAULT_FONT_FAMILY));
    }

    #[test]
    fn test_font_size_parse_known() {
        assert_eq!(FontSize::parse("small"), FontSize::Small);
        assert_eq!(FontSize::parse("Large"), FontSize::Large);
        assert_eq!(FontSize::parse(" medium "), FontSize::Medium);
    }

    #[test]
    fn test_font_size_unknown_is_medium() {
        assert_eq!(FontSize::parse("huge"), FontSize::Medium);
        assert_eq!(FontSize::parse(""), FontSize::Medium);
    }

    #[test]
    fn test_font_size_deserialize_lenient() {
        let size: FontSize = serde_json::from_str("\"gigantic\"").unwrap();
        assert_eq!(size, FontSize::Medium);
        let size: FontSize = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, FontSize::Small);
    }

    #[test]
    fn test_border_style_parse() {
        assert_eq!(BorderStyle::parse("dashed"), BorderStyle::Dashed);
        assert_eq!(BorderStyle::parse("none"), BorderStyle::None);
        assert_eq!(BorderStyle::parse("groove"), BorderStyle::None);
    }

    #[test]
    fn test_new_has_no_optional_fields() {
        let data = SignatureData::new("Ana Silva", "ana@example.com");
        assert!(data.visible_profile_image().is_none());
        assert!(data.visible_logo().is_none());
        assert!(data.visible_socials().is_empty());
        assert_eq!(data.template_id, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_visibility_flag_gates_present_image() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        data.profile_image = Some("https://cdn.example.com/ana.png".into());
        assert!(data.visible_profile_image().is_some());
        data.show_profile_image = false;
        assert!(data.visible_profile_image().is_none());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        data.show_logo = true;
        data.logo_image = Some("   ".into());
        data.instagram = Some(String::new());
        assert!(data.visible_logo().is_none());
        assert!(data.visible_socials().is_empty());
    }

    #[test]
    fn test_socials_in_fixed_order() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        data.twitter = Some("ana".into());
        data.instagram = Some("ana".into());
        let networks: Vec<_> = data.visible_socials().into_iter().map(|(n, _)| n).collect();
        assert_eq!(networks, vec![SocialNetwork::Instagram, SocialNetwork::Twitter]);

        data.show_social_icons = false;
        assert!(data.visible_socials().is_empty());
    }
}
