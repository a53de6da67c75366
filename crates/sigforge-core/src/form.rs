//! The raw signature form and its validation into [`SignatureData`].
//!
//! [`SignatureForm`] mirrors what a user types: every text field is a plain
//! string, possibly empty. [`SignatureForm::validate`] is the only way the
//! templates receive data from a user, and it guarantees:
//!
//! - `name` is non-empty and `email` is syntactically valid.
//! - `website` is absent or an absolute URL.
//! - every other text field is trimmed and empty values become `None`.
//! - social fields hold bare handles. A leading `@` is dropped and a pasted
//!   profile URL for the same network is reduced to its handle. Other URLs on
//!   that network's host are rejected.
//! - phone numbers are grouped by [`format_phone`]. Rendering never reformats them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format::SocialNetwork;
use crate::signature::{
    BorderStyle, FontSize, SignatureData, DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR,
    DEFAULT_SECONDARY_COLOR, DEFAULT_TEMPLATE_ID,
};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Scheme, then a host, then an optional path, query or fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?$")
        .expect("URL regex should compile")
});

/// The signature form as entered, before validation.
///
/// Missing JSON keys take the form defaults, so a file holding only
/// `{"name": "...", "email": "..."}` is a complete form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureForm {
    pub name: String,
    pub job_title: String,
    pub department: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,
    pub twitter: String,
    pub profile_image: String,
    pub logo_image: String,
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

impl Default for SignatureForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            job_title: String::new(),
            department: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            website: String::new(),
            instagram: String::new(),
            facebook: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            profile_image: String::new(),
            logo_image: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            secondary_color: DEFAULT_SECONDARY_COLOR.into(),
            font_family: DEFAULT_FONT_FAMILY.into(),
            font_size: FontSize::Medium,
            border_style: BorderStyle::Solid,
            show_profile_image: true,
            show_logo: false,
            show_social_icons: true,
            template_id: DEFAULT_TEMPLATE_ID.into(),
        }
    }
}

impl SignatureForm {
    /// Check the required fields and normalize everything else.
    ///
    /// Rules run in field order (name, email, website, social links) and the first
    /// failure is returned.
    pub fn validate(&self) -> Result<SignatureData, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let email = self.email.trim();
        if !EMAIL_REGEX.is_match(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        let website = optional(&self.website);
        if let Some(website) = &website {
            if !URL_REGEX.is_match(website) {
                return Err(ValidationError::InvalidWebsite(website.clone()));
            }
        }

        let data = SignatureData {
            name: name.to_string(),
            job_title: optional(&self.job_title),
            department: optional(&self.department),
            company: optional(&self.company),
            email: email.to_string(),
            phone: optional(&self.phone).map(|phone| format_phone(&phone)),
            whatsapp: optional(&self.whatsapp).map(|whatsapp| format_phone(&whatsapp)),
            website,
            instagram: normalize_handle(SocialNetwork::Instagram, &self.instagram)?,
            facebook: normalize_handle(SocialNetwork::Facebook, &self.facebook)?,
            linkedin: normalize_handle(SocialNetwork::LinkedIn, &self.linkedin)?,
            twitter: normalize_handle(SocialNetwork::Twitter, &self.twitter)?,
            profile_image: optional(&self.profile_image),
            logo_image: optional(&self.logo_image),
            primary_color: or_default(&self.primary_color, DEFAULT_PRIMARY_COLOR),
            secondary_color: or_default(&self.secondary_color, DEFAULT_SECONDARY_COLOR),
            font_family: or_default(&self.font_family, DEFAULT_FONT_FAMILY),
            font_size: self.font_size,
            border_style: self.border_style,
            show_profile_image: self.show_profile_image,
            show_logo: self.show_logo,
            show_social_icons: self.show_social_icons,
            template_id: or_default(&self.template_id, DEFAULT_TEMPLATE_ID),
        };

        tracing::debug!(template = %data.template_id, "form validated");
        Ok(data)
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}

/// Reduce a handle or pasted profile URL to a bare handle for `network`.
///
/// Returns `Ok(None)` when nothing is left after trimming. A URL on the network's
/// host that is not a profile link (a company page, `profile.php?id=...`, a post)
/// is rejected rather than guessed at.
pub fn normalize_handle(
    network: SocialNetwork,
    raw: &str,
) -> Result<Option<String>, ValidationError> {
    let value = raw.trim();
    let handle = match network_path(network, value) {
        Some(path) => profile_handle(network, path).ok_or_else(|| {
            ValidationError::NotAProfileUrl {
                network: network.label(),
                value: value.to_string(),
            }
        })?,
        None => value,
    };
    let handle = handle.trim_start_matches('@').trim();
    Ok((!handle.is_empty()).then(|| handle.to_string()))
}

/// The path after the host when `value` is a URL on one of the network's hosts.
fn network_path(network: SocialNetwork, value: &str) -> Option<&str> {
    let without_scheme = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    let rest = ["www.", "m."]
        .iter()
        .find_map(|sub| without_scheme.strip_prefix(sub))
        .unwrap_or(without_scheme);

    network.hosts().iter().find_map(|host| {
        let head = rest.get(..host.len())?;
        if !head.eq_ignore_ascii_case(host) {
            return None;
        }
        let tail = &rest[host.len()..];
        match tail.chars().next() {
            None => Some(""),
            Some('/') => Some(&tail[1..]),
            Some('?' | '#') => Some(tail),
            Some(_) => None,
        }
    })
}

/// The handle in a profile URL path: exactly one segment after the profile path.
fn profile_handle(network: SocialNetwork, path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_prefix(network.profile_path())?;
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let handle = segments.next()?;
    let reserved = network
        .reserved_paths()
        .iter()
        .any(|page| handle.eq_ignore_ascii_case(page));
    if reserved || segments.next().is_some() {
        return None;
    }
    Some(handle)
}

/// Group a Brazilian phone number by its digit count.
///
/// 11 digits become `(XX) XXXXX-XXXX`, 10 digits `(XX) XXXX-XXXX`. Anything else,
/// including numbers with a country code, is returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignatureForm {
        SignatureForm {
            name: "  Ana Silva ".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_minimal_form() {
        let data = form().validate().unwrap();
        assert_eq!(data.name, "Ana Silva");
        assert_eq!(data.email, "ana@example.com");
        assert!(data.job_title.is_none());
        assert!(data.website.is_none());
        assert_eq!(data.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(data.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_validate_empty_name() {
        let mut form = form();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let mut form = form();
        form.name = String::new();
        form.email = "nope".into();
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_invalid_email() {
        for email in ["", "ana", "ana@", "ana@example", "a na@example.com"] {
            let mut form = form();
            form.email = email.into();
            assert!(
                matches!(form.validate(), Err(ValidationError::InvalidEmail(_))),
                "{email}"
            );
        }
    }

    #[test]
    fn test_validate_website() {
        let mut form = form();
        form.website = "example.com".into();
        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidWebsite("example.com".into()))
        );

        form.website = " https://example.com/about ".into();
        let data = form.validate().unwrap();
        assert_eq!(data.website.as_deref(), Some("https://example.com/about"));
    }

    #[test]
    fn test_empty_fields_become_absent() {
        let mut form = form();
        form.company = "  ".into();
        form.primary_color = String::new();
        form.template_id = " ".into();
        let data = form.validate().unwrap();
        assert!(data.company.is_none());
        assert_eq!(data.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(data.template_id, DEFAULT_TEMPLATE_ID);
    }

    fn handle(network: SocialNetwork, raw: &str) -> Option<String> {
        normalize_handle(network, raw).unwrap()
    }

    #[test]
    fn test_normalize_handle_strips_at() {
        assert_eq!(handle(SocialNetwork::Instagram, "@ana.silva").as_deref(), Some("ana.silva"));
        assert_eq!(handle(SocialNetwork::Twitter, "  "), None);
        assert_eq!(handle(SocialNetwork::Twitter, "@"), None);
    }

    #[test]
    fn test_normalize_handle_from_pasted_url() {
        assert_eq!(
            handle(SocialNetwork::Facebook, "https://www.facebook.com/ana.fb/").as_deref(),
            Some("ana.fb")
        );
        assert_eq!(handle(SocialNetwork::Facebook, "facebook.com/ana.fb").as_deref(), Some("ana.fb"));
        assert_eq!(
            handle(SocialNetwork::LinkedIn, "https://linkedin.com/in/anasilva?trk=x").as_deref(),
            Some("anasilva")
        );
        assert_eq!(
            handle(SocialNetwork::Instagram, "https://m.instagram.com/ana.silva/?hl=en").as_deref(),
            Some("ana.silva")
        );
        assert_eq!(
            handle(SocialNetwork::Twitter, "https://x.com/@anasilva").as_deref(),
            Some("anasilva")
        );
    }

    #[test]
    fn test_normalize_handle_rejects_non_profile_urls() {
        for (network, url) in [
            (SocialNetwork::LinkedIn, "https://www.linkedin.com/company/acme"),
            (SocialNetwork::LinkedIn, "linkedin.com/in/"),
            (SocialNetwork::Facebook, "https://www.facebook.com/profile.php?id=123"),
            (SocialNetwork::Facebook, "https://facebook.com/groups/designers"),
            (SocialNetwork::Instagram, "https://www.instagram.com/p/Cx12ab/"),
            (SocialNetwork::Twitter, "https://twitter.com/anasilva/status/123"),
        ] {
            assert_eq!(
                normalize_handle(network, url),
                Err(ValidationError::NotAProfileUrl {
                    network: network.label(),
                    value: url.to_string(),
                }),
                "{url}"
            );
        }
    }

    #[test]
    fn test_normalize_handle_ignores_other_networks() {
        assert_eq!(
            handle(SocialNetwork::Instagram, "facebook.com/ana").as_deref(),
            Some("facebook.com/ana")
        );
        assert_eq!(handle(SocialNetwork::Twitter, "x.company").as_deref(), Some("x.company"));
    }

    #[test]
    fn test_validate_rejects_company_page_as_linkedin_profile() {
        let mut form = form();
        form.linkedin = "https://www.linkedin.com/company/acme".into();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::NotAProfileUrl { network: "LinkedIn", .. })
        ));
    }

    #[test]
    fn test_validated_handles_render_canonical_urls() {
        let mut form = form();
        form.instagram = "https://instagram.com/ana.silva".into();
        let data = form.validate().unwrap();
        let url = SocialNetwork::Instagram.profile_url(data.instagram.as_deref().unwrap());
        assert_eq!(url, "https://www.instagram.com/ana.silva");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(format_phone("+55 11 98765-4321"), "+55 11 98765-4321");
    }

    #[test]
    fn test_validate_formats_phones() {
        let mut form = form();
        form.phone = "11987654321".into();
        form.whatsapp = "1133334444".into();
        let data = form.validate().unwrap();
        assert_eq!(data.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(data.whatsapp.as_deref(), Some("(11) 3333-4444"));
    }

    #[test]
    fn test_deserialize_partial_form_uses_defaults() {
        let form: SignatureForm =
            serde_json::from_str(r#"{"name": "Ana", "email": "ana@example.com", "fontSize": "tiny"}"#)
                .unwrap();
        assert!(form.show_profile_image);
        assert!(!form.show_logo);
        assert_eq!(form.font_size, FontSize::Medium);
        assert_eq!(form.border_style, BorderStyle::Solid);
        assert_eq!(form.template_id, DEFAULT_TEMPLATE_ID);
    }
}
