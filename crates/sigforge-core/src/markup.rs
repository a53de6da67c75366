//! Interpolation point and fragment builder shared by every template.
//!
//! Templates never read [`SignatureData`] fields directly: they go through a
//! [`RenderContext`], whose accessors apply the visibility rules and route every
//! user-supplied value through [`Escaping::apply`]. Switching a render to
//! [`Escaping::Html`] therefore escapes every field in every template at once.
//!
//! [`Fragments`] keeps the conditional composition auditable: each optional
//! block is pushed as `Option<String>`, and absent blocks add zero bytes.

use std::borrow::Cow;

use crate::format::{
    self, legacy_social_links_escaped, modern_social_links_escaped, BadgeStyle, SizeTokens,
    SocialNetwork,
};
use crate::signature::{present, SignatureData};

/// How user-supplied values are interpolated into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Values are inserted verbatim. A signature author can inject their own markup.
    #[default]
    Raw,
    /// Values are HTML-escaped before insertion.
    Html,
}

impl Escaping {
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(value),
            Self::Html => Cow::Owned(handlebars::html_escape(value)),
        }
    }
}

/// Ordered list of markup fragments, joined with newlines on [`Fragments::finish`].
#[derive(Debug, Default)]
pub struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment; empty strings are dropped.
    pub fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.parts.push(fragment);
        }
        self
    }

    /// Append an optional block.
    pub fn push_opt(&mut self, fragment: Option<impl Into<String>>) -> &mut Self {
        if let Some(fragment) = fragment {
            self.push(fragment);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn finish(self) -> String {
        self.parts.join("\n")
    }

    /// Surround the fragments with `open`/`close`, or `None` when nothing was pushed.
    pub fn wrap(self, open: &str, close: &str) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("{open}\n{}\n{close}", self.finish()))
        }
    }
}

/// A link target and its visible label.
#[derive(Debug, Clone)]
pub struct Link<'a> {
    pub href: Cow<'a, str>,
    pub label: Cow<'a, str>,
}

/// Which contact line a [`Contact`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    Website,
}

impl ContactKind {
    /// Emoji glyph shown before the value.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Phone => "📱",
            Self::Email => "✉️",
            Self::Website => "🌐",
        }
    }
}

/// One rendered contact value (plain phone text, or an anchor for email and website).
#[derive(Debug, Clone)]
pub struct Contact {
    pub kind: ContactKind,
    pub html: String,
}

/// Read-only view over a [`SignatureData`] for one render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    data: &'a SignatureData,
    escaping: Escaping,
    size: SizeTokens,
}

impl<'a> RenderContext<'a> {
    pub fn new(data: &'a SignatureData, escaping: Escaping) -> Self {
        Self {
            data,
            escaping,
            size: format::size_tokens(data.font_size),
        }
    }

    pub fn size(&self) -> SizeTokens {
        self.size
    }

    fn text(&self, value: &'a str) -> Cow<'a, str> {
        self.escaping.apply(value)
    }

    fn optional(&self, value: &'a Option<String>) -> Option<Cow<'a, str>> {
        present(value).map(|value| self.text(value))
    }

    pub fn name(&self) -> Cow<'a, str> {
        self.text(&self.data.name)
    }

    /// First whitespace-separated word of the name.
    pub fn first_name(&self) -> Cow<'a, str> {
        let first = self.data.name.split_whitespace().next().unwrap_or_default();
        self.text(first)
    }

    pub fn email(&self) -> Cow<'a, str> {
        self.text(&self.data.email)
    }

    pub fn job_title(&self) -> Option<Cow<'a, str>> {
        self.optional(&self.data.job_title)
    }

    pub fn department(&self) -> Option<Cow<'a, str>> {
        self.optional(&self.data.department)
    }

    pub fn company(&self) -> Option<Cow<'a, str>> {
        self.optional(&self.data.company)
    }

    pub fn phone(&self) -> Option<Cow<'a, str>> {
        self.optional(&self.data.phone)
    }

    pub fn whatsapp(&self) -> Option<Cow<'a, str>> {
        self.optional(&self.data.whatsapp)
    }

    pub fn website(&self) -> Option<Link<'a>> {
        present(&self.data.website).map(|website| Link {
            href: self.text(website),
            label: self.text(format::display_url(website)),
        })
    }

    pub fn profile_image(&self) -> Option<Cow<'a, str>> {
        self.data.visible_profile_image().map(|src| self.text(src))
    }

    pub fn has_profile_image(&self) -> bool {
        self.data.visible_profile_image().is_some()
    }

    pub fn logo(&self) -> Option<Cow<'a, str>> {
        self.data.visible_logo().map(|src| self.text(src))
    }

    /// Alt text for the logo: the company, or `Logo`.
    pub fn logo_alt(&self) -> Cow<'a, str> {
        self.company().unwrap_or(Cow::Borrowed("Logo"))
    }

    pub fn primary(&self) -> Cow<'a, str> {
        self.text(&self.data.primary_color)
    }

    pub fn secondary(&self) -> Cow<'a, str> {
        self.text(&self.data.secondary_color)
    }

    pub fn font_family(&self) -> Cow<'a, str> {
        self.text(&self.data.font_family)
    }

    /// Border declaration in the primary color, empty for no border.
    pub fn border(&self) -> String {
        format::border_declaration(self.data.border_style, &self.primary())
    }

    /// `mailto:` anchor with the given inline style.
    pub fn mailto(&self, style: &str) -> String {
        let email = self.email();
        format!(r#"<a href="mailto:{email}" style="{style}">{email}</a>"#)
    }

    /// Website anchor with the given inline style.
    pub fn website_link(&self, style: &str) -> Option<String> {
        self.website()
            .map(|link| format!(r#"<a href="{}" style="{style}">{}</a>"#, link.href, link.label))
    }

    /// Phone, email and website lines in that order; email is always present.
    pub fn contacts(&self, link_style: &str) -> Vec<Contact> {
        let mut contacts = Vec::with_capacity(3);
        if let Some(phone) = self.phone() {
            contacts.push(Contact {
                kind: ContactKind::Phone,
                html: phone.into_owned(),
            });
        }
        contacts.push(Contact {
            kind: ContactKind::Email,
            html: self.mailto(link_style),
        });
        if let Some(website) = self.website_link(link_style) {
            contacts.push(Contact {
                kind: ContactKind::Website,
                html: website,
            });
        }
        contacts
    }

    /// Present handles with their escaped profile URLs; empty when icons are hidden.
    pub fn social_urls(&self) -> Vec<(SocialNetwork, String)> {
        self.data
            .visible_socials()
            .into_iter()
            .map(|(network, handle)| {
                let url = network.profile_url(handle);
                (network, self.escaping.apply(&url).into_owned())
            })
            .collect()
    }

    pub fn legacy_social(&self, icon_size: &str) -> String {
        legacy_social_links_escaped(self.data, icon_size, self.escaping)
    }

    pub fn modern_social(&self, icon_size: &str, style: BadgeStyle) -> String {
        modern_social_links_escaped(self.data, icon_size, style, self.escaping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_skip_absent_blocks() {
        let mut out = Fragments::new();
        out.push("<a>")
            .push_opt(None::<String>)
            .push("")
            .push("</a>");
        assert_eq!(out.finish(), "<a>\n</a>");
    }

    #[test]
    fn test_fragments_wrap_empty_is_none() {
        assert!(Fragments::new().wrap("<div>", "</div>").is_none());
        let mut out = Fragments::new();
        out.push("x");
        assert_eq!(out.wrap("<div>", "</div>").unwrap(), "<div>\nx\n</div>");
    }

    #[test]
    fn test_escaping_raw_passes_markup() {
        assert_eq!(Escaping::Raw.apply("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_escaping_html_escapes_markup() {
        let escaped = Escaping::Html.apply(r#"<script>"x"</script>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_context_website_label() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        data.website = Some("https://ana.dev".into());
        let ctx = RenderContext::new(&data, Escaping::Raw);
        let link = ctx.website().unwrap();
        assert_eq!(link.href, "https://ana.dev");
        assert_eq!(link.label, "ana.dev");
    }

    #[test]
    fn test_context_contacts_order() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        data.phone = Some("(11) 98765-4321".into());
        data.website = Some("https://ana.dev".into());
        let ctx = RenderContext::new(&data, Escaping::Raw);
        let kinds: Vec<_> = ctx.contacts("").iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Phone, ContactKind::Email, ContactKind::Website]
        );
    }

    #[test]
    fn test_context_logo_alt_falls_back() {
        let mut data = SignatureData::new("Ana", "ana@example.com");
        let ctx = RenderContext::new(&data, Escaping::Raw);
        assert_eq!(ctx.logo_alt(), "Logo");
        data.company = Some("Acme".into());
        let ctx = RenderContext::new(&data, Escaping::Raw);
        assert_eq!(ctx.logo_alt(), "Acme");
    }

    #[test]
    fn test_context_first_name() {
        let data = SignatureData::new("Ana Maria Silva", "ana@example.com");
        assert_eq!(RenderContext::new(&data, Escaping::Raw).first_name(), "Ana");
    }

    #[test]
    fn test_context_escapes_every_field() {
        let mut data = SignatureData::new("<b>Ana</b>", "ana@example.com");
        data.company = Some("A&B".into());
        let ctx = RenderContext::new(&data, Escaping::Html);
        assert_eq!(ctx.name(), "&lt;b&gt;Ana&lt;/b&gt;");
        assert_eq!(ctx.company().unwrap(), "A&amp;B");
    }
}
