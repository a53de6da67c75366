//! Small markup pieces reused across template families.

use std::fmt::Display;

use crate::markup::{Contact, Fragments, RenderContext};

pub(crate) fn div(style: &str, content: impl Display) -> String {
    format!(r#"<div style="{style}">{content}</div>"#)
}

pub(crate) fn span(style: &str, content: impl Display) -> String {
    format!(r#"<span style="{style}">{content}</span>"#)
}

pub(crate) fn td(style: &str, content: impl Display) -> String {
    format!("<td style=\"{style}\">\n{content}\n</td>")
}

/// An unstyled `<td>`.
pub(crate) fn cell(content: impl Display) -> String {
    format!("<td>\n{content}\n</td>")
}

/// `None` for an empty fragment, so it can be wrapped conditionally.
pub(crate) fn non_empty(fragment: String) -> Option<String> {
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// A `<tr>` holding a single cell.
pub(crate) fn row(cell_style: &str, content: impl Display) -> String {
    format!("<tr>\n{}\n</tr>", td(cell_style, content))
}

/// Outer signature table: font stack, max width, collapsed borders, then `extra` declarations.
pub(crate) fn table_open(ctx: &RenderContext<'_>, max_width: u32, extra: &str) -> String {
    let font = ctx.font_family();
    let extra = if extra.is_empty() {
        String::new()
    } else {
        format!(" {extra}")
    };
    format!(
        r#"<table style="font-family: {font}; max-width: {max_width}px; border-collapse: collapse;{extra}">"#
    )
}

/// The complete outer table around `body` (one or more `<tr>`s).
pub(crate) fn table(ctx: &RenderContext<'_>, max_width: u32, extra: &str, body: impl Display) -> String {
    format!("{}\n{body}\n</table>", table_open(ctx, max_width, extra))
}

/// A `<tr>` around already rendered cells.
pub(crate) fn tr(cells: impl Display) -> String {
    format!("<tr>\n{cells}\n</tr>")
}

/// A full-width nested table around the given rows.
pub(crate) fn inner_table(style: &str, rows: impl Display) -> String {
    format!("<table style=\"{style}\">\n{rows}\n</table>")
}

/// Anchor style used for email and website links in the primary color.
pub(crate) fn link_style(ctx: &RenderContext<'_>) -> String {
    format!("color: {}; text-decoration: none;", ctx.primary())
}

/// Anchor style with an explicit font size.
pub(crate) fn sized_link_style(ctx: &RenderContext<'_>) -> String {
    format!(
        "font-size: {}; color: {}; text-decoration: none;",
        ctx.size().text,
        ctx.primary()
    )
}

pub(crate) fn profile_img(ctx: &RenderContext<'_>, style: &str) -> Option<String> {
    ctx.profile_image()
        .map(|src| format!(r#"<img src="{src}" alt="{}" style="{style}">"#, ctx.name()))
}

pub(crate) fn logo_img(ctx: &RenderContext<'_>, style: &str) -> Option<String> {
    ctx.logo()
        .map(|src| format!(r#"<img src="{src}" alt="{}" style="{style}">"#, ctx.logo_alt()))
}

/// Append `extra` to a style only when `condition` holds.
pub(crate) fn style_if(base: &str, condition: bool, extra: &str) -> String {
    if condition {
        format!("{base} {extra}")
    } else {
        base.to_string()
    }
}

/// Name, job title and company lines, each with its own style.
///
/// Job title and company are omitted when absent.
pub(crate) fn identity(
    ctx: &RenderContext<'_>,
    name_style: &str,
    job_style: &str,
    company_style: &str,
) -> Fragments {
    let mut out = Fragments::new();
    out.push(div(name_style, ctx.name()))
        .push_opt(ctx.job_title().map(|job| div(job_style, job)))
        .push_opt(ctx.company().map(|company| div(company_style, company)));
    out
}

/// One `<tr>` per contact line, built by `cell` from the contact.
pub(crate) fn contact_rows(contacts: Vec<Contact>, cell: impl Fn(&Contact) -> String) -> String {
    contacts
        .iter()
        .map(|contact| format!("<tr>\n{}\n</tr>", cell(contact)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Glyph-prefixed contact lines as stacked `<div>`s.
pub(crate) fn contact_lines(contacts: Vec<Contact>, style: &str) -> Fragments {
    let mut out = Fragments::new();
    for contact in contacts {
        out.push(div(style, format!("{} {}", contact.kind.glyph(), contact.html)));
    }
    out
}

/// Glyph-prefixed contact lines as rows of a nested table, in muted grey.
pub(crate) fn glyph_rows(ctx: &RenderContext<'_>, link_style: &str) -> String {
    let text = format!("font-size: {}; color: #555;", ctx.size().text);
    contact_rows(ctx.contacts(link_style), |contact| {
        td(
            "padding-bottom: 8px;",
            span(&text, format!("{} {}", contact.kind.glyph(), contact.html)),
        )
    })
}

/// Bare text links (network label only) for every visible handle.
pub(crate) fn label_social_links(
    ctx: &RenderContext<'_>,
    link_style: &str,
    wrapper_style: &str,
) -> Option<String> {
    let mut links = Fragments::new();
    for (network, url) in ctx.social_urls() {
        links.push(format!(
            r#"<a href="{url}" target="_blank" style="{link_style}">{}</a>"#,
            network.label()
        ));
    }
    links.wrap(&format!(r#"<div style="{wrapper_style}">"#), "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Escaping;
    use crate::signature::SignatureData;

    #[test]
    fn test_table_open_extra() {
        let data = SignatureData::new("Ana", "ana@example.com");
        let ctx = RenderContext::new(&data, Escaping::Raw);
        assert_eq!(
            table_open(&ctx, 500, ""),
            r#"<table style="font-family: Arial, sans-serif; max-width: 500px; border-collapse: collapse;">"#
        );
        assert!(table_open(&ctx, 500, "background-color: #222;")
            .ends_with(r#"collapse; background-color: #222;">"#));
    }

    #[test]
    fn test_identity_skips_absent_lines() {
        let data = SignatureData::new("Ana", "ana@example.com");
        let ctx = RenderContext::new(&data, Escaping::Raw);
        let html = identity(&ctx, "a", "b", "c").finish();
        assert_eq!(html, r#"<div style="a">Ana</div>"#);
    }

    #[test]
    fn test_label_links_absent_without_handles() {
        let data = SignatureData::new("Ana", "ana@example.com");
        let ctx = RenderContext::new(&data, Escaping::Raw);
        assert!(label_social_links(&ctx, "", "").is_none());
    }

    #[test]
    fn test_style_if() {
        assert_eq!(style_if("a;", true, "b;"), "a; b;");
        assert_eq!(style_if("a;", false, "b;"), "a;");
    }
}
