//! Typographic layouts with little chrome.

use crate::format::BadgeStyle;
use crate::markup::{ContactKind, Fragments, RenderContext};
use crate::templates::parts::{self, cell, div, span, td, tr};
use crate::templates::{SignatureTemplate, TemplateInfo};

const FULL_WIDTH: &str = "width: 100%; border-collapse: collapse;";

fn spaced_socials(links: String, margin_top: &str) -> Option<String> {
    parts::non_empty(links).map(|links| div(&format!("margin-top: {margin_top};"), links))
}

pub struct ElegantMinimalist;

static ELEGANT_MINIMALIST: TemplateInfo = TemplateInfo {
    id: "elegant-minimalist",
    name: "Elegant Minimalist",
    description: "Elegant, minimal design with refined typography",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for ElegantMinimalist {
    fn info(&self) -> &'static TemplateInfo {
        &ELEGANT_MINIMALIST
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);
        let text_style = format!("font-size: {}; color: #777; margin-bottom: 10px;", size.text);

        let mut heading = Fragments::new();
        heading
            .push(div(
                &format!(
                    "font-size: {}; font-weight: 300; color: #333; letter-spacing: 1px; text-transform: uppercase;",
                    size.name
                ),
                ctx.name(),
            ))
            .push_opt(ctx.job_title().map(|job| {
                div(
                    &format!(
                        "font-size: {}; color: {primary}; margin-top: 3px; letter-spacing: 0.5px;",
                        size.job
                    ),
                    job,
                )
            }));

        let mut top = Fragments::new();
        top.push(td("padding-bottom: 15px;", heading.finish())).push_opt(
            parts::profile_img(
                ctx,
                "width: 70px; height: 70px; border-radius: 50%; filter: grayscale(100%);",
            )
            .map(|img| td("width: 80px; vertical-align: top; text-align: right;", img)),
        );

        let mut contact_line = Fragments::new();
        contact_line
            .push_opt(ctx.phone().map(|phone| span("margin-right: 15px;", phone)))
            .push(ctx.mailto(&link));

        let mut contact = Fragments::new();
        contact
            .push(div(&text_style, contact_line.finish()))
            .push_opt(ctx.website_link(&link).map(|website| div(&text_style, website)))
            .push_opt(ctx.company().map(|company| {
                div(&format!("font-size: {}; color: #777; margin-top: 5px;", size.text), company)
            }));

        let mut lower = Fragments::new();
        lower.push(td("vertical-align: top;", contact.finish())).push_opt(
            parts::logo_img(ctx, "height: 30px; filter: grayscale(100%);")
                .map(|logo| td("vertical-align: bottom; text-align: right;", logo)),
        );

        let mut bottom = Fragments::new();
        bottom
            .push(r#"<div style="height: 1px; background-color: #eee; margin: 10px 0 15px;"></div>"#)
            .push(parts::inner_table(FULL_WIDTH, tr(lower.finish())))
            .push_opt(parts::label_social_links(
                ctx,
                &format!("color: {primary}; text-decoration: none; margin-right: 10px;"),
                &format!("margin-top: 15px; font-size: {}; color: #777;", size.text),
            ));

        let rows = format!(
            "{}\n{}",
            tr(top.finish()),
            tr(format!("<td colspan=\"2\">\n{}\n</td>", bottom.finish()))
        );
        parts::table(ctx, 500, "", rows)
    }
}

pub struct ModernMinimalist;

static MODERN_MINIMALIST: TemplateInfo = TemplateInfo {
    id: "modern-minimalist",
    name: "Modern Minimalist",
    description: "Minimal design with modern touches",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for ModernMinimalist {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_MINIMALIST
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let mut heading = Fragments::new();
        heading
            .push(div(
                &format!(
                    "font-size: {}; font-weight: 300; color: #333; letter-spacing: 1px;",
                    size.name
                ),
                ctx.name(),
            ))
            .push_opt(ctx.job_title().map(|job| {
                div(&format!("font-size: {}; color: {primary}; margin-top: 3px;", size.job), job)
            }));

        let mut top = Fragments::new();
        top.push(td("vertical-align: middle;", heading.finish())).push_opt(
            parts::profile_img(ctx, "width: 50px; height: 50px; border-radius: 50%;")
                .map(|img| td("width: 60px; vertical-align: middle; text-align: right;", img)),
        );

        let mut line = Fragments::new();
        line.push_opt(ctx.phone().map(|phone| span("margin-right: 15px;", phone)))
            .push(ctx.mailto(&link))
            .push_opt(ctx.website_link(&link).map(|website| {
                format!(r#"<span style="margin: 0 10px;">•</span>{website}"#)
            }));

        let mut contact = Fragments::new();
        contact
            .push(div(
                &format!("font-size: {}; color: #777;", size.text),
                format!("\n{}\n", line.finish()),
            ))
            .push_opt(ctx.company().map(|company| {
                div(&format!("font-size: {}; color: #777; margin-top: 8px;", size.text), company)
            }));

        let mut lower = Fragments::new();
        lower.push(td("vertical-align: top;", contact.finish())).push_opt(
            parts::logo_img(ctx, "height: 30px;")
                .map(|logo| td("vertical-align: bottom; text-align: right;", logo)),
        );

        let mut bottom = Fragments::new();
        bottom
            .push(r#"<div style="height: 1px; background-color: #eee; margin: 5px 0 15px;"></div>"#)
            .push(parts::inner_table(FULL_WIDTH, tr(lower.finish())))
            .push_opt(spaced_socials(ctx.modern_social("20px", BadgeStyle::Outline), "15px"));

        let rows = format!(
            "{}\n{}",
            parts::row(
                "padding-bottom: 15px;",
                parts::inner_table(FULL_WIDTH, tr(top.finish()))
            ),
            tr(cell(bottom.finish()))
        );
        parts::table(ctx, 500, "", rows)
    }
}

pub struct ModernSimple;

static MODERN_SIMPLE: TemplateInfo = TemplateInfo {
    id: "modern-simple",
    name: "Modern Simple",
    description: "Modern design with a simple, elegant layout",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for ModernSimple {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_SIMPLE
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::sized_link_style(ctx);

        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let value = match contact.kind {
                ContactKind::Phone => {
                    span(&format!("font-size: {}; color: #555;", size.text), &contact.html)
                }
                _ => contact.html.clone(),
            };
            td("padding-bottom: 8px;", value)
        });

        let mut details = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: {primary}; margin-bottom: 5px;",
                size.name
            ),
            &format!("font-size: {}; color: #555; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #777; margin-bottom: 10px;", size.job),
        );
        details
            .push(format!(
                r#"<div style="height: 2px; width: 50px; background-color: {primary}; margin: 10px 0;"></div>"#
            ))
            .push(div(
                "margin-top: 10px;",
                parts::inner_table("border-collapse: collapse;", contacts),
            ))
            .push_opt(spaced_socials(ctx.modern_social("22px", BadgeStyle::Outline), "10px"));

        // With a photo the logo stacks under it; otherwise it takes the side cell alone.
        let side = match parts::profile_img(
            ctx,
            &format!("width: 90px; height: 90px; border-radius: 50%; border: 2px solid {primary};"),
        ) {
            Some(img) => {
                let mut stack = Fragments::new();
                stack.push(img).push_opt(
                    parts::logo_img(ctx, "max-width: 90px; max-height: 40px;")
                        .map(|logo| div("margin-top: 15px;", logo)),
                );
                Some(stack.finish())
            }
            None => parts::logo_img(ctx, "max-width: 90px; max-height: 50px;"),
        };

        let mut cells = Fragments::new();
        cells
            .push(td("vertical-align: top;", details.finish()))
            .push_opt(side.map(|side| td("width: 100px; vertical-align: top; text-align: right;", side)));

        parts::table(
            ctx,
            500,
            "",
            tr(cell(parts::inner_table(FULL_WIDTH, tr(cells.finish())))),
        )
    }
}

pub struct ModernCompact;

static MODERN_COMPACT: TemplateInfo = TemplateInfo {
    id: "modern-compact",
    name: "Modern Compact",
    description: "Modern design in a compact layout",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for ModernCompact {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_COMPACT
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let identity = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: {primary};", size.name),
            &format!("font-size: {}; color: #555;", size.job),
            &format!("font-size: {}; color: #777;", size.job),
        );
        let mut header = Fragments::new();
        header
            .push_opt(
                parts::profile_img(
                    ctx,
                    &format!(
                        "width: 60px; height: 60px; border-radius: 50%; border: 2px solid {primary};"
                    ),
                )
                .map(|img| td("width: 70px; vertical-align: middle;", img)),
            )
            .push(td("vertical-align: middle;", identity.finish()))
            .push_opt(
                parts::logo_img(ctx, "max-width: 60px; max-height: 40px;")
                    .map(|logo| td("width: 70px; vertical-align: middle; text-align: right;", logo)),
            );

        let line = ctx
            .contacts(&link)
            .iter()
            .map(|contact| format!("{} {}", contact.kind.glyph(), contact.html))
            .collect::<Vec<_>>()
            .join(" &nbsp;|&nbsp; ");

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(header.finish())))
            .push(div(
                "margin-top: 10px;",
                parts::inner_table(
                    FULL_WIDTH,
                    tr(cell(span(&format!("font-size: {}; color: #555;", size.text), line))),
                ),
            ))
            .push_opt(spaced_socials(ctx.modern_social("20px", BadgeStyle::Outline), "10px"));

        parts::table(ctx, 450, "", tr(cell(body.finish())))
    }
}

pub struct ModernElegant;

static MODERN_ELEGANT: TemplateInfo = TemplateInfo {
    id: "modern-elegant",
    name: "Modern Elegant",
    description: "Modern design with an elegant style",
    thumbnail: "/templates/classic-horizontal.svg",
};

impl SignatureTemplate for ModernElegant {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_ELEGANT
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let mut heading = Fragments::new();
        heading
            .push(div(
                &format!(
                    "font-size: {}; font-weight: bold; color: #333; letter-spacing: 0.5px;",
                    size.name
                ),
                ctx.name(),
            ))
            .push_opt(ctx.job_title().map(|job| {
                div(
                    &format!(
                        "font-size: {}; color: {primary}; margin-top: 3px; letter-spacing: 0.3px;",
                        size.job
                    ),
                    job,
                )
            }));

        let mut top = Fragments::new();
        top.push(td("vertical-align: middle;", heading.finish())).push_opt(
            parts::profile_img(
                ctx,
                "width: 60px; height: 60px; border-radius: 30px 0 30px 0; box-shadow: 0 2px 5px rgba(0,0,0,0.1);",
            )
            .map(|img| td("width: 70px; vertical-align: middle; text-align: right;", img)),
        );

        let text_style = format!("font-size: {}; color: #555;", size.text);
        let mut lines = Fragments::new();
        lines
            .push_opt(ctx.company().map(|company| {
                tr(td(
                    "padding-bottom: 10px;",
                    span(&format!("font-size: {}; color: #777;", size.job), company),
                ))
            }))
            .push(parts::contact_rows(ctx.contacts(&link), |contact| {
                td(
                    "padding-bottom: 5px;",
                    span(&text_style, format!("{} {}", contact.kind.glyph(), contact.html)),
                )
            }));

        let mut lower = Fragments::new();
        lower
            .push(td(
                "vertical-align: top;",
                parts::inner_table("border-collapse: collapse;", lines.finish()),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 90px; max-height: 50px;")
                    .map(|logo| td("width: 100px; vertical-align: bottom; text-align: right;", logo)),
            );

        let mut bottom = Fragments::new();
        bottom
            .push(format!(
                r#"<div style="height: 1px; background: linear-gradient(to right, {primary}, transparent); margin-bottom: 15px;"></div>"#
            ))
            .push(parts::inner_table(FULL_WIDTH, tr(lower.finish())))
            .push_opt(spaced_socials(ctx.modern_social("22px", BadgeStyle::Gradient), "15px"));

        let rows = format!(
            "{}\n{}",
            parts::row(
                "padding-bottom: 15px;",
                parts::inner_table(FULL_WIDTH, tr(top.finish()))
            ),
            tr(cell(bottom.finish()))
        );
        parts::table(ctx, 550, "", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Escaping;
    use crate::signature::SignatureData;

    fn data() -> SignatureData {
        let mut data = SignatureData::new("Ana Silva", "ana@example.com");
        data.phone = Some("(11) 98765-4321".into());
        data.website = Some("https://ana.dev".into());
        data
    }

    #[test]
    fn test_elegant_minimalist_labels_all_networks() {
        let mut data = data();
        data.instagram = Some("ana".into());
        data.facebook = Some("ana".into());
        data.linkedin = Some("ana".into());
        data.twitter = Some("ana".into());
        let html = ElegantMinimalist.render(&RenderContext::new(&data, Escaping::Raw));
        for label in [">Instagram</a>", ">Facebook</a>", ">LinkedIn</a>", ">Twitter</a>"] {
            assert!(html.contains(label), "{label}");
        }
    }

    #[test]
    fn test_modern_minimalist_bullet_only_with_website() {
        let mut data = data();
        let html = ModernMinimalist.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("•</span><a href=\"https://ana.dev\""));
        data.website = None;
        let html = ModernMinimalist.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(!html.contains('•'));
    }

    #[test]
    fn test_modern_simple_logo_placement() {
        let mut data = data();
        data.show_logo = true;
        data.logo_image = Some("https://cdn.example.com/logo.png".into());
        let html = ModernSimple.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("max-width: 90px; max-height: 50px;"));

        data.profile_image = Some("https://cdn.example.com/ana.png".into());
        let html = ModernSimple.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("max-width: 90px; max-height: 40px;"));
        assert!(html.find("ana.png").unwrap() < html.find("logo.png").unwrap());
    }

    #[test]
    fn test_modern_compact_single_line() {
        let data = data();
        let html = ModernCompact.render(&RenderContext::new(&data, Escaping::Raw));
        assert_eq!(html.matches("&nbsp;|&nbsp;").count(), 2);
        let data = SignatureData::new("Ana Silva", "ana@example.com");
        let html = ModernCompact.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(!html.contains("&nbsp;|&nbsp;"));
    }

    #[test]
    fn test_modern_elegant_company_leads_contacts() {
        let mut data = data();
        data.company = Some("Acme".into());
        let html = ModernElegant.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.find(">Acme</span>").unwrap() < html.find("📱").unwrap());
    }
}
