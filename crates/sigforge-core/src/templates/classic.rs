//! The first five layouts: plain tables with emoji contact lines and inline icon links.

use crate::markup::{Fragments, RenderContext};
use crate::templates::parts::{self, cell, div, td, tr};
use crate::templates::{SignatureTemplate, TemplateInfo};

const DIVIDER: &str =
    r#"<div style="height: 1px; background-color: #ddd; margin: 10px 0; width: 100%;"></div>"#;

pub struct ClassicHorizontal;

static CLASSIC_HORIZONTAL: TemplateInfo = TemplateInfo {
    id: "classic-horizontal",
    name: "Classic Horizontal",
    description: "Traditional horizontal layout with the photo on the left",
    thumbnail: "/templates/classic-horizontal.svg",
};

impl SignatureTemplate for ClassicHorizontal {
    fn info(&self) -> &'static TemplateInfo {
        &CLASSIC_HORIZONTAL
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);
        let job_style = format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.job);
        let text_style = format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.text);

        let mut details = Fragments::new();
        details
            .push(div(
                &format!("font-size: {}; font-weight: bold; color: {primary};", size.name),
                ctx.name(),
            ))
            .push_opt(ctx.job_title().map(|job| div(&job_style, job)))
            .push_opt(ctx.department().map(|department| div(&job_style, department)))
            .push_opt(ctx.company().map(|company| {
                div(
                    &format!("font-size: {}; color: {secondary}; margin-bottom: 10px;", size.job),
                    company,
                )
            }))
            .push(DIVIDER)
            .push_opt(ctx.phone().map(|phone| div(&text_style, format!("📱 {phone}"))))
            .push_opt(
                ctx.whatsapp()
                    .map(|whatsapp| div(&text_style, format!("💬 WhatsApp: {whatsapp}"))),
            )
            .push(div(&text_style, format!("✉️ {}", ctx.mailto(&link))))
            .push_opt(
                ctx.website_link(&link)
                    .map(|website| div(&text_style, format!("🌐 {website}"))),
            )
            .push(ctx.legacy_social("24px"))
            .push_opt(
                parts::logo_img(ctx, "height: 50px;").map(|logo| div("margin-top: 10px;", logo)),
            );

        let border = ctx.border();
        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(ctx, "width: 100px; height: 100px; border-radius: 50%;").map(
                    |img| {
                        let style = parts::style_if(
                            "vertical-align: top; padding-right: 15px;",
                            !border.is_empty(),
                            &border,
                        );
                        td(&style, img)
                    },
                ),
            )
            .push(td("vertical-align: top;", details.finish()));

        parts::table(ctx, 600, "", tr(cells.finish()))
    }
}

pub struct ModernColored;

static MODERN_COLORED: TemplateInfo = TemplateInfo {
    id: "modern-colored",
    name: "Modern Colored",
    description: "Modern design with colour highlights and label badges",
    thumbnail: "/templates/modern-colored.svg",
};

impl ModernColored {
    /// White network labels on brand-coloured pills.
    fn badges(ctx: &RenderContext<'_>) -> Option<String> {
        let mut badges = Fragments::new();
        for (network, url) in ctx.social_urls() {
            badges.push(format!(
                r#"<a href="{url}" target="_blank" style="display: inline-block; margin-right: 8px; background-color: {}; padding: 4px 8px; border-radius: 3px; text-decoration: none;"><span style="color: white; font-size: 11px;">{}</span></a>"#,
                network.brand_color(),
                network.label(),
            ));
        }
        badges.wrap(r#"<div style="margin-top: 8px;">"#, "</div>")
    }
}

impl SignatureTemplate for ModernColored {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_COLORED
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);
        let text_style = format!("font-size: {}; color: {secondary}; margin-bottom: 3px;", size.text);

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: {primary};", size.name),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.job),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 8px;", size.job),
        );
        details
            .push_opt(ctx.phone().map(|phone| div(&text_style, format!("📱 {phone}"))))
            .push(div(
                &format!("font-size: {}; color: {secondary}; margin-bottom: 8px;", size.text),
                format!("✉️ {}", ctx.mailto(&link)),
            ))
            .push_opt(
                ctx.website_link(&link)
                    .map(|website| div(&text_style, format!("🌐 {website}"))),
            )
            .push_opt(Self::badges(ctx))
            .push_opt(
                parts::logo_img(ctx, "height: 40px;").map(|logo| div("margin-top: 10px;", logo)),
            );

        let border = ctx.border();
        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(
                    ctx,
                    &format!("width: 90px; height: 90px; border-radius: 5px; border: 2px solid {primary};"),
                )
                .map(|img| {
                    let style = parts::style_if(
                        "vertical-align: middle; padding-right: 15px;",
                        !border.is_empty(),
                        &border,
                    );
                    td(&style, img)
                }),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: middle;",
                    ctx.has_profile_image(),
                    "padding-left: 15px;",
                ),
                details.finish(),
            ));

        parts::table(ctx, 600, "", tr(cells.finish()))
    }
}

pub struct Minimalist;

static MINIMALIST: TemplateInfo = TemplateInfo {
    id: "minimalist",
    name: "Minimalist",
    description: "Clean, minimal design",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for Minimalist {
    fn info(&self) -> &'static TemplateInfo {
        &MINIMALIST
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);

        let mut contact = Fragments::new();
        contact
            .push_opt(
                ctx.phone()
                    .map(|phone| parts::span("margin-right: 10px;", format!("📱 {phone}"))),
            )
            .push(format!("<span>✉️ {}</span>", ctx.mailto(&link)))
            .push_opt(ctx.website_link(&link).map(|website| {
                parts::span("margin-left: 10px;", format!("🌐 {website}"))
            }));

        let mut body = Fragments::new();
        body.push_opt(
            parts::profile_img(ctx, "width: 60px; height: 60px; border-radius: 50%;")
                .map(|img| div("margin-bottom: 8px;", img)),
        )
        .push(div(
            &format!("font-size: {}; font-weight: 600; color: {primary};", size.name),
            ctx.name(),
        ))
        .push_opt(ctx.job_title().map(|job| {
            div(
                &format!("font-size: {}; color: {secondary}; margin-bottom: 12px;", size.job),
                job,
            )
        }))
        .push_opt(ctx.company().map(|company| {
            div(&format!("font-size: {}; color: {secondary};", size.job), company)
        }))
        .push(format!(
            r#"<div style="width: 30px; height: 2px; background-color: {primary}; margin: 8px 0;"></div>"#
        ))
        .push(div(
            &format!("font-size: {}; color: {secondary}; margin: 5px 0;", size.text),
            contact.finish(),
        ))
        .push_opt(parts::label_social_links(
            ctx,
            &format!("color: {secondary}; text-decoration: none; margin-right: 10px;"),
            &format!("margin-top: 8px; font-size: {};", size.text),
        ))
        .push_opt(
            parts::logo_img(ctx, "height: 35px;").map(|logo| div("margin-top: 10px;", logo)),
        );

        parts::table(ctx, 500, "", parts::row("padding-bottom: 10px;", body.finish()))
    }
}

pub struct CorporateBordered;

static CORPORATE_BORDERED: TemplateInfo = TemplateInfo {
    id: "corporate-bordered",
    name: "Corporate Bordered",
    description: "Professional design with a prominent accent border",
    thumbnail: "/templates/corporate-bordered.svg",
};

impl SignatureTemplate for CorporateBordered {
    fn info(&self) -> &'static TemplateInfo {
        &CORPORATE_BORDERED
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);
        let text_style = format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.text);

        let mut contact = Fragments::new();
        contact
            .push_opt(ctx.phone().map(|phone| div(&text_style, format!("📞 {phone}"))))
            .push(div(&text_style, format!("📧 {}", ctx.mailto(&link))))
            .push_opt(
                ctx.website_link(&link)
                    .map(|website| div(&text_style, format!("🌐 {website}"))),
            );

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: {primary};", size.name),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.job),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 10px;", size.job),
        );
        details
            .push(div("margin-top: 10px;", format!("\n{}\n", contact.finish())))
            .push(ctx.legacy_social("20px"))
            .push_opt(
                parts::logo_img(ctx, "height: 45px;").map(|logo| div("margin-top: 15px;", logo)),
            );

        let mut cells = Fragments::new();
        cells.push(td("padding: 15px;", details.finish())).push_opt(
            parts::profile_img(
                ctx,
                &format!("width: 100px; height: 100px; border: 2px solid {primary};"),
            )
            .map(|img| td("vertical-align: top; padding-left: 15px;", img)),
        );

        parts::table(
            ctx,
            600,
            &format!("border-left: 4px solid {primary}; padding-left: 15px;"),
            tr(cells.finish()),
        )
    }
}

pub struct BusinessCard;

static BUSINESS_CARD: TemplateInfo = TemplateInfo {
    id: "business-card",
    name: "Business Card",
    description: "Layout inspired by a printed business card",
    thumbnail: "/templates/business-card.svg",
};

impl SignatureTemplate for BusinessCard {
    fn info(&self) -> &'static TemplateInfo {
        &BUSINESS_CARD
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);
        let text_style = format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.text);

        let identity = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: {primary};", size.name),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 5px;", size.job),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 10px;", size.job),
        );
        let mut header = Fragments::new();
        header
            .push_opt(
                parts::profile_img(
                    ctx,
                    &format!(
                        "width: 70px; height: 70px; border-radius: 50%; border: 2px solid {primary};"
                    ),
                )
                .map(|img| td("width: 80px; vertical-align: top;", img)),
            )
            .push(td("vertical-align: top;", identity.finish()));

        let contacts = parts::contact_lines(ctx.contacts(&link), &text_style);
        let mut footer = Fragments::new();
        footer.push(cell(contacts.finish())).push_opt(
            parts::logo_img(ctx, "height: 40px;")
                .map(|logo| td("text-align: right; vertical-align: bottom;", logo)),
        );

        let mut body = Fragments::new();
        body.push(parts::inner_table(
            "width: 100%; border-collapse: collapse;",
            tr(header.finish()),
        ))
        .push(r#"<div style="height: 1px; background-color: #ddd; margin: 15px 0;"></div>"#)
        .push(parts::inner_table(
            "width: 100%; border-collapse: collapse;",
            tr(footer.finish()),
        ))
        .push(ctx.legacy_social("20px"));

        parts::table(
            ctx,
            500,
            "background-color: #f9f9f9; border: 1px solid #ddd; border-radius: 5px;",
            parts::row("padding: 20px;", body.finish()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Escaping;
    use crate::signature::{BorderStyle, SignatureData};

    fn data() -> SignatureData {
        let mut data = SignatureData::new("Ana Silva", "ana@example.com");
        data.department = Some("Product".into());
        data.whatsapp = Some("(11) 91234-5678".into());
        data.profile_image = Some("https://cdn.example.com/ana.png".into());
        data
    }

    #[test]
    fn test_classic_horizontal_shows_department_and_whatsapp() {
        let data = data();
        let html = ClassicHorizontal.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains(">Product</div>"));
        assert!(html.contains("💬 WhatsApp: (11) 91234-5678"));
    }

    #[test]
    fn test_classic_horizontal_border_on_photo_cell() {
        let mut data = data();
        data.border_style = BorderStyle::Dotted;
        let html = ClassicHorizontal.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains(
            r#"<td style="vertical-align: top; padding-right: 15px; border-right: 2px dotted #0f766e;">"#
        ));
    }

    #[test]
    fn test_modern_colored_badges_cover_every_network() {
        let mut data = data();
        data.linkedin = Some("anasilva".into());
        data.twitter = Some("anasilva".into());
        let html = ModernColored.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains(">LinkedIn</span>"));
        assert!(html.contains(">Twitter</span>"));
        assert!(!html.contains(">Instagram</span>"));
    }

    #[test]
    fn test_minimalist_text_links_follow_flag() {
        let mut data = data();
        data.facebook = Some("ana.fb".into());
        let html = Minimalist.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains(r#"href="https://www.facebook.com/ana.fb""#));
        data.show_social_icons = false;
        let html = Minimalist.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(!html.contains("facebook.com"));
    }

    #[test]
    fn test_corporate_bordered_uses_desk_glyphs() {
        let mut data = data();
        data.phone = Some("(11) 3333-4444".into());
        let html = CorporateBordered.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("📞 (11) 3333-4444"));
        assert!(html.contains("📧 <a href=\"mailto:ana@example.com\""));
    }

    #[test]
    fn test_business_card_logo_cell_only_when_shown() {
        let mut data = data();
        data.logo_image = Some("https://cdn.example.com/logo.png".into());
        let html = BusinessCard.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(!html.contains("logo.png"));
        data.show_logo = true;
        let html = BusinessCard.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains(r#"<img src="https://cdn.example.com/logo.png" alt="Logo""#));
    }
}
