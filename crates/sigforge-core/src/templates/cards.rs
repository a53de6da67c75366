//! Boxed layouts: dark panels, shadowed cards and bordered frames.

use crate::format::BadgeStyle;
use crate::markup::{ContactKind, Fragments, RenderContext};
use crate::templates::parts::{self, cell, div, span, td, tr};
use crate::templates::{SignatureTemplate, TemplateInfo};

const FULL_WIDTH: &str = "width: 100%; border-collapse: collapse;";

/// Social badges under a thin rule, or nothing when there are no badges.
fn ruled_socials(links: String, rule_color: &str) -> Option<String> {
    parts::non_empty(links).map(|links| {
        div(
            &format!("margin-top: 15px; border-top: 1px solid {rule_color}; padding-top: 15px;"),
            links,
        )
    })
}

/// A thin gradient bar from the primary to the secondary colour.
fn accent_bar(ctx: &RenderContext<'_>, height: &str) -> String {
    parts::row(
        "padding: 0;",
        format!(
            r#"<div style="height: {height}; background: linear-gradient(90deg, {}, {});"></div>"#,
            ctx.primary(),
            ctx.secondary()
        ),
    )
}

pub struct DarkMinimalist;

static DARK_MINIMALIST: TemplateInfo = TemplateInfo {
    id: "dark-minimalist",
    name: "Dark Minimalist",
    description: "Elegant design on a dark background",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for DarkMinimalist {
    fn info(&self) -> &'static TemplateInfo {
        &DARK_MINIMALIST
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let identity = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: white;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 5px;", size.job),
            &format!("font-size: {}; color: #aaa; margin-bottom: 10px;", size.job),
        );
        let mut header = Fragments::new();
        header
            .push_opt(
                parts::profile_img(
                    ctx,
                    &format!(
                        "width: 80px; height: 80px; border-radius: 50%; border: 2px solid {primary}; box-shadow: 0 0 10px rgba(0,0,0,0.3);"
                    ),
                )
                .map(|img| td("width: 90px; vertical-align: middle;", img)),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: middle;",
                    ctx.has_profile_image(),
                    "padding-left: 15px;",
                ),
                identity.finish(),
            ));

        let mut contact = parts::contact_lines(
            ctx.contacts(&link),
            &format!("font-size: {}; color: #ddd; margin-bottom: 5px;", size.text),
        );
        contact.push(ctx.modern_social("24px", BadgeStyle::Outline));

        let mut footer = Fragments::new();
        footer.push(cell(contact.finish())).push_opt(
            parts::logo_img(ctx, "height: 40px;")
                .map(|logo| td("text-align: right; vertical-align: bottom;", logo)),
        );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(header.finish())))
            .push(r#"<div style="height: 1px; background-color: #444; margin: 15px 0;"></div>"#)
            .push(parts::inner_table(FULL_WIDTH, tr(footer.finish())));

        parts::table(
            ctx,
            500,
            "background-color: #222; border-radius: 8px; overflow: hidden;",
            parts::row("padding: 20px;", body.finish()),
        )
    }
}

pub struct ModernCard;

static MODERN_CARD: TemplateInfo = TemplateInfo {
    id: "modern-card",
    name: "Modern Card",
    description: "Card design with soft shadows and rounded corners",
    thumbnail: "/templates/business-card.svg",
};

impl SignatureTemplate for ModernCard {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_CARD
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let contacts = parts::contact_lines(
            ctx.contacts(&link),
            &format!(
                "font-size: {}; color: #666; margin-right: 15px; margin-bottom: 8px;",
                size.text
            ),
        );
        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: #333; margin-bottom: 5px;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 15px;", size.job),
        );
        details
            .push(div(
                "display: flex; flex-wrap: wrap; margin-bottom: 15px;",
                format!("\n{}\n", contacts.finish()),
            ))
            .push(ctx.modern_social("26px", BadgeStyle::Rounded));

        let mut cells = Fragments::new();
        cells.push(td("vertical-align: top;", details.finish())).push_opt(
            parts::profile_img(
                ctx,
                "width: 90px; height: 90px; border-radius: 8px; object-fit: cover;",
            )
            .map(|img| td("width: 100px; vertical-align: top; text-align: right;", img)),
        );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(parts::logo_img(ctx, "height: 35px;").map(|logo| {
                div(
                    "margin-top: 15px; border-top: 1px solid #eee; padding-top: 15px;",
                    logo,
                )
            }));

        let rows = format!(
            "{}\n{}",
            accent_bar(ctx, "8px"),
            parts::row("padding: 25px;", body.finish())
        );
        // Separate borders so the rounded corners clip the accent bar.
        format!(
            r#"<table style="font-family: {}; max-width: 550px; border-collapse: separate; border-spacing: 0; background-color: white; border-radius: 12px; overflow: hidden; box-shadow: 0 10px 20px rgba(0,0,0,0.1);">
{rows}
</table>"#,
            ctx.font_family()
        )
    }
}

pub struct TechModern;

static TECH_MODERN: TemplateInfo = TemplateInfo {
    id: "tech-modern",
    name: "Tech Modern",
    description: "Technology-inspired design with futuristic touches",
    thumbnail: "/templates/modern-colored.svg",
};

impl SignatureTemplate for TechModern {
    fn info(&self) -> &'static TemplateInfo {
        &TECH_MODERN
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let photo = parts::profile_img(ctx, "width: 100%; height: 100%; object-fit: cover;").map(
            |img| {
                td(
                    "width: 100px; vertical-align: top;",
                    format!(
                        r#"<div style="width: 90px; height: 90px; position: relative; overflow: hidden; border-radius: 10px;">
<div style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: linear-gradient(135deg, rgba(0,0,0,0.1) 0%, rgba(0,0,0,0) 100%);"></div>
{img}
</div>"#
                    ),
                )
            },
        );

        let value_style = format!("padding-bottom: 8px; font-size: {}; color: #555;", size.text);
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let tile = td(
                "padding-right: 10px; padding-bottom: 8px;",
                format!(
                    r#"<div style="width: 24px; height: 24px; background-color: #f0f0f0; border-radius: 4px; display: flex; align-items: center; justify-content: center;"><span style="font-size: 12px;">{}</span></div>"#,
                    contact.kind.glyph()
                ),
            );
            format!("{tile}\n{}", td(&value_style, &contact.html))
        });

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: #333; margin-bottom: 5px;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job),
        );
        details.push(div(
            "margin-top: 10px;",
            parts::inner_table("border-collapse: collapse;", contacts),
        ));

        let mut cells = Fragments::new();
        cells.push_opt(photo).push(td(
            &parts::style_if("vertical-align: top;", ctx.has_profile_image(), "padding-left: 20px;"),
            details.finish(),
        ));

        let mut bottom = Fragments::new();
        bottom
            .push(ctx.modern_social("26px", BadgeStyle::Filled))
            .push_opt(
                parts::logo_img(ctx, "height: 40px;").map(|logo| div("text-align: right;", logo)),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(bottom.wrap(
                r#"<div style="margin-top: 15px; border-top: 1px solid #eee; padding-top: 15px; display: flex; justify-content: space-between; align-items: center;">"#,
                "</div>",
            ));

        parts::table(
            ctx,
            550,
            "background-color: #f8f9fa; border-radius: 8px; overflow: hidden;",
            format!(
                "{}\n{}",
                accent_bar(ctx, "5px"),
                parts::row("padding: 20px;", body.finish())
            ),
        )
    }
}

pub struct BusinessCardModern;

static BUSINESS_CARD_MODERN: TemplateInfo = TemplateInfo {
    id: "business-card-modern",
    name: "Modern Business Card",
    description: "Design inspired by a modern corporate business card",
    thumbnail: "/templates/business-card.svg",
};

impl SignatureTemplate for BusinessCardModern {
    fn info(&self) -> &'static TemplateInfo {
        &BUSINESS_CARD_MODERN
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::sized_link_style(ctx);

        let mut left = Fragments::new();
        left.push_opt(parts::profile_img(
            ctx,
            "width: 100%; max-width: 120px; border-radius: 6px; display: block; margin: 0 auto 15px;",
        ))
        .push(div(
            &format!(
                "font-size: {}; font-weight: bold; color: white; text-align: center; margin-bottom: 5px;",
                size.name
            ),
            ctx.name(),
        ))
        .push_opt(ctx.job_title().map(|job| {
            div(
                &format!("font-size: {}; color: rgba(255,255,255,0.9); text-align: center;", size.job),
                job,
            )
        }));

        let glyph_style = format!("color: {primary}; font-size: {};", size.text);
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let value = match contact.kind {
                ContactKind::Phone => {
                    span(&format!("font-size: {}; color: #555;", size.text), &contact.html)
                }
                _ => contact.html.clone(),
            };
            let line = tr(format!(
                "{}\n{}",
                td(
                    "vertical-align: top; padding-right: 10px; width: 20px;",
                    span(&glyph_style, contact.kind.glyph())
                ),
                td("vertical-align: top;", value)
            ));
            td(
                "padding-bottom: 10px;",
                parts::inner_table("border-collapse: collapse;", line),
            )
        });

        let mut right = Fragments::new();
        right
            .push_opt(ctx.company().map(|company| {
                div(
                    &format!(
                        "font-size: {}; color: {primary}; margin-bottom: 15px; font-weight: bold;",
                        size.job
                    ),
                    company,
                )
            }))
            .push(parts::inner_table("border-collapse: collapse; width: 100%;", contacts))
            .push(ctx.modern_social("24px", BadgeStyle::Filled))
            .push_opt(
                parts::logo_img(ctx, "height: 35px;")
                    .map(|logo| div("margin-top: 15px; text-align: right;", logo)),
            );

        let panels = format!(
            "{}\n{}",
            td(
                &format!(
                    "width: 35%; background-color: {primary}; padding: 20px; vertical-align: middle;"
                ),
                left.finish(),
            ),
            td("width: 65%; padding: 20px; vertical-align: top;", right.finish()),
        );

        parts::table(
            ctx,
            500,
            "background-color: white; border: 1px solid #e0e0e0; border-radius: 6px; overflow: hidden; box-shadow: 0 2px 5px rgba(0,0,0,0.05);",
            parts::row("padding: 0;", parts::inner_table(FULL_WIDTH, tr(panels))),
        )
    }
}

pub struct ModernHighlight;

static MODERN_HIGHLIGHT: TemplateInfo = TemplateInfo {
    id: "modern-highlight",
    name: "Modern Highlight",
    description: "Modern design with highlighted contact tiles",
    thumbnail: "/templates/modern-colored.svg",
};

impl SignatureTemplate for ModernHighlight {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_HIGHLIGHT
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let value_style = format!("vertical-align: middle; font-size: {}; color: #555;", size.text);
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let tile = td(
                "vertical-align: middle; padding-right: 8px; width: 22px;",
                format!(
                    r#"<div style="width: 22px; height: 22px; background-color: {primary}; border-radius: 4px; display: flex; align-items: center; justify-content: center;"><span style="color: white; font-size: 12px;">{}</span></div>"#,
                    contact.kind.glyph()
                ),
            );
            let line = tr(format!("{tile}\n{}", td(&value_style, &contact.html)));
            td(
                "padding-bottom: 8px;",
                parts::inner_table("border-collapse: collapse;", line),
            )
        });

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: #333; margin-bottom: 5px;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job),
        );
        details.push(div(
            "margin-top: 10px;",
            parts::inner_table("border-collapse: collapse;", contacts),
        ));

        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(ctx, "width: 100%; height: 100%; object-fit: cover;").map(
                    |img| {
                        td(
                            "width: 100px; vertical-align: top;",
                            div(
                                "width: 90px; height: 90px; border-radius: 8px; overflow: hidden; box-shadow: 0 3px 6px rgba(0,0,0,0.1);",
                                img,
                            ),
                        )
                    },
                ),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: top;",
                    ctx.has_profile_image(),
                    "padding-left: 20px;",
                ),
                details.finish(),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 90px; max-height: 50px;")
                    .map(|logo| td("width: 100px; vertical-align: top; text-align: right;", logo)),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(ruled_socials(ctx.modern_social("24px", BadgeStyle::Rounded), "#eee"));

        let card = parts::inner_table(
            "width: 100%; border-collapse: collapse; background-color: #f9f9f9; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 5px rgba(0,0,0,0.05);",
            format!(
                "{}\n{}",
                accent_bar(ctx, "8px"),
                parts::row("padding: 20px;", body.finish())
            ),
        );

        parts::table(ctx, 550, "", parts::row("padding: 0;", card))
    }
}

pub struct ModernBordered;

static MODERN_BORDERED: TemplateInfo = TemplateInfo {
    id: "modern-bordered",
    name: "Modern Bordered",
    description: "Modern design inside a fine rounded frame",
    thumbnail: "/templates/corporate-bordered.svg",
};

impl SignatureTemplate for ModernBordered {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_BORDERED
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let mut details = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: {primary}; margin-bottom: 5px;",
                size.name
            ),
            &format!("font-size: {}; color: #555; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #777; margin-bottom: 10px;", size.job),
        );
        details.push(div(
            "margin-top: 10px;",
            parts::inner_table("border-collapse: collapse;", parts::glyph_rows(ctx, &link)),
        ));

        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(
                    ctx,
                    "width: 90px; height: 90px; border-radius: 8px; border: 1px solid #e0e0e0;",
                )
                .map(|img| td("width: 100px; vertical-align: top;", img)),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: top;",
                    ctx.has_profile_image(),
                    "padding-left: 20px;",
                ),
                details.finish(),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 90px; max-height: 50px;")
                    .map(|logo| td("width: 100px; vertical-align: top; text-align: right;", logo)),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(ruled_socials(ctx.modern_social("24px", BadgeStyle::Filled), "#e0e0e0"));

        parts::table(
            ctx,
            550,
            "border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden;",
            parts::row("padding: 20px;", body.finish()),
        )
    }
}
