//! Colour-forward layouts: gradients, split panels and decorative shapes.

use crate::format::BadgeStyle;
use crate::markup::{Contact, ContactKind, Fragments, RenderContext};
use crate::templates::parts::{self, cell, div, span, td, tr};
use crate::templates::{SignatureTemplate, TemplateInfo};

const FULL_WIDTH: &str = "width: 100%; border-collapse: collapse;";

/// A white glyph centred in a filled circle, followed by the contact value.
fn circle_contact(ctx: &RenderContext<'_>, contact: &Contact, gap: &str) -> String {
    let primary = ctx.primary();
    let icon = td(
        &format!("vertical-align: middle; padding-right: {gap}; width: 24px;"),
        format!(
            r#"<div style="width: 24px; height: 24px; background-color: {primary}; border-radius: 50%; display: flex; align-items: center; justify-content: center;"><span style="color: white; font-size: 12px;">{}</span></div>"#,
            contact.kind.glyph()
        ),
    );
    let value = td(
        "vertical-align: middle;",
        span(
            &format!("font-size: {}; color: #555;", ctx.size().text),
            &contact.html,
        ),
    );
    parts::inner_table("border-collapse: collapse;", tr(format!("{icon}\n{value}")))
}

pub struct ModernGradient;

static MODERN_GRADIENT: TemplateInfo = TemplateInfo {
    id: "modern-gradient",
    name: "Modern Gradient",
    description: "Contemporary design with a colour gradient header",
    thumbnail: "/templates/classic-horizontal.svg",
};

impl SignatureTemplate for ModernGradient {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_GRADIENT
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);
        let text_style = format!("font-size: {}; color: #555; margin-bottom: 5px;", size.text);

        let identity = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: white; text-shadow: 1px 1px 2px rgba(0,0,0,0.2);",
                size.name
            ),
            &format!("font-size: {}; color: rgba(255,255,255,0.9); margin-bottom: 5px;", size.job),
            &format!("font-size: {}; color: rgba(255,255,255,0.9); margin-bottom: 8px;", size.job),
        );
        let mut header = Fragments::new();
        header
            .push_opt(
                parts::profile_img(
                    ctx,
                    "width: 90px; height: 90px; border-radius: 8px; border: 3px solid white; box-shadow: 0 4px 8px rgba(0,0,0,0.1);",
                )
                .map(|img| td("width: 100px; vertical-align: middle; padding-right: 15px;", img)),
            )
            .push(td("vertical-align: middle;", identity.finish()));

        let mut contact = Fragments::new();
        contact
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
            .push(ctx.modern_social("28px", BadgeStyle::Gradient));

        let mut footer = Fragments::new();
        footer.push(cell(contact.finish())).push_opt(
            parts::logo_img(ctx, "height: 45px;")
                .map(|logo| td("text-align: right; vertical-align: bottom;", logo)),
        );

        let mut rows = Fragments::new();
        rows.push(parts::row(
            &format!(
                "padding: 15px; background: linear-gradient(135deg, {primary} 0%, {secondary} 100%); border-radius: 8px;"
            ),
            parts::inner_table(FULL_WIDTH, tr(header.finish())),
        ))
        .push(parts::row(
            "padding: 15px; background-color: white; border-radius: 0 0 8px 8px; box-shadow: 0 4px 8px rgba(0,0,0,0.05);",
            parts::inner_table(FULL_WIDTH, tr(footer.finish())),
        ));

        parts::table(ctx, 600, "", rows.finish())
    }
}

pub struct CreativeColorful;

static CREATIVE_COLORFUL: TemplateInfo = TemplateInfo {
    id: "creative-colorful",
    name: "Creative Colorful",
    description: "Playful design with stacked colour tiles behind the photo",
    thumbnail: "/templates/modern-colored.svg",
};

impl SignatureTemplate for CreativeColorful {
    fn info(&self) -> &'static TemplateInfo {
        &CREATIVE_COLORFUL
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::sized_link_style(ctx);

        let photo = parts::profile_img(
            ctx,
            "position: absolute; top: 0; left: 0; width: 100px; height: 100px; border-radius: 12px; object-fit: cover;",
        )
        .map(|img| {
            td(
                "width: 110px; vertical-align: top;",
                format!(
                    r#"<div style="position: relative; width: 100px; height: 100px;">
<div style="position: absolute; top: -5px; left: -5px; width: 100px; height: 100px; background-color: {secondary}; border-radius: 12px; transform: rotate(-3deg);"></div>
<div style="position: absolute; top: 5px; left: 5px; width: 100px; height: 100px; background-color: {primary}; border-radius: 12px; transform: rotate(3deg);"></div>
{img}
</div>"#
                ),
            )
        });

        let pill = format!(
            "display: inline-block; padding: 4px 10px; background-color: {primary}; border-radius: 20px; margin-right: 5px;"
        );
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let value = match contact.kind {
                ContactKind::Phone => {
                    span(&format!("font-size: {}; color: #555;", size.text), &contact.html)
                }
                _ => contact.html.clone(),
            };
            td(
                "padding-bottom: 8px;",
                format!(
                    "{}\n{value}",
                    div(
                        &pill,
                        span(
                            &format!("color: white; font-size: {};", size.text),
                            contact.kind.glyph()
                        )
                    )
                ),
            )
        });

        let mut details = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: {primary}; margin-bottom: 5px;",
                size.name
            ),
            &format!("font-size: {}; color: {secondary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job),
        );
        details.push(div(
            "margin-top: 10px;",
            parts::inner_table("border-collapse: collapse;", contacts),
        ));

        let mut cells = Fragments::new();
        cells.push_opt(photo).push(td(
            &parts::style_if("vertical-align: top;", ctx.has_profile_image(), "padding-left: 15px;"),
            details.finish(),
        ));

        let mut bottom = Fragments::new();
        bottom
            .push(ctx.modern_social("28px", BadgeStyle::Rounded))
            .push_opt(
                parts::logo_img(ctx, "height: 40px;").map(|logo| div("text-align: right;", logo)),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(bottom.wrap(
                r#"<div style="margin-top: 15px; display: flex; justify-content: space-between; align-items: center;">"#,
                "</div>",
            ));

        parts::table(ctx, 550, "", tr(cell(body.finish())))
    }
}

pub struct GeometricModern;

static GEOMETRIC_MODERN: TemplateInfo = TemplateInfo {
    id: "geometric-modern",
    name: "Geometric Modern",
    description: "Design built from modern geometric accents",
    thumbnail: "/templates/minimalist.svg",
};

impl SignatureTemplate for GeometricModern {
    fn info(&self) -> &'static TemplateInfo {
        &GEOMETRIC_MODERN
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::sized_link_style(ctx);

        let diamond = format!(
            r#"<div style="display: inline-block; width: 8px; height: 8px; background-color: {primary}; transform: rotate(45deg); margin-right: 10px;"></div>"#
        );
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let value = match contact.kind {
                ContactKind::Phone => {
                    span(&format!("font-size: {}; color: #555;", size.text), &contact.html)
                }
                _ => contact.html.clone(),
            };
            td("padding-bottom: 8px;", format!("{diamond}\n{value}"))
        });

        let mut contact_cells = Fragments::new();
        contact_cells
            .push(td(
                "vertical-align: top;",
                parts::inner_table("border-collapse: collapse;", contacts),
            ))
            .push_opt(
                parts::profile_img(
                    ctx,
                    "position: absolute; top: 5px; left: 5px; width: 80px; height: 80px; border-radius: 8px; object-fit: cover;",
                )
                .map(|img| {
                    td(
                        "width: 100px; vertical-align: top; text-align: right;",
                        format!(
                            r#"<div style="position: relative; width: 90px; height: 90px;">
<div style="position: absolute; top: 0; left: 0; width: 80px; height: 80px; border: 2px solid {primary}; border-radius: 8px; transform: rotate(3deg);"></div>
{img}
</div>"#
                        ),
                    )
                }),
            );

        let mut bottom = Fragments::new();
        bottom
            .push(ctx.modern_social("24px", BadgeStyle::Outline))
            .push_opt(
                parts::logo_img(ctx, "height: 35px;").map(|logo| div("text-align: right;", logo)),
            );

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: #333; margin-bottom: 5px;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job),
        );
        details
            .push(parts::inner_table(
                "border-collapse: collapse; margin-top: 10px;",
                tr(contact_cells.finish()),
            ))
            .push_opt(bottom.wrap(
                r#"<div style="margin-top: 15px; display: flex; justify-content: space-between; align-items: center;">"#,
                "</div>",
            ));

        let accent = td(
            "width: 15px; vertical-align: top;",
            format!(
                r#"<div style="width: 4px; height: 100%; background-color: {primary}; border-radius: 2px;"></div>"#
            ),
        );
        let main = td("vertical-align: top; padding-left: 15px;", details.finish());

        parts::table(
            ctx,
            550,
            "",
            tr(cell(parts::inner_table(
                FULL_WIDTH,
                tr(format!("{accent}\n{main}")),
            ))),
        )
    }
}

pub struct ModernSplit;

static MODERN_SPLIT: TemplateInfo = TemplateInfo {
    id: "modern-split",
    name: "Modern Split",
    description: "Modern design split into a coloured identity panel and a contact panel",
    thumbnail: "/templates/corporate-bordered.svg",
};

impl SignatureTemplate for ModernSplit {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_SPLIT
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::sized_link_style(ctx);

        let mut left = Fragments::new();
        left.push_opt(
            parts::profile_img(
                ctx,
                "width: 100px; height: 100px; border-radius: 50%; border: 3px solid white;",
            )
            .map(|img| div("text-align: center; margin-bottom: 15px;", img)),
        );
        left.push(
            parts::identity(
                ctx,
                &format!(
                    "font-size: {}; font-weight: bold; color: white; text-align: center; margin-bottom: 5px;",
                    size.name
                ),
                &format!(
                    "font-size: {}; color: rgba(255,255,255,0.9); text-align: center; margin-bottom: 3px;",
                    size.job
                ),
                &format!(
                    "font-size: {}; color: rgba(255,255,255,0.8); text-align: center; margin-bottom: 15px;",
                    size.job
                ),
            )
            .finish(),
        )
        .push(ctx.modern_social("26px", BadgeStyle::Outline));

        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            td("padding-bottom: 12px;", circle_contact(ctx, contact, "10px"))
        });
        let mut right = Fragments::new();
        right
            .push(parts::inner_table(FULL_WIDTH, contacts))
            .push_opt(
                parts::logo_img(ctx, "height: 40px;")
                    .map(|logo| div("margin-top: 15px; text-align: right;", logo)),
            );

        let panels = format!(
            "{}\n{}",
            td(
                &format!(
                    "width: 40%; background-color: {primary}; padding: 20px; vertical-align: top; border-radius: 8px 0 0 8px;"
                ),
                left.finish(),
            ),
            td(
                "width: 60%; padding: 20px; vertical-align: top; background-color: #f9f9f9; border-radius: 0 8px 8px 0;",
                right.finish(),
            ),
        );

        parts::table(
            ctx,
            550,
            "",
            tr(cell(parts::inner_table(FULL_WIDTH, tr(panels)))),
        )
    }
}

pub struct CreativeSignature;

static CREATIVE_SIGNATURE: TemplateInfo = TemplateInfo {
    id: "creative-signature",
    name: "Creative Signature",
    description: "Creative design with a coloured banner and distinctive shapes",
    thumbnail: "/templates/modern-colored.svg",
};

impl SignatureTemplate for CreativeSignature {
    fn info(&self) -> &'static TemplateInfo {
        &CREATIVE_SIGNATURE
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let secondary = ctx.secondary();
        let link = parts::link_style(ctx);

        let mut heading = Fragments::new();
        heading
            .push(div(
                &format!(
                    "font-size: {}; font-weight: bold; color: white; text-shadow: 1px 1px 2px rgba(0,0,0,0.2);",
                    size.name
                ),
                ctx.name(),
            ))
            .push_opt(ctx.job_title().map(|job| {
                div(
                    &format!("font-size: {}; color: rgba(255,255,255,0.9); margin-top: 3px;", size.job),
                    job,
                )
            }));

        let mut banner = Fragments::new();
        banner
            .push_opt(
                parts::profile_img(
                    ctx,
                    "width: 70px; height: 70px; border-radius: 50%; border: 3px solid white; box-shadow: 0 2px 5px rgba(0,0,0,0.2);",
                )
                .map(|img| td("width: 80px; vertical-align: middle;", img)),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: middle;",
                    ctx.has_profile_image(),
                    "padding-left: 15px;",
                ),
                heading.finish(),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-height: 40px; filter: brightness(0) invert(1);")
                    .map(|logo| td("vertical-align: middle; text-align: right;", logo)),
            );

        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            td(
                "padding-right: 15px; padding-bottom: 8px;",
                circle_contact(ctx, contact, "8px"),
            )
        });
        let mut details = Fragments::new();
        details
            .push_opt(ctx.company().map(|company| {
                div(&format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job), company)
            }))
            .push(parts::inner_table("border-collapse: collapse;", contacts))
            .push_opt(
                parts::non_empty(ctx.modern_social("26px", BadgeStyle::Gradient))
                    .map(|links| div("margin-top: 10px;", links)),
            );

        let top = format!(
            r#"<div style="position: relative; background-color: {primary}; padding: 15px; border-radius: 8px 8px 0 0; overflow: hidden;">
<div style="position: absolute; top: 0; right: 0; width: 100px; height: 100px; background-color: {secondary}; border-radius: 0 0 0 100px; opacity: 0.3;"></div>
<div style="position: relative; z-index: 1;">
{}
</div>
</div>"#,
            parts::inner_table(FULL_WIDTH, tr(banner.finish()))
        );
        let bottom = div(
            "background-color: white; padding: 15px; border-radius: 0 0 8px 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.05);",
            format!(
                "\n{}\n",
                parts::inner_table(FULL_WIDTH, tr(cell(details.finish())))
            ),
        );

        parts::table(ctx, 550, "", parts::row("padding: 0;", format!("{top}\n{bottom}")))
    }
}
