//! Structured business layouts with icon rows and side logos.

use crate::format::BadgeStyle;
use crate::markup::{Fragments, RenderContext};
use crate::templates::parts::{self, cell, div, td, tr};
use crate::templates::{SignatureTemplate, TemplateInfo};

const FULL_WIDTH: &str = "width: 100%; border-collapse: collapse;";

pub struct ModernProfessional;

static MODERN_PROFESSIONAL: TemplateInfo = TemplateInfo {
    id: "modern-professional",
    name: "Modern Professional",
    description: "Professional layout with a clean, modern design",
    thumbnail: "/templates/corporate-bordered.svg",
};

impl SignatureTemplate for ModernProfessional {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_PROFESSIONAL
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let identity = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: {primary}; letter-spacing: 0.5px;",
                size.name
            ),
            &format!("font-size: {}; color: #555; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #777; margin-bottom: 5px;", size.job),
        );
        let mut header = Fragments::new();
        header
            .push(td("vertical-align: middle;", identity.finish()))
            .push_opt(
                parts::profile_img(
                    ctx,
                    &format!(
                        "width: 70px; height: 70px; border-radius: 50%; border: 3px solid {primary};"
                    ),
                )
                .map(|img| td("width: 80px; vertical-align: middle; text-align: right;", img)),
            );

        let value_style = format!("padding-bottom: 8px; font-size: {}; color: #555;", size.text);
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let icon = td(
                "padding-right: 10px; padding-bottom: 8px; vertical-align: top;",
                format!(
                    r#"<span style="display: inline-block; width: 18px; height: 18px; background-color: {primary}; border-radius: 50%; text-align: center; line-height: 18px;"><span style="color: white; font-size: 10px;">{}</span></span>"#,
                    contact.kind.glyph()
                ),
            );
            format!("{icon}\n{}", td(&value_style, &contact.html))
        });

        let mut lower = Fragments::new();
        lower
            .push(td(
                "vertical-align: top;",
                parts::inner_table("border-collapse: collapse;", contacts),
            ))
            .push_opt(
                parts::logo_img(ctx, "height: 45px;")
                    .map(|logo| td("vertical-align: bottom; text-align: right;", logo)),
            );

        let mut bottom = Fragments::new();
        bottom
            .push(format!(
                r#"<div style="height: 2px; background: linear-gradient(90deg, {primary}, transparent); margin-bottom: 15px;"></div>"#
            ))
            .push(parts::inner_table(FULL_WIDTH, tr(lower.finish())))
            .push(ctx.modern_social("24px", BadgeStyle::Filled));

        let rows = format!(
            "{}\n{}",
            parts::row(
                "padding-bottom: 15px;",
                parts::inner_table(FULL_WIDTH, tr(header.finish()))
            ),
            tr(cell(bottom.finish()))
        );
        parts::table(ctx, 600, "", rows)
    }
}

pub struct CorporateSignature;

static CORPORATE_SIGNATURE: TemplateInfo = TemplateInfo {
    id: "corporate-signature",
    name: "Corporate Signature",
    description: "Professional design for corporate environments",
    thumbnail: "/templates/corporate-bordered.svg",
};

impl SignatureTemplate for CorporateSignature {
    fn info(&self) -> &'static TemplateInfo {
        &CORPORATE_SIGNATURE
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let glyph_style = format!("vertical-align: middle; padding-right: 8px; width: 18px; color: {primary};");
        let value_style = format!("vertical-align: middle; font-size: {}; color: #555;", size.text);
        let contacts = parts::contact_rows(ctx.contacts(&link), |contact| {
            let line = tr(format!(
                "{}\n{}",
                td(&glyph_style, contact.kind.glyph()),
                td(&value_style, &contact.html)
            ));
            td(
                "padding-bottom: 5px;",
                parts::inner_table("border-collapse: collapse;", line),
            )
        });

        let mut details = parts::identity(
            ctx,
            &format!("font-size: {}; font-weight: bold; color: #333; margin-bottom: 5px;", size.name),
            &format!("font-size: {}; color: {primary}; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #666; margin-bottom: 10px;", size.job),
        );
        details.push(parts::inner_table(
            "border-collapse: collapse; margin-top: 10px;",
            contacts,
        ));

        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(
                    ctx,
                    "width: 80px; height: 80px; border-radius: 4px; border: 1px solid #eee;",
                )
                .map(|img| td("width: 90px; vertical-align: top;", img)),
            )
            .push(td(
                &parts::style_if(
                    "vertical-align: top;",
                    ctx.has_profile_image(),
                    "padding-left: 15px;",
                ),
                details.finish(),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 100px; max-height: 60px;")
                    .map(|logo| td("width: 120px; vertical-align: top; text-align: right;", logo)),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push(ctx.modern_social("24px", BadgeStyle::Filled));

        let framed = parts::inner_table(
            &format!("width: 100%; border-collapse: collapse; border-left: 4px solid {primary};"),
            parts::row("padding: 15px 20px;", body.finish()),
        );
        parts::table(ctx, 550, "", parts::row("padding: 0;", framed))
    }
}

pub struct ModernPhoto;

static MODERN_PHOTO: TemplateInfo = TemplateInfo {
    id: "modern-photo",
    name: "Modern Photo",
    description: "Modern design that puts the photo first",
    thumbnail: "/templates/classic-horizontal.svg",
};

impl SignatureTemplate for ModernPhoto {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_PHOTO
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        // First name captioned over the bottom of the photo.
        let photo = parts::profile_img(ctx, "width: 100%; height: 100%; object-fit: cover;").map(
            |img| {
                td(
                    "width: 130px; vertical-align: top;",
                    format!(
                        r#"<div style="position: relative; width: 120px; height: 120px; overflow: hidden; border-radius: 10px; box-shadow: 0 4px 10px rgba(0,0,0,0.1);">
{img}
<div style="position: absolute; bottom: 0; left: 0; right: 0; height: 30px; background: linear-gradient(transparent, rgba(0,0,0,0.7)); padding: 5px 0;"><div style="font-size: 12px; color: white; text-align: center; text-shadow: 1px 1px 1px rgba(0,0,0,0.5);">{}</div></div>
</div>"#,
                        ctx.first_name()
                    ),
                )
            },
        );

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
            .push(div(
                "margin-top: 10px;",
                parts::inner_table("border-collapse: collapse;", parts::glyph_rows(ctx, &link)),
            ))
            .push_opt(
                parts::non_empty(ctx.modern_social("26px", BadgeStyle::Rounded))
                    .map(|links| div("margin-top: 10px;", links)),
            );

        let mut cells = Fragments::new();
        cells
            .push_opt(photo)
            .push(td(
                &parts::style_if(
                    "vertical-align: top;",
                    ctx.has_profile_image(),
                    "padding-left: 15px;",
                ),
                details.finish(),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 90px; max-height: 50px;")
                    .map(|logo| td("width: 100px; vertical-align: top; text-align: right;", logo)),
            );

        parts::table(
            ctx,
            550,
            "",
            tr(cell(parts::inner_table(FULL_WIDTH, tr(cells.finish())))),
        )
    }
}

pub struct ModernHorizontal;

static MODERN_HORIZONTAL: TemplateInfo = TemplateInfo {
    id: "modern-horizontal",
    name: "Modern Horizontal",
    description: "Horizontal layout with a modern look",
    thumbnail: "/templates/classic-horizontal.svg",
};

impl SignatureTemplate for ModernHorizontal {
    fn info(&self) -> &'static TemplateInfo {
        &MODERN_HORIZONTAL
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let size = ctx.size();
        let primary = ctx.primary();
        let link = parts::link_style(ctx);

        let identity = parts::identity(
            ctx,
            &format!(
                "font-size: {}; font-weight: bold; color: {primary}; margin-bottom: 5px;",
                size.name
            ),
            &format!("font-size: {}; color: #555; margin-bottom: 3px;", size.job),
            &format!("font-size: {}; color: #777; margin-bottom: 10px;", size.job),
        );

        let mut cells = Fragments::new();
        cells
            .push_opt(
                parts::profile_img(
                    ctx,
                    "width: 90px; height: 90px; border-radius: 8px; object-fit: cover; box-shadow: 0 3px 6px rgba(0,0,0,0.1);",
                )
                .map(|img| td("width: 100px; vertical-align: middle; padding-right: 20px;", img)),
            )
            .push(td("vertical-align: middle;", identity.finish()))
            .push(td(
                "vertical-align: middle; padding-left: 20px; border-left: 1px solid #eee;",
                parts::inner_table("border-collapse: collapse;", parts::glyph_rows(ctx, &link)),
            ))
            .push_opt(
                parts::logo_img(ctx, "max-width: 90px; max-height: 50px;").map(|logo| {
                    td("width: 100px; vertical-align: middle; text-align: right;", logo)
                }),
            );

        let mut body = Fragments::new();
        body.push(parts::inner_table(FULL_WIDTH, tr(cells.finish())))
            .push_opt(
                parts::non_empty(ctx.modern_social("24px", BadgeStyle::Filled)).map(|links| {
                    div(
                        "margin-top: 15px; border-top: 1px solid #eee; padding-top: 15px;",
                        links,
                    )
                }),
            );

        parts::table(ctx, 600, "", tr(cell(body.finish())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Escaping;
    use crate::signature::SignatureData;

    #[test]
    fn test_modern_photo_captions_first_name() {
        let mut data = SignatureData::new("Ana Maria Silva", "ana@example.com");
        data.profile_image = Some("https://cdn.example.com/ana.png".into());
        let html = ModernPhoto.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("rgba(0,0,0,0.5);\">Ana</div>"));
    }

    #[test]
    fn test_modern_photo_no_caption_without_photo() {
        let data = SignatureData::new("Ana Maria Silva", "ana@example.com");
        let html = ModernPhoto.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(!html.contains(">Ana</div>"));
        assert!(!html.contains("padding-left: 15px;"));
    }

    #[test]
    fn test_corporate_signature_accent_border() {
        let data = SignatureData::new("Ana Silva", "ana@example.com");
        let html = CorporateSignature.render(&RenderContext::new(&data, Escaping::Raw));
        assert!(html.contains("border-left: 4px solid #0f766e;"));
    }

    #[test]
    fn test_modern_professional_icon_per_contact() {
        let mut data = SignatureData::new("Ana Silva", "ana@example.com");
        data.website = Some("https://ana.dev".into());
        let html = ModernProfessional.render(&RenderContext::new(&data, Escaping::Raw));
        assert_eq!(html.matches("line-height: 18px;").count(), 2);
        assert!(html.contains(">ana.dev</a>"));
    }

    #[test]
    fn test_modern_horizontal_contacts_column() {
        let mut data = SignatureData::new("Ana Silva", "ana@example.com");
        data.phone = Some("(11) 98765-4321".into());
        let html = ModernHorizontal.render(&RenderContext::new(&data, Escaping::Raw));
        let divider = html.find("border-left: 1px solid #eee;").unwrap();
        assert!(html.find("📱 (11) 98765-4321").unwrap() > divider);
    }
}
