//! PPTX writer: serializes a [`Deck`] as an Office Open XML PresentationML package.
//!
//! The package is a zip holding one master, two layouts (title and title + body), a theme and one
//! part per slide. Every slide places its text in positioned placeholders so it renders the same
//! whether or not a viewer resolves layout inheritance. Output is byte-for-byte deterministic for a
//! given deck.

use std::io::{Seek, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::DeckError;
use crate::outline::{Deck, Slide, SlideKind};
use crate::templates::*;

pub const EMU_PER_INCH: i64 = 914_400;
/// 16 in × 9 in widescreen canvas.
pub const SLIDE_WIDTH_EMU: i64 = 16 * EMU_PER_INCH;
pub const SLIDE_HEIGHT_EMU: i64 = 9 * EMU_PER_INCH;

const FIRST_SLIDE_ID: usize = 256;
const TEXT_LANG: &str = "ru-RU";

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

const fn tenths(value: i64) -> i64 {
    value * EMU_PER_INCH / 10
}

const CENTER_TITLE_FRAME: Frame = Frame {
    x: tenths(12),
    y: tenths(28),
    cx: tenths(136),
    cy: tenths(19),
};
const SUBTITLE_FRAME: Frame = Frame {
    x: tenths(24),
    y: tenths(50),
    cx: tenths(112),
    cy: tenths(13),
};
const TITLE_FRAME: Frame = Frame {
    x: tenths(8),
    y: tenths(4),
    cx: tenths(144),
    cy: tenths(15),
};
const BODY_FRAME: Frame = Frame {
    x: tenths(8),
    y: tenths(21),
    cx: tenths(144),
    cy: tenths(62),
};

#[derive(Debug, Clone, Copy)]
enum Placeholder {
    CenterTitle,
    Subtitle,
    Title,
    Body,
}

impl Placeholder {
    fn ph_xml(self) -> &'static str {
        match self {
            Placeholder::CenterTitle => r#"<p:ph type="ctrTitle"/>"#,
            Placeholder::Subtitle => r#"<p:ph type="subTitle" idx="1"/>"#,
            Placeholder::Title => r#"<p:ph type="title"/>"#,
            Placeholder::Body => r#"<p:ph idx="1"/>"#,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Placeholder::CenterTitle | Placeholder::Title => "Title",
            Placeholder::Subtitle => "Subtitle",
            Placeholder::Body => "Content",
        }
    }

    fn body_pr(self) -> &'static str {
        match self {
            Placeholder::CenterTitle => r#"<a:bodyPr anchor="b"><a:normAutofit/></a:bodyPr>"#,
            Placeholder::Title => r#"<a:bodyPr anchor="ctr"><a:normAutofit/></a:bodyPr>"#,
            Placeholder::Subtitle | Placeholder::Body => {
                r#"<a:bodyPr anchor="t"><a:normAutofit/></a:bodyPr>"#
            }
        }
    }

    fn centered(self) -> bool {
        matches!(self, Placeholder::CenterTitle | Placeholder::Subtitle)
    }

    /// Font size in hundredths of a point.
    fn font_size(self) -> u32 {
        match self {
            Placeholder::CenterTitle => 5400,
            Placeholder::Title => 4000,
            Placeholder::Subtitle => 2800,
            Placeholder::Body => 2400,
        }
    }
}

/// Escapes XML metacharacters and drops characters XML 1.0 cannot carry.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

/// Text body paragraphs: one `<a:p>` per line of `text`.
fn paragraphs_xml(text: &str, placeholder: Placeholder) -> String {
    let align = if placeholder.centered() {
        r#"<a:pPr algn="ctr"/>"#
    } else {
        ""
    };
    let mut out = String::new();
    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            out.push_str(&format!(
                r#"<a:p>{}<a:endParaRPr lang="{}" sz="{}"/></a:p>"#,
                align,
                TEXT_LANG,
                placeholder.font_size()
            ));
        } else {
            out.push_str(&format!(
                r#"<a:p>{}<a:r><a:rPr lang="{}" sz="{}" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                align,
                TEXT_LANG,
                placeholder.font_size(),
                escape_xml(line)
            ));
        }
    }
    out
}

fn shape_xml(id: u32, placeholder: Placeholder, frame: Frame, text: &str) -> String {
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name} {id}"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody>{body_pr}<a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        ),
        id = id,
        name = placeholder.name(),
        ph = placeholder.ph_xml(),
        x = frame.x,
        y = frame.y,
        cx = frame.cx,
        cy = frame.cy,
        body_pr = placeholder.body_pr(),
        paragraphs = paragraphs_xml(text, placeholder),
    )
}

fn sp_tree(shapes: &[String]) -> String {
    format!("<p:spTree>{}{}</p:spTree>", SP_TREE_HEADER, shapes.concat())
}

fn pml_root_open(tag: &str, extra_attrs: &str) -> String {
    format!(
        r#"{}<p:{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        XML_DECL, tag, NS_A, NS_R, NS_P, extra_attrs
    )
}

fn relationships(rels: &[(String, &str, String)]) -> String {
    let mut out = format!(r#"{}<Relationships xmlns="{}">"#, XML_DECL, NS_RELS);
    for (id, rel_type, target) in rels {
        out.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        ));
    }
    out.push_str("</Relationships>");
    out
}

fn slide_shapes(slide: &Slide) -> Vec<String> {
    match slide.kind {
        SlideKind::Title => vec![
            shape_xml(2, Placeholder::CenterTitle, CENTER_TITLE_FRAME, &slide.title),
            shape_xml(3, Placeholder::Subtitle, SUBTITLE_FRAME, &slide.body),
        ],
        SlideKind::Content => vec![
            shape_xml(2, Placeholder::Title, TITLE_FRAME, &slide.title),
            shape_xml(3, Placeholder::Body, BODY_FRAME, &slide.body),
        ],
    }
}

fn slide_xml(slide: &Slide) -> String {
    format!(
        "{}<p:cSld>{}</p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>",
        pml_root_open("sld", ""),
        sp_tree(&slide_shapes(slide))
    )
}

fn slide_rels(slide: &Slide) -> String {
    let layout = match slide.kind {
        SlideKind::Title => "../slideLayouts/slideLayout1.xml",
        SlideKind::Content => "../slideLayouts/slideLayout2.xml",
    };
    relationships(&[("rId1".to_string(), REL_SLIDE_LAYOUT, layout.to_string())])
}

fn slide_layout_xml(kind: SlideKind) -> String {
    let (layout_type, name, shapes) = match kind {
        SlideKind::Title => (
            "title",
            "Title Slide",
            vec![
                shape_xml(2, Placeholder::CenterTitle, CENTER_TITLE_FRAME, ""),
                shape_xml(3, Placeholder::Subtitle, SUBTITLE_FRAME, ""),
            ],
        ),
        SlideKind::Content => (
            "obj",
            "Title and Content",
            vec![
                shape_xml(2, Placeholder::Title, TITLE_FRAME, ""),
                shape_xml(3, Placeholder::Body, BODY_FRAME, ""),
            ],
        ),
    };
    format!(
        r#"{}<p:cSld name="{}">{}</p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        pml_root_open("sldLayout", &format!(r#" type="{}" preserve="1""#, layout_type)),
        name,
        sp_tree(&shapes)
    )
}

fn slide_master_xml() -> String {
    let shapes = [
        shape_xml(2, Placeholder::Title, TITLE_FRAME, ""),
        shape_xml(3, Placeholder::Body, BODY_FRAME, ""),
    ];
    format!(
        concat!(
            "{open}<p:cSld><p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg>{tree}</p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/><p:sldLayoutId id="2147483650" r:id="rId2"/></p:sldLayoutIdLst>"#,
            "{styles}</p:sldMaster>",
        ),
        open = pml_root_open("sldMaster", ""),
        tree = sp_tree(&shapes),
        styles = MASTER_TEXT_STYLES,
    )
}

fn presentation_xml(slide_count: usize) -> String {
    let mut out = pml_root_open("presentation", r#" saveSubsetFonts="1""#);
    out.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    out.push_str("<p:sldIdLst>");
    for i in 0..slide_count {
        out.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            FIRST_SLIDE_ID + i,
            i + 2
        ));
    }
    out.push_str("</p:sldIdLst>");
    out.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/>"#,
        SLIDE_WIDTH_EMU, SLIDE_HEIGHT_EMU
    ));
    out.push_str("</p:presentation>");
    out
}

fn presentation_rels(slide_count: usize) -> String {
    let mut rels = vec![(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for i in 1..=slide_count {
        rels.push((format!("rId{}", i + 1), REL_SLIDE, format!("slides/slide{}.xml", i)));
    }
    let next = slide_count + 2;
    rels.push((format!("rId{}", next), REL_PRES_PROPS, "presProps.xml".to_string()));
    rels.push((format!("rId{}", next + 1), REL_VIEW_PROPS, "viewProps.xml".to_string()));
    rels.push((format!("rId{}", next + 2), REL_THEME, "theme/theme1.xml".to_string()));
    rels.push((format!("rId{}", next + 3), REL_TABLE_STYLES, "tableStyles.xml".to_string()));
    relationships(&rels)
}

fn root_rels() -> String {
    relationships(&[
        ("rId1".to_string(), REL_OFFICE_DOCUMENT, "ppt/presentation.xml".to_string()),
        ("rId2".to_string(), REL_CORE_PROPS, "docProps/core.xml".to_string()),
        ("rId3".to_string(), REL_APP_PROPS, "docProps/app.xml".to_string()),
    ])
}

fn content_types(slide_count: usize) -> String {
    let mut out = format!(
        r#"{}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        XML_DECL
    );
    out.push_str(CONTENT_TYPES_STATIC);
    out.push_str(&format!(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="{}"/>"#,
        CT_PRESENTATION
    ));
    for i in 1..=slide_count {
        out.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}"/>"#,
            i, CT_SLIDE
        ));
    }
    out.push_str("</Types>");
    out
}

fn core_props(deck: &Deck) -> String {
    format!(
        concat!(
            "{decl}<cp:coreProperties ",
            r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title><dc:creator>deckbot</dc:creator></cp:coreProperties>",
        ),
        decl = XML_DECL,
        title = escape_xml(&deck.topic),
    )
}

fn app_props(slide_count: usize) -> String {
    format!(
        concat!(
            "{}<Properties ",
            r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>deckbot</Application><PresentationFormat>Custom</PresentationFormat>",
            "<Slides>{}</Slides></Properties>",
        ),
        XML_DECL, slide_count
    )
}

fn add_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    body: &str,
) -> Result<(), DeckError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)?;
    zip.write_all(body.as_bytes())?;
    Ok(())
}

/// Writes `deck` as a `.pptx` package into `writer` and returns the writer once the archive is
/// finalized.
pub fn write_pptx<W: Write + Seek>(deck: &Deck, writer: W) -> Result<W, DeckError> {
    let slide_count = deck.slides.len();
    let mut zip = ZipWriter::new(writer);

    add_part(&mut zip, "[Content_Types].xml", &content_types(slide_count))?;
    add_part(&mut zip, "_rels/.rels", &root_rels())?;
    add_part(&mut zip, "docProps/core.xml", &core_props(deck))?;
    add_part(&mut zip, "docProps/app.xml", &app_props(slide_count))?;
    add_part(&mut zip, "ppt/presentation.xml", &presentation_xml(slide_count))?;
    add_part(&mut zip, "ppt/_rels/presentation.xml.rels", &presentation_rels(slide_count))?;
    add_part(&mut zip, "ppt/presProps.xml", PRES_PROPS)?;
    add_part(&mut zip, "ppt/viewProps.xml", VIEW_PROPS)?;
    add_part(&mut zip, "ppt/tableStyles.xml", TABLE_STYLES)?;
    add_part(&mut zip, "ppt/theme/theme1.xml", THEME)?;
    add_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
    add_part(&mut zip, "ppt/slideMasters/_rels/slideMaster1.xml.rels", SLIDE_MASTER_RELS)?;
    add_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml(SlideKind::Title))?;
    add_part(&mut zip, "ppt/slideLayouts/_rels/slideLayout1.xml.rels", SLIDE_LAYOUT_RELS)?;
    add_part(&mut zip, "ppt/slideLayouts/slideLayout2.xml", &slide_layout_xml(SlideKind::Content))?;
    add_part(&mut zip, "ppt/slideLayouts/_rels/slideLayout2.xml.rels", SLIDE_LAYOUT_RELS)?;

    for (i, slide) in deck.slides.iter().enumerate() {
        let n = i + 1;
        add_part(&mut zip, &format!("ppt/slides/slide{}.xml", n), &slide_xml(slide))?;
        add_part(&mut zip, &format!("ppt/slides/_rels/slide{}.xml.rels", n), &slide_rels(slide))?;
    }

    debug!(topic = %deck.topic, slide_count = slide_count, "pptx package written");
    Ok(zip.finish()?)
}
