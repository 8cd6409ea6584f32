//! Host library settings overridden or relied on by the library

use serde_json::json;

use crate::option::RcOption;
use crate::validate::{self, CmapKind};

const FONTS_SERIF: &[&str] = &[
    "TeX Gyre Schola",
    "TeX Gyre Bonum",
    "TeX Gyre Termes",
    "TeX Gyre Pagella",
    "DejaVu Serif",
    "Bitstream Vera Serif",
    "Computer Modern Roman",
    "Bookman",
    "Century Schoolbook L",
    "Charter",
    "ITC Bookman",
    "New Century Schoolbook",
    "Nimbus Roman No9 L",
    "Noto Serif",
    "Palatino",
    "Source Serif Pro",
    "Times New Roman",
    "Times",
    "Utopia",
    "serif",
];

const FONTS_SANSSERIF: &[&str] = &[
    "TeX Gyre Heros",
    "DejaVu Sans",
    "Bitstream Vera Sans",
    "Computer Modern Sans Serif",
    "Arial",
    "Avenir",
    "Fira Math",
    "Fira Sans",
    "Frutiger",
    "Geneva",
    "Gill Sans",
    "Helvetica",
    "Lucid",
    "Lucida Grande",
    "Myriad Pro",
    "Noto Sans",
    "Roboto",
    "Source Sans Pro",
    "Tahoma",
    "Trebuchet MS",
    "Ubuntu",
    "Univers",
    "Verdana",
    "sans-serif",
];

const FONTS_CURSIVE: &[&str] = &[
    "TeX Gyre Chorus",
    "Apple Chancery",
    "Felipa",
    "Sand",
    "Script MT",
    "Textile",
    "Zapf Chancery",
    "cursive",
];

const FONTS_FANTASY: &[&str] = &[
    "TeX Gyre Adventor",
    "Avant Garde",
    "Charcoal",
    "Chicago",
    "Comic Sans MS",
    "Futura",
    "Humor Sans",
    "Impact",
    "Optima",
    "Western",
    "xkcd",
    "fantasy",
];

const FONTS_MONOSPACE: &[&str] = &[
    "TeX Gyre Cursor",
    "DejaVu Sans Mono",
    "Bitstream Vera Sans Mono",
    "Computer Modern Typewriter",
    "Andale Mono",
    "Courier New",
    "Courier",
    "Fixed",
    "Nimbus Mono L",
    "Terminal",
    "monospace",
];

/// Host settings with their library-imposed defaults
pub(crate) fn host_options() -> Vec<RcOption> {
    let mut options = overrides();
    options.extend(referenced());
    options
}

fn overrides() -> Vec<RcOption> {
    vec![
        RcOption::new(
            "axes.axisbelow",
            json!("line"),
            validate::belongs([json!(false), json!("line"), json!(true)]),
            "",
        ),
        RcOption::new(
            "axes.formatter.use_mathtext",
            json!(false),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "axes.grid",
            json!(true),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "axes.grid.which",
            json!("major"),
            validate::belongs([json!("major"), json!("minor"), json!("both")]),
            "",
        ),
        RcOption::new(
            "axes.edgecolor",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "axes.labelcolor",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "axes.labelpad",
            json!(4.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "axes.labelsize",
            json!("medium"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "axes.labelweight",
            json!("normal"),
            validate::fontweight(),
            "",
        ),
        RcOption::new(
            "axes.linewidth",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "axes.titlepad",
            json!(5.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "axes.titlesize",
            json!("med-large"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "axes.titleweight",
            json!("normal"),
            validate::fontweight(),
            "",
        ),
        RcOption::new(
            "axes.xmargin",
            json!(0.05),
            validate::float(),
            "",
        ),
        RcOption::new(
            "axes.ymargin",
            json!(0.05),
            validate::float(),
            "",
        ),
        RcOption::new(
            "errorbar.capsize",
            json!(3.0),
            validate::float(),
            "",
        ),
        RcOption::new(
            "figure.autolayout",
            json!(false),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "figure.figsize",
            json!([4.0, 4.0]),
            validate::list_of(validate::inches(), 2),
            "",
        ),
        RcOption::new(
            "figure.dpi",
            json!(100),
            validate::float(),
            "",
        ),
        RcOption::new(
            "figure.facecolor",
            json!("#f4f4f4"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "figure.titlesize",
            json!("med-large"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "figure.titleweight",
            json!("bold"),
            validate::fontweight(),
            "",
        ),
        RcOption::new(
            "font.serif",
            json!(FONTS_SERIF),
            validate::font_list(),
            "",
        ),
        RcOption::new(
            "font.sans-serif",
            json!(FONTS_SANSSERIF),
            validate::font_list(),
            "",
        ),
        RcOption::new(
            "font.cursive",
            json!(FONTS_CURSIVE),
            validate::font_list(),
            "",
        ),
        RcOption::new(
            "font.fantasy",
            json!(FONTS_FANTASY),
            validate::font_list(),
            "",
        ),
        RcOption::new(
            "font.monospace",
            json!(FONTS_MONOSPACE),
            validate::font_list(),
            "",
        ),
        RcOption::new(
            "font.family",
            json!("sans-serif"),
            validate::fontname(),
            "",
        ),
        RcOption::new(
            "font.size",
            json!(9.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "grid.alpha",
            json!(0.1),
            validate::float(),
            "",
        ),
        RcOption::new(
            "grid.color",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "grid.linestyle",
            json!("-"),
            validate::linestyle(),
            "",
        ),
        RcOption::new(
            "grid.linewidth",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "hatch.color",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "hatch.linewidth",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "image.cmap",
            json!("Fire"),
            validate::cmap(CmapKind::Continuous),
            "",
        ),
        RcOption::new(
            "lines.linestyle",
            json!("-"),
            validate::linestyle(),
            "",
        ),
        RcOption::new(
            "lines.linewidth",
            json!(1.5),
            validate::points(),
            "",
        ),
        RcOption::new(
            "lines.markersize",
            json!(6.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "legend.borderaxespad",
            json!(0),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.borderpad",
            json!(0.5),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.columnspacing",
            json!(1.5),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.edgecolor",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "legend.facecolor",
            json!("white"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "legend.fancybox",
            json!(false),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "legend.fontsize",
            json!("medium"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "legend.framealpha",
            json!(0.8),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.handleheight",
            json!(1.0),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.handlelength",
            json!(2.0),
            validate::float(),
            "",
        ),
        RcOption::new(
            "legend.handletextpad",
            json!(0.5),
            validate::float(),
            "",
        ),
        RcOption::new(
            "mathtext.default",
            json!("it"),
            validate::belongs(["rm", "cal", "it", "tt", "sf", "bf", "default", "bb", "frak", "scr", "regular"].map(|name| json!(name))),
            "",
        ),
        RcOption::new(
            "mathtext.fontset",
            json!("custom"),
            validate::belongs(["dejavusans", "dejavuserif", "cm", "stix", "stixsans", "custom"].map(|name| json!(name))),
            "",
        ),
        RcOption::new(
            "mathtext.bf",
            json!("regular:bold"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "mathtext.cal",
            json!("cursive"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "mathtext.it",
            json!("regular:italic"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "mathtext.rm",
            json!("regular"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "mathtext.sf",
            json!("regular"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "mathtext.tt",
            json!("monospace"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "patch.facecolor",
            json!("C0"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "patch.linewidth",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "savefig.bbox",
            json!(null),
            validate::or_none(validate::belongs([json!("tight"), json!("standard")])),
            "",
        ),
        RcOption::new(
            "savefig.directory",
            json!(""),
            validate::string(),
            "",
        ),
        RcOption::new(
            "savefig.dpi",
            json!(1000),
            validate::float(),
            "",
        ),
        RcOption::new(
            "savefig.facecolor",
            json!("white"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "savefig.format",
            json!("pdf"),
            validate::string(),
            "",
        ),
        RcOption::new(
            "savefig.transparent",
            json!(false),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "xtick.color",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "xtick.direction",
            json!("out"),
            validate::belongs([json!("in"), json!("out"), json!("inout")]),
            "",
        ),
        RcOption::new(
            "xtick.labelsize",
            json!("medium"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "xtick.major.pad",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.major.size",
            json!(4.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.major.width",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.minor.pad",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.minor.size",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.minor.width",
            json!(0.48),
            validate::points(),
            "",
        ),
        RcOption::new(
            "xtick.minor.visible",
            json!(true),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "ytick.color",
            json!("black"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "ytick.direction",
            json!("out"),
            validate::belongs([json!("in"), json!("out"), json!("inout")]),
            "",
        ),
        RcOption::new(
            "ytick.labelsize",
            json!("medium"),
            validate::fontsize(),
            "",
        ),
        RcOption::new(
            "ytick.major.pad",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.major.size",
            json!(4.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.major.width",
            json!(0.6),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.minor.pad",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.minor.size",
            json!(2.0),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.minor.width",
            json!(0.48),
            validate::points(),
            "",
        ),
        RcOption::new(
            "ytick.minor.visible",
            json!(true),
            validate::boolean(),
            "",
        ),
    ]
}

/// Host settings kept at the host default but targeted by children or renames
fn referenced() -> Vec<RcOption> {
    vec![
        RcOption::new(
            "axes.facecolor",
            json!("white"),
            validate::color(),
            "",
        ),
        RcOption::new(
            "axes.formatter.limits",
            json!([-5, 6]),
            validate::int_pair(),
            "",
        ),
        RcOption::new(
            "axes.formatter.min_exponent",
            json!(0),
            validate::integer(),
            "",
        ),
        RcOption::new(
            "axes.formatter.offset_threshold",
            json!(4),
            validate::integer(),
            "",
        ),
        RcOption::new(
            "axes.formatter.use_locale",
            json!(false),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "axes.formatter.useoffset",
            json!(true),
            validate::boolean(),
            "",
        ),
        RcOption::new(
            "image.lut",
            json!(256),
            validate::integer(),
            "",
        ),
    ]
}
