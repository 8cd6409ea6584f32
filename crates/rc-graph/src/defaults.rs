//! Built-in child table and synonym groups
//!
//! Entries gated on the host version live in [`crate::extension`].

/// Meta-settings and the concrete settings they fan out to
pub(crate) const CHILDREN: &[(&str, &[&str])] = &[
    (
        "font.smallsize",
        &[
            "tick.labelsize",
            "xtick.labelsize",
            "ytick.labelsize",
            "axes.labelsize",
            "legend.fontsize",
            "grid.labelsize",
        ],
    ),
    (
        "font.largesize",
        &[
            "abc.size",
            "figure.titlesize",
            "suptitle.size",
            "axes.titlesize",
            "title.size",
            "leftlabel.size",
            "toplabel.size",
            "rightlabel.size",
            "bottomlabel.size",
        ],
    ),
    (
        "meta.color",
        &[
            "axes.edgecolor",
            "axes.labelcolor",
            "legend.edgecolor",
            "colorbar.edgecolor",
            "tick.labelcolor",
            "hatch.color",
            "xtick.color",
            "ytick.color",
        ],
    ),
    (
        "meta.width",
        &[
            "axes.linewidth",
            "tick.width",
            "tick.linewidth",
            "xtick.major.width",
            "ytick.major.width",
            "grid.width",
            "grid.linewidth",
        ],
    ),
    ("axes.margin", &["axes.xmargin", "axes.ymargin"]),
    ("grid.color", &["gridminor.color", "grid.labelcolor"]),
    ("grid.alpha", &["gridminor.alpha"]),
    ("grid.linewidth", &["gridminor.linewidth"]),
    ("grid.linestyle", &["gridminor.linestyle"]),
    ("tick.color", &["xtick.color", "ytick.color"]),
    ("tick.dir", &["xtick.direction", "ytick.direction"]),
    ("tick.len", &["xtick.major.size", "ytick.major.size"]),
    ("tick.minor", &["xtick.minor.visible", "ytick.minor.visible"]),
    ("tick.pad", &["xtick.major.pad", "xtick.minor.pad", "ytick.major.pad", "ytick.minor.pad"]),
    ("tick.width", &["xtick.major.width", "ytick.major.width"]),
    ("tick.labelsize", &["xtick.labelsize", "ytick.labelsize"]),
];

/// Groups of interchangeable keys
pub(crate) const SYNONYMS: &[&[&str]] = &[
    &["cmap", "image.cmap", "cmap.sequential"],
    &["cmap.lut", "image.lut"],
    &["font.name", "font.family"],
    &["font.small", "font.smallsize"],
    &["font.large", "font.largesize"],
    &["formatter.limits", "axes.formatter.limits"],
    &["formatter.use_locale", "axes.formatter.use_locale"],
    &["formatter.use_mathtext", "axes.formatter.use_mathtext"],
    &["formatter.min_exponent", "axes.formatter.min_exponent"],
    &["formatter.use_offset", "axes.formatter.useoffset"],
    &["formatter.offset_threshold", "axes.formatter.offset_threshold"],
    &["grid.below", "axes.axisbelow"],
    &["grid.labelpad", "grid.pad"],
    &["grid.linewidth", "grid.width"],
    &["grid.linestyle", "grid.style"],
    &["gridminor.linewidth", "gridminor.width"],
    &["gridminor.linestyle", "gridminor.style"],
    &["label.color", "axes.labelcolor"],
    &["label.pad", "axes.labelpad"],
    &["label.size", "axes.labelsize"],
    &["label.weight", "axes.labelweight"],
    &["margin", "axes.margin"],
    &["meta.width", "meta.linewidth"],
    &["meta.color", "meta.edgecolor"],
    &["tick.labelpad", "tick.pad"],
    &["tick.labelsize", "grid.labelsize"],
    &["tick.labelcolor", "grid.labelcolor"],
    &["tick.labelweight", "grid.labelweight"],
    &["tick.linewidth", "tick.width"],
    &["title.pad", "axes.titlepad"],
    &["title.size", "axes.titlesize"],
    &["title.weight", "axes.titleweight"],
];
