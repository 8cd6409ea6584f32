//! Settings defined by the library itself

use serde_json::json;

use crate::option::RcOption;
use crate::validate::{self, CmapKind, LocMode};

pub(crate) fn library_options() -> Vec<RcOption> {
    vec![
        RcOption::new(
            "style",
            json!(null),
            validate::style(),
            "The default style name or stylesheet filename. This can be a name listed in `matplotlib.style.available`, a name listed in the `use_style` table, or a valid filename with settings adhering to `matplotlibrc` syntax. Use `None` to revert to the initial style settings after importing the library or `'default'` to revert to the default matplotlib settings without the library overrides.",
        ),
        RcOption::new(
            "abc",
            json!(false),
            validate::abc(),
            "If `False` then a-b-c labels are disabled. If `True` the default label style `a` is used. If string this indicates the style and must contain the character `a` or `A`, for example `'a.'` or `'(A)'`.",
        ),
        RcOption::new(
            "abc.border",
            json!(true),
            validate::boolean(),
            "Whether to draw a white border around a-b-c labels when `abc.loc` is inside the axes.",
        ),
        RcOption::new(
            "abc.borderwidth",
            json!(1.5),
            validate::points(),
            "Width of the white border around a-b-c labels.",
        ),
        RcOption::new(
            "abc.bbox",
            json!(false),
            validate::boolean(),
            "Whether to draw semi-transparent bounding boxes around a-b-c labels when `abc.loc` is inside the axes.",
        ),
        RcOption::new(
            "abc.bboxcolor",
            json!("white"),
            validate::color(),
            "a-b-c label bounding box color.",
        ),
        RcOption::new(
            "abc.bboxstyle",
            json!("square"),
            validate::boxstyle(),
            "a-b-c label bounding box style.",
        ),
        RcOption::new(
            "abc.bboxalpha",
            json!(0.5),
            validate::float(),
            "a-b-c label bounding box opacity.",
        ),
        RcOption::new(
            "abc.bboxpad",
            json!(null),
            validate::or_none(validate::points()),
            "Padding for the a-b-c label bounding box. By default this is scaled to make the box flush against the subplot edge. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "abc.color",
            json!("black"),
            validate::color(),
            "a-b-c label color.",
        ),
        RcOption::new(
            "abc.loc",
            json!("left"),
            validate::loc(LocMode::Text),
            "a-b-c label position. For options see the location table.",
        ),
        RcOption::new(
            "abc.size",
            json!("med-large"),
            validate::fontsize(),
            "a-b-c label font size. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "abc.titlepad",
            json!(4.0),
            validate::points(),
            "Padding separating the title and a-b-c label when in the same location. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "abc.weight",
            json!("bold"),
            validate::fontweight(),
            "a-b-c label font weight.",
        ),
        RcOption::new(
            "autoformat",
            json!(true),
            validate::boolean(),
            "Whether to automatically apply labels from `pandas.Series`, `pandas.DataFrame`, and `xarray.DataArray` objects passed to plotting functions. See also `unitformat`.",
        ),
        RcOption::new(
            "axes.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity of the background axes patch.",
        ),
        RcOption::new(
            "axes.inbounds",
            json!(true),
            validate::boolean(),
            "Whether to exclude out-of-bounds data when determining the default *y* (*x*) axis limits and the *x* (*y*) axis limits have been locked.",
        ),
        RcOption::new(
            "axes.margin",
            json!(0.05),
            validate::float(),
            "The fractional *x* and *y* axis margins when limits are unset.",
        ),
        RcOption::new(
            "borders",
            json!(false),
            validate::boolean(),
            "Toggles country border lines on and off.",
        ),
        RcOption::new(
            "borders.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for country border lines.",
        ),
        RcOption::new(
            "borders.color",
            json!("black"),
            validate::color(),
            "Line color for country border lines.",
        ),
        RcOption::new(
            "borders.linewidth",
            json!(0.6),
            validate::points(),
            "Line width for country border lines.",
        ),
        RcOption::new(
            "borders.zorder",
            json!(2),
            validate::float(),
            "Z-order for country border lines.",
        ),
        RcOption::new(
            "bottomlabel.color",
            json!("black"),
            validate::color(),
            "Font color for column labels on the bottom of the figure.",
        ),
        RcOption::new(
            "bottomlabel.pad",
            json!(5.0),
            validate::points(),
            "Padding between axes content and column labels on the bottom of the figure. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "bottomlabel.rotation",
            json!("horizontal"),
            validate::rotation(),
            "Rotation for column labels at the bottom of the figure. Must be 'vertical', 'horizontal', or a float indicating degrees.",
        ),
        RcOption::new(
            "bottomlabel.size",
            json!("med-large"),
            validate::fontsize(),
            "Font size for column labels on the bottom of the figure. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "bottomlabel.weight",
            json!("bold"),
            validate::fontweight(),
            "Font weight for column labels on the bottom of the figure.",
        ),
        RcOption::new(
            "coast",
            json!(false),
            validate::boolean(),
            "Toggles coastline lines on and off.",
        ),
        RcOption::new(
            "coast.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for coast lines",
        ),
        RcOption::new(
            "coast.color",
            json!("black"),
            validate::color(),
            "Line color for coast lines.",
        ),
        RcOption::new(
            "coast.linewidth",
            json!(0.6),
            validate::points(),
            "Line width for coast lines.",
        ),
        RcOption::new(
            "coast.zorder",
            json!(2),
            validate::float(),
            "Z-order for coast lines.",
        ),
        RcOption::new(
            "colorbar.edgecolor",
            json!("black"),
            validate::color(),
            "Color for the inset colorbar frame edge.",
        ),
        RcOption::new(
            "colorbar.extend",
            json!(1.3),
            validate::ems(),
            "Length of rectangular or triangular \"extensions\" for panel colorbars. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "colorbar.fancybox",
            json!(false),
            validate::boolean(),
            "Whether to use a \"fancy\" round bounding box for inset colorbar frames.",
        ),
        RcOption::new(
            "colorbar.framealpha",
            json!(0.8),
            validate::float(),
            "Opacity for inset colorbar frames.",
        ),
        RcOption::new(
            "colorbar.facecolor",
            json!("white"),
            validate::color(),
            "Color for the inset colorbar frame.",
        ),
        RcOption::new(
            "colorbar.frameon",
            json!(true),
            validate::boolean(),
            "Whether to draw a frame behind inset colorbars.",
        ),
        RcOption::new(
            "colorbar.grid",
            json!(false),
            validate::boolean(),
            "Whether to draw borders between each level of the colorbar.",
        ),
        RcOption::new(
            "colorbar.insetextend",
            json!(0.9),
            validate::ems(),
            "Length of rectangular or triangular \"extensions\" for inset colorbars. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "colorbar.insetlength",
            json!(8),
            validate::ems(),
            "Length of inset colorbars. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "colorbar.insetpad",
            json!(0.7),
            validate::ems(),
            "Padding between axes edge and inset colorbars. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "colorbar.insetwidth",
            json!(1.2),
            validate::ems(),
            "Width of inset colorbars. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "colorbar.length",
            json!(1),
            validate::ems(),
            "Length of outer colorbars.",
        ),
        RcOption::new(
            "colorbar.loc",
            json!("right"),
            validate::loc(LocMode::Colorbar),
            "Inset colorbar location. For options see the location table.",
        ),
        RcOption::new(
            "colorbar.width",
            json!(0.2),
            validate::inches(),
            "Width of outer colorbars. Interpreted by `units`. Numeric units are inches.",
        ),
        RcOption::new(
            "colorbar.rasterized",
            json!(false),
            validate::boolean(),
            "Whether to use rasterization for colorbar solids.",
        ),
        RcOption::new(
            "colorbar.shadow",
            json!(false),
            validate::boolean(),
            "Whether to add a shadow underneath inset colorbar frames.",
        ),
        RcOption::new(
            "cycle",
            json!("colorblind"),
            validate::cmap(CmapKind::Discrete),
            "Name of the color cycle assigned to `axes.prop_cycle`.",
        ),
        RcOption::new(
            "cmap",
            json!("Fire"),
            validate::cmap(CmapKind::Continuous),
            "Alias for `cmap.sequential` and `image.cmap`.",
        ),
        RcOption::new(
            "cmap.autodiverging",
            json!(true),
            validate::boolean(),
            "Whether to automatically apply a diverging colormap and normalizer based on the data.",
        ),
        RcOption::new(
            "cmap.qualitative",
            json!("colorblind10"),
            validate::cmap(CmapKind::Discrete),
            "Default colormap for qualitative datasets.",
        ),
        RcOption::new(
            "cmap.cyclic",
            json!("twilight"),
            validate::cmap(CmapKind::Continuous),
            "Default colormap for cyclic datasets.",
        ),
        RcOption::new(
            "cmap.discrete",
            json!(null),
            validate::or_none(validate::boolean()),
            "If `True`, `DiscreteNorm` is used for every colormap plot. If `False`, it is never used. If `None`, it is used for all plot types except `imshow`, `matshow`, `spy`, `hexbin`, and `hist2d`.",
        ),
        RcOption::new(
            "cmap.diverging",
            json!("BuRd"),
            validate::cmap(CmapKind::Continuous),
            "Default colormap for diverging datasets.",
        ),
        RcOption::new(
            "cmap.inbounds",
            json!(true),
            validate::boolean(),
            "If `True` and the *x* and *y* axis limits are fixed, only in-bounds data is considered when determining the default colormap `vmin` and `vmax`.",
        ),
        RcOption::new(
            "cmap.levels",
            json!(11),
            validate::integer(),
            "Default number of `DiscreteNorm` levels for plotting commands that use colormaps.",
        ),
        RcOption::new(
            "cmap.listedthresh",
            json!(64),
            validate::integer(),
            "Native `ListedColormap`\\ s with more colors than this are converted to `ContinuousColormap` rather than `DiscreteColormap`. This helps translate continuous colormaps from external projects.",
        ),
        RcOption::new(
            "cmap.lut",
            json!(256),
            validate::integer(),
            "Number of colors in the colormap lookup table. Alias for `image.lut`.",
        ),
        RcOption::new(
            "cmap.robust",
            json!(false),
            validate::boolean(),
            "If `True`, the default colormap `vmin` and `vmax` are chosen using the 2nd to 98th percentiles rather than the minimum and maximum.",
        ),
        RcOption::new(
            "cmap.sequential",
            json!("Fire"),
            validate::cmap(CmapKind::Continuous),
            "Default colormap for sequential datasets. Alias for `image.cmap`.",
        ),
        RcOption::new(
            "edgefix",
            json!(true),
            validate::boolean(),
            "Whether to fix issues with \"white lines\" appearing between patches in saved vector graphics and with vector graphic backends. Applies to colorbar levels and bar, area, pcolor, and contour plots.",
        ),
        RcOption::new(
            "font.name",
            json!("sans-serif"),
            validate::fontname(),
            "Alias for `font.family`.",
        ),
        RcOption::new(
            "font.small",
            json!("medium"),
            validate::fontsize(),
            "Alias for `font.smallsize`.",
        ),
        RcOption::new(
            "font.smallsize",
            json!("medium"),
            validate::fontsize(),
            "Meta setting that changes the label-like sizes `axes.labelsize`, `legend.fontsize`, `tick.labelsize`, and `grid.labelsize`. Default is `'medium'` (equivalent to `font.size`). Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "font.large",
            json!("med-large"),
            validate::fontsize(),
            "Alias for `font.largesize`.",
        ),
        RcOption::new(
            "font.largesize",
            json!("med-large"),
            validate::fontsize(),
            "Meta setting that changes the title-like sizes `abc.size`, `title.size`, `suptitle.size`, `leftlabel.size`, `rightlabel.size`, etc. Default is `'med-large'` (i.e. 1.1 times `font.size`). Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "formatter.timerotation",
            json!("vertical"),
            validate::rotation(),
            "Rotation for *x* axis datetime tick labels. Must be 'vertical', 'horizontal', or a float indicating degrees.",
        ),
        RcOption::new(
            "formatter.zerotrim",
            json!(true),
            validate::boolean(),
            "Whether to trim trailing decimal zeros on tick labels.",
        ),
        RcOption::new(
            "formatter.limits",
            json!([-5, 6]),
            validate::int_pair(),
            "Alias for `axes.formatter.limits`.",
        ),
        RcOption::new(
            "formatter.min_exponent",
            json!(0),
            validate::integer(),
            "Alias for `axes.formatter.min_exponent`.",
        ),
        RcOption::new(
            "formatter.offset_threshold",
            json!(4),
            validate::integer(),
            "Alias for `axes.formatter.offset_threshold`.",
        ),
        RcOption::new(
            "formatter.use_locale",
            json!(false),
            validate::boolean(),
            "Alias for `axes.formatter.use_locale`.",
        ),
        RcOption::new(
            "formatter.use_mathtext",
            json!(false),
            validate::boolean(),
            "Alias for `axes.formatter.use_mathtext`.",
        ),
        RcOption::new(
            "formatter.use_offset",
            json!(true),
            validate::boolean(),
            "Alias for `axes.formatter.useOffset`.",
        ),
        RcOption::new(
            "geo.backend",
            json!("cartopy"),
            validate::belongs([json!("cartopy"), json!("basemap")]),
            "The backend used for `GeoAxes`. Must be either 'cartopy' or 'basemap'.",
        ),
        RcOption::new(
            "geo.extent",
            json!("globe"),
            validate::belongs([json!("globe"), json!("auto")]),
            "If `'globe'`, the extent of cartopy `GeoAxes` is always global. If `'auto'`, the extent is automatically adjusted based on plotted content. Default is `'globe'`.",
        ),
        RcOption::new(
            "geo.round",
            json!(true),
            validate::boolean(),
            "If `True` (the default), polar `GeoAxes` like `'npstere'` and `'spstere'` are bounded with circles rather than squares.",
        ),
        RcOption::new(
            "grid",
            json!(true),
            validate::boolean(),
            "Toggle major gridlines on and off.",
        ),
        RcOption::new(
            "grid.below",
            json!("line"),
            validate::belongs([json!(false), json!("line"), json!(true)]),
            "Alias for `axes.axisbelow`. If `True`, draw gridlines below everything. If `True`, draw them above everything. If `'line'`, draw them above patches but below lines and markers.",
        ),
        RcOption::new(
            "grid.checkoverlap",
            json!(true),
            validate::boolean(),
            "Whether to have cartopy automatically check for and remove overlapping `GeoAxes` gridline labels.",
        ),
        RcOption::new(
            "grid.dmslabels",
            json!(true),
            validate::boolean(),
            "Whether to use degrees-minutes-seconds rather than decimals for cartopy `GeoAxes` gridlines.",
        ),
        RcOption::new(
            "grid.geolabels",
            json!(true),
            validate::boolean(),
            "Whether to include the `'geo'` spine in cartopy >= 0.20 when otherwise toggling left, right, bottom, or top `GeoAxes` gridline labels.",
        ),
        RcOption::new(
            "grid.inlinelabels",
            json!(false),
            validate::boolean(),
            "Whether to add inline labels for cartopy `GeoAxes` gridlines.",
        ),
        RcOption::new(
            "grid.labels",
            json!(false),
            validate::boolean(),
            "Whether to add outer labels for `GeoAxes` gridlines.",
        ),
        RcOption::new(
            "grid.labelcolor",
            json!("black"),
            validate::color(),
            "Font color for `GeoAxes` gridline labels.",
        ),
        RcOption::new(
            "grid.labelpad",
            json!(3.0),
            validate::points(),
            "Padding between the map boundary and cartopy `GeoAxes` gridline labels. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "grid.labelsize",
            json!("medium"),
            validate::fontsize(),
            "Font size for `GeoAxes` gridline labels. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "grid.labelweight",
            json!("normal"),
            validate::fontweight(),
            "Font weight for `GeoAxes` gridline labels.",
        ),
        RcOption::new(
            "grid.nsteps",
            json!(250),
            validate::integer(),
            "Number of points used to draw cartopy `GeoAxes` gridlines.",
        ),
        RcOption::new(
            "grid.pad",
            json!(3.0),
            validate::points(),
            "Alias for `grid.labelpad`.",
        ),
        RcOption::new(
            "grid.rotatelabels",
            json!(false),
            validate::boolean(),
            "Whether to rotate cartopy `GeoAxes` gridline labels.",
        ),
        RcOption::new(
            "grid.style",
            json!("-"),
            validate::linestyle(),
            "Major gridline style. Alias for `grid.linestyle`.",
        ),
        RcOption::new(
            "grid.width",
            json!(0.6),
            validate::points(),
            "Major gridline width. Alias for `grid.linewidth`.",
        ),
        RcOption::new(
            "grid.widthratio",
            json!(0.5),
            validate::float(),
            "Ratio of minor gridline width to major gridline width.",
        ),
        RcOption::new(
            "gridminor",
            json!(false),
            validate::boolean(),
            "Toggle minor gridlines on and off.",
        ),
        RcOption::new(
            "gridminor.alpha",
            json!(0.1),
            validate::float(),
            "Minor gridline opacity.",
        ),
        RcOption::new(
            "gridminor.color",
            json!("black"),
            validate::color(),
            "Minor gridline color.",
        ),
        RcOption::new(
            "gridminor.linestyle",
            json!("-"),
            validate::linestyle(),
            "Minor gridline style.",
        ),
        RcOption::new(
            "gridminor.linewidth",
            json!(0.3),
            validate::points(),
            "Minor gridline width.",
        ),
        RcOption::new(
            "gridminor.style",
            json!("-"),
            validate::linestyle(),
            "Minor gridline style. Alias for `gridminor.linestyle`.",
        ),
        RcOption::new(
            "gridminor.width",
            json!(0.3),
            validate::points(),
            "Minor gridline width. Alias for `gridminor.linewidth`.",
        ),
        RcOption::new(
            "inlineformat",
            json!("retina"),
            validate::belongs([json!("svg"), json!("pdf"), json!("retina"), json!("png"), json!("jpeg")]),
            "The inline backend figure format. Valid formats include `'svg'`, `'pdf'`, `'retina'`, `'png'`, and `jpeg`.",
        ),
        RcOption::new(
            "innerborders",
            json!(false),
            validate::boolean(),
            "Toggles internal political border lines (e.g. states and provinces) on and off.",
        ),
        RcOption::new(
            "innerborders.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for internal political border lines",
        ),
        RcOption::new(
            "innerborders.color",
            json!("black"),
            validate::color(),
            "Line color for internal political border lines.",
        ),
        RcOption::new(
            "innerborders.linewidth",
            json!(0.6),
            validate::points(),
            "Line width for internal political border lines.",
        ),
        RcOption::new(
            "innerborders.zorder",
            json!(2),
            validate::float(),
            "Z-order for internal political border lines.",
        ),
        RcOption::new(
            "label.color",
            json!("black"),
            validate::color(),
            "Alias for `axes.labelcolor`.",
        ),
        RcOption::new(
            "label.pad",
            json!(4.0),
            validate::points(),
            "Alias for `axes.labelpad`. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "label.size",
            json!("medium"),
            validate::fontsize(),
            "Alias for `axes.labelsize`. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "label.weight",
            json!("normal"),
            validate::fontweight(),
            "Alias for `axes.labelweight`.",
        ),
        RcOption::new(
            "lakes",
            json!(false),
            validate::boolean(),
            "Toggles lake patches on and off.",
        ),
        RcOption::new(
            "lakes.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for lake patches",
        ),
        RcOption::new(
            "lakes.color",
            json!("white"),
            validate::color(),
            "Face color for lake patches.",
        ),
        RcOption::new(
            "lakes.zorder",
            json!(1),
            validate::float(),
            "Z-order for lake patches.",
        ),
        RcOption::new(
            "land",
            json!(false),
            validate::boolean(),
            "Toggles land patches on and off.",
        ),
        RcOption::new(
            "land.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for land patches",
        ),
        RcOption::new(
            "land.color",
            json!("black"),
            validate::color(),
            "Face color for land patches.",
        ),
        RcOption::new(
            "land.zorder",
            json!(1),
            validate::float(),
            "Z-order for land patches.",
        ),
        RcOption::new(
            "leftlabel.color",
            json!("black"),
            validate::color(),
            "Font color for row labels on the left-hand side.",
        ),
        RcOption::new(
            "leftlabel.pad",
            json!(5.0),
            validate::points(),
            "Padding between axes content and row labels on the left-hand side. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "leftlabel.rotation",
            json!("vertical"),
            validate::rotation(),
            "Rotation for row labels on the left-hand side. Must be 'vertical', 'horizontal', or a float indicating degrees.",
        ),
        RcOption::new(
            "leftlabel.size",
            json!("med-large"),
            validate::fontsize(),
            "Font size for row labels on the left-hand side. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "leftlabel.weight",
            json!("bold"),
            validate::fontweight(),
            "Font weight for row labels on the left-hand side.",
        ),
        RcOption::new(
            "margin",
            json!(0.05),
            validate::float(),
            "The fractional *x* and *y* axis data margins when limits are unset. Alias for `axes.margin`.",
        ),
        RcOption::new(
            "meta.edgecolor",
            json!("black"),
            validate::color(),
            "Color of axis spines, tick marks, tick labels, and labels.",
        ),
        RcOption::new(
            "meta.color",
            json!("black"),
            validate::color(),
            "Color of axis spines, tick marks, tick labels, and labels. Alias for `meta.edgecolor`.",
        ),
        RcOption::new(
            "meta.linewidth",
            json!(0.6),
            validate::points(),
            "Thickness of axis spines and major tick lines.",
        ),
        RcOption::new(
            "meta.width",
            json!(0.6),
            validate::points(),
            "Thickness of axis spines and major tick lines. Alias for `meta.linewidth`.",
        ),
        RcOption::new(
            "negcolor",
            json!("blue7"),
            validate::color(),
            "Color for negative bars and shaded areas when using `negpos=True`. See also `poscolor`.",
        ),
        RcOption::new(
            "poscolor",
            json!("red7"),
            validate::color(),
            "Color for positive bars and shaded areas when using `negpos=True`. See also `negcolor`.",
        ),
        RcOption::new(
            "ocean",
            json!(false),
            validate::boolean(),
            "Toggles ocean patches on and off.",
        ),
        RcOption::new(
            "ocean.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for ocean patches",
        ),
        RcOption::new(
            "ocean.color",
            json!("white"),
            validate::color(),
            "Face color for ocean patches.",
        ),
        RcOption::new(
            "ocean.zorder",
            json!(1),
            validate::float(),
            "Z-order for ocean patches.",
        ),
        RcOption::new(
            "reso",
            json!("lo"),
            validate::belongs([json!("lo"), json!("med"), json!("hi"), json!("x-hi"), json!("xx-hi")]),
            "Resolution for `GeoAxes` geographic features. Must be one of `'lo'`, `'med'`, `'hi'`, `'x-hi'`, or `'xx-hi'`.",
        ),
        RcOption::new(
            "rightlabel.color",
            json!("black"),
            validate::color(),
            "Font color for row labels on the right-hand side.",
        ),
        RcOption::new(
            "rightlabel.pad",
            json!(5.0),
            validate::points(),
            "Padding between axes content and row labels on the right-hand side. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "rightlabel.rotation",
            json!("vertical"),
            validate::rotation(),
            "Rotation for row labels on the right-hand side. Must be 'vertical', 'horizontal', or a float indicating degrees.",
        ),
        RcOption::new(
            "rightlabel.size",
            json!("med-large"),
            validate::fontsize(),
            "Font size for row labels on the right-hand side. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "rightlabel.weight",
            json!("bold"),
            validate::fontweight(),
            "Font weight for row labels on the right-hand side.",
        ),
        RcOption::new(
            "rivers",
            json!(false),
            validate::boolean(),
            "Toggles river lines on and off.",
        ),
        RcOption::new(
            "rivers.alpha",
            json!(null),
            validate::or_none(validate::float()),
            "Opacity for river lines.",
        ),
        RcOption::new(
            "rivers.color",
            json!("black"),
            validate::color(),
            "Line color for river lines.",
        ),
        RcOption::new(
            "rivers.linewidth",
            json!(0.6),
            validate::points(),
            "Line width for river lines.",
        ),
        RcOption::new(
            "rivers.zorder",
            json!(2),
            validate::float(),
            "Z-order for river lines.",
        ),
        RcOption::new(
            "subplots.align",
            json!(false),
            validate::boolean(),
            "Whether to align axis labels during draw. See aligning labels.",
        ),
        RcOption::new(
            "subplots.equalspace",
            json!(false),
            validate::boolean(),
            "Whether to make the tight layout algorithm assign the same space for every row and the same space for every column.",
        ),
        RcOption::new(
            "subplots.groupspace",
            json!(true),
            validate::boolean(),
            "Whether to make the tight layout algorithm consider space between only adjacent subplot \"groups\" rather than every subplot in the row or column.",
        ),
        RcOption::new(
            "subplots.innerpad",
            json!(1),
            validate::ems(),
            "Padding between adjacent subplots. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "subplots.outerpad",
            json!(0.5),
            validate::ems(),
            "Padding around figure edge. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "subplots.panelpad",
            json!(0.5),
            validate::ems(),
            "Padding between subplots and panels, and between stacked panels. Interpreted by `units`. Numeric units are em-widths.",
        ),
        RcOption::new(
            "subplots.panelwidth",
            json!(0.5),
            validate::inches(),
            "Width of side panels. Interpreted by `units`. Numeric units are inches.",
        ),
        RcOption::new(
            "subplots.refwidth",
            json!(2.5),
            validate::inches(),
            "Default width of the reference subplot. Interpreted by `units`. Numeric units are inches.",
        ),
        RcOption::new(
            "subplots.share",
            json!(true),
            validate::belongs([json!(0), json!(1), json!(2), json!(3), json!(4), json!(false), json!("labels"), json!("limits"), json!(true), json!("all")]),
            "The axis sharing level, one of `0`, `1`, `2`, or `3`, or the more intuitive aliases `False`, `'labels'`, `'limits'`, or `True`. See `Figure` for details.",
        ),
        RcOption::new(
            "subplots.span",
            json!(true),
            validate::boolean(),
            "Toggles spanning axis labels. See `subplots` for details.",
        ),
        RcOption::new(
            "subplots.tight",
            json!(true),
            validate::boolean(),
            "Whether to auto-adjust the subplot spaces and figure margins.",
        ),
        RcOption::new(
            "suptitle.color",
            json!("black"),
            validate::color(),
            "Figure title color.",
        ),
        RcOption::new(
            "suptitle.pad",
            json!(5.0),
            validate::points(),
            "Padding between axes content and the figure super title. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "suptitle.size",
            json!("med-large"),
            validate::fontsize(),
            "Figure title font size. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "suptitle.weight",
            json!("bold"),
            validate::fontweight(),
            "Figure title font weight.",
        ),
        RcOption::new(
            "tick.color",
            json!("black"),
            validate::color(),
            "Major and minor tick color.",
        ),
        RcOption::new(
            "tick.dir",
            json!("out"),
            validate::belongs([json!("in"), json!("out"), json!("inout")]),
            "Major and minor tick direction. Must be one of `'out'`, `'in'`, or `'inout'`.",
        ),
        RcOption::new(
            "tick.labelcolor",
            json!("black"),
            validate::color(),
            "Axis tick label color.",
        ),
        RcOption::new(
            "tick.labelpad",
            json!(2.0),
            validate::points(),
            "Padding between ticks and tick labels. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "tick.labelsize",
            json!("medium"),
            validate::fontsize(),
            "Axis tick label font size. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "tick.labelweight",
            json!("normal"),
            validate::fontweight(),
            "Axis tick label font weight.",
        ),
        RcOption::new(
            "tick.len",
            json!(4.0),
            validate::points(),
            "Length of major ticks in points.",
        ),
        RcOption::new(
            "tick.lenratio",
            json!(0.5),
            validate::float(),
            "Ratio of minor tickline length to major tickline length.",
        ),
        RcOption::new(
            "tick.linewidth",
            json!(0.6),
            validate::points(),
            "Major tickline width.",
        ),
        RcOption::new(
            "tick.minor",
            json!(true),
            validate::boolean(),
            "Toggles minor ticks on and off.",
        ),
        RcOption::new(
            "tick.pad",
            json!(2.0),
            validate::points(),
            "Alias for `tick.labelpad`.",
        ),
        RcOption::new(
            "tick.width",
            json!(0.6),
            validate::points(),
            "Major tickline width. Alias for `tick.linewidth`.",
        ),
        RcOption::new(
            "tick.widthratio",
            json!(0.8),
            validate::float(),
            "Ratio of minor tickline width to major tickline width.",
        ),
        RcOption::new(
            "title.above",
            json!(true),
            validate::belongs([json!(false), json!(true), json!("panels")]),
            "Whether to move outer titles and a-b-c labels above panels, colorbars, or legends that are above the axes. If the string 'panels' then text is only redirected above axes panels. Otherwise should be boolean.",
        ),
        RcOption::new(
            "title.border",
            json!(true),
            validate::boolean(),
            "Whether to draw a white border around titles when `title.loc` is inside the axes.",
        ),
        RcOption::new(
            "title.borderwidth",
            json!(1.5),
            validate::points(),
            "Width of the border around titles.",
        ),
        RcOption::new(
            "title.bbox",
            json!(false),
            validate::boolean(),
            "Whether to draw semi-transparent bounding boxes around titles when `title.loc` is inside the axes.",
        ),
        RcOption::new(
            "title.bboxcolor",
            json!("white"),
            validate::color(),
            "Axes title bounding box color.",
        ),
        RcOption::new(
            "title.bboxstyle",
            json!("square"),
            validate::boxstyle(),
            "Axes title bounding box style.",
        ),
        RcOption::new(
            "title.bboxalpha",
            json!(0.5),
            validate::float(),
            "Axes title bounding box opacity.",
        ),
        RcOption::new(
            "title.bboxpad",
            json!(null),
            validate::or_none(validate::points()),
            "Padding for the title bounding box. By default this is scaled to make the box flush against the axes edge. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "title.color",
            json!("black"),
            validate::color(),
            "Axes title color. Alias for `axes.titlecolor`.",
        ),
        RcOption::new(
            "title.loc",
            json!("center"),
            validate::loc(LocMode::Text),
            "Title position. For options see the location table.",
        ),
        RcOption::new(
            "title.pad",
            json!(5.0),
            validate::points(),
            "Padding between the axes edge and the inner and outer titles and a-b-c labels. Alias for `axes.titlepad`. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "title.size",
            json!("med-large"),
            validate::fontsize(),
            "Axes title font size. Alias for `axes.titlesize`. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "title.weight",
            json!("normal"),
            validate::fontweight(),
            "Axes title font weight. Alias for `axes.titleweight`.",
        ),
        RcOption::new(
            "toplabel.color",
            json!("black"),
            validate::color(),
            "Font color for column labels on the top of the figure.",
        ),
        RcOption::new(
            "toplabel.pad",
            json!(5.0),
            validate::points(),
            "Padding between axes content and column labels on the top of the figure. Interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "toplabel.rotation",
            json!("horizontal"),
            validate::rotation(),
            "Rotation for column labels at the top of the figure. Must be 'vertical', 'horizontal', or a float indicating degrees.",
        ),
        RcOption::new(
            "toplabel.size",
            json!("med-large"),
            validate::fontsize(),
            "Font size for column labels on the top of the figure. Must be a relative font size or unit string interpreted by `units`. Numeric units are points.",
        ),
        RcOption::new(
            "toplabel.weight",
            json!("bold"),
            validate::fontweight(),
            "Font weight for column labels on the top of the figure.",
        ),
        RcOption::new(
            "unitformat",
            json!("L"),
            validate::string(),
            "The format string used to format `pint.Quantity` default unit labels using `format(units, unitformat)`. See also `autoformat`.",
        ),
    ]
}
