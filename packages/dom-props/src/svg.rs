use crate::property::properties;

/// The XLink namespace used by the `xlink:*` attributes.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// The XML namespace used by the `xml:*` attributes.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

const XLINK: &str = XLINK_NAMESPACE;
const XML: &str = XML_NAMESPACE;

// SVG presentation attributes are hyphenated in markup but camelCased as properties. Attributes that are
// camelCased in markup too (like `viewBox`) still list their literal name so the casing is preserved.
properties! {
    /// Names of the SVG properties the registry knows about.
    SVG_PROPERTIES, svg;

    accentHeight => "accent-height";
    accumulate;
    additive;
    alignmentBaseline => "alignment-baseline";
    allowReorder => "allowReorder";
    alphabetic;
    amplitude;
    arabicForm => "arabic-form";
    ascent;
    attributeName => "attributeName";
    attributeType => "attributeType";
    autoReverse => "autoReverse";
    azimuth;
    baseFrequency => "baseFrequency";
    baseProfile => "baseProfile";
    baselineShift => "baseline-shift";
    bbox;
    begin;
    bias;
    by;
    calcMode => "calcMode";
    capHeight => "cap-height";
    clip;
    clipPath => "clip-path";
    clipRule => "clip-rule";
    clipPathUnits => "clipPathUnits";
    colorInterpolation => "color-interpolation";
    colorInterpolationFilters => "color-interpolation-filters";
    colorProfile => "color-profile";
    colorRendering => "color-rendering";
    contentScriptType => "contentScriptType";
    contentStyleType => "contentStyleType";
    cursor;
    cx;
    cy;
    d;
    decelerate;
    descent;
    diffuseConstant => "diffuseConstant";
    direction;
    display;
    divisor;
    dominantBaseline => "dominant-baseline";
    dur;
    dx;
    dy;
    edgeMode => "edgeMode";
    elevation;
    enableBackground => "enable-background";
    end;
    exponent;
    externalResourcesRequired => "externalResourcesRequired";
    fill;
    fillOpacity => "fill-opacity";
    fillRule => "fill-rule";
    filter;
    filterRes => "filterRes";
    filterUnits => "filterUnits";
    floodColor => "flood-color";
    floodOpacity => "flood-opacity";
    focusable;
    fontFamily => "font-family";
    fontSize => "font-size";
    fontSizeAdjust => "font-size-adjust";
    fontStretch => "font-stretch";
    fontStyle => "font-style";
    fontVariant => "font-variant";
    fontWeight => "font-weight";
    format;
    from;
    fx;
    fy;
    g1;
    g2;
    glyphName => "glyph-name";
    glyphOrientationHorizontal => "glyph-orientation-horizontal";
    glyphOrientationVertical => "glyph-orientation-vertical";
    glyphRef => "glyphRef";
    gradientTransform => "gradientTransform";
    gradientUnits => "gradientUnits";
    hanging;
    horizAdvX => "horiz-adv-x";
    horizOriginX => "horiz-origin-x";
    ideographic;
    imageRendering => "image-rendering";
    r#in = "in";
    in2;
    intercept;
    k;
    k1;
    k2;
    k3;
    k4;
    kernelMatrix => "kernelMatrix";
    kernelUnitLength => "kernelUnitLength";
    kerning;
    keyPoints => "keyPoints";
    keySplines => "keySplines";
    keyTimes => "keyTimes";
    lengthAdjust => "lengthAdjust";
    letterSpacing => "letter-spacing";
    lightingColor => "lighting-color";
    limitingConeAngle => "limitingConeAngle";
    local;
    markerEnd => "marker-end";
    markerMid => "marker-mid";
    markerStart => "marker-start";
    markerHeight => "markerHeight";
    markerUnits => "markerUnits";
    markerWidth => "markerWidth";
    mask;
    maskContentUnits => "maskContentUnits";
    maskUnits => "maskUnits";
    mathematical;
    mode;
    numOctaves => "numOctaves";
    offset;
    opacity;
    operator;
    order;
    orient;
    orientation;
    origin;
    overflow;
    overlinePosition => "overline-position";
    overlineThickness => "overline-thickness";
    paintOrder => "paint-order";
    panose1 => "panose-1";
    pathLength => "pathLength";
    patternContentUnits => "patternContentUnits";
    patternTransform => "patternTransform";
    patternUnits => "patternUnits";
    pointerEvents => "pointer-events";
    points;
    pointsAtX => "pointsAtX";
    pointsAtY => "pointsAtY";
    pointsAtZ => "pointsAtZ";
    preserveAlpha => "preserveAlpha";
    preserveAspectRatio => "preserveAspectRatio";
    primitiveUnits => "primitiveUnits";
    r;
    radius;
    refX => "refX";
    refY => "refY";
    renderingIntent => "rendering-intent";
    repeatCount => "repeatCount";
    repeatDur => "repeatDur";
    requiredExtensions => "requiredExtensions";
    requiredFeatures => "requiredFeatures";
    restart;
    result;
    rotate;
    rx;
    ry;
    scale;
    seed;
    shapeRendering => "shape-rendering";
    slope;
    spacing;
    specularConstant => "specularConstant";
    specularExponent => "specularExponent";
    speed;
    spreadMethod => "spreadMethod";
    startOffset => "startOffset";
    stdDeviation => "stdDeviation";
    stemh;
    stemv;
    stitchTiles => "stitchTiles";
    stopColor => "stop-color";
    stopOpacity => "stop-opacity";
    strikethroughPosition => "strikethrough-position";
    strikethroughThickness => "strikethrough-thickness";
    string;
    stroke;
    strokeDasharray => "stroke-dasharray";
    strokeDashoffset => "stroke-dashoffset";
    strokeLinecap => "stroke-linecap";
    strokeLinejoin => "stroke-linejoin";
    strokeMiterlimit => "stroke-miterlimit";
    strokeOpacity => "stroke-opacity";
    strokeWidth => "stroke-width";
    surfaceScale => "surfaceScale";
    systemLanguage => "systemLanguage";
    tableValues => "tableValues";
    targetX => "targetX";
    targetY => "targetY";
    textAnchor => "text-anchor";
    textDecoration => "text-decoration";
    textRendering => "text-rendering";
    textLength => "textLength";
    to;
    transform;
    u1;
    u2;
    underlinePosition => "underline-position";
    underlineThickness => "underline-thickness";
    unicode;
    unicodeBidi => "unicode-bidi";
    unicodeRange => "unicode-range";
    unitsPerEm => "units-per-em";
    vAlphabetic => "v-alphabetic";
    vHanging => "v-hanging";
    vIdeographic => "v-ideographic";
    vMathematical => "v-mathematical";
    values;
    vectorEffect => "vector-effect";
    version;
    vertAdvY => "vert-adv-y";
    vertOriginX => "vert-origin-x";
    vertOriginY => "vert-origin-y";
    viewBox => "viewBox";
    viewTarget => "viewTarget";
    visibility;
    widths;
    wordSpacing => "word-spacing";
    writingMode => "writing-mode";
    x;
    xHeight => "x-height";
    x1;
    x2;
    xChannelSelector => "xChannelSelector";
    xlinkActuate => "xlink:actuate" in XLINK;
    xlinkArcrole => "xlink:arcrole" in XLINK;
    xlinkHref => "xlink:href" in XLINK;
    xlinkRole => "xlink:role" in XLINK;
    xlinkShow => "xlink:show" in XLINK;
    xlinkTitle => "xlink:title" in XLINK;
    xlinkType => "xlink:type" in XLINK;
    xmlBase => "xml:base" in XML;
    xmlns;
    xmlnsXlink => "xmlns:xlink";
    xmlLang => "xml:lang" in XML;
    xmlSpace => "xml:space" in XML;
    y;
    y1;
    y2;
    yChannelSelector => "yChannelSelector";
    z;
    zoomAndPan => "zoomAndPan";
}
