//! User-Agent Stylesheet
//!
//! [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)
//!
//! "User agents are expected to have a default style sheet that presents elements
//! of HTML documents in ways consistent with general user expectations."
//!
//! The cascade only lets these declarations fill properties the author
//! cascade left unset, whatever their specificity.

use crate::parser::{Parser, Stylesheet};
use crate::style::PropertyRegistry;

/// [WHATWG HTML § 15.3 Rendering: Suggested default style sheet](https://html.spec.whatwg.org/multipage/rendering.html#the-css-user-agent-style-sheet-and-presentational-hints)
///
/// Block-level defaults, list styles, heading sizes and the body margin.
pub const UA_CSS: &str = r"
/* [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements) */
area, base, basefont, datalist, head, link, meta, noembed,
noframes, param, rp, script, style, template, title {
    display: none;
}

/* [§ 15.3.3 Flow content](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3) */
address, article, aside, blockquote, body, center, dd, details,
dialog, dir, div, dl, dt, fieldset, figcaption, figure, footer,
form, h1, h2, h3, h4, h5, h6, header, hgroup, hr, html, legend,
listing, main, menu, nav, ol, p, plaintext, pre, section,
summary, ul, xmp {
    display: block;
}

li {
    display: list-item;
}

h1 { font-size: 2em; font-weight: bold; margin-top: 0.67em; margin-bottom: 0.67em; }
h2 { font-size: 1.5em; font-weight: bold; margin-top: 0.83em; margin-bottom: 0.83em; }
h3 { font-size: 1.17em; font-weight: bold; margin-top: 1em; margin-bottom: 1em; }
h4 { font-weight: bold; margin-top: 1.33em; margin-bottom: 1.33em; }
h5 { font-size: 0.83em; font-weight: bold; margin-top: 1.67em; margin-bottom: 1.67em; }
h6 { font-size: 0.67em; font-weight: bold; margin-top: 2.33em; margin-bottom: 2.33em; }

p, blockquote, figure, listing, plaintext, pre, xmp, dl {
    margin-top: 1em;
    margin-bottom: 1em;
}

blockquote, figure {
    margin-left: 40px;
    margin-right: 40px;
}

dd {
    margin-left: 40px;
}

/* [§ 15.3.7 Lists](https://html.spec.whatwg.org/multipage/rendering.html#lists) */
ol, ul, menu, dir {
    margin-top: 1em;
    margin-bottom: 1em;
    padding-left: 40px;
}

ul, menu, dir { list-style-type: disc; }
ol { list-style-type: decimal; }
ul ul, ol ul { list-style-type: circle; }
ul ul ul, ol ul ul { list-style-type: square; }

/* [§ 15.3.4 The page](https://html.spec.whatwg.org/multipage/rendering.html#the-page) */
body {
    margin: 8px;
}

pre, listing, plaintext, xmp {
    white-space: pre;
    font-family: monospace;
}

center {
    text-align: center;
}

/* [§ 15.3.8 Text-level semantics](https://html.spec.whatwg.org/multipage/rendering.html#text-level-semantics) */
b, strong, th {
    font-weight: bolder;
}

em, i, cite, dfn, var, address {
    font-style: italic;
}

code, kbd, samp, tt {
    font-family: monospace;
}

big { font-size: larger; }
small { font-size: smaller; }

hr {
    border: 1px inset;
    margin-top: 0.5em;
    margin-bottom: 0.5em;
}
";

/// Parse the default stylesheet.
#[must_use]
pub fn ua_stylesheet(registry: &PropertyRegistry) -> Stylesheet {
    Parser::new(UA_CSS, registry).parse_stylesheet()
}
