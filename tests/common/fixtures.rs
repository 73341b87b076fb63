//! Test fixtures - reusable content constants for tests.

/// A small documented header
pub const WIDGET_H: &str = r#"/** @file widget.h */

/** A widget. */
struct Widget {
    int size;
};
"#;

/// A second header that is never the subject of a check
pub const GADGET_H: &str = "struct Gadget;\n";

/// Warning about the widget header (real issue)
pub const WIDGET_WARNING: &str =
    "{root}/include/widget.h:5: warning: Member size (variable) of struct Widget is not documented.";

/// Warning about the widget header that the built-in filter suppresses
pub const WIDGET_FALSE_POSITIVE: &str =
    "{root}/include/widget.h:3: warning: documented symbol 'Widget::resize' was not declared or defined.";

/// Warning about a header nobody asked about
pub const GADGET_WARNING: &str =
    "{root}/include/gadget.h:1: warning: Compound Gadget is not documented.";
