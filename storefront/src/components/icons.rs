//! SVG icon components.
//!
//! Inline SVG icons drawn on a 256x256 grid in the style of
//! [Phosphor Icons](https://phosphoricons.com/) (Regular weight).

use leptos::prelude::*;

use crate::types::QuizIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `color` - Fill color (default: "currentColor")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_RIGHT size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Path data for a quiz question icon.
pub fn quiz_icon_path(icon: QuizIcon) -> &'static str {
    match icon {
        QuizIcon::Bed => ICON_BED,
        QuizIcon::Thermometer => ICON_THERMOMETER,
        QuizIcon::Moon => ICON_MOON,
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Arrow pointing right (CTAs, recommendation rows)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Check mark (comparison pros)
pub const ICON_CHECK: &str = "M229.66,77.66l-128,128a8,8,0,0,1-11.32,0l-56-56a8,8,0,0,1,11.32-11.32L96,188.69,218.34,66.34a8,8,0,0,1,11.32,11.32Z";

/// Cross (comparison considerations)
pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Bed (sleep position question)
pub const ICON_BED: &str = "M216,72H40V48a8,8,0,0,0-16,0V208a8,8,0,0,0,16,0V176H216v32a8,8,0,0,0,16,0V88A16,16,0,0,0,216,72ZM40,88h64v72H40Zm80,72V88h96v72Z";

/// Thermometer (temperature question)
pub const ICON_THERMOMETER: &str = "M212,56a28,28,0,1,0,28,28A28,28,0,0,0,212,56Zm0,40a12,12,0,1,1,12-12A12,12,0,0,1,212,96ZM136,155.08V48a40,40,0,0,0-80,0V155.08a56,56,0,1,0,80,0ZM96,232a40,40,0,0,1-23.09-72.66A8,8,0,0,0,76,152.72V48a20,20,0,0,1,40,0V152.72a8,8,0,0,0,3.09,6.62A40,40,0,0,1,96,232Zm24-40a24,24,0,1,1-32-22.62V112a8,8,0,0,1,16,0v57.38A24,24,0,0,1,120,192Z";

/// Crescent moon (sleep concern question)
pub const ICON_MOON: &str = "M233.54,142.23a8,8,0,0,0-8-2,88.08,88.08,0,0,1-109.8-109.8,8,8,0,0,0-10-10,104.84,104.84,0,0,0-52.91,37A104,104,0,0,0,136,224a103.09,103.09,0,0,0,62.52-20.88,104.84,104.84,0,0,0,37-52.91A8,8,0,0,0,233.54,142.23ZM188.9,190.34A88,88,0,0,1,65.66,67.11a89,89,0,0,1,31.4-26A106,106,0,0,0,96,56,104.11,104.11,0,0,0,200,160a106,106,0,0,0,14.92-1.06A89,89,0,0,1,188.9,190.34Z";

/// Calendar (blog dates)
pub const ICON_CALENDAR: &str = "M208,32H184V24a8,8,0,0,0-16,0v8H88V24a8,8,0,0,0-16,0v8H48A16,16,0,0,0,32,48V208a16,16,0,0,0,16,16H208a16,16,0,0,0,16-16V48A16,16,0,0,0,208,32ZM72,48v8a8,8,0,0,0,16,0V48h80v8a8,8,0,0,0,16,0V48h24V80H48V48ZM208,208H48V96H208V208Z";
