//! Filter Pills Component
//!
//! A row of mutually exclusive filter buttons, used by the project grid and
//! the blog list.

use dioxus::prelude::*;
use folio_core::content::filter_label;

#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Filter values in display order, `all` first
    pub options: Vec<String>,
    pub selected: String,
    pub on_select: EventHandler<String>,
    #[props(default = "Filter".to_string())]
    pub aria_label: String,
}

/// Horizontal row of filter buttons; the selected one carries `active`
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| "all".to_string());
///
/// rsx! {
///     FilterPills {
///         options: PROJECT_FILTERS.iter().map(|f| f.to_string()).collect(),
///         selected: filter(),
///         on_select: move |f| filter.set(f)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "filter-buttons",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let value = option.clone();
                    let is_selected = selected == *option;
                    let on_select = props.on_select;
                    let label = filter_label(option);
                    rsx! {
                        button {
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

pub fn pill_class(selected: bool) -> &'static str {
    if selected {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_pill_is_marked_active() {
        assert_eq!(pill_class(true), "filter-btn active");
        assert_eq!(pill_class(false), "filter-btn");
    }
}
