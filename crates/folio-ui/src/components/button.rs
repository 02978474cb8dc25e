//! Button Components
//!
//! - Primary: filled accent, used for the main call to action
//! - Secondary: outlined, used next to a primary button
//! - Icon: round, for compact controls (theme switch, back to top)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary-btn",
            ButtonVariant::Secondary => "secondary-btn",
            ButtonVariant::Icon => "icon-btn",
        }
    }
}

/// Join a base class with optional extras
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// `button` or `submit`
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         onclick: move |_| scroll_to("contact"),
///         "Get In Touch"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
