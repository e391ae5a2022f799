use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::IconId;
use crate::ui::icon::Icon;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonVariant {
    /// Classes for a plain link button on a light section
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-arc-accent text-arc-primary hover:bg-arc-accent-light hover:shadow-lg hover:shadow-arc-accent/25"
            }
            ButtonVariant::Secondary => "bg-arc-primary text-white hover:bg-arc-primary-light",
            ButtonVariant::Outline => {
                "border-2 border-arc-primary text-arc-primary bg-transparent hover:bg-arc-primary hover:text-white"
            }
        }
    }

    /// Classes for a magnetic button, which usually sits on the dark hero
    pub fn magnetic_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-arc-accent text-arc-primary hover:shadow-2xl hover:shadow-arc-accent/40"
            }
            ButtonVariant::Secondary => {
                "bg-arc-primary text-white hover:shadow-2xl hover:shadow-arc-primary/40"
            }
            ButtonVariant::Outline => {
                "border-2 border-white/30 text-white bg-white/5 backdrop-blur-sm hover:bg-white/10 hover:border-white/50"
            }
        }
    }
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "h-9 px-4 text-sm",
            ButtonSize::Medium => "h-11 px-6 text-sm",
            ButtonSize::Large => "h-12 px-8 text-base",
        }
    }

    /// Magnetic buttons are a step larger than plain ones
    pub fn magnetic_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "h-10 px-5 text-sm",
            ButtonSize::Medium => "h-12 px-7 text-sm",
            ButtonSize::Large => "h-14 px-9 text-base",
        }
    }

    pub fn arrow_class(&self) -> &'static str {
        match self {
            ButtonSize::Large => "w-5 h-5",
            _ => "w-4 h-4",
        }
    }
}

/// Router link styled as a button
#[component]
pub fn LinkButton(
    href: &'static str,
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    /// Trailing arrow that nudges right on hover
    #[prop(default = false)]
    show_arrow: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center font-semibold transition-all duration-300 group {} {} {}",
        variant.class(),
        size.class(),
        class
    );
    let arrow_class = format!(
        "ml-2 {} transition-transform group-hover:translate-x-1",
        size.arrow_class()
    );

    view! {
        <A href=href attr:class=classes>
            {children()}
            {show_arrow.then(|| view! { <Icon id=IconId::ArrowRight class=arrow_class /> })}
        </A>
    }
}
