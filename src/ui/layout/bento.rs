use leptos::prelude::*;

use crate::core::content::Feature;
use crate::core::reveal::stagger_delay;
use crate::ui::icon::Icon;
use crate::ui::motion::Reveal;

/// Asymmetric feature grid; cells stagger in as the grid scrolls into view
#[component]
pub fn BentoGrid(items: &'static [Feature]) -> impl IntoView {
    let cells = items
        .iter()
        .enumerate()
        .map(|(index, item)| view! { <BentoItem item=*item index=index /> })
        .collect_view();

    view! { <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-4">{cells}</div> }
}

#[component]
fn BentoItem(item: Feature, index: usize) -> impl IntoView {
    let class = format!(
        "group relative bg-white border border-arc-charcoal/10 p-6 transition-all duration-300 hover:border-arc-charcoal/20 hover:shadow-lg {}",
        item.size.grid_class()
    );
    let (badge, icon, title, body) = if item.size.is_large() {
        ("w-14 h-14", "w-7 h-7", "text-xl md:text-2xl", "text-base")
    } else {
        ("w-11 h-11", "w-5 h-5", "text-base", "text-sm")
    };

    view! {
        <Reveal class=class distance=20.0 duration=500 delay=stagger_delay(index, 100, 0)>
            <div class=format!(
                "mb-4 inline-flex items-center justify-center bg-arc-primary/5 transition-colors duration-300 group-hover:bg-arc-primary/10 {}",
                badge
            )>
                <Icon id=item.icon class=format!("text-arc-primary {}", icon) />
            </div>
            <h3 class=format!("font-heading font-semibold text-arc-primary mb-2 {}", title)>
                {item.title}
            </h3>
            <p class=format!("text-muted-foreground leading-relaxed {}", body)>{item.description}</p>
            <div class="absolute bottom-0 left-0 h-[2px] w-0 bg-arc-accent transition-all duration-300 group-hover:w-full"></div>
        </Reveal>
    }
}
