use leptos::logging::log;
use leptos::prelude::*;

use crate::core::IconId;
use crate::core::SiteSettings;
use crate::core::contact::{
    self, CONFIRMATION_TITLE, ContactError, ContactFlow, FormField, FormPhase, Interest,
    is_floated,
};
use crate::ui::icon::Icon;
use crate::ui::interaction::MagneticSubmitButton;

const FIELD_CLASS: &str = "w-full bg-white border border-gray-200 px-4 rounded-lg text-foreground outline-none transition-all duration-300 hover:bg-gray-50/50 focus:border-gray-300";

/// Inquiry form with floating labels and a simulated send.
///
/// Values live only for the current visit. A valid submit disables the
/// button for the configured delay and then swaps the form for a
/// confirmation panel.
#[component]
pub fn ContactForm() -> impl IntoView {
    let delay_ms = use_context::<SiteSettings>()
        .unwrap_or_default()
        .contact_delay_ms;
    let form = RwSignal::new(contact::ContactForm::default());
    let flow = RwSignal::new(ContactFlow::new());
    let focused = RwSignal::new(None::<FormField>);
    let error = RwSignal::new(None::<ContactError>);

    let submitting = Signal::derive(move || flow.with(ContactFlow::is_submitting));
    let submitted = move || flow.with(|f| f.phase() == FormPhase::Submitted);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let snapshot = form.get_untracked();
        let started = flow.try_update(|f| f.submit(&snapshot));
        match started {
            Some(Ok(true)) => {
                error.set(None);
                log!("contact: sending inquiry ({})", snapshot.interest.as_str());
                #[cfg(not(feature = "ssr"))]
                {
                    use crate::core::contact::{ContactSink, SimulatedSink};
                    use gloo_timers::future::TimeoutFuture;

                    let sink = SimulatedSink::with_delay_ms(delay_ms);
                    leptos::task::spawn_local(async move {
                        let delay_ms = u32::try_from(sink.delay().as_millis()).unwrap_or(u32::MAX);
                        TimeoutFuture::new(delay_ms).await;
                        sink.accept(&snapshot);
                        flow.try_update(ContactFlow::complete);
                    });
                }
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => {
                log!("contact: rejected inquiry: {}", e);
                error.set(Some(e));
            }
        }

        #[cfg(feature = "ssr")]
        let _ = delay_ms;
    };

    view! {
        <Show
            when=submitted
            fallback=move || {
                view! {
                    <div class="bg-arc-charcoal/[0.02] rounded-2xl p-8 md:p-16 shadow-lg">
                        <form class="space-y-8" novalidate=true on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-8">
                                <FloatingField field=FormField::Name form=form focused=focused error=error />
                                <FloatingField field=FormField::Email input_type="email" form=form focused=focused error=error />
                            </div>
                            <div class="grid md:grid-cols-2 gap-8">
                                <FloatingField field=FormField::Company form=form focused=focused error=error />
                                <FloatingField field=FormField::Phone input_type="tel" form=form focused=focused error=error />
                            </div>
                            <InterestSelect form=form focused=focused />
                            <FloatingField field=FormField::Message multiline=true form=form focused=focused error=error />

                            <div class="pt-4">
                                <MagneticSubmitButton disabled=submitting class="w-full h-14">
                                    <Show when=move || submitting.get()>
                                        <Icon id=IconId::Loader class="w-4 h-4 animate-spin" />
                                    </Show>
                                    <span class="relative">{move || flow.with(ContactFlow::button_label)}</span>
                                    <Show when=move || !submitting.get()>
                                        <Icon id=IconId::ArrowRight class="w-[18px] h-[18px] transition-transform duration-200 group-hover:translate-x-1" />
                                    </Show>
                                </MagneticSubmitButton>
                            </div>
                        </form>
                    </div>
                }
            }
        >
            <SuccessMessage body=flow.with_untracked(ContactFlow::confirmation).unwrap_or_default() />
        </Show>
    }
}

#[component]
fn FloatingField(
    field: FormField,
    form: RwSignal<contact::ContactForm>,
    focused: RwSignal<Option<FormField>>,
    error: RwSignal<Option<ContactError>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = false)] multiline: bool,
) -> impl IntoView {
    let value = Signal::derive(move || form.with(|f| f.get(field)));
    let is_focused = move || focused.get() == Some(field);
    let message = move || {
        error
            .get()
            .filter(|e| e.field() == field)
            .map(|e| e.to_string())
    };

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
        if error.with_untracked(|e| e.as_ref().is_some_and(|e| e.field() == field)) {
            error.set(None);
        }
    };
    let on_focus = move |_: leptos::ev::FocusEvent| focused.set(Some(field));
    let on_blur = move |_: leptos::ev::FocusEvent| focused.set(None);

    let input = if multiline {
        view! {
            <textarea
                name=field.name()
                class=format!("{} min-h-32 pt-8 pb-4 resize-none", FIELD_CLASS)
                required=field.is_required()
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                name=field.name()
                class=format!("{} h-14 pt-6 pb-3", FIELD_CLASS)
                required=field.is_required()
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="relative">
            <FloatingLabel
                field=field
                floated=Signal::derive(move || is_floated(is_focused(), &value.get()))
                focused=Signal::derive(is_focused)
            />
            {input}
            <FocusBar focused=Signal::derive(is_focused) />
            {move || message().map(|text| view! { <p class="mt-2 text-sm text-red-600" role="alert">{text}</p> })}
        </div>
    }
}

#[component]
fn InterestSelect(
    form: RwSignal<contact::ContactForm>,
    focused: RwSignal<Option<FormField>>,
) -> impl IntoView {
    let field = FormField::Interest;
    let is_focused = Signal::derive(move || focused.get() == Some(field));
    let options = Interest::ALL
        .into_iter()
        .map(|interest| {
            view! {
                <option value=interest.as_str()>{interest.to_string()}</option>
            }
        })
        .collect_view();

    view! {
        <div class="relative">
            // A select always holds a value, so its label stays up
            <FloatingLabel field=field floated=Signal::derive(|| true) focused=is_focused />
            <select
                name=field.name()
                class=format!("{} h-14 pt-6 pb-3 appearance-none", FIELD_CLASS)
                prop:value=move || form.with(|f| f.interest.as_str())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(field, value));
                }
                on:focus=move |_| focused.set(Some(field))
                on:blur=move |_| focused.set(None)
            >
                {options}
            </select>
            <span class="absolute right-4 top-1/2 -translate-y-1/2 pointer-events-none text-muted-foreground">
                <Icon id=IconId::ChevronDown class="w-4 h-4" />
            </span>
            <FocusBar focused=is_focused />
        </div>
    }
}

#[component]
fn FloatingLabel(field: FormField, floated: Signal<bool>, focused: Signal<bool>) -> impl IntoView {
    let style = move || {
        let (y, scale) = if floated.get() { (-28, 0.7) } else { (0, 1.0) };
        let color = if focused.get() { "#C1714B" } else { "#6B7280" };
        format!(
            "transform: translateY({}px) scale({}); color: {}; transition: transform 0.3s cubic-bezier(0.22, 1, 0.36, 1), color 0.3s ease;",
            y, scale, color
        )
    };

    view! {
        <label class="absolute left-4 top-4 z-10 origin-left pointer-events-none font-medium text-base" style=style>
            {field.to_string()}
            {field.is_required().then(|| view! { <span class="text-arc-accent ml-1">"*"</span> })}
        </label>
    }
}

#[component]
fn FocusBar(focused: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="absolute bottom-0 left-0 right-0 h-0.5 bg-arc-accent rounded-full origin-center"
            style=move || {
                format!(
                    "transform: scaleX({}); transition: transform 0.35s cubic-bezier(0.22, 1.2, 0.36, 1);",
                    if focused.get() { 1 } else { 0 }
                )
            }
        ></div>
    }
}

#[component]
fn SuccessMessage(body: &'static str) -> impl IntoView {
    view! {
        <div class="text-center py-20 success-pop" role="status">
            <div class="w-16 h-16 rounded-full bg-arc-accent/10 flex items-center justify-center mx-auto mb-6 success-badge">
                <Icon id=IconId::CheckCircle class="w-8 h-8 text-arc-accent" />
            </div>
            <h3 class="text-2xl font-bold text-foreground mb-3">{CONFIRMATION_TITLE}</h3>
            <p class="text-muted-foreground mb-2">{body}</p>
            <p class="text-sm text-muted-foreground/70">
                "In the meantime, feel free to explore our platform or schedule a demo."
            </p>
        </div>
    }
}
