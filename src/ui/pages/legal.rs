//! Privacy policy and terms of service

use leptos::prelude::*;

use crate::core::content::{BRAND, CONTACT_METHODS};
use crate::core::routes::Route;
use crate::ui::motion::Reveal;
use crate::ui::pages::PageHead;

const LAST_UPDATED: &str = "January 2025";

struct Clause {
    heading: &'static str,
    body: &'static [&'static str],
}

const PRIVACY: &[Clause] = &[
    Clause {
        heading: "Information we collect",
        body: &[
            "When you contact us or request a demo we receive the details you choose to share: your name, email address, company, phone number and message.",
            "Like most websites, our servers record basic technical information such as browser type and the pages you visit.",
        ],
    },
    Clause {
        heading: "How we use it",
        body: &[
            "We use your details to respond to your inquiry, schedule demonstrations and tell you about Arc when you have asked us to.",
            "We do not sell or rent personal information to third parties.",
        ],
    },
    Clause {
        heading: "Retention",
        body: &[
            "We keep inquiry records only as long as needed to follow up with you, or as required by law.",
        ],
    },
    Clause {
        heading: "Your choices",
        body: &[
            "You can ask us to access, correct or delete the information we hold about you at any time by writing to us.",
        ],
    },
];

const TERMS: &[Clause] = &[
    Clause {
        heading: "Use of this website",
        body: &[
            "This website describes the Arc platform. You may browse it for your own evaluation of the product.",
            "You agree not to misuse the site, interfere with its operation or attempt to access it by automated means without permission.",
        ],
    },
    Clause {
        heading: "Product information",
        body: &[
            "Feature descriptions are provided for general information. Availability and pricing are confirmed in your subscription agreement.",
        ],
    },
    Clause {
        heading: "Intellectual property",
        body: &[
            "The Arc name, logo, screenshots and site content belong to Arc and may not be reused without written consent.",
        ],
    },
    Clause {
        heading: "Liability",
        body: &[
            "The site is provided as is. To the extent permitted by law, Arc is not liable for losses arising from its use.",
        ],
    },
    Clause {
        heading: "Governing law",
        body: &["These terms are governed by the laws of the State of Florida."],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageHead route=Route::Privacy />
        <LegalDocument title="Privacy Policy" clauses=PRIVACY />
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageHead route=Route::Terms />
        <LegalDocument title="Terms of Service" clauses=TERMS />
    }
}

#[component]
fn LegalDocument(title: &'static str, clauses: &'static [Clause]) -> impl IntoView {
    let email = CONTACT_METHODS
        .iter()
        .find(|m| m.label == "Email")
        .map(|m| m.value)
        .unwrap_or_default();

    let sections = clauses
        .iter()
        .map(|clause| {
            view! {
                <Reveal distance=16.0 duration=500>
                    <h2 class="text-xl font-semibold text-foreground mb-3">{clause.heading}</h2>
                    <div class="space-y-3 text-muted-foreground leading-relaxed">
                        {clause.body.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="pt-32 pb-12 bg-arc-primary">
            <div class="max-w-3xl mx-auto px-6 lg:px-8">
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-4 hero-fade-up">{title}</h1>
                <p class="text-white/60 text-sm">{format!("Last updated {}", LAST_UPDATED)}</p>
            </div>
        </section>

        <section class="py-16 lg:py-24 bg-white">
            <div class="max-w-3xl mx-auto px-6 lg:px-8 space-y-10">
                {sections}
                <Reveal distance=16.0 duration=500>
                    <h2 class="text-xl font-semibold text-foreground mb-3">"Contact"</h2>
                    <p class="text-muted-foreground leading-relaxed">
                        {format!("Questions about this page can be sent to {} at ", BRAND)}
                        <a href=format!("mailto:{}", email) class="text-arc-accent hover:underline">{email}</a>
                        "."
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
