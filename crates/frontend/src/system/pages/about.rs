use leptos::prelude::*;

use crate::shared::config::APP_CONFIG;
use crate::shared::icons::icon;

struct Stat {
    value: &'static str,
    label: &'static str,
}

struct Feature {
    icon_name: &'static str,
    title: &'static str,
    detail: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "50K+", label: "Active learners" },
    Stat { value: "120+", label: "Courses" },
    Stat { value: "40+", label: "Expert mentors" },
    Stat { value: "95%", label: "Completion rate" },
];

const FEATURES: [Feature; 3] = [
    Feature {
        icon_name: "book",
        title: "Structured learning paths",
        detail: "Curated tracks take you from fundamentals to production skills \
                 without guessing what to study next.",
    },
    Feature {
        icon_name: "code",
        title: "Hands-on playground",
        detail: "Every lesson links to an in-browser playground so concepts are \
                 tried, not just read.",
    },
    Feature {
        icon_name: "user",
        title: "Mentor support",
        detail: "Industry mentors review progress and unblock you when a topic \
                 refuses to click.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="about-hero">
                <h1 class="about-hero__title">{format!("About {}", APP_CONFIG.name)}</h1>
                <p class="about-hero__tagline">{APP_CONFIG.tagline}</p>
                <p class="about-hero__description">{APP_CONFIG.description}</p>
            </section>

            <section class="about-stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <div class="stat-card__value">{stat.value}</div>
                                <div class="stat-card__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="about-features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">{icon(feature.icon_name)}</div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__detail">{feature.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="about-mission">
                <h2>"Our mission"</h2>
                <p>
                    "Education should feel like building, not memorizing. "
                    {APP_CONFIG.name}
                    " pairs short, focused lessons with a live coding environment and real \
                     projects, so every hour spent learning produces something you can show."
                </p>
                <p>
                    "The platform is built and maintained by a small team of engineers and \
                     educators who still teach weekly. If a lesson confuses our students, \
                     it gets rewritten."
                </p>
            </section>
        </div>
    }
}
