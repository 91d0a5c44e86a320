//! Root page component and shared context.

use leptos::prelude::*;
use widgets::loader::LoadSequencer;

use crate::components::loader::Loader;
use crate::components::skills_section::SkillsSection;
use crate::components::stat_counter::StatCounter;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::components::theme_toggle::ThemeToggle;
use crate::util::config_block::load_site_config;
use crate::util::page_load::start_sequence;

#[derive(Clone, Copy)]
struct Stat {
    target: u64,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { target: 40, label: "Projects Delivered" },
    Stat { target: 2500, label: "Deployments Automated" },
    Stat { target: 1_200_000, label: "Requests Monitored Daily" },
];

const MINOR_SKILLS: &[&str] = &["Bash", "Nginx", "Ansible", "Prometheus", "Grafana", "Helm", "Vault", "Jenkins"];

/// Root component.
///
/// Provides the site configuration and the page-wide load sequencer, then arms
/// the load sequence once the page is mounted.
#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let seq = RwSignal::new(LoadSequencer::<usize>::from_config(&config));
    provide_context(config.clone());
    provide_context(seq);

    Effect::new(move || start_sequence(seq, config.clone()));

    view! {
        <Loader/>
        <header class="site-header">
            <ThemeToggle/>
        </header>
        <main>
            <section class="stats">
                {STATS
                    .iter()
                    .map(|stat| view! { <StatCounter target=stat.target label=stat.label/> })
                    .collect_view()}
            </section>
            <section class="skills">
                <h2>"Skills"</h2>
                <SkillsSection>
                    <ul class="minor-skills">
                        {MINOR_SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                    </ul>
                </SkillsSection>
            </section>
            <TestimonialCarousel/>
        </main>
    }
}
