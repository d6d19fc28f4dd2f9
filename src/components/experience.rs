use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::ExperienceEntry;
use crate::hooks::{hover_callbacks, use_hover, use_reveal};
use crate::reveal::Threshold;
use crate::style::{EXPERIENCE_CARD, SECTION};

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub entries: Vec<ExperienceEntry>,
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    let reveal = use_reveal(Threshold::default());

    html! {
        <section ref={reveal.node.clone()} class="page-section" style={SECTION.css(reveal.phase(), 0)}>
            <SectionHeading title="Experience" />
            <div class="card-column">
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <ExperienceCard key={index} entry={entry.clone()} {index} />
                }) }
                <div class="row-rule"></div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceCardProps {
    pub entry: ExperienceEntry,
    pub index: usize,
}

#[function_component(ExperienceCard)]
pub fn experience_card(props: &ExperienceCardProps) -> Html {
    let ExperienceCardProps { entry, index } = props;
    let reveal = use_reveal(Threshold::default());
    let hover = use_hover();

    let (onmouseenter, onmouseleave) = hover_callbacks(&hover, &entry.role);
    let title_color = if hover.is_hovered(&entry.role) { "#c8b98a" } else { "#f0ede6" };

    html! {
        <div
            ref={reveal.node.clone()}
            class="card"
            style={EXPERIENCE_CARD.css(reveal.phase(), *index)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-header">
                <h3 class="card-title card-role" style={format!("color: {};", title_color)}>
                    {&entry.role}
                </h3>
                <span class="card-meta card-period">{&entry.period}</span>
            </div>

            <div class="bullet-list">
                { for entry.bullets.iter().map(|bullet| html! {
                    <div class="dash-item">
                        <span class="dash">{"\u{2014}"}</span>
                        <p class="bullet">{bullet}</p>
                    </div>
                }) }
            </div>

            <div class="chip-list">
                <span class="chip chip-upper chip-accent">{&entry.org}</span>
                <span class="chip chip-upper">{&entry.location}</span>
            </div>
        </div>
    }
}
