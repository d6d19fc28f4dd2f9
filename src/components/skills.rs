use yew::prelude::*;

use crate::content::SkillGroup;

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub groups: Vec<SkillGroup>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section class="page-section skills-section">
            <div class="skills-grid">
                { for props.groups.iter().map(|group| html! {
                    <div key={group.label.clone()} class="skill-group">
                        <p class="mono-label accent">{&group.label}</p>
                        <div class="skill-items">
                            { for group.items.iter().map(|item| html! {
                                <span key={item.clone()}>{item}</span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
