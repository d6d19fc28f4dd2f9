use yew::prelude::*;

use crate::content::{is_external, Profile, SocialLink};
use crate::hooks::{hover_callbacks, use_hover};
use crate::style::{Phase, HERO};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
    pub links: Vec<SocialLink>,
    pub loaded: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { profile, links, loaded } = props;
    let hover = use_hover();

    let phase = if *loaded { Phase::Shown } else { Phase::Hidden };
    let rule_style = format!("height: {};", if *loaded { "80px" } else { "0" });

    let buttons = links.iter().map(|link| {
        let (onmouseenter, onmouseleave) = hover_callbacks(&hover, &link.label);
        let (color, background) = if hover.is_hovered(&link.label) {
            ("#0d0c0b", link.color.as_str())
        } else {
            (link.color.as_str(), link.background.as_str())
        };
        html! {
            <a
                key={link.label.clone()}
                href={link.href.clone()}
                target={is_external(&link.href).then_some("_blank")}
                rel="noopener noreferrer"
                class="social-link"
                style={format!(
                    "color: {}; border: 1px solid {}; background-color: {};",
                    color, link.border, background
                )}
                {onmouseenter}
                {onmouseleave}
            >
                {&link.label}
            </a>
        }
    });

    html! {
        <section class="hero">
            <div class="hero-grid"></div>
            <div class="hero-rule hero-rule-top" style={rule_style.clone()}></div>
            <div class="hero-rule hero-rule-bottom" style={rule_style}></div>

            <div class="hero-content" style={HERO.css(phase, 0)}>
                <p class="hero-tagline">{&profile.tagline}</p>
                <h1 class="hero-name">
                    {&profile.name.first}<br />
                    <span class="italic">{&profile.name.middle}</span><br />
                    {&profile.name.last}
                </h1>
                <p class="hero-summary">{&profile.summary}</p>
                <div class="social-links">
                    { for buttons }
                </div>
            </div>
        </section>
    }
}
